//! Console report and CSV export for a projection

use std::io::Write;

use crate::error::Result;
use crate::plan::InvestmentPlan;
use crate::projection::{yearly_snapshots, FinalResult, ProjectionPoint};

/// Format a monetary value with thousands separators and two decimals
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && formatted.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, grouped, cents)
}

/// Write the human-readable breakdown of a calculation
///
/// When `yearly_breakdown` is set, a year-end table follows the totals.
pub fn present_results<W: Write>(
    plan: &InvestmentPlan,
    projection: &[ProjectionPoint],
    result: &FinalResult,
    yearly_breakdown: bool,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Investment Summary")?;
    writeln!(out, "{}", "-".repeat(40))?;
    writeln!(out, "  Duration:            {} years", plan.years)?;
    writeln!(
        out,
        "  Contribution:        {} {} ({} per year)",
        format_money(plan.contribution_amount),
        plan.frequency_label(),
        plan.periods_per_year
    )?;
    writeln!(out, "  Annual Rate:         {:.2}%", plan.annual_rate * 100.0)?;
    writeln!(out, "  Total Contributed:   {}", format_money(result.total_contributed))?;
    writeln!(out, "  Total Earnings:      {}", format_money(result.total_earnings))?;
    writeln!(out, "  Final Value:         {}", format_money(result.total_value))?;

    if yearly_breakdown {
        writeln!(out)?;
        writeln!(out, "{:>5} {:>20} {:>20} {:>20}", "Year", "Principal", "Earnings", "Value")?;
        writeln!(out, "{}", "-".repeat(68))?;
        for snapshot in yearly_snapshots(plan, projection) {
            writeln!(
                out,
                "{:>5} {:>20} {:>20} {:>20}",
                snapshot.year,
                format_money(snapshot.point.cumulative_contributions),
                format_money(snapshot.point.accrued_interest()),
                format_money(snapshot.point.cumulative_value),
            )?;
        }
    }

    Ok(())
}

/// Export every projection point as CSV
pub fn write_projection_csv<W: Write>(projection: &[ProjectionPoint], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["period", "contributions", "interest", "value"])?;

    for point in projection {
        writer.write_record([
            point.period_index.to_string(),
            format!("{:.2}", point.cumulative_contributions),
            format!("{:.2}", point.accrued_interest()),
            format!("{:.2}", point.cumulative_value),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{compute_projection, summarize};

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(999.999), "$1,000.00");
        assert_eq!(format_money(1_680_000.0), "$1,680,000.00");
        assert_eq!(format_money(123_456.789), "$123,456.79");
        assert_eq!(format_money(-2500.5), "-$2,500.50");
        assert_eq!(format_money(-0.001), "$0.00");
    }

    #[test]
    fn test_report_contains_required_figures() {
        let plan = InvestmentPlan::new(4000.0, 35, 12, 0.12);
        let projection = compute_projection(&plan).unwrap();
        let result = summarize(&projection).unwrap();

        let mut out = Vec::new();
        present_results(&plan, &projection, &result, false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("35 years"));
        assert!(text.contains("$4,000.00 monthly"));
        assert!(text.contains("12.00%"));
        assert!(text.contains("$1,680,000.00"));
        assert!(text.contains(&format_money(result.total_earnings)));
        assert!(text.contains(&format_money(result.total_value)));
        assert!(!text.contains("Year"));
    }

    #[test]
    fn test_report_yearly_table() {
        let plan = InvestmentPlan::new(1000.0, 3, 1, 0.10);
        let projection = compute_projection(&plan).unwrap();
        let result = summarize(&projection).unwrap();

        let mut out = Vec::new();
        present_results(&plan, &projection, &result, true, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let rows: Vec<&str> = text
            .lines()
            .filter(|line| line.trim_start().starts_with(|c: char| c.is_ascii_digit()))
            .collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[2].contains("$3,310.00"));
        assert!(rows[2].contains("$310.00"));
    }

    #[test]
    fn test_projection_csv() {
        let plan = InvestmentPlan::new(1000.0, 2, 1, 0.10);
        let projection = compute_projection(&plan).unwrap();

        let mut out = Vec::new();
        write_projection_csv(&projection, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "period,contributions,interest,value");
        assert_eq!(lines[1], "1,1000.00,0.00,1000.00");
        assert_eq!(lines[2], "2,2000.00,100.00,2100.00");
    }
}
