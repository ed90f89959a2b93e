// ABOUTME: Plain-text rendering of the lead table and the insights histogram.
// ABOUTME: Presentational only; all filtering, sorting, and bucketing happen in leadscope-core.

use std::fmt::Write;

use leadscope_core::{BucketCount, Lead};

const HEADERS: [&str; 5] = ["COMPANY", "INDUSTRY", "REGION", "REVENUE", "SCORE"];

/// Widest histogram bar, in characters.
const MAX_BAR: usize = 40;

/// Render leads as an aligned five-column table. Missing values show as a
/// dash; revenue gets thousands separators; the score carries its band label.
pub fn lead_table(leads: &[&Lead]) -> String {
    if leads.is_empty() {
        return "No leads".to_string();
    }

    let rows: Vec<[String; 5]> = leads.iter().map(|l| row_cells(l)).collect();

    let mut widths: [usize; 5] = HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    write_row(&mut out, &HEADERS.map(String::from), &widths);
    for row in &rows {
        out.push('\n');
        write_row(&mut out, row, &widths);
    }
    out
}

fn row_cells(lead: &Lead) -> [String; 5] {
    [
        text_cell(lead.company_name.as_deref()),
        text_cell(lead.industry.as_deref()),
        text_cell(lead.region.as_deref()),
        lead.revenue_estimate
            .map(format_thousands)
            .unwrap_or_else(|| "-".to_string()),
        format!("{} {}", lead.score_or_zero(), lead.band().label()),
    ]
}

fn text_cell(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

fn write_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    for (i, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        // Last column unpadded to avoid trailing spaces
        if i == cells.len() - 1 {
            out.push_str(cell);
        } else {
            write!(out, "{cell:<width$}").unwrap();
        }
    }
}

/// Render the five-bucket score distribution as a horizontal bar chart.
pub fn histogram(distribution: &[BucketCount]) -> String {
    let bar_width = MAX_BAR;
    let label_width = distribution
        .iter()
        .map(|b| b.range.len())
        .max()
        .unwrap_or(0);
    let max_count = distribution.iter().map(|b| b.count).max().unwrap_or(0);
    let total: usize = distribution.iter().map(|b| b.count).sum();

    let mut out = String::new();
    for bucket in distribution {
        let bar_len = if max_count == 0 {
            0
        } else {
            // At least one mark for a non-empty bucket
            (bucket.count * MAX_BAR).div_ceil(max_count)
        };
        writeln!(
            out,
            "{:>label_width$} | {:<bar_width$} {}",
            bucket.range,
            "#".repeat(bar_len),
            bucket.count
        )
        .unwrap();
    }
    write!(out, "{total} leads").unwrap();
    out
}

/// Group an amount into comma-separated thousands, e.g. 4500000 -> "4,500,000".
/// Non-integral amounts keep two decimal places.
fn format_thousands(amount: f64) -> String {
    let negative = amount < 0.0;
    let abs = amount.abs();
    let whole = abs.trunc() as u64;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if abs.fract() > 0.0 {
        write!(out, ".{:02}", (abs.fract() * 100.0).round() as u64).unwrap();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(name: &str, revenue: Option<f64>, score: i64) -> Lead {
        Lead {
            industry: Some("SaaS".to_string()),
            region: Some("US".to_string()),
            revenue_estimate: revenue,
            score: Some(score),
            ..Lead::new(name)
        }
    }

    #[test]
    fn empty_table_says_no_leads() {
        assert_eq!(lead_table(&[]), "No leads");
    }

    #[test]
    fn table_has_header_and_aligned_rows() {
        let a = lead("Acme Robotics", Some(4_500_000.0), 82);
        let b = lead("Globex", None, 44);

        let out = lead_table(&[&a, &b]);
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("COMPANY"));
        assert!(lines[1].contains("4,500,000"));
        assert!(lines[1].ends_with("82 hot"));
        assert!(lines[2].contains("  -  ")); // missing revenue renders as a dash
        assert!(lines[2].ends_with("44 cold"));
    }

    #[test]
    fn histogram_scales_bars_and_reports_total() {
        let distribution = vec![
            BucketCount { range: "0-19", count: 0 },
            BucketCount { range: "20-39", count: 2 },
            BucketCount { range: "40-59", count: 4 },
            BucketCount { range: "60-79", count: 0 },
            BucketCount { range: "80-100", count: 1 },
        ];

        let out = histogram(&distribution);
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[2].contains(&"#".repeat(40))); // largest bucket gets a full bar
        assert!(lines[0].contains("| "));
        assert!(!lines[0].contains('#'));
        assert_eq!(lines[5], "7 leads");
    }

    #[test]
    fn histogram_with_no_leads_draws_no_bars() {
        let distribution = vec![
            BucketCount { range: "0-19", count: 0 },
            BucketCount { range: "80-100", count: 0 },
        ];

        let out = histogram(&distribution);
        assert!(!out.contains('#'));
        assert!(out.ends_with("0 leads"));
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(950.0), "950");
        assert_eq!(format_thousands(4_500_000.0), "4,500,000");
        assert_eq!(format_thousands(1_000.0), "1,000");
        assert_eq!(format_thousands(-25_000.0), "-25,000");
        assert_eq!(format_thousands(1234.5), "1,234.50");
    }
}
