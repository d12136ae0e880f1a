//! HTML report generation.
//!
//! A static template with the daily summary table and chart image reference
//! substituted in. Output is byte-for-byte deterministic for a given input.

use crate::aggregate::DailySummaryRow;

const TEMPLATE: &str = include_str!("report.html");
const CSS: &str = include_str!("report.css");

/// Generate the full HTML report content.
pub fn generate_html(rows: &[DailySummaryRow], chart_file: &str) -> String {
    TEMPLATE
        .replace("__CSS__", CSS)
        .replace("__TABLE__", &summary_table(rows))
        .replace("__CHART__", chart_file)
}

fn summary_table(rows: &[DailySummaryRow]) -> String {
    let mut table = String::from(
        "<table>\n\
         <thead>\n\
         <tr><th>Date</th><th>Possible Hours</th><th>Studied Hours</th><th>Completion (%)</th></tr>\n\
         </thead>\n\
         <tbody>\n",
    );
    for row in rows {
        table.push_str(&format!(
            "<tr><td>{}</td><td>{:.2}</td><td>{:.2}</td><td>{:.1}</td></tr>\n",
            row.date, row.possible_hours, row.studied_hours, row.completion
        ));
    }
    table.push_str("</tbody>\n</table>");
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<DailySummaryRow> {
        vec![
            DailySummaryRow {
                date: "2025-03-01".parse().unwrap(),
                possible_hours: 5.0,
                studied_hours: 3.0,
                completion: 60.0,
            },
            DailySummaryRow {
                date: "2025-03-02".parse().unwrap(),
                possible_hours: 5.0,
                studied_hours: 4.0,
                completion: 80.0,
            },
        ]
    }

    #[test]
    fn report_embeds_table_and_chart_reference() {
        let html = generate_html(&rows(), "study_stats.png");
        assert!(html.contains("<tr><td>2025-03-01</td><td>5.00</td><td>3.00</td><td>60.0</td></tr>"));
        assert!(html.contains("<tr><td>2025-03-02</td><td>5.00</td><td>4.00</td><td>80.0</td></tr>"));
        assert!(html.contains(r#"<img src="study_stats.png""#));
        // CSS is inlined, no placeholder left behind.
        assert!(html.contains("border-collapse"));
        assert!(!html.contains("__CSS__"));
        assert!(!html.contains("__TABLE__"));
    }

    #[test]
    fn report_generation_is_idempotent() {
        assert_eq!(
            generate_html(&rows(), "study_stats.png"),
            generate_html(&rows(), "study_stats.png")
        );
    }

    #[test]
    fn empty_rows_render_an_empty_table_body() {
        let html = generate_html(&[], "study_stats.png");
        assert!(html.contains("<tbody>\n</tbody>"));
    }
}
