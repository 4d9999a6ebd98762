// Panel rendering: HTML table plus an SVG line chart over numeric columns

use anyhow::Result;
use plotters::prelude::*;

use crate::tabular::{LoadOutcome, TabularDocument};

const CHART_WIDTH: u32 = 640;
const CHART_HEIGHT: u32 = 320;

/// Render one document panel as an HTML fragment: a heading, then either the
/// table and chart or a no-data notice. Total for every input; chart failures
/// degrade to the no-numeric-data notice.
pub fn render_panel(title: &str, outcome: &LoadOutcome) -> String {
    let mut html = String::new();
    html.push_str("<section class=\"panel\">\n");
    html.push_str(&format!("<h3>{}</h3>\n", escape_html(title)));

    match outcome.document() {
        None => {
            html.push_str("<p class=\"notice warning\">No data uploaded</p>\n");
        }
        Some(doc) => {
            html.push_str(&table_html(doc));
            match line_chart_svg(doc) {
                Ok(Some(svg)) => {
                    html.push_str("<div class=\"chart\">\n");
                    html.push_str(&svg);
                    html.push_str("\n</div>\n");
                }
                Ok(None) => {
                    html.push_str("<p class=\"notice\">No numeric data available</p>\n");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Chart rendering failed");
                    html.push_str("<p class=\"notice\">No numeric data available</p>\n");
                }
            }
        }
    }

    html.push_str("</section>\n");
    html
}

fn table_html(doc: &TabularDocument) -> String {
    let mut html = String::from("<table>\n<thead><tr>");
    for column in &doc.columns {
        html.push_str(&format!("<th>{}</th>", escape_html(&column.name)));
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for row in 0..doc.row_count() {
        html.push_str("<tr>");
        for column in &doc.columns {
            let text = column.cells.get(row).map(|c| c.display()).unwrap_or_default();
            html.push_str(&format!("<td>{}</td>", escape_html(&text)));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>\n");
    html
}

/// Draw a line chart over the numeric columns, one series per column,
/// x = row index. Returns `None` when the document has no numeric column.
fn line_chart_svg(doc: &TabularDocument) -> Result<Option<String>> {
    let numeric = doc.numeric_columns();
    if numeric.is_empty() {
        return Ok(None);
    }

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for column in &numeric {
        for value in column.numeric_values() {
            y_min = y_min.min(value);
            y_max = y_max.max(value);
        }
    }
    if !y_min.is_finite() || !y_max.is_finite() {
        return Ok(None);
    }
    if y_min == y_max {
        y_min -= 1.0;
        y_max += 1.0;
    }

    let x_max = (doc.row_count().saturating_sub(1)).max(1) as f64;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (CHART_WIDTH, CHART_HEIGHT))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(30)
            .y_label_area_size(50)
            .build_cartesian_2d(0f64..x_max, y_min..y_max)?;

        chart.configure_mesh().draw()?;

        for (idx, column) in numeric.iter().enumerate() {
            let color = Palette99::pick(idx).to_rgba();
            let points: Vec<(f64, f64)> = column
                .cells
                .iter()
                .enumerate()
                .filter_map(|(row, cell)| match cell {
                    crate::tabular::Cell::Number(n) => Some((row as f64, *n)),
                    _ => None,
                })
                .collect();

            chart
                .draw_series(LineSeries::new(points, color.stroke_width(2)))?
                .label(column.name.clone())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 16, y)], color.stroke_width(2))
                });
        }

        chart
            .configure_series_labels()
            .border_style(&BLACK)
            .background_style(&WHITE.mix(0.8))
            .draw()?;

        root.present()?;
    }

    Ok(Some(svg))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabular::{load_document, Cell, Column};

    fn loaded(csv: &[u8]) -> LoadOutcome {
        let outcome = load_document(Some("data.csv"), csv);
        assert!(matches!(outcome, LoadOutcome::Loaded(_)));
        outcome
    }

    #[test]
    fn test_absent_panel_shows_notice() {
        let html = render_panel("Balance Sheet Data", &LoadOutcome::Absent);
        assert!(html.contains("Balance Sheet Data"));
        assert!(html.contains("No data uploaded"));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_failed_panel_presented_like_absent() {
        let html = render_panel("Cash Flow Data", &LoadOutcome::Failed("boom".to_string()));
        assert!(html.contains("No data uploaded"));
        assert!(!html.contains("boom"));
    }

    #[test]
    fn test_mixed_columns_chart_only_numeric_series() {
        let html = render_panel(
            "Profit & Loss Data",
            &loaded(b"Revenue,Region\n100,US\n120,EU\n"),
        );
        assert!(html.contains("<table>"));
        assert!(html.contains("<th>Revenue</th>"));
        // Legend carries the series names: Revenue charted, Region not.
        // The SVG backend pads text nodes with whitespace, so assert on the
        // chart region as a whole rather than exact text markup.
        let svg_start = html.find("<svg").expect("panel should contain a chart");
        let svg = &html[svg_start..];
        assert!(svg.contains("Revenue"));
        assert!(!svg.contains("Region"));
    }

    #[test]
    fn test_all_text_table_has_no_chart() {
        let html = render_panel("Notes", &loaded(b"Region,Owner\nUS,alice\nEU,bob\n"));
        assert!(html.contains("<table>"));
        assert!(!html.contains("<svg"));
        assert!(html.contains("No numeric data available"));
    }

    #[test]
    fn test_all_numeric_table_has_chart() {
        let html = render_panel("Data", &loaded(b"a,b\n1,4\n2,5\n3,6\n"));
        assert!(html.contains("<svg"));
        assert!(!html.contains("No numeric data available"));
    }

    #[test]
    fn test_empty_document_renders_without_chart() {
        let html = render_panel("Empty", &loaded(b""));
        assert!(html.contains("<table>"));
        assert!(html.contains("No numeric data available"));
    }

    #[test]
    fn test_single_row_document_renders() {
        let html = render_panel("One Row", &loaded(b"Revenue\n100\n"));
        assert!(html.contains("<svg"));
    }

    #[test]
    fn test_constant_column_renders() {
        // y_min == y_max needs a padded axis, not a panic.
        let html = render_panel("Flat", &loaded(b"Revenue\n5\n5\n5\n"));
        assert!(html.contains("<svg"));
    }

    #[test]
    fn test_cell_text_is_escaped() {
        let doc = TabularDocument {
            columns: vec![Column {
                name: "<script>".to_string(),
                cells: vec![Cell::Text("a & b".to_string())],
            }],
        };
        let html = render_panel("T", &LoadOutcome::Loaded(doc));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(!html.contains("<script>"));
    }
}
