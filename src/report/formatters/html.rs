use crate::report::types::ImpactReport;

/// HTML formatter for impact reports
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Format report as standalone HTML with embedded CSS
    ///
    /// Charts are referenced by file name, so the page is expected to sit
    /// next to the exported PNGs.
    pub fn format(report: &ImpactReport) -> String {
        let mut html = String::with_capacity(4096);

        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", escape(&report.title)));
        html.push_str("<style>\n");
        html.push_str("body { font-family: system-ui, sans-serif; max-width: 1100px; margin: 40px auto; padding: 20px; line-height: 1.6; }\n");
        html.push_str("h1 { color: #2c3e50; margin-bottom: 4px; }\n");
        html.push_str("h2 { color: #34495e; border-bottom: 2px solid #ecf0f1; padding-bottom: 5px; margin-top: 30px; }\n");
        html.push_str(".subtitle { color: #6c757d; font-style: italic; }\n");
        html.push_str(".cards { display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; }\n");
        html.push_str(".card { background: #f8f9fa; border-left: 4px solid #87ceeb; padding: 15px; border-radius: 4px; }\n");
        html.push_str(".card .label { font-weight: 600; color: #34495e; }\n");
        html.push_str(".card .value { font-size: 1.6em; font-weight: bold; color: #2c3e50; }\n");
        html.push_str(".card .caption { color: #6c757d; font-size: 0.9em; }\n");
        html.push_str(".charts { display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; }\n");
        html.push_str(".charts img { width: 100%; }\n");
        html.push_str("table { width: 100%; border-collapse: collapse; margin: 16px 0; }\n");
        html.push_str("th { background: #34495e; color: white; text-align: left; padding: 12px; font-weight: 600; }\n");
        html.push_str("td { padding: 12px; border-bottom: 1px solid #ecf0f1; }\n");
        html.push_str("</style>\n</head>\n<body>\n");

        html.push_str(&format!("<h1>{}</h1>\n", escape(&report.title)));
        html.push_str(&format!("<p class=\"subtitle\">{}</p>\n", escape(&report.subtitle)));

        html.push_str("<h2>Projected Annual Results</h2>\n");
        html.push_str("<div class=\"cards\">\n");
        for card in &report.cards {
            html.push_str("<div class=\"card\">\n");
            html.push_str(&format!("<div class=\"label\">{}</div>\n", escape(&card.label)));
            html.push_str(&format!("<div class=\"value\">{}</div>\n", escape(&card.value)));
            html.push_str(&format!("<div class=\"caption\">{}</div>\n", escape(&card.caption)));
            html.push_str("</div>\n");
        }
        html.push_str("</div>\n");

        if !report.comparisons.is_empty() {
            html.push_str("<h2>Impact Charts</h2>\n");
            html.push_str("<table>\n<tr><th>Metric</th><th>Baseline</th><th>Projection</th></tr>\n");
            for row in &report.comparisons {
                html.push_str(&format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                    escape(&row.title),
                    escape(&row.baseline_display),
                    escape(&row.projection_display)
                ));
            }
            html.push_str("</table>\n");

            html.push_str("<div class=\"charts\">\n");
            for row in &report.comparisons {
                html.push_str(&format!(
                    "<img src=\"{}\" alt=\"{}\">\n",
                    escape(&row.chart_file),
                    escape(&row.title)
                ));
            }
            html.push_str("</div>\n");
        }

        html.push_str("<h2>Additional Information</h2>\n<ul>\n");
        html.push_str(&format!("<li>{}</li>\n", escape(&report.circularity_note)));
        html.push_str(&format!(
            "<li><strong>Project status:</strong> {}</li>\n",
            escape(&report.status_note)
        ));
        html.push_str("</ul>\n");

        html.push_str("</body>\n</html>\n");
        html
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
