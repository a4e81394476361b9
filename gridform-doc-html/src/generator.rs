//! HTML report generator implementation.

use gridform::{CellValue, Grid, ValidationReport};

/// Options for HTML report generation.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Title for the report document.
    pub title: Option<String>,
    /// Whether to include default CSS styling.
    pub include_styles: bool,
    /// Whether to generate a complete HTML document (with html/head/body tags).
    pub full_document: bool,
    /// Custom CSS class prefix for all generated elements.
    pub class_prefix: String,
    /// Glyph rendered in a marked selectable cell.
    pub mark: String,
}

impl ReportOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            title: None,
            include_styles: true,
            full_document: true,
            class_prefix: "report".to_string(),
            mark: "\u{2715}".to_string(),
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable default CSS styling.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Generate a complete HTML document or just the table fragment.
    pub fn full_document(mut self, full: bool) -> Self {
        self.full_document = full;
        self
    }

    /// Set a custom CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Set the glyph rendered in marked cells.
    pub fn with_mark(mut self, mark: impl Into<String>) -> Self {
        self.mark = mark.into();
        self
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a grid's current data as a static HTML report.
pub fn to_html(grid: &Grid, options: &ReportOptions) -> String {
    generate(grid, None, options)
}

/// Render a grid with its validation report, highlighting incomplete rows.
///
/// Highlighting is additionally gated by the grid's
/// `show_validation_errors` configuration flag; with the flag off the
/// report renders identically to [`to_html`].
pub fn to_html_with_report(
    grid: &Grid,
    report: &ValidationReport,
    options: &ReportOptions,
) -> String {
    generate(grid, Some(report), options)
}

fn generate(grid: &Grid, report: Option<&ValidationReport>, options: &ReportOptions) -> String {
    let mut html = String::new();
    let prefix = &options.class_prefix;
    let config = grid.config();

    let report = report.filter(|_| config.show_validation_errors);

    if options.full_document {
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");

        if let Some(title) = &options.title {
            html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
        }

        if options.include_styles {
            html.push_str(&generate_styles(prefix));
        }

        html.push_str("</head>\n<body>\n");
    }

    if let Some(title) = &options.title {
        html.push_str(&format!(
            "<h1 class=\"{prefix}-title\">{}</h1>\n",
            escape_html(title)
        ));
    }

    let mut table_classes = format!("{prefix}-grid");
    if config.striped {
        table_classes.push_str(&format!(" {prefix}-striped"));
    }
    if config.hoverable {
        table_classes.push_str(&format!(" {prefix}-hoverable"));
    }
    html.push_str(&format!("<table class=\"{table_classes}\">\n"));

    // Header row: group column, row-label column, then the data columns.
    html.push_str("  <thead>\n    <tr>\n");
    html.push_str(&format!("      <th class=\"{prefix}-group-head\"></th>\n"));
    let row_head_style = config
        .row_header_width
        .map(|width| format!(" style=\"width:{width}px\""))
        .unwrap_or_default();
    html.push_str(&format!(
        "      <th class=\"{prefix}-row-head\"{row_head_style}></th>\n"
    ));
    for (column, header) in config.columns.iter().enumerate() {
        let lines: Vec<String> = header
            .display_lines()
            .iter()
            .map(|line| escape_html(line))
            .collect();
        let width_style = config
            .column_widths
            .get(column)
            .map(|width| format!(" style=\"width:{width}px\""))
            .unwrap_or_default();
        html.push_str(&format!(
            "      <th class=\"{prefix}-col-head\"{width_style}>{}</th>\n",
            lines.join("<br>")
        ));
    }
    html.push_str("    </tr>\n  </thead>\n");

    // Body: rows in group display order, group label spanning its rows.
    html.push_str("  <tbody>\n");
    let groups = grid.groups();
    for group in 0..groups.len() {
        let rows = groups.rows_in(group).unwrap_or_default();
        for (position, &row) in rows.iter().enumerate() {
            let invalid = report.is_some_and(|r| !r.row_is_valid(row));
            let row_class = if invalid {
                format!(" class=\"{prefix}-invalid\"")
            } else {
                String::new()
            };
            html.push_str(&format!("    <tr{row_class}>\n"));

            if position == 0 {
                html.push_str(&format!(
                    "      <td class=\"{prefix}-group\" rowspan=\"{}\">{}</td>\n",
                    rows.len(),
                    escape_html(groups.label(group).unwrap_or_default())
                ));
            }

            html.push_str(&format!(
                "      <td class=\"{prefix}-row-label\">{}</td>\n",
                escape_html(grid.row_label(row).unwrap_or_default())
            ));

            for column in 0..grid.column_count() {
                match grid.cell(row, column) {
                    Some(CellValue::Flag(true)) => {
                        html.push_str(&format!(
                            "      <td class=\"{prefix}-cell {prefix}-marked\">{}</td>\n",
                            escape_html(&options.mark)
                        ));
                    }
                    Some(CellValue::Flag(false)) | None => {
                        html.push_str(&format!("      <td class=\"{prefix}-cell\"></td>\n"));
                    }
                    Some(CellValue::Text(text)) => {
                        html.push_str(&format!(
                            "      <td class=\"{prefix}-cell {prefix}-text\">{}</td>\n",
                            escape_html(text)
                        ));
                    }
                }
            }

            html.push_str("    </tr>\n");
        }
    }
    html.push_str("  </tbody>\n</table>\n");

    if let Some(report) = report.filter(|r| !r.is_valid()) {
        html.push_str(&format!("<ul class=\"{prefix}-errors\">\n"));
        for (_, message) in report.invalid_rows() {
            html.push_str(&format!("  <li>{}</li>\n", escape_html(message)));
        }
        html.push_str("</ul>\n");
    }

    if options.full_document {
        html.push_str("</body>\n</html>\n");
    }

    html
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate default CSS styles.
fn generate_styles(prefix: &str) -> String {
    format!(
        r#"  <style>
    .{prefix}-grid {{
      border-collapse: collapse;
      font-family: sans-serif;
      margin: 2rem auto;
    }}
    .{prefix}-grid td, .{prefix}-grid th {{
      border: 1px solid #444;
      padding: 0.3rem 0.6rem;
    }}
    .{prefix}-group {{
      writing-mode: vertical-rl;
      transform: rotate(180deg);
      text-align: center;
      font-weight: bold;
      background: #eee;
    }}
    .{prefix}-row-label {{
      text-align: left;
    }}
    .{prefix}-cell {{
      text-align: center;
      min-width: 3rem;
    }}
    .{prefix}-striped tbody tr:nth-child(even) {{
      background: #f7f7f7;
    }}
    .{prefix}-hoverable tbody tr:hover {{
      background: #eef3fa;
    }}
    .{prefix}-invalid {{
      background: #fbeaea;
    }}
    .{prefix}-errors {{
      color: #a33;
      font-family: sans-serif;
    }}
  </style>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridform::{ColumnKind, GridConfig, RowGroup, SelectionMode};

    fn grid() -> Grid {
        let config = GridConfig::new(
            vec!["Never".into(), "Often".into(), "Notes & remarks".into()],
            vec!["standing".into(), "walking".into(), "carrying <10 kg".into()],
            vec![
                RowGroup::new("posture", vec![0, 1]),
                RowGroup::new("load handling", vec![2]),
            ],
            vec![
                ColumnKind::Selectable,
                ColumnKind::Selectable,
                ColumnKind::Input,
            ],
        )
        .with_mode(SelectionMode::Single);
        Grid::configure(config).unwrap()
    }

    #[test]
    fn fragment_contains_grouped_rows_and_marks() {
        let mut grid = grid();
        grid.select(0, 1);
        grid.set_input(2, 2, "team lift");

        let html = to_html(&grid, &ReportOptions::new().full_document(false));

        assert!(html.contains("rowspan=\"2\">posture</td>"));
        assert!(html.contains("rowspan=\"1\">load handling</td>"));
        assert!(html.contains("report-marked\">\u{2715}</td>"));
        assert!(html.contains("report-text\">team lift</td>"));
        assert!(!html.contains("<!DOCTYPE html>"));
    }

    #[test]
    fn full_document_has_head_and_styles() {
        let html = to_html(
            &grid(),
            &ReportOptions::new().with_title("Job analysis: mobility"),
        );

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Job analysis: mobility</title>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("</body>\n</html>\n"));
    }

    #[test]
    fn labels_are_escaped() {
        let html = to_html(&grid(), &ReportOptions::new().full_document(false));

        assert!(html.contains("carrying &lt;10 kg"));
        assert!(html.contains("Notes &amp; remarks"));
    }

    #[test]
    fn invalid_rows_are_highlighted_when_configured() {
        let mut grid = grid();
        grid.select(0, 0);
        // rows 1 and 2 left without a mark
        let report = grid.validate();

        let html =
            to_html_with_report(&grid, &report, &ReportOptions::new().full_document(false));
        assert!(html.contains("report-invalid"));
        assert!(html.contains("no option chosen for &#39;walking&#39;"));
    }

    #[test]
    fn highlighting_is_gated_by_the_grid_flag() {
        let config = GridConfig::new(
            vec!["A".into()],
            vec!["row".into()],
            vec![RowGroup::new("g", vec![0])],
            vec![ColumnKind::Selectable],
        )
        .show_validation_errors(false);
        let mut grid = Grid::configure(config).unwrap();
        let report = grid.validate();
        assert!(!report.is_valid());

        let html =
            to_html_with_report(&grid, &report, &ReportOptions::new().full_document(false));
        assert!(!html.contains("-invalid"));
        assert!(!html.contains("-errors"));
    }

    #[test]
    fn custom_mark_and_prefix() {
        let mut grid = grid();
        grid.select(1, 0);

        let options = ReportOptions::new()
            .full_document(false)
            .with_class_prefix("ja")
            .with_mark("X");
        let html = to_html(&grid, &options);

        assert!(html.contains("class=\"ja-grid\""));
        assert!(html.contains("ja-marked\">X</td>"));
    }
}
