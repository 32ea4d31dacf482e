//! Fixed HTML fragments and text escaping.
//!
//! Every table, row and cell uses inline presentation attributes so the output
//! survives email clients that strip stylesheets. Nested tables use the same
//! opening tag as the outer table.

use std::borrow::Cow;

/// Opening tag of every table, outer or nested.
pub const TABLE_OPEN: &str = r#"<table border="0" cellpadding="5" cellspacing="0" style="border-collapse: collapse; width: 100%;">"#;
pub const TABLE_CLOSE: &str = "</table>";

pub const HEADER_ROW_OPEN: &str = r#"<tr style="background-color: #f8f8f8;">"#;
pub const DATA_ROW_OPEN: &str = r#"<tr style="background-color: #ffffff;">"#;
pub const ROW_CLOSE: &str = "</tr>";

pub const HEADER_CELL_OPEN: &str = r#"<th style="border: 1px solid #ddd; padding: 5px;">"#;
pub const HEADER_CELL_CLOSE: &str = "</th>";
pub const DATA_CELL_OPEN: &str = r#"<td style="border: 1px solid #ddd; padding: 5px;">"#;
pub const DATA_CELL_CLOSE: &str = "</td>";

#[inline]
fn needs_escape(s: &str) -> bool {
    s.contains(&['&', '<', '>', '\'', '"'][..])
}

/// Escapes text for use as HTML element content.
///
/// Replaces `&`, `<`, `>`, `'` and `"` with character references. Returns the
/// input unchanged (borrowed) when none of them occur.
///
/// # Examples
///
/// ```rust
/// use serde_html_table::markup::escape_html;
///
/// assert_eq!(escape_html("plain text"), "plain text");
/// assert_eq!(escape_html("<b>Tom & \"Jerry\"</b>"), "&lt;b&gt;Tom &amp; &#34;Jerry&#34;&lt;/b&gt;");
/// assert_eq!(escape_html("it's"), "it&#39;s");
/// ```
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !needs_escape(s) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 16);
    for ch in s.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&#39;"),
            '"' => escaped.push_str("&#34;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Writes the header row and the data row of one record.
///
/// `headers` are raw field names and are escaped here. `cells` are already
/// rendered cell contents (escaped text or a nested table).
pub fn write_rows(output: &mut String, headers: &[&str], cells: &[String]) {
    output.push_str(HEADER_ROW_OPEN);
    output.push('\n');
    for header in headers {
        output.push_str(HEADER_CELL_OPEN);
        output.push_str(&escape_html(header));
        output.push_str(HEADER_CELL_CLOSE);
    }
    output.push_str(ROW_CLOSE);
    output.push('\n');

    output.push_str(DATA_ROW_OPEN);
    output.push('\n');
    for cell in cells {
        output.push_str(DATA_CELL_OPEN);
        output.push_str(cell);
        output.push_str(DATA_CELL_CLOSE);
    }
    output.push_str(ROW_CLOSE);
    output.push('\n');
}

/// Wraps already rendered rows in a nested table.
///
/// Unlike the outer table, the opening tag of a nested table is not followed
/// by a newline.
pub fn write_nested_table(output: &mut String, rows: &str) {
    output.push_str(TABLE_OPEN);
    output.push_str(rows);
    output.push_str(TABLE_CLOSE);
}
