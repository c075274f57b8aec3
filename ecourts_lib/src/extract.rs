//! Markup extraction over the portal's HTML fragments.
//!
//! These functions know nothing about what the values mean. They pull option
//! pairs, label/value rows and table cells out of whatever the portal sent,
//! and return an empty result for missing or malformed markup: an empty
//! answer from this source is normal, not a fault.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

/// Option value the portal uses for "Select ..." placeholders.
const PLACEHOLDER_VALUE: &str = "0";

static OPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("option").expect("invalid selector: option"));

static SELECT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("select").expect("invalid selector: select"));

static TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("invalid selector: table"));

static ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("invalid selector: tr"));

fn elem_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Direct `<td>` children of a row. Cells of nested tables belong to their own rows.
fn row_cells(row: ElementRef) -> Vec<String> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|cell| cell.value().name() == "td")
        .map(elem_text)
        .collect()
}

fn collect_options<'a>(options: impl Iterator<Item = ElementRef<'a>>) -> Vec<(String, String)> {
    options
        .filter_map(|option| {
            let value = option.value().attr("value").unwrap_or("").trim();
            if value.is_empty() || value == PLACEHOLDER_VALUE {
                return None;
            }
            Some((value.to_string(), elem_text(option)))
        })
        .collect()
}

/// Every `<option>` in `html` as a trimmed `(value, text)` pair, in document
/// order. Options with a blank value or the `"0"` placeholder are skipped.
pub fn extract_options(html: &str) -> Vec<(String, String)> {
    let fragment = Html::parse_fragment(html);
    collect_options(fragment.select(&OPTION))
}

/// Options of the first `<select>` whose `id` or `name` is `field`.
///
/// Returns `None` when no such select exists, so callers can tell a page
/// without the list apart from a list with no usable options.
pub fn extract_select_options(html: &str, field: &str) -> Option<Vec<(String, String)>> {
    let document = Html::parse_document(html);
    let select = document.select(&SELECT).find(|select| {
        select.value().id() == Some(field) || select.value().attr("name") == Some(field)
    })?;
    Some(collect_options(select.select(&OPTION)))
}

/// Every `<tr>` with at least two `<td>` cells, as `(first cell, second cell)`
/// with trimmed text, in document order. Duplicate labels are all returned.
pub fn extract_key_value_rows(html: &str) -> Vec<(String, String)> {
    let fragment = parse_rows(html);
    fragment
        .select(&ROW)
        .filter_map(|row| {
            let mut cells = row_cells(row).into_iter();
            let label = cells.next()?;
            let value = cells.next()?;
            Some((label, value))
        })
        .collect()
}

/// Rows of the first `<table>`, minus its first (header) row, each as the
/// trimmed text of its `<td>` cells. No table yields no rows.
pub fn extract_table(html: &str) -> Vec<Vec<String>> {
    let fragment = Html::parse_fragment(html);
    let Some(table) = fragment.select(&TABLE).next() else {
        return Vec::new();
    };
    table.select(&ROW).skip(1).map(row_cells).collect()
}

/// HTML parsing drops `<tr>` tags that are not inside a table, and the
/// case-status handler sometimes answers with bare rows. Those are parsed
/// again inside a synthetic table.
fn parse_rows(html: &str) -> Html {
    let fragment = Html::parse_fragment(html);
    if fragment.select(&ROW).next().is_none() && html.to_ascii_lowercase().contains("<tr") {
        return Html::parse_fragment(&format!("<table>{}</table>", html));
    }
    fragment
}
