// src/scrape/wikipedia.rs
//! Wikipedia "List of endangered species in …" pages.

use crate::model::Species;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

static ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("table.wikitable tbody tr")
        .expect("Failed to compile wikitable row selector - this is a bug in the code")
});

static CELL_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("td").expect("Failed to compile table cell selector - this is a bug in the code")
});

/// Footnote markers such as `[3]` or `[citation needed]`.
static FOOTNOTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[[^\]]*\]").expect("Failed to compile footnote regex - this is a bug in the code")
});

const DEFAULT_STATUS: &str = "Endangered";

/// Page address for a country's endangered species list.
pub fn page_url(base_url: &str, country_name: &str) -> String {
    format!(
        "{}/List_of_endangered_species_in_{}",
        base_url.trim_end_matches('/'),
        country_name.replace(' ', "_")
    )
}

/// Extracts up to `limit` species from the page's wikitables.
///
/// The first wikitable row of the document is treated as a header. Rows
/// need at least two data cells: name, scientific name and optionally status.
/// A status cell that is present is taken as is, even when blank.
pub fn parse_species_table(html: &str, limit: usize) -> Vec<Species> {
    let document = Html::parse_document(html);

    document
        .select(&ROW_SELECTOR)
        .skip(1)
        .filter_map(parse_row)
        .take(limit)
        .collect()
}

fn parse_row(row: ElementRef<'_>) -> Option<Species> {
    let cells: Vec<String> = row.select(&CELL_SELECTOR).map(cell_text).collect();
    if cells.len() < 2 || cells[0].is_empty() {
        return None;
    }

    let status = cells.get(2).map(String::as_str).unwrap_or(DEFAULT_STATUS);

    Some(Species::new(cells[0].clone(), cells[1].clone(), status))
}

fn cell_text(cell: ElementRef<'_>) -> String {
    let text: String = cell.text().collect();
    let stripped = FOOTNOTE.replace_all(&text, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
