// src/search/mod.rs
//! Reading the register's search-result grid.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

use crate::utils::error::SearchError;

// --- CSS Selectors (Lazy Static) ---
static GRID_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("table[role='grid']").expect("Failed to compile GRID_SELECTOR")
});

// Result rows carry a row index; header and filler rows do not.
static ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr[data-ri]").expect("Failed to compile ROW_SELECTOR"));

static CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td").expect("Failed to compile CELL_SELECTOR"));

// Cells before the first (name, location) history pair.
const HISTORY_START: usize = 8;
const MIN_CELLS: usize = 6;

/// One company row of the search-result grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Register court and number, e.g. "Amtsgericht Lübeck HRB 1234".
    pub court: String,
    pub name: String,
    /// Registered seat (Sitz).
    pub seat: String,
    pub status: String,
    pub documents: String,
    /// Former (name, location) pairs.
    pub history: Vec<(String, String)>,
}

/// Parses every result row of the grid.
pub fn parse_search_results(html: &str) -> Result<Vec<SearchHit>, SearchError> {
    let document = Html::parse_document(html);
    let grid = document.select(&GRID_SELECTOR).next().ok_or(SearchError::MissingGrid)?;

    let hits = grid
        .select(&ROW_SELECTOR)
        .enumerate()
        .map(|(index, row)| parse_row(index, row))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!("Parsed {} search hits", hits.len());
    Ok(hits)
}

fn parse_row(index: usize, row: ElementRef) -> Result<SearchHit, SearchError> {
    let cells: Vec<String> = row
        .select(&CELL_SELECTOR)
        .map(|cell| cell.text().collect::<String>().trim().to_string())
        .collect();

    if cells.len() < MIN_CELLS {
        return Err(SearchError::ShortRow(index, cells.len()));
    }

    let history = cells
        .get(HISTORY_START..)
        .unwrap_or_default()
        .chunks(3)
        .filter(|chunk| chunk.len() >= 2)
        .map(|chunk| (chunk[0].clone(), chunk[1].clone()))
        .collect();

    Ok(SearchHit {
        court: cells[1].clone(),
        name: cells[2].clone(),
        seat: cells[3].clone(),
        status: cells[4].clone(),
        documents: cells[5].clone(),
        history,
    })
}

/// First hit whose name contains `name` and, if given, whose seat contains
/// `city`. Both comparisons ignore case.
pub fn select_hit<'a>(hits: &'a [SearchHit], name: &str, city: Option<&str>) -> Option<&'a SearchHit> {
    let name = name.to_lowercase();
    let city = city.map(str::to_lowercase);

    hits.iter().find(|hit| {
        let name_matches = hit.name.to_lowercase().contains(&name);
        let city_matches = city
            .as_deref()
            .map_or(true, |c| hit.seat.to_lowercase().contains(c));
        tracing::trace!("Checking row {:?} / {:?}: name={} city={}", hit.name, hit.seat, name_matches, city_matches);
        name_matches && city_matches
    })
}
