// src/resolve.rs
// Heuristics for locating the presence value inside extracted tables.
// The source site's tables are not schema-stable, so resolution is an ordered
// chain of strategies: the "Presencia" header column is the primary signal;
// digit-bearing neighbor cells are the fallback; a bare neighbor cell (which
// may hold non-numeric text like "N/D") is the last resort.

use crate::html::{Table, extract_tables};

/// Only the leading rows of a table can act as its header.
const HEADER_SCAN_ROWS: usize = 5;
const HEADER_NEEDLE: &str = "presencia";

/// Parse `html` and return the presence value for `ticker` from the first
/// table that yields one, in document order. `None` if no table does.
pub fn extract_presence_value(html: &str, ticker: &str) -> Option<String> {
    extract_tables(html)
        .iter()
        .find_map(|table| resolve_from_table(table, ticker))
}

fn resolve_from_table(table: &Table, ticker: &str) -> Option<String> {
    let row = find_ticker_row(table, ticker)?;
    let header_index = presence_column_index(table);
    let ticker_index = row.iter().position(|c| c.eq_ignore_ascii_case(ticker))?;

    STRATEGIES
        .iter()
        .find_map(|strategy| strategy(row, ticker_index, header_index))
}

/// Column index of the first header-ish cell containing "presencia",
/// looking only at the first few rows. Computed per table.
fn presence_column_index(table: &Table) -> Option<usize> {
    table.rows.iter().take(HEADER_SCAN_ROWS).find_map(|row| {
        row.iter()
            .position(|cell| cell.to_lowercase().contains(HEADER_NEEDLE))
    })
}

/// First row containing a cell equal to the ticker, case-insensitively.
fn find_ticker_row<'a>(table: &'a Table, ticker: &str) -> Option<&'a Vec<String>> {
    table
        .rows
        .iter()
        .find(|row| row.iter().any(|cell| cell.eq_ignore_ascii_case(ticker)))
}

/// A value-extraction strategy over (ticker row, ticker cell index, header
/// column index). Evaluated in order; first `Some` wins.
type Strategy = fn(&[String], usize, Option<usize>) -> Option<String>;

const STRATEGIES: [Strategy; 4] = [
    header_column,
    digits_rightward,
    digits_leftward,
    nearest_neighbor,
];

fn header_column(row: &[String], _ticker_index: usize, header: Option<usize>) -> Option<String> {
    let value = row.get(header?)?.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn digits_rightward(row: &[String], ticker_index: usize, _: Option<usize>) -> Option<String> {
    row.iter()
        .skip(ticker_index + 1)
        .map(|cell| cell.trim())
        .find(|cell| !cell.is_empty() && has_digit(cell))
        .map(str::to_string)
}

fn digits_leftward(row: &[String], ticker_index: usize, _: Option<usize>) -> Option<String> {
    row[..ticker_index]
        .iter()
        .rev()
        .map(|cell| cell.trim())
        .find(|cell| !cell.is_empty() && has_digit(cell))
        .map(str::to_string)
}

/// Accepts non-numeric text rather than reporting no data when a clearly
/// relevant neighbor cell exists.
fn nearest_neighbor(row: &[String], ticker_index: usize, _: Option<usize>) -> Option<String> {
    let right = row.get(ticker_index + 1).map(|c| c.trim());
    if let Some(v) = right.filter(|c| !c.is_empty()) {
        return Some(v.to_string());
    }
    let left = ticker_index
        .checked_sub(1)
        .and_then(|i| row.get(i))
        .map(|c| c.trim());
    left.filter(|c| !c.is_empty()).map(str::to_string)
}

fn has_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}
