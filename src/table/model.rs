//! Table data model types

use super::parser::TsvData;

/// A single data row; always holds `col_count` cells once loaded
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Cell text at `col`, or an empty string past the end of the row
    pub fn cell(&self, col: usize) -> &str {
        self.cells.get(col).map(String::as_str).unwrap_or("")
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Direction of the active sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Glyph drawn after the header label of the sorted column
    pub fn indicator(self) -> char {
        match self {
            SortDirection::Ascending => '^',
            SortDirection::Descending => 'v',
        }
    }
}

/// Column and direction of the current sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSort {
    pub column: usize,
    pub direction: SortDirection,
}

/// The loaded table and its sort state
///
/// `original` is captured once at construction and never mutated; `reset`
/// rebuilds `rows` from it.
#[derive(Debug, Clone)]
pub struct Table {
    pub(super) headers: Vec<String>,
    pub(super) rows: Vec<Row>,
    pub(super) original: Vec<Row>,
    pub(super) col_count: usize,
    pub(super) col_widths: Vec<f32>,
    /// Left edge of each column relative to the grid origin
    pub(super) col_offsets: Vec<f32>,
    pub(super) sort: Option<ActiveSort>,
}

impl Table {
    /// Build a table from ingested data and snapshot the load order
    ///
    /// Column widths are zero until [`Table::layout_columns`] runs.
    pub fn new(data: TsvData) -> Self {
        let TsvData {
            headers,
            rows,
            col_count,
        } = data;
        let original = rows.clone();

        Self {
            headers,
            rows,
            original,
            col_count,
            col_widths: vec![0.0; col_count],
            col_offsets: vec![0.0; col_count],
            sort: None,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Rows in the order they were loaded
    pub fn original_rows(&self) -> &[Row] {
        &self.original
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.col_count
    }

    /// Text of the cell at (`row`, `col`) in current display order
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).map(|r| r.cell(col))
    }

    pub fn col_widths(&self) -> &[f32] {
        &self.col_widths
    }

    /// Total width of all columns
    pub fn content_width(&self) -> f32 {
        self.col_widths.iter().sum()
    }

    /// Column whose horizontal span contains `x` (grid-space, unscrolled)
    pub fn column_at(&self, x: f32) -> Option<usize> {
        if x < 0.0 {
            return None;
        }
        let idx = self.col_offsets.partition_point(|&left| left <= x);
        let col = idx.checked_sub(1)?;
        (x < self.col_offsets[col] + self.col_widths[col]).then_some(col)
    }

    /// Left edge of a column in grid space
    pub fn column_offset(&self, col: usize) -> f32 {
        self.col_offsets.get(col).copied().unwrap_or(0.0)
    }

    pub fn active_sort(&self) -> Option<ActiveSort> {
        self.sort
    }

    pub fn sort_column(&self) -> Option<usize> {
        self.sort.map(|s| s.column)
    }

    /// Direction flag; ascending when no sort is active
    pub fn sort_ascending(&self) -> bool {
        self.sort
            .map_or(true, |s| s.direction == SortDirection::Ascending)
    }
}
