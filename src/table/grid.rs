use crate::GridError;

/// Parsed table data as ordered rows of ordered, trimmed text cells
///
/// Rows keep document order and may have different lengths; every lookup is
/// bounds-checked against the row it addresses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Creates a grid from already-collected rows
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Number of rows in the grid
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the grid holds no rows at all
    ///
    /// A page without table markup and a table without rows both produce an
    /// empty grid; callers cannot tell them apart.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the text of the cell at (`row`, `col`)
    ///
    /// # Errors
    ///
    /// `GridError::OutOfBounds` if `row` is past the last row or `col` is past
    /// the end of that particular row.
    pub fn cell(&self, row: usize, col: usize) -> Result<&str, GridError> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .map(String::as_str)
            .ok_or(GridError::OutOfBounds { row, col })
    }

    /// Returns the row at `index`
    pub fn row(&self, index: usize) -> Result<GridRow<'_>, GridError> {
        self.rows
            .get(index)
            .map(|cells| GridRow { index, cells })
            .ok_or(GridError::OutOfBounds {
                row: index,
                col: 0,
            })
    }

    /// Iterates over rows starting at `start_row`, skipping fixed header rows
    ///
    /// Yields nothing when `start_row` is past the end of the grid.
    pub fn rows_from(&self, start_row: usize) -> impl Iterator<Item = GridRow<'_>> {
        self.rows
            .iter()
            .enumerate()
            .skip(start_row)
            .map(|(index, cells)| GridRow { index, cells })
    }

    /// Consumes the grid, returning its raw rows
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}

/// A borrowed view of one grid row that remembers its position
#[derive(Debug, Clone, Copy)]
pub struct GridRow<'a> {
    index: usize,
    cells: &'a [String],
}

impl<'a> GridRow<'a> {
    /// Zero-based index of this row within its grid
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of cells in this row
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the text of the cell at `col`
    pub fn cell(&self, col: usize) -> Result<&'a str, GridError> {
        self.cells
            .get(col)
            .map(String::as_str)
            .ok_or(GridError::OutOfBounds {
                row: self.index,
                col,
            })
    }
}
