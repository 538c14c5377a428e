use std::fmt;

use crate::error::DimensionError;

/// Smallest allowed size of either board axis.
pub const MIN_SIZE: usize = 5;
/// Largest allowed size of either board axis.
pub const MAX_SIZE: usize = 9;
pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLUMNS: usize = 7;

/// The symbol a player leaves in the cells they occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Mark(char);

impl Mark {
    pub const fn new(symbol: char) -> Self {
        Mark(symbol)
    }

    pub fn symbol(self) -> char {
        self.0
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Taken(Mark),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Taken(mark) => Some(mark),
        }
    }

    fn symbol(self) -> char {
        self.mark().map_or(' ', Mark::symbol)
    }
}

/// Validated board size, fixed for a whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    rows: usize,
    columns: usize,
}

impl Dimensions {
    /// Build dimensions, rejecting either axis outside `MIN_SIZE..=MAX_SIZE`.
    /// Rows are checked before columns.
    pub fn new(rows: usize, columns: usize) -> Result<Self, DimensionError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&rows) {
            return Err(DimensionError::RowsOutOfRange(rows));
        }
        if !(MIN_SIZE..=MAX_SIZE).contains(&columns) {
            return Err(DimensionError::ColumnsOutOfRange(columns));
        }
        Ok(Dimensions { rows, columns })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} X {}", self.rows, self.columns)
    }
}

/// A column as players number it, starting from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Column(usize);

impl Column {
    /// Returns `None` for column 0.
    pub fn new(number: usize) -> Option<Self> {
        (number >= 1).then_some(Column(number))
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Column(index + 1)
    }

    /// 1-based column number.
    pub fn number(self) -> usize {
        self.0
    }

    /// 0-based column index.
    pub fn index(self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

/// Grid of cells with gravity: marks stack up from the bottom row.
///
/// Cells live in one flat buffer in column-major order, `column * rows + row`,
/// where row 0 is the bottom row. Callers only ever see named `row` and
/// `column` parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dimensions: Dimensions,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board
    pub fn new(dimensions: Dimensions) -> Self {
        Board {
            dimensions,
            cells: vec![Cell::Empty; dimensions.rows * dimensions.columns],
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn rows(&self) -> usize {
        self.dimensions.rows
    }

    pub fn columns(&self) -> usize {
        self.dimensions.columns
    }

    fn offset(&self, row: usize, column: usize) -> usize {
        debug_assert!(row < self.rows() && column < self.columns());
        column * self.rows() + row
    }

    /// Get the cell at 0-based `row` (0 is the bottom) and 0-based `column`.
    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[self.offset(row, column)]
    }

    /// True iff `column` is a valid 1-based column number for this board.
    pub fn is_in_range(&self, column: usize) -> bool {
        (1..=self.columns()).contains(&column)
    }

    /// True if the top cell of the column is taken. Columns outside the board
    /// count as full.
    pub fn is_full(&self, column: Column) -> bool {
        if !self.is_in_range(column.number()) {
            return true;
        }
        !self.get(self.rows() - 1, column.index()).is_empty()
    }

    /// Number of marks stacked in a column.
    pub fn height(&self, column: Column) -> usize {
        (0..self.rows())
            .take_while(|&row| !self.get(row, column.index()).is_empty())
            .count()
    }

    /// Drop a mark into a column, returns the 0-based row where it landed
    pub fn place(&mut self, column: Column, mark: Mark) -> Result<usize, MoveError> {
        if !self.is_in_range(column.number()) {
            return Err(MoveError::InvalidColumn);
        }

        // Scan upward for the lowest empty cell
        for row in 0..self.rows() {
            let offset = self.offset(row, column.index());
            if self.cells[offset].is_empty() {
                self.cells[offset] = Cell::Taken(mark);
                return Ok(row);
            }
        }

        Err(MoveError::ColumnFull)
    }

    /// True once the whole top row is taken, so no legal move remains.
    pub fn is_board_full(&self) -> bool {
        (0..self.columns()).all(|column| self.is_full(Column::from_index(column)))
    }

    /// Empty every cell, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Cells of one row, left to right.
    pub fn row_cells(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.columns()).map(move |column| self.get(row, column))
    }

    /// Cells of one column, bottom to top.
    pub fn column_cells(&self, column: usize) -> impl Iterator<Item = Cell> + '_ {
        let start = self.offset(0, column);
        self.cells[start..start + self.rows()].iter().copied()
    }

    /// Text picture of the board: column numbers, rows top to bottom, and a
    /// bottom border.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for column in 1..=self.columns() {
            write!(f, " {column}")?;
        }
        writeln!(f)?;

        for row in (0..self.rows()).rev() {
            for cell in self.row_cells(row) {
                write!(f, "║{}", cell.symbol())?;
            }
            writeln!(f, "║")?;
        }

        writeln!(f, "╚{}═╝", "═╩".repeat(self.columns() - 1))
    }
}
