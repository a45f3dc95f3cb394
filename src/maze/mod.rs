//! Grid maze model and text ingestion.
//!
//! A maze is a rectangular grid of cells, at most [`MAX_DIM`] on each side,
//! with exactly one start and one goal cell. File loading belongs to the
//! caller; the core only parses an already-read block of text. The character
//! set used to interpret that text is a [`SymbolSet`] value rather than a
//! hard-coded constant, since two conventions are in common use
//! (`#`/`S`/`E` and `X`/`I`/`F`).

use crate::{Error, Result};

/// Maximum number of rows or columns in a maze.
pub const MAX_DIM: usize = 128;

/// A cell coordinate: row then column, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Point { row, col }
    }

    /// Manhattan distance to another point.
    pub fn manhattan(&self, other: &Point) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

/// Semantic value of one maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Open,
    Start,
    Goal,
}

impl Cell {
    /// True for every cell a walker may stand on (everything but walls).
    pub fn is_open(&self) -> bool {
        !matches!(self, Cell::Wall)
    }
}

/// Character convention used to read and write maze text.
///
/// Any character that is not the wall, start, or goal symbol parses as an
/// open cell, so `.` and space are both accepted as floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolSet {
    pub wall: char,
    pub open: char,
    pub start: char,
    pub goal: char,
}

impl Default for SymbolSet {
    fn default() -> Self {
        SymbolSet {
            wall: '#',
            open: '.',
            start: 'S',
            goal: 'E',
        }
    }
}

impl SymbolSet {
    /// Alternate convention: `X` walls with `I`/`F` endpoints.
    pub fn legacy() -> Self {
        SymbolSet {
            wall: 'X',
            open: '.',
            start: 'I',
            goal: 'F',
        }
    }

    fn classify(&self, c: char) -> Cell {
        if c == self.wall {
            Cell::Wall
        } else if c == self.start {
            Cell::Start
        } else if c == self.goal {
            Cell::Goal
        } else {
            Cell::Open
        }
    }

    fn render(&self, cell: Cell) -> char {
        match cell {
            Cell::Wall => self.wall,
            Cell::Open => self.open,
            Cell::Start => self.start,
            Cell::Goal => self.goal,
        }
    }
}

/// A parsed rectangular maze with its start and goal located.
#[derive(Debug, Clone)]
pub struct Maze {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    start: Point,
    goal: Point,
}

impl Maze {
    /// Parses maze text under the given symbol convention.
    ///
    /// Blank lines are skipped. Every remaining line must have the same
    /// length, dimensions may not exceed [`MAX_DIM`], and exactly one start
    /// and one goal cell must be present.
    pub fn parse(text: &str, symbols: &SymbolSet) -> Result<Maze> {
        let mut cells = Vec::new();
        let mut rows = 0;
        let mut cols = None;
        let mut start = None;
        let mut goal = None;

        for line in text.lines() {
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }

            let width = line.chars().count();
            let expected = *cols.get_or_insert(width);
            if width != expected {
                return Err(Error::RaggedRow {
                    row: rows,
                    expected,
                    got: width,
                });
            }
            if width > MAX_DIM || rows >= MAX_DIM {
                return Err(Error::MazeTooLarge {
                    rows: rows + 1,
                    cols: width,
                });
            }

            for (col, c) in line.chars().enumerate() {
                let cell = symbols.classify(c);
                match cell {
                    Cell::Start => {
                        if start.replace(Point::new(rows, col)).is_some() {
                            return Err(Error::DuplicateStart);
                        }
                    }
                    Cell::Goal => {
                        if goal.replace(Point::new(rows, col)).is_some() {
                            return Err(Error::DuplicateGoal);
                        }
                    }
                    _ => {}
                }
                cells.push(cell);
            }
            rows += 1;
        }

        let cols = cols.ok_or(Error::EmptyMaze)?;
        let start = start.ok_or(Error::MissingStart)?;
        let goal = goal.ok_or(Error::MissingGoal)?;

        Ok(Maze {
            rows,
            cols,
            cells,
            start,
            goal,
        })
    }

    /// Builds a maze directly from cell data. Used by graph-to-maze
    /// rendering; enforces the same bounds and endpoint rules as `parse`.
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Result<Maze> {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyMaze);
        }
        if rows > MAX_DIM || cols > MAX_DIM {
            return Err(Error::MazeTooLarge { rows, cols });
        }
        debug_assert_eq!(cells.len(), rows * cols);

        let mut start = None;
        let mut goal = None;
        for (i, cell) in cells.iter().enumerate() {
            let p = Point::new(i / cols, i % cols);
            match cell {
                Cell::Start => {
                    if start.replace(p).is_some() {
                        return Err(Error::DuplicateStart);
                    }
                }
                Cell::Goal => {
                    if goal.replace(p).is_some() {
                        return Err(Error::DuplicateGoal);
                    }
                }
                _ => {}
            }
        }

        Ok(Maze {
            rows,
            cols,
            cells,
            start: start.ok_or(Error::MissingStart)?,
            goal: goal.ok_or(Error::MissingGoal)?,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Coordinate of the unique start cell.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Coordinate of the unique goal cell.
    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn contains(&self, p: Point) -> bool {
        p.row < self.rows && p.col < self.cols
    }

    /// Cell at a coordinate, or `None` outside the grid.
    pub fn cell(&self, p: Point) -> Option<Cell> {
        if self.contains(p) {
            Some(self.cells[p.row * self.cols + p.col])
        } else {
            None
        }
    }

    pub fn is_wall(&self, p: Point) -> bool {
        self.cell(p) == Some(Cell::Wall)
    }

    /// Iterator over all cells with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (Point::new(i / self.cols, i % self.cols), cell))
    }

    /// Renders the maze back to text under the given symbol convention.
    pub fn to_text(&self, symbols: &SymbolSet) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for r in 0..self.rows {
            for c in 0..self.cols {
                out.push(symbols.render(self.cells[r * self.cols + c]));
            }
            out.push('\n');
        }
        out
    }
}
