use std::str::FromStr;

/// Things that can go wrong when building a grid.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MapError {
    #[error("map has no rows")]
    Empty,

    /// Every row must be as long as the map is tall.
    #[error("row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("cell ({row}, {col}) holds {value}, expected 0 or 1")]
    BadCell { row: usize, col: usize, value: u8 },

    #[error("unknown glyph {glyph:?} at ({row}, {col})")]
    UnknownGlyph { row: usize, col: usize, glyph: char },

    /// Rays rely on a solid ring around the map to stop.
    #[error("border cell ({row}, {col}) is open")]
    OpenBorder { row: usize, col: usize },
}

/// Square occupancy grid, row-major.  `(col, row)` = `(x, y)` in map units,
/// one cell per unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

/// The 10×10 map the viewer starts with.
const REFERENCE: [[u8; 10]; 10] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 1, 0, 0, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 0, 0, 1, 1, 1, 0, 1],
    [1, 0, 1, 0, 0, 1, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

impl Grid {
    /// Build from rows of 0/1 flags.  The result is square and fully
    /// bordered, which is what [`RayCaster`](crate::engine::RayCaster)
    /// needs to stay in range.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, MapError> {
        let grid = Self::from_rows_unbordered(rows)?;
        grid.check_border()?;
        Ok(grid)
    }

    /// Same as [`Grid::from_rows`] but without the border check.  Casting
    /// into such a grid is only safe while every ray hits an interior wall.
    pub fn from_rows_unbordered<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, MapError> {
        let size = rows.len();
        if size == 0 {
            return Err(MapError::Empty);
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != size {
                return Err(MapError::NotSquare {
                    row,
                    len: r.len(),
                    expected: size,
                });
            }
            for (col, &value) in r.iter().enumerate() {
                match value {
                    0 => cells.push(false),
                    1 => cells.push(true),
                    _ => return Err(MapError::BadCell { row, col, value }),
                }
            }
        }
        Ok(Self { size, cells })
    }

    /// Square map with a solid ring and an empty interior.
    pub fn bordered(size: usize) -> Self {
        let mut cells = vec![false; size * size];
        for i in 0..size {
            cells[i] = true;
            cells[(size - 1) * size + i] = true;
            cells[i * size] = true;
            cells[i * size + size - 1] = true;
        }
        Self { size, cells }
    }

    pub fn reference() -> Self {
        Self::from_rows(&REFERENCE).unwrap_or_else(|_| Self::bordered(REFERENCE.len()))
    }

    /// Cells per side.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn contains(&self, col: i32, row: i32) -> bool {
        let n = self.size as i32;
        (0..n).contains(&col) && (0..n).contains(&row)
    }

    /// Occupancy of `(col, row)`.
    ///
    /// Reading outside the grid is a caller bug (the camera left the
    /// bordered interior, or the grid has no border).  Debug builds panic;
    /// release builds report the cell as solid so the ray stops.
    #[inline]
    pub fn is_solid(&self, col: i32, row: i32) -> bool {
        debug_assert!(
            self.contains(col, row),
            "grid traversal out of range: ({col}, {row}) in {0}x{0}",
            self.size
        );
        if !self.contains(col, row) {
            return true;
        }
        self.cells[row as usize * self.size + col as usize]
    }

    /// Like [`is_solid`](Self::is_solid) but out-of-range reads are an
    /// expected answer ("blocked") rather than a bug.
    #[inline]
    pub fn is_solid_or_outside(&self, col: i32, row: i32) -> bool {
        !self.contains(col, row) || self.cells[row as usize * self.size + col as usize]
    }

    /// Toggle a cell for map editing.  Apply between frames only.
    pub fn set(&mut self, col: usize, row: usize, solid: bool) {
        if col < self.size && row < self.size {
            self.cells[row * self.size + col] = solid;
        }
    }

    /// Row-major iterator over `(col, row, solid)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &s)| (i % self.size, i / self.size, s))
    }

    /// First open border cell, if any.
    pub fn check_border(&self) -> Result<(), MapError> {
        if self.size == 0 {
            return Err(MapError::Empty);
        }
        let last = self.size - 1;
        for (col, row, solid) in self.cells() {
            let on_ring = row == 0 || row == last || col == 0 || col == last;
            if on_ring && !solid {
                return Err(MapError::OpenBorder { row, col });
            }
        }
        Ok(())
    }
}

/// Text map: one row per line, `#`/`1` solid, `.`/`0`/space open.
/// Blank lines are skipped; trailing spaces are significant.
impl FromStr for Grid {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        for (row, line) in s
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.trim().is_empty())
            .enumerate()
        {
            let mut cells = Vec::with_capacity(line.len());
            for (col, glyph) in line.chars().enumerate() {
                cells.push(match glyph {
                    '#' | '1' => 1,
                    '.' | '0' | ' ' => 0,
                    _ => return Err(MapError::UnknownGlyph { row, col, glyph }),
                });
            }
            rows.push(cells);
        }
        Self::from_rows(&rows)
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
