//! Board module - the reversible grid state machine
//!
//! The board is a `width x height` occupancy grid with row 0 at the floor. Alongside
//! the grid it caches per-column heights, per-row fill counts, and the overall stack
//! height; all three are updated incrementally and are always recomputable from the
//! grid alone.
//!
//! # Commit / undo
//!
//! The board is either **committed** (no pending change) or **uncommitted** (exactly
//! one pending change that [`Board::undo`] can revert). A successful [`Board::place`]
//! or a [`Board::clear_rows`] that removed something moves the board to uncommitted;
//! [`Board::commit`] and [`Board::undo`] move it back. Only one level of undo exists.
//!
//! Undo keeps a second copy of the grid and stats. Taking a snapshot copies into that
//! buffer with `clone_from`, so repeated place/undo cycles never reallocate.

use std::fmt;

use crate::pieces::PieceShape;
use crate::types::PlaceResult;

/// Errors for board operations used outside their state-machine contract
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board has an uncommitted change; commit or undo first")]
    Uncommitted,

    #[error("cached {what} disagree with the grid")]
    Integrity { what: &'static str },
}

/// Grid contents plus the statistics derived from it
#[derive(Debug, PartialEq, Eq)]
struct Layer {
    /// Flat row-major occupancy (y * width + x)
    cells: Vec<bool>,
    /// Topmost filled row + 1, per column
    heights: Vec<usize>,
    /// Filled cells, per row
    widths: Vec<usize>,
    max_height: usize,
}

impl Clone for Layer {
    fn clone(&self) -> Self {
        Self {
            cells: self.cells.clone(),
            heights: self.heights.clone(),
            widths: self.widths.clone(),
            max_height: self.max_height,
        }
    }

    // Field-wise so the snapshot buffers keep their allocations.
    fn clone_from(&mut self, source: &Self) {
        self.cells.clone_from(&source.cells);
        self.heights.clone_from(&source.heights);
        self.widths.clone_from(&source.widths);
        self.max_height = source.max_height;
    }
}

impl Layer {
    fn empty(width: usize, height: usize) -> Self {
        Self {
            cells: vec![false; width * height],
            heights: vec![0; width],
            widths: vec![0; height],
            max_height: 0,
        }
    }

    /// Recompute every statistic from `cells`
    fn recount(&mut self, width: usize) {
        self.heights.fill(0);
        self.widths.fill(0);
        for (y, row) in self.cells.chunks_exact(width.max(1)).enumerate() {
            for (x, &filled) in row.iter().enumerate() {
                if filled {
                    self.widths[y] += 1;
                    self.heights[x] = y + 1;
                }
            }
        }
        self.max_height = self.heights.iter().copied().max().unwrap_or(0);
    }
}

/// A falling-block board with single-level undo
#[derive(Debug, Clone)]
pub struct Board {
    width: usize,
    height: usize,
    live: Layer,
    backup: Layer,
    committed: bool,
}

impl Board {
    /// Create an empty, committed board
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            live: Layer::empty(width, height),
            backup: Layer::empty(width, height),
            committed: true,
        }
    }

    /// Build a committed board from text rows, top row first.
    ///
    /// `#` and `+` are filled cells; anything else is empty. The board is as wide as
    /// the longest row.
    ///
    /// ```
    /// use tetris_brain_core::Board;
    ///
    /// let board = Board::from_rows(&["#  ", "###"]);
    /// assert_eq!(board.width(), 3);
    /// assert_eq!(board.column_height(0), 2);
    /// assert_eq!(board.row_width(0), 3);
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let height = rows.len();
        let mut board = Self::new(width, height);

        for (i, row) in rows.iter().enumerate() {
            let y = height - 1 - i;
            for (x, ch) in row.chars().enumerate() {
                board.live.cells[y * width + x] = matches!(ch, '#' | '+');
            }
        }
        board.live.recount(width);
        board
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Height of the tallest column
    pub fn max_height(&self) -> usize {
        self.live.max_height
    }

    /// Topmost filled row + 1 in column `x`; 0 outside the board
    pub fn column_height(&self, x: i32) -> usize {
        usize::try_from(x)
            .ok()
            .and_then(|x| self.live.heights.get(x))
            .copied()
            .unwrap_or(0)
    }

    /// Filled cells in row `y`; 0 outside the board
    pub fn row_width(&self, y: i32) -> usize {
        usize::try_from(y)
            .ok()
            .and_then(|y| self.live.widths.get(y))
            .copied()
            .unwrap_or(0)
    }

    /// True if the cell is filled or lies outside the board
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.index(x, y).map_or(true, |idx| self.live.cells[idx])
    }

    /// True when there is no pending change to undo
    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// Lowest y at which `shape` rests on the stack when dropped in at column `x`.
    ///
    /// Columns of the shape that fall outside the board are ignored; bounds are
    /// [`Board::place`]'s concern.
    pub fn drop_height(&self, shape: &PieceShape, x: i32) -> i32 {
        shape
            .skirt()
            .iter()
            .enumerate()
            .map(|(i, &skirt)| self.column_height(x + i as i32) as i32 - skirt)
            .fold(0, i32::max)
    }

    /// Place `shape` with its lower-left corner at `(x, y)`.
    ///
    /// Placement is all-or-nothing: on [`PlaceResult::OutOfBounds`] or
    /// [`PlaceResult::Collision`] the board is untouched and stays committed. On
    /// success the previous contents become the undo snapshot and the board is
    /// uncommitted.
    pub fn place(
        &mut self,
        shape: &PieceShape,
        x: i32,
        y: i32,
    ) -> Result<PlaceResult, BoardError> {
        if !self.committed {
            return Err(BoardError::Uncommitted);
        }

        if x < 0
            || y < 0
            || x as usize + shape.width() as usize > self.width
            || y as usize + shape.height() as usize > self.height
        {
            return Ok(PlaceResult::OutOfBounds);
        }

        let (x, y) = (x as usize, y as usize);
        let width = self.width;
        let cell_index = |dx: i32, dy: i32| (y + dy as usize) * width + x + dx as usize;

        if shape
            .cells()
            .iter()
            .any(|p| self.live.cells[cell_index(p.x, p.y)])
        {
            return Ok(PlaceResult::Collision);
        }

        self.snapshot();

        let mut result = PlaceResult::Ok;
        let live = &mut self.live;
        for p in shape.cells() {
            let (cx, cy) = (x + p.x as usize, y + p.y as usize);
            live.cells[cell_index(p.x, p.y)] = true;

            live.widths[cy] += 1;
            if live.widths[cy] == width {
                result = PlaceResult::RowFilled;
            }
            if live.heights[cx] < cy + 1 {
                live.heights[cx] = cy + 1;
            }
            live.max_height = live.max_height.max(live.heights[cx]);
        }

        self.debug_check();
        Ok(result)
    }

    /// Remove every full row, shifting the rows above down.
    ///
    /// Returns the number of rows removed. A call that removes nothing changes
    /// nothing, including the commit state. If the board is committed when rows are
    /// removed, a snapshot is taken first so that [`Board::undo`] reverts the clear;
    /// when a change is already pending (a placement, or an earlier clear) the
    /// existing snapshot is kept and undo returns to the last committed board.
    pub fn clear_rows(&mut self) -> usize {
        let width = self.width;
        let top = self.live.max_height;
        let cleared = self.live.widths[..top]
            .iter()
            .filter(|&&filled| filled == width)
            .count();
        if cleared == 0 {
            return 0;
        }

        if self.committed {
            self.snapshot();
        }

        let live = &mut self.live;
        let mut to_row = 0;
        for row in 0..top {
            if live.widths[row] == width {
                continue;
            }
            if to_row != row {
                live.cells
                    .copy_within(row * width..(row + 1) * width, to_row * width);
                live.widths[to_row] = live.widths[row];
            }
            to_row += 1;
        }

        // Vacated rows at the top of the old stack
        live.cells[to_row * width..top * width].fill(false);
        live.widths[to_row..top].fill(0);

        for x in 0..width {
            live.heights[x] = (0..to_row)
                .rev()
                .find(|&y| live.cells[y * width + x])
                .map_or(0, |y| y + 1);
        }
        live.max_height = live.heights.iter().copied().max().unwrap_or(0);

        self.debug_check();
        cleared
    }

    /// Revert the pending change.
    ///
    /// Returns false (and does nothing) when the board is already committed.
    pub fn undo(&mut self) -> bool {
        if self.committed {
            return false;
        }
        std::mem::swap(&mut self.live, &mut self.backup);
        self.committed = true;
        self.debug_check();
        true
    }

    /// Accept the pending change; no-op when already committed
    pub fn commit(&mut self) {
        self.committed = true;
    }

    /// Compare the cached statistics against a full recount of the grid
    pub fn check_integrity(&self) -> Result<(), BoardError> {
        let mut fresh = self.live.clone();
        fresh.recount(self.width);

        if fresh.heights != self.live.heights {
            return Err(BoardError::Integrity { what: "heights" });
        }
        if fresh.widths != self.live.widths {
            return Err(BoardError::Integrity { what: "widths" });
        }
        if fresh.max_height != self.live.max_height {
            return Err(BoardError::Integrity { what: "max height" });
        }
        Ok(())
    }

    fn snapshot(&mut self) {
        self.backup.clone_from(&self.live);
        self.committed = false;
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert_eq!(self.check_integrity(), Ok(()));
    }
}

impl PartialEq for Board {
    /// Boards are equal when their dimensions, contents, and commit state match;
    /// the undo buffer is not compared.
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.committed == other.committed
            && self.live == other.live
    }
}

impl Eq for Board {}

/// Draws the board top row first, `+` for filled cells, with a dashed floor.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.live.cells.chunks_exact(self.width.max(1)).rev() {
            f.write_str("|")?;
            for &filled in row {
                f.write_str(if filled { "+" } else { " " })?;
            }
            f.write_str("|\n")?;
        }
        f.write_str(&"-".repeat(self.width + 2))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(
            crate::types::BOARD_WIDTH as usize,
            crate::types::BOARD_HEIGHT as usize,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pyramid() -> PieceShape {
        PieceShape::parse("0 0 1 0 1 1 2 0").unwrap()
    }

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(10, 20);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_place_updates_stats_incrementally() {
        let mut board = Board::new(3, 6);
        assert_eq!(board.place(&pyramid(), 0, 0), Ok(PlaceResult::RowFilled));

        assert_eq!(board.column_height(0), 1);
        assert_eq!(board.column_height(1), 2);
        assert_eq!(board.column_height(2), 1);
        assert_eq!(board.max_height(), 2);
        assert_eq!(board.row_width(0), 3);
        assert_eq!(board.row_width(1), 1);
        assert_eq!(board.row_width(2), 0);
        assert!(!board.is_committed());
        assert_eq!(board.check_integrity(), Ok(()));
    }

    #[test]
    fn test_place_while_uncommitted_is_rejected() {
        let mut board = Board::new(4, 4);
        board.place(&pyramid(), 0, 0).unwrap();
        let before = board.clone();

        assert_eq!(board.place(&pyramid(), 0, 2), Err(BoardError::Uncommitted));
        assert_eq!(board, before);
    }

    #[test]
    fn test_snapshot_buffer_is_reused() {
        let mut board = Board::new(4, 4);
        board.place(&pyramid(), 0, 0).unwrap();
        board.undo();
        let buffer = board.backup.cells.as_ptr();
        board.place(&pyramid(), 1, 0).unwrap();
        board.undo();
        board.place(&pyramid(), 0, 1).unwrap();
        // Two buffers alternate between live and backup; neither is reallocated.
        assert!(board.backup.cells.as_ptr() == buffer || board.live.cells.as_ptr() == buffer);
    }

    #[test]
    fn test_integrity_reports_stale_stats() {
        let mut board = Board::from_rows(&["#  ", "###"]);
        assert_eq!(board.check_integrity(), Ok(()));

        board.live.heights[0] = 5;
        assert_eq!(
            board.check_integrity(),
            Err(BoardError::Integrity { what: "heights" })
        );

        board.live.heights[0] = 2;
        board.live.widths[1] = 3;
        assert_eq!(
            board.check_integrity(),
            Err(BoardError::Integrity { what: "widths" })
        );

        board.live.widths[1] = 1;
        board.live.max_height = 1;
        assert_eq!(
            board.check_integrity(),
            Err(BoardError::Integrity { what: "max height" })
        );
    }

    #[test]
    fn test_display_draws_top_row_first() {
        let board = Board::from_rows(&["#  ", "###"]);
        assert_eq!(board.to_string(), "|+  |\n|+++|\n-----");
    }
}
