//! XOR pattern math shared by both render backends.
//!
//! Everything here is pure and portable: it compiles on the host so the
//! frame semantics can be unit-tested without a browser.

/// Cells per grid side when the page does not override it.
pub const DEFAULT_CELLS: u32 = 64;

/// Pattern advance period when the page does not override it.
pub const DEFAULT_FRAME_MS: f64 = 100.0;

/// One grid square, addressed from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

/// How active cells are enumerated per frame.
///
/// `Scan` walks each column and paints row `x ^ frame` without a bounds
/// check, so rows past the grid edge land off-surface and get clipped.
/// `Grid` sweeps the full grid and keeps only in-range matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternMode {
    Scan,
    Grid,
}

/// Active cells of `frame`, enumerated per `mode`.
pub fn active_cells(cells: u32, frame: u32, mode: PatternMode) -> Vec<Cell> {
    match mode {
        PatternMode::Scan => scan_cells(cells, frame),
        PatternMode::Grid => grid_cells(cells, frame),
    }
}

/// Single-pass form: exactly one cell per column, `y` unclipped.
pub fn scan_cells(cells: u32, frame: u32) -> Vec<Cell> {
    (0..cells).map(|x| Cell { x, y: x ^ frame }).collect()
}

/// Double-pass form: the in-range subset of [`scan_cells`].
pub fn grid_cells(cells: u32, frame: u32) -> Vec<Cell> {
    let mut active = Vec::with_capacity(cells as usize);
    for x in 0..cells {
        for y in 0..cells {
            if y == (x ^ frame) {
                active.push(Cell { x, y });
            }
        }
    }
    active
}

/// Frame index derived from a monotonic clock, for the time-driven backend.
pub fn frame_at(elapsed_ms: f64, frame_ms: f64, cells: u32) -> u32 {
    let ticks = (elapsed_ms / frame_ms).floor();
    (ticks as u64 % u64::from(cells)) as u32
}

/// Whole-pixel cell size; the division remainder is an unpainted margin.
pub fn cell_metrics(width: u32, height: u32, cells: u32) -> (u32, u32) {
    (width / cells, height / cells)
}

/// The single integer driving pattern evolution.
///
/// Walks `origin..=cells` inclusive, then wraps back to `origin`. Scan mode
/// starts at 0; grid mode starts at 1. The inclusive endpoint is where the
/// scan form paints its one fully off-grid frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameCounter {
    value: u32,
    cells: u32,
    origin: u32,
}

impl FrameCounter {
    pub fn for_mode(cells: u32, mode: PatternMode) -> Self {
        let origin = match mode {
            PatternMode::Scan => 0,
            PatternMode::Grid => 1,
        };
        Self {
            value: origin,
            cells,
            origin,
        }
    }

    pub fn get(&self) -> u32 {
        self.value
    }

    pub fn advance(&mut self) {
        self.value = if self.value >= self.cells {
            self.origin
        } else {
            self.value + 1
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(cells: &[Cell]) -> Vec<(u32, u32)> {
        cells.iter().map(|c| (c.x, c.y)).collect()
    }

    #[test]
    fn scan_matches_worked_examples() {
        assert_eq!(pairs(&scan_cells(4, 1)), [(0, 1), (1, 0), (2, 3), (3, 2)]);
        assert_eq!(pairs(&scan_cells(4, 3)), [(0, 3), (1, 2), (2, 1), (3, 0)]);
    }

    #[test]
    fn scan_emits_one_cell_per_column() {
        for frame in 0..=64 {
            let cells = scan_cells(64, frame);
            assert_eq!(cells.len(), 64);
            for (x, cell) in cells.iter().enumerate() {
                assert_eq!(cell.x, x as u32);
                assert_eq!(cell.y, cell.x ^ frame);
            }
        }
    }

    #[test]
    fn scan_leaves_rows_unclipped() {
        // x ^ frame leaves the grid once the counter reaches its inclusive
        // endpoint: every row of frame 4 on a 4-grid is out of range.
        let cells = scan_cells(4, 4);
        assert_eq!(pairs(&cells), [(0, 4), (1, 5), (2, 6), (3, 7)]);
        assert!(cells.iter().all(|c| c.y >= 4));
    }

    #[test]
    fn grid_is_the_in_range_subset_of_scan() {
        for n in [4u32, 8, 64] {
            for frame in 0..=n {
                let clipped: Vec<Cell> = scan_cells(n, frame)
                    .into_iter()
                    .filter(|c| c.y < n)
                    .collect();
                assert_eq!(grid_cells(n, frame), clipped);
            }
        }
    }

    #[test]
    fn grid_stays_in_range() {
        for frame in 0..=64 {
            assert!(grid_cells(64, frame).iter().all(|c| c.y < 64));
        }
    }

    #[test]
    fn scan_counter_wraps_after_inclusive_endpoint() {
        let mut counter = FrameCounter::for_mode(4, PatternMode::Scan);
        let mut seen = Vec::new();
        for _ in 0..6 {
            seen.push(counter.get());
            counter.advance();
        }
        assert_eq!(seen, [0, 1, 2, 3, 4, 0]);
    }

    #[test]
    fn grid_counter_cycle_is_grid_sized() {
        let mut counter = FrameCounter::for_mode(4, PatternMode::Grid);
        assert_eq!(counter.get(), 1);
        for _ in 0..4 {
            counter.advance();
        }
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn frame_derivation_from_elapsed_time() {
        assert_eq!(frame_at(250.0, 100.0, 64), 2);
        assert_eq!(frame_at(6400.0, 100.0, 64), 0);
        assert_eq!(frame_at(0.0, 100.0, 64), 0);
        assert_eq!(frame_at(99.9, 100.0, 64), 0);
    }

    #[test]
    fn cell_metrics_floor_and_track_resizes() {
        assert_eq!(cell_metrics(640, 480, 64), (10, 7));
        // 650 is not a multiple of 64; the 10px remainder stays unpainted.
        assert_eq!(cell_metrics(650, 480, 64), (10, 7));
        assert_eq!(cell_metrics(1280, 1024, 64), (20, 16));
    }
}
