use crate::ant::Ant;
use crate::direction::Orientation;
use crate::error::SimError;
use crate::world::{CellGrid, Grid};

/// Owns the tape and the ant, and counts steps
#[derive(Clone, Debug)]
pub struct Engine {
    grid: Grid,
    ant: Ant,
    steps: u64,
    finished: bool,
}

impl Engine {
    /// Create a `width` x `height` white tape with the ant at `(ant_x, ant_y)`
    pub fn new(
        width: u32,
        height: u32,
        ant_x: i64,
        ant_y: i64,
        orientation: Orientation,
    ) -> Result<Self, SimError> {
        let grid = Grid::new(width, height)?;
        if !grid.is_inside(ant_x, ant_y) {
            return Err(SimError::InvalidInitialPosition {
                x: ant_x,
                y: ant_y,
                width,
                height,
            });
        }
        log::info!(
            "engine ready: {}x{} tape, ant at ({}, {}) facing {}",
            width,
            height,
            ant_x,
            ant_y,
            orientation.as_str()
        );
        Ok(Self {
            grid,
            ant: Ant::new(ant_x, ant_y, orientation),
            steps: 0,
            finished: false,
        })
    }

    /// Paint the given cells black. Off-tape entries are skipped.
    ///
    /// Returns how many entries were applied.
    pub fn seed_black_cells(&mut self, cells: &[(u32, u32)]) -> usize {
        let mut applied = 0;
        for &(x, y) in cells {
            match self.grid.set(x, y, true) {
                Ok(()) => applied += 1,
                Err(err) => log::debug!("skipping seed: {}", err),
            }
        }
        applied
    }

    /// Paint each cell black with the given probability (clamped to `0..=1`).
    ///
    /// Returns how many cells were painted.
    pub fn scatter_black_cells(&mut self, probability: f64, rng: &mut fastrand::Rng) -> usize {
        let probability = probability.clamp(0.0, 1.0);
        let mut painted = 0;
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                if rng.f64() < probability && self.grid.set(x, y, true).is_ok() {
                    painted += 1;
                }
            }
        }
        log::debug!("scattered {} black cells (p = {})", painted, probability);
        painted
    }

    /// Run one step. The counter advances even when the ant cannot move.
    pub fn step(&mut self) -> bool {
        let moved = self.ant.step(&mut self.grid);
        self.steps += 1;
        if !moved && !self.finished {
            self.finished = true;
            log::info!(
                "ant stopped at ({}, {}) after {} steps",
                self.ant.x(),
                self.ant.y(),
                self.steps
            );
        }
        moved
    }

    /// Run up to `limit` steps, or until the ant stops when `limit` is 0.
    ///
    /// Returns the number of steps in which the ant moved. A result below
    /// `limit` means the ant reached the edge.
    pub fn run_steps(&mut self, limit: u64) -> u64 {
        let mut executed = 0;
        while limit == 0 || executed < limit {
            if !self.step() {
                break;
            }
            executed += 1;
        }
        executed
    }

    /// Total number of `step` calls so far
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Whether any step has failed to move the ant
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[inline]
    pub fn ant(&self) -> &Ant {
        &self.ant
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Read-only view for rendering and saving
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot { engine: self }
    }
}

/// Borrowed view over an [`Engine`]
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    engine: &'a Engine,
}

impl<'a> Snapshot<'a> {
    #[inline]
    pub fn width(&self) -> u32 {
        self.engine.grid.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.engine.grid.height()
    }

    #[inline]
    pub fn steps(&self) -> u64 {
        self.engine.steps
    }

    #[inline]
    pub fn ant_position(&self) -> (i64, i64) {
        self.engine.ant.position()
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.engine.ant.orientation()
    }

    #[inline]
    pub fn ant_symbol(&self) -> char {
        self.engine.ant.symbol()
    }

    /// Whether `(x, y)` is black; off-tape cells read as white
    #[inline]
    pub fn is_black(&self, x: u32, y: u32) -> bool {
        self.engine.grid.get(x, y).unwrap_or(false)
    }

    /// Whether the ant stands on `(x, y)`
    #[inline]
    pub fn is_ant_at(&self, x: u32, y: u32) -> bool {
        self.ant_position() == (x as i64, y as i64)
    }

    /// Glyph for `(x, y)` without the ant overlay
    pub fn cell_char(&self, x: u32, y: u32) -> char {
        self.engine.grid.cell_char(x, y).unwrap_or(' ')
    }

    /// Black cells, `y` outer and `x` inner
    pub fn black_cells(&self) -> impl Iterator<Item = (u32, u32)> + 'a {
        let engine: &'a Engine = self.engine;
        let grid = &engine.grid;
        (0..grid.height()).flat_map(move |y| {
            (0..grid.width()).filter(move |&x| grid.get(x, y).unwrap_or(false)).map(move |x| (x, y))
        })
    }
}
