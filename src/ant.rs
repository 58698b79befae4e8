use crate::direction::Orientation;
use crate::world::CellGrid;

/// The ant: a signed position plus a facing.
///
/// Coordinates are signed so the candidate cell of a move can be computed
/// before it is known to be on the tape. Placement is validated by
/// [`crate::Engine::new`]; after every successful [`Ant::step`] the ant is
/// still inside the grid it stepped on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ant {
    x: i64,
    y: i64,
    orientation: Orientation,
}

impl Ant {
    /// Create an ant at `(x, y)` facing `orientation`
    pub fn new(x: i64, y: i64, orientation: Orientation) -> Self {
        Self { x, y, orientation }
    }

    #[inline]
    pub fn x(&self) -> i64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i64 {
        self.y
    }

    #[inline]
    pub fn position(&self) -> (i64, i64) {
        (self.x, self.y)
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Glyph for the current facing: `<`, `>`, `^` or `v`
    #[inline]
    pub fn symbol(&self) -> char {
        self.orientation.symbol()
    }

    fn turn_left(&mut self) {
        self.orientation = self.orientation.turned_left();
    }

    fn turn_right(&mut self) {
        self.orientation = self.orientation.turned_right();
    }

    /// Apply one Langton step on `grid`.
    ///
    /// A white cell is painted black and the ant turns left; a black cell is
    /// painted white and the ant turns right. It then advances one cell in
    /// the new facing. If that cell is off the grid the ant stays put and
    /// `false` is returned; the paint and turn are not undone.
    pub fn step<G: CellGrid + ?Sized>(&mut self, grid: &mut G) -> bool {
        let Some((cx, cy)) = self.cell_on(grid) else {
            return false;
        };

        let black = match grid.get(cx, cy) {
            Ok(black) => black,
            Err(err) => {
                log::error!("ant cannot read its own cell: {}", err);
                return false;
            }
        };
        if let Err(err) = grid.set(cx, cy, !black) {
            log::error!("ant cannot paint its own cell: {}", err);
            return false;
        }
        if black {
            self.turn_right();
        } else {
            self.turn_left();
        }

        let (dx, dy) = self.orientation.delta();
        let (nx, ny) = (self.x + dx, self.y + dy);
        if !grid.is_inside(nx, ny) {
            return false;
        }

        self.x = nx;
        self.y = ny;
        true
    }

    /// Current position as unsigned cell coordinates, if it is on `grid`
    fn cell_on<G: CellGrid + ?Sized>(&self, grid: &G) -> Option<(u32, u32)> {
        if !grid.is_inside(self.x, self.y) {
            return None;
        }
        Some((u32::try_from(self.x).ok()?, u32::try_from(self.y).ok()?))
    }
}
