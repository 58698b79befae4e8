use crate::error::SimError;

/// Minimal cell surface the ant needs. Lets [`crate::Ant`] run against
/// anything that can answer bounds and colour queries.
pub trait CellGrid {
    /// Colour of `(x, y)`; `true` is black.
    fn get(&self, x: u32, y: u32) -> Result<bool, SimError>;

    /// Overwrite the colour of `(x, y)`.
    fn set(&mut self, x: u32, y: u32, black: bool) -> Result<(), SimError>;

    /// Whether signed coordinates fall inside the half-open bounds.
    fn is_inside(&self, x: i64, y: i64) -> bool;
}

/// Bounded tape of binary cells, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-white grid. Both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> Result<Self, SimError> {
        if width == 0 || height == 0 {
            return Err(SimError::InvalidDimensions { width, height });
        }
        let too_large = SimError::TooLarge { width, height };
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(too_large.clone())?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large)?;
        cells.resize(len, false);
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `' '` for white, `'X'` for black
    pub fn cell_char(&self, x: u32, y: u32) -> Result<char, SimError> {
        Ok(if self.get(x, y)? { 'X' } else { ' ' })
    }

    /// Number of black cells
    pub fn count_black(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Result<usize, SimError> {
        if x >= self.width || y >= self.height {
            return Err(SimError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }
}

impl CellGrid for Grid {
    #[inline]
    fn get(&self, x: u32, y: u32) -> Result<bool, SimError> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    #[inline]
    fn set(&mut self, x: u32, y: u32, black: bool) -> Result<(), SimError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = black;
        Ok(())
    }

    #[inline]
    fn is_inside(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation_all_white() {
        let grid = Grid::new(4, 3).unwrap();

        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        for y in 0..3 {
            for x in 0..4 {
                assert!(!grid.get(x, y).unwrap());
            }
        }
        assert_eq!(grid.count_black(), 0);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(SimError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn test_oversized_grid_rejected() {
        assert_eq!(
            Grid::new(u32::MAX, u32::MAX),
            Err(SimError::TooLarge {
                width: u32::MAX,
                height: u32::MAX
            })
        );
    }

    #[test]
    fn test_set_then_get() {
        let mut grid = Grid::new(3, 2).unwrap();

        grid.set(2, 1, true).unwrap();
        assert!(grid.get(2, 1).unwrap());
        assert!(!grid.get(1, 1).unwrap());

        grid.set(2, 1, false).unwrap();
        assert!(!grid.get(2, 1).unwrap());
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = Grid::new(3, 2).unwrap();

        assert_eq!(
            grid.get(3, 0),
            Err(SimError::OutOfBounds {
                x: 3,
                y: 0,
                width: 3,
                height: 2
            })
        );
        assert!(grid.get(0, 2).is_err());
        assert!(grid.set(0, 2, true).is_err());
        assert_eq!(grid.count_black(), 0);
    }

    #[test]
    fn test_is_inside_half_open_bounds() {
        let grid = Grid::new(3, 2).unwrap();

        assert!(grid.is_inside(0, 0));
        assert!(grid.is_inside(2, 1));
        assert!(!grid.is_inside(3, 1));
        assert!(!grid.is_inside(2, 2));
        assert!(!grid.is_inside(-1, 0));
        assert!(!grid.is_inside(0, -1));
        assert!(!grid.is_inside(i64::MIN, i64::MAX));
    }

    #[test]
    fn test_cell_char() {
        let mut grid = Grid::new(2, 1).unwrap();
        grid.set(1, 0, true).unwrap();

        assert_eq!(grid.cell_char(0, 0).unwrap(), ' ');
        assert_eq!(grid.cell_char(1, 0).unwrap(), 'X');
        assert!(grid.cell_char(2, 0).is_err());
    }
}
