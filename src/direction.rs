use crate::error::ParseError;

/// Facing of the ant. Discriminants are the codes used by the file formats.
///
/// `Up` decreases `y` (screen convention, row 0 is the top line).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Orientation {
    Left = 0,
    Right = 1,
    Up = 2,
    Down = 3,
}

impl TryFrom<i64> for Orientation {
    type Error = ParseError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Orientation::Left),
            1 => Ok(Orientation::Right),
            2 => Ok(Orientation::Up),
            3 => Ok(Orientation::Down),
            _ => Err(ParseError::InvalidOrientation(code)),
        }
    }
}

impl Orientation {
    /// All orientations in code order
    pub const ALL: [Orientation; 4] = [
        Orientation::Left,
        Orientation::Right,
        Orientation::Up,
        Orientation::Down,
    ];

    /// Numeric code written to state files
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Quarter turn clockwise: RIGHT -> DOWN -> LEFT -> UP -> RIGHT
    #[inline]
    pub const fn turned_right(self) -> Self {
        match self {
            Orientation::Right => Orientation::Down,
            Orientation::Down => Orientation::Left,
            Orientation::Left => Orientation::Up,
            Orientation::Up => Orientation::Right,
        }
    }

    /// Quarter turn counter-clockwise, inverse of [`Orientation::turned_right`]
    #[inline]
    pub const fn turned_left(self) -> Self {
        match self {
            Orientation::Right => Orientation::Up,
            Orientation::Up => Orientation::Left,
            Orientation::Left => Orientation::Down,
            Orientation::Down => Orientation::Right,
        }
    }

    /// Unit step `(dx, dy)` in this direction
    #[inline]
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Orientation::Left => (-1, 0),
            Orientation::Right => (1, 0),
            Orientation::Up => (0, -1),
            Orientation::Down => (0, 1),
        }
    }

    /// Display glyph
    pub const fn symbol(self) -> char {
        match self {
            Orientation::Left => '<',
            Orientation::Right => '>',
            Orientation::Up => '^',
            Orientation::Down => 'v',
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Orientation::Left => "left",
            Orientation::Right => "right",
            Orientation::Up => "up",
            Orientation::Down => "down",
        }
    }
}
