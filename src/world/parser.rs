use crate::direction::Orientation;
use crate::error::{ParseError, SimError};
use crate::simulation::Engine;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

const DIMENSIONS: &str = "width height";
const ANT: &str = "x y orientation";

/// Everything an initialization (or saved state) file describes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Setup {
    pub width: u32,
    pub height: u32,
    pub ant_x: i64,
    pub ant_y: i64,
    pub orientation: Orientation,
    /// Cells to paint black before the first step; may include off-tape entries
    pub blacks: Vec<(u32, u32)>,
}

impl Setup {
    /// Build the engine and seed its black cells
    pub fn build(&self) -> Result<Engine, SimError> {
        let mut engine = Engine::new(
            self.width,
            self.height,
            self.ant_x,
            self.ant_y,
            self.orientation,
        )?;
        engine.seed_black_cells(&self.blacks);
        Ok(engine)
    }
}

/// Parse a setup from a file path
pub fn parse_setup<P: AsRef<Path>>(path: P) -> Result<Setup, ParseError> {
    let file = File::open(path.as_ref())?;
    let mut reader = BufReader::with_capacity(64 * 1024, file);
    let mut src = String::new();
    reader.read_to_string(&mut src)?;
    parse_setup_from_str(&src)
}

/// Parse a setup from an in-memory string.
///
/// Fields are whitespace separated: `width height`, then `x y orientation`,
/// then any number of `x y` pairs. Pair reading stops at the first token
/// that is not an unsigned integer; the remainder is ignored.
pub fn parse_setup_from_str(src: &str) -> Result<Setup, ParseError> {
    let mut tokens = src.split_whitespace();

    let width: u32 = field(&mut tokens, 1, DIMENSIONS, "width")?;
    let height: u32 = field(&mut tokens, 1, DIMENSIONS, "height")?;
    if width == 0 || height == 0 {
        return Err(ParseError::InvalidDimensions { width, height });
    }

    let ant_x: i64 = field(&mut tokens, 2, ANT, "x")?;
    let ant_y: i64 = field(&mut tokens, 2, ANT, "y")?;
    let code: i64 = field(&mut tokens, 2, ANT, "orientation")?;
    let orientation = Orientation::try_from(code)?;

    let mut blacks = Vec::new();
    loop {
        let Some(raw_x) = tokens.next() else { break };
        let parsed = raw_x
            .parse::<u32>()
            .ok()
            .zip(tokens.next().and_then(|raw_y| raw_y.parse::<u32>().ok()));
        match parsed {
            Some(cell) => blacks.push(cell),
            None => {
                log::warn!(
                    "ignoring trailing setup content starting at '{}': expected an 'x y' pair of unsigned integers",
                    raw_x
                );
                break;
            }
        }
    }

    Ok(Setup {
        width,
        height,
        ant_x,
        ant_y,
        orientation,
        blacks,
    })
}

fn field<'a, T, I>(
    tokens: &mut I,
    line: usize,
    expected: &'static str,
    name: &'static str,
) -> Result<T, ParseError>
where
    T: FromStr,
    I: Iterator<Item = &'a str>,
{
    let raw = tokens.next().ok_or(ParseError::MissingField {
        line,
        expected,
        field: name,
    })?;
    raw.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        expected,
        field: name,
        value: raw.to_string(),
    })
}
