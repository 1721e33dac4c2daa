use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

/// A point on the integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point { x, y }
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParsePointError {
    #[error("expected a point as `x,y`, got `{0}`")]
    MissingSeparator(String),
    #[error("invalid x coordinate `{text}`")]
    InvalidX {
        text: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid y coordinate `{text}`")]
    InvalidY {
        text: String,
        #[source]
        source: ParseIntError,
    },
}

impl FromStr for Point {
    type Err = ParsePointError;

    /// Parses `x,y`. Surrounding whitespace on either number is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| ParsePointError::MissingSeparator(s.to_string()))?;

        let x = x.trim();
        let y = y.trim();

        let x = x.parse().map_err(|source| ParsePointError::InvalidX {
            text: x.to_string(),
            source,
        })?;
        let y = y.parse().map_err(|source| ParsePointError::InvalidY {
            text: y.to_string(),
            source,
        })?;

        Ok(Point { x, y })
    }
}
