#![deny(warnings)]

//! Integer-only line rasterization.
//!
//! [`rasterize_line`] walks the grid points of a segment with Bresenham's
//! error accumulator and hands them out lazily through [`Line`].

mod line;
mod point;

pub use line::{abs_diff, rasterize_line, Line};
pub use point::{ParsePointError, Point};
