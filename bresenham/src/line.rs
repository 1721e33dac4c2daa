use std::iter::FusedIterator;
use std::mem::swap;

use log::trace;

use crate::Point;

/// Distance between two coordinates along one axis.
pub fn abs_diff(a: i32, b: i32) -> u32 {
    a.abs_diff(b)
}

/// Position of the stepping loop in the normalized (left-to-right,
/// non-steep) frame.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    x: i64,
    y: i64,
    error: i64,
}

impl Cursor {
    fn advance(&mut self, dx: i64, dy: i64, ystep: i64) {
        self.error -= dy;
        if self.error < 0 {
            self.y += ystep;
            self.error += dx;
        }
        self.x += 1;
    }

    // Inverse of `advance`. Only valid while `error` is in `0..dx` and
    // `dy <= dx`, which holds for every cursor a `Line` hands out.
    fn retreat(&mut self, dx: i64, dy: i64, ystep: i64) {
        let error = self.error + dy;
        if error >= dx {
            self.y -= ystep;
            self.error = error - dx;
        } else {
            self.error = error;
        }
        self.x -= 1;
    }
}

/// The grid points of a segment, produced one at a time.
///
/// Points come out starting at the `from` endpoint and ending at `to`, both
/// included. Consecutive points differ by at most one on each axis.
#[derive(Debug)]
pub struct Line {
    steep: bool,
    reversed: bool,
    dx: i64,
    dy: i64,
    ystep: i64,
    front: Cursor,
    back: Cursor,
    remaining: u64,
}

impl Line {
    pub fn new(from: Point, to: Point) -> Line {
        let steep = abs_diff(to.y, from.y) > abs_diff(to.x, from.x);

        let (mut x1, mut y1) = (i64::from(from.x), i64::from(from.y));
        let (mut x2, mut y2) = (i64::from(to.x), i64::from(to.y));
        if steep {
            swap(&mut x1, &mut y1);
            swap(&mut x2, &mut y2);
        }

        let reversed = x1 > x2;
        if reversed {
            swap(&mut x1, &mut x2);
            swap(&mut y1, &mut y2);
        }

        let dx = x2 - x1;
        let dy = (y2 - y1).abs();
        let error = dx / 2;
        let ystep = if y1 < y2 { 1 } else { -1 };

        trace!(
            "line {:?} -> {:?}: steep={} reversed={} dx={} dy={}",
            from,
            to,
            steep,
            reversed,
            dx,
            dy
        );

        // Walking all the way from the left end leaves the accumulator where
        // it started, so the right end can be stepped backwards from `dx / 2`.
        Line {
            steep,
            reversed,
            dx,
            dy,
            ystep,
            front: Cursor { x: x1, y: y1, error },
            back: Cursor { x: x2, y: y2, error },
            remaining: dx as u64 + 1,
        }
    }

    fn emit(&self, c: Cursor) -> Point {
        // Every cursor stays inside the endpoints' bounding box.
        if self.steep {
            Point::new(c.y as i32, c.x as i32)
        } else {
            Point::new(c.x as i32, c.y as i32)
        }
    }

    fn take_left(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let p = self.emit(self.front);
        if self.remaining > 0 {
            self.front.advance(self.dx, self.dy, self.ystep);
        }
        Some(p)
    }

    fn take_right(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let p = self.emit(self.back);
        if self.remaining > 0 {
            self.back.retreat(self.dx, self.dy, self.ystep);
        }
        Some(p)
    }
}

/// Rasterizes the segment from `(x1, y1)` to `(x2, y2)`.
///
/// ```
/// use bresenham::{rasterize_line, Point};
///
/// let points: Vec<Point> = rasterize_line(0, 1, 6, 4).collect();
/// assert_eq!(points.len(), 7);
/// assert_eq!(points[0], Point::new(0, 1));
/// assert_eq!(points[6], Point::new(6, 4));
/// ```
pub fn rasterize_line(x1: i32, y1: i32, x2: i32, y2: i32) -> Line {
    Line::new(Point::new(x1, y1), Point::new(x2, y2))
}

impl Iterator for Line {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.reversed {
            self.take_right()
        } else {
            self.take_left()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl DoubleEndedIterator for Line {
    fn next_back(&mut self) -> Option<Point> {
        if self.reversed {
            self.take_left()
        } else {
            self.take_right()
        }
    }
}

// A full `i32` span has 2^32 points, which only fits a 64-bit `usize`.
#[cfg(target_pointer_width = "64")]
impl ExactSizeIterator for Line {}

impl FusedIterator for Line {}
