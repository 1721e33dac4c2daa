extern crate bresenham;

use std::collections::HashSet;

use bresenham::{rasterize_line, Point};

const BOUND: i32 = 6;

fn endpoints() -> impl Iterator<Item = (i32, i32, i32, i32)> {
    let range = -BOUND..=BOUND;
    range.clone().flat_map(move |x1| {
        let range = range.clone();
        range.clone().flat_map(move |y1| {
            let range = range.clone();
            range.clone().flat_map(move |x2| {
                range.clone().map(move |y2| (x1, y1, x2, y2))
            })
        })
    })
}

#[test]
fn starts_and_ends_at_the_endpoints() {
    for (x1, y1, x2, y2) in endpoints() {
        let points: Vec<Point> = rasterize_line(x1, y1, x2, y2).collect();
        assert_eq!(points.first(), Some(&Point::new(x1, y1)));
        assert_eq!(points.last(), Some(&Point::new(x2, y2)));
    }
}

#[test]
fn consecutive_points_are_eight_connected() {
    for (x1, y1, x2, y2) in endpoints() {
        let points: Vec<Point> = rasterize_line(x1, y1, x2, y2).collect();
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(
                (a.x - b.x).abs() <= 1 && (a.y - b.y).abs() <= 1,
                "{a:?} -> {b:?} in ({x1},{y1})-({x2},{y2})"
            );
            assert_ne!(a, b);
        }
    }
}

#[test]
fn one_point_per_step_of_the_longer_axis() {
    for (x1, y1, x2, y2) in endpoints() {
        let expected = (x2 - x1).abs().max((y2 - y1).abs()) as usize + 1;
        let line = rasterize_line(x1, y1, x2, y2);
        assert_eq!(line.size_hint(), (expected, Some(expected)));
        assert_eq!(line.count(), expected);
    }
}

#[test]
fn reversing_the_endpoints_reverses_the_points() {
    for (x1, y1, x2, y2) in endpoints() {
        let forward: Vec<Point> = rasterize_line(x1, y1, x2, y2).collect();
        let mut backward: Vec<Point> = rasterize_line(x2, y2, x1, y1).collect();
        backward.reverse();
        assert_eq!(forward, backward);

        let a: HashSet<Point> = forward.into_iter().collect();
        let b: HashSet<Point> = backward.into_iter().collect();
        assert_eq!(a, b);
    }
}

#[test]
fn iterating_from_the_back_gives_the_same_points() {
    for (x1, y1, x2, y2) in endpoints() {
        let forward: Vec<Point> = rasterize_line(x1, y1, x2, y2).collect();
        let mut backward: Vec<Point> = rasterize_line(x1, y1, x2, y2).rev().collect();
        backward.reverse();
        assert_eq!(forward, backward);
    }
}

#[test]
fn every_point_stays_inside_the_bounding_box() {
    for (x1, y1, x2, y2) in endpoints() {
        for p in rasterize_line(x1, y1, x2, y2) {
            assert!(p.x >= x1.min(x2) && p.x <= x1.max(x2));
            assert!(p.y >= y1.min(y2) && p.y <= y1.max(y2));
        }
    }
}
