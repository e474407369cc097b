// Dartboard geometry in viewBox units, y down, slices clockwise from the top.
use std::f64::consts::PI;

use crate::model::{BOARD_SLICE_NUMBERS, RegionId, SlicePart};
use crate::state::{CoordinateSystem, HitSurface, Vector2};

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

pub const BULL_INNER_RADIUS: f64 = 8.0;
pub const BULL_OUTER_RADIUS: f64 = 20.0;
pub const TRIPLE_INNER_RADIUS: f64 = 92.0;
pub const TRIPLE_OUTER_RADIUS: f64 = 102.0;
pub const DOUBLE_INNER_RADIUS: f64 = 140.0;
pub const DOUBLE_OUTER_RADIUS: f64 = 150.0;
pub const RIM_RADIUS: f64 = 181.5;
/// Radius the slice numbers are drawn at.
pub const NUMBER_RADIUS: f64 = 166.0;
pub const SLICE_ANGLE: f64 = 18.0;

pub const SLICE_BANDS: [(SlicePart, f64, f64); 4] = [
    (SlicePart::Inner, BULL_OUTER_RADIUS, TRIPLE_INNER_RADIUS),
    (SlicePart::Triple, TRIPLE_INNER_RADIUS, TRIPLE_OUTER_RADIUS),
    (SlicePart::Outer, TRIPLE_OUTER_RADIUS, DOUBLE_INNER_RADIUS),
    (SlicePart::Double, DOUBLE_INNER_RADIUS, DOUBLE_OUTER_RADIUS),
];

pub fn locate_board(p: Vector2) -> Option<RegionId> {
    let r = p.x.hypot(p.y);
    if r > RIM_RADIUS {
        return None;
    }
    if r <= BULL_INNER_RADIUS {
        return Some(RegionId::bull(SlicePart::Inner));
    }
    if r <= BULL_OUTER_RADIUS {
        return Some(RegionId::bull(SlicePart::Outer));
    }
    if r > DOUBLE_OUTER_RADIUS {
        return Some(RegionId::rim());
    }
    let number = BOARD_SLICE_NUMBERS[slice_index(p)];
    SLICE_BANDS
        .iter()
        .find(|(_, inner, outer)| r > *inner && r <= *outer)
        .map(|(part, _, _)| RegionId::slice(number, *part))
}

fn slice_index(p: Vector2) -> usize {
    // Clockwise angle from the top, y pointing down.
    let deg = p.x.atan2(-p.y).to_degrees().rem_euclid(360.0);
    ((deg / SLICE_ANGLE).round() as usize) % BOARD_SLICE_NUMBERS.len()
}

pub fn polar(radius: f64, deg: f64) -> Vector2 {
    let rad = deg * PI / 180.0;
    Vector2::new(radius * rad.sin(), -radius * rad.cos())
}

pub fn annular_sector_path(inner: f64, outer: f64, start_deg: f64, end_deg: f64) -> String {
    let large_arc = if end_deg - start_deg > 180.0 { 1 } else { 0 };
    let a = polar(outer, start_deg);
    let b = polar(outer, end_deg);
    let c = polar(inner, end_deg);
    let d = polar(inner, start_deg);
    format!(
        "M {:.3} {:.3} A {outer} {outer} 0 {large_arc} 1 {:.3} {:.3} L {:.3} {:.3} A {inner} {inner} 0 {large_arc} 0 {:.3} {:.3} Z",
        a.x, a.y, b.x, b.y, c.x, c.y, d.x, d.y
    )
}

pub fn ring_path(inner: f64, outer: f64) -> String {
    let circle = |r: f64| format!("M {r} 0 A {r} {r} 0 1 1 {} 0 A {r} {r} 0 1 1 {r} 0 Z", -r);
    if inner > 0.0 {
        format!("{} {}", circle(outer), circle(inner))
    } else {
        circle(outer)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Dartboard;

impl HitSurface for Dartboard {
    fn locate(&self, screen: Vector2, cs: &CoordinateSystem) -> Option<RegionId> {
        locate_board(cs.to_board_space(screen))
    }
}
