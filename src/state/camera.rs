// Board view coordinate system. screen = (board - offset) * scale.
use std::ops::{Add, Mul, Sub};

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl Add for Vector2 {
    type Output = Vector2;
    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    fn sub(self, rhs: Vector2) -> Vector2 {
        diff(self, rhs)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;
    fn mul(self, k: f64) -> Vector2 {
        scale(self, k)
    }
}

pub fn diff(a: Vector2, b: Vector2) -> Vector2 {
    Vector2::new(a.x - b.x, a.y - b.y)
}

pub fn scale(v: Vector2, k: f64) -> Vector2 {
    Vector2::new(v.x * k, v.y * k)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateSystem {
    pub offset: Vector2,
    pub scale: f64,
}

impl Default for CoordinateSystem {
    fn default() -> Self {
        Self {
            offset: Vector2::ZERO,
            scale: 1.0,
        }
    }
}

impl CoordinateSystem {
    pub fn new(offset: Vector2, scale: f64) -> Self {
        Self { offset, scale }
    }

    pub fn center(&self) -> Vector2 {
        self.offset
    }

    pub fn to_board_space(&self, screen: Vector2) -> Vector2 {
        Vector2::new(
            screen.x / self.scale + self.offset.x,
            screen.y / self.scale + self.offset.y,
        )
    }

    pub fn translate(&self, delta: Vector2) -> CoordinateSystem {
        CoordinateSystem::new(self.offset + delta, self.scale)
    }

    /// Rescale so that `point` stays at the same screen location.
    pub fn zoom_on_point(&self, point: Vector2, new_scale: f64) -> CoordinateSystem {
        let ratio = self.scale / new_scale;
        CoordinateSystem::new(point - (point - self.offset) * ratio, new_scale)
    }

    pub fn css_transform(&self) -> String {
        format!(
            "scale({}) translate({}px, {}px)",
            self.scale, -self.offset.x, -self.offset.y
        )
    }
}
