// Touch samples and the client-pixel to screen-space mapping.
use super::camera::Vector2;

pub const VIEW_BOX_SIZE: f64 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub id: i32,
    pub screen: Vector2,
}

impl TouchPoint {
    pub fn new(id: i32, screen: Vector2) -> Self {
        Self { id, screen }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub half_width: f64,
    pub half_height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            half_width: VIEW_BOX_SIZE / 2.0,
            half_height: VIEW_BOX_SIZE / 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMapping {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenMapping {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// CSS pixels per screen-space unit; the viewBox is letterboxed into the element.
    pub fn fit(&self) -> f64 {
        let fit = self.width.min(self.height) / VIEW_BOX_SIZE;
        if fit > 0.0 { fit } else { 1.0 }
    }

    pub fn to_screen(&self, client_x: f64, client_y: f64) -> Vector2 {
        let fit = self.fit();
        Vector2::new(
            (client_x - self.left - self.width / 2.0) / fit,
            (client_y - self.top - self.height / 2.0) / fit,
        )
    }

    pub fn viewport(&self) -> Viewport {
        let fit = self.fit();
        Viewport {
            half_width: self.width / 2.0 / fit,
            half_height: self.height / 2.0 / fit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_element_maps_center_to_origin() {
        let m = ScreenMapping::new(0.0, 0.0, 800.0, 800.0);
        assert_eq!(m.fit(), 2.0);
        assert_eq!(m.to_screen(400.0, 400.0), Vector2::ZERO);
        assert_eq!(m.to_screen(480.0, 300.0), Vector2::new(40.0, -50.0));
    }

    #[test]
    fn letterboxed_element_uses_smaller_side() {
        let m = ScreenMapping::new(10.0, 20.0, 400.0, 800.0);
        assert_eq!(m.fit(), 1.0);
        let vp = m.viewport();
        assert_eq!(vp.half_width, 200.0);
        assert_eq!(vp.half_height, 400.0);
        assert_eq!(m.to_screen(210.0, 420.0), Vector2::ZERO);
    }

    #[test]
    fn zero_sized_element_does_not_divide_by_zero() {
        let m = ScreenMapping::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(m.fit(), 1.0);
        assert_eq!(m.to_screen(5.0, 5.0), Vector2::new(5.0, 5.0));
    }
}
