//! Drawing behaviour attached to the shapes from the outside.
//!
//! [`Draw`] is the default rendering of each shape. [`Drawer`] is anything
//! that can render a given shape type: a closure `Fn(&T) -> String` or a
//! configured strategy such as [`GlDrawStrategy`].

use crate::shapes::{Color, Cuboid, Cylinder, Sphere};

pub trait Draw {
    fn draw(&self) -> String;
}

impl Draw for Sphere {
    fn draw(&self) -> String {
        format!("Sphere with radius = {} at {}", self.radius(), self.center())
    }
}

impl Draw for Cuboid {
    fn draw(&self) -> String {
        format!(
            "Box with width = {} length = {} height = {} at {}",
            self.width(),
            self.length(),
            self.height(),
            self.center()
        )
    }
}

impl Draw for Cylinder {
    fn draw(&self) -> String {
        format!("Cylinder with radius = {} at {}", self.radius(), self.center())
    }
}

pub trait Drawer<T> {
    fn render(&self, shape: &T) -> String;
}

impl<T, F> Drawer<T> for F
where
    F: Fn(&T) -> String,
{
    fn render(&self, shape: &T) -> String {
        self(shape)
    }
}

/// Draws spheres and boxes in a fixed colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlDrawStrategy {
    color: Color,
}

impl GlDrawStrategy {
    pub fn new(color: Color) -> Self {
        GlDrawStrategy { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Drawer<Sphere> for GlDrawStrategy {
    fn render(&self, sphere: &Sphere) -> String {
        format!("{} and color = {}", sphere.draw(), self.color)
    }
}

impl Drawer<Cuboid> for GlDrawStrategy {
    fn render(&self, cuboid: &Cuboid) -> String {
        format!("{} and color = {}", cuboid.draw(), self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Point;

    #[test]
    fn default_renderings() {
        assert_eq!(Sphere::new(1.0).draw(), "Sphere with radius = 1 at [0 0 0]");
        assert_eq!(
            Cuboid::new(0.1, 0.2, 0.3).draw(),
            "Box with width = 0.1 length = 0.2 height = 0.3 at [0 0 0]"
        );
        assert_eq!(
            Cylinder::at(0.15, Point::new(0.2, 0.3, 0.0)).draw(),
            "Cylinder with radius = 0.15 at [0.2 0.3 0]"
        );
    }

    #[test]
    fn gl_strategy_appends_color() {
        let gl = GlDrawStrategy::new(Color::Red);
        assert_eq!(
            Drawer::render(&gl, &Sphere::new(1.0)),
            "Sphere with radius = 1 at [0 0 0] and color = red"
        );
        assert_eq!(
            Drawer::render(&gl, &Cuboid::new(0.1, 0.2, 0.3)),
            "Box with width = 0.1 length = 0.2 height = 0.3 at [0 0 0] and color = red"
        );
    }

    #[test]
    fn closures_are_drawers() {
        let custom = |c: &Cylinder| format!("custom cylinder r={}", c.radius());
        assert_eq!(Drawer::render(&custom, &Cylinder::new(2.0)), "custom cylinder r=2");
    }
}
