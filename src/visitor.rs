//! Pattern: Visitor
//!
//! The set of shapes is closed (an enum), while operations stay open: each
//! new operation is one more `ShapeVisitor` and no shape type changes.
//!
//! Run with: cargo run --bin draw_visitor

use std::f64::consts::PI;

use crate::drawing::Draw;
use crate::shapes::{Cuboid, Sphere};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Cuboid(Cuboid),
}

impl Shape {
    pub fn accept<V: ShapeVisitor>(&self, visitor: &V) -> V::Output {
        match self {
            Shape::Sphere(sphere) => visitor.visit_sphere(sphere),
            Shape::Cuboid(cuboid) => visitor.visit_cuboid(cuboid),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Cuboid> for Shape {
    fn from(cuboid: Cuboid) -> Self {
        Shape::Cuboid(cuboid)
    }
}

pub trait ShapeVisitor {
    type Output;

    fn visit_sphere(&self, sphere: &Sphere) -> Self::Output;
    fn visit_cuboid(&self, cuboid: &Cuboid) -> Self::Output;
}

pub struct DrawVisitor;

impl ShapeVisitor for DrawVisitor {
    type Output = String;

    fn visit_sphere(&self, sphere: &Sphere) -> String {
        sphere.draw()
    }

    fn visit_cuboid(&self, cuboid: &Cuboid) -> String {
        cuboid.draw()
    }
}

pub struct VolumeVisitor;

impl ShapeVisitor for VolumeVisitor {
    type Output = f64;

    fn visit_sphere(&self, sphere: &Sphere) -> f64 {
        4.0 / 3.0 * PI * sphere.radius().powi(3)
    }

    fn visit_cuboid(&self, cuboid: &Cuboid) -> f64 {
        cuboid.width() * cuboid.length() * cuboid.height()
    }
}

pub fn draw_all(shapes: &[Shape]) -> Vec<String> {
    shapes.iter().map(|shape| shape.accept(&DrawVisitor)).collect()
}

pub fn volumes(shapes: &[Shape]) -> Vec<f64> {
    shapes.iter().map(|shape| shape.accept(&VolumeVisitor)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Point;
    use crate::type_erasure::drawable::Object;

    fn scene() -> Vec<Shape> {
        vec![
            Sphere::new(1.0).into(),
            Cuboid::new(0.1, 0.2, 0.3).into(),
            Sphere::at(2.0, Point::new(0.5, 0.6, 0.7)).into(),
            Cuboid::at(0.1, 0.2, 0.3, Point::new(-0.5, -0.6, -0.7)).into(),
        ]
    }

    #[test]
    fn draws_each_shape() {
        let drawn = draw_all(&scene());
        assert_eq!(drawn[0], "Sphere with radius = 1 at [0 0 0]");
        assert_eq!(drawn[2], "Sphere with radius = 2 at [0.5 0.6 0.7]");
        assert_eq!(
            drawn[3],
            "Box with width = 0.1 length = 0.2 height = 0.3 at [-0.5 -0.6 -0.7]"
        );
    }

    #[test]
    fn same_text_as_type_erasure() {
        let erased = [Object::new(Sphere::new(1.0)), Object::new(Cuboid::new(0.1, 0.2, 0.3))];
        let visited = draw_all(&scene()[..2]);
        for (object, text) in erased.iter().zip(&visited) {
            assert_eq!(&object.draw(), text);
        }
    }

    #[test]
    fn computes_volumes() {
        let v = volumes(&scene());
        assert!((v[0] - 4.0 / 3.0 * PI).abs() < 1e-12);
        assert!((v[1] - 0.006).abs() < 1e-12);
        assert!((v[2] - 32.0 / 3.0 * PI).abs() < 1e-12);
    }
}
