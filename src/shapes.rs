//! Value types shared by the dispatch demos.
//!
//! None of these types know about drawing, describing, or volumes; each
//! pattern module attaches that behaviour from the outside.

use std::fmt;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Point { x, y, z }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {}]", self.x, self.y, self.z)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    radius: f64,
    center: Point,
}

impl Sphere {
    pub fn new(radius: f64) -> Self {
        Self::at(radius, Point::ORIGIN)
    }

    pub fn at(radius: f64, center: Point) -> Self {
        Sphere { radius, center }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn center(&self) -> Point {
        self.center
    }
}

/// An axis-aligned box. Named `Cuboid` so it never shadows `std::boxed::Box`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    width: f64,
    length: f64,
    height: f64,
    center: Point,
}

impl Cuboid {
    pub fn new(width: f64, length: f64, height: f64) -> Self {
        Self::at(width, length, height, Point::ORIGIN)
    }

    pub fn at(width: f64, length: f64, height: f64, center: Point) -> Self {
        Cuboid {
            width,
            length,
            height,
            center,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> Point {
        self.center
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    radius: f64,
    center: Point,
}

impl Cylinder {
    pub fn new(radius: f64) -> Self {
        Self::at(radius, Point::ORIGIN)
    }

    pub fn at(radius: f64, center: Point) -> Self {
        Cylinder { radius, center }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn center(&self) -> Point {
        self.center
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        };
        f.write_str(name)
    }
}
