//! Pattern: Strategy
//!
//! Each shape is handed its draw behaviour at construction. The strategy is
//! a function value that may be empty, and an empty one is rejected before
//! the shape exists.
//!
//! Run with: cargo run --bin draw_strategy

use std::fmt;
use std::rc::Rc;

use crate::drawing::{Drawer, GlDrawStrategy};
use crate::error::{PatternError, Result};
use crate::shapes::{Color, Cuboid, Point, Sphere};

/// A possibly-empty, cheaply cloneable draw function for `T`.
pub struct DrawStrategy<T> {
    drawer: Option<Rc<dyn Drawer<T>>>,
}

impl<T> DrawStrategy<T> {
    pub fn new<D: Drawer<T> + 'static>(drawer: D) -> Self {
        DrawStrategy {
            drawer: Some(Rc::new(drawer)),
        }
    }

    pub fn empty() -> Self {
        DrawStrategy { drawer: None }
    }

    pub fn is_empty(&self) -> bool {
        self.drawer.is_none()
    }
}

impl<T> Clone for DrawStrategy<T> {
    fn clone(&self) -> Self {
        DrawStrategy {
            drawer: self.drawer.clone(),
        }
    }
}

impl<T> Default for DrawStrategy<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> fmt::Debug for DrawStrategy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawStrategy")
            .field("empty", &self.is_empty())
            .finish()
    }
}

impl<T, F> From<F> for DrawStrategy<T>
where
    F: Fn(&T) -> String + 'static,
{
    fn from(draw: F) -> Self {
        DrawStrategy::new(draw)
    }
}

fn require<T>(strategy: DrawStrategy<T>) -> Result<Rc<dyn Drawer<T>>> {
    strategy.drawer.ok_or_else(|| {
        tracing::warn!("rejected empty draw strategy");
        PatternError::InvalidArgument("Invalid draw strategy")
    })
}

/// Runtime interface shared by every strategy-driven shape.
pub trait Drawable {
    fn draw(&self) -> String;
}

pub struct StrategySphere {
    sphere: Sphere,
    drawer: Rc<dyn Drawer<Sphere>>,
}

impl StrategySphere {
    pub fn new(radius: f64, center: Point, drawer: DrawStrategy<Sphere>) -> Result<Self> {
        Ok(StrategySphere {
            sphere: Sphere::at(radius, center),
            drawer: require(drawer)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.sphere.radius()
    }

    pub fn center(&self) -> Point {
        self.sphere.center()
    }
}

impl Drawable for StrategySphere {
    fn draw(&self) -> String {
        self.drawer.render(&self.sphere)
    }
}

pub struct StrategyBox {
    cuboid: Cuboid,
    drawer: Rc<dyn Drawer<Cuboid>>,
}

impl StrategyBox {
    pub fn new(
        width: f64,
        length: f64,
        height: f64,
        center: Point,
        drawer: DrawStrategy<Cuboid>,
    ) -> Result<Self> {
        Ok(StrategyBox {
            cuboid: Cuboid::at(width, length, height, center),
            drawer: require(drawer)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.cuboid.width()
    }

    pub fn length(&self) -> f64 {
        self.cuboid.length()
    }

    pub fn height(&self) -> f64 {
        self.cuboid.height()
    }

    pub fn center(&self) -> Point {
        self.cuboid.center()
    }
}

impl Drawable for StrategyBox {
    fn draw(&self) -> String {
        self.drawer.render(&self.cuboid)
    }
}

/// A GL strategy for any shape the GL drawer understands.
pub fn gl_strategy<T>(color: Color) -> DrawStrategy<T>
where
    GlDrawStrategy: Drawer<T>,
{
    DrawStrategy::new(GlDrawStrategy::new(color))
}

pub fn draw_all(objects: &[Box<dyn Drawable>]) -> Vec<String> {
    objects.iter().map(|object| object.draw()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing::Draw;

    #[test]
    fn gl_strategies_draw_with_color() {
        let objects: Vec<Box<dyn Drawable>> = vec![
            Box::new(StrategySphere::new(1.0, Point::ORIGIN, gl_strategy(Color::Red)).unwrap()),
            Box::new(
                StrategyBox::new(0.1, 0.2, 0.3, Point::ORIGIN, gl_strategy(Color::Blue)).unwrap(),
            ),
        ];

        assert_eq!(
            draw_all(&objects),
            vec![
                "Sphere with radius = 1 at [0 0 0] and color = red",
                "Box with width = 0.1 length = 0.2 height = 0.3 at [0 0 0] and color = blue",
            ]
        );
    }

    #[test]
    fn empty_strategy_fails_construction() {
        let sphere = StrategySphere::new(1.0, Point::ORIGIN, DrawStrategy::empty());
        assert!(matches!(
            sphere,
            Err(PatternError::InvalidArgument("Invalid draw strategy"))
        ));

        let cuboid = StrategyBox::new(1.0, 1.0, 1.0, Point::ORIGIN, DrawStrategy::default());
        assert!(matches!(cuboid, Err(PatternError::InvalidArgument(_))));
    }

    #[test]
    fn default_drawing_through_a_closure_matches_other_mechanisms() {
        let strategy = DrawStrategy::new(|s: &Sphere| s.draw());
        let sphere = StrategySphere::new(1.0, Point::ORIGIN, strategy.clone()).unwrap();

        assert!(!strategy.is_empty());
        assert_eq!(sphere.draw(), Sphere::new(1.0).draw());
        assert_eq!(sphere.radius(), 1.0);
    }

    #[test]
    fn closures_convert_into_strategies() {
        let strategy: DrawStrategy<Sphere> = (|s: &Sphere| s.draw()).into();
        assert!(!strategy.is_empty());

        let cuboid = StrategyBox::new(
            1.0,
            2.0,
            3.0,
            Point::ORIGIN,
            DrawStrategy::from(|c: &Cuboid| format!("custom {}", c.width())),
        )
        .unwrap();
        assert_eq!(cuboid.draw(), "custom 1");
    }
}
