//! Run with: cargo run --bin type_erasure

use std::mem;

use crate::drawing::{Draw, Drawer};

trait Concept {
    fn draw(&self) -> String;
    fn clone_box(&self) -> Box<dyn Concept>;
}

struct Model<T> {
    object: T,
}

impl<T: Draw + Clone + 'static> Concept for Model<T> {
    fn draw(&self) -> String {
        self.object.draw()
    }

    fn clone_box(&self) -> Box<dyn Concept> {
        Box::new(Model {
            object: self.object.clone(),
        })
    }
}

/// A model whose drawing is supplied by a strategy instead of [`Draw`].
struct ExtendedModel<T, D> {
    object: T,
    drawer: D,
}

impl<T, D> Concept for ExtendedModel<T, D>
where
    T: Clone + 'static,
    D: Drawer<T> + Clone + 'static,
{
    fn draw(&self) -> String {
        self.drawer.render(&self.object)
    }

    fn clone_box(&self) -> Box<dyn Concept> {
        Box::new(ExtendedModel {
            object: self.object.clone(),
            drawer: self.drawer.clone(),
        })
    }
}

pub struct Object {
    pimpl: Box<dyn Concept>,
}

impl Object {
    pub fn new<T: Draw + Clone + 'static>(object: T) -> Self {
        Object {
            pimpl: Box::new(Model { object }),
        }
    }

    pub fn with_strategy<T, D>(object: T, drawer: D) -> Self
    where
        T: Clone + 'static,
        D: Drawer<T> + Clone + 'static,
    {
        Object {
            pimpl: Box::new(ExtendedModel { object, drawer }),
        }
    }

    pub fn draw(&self) -> String {
        self.pimpl.draw()
    }
}

impl Clone for Object {
    fn clone(&self) -> Self {
        Object {
            pimpl: self.pimpl.clone_box(),
        }
    }

    // Copy-and-swap: `self` is untouched unless the clone succeeded.
    fn clone_from(&mut self, source: &Self) {
        let mut tmp = source.clone();
        mem::swap(&mut self.pimpl, &mut tmp.pimpl);
    }
}

pub fn draw_all(objects: &[Object]) -> Vec<String> {
    objects.iter().map(Object::draw).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing::GlDrawStrategy;
    use crate::shapes::{Color, Cuboid, Cylinder, Point, Sphere};

    #[test]
    fn mixes_default_and_strategy_drawing() {
        let objects = vec![
            Object::new(Sphere::new(1.0)),
            Object::with_strategy(Cuboid::new(0.1, 0.2, 0.3), GlDrawStrategy::new(Color::Blue)),
            Object::new(Cylinder::at(0.15, Point::new(0.2, 0.3, 0.0))),
            Object::with_strategy(Cylinder::new(0.15), |c: &Cylinder| {
                format!("custom cylinder (radius = {})", c.radius())
            }),
        ];

        assert_eq!(
            draw_all(&objects),
            vec![
                "Sphere with radius = 1 at [0 0 0]",
                "Box with width = 0.1 length = 0.2 height = 0.3 at [0 0 0] and color = blue",
                "Cylinder with radius = 0.15 at [0.2 0.3 0]",
                "custom cylinder (radius = 0.15)",
            ]
        );
    }

    #[test]
    fn clone_survives_original() {
        let mut original = Object::new(Sphere::new(1.0));
        let copy = original.clone();

        original = Object::new(Cuboid::new(1.0, 2.0, 3.0));
        assert_eq!(copy.draw(), "Sphere with radius = 1 at [0 0 0]");
        assert!(original.draw().starts_with("Box"));

        drop(original);
        assert_eq!(copy.draw(), "Sphere with radius = 1 at [0 0 0]");
    }

    #[test]
    fn clone_from_replaces_payload() {
        let mut target = Object::new(Sphere::new(1.0));
        let source = Object::new(Sphere::new(2.0));

        target.clone_from(&source);
        assert_eq!(target.draw(), source.draw());

        let snapshot = target.clone();
        target.clone_from(&snapshot);
        assert_eq!(target.draw(), "Sphere with radius = 2 at [0 0 0]");
    }
}
