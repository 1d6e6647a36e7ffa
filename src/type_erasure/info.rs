//! Type-erased wrapper over the [`Describe`] capability.
//!
//! Run with: cargo run --bin type_erasure_info

use std::mem;

use crate::external_polymorphism::Describe;

trait Concept {
    fn info(&self) -> String;
    fn clone_box(&self) -> Box<dyn Concept>;
}

struct Model<T> {
    object: T,
}

impl<T: Describe + Clone + 'static> Concept for Model<T> {
    fn info(&self) -> String {
        self.object.info()
    }

    fn clone_box(&self) -> Box<dyn Concept> {
        Box::new(Model {
            object: self.object.clone(),
        })
    }
}

pub struct Object {
    pimpl: Box<dyn Concept>,
}

impl Object {
    pub fn new<T: Describe + Clone + 'static>(object: T) -> Self {
        Object {
            pimpl: Box::new(Model { object }),
        }
    }

    pub fn info(&self) -> String {
        self.pimpl.info()
    }

    /// Assignment by value: the argument is already a private copy, so a swap finishes the job.
    pub fn assign(&mut self, mut other: Object) {
        mem::swap(&mut self.pimpl, &mut other.pimpl);
    }
}

impl Clone for Object {
    fn clone(&self) -> Self {
        Object {
            pimpl: self.pimpl.clone_box(),
        }
    }
}

pub fn all_info(objects: &[Object]) -> Vec<String> {
    objects.iter().map(Object::info).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external_polymorphism::{all_info as model_info, make_object};
    use crate::shapes::{Cuboid, Point, Sphere};

    #[test]
    fn matches_external_polymorphism_output() {
        let erased = vec![
            Object::new(Sphere::new(1.0)),
            Object::new(Cuboid::new(0.1, 0.2, 0.3)),
            Object::new(Sphere::at(2.5, Point::new(1.0, 2.0, 3.0))),
        ];
        let modelled = vec![
            make_object(Sphere::new(1.0)),
            make_object(Cuboid::new(0.1, 0.2, 0.3)),
            make_object(Sphere::at(2.5, Point::new(1.0, 2.0, 3.0))),
        ];

        assert_eq!(all_info(&erased), model_info(&modelled));
        assert_eq!(all_info(&erased)[2], "I am a Sphere at point [1 2 3] with radius 2.5");
    }

    #[test]
    fn assign_swaps_in_the_copy() {
        let mut a = Object::new(Sphere::new(1.0));
        let b = Object::new(Cuboid::new(1.0, 1.0, 1.0));

        a.assign(b.clone());
        assert_eq!(a.info(), b.info());

        // self-assignment through a copy leaves the value unchanged
        let before = a.info();
        a.assign(a.clone());
        assert_eq!(a.info(), before);
    }
}
