//! Pattern: External Polymorphism
//!
//! `Sphere` and `Cuboid` share no trait of their own. The `Describe`
//! capability is attached from outside, and `ObjectModel<T>` adapts any
//! describable value to the object-safe `ObjectConcept` so unrelated types
//! can sit in one collection.
//!
//! Run with: cargo run --bin external_polymorphism

use crate::shapes::{Cuboid, Sphere};

pub trait Describe {
    fn info(&self) -> String;
}

impl Describe for Sphere {
    fn info(&self) -> String {
        format!("I am a Sphere at point {} with radius {}", self.center(), self.radius())
    }
}

impl Describe for Cuboid {
    fn info(&self) -> String {
        format!(
            "I am a Box at point {} with width = {}, length = {} and height = {}",
            self.center(),
            self.width(),
            self.length(),
            self.height()
        )
    }
}

pub trait ObjectConcept {
    fn info(&self) -> String;
}

pub struct ObjectModel<T> {
    object: T,
}

impl<T> ObjectModel<T> {
    pub fn new(object: T) -> Self {
        ObjectModel { object }
    }
}

impl<T: Describe> ObjectConcept for ObjectModel<T> {
    fn info(&self) -> String {
        self.object.info()
    }
}

pub type Objects = Vec<Box<dyn ObjectConcept>>;

pub fn make_object<T: Describe + 'static>(object: T) -> Box<dyn ObjectConcept> {
    Box::new(ObjectModel::new(object))
}

pub fn all_info(objects: &[Box<dyn ObjectConcept>]) -> Vec<String> {
    objects.iter().map(|object| object.info()).collect()
}
