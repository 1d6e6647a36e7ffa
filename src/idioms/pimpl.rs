//! Pimpl: `Person` exposes a fixed API while its fields live in a private
//! struct behind one owned pointer. Adding fields to `PersonImpl` never
//! changes the size or layout of `Person`.
//!
//! Run with: cargo run --bin pimpl

#[derive(Debug, Clone, PartialEq)]
struct PersonImpl {
    forename: String,
    surname: String,
    year_of_birth: i32,
}

impl Default for PersonImpl {
    fn default() -> Self {
        PersonImpl {
            forename: "none".to_string(),
            surname: "none".to_string(),
            year_of_birth: 0,
        }
    }
}

/// Cloning deep-copies the private state; moving hands it over.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Person {
    pimpl: Box<PersonImpl>,
}

impl Person {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn year_of_birth(&self) -> i32 {
        self.pimpl.year_of_birth
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.pimpl.forename, self.pimpl.surname)
    }

    pub fn set_year_of_birth(&mut self, year: i32) {
        self.pimpl.year_of_birth = year;
    }

    pub fn set_forename(&mut self, name: impl Into<String>) {
        self.pimpl.forename = name.into();
    }

    pub fn set_surname(&mut self, name: impl Into<String>) {
        self.pimpl.surname = name.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = Person::new();
        assert_eq!(p.full_name(), "none none");
        assert_eq!(p.year_of_birth(), 0);
    }

    #[test]
    fn setters() {
        let mut p = Person::new();
        p.set_year_of_birth(2000);
        p.set_forename("Alex");
        p.set_surname("Balex");
        assert_eq!(p.full_name(), "Alex Balex");
        assert_eq!(p.year_of_birth(), 2000);
    }

    #[test]
    fn clone_is_deep() {
        let mut p1 = Person::new();
        p1.set_forename("Alex");
        let mut p2 = p1.clone();
        p2.set_forename("Sam");

        assert_eq!(p1.full_name(), "Alex none");
        assert_eq!(p2.full_name(), "Sam none");
    }

    #[test]
    fn handle_size_is_one_pointer() {
        assert_eq!(std::mem::size_of::<Person>(), std::mem::size_of::<usize>());
    }
}
