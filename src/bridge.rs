//! Pattern: Bridge
//!
//! A moving object (the abstraction) owns its movement policy (the
//! implementation) behind a `Box<dyn Mover>`, so both sides can vary
//! independently.
//!
//! Run with: cargo run --bin bridge

pub type Coords = [f64; 3];

pub trait Mover {
    fn new_coords(&self, old: Coords) -> Coords;
    fn who_am_i(&self) -> String;
}

/// Steps one unit along x.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleMover;

impl Mover for SimpleMover {
    fn new_coords(&self, mut old: Coords) -> Coords {
        old[0] += 1.0;
        old
    }

    fn who_am_i(&self) -> String {
        "I am a simple mover".to_string()
    }
}

/// Steps `step` along every axis.
#[derive(Debug, Clone, Copy)]
pub struct ScaledMover {
    step: f64,
}

impl ScaledMover {
    pub fn new(step: f64) -> Self {
        ScaledMover { step }
    }
}

impl Mover for ScaledMover {
    fn new_coords(&self, old: Coords) -> Coords {
        old.map(|c| c + self.step)
    }

    fn who_am_i(&self) -> String {
        format!("I am a scaled mover with step {}", self.step)
    }
}

pub struct MovingObject {
    mover: Box<dyn Mover>,
    coords: Coords,
}

impl MovingObject {
    pub fn new() -> Self {
        Self::with_mover(Box::new(SimpleMover))
    }

    pub fn with_mover(mover: Box<dyn Mover>) -> Self {
        MovingObject {
            mover,
            coords: [0.0; 3],
        }
    }

    /// Advance one step; returns the mover's self-description.
    pub fn move_once(&mut self) -> String {
        let who = self.mover.who_am_i();
        self.coords = self.mover.new_coords(self.coords);
        tracing::debug!(coords = ?self.coords, "moved");
        who
    }

    pub fn where_am_i(&self) -> String {
        let [x, y, z] = self.coords;
        format!("I am here: {} {} {}", x, y, z)
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }
}

impl Default for MovingObject {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_mover_steps_along_x() {
        let mut obj = MovingObject::new();
        assert_eq!(obj.where_am_i(), "I am here: 0 0 0");

        assert_eq!(obj.move_once(), "I am a simple mover");
        assert_eq!(obj.where_am_i(), "I am here: 1 0 0");

        obj.move_once();
        assert_eq!(obj.coords(), [2.0, 0.0, 0.0]);
    }

    #[test]
    fn implementation_swaps_without_touching_abstraction() {
        let mut obj = MovingObject::with_mover(Box::new(ScaledMover::new(0.5)));
        assert_eq!(obj.move_once(), "I am a scaled mover with step 0.5");
        assert_eq!(obj.where_am_i(), "I am here: 0.5 0.5 0.5");
    }
}
