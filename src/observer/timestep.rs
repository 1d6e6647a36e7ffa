//! Time steppers as observable subjects.
//!
//! A constant time step never changes, so it accepts observers and never
//! calls them. An adaptive time step notifies every attached observer when
//! its size is adapted.
//!
//! Run with: cargo run --bin observed_time_step

use std::rc::Rc;

use super::{Observable, Observer, ObserverList};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepChange {
    Update,
}

/// A time stepper also converts to its step size: `f64::from(&stepper)`.
/// Generic code asks for that with `for<'a> &'a T: Into<f64>`.
pub trait TimeStepper: Observable {
    fn time_step_size(&self) -> f64;
}

pub trait AdaptiveTimeStepper: TimeStepper {
    fn adapt_time_step_size(&mut self, dt: f64);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantTimeStep {
    dt: f64,
}

impl ConstantTimeStep {
    pub fn new(dt: f64) -> Self {
        ConstantTimeStep { dt }
    }
}

impl Observable for ConstantTimeStep {
    type StateChange = StepChange;

    // Nothing ever changes, so there is nothing to keep track of.
    fn attach(&mut self, _observer: &Rc<Observer<Self, StepChange>>) -> bool {
        true
    }

    fn detach(&mut self, _observer: &Rc<Observer<Self, StepChange>>) -> bool {
        true
    }

    fn notify(&self, _change: StepChange) {}
}

impl TimeStepper for ConstantTimeStep {
    fn time_step_size(&self) -> f64 {
        self.dt
    }
}

impl From<&ConstantTimeStep> for f64 {
    fn from(step: &ConstantTimeStep) -> f64 {
        step.dt
    }
}

#[derive(Debug)]
pub struct AdaptiveTimeStep {
    dt: f64,
    observers: ObserverList<AdaptiveTimeStep, StepChange>,
}

impl AdaptiveTimeStep {
    pub fn new(dt: f64) -> Self {
        AdaptiveTimeStep {
            dt,
            observers: ObserverList::new(),
        }
    }
}

impl Observable for AdaptiveTimeStep {
    type StateChange = StepChange;

    fn attach(&mut self, observer: &Rc<Observer<Self, StepChange>>) -> bool {
        self.observers.attach(observer)
    }

    fn detach(&mut self, observer: &Rc<Observer<Self, StepChange>>) -> bool {
        self.observers.detach(observer)
    }

    fn notify(&self, change: StepChange) {
        self.observers.notify(self, change);
    }
}

impl TimeStepper for AdaptiveTimeStep {
    fn time_step_size(&self) -> f64 {
        self.dt
    }
}

impl AdaptiveTimeStepper for AdaptiveTimeStep {
    fn adapt_time_step_size(&mut self, dt: f64) {
        self.dt = dt;
        tracing::debug!(dt, "time step adapted");
        self.notify(StepChange::Update);
    }
}

impl From<&AdaptiveTimeStep> for f64 {
    fn from(step: &AdaptiveTimeStep) -> f64 {
        step.dt
    }
}

// Build fails if either stepper stops meeting its contract.
const _: fn() = || {
    fn time_stepper<T>()
    where
        T: TimeStepper,
        for<'a> &'a T: Into<f64>,
    {
    }
    fn adaptive_time_stepper<T>()
    where
        T: AdaptiveTimeStepper,
        for<'a> &'a T: Into<f64>,
    {
    }

    time_stepper::<ConstantTimeStep>();
    adaptive_time_stepper::<AdaptiveTimeStep>();
};

/// Advance `steps` steps of whatever size the stepper currently reports.
pub fn elapsed<T>(stepper: &T, steps: u32) -> f64
where
    T: TimeStepper,
    for<'a> &'a T: Into<f64>,
{
    let dt: f64 = stepper.into();
    dt * f64::from(steps)
}
