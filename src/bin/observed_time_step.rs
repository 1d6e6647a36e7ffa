//! Pattern: Observer
//! Example: constant and adaptive time steps as observable subjects
//!
//! Run with: cargo run --bin observed_time_step

use std::rc::Rc;

use colored::Colorize;
use design_patterns::logging;
use design_patterns::observer::timestep::{
    AdaptiveTimeStep, AdaptiveTimeStepper, ConstantTimeStep, StepChange, TimeStepper,
};
use design_patterns::observer::{Observable, Observer};

fn main() {
    logging::init(logging::verbose_requested());

    let mut dt_const = ConstantTimeStep::new(0.1);
    let mut dt_adapt = AdaptiveTimeStep::new(2.1);

    let obs_const = Rc::new(Observer::new(|_: &ConstantTimeStep, _: StepChange| {}));
    let obs_adapt = Rc::new(Observer::new(|t: &AdaptiveTimeStep, _: StepChange| {
        println!("The time step was adapted to {}", t.time_step_size());
    }));

    println!("{}", "=== Constant ===".bold());
    dt_const.attach(&obs_const);
    println!("constant time step: {}", f64::from(&dt_const));

    println!("\n{}", "=== Adaptive ===".bold());
    dt_adapt.attach(&obs_adapt);
    println!("initial time step: {}", dt_adapt.time_step_size());
    dt_adapt.adapt_time_step_size(2.5);
}
