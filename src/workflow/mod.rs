mod controller;
mod gate;
mod step;

pub use controller::{Transition, WorkflowController};
pub use gate::{GateError, can_advance};
pub use step::Step;
