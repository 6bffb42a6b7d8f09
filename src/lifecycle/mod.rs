// Page Lifecycle Module - transition rules and the tracker that enforces them

pub mod state_machine;
pub mod tracker;

pub use state_machine::{LifecycleError, LifecycleEvent, TransitionRecord};
pub use tracker::LifecycleTracker;
