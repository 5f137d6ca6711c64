//! Tick-driven reveal animations.
//!
//! Both animations are plain state machines advanced by the application's
//! shared tick; they own no timers, so tearing down the owner cancels them
//! trivially.

mod counter;
mod typewriter;

pub use counter::CountUp;
pub use typewriter::Typewriter;
