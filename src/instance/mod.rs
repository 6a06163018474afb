//! SPP instance model and its external formats.
//!
//! An [`Instance`] is a fixed collection of weighted subsets over the
//! universe `1..=N`. It is read once by [`InstanceLoader`] and shared
//! read-only by every other component for the rest of the run.

pub mod dat;
mod loader;
mod types;

pub use loader::InstanceLoader;
pub use types::{Instance, Subset};
