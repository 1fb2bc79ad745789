pub mod components;
pub mod timer;

pub use components::*;
