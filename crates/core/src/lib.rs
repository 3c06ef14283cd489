#![forbid(unsafe_code)]

pub mod model;
pub mod presets;
pub mod time;

pub use time::Clock;
