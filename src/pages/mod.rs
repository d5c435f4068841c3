//! Page components for Casa De Oro.

mod pitch;

pub use pitch::Pitch;
