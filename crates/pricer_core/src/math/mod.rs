//! Numeric helpers shared across layers.
//!
//! - `rounding`: Decimal rounding applied at the display boundary

pub mod rounding;

pub use rounding::{round2, round_to};
