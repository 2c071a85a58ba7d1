//! Animation support for widgets.
//!
//! - [`Easing`] and [`ease`]: progress curves
//! - [`Timeline`]: a single eased span
//! - [`Sequence`]: ordered stage chains driven by `advance(dt)`

mod easing;
mod timeline;

pub use easing::{Easing, ease, lerp_eased};
pub use timeline::{Sequence, Stage, Timeline};
