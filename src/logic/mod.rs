//! Presentation logic
//!
//! Pure data shaping: no I/O, no framework types. The handlers feed these
//! modules and the render layer consumes their output.

pub mod explain;
pub mod session;
