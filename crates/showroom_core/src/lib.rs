//! Showroom Core
//!
//! Foundational types shared by every Showroom crate:
//!
//! - [`errors`]: the [`ShowroomError`] type and [`Result`] alias
//! - [`time`]: frame [`Timer`]
//! - [`math`]: [`Ray`] and [`BoundingBox`] used for picking and framing
//! - [`viewport`]: surface size and NDC → pixel mapping
//! - [`color`]: palette color parsing

pub mod color;
pub mod errors;
pub mod math;
pub mod time;
pub mod viewport;

pub use color::parse_hex_color;
pub use errors::{Result, ShowroomError};
pub use math::{BoundingBox, Ray};
pub use time::Timer;
pub use viewport::Viewport;
