//! punchcard-rs: weekly activity punch-card rendering.
//!
//! This crate aggregates dated duration records into per-weekday totals and
//! renders them as a fixed-layout punch-card raster image: seven weekday
//! columns, each with a circular marker sized by that weekday's share of the
//! busiest weekday's total. The result is persisted as a PNG file.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "cairo-backend")]
pub use api::PunchCardWriter;
pub use api::{PunchCardConfig, PunchCardStyle};
pub use error::{PunchCardError, PunchCardResult};
