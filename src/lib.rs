//! scatter-zoom: pan/zoom and pointer-interaction controller for large
//! point-rendering surfaces.
//!
//! The crate keeps data space, logical pixel space and the renderer's
//! projection consistent under continuous input. Rasterization, hit-testing,
//! spatial indexing and tooltip rendering are left to the host through the
//! traits in [`render`] and [`extensions`].

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ZoomController, ZoomControllerConfig};
pub use error::{ZoomError, ZoomResult};
