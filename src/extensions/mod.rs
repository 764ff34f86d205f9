//! Contracts for the collaborators the controller pulls from or calls into.
//!
//! Nothing here is implemented by the controller itself: the spatial index,
//! the plot object and its tooltip layer live in the host application.

mod extent;
mod host;

pub use extent::ExtentProvider;
pub use host::{Annotation, AnnotationBatch, PlotHost};
