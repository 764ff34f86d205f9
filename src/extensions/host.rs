use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Tooltip record for one hovered point, positioned in surface pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation<D> {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub data: D,
}

/// Hover produces at most one annotation per pointer move.
pub type AnnotationBatch<D> = SmallVec<[Annotation<D>; 1]>;

/// Host plot object receiving classified clicks and hover annotations.
///
/// What a click means is entirely up to the host.
pub trait PlotHost<D> {
    fn on_point_click(&mut self, datum: &D);

    /// Replaces the visible tooltip set; an empty slice clears it.
    fn show_annotations(&mut self, annotations: &[Annotation<D>]);
}
