pub mod clock;
pub mod geometry;
pub mod interpolate;
pub mod scale;
pub mod scale_model;
pub mod transform;
pub mod transition;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use geometry::{
    Matrix3, apply_matrix, distance_between_points, flatten_matrix, window_transform,
};
pub use interpolate::{ZoomInterpolator, ZoomView, ease_cubic_in_out};
pub use scale::LinearScale;
pub use scale_model::{BaseScales, ScaleSet, compute_scales};
pub use transform::{ScaleExtent, ZoomTransform};
pub use transition::{TransitionSample, ZoomTransition};
pub use types::{DataPoint, Extent, PixelPoint, Viewport};
