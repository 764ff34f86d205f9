use std::cell::Cell;

use indexmap::IndexMap;

use crate::core::{BaseScales, Clock, Viewport, ZoomTransform, ZoomTransition};
use crate::extensions::{ExtentProvider, PlotHost};
use crate::interaction::{GestureState, InteractionState, PointerMoveThrottle};
use crate::render::{PointRenderer, RefreshTimer, RendererRole};

mod controller_config;
mod controller_init;
mod gesture_input_controller;
mod pointer_coordinator;
mod refresh_controller;
mod scale_access;
mod zoom_navigation;

pub use controller_config::ZoomControllerConfig;

/// Pan/zoom controller shared by every renderer drawing one point surface.
///
/// Owns the single live transform. All mutation goes through named
/// operations (`on_gesture`, `zoom_to`, `zoom_to_bounding_box`, `tick`),
/// and rescaled scales are always derived from the current transform on
/// request.
pub struct ZoomController<D> {
    config: ZoomControllerConfig,
    clock: Box<dyn Clock>,
    viewport: Viewport,
    transform: ZoomTransform,
    initialized: bool,
    extent_provider: Option<Box<dyn ExtentProvider>>,
    base_scales: Cell<Option<BaseScales>>,
    renderers: IndexMap<RendererRole, Box<dyn PointRenderer<D>>>,
    host: Option<Box<dyn PlotHost<D>>>,
    gesture: GestureState<D>,
    interaction: InteractionState,
    pointer_throttle: PointerMoveThrottle,
    hovered: Option<D>,
    transition: Option<ZoomTransition>,
    timer: RefreshTimer,
}
