use std::cell::Cell;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::{Clock, SystemClock, Viewport, ZoomTransform, ZoomTransition};
use crate::error::{ZoomError, ZoomResult};
use crate::extensions::{ExtentProvider, PlotHost};
use crate::interaction::{GestureState, InteractionState, PointerMoveThrottle};
use crate::render::{PointRenderer, RefreshTimer, RendererRole};

use super::controller_config::validate_controller_config;
use super::{ZoomController, ZoomControllerConfig};

impl<D: Clone + 'static> ZoomController<D> {
    /// Creates a controller reading time from the system clock.
    pub fn new(config: ZoomControllerConfig) -> ZoomResult<Self> {
        Self::with_clock(config, SystemClock::default())
    }

    pub fn with_clock(
        config: ZoomControllerConfig,
        clock: impl Clock + 'static,
    ) -> ZoomResult<Self> {
        let config = validate_controller_config(config)?;
        let pointer_throttle = PointerMoveThrottle::with_rate_hz(config.pointer_move_rate_hz)?;

        Ok(Self {
            config,
            clock: Box::new(clock),
            viewport: config.viewport,
            transform: ZoomTransform::IDENTITY,
            initialized: false,
            extent_provider: None,
            base_scales: Cell::new(None),
            renderers: IndexMap::new(),
            host: None,
            gesture: GestureState::new(config.gesture),
            interaction: InteractionState::default(),
            pointer_throttle,
            hovered: None,
            transition: None,
            timer: RefreshTimer::default(),
        })
    }

    /// Binds input handling to the surface.
    ///
    /// Returns `Ok(false)` and logs a warning when already initialized.
    /// The primary renderer must be attached first since hover and click
    /// detection hit-test against it.
    pub fn initialize(&mut self) -> ZoomResult<bool> {
        if self.initialized {
            warn!("zoom controller already initialized");
            return Ok(false);
        }
        if !self.renderers.contains_key(&RendererRole::Primary) {
            return Err(ZoomError::RendererNotAttached(RendererRole::Primary));
        }

        self.transform = ZoomTransform::IDENTITY;
        self.pointer_throttle.reset();
        self.initialized = true;
        debug!(
            width = self.viewport.width,
            height = self.viewport.height,
            renderers = self.renderers.len(),
            "zoom controller initialized"
        );
        Ok(true)
    }

    /// Registers a redraw target; every role follows the same transform.
    pub fn attach_renderer(
        &mut self,
        role: RendererRole,
        renderer: impl PointRenderer<D> + 'static,
    ) -> ZoomResult<()> {
        let mut renderer: Box<dyn PointRenderer<D>> = Box::new(renderer);
        renderer.bind_zoom(self.viewport)?;
        if self.renderers.insert(role, renderer).is_some() {
            debug!(?role, "replaced attached renderer");
        } else {
            debug!(?role, "attached renderer");
        }
        Ok(())
    }

    /// Attaches the data-extent source and drops cached base scales.
    pub fn attach_extent_provider(&mut self, provider: impl ExtentProvider + 'static) {
        self.extent_provider = Some(Box::new(provider));
        self.invalidate_scales();
    }

    pub fn attach_host(&mut self, host: impl PlotHost<D> + 'static) {
        self.host = Some(Box::new(host));
    }

    /// Changes the surface size. Base scales are recomputed on next use.
    pub fn resize(&mut self, width: u32, height: u32) -> ZoomResult<()> {
        let viewport = Viewport::new(width, height).validate()?;
        if viewport == self.viewport {
            return Ok(());
        }
        self.viewport = viewport;
        self.invalidate_scales();
        for renderer in self.renderers.values_mut() {
            renderer.bind_zoom(viewport)?;
        }
        debug!(width, height, "viewport resized");
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> ZoomControllerConfig {
        self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn transform(&self) -> ZoomTransform {
        self.transform
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[must_use]
    pub fn gesture_state(&self) -> &GestureState<D> {
        &self.gesture
    }

    #[must_use]
    pub fn interaction_state(&self) -> InteractionState {
        self.interaction
    }

    #[must_use]
    pub fn refresh_timer(&self) -> &RefreshTimer {
        &self.timer
    }

    #[must_use]
    pub fn active_transition(&self) -> Option<ZoomTransition> {
        self.transition
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&D> {
        self.hovered.as_ref()
    }

    #[must_use]
    pub fn renderer_roles(&self) -> Vec<RendererRole> {
        self.renderers.keys().copied().collect()
    }

    pub(super) fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }

    pub(super) fn ensure_initialized(&self) -> ZoomResult<()> {
        if self.initialized {
            return Ok(());
        }
        Err(ZoomError::PreconditionViolation(
            "zoom input is not bound; call initialize first".to_owned(),
        ))
    }
}
