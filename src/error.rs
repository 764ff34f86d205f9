use thiserror::Error;

use crate::render::RendererRole;

pub type ZoomResult<T> = Result<T, ZoomError>;

#[derive(Debug, Error)]
pub enum ZoomError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    #[error("invalid gesture state: {0}")]
    InvalidGestureState(String),

    #[error("renderer `{0:?}` is not attached")]
    RendererNotAttached(RendererRole),
}
