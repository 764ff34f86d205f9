use crate::core::Extent;

/// Pull-based read of the dataset's data-space bounds.
///
/// Usually backed by the spatial index. `None` means the extent is not
/// known yet (index still loading).
pub trait ExtentProvider {
    fn extent(&self) -> Option<Extent>;
}

impl ExtentProvider for Extent {
    fn extent(&self) -> Option<Extent> {
        Some(*self)
    }
}

impl<F> ExtentProvider for F
where
    F: Fn() -> Option<Extent>,
{
    fn extent(&self) -> Option<Extent> {
        self()
    }
}
