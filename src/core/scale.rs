use serde::{Deserialize, Serialize};

use crate::error::{ZoomError, ZoomResult};

/// Continuous linear mapping from a data interval to a pixel interval.
///
/// Either interval may be descending; only a zero-width domain is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ZoomResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ZoomError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ZoomError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn domain_span(self) -> f64 {
        self.domain_end - self.domain_start
    }

    #[must_use]
    pub fn range_span(self) -> f64 {
        self.range_end - self.range_start
    }

    /// Maps a data value to pixel space.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / self.domain_span();
        self.range_start + normalized * self.range_span()
    }

    /// Maps a pixel value back to data space.
    ///
    /// A collapsed range maps every pixel to the domain start.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let range_span = self.range_span();
        if range_span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / range_span;
        self.domain_start + normalized * self.domain_span()
    }

    /// Returns a copy with a replaced domain and the same range.
    pub fn with_domain(self, domain: (f64, f64)) -> ZoomResult<Self> {
        Self::new(domain, self.range())
    }
}
