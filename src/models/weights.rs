#[cfg(test)]
#[path = "../../tests/unit/models/weights_test.rs"]
mod weights_test;

use crate::models::{RoadEdge, SearchError};
use crate::utils::Float;

/// Blend weights which select the joggability ratio formula: the numerator source (`w0`),
/// whether the sustainability total participates at all (`w1`) and which denominator is
/// used, standardized distance (`w2`) or segment count (`w3`).
#[derive(Clone, Copy, Debug)]
pub struct RatioWeights {
    /// Selects the numerator source: 0 keeps the sustainability total, 1 uses the score.
    pub w0: u8,
    /// Numerator exponent, restricted to 0 or 1.
    pub w1: u8,
    /// Standardized distance denominator exponent; exactly one of `w2`, `w3` is nonzero.
    pub w2: Float,
    /// Segment count denominator exponent; exactly one of `w2`, `w3` is nonzero.
    pub w3: Float,
}

impl Default for RatioWeights {
    fn default() -> Self {
        Self { w0: 0, w1: 1, w2: 0., w3: 1. }
    }
}

impl RatioWeights {
    /// Checks that the weight combination is one of the supported modes.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.w0 > 1 {
            return Err(SearchError::InvalidWeightConfiguration("w0 must be 0 or 1".to_string()));
        }

        if self.w1 > 1 {
            return Err(SearchError::InvalidWeightConfiguration("w1 must be 0 or 1".to_string()));
        }

        if (self.w2 == 0.) == (self.w3 == 0.) {
            return Err(SearchError::InvalidWeightConfiguration(
                "exactly one of w2 and w3 must be nonzero".to_string(),
            ));
        }

        Ok(())
    }

    /// Returns true when the ratio denominator is the standardized distance.
    pub fn is_distance_weighted(&self) -> bool {
        self.w2 != 0.
    }

    /// Returns the desirability numerator of a single edge.
    pub fn numerator(&self, edge: &RoadEdge) -> Float {
        match (self.w0, self.w1, self.is_distance_weighted()) {
            (1, ..) => edge.score,
            (_, 1, _) => edge.total_std,
            (_, _, true) => 1. / edge.distance_std,
            (_, _, false) => 1.,
        }
    }

    /// Computes the joggability ratio from final path totals.
    pub fn ratio(&self, total_std: Float, distance_std: Float, segments: usize) -> Float {
        match (self.w1, self.is_distance_weighted()) {
            (0, true) => 1. / distance_std,
            (0, false) => 1. / segments as Float,
            (_, true) => total_std / distance_std.powf(self.w2),
            (_, false) => total_std / (segments as Float).powf(self.w3),
        }
    }

    /// Returns the pheromone importance factor derived from this weight configuration.
    pub fn alpha(&self) -> Float {
        if self.w1 == 1 && !self.is_distance_weighted() { 6.5 } else { 2.5 }
    }

    /// Returns the initial pheromone evaporation rate.
    pub fn initial_rho(&self) -> Float {
        if self.w1 == 0 { 0.1 } else { 0.3 }
    }
}
