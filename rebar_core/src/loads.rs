//! Beam loading and support definitions
//!
//! A beam carries exactly one service load, either a full-span UDL or a point
//! load at midspan. Loads are entered unfactored and factored by
//! [`LOAD_FACTOR`](crate::constants::LOAD_FACTOR) before analysis.

use serde::{Deserialize, Serialize};

use crate::constants::{LOAD_FACTOR, SPAN_DEPTH_LIMIT_FIXED, SPAN_DEPTH_LIMIT_SIMPLE};
use crate::errors::{require_positive, CalcResult};

/// End restraint of a single-span beam
///
/// # Example
/// ```
/// use rebar_core::loads::SupportCondition;
///
/// assert_eq!(SupportCondition::SimplySupported.span_depth_limit(), 20.0);
/// assert_eq!(SupportCondition::Fixed.span_depth_limit(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SupportCondition {
    /// Pin-roller supports
    #[default]
    SimplySupported,
    /// Both ends fixed
    Fixed,
}

impl SupportCondition {
    /// Denominator k in Mu = wL²/k for a full-span UDL
    pub fn udl_moment_divisor(&self) -> f64 {
        match self {
            SupportCondition::SimplySupported => 8.0,
            SupportCondition::Fixed => 12.0,
        }
    }

    /// Basic span/effective-depth limit (no modification factors)
    pub fn span_depth_limit(&self) -> f64 {
        match self {
            SupportCondition::SimplySupported => SPAN_DEPTH_LIMIT_SIMPLE,
            SupportCondition::Fixed => SPAN_DEPTH_LIMIT_FIXED,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportCondition::SimplySupported => "Simply Supported",
            SupportCondition::Fixed => "Fixed",
        }
    }

    /// Parse "simply-supported", "simple", "ss", "fixed"
    pub fn from_str_flexible(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace([' ', '_'], "-").as_str() {
            "simply-supported" | "simple" | "ss" | "simplysupported" => {
                Some(SupportCondition::SimplySupported)
            }
            "fixed" | "fixed-fixed" => Some(SupportCondition::Fixed),
            _ => None,
        }
    }
}

impl std::fmt::Display for SupportCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Service (unfactored) load on a beam
///
/// ## JSON Example
///
/// ```json
/// { "Udl": { "w_kn_per_m": 20.0 } }
/// { "PointMidspan": { "p_kn": 40.0 } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BeamLoad {
    /// Uniformly distributed load over the full span (kN/m)
    Udl { w_kn_per_m: f64 },
    /// Concentrated load at midspan (kN)
    PointMidspan { p_kn: f64 },
}

impl BeamLoad {
    /// Service magnitude (kN/m for UDL, kN for point load)
    pub fn magnitude(&self) -> f64 {
        match self {
            BeamLoad::Udl { w_kn_per_m } => *w_kn_per_m,
            BeamLoad::PointMidspan { p_kn } => *p_kn,
        }
    }

    /// Factored magnitude, 1.5 × service load
    pub fn factored(&self) -> f64 {
        LOAD_FACTOR * self.magnitude()
    }

    /// Units of [`magnitude`](Self::magnitude)
    pub fn units(&self) -> &'static str {
        match self {
            BeamLoad::Udl { .. } => "kN/m",
            BeamLoad::PointMidspan { .. } => "kN",
        }
    }

    /// Short name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            BeamLoad::Udl { .. } => "UDL",
            BeamLoad::PointMidspan { .. } => "Point Load at Midspan",
        }
    }

    /// The service magnitude must be finite and strictly positive.
    pub fn validate(&self) -> CalcResult<()> {
        match self {
            BeamLoad::Udl { w_kn_per_m } => require_positive("w_kn_per_m", *w_kn_per_m),
            BeamLoad::PointMidspan { p_kn } => require_positive("p_kn", *p_kn),
        }
    }
}

impl Default for BeamLoad {
    fn default() -> Self {
        BeamLoad::Udl { w_kn_per_m: 20.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factored_load() {
        assert_eq!(BeamLoad::Udl { w_kn_per_m: 20.0 }.factored(), 30.0);
        assert_eq!(BeamLoad::PointMidspan { p_kn: 40.0 }.factored(), 60.0);
    }

    #[test]
    fn test_load_must_be_positive() {
        assert!(BeamLoad::Udl { w_kn_per_m: -1.0 }.validate().is_err());
        assert!(BeamLoad::PointMidspan { p_kn: f64::NAN }.validate().is_err());
        assert!(BeamLoad::Udl { w_kn_per_m: 0.0 }.validate().is_err());
        assert!(BeamLoad::PointMidspan { p_kn: 0.0 }.validate().is_err());
        assert!(BeamLoad::PointMidspan { p_kn: 1e-3 }.validate().is_ok());
    }

    #[test]
    fn test_load_labels() {
        let udl = BeamLoad::Udl { w_kn_per_m: 20.0 };
        assert_eq!((udl.display_name(), udl.units()), ("UDL", "kN/m"));
        let point = BeamLoad::PointMidspan { p_kn: 40.0 };
        assert_eq!(point.units(), "kN");
    }

    #[test]
    fn test_support_parse() {
        assert_eq!(
            SupportCondition::from_str_flexible("Simply Supported"),
            Some(SupportCondition::SimplySupported)
        );
        assert_eq!(SupportCondition::from_str_flexible("FIXED"), Some(SupportCondition::Fixed));
        assert_eq!(SupportCondition::from_str_flexible("cantilever"), None);
    }

    #[test]
    fn test_load_json_shape() {
        let json = serde_json::to_string(&BeamLoad::PointMidspan { p_kn: 40.0 }).unwrap();
        assert_eq!(json, r#"{"PointMidspan":{"p_kn":40.0}}"#);
        let load: BeamLoad = serde_json::from_str(r#"{"Udl":{"w_kn_per_m":12.5}}"#).unwrap();
        assert_eq!(load, BeamLoad::Udl { w_kn_per_m: 12.5 });
    }
}
