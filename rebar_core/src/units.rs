//! # Unit Types
//!
//! Type-safe wrappers for the SI units used by the calculators. They are plain
//! `f64` newtypes that serialize as bare numbers.
//!
//! ## Conventions
//!
//! Inputs follow the usual Indian-practice mix of units:
//! - Spans and footing sizes in metres (m), section dimensions in millimetres (mm)
//! - Loads in kilonewtons (kN) or kN/m, moments in kN·m
//! - Stresses in N/mm² (MPa), steel areas in mm²
//!
//! Formula evaluation converts kN·m to N·mm and kN to N at the boundary,
//! which is what the conversions below are for.
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::units::{Meters, Millimeters, KnM, NMm};
//!
//! let span: Millimeters = Meters(4.0).into();
//! assert_eq!(span.0, 4000.0);
//!
//! let mu: NMm = KnM(60.0).into();
//! assert_eq!(mu.0, 60.0e6);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

impl From<KiloNewtons> for Newtons {
    fn from(kn: KiloNewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

impl From<Newtons> for KiloNewtons {
    fn from(n: Newtons) -> Self {
        KiloNewtons(n.0 / 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnM(pub f64);

/// Moment in newton-millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NMm(pub f64);

impl From<KnM> for NMm {
    fn from(knm: KnM) -> Self {
        NMm(knm.0 * 1.0e6)
    }
}

impl From<NMm> for KnM {
    fn from(nmm: NMm) -> Self {
        KnM(nmm.0 / 1.0e6)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in N/mm² (numerically equal to MPa)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mpa(pub f64);

impl std::fmt::Display for Mpa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} MPa", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversion() {
        let mm: Millimeters = Meters(2.45).into();
        assert!((mm.0 - 2450.0).abs() < 1e-9);
        let m: Meters = Millimeters(300.0).into();
        assert_eq!(m.0, 0.3);
    }

    #[test]
    fn test_force_conversion() {
        let n: Newtons = KiloNewtons(60.0).into();
        assert_eq!(n.0, 60_000.0);
        let kn: KiloNewtons = Newtons(1_521_600.0).into();
        assert!((kn.0 - 1521.6).abs() < 1e-9);
    }

    #[test]
    fn test_moment_conversion() {
        let nmm: NMm = KnM(77.0).into();
        assert_eq!(nmm.0, 77.0e6);
        let knm: KnM = NMm(134_136_000.0).into();
        assert!((knm.0 - 134.136).abs() < 1e-9);
    }

    #[test]
    fn test_serialize_transparent() {
        let json = serde_json::to_string(&Mpa(1.8)).unwrap();
        assert_eq!(json, "1.8");
        assert_eq!(Mpa(1.8).to_string(), "1.80 MPa");
    }
}
