//! # Flexure Formulas
//!
//! Design moments for single-span beams and the simplified tension steel
//! requirement used by both beams and footings.
//!
//! ## Notation
//!
//! - `L` = Span (m)
//! - `w` = Factored uniform load (kN/m)
//! - `P` = Factored point load (kN)
//! - `d` = Effective depth (mm)
//! - `fy` = Steel yield strength (MPa)
//! - `fck` = Concrete strength (MPa)
//!
//! Moments are returned in kN·m, steel areas in mm².

use crate::constants::{LEVER_ARM_FACTOR, LIMITING_MOMENT_COEFF, STEEL_STRESS_FACTOR};
use crate::units::{KnM, NMm};

/// Maximum moment for a full-span UDL, Mu = wL²/k
///
/// `k` is 8 for simply supported spans and 12 for fixed ends
/// (see [`SupportCondition::udl_moment_divisor`](crate::loads::SupportCondition::udl_moment_divisor)).
#[inline]
pub fn udl_moment(w: f64, l: f64, k: f64) -> f64 {
    w * l.powi(2) / k
}

/// Maximum shear for a full-span UDL, Vu = wL/2
#[inline]
pub fn udl_shear(w: f64, l: f64) -> f64 {
    w * l / 2.0
}

/// Moment under a midspan point load, Mu = PL/4
#[inline]
pub fn point_midspan_moment(p: f64, l: f64) -> f64 {
    p * l / 4.0
}

/// Shear under a midspan point load, Vu = P/2
#[inline]
pub fn point_midspan_shear(p: f64) -> f64 {
    p / 2.0
}

/// Required tension steel, Ast = Mu / (0.87 fy · 0.9 d)
///
/// Non-iterative: the lever arm is fixed at 0.9d instead of being solved
/// from the neutral axis depth.
///
/// ```
/// use rebar_core::equations::flexure::required_steel_area;
///
/// let ast = required_steel_area(60.0, 500.0, 475.0);
/// assert!((ast - 322.65).abs() < 0.01);
/// ```
#[inline]
pub fn required_steel_area(mu_knm: f64, fy: f64, d_mm: f64) -> f64 {
    let mu: NMm = KnM(mu_knm).into();
    mu.0 / (STEEL_STRESS_FACTOR * fy * LEVER_ARM_FACTOR * d_mm)
}

/// Limiting moment of resistance, Mu,lim = 0.138 fck b d² (kN·m)
///
/// `b` is the face width perpendicular to the bending axis and `d` the
/// effective depth along it, both in mm.
#[inline]
pub fn limiting_moment(fck: f64, b_mm: f64, d_mm: f64) -> f64 {
    let mu = NMm(LIMITING_MOMENT_COEFF * fck * b_mm * d_mm.powi(2));
    KnM::from(mu).0
}
