//! Shear stress formulas

use crate::units::{KiloNewtons, Newtons};

/// Nominal shear stress τv = Vu / (b d) in MPa, with Vu in kN and b, d in mm
#[inline]
pub fn nominal_shear_stress(vu_kn: f64, b_mm: f64, d_mm: f64) -> f64 {
    let vu: Newtons = KiloNewtons(vu_kn).into();
    vu.0 / (b_mm * d_mm)
}

/// One-way shear stress in a square footing, τv = q (B − (c + d)) / d
///
/// `q` in kN/m², `B`, `c` (column width) and `d_m` in metres, `d_mm` the same
/// effective depth in millimetres. The mixed units are kept as the tool has
/// always evaluated them; the caller must ensure `c + d < B`.
#[inline]
pub fn footing_one_way_shear_stress(q: f64, b_m: f64, c_m: f64, d_m: f64, d_mm: f64) -> f64 {
    q * (b_m - (c_m + d_m)) / d_mm
}
