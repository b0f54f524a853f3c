//! Short column axial capacity and biaxial interaction

use crate::constants::{MIN_COLUMN_STEEL_RATIO, SQUASH_CONCRETE_COEFF, SQUASH_STEEL_COEFF};
use crate::units::{KiloNewtons, Newtons};

/// Minimum longitudinal steel, Ast,min = 0.008 Ac (mm²)
#[inline]
pub fn minimum_column_steel(gross_area_mm2: f64) -> f64 {
    MIN_COLUMN_STEEL_RATIO * gross_area_mm2
}

/// Squash load Puz = 0.4 fck Ac + 0.67 fy Asc (N)
///
/// The full gross area is used for the concrete term; the steel area is not
/// deducted.
#[inline]
pub fn squash_load(fck: f64, fy: f64, gross_area_mm2: f64, steel_area_mm2: f64) -> f64 {
    SQUASH_CONCRETE_COEFF * fck * gross_area_mm2 + SQUASH_STEEL_COEFF * fy * steel_area_mm2
}

/// Linear biaxial interaction sum Pu/Puz + Mux/Mux1 + Muy/Muy1
///
/// `pu_kn` in kN and `puz_n` in N; moments in kN·m.
#[inline]
pub fn biaxial_interaction(pu_kn: f64, puz_n: f64, mux: f64, mux1: f64, muy: f64, muy1: f64) -> f64 {
    let pu: Newtons = KiloNewtons(pu_kn).into();
    pu.0 / puz_n + mux / mux1 + muy / muy1
}
