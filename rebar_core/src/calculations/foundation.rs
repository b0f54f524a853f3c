//! # Isolated Footing Calculation
//!
//! Sizes a square pad footing under a concentric column load and checks
//! one-way shear.
//!
//! ## Assumptions
//!
//! - Square footing, side rounded to 2 decimals (m)
//! - Allowable soil pressure SBC / 1.5
//! - Cover fixed at 50 mm (unlike beams and columns, not an input)
//! - Projection beyond the column face designed as a cantilever
//! - Steel per metre width from the same 0.9d lever-arm formula as beams
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::calculations::foundation::{calculate, FoundationInput};
//! use rebar_core::materials::{ConcreteGrade, SteelGrade};
//!
//! let input = FoundationInput {
//!     label: "F-1".to_string(),
//!     column_load_kn: 800.0,
//!     sbc_kn_per_m2: 200.0,
//!     concrete: ConcreteGrade::M25,
//!     steel: SteelGrade::Fe500,
//!     column_width_mm: 300.0,
//!     thickness_mm: 500.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.side_m, 2.45);
//! assert!(result.passes());
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::{FOOTING_COVER_MM, MAIN_BAR_DIAMETER_MM};
use crate::equations::registry::Equation;
use crate::equations::{
    bar_spacing_mm, cantilever_moment, footing_one_way_shear_stress, net_soil_pressure,
    required_footing_area, required_steel_area, round_to,
};
use crate::errors::{require_finite, require_positive, CalcError, CalcResult};
use crate::materials::{bar_area_mm2, ConcreteGrade, SteelGrade};
use crate::units::{Meters, Millimeters};

/// Input parameters for an isolated square footing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "F-1",
///   "column_load_kn": 800.0,
///   "sbc_kn_per_m2": 200.0,
///   "concrete": "M25",
///   "steel": "Fe500",
///   "column_width_mm": 300.0,
///   "thickness_mm": 500.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundationInput {
    /// User label for this footing (e.g., "F-1")
    pub label: String,

    /// Column load Pu in kN
    pub column_load_kn: f64,

    /// Safe bearing capacity of soil in kN/m²
    pub sbc_kn_per_m2: f64,

    /// Concrete grade (fck)
    pub concrete: ConcreteGrade,

    /// Reinforcement grade (fy)
    pub steel: SteelGrade,

    /// Width of the (square) column in mm
    pub column_width_mm: f64,

    /// Overall footing thickness in mm
    pub thickness_mm: f64,
}

impl FoundationInput {
    /// Validate the individual fields.
    ///
    /// Geometry that depends on the computed footing size is checked in
    /// [`calculate`].
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("column_load_kn", self.column_load_kn)?;
        require_positive("sbc_kn_per_m2", self.sbc_kn_per_m2)?;
        require_positive("column_width_mm", self.column_width_mm)?;
        require_positive("thickness_mm", self.thickness_mm)?;

        if self.effective_depth_mm() <= 0.0 {
            return Err(CalcError::invalid_geometry(
                format!("Footing '{}'", self.label),
                format!(
                    "thickness {} mm does not exceed the {} mm cover",
                    self.thickness_mm, FOOTING_COVER_MM
                ),
            ));
        }
        Ok(())
    }

    /// Effective depth d = thickness - 50 mm
    pub fn effective_depth_mm(&self) -> f64 {
        self.thickness_mm - FOOTING_COVER_MM
    }
}

/// Results from footing calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "area_required_m2": 6.0,
///   "side_m": 2.45,
///   "area_provided_m2": 6.0025,
///   "area_ok": true,
///   "effective_depth_mm": 450.0,
///   "net_pressure_kn_per_m2": 133.28,
///   "mu_knm": 77.01,
///   "ast_required_mm2": 437.13,
///   "bar_diameter_mm": 16.0,
///   "bar_spacing_mm": 459.0,
///   "tau_v_mpa": 0.50,
///   "tau_c_mpa": 1.8,
///   "shear_ok": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundationResult {
    // === Sizing ===
    /// Required plan area Pu / (SBC / 1.5) (m²)
    pub area_required_m2: f64,

    /// Side B of the square footing, rounded to 2 decimals (m)
    pub side_m: f64,

    /// Provided plan area B² (m²)
    pub area_provided_m2: f64,

    /// B² ≥ required area; false when rounding B down undersizes the footing
    pub area_ok: bool,

    // === Flexure ===
    /// Effective depth d (mm)
    pub effective_depth_mm: f64,

    /// Net upward pressure q (kN/m²)
    pub net_pressure_kn_per_m2: f64,

    /// Cantilever moment at column face (kN·m per m width)
    pub mu_knm: f64,

    /// Required steel per metre width (mm²/m)
    pub ast_required_mm2: f64,

    /// Bar diameter used (mm)
    pub bar_diameter_mm: f64,

    /// Bar spacing, floored to whole mm
    pub bar_spacing_mm: f64,

    // === Shear ===
    /// One-way shear stress τv (MPa)
    pub tau_v_mpa: f64,

    /// Permissible shear stress τc (MPa)
    pub tau_c_mpa: f64,

    /// τv ≤ τc
    pub shear_ok: bool,

    /// Equations applied, in evaluation order
    #[serde(default)]
    pub equations: Vec<Equation>,
}

impl FoundationResult {
    /// The footing passes when one-way shear is satisfied
    ///
    /// `area_ok` is reported separately and does not gate the verdict.
    pub fn passes(&self) -> bool {
        self.shear_ok
    }
}

/// Size the footing and evaluate the one-way shear check.
///
/// # Returns
///
/// * `Ok(FoundationResult)` - Complete result with pass/fail flag
/// * `Err(CalcError::InvalidInput)` - Non-positive load, SBC or dimension, or
///   a load/SBC combination whose derived values overflow
/// * `Err(CalcError::InvalidGeometry)` - Thickness within cover, or the shear
///   section at d from the column face falls outside the footing
pub fn calculate(input: &FoundationInput) -> CalcResult<FoundationResult> {
    input.validate()?;

    let pu = input.column_load_kn;

    // Plan size
    let area_required_m2 = required_footing_area(pu, input.sbc_kn_per_m2);
    require_finite("area_required_m2", area_required_m2)?;
    let side_m = round_to(area_required_m2.sqrt(), 2);
    let area_provided_m2 = side_m.powi(2);
    require_finite("side_m", side_m)?;
    require_finite("area_provided_m2", area_provided_m2)?;
    let area_ok = area_provided_m2 >= area_required_m2;
    if !area_ok {
        log::warn!(
            "footing '{}': rounded side {:.2} m gives {:.4} m2 < required {:.4} m2",
            input.label,
            side_m,
            area_provided_m2,
            area_required_m2
        );
    }

    let d_mm = input.effective_depth_mm();
    let d_m = Meters::from(Millimeters(d_mm)).0;
    let column_m = Meters::from(Millimeters(input.column_width_mm)).0;

    // The critical shear section sits at d from the column face on both sides.
    let shear_length_m = side_m - (column_m + d_m);
    if shear_length_m <= 0.0 {
        log::warn!(
            "footing '{}': column {:.3} m + d {:.3} m reaches the {:.2} m footing edge",
            input.label,
            column_m,
            d_m,
            side_m
        );
        return Err(CalcError::invalid_geometry(
            format!("Footing '{}'", input.label),
            format!(
                "column width + d = {:.3} m is not less than footing side {:.2} m",
                column_m + d_m,
                side_m
            ),
        ));
    }

    // Flexure
    let net_pressure_kn_per_m2 = net_soil_pressure(pu, side_m);
    let mu_knm = cantilever_moment(net_pressure_kn_per_m2, side_m, column_m);
    let fy = input.steel.fy_mpa();
    let ast_required_mm2 = required_steel_area(mu_knm, fy, d_mm);
    let bar_spacing_mm = bar_spacing_mm(bar_area_mm2(MAIN_BAR_DIAMETER_MM), ast_required_mm2);
    require_finite("net_pressure_kn_per_m2", net_pressure_kn_per_m2)?;
    require_finite("mu_knm", mu_knm)?;
    require_finite("ast_required_mm2", ast_required_mm2)?;
    require_finite("bar_spacing_mm", bar_spacing_mm)?;

    // One-way shear
    let tau_v_mpa =
        footing_one_way_shear_stress(net_pressure_kn_per_m2, side_m, column_m, d_m, d_mm);
    require_finite("tau_v_mpa", tau_v_mpa)?;
    let tau_c_mpa = input.concrete.shear_capacity().0;
    let shear_ok = tau_v_mpa <= tau_c_mpa;

    log::debug!(
        "footing '{}': B={:.2} m q={:.2} kN/m2 Mu={:.2} kNm Ast={:.2} mm2/m s={} mm tau_v={:.3}",
        input.label,
        side_m,
        net_pressure_kn_per_m2,
        mu_knm,
        ast_required_mm2,
        bar_spacing_mm,
        tau_v_mpa
    );

    Ok(FoundationResult {
        area_required_m2,
        side_m,
        area_provided_m2,
        area_ok,
        effective_depth_mm: d_mm,
        net_pressure_kn_per_m2,
        mu_knm,
        ast_required_mm2,
        bar_diameter_mm: MAIN_BAR_DIAMETER_MM,
        bar_spacing_mm,
        tau_v_mpa,
        tau_c_mpa,
        shear_ok,
        equations: vec![
            Equation::FootingArea,
            Equation::EffectiveDepth,
            Equation::NetSoilPressure,
            Equation::FootingCantileverMoment,
            Equation::RequiredSteelArea,
            Equation::BarSpacing,
            Equation::FootingOneWayShear,
            Equation::PermissibleShearStress,
            Equation::ShearCheck,
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn test_footing() -> FoundationInput {
        FoundationInput {
            label: "Test Footing".to_string(),
            column_load_kn: 800.0,
            sbc_kn_per_m2: 200.0,
            concrete: ConcreteGrade::M25,
            steel: SteelGrade::Fe500,
            column_width_mm: 300.0,
            thickness_mm: 500.0,
        }
    }

    #[test]
    fn test_reference_footing() {
        let result = calculate(&test_footing()).unwrap();

        assert_relative_eq!(result.area_required_m2, 6.0, max_relative = 1e-12);
        // sqrt(6) = 2.4495 -> 2.45
        assert_eq!(result.side_m, 2.45);
        assert!(result.area_ok);
        assert_eq!(result.effective_depth_mm, 450.0);

        // q = 800 / 6.0025
        assert_abs_diff_eq!(result.net_pressure_kn_per_m2, 133.278, epsilon = 1e-3);
        // Mu = q * 1.075^2 / 2
        assert_abs_diff_eq!(result.mu_knm, 77.009, epsilon = 1e-3);
        assert_abs_diff_eq!(result.ast_required_mm2, 437.12, epsilon = 0.01);
        assert_eq!(result.bar_spacing_mm, 459.0);

        // q * (2.45 - 0.75) / 450
        assert_abs_diff_eq!(result.tau_v_mpa, 0.5035, epsilon = 1e-4);
        assert!(result.shear_ok);
        assert!(result.passes());
    }

    #[test]
    fn test_side_rounding_examples() {
        // A_req = Pu * 1.5 / SBC
        let cases = [
            (800.0, 200.0, 2.45),
            (600.0, 150.0, 2.45),
            (1200.0, 300.0, 2.45),
            (960.0, 160.0, 3.0),
        ];
        for (pu, sbc, side) in cases {
            let mut footing = test_footing();
            footing.column_load_kn = pu;
            footing.sbc_kn_per_m2 = sbc;
            let result = calculate(&footing).unwrap();
            assert_eq!(result.side_m, side, "Pu={} SBC={}", pu, sbc);
        }
    }

    #[test]
    fn test_rounding_down_flags_area() {
        // A_req = 5.973 -> sqrt 2.4440 -> 2.44, and 2.44^2 = 5.9536 < 5.973
        let mut footing = test_footing();
        footing.column_load_kn = 5.973 * 100.0 / 1.5;
        footing.sbc_kn_per_m2 = 100.0;
        footing.thickness_mm = 400.0;
        let result = calculate(&footing).unwrap();
        assert_eq!(result.side_m, 2.44);
        assert!(!result.area_ok);
        assert!(result.area_provided_m2 < result.area_required_m2);
        // Deficit never exceeds what 0.005 m of rounding can cost
        let tolerance = 2.0 * 0.005 * result.side_m + 0.005_f64.powi(2);
        assert!(result.area_required_m2 - result.area_provided_m2 <= tolerance);
    }

    #[test]
    fn test_shear_section_outside_footing() {
        // A_req = 100 * 1.5 / 300 = 0.5 m2, B = 0.71 m; c + d = 0.3 + 0.45 = 0.75
        let mut footing = test_footing();
        footing.column_load_kn = 100.0;
        footing.sbc_kn_per_m2 = 300.0;
        let err = calculate(&footing).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_thickness_within_cover() {
        let mut footing = test_footing();
        footing.thickness_mm = 50.0;
        assert!(matches!(
            calculate(&footing),
            Err(CalcError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn test_shear_failure() {
        // Heavy load on a thin footing
        let mut footing = test_footing();
        footing.column_load_kn = 3000.0;
        footing.sbc_kn_per_m2 = 100.0;
        footing.thickness_mm = 150.0;
        let result = calculate(&footing).unwrap();
        // B = sqrt(45) = 6.71, q = 66.6, d = 100: tau_v = 66.6 * (6.71 - 0.4) / 100 = 4.2
        assert!(!result.shear_ok);
        assert!(!result.passes());
    }

    #[test]
    fn test_invalid_inputs() {
        let mut footing = test_footing();
        footing.sbc_kn_per_m2 = 0.0;
        match calculate(&footing).unwrap_err() {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "sbc_kn_per_m2"),
            other => panic!("unexpected error: {other:?}"),
        }

        let mut footing = test_footing();
        footing.column_load_kn = -800.0;
        assert_eq!(calculate(&footing).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_overflowing_area_rejected() {
        // Both inputs finite, A_req = 1e308 / (1e-300 / 1.5) overflows
        let mut footing = test_footing();
        footing.column_load_kn = 1.0e308;
        footing.sbc_kn_per_m2 = 1.0e-300;
        match calculate(&footing).unwrap_err() {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "area_required_m2"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_huge_load_stays_finite_or_fails() {
        for pu in [1.0e150, 1.0e250, 1.0e300, 1.0e307] {
            let mut footing = test_footing();
            footing.column_load_kn = pu;
            if let Ok(result) = calculate(&footing) {
                assert!(result.side_m.is_finite());
                assert!(result.mu_knm.is_finite());
                assert!(result.tau_v_mpa.is_finite());
                assert!(result.bar_spacing_mm.is_finite());
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let footing = test_footing();
        assert_eq!(calculate(&footing).unwrap(), calculate(&footing).unwrap());
    }

    #[test]
    fn test_serialization() {
        let footing = test_footing();
        let json = serde_json::to_string(&footing).unwrap();
        assert!(json.contains("\"sbc_kn_per_m2\":200.0"));
        let roundtrip: FoundationInput = serde_json::from_str(&json).unwrap();
        assert_eq!(footing, roundtrip);
    }
}
