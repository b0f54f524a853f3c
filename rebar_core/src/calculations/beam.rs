//! # RC Beam Calculation
//!
//! Preliminary limit-state check of a single-span rectangular RC beam.
//!
//! ## Assumptions
//!
//! - One load case: full-span UDL or a point load at midspan, factored by 1.5
//! - Simply supported (Mu = wL²/8) or fixed (Mu = wL²/12) ends
//! - Tension steel from Ast = Mu / (0.87 fy · 0.9 d), 16 mm bars only
//! - Shear capacity τc = 0.36 √fck regardless of steel percentage
//! - Deflection by basic span/depth ratio (20 simply supported, 10 fixed)
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::calculations::beam::{calculate, BeamInput};
//! use rebar_core::loads::{BeamLoad, SupportCondition};
//! use rebar_core::materials::{ConcreteGrade, SteelGrade};
//!
//! let input = BeamInput {
//!     label: "B-1".to_string(),
//!     span_m: 4.0,
//!     width_mm: 300.0,
//!     depth_mm: 500.0,
//!     cover_mm: 25.0,
//!     concrete: ConcreteGrade::M25,
//!     steel: SteelGrade::Fe500,
//!     support: SupportCondition::SimplySupported,
//!     load: BeamLoad::Udl { w_kn_per_m: 20.0 },
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.mu_knm - 60.0).abs() < 1e-9);
//! assert_eq!(result.bar_count, 2);
//! assert!(result.passes());
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::MAIN_BAR_DIAMETER_MM;
use crate::equations::registry::Equation;
use crate::equations::{
    nominal_shear_stress, point_midspan_moment, point_midspan_shear, required_steel_area,
    udl_moment, udl_shear,
};
use crate::errors::{require_finite, require_positive, CalcError, CalcResult};
use crate::loads::{BeamLoad, SupportCondition};
use crate::materials::{bar_area_mm2, ConcreteGrade, SteelGrade};
use crate::units::{Meters, Millimeters};

/// Input parameters for an RC beam.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "span_m": 4.0,
///   "width_mm": 300.0,
///   "depth_mm": 500.0,
///   "cover_mm": 25.0,
///   "concrete": "M25",
///   "steel": "Fe500",
///   "support": "SimplySupported",
///   "load": { "Udl": { "w_kn_per_m": 20.0 } }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamInput {
    /// User label for this beam (e.g., "B-1", "Lintel over door")
    pub label: String,

    /// Effective span in metres
    pub span_m: f64,

    /// Beam width b in mm
    pub width_mm: f64,

    /// Overall depth D in mm
    pub depth_mm: f64,

    /// Cover to the tension steel in mm
    pub cover_mm: f64,

    /// Concrete grade (fck)
    pub concrete: ConcreteGrade,

    /// Reinforcement grade (fy)
    pub steel: SteelGrade,

    /// End restraint
    pub support: SupportCondition,

    /// Service load (unfactored)
    pub load: BeamLoad,
}

impl BeamInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("span_m", self.span_m)?;
        require_positive("width_mm", self.width_mm)?;
        require_positive("depth_mm", self.depth_mm)?;
        require_positive("cover_mm", self.cover_mm)?;
        self.load.validate()?;

        if self.effective_depth_mm() <= 0.0 {
            log::warn!(
                "beam '{}': cover {} mm leaves no effective depth in {} mm section",
                self.label,
                self.cover_mm,
                self.depth_mm
            );
            return Err(CalcError::invalid_geometry(
                format!("Beam '{}'", self.label),
                format!(
                    "effective depth d = {} - {} = {} mm must be positive",
                    self.depth_mm,
                    self.cover_mm,
                    self.effective_depth_mm()
                ),
            ));
        }
        Ok(())
    }

    /// Effective depth d = D - cover (mm)
    pub fn effective_depth_mm(&self) -> f64 {
        self.depth_mm - self.cover_mm
    }

    /// Span in millimetres
    pub fn span_mm(&self) -> f64 {
        Millimeters::from(Meters(self.span_m)).0
    }
}

/// Results from beam calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "factored_load": 30.0,
///   "mu_knm": 60.0,
///   "vu_kn": 60.0,
///   "effective_depth_mm": 475.0,
///   "ast_required_mm2": 322.65,
///   "bar_diameter_mm": 16.0,
///   "bar_count": 2,
///   "ast_provided_mm2": 402.12,
///   "tau_v_mpa": 0.42,
///   "tau_c_mpa": 1.8,
///   "span_depth_ratio": 8.42,
///   "span_depth_limit": 20.0,
///   "shear_ok": true,
///   "deflection_ok": true,
///   "design_ok": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamResult {
    // === Demand ===
    /// Factored load, 1.5 × service (kN/m for UDL, kN for point load)
    pub factored_load: f64,

    /// Design moment Mu (kN·m)
    pub mu_knm: f64,

    /// Design shear Vu (kN)
    pub vu_kn: f64,

    // === Flexure ===
    /// Effective depth d (mm)
    pub effective_depth_mm: f64,

    /// Required tension steel Ast (mm²)
    pub ast_required_mm2: f64,

    /// Bar diameter used (mm)
    pub bar_diameter_mm: f64,

    /// Number of bars, smallest n with n·Aφ ≥ Ast
    pub bar_count: u32,

    /// Provided steel area n·Aφ (mm²)
    pub ast_provided_mm2: f64,

    // === Shear ===
    /// Nominal shear stress τv (MPa)
    pub tau_v_mpa: f64,

    /// Permissible shear stress τc (MPa)
    pub tau_c_mpa: f64,

    // === Deflection ===
    /// Span / effective depth
    pub span_depth_ratio: f64,

    /// Allowable span / effective depth
    pub span_depth_limit: f64,

    // === Checks ===
    /// τv ≤ τc
    pub shear_ok: bool,

    /// span/d ≤ limit
    pub deflection_ok: bool,

    /// Both checks pass
    pub design_ok: bool,

    /// Equations applied, in evaluation order
    #[serde(default)]
    pub equations: Vec<Equation>,
}

impl BeamResult {
    /// Check if the beam passes both shear and deflection
    pub fn passes(&self) -> bool {
        self.design_ok
    }

    /// Shear demand/capacity ratio τv/τc
    pub fn shear_unity(&self) -> f64 {
        self.tau_v_mpa / self.tau_c_mpa
    }

    /// Deflection demand/limit ratio (span/d) / limit
    pub fn deflection_unity(&self) -> f64 {
        self.span_depth_ratio / self.span_depth_limit
    }

    /// Name of the check with the higher unity ratio
    pub fn governing_condition(&self) -> &'static str {
        if self.shear_unity() >= self.deflection_unity() {
            "Shear"
        } else {
            "Deflection"
        }
    }
}

/// Smallest number of bars of area `bar_area` whose total covers `ast`.
///
/// Fails when that number is not representable as a `u32`, so the provided
/// area can never fall short of `ast`.
pub fn bar_count(ast: f64, bar_area: f64) -> CalcResult<u32> {
    let count = (ast / bar_area).ceil().max(0.0);
    if !count.is_finite() || count > f64::from(u32::MAX) {
        return Err(CalcError::invalid_input(
            "ast_required_mm2",
            ast.to_string(),
            format!("Required steel needs more than {} bars", u32::MAX),
        ));
    }
    Ok(count as u32)
}

/// Evaluate the beam checks.
///
/// # Returns
///
/// * `Ok(BeamResult)` - Complete result with pass/fail flags
/// * `Err(CalcError::InvalidInput)` - Non-positive dimension or load, or
///   magnitudes so large that a derived value overflows
/// * `Err(CalcError::InvalidGeometry)` - Cover leaves no effective depth
pub fn calculate(input: &BeamInput) -> CalcResult<BeamResult> {
    input.validate()?;

    let mut equations = vec![Equation::FactoredLoad];
    let factored_load = input.load.factored();

    let (mu_knm, vu_kn) = match input.load {
        BeamLoad::Udl { .. } => {
            equations.extend([Equation::UdlMoment, Equation::UdlShear]);
            (
                udl_moment(factored_load, input.span_m, input.support.udl_moment_divisor()),
                udl_shear(factored_load, input.span_m),
            )
        }
        BeamLoad::PointMidspan { .. } => {
            equations.extend([Equation::PointMidspanMoment, Equation::PointMidspanShear]);
            (
                point_midspan_moment(factored_load, input.span_m),
                point_midspan_shear(factored_load),
            )
        }
    };

    require_finite("factored_load", factored_load)?;
    require_finite("mu_knm", mu_knm)?;
    require_finite("vu_kn", vu_kn)?;

    let d = input.effective_depth_mm();
    let fy = input.steel.fy_mpa();

    // Flexure
    let ast_required_mm2 = required_steel_area(mu_knm, fy, d);
    require_finite("ast_required_mm2", ast_required_mm2)?;
    let bar_area = bar_area_mm2(MAIN_BAR_DIAMETER_MM);
    let bar_count = bar_count(ast_required_mm2, bar_area)?;
    let ast_provided_mm2 = f64::from(bar_count) * bar_area;
    equations.extend([
        Equation::EffectiveDepth,
        Equation::RequiredSteelArea,
        Equation::BarCount,
    ]);

    // Shear
    let tau_v_mpa = nominal_shear_stress(vu_kn, input.width_mm, d);
    require_finite("tau_v_mpa", tau_v_mpa)?;
    let tau_c_mpa = input.concrete.shear_capacity().0;
    let shear_ok = tau_v_mpa <= tau_c_mpa;
    equations.extend([
        Equation::NominalShearStress,
        Equation::PermissibleShearStress,
        Equation::ShearCheck,
    ]);

    // Deflection
    let span_depth_ratio = input.span_mm() / d;
    require_finite("span_depth_ratio", span_depth_ratio)?;
    let span_depth_limit = input.support.span_depth_limit();
    let deflection_ok = span_depth_ratio <= span_depth_limit;
    equations.push(Equation::SpanDepthRatio);

    log::debug!(
        "beam '{}': Mu={:.2} kNm Vu={:.2} kN Ast={:.2} mm2 tau_v={:.3} tau_c={:.3} L/d={:.2}",
        input.label,
        mu_knm,
        vu_kn,
        ast_required_mm2,
        tau_v_mpa,
        tau_c_mpa,
        span_depth_ratio
    );

    Ok(BeamResult {
        factored_load,
        mu_knm,
        vu_kn,
        effective_depth_mm: d,
        ast_required_mm2,
        bar_diameter_mm: MAIN_BAR_DIAMETER_MM,
        bar_count,
        ast_provided_mm2,
        tau_v_mpa,
        tau_c_mpa,
        span_depth_ratio,
        span_depth_limit,
        shear_ok,
        deflection_ok,
        design_ok: shear_ok && deflection_ok,
        equations,
    })
}
