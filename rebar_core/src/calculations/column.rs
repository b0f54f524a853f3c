//! # RC Column Calculation
//!
//! Short rectangular column under axial load and biaxial bending.
//!
//! ## Assumptions
//!
//! - Short column (no slenderness moments)
//! - Longitudinal steel taken as the 0.8% minimum
//! - Limiting moments from the balanced-section coefficient 0.138
//! - Linear interaction Pu/Puz + Mux/Mux1 + Muy/Muy1 ≤ 1.0
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::calculations::column::{calculate, ColumnInput};
//! use rebar_core::materials::{ConcreteGrade, SteelGrade};
//!
//! let input = ColumnInput {
//!     label: "C-1".to_string(),
//!     width_mm: 300.0,
//!     depth_mm: 400.0,
//!     cover_mm: 40.0,
//!     axial_load_kn: 1000.0,
//!     mux_knm: 60.0,
//!     muy_knm: 40.0,
//!     concrete: ConcreteGrade::M25,
//!     steel: SteelGrade::Fe500,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.ast_min_mm2, 960.0);
//! assert_eq!(result.interaction_ratio, 1.533);
//! assert!(!result.passes());
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::INTERACTION_LIMIT;
use crate::equations::registry::Equation;
use crate::equations::{
    biaxial_interaction, limiting_moment, minimum_column_steel, round_to, squash_load,
};
use crate::errors::{require_finite, require_positive, CalcError, CalcResult};
use crate::materials::{ConcreteGrade, SteelGrade};

/// Input parameters for an RC column.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "C-1",
///   "width_mm": 300.0,
///   "depth_mm": 400.0,
///   "cover_mm": 40.0,
///   "axial_load_kn": 1000.0,
///   "mux_knm": 60.0,
///   "muy_knm": 40.0,
///   "concrete": "M25",
///   "steel": "Fe500"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInput {
    /// User label for this column (e.g., "C-1", "Corner column")
    pub label: String,

    /// Column width b in mm
    pub width_mm: f64,

    /// Column depth D in mm
    pub depth_mm: f64,

    /// Cover to the longitudinal steel in mm
    pub cover_mm: f64,

    /// Factored axial load Pu in kN
    pub axial_load_kn: f64,

    /// Factored moment about the x axis in kN·m
    pub mux_knm: f64,

    /// Factored moment about the y axis in kN·m
    pub muy_knm: f64,

    /// Concrete grade (fck)
    pub concrete: ConcreteGrade,

    /// Reinforcement grade (fy)
    pub steel: SteelGrade,
}

impl ColumnInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("width_mm", self.width_mm)?;
        require_positive("depth_mm", self.depth_mm)?;
        require_positive("cover_mm", self.cover_mm)?;
        require_positive("axial_load_kn", self.axial_load_kn)?;
        require_positive("mux_knm", self.mux_knm)?;
        require_positive("muy_knm", self.muy_knm)?;

        for (axis, d) in [("x", self.effective_depth_x_mm()), ("y", self.effective_depth_y_mm())] {
            if d <= 0.0 {
                log::warn!(
                    "column '{}': cover {} mm leaves no effective depth about {} axis",
                    self.label,
                    self.cover_mm,
                    axis
                );
                return Err(CalcError::invalid_geometry(
                    format!("Column '{}'", self.label),
                    format!(
                        "effective depth about {} axis is {} mm; cover {} mm must be less than the section dimension",
                        axis, d, self.cover_mm
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Gross area Ac = b × D (mm²)
    pub fn gross_area_mm2(&self) -> f64 {
        self.width_mm * self.depth_mm
    }

    /// Effective depth for bending about x, D - cover (mm)
    pub fn effective_depth_x_mm(&self) -> f64 {
        self.depth_mm - self.cover_mm
    }

    /// Effective depth for bending about y, b - cover (mm)
    pub fn effective_depth_y_mm(&self) -> f64 {
        self.width_mm - self.cover_mm
    }
}

/// Results from column calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "gross_area_mm2": 120000.0,
///   "effective_depth_x_mm": 360.0,
///   "effective_depth_y_mm": 260.0,
///   "mux1_knm": 134.136,
///   "muy1_knm": 93.288,
///   "ast_min_mm2": 960.0,
///   "puz_n": 1521600.0,
///   "interaction_ratio": 1.533,
///   "design_ok": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnResult {
    /// Gross area Ac (mm²)
    pub gross_area_mm2: f64,

    /// Effective depth about x (mm)
    pub effective_depth_x_mm: f64,

    /// Effective depth about y (mm)
    pub effective_depth_y_mm: f64,

    /// Limiting moment about x, Mux1 (kN·m)
    pub mux1_knm: f64,

    /// Limiting moment about y, Muy1 (kN·m)
    pub muy1_knm: f64,

    /// Minimum longitudinal steel (mm²)
    pub ast_min_mm2: f64,

    /// Squash load Puz (N)
    pub puz_n: f64,

    /// Biaxial interaction ratio, rounded to 3 decimals
    pub interaction_ratio: f64,

    /// interaction ≤ 1.0
    pub design_ok: bool,

    /// Equations applied, in evaluation order
    #[serde(default)]
    pub equations: Vec<Equation>,
}

impl ColumnResult {
    /// Check if the interaction ratio is within the limit
    pub fn passes(&self) -> bool {
        self.design_ok
    }
}

/// Evaluate the column interaction check.
///
/// # Returns
///
/// * `Ok(ColumnResult)` - Complete result with pass/fail flag
/// * `Err(CalcError::InvalidInput)` - Non-positive dimension, load or moment, or a
///   load so large the interaction ratio overflows
/// * `Err(CalcError::InvalidGeometry)` - Cover consumes a section dimension, so a
///   limiting moment would be zero
pub fn calculate(input: &ColumnInput) -> CalcResult<ColumnResult> {
    input.validate()?;

    let fck = input.concrete.fck_mpa();
    let fy = input.steel.fy_mpa();

    let ac = input.gross_area_mm2();
    let dx = input.effective_depth_x_mm();
    let dy = input.effective_depth_y_mm();

    let mux1_knm = limiting_moment(fck, input.width_mm, dx);
    let muy1_knm = limiting_moment(fck, input.depth_mm, dy);
    for (name, value) in [("Mux1", mux1_knm), ("Muy1", muy1_knm)] {
        if !(value.is_finite() && value > 0.0) {
            return Err(CalcError::invalid_geometry(
                format!("Column '{}'", input.label),
                format!("limiting moment {} evaluates to {}", name, value),
            ));
        }
    }

    let ast_min_mm2 = minimum_column_steel(ac);
    let puz_n = squash_load(fck, fy, ac, ast_min_mm2);

    let raw = biaxial_interaction(
        input.axial_load_kn,
        puz_n,
        input.mux_knm,
        mux1_knm,
        input.muy_knm,
        muy1_knm,
    );
    require_finite("interaction_ratio", raw)?;
    let interaction_ratio = round_to(raw, 3);
    let design_ok = interaction_ratio <= INTERACTION_LIMIT;

    log::debug!(
        "column '{}': Puz={:.0} N Mux1={:.2} Muy1={:.2} interaction={:.3}",
        input.label,
        puz_n,
        mux1_knm,
        muy1_knm,
        interaction_ratio
    );

    Ok(ColumnResult {
        gross_area_mm2: ac,
        effective_depth_x_mm: dx,
        effective_depth_y_mm: dy,
        mux1_knm,
        muy1_knm,
        ast_min_mm2,
        puz_n,
        interaction_ratio,
        design_ok,
        equations: vec![
            Equation::GrossArea,
            Equation::EffectiveDepth,
            Equation::LimitingMoment,
            Equation::MinimumColumnSteel,
            Equation::SquashLoad,
            Equation::BiaxialInteraction,
        ],
    })
}
