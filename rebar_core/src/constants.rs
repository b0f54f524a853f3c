//! # Design Constants
//!
//! The single hardcoded limit-state formula set used by every calculator.
//! None of these are user-configurable; they are collected here so the
//! equation registry and the calculators cite the same numbers.

/// Partial safety factor applied to every service load (1.5 DL+LL)
pub const LOAD_FACTOR: f64 = 1.5;

/// Design yield stress factor: steel is taken at 0.87 fy
pub const STEEL_STRESS_FACTOR: f64 = 0.87;

/// Simplified lever arm z = 0.9 d (non-iterative flexure formula)
pub const LEVER_ARM_FACTOR: f64 = 0.9;

/// τc = 0.36 √fck
pub const SHEAR_CAPACITY_COEFF: f64 = 0.36;

/// Basic span/effective-depth limit for simply supported beams
pub const SPAN_DEPTH_LIMIT_SIMPLE: f64 = 20.0;

/// Basic span/effective-depth limit for fixed (continuous) beams
pub const SPAN_DEPTH_LIMIT_FIXED: f64 = 10.0;

/// Limiting moment coefficient Mu,lim = 0.138 fck b d² (balanced section)
pub const LIMITING_MOMENT_COEFF: f64 = 0.138;

/// Minimum longitudinal steel in columns, as a fraction of gross area
pub const MIN_COLUMN_STEEL_RATIO: f64 = 0.008;

/// Concrete coefficient in the squash load Puz
pub const SQUASH_CONCRETE_COEFF: f64 = 0.4;

/// Steel coefficient in the squash load Puz
pub const SQUASH_STEEL_COEFF: f64 = 0.67;

/// Factor of safety applied to the soil bearing capacity
pub const SOIL_SAFETY_FACTOR: f64 = 1.5;

/// Clear cover assumed for footings (mm); beams and columns take cover as input
pub const FOOTING_COVER_MM: f64 = 50.0;

/// Bar diameter used for all flexural reinforcement (mm)
pub const MAIN_BAR_DIAMETER_MM: f64 = 16.0;

/// Interaction ratio at or below which a column passes
pub const INTERACTION_LIMIT: f64 = 1.0;
