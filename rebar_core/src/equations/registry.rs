//! # Equation Registry
//!
//! Central registry of every formula the calculators evaluate. Each equation
//! carries a plain-text formula, a code reference and its variables so a
//! report can list exactly what was applied to a member.
//!
//! ## Usage
//!
//! ```rust
//! use rebar_core::equations::registry::Equation;
//!
//! let meta = Equation::RequiredSteelArea.metadata();
//! println!("{}: {}", meta.name, meta.formula_plain);
//! assert!(meta.formula_plain.contains("0.9 d"));
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to the standard a formula comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// IS 456 - Plain and Reinforced Concrete, Code of Practice
    IS456 {
        year: u16,
        clause: &'static str,
    },
    /// SP 16 - Design Aids for Reinforced Concrete to IS 456
    SP16 {
        chart: &'static str,
    },
    /// Fundamental statics (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::IS456 { year, clause } => format!("IS 456:{} Cl. {}", year, clause),
            CodeReference::SP16 { chart } => format!("SP 16 {}", chart),
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::IS456 { .. } => "IS 456",
            CodeReference::SP16 { .. } => "SP 16",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Factored loads, design moment and shear
    InternalForces,
    /// Effective depth, gross area
    SectionProperties,
    /// Steel areas, bar counts and spacing
    Reinforcement,
    /// Shear stresses and capacities
    Stresses,
    /// Span/depth ratios
    Serviceability,
    /// Section capacities (limiting moment, squash load)
    Capacity,
    /// Footing plan size and soil pressure
    SoilBearing,
    /// Pass/fail criteria
    DesignChecks,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::InternalForces => "Internal Forces",
            EquationCategory::SectionProperties => "Section Properties",
            EquationCategory::Reinforcement => "Reinforcement",
            EquationCategory::Stresses => "Stresses",
            EquationCategory::Serviceability => "Serviceability",
            EquationCategory::Capacity => "Capacity",
            EquationCategory::SoilBearing => "Soil Bearing",
            EquationCategory::DesignChecks => "Design Checks",
        }
    }

    /// Sort order in the reference (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::SoilBearing => 1,
            EquationCategory::InternalForces => 2,
            EquationCategory::SectionProperties => 3,
            EquationCategory::Reinforcement => 4,
            EquationCategory::Stresses => 5,
            EquationCategory::Capacity => 6,
            EquationCategory::Serviceability => 7,
            EquationCategory::DesignChecks => 8,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "Mu", "d", "fy")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "kN·m", "mm", "MPa")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for a design equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All design equations used by the calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // Loads and internal forces
    /// wu = 1.5 w
    FactoredLoad,
    /// Mu = wL²/8 or wL²/12
    UdlMoment,
    /// Vu = wL/2
    UdlShear,
    /// Mu = PL/4
    PointMidspanMoment,
    /// Vu = P/2
    PointMidspanShear,

    // Section properties
    /// d = D - cover
    EffectiveDepth,
    /// Ac = b D
    GrossArea,

    // Reinforcement
    /// Ast = Mu / (0.87 fy 0.9 d)
    RequiredSteelArea,
    /// n = ceil(Ast / (π φ²/4))
    BarCount,
    /// s = floor(1000 Aφ / Ast)
    BarSpacing,
    /// Ast,min = 0.008 Ac
    MinimumColumnSteel,

    // Stresses
    /// τv = Vu / (b d)
    NominalShearStress,
    /// τc = 0.36 √fck
    PermissibleShearStress,
    /// τv = q (B - (c + d)) / d
    FootingOneWayShear,

    // Capacity
    /// Mu,lim = 0.138 fck b d²
    LimitingMoment,
    /// Puz = 0.4 fck Ac + 0.67 fy Asc
    SquashLoad,

    // Serviceability
    /// L/d <= 20 or 10
    SpanDepthRatio,

    // Soil bearing
    /// A = Pu / (SBC / FS), B = √A
    FootingArea,
    /// q = Pu / B²
    NetSoilPressure,
    /// Mu = q ((B - c)/2)² / 2
    FootingCantileverMoment,

    // Design checks
    /// Pu/Puz + Mux/Mux1 + Muy/Muy1 <= 1.0
    BiaxialInteraction,
    /// τv <= τc
    ShearCheck,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::FactoredLoad => EquationMetadata {
                name: "Factored Load",
                description: "Ultimate load from the service load with a single partial safety factor",
                formula_plain: "wu = 1.5 w",
                reference: CodeReference::IS456 { year: 2000, clause: "36.4.1, Table 18" },
                variables: vec![
                    Variable::new("w", "Service load", "kN/m or kN"),
                    Variable::new("wu", "Factored load", "kN/m or kN"),
                ],
                assumptions: vec!["Single load combination 1.5(DL + LL)"],
                category: EquationCategory::InternalForces,
                source_module: "loads.rs",
                source_function: "BeamLoad::factored",
            },

            Equation::UdlMoment => EquationMetadata {
                name: "Maximum Moment for Uniform Load",
                description: "Design moment of a single span under full-span UDL",
                formula_plain: "Mu = wu L^2 / 8 (simply supported), wu L^2 / 12 (fixed)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("Mu", "Design moment", "kN·m"),
                    Variable::new("wu", "Factored uniform load", "kN/m"),
                    Variable::new("L", "Span", "m"),
                ],
                assumptions: vec![
                    "Fixed case uses the support moment wL^2/12",
                    "No moment redistribution",
                ],
                category: EquationCategory::InternalForces,
                source_module: "equations/flexure.rs",
                source_function: "udl_moment",
            },

            Equation::UdlShear => EquationMetadata {
                name: "Maximum Shear for Uniform Load",
                description: "Support shear of a single span under full-span UDL",
                formula_plain: "Vu = wu L / 2",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("Vu", "Design shear", "kN"),
                    Variable::new("wu", "Factored uniform load", "kN/m"),
                    Variable::new("L", "Span", "m"),
                ],
                assumptions: vec!["Shear taken at the support face"],
                category: EquationCategory::InternalForces,
                source_module: "equations/flexure.rs",
                source_function: "udl_shear",
            },

            Equation::PointMidspanMoment => EquationMetadata {
                name: "Moment for Midspan Point Load",
                description: "Design moment under a concentrated load at midspan",
                formula_plain: "Mu = Pu L / 4",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("Mu", "Design moment", "kN·m"),
                    Variable::new("Pu", "Factored point load", "kN"),
                    Variable::new("L", "Span", "m"),
                ],
                assumptions: vec!["Simply supported formula applied for every support type"],
                category: EquationCategory::InternalForces,
                source_module: "equations/flexure.rs",
                source_function: "point_midspan_moment",
            },

            Equation::PointMidspanShear => EquationMetadata {
                name: "Shear for Midspan Point Load",
                description: "Support shear under a concentrated load at midspan",
                formula_plain: "Vu = Pu / 2",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("Vu", "Design shear", "kN"),
                    Variable::new("Pu", "Factored point load", "kN"),
                ],
                assumptions: vec![],
                category: EquationCategory::InternalForces,
                source_module: "equations/flexure.rs",
                source_function: "point_midspan_shear",
            },

            Equation::EffectiveDepth => EquationMetadata {
                name: "Effective Depth",
                description: "Depth to the tension steel",
                formula_plain: "d = D - cover",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("d", "Effective depth", "mm"),
                    Variable::new("D", "Overall depth or thickness", "mm"),
                    Variable::new("cover", "Cover (50 mm fixed for footings)", "mm"),
                ],
                assumptions: vec!["Bar radius not deducted"],
                category: EquationCategory::SectionProperties,
                source_module: "calculations",
                source_function: "effective_depth",
            },

            Equation::GrossArea => EquationMetadata {
                name: "Gross Area",
                description: "Gross cross-sectional area of a rectangular column",
                formula_plain: "Ac = b D",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("b", "Column width", "mm"),
                    Variable::new("D", "Column depth", "mm"),
                ],
                assumptions: vec![],
                category: EquationCategory::SectionProperties,
                source_module: "calculations/column.rs",
                source_function: "ColumnInput::gross_area_mm2",
            },

            Equation::RequiredSteelArea => EquationMetadata {
                name: "Required Tension Steel",
                description: "Tension steel for a given moment using a fixed lever arm",
                formula_plain: "Ast = Mu / (0.87 fy x 0.9 d)",
                reference: CodeReference::IS456 { year: 2000, clause: "G-1.1(b)" },
                variables: vec![
                    Variable::new("Ast", "Tension steel area", "mm²"),
                    Variable::new("Mu", "Design moment", "N·mm"),
                    Variable::new("fy", "Steel yield strength", "MPa"),
                    Variable::new("d", "Effective depth", "mm"),
                ],
                assumptions: vec![
                    "Lever arm fixed at 0.9d (not solved iteratively)",
                    "Under-reinforced section assumed",
                ],
                category: EquationCategory::Reinforcement,
                source_module: "equations/flexure.rs",
                source_function: "required_steel_area",
            },

            Equation::BarCount => EquationMetadata {
                name: "Number of Bars",
                description: "Smallest number of bars whose area covers the requirement",
                formula_plain: "n = ceil(Ast / (pi phi^2 / 4))",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("n", "Bar count", "-"),
                    Variable::new("phi", "Bar diameter (16)", "mm"),
                ],
                assumptions: vec!["Single bar diameter of 16 mm"],
                category: EquationCategory::Reinforcement,
                source_module: "calculations/beam.rs",
                source_function: "bar_count",
            },

            Equation::BarSpacing => EquationMetadata {
                name: "Bar Spacing",
                description: "Spacing of bars per metre width of slab or footing",
                formula_plain: "s = floor(1000 A_phi / Ast)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("s", "Centre-to-centre spacing", "mm"),
                    Variable::new("A_phi", "Area of one bar", "mm²"),
                    Variable::new("Ast", "Steel per metre width", "mm²/m"),
                ],
                assumptions: vec!["Maximum spacing limits not applied"],
                category: EquationCategory::Reinforcement,
                source_module: "equations/footing.rs",
                source_function: "bar_spacing_mm",
            },

            Equation::MinimumColumnSteel => EquationMetadata {
                name: "Minimum Column Steel",
                description: "Minimum longitudinal reinforcement in a column",
                formula_plain: "Ast,min = 0.008 Ac",
                reference: CodeReference::IS456 { year: 2000, clause: "26.5.3.1(a)" },
                variables: vec![
                    Variable::new("Ast,min", "Minimum steel area", "mm²"),
                    Variable::new("Ac", "Gross area", "mm²"),
                ],
                assumptions: vec!["Minimum steel taken as the provided steel"],
                category: EquationCategory::Reinforcement,
                source_module: "equations/axial.rs",
                source_function: "minimum_column_steel",
            },

            Equation::NominalShearStress => EquationMetadata {
                name: "Nominal Shear Stress",
                description: "Average shear stress over the effective section",
                formula_plain: "tau_v = Vu / (b d)",
                reference: CodeReference::IS456 { year: 2000, clause: "40.1" },
                variables: vec![
                    Variable::new("tau_v", "Nominal shear stress", "MPa"),
                    Variable::new("Vu", "Design shear", "N"),
                    Variable::new("b", "Beam width", "mm"),
                    Variable::new("d", "Effective depth", "mm"),
                ],
                assumptions: vec![],
                category: EquationCategory::Stresses,
                source_module: "equations/shear.rs",
                source_function: "nominal_shear_stress",
            },

            Equation::PermissibleShearStress => EquationMetadata {
                name: "Permissible Shear Stress",
                description: "Shear strength of concrete without shear reinforcement",
                formula_plain: "tau_c = 0.36 sqrt(fck)",
                reference: CodeReference::IS456 { year: 2000, clause: "40.2, Table 19 (simplified)" },
                variables: vec![
                    Variable::new("tau_c", "Permissible shear stress", "MPa"),
                    Variable::new("fck", "Concrete strength", "MPa"),
                ],
                assumptions: vec!["Independent of tension steel percentage"],
                category: EquationCategory::Stresses,
                source_module: "materials/concrete.rs",
                source_function: "ConcreteGrade::shear_capacity",
            },

            Equation::FootingOneWayShear => EquationMetadata {
                name: "Footing One-Way Shear",
                description: "Shear stress at d from the column face of a square footing",
                formula_plain: "tau_v = q (B - (c + d)) / d",
                reference: CodeReference::IS456 { year: 2000, clause: "34.2.4.1(a)" },
                variables: vec![
                    Variable::new("q", "Net soil pressure", "kN/m²"),
                    Variable::new("B", "Footing side", "m"),
                    Variable::new("c", "Column width", "m"),
                    Variable::new("d", "Effective depth", "m (numerator), mm (denominator)"),
                ],
                assumptions: vec!["Critical section must lie inside the footing"],
                category: EquationCategory::Stresses,
                source_module: "equations/shear.rs",
                source_function: "footing_one_way_shear_stress",
            },

            Equation::LimitingMoment => EquationMetadata {
                name: "Limiting Moment of Resistance",
                description: "Balanced-section moment capacity about one axis",
                formula_plain: "Mu,lim = 0.138 fck b d^2",
                reference: CodeReference::IS456 { year: 2000, clause: "Annex G-1.1(c)" },
                variables: vec![
                    Variable::new("Mu,lim", "Limiting moment", "kN·m"),
                    Variable::new("b", "Face width", "mm"),
                    Variable::new("d", "Effective depth about the axis", "mm"),
                ],
                assumptions: vec!["Coefficient 0.138 used for both steel grades"],
                category: EquationCategory::Capacity,
                source_module: "equations/flexure.rs",
                source_function: "limiting_moment",
            },

            Equation::SquashLoad => EquationMetadata {
                name: "Squash Load",
                description: "Pure axial capacity of a short column",
                formula_plain: "Puz = 0.4 fck Ac + 0.67 fy Asc",
                reference: CodeReference::IS456 { year: 2000, clause: "39.6" },
                variables: vec![
                    Variable::new("Puz", "Squash load", "N"),
                    Variable::new("Ac", "Gross area", "mm²"),
                    Variable::new("Asc", "Longitudinal steel", "mm²"),
                ],
                assumptions: vec!["Gross area used for the concrete term"],
                category: EquationCategory::Capacity,
                source_module: "equations/axial.rs",
                source_function: "squash_load",
            },

            Equation::SpanDepthRatio => EquationMetadata {
                name: "Span/Depth Ratio",
                description: "Deflection control by basic span to effective depth ratio",
                formula_plain: "L / d <= 20 (simply supported), 10 (fixed)",
                reference: CodeReference::IS456 { year: 2000, clause: "23.2.1" },
                variables: vec![
                    Variable::new("L", "Span", "mm"),
                    Variable::new("d", "Effective depth", "mm"),
                ],
                assumptions: vec!["No modification factors for steel or compression reinforcement"],
                category: EquationCategory::Serviceability,
                source_module: "calculations/beam.rs",
                source_function: "calculate",
            },

            Equation::FootingArea => EquationMetadata {
                name: "Footing Plan Area",
                description: "Plan area of a square footing from the allowable soil pressure",
                formula_plain: "A = Pu / (SBC / 1.5), B = round(sqrt(A), 2)",
                reference: CodeReference::IS456 { year: 2000, clause: "34.1" },
                variables: vec![
                    Variable::new("A", "Required area", "m²"),
                    Variable::new("Pu", "Column load", "kN"),
                    Variable::new("SBC", "Safe bearing capacity", "kN/m²"),
                    Variable::new("B", "Footing side", "m"),
                ],
                assumptions: vec!["Square footing", "Self weight of footing ignored"],
                category: EquationCategory::SoilBearing,
                source_module: "equations/footing.rs",
                source_function: "required_footing_area",
            },

            Equation::NetSoilPressure => EquationMetadata {
                name: "Net Soil Pressure",
                description: "Upward pressure on the footing from the column load",
                formula_plain: "q = Pu / B^2",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("q", "Net pressure", "kN/m²"),
                    Variable::new("B", "Footing side", "m"),
                ],
                assumptions: vec!["Uniform pressure (concentric load)"],
                category: EquationCategory::SoilBearing,
                source_module: "equations/footing.rs",
                source_function: "net_soil_pressure",
            },

            Equation::FootingCantileverMoment => EquationMetadata {
                name: "Footing Cantilever Moment",
                description: "Moment at the column face per metre width",
                formula_plain: "Mu = q ((B - c) / 2)^2 / 2",
                reference: CodeReference::IS456 { year: 2000, clause: "34.2.3.2" },
                variables: vec![
                    Variable::new("Mu", "Design moment", "kN·m/m"),
                    Variable::new("c", "Column width", "m"),
                ],
                assumptions: vec!["Footing projection acts as a cantilever from the column face"],
                category: EquationCategory::InternalForces,
                source_module: "equations/footing.rs",
                source_function: "cantilever_moment",
            },

            Equation::BiaxialInteraction => EquationMetadata {
                name: "Biaxial Interaction",
                description: "Linear interaction of axial load and biaxial moments",
                formula_plain: "Pu/Puz + Mux/Mux1 + Muy/Muy1 <= 1.0",
                reference: CodeReference::SP16 { chart: "Chart 64 (linearised)" },
                variables: vec![
                    Variable::new("Pu", "Axial load", "N"),
                    Variable::new("Mux, Muy", "Applied moments", "kN·m"),
                    Variable::new("Mux1, Muy1", "Limiting moments", "kN·m"),
                ],
                assumptions: vec!["Ratio rounded to 3 decimals before comparison"],
                category: EquationCategory::DesignChecks,
                source_module: "equations/axial.rs",
                source_function: "biaxial_interaction",
            },

            Equation::ShearCheck => EquationMetadata {
                name: "Shear Check",
                description: "Concrete alone resists shear when the nominal stress is within capacity",
                formula_plain: "tau_v <= tau_c",
                reference: CodeReference::IS456 { year: 2000, clause: "40.3" },
                variables: vec![
                    Variable::new("tau_v", "Nominal shear stress", "MPa"),
                    Variable::new("tau_c", "Permissible shear stress", "MPa"),
                ],
                assumptions: vec![],
                category: EquationCategory::DesignChecks,
                source_module: "calculations",
                source_function: "calculate",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in reference order
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![
            InternalForces,
            SectionProperties,
            Reinforcement,
            Stresses,
            Serviceability,
            Capacity,
            SoilBearing,
            DesignChecks,
        ];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::FactoredLoad,
    Equation::UdlMoment,
    Equation::UdlShear,
    Equation::PointMidspanMoment,
    Equation::PointMidspanShear,
    Equation::EffectiveDepth,
    Equation::GrossArea,
    Equation::RequiredSteelArea,
    Equation::BarCount,
    Equation::BarSpacing,
    Equation::MinimumColumnSteel,
    Equation::NominalShearStress,
    Equation::PermissibleShearStress,
    Equation::FootingOneWayShear,
    Equation::LimitingMoment,
    Equation::SquashLoad,
    Equation::SpanDepthRatio,
    Equation::FootingArea,
    Equation::NetSoilPressure,
    Equation::FootingCantileverMoment,
    Equation::BiaxialInteraction,
    Equation::ShearCheck,
];

// ============================================================================
// Markdown Generation
// ============================================================================

/// Render one equation as a markdown section.
fn push_equation_markdown(output: &mut String, equation: Equation) {
    let meta = equation.metadata();

    output.push_str(&format!("### {}\n\n", meta.name));
    output.push_str(&format!("{}\n\n", meta.description));
    output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

    if !meta.variables.is_empty() {
        output.push_str("**Variables:**\n\n");
        output.push_str("| Symbol | Description | Units |\n");
        output.push_str("|--------|-------------|-------|\n");
        for var in &meta.variables {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                var.symbol, var.description, var.units
            ));
        }
        output.push('\n');
    }

    output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
    output.push_str(&format!(
        "**Source:** [`{}`]({})\n\n",
        meta.source_function, meta.source_module
    ));

    if !meta.assumptions.is_empty() {
        output.push_str("**Assumptions:**\n");
        for assumption in &meta.assumptions {
            output.push_str(&format!("- {}\n", assumption));
        }
        output.push('\n');
    }

    output.push_str("---\n\n");
}

/// Generate the list of equations applied to one member, grouped by category.
///
/// ```rust
/// use rebar_core::equations::registry::{generate_equations_appendix, Equation};
///
/// let md = generate_equations_appendix(&[Equation::SquashLoad, Equation::GrossArea]);
/// assert!(md.contains("## Section Properties"));
/// assert!(md.contains("### Squash Load"));
/// ```
pub fn generate_equations_appendix(equations: &[Equation]) -> String {
    let mut output = String::from("# List of Equations\n\n");
    for category in Equation::all_categories() {
        let in_cat: Vec<Equation> = equations
            .iter()
            .copied()
            .filter(|eq| eq.metadata().category == category)
            .collect();
        if in_cat.is_empty() {
            continue;
        }
        output.push_str(&format!("## {}\n\n", category.display_name()));
        for equation in in_cat {
            push_equation_markdown(&mut output, equation);
        }
    }
    output
}

/// Generate the complete EQUATIONS.md reference.
///
/// ```rust
/// use rebar_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Rebar Equations Reference"));
/// assert!(markdown.contains("Soil Bearing"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(
        r#"# Rebar Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

Every formula applied by the beam, column and footing calculators, with its
code reference and the function that implements it.

## Units

| Quantity | Units |
|----------|-------|
| Spans, footing sides | m |
| Section dimensions, depths | mm |
| Loads | kN, kN/m |
| Moments | kN·m |
| Stresses | MPa (N/mm²) |
| Steel areas | mm² |

---

"#,
    );

    let categories = Equation::all_categories();
    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }
        output.push_str(&format!("## {}\n\n", category.display_name()));
        for equation in equations {
            push_equation_markdown(&mut output, equation);
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================
