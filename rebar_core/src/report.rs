//! Plain-text design summaries.
//!
//! One `render_*` function per member. Each returns a multi-line string with
//! the headline numbers and the check verdicts, in the order a designer would
//! read them off a hand calculation.

use std::fmt::Write;

use crate::calculations::{
    BeamInput, BeamResult, CalculationItem, CalculationOutcome, ColumnInput, ColumnResult,
    FoundationInput, FoundationResult,
};

const WRITE_FAILED: &str = "writing to string cannot fail";

fn verdict(ok: bool) -> &'static str {
    if ok {
        "OK"
    } else {
        "FAIL"
    }
}

/// Render the beam summary.
#[must_use]
pub fn render_beam(input: &BeamInput, result: &BeamResult) -> String {
    let mut output = String::new();

    writeln!(
        &mut output,
        "Beam '{}' ({} x {} mm, span {} m, {}, {} / {})",
        input.label,
        input.width_mm,
        input.depth_mm,
        input.span_m,
        input.support,
        input.concrete,
        input.steel
    )
    .expect(WRITE_FAILED);

    writeln!(
        &mut output,
        "Load: {} {} {} (factored {:.2} {})",
        input.load.display_name(),
        input.load.magnitude(),
        input.load.units(),
        result.factored_load,
        input.load.units()
    )
    .expect(WRITE_FAILED);

    writeln!(
        &mut output,
        "Mu = {:.2} kNm, Vu = {:.2} kN, d = {} mm",
        result.mu_knm, result.vu_kn, result.effective_depth_mm
    )
    .expect(WRITE_FAILED);

    writeln!(
        &mut output,
        "Ast = {:.2} mm² -> {} bars of {} mm (Ast_prov = {:.2} mm²)",
        result.ast_required_mm2, result.bar_count, result.bar_diameter_mm, result.ast_provided_mm2
    )
    .expect(WRITE_FAILED);

    writeln!(
        &mut output,
        "τv = {:.2} MPa vs τc = {:.2} MPa: Shear {}",
        result.tau_v_mpa,
        result.tau_c_mpa,
        verdict(result.shear_ok)
    )
    .expect(WRITE_FAILED);

    writeln!(
        &mut output,
        "Span/d = {:.2} (limit {}): Deflection {}",
        result.span_depth_ratio,
        result.span_depth_limit,
        verdict(result.deflection_ok)
    )
    .expect(WRITE_FAILED);

    if result.passes() {
        output.push_str("BEAM Design OK\n");
    } else {
        writeln!(
            &mut output,
            "BEAM Design FAIL (governed by {})",
            result.governing_condition()
        )
        .expect(WRITE_FAILED);
    }

    output
}

/// Render the column summary.
#[must_use]
pub fn render_column(input: &ColumnInput, result: &ColumnResult) -> String {
    let mut output = String::new();

    writeln!(
        &mut output,
        "Column '{}' ({} x {} mm, Pu = {} kN, Mux = {} kNm, Muy = {} kNm)",
        input.label,
        input.width_mm,
        input.depth_mm,
        input.axial_load_kn,
        input.mux_knm,
        input.muy_knm
    )
    .expect(WRITE_FAILED);

    writeln!(
        &mut output,
        "Mux1 = {:.2} kNm, Muy1 = {:.2} kNm",
        result.mux1_knm, result.muy1_knm
    )
    .expect(WRITE_FAILED);

    writeln!(&mut output, "Min Ast = {:.2} mm²", result.ast_min_mm2).expect(WRITE_FAILED);

    writeln!(
        &mut output,
        "Puz = {:.2} N, Interaction = {:.3}",
        result.puz_n, result.interaction_ratio
    )
    .expect(WRITE_FAILED);

    writeln!(&mut output, "Column {}", verdict(result.passes())).expect(WRITE_FAILED);

    output
}

/// Render the footing summary.
#[must_use]
pub fn render_foundation(input: &FoundationInput, result: &FoundationResult) -> String {
    let mut output = String::new();

    writeln!(
        &mut output,
        "Footing '{}' (Pu = {} kN, SBC = {} kN/m², column {} mm, thickness {} mm)",
        input.label,
        input.column_load_kn,
        input.sbc_kn_per_m2,
        input.column_width_mm,
        input.thickness_mm
    )
    .expect(WRITE_FAILED);

    writeln!(
        &mut output,
        "Provide footing of {:.2} m x {:.2} m",
        result.side_m, result.side_m
    )
    .expect(WRITE_FAILED);

    if !result.area_ok {
        writeln!(
            &mut output,
            "Note: provided area {:.4} m² is below required {:.4} m²",
            result.area_provided_m2, result.area_required_m2
        )
        .expect(WRITE_FAILED);
    }

    writeln!(
        &mut output,
        "Net Pressure = {:.2} kN/m²",
        result.net_pressure_kn_per_m2
    )
    .expect(WRITE_FAILED);

    writeln!(
        &mut output,
        "Mu = {:.2} kNm -> Ast = {:.2} mm²/m -> {} mm @ {} mm",
        result.mu_knm, result.ast_required_mm2, result.bar_diameter_mm, result.bar_spacing_mm
    )
    .expect(WRITE_FAILED);

    writeln!(
        &mut output,
        "τv = {:.2} MPa vs τc = {:.2} MPa",
        result.tau_v_mpa, result.tau_c_mpa
    )
    .expect(WRITE_FAILED);

    if result.passes() {
        output.push_str("Foundation Design OK\n");
    } else {
        output.push_str("Shear Check Failed: increase depth or area\n");
    }

    output
}

/// Render whichever member `item` describes.
///
/// `outcome` must come from evaluating `item`; a mismatched pair renders the
/// outcome without the input header.
#[must_use]
pub fn render_outcome(item: &CalculationItem, outcome: &CalculationOutcome) -> String {
    match (item, outcome) {
        (CalculationItem::Beam(input), CalculationOutcome::Beam(result)) => {
            render_beam(input, result)
        }
        (CalculationItem::Column(input), CalculationOutcome::Column(result)) => {
            render_column(input, result)
        }
        (CalculationItem::Foundation(input), CalculationOutcome::Foundation(result)) => {
            render_foundation(input, result)
        }
        (_, outcome) => format!(
            "{} result for '{}': {}\n",
            item.calc_type(),
            item.label(),
            verdict(outcome.passes())
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{beam, column, foundation};
    use crate::loads::{BeamLoad, SupportCondition};
    use crate::materials::{ConcreteGrade, SteelGrade};

    fn reference_beam() -> BeamInput {
        BeamInput {
            label: "B-1".to_string(),
            span_m: 4.0,
            width_mm: 300.0,
            depth_mm: 500.0,
            cover_mm: 25.0,
            concrete: ConcreteGrade::M25,
            steel: SteelGrade::Fe500,
            support: SupportCondition::SimplySupported,
            load: BeamLoad::Udl { w_kn_per_m: 20.0 },
        }
    }

    fn reference_column() -> ColumnInput {
        ColumnInput {
            label: "C-1".to_string(),
            width_mm: 300.0,
            depth_mm: 400.0,
            cover_mm: 40.0,
            axial_load_kn: 1000.0,
            mux_knm: 60.0,
            muy_knm: 40.0,
            concrete: ConcreteGrade::M25,
            steel: SteelGrade::Fe500,
        }
    }

    fn reference_footing() -> FoundationInput {
        FoundationInput {
            label: "F-1".to_string(),
            column_load_kn: 800.0,
            sbc_kn_per_m2: 200.0,
            concrete: ConcreteGrade::M25,
            steel: SteelGrade::Fe500,
            column_width_mm: 300.0,
            thickness_mm: 500.0,
        }
    }

    #[test]
    fn formats_beam_report() {
        let input = reference_beam();
        let result = beam::calculate(&input).unwrap();
        let report = render_beam(&input, &result);

        assert!(report.contains("Load: UDL 20 kN/m (factored 30.00 kN/m)"));
        assert!(report.contains("Mu = 60.00 kNm, Vu = 60.00 kN, d = 475 mm"));
        assert!(report.contains("2 bars of 16 mm"));
        assert!(report.contains("Shear OK"));
        assert!(report.contains("Span/d = 8.42 (limit 20)"));
        assert!(report.ends_with("BEAM Design OK\n"));
    }

    #[test]
    fn beam_report_names_governing_check() {
        let mut input = reference_beam();
        input.span_m = 12.0;
        input.load = BeamLoad::Udl { w_kn_per_m: 1.0 };
        let result = beam::calculate(&input).unwrap();
        let report = render_beam(&input, &result);

        assert!(report.contains("Deflection FAIL"));
        assert!(report.contains("governed by Deflection"));
    }

    #[test]
    fn formats_column_report() {
        let input = reference_column();
        let result = column::calculate(&input).unwrap();
        let report = render_column(&input, &result);

        assert!(report.contains("Min Ast = 960.00 mm²"));
        assert!(report.contains("Puz = 1521600.00 N, Interaction = 1.533"));
        assert!(report.ends_with("Column FAIL\n"));
    }

    #[test]
    fn formats_footing_report() {
        let input = reference_footing();
        let result = foundation::calculate(&input).unwrap();
        let report = render_foundation(&input, &result);

        assert!(report.contains("Provide footing of 2.45 m x 2.45 m"));
        assert!(report.contains("Net Pressure = 133.28 kN/m²"));
        assert!(report.contains("16 mm @ 459 mm"));
        assert!(!report.contains("Note:"));
        assert!(report.ends_with("Foundation Design OK\n"));
    }

    #[test]
    fn footing_shear_failure_advice() {
        let mut input = reference_footing();
        input.column_load_kn = 3000.0;
        input.sbc_kn_per_m2 = 100.0;
        input.thickness_mm = 150.0;
        let result = foundation::calculate(&input).unwrap();
        let report = render_foundation(&input, &result);

        assert!(report.contains("increase depth or area"));
    }

    #[test]
    fn dispatches_on_item() {
        let item = CalculationItem::Column(reference_column());
        let outcome = item.evaluate().unwrap();
        assert!(render_outcome(&item, &outcome).starts_with("Column 'C-1'"));

        let other = CalculationItem::Foundation(reference_footing());
        assert_eq!(
            render_outcome(&other, &outcome),
            "Foundation result for 'F-1': FAIL\n"
        );
    }
}
