//! # Rebar CLI Application
//!
//! Command-line front end for the RC member checks in `rebar_core`.
//!
//! ```text
//! rebar beam --span 5 --load-type point --load 60
//! rebar column --axial-load 1200 --mux 80 --show-equations
//! rebar foundation --sbc 150 --json
//! rebar run footing.toml
//! rebar equations > EQUATIONS.md
//! ```
//!
//! Exit status is 0 when the member passes, 1 when a check fails and 2 when
//! the input is rejected.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use rebar_core::calculations::{
    BeamInput, CalculationItem, CalculationOutcome, ColumnInput, FoundationInput,
};
use rebar_core::equations::{generate_equations_appendix, generate_equations_markdown};
use rebar_core::loads::{BeamLoad, SupportCondition};
use rebar_core::materials::{ConcreteGrade, SteelGrade};
use rebar_core::report::render_outcome;
use rebar_core::CalcError;

#[derive(Debug, Parser)]
#[command(
    name = "rebar",
    version,
    about = "Preliminary design checks for RC beams, columns and isolated footings"
)]
struct Cli {
    /// Print the result record as JSON instead of the text report
    #[arg(long, global = true)]
    json: bool,

    /// Append the equations applied to the member (text report only)
    #[arg(long, global = true)]
    show_equations: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check a single-span rectangular beam
    Beam(BeamArgs),
    /// Check a rectangular column under axial load and biaxial bending
    Column(ColumnArgs),
    /// Size a square isolated footing
    Foundation(FoundationArgs),
    /// Evaluate a member stored in a .json or .toml file
    Run {
        /// Input file; the `type` field selects Beam, Column or Foundation
        file: PathBuf,
    },
    /// Print the equation reference as markdown
    Equations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LoadKind {
    /// Uniformly distributed load over the full span (kN/m)
    Udl,
    /// Single point load at midspan (kN)
    Point,
}

#[derive(Debug, Args)]
struct BeamArgs {
    #[arg(long, default_value = "B-1")]
    label: String,
    /// Span (m)
    #[arg(long, default_value_t = 4.0)]
    span: f64,
    /// Width b (mm)
    #[arg(long, default_value_t = 300.0)]
    width: f64,
    /// Overall depth D (mm)
    #[arg(long, default_value_t = 500.0)]
    depth: f64,
    /// Clear cover (mm)
    #[arg(long, default_value_t = 25.0)]
    cover: f64,
    #[arg(long, default_value = "M25")]
    concrete: ConcreteGrade,
    #[arg(long, default_value = "Fe500")]
    steel: SteelGrade,
    /// simply-supported or fixed
    #[arg(long, default_value = "simply-supported", value_parser = parse_support)]
    support: SupportCondition,
    #[arg(long, value_enum, default_value_t = LoadKind::Udl)]
    load_type: LoadKind,
    /// Service load magnitude (default 20 kN/m for UDL, 40 kN for point)
    #[arg(long)]
    load: Option<f64>,
}

impl BeamArgs {
    fn to_input(&self) -> BeamInput {
        let load = match self.load_type {
            LoadKind::Udl => BeamLoad::Udl {
                w_kn_per_m: self.load.unwrap_or(20.0),
            },
            LoadKind::Point => BeamLoad::PointMidspan {
                p_kn: self.load.unwrap_or(40.0),
            },
        };
        BeamInput {
            label: self.label.clone(),
            span_m: self.span,
            width_mm: self.width,
            depth_mm: self.depth,
            cover_mm: self.cover,
            concrete: self.concrete,
            steel: self.steel,
            support: self.support,
            load,
        }
    }
}

#[derive(Debug, Args)]
struct ColumnArgs {
    #[arg(long, default_value = "C-1")]
    label: String,
    /// Width b (mm)
    #[arg(long, default_value_t = 300.0)]
    width: f64,
    /// Depth D (mm)
    #[arg(long, default_value_t = 400.0)]
    depth: f64,
    /// Clear cover (mm)
    #[arg(long, default_value_t = 40.0)]
    cover: f64,
    /// Factored axial load Pu (kN)
    #[arg(long, default_value_t = 1000.0)]
    axial_load: f64,
    /// Factored moment about x (kN·m)
    #[arg(long, default_value_t = 60.0)]
    mux: f64,
    /// Factored moment about y (kN·m)
    #[arg(long, default_value_t = 40.0)]
    muy: f64,
    #[arg(long, default_value = "M25")]
    concrete: ConcreteGrade,
    #[arg(long, default_value = "Fe500")]
    steel: SteelGrade,
}

impl ColumnArgs {
    fn to_input(&self) -> ColumnInput {
        ColumnInput {
            label: self.label.clone(),
            width_mm: self.width,
            depth_mm: self.depth,
            cover_mm: self.cover,
            axial_load_kn: self.axial_load,
            mux_knm: self.mux,
            muy_knm: self.muy,
            concrete: self.concrete,
            steel: self.steel,
        }
    }
}

#[derive(Debug, Args)]
struct FoundationArgs {
    #[arg(long, default_value = "F-1")]
    label: String,
    /// Column load Pu (kN)
    #[arg(long, default_value_t = 800.0)]
    column_load: f64,
    /// Safe bearing capacity (kN/m²)
    #[arg(long, default_value_t = 200.0)]
    sbc: f64,
    /// Column width (mm)
    #[arg(long, default_value_t = 300.0)]
    column_width: f64,
    /// Footing thickness (mm)
    #[arg(long, default_value_t = 500.0)]
    thickness: f64,
    #[arg(long, default_value = "M25")]
    concrete: ConcreteGrade,
    #[arg(long, default_value = "Fe500")]
    steel: SteelGrade,
}

impl FoundationArgs {
    fn to_input(&self) -> FoundationInput {
        FoundationInput {
            label: self.label.clone(),
            column_load_kn: self.column_load,
            sbc_kn_per_m2: self.sbc,
            concrete: self.concrete,
            steel: self.steel,
            column_width_mm: self.column_width,
            thickness_mm: self.thickness,
        }
    }
}

fn parse_support(s: &str) -> Result<SupportCondition, String> {
    SupportCondition::from_str_flexible(s)
        .ok_or_else(|| format!("unknown support '{}', expected simply-supported or fixed", s))
}

/// Load a [`CalculationItem`] from a `.json` or `.toml` file.
fn load_item(path: &Path) -> anyhow::Result<CalculationItem> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let item = match extension.as_deref() {
        Some("json") => serde_json::from_str(&text).map_err(CalcError::from),
        Some("toml") => {
            toml::from_str(&text).map_err(|e| CalcError::serialization(e.to_string()))
        }
        _ => bail!(
            "unsupported input file {}: expected a .json or .toml extension",
            path.display()
        ),
    };

    item.with_context(|| format!("failed to parse {}", path.display()))
}

/// How a result is printed
#[derive(Debug, Clone, Copy, Default)]
struct OutputOptions {
    json: bool,
    show_equations: bool,
}

/// Format an evaluated member for stdout.
fn render(
    item: &CalculationItem,
    outcome: &CalculationOutcome,
    options: OutputOptions,
) -> anyhow::Result<String> {
    if options.json {
        let mut text =
            serde_json::to_string_pretty(outcome).context("failed to encode result")?;
        text.push('\n');
        return Ok(text);
    }

    let mut text = render_outcome(item, outcome);
    if options.show_equations {
        text.push('\n');
        text.push_str(&generate_equations_appendix(outcome.equations()));
    }
    Ok(text)
}

/// Evaluate `item` and print it. Returns whether the member passes.
fn execute(item: &CalculationItem, options: OutputOptions) -> anyhow::Result<bool> {
    log::info!("evaluating {} '{}'", item.calc_type(), item.label());

    let outcome = item
        .evaluate()
        .with_context(|| format!("{} '{}' rejected", item.calc_type(), item.label()))?;

    print!("{}", render(item, &outcome, options)?);
    Ok(outcome.passes())
}

/// Process exit status: 0 pass, 1 failed check, 2 rejected input.
fn exit_status(result: &anyhow::Result<bool>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

fn report_error(err: &anyhow::Error, json: bool) {
    eprintln!("Error: {:#}", err);
    if json {
        if let Some(calc_err) = err.downcast_ref::<CalcError>() {
            if let Ok(text) = serde_json::to_string_pretty(calc_err) {
                eprintln!("{}", text);
            }
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = OutputOptions {
        json: cli.json,
        show_equations: cli.show_equations,
    };

    let result = match &cli.command {
        Command::Equations => {
            print!("{}", generate_equations_markdown());
            return ExitCode::SUCCESS;
        }
        Command::Beam(args) => execute(&CalculationItem::Beam(args.to_input()), options),
        Command::Column(args) => execute(&CalculationItem::Column(args.to_input()), options),
        Command::Foundation(args) => {
            execute(&CalculationItem::Foundation(args.to_input()), options)
        }
        Command::Run { file } => load_item(file).and_then(|item| execute(&item, options)),
    };

    if let Err(err) = &result {
        report_error(err, cli.json);
    }
    ExitCode::from(exit_status(&result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("rebar-cli-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn beam_defaults_match_reference_beam() {
        let cli = Cli::try_parse_from(["rebar", "beam"]).unwrap();
        let Command::Beam(args) = cli.command else {
            panic!("expected beam subcommand");
        };
        let input = args.to_input();
        assert_eq!(input.span_m, 4.0);
        assert_eq!(input.cover_mm, 25.0);
        assert_eq!(input.concrete, ConcreteGrade::M25);
        assert_eq!(input.support, SupportCondition::SimplySupported);
        assert_eq!(input.load, BeamLoad::Udl { w_kn_per_m: 20.0 });
    }

    #[test]
    fn point_load_defaults_to_40_kn() {
        let cli = Cli::try_parse_from([
            "rebar",
            "beam",
            "--load-type",
            "point",
            "--support",
            "fixed",
            "--concrete",
            "30",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        let Command::Beam(args) = cli.command else {
            panic!("expected beam subcommand");
        };
        let input = args.to_input();
        assert_eq!(input.load, BeamLoad::PointMidspan { p_kn: 40.0 });
        assert_eq!(input.support, SupportCondition::Fixed);
        assert_eq!(input.concrete, ConcreteGrade::M30);
    }

    #[test]
    fn rejects_unknown_grade() {
        assert!(Cli::try_parse_from(["rebar", "column", "--steel", "Fe250"]).is_err());
        assert!(Cli::try_parse_from(["rebar", "beam", "--support", "cantilever"]).is_err());
    }

    #[test]
    fn loads_json_item() {
        let path = temp_file(
            "column.json",
            r#"{
                "type": "Column",
                "label": "C-7",
                "width_mm": 300.0,
                "depth_mm": 400.0,
                "cover_mm": 40.0,
                "axial_load_kn": 1000.0,
                "mux_knm": 60.0,
                "muy_knm": 40.0,
                "concrete": "M25",
                "steel": "Fe500"
            }"#,
        );
        let item = load_item(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(item.label(), "C-7");
        assert!(!item.evaluate().unwrap().passes());
    }

    #[test]
    fn loads_toml_item() {
        let path = temp_file(
            "beam.toml",
            r#"
type = "Beam"
label = "B-7"
span_m = 4.0
width_mm = 300.0
depth_mm = 500.0
cover_mm = 25.0
concrete = "M25"
steel = "Fe500"
support = "Fixed"

[load.PointMidspan]
p_kn = 40.0
"#,
        );
        let item = load_item(&path).unwrap();
        fs::remove_file(&path).ok();

        let CalculationItem::Beam(beam) = &item else {
            panic!("expected a beam");
        };
        assert_eq!(beam.support, SupportCondition::Fixed);
        assert_eq!(beam.load, BeamLoad::PointMidspan { p_kn: 40.0 });
        assert!(item.evaluate().unwrap().passes());
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let path = temp_file("broken.json", r#"{ "type": "Beam", "label": "#);
        let err = load_item(&path).unwrap_err();
        fs::remove_file(&path).ok();

        let calc_err = err.downcast_ref::<CalcError>().unwrap();
        assert_eq!(calc_err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn rejects_unknown_extension() {
        let path = temp_file("footing.yaml", "type: Foundation");
        let err = load_item(&path).unwrap_err();
        fs::remove_file(&path).ok();

        assert!(err.to_string().contains("expected a .json or .toml extension"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_item(Path::new("/nonexistent/rebar-input.json")).unwrap_err();
        assert!(err.to_string().contains("rebar-input.json"));
    }

    fn reference_column() -> CalculationItem {
        let cli = Cli::try_parse_from(["rebar", "column"]).unwrap();
        let Command::Column(args) = cli.command else {
            panic!("expected column subcommand");
        };
        CalculationItem::Column(args.to_input())
    }

    #[test]
    fn exit_status_maps_outcomes() {
        assert_eq!(exit_status(&Ok(true)), 0);
        assert_eq!(exit_status(&Ok(false)), 1);
        assert_eq!(exit_status(&Err(anyhow::anyhow!("bad input"))), 2);
    }

    #[test]
    fn exit_status_for_evaluated_members() {
        let cli = Cli::try_parse_from(["rebar", "beam"]).unwrap();
        let Command::Beam(args) = cli.command else {
            panic!("expected beam subcommand");
        };
        let passing = CalculationItem::Beam(args.to_input());
        let status = |item: &CalculationItem| {
            exit_status(&item.evaluate().map(|o| o.passes()).map_err(anyhow::Error::from))
        };
        assert_eq!(status(&passing), 0);
        assert_eq!(status(&reference_column()), 1);

        let CalculationItem::Column(mut rejected) = reference_column() else {
            unreachable!()
        };
        rejected.mux_knm = 0.0;
        assert_eq!(status(&CalculationItem::Column(rejected)), 2);
    }

    #[test]
    fn text_output_appends_applied_equations() {
        let item = reference_column();
        let outcome = item.evaluate().unwrap();

        let plain = render(&item, &outcome, OutputOptions::default()).unwrap();
        assert!(plain.contains("Interaction = 1.533"));
        assert!(!plain.contains("# List of Equations"));

        let options = OutputOptions {
            json: false,
            show_equations: true,
        };
        let with_equations = render(&item, &outcome, options).unwrap();
        assert!(with_equations.starts_with(&plain));
        assert!(with_equations.contains("# List of Equations"));
        assert!(with_equations.contains("### Squash Load"));
        assert!(!with_equations.contains("### Footing Plan Area"));
    }

    #[test]
    fn json_output_is_tagged_result() {
        let item = reference_column();
        let outcome = item.evaluate().unwrap();
        let options = OutputOptions {
            json: true,
            show_equations: true,
        };
        let text = render(&item, &outcome, options).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["type"], "Column");
        assert_eq!(value["interaction_ratio"], 1.533);
    }
}
