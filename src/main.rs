use airfoil_lift::config::{AtmosphereRanges, NominalConditions, SamplingConfig};
use airfoil_lift::scenario::{self, Scenario};
use airfoil_lift::{
    AngleOfAttackCurves, LiftInputs, LiftReport, PressureProfile, ScenarioCoupling, compute_lift,
    logging,
};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use color_eyre::eyre::{WrapErr, eyre};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScenarioArg {
    /// All inputs fixed, built-in NACA 2412 profile
    Fixed,
    /// Uncertain temperature, elevation and humidity
    Atmosphere,
    /// Pressure coefficients uncertain over the angle of attack (needs TABLE)
    AngleOfAttack,
}

impl From<ScenarioArg> for Scenario {
    fn from(arg: ScenarioArg) -> Self {
        match arg {
            ScenarioArg::Fixed => Scenario::Fixed,
            ScenarioArg::Atmosphere => Scenario::Atmosphere,
            ScenarioArg::AngleOfAttack => Scenario::AngleOfAttack,
        }
    }
}

/// Lift force on a 2D airfoil with propagated input uncertainty
#[derive(Parser, Debug)]
#[command(name = "airfoil-lift")]
#[command(about = "Lift force on a 2D airfoil with propagated input uncertainty", long_about = None)]
struct Args {
    /// Pressure-coefficient table (`;` separated, decimal comma)
    table: Option<PathBuf>,

    /// Which inputs carry uncertainty
    #[arg(short, long, value_enum, default_value_t = ScenarioArg::AngleOfAttack)]
    scenario: ScenarioArg,

    /// Monte Carlo draws per reported quantity
    #[arg(short = 'n', long, default_value_t = 10_000)]
    samples: usize,

    /// Probability mass of the reported interval
    #[arg(short, long, default_value_t = 0.95)]
    confidence: f64,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Pick one angle of attack per draw for the whole airfoil
    #[arg(long)]
    coupled_scenarios: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn build_inputs(
    kind: Scenario,
    table: Option<&Path>,
    coupling: ScenarioCoupling,
) -> color_eyre::Result<LiftInputs> {
    let nominal = NominalConditions::default();
    let profile = PressureProfile::naca2412_ten_degrees();
    let inputs = match kind {
        Scenario::Fixed => scenario::fixed_inputs(&nominal, &profile),
        Scenario::Atmosphere => {
            scenario::atmosphere_inputs(&nominal, &AtmosphereRanges::default(), &profile)
                .wrap_err("Failed to build atmosphere inputs")?
        }
        Scenario::AngleOfAttack => {
            let path = table.ok_or_else(|| eyre!("no table path given"))?;
            let curves = AngleOfAttackCurves::load(path)
                .wrap_err_with(|| format!("Failed to load table {}", path.display()))?;
            scenario::angle_of_attack_inputs(&nominal, &curves, coupling)
                .wrap_err("Failed to build angle-of-attack inputs")?
        }
    };
    Ok(inputs)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    logging::init_logging(&args.log_level).wrap_err("Failed to initialize logging")?;

    let config = SamplingConfig {
        sample_count: args.samples,
        confidence: args.confidence,
        seed: args.seed,
    };
    config.validate().wrap_err("Invalid sampling settings")?;

    let scenario = Scenario::from(args.scenario);
    if scenario.needs_table() && args.table.is_none() {
        Args::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                format!("the {scenario} scenario requires a TABLE path"),
            )
            .exit();
    }
    let coupling = if args.coupled_scenarios {
        ScenarioCoupling::Shared
    } else {
        ScenarioCoupling::Independent
    };
    tracing::info!(%scenario, ?coupling, samples = config.sample_count, "starting lift computation");

    let inputs = build_inputs(scenario, args.table.as_deref(), coupling)?;
    let result = compute_lift(&inputs).wrap_err("Lift computation failed")?;
    let report = LiftReport::from_result(&result, &config).wrap_err("Failed to summarize results")?;

    println!("Scenario: {scenario}");
    println!("{report}");
    tracing::info!("lift computation finished");
    Ok(())
}
