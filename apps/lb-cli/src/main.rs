use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use lb_app::{
    AppError, AppResult, SimulationRequest, SimulationResult, simulate_closed_loop_with,
};
use lb_lti::PidGains;
use lb_scenarios::Scenario;
use lb_sim::StepOptions;

#[derive(Parser)]
#[command(name = "lb-cli")]
#[command(about = "Loopbench CLI - closed-loop PID step-response tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available plant scenarios
    Scenarios,
    /// Simulate the closed-loop step response for a scenario
    Simulate {
        /// Scenario identifier (see `scenarios`)
        scenario: String,
        /// Proportional gain (defaults to the scenario's value)
        #[arg(long)]
        kp: Option<f64>,
        /// Integral gain (defaults to the scenario's value)
        #[arg(long)]
        ki: Option<f64>,
        /// Derivative gain (defaults to the scenario's value)
        #[arg(long)]
        kd: Option<f64>,
        /// Load factor, 0 (none) to 10 (high)
        #[arg(long, default_value_t = 0.0)]
        load: f64,
        /// Simulation horizon in seconds
        #[arg(long, default_value_t = 20.0)]
        horizon: f64,
        /// Number of points on the time grid
        #[arg(long, default_value_t = 1000)]
        samples: usize,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Export format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ExportFormat {
    Csv,
    Json,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scenarios => cmd_scenarios(),
        Commands::Simulate {
            scenario,
            kp,
            ki,
            kd,
            load,
            horizon,
            samples,
            output,
            format,
        } => cmd_simulate(
            &scenario,
            (kp, ki, kd),
            load,
            horizon,
            samples,
            output.as_deref(),
            format,
        ),
    }
}

fn cmd_scenarios() -> AppResult<()> {
    println!("Available scenarios:");
    for scenario in Scenario::all() {
        let gains = scenario.default_gains();
        let load = if scenario.load_affects_dynamics() {
            "load 0-10"
        } else {
            "no load control"
        };
        println!(
            "  {:<16} {} (Kp={}, Ki={}, Kd={}, {})",
            scenario.canonical_id(),
            scenario.display_name(),
            gains.kp,
            gains.ki,
            gains.kd,
            load
        );
        println!("                   {}", scenario.description());
    }
    Ok(())
}

fn cmd_simulate(
    scenario: &str,
    (kp, ki, kd): (Option<f64>, Option<f64>, Option<f64>),
    load: f64,
    horizon: f64,
    samples: usize,
    output: Option<&Path>,
    format: ExportFormat,
) -> AppResult<()> {
    let scenario: Scenario = scenario
        .parse()
        .map_err(|e: lb_scenarios::ParseScenarioError| AppError::InvalidInput(e.to_string()))?;

    let defaults = scenario.default_gains();
    let request = SimulationRequest {
        gains: PidGains {
            kp: kp.unwrap_or(defaults.kp),
            ki: ki.unwrap_or(defaults.ki),
            kd: kd.unwrap_or(defaults.kd),
        },
        scenario,
        load_factor: load,
    };
    let opts = StepOptions {
        horizon,
        samples,
        ..StepOptions::default()
    };

    let result = simulate_closed_loop_with(&request, &opts)?;

    let rendered = match format {
        ExportFormat::Csv => render_csv(&result),
        ExportFormat::Json => serde_json::to_string_pretty(&result)
            .map_err(std::io::Error::other)?,
    };

    if let Some(path) = output {
        std::fs::write(path, rendered)?;
        println!(
            "✓ Exported {} samples to {}",
            result.time.len(),
            path.display()
        );
    } else {
        print!("{}", rendered);
    }

    eprintln!(
        "{}: {} | Kp={} Ki={} Kd={} load={}",
        scenario.display_name(),
        scenario.description(),
        request.gains.kp,
        request.gains.ki,
        request.gains.kd,
        request.load_factor
    );
    print_response_summary(&result);

    Ok(())
}

fn render_csv(result: &SimulationResult) -> String {
    let mut csv = String::from("time_s,output\n");
    for (t, y) in result.time.iter().zip(result.output.iter()) {
        csv.push_str(&format!("{},{}\n", t, y));
    }
    csv
}

fn print_response_summary(result: &SimulationResult) {
    let last = result.output.last().copied().unwrap_or(0.0);
    let peak = result.output.iter().cloned().fold(f64::NAN, f64::max);
    if last.is_finite() {
        eprintln!("Final value: {:.4}  Peak: {:.4}", last, peak);
    } else {
        eprintln!("Response diverged (unstable closed loop)");
    }
}
