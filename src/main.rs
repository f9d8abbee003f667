#[cfg(any(feature = "tui", feature = "line"))]
mod command;
#[cfg(feature = "line")]
mod line_mode;
#[cfg(feature = "tui")]
mod render_help;
#[cfg(feature = "tui")]
mod tui_mode;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use fsmcalc::{Calculator, EngineConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Tui,
    Line,
}

impl Mode {
    fn feature(self) -> &'static str {
        match self {
            Mode::Tui => "tui",
            Mode::Line => "line",
        }
    }
}

/// Evaluates infix arithmetic expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print every applied fold after the result.
    #[arg(short, long)]
    details: bool,

    /// Limit the depth of the operand and operator stacks.
    #[arg(long)]
    max_depth: Option<usize>,

    /// Interactive front end to start when no expression is given.
    #[arg(short, long, value_enum, default_value_t = Mode::Tui)]
    mode: Mode,

    /// Expression to evaluate once.
    expression: Option<String>,
}

impl Args {
    fn engine_config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_max_depth(self.max_depth)
            .with_trace(self.details)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.engine_config();

    if let Some(expression) = &args.expression {
        return run_once(expression, config);
    }

    match args.mode {
        #[cfg(feature = "tui")]
        Mode::Tui => tui_mode::run_tui(config),
        #[cfg(feature = "line")]
        Mode::Line => line_mode::run_line(config),
        #[allow(unreachable_patterns)]
        mode => bail!(
            "{} mode is not compiled in; rebuild with --features {}",
            mode.feature(),
            mode.feature()
        ),
    }
}

fn run_once(expression: &str, config: EngineConfig) -> Result<()> {
    let eval = Calculator::new(config).evaluate(expression);
    for (i, step) in eval.steps.iter().enumerate() {
        println!("  Step {}: {} = {}", i + 1, step.operation, step.result);
    }
    let value = eval.into_result()?;
    println!("{}", value);
    Ok(())
}
