//! Solve command - run value iteration once and print the result

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::{config::SolverArgs, output::print_export_notice},
    export::SolutionExport,
    gridworld::GridWorld,
    ports::IterationObserver,
    value_iteration::{CompositeObserver, HistoryObserver, TracingObserver, ValueIteration},
};

#[derive(Parser, Debug)]
#[command(about = "Solve the grid world by value iteration")]
pub struct SolveArgs {
    /// Discount factor γ in (0, 1]
    #[arg(long, short = 'g')]
    pub discount: Option<f64>,

    #[command(flatten)]
    pub solver: SolverArgs,

    /// Trace every cell backup
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Print the solution as JSON instead of grids
    #[arg(long)]
    pub json: bool,

    /// Include per-sweep history in JSON output
    #[arg(long)]
    pub history: bool,

    /// Write the JSON solution to a file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let config = args.solver.resolve(args.discount)?;
    let model = GridWorld::standard().context("standard domain is malformed")?;
    let engine = ValueIteration::new(model, config)?;

    let mut tracer = TracingObserver;
    let mut history = HistoryObserver::new();
    let solution = {
        let mut observers: Vec<&mut dyn IterationObserver> =
            vec![&mut history as &mut dyn IterationObserver];
        if args.verbose {
            observers.push(&mut tracer);
        }
        engine.solve_with(&mut CompositeObserver::new(observers))?
    };

    let mut export = SolutionExport::new(&solution);
    if args.history {
        export = export.with_history(history.into_records());
    }

    if args.json {
        println!("{}", export.to_json_string()?);
    } else {
        print!("{solution}");
    }

    if let Some(path) = &args.export {
        export
            .write_json(path)
            .with_context(|| format!("failed to export solution to {}", path.display()))?;
        print_export_notice("Solution", path);
    }

    Ok(())
}
