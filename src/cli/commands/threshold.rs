//! Threshold command - bisect for the discount at which a cell's action flips

use anyhow::Result;
use clap::Parser;

use crate::{
    analysis::find_threshold,
    cli::{
        config::SolverArgs,
        output::{print_kv, print_section},
    },
    gridworld::{Action, Cell, GridWorld},
};

#[derive(Parser, Debug)]
#[command(about = "Find the discount at which a cell switches to or from an action")]
pub struct ThresholdArgs {
    /// Cell to watch, as `row,col`
    #[arg(long)]
    pub probe: String,

    /// Action to track (right, down, left, up, exit)
    #[arg(long)]
    pub action: String,

    /// Lower end of the search interval
    #[arg(long, default_value_t = 0.01)]
    pub low: f64,

    /// Upper end of the search interval
    #[arg(long, default_value_t = 1.0)]
    pub high: f64,

    /// Stop once the bracket is this narrow
    #[arg(long, default_value_t = 1e-6)]
    pub precision: f64,

    #[command(flatten)]
    pub solver: SolverArgs,
}

pub fn execute(args: ThresholdArgs) -> Result<()> {
    let probe: Cell = args.probe.parse()?;
    let action: Action = args.action.parse()?;
    let base = args.solver.resolve(None)?;
    let model = GridWorld::standard()?;

    let threshold = find_threshold(
        &model,
        &base,
        probe,
        action,
        args.low,
        args.high,
        args.precision,
    )?;

    let (below, above) = if threshold.chosen_below {
        (action.to_string(), format!("not {action}"))
    } else {
        (format!("not {action}"), action.to_string())
    };

    print_section(&format!("Policy switch at {probe}"));
    print_kv("Below", &format!("γ ≤ {:.8} ({below})", threshold.below));
    print_kv("Above", &format!("γ ≥ {:.8} ({above})", threshold.above));
    print_kv("Estimate", &format!("{:.8}", threshold.midpoint()));
    print_kv("Solves", &threshold.evaluations.to_string());
    Ok(())
}
