//! Sweep command - solve across a range of discount factors

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::{
    analysis::{SweepPoint, linspace, solve_at},
    cli::{
        config::SolverArgs,
        output::{create_sweep_progress, format_action, print_export_notice, print_section},
    },
    export::write_sweep_csv,
    gridworld::{Cell, GridWorld},
};

#[derive(Parser, Debug)]
#[command(about = "Solve for evenly spaced discount factors")]
pub struct SweepArgs {
    /// First discount factor
    #[arg(long, default_value_t = 0.1)]
    pub start: f64,

    /// Last discount factor
    #[arg(long, default_value_t = 1.0)]
    pub end: f64,

    /// Number of discount factors
    #[arg(long, default_value_t = 10)]
    pub steps: usize,

    /// Cell whose action is reported, as `row,col`
    #[arg(long)]
    pub probe: Option<String>,

    #[command(flatten)]
    pub solver: SolverArgs,

    /// Write the sweep table to a CSV file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,
}

pub fn execute(args: SweepArgs) -> Result<()> {
    if args.steps == 0 {
        bail!("--steps must be at least 1");
    }
    let base = args.solver.resolve(None)?;
    let model = GridWorld::standard()?;
    let probe = args
        .probe
        .as_deref()
        .map(str::parse::<Cell>)
        .transpose()?;
    if let Some(cell) = probe {
        if !model.contains(cell) || model.is_wall(cell) {
            bail!("probe {cell} is not an open cell of the grid");
        }
    }

    let discounts = linspace(args.start, args.end, args.steps);
    let progress = if args.quiet {
        None
    } else {
        Some(create_sweep_progress(discounts.len() as u64)?)
    };

    let mut points: Vec<SweepPoint> = Vec::with_capacity(discounts.len());
    for &discount in &discounts {
        let point = solve_at(&model, &base, discount, probe)
            .with_context(|| format!("solve failed at discount {discount}"))?;
        if let Some(pb) = &progress {
            pb.inc(1);
            pb.set_message(format!("γ={discount:.4}"));
        }
        points.push(point);
    }
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    print_section("Discount sweep");
    println!(
        "{:>10} {:>10} {:>18} {:>10} {:>10}",
        "discount", "sweeps", "status", "action", "value"
    );
    for point in &points {
        let value = point
            .probe_value
            .map_or_else(|| "-".to_string(), |v| format!("{v:.4}"));
        println!(
            "{:>10.6} {:>10} {:>18} {:>10} {:>10}",
            point.discount,
            point.iterations,
            point.termination.to_string(),
            format_action(point.probe_action),
            value
        );
    }

    if let Some(path) = &args.export {
        write_sweep_csv(path, &points)
            .with_context(|| format!("failed to export sweep to {}", path.display()))?;
        print_export_notice("Sweep", path);
    }

    Ok(())
}
