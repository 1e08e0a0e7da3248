//! Output formatting and progress bars for CLI

use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::gridworld::{Action, BLOCKED_GLYPH, Cell, GridWorld};

/// Create a progress bar for a discount sweep
pub fn create_sweep_progress(total_points: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total_points);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} solves ({msg})")
            .context("invalid progress bar template")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Line announcing that `what` was written to `path`.
pub fn format_export_notice(what: &str, path: &Path) -> String {
    format!("{what} exported to: {}", path.display())
}

/// Report a finished export on stderr so stdout only carries results.
pub fn print_export_notice(what: &str, path: &Path) {
    eprintln!("{}", format_export_notice(what, path));
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render an optional action as a short label.
pub fn format_action(action: Option<Action>) -> String {
    action.map_or_else(|| "-".to_string(), |a| format!("{} {}", a.glyph(), a))
}

/// Draw the domain: walls as blocks, numbered states with their reward.
pub fn render_layout(model: &GridWorld) -> String {
    let mut out = String::new();
    for row in 0..model.rows() {
        let cells: Vec<String> = (0..model.cols())
            .map(|col| {
                let cell = Cell::new(row, col);
                if model.is_wall(cell) {
                    format!("{:>5}", BLOCKED_GLYPH)
                } else if let Some(reward) = model.terminal_reward(cell) {
                    format!("{reward:>+5}")
                } else {
                    format!("{:>5}", ".")
                }
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}
