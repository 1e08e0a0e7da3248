//! Layout command - describe the domain

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{print_kv, print_section, print_subsection, render_layout},
    gridworld::GridWorld,
};

#[derive(Parser, Debug)]
#[command(about = "Show walls, numbered states and rewards")]
pub struct LayoutArgs {}

pub fn execute(_args: LayoutArgs) -> Result<()> {
    let model = GridWorld::standard()?;

    print_section("Grid world");
    print_kv("Size", &format!("{} rows x {} cols", model.rows(), model.cols()));
    print_kv("Walls", &model.walls().count().to_string());
    print_kv("Shaping bonus", &model.shaping_constant().to_string());
    println!();
    print!("{}", render_layout(&model));

    print_subsection("Numbered states");
    for &cell in model.numbered_states() {
        if let Some(reward) = model.terminal_reward(cell) {
            print_kv(&cell.to_string(), &format!("{reward:+}"));
        }
    }
    Ok(())
}
