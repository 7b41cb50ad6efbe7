//! CLI entry point for the low-poly wallpaper generator

use clap::Parser;
use lowpoly::io::cli::{Cli, GenerationRunner};

fn main() -> lowpoly::Result<()> {
    let cli = Cli::parse();
    let mut runner = GenerationRunner::new(cli);
    runner.run()
}
