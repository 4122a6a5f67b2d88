//! Renders a single drawing to an SVG for a quick look before plotting.

use std::path::PathBuf;

use circlefield::{Pattern, SvgSink};
use clap::Parser;

#[derive(Parser)]
struct Cli {
    #[arg(long)]
    output: PathBuf,

    /// Circle diameter.
    #[arg(long, default_value_t = 2.0)]
    diameter: f64,

    /// Radius of the outer boundary disk.
    #[arg(long, default_value_t = 2.0)]
    size: f64,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let pattern = Pattern::new(args.diameter / 2.0, args.size);
    let mut sink = SvgSink::new();
    pattern.render(&mut sink)?;
    svg::save(&args.output, &sink.document())?;

    Ok(())
}
