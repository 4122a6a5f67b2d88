//! Generates the full sweep of overlapping-circle drawings, one segment file
//! per circle diameter.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use circlefield::{Pattern, TextSink};
use clap::Parser;

#[derive(Parser)]
struct Cli {
    /// Directory to write the segment files into.
    #[arg(long, default_value = "sweep-out")]
    output: PathBuf,

    /// Smallest circle diameter in the sweep.
    #[arg(long, default_value_t = 1.0)]
    min_diameter: f64,

    /// Largest circle diameter in the sweep.
    #[arg(long, default_value_t = std::f64::consts::PI)]
    max_diameter: f64,

    /// Number of drawings to generate.
    #[arg(long, default_value_t = 48)]
    count: usize,

    /// Radius of the outer boundary disk.
    #[arg(long, default_value_t = 2.0)]
    size: f64,
}

fn generate(path: &Path, diameter: f64, size: f64) -> anyhow::Result<()> {
    let pattern = Pattern::new(diameter / 2.0, size);
    let file = BufWriter::new(File::create(path)?);
    let mut sink = TextSink::new(file);
    pattern.render(&mut sink)?;
    sink.finish()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    std::fs::create_dir_all(&args.output)?;

    for i in 0..args.count {
        let t = if args.count > 1 {
            i as f64 / (args.count - 1) as f64
        } else {
            0.0
        };
        let d = args.min_diameter + (args.max_diameter - args.min_diameter) * t;
        let path = args.output.join(format!("{d:.8}.axi"));
        println!("{}", path.display());

        // One bad variant shouldn't sink the whole sweep.
        if let Err(err) = generate(&path, d, args.size) {
            eprintln!("skipping {}: {err}", path.display());
        }
    }

    Ok(())
}
