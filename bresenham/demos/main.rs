extern crate bresenham;

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use bresenham::{Line, Point};
use clap::Parser;
use log::debug;

/// Prints the grid points of a line segment, one `x, y` per line.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Start point as `x,y`
    #[arg(default_value = "0,1", allow_hyphen_values = true)]
    from: Point,

    /// End point as `x,y`
    #[arg(default_value = "6,4", allow_hyphen_values = true)]
    to: Point,
}

fn run<W: Write>(args: Args, out: &mut W) -> Result<()> {
    let line = Line::new(args.from, args.to);
    debug!("rasterizing {} points", line.size_hint().0);

    for point in line {
        writeln!(out, "{point}").context("failed to write point")?;
    }
    out.flush().context("failed to flush output")?;

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(args, &mut out)
}
