extern crate slist;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use slist::{construct, List};

/// Builds a list by head insertion and reports its length, contents and the
/// index of one value.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Values to insert, each one in front of the previous
    #[arg(default_values_t = [3, 5, 4, 2], allow_negative_numbers = true)]
    values: Vec<i32>,

    /// Value to look up
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    find: i32,
}

fn run<W: Write>(args: Args, out: &mut W) -> Result<()> {
    let mut head = List::new();
    for value in args.values {
        head = construct(value, head);
    }
    debug!("built {:?}", head);

    writeln!(out, "Length: {}", head.len()).context("failed to write length")?;
    head.print_list(&mut *out).context("failed to print list")?;
    writeln!(out, "idx {}: {}", args.find, head.index_of(args.find))
        .context("failed to write index")?;

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(args, &mut out)
}
