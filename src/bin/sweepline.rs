// SPDX-FileCopyrightText: 2022 Thomas Kramer
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Command line front end: read segments, sweep, print intersections.
//!
//! Input is `n` followed by `n` lines of `x1 y1 x2 y2`; endpoint order is
//! normalized on read. Output is `m` followed by one line per intersection:
//! the point coordinates and the 1-based ids of the segments meeting there.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use sweepline_intersections::{find_intersections, Point, Segment};

/// Enumerate all pairwise intersections among a set of line segments.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Input file; reads stdin when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file; writes stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Trace the internal queue and status structure while sweeping.
    #[arg(short, long)]
    verbose: bool,
}

fn read_segments(mut reader: impl Read) -> anyhow::Result<Vec<Segment>> {
    let mut text = String::new();
    reader.read_to_string(&mut text).context("reading input")?;
    let mut tokens = text.split_whitespace();

    let n: usize = tokens
        .next()
        .context("missing segment count")?
        .parse()
        .context("parsing segment count")?;

    let mut segments = Vec::with_capacity(n);
    for i in 0..n {
        let mut coords = [0.0f64; 4];
        for c in &mut coords {
            *c = tokens
                .next()
                .with_context(|| format!("segment {}: missing coordinate", i + 1))?
                .parse()
                .with_context(|| format!("segment {}: bad coordinate", i + 1))?;
        }
        let mut a = (coords[0], coords[1]);
        let mut b = (coords[2], coords[3]);
        if a > b {
            std::mem::swap(&mut a, &mut b);
        }
        segments.push(Segment::new(Point::from(a), Point::from(b), i));
    }
    Ok(segments)
}

fn write_intersections(
    mut out: impl Write,
    result: &[sweepline_intersections::Intersection],
) -> io::Result<()> {
    writeln!(out, "{}", result.len())?;
    for it in result {
        write!(out, "{} {}", it.point.x, it.point.y)?;
        for id in &it.segments {
            write!(out, " {}", id + 1)?;
        }
        writeln!(out)?;
    }
    out.flush()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(io::stderr)
            .init();
    }

    let segments = match &args.input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            read_segments(file)?
        }
        None => read_segments(io::stdin().lock())?,
    };

    let start = Instant::now();
    let result = find_intersections(&segments);
    let elapsed = start.elapsed();

    match &args.output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            write_intersections(BufWriter::new(file), &result)?;
        }
        None => write_intersections(BufWriter::new(io::stdout().lock()), &result)?,
    }

    eprintln!("num_segments (n)      = {}", segments.len());
    eprintln!("num_intersections (k) = {}", result.len());
    eprintln!("total runtime: {:.3} ms", elapsed.as_secs_f64() * 1e3);

    Ok(())
}
