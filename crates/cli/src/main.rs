#![warn(clippy::pedantic)]

use std::{
	fs,
	io::{self, Read, Write},
	path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ttgrid_core::{csv::EXPORT_FILENAME, GridOptions, SlotOrder};

/// Turn a generated schedule (JSON) into a timetable CSV.
#[derive(Parser)]
struct Args {
	/// Generation response or bare day -> slot -> label mapping; stdin if absent
	#[clap(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
	path: Option<PathBuf>,
	#[clap(short, long, value_hint = clap::ValueHint::FilePath, conflicts_with = "export")]
	output: Option<PathBuf>,
	/// Write to ./my_timetable.csv
	#[clap(long)]
	export: bool,
	/// Order columns by true clock minutes instead of the legacy decimal reading
	#[clap(long)]
	clock_minutes: bool,
	/// Fold day spellings such as "MON" or "tue (lab)" onto canonical names
	#[clap(long)]
	normalize_days: bool,
}

impl Args {
	fn grid_options(&self) -> GridOptions {
		GridOptions {
			slot_order: if self.clock_minutes {
				SlotOrder::Clock
			} else {
				SlotOrder::Legacy
			},
			normalize_days: self.normalize_days,
		}
	}

	fn destination(&self) -> Option<PathBuf> {
		if self.export {
			Some(PathBuf::from(EXPORT_FILENAME))
		} else {
			self.output.clone()
		}
	}
}

fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.with_writer(io::stderr)
		.init();

	let args = Args::parse();

	let payload = if let Some(path) = &args.path {
		fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
	} else {
		let mut buf = String::new();
		io::stdin()
			.read_to_string(&mut buf)
			.context("reading stdin")?;
		buf
	};

	let Some(artifact) = ttgrid_core::create_csv(&payload, &args.grid_options())? else {
		warn!("no classes in the generated schedule, nothing to export");
		return Ok(());
	};

	if let Some(output) = args.destination() {
		fs::write(&output, &artifact.contents)
			.with_context(|| format!("writing {}", output.display()))?;
		info!(path = %output.display(), mime = artifact.mime, "exported timetable");
	} else {
		write!(&mut io::stdout(), "{}", artifact.contents)?;
	}

	Ok(())
}
