#![warn(clippy::pedantic)]

pub mod csv;
pub mod day;
mod error;
pub mod grid;
pub mod schedule;
pub mod slot;
pub mod table;

pub use error::{Error, Result};
pub use grid::{build_grid, build_grid_with, CanonicalGrid, GridOptions};
pub use schedule::{GenerateRequest, GenerateResponse, ScheduleMapping, SubjectSelection};
pub use slot::SlotOrder;
pub use table::{render, DisplayTable};

use crate::csv::CsvArtifact;

/// Reads a generation payload and renders it straight to a CSV file.
/// `Ok(None)` means the schedule was empty and there is nothing to export.
///
/// # Errors
///
/// Fails if the payload is not a schedule or reports a failed generation.
pub fn create_csv(payload: &str, options: &GridOptions) -> Result<Option<CsvArtifact>> {
	let schedule = schedule::parse_payload(payload)?;
	let table = render(&schedule, options);

	Ok(csv::export(table.as_ref()))
}
