use serde::Serialize;

use crate::{
	grid::{build_grid_with, CanonicalGrid, GridOptions},
	schedule::ScheduleMapping,
};

pub const CORNER_LABEL: &str = "Day";

/// A grid as it is shown: text rows, header first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayTable {
	rows: Vec<Vec<String>>,
}

impl DisplayTable {
	/// Cell text is trimmed the way it reads back from the page. The empty
	/// grid has no table.
	#[must_use]
	pub fn from_grid(grid: &CanonicalGrid) -> Option<Self> {
		if grid.is_empty() {
			return None;
		}

		let header: Vec<String> = std::iter::once(CORNER_LABEL)
			.chain(grid.slots().iter().map(String::as_str))
			.map(|field| field.trim().to_string())
			.collect();

		let body = grid.rows().map(|(day, cells)| {
			std::iter::once(day)
				.chain(cells.iter().map(String::as_str))
				.map(|field| field.trim().to_string())
				.collect::<Vec<_>>()
		});

		Some(Self {
			rows: std::iter::once(header).chain(body).collect(),
		})
	}

	#[must_use]
	pub fn header(&self) -> &[String] {
		&self.rows[0]
	}

	#[must_use]
	pub fn body(&self) -> &[Vec<String>] {
		&self.rows[1..]
	}

	#[must_use]
	pub fn rows(&self) -> &[Vec<String>] {
		&self.rows
	}

	#[must_use]
	pub fn into_rows(self) -> Vec<Vec<String>> {
		self.rows
	}
}

#[must_use]
pub fn render(schedule: &ScheduleMapping, options: &GridOptions) -> Option<DisplayTable> {
	DisplayTable::from_grid(&build_grid_with(schedule, options))
}
