use std::borrow::Cow;

use indexmap::IndexSet;
use serde::Serialize;
use tracing::trace;

use crate::{
	day::sort_days,
	schedule::{self, ScheduleMapping},
	slot::{slot_key, SlotOrder},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridOptions {
	pub slot_order: SlotOrder,
	pub normalize_days: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CanonicalGrid {
	days: Vec<String>,
	slots: Vec<String>,
	// days.len() rows of slots.len() cells
	cells: Vec<Vec<String>>,
}

impl CanonicalGrid {
	#[must_use]
	pub fn days(&self) -> &[String] {
		&self.days
	}

	#[must_use]
	pub fn slots(&self) -> &[String] {
		&self.slots
	}

	#[must_use]
	pub fn cell(&self, day: &str, slot: &str) -> &str {
		let Some(row) = self.days.iter().position(|d| d == day) else {
			return "";
		};
		let Some(col) = self.slots.iter().position(|s| s == slot) else {
			return "";
		};

		&self.cells[row][col]
	}

	/// `true` for the grid built from a schedule with no days at all. Callers
	/// show a placeholder instead of a table for it.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.days.is_empty()
	}

	pub fn rows(&self) -> impl Iterator<Item = (&str, &[String])> {
		self.days
			.iter()
			.map(String::as_str)
			.zip(self.cells.iter().map(Vec::as_slice))
	}
}

#[must_use]
pub fn build_grid(schedule: &ScheduleMapping) -> CanonicalGrid {
	build_grid_with(schedule, &GridOptions::default())
}

#[must_use]
pub fn build_grid_with(schedule: &ScheduleMapping, options: &GridOptions) -> CanonicalGrid {
	let schedule = if options.normalize_days {
		Cow::Owned(schedule::normalize_days(schedule))
	} else {
		Cow::Borrowed(schedule)
	};

	if schedule.is_empty() {
		return CanonicalGrid::default();
	}

	let mut days = schedule.keys().map(String::as_str).collect::<Vec<_>>();
	sort_days(&mut days);

	// first-seen order across days, which the stable sort keeps for equal keys
	let mut slots = schedule
		.values()
		.flat_map(|slots| slots.keys().map(String::as_str))
		.collect::<IndexSet<_>>()
		.into_iter()
		.collect::<Vec<_>>();
	slots.sort_by_cached_key(|label| slot_key(label, options.slot_order));

	let cells = days
		.iter()
		.map(|day| {
			let entries = &schedule[*day];

			slots
				.iter()
				.map(|slot| {
					entries
						.get(*slot)
						.and_then(Option::as_deref)
						.unwrap_or_default()
						.to_string()
				})
				.collect()
		})
		.collect();

	trace!(days = days.len(), slots = slots.len(), "built schedule grid");

	CanonicalGrid {
		days: days.into_iter().map(str::to_string).collect(),
		slots: slots.into_iter().map(str::to_string).collect(),
		cells,
	}
}
