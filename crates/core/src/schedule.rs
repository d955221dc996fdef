use std::collections::BTreeSet;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::{day::normalize_day, Error, Result};

pub type DaySlots = IndexMap<String, Option<String>>;

pub type ScheduleMapping = IndexMap<String, DaySlots>;

const MERGE_SEPARATOR: &str = " | ";

/// Body of a `/api/generate` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateResponse {
	pub success: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub data: Option<ScheduleMapping>,
	#[serde(default)]
	pub message: String,
}

impl GenerateResponse {
	/// # Errors
	///
	/// Returns [`Error::Generation`] carrying the backend's message when the
	/// response reports failure.
	pub fn into_schedule(self) -> Result<ScheduleMapping> {
		if !self.success {
			return Err(Error::Generation(self.message));
		}

		Ok(self.data.unwrap_or_default())
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
	Response(GenerateResponse),
	Mapping(ScheduleMapping),
}

/// Reads either a full [`GenerateResponse`] or a bare [`ScheduleMapping`].
///
/// # Errors
///
/// Fails if the text is neither shape, or if the response reports failure.
pub fn parse_payload(json: &str) -> Result<ScheduleMapping> {
	match serde_json::from_str(json)? {
		Payload::Response(response) => response.into_schedule(),
		Payload::Mapping(mapping) => Ok(mapping),
	}
}

// days that collapse onto one name share slots; clashing labels are joined
#[must_use]
pub fn normalize_days(schedule: &ScheduleMapping) -> ScheduleMapping {
	let mut merged: IndexMap<String, IndexMap<String, BTreeSet<&str>>> = IndexMap::new();

	for (day, slots) in schedule {
		let target = merged.entry(normalize_day(day)).or_default();

		for (slot, label) in slots {
			let labels = target.entry(slot.clone()).or_default();

			if let Some(label) = label.as_deref().filter(|l| !l.is_empty()) {
				labels.insert(label);
			}
		}
	}

	merged
		.into_iter()
		.map(|(day, slots)| {
			let slots = slots
				.into_iter()
				.map(|(slot, labels)| {
					let label = (!labels.is_empty())
						.then(|| labels.into_iter().collect::<Vec<_>>().join(MERGE_SEPARATOR));

					(slot, label)
				})
				.collect();

			(day, slots)
		})
		.collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectSelection(IndexSet<String>);

impl SubjectSelection {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn toggle(&mut self, subject: &str) -> bool {
		if self.0.shift_remove(subject) {
			false
		} else {
			self.0.insert(subject.to_string());
			true
		}
	}

	#[must_use]
	pub fn contains(&self, subject: &str) -> bool {
		self.0.contains(subject)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(String::as_str)
	}

	pub fn clear(&mut self) {
		self.0.clear();
	}
}

impl<S: Into<String>> FromIterator<S> for SubjectSelection {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self(iter.into_iter().map(Into::into).collect())
	}
}

/// Body of a `/api/generate` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
	pub selected_subjects: Vec<String>,
	#[serde(default)]
	pub branch: String,
	#[serde(default)]
	pub batch: String,
}

impl GenerateRequest {
	/// # Errors
	///
	/// Returns [`Error::NoSubjects`] for an empty selection.
	pub fn new(selection: &SubjectSelection) -> Result<Self> {
		if selection.is_empty() {
			return Err(Error::NoSubjects);
		}

		Ok(Self {
			selected_subjects: selection.iter().map(str::to_string).collect(),
			branch: String::new(),
			batch: String::new(),
		})
	}

	#[must_use]
	pub fn with_branch(mut self, branch: &str) -> Self {
		self.branch = branch.trim().to_string();
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reads_response_envelope() {
		let json = r#"{"success":true,"data":{"Monday":{"9:00 - 10:00":"Math (R1)"}},"message":"ok"}"#;
		let schedule = parse_payload(json).unwrap();

		assert_eq!(schedule["Monday"]["9:00 - 10:00"].as_deref(), Some("Math (R1)"));
	}

	#[test]
	fn reads_bare_mapping_in_document_order() {
		let json = r#"{"Tuesday":{"b":"x","a":null},"Monday":{}}"#;
		let schedule = parse_payload(json).unwrap();

		assert_eq!(schedule.keys().collect::<Vec<_>>(), vec!["Tuesday", "Monday"]);
		assert_eq!(schedule["Tuesday"].keys().collect::<Vec<_>>(), vec!["b", "a"]);
		assert_eq!(schedule["Tuesday"]["a"], None);
	}

	#[test]
	fn empty_object_is_an_empty_mapping() {
		assert!(parse_payload("{}").unwrap().is_empty());
	}

	#[test]
	fn successful_response_without_data_is_empty() {
		assert!(parse_payload(r#"{"success":true}"#).unwrap().is_empty());
	}

	#[test]
	fn failed_response_carries_message() {
		let err = parse_payload(r#"{"success":false,"message":"No matching classes found"}"#)
			.unwrap_err();

		assert!(matches!(err, Error::Generation(ref m) if m == "No matching classes found"));
	}

	#[test]
	fn rejects_other_shapes() {
		assert!(matches!(parse_payload("[1, 2]"), Err(Error::Json(_))));
		assert!(matches!(parse_payload(r#"{"Monday": 3}"#), Err(Error::Json(_))));
	}

	#[test]
	fn merges_days_that_normalize_together() {
		let schedule: ScheduleMapping = serde_json::from_str(
			r#"{
				"mon": {"9:00 - 10:00": "Phys (R2)", "10:00 - 11:00": null},
				"MONDAY": {"9:00 - 10:00": "Math (R1)"},
				"Monday (lab)": {"9:00 - 10:00": "Math (R1)"},
				"fun day": {"9:00 - 10:00": ""}
			}"#,
		)
		.unwrap();

		let normalized = normalize_days(&schedule);

		assert_eq!(normalized.keys().collect::<Vec<_>>(), vec!["Monday", "Fun Day"]);
		assert_eq!(
			normalized["Monday"]["9:00 - 10:00"].as_deref(),
			Some("Math (R1) | Phys (R2)")
		);
		assert_eq!(normalized["Monday"]["10:00 - 11:00"], None);
		assert_eq!(normalized["Fun Day"]["9:00 - 10:00"], None);
	}

	#[test]
	fn toggling_twice_deselects() {
		let mut selection = SubjectSelection::new();

		assert!(selection.toggle("DIP"));
		assert!(selection.toggle("Radar"));
		assert!(!selection.toggle("DIP"));
		assert!(selection.toggle("DIP"));

		assert_eq!(selection.iter().collect::<Vec<_>>(), vec!["Radar", "DIP"]);
		assert!(selection.contains("DIP"));
		assert!(!selection.contains("dip"));
		assert_eq!(selection.len(), 2);

		selection.clear();
		assert!(selection.is_empty());
		assert!(!selection.contains("Radar"));
	}

	#[test]
	fn request_requires_a_subject() {
		assert!(matches!(
			GenerateRequest::new(&SubjectSelection::new()),
			Err(Error::NoSubjects)
		));
	}

	#[test]
	fn request_serializes_backend_shape() {
		let selection = ["Radar", "WSN"].into_iter().collect::<SubjectSelection>();
		let request = GenerateRequest::new(&selection).unwrap().with_branch(" ECE ");

		assert_eq!(
			serde_json::to_value(&request).unwrap(),
			serde_json::json!({
				"selected_subjects": ["Radar", "WSN"],
				"branch": "ECE",
				"batch": "",
			})
		);
	}
}
