use std::{borrow::Cow, fmt};

use crate::table::DisplayTable;

pub const EXPORT_FILENAME: &str = "my_timetable.csv";
pub const EXPORT_MIME: &str = "text/csv";

/// Quotes `field` only when it holds a comma or a double quote.
#[must_use]
pub fn escape_field(field: &str) -> Cow<'_, str> {
	if field.contains([',', '"']) {
		Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
	} else {
		Cow::Borrowed(field)
	}
}

pub fn to_csv<R, F>(rows: R) -> String
where
	R: IntoIterator,
	R::Item: IntoIterator<Item = F>,
	F: AsRef<str>,
{
	let mut csv = String::new();

	for row in rows {
		for (i, field) in row.into_iter().enumerate() {
			if i > 0 {
				csv.push(',');
			}
			csv.push_str(&escape_field(field.as_ref()));
		}
		csv.push('\n');
	}

	csv
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDocument {
	rows: Vec<Vec<String>>,
}

impl CsvDocument {
	#[must_use]
	pub fn new(rows: Vec<Vec<String>>) -> Self {
		Self { rows }
	}

	#[must_use]
	pub fn rows(&self) -> &[Vec<String>] {
		&self.rows
	}
}

impl From<DisplayTable> for CsvDocument {
	fn from(table: DisplayTable) -> Self {
		Self::new(table.into_rows())
	}
}

impl fmt::Display for CsvDocument {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(&to_csv(&self.rows))
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvArtifact {
	pub filename: &'static str,
	pub mime: &'static str,
	pub contents: String,
}

impl CsvArtifact {
	#[must_use]
	pub fn new(document: &CsvDocument) -> Self {
		Self {
			filename: EXPORT_FILENAME,
			mime: EXPORT_MIME,
			contents: document.to_string(),
		}
	}
}

// no rendered table, nothing to download
#[must_use]
pub fn export(table: Option<&DisplayTable>) -> Option<CsvArtifact> {
	let document = CsvDocument::from(table?.clone());

	Some(CsvArtifact::new(&document))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn quotes_fields_with_commas() {
		assert_eq!(escape_field("Math, Sec A"), "\"Math, Sec A\"");
	}

	#[test]
	fn doubles_inner_quotes() {
		assert_eq!(escape_field("Room \"B\""), "\"Room \"\"B\"\"\"");
	}

	#[test]
	fn leaves_plain_fields_alone() {
		assert!(matches!(escape_field("Phys (R2)"), Cow::Borrowed("Phys (R2)")));
		assert_eq!(escape_field("  padded  "), "  padded  ");
		assert_eq!(escape_field(""), "");
		// only commas and quotes trigger quoting
		assert_eq!(escape_field("line\nbreak"), "line\nbreak");
	}

	#[test]
	fn joins_rows_with_trailing_newline() {
		let csv = to_csv([vec!["Day", "9:00 - 10:00"], vec!["Monday", "A, B"]]);

		assert_eq!(csv, "Day,9:00 - 10:00\nMonday,\"A, B\"\n");
	}

	#[test]
	fn no_rows_is_empty_text() {
		assert_eq!(to_csv(Vec::<Vec<String>>::new()), "");
	}

	#[test]
	fn output_is_stable_across_calls() {
		let document = CsvDocument::new(vec![vec!["a".into(), "\"b\"".into()]]);

		assert_eq!(document.to_string(), document.to_string());
		assert_eq!(document.to_string(), "a,\"\"\"b\"\"\"\n");
	}

	#[test]
	fn document_keeps_table_rows() {
		let schedule = serde_json::from_str(r#"{"Monday":{"9:00 - 10:00":"Radar, CR-2"}}"#)
			.unwrap();
		let table = crate::render(&schedule, &crate::GridOptions::default()).unwrap();
		let document = CsvDocument::from(table.clone());

		assert_eq!(document.rows(), table.rows());
		assert_eq!(
			document.to_string(),
			"Day,9:00 - 10:00\nMonday,\"Radar, CR-2\"\n"
		);
	}

	#[test]
	fn export_without_table_is_a_no_op() {
		assert_eq!(export(None), None);
	}
}
