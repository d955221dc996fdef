#![warn(clippy::pedantic)]

use ttgrid_core::{csv, GridOptions, SlotOrder};
use wasm_bindgen::{prelude::wasm_bindgen, JsError};

fn options(clock_minutes: bool) -> GridOptions {
	GridOptions {
		slot_order: if clock_minutes {
			SlotOrder::Clock
		} else {
			SlotOrder::Legacy
		},
		normalize_days: false,
	}
}

/// Rendered rows (header first) as JSON, or `null` when the page should show
/// its "no data" placeholder.
///
/// # Errors
///
/// Fails on a malformed payload or a failed generation response.
#[wasm_bindgen(js_name = renderTable)]
pub fn render_table(payload: &str, clock_minutes: bool) -> Result<String, JsError> {
	let schedule = ttgrid_core::schedule::parse_payload(payload)?;
	let table = ttgrid_core::render(&schedule, &options(clock_minutes));

	Ok(serde_json::to_string(&table.map(ttgrid_core::DisplayTable::into_rows))?)
}

/// CSV text for rows read back from the displayed table.
///
/// # Errors
///
/// Fails if `rows` is not a JSON array of string arrays.
#[wasm_bindgen(js_name = toCsv)]
pub fn to_csv(rows: &str) -> Result<String, JsError> {
	let rows: Vec<Vec<String>> = serde_json::from_str(rows)?;

	Ok(csv::to_csv(&rows))
}

/// CSV for a generation payload, or `undefined` when there is nothing to
/// export.
///
/// # Errors
///
/// Fails on a malformed payload or a failed generation response.
#[wasm_bindgen(js_name = fromJson)]
pub fn from_json(payload: &str, clock_minutes: bool) -> Result<Option<String>, JsError> {
	let artifact = ttgrid_core::create_csv(payload, &options(clock_minutes))?;

	Ok(artifact.map(|artifact| artifact.contents))
}

#[wasm_bindgen(js_name = exportFilename)]
#[must_use]
pub fn export_filename() -> String {
	csv::EXPORT_FILENAME.to_string()
}

#[wasm_bindgen(js_name = exportMime)]
#[must_use]
pub fn export_mime() -> String {
	csv::EXPORT_MIME.to_string()
}
