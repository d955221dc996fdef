use std::cmp::Ordering;

use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlotOrder {
	/// `"10:30"` and `"10.30"` both key as the decimal `10.3`, so `"10:45"`
	/// lands before `"10:5"`. This is the column order the existing backend
	/// and page produce.
	#[default]
	Legacy,
	/// Minutes are sixtieths of an hour: `"10:30"` keys as `10.5`.
	Clock,
}

#[derive(Debug, Clone, Copy)]
pub struct SlotKey(f64);

impl SlotKey {
	/// Key for labels whose start time cannot be read; after every real key.
	pub const UNPARSED: Self = Self(f64::INFINITY);

	#[must_use]
	pub fn value(self) -> f64 {
		self.0
	}

	#[must_use]
	pub fn parse(label: &str, order: SlotOrder) -> Option<Self> {
		// H, H:MM, H.MM, :MM or H: with nothing else around the separator
		let start = start_component(label);
		let (hour, minute) = start.split_once([':', '.']).unwrap_or((start, ""));

		if (hour.is_empty() && minute.is_empty()) || !is_digits(hour) || !is_digits(minute) {
			return None;
		}

		let key = match order {
			SlotOrder::Legacy => {
				let hour = if hour.is_empty() { "0" } else { hour };
				let minute = if minute.is_empty() { "0" } else { minute };

				format!("{hour}.{minute}").parse().ok()?
			}
			SlotOrder::Clock => {
				let hour: u32 = if hour.is_empty() { 0 } else { hour.parse().ok()? };
				let minute: u32 = if minute.is_empty() {
					0
				} else {
					minute.parse().ok()?
				};

				if minute >= 60 {
					return None;
				}

				f64::from(hour) + f64::from(minute) / 60.0
			}
		};

		Some(Self(key))
	}
}

impl PartialEq for SlotKey {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for SlotKey {}

impl PartialOrd for SlotKey {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for SlotKey {
	fn cmp(&self, other: &Self) -> Ordering {
		self.0.total_cmp(&other.0)
	}
}

/// Text before the first hyphen or en dash, trimmed.
#[must_use]
pub fn start_component(label: &str) -> &str {
	label
		.split(['-', '\u{2013}'])
		.next()
		.unwrap_or(label)
		.trim()
}

#[must_use]
pub fn slot_key(label: &str, order: SlotOrder) -> SlotKey {
	SlotKey::parse(label, order).unwrap_or_else(|| {
		debug!(label, "unreadable start time, sorting slot last");
		SlotKey::UNPARSED
	})
}

fn is_digits(s: &str) -> bool {
	s.bytes().all(|b| b.is_ascii_digit())
}
