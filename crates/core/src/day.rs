use chrono::Weekday;

const WEEKDAYS: [(&str, Weekday); 7] = [
	("Monday", Weekday::Mon),
	("Tuesday", Weekday::Tue),
	("Wednesday", Weekday::Wed),
	("Thursday", Weekday::Thu),
	("Friday", Weekday::Fri),
	("Saturday", Weekday::Sat),
	("Sunday", Weekday::Sun),
];

// checked in this order, so "mon" wins over anything later
const ABBREVIATIONS: [(&str, Weekday); 7] = [
	("mon", Weekday::Mon),
	("tue", Weekday::Tue),
	("wed", Weekday::Wed),
	("thu", Weekday::Thu),
	("fri", Weekday::Fri),
	("sat", Weekday::Sat),
	("sun", Weekday::Sun),
];

pub const UNKNOWN_RANK: usize = WEEKDAYS.len();

// exact and case-sensitive
#[must_use]
pub fn weekday(name: &str) -> Option<Weekday> {
	WEEKDAYS
		.iter()
		.find(|(canonical, _)| *canonical == name)
		.map(|&(_, day)| day)
}

#[must_use]
pub fn weekday_name(day: Weekday) -> &'static str {
	WEEKDAYS[day.num_days_from_monday() as usize].0
}

#[must_use]
pub fn day_rank(name: &str) -> usize {
	weekday(name).map_or(UNKNOWN_RANK, |day| day.num_days_from_monday() as usize)
}

pub fn sort_days<S: AsRef<str>>(days: &mut [S]) {
	days.sort_by_key(|day| day_rank(day.as_ref()));
}

/// Maps loosely written day names ("MON", "tuesday (lab)") onto the canonical
/// name. Anything unrecognised is title-cased.
#[must_use]
pub fn normalize_day(raw: &str) -> String {
	let lower = raw.to_lowercase();

	ABBREVIATIONS
		.iter()
		.find(|(abbr, _)| lower.contains(*abbr))
		.map_or_else(|| title_case(raw), |&(_, day)| weekday_name(day).to_string())
}

fn title_case(s: &str) -> String {
	let mut out = String::with_capacity(s.len());
	let mut word_start = true;

	for c in s.chars() {
		if c.is_alphabetic() {
			if word_start {
				out.extend(c.to_uppercase());
			} else {
				out.extend(c.to_lowercase());
			}
			word_start = false;
		} else {
			out.push(c);
			word_start = true;
		}
	}

	out
}
