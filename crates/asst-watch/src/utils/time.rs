use chrono::{Local, TimeZone};

/// Shown in place of a timestamp the run does not have (yet).
pub const NO_TIME: &str = "—";

const TIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats unix seconds as local time.
pub fn fmt_local(ts: i64) -> String {
	match Local.timestamp_opt(ts, 0).single() {
		Some(dt) => dt.format(TIME_FMT).to_string(),
		None => NO_TIME.to_string(),
	}
}

pub fn fmt_local_opt(ts: Option<i64>) -> String {
	ts.map(fmt_local).unwrap_or_else(|| NO_TIME.to_string())
}
