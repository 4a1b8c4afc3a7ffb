use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

/// Verdict for the current contents of the date-draft field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateDraft {
    /// Field is empty — any previously validated candidate is cleared
    Empty,
    /// Not (yet) a real mm/dd/yy date. The raw text stays on screen and a
    /// previously validated candidate is left alone so the user can keep
    /// typing.
    Incomplete,
    /// A real calendar date on or after today
    Valid(NaiveDate),
    /// A real calendar date before today — surfaced as a blocking alert,
    /// no candidate is set
    Past,
}

/// Strict two-digit mm/dd/yy pattern, zero-padded. The day alternation
/// admits a few combinations that are not real dates (02/30, 04/31);
/// calendar re-validation below catches those.
fn pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(0[1-9]|1[0-2])/(0[1-9]|[12][0-9]|3[01])/([0-9]{2})$").unwrap()
    })
}

/// Evaluate the raw draft text. `today` is passed in (time-of-day already
/// truncated) so calendar edges stay testable without touching the clock.
pub fn evaluate_draft(text: &str, today: NaiveDate) -> DateDraft {
    if text.trim().is_empty() {
        return DateDraft::Empty;
    }

    let caps = match pattern().captures(text) {
        Some(c) => c,
        None => return DateDraft::Incomplete,
    };

    let month: u32 = caps[1].parse().unwrap_or(0);
    let day: u32 = caps[2].parse().unwrap_or(0);
    let year: i32 = caps[3].parse().unwrap_or(0);

    // Years are interpreted as 2000 + YY. from_ymd_opt rejects lexically
    // valid but impossible dates.
    let date = match NaiveDate::from_ymd_opt(2000 + year, month, day) {
        Some(d) => d,
        None => return DateDraft::Incomplete,
    };

    if date < today {
        DateDraft::Past
    } else {
        DateDraft::Valid(date)
    }
}

/// Format a due date for a task row, e.g. "Jan 5, 2025".
pub fn format_due(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
