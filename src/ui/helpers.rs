//! Display formatting shared by view model computation.
//!
//! # Features
//!
//! - **Status badges**: maps booking status to a style class, with a default
//!   for statuses this crate does not know
//! - **Schedule labels**: pairs preferred days with preferred times, falling
//!   back to the single class date and time
//! - **Selection summary**: first few names plus a "+N more" tail
//! - **Match highlighting**: character ranges of search hits

use crate::domain::{Booking, BookingStatus};
use crate::eligibility::search::fold;
use chrono::NaiveDate;

/// Label used when a booking records no schedule at all.
pub const SCHEDULE_NOT_SET: &str = "Schedule not set";

/// Returns the badge style class for a booking status.
///
/// Unrecognised statuses get the default class rather than an error.
#[must_use]
pub const fn status_badge_class(status: &BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "status-pending",
        BookingStatus::Confirmed => "status-confirmed",
        BookingStatus::Completed => "status-completed",
        BookingStatus::Cancelled => "status-cancelled",
        BookingStatus::Other(_) => "status-default",
    }
}

/// Builds a human-readable schedule for a booking.
///
/// # Algorithm
///
/// 1. If preferred days are recorded, pair `preferred_days[i]` with
///    `preferred_times[i]`. Days without a time at the same index are shown
///    alone; surplus times are ignored.
/// 2. Otherwise use `class_date` (rendered as `Mon, Jan 5 2026` when it parses
///    as `YYYY-MM-DD`, verbatim otherwise) followed by `class_time`.
/// 3. Otherwise [`SCHEDULE_NOT_SET`].
///
/// The timezone, when set, is appended in parentheses to real schedules.
///
/// # Example
///
/// ```rust
/// use booking_selector::ui::helpers::schedule_label;
/// use booking_selector::Booking;
///
/// let booking = Booking {
///     id: "b".into(),
///     preferred_days: Some(vec!["Monday".into(), "Wednesday".into()]),
///     preferred_times: Some(vec!["09:00".into()]),
///     timezone: Some("Europe/Lisbon".into()),
///     ..Booking::default()
/// };
/// assert_eq!(schedule_label(&booking), "Monday 09:00, Wednesday (Europe/Lisbon)");
/// ```
#[must_use]
pub fn schedule_label(booking: &Booking) -> String {
    let schedule = match booking.preferred_days.as_deref() {
        Some(days) if days.iter().any(|day| !day.trim().is_empty()) => {
            Some(recurring_schedule(days, booking.preferred_times.as_deref().unwrap_or_default()))
        }
        _ => single_occurrence(booking),
    };

    let Some(mut label) = schedule else {
        return SCHEDULE_NOT_SET.to_string();
    };

    if let Some(timezone) = non_blank(booking.timezone.as_deref()) {
        label.push_str(&format!(" ({timezone})"));
    }
    label
}

fn recurring_schedule(days: &[String], times: &[String]) -> String {
    days.iter()
        .enumerate()
        .filter(|(_, day)| !day.trim().is_empty())
        .map(|(i, day)| {
            let day = day.trim();
            non_blank(times.get(i).map(String::as_str))
                .map_or_else(|| day.to_string(), |time| format!("{day} {time}"))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn single_occurrence(booking: &Booking) -> Option<String> {
    let date = non_blank(booking.class_date.as_deref()).map(|raw| {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_or_else(|_| raw.to_string(), |date| date.format("%a, %b %-d %Y").to_string())
    });
    let time = non_blank(booking.class_time.as_deref());

    match (date, time) {
        (Some(date), Some(time)) => Some(format!("{date} {time}")),
        (Some(date), None) => Some(date),
        (None, Some(time)) => Some(time.to_string()),
        (None, None) => None,
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Summarises selected client names for the collapsed multi selector.
///
/// Shows the first `preview` names joined by `", "`, followed by `"+N more"`
/// when more are selected. Returns `None` for an empty selection.
///
/// # Example
///
/// ```rust
/// use booking_selector::ui::helpers::summary_text;
///
/// let names = vec!["Ann Lee".to_string(), "Bo Park".to_string(), "Cy Diaz".to_string()];
/// assert_eq!(summary_text(&names, 2).as_deref(), Some("Ann Lee, Bo Park +1 more"));
/// assert_eq!(summary_text(&names[..1], 2).as_deref(), Some("Ann Lee"));
/// assert_eq!(summary_text(&[], 2), None);
/// ```
#[must_use]
pub fn summary_text(names: &[String], preview: usize) -> Option<String> {
    if names.is_empty() {
        return None;
    }

    let shown = preview.max(1).min(names.len());
    let mut text = names[..shown].join(", ");
    let hidden = names.len() - shown;
    if hidden > 0 {
        text.push_str(&format!(" +{hidden} more"));
    }
    Some(text)
}

/// Computes character ranges in `text` where `query` occurs, ignoring case.
///
/// Both sides are folded with [`fold`], the same folding search uses, so
/// every row search admits on its name gets a highlight. Occurrences are
/// non-overlapping and scanned left to right. A blank query yields no ranges.
///
/// # Returns
///
/// A vector of `(start, end)` character index ranges into `text`, end
/// exclusive. A match covering part of a character that folds to several
/// characters covers the whole original character.
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.trim().is_empty() {
        return vec![];
    }

    // Folded char index -> original char index.
    let origin: Vec<usize> = text
        .chars()
        .enumerate()
        .flat_map(|(idx, c)| std::iter::repeat(idx).take(c.to_lowercase().count()))
        .collect();

    let folded = fold(text);
    let needle = fold(query);
    let needle_len = needle.chars().count();

    folded
        .match_indices(needle.as_str())
        .filter_map(|(byte_start, _)| {
            let start = folded[..byte_start].chars().count();
            let first = *origin.get(start)?;
            let last = *origin.get(start + needle_len - 1)?;
            Some((first, last + 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking() -> Booking {
        Booking {
            id: "b".into(),
            ..Booking::default()
        }
    }

    #[test]
    fn unknown_status_gets_default_badge() {
        assert_eq!(status_badge_class(&BookingStatus::Other("on_hold".into())), "status-default");
        assert_eq!(status_badge_class(&BookingStatus::Confirmed), "status-confirmed");
    }

    #[test]
    fn recurring_schedule_guards_index_access() {
        let b = Booking {
            preferred_days: Some(vec!["Mon".into(), "Tue".into(), "Thu".into()]),
            preferred_times: Some(vec!["07:00".into(), " ".into()]),
            ..booking()
        };
        assert_eq!(schedule_label(&b), "Mon 07:00, Tue, Thu");
    }

    #[test]
    fn surplus_times_are_ignored() {
        let b = Booking {
            preferred_days: Some(vec!["Sat".into()]),
            preferred_times: Some(vec!["10:00".into(), "12:00".into()]),
            ..booking()
        };
        assert_eq!(schedule_label(&b), "Sat 10:00");
    }

    #[test]
    fn days_without_times_list() {
        let b = Booking {
            preferred_days: Some(vec!["Fri".into()]),
            ..booking()
        };
        assert_eq!(schedule_label(&b), "Fri");
    }

    #[test]
    fn falls_back_to_class_date_and_time() {
        let b = Booking {
            preferred_days: Some(vec![]),
            class_date: Some("2026-01-05".into()),
            class_time: Some("18:30".into()),
            ..booking()
        };
        assert_eq!(schedule_label(&b), "Mon, Jan 5 2026 18:30");
    }

    #[test]
    fn unparsable_date_passes_through() {
        let b = Booking {
            class_date: Some("next Tuesday".into()),
            ..booking()
        };
        assert_eq!(schedule_label(&b), "next Tuesday");
    }

    #[test]
    fn no_schedule_ignores_timezone() {
        let b = Booking {
            timezone: Some("UTC".into()),
            ..booking()
        };
        assert_eq!(schedule_label(&b), SCHEDULE_NOT_SET);
    }

    #[test]
    fn summary_with_zero_preview_still_shows_one_name() {
        let names = vec!["A".to_string(), "B".to_string()];
        assert_eq!(summary_text(&names, 0).as_deref(), Some("A +1 more"));
    }

    #[test]
    fn match_ranges_are_case_insensitive_and_non_overlapping() {
        assert_eq!(match_ranges("Anna Banana", "AN"), vec![(0, 2), (6, 8), (8, 10)]);
        assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert!(match_ranges("Ann", " ").is_empty());
        assert!(match_ranges("Ann", "annie").is_empty());
    }

    #[test]
    fn match_ranges_fold_like_search() {
        let b = Booking {
            first_name: "ΟΔΥΣΣΕΥΣ".into(),
            last_name: "Papas".into(),
            ..booking()
        };
        assert!(crate::eligibility::search::matches(&b, "ς"));
        assert_eq!(match_ranges(&b.full_name(), "ς"), vec![(7, 8)]);
    }

    #[test]
    fn match_ranges_map_expanded_folds_back() {
        assert_eq!(match_ranges("İlker", "LKER"), vec![(1, 5)]);
        assert_eq!(match_ranges("İlker Ay", "ay"), vec![(6, 8)]);
    }

    #[test]
    fn match_ranges_use_character_indices() {
        assert_eq!(match_ranges("Zoë Élan", "élan"), vec![(4, 8)]);
    }
}
