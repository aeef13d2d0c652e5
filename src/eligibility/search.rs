//! Free-text search over booking contact fields.

use crate::domain::Booking;

/// Case-insensitive substring matcher over client name and email.
///
/// The query is folded once on construction so that filtering a candidate
/// list only folds each booking's fields.
///
/// # Examples
///
/// ```
/// use booking_selector::eligibility::SearchMatcher;
/// use booking_selector::Booking;
///
/// let booking = Booking {
///     id: "1".into(),
///     first_name: "Alice".into(),
///     last_name: "Moreau".into(),
///     email: "alice@studio.test".into(),
///     ..Booking::default()
/// };
///
/// assert!(SearchMatcher::new("ALICE").matches(&booking));
/// assert!(SearchMatcher::new("ce mor").matches(&booking));
/// assert!(SearchMatcher::new("   ").matches(&booking));
/// assert!(!SearchMatcher::new("bob").matches(&booking));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatcher {
    needle: Option<String>,
}

impl SearchMatcher {
    /// Builds a matcher for `query`. Blank queries match everything.
    #[must_use]
    pub fn new(query: &str) -> Self {
        let needle = if query.trim().is_empty() {
            None
        } else {
            Some(fold(query))
        };
        Self { needle }
    }

    /// Whether the query is blank.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.needle.is_none()
    }

    /// Whether `booking` matches the query on full name or email.
    #[must_use]
    pub fn matches(&self, booking: &Booking) -> bool {
        let Some(needle) = self.needle.as_deref() else {
            return true;
        };

        fold(&booking.full_name()).contains(needle) || fold(&booking.email).contains(needle)
    }
}

/// Case folding shared by matching and match highlighting.
///
/// Folds the whole string at once, so context-dependent mappings such as a
/// word-final sigma apply.
#[must_use]
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// Convenience for one-off checks; prefer [`SearchMatcher`] in loops.
#[must_use]
pub fn matches(booking: &Booking, query: &str) -> bool {
    SearchMatcher::new(query).matches(booking)
}
