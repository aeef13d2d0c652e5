//! Booking eligibility rules.
//!
//! A booking is eligible when four independent gates all hold:
//!
//! 1. **Reference id**: single selector only. The booking must carry a
//!    non-blank reference id. The multi selector has no such gate; membership
//!    is checked when a booking is toggled instead.
//! 2. **Status**: only pending and confirmed bookings are offered.
//! 3. **Booking type / course type**: depends on the assignment type, see
//!    [`type_gate`].
//! 4. **Search**: case-insensitive substring match on name or email.

use super::course::EffectiveCourseType;
use super::search::SearchMatcher;
use crate::domain::{AssignmentContext, AssignmentType, Booking, BookingStatus, BookingType, CourseType};

/// Which selector's rule set to apply.
///
/// The two selectors differ in gate 1 and in the weekly fallback for untyped
/// bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorVariant {
    Single,
    Multiple,
}

/// Eligibility engine for one selector variant.
///
/// # Examples
///
/// ```
/// use booking_selector::eligibility::{EligibilityFilter, SelectorVariant};
/// use booking_selector::{AssignmentContext, AssignmentType, Booking, BookingStatus, BookingType};
///
/// let booking = Booking {
///     id: "a".into(),
///     booking_reference_id: Some("BK-1".into()),
///     status: BookingStatus::Confirmed,
///     booking_type: Some(BookingType::PublicGroup),
///     ..Booking::default()
/// };
/// let ctx = AssignmentContext::new(AssignmentType::Weekly);
///
/// assert!(EligibilityFilter::new(SelectorVariant::Multiple).is_eligible(&booking, &ctx, ""));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityFilter {
    variant: SelectorVariant,
}

impl EligibilityFilter {
    #[must_use]
    pub const fn new(variant: SelectorVariant) -> Self {
        Self { variant }
    }

    #[must_use]
    pub const fn variant(&self) -> SelectorVariant {
        self.variant
    }

    /// Whether `booking` is selectable under `ctx` with the given search query.
    #[must_use]
    pub fn is_eligible(&self, booking: &Booking, ctx: &AssignmentContext, query: &str) -> bool {
        self.passes_context(booking, ctx) && SearchMatcher::new(query).matches(booking)
    }

    /// Gates 1 to 3: everything except search.
    #[must_use]
    pub fn passes_context(&self, booking: &Booking, ctx: &AssignmentContext) -> bool {
        if self.variant == SelectorVariant::Single && booking.reference_id().is_none() {
            return false;
        }

        if !booking.status.is_open() {
            return false;
        }

        type_gate(
            self.variant,
            ctx,
            booking.booking_type.as_ref(),
            &booking.status,
            &EffectiveCourseType::of(booking),
        )
    }

    /// Narrows `candidates` to the eligible set, preserving candidate order.
    ///
    /// # Tracing
    ///
    /// Creates a debug-level span with the candidate count, assignment type,
    /// booking-type filter and query length.
    #[must_use]
    pub fn eligible<'a>(
        &self,
        candidates: &'a [Booking],
        ctx: &AssignmentContext,
        query: &str,
    ) -> Vec<&'a Booking> {
        let _span = tracing::debug_span!("eligible_bookings",
            variant = ?self.variant,
            total_candidates = candidates.len(),
            assignment_type = %ctx.assignment_type,
            booking_type_filter = ?ctx.booking_type_filter,
            query_len = query.len()
        )
        .entered();

        let matcher = SearchMatcher::new(query);
        let eligible: Vec<&Booking> = candidates
            .iter()
            .filter(|booking| self.passes_context(booking, ctx) && matcher.matches(booking))
            .collect();

        tracing::debug!(eligible_count = eligible.len(), "eligible set derived");
        eligible
    }
}

/// Gate 3: booking type and course type, keyed on the assignment type.
///
/// - `Weekly`: public group bookings. The single selector also accepts
///   untyped bookings that are already confirmed (legacy rows written before
///   booking types existed). Course type is ignored.
/// - `Monthly`: requires a booking-type filter and an exact type match. A
///   known course type must be regular and loaded package info without one is
///   rejected. Bookings with no package info pass.
/// - `CrashCourse`: requires a booking-type filter and an exact type match.
///   A known course type must be crash. A package id on the booking passes
///   provisionally while its course type is missing, and bookings with no
///   package reference are rejected.
/// - `Adhoc` and `Package`: exact type match when a filter is set, anything
///   otherwise.
#[must_use]
pub fn type_gate(
    variant: SelectorVariant,
    ctx: &AssignmentContext,
    booking_type: Option<&BookingType>,
    status: &BookingStatus,
    course_type: &EffectiveCourseType,
) -> bool {
    let filter = ctx.booking_type_filter.as_ref();
    let matches_filter = || filter.is_some_and(|wanted| booking_type == Some(wanted));

    match ctx.assignment_type {
        AssignmentType::Weekly => match booking_type {
            Some(BookingType::PublicGroup) => true,
            None => variant == SelectorVariant::Single && *status == BookingStatus::Confirmed,
            Some(_) => false,
        },
        AssignmentType::Monthly => {
            matches_filter()
                && match course_type {
                    EffectiveCourseType::Known(course) => *course == CourseType::Regular,
                    EffectiveCourseType::LoadedWithoutType { .. } => false,
                    EffectiveCourseType::PendingLoad | EffectiveCourseType::Absent => true,
                }
        }
        AssignmentType::CrashCourse => {
            matches_filter()
                && match course_type {
                    EffectiveCourseType::Known(course) => *course == CourseType::Crash,
                    EffectiveCourseType::PendingLoad => true,
                    EffectiveCourseType::LoadedWithoutType { has_package_id } => *has_package_id,
                    EffectiveCourseType::Absent => false,
                }
        }
        AssignmentType::Adhoc | AssignmentType::Package => filter.map_or(true, |_| matches_filter()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClassPackage;

    const ALL_ASSIGNMENT_TYPES: [AssignmentType; 5] = [
        AssignmentType::Adhoc,
        AssignmentType::Weekly,
        AssignmentType::Monthly,
        AssignmentType::CrashCourse,
        AssignmentType::Package,
    ];

    fn all_filters() -> Vec<Option<BookingType>> {
        vec![
            None,
            Some(BookingType::Individual),
            Some(BookingType::Corporate),
            Some(BookingType::PrivateGroup),
            Some(BookingType::PublicGroup),
        ]
    }

    fn booking(reference: &str, booking_type: Option<BookingType>, status: BookingStatus) -> Booking {
        Booking {
            id: format!("id-{reference}"),
            booking_reference_id: Some(reference.to_string()),
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            email: "ann@x.com".into(),
            status,
            booking_type,
            ..Booking::default()
        }
    }

    fn with_course(mut b: Booking, course: CourseType) -> Booking {
        b.class_package_id = Some("pkg-1".into());
        b.class_package = Some(ClassPackage {
            id: Some("pkg-1".into()),
            name: Some("Spring".into()),
            course_type: Some(course),
        });
        b
    }

    fn ctx(assignment_type: AssignmentType, filter: Option<BookingType>) -> AssignmentContext {
        AssignmentContext::new(assignment_type).with_booking_type_filter(filter)
    }

    const SINGLE: EligibilityFilter = EligibilityFilter::new(SelectorVariant::Single);
    const MULTI: EligibilityFilter = EligibilityFilter::new(SelectorVariant::Multiple);

    #[test]
    fn single_rejects_missing_or_blank_reference_everywhere() {
        let types = [
            None,
            Some(BookingType::Individual),
            Some(BookingType::Corporate),
            Some(BookingType::PrivateGroup),
            Some(BookingType::PublicGroup),
        ];
        for reference in [None, Some(String::new()), Some("   ".to_string())] {
            for booking_type in &types {
                let mut b = with_course(
                    booking("x", booking_type.clone(), BookingStatus::Confirmed),
                    CourseType::Crash,
                );
                b.booking_reference_id = reference.clone();
                for assignment_type in ALL_ASSIGNMENT_TYPES {
                    for filter in all_filters() {
                        assert!(
                            !SINGLE.is_eligible(&b, &ctx(assignment_type, filter.clone()), ""),
                            "{assignment_type} / {filter:?} / {booking_type:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn multi_has_no_reference_gate() {
        let mut b = booking("x", Some(BookingType::PublicGroup), BookingStatus::Pending);
        b.booking_reference_id = None;
        assert!(MULTI.is_eligible(&b, &ctx(AssignmentType::Weekly, None), ""));
        assert!(!SINGLE.is_eligible(&b, &ctx(AssignmentType::Weekly, None), ""));
    }

    #[test]
    fn closed_statuses_are_never_eligible() {
        for status in [
            BookingStatus::Completed,
            BookingStatus::Cancelled,
            BookingStatus::Other("refunded".into()),
        ] {
            let b = booking("x", Some(BookingType::PublicGroup), status.clone());
            for engine in [SINGLE, MULTI] {
                for assignment_type in ALL_ASSIGNMENT_TYPES {
                    for filter in all_filters() {
                        assert!(!engine.is_eligible(&b, &ctx(assignment_type, filter), ""));
                    }
                }
            }
        }
    }

    #[test]
    fn weekly_scenario_keeps_only_public_group() {
        let a = booking("A", Some(BookingType::PublicGroup), BookingStatus::Confirmed);
        let b = booking("B", Some(BookingType::Corporate), BookingStatus::Pending);
        let candidates = vec![a, b];

        let eligible = MULTI.eligible(&candidates, &ctx(AssignmentType::Weekly, None), "");
        let ids: Vec<&str> = eligible.iter().filter_map(|b| b.reference_id()).collect();
        assert_eq!(ids, vec!["A"]);
    }

    #[test]
    fn weekly_fallback_for_untyped_is_single_only_and_confirmed_only() {
        let confirmed = booking("C", None, BookingStatus::Confirmed);
        let pending = booking("P", None, BookingStatus::Pending);
        let weekly = ctx(AssignmentType::Weekly, None);

        assert!(SINGLE.is_eligible(&confirmed, &weekly, ""));
        assert!(!SINGLE.is_eligible(&pending, &weekly, ""));
        assert!(!MULTI.is_eligible(&confirmed, &weekly, ""));
    }

    #[test]
    fn weekly_ignores_filter_and_course_type() {
        let b = with_course(
            booking("W", Some(BookingType::PublicGroup), BookingStatus::Pending),
            CourseType::Crash,
        );
        assert!(MULTI.is_eligible(&b, &ctx(AssignmentType::Weekly, Some(BookingType::Corporate)), ""));
    }

    #[test]
    fn monthly_without_filter_is_empty() {
        let candidates: Vec<Booking> = [
            Some(BookingType::Individual),
            Some(BookingType::Corporate),
            Some(BookingType::PublicGroup),
            None,
        ]
        .into_iter()
        .enumerate()
        .map(|(i, t)| booking(&format!("M{i}"), t, BookingStatus::Confirmed))
        .collect();

        for engine in [SINGLE, MULTI] {
            assert!(engine.eligible(&candidates, &ctx(AssignmentType::Monthly, None), "").is_empty());
        }
    }

    #[test]
    fn monthly_requires_regular_when_known() {
        let monthly = ctx(AssignmentType::Monthly, Some(BookingType::Corporate));
        let plain = booking("R", Some(BookingType::Corporate), BookingStatus::Confirmed);

        assert!(SINGLE.is_eligible(&plain, &monthly, ""));
        assert!(SINGLE.is_eligible(&with_course(plain.clone(), CourseType::Regular), &monthly, ""));
        assert!(!SINGLE.is_eligible(&with_course(plain.clone(), CourseType::Crash), &monthly, ""));

        let other_type = booking("O", Some(BookingType::Individual), BookingStatus::Confirmed);
        assert!(!SINGLE.is_eligible(&other_type, &monthly, ""));
    }

    fn without_course_type(mut b: Booking, package_id: Option<&str>) -> Booking {
        b.class_package_id = package_id.map(String::from);
        b.class_package = Some(ClassPackage {
            id: Some("pkg-1".into()),
            name: Some("Spring".into()),
            course_type: None,
        });
        b
    }

    #[test]
    fn monthly_rejects_loaded_package_without_course_type() {
        let monthly = ctx(AssignmentType::Monthly, Some(BookingType::Corporate));
        let plain = booking("R", Some(BookingType::Corporate), BookingStatus::Confirmed);

        for package_id in [None, Some("pkg-1")] {
            let b = without_course_type(plain.clone(), package_id);
            assert!(!SINGLE.is_eligible(&b, &monthly, ""), "{package_id:?}");
            assert!(!MULTI.is_eligible(&b, &monthly, ""), "{package_id:?}");
        }

        let mut pending = plain;
        pending.class_package_id = Some("pkg-1".into());
        assert!(MULTI.is_eligible(&pending, &monthly, ""));
    }

    #[test]
    fn crash_course_untyped_package_needs_booking_package_id() {
        let crash = ctx(AssignmentType::CrashCourse, Some(BookingType::Corporate));
        let plain = booking("X", Some(BookingType::Corporate), BookingStatus::Confirmed);

        assert!(!SINGLE.is_eligible(&without_course_type(plain.clone(), None), &crash, ""));
        assert!(!SINGLE.is_eligible(&without_course_type(plain.clone(), Some("  ")), &crash, ""));
        assert!(SINGLE.is_eligible(&without_course_type(plain, Some("pkg-1")), &crash, ""));
    }

    #[test]
    fn crash_course_without_filter_is_empty() {
        let b = with_course(
            booking("X", Some(BookingType::Corporate), BookingStatus::Confirmed),
            CourseType::Crash,
        );
        assert!(!SINGLE.is_eligible(&b, &ctx(AssignmentType::CrashCourse, None), ""));
    }

    #[test]
    fn crash_course_rejects_regular_package() {
        let b = with_course(
            booking("X", Some(BookingType::Corporate), BookingStatus::Confirmed),
            CourseType::Regular,
        );
        let crash = ctx(AssignmentType::CrashCourse, Some(BookingType::Corporate));
        assert!(!SINGLE.is_eligible(&b, &crash, ""));
        assert!(!MULTI.is_eligible(&b, &crash, ""));
    }

    #[test]
    fn crash_course_rejects_unpackaged_booking() {
        let b = booking("X", Some(BookingType::Corporate), BookingStatus::Confirmed);
        let crash = ctx(AssignmentType::CrashCourse, Some(BookingType::Corporate));
        assert!(!SINGLE.is_eligible(&b, &crash, ""));
    }

    #[test]
    fn crash_course_accepts_pending_package_provisionally() {
        let mut c = booking("C", Some(BookingType::Corporate), BookingStatus::Confirmed);
        c.class_package_id = Some("pkg-9".into());
        let crash = ctx(AssignmentType::CrashCourse, Some(BookingType::Corporate));
        assert!(SINGLE.is_eligible(&c, &crash, ""));
        assert!(MULTI.is_eligible(&c, &crash, ""));
    }

    #[test]
    fn crash_course_accepts_known_crash_package() {
        let b = with_course(
            booking("X", Some(BookingType::PrivateGroup), BookingStatus::Pending),
            CourseType::Crash,
        );
        assert!(SINGLE.is_eligible(&b, &ctx(AssignmentType::CrashCourse, Some(BookingType::PrivateGroup)), ""));
    }

    #[test]
    fn adhoc_and_package_pass_everything_without_filter() {
        for assignment_type in [AssignmentType::Adhoc, AssignmentType::Package] {
            for t in [None, Some(BookingType::Individual), Some(BookingType::Other("retreat".into()))] {
                let b = with_course(booking("X", t, BookingStatus::Confirmed), CourseType::Crash);
                assert!(SINGLE.is_eligible(&b, &ctx(assignment_type, None), ""));
            }
        }
    }

    #[test]
    fn adhoc_with_filter_requires_exact_type() {
        let adhoc = ctx(AssignmentType::Adhoc, Some(BookingType::PrivateGroup));
        let hit = booking("H", Some(BookingType::PrivateGroup), BookingStatus::Pending);
        let miss = booking("M", Some(BookingType::Corporate), BookingStatus::Pending);
        let untyped = booking("U", None, BookingStatus::Pending);

        assert!(SINGLE.is_eligible(&hit, &adhoc, ""));
        assert!(!SINGLE.is_eligible(&miss, &adhoc, ""));
        assert!(!SINGLE.is_eligible(&untyped, &adhoc, ""));
    }

    #[test]
    fn search_gate_applies_on_top() {
        let b = booking("S", Some(BookingType::Corporate), BookingStatus::Pending);
        let adhoc = ctx(AssignmentType::Adhoc, None);
        assert!(SINGLE.is_eligible(&b, &adhoc, "ANN"));
        assert!(SINGLE.is_eligible(&b, &adhoc, "x.com"));
        assert!(!SINGLE.is_eligible(&b, &adhoc, "bob"));
    }

    #[test]
    fn eligible_preserves_candidate_order() {
        let candidates = vec![
            booking("3", Some(BookingType::Corporate), BookingStatus::Pending),
            booking("1", Some(BookingType::Corporate), BookingStatus::Cancelled),
            booking("2", Some(BookingType::Corporate), BookingStatus::Confirmed),
        ];
        let eligible = SINGLE.eligible(&candidates, &ctx(AssignmentType::Package, None), "");
        let ids: Vec<&str> = eligible.iter().filter_map(|b| b.reference_id()).collect();
        assert_eq!(ids, vec!["3", "2"]);
    }
}
