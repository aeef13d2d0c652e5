//! Effective course type of a booking.
//!
//! Package information is denormalized onto bookings by the caller and may
//! lag behind the package reference itself. The lookup is therefore an
//! explicit enum rather than a pair of nested optionals.

use crate::domain::{Booking, CourseType};

/// Result of resolving a booking's course type from its package data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectiveCourseType {
    /// Package info is loaded and carries a course type.
    Known(CourseType),
    /// The booking references a package whose info has not been loaded yet.
    PendingLoad,
    /// Package info is loaded but carries no course type.
    ///
    /// `has_package_id` records whether the booking itself references a
    /// package by id.
    LoadedWithoutType { has_package_id: bool },
    /// The booking has no package reference at all.
    Absent,
}

impl EffectiveCourseType {
    /// Resolves the course type for a booking.
    ///
    /// Loaded package info decides on its own: [`Known`](Self::Known) when
    /// it carries a course type, [`LoadedWithoutType`](Self::LoadedWithoutType)
    /// otherwise. Without loaded info, a non-blank `class_package_id` on the
    /// booking yields [`PendingLoad`](Self::PendingLoad).
    ///
    /// # Examples
    ///
    /// ```
    /// use booking_selector::eligibility::EffectiveCourseType;
    /// use booking_selector::Booking;
    ///
    /// let mut booking = Booking { id: "b".into(), ..Booking::default() };
    /// assert_eq!(EffectiveCourseType::of(&booking), EffectiveCourseType::Absent);
    ///
    /// booking.class_package_id = Some("pkg-1".into());
    /// assert_eq!(EffectiveCourseType::of(&booking), EffectiveCourseType::PendingLoad);
    /// ```
    #[must_use]
    pub fn of(booking: &Booking) -> Self {
        let has_package_id = booking
            .class_package_id
            .as_deref()
            .is_some_and(|id| !id.trim().is_empty());

        match &booking.class_package {
            Some(package) => match &package.course_type {
                Some(course_type) => Self::Known(course_type.clone()),
                None => Self::LoadedWithoutType { has_package_id },
            },
            None if has_package_id => Self::PendingLoad,
            None => Self::Absent,
        }
    }
}
