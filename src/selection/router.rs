//! Choice between the single and multi selectors.

use crate::domain::{AssignmentType, BookingType};
use crate::eligibility::SelectorVariant;

/// Which selector presentation is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    Single,
    Multiple,
}

impl SelectionMode {
    /// Routes an assignment type and chosen booking type to a selector.
    ///
    /// | booking type    | assignment type | mode     |
    /// |-----------------|-----------------|----------|
    /// | `individual`    | any             | single   |
    /// | `private_group` | `adhoc`         | single   |
    /// | anything else   | any             | multiple |
    ///
    /// An unchosen booking type routes to multiple.
    ///
    /// # Examples
    ///
    /// ```
    /// use booking_selector::selection::SelectionMode;
    /// use booking_selector::{AssignmentType, BookingType};
    ///
    /// assert_eq!(
    ///     SelectionMode::route(AssignmentType::Weekly, Some(&BookingType::Individual)),
    ///     SelectionMode::Single
    /// );
    /// assert_eq!(
    ///     SelectionMode::route(AssignmentType::Monthly, Some(&BookingType::PrivateGroup)),
    ///     SelectionMode::Multiple
    /// );
    /// ```
    #[must_use]
    pub fn route(assignment_type: AssignmentType, booking_type: Option<&BookingType>) -> Self {
        match (assignment_type, booking_type) {
            (_, Some(BookingType::Individual))
            | (AssignmentType::Adhoc, Some(BookingType::PrivateGroup)) => Self::Single,
            _ => Self::Multiple,
        }
    }

    #[must_use]
    pub const fn is_multiple(self) -> bool {
        matches!(self, Self::Multiple)
    }
}

impl From<SelectionMode> for SelectorVariant {
    fn from(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::Single,
            SelectionMode::Multiple => Self::Multiple,
        }
    }
}

/// Whether the multi selector should be used.
#[must_use]
pub fn chooses_multiple(assignment_type: AssignmentType, booking_type: Option<&BookingType>) -> bool {
    SelectionMode::route(assignment_type, booking_type).is_multiple()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ASSIGNMENT_TYPES: [AssignmentType; 5] = [
        AssignmentType::Adhoc,
        AssignmentType::Weekly,
        AssignmentType::Monthly,
        AssignmentType::CrashCourse,
        AssignmentType::Package,
    ];

    #[test]
    fn individual_is_always_single() {
        for assignment_type in ALL_ASSIGNMENT_TYPES {
            assert!(!chooses_multiple(assignment_type, Some(&BookingType::Individual)));
        }
    }

    #[test]
    fn private_group_is_single_only_for_adhoc() {
        for assignment_type in ALL_ASSIGNMENT_TYPES {
            let expected = assignment_type != AssignmentType::Adhoc;
            assert_eq!(
                chooses_multiple(assignment_type, Some(&BookingType::PrivateGroup)),
                expected,
                "{assignment_type}"
            );
        }
    }

    #[test]
    fn group_types_and_unchosen_are_multiple() {
        for assignment_type in ALL_ASSIGNMENT_TYPES {
            assert!(chooses_multiple(assignment_type, Some(&BookingType::Corporate)));
            assert!(chooses_multiple(assignment_type, Some(&BookingType::PublicGroup)));
            assert!(chooses_multiple(assignment_type, None));
        }
    }

    #[test]
    fn mode_maps_to_engine_variant() {
        assert_eq!(SelectorVariant::from(SelectionMode::Single), SelectorVariant::Single);
        assert_eq!(SelectorVariant::from(SelectionMode::Multiple), SelectorVariant::Multiple);
    }
}
