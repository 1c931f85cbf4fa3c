//! Time-range overlap predicate for same-day bookings.

/// Whether two `HH:MM` time ranges on the same day overlap.
///
/// Boundaries are inclusive: a range starting exactly when another
/// ends counts as a conflict. Lexicographic comparison of `HH:MM`
/// strings equals chronological comparison.
pub fn ranges_overlap(
    existing_start: &str,
    existing_end: &str,
    candidate_start: &str,
    candidate_end: &str,
) -> bool {
    existing_start <= candidate_end && existing_end >= candidate_start
}
