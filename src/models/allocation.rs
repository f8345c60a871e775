//! Soft-cap clamping for the allocation sliders
//!
//! The three fields may sum to `max` but never beyond it. Decreases are
//! always accepted; an increase is rejected outright once the total has
//! reached `max`, and otherwise limited to the remaining headroom.

/// Accept or clamp a requested value for one field
///
/// `others_sum` is the sum of the two other fields. Returns the value the
/// field should take.
pub fn clamp_allocation(current: u64, requested: u64, others_sum: u64, max: u64) -> u64 {
    if requested <= current {
        return requested;
    }

    let total = current.saturating_add(others_sum);
    if total >= max {
        return current;
    }

    // total < max implies others_sum < max
    requested.min(max - others_sum)
}
