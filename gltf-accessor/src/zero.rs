//! Zero predicate used to pick sparse entries
//!
//! An element is "zero" when it matches the implicit baseline of a sparse
//! accessor closely enough to be left out. Scalars use a strict bound,
//! vectors an inclusive one per component.

/// Tolerance below which a component counts as zero
pub const ZERO_EPSILON: f64 = 1.0e-4;

/// Scalar rule: `|value| < ZERO_EPSILON`
#[inline]
pub fn scalar_is_zero(value: f64) -> bool {
    value.abs() < ZERO_EPSILON
}

/// Vector rule: every component satisfies `|c| <= ZERO_EPSILON`
#[inline]
pub fn vector_is_zero<I>(components: I) -> bool
where
    I: IntoIterator<Item = f64>,
{
    components.into_iter().all(|c| c.abs() <= ZERO_EPSILON)
}
