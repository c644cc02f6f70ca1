// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors reported by fallible vector and scalar operations.
///
/// NaN-producing domain cases (for example the angle between a zero vector
/// and anything else) are not errors; they propagate NaN like plain `f32`
/// arithmetic does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// Checked component access used an index outside `0..len`.
    #[error("component index {index} out of range for a {len}-component vector")]
    IndexOutOfRange {
        /// Index that was requested.
        index: usize,
        /// Number of components in the vector.
        len: usize,
    },
    /// A scalar divisor, or at least one component of a vector divisor, was zero.
    #[error("division by zero")]
    DivisionByZero,
    /// A variadic `min_of`/`max_of` reduction received no values.
    #[error("at least one value is required")]
    EmptyInput,
}

impl MathError {
    pub(crate) fn index_out_of_range(index: usize, len: usize) -> Self {
        tracing::debug!(index, len, "rejected out-of-range component index");
        Self::IndexOutOfRange { index, len }
    }

    pub(crate) fn division_by_zero(divisor: &dyn core::fmt::Debug) -> Self {
        tracing::debug!(?divisor, "rejected division by zero");
        Self::DivisionByZero
    }

    pub(crate) fn empty_input(op: &'static str) -> Self {
        tracing::debug!(op, "rejected empty input");
        Self::EmptyInput
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_violation() {
        let err = MathError::IndexOutOfRange { index: 2, len: 2 };
        assert_eq!(
            err.to_string(),
            "component index 2 out of range for a 2-component vector"
        );
        assert_eq!(MathError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            MathError::EmptyInput.to_string(),
            "at least one value is required"
        );
    }
}
