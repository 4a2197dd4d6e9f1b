//! Errors raised while appending fragments to a selector.

use crate::FragmentKind;
use thiserror::Error;

/// Why a fragment or combinator was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A fragment ranks below one that was already appended.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OrderViolation {
        /// Kind of the last fragment in the selector.
        previous: FragmentKind,
        /// Kind of the rejected fragment.
        next: FragmentKind,
    },
    /// A second element, id or pseudo-element was appended.
    #[error("Element, id and pseudo-element should not occur more than one time inside the selector")]
    DuplicateViolation {
        /// The repeated kind.
        kind: FragmentKind,
    },
    /// Token is not one of `" "`, `">"`, `"+"` or `"~"`.
    #[error("unknown combinator token {0:?}")]
    UnknownCombinator(String),
}
