//! Fragment-by-fragment selector construction.
//! Spec: <https://www.w3.org/TR/selectors-3/#selector-syntax>

use crate::{Combinator, FragmentKind, SelectorError, Specificity};
use core::fmt;
use log::{debug, trace};

/// A selector string under construction.
///
/// Every fragment method consumes the selector and hands it back, so chains
/// read `element("a").attr("href")?.pseudo_class("focus")?`.
/// Spec: Section 4 — Selector syntax
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selector {
    /// Rendered selector text.
    text: String,
    /// Highest-ranked kind appended so far.
    order: FragmentKind,
    /// Running specificity of everything appended.
    specificity: Specificity,
}

impl Selector {
    /// An empty selector that accepts any first fragment.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a selector from one fragment. Cannot fail: nothing precedes it.
    fn starting_with(kind: FragmentKind, name: &str) -> Self {
        let mut sel = Self::new();
        sel.write_fragment(kind, name);
        sel
    }

    /// Append a type selector.
    /// Spec: Section 6.1 — Type selectors
    ///
    /// # Errors
    /// `OrderViolation` if anything but nothing precedes it, `DuplicateViolation`
    /// if an element is already present.
    pub fn element(self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Element, name)
    }

    /// Append `#name`.
    /// Spec: Section 6.5 — ID selectors
    ///
    /// # Errors
    /// `OrderViolation` after a class or later kind, `DuplicateViolation` on a
    /// second id.
    pub fn id(self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Id, name)
    }

    /// Append `.name`. Repeatable.
    /// Spec: Section 6.4 — Class selectors
    ///
    /// # Errors
    /// `OrderViolation` after an attribute or later kind.
    pub fn class(self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Class, name)
    }

    /// Append `[spec]`, where `spec` is a raw attribute expression such as
    /// `href$=".png"`. Repeatable.
    /// Spec: Section 6.3 — Attribute selectors
    ///
    /// # Errors
    /// `OrderViolation` after a pseudo-class or pseudo-element.
    pub fn attr(self, spec: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Attribute, spec)
    }

    /// Append `:name`. Repeatable.
    /// Spec: Section 6.6 — Pseudo-classes
    ///
    /// # Errors
    /// `OrderViolation` after a pseudo-element.
    pub fn pseudo_class(self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::PseudoClass, name)
    }

    /// Append `::name`.
    /// Spec: Section 7 — Pseudo-elements
    ///
    /// # Errors
    /// `DuplicateViolation` on a second pseudo-element.
    pub fn pseudo_element(self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::PseudoElement, name)
    }

    /// The accumulated selector text.
    #[inline]
    pub fn stringify(&self) -> &str {
        &self.text
    }

    /// Consume the selector, returning its text.
    #[inline]
    pub fn into_string(self) -> String {
        self.text
    }

    /// Highest-ranked fragment kind appended so far.
    #[inline]
    pub const fn order(&self) -> FragmentKind {
        self.order
    }

    /// Specificity of every fragment appended, including both sides of a
    /// combination.
    #[inline]
    pub const fn specificity(&self) -> Specificity {
        self.specificity
    }

    /// True if no fragment has been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Validate, then write one fragment.
    fn append(mut self, kind: FragmentKind, name: &str) -> Result<Self, SelectorError> {
        if let Err(err) = self.check(kind) {
            debug!("rejected {kind:?} fragment {name:?} after {:?}: {err}", self.order);
            return Err(err);
        }
        self.write_fragment(kind, name);
        Ok(self)
    }

    /// Order check first, then uniqueness. Equal rank passes the order check;
    /// for unique kinds equal rank means the kind is already present.
    fn check(&self, kind: FragmentKind) -> Result<(), SelectorError> {
        if kind.rank() < self.order.rank() {
            return Err(SelectorError::OrderViolation {
                previous: self.order,
                next: kind,
            });
        }
        if kind.is_unique() && kind == self.order {
            return Err(SelectorError::DuplicateViolation { kind });
        }
        Ok(())
    }

    /// Append the fragment text and record its kind.
    fn write_fragment(&mut self, kind: FragmentKind, name: &str) {
        trace!("append {kind:?} fragment {name:?} to {:?}", self.text);
        self.text.push_str(kind.prefix());
        self.text.push_str(name);
        self.text.push_str(kind.suffix());
        self.order = kind;
        self.specificity = self
            .specificity
            .saturating_add(Specificity::of_fragment(kind, name));
    }
}

impl fmt::Display for Selector {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.text)
    }
}

/// Start a selector with a type selector.
#[inline]
pub fn element(name: &str) -> Selector {
    Selector::starting_with(FragmentKind::Element, name)
}

/// Start a selector with `#name`.
#[inline]
pub fn id(name: &str) -> Selector {
    Selector::starting_with(FragmentKind::Id, name)
}

/// Start a selector with `.name`.
#[inline]
pub fn class(name: &str) -> Selector {
    Selector::starting_with(FragmentKind::Class, name)
}

/// Start a selector with `[spec]`.
#[inline]
pub fn attr(spec: &str) -> Selector {
    Selector::starting_with(FragmentKind::Attribute, spec)
}

/// Start a selector with `:name`.
#[inline]
pub fn pseudo_class(name: &str) -> Selector {
    Selector::starting_with(FragmentKind::PseudoClass, name)
}

/// Start a selector with `::name`.
#[inline]
pub fn pseudo_element(name: &str) -> Selector {
    Selector::starting_with(FragmentKind::PseudoElement, name)
}

/// Join two finished selectors as `left <token> right`.
///
/// The result is a complex selector: its order resets, so it carries no
/// ordering or uniqueness constraints of its own. Specificity is the sum of
/// both sides.
/// Spec: Section 8 — Combinators
pub fn combine(left: Selector, combinator: Combinator, right: Selector) -> Selector {
    debug!("combine {:?} {combinator:?} {:?}", left.text, right.text);
    let specificity = left.specificity.saturating_add(right.specificity);
    let mut text = left.text;
    text.push(' ');
    text.push_str(combinator.token());
    text.push(' ');
    text.push_str(&right.text);
    Selector {
        text,
        order: FragmentKind::Initial,
        specificity,
    }
}
