//! Selectors Level 3 — Building compound and complex selector strings.
//! Spec: <https://www.w3.org/TR/selectors-3/>
//!
//! A [`Selector`] is assembled one simple selector ("fragment") at a time.
//! Fragments must follow the order element, id, class, attribute,
//! pseudo-class, pseudo-element, and element, id and pseudo-element may
//! each appear once. Two finished selectors can be joined with a
//! [`Combinator`].
//!
//! ```
//! use css_selectors::{Combinator, combine, element, id};
//!
//! let sel = id("main").class("container")?.class("editable")?;
//! assert_eq!(sel.stringify(), "#main.container.editable");
//!
//! let pair = combine(
//!     element("div").id("main")?,
//!     Combinator::AdjacentSibling,
//!     element("table").id("data")?,
//! );
//! assert_eq!(pair.stringify(), "div#main + table#data");
//! # Ok::<(), css_selectors::SelectorError>(())
//! ```

mod builder;
mod error;
mod specificity;

// Re-export public API
pub use builder::{Selector, attr, class, combine, element, id, pseudo_class, pseudo_element};
pub use error::SelectorError;
pub use specificity::Specificity;

/// Kinds of simple selector a compound selector is built from, in the
/// order they must appear.
/// Spec: Section 4 — Selector syntax
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FragmentKind {
    /// Nothing appended yet.
    #[default]
    Initial,
    /// Spec: Section 6.1 — Type selectors
    Element,
    /// Spec: Section 6.5 — ID selectors
    Id,
    /// Spec: Section 6.4 — Class selectors
    Class,
    /// Spec: Section 6.3 — Attribute selectors
    Attribute,
    /// Spec: Section 6.6 — Pseudo-classes
    PseudoClass,
    /// Spec: Section 7 — Pseudo-elements
    PseudoElement,
}

impl FragmentKind {
    /// Position in the required ordering. `Initial` is 0.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Initial => 0,
            Self::Element => 1,
            Self::Id => 2,
            Self::Class => 3,
            Self::Attribute => 4,
            Self::PseudoClass => 5,
            Self::PseudoElement => 6,
        }
    }

    /// Kinds that may occur at most once in a compound selector.
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Text written before the fragment's name.
    const fn prefix(self) -> &'static str {
        match self {
            Self::Initial | Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }

    /// Text written after the fragment's name.
    const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            Self::Initial
            | Self::Element
            | Self::Id
            | Self::Class
            | Self::PseudoClass
            | Self::PseudoElement => "",
        }
    }
}

/// Combinators between compounds.
/// Spec: Section 8 — Combinators
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    Descendant,
    Child,
    AdjacentSibling,
    GeneralSibling,
}

impl Combinator {
    /// The token written between the two compounds.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::AdjacentSibling => "+",
            Self::GeneralSibling => "~",
        }
    }

    /// Parse a combinator token. Surrounding whitespace is not stripped, so
    /// `" "` is the descendant combinator.
    ///
    /// # Errors
    /// Returns [`SelectorError::UnknownCombinator`] for any other token.
    pub fn from_token(token: &str) -> Result<Self, SelectorError> {
        match token {
            " " => Ok(Self::Descendant),
            ">" => Ok(Self::Child),
            "+" => Ok(Self::AdjacentSibling),
            "~" => Ok(Self::GeneralSibling),
            _ => Err(SelectorError::UnknownCombinator(token.to_owned())),
        }
    }
}
