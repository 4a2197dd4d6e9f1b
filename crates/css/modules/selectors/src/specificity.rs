//! CSS selector specificity calculation.
//! Spec: <https://www.w3.org/TR/selectors-3/#specificity>

use crate::FragmentKind;

/// Specificity triple (a, b, c).
/// Spec: Section 9 — Calculating a selector's specificity
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Specificity(pub u16, pub u16, pub u16);

impl Specificity {
    /// Contribution of a single fragment.
    /// Spec: Section 9 — ids count in a; classes, attributes and pseudo-classes in b;
    /// type selectors and pseudo-elements in c. The universal selector is ignored.
    pub fn of_fragment(kind: FragmentKind, name: &str) -> Self {
        match kind {
            FragmentKind::Id => Self(1, 0, 0),
            FragmentKind::Class | FragmentKind::Attribute | FragmentKind::PseudoClass => {
                Self(0, 1, 0)
            }
            FragmentKind::Element => {
                if name == "*" {
                    Self::default()
                } else {
                    Self(0, 0, 1)
                }
            }
            FragmentKind::PseudoElement => Self(0, 0, 1),
            FragmentKind::Initial => Self::default(),
        }
    }

    /// Component-wise saturating sum.
    /// Spec: Section 9 — Specificity accumulation across compounds
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(
            self.0.saturating_add(other.0),
            self.1.saturating_add(other.1),
            self.2.saturating_add(other.2),
        )
    }
}
