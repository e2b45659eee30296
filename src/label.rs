//! A fixed four-label enumeration and a set of labels stored in one byte.
//!
//! Every label owns one bit of a `u8`, so membership, insertion and removal
//! are single bit operations and the whole set is `Copy`. Bits above the
//! four defined positions are never set.

use bitflags::bitflags;
use itertools::Itertools;
use std::fmt;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct LabelBits: u8 {
        const A = 1 << 0;
        const B = 1 << 1;
        const C = 1 << 2;
        const D = 1 << 3;
    }
}

/// Ordered by declaration: `A < B < C < D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    A,
    B,
    C,
    D,
}

impl Label {
    pub const ALL: [Label; 4] = [Label::A, Label::B, Label::C, Label::D];

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Label::A => "A",
            Label::B => "B",
            Label::C => "C",
            Label::D => "D",
        }
    }

    pub fn from_name(name: &str) -> Option<Label> {
        Self::ALL.into_iter().find(|label| label.name() == name)
    }

    fn bit(self) -> LabelBits {
        match self {
            Label::A => LabelBits::A,
            Label::B => LabelBits::B,
            Label::C => LabelBits::C,
            Label::D => LabelBits::D,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabelSet {
    bits: LabelBits,
}

impl LabelSet {
    /// What the set actually is, stated here instead of asked for at runtime.
    pub const REPRESENTATION: &'static str = "LabelSet (u8 bitmask, one bit per label)";

    pub fn empty() -> Self {
        Self {
            bits: LabelBits::empty(),
        }
    }

    pub fn all() -> Self {
        Self {
            bits: LabelBits::all(),
        }
    }

    pub fn of(labels: &[Label]) -> Self {
        labels.iter().copied().collect()
    }

    /// Rebuilds a set from its raw mask; `None` if any undefined bit is set.
    pub fn from_bits(bits: u8) -> Option<Self> {
        LabelBits::from_bits(bits).map(|bits| Self { bits })
    }

    pub fn bits(&self) -> u8 {
        self.bits.bits()
    }

    /// Returns `true` if the label was not already present.
    pub fn insert(&mut self, label: Label) -> bool {
        let added = !self.contains(label);
        self.bits.insert(label.bit());
        added
    }

    /// Returns `true` if the label was present.
    pub fn remove(&mut self, label: Label) -> bool {
        let present = self.contains(label);
        self.bits.remove(label.bit());
        present
    }

    pub fn contains(&self, label: Label) -> bool {
        self.bits.contains(label.bit())
    }

    /// Names outside the enumeration are never members.
    pub fn contains_name(&self, name: &str) -> bool {
        Label::from_name(name).is_some_and(|label| self.contains(label))
    }

    pub fn len(&self) -> usize {
        self.bits.bits().count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Yields members in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Label> + '_ {
        Label::ALL.into_iter().filter(move |label| self.contains(*label))
    }
}

impl Default for LabelSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<Label> for LabelSet {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut set = LabelSet::empty();
        set.extend(iter);
        set
    }
}

impl Extend<Label> for LabelSet {
    fn extend<I: IntoIterator<Item = Label>>(&mut self, iter: I) {
        for label in iter {
            self.insert(label);
        }
    }
}

impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_set() {
        let set = LabelSet::of(&[Label::A, Label::B, Label::C, Label::D]);

        assert_eq!(set.len(), 4);
        for label in Label::ALL {
            assert!(set.contains(label));
        }
        assert_eq!(set, LabelSet::all());
        assert_eq!(set.bits(), 0b1111);
    }

    #[test]
    fn test_names_outside_enumeration_rejected() {
        let set = LabelSet::all();
        assert!(set.contains_name("A"));
        assert!(set.contains_name("D"));
        assert!(!set.contains_name("E"));
        assert!(!set.contains_name("a"));
        assert!(!set.contains_name(""));
        assert_eq!(Label::from_name("Z"), None);
    }

    #[test]
    fn test_no_duplicates() {
        let set = LabelSet::of(&[Label::B, Label::B, Label::A, Label::B]);
        assert_eq!(set.len(), 2);

        let mut set = set;
        assert!(!set.insert(Label::A));
        assert!(set.insert(Label::C));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_remove() {
        let mut set = LabelSet::all();
        assert!(set.remove(Label::C));
        assert!(!set.remove(Label::C));
        assert!(!set.contains(Label::C));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_iteration_follows_declaration_order() {
        let set = LabelSet::of(&[Label::D, Label::A, Label::C]);
        let order: Vec<Label> = set.iter().collect();
        assert_eq!(order, vec![Label::A, Label::C, Label::D]);
        assert_eq!(set.to_string(), "{A, C, D}");
    }

    #[test]
    fn test_from_bits_rejects_undefined_bits() {
        assert_eq!(LabelSet::from_bits(0b0101).map(|s| s.len()), Some(2));
        assert!(LabelSet::from_bits(0b1_0000).is_none());
        assert!(LabelSet::from_bits(0xFF).is_none());
    }

    #[test]
    fn test_empty() {
        let set = LabelSet::default();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.to_string(), "{}");
    }

    #[test]
    fn test_ordinals() {
        let ordinals: Vec<u8> = Label::ALL.iter().map(|l| l.ordinal()).collect();
        assert_eq!(ordinals, vec![0, 1, 2, 3]);
        assert!(Label::A < Label::D);
    }
}
