use std::cmp::Ordering;

/// A comparable view of the field a census sort compares.
#[derive(Debug)]
pub(crate) enum Key<'a> {
    String {
        s: &'a str
    },
    Integer {
        i: u64
    },
    Number {
        n: f64
    },
}

impl Eq for Key<'_> {}

impl PartialEq<Self> for Key<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd<Self> for Key<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Key::String { s }, Key::String { s: o }) => { s.cmp(o) }
            (Key::Integer { i }, Key::Integer { i: o }) => { i.cmp(o) }
            (Key::Number { n }, Key::Number { n: o }) => { n.total_cmp(o) }
            // keys of different variants order as the variants are declared
            (Key::String { .. }, _) => Ordering::Less,
            (_, Key::String { .. }) => Ordering::Greater,
            (Key::Integer { .. }, _) => Ordering::Less,
            (_, Key::Integer { .. }) => Ordering::Greater,
        }
    }
}
