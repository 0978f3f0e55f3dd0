use std::fmt;

use serde::{Deserialize, Serialize};

/// A single SQL privilege that can be granted on a view.
///
/// Variants are declared in canonical order; sets always render in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum PrivilegeKind {
    #[serde(rename = "SELECT")]
    Select,
    #[serde(rename = "INSERT")]
    Insert,
    #[serde(rename = "UPDATE")]
    Update,
    #[serde(rename = "DELETE")]
    Delete,
}

impl PrivilegeKind {
    pub const ALL: [PrivilegeKind; 4] = [
        PrivilegeKind::Select,
        PrivilegeKind::Insert,
        PrivilegeKind::Update,
        PrivilegeKind::Delete,
    ];

    const fn bit(self) -> u8 {
        match self {
            PrivilegeKind::Select => 1 << 0,
            PrivilegeKind::Insert => 1 << 1,
            PrivilegeKind::Update => 1 << 2,
            PrivilegeKind::Delete => 1 << 3,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PrivilegeKind::Select => "SELECT",
            PrivilegeKind::Insert => "INSERT",
            PrivilegeKind::Update => "UPDATE",
            PrivilegeKind::Delete => "DELETE",
        }
    }

    /// Accepts the long SQL keyword or its single-letter abbreviation, case-insensitively.
    pub fn parse(s: &str) -> Option<PrivilegeKind> {
        match s.to_ascii_uppercase().as_str() {
            "SELECT" | "S" => Some(PrivilegeKind::Select),
            "INSERT" | "I" => Some(PrivilegeKind::Insert),
            "UPDATE" | "U" => Some(PrivilegeKind::Update),
            "DELETE" | "D" => Some(PrivilegeKind::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for PrivilegeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for PrivilegeKind {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s).ok_or_else(|| format!("unknown privilege kind '{s}'"))
    }
}

/// PrivilegeSet is a bitmask of granted privilege kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<PrivilegeKind>", into = "Vec<PrivilegeKind>")]
pub struct PrivilegeSet(u8);

impl PrivilegeSet {
    pub const EMPTY: PrivilegeSet = PrivilegeSet(0);

    const MASK: u8 = 0b1111;

    #[must_use]
    pub const fn of(kind: PrivilegeKind) -> Self {
        Self(kind.bit())
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn has(self, kind: PrivilegeKind) -> bool {
        self.0 & kind.bit() != 0
    }

    #[must_use]
    pub const fn union(self, other: PrivilegeSet) -> PrivilegeSet {
        PrivilegeSet(self.0 | other.0)
    }

    #[must_use]
    pub const fn difference(self, other: PrivilegeSet) -> PrivilegeSet {
        PrivilegeSet(self.0 & !other.0)
    }

    #[must_use]
    pub const fn with(self, kind: PrivilegeKind) -> PrivilegeSet {
        self.union(Self::of(kind))
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Kinds in canonical order.
    pub fn iter(self) -> impl Iterator<Item = PrivilegeKind> {
        PrivilegeKind::ALL.into_iter().filter(move |k| self.has(*k))
    }

    #[must_use]
    pub fn to_kinds(self) -> Vec<PrivilegeKind> {
        self.iter().collect()
    }

    #[must_use]
    pub fn to_strings(self) -> Vec<&'static str> {
        self.iter().map(PrivilegeKind::as_str).collect()
    }
}

impl fmt::Display for PrivilegeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.to_strings().join(", "))
    }
}

impl FromIterator<PrivilegeKind> for PrivilegeSet {
    fn from_iter<I: IntoIterator<Item = PrivilegeKind>>(iter: I) -> Self {
        iter.into_iter().fold(PrivilegeSet::EMPTY, PrivilegeSet::with)
    }
}

impl From<Vec<PrivilegeKind>> for PrivilegeSet {
    fn from(kinds: Vec<PrivilegeKind>) -> Self {
        kinds.into_iter().collect()
    }
}

impl From<PrivilegeSet> for Vec<PrivilegeKind> {
    fn from(set: PrivilegeSet) -> Self {
        set.to_kinds()
    }
}

// Unknown bits read back from storage are dropped.
impl From<i64> for PrivilegeSet {
    fn from(bits: i64) -> Self {
        Self((bits as u8) & Self::MASK)
    }
}

impl From<PrivilegeSet> for i64 {
    fn from(set: PrivilegeSet) -> Self {
        i64::from(set.0)
    }
}
