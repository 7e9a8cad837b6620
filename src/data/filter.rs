use std::collections::BTreeSet;

use super::loader::RawRow;

// ---------------------------------------------------------------------------
// Region selection: which rows the user asked for
// ---------------------------------------------------------------------------

/// Case-insensitive predicate over the `state` column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionSelection {
    /// Exact case-insensitive match against one region string.
    Single(String),
    /// Membership in a set of lower-cased, trimmed names.
    Multi(BTreeSet<String>),
}

impl RegionSelection {
    /// Single-region mode. The whole input is one region name.
    pub fn single(region: &str) -> Self {
        RegionSelection::Single(region.trim().to_lowercase())
    }

    /// Multi-region mode from a comma-separated list, e.g.
    /// `"new york, washington, virginia"`.
    ///
    /// Empty entries are dropped; they could never match a real region.
    pub fn from_list(list: &str) -> Self {
        Self::from_names(list.split(','))
    }

    pub fn from_names<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        RegionSelection::Multi(
            names
                .into_iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }

    /// Whether a region name (any casing) is selected.
    pub fn matches_region(&self, region: &str) -> bool {
        let region = region.to_lowercase();
        match self {
            RegionSelection::Single(wanted) => !wanted.is_empty() && *wanted == region,
            RegionSelection::Multi(set) => set.contains(&region),
        }
    }

    pub fn matches(&self, row: &RawRow) -> bool {
        self.matches_region(&row.state)
    }

    /// The normalized names, for logging.
    pub fn names(&self) -> Vec<&str> {
        match self {
            RegionSelection::Single(s) if s.is_empty() => Vec::new(),
            RegionSelection::Single(s) => vec![s.as_str()],
            RegionSelection::Multi(set) => set.iter().map(String::as_str).collect(),
        }
    }
}
