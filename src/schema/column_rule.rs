use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Predicate over a CSV header name.
///
/// Serialized externally tagged, e.g. `{"contains": "href"}`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRule {
    Exact(String),
    Contains(String),
    Prefix(String),
    Suffix(String),
}

impl ColumnRule {
    pub fn exact(name: &str) -> Self {
        ColumnRule::Exact(name.to_owned())
    }

    pub fn contains(fragment: &str) -> Self {
        ColumnRule::Contains(fragment.to_owned())
    }

    pub fn prefix(prefix: &str) -> Self {
        ColumnRule::Prefix(prefix.to_owned())
    }

    pub fn suffix(suffix: &str) -> Self {
        ColumnRule::Suffix(suffix.to_owned())
    }

    pub fn matches(&self, header: &str) -> bool {
        let header = header.trim();
        match self {
            ColumnRule::Exact(name) => header == name,
            ColumnRule::Contains(fragment) => header.contains(fragment.as_str()),
            ColumnRule::Prefix(prefix) => header.starts_with(prefix.as_str()),
            ColumnRule::Suffix(suffix) => header.ends_with(suffix.as_str()),
        }
    }

    /// Index of the column selected by `rules`: the first rule that matches
    /// any header wins, header order breaks ties.
    pub fn resolve<S: AsRef<str>>(rules: &[ColumnRule], headers: &[S]) -> Option<usize> {
        rules
            .iter()
            .find_map(|rule| headers.iter().position(|h| rule.matches(h.as_ref())))
    }

    /// Indices of every column matched by `rules`, in priority order and
    /// without duplicates.
    pub fn resolve_all<S: AsRef<str>>(rules: &[ColumnRule], headers: &[S]) -> Vec<usize> {
        rules
            .iter()
            .flat_map(move |rule| {
                headers
                    .iter()
                    .positions(move |h| rule.matches(h.as_ref()))
            })
            .unique()
            .collect()
    }
}

impl std::fmt::Display for ColumnRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnRule::Exact(name) => write!(f, "== '{name}'"),
            ColumnRule::Contains(fragment) => write!(f, "contains '{fragment}'"),
            ColumnRule::Prefix(prefix) => write!(f, "starts with '{prefix}'"),
            ColumnRule::Suffix(suffix) => write!(f, "ends with '{suffix}'"),
        }
    }
}
