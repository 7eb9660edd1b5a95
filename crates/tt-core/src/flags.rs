use std::collections::BTreeSet;
use std::fmt;

/// The set of story flags currently raised.
///
/// A flag is either present (on) or absent (off); there is no stored `false`.
/// Flag names are opaque strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSet {
    flags: BTreeSet<String>,
}

impl FlagSet {
    /// Create an empty flag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a flag is raised.
    pub fn contains(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    /// True when every listed flag is raised and the list is non-empty.
    ///
    /// An empty requirement never matches.
    pub fn contains_all<S: AsRef<str>>(&self, required: &[S]) -> bool {
        !required.is_empty() && required.iter().all(|f| self.contains(f.as_ref()))
    }

    /// True when at least one of the listed flags is raised.
    pub fn contains_any<S: AsRef<str>>(&self, alternatives: &[S]) -> bool {
        alternatives.iter().any(|f| self.contains(f.as_ref()))
    }

    /// Number of raised flags.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// True when no flag is raised.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Iterate over raised flags in name order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.flags.iter().map(String::as_str)
    }

    /// Compute the flag set that results from clearing and then raising flags.
    ///
    /// Clears run first, so a flag named in both lists ends up raised.
    /// Clearing an absent flag and raising a present one are no-ops.
    pub fn apply<S: AsRef<str>>(&self, to_clear: &[S], to_set: &[S]) -> FlagSet {
        let mut flags = self.flags.clone();
        for flag in to_clear {
            flags.remove(flag.as_ref());
        }
        for flag in to_set {
            flags.insert(flag.as_ref().to_string());
        }
        FlagSet { flags }
    }
}

impl<S: Into<String>> FromIterator<S> for FlagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            flags: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

/// Split a comma-separated flag field into flag names.
///
/// Tokens are trimmed and empty tokens dropped, so a blank field yields an
/// empty list.
pub fn parse_flag_list(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
