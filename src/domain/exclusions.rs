use std::collections::HashSet;

/// Symmetric set of forbidden pairings. Excluding `(a, b)` also excludes
/// `(b, a)`; drawing oneself is always forbidden and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    pairs: HashSet<(String, String)>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, first: impl Into<String>, second: impl Into<String>) -> bool {
        let (first, second) = (first.into(), second.into());
        if first == second {
            return false;
        }
        self.pairs.insert(Self::key(first, second))
    }

    pub fn is_excluded(&self, giver: &str, recipient: &str) -> bool {
        if giver == recipient {
            return false;
        }
        self.pairs
            .contains(&Self::key(giver.to_string(), recipient.to_string()))
    }

    /// Every name mentioned by at least one pair.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pairs
            .iter()
            .flat_map(|(a, b)| [a.as_str(), b.as_str()])
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn key(first: String, second: String) -> (String, String) {
        if first <= second {
            (first, second)
        } else {
            (second, first)
        }
    }
}

impl<A: Into<String>, B: Into<String>> FromIterator<(A, B)> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = (A, B)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (first, second) in iter {
            set.insert(first, second);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusion_is_symmetric() {
        let exclusions: ExclusionSet = [("Martine", "Cameron")].into_iter().collect();

        assert!(exclusions.is_excluded("Martine", "Cameron"));
        assert!(exclusions.is_excluded("Cameron", "Martine"));
        assert!(!exclusions.is_excluded("Martine", "Jan"));
    }

    #[test]
    fn test_duplicate_directions_collapse() {
        let exclusions: ExclusionSet = [("Jan", "Pierre"), ("Pierre", "Jan")].into_iter().collect();
        assert_eq!(exclusions.len(), 1);
    }

    #[test]
    fn test_self_pairs_are_not_stored() {
        let mut exclusions = ExclusionSet::new();
        assert!(!exclusions.insert("Phil", "Phil"));
        assert!(exclusions.is_empty());
        assert!(!exclusions.is_excluded("Phil", "Phil"));
    }
}
