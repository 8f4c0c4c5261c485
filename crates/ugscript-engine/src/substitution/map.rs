// Single-pass association map.

use hashbrown::HashMap;
use regex::{Captures, Regex};
use tracing::warn;

use super::TableError;

/// A priority-ordered `key -> value` association applied in one pass.
///
/// All keys are joined into one alternation. At each position the first key
/// in declared order that matches wins, its value is emitted, and scanning
/// resumes after the matched key. Unmatched characters are copied through.
///
/// When one key is a prefix of another, only declaration order decides which
/// one is tried first. A key listed after one of its own prefixes can never
/// match; such keys are kept (the map's meaning is its declared order) but
/// reported with a warning when the map is built.
#[derive(Debug, Clone)]
pub struct AssociationMap {
    pairs: Vec<(String, String)>,
    index: HashMap<String, usize>,
    pattern: Regex,
}

impl AssociationMap {
    /// Build a map from `(key, value)` pairs, in priority order.
    pub fn new(pairs: &[(&str, &str)]) -> Result<Self, TableError> {
        if pairs.is_empty() {
            return Err(TableError::Empty);
        }

        let mut index = HashMap::with_capacity(pairs.len());
        for (i, (key, _)) in pairs.iter().enumerate() {
            if key.is_empty() {
                return Err(TableError::EmptyToken(i));
            }
            if index.insert(key.to_string(), i).is_some() {
                return Err(TableError::DuplicateKey(key.to_string()));
            }
        }

        for (i, (key, _)) in pairs.iter().enumerate() {
            if let Some((shadow, _)) = pairs[..i].iter().find(|(k, _)| key.starts_with(*k)) {
                warn!(key = *key, shadowed_by = *shadow, "association key can never match");
            }
        }

        let alternation = pairs
            .iter()
            .map(|(key, _)| regex::escape(key))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&alternation)?;

        Ok(Self {
            pairs: pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            index,
            pattern,
        })
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Look up the value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&i| self.pairs[i].1.as_str())
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Substitute in a single left-to-right pass.
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures<'_>| {
                let key = &caps[0];
                self.get(key).unwrap_or(key).to_string()
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_map() {
        assert!(matches!(AssociationMap::new(&[]), Err(TableError::Empty)));
    }

    #[test]
    fn rejects_duplicate_key() {
        let err = AssociationMap::new(&[("a", "x"), ("a", "y")]).unwrap_err();
        assert!(matches!(err, TableError::DuplicateKey(k) if k == "a"));
    }

    #[test]
    fn output_is_not_rescanned() {
        // A sequential table would turn "h" into "x" and then into "ş".
        let map = AssociationMap::new(&[("h", "x"), ("x", "ş")]).unwrap();
        assert_eq!(map.apply("hx"), "xş");
    }

    #[test]
    fn longer_key_declared_first_wins() {
        let map = AssociationMap::new(&[("ng", "ñ"), ("n", "N"), ("g", "G")]).unwrap();
        assert_eq!(map.apply("nang"), "Nañ");
        assert_eq!(map.apply("ngng"), "ññ");
    }

    #[test]
    fn prefix_declared_first_shadows_longer_key() {
        let map = AssociationMap::new(&[("n", "N"), ("ng", "ñ")]).unwrap();
        assert_eq!(map.apply("ng"), "Ng");
    }

    #[test]
    fn keys_with_regex_metacharacters() {
        let map = AssociationMap::new(&[("n'g", "ñ"), (".", "!")]).unwrap();
        assert_eq!(map.apply("men'g."), "meñ!");
    }

    #[test]
    fn unmatched_text_is_copied() {
        let map = AssociationMap::new(&[("q", "ç")]).unwrap();
        assert_eq!(map.apply("salam dunya"), "salam dunya");
        assert_eq!(map.apply(""), "");
    }

    #[test]
    fn get_by_key() {
        let map = AssociationMap::new(&[("w", "v")]).unwrap();
        assert_eq!(map.get("w"), Some("v"));
        assert_eq!(map.get("v"), None);
        assert_eq!(map.len(), 1);
    }
}
