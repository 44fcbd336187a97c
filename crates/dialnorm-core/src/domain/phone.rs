use serde::Serialize;
use std::collections::btree_set;
use std::collections::BTreeSet;

/// Reduce a raw phone value to its canonical digits-only form.
///
/// Only ASCII `0`-`9` survive. Other Unicode digits (fullwidth, Arabic-Indic,
/// superscripts) are dropped along with every separator and symbol.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// True when `raw` is already in canonical form.
pub fn is_normalized(raw: &str) -> bool {
    raw.bytes().all(|b| b.is_ascii_digit())
}

/// Distinct canonical values derived from a batch of raw values.
///
/// Members are produced by [`normalize_phone`] and nothing else, so every
/// member is digits-only. Iteration is in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedSet(BTreeSet<String>);

impl NormalizedSet {
    pub fn from_raw<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            values
                .into_iter()
                .map(|value| normalize_phone(value.as_ref()))
                .collect(),
        )
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.contains(value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a NormalizedSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
