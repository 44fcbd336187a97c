use crate::error::CoreError;
use serde::Serialize;
use std::collections::HashSet;

pub const DEFAULT_SEED_NUMBERS: [&str; 8] = [
    "1234567890",
    "123 456 7891",
    "(123) 456 7892",
    "(123) 456-7893",
    "123-456-7894",
    "123-456-7890",
    "1234567892",
    "(123)456-7892",
];

/// Ordered example values written to an empty store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SeedList(Vec<String>);

impl SeedList {
    pub fn new<I, S>(numbers: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let numbers: Vec<String> = numbers.into_iter().map(Into::into).collect();
        if numbers.is_empty() {
            return Err(CoreError::EmptySeedList);
        }
        if let Some(index) = numbers.iter().position(|value| value.trim().is_empty()) {
            return Err(CoreError::BlankSeedNumber(index));
        }
        let mut seen = HashSet::with_capacity(numbers.len());
        if let Some(index) = numbers.iter().position(|value| !seen.insert(value.as_str())) {
            return Err(CoreError::DuplicateSeedNumber(index));
        }
        Ok(Self(numbers))
    }

    /// A list that seeds nothing. Used when seeding is switched off.
    pub fn disabled() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Default for SeedList {
    fn default() -> Self {
        Self(DEFAULT_SEED_NUMBERS.iter().map(|s| s.to_string()).collect())
    }
}
