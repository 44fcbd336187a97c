use crate::domain::NormalizedSet;
use serde::Serialize;
use std::collections::HashSet;

/// What a reconcile pass will do with a batch of fetched raw values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconcilePlan {
    pub fetched: Vec<String>,
    pub normalized: NormalizedSet,
    /// Distinct fetched values not already canonical, in first-seen order.
    pub stale: Vec<String>,
}

impl ReconcilePlan {
    /// Canonical values the insert phase will attempt, in sorted order.
    pub fn inserts(&self) -> impl Iterator<Item = &str> {
        self.normalized.iter().map(String::as_str)
    }

    pub fn is_noop(&self) -> bool {
        self.stale.is_empty()
    }
}

pub fn plan(fetched: Vec<String>) -> ReconcilePlan {
    let normalized = NormalizedSet::from_raw(&fetched);
    let mut seen = HashSet::new();
    let stale = fetched
        .iter()
        .filter(|value| !normalized.contains(value.as_str()))
        .filter(|value| seen.insert(value.as_str()))
        .cloned()
        .collect();

    ReconcilePlan {
        fetched,
        normalized,
        stale,
    }
}
