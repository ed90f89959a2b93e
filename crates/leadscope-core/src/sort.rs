// ABOUTME: Sort keys, direction, and the SortSpec column-toggle state machine.
// ABOUTME: Toggling the active key flips direction; toggling a new key resets to ascending.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::lead::Lead;

/// A sortable column of the lead table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    CompanyName,
    Industry,
    Region,
    RevenueEstimate,
    Score,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// The active sort column and direction. The default matches the dashboard's
/// initial view: score, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: SortKey::Score,
            order: SortOrder::Desc,
        }
    }
}

impl SortSpec {
    /// Apply a column toggle: the same key flips direction, a different key
    /// becomes the active key sorted ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.order = self.order.flipped();
        } else {
            self.key = key;
            self.order = SortOrder::Asc;
        }
    }

    /// Compare two leads under this spec. Missing values sort before present
    /// ones when ascending. Intended for use with a stable sort so ties keep
    /// their fetch order.
    pub fn compare(&self, a: &Lead, b: &Lead) -> Ordering {
        let ordering = match self.key {
            SortKey::CompanyName => a.company_name.cmp(&b.company_name),
            SortKey::Industry => a.industry.cmp(&b.industry),
            SortKey::Region => a.region.cmp(&b.region),
            SortKey::RevenueEstimate => cmp_revenue(a.revenue_estimate, b.revenue_estimate),
            SortKey::Score => a.score.cmp(&b.score),
        };
        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Compare optional revenue figures, None first. NaN compares as equal.
fn cmp_revenue(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
