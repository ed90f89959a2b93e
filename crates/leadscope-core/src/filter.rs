// ABOUTME: Defines LeadFilter, the industry/region/min-score criteria from the filter bar.
// ABOUTME: Industry and region are case-insensitive exact matches; min_score is inclusive.

use serde::{Deserialize, Serialize};

use crate::lead::Lead;

/// Filter criteria for the lead list. An unset or blank industry/region places
/// no constraint; `min_score` keeps leads whose score is at least the given
/// value, with a missing score counting as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadFilter {
    pub industry: Option<String>,
    pub region: Option<String>,
    pub min_score: i64,
}

impl LeadFilter {
    /// True when the lead passes all three criteria.
    pub fn matches(&self, lead: &Lead) -> bool {
        text_matches(self.industry.as_deref(), lead.industry.as_deref())
            && text_matches(self.region.as_deref(), lead.region.as_deref())
            && lead.score_or_zero() >= self.min_score
    }

    /// True when no criterion is set, i.e. every lead passes.
    pub fn is_empty(&self) -> bool {
        fn blank(v: &Option<String>) -> bool {
            v.as_deref().is_none_or(|s| s.is_empty())
        }
        blank(&self.industry) && blank(&self.region) && self.min_score <= 0
    }

}

/// Case-insensitive exact match; an unset or blank criterion always passes.
fn text_matches(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted {
        None | Some("") => true,
        Some(w) => actual.is_some_and(|a| a.to_lowercase() == w.to_lowercase()),
    }
}
