// ABOUTME: Defines the Lead record and the ScoreBand presentation tier.
// ABOUTME: Leads arrive as JSON from the scoring API; any field may be null upstream.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// A prospective business contact as returned by the lead API.
///
/// The upstream data set is a CSV with holes, so every field is optional and
/// serializes as `null` when absent. The `score` field is computed server-side
/// and is a 0-100 quality value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub revenue_estimate: Option<f64>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub score: Option<i64>,
}

impl Lead {
    /// Field names in the order the API emits them. CSV export and the table
    /// renderer both rely on this ordering.
    pub const FIELDS: [&'static str; 7] = [
        "company_name",
        "industry",
        "region",
        "revenue_estimate",
        "contact_email",
        "contact_phone",
        "score",
    ];

    /// Create a lead with only a company name set. Remaining fields default to None.
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: Some(company_name.into()),
            industry: None,
            region: None,
            revenue_estimate: None,
            contact_email: None,
            contact_phone: None,
            score: None,
        }
    }

    /// Look up a field by name as a JSON value. Unknown names and missing
    /// values both come back as `Value::Null`.
    pub fn field(&self, name: &str) -> Value {
        match name {
            "company_name" => json!(self.company_name),
            "industry" => json!(self.industry),
            "region" => json!(self.region),
            "revenue_estimate" => json!(self.revenue_estimate),
            "contact_email" => json!(self.contact_email),
            "contact_phone" => json!(self.contact_phone),
            "score" => json!(self.score),
            _ => Value::Null,
        }
    }

    /// Score with a missing value treated as zero, matching how the dashboard
    /// compares and buckets unscored leads.
    pub fn score_or_zero(&self) -> i64 {
        self.score.unwrap_or(0)
    }

    /// Presentation tier for this lead's score.
    pub fn band(&self) -> ScoreBand {
        ScoreBand::of(self.score_or_zero())
    }
}

/// Coarse quality tier derived from a score, used when rendering a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Hot,
    Warm,
    Cold,
}

impl ScoreBand {
    /// Classify a score: 80 and up is Hot, 50 and up is Warm, anything else Cold.
    pub fn of(score: i64) -> Self {
        if score >= 80 {
            ScoreBand::Hot
        } else if score >= 50 {
            ScoreBand::Warm
        } else {
            ScoreBand::Cold
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Hot => "hot",
            ScoreBand::Warm => "warm",
            ScoreBand::Cold => "cold",
        }
    }
}
