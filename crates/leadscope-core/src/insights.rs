// ABOUTME: Bucketed score counts backing the insights histogram.
// ABOUTME: Five fixed ranges partition 0-100; counts always sum to the item count.

use serde::Serialize;

use crate::lead::Lead;

/// One score range of the distribution.
#[derive(Debug, Clone, Copy)]
pub struct ScoreBucket {
    pub label: &'static str,
    pub min: i64,
    pub max: i64,
}

/// The five fixed buckets of the insights chart.
pub const BUCKETS: [ScoreBucket; 5] = [
    ScoreBucket { label: "0-19", min: 0, max: 19 },
    ScoreBucket { label: "20-39", min: 20, max: 39 },
    ScoreBucket { label: "40-59", min: 40, max: 59 },
    ScoreBucket { label: "60-79", min: 60, max: 79 },
    ScoreBucket { label: "80-100", min: 80, max: 100 },
];

/// A bucket label with the number of leads falling in its range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketCount {
    pub range: &'static str,
    pub count: usize,
}

/// Count leads per score bucket, in bucket order. A missing score counts as
/// zero and out-of-range scores are clamped to 0-100, so the bucket counts
/// partition the input: they always sum to the number of leads given.
pub fn score_distribution<'a, I>(leads: I) -> Vec<BucketCount>
where
    I: IntoIterator<Item = &'a Lead>,
{
    let mut counts = [0usize; BUCKETS.len()];
    for lead in leads {
        let score = lead.score_or_zero().clamp(0, 100);
        if let Some(idx) = BUCKETS
            .iter()
            .position(|b| score >= b.min && score <= b.max)
        {
            counts[idx] += 1;
        }
    }
    BUCKETS
        .iter()
        .zip(counts)
        .map(|(bucket, count)| BucketCount {
            range: bucket.label,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(score: i64) -> Lead {
        Lead {
            score: Some(score),
            ..Lead::new("Co")
        }
    }

    #[test]
    fn buckets_cover_boundaries() {
        let leads = vec![
            scored(0),
            scored(19),
            scored(20),
            scored(39),
            scored(40),
            scored(59),
            scored(60),
            scored(79),
            scored(80),
            scored(100),
        ];

        let dist = score_distribution(&leads);
        let counts: Vec<_> = dist.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![2, 2, 2, 2, 2]);
    }

    #[test]
    fn counts_sum_to_item_count() {
        let leads = vec![scored(5), scored(55), scored(55), scored(99), Lead::new("Unscored")];

        let dist = score_distribution(&leads);
        let total: usize = dist.iter().map(|b| b.count).sum();
        assert_eq!(total, leads.len());
    }

    #[test]
    fn missing_score_lands_in_lowest_bucket() {
        let leads = vec![Lead::new("Unscored")];

        let dist = score_distribution(&leads);
        assert_eq!(dist[0], BucketCount { range: "0-19", count: 1 });
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        let leads = vec![scored(-4), scored(130)];

        let dist = score_distribution(&leads);
        assert_eq!(dist[0].count, 1);
        assert_eq!(dist[4].count, 1);
        let total: usize = dist.iter().map(|b| b.count).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn empty_input_yields_all_zero_buckets() {
        let leads: Vec<Lead> = Vec::new();
        let dist = score_distribution(&leads);

        assert_eq!(dist.len(), 5);
        assert!(dist.iter().all(|b| b.count == 0));
    }
}
