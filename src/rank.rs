//! Structured filtering and ranking of scored records.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::corpus::{Corpus, JobRecord};
use crate::error::RecommendError;

/// Attribute filters: attribute name to expected value.
///
/// An array value keeps records whose attribute is a member of it; any
/// other value demands equality. Keys compose with AND semantics.
pub type Filters = Map<String, Value>;

/// One ranked result: the job record plus its relevance score.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub job: JobRecord,
    pub score: f32,
}

/// Attach each score to its record, filter, sort by descending score and
/// truncate to `top_k`.
///
/// The sort is stable, so equal scores keep their corpus order. A filter
/// key that no record in the corpus carries is rejected with
/// `InvalidFilter`; records that merely lack the attribute drop out of the
/// result instead.
pub fn filter_and_rank(
    corpus: &Corpus,
    scores: &[f32],
    filters: Option<&Filters>,
    top_k: usize,
) -> Result<Vec<Recommendation>, RecommendError> {
    debug_assert_eq!(corpus.len(), scores.len());

    if let Some(filters) = filters {
        for key in filters.keys() {
            if !corpus.has_attribute(key) {
                return Err(RecommendError::InvalidFilter(key.clone()));
            }
        }
    }

    let records = corpus.records();
    let mut ranked: Vec<(usize, f32)> = scores
        .iter()
        .copied()
        .enumerate()
        .filter(|&(idx, _)| match filters {
            Some(filters) => matches_filters(&records[idx], filters),
            None => true,
        })
        .collect();

    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(top_k);

    Ok(ranked
        .into_iter()
        .map(|(idx, score)| Recommendation {
            job: records[idx].clone(),
            score,
        })
        .collect())
}

fn matches_filters(record: &JobRecord, filters: &Filters) -> bool {
    filters.iter().all(|(key, expected)| {
        match record.attribute(key) {
            Some(actual) => match expected {
                Value::Array(options) => options.contains(&actual),
                _ => actual == *expected,
            },
            None => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_corpus() -> Corpus {
        let records = vec![
            JobRecord {
                id: "J1".to_string(),
                industry: "analytics".to_string(),
                level: "entry".to_string(),
                ..JobRecord::default()
            },
            JobRecord {
                id: "J2".to_string(),
                industry: "software".to_string(),
                level: "entry".to_string(),
                ..JobRecord::default()
            },
            JobRecord {
                id: "J3".to_string(),
                industry: "ai".to_string(),
                level: "internship".to_string(),
                ..JobRecord::default()
            },
        ];
        Corpus::from_records(records)
    }

    fn ids(results: &[Recommendation]) -> Vec<&str> {
        results.iter().map(|r| r.job.id.as_str()).collect()
    }

    #[test]
    fn sorts_by_descending_score() {
        let corpus = sample_corpus();
        let results = filter_and_rank(&corpus, &[0.1, 0.9, 0.5], None, 10).unwrap();
        assert_eq!(ids(&results), vec!["J2", "J3", "J1"]);
    }

    #[test]
    fn equal_scores_keep_corpus_order() {
        let corpus = sample_corpus();
        let results = filter_and_rank(&corpus, &[0.5, 0.5, 0.5], None, 10).unwrap();
        assert_eq!(ids(&results), vec!["J1", "J2", "J3"]);
    }

    #[test]
    fn truncates_to_top_k() {
        let corpus = sample_corpus();
        let results = filter_and_rank(&corpus, &[0.1, 0.9, 0.5], None, 2).unwrap();
        assert_eq!(results.len(), 2);
        assert!(filter_and_rank(&corpus, &[0.1, 0.9, 0.5], None, 0)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn equality_filter_keeps_matching_records() {
        let corpus = sample_corpus();
        let filters = json!({"level": "entry"});
        let results =
            filter_and_rank(&corpus, &[0.1, 0.9, 0.5], filters.as_object(), 10).unwrap();
        assert_eq!(ids(&results), vec!["J2", "J1"]);
    }

    #[test]
    fn membership_filter_accepts_any_listed_value() {
        let corpus = sample_corpus();
        let filters = json!({"industry": ["software", "ai"]});
        let results =
            filter_and_rank(&corpus, &[0.1, 0.9, 0.5], filters.as_object(), 10).unwrap();
        assert_eq!(ids(&results), vec!["J2", "J3"]);
    }

    #[test]
    fn filters_compose_with_and_semantics() {
        let corpus = sample_corpus();
        let filters = json!({"industry": ["analytics", "ai"], "level": "entry"});
        let results =
            filter_and_rank(&corpus, &[0.1, 0.9, 0.5], filters.as_object(), 10).unwrap();
        assert_eq!(ids(&results), vec!["J1"]);
    }

    #[test]
    fn unknown_filter_key_is_rejected() {
        let corpus = sample_corpus();
        let filters = json!({"salary": 100_000});
        let err =
            filter_and_rank(&corpus, &[0.1, 0.9, 0.5], filters.as_object(), 10).unwrap_err();
        assert!(matches!(err, RecommendError::InvalidFilter(key) if key == "salary"));
    }

    #[test]
    fn records_lacking_an_extra_attribute_drop_out() {
        let mut remote = JobRecord {
            id: "J9".to_string(),
            ..JobRecord::default()
        };
        remote.extra.insert("remote".to_string(), json!(true));
        let corpus = Corpus::from_records(vec![
            JobRecord {
                id: "J8".to_string(),
                ..JobRecord::default()
            },
            remote,
        ]);
        let filters = json!({"remote": true});
        let results = filter_and_rank(&corpus, &[0.9, 0.1], filters.as_object(), 10).unwrap();
        assert_eq!(ids(&results), vec!["J9"]);
    }
}
