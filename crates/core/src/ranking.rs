//! Presentation-side ranking of local index matches.

use std::cmp::Ordering;

use crate::local_index::LocalIndexRecord;

/// Maximum number of results surfaced to the client.
pub const MAX_RESULTS: usize = 50;

/// Order matches for presentation: ranked records before unranked ones,
/// ranked records by ascending rank, unranked records by descending rating.
/// The sort is stable, so ties keep load order. The list is truncated to
/// [`MAX_RESULTS`].
pub fn rank_records(mut records: Vec<LocalIndexRecord>) -> Vec<LocalIndexRecord> {
    records.sort_by(|a, b| match (a.rank, b.rank) {
        (Some(ra), Some(rb)) => ra.cmp(&rb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => rating_of(b)
            .partial_cmp(&rating_of(a))
            .unwrap_or(Ordering::Equal),
    });
    records.truncate(MAX_RESULTS);
    records
}

fn rating_of(record: &LocalIndexRecord) -> f64 {
    record.average_rating.unwrap_or(f64::NEG_INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemKind;

    fn record(id: &str, rank: Option<u32>, rating: Option<f64>) -> LocalIndexRecord {
        LocalIndexRecord {
            id: id.to_string(),
            name: format!("Game {id}"),
            year_published: None,
            rank,
            average_rating: rating,
            kind: ItemKind::BaseGame,
        }
    }

    #[test]
    fn test_ranked_before_unranked_then_by_rank_then_by_rating() {
        let records = vec![
            record("a", Some(5), None),
            record("b", None, Some(9.0)),
            record("c", Some(2), None),
        ];
        let sorted = rank_records(records);
        let ids: Vec<_> = sorted.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_unranked_sorted_by_rating_descending() {
        let records = vec![
            record("low", None, Some(5.5)),
            record("none", None, None),
            record("high", None, Some(8.1)),
        ];
        let sorted = rank_records(records);
        let ids: Vec<_> = sorted.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "low", "none"]);
    }

    #[test]
    fn test_truncates_to_max_results() {
        let records: Vec<_> = (0..80)
            .map(|i| record(&i.to_string(), Some(i as u32 + 1), None))
            .collect();
        let sorted = rank_records(records);
        assert_eq!(sorted.len(), MAX_RESULTS);
        assert_eq!(sorted[0].rank, Some(1));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let records = vec![
            record("first", None, Some(7.0)),
            record("second", None, Some(7.0)),
        ];
        let sorted = rank_records(records);
        assert_eq!(sorted[0].id, "first");
        assert_eq!(sorted[1].id, "second");
    }
}
