//! Ranking helpers over fetched live streams
//!
//! Category aggregation for the top categories report and the uniform
//! random pick behind the streamer recommendation.

use std::collections::HashMap;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::types::LiveStream;

/// Per-category accumulator: broadcast count and summed viewers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotals {
    /// Category label shared by the grouped broadcasts
    pub category: String,

    /// Number of live broadcasts in this category
    pub broadcasts: usize,

    /// Sum of concurrent viewers across those broadcasts
    pub viewers: u64,
}

/// Groups streams by category and ranks groups by total viewers
///
/// Accumulators are kept in first-appearance order and the final sort is
/// stable, so two categories with equal viewer totals keep the order in
/// which they first occurred in the input. The tie-break is therefore
/// deterministic for identical input order.
///
/// # Arguments
/// * `streams` - Fetched live streams (category is always non-empty)
///
/// # Returns
/// All category groups, sorted by total viewers descending
pub fn rank_categories(streams: &[LiveStream]) -> Vec<CategoryTotals> {
    let mut totals: Vec<CategoryTotals> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for stream in streams {
        let slot = match slots.get(stream.category.as_str()) {
            Some(&i) => i,
            None => {
                slots.insert(stream.category.as_str(), totals.len());
                totals.push(CategoryTotals {
                    category: stream.category.clone(),
                    broadcasts: 0,
                    viewers: 0,
                });
                totals.len() - 1
            }
        };
        totals[slot].broadcasts += 1;
        totals[slot].viewers += stream.viewers;
    }

    totals.sort_by(|a, b| b.viewers.cmp(&a.viewers));
    totals
}

/// Picks one stream uniformly at random
///
/// # Arguments
/// * `streams` - Candidate streams
/// * `rng` - Random source (pass `rand::thread_rng()` outside tests)
///
/// # Returns
/// `Some(stream)` for non-empty input, `None` for an empty slice
pub fn pick_random<'a, R: Rng + ?Sized>(
    streams: &'a [LiveStream],
    rng: &mut R,
) -> Option<&'a LiveStream> {
    streams.choose(rng)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn stream(streamer: &str, viewers: u64, category: &str) -> LiveStream {
        LiveStream {
            streamer: streamer.to_string(),
            title: format!("{streamer} live"),
            viewers,
            category: category.to_string(),
        }
    }

    #[test]
    fn test_rank_categories_groups_and_sums() {
        let streams = vec![
            stream("a", 100, "Talk"),
            stream("b", 250, "LoL"),
            stream("c", 50, "Talk"),
        ];

        let ranked = rank_categories(&streams);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].category, "LoL");
        assert_eq!(ranked[0].broadcasts, 1);
        assert_eq!(ranked[0].viewers, 250);
        assert_eq!(ranked[1].category, "Talk");
        assert_eq!(ranked[1].broadcasts, 2);
        assert_eq!(ranked[1].viewers, 150);
    }

    #[test]
    fn test_rank_categories_ties_keep_first_appearance_order() {
        let streams = vec![
            stream("a", 100, "Art"),
            stream("b", 100, "Music"),
            stream("c", 100, "Cooking"),
        ];

        let ranked = rank_categories(&streams);
        let order: Vec<&str> = ranked.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(order, vec!["Art", "Music", "Cooking"]);
    }

    #[test]
    fn test_rank_categories_empty_input() {
        let ranked = rank_categories(&[]);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_pick_random_empty() {
        let picked = pick_random(&[], &mut rand::thread_rng());
        assert!(picked.is_none());
    }

    #[test]
    fn test_pick_random_single_is_certain() {
        let streams = vec![stream("only", 42, "Talk")];
        for _ in 0..10 {
            let picked = pick_random(&streams, &mut rand::thread_rng()).unwrap();
            assert_eq!(picked, &streams[0]);
        }
    }

    #[test]
    fn test_pick_random_membership() {
        let streams = vec![
            stream("a", 1, "Talk"),
            stream("b", 2, "LoL"),
            stream("c", 3, "Art"),
        ];
        for _ in 0..50 {
            let picked = pick_random(&streams, &mut rand::thread_rng()).unwrap();
            assert!(streams.contains(picked));
        }
    }

    proptest! {
        #[test]
        fn prop_aggregation_conserves_counts_and_viewers(
            entries in proptest::collection::vec((0usize..5, 0u64..1_000_000), 0..100)
        ) {
            let categories = ["Talk", "LoL", "Minecraft", "Music", "Art"];
            let streams: Vec<LiveStream> = entries
                .iter()
                .map(|&(c, v)| stream("s", v, categories[c]))
                .collect();

            let ranked = rank_categories(&streams);

            let broadcast_sum: usize = ranked.iter().map(|c| c.broadcasts).sum();
            prop_assert_eq!(broadcast_sum, streams.len());

            let viewer_sum: u64 = ranked.iter().map(|c| c.viewers).sum();
            let input_sum: u64 = streams.iter().map(|s| s.viewers).sum();
            prop_assert_eq!(viewer_sum, input_sum);
        }

        #[test]
        fn prop_ranking_is_descending(
            entries in proptest::collection::vec((0usize..5, 0u64..1_000_000), 0..100)
        ) {
            let categories = ["Talk", "LoL", "Minecraft", "Music", "Art"];
            let streams: Vec<LiveStream> = entries
                .iter()
                .map(|&(c, v)| stream("s", v, categories[c]))
                .collect();

            let ranked = rank_categories(&streams);
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].viewers >= pair[1].viewers);
            }
        }
    }
}
