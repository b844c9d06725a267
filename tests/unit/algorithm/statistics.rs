//! Tests for search counters

#[cfg(test)]
mod tests {
    use rookstack::algorithm::pruning::PruneRule;
    use rookstack::algorithm::statistics::SearchStatistics;

    // Tests prunes are attributed to the right rule
    // Verified by recording every prune against RowOrder
    #[test]
    fn test_record_prune() {
        let mut statistics = SearchStatistics::new();
        statistics.record_prune(PruneRule::Bound);
        statistics.record_prune(PruneRule::Bound);
        statistics.record_prune(PruneRule::TieBreak);

        assert_eq!(statistics.pruned_by(PruneRule::Bound), 2);
        assert_eq!(statistics.pruned_by(PruneRule::TieBreak), 1);
        assert_eq!(statistics.pruned_by(PruneRule::RowOrder), 0);
        assert_eq!(statistics.total_pruned(), 3);
    }

    // Tests per-rule pairs cover every rule in counter order
    // Verified by filtering zero counts out of per_rule
    #[test]
    fn test_per_rule() {
        let mut statistics = SearchStatistics::new();
        statistics.record_prune(PruneRule::FeasibilityGap);

        let pairs: Vec<_> = statistics.per_rule().collect();
        assert_eq!(pairs.len(), PruneRule::COUNT);
        assert_eq!(pairs.last(), Some(&(PruneRule::FeasibilityGap, 1)));
        assert_eq!(pairs.first(), Some(&(PruneRule::RowOrder, 0)));
    }

    // Tests the JSON field names
    // Verified by removing the camelCase rename
    #[test]
    fn test_serialization() {
        let mut statistics = SearchStatistics::new();
        statistics.ceiling_cuts = 4;
        let json = serde_json::to_value(&statistics).expect("statistics serialize");

        assert_eq!(json["ceilingCuts"], 4);
        assert_eq!(json["pruned"].as_array().map(Vec::len), Some(PruneRule::COUNT));
    }
}
