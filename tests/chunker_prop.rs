use proptest::prelude::*;
use splitbox::{
    DedupeMode, DelimiterMode, OutputDelimiter, OutputTemplate, PreparationConfig, SplitConfig,
    SplitMode, ValidationMode, format_batch, prepare, split,
};

fn concat(groups: &[splitbox::Group]) -> Vec<String> {
    groups.iter().flat_map(|g| g.items.iter().cloned()).collect()
}

fn packed_len(items: &[String]) -> usize {
    let chars: usize = items.iter().map(|s| s.encode_utf16().count()).sum();
    chars + items.len().saturating_sub(1)
}

proptest! {
    #[test]
    fn items_per_group_fixed_runs(items in prop::collection::vec("[a-z]{1,6}", 0..80),
                                  k in 1i64..20) {
        let groups = split(&items, &SplitConfig::new(SplitMode::ItemsPerGroup, k)).unwrap();
        let k = k as usize;
        prop_assert_eq!(groups.len(), items.len().div_ceil(k));
        if let Some((last, rest)) = groups.split_last() {
            for g in rest {
                prop_assert_eq!(g.items.len(), k);
            }
            prop_assert!(!last.items.is_empty() && last.items.len() <= k);
        }
        prop_assert_eq!(concat(&groups), items);
    }

    #[test]
    fn target_count_balanced(items in prop::collection::vec("[a-z]{1,6}", 0..80),
                             g in 1i64..30) {
        let groups = split(&items, &SplitConfig::new(SplitMode::TargetGroupCount, g)).unwrap();
        prop_assert_eq!(groups.len(), (g as usize).min(items.len()));
        for pair in groups.windows(2) {
            prop_assert!(pair[0].items.len() >= pair[1].items.len());
        }
        if let (Some(first), Some(last)) = (groups.first(), groups.last()) {
            prop_assert!(first.items.len() - last.items.len() <= 1);
        }
        prop_assert_eq!(concat(&groups), items);
    }

    #[test]
    fn max_chars_packs_greedily(items in prop::collection::vec("[a-z]{1,50}", 0..80),
                                m in 1i64..40) {
        let m = m as usize;
        let groups = split(&items, &SplitConfig::new(SplitMode::MaxCharsPerGroup, m as i64)).unwrap();
        for g in &groups {
            if g.items.len() > 1 {
                prop_assert!(packed_len(&g.items) <= m);
            }
        }
        // Each boundary exists because the next item would not have fit.
        for pair in groups.windows(2) {
            prop_assert!(packed_len(&pair[0].items) + 1 + packed_len(&pair[1].items[..1]) > m);
        }
        prop_assert_eq!(concat(&groups), items);
    }

    #[test]
    fn indexes_are_sequential(items in prop::collection::vec("[a-z]{1,6}", 0..40),
                              k in 1i64..10) {
        let groups = split(&items, &SplitConfig::new(SplitMode::ItemsPerGroup, k)).unwrap();
        for (i, g) in groups.iter().enumerate() {
            prop_assert_eq!(g.index, i);
        }
    }

    #[test]
    fn non_positive_values_always_rejected(items in prop::collection::vec("[a-z]{1,6}", 0..10),
                                           v in i64::MIN..1) {
        for mode in [SplitMode::ItemsPerGroup, SplitMode::TargetGroupCount, SplitMode::MaxCharsPerGroup] {
            prop_assert!(split(&items, &SplitConfig::new(mode, v)).is_err());
        }
    }

    #[test]
    fn dedupe_is_idempotent(items in prop::collection::vec("[a-cA-C ,]{0,4}", 0..60),
                            insensitive in any::<bool>()) {
        let config = PreparationConfig {
            delimiter: DelimiterMode::Newline,
            dedupe_mode: if insensitive { DedupeMode::CaseInsensitive } else { DedupeMode::CaseSensitive },
            validation_mode: ValidationMode::None,
            custom_pattern: None,
        };
        let first = prepare(&items.join("\n"), &config).unwrap();
        let second = prepare(&first.items.join("\n"), &config).unwrap();
        prop_assert_eq!(second.stats.duplicates_removed, 0);
        prop_assert_eq!(second.items, first.items);
    }

    #[test]
    fn counters_balance(raw in "[a-c \\n,\\t-]{0,80}") {
        let config = PreparationConfig {
            delimiter: DelimiterMode::Auto,
            dedupe_mode: DedupeMode::CaseSensitive,
            validation_mode: ValidationMode::Alphanumeric,
            custom_pattern: None,
        };
        let prepared = prepare(&raw, &config).unwrap();
        let s = &prepared.stats;
        prop_assert_eq!(
            prepared.items.len(),
            s.raw_token_count - s.empty_removed - s.invalid_removed - s.duplicates_removed
        );
        prop_assert!(s.invalid_examples.len() <= 5);
    }

    #[test]
    fn plain_newline_round_trips(items in prop::collection::vec("[^\\n]{0,10}", 1..30)) {
        let text = format_batch(&items, OutputTemplate::Plain, OutputDelimiter::Newline);
        let back: Vec<String> = text.split('\n').map(str::to_string).collect();
        prop_assert_eq!(back, items);
    }
}
