// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use connect_app::{
    CampaignSortKey, CampaignStatus, CategoryFilter, Creator, FilterState, ListQuery, Niche,
    OutreachStatus, Record, SortDirection, SortSpec, filter, scale_to_chart,
};
use connect_testkit::InfluencerFaker;

fn is_subsequence<T: PartialEq>(subset: &[&T], full: &[T]) -> bool {
    let mut remaining = full.iter();
    subset
        .iter()
        .all(|wanted| remaining.any(|candidate| candidate == *wanted))
}

fn category_filters<R: Record>() -> Vec<CategoryFilter<R::Category>> {
    CategoryFilter::chips()
}

#[test]
fn all_with_empty_search_returns_everything_in_order() {
    for seed in 1_u64..10 {
        let mut faker = InfluencerFaker::new(seed);
        let creators = faker.creators(40);
        let visible = filter(&creators, CategoryFilter::All, "");
        assert_eq!(visible.len(), creators.len());
        assert!(visible.iter().zip(&creators).all(|(a, b)| *a == b));
    }
}

#[test]
fn results_are_ordered_subsequences_matching_both_predicates() {
    for seed in 1_u64..25 {
        let mut faker = InfluencerFaker::new(seed);
        let creators = faker.creators(60);
        let needle = faker.search_needle();
        let lowered = needle.to_lowercase();

        for chip in category_filters::<Creator>() {
            let visible = filter(&creators, chip, &needle);
            assert!(is_subsequence(&visible, &creators), "seed {seed}");
            for creator in &visible {
                assert!(chip.matches(creator.niche));
                assert!(
                    creator.name.to_lowercase().contains(&lowered)
                        || creator.username.to_lowercase().contains(&lowered)
                );
            }
            let expected = creators
                .iter()
                .filter(|creator| chip.matches(creator.niche))
                .filter(|creator| {
                    creator.name.to_lowercase().contains(&lowered)
                        || creator.username.to_lowercase().contains(&lowered)
                })
                .count();
            assert_eq!(visible.len(), expected, "seed {seed} needle {needle}");
        }
    }
}

#[test]
fn filtering_a_filtered_view_changes_nothing() {
    for seed in 1_u64..15 {
        let mut faker = InfluencerFaker::new(seed);
        let threads = faker.outreach_threads(50);
        let state = FilterState::new(
            CategoryFilter::Only(OutreachStatus::Replied),
            faker.search_needle(),
        );
        let once = state.apply(&threads);
        let twice = state.apply(&once);
        assert_eq!(once.len(), twice.len());
        assert!(once.iter().zip(&twice).all(|(a, b)| a == *b));
    }
}

#[test]
fn search_case_does_not_matter() {
    let mut faker = InfluencerFaker::new(7);
    let campaigns = faker.campaigns(80);
    for needle in ["summer", "SUMMER", "SuMmEr"] {
        let visible = filter(&campaigns, CategoryFilter::All, needle);
        assert!(
            visible
                .iter()
                .all(|campaign| campaign.name.to_lowercase().contains("summer"))
        );
        assert_eq!(
            visible.len(),
            filter(&campaigns, CategoryFilter::All, "summer").len()
        );
    }
}

#[test]
fn chipless_status_is_only_reachable_through_all() {
    let mut faker = InfluencerFaker::new(11);
    let threads = faker.outreach_threads(100);
    let opened = threads
        .iter()
        .filter(|thread| thread.status == OutreachStatus::Opened)
        .count();
    assert!(opened > 0);

    let through_chips: usize = CategoryFilter::<OutreachStatus>::chips()
        .into_iter()
        .filter(|chip| *chip != CategoryFilter::All)
        .map(|chip| filter(&threads, chip, "").len())
        .sum();
    assert_eq!(through_chips + opened, threads.len());
}

#[test]
fn unknown_or_empty_inputs_yield_empty_views() {
    let creators: Vec<Creator> = Vec::new();
    assert!(filter(&creators, CategoryFilter::Only(Niche::Tech), "x").is_empty());

    let mut faker = InfluencerFaker::new(3);
    let creators = faker.creators(30);
    assert!(filter(&creators, CategoryFilter::All, "no creator is called this").is_empty());
}

#[test]
fn sorting_keeps_filtered_membership() {
    let mut faker = InfluencerFaker::new(19);
    let campaigns = faker.campaigns(60);
    let query = ListQuery {
        filter: FilterState::new(CategoryFilter::Only(CampaignStatus::Active), ""),
        sort: Some(SortSpec {
            key: CampaignSortKey::StartDate,
            direction: SortDirection::Desc,
        }),
    };
    let unsorted = query.filter.apply(&campaigns);
    let sorted = query.apply(&campaigns);
    assert_eq!(sorted.len(), unsorted.len());
    assert!(
        sorted
            .windows(2)
            .all(|pair| pair[0].start_date >= pair[1].start_date)
    );
    assert!(
        sorted
            .iter()
            .all(|campaign| campaign.status == CampaignStatus::Active)
    );
}

#[test]
fn chart_heights_stay_within_target() {
    let mut faker = InfluencerFaker::new(23);
    let values: Vec<f64> = (0..12).map(|_| faker.int_n(5_000) as f64).collect();
    let heights = scale_to_chart(&values, 120.0);
    assert_eq!(heights.len(), values.len());
    assert!(heights.iter().all(|height| (0.0..=120.0).contains(height)));
    if values.iter().any(|value| *value > 0.0) {
        assert!(heights.iter().any(|height| *height == 120.0));
    }
}
