// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Summary strips shown above the campaign and outreach lists. These are
//! always computed over the full collection, never the filtered view.

use serde::Serialize;

use crate::format::parse_display_number;
use crate::listview::{Category, CategoryFilter, Record};
use crate::metrics::{DerivedMetrics, MetricSpec, MetricValue, derive_metrics};
use crate::model::{Campaign, CampaignStatus, OutreachStatus, OutreachThread};

pub const ACTIVE_CAMPAIGNS: &str = "Active Campaigns";
pub const TOTAL_CREATORS: &str = "Total Creators";
pub const TOTAL_REACH: &str = "Total Reach";
pub const REPLIES: &str = "Replies";
pub const ACCEPTED: &str = "Accepted";
pub const SUCCESS_RATE: &str = "Success Rate";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignSummary {
    pub active: usize,
    pub total_creators: f64,
    pub total_reach: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutreachSummary {
    pub replies: usize,
    pub accepted: usize,
    pub success_rate: u32,
}

fn campaign_specs() -> Vec<MetricSpec<'static, Campaign>> {
    vec![
        MetricSpec::count(ACTIVE_CAMPAIGNS, |campaign: &Campaign| {
            campaign.status == CampaignStatus::Active
        }),
        MetricSpec::sum(TOTAL_CREATORS, |campaign: &Campaign| {
            f64::from(campaign.creators)
        }),
        MetricSpec::sum(TOTAL_REACH, |campaign: &Campaign| {
            parse_display_number(&campaign.reach).unwrap_or(0.0)
        }),
    ]
}

fn outreach_specs() -> Vec<MetricSpec<'static, OutreachThread>> {
    vec![
        MetricSpec::count(REPLIES, |thread: &OutreachThread| {
            thread.status == OutreachStatus::Replied
        }),
        MetricSpec::count(ACCEPTED, |thread: &OutreachThread| {
            thread.status == OutreachStatus::Accepted
        }),
        MetricSpec::ratio(
            SUCCESS_RATE,
            |thread: &OutreachThread| thread.status == OutreachStatus::Accepted,
            |_: &OutreachThread| true,
        ),
    ]
}

pub fn campaign_metrics(campaigns: &[Campaign]) -> DerivedMetrics {
    derive_metrics(campaigns, &campaign_specs())
}

pub fn outreach_metrics(threads: &[OutreachThread]) -> DerivedMetrics {
    derive_metrics(threads, &outreach_specs())
}

pub fn campaign_summary(campaigns: &[Campaign]) -> CampaignSummary {
    let metrics = campaign_metrics(campaigns);
    CampaignSummary {
        active: count_of(&metrics, ACTIVE_CAMPAIGNS),
        total_creators: metrics
            .get(TOTAL_CREATORS)
            .and_then(MetricValue::as_sum)
            .unwrap_or(0.0),
        total_reach: metrics
            .get(TOTAL_REACH)
            .and_then(MetricValue::as_sum)
            .unwrap_or(0.0),
    }
}

pub fn outreach_summary(threads: &[OutreachThread]) -> OutreachSummary {
    let metrics = outreach_metrics(threads);
    OutreachSummary {
        replies: count_of(&metrics, REPLIES),
        accepted: count_of(&metrics, ACCEPTED),
        success_rate: metrics
            .get(SUCCESS_RATE)
            .and_then(MetricValue::as_percent)
            .unwrap_or(0),
    }
}

fn count_of(metrics: &DerivedMetrics, name: &str) -> usize {
    metrics
        .get(name)
        .and_then(MetricValue::as_count)
        .unwrap_or(0)
}

/// Record count behind each chip, "All" first.
pub fn category_counts<R: Record>(records: &[R]) -> Vec<(CategoryFilter<R::Category>, usize)> {
    CategoryFilter::chips()
        .into_iter()
        .map(|chip| {
            let count = records
                .iter()
                .filter(|record| chip.matches(record.category()))
                .count();
            (chip, count)
        })
        .collect()
}

/// `"All (5)"`, `"Sent (1)"`.
pub fn counted_label<C: Category>(chip: CategoryFilter<C>, count: usize) -> String {
    format!("{} ({count})", chip.label())
}

#[cfg(test)]
mod tests {
    use super::{
        ACTIVE_CAMPAIGNS, TOTAL_REACH, campaign_metrics, campaign_summary, category_counts,
        counted_label, outreach_summary,
    };
    use crate::ids::{CampaignId, OutreachId};
    use crate::listview::CategoryFilter;
    use crate::model::{Campaign, CampaignStatus, OutreachStatus, OutreachThread};
    use time::macros::date;

    fn campaign(id: i64, status: CampaignStatus, creators: u32, reach: &str) -> Campaign {
        Campaign {
            id: CampaignId::new(id),
            name: format!("Campaign {id}"),
            status,
            budget: "$1,000".to_owned(),
            creators,
            start_date: date!(2024 - 06 - 01),
            end_date: date!(2024 - 06 - 30),
            reach: reach.to_owned(),
            engagement: "4.0%".to_owned(),
            progress: 50,
        }
    }

    fn thread(id: i64, status: OutreachStatus) -> OutreachThread {
        OutreachThread {
            id: OutreachId::new(id),
            creator_name: format!("Creator {id}"),
            creator_username: format!("@creator{id}"),
            creator_avatar_url: String::new(),
            campaign: "Launch".to_owned(),
            status,
            last_message: "hello".to_owned(),
            timestamp: "1d ago".to_owned(),
            unread_count: 0,
        }
    }

    #[test]
    fn campaign_summary_sums_full_collection() {
        let campaigns = vec![
            campaign(1, CampaignStatus::Active, 8, "245K"),
            campaign(2, CampaignStatus::Review, 12, "380K"),
            campaign(3, CampaignStatus::Draft, 5, "0"),
            campaign(4, CampaignStatus::Complete, 15, "520K"),
        ];
        let summary = campaign_summary(&campaigns);
        assert_eq!(summary.active, 1);
        assert_eq!(summary.total_creators, 40.0);
        assert_eq!(summary.total_reach, 1_145_000.0);

        let metrics = campaign_metrics(&campaigns);
        assert_eq!(
            metrics.get(TOTAL_REACH).map(|value| value.display()),
            Some("1.1M".to_owned())
        );
        assert_eq!(
            metrics.get(ACTIVE_CAMPAIGNS).map(|value| value.display()),
            Some("1".to_owned())
        );
    }

    #[test]
    fn unparseable_reach_counts_as_zero() {
        let campaigns = vec![campaign(1, CampaignStatus::Draft, 2, "N/A")];
        assert_eq!(campaign_summary(&campaigns).total_reach, 0.0);
    }

    #[test]
    fn outreach_success_rate_uses_every_thread() {
        let threads = vec![
            thread(1, OutreachStatus::Replied),
            thread(2, OutreachStatus::Accepted),
            thread(3, OutreachStatus::Opened),
            thread(4, OutreachStatus::Declined),
            thread(5, OutreachStatus::Sent),
        ];
        let summary = outreach_summary(&threads);
        assert_eq!(summary.replies, 1);
        assert_eq!(summary.accepted, 1);
        assert_eq!(summary.success_rate, 20);
    }

    #[test]
    fn empty_outreach_has_zero_rate() {
        let summary = outreach_summary(&[]);
        assert_eq!(summary.success_rate, 0);
        assert_eq!(summary.replies, 0);
    }

    #[test]
    fn chip_counts_skip_chipless_statuses_but_all_counts_them() {
        let threads = vec![
            thread(1, OutreachStatus::Replied),
            thread(2, OutreachStatus::Opened),
            thread(3, OutreachStatus::Sent),
        ];
        let counts = category_counts(&threads);
        let labels: Vec<String> = counts
            .iter()
            .map(|(chip, count)| counted_label(*chip, *count))
            .collect();
        assert_eq!(
            labels,
            vec![
                "All (3)",
                "Sent (1)",
                "Replied (1)",
                "Accepted (0)",
                "Declined (0)"
            ]
        );
        assert_eq!(counts[0].0, CategoryFilter::All);
    }
}
