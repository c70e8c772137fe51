// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! The brand's working data: creators, campaigns, outreach threads, the
//! analytics dashboard and the signed-in profile. Ships with a built-in
//! catalog and can load the same shape from a JSON file.

use anyhow::{Context, Result, bail};
use connect_app::{
    Campaign, CampaignId, CampaignPerformance, CampaignStatus, ChartPoint, Creator, CreatorId,
    MenuAction, MenuItem, MenuSection, MetricCard, Niche, OutreachId, OutreachStatus,
    OutreachThread, ProfileStats, TabKind, TopContent, Trend, UserProfile,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use time::macros::date;

pub const APP_NAME: &str = "connect";
pub const APP_TITLE: &str = "Influencer Connect";
pub const COPYRIGHT_LINE: &str = "© 2024 Brand Studio";

const AVATAR_QUERY: &str = "?w=150&h=150&fit=crop&crop=face";

pub fn version_line() -> String {
    format!("{APP_TITLE} v{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub metric_cards: Vec<MetricCard>,
    pub performance: Vec<CampaignPerformance>,
    pub chart: Vec<ChartPoint>,
    pub top_content: Vec<TopContent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub user: UserProfile,
    pub stats: ProfileStats,
    pub menu: Vec<MenuSection>,
}

/// What one screen renders.
#[derive(Debug, Clone, PartialEq)]
pub enum TabSnapshot {
    Discover(Vec<Creator>),
    Campaigns(Vec<Campaign>),
    Analytics(Box<AnalyticsSnapshot>),
    Outreach(Vec<OutreachThread>),
    Profile(Box<ProfileSnapshot>),
}

impl TabSnapshot {
    pub const fn tab_kind(&self) -> TabKind {
        match self {
            Self::Discover(_) => TabKind::Discover,
            Self::Campaigns(_) => TabKind::Campaigns,
            Self::Analytics(_) => TabKind::Analytics,
            Self::Outreach(_) => TabKind::Outreach,
            Self::Profile(_) => TabKind::Profile,
        }
    }

    pub fn row_count(&self) -> usize {
        match self {
            Self::Discover(rows) => rows.len(),
            Self::Campaigns(rows) => rows.len(),
            Self::Analytics(analytics) => analytics.performance.len(),
            Self::Outreach(rows) => rows.len(),
            Self::Profile(profile) => profile.menu.iter().map(|section| section.items.len()).sum(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    creators: Vec<Creator>,
    campaigns: Vec<Campaign>,
    outreach: Vec<OutreachThread>,
    analytics: AnalyticsSnapshot,
    profile: ProfileSnapshot,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::mock()
    }
}

impl Catalog {
    pub fn mock() -> Self {
        Self {
            creators: mock_creators(),
            campaigns: mock_campaigns(),
            outreach: mock_outreach(),
            analytics: mock_analytics(),
            profile: mock_profile(),
        }
    }

    /// Custom list records with the built-in analytics and profile.
    pub fn from_parts(
        creators: Vec<Creator>,
        campaigns: Vec<Campaign>,
        outreach: Vec<OutreachThread>,
    ) -> Self {
        Self {
            creators,
            campaigns,
            outreach,
            analytics: mock_analytics(),
            profile: mock_profile(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read catalog {}", path.display()))?;
        let catalog: Self = serde_json::from_str(&raw)
            .with_context(|| format!("parse catalog {}", path.display()))?;
        catalog
            .validate()
            .with_context(|| format!("validate catalog {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            creators = catalog.creators.len(),
            campaigns = catalog.campaigns.len(),
            outreach = catalog.outreach.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialize catalog")
    }

    pub fn validate(&self) -> Result<()> {
        for campaign in &self.campaigns {
            if campaign.progress > 100 {
                bail!(
                    "campaign {} ({}) has progress {}; use a value from 0 to 100",
                    campaign.id.get(),
                    campaign.name,
                    campaign.progress
                );
            }
            if campaign.end_date < campaign.start_date {
                bail!(
                    "campaign {} ({}) ends before it starts",
                    campaign.id.get(),
                    campaign.name
                );
            }
        }
        for point in &self.analytics.chart {
            let values = [point.reach, point.engagement, point.spend];
            if values.iter().any(|value| !value.is_finite() || *value < 0.0) {
                bail!(
                    "chart point {} has a negative or non-numeric value",
                    point.month
                );
            }
        }
        Ok(())
    }

    pub fn creators(&self) -> &[Creator] {
        &self.creators
    }

    pub fn campaigns(&self) -> &[Campaign] {
        &self.campaigns
    }

    pub fn outreach(&self) -> &[OutreachThread] {
        &self.outreach
    }

    pub fn analytics(&self) -> &AnalyticsSnapshot {
        &self.analytics
    }

    pub fn profile(&self) -> &ProfileSnapshot {
        &self.profile
    }

    pub fn snapshot(&self, tab: TabKind) -> TabSnapshot {
        match tab {
            TabKind::Discover => TabSnapshot::Discover(self.creators.clone()),
            TabKind::Campaigns => TabSnapshot::Campaigns(self.campaigns.clone()),
            TabKind::Analytics => TabSnapshot::Analytics(Box::new(self.analytics.clone())),
            TabKind::Outreach => TabSnapshot::Outreach(self.outreach.clone()),
            TabKind::Profile => TabSnapshot::Profile(Box::new(self.profile.clone())),
        }
    }
}

fn avatar(photo: &str) -> String {
    format!("https://images.unsplash.com/photo-{photo}{AVATAR_QUERY}")
}

fn mock_creators() -> Vec<Creator> {
    vec![
        Creator {
            id: CreatorId::new(1),
            name: "Sarah Johnson".to_owned(),
            username: "@sarahjohnson".to_owned(),
            avatar_url: avatar("1494790108755-2616b612b786"),
            followers: "125K".to_owned(),
            engagement: "4.2%".to_owned(),
            niche: Niche::Fashion,
            verified: true,
            avg_views: "45K".to_owned(),
            rate: "$500-800".to_owned(),
        },
        Creator {
            id: CreatorId::new(2),
            name: "Mike Chen".to_owned(),
            username: "@mikechen".to_owned(),
            avatar_url: avatar("1507003211169-0a1dd7228f2d"),
            followers: "89K".to_owned(),
            engagement: "5.1%".to_owned(),
            niche: Niche::Tech,
            verified: false,
            avg_views: "32K".to_owned(),
            rate: "$300-600".to_owned(),
        },
        Creator {
            id: CreatorId::new(3),
            name: "Emma Davis".to_owned(),
            username: "@emmadavis".to_owned(),
            avatar_url: avatar("1438761681033-6461ffad8d80"),
            followers: "203K".to_owned(),
            engagement: "3.8%".to_owned(),
            niche: Niche::Lifestyle,
            verified: true,
            avg_views: "78K".to_owned(),
            rate: "$800-1200".to_owned(),
        },
        Creator {
            id: CreatorId::new(4),
            name: "Alex Rodriguez".to_owned(),
            username: "@alexrodriguez".to_owned(),
            avatar_url: avatar("1472099645785-5658abf4ff4e"),
            followers: "156K".to_owned(),
            engagement: "4.7%".to_owned(),
            niche: Niche::Fitness,
            verified: true,
            avg_views: "62K".to_owned(),
            rate: "$600-900".to_owned(),
        },
    ]
}

fn mock_campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: CampaignId::new(1),
            name: "Summer Fashion Collection".to_owned(),
            status: CampaignStatus::Active,
            budget: "$5,000".to_owned(),
            creators: 8,
            start_date: date!(2024 - 06 - 01),
            end_date: date!(2024 - 06 - 30),
            reach: "245K".to_owned(),
            engagement: "4.2%".to_owned(),
            progress: 65,
        },
        Campaign {
            id: CampaignId::new(2),
            name: "Tech Product Launch".to_owned(),
            status: CampaignStatus::Review,
            budget: "$8,500".to_owned(),
            creators: 12,
            start_date: date!(2024 - 05 - 15),
            end_date: date!(2024 - 06 - 15),
            reach: "380K".to_owned(),
            engagement: "5.1%".to_owned(),
            progress: 90,
        },
        Campaign {
            id: CampaignId::new(3),
            name: "Fitness Challenge".to_owned(),
            status: CampaignStatus::Draft,
            budget: "$3,200".to_owned(),
            creators: 5,
            start_date: date!(2024 - 07 - 01),
            end_date: date!(2024 - 07 - 31),
            reach: "0".to_owned(),
            engagement: "0%".to_owned(),
            progress: 25,
        },
        Campaign {
            id: CampaignId::new(4),
            name: "Holiday Promotion".to_owned(),
            status: CampaignStatus::Complete,
            budget: "$12,000".to_owned(),
            creators: 15,
            start_date: date!(2024 - 04 - 01),
            end_date: date!(2024 - 04 - 30),
            reach: "520K".to_owned(),
            engagement: "3.8%".to_owned(),
            progress: 100,
        },
    ]
}

fn mock_outreach() -> Vec<OutreachThread> {
    vec![
        OutreachThread {
            id: OutreachId::new(1),
            creator_name: "Sarah Johnson".to_owned(),
            creator_username: "@sarahjohnson".to_owned(),
            creator_avatar_url: avatar("1494790108755-2616b612b786"),
            campaign: "Summer Fashion Collection".to_owned(),
            status: OutreachStatus::Replied,
            last_message: "I'd love to collaborate! When do you need the content?".to_owned(),
            timestamp: "2h ago".to_owned(),
            unread_count: 2,
        },
        OutreachThread {
            id: OutreachId::new(2),
            creator_name: "Mike Chen".to_owned(),
            creator_username: "@mikechen".to_owned(),
            creator_avatar_url: avatar("1507003211169-0a1dd7228f2d"),
            campaign: "Tech Product Launch".to_owned(),
            status: OutreachStatus::Accepted,
            last_message: "Perfect! I'll start working on the content draft.".to_owned(),
            timestamp: "1d ago".to_owned(),
            unread_count: 0,
        },
        OutreachThread {
            id: OutreachId::new(3),
            creator_name: "Emma Davis".to_owned(),
            creator_username: "@emmadavis".to_owned(),
            creator_avatar_url: avatar("1438761681033-6461ffad8d80"),
            campaign: "Fitness Challenge".to_owned(),
            status: OutreachStatus::Opened,
            last_message: "Hi Emma! We'd love to work with you on our fitness campaign...".to_owned(),
            timestamp: "3d ago".to_owned(),
            unread_count: 0,
        },
        OutreachThread {
            id: OutreachId::new(4),
            creator_name: "Alex Rodriguez".to_owned(),
            creator_username: "@alexrodriguez".to_owned(),
            creator_avatar_url: avatar("1472099645785-5658abf4ff4e"),
            campaign: "Summer Fashion Collection".to_owned(),
            status: OutreachStatus::Declined,
            last_message: "Thanks for reaching out, but this doesn't align with my brand.".to_owned(),
            timestamp: "5d ago".to_owned(),
            unread_count: 0,
        },
        OutreachThread {
            id: OutreachId::new(5),
            creator_name: "Lisa Park".to_owned(),
            creator_username: "@lisapark".to_owned(),
            creator_avatar_url: avatar("1544005313-94ddf0286df2"),
            campaign: "Tech Product Launch".to_owned(),
            status: OutreachStatus::Sent,
            last_message: "Hi Lisa! We think you'd be perfect for our tech campaign...".to_owned(),
            timestamp: "1w ago".to_owned(),
            unread_count: 0,
        },
    ]
}

fn metric_card(title: &str, value: &str, change: &str, trend: Trend) -> MetricCard {
    MetricCard {
        title: title.to_owned(),
        value: value.to_owned(),
        change: change.to_owned(),
        trend,
    }
}

fn performance(
    name: &str,
    reach: &str,
    engagement: &str,
    spend: &str,
    roi: &str,
    status: CampaignStatus,
) -> CampaignPerformance {
    CampaignPerformance {
        name: name.to_owned(),
        reach: reach.to_owned(),
        engagement: engagement.to_owned(),
        spend: spend.to_owned(),
        roi: roi.to_owned(),
        status,
    }
}

fn chart_point(month: &str, reach: f64, engagement: f64, spend: f64) -> ChartPoint {
    ChartPoint {
        month: month.to_owned(),
        reach,
        engagement,
        spend,
    }
}

fn mock_analytics() -> AnalyticsSnapshot {
    AnalyticsSnapshot {
        metric_cards: vec![
            metric_card("Total Reach", "1.2M", "+12.5%", Trend::Up),
            metric_card("Engagement Rate", "4.2%", "+0.8%", Trend::Up),
            metric_card("Total Spend", "$28.7K", "-5.2%", Trend::Down),
            metric_card("ROI", "3.4x", "+0.6x", Trend::Up),
        ],
        performance: vec![
            performance(
                "Summer Fashion Collection",
                "245K",
                "4.2%",
                "$5.0K",
                "2.8x",
                CampaignStatus::Active,
            ),
            performance(
                "Tech Product Launch",
                "380K",
                "5.1%",
                "$8.5K",
                "4.2x",
                CampaignStatus::Complete,
            ),
            performance(
                "Holiday Promotion",
                "520K",
                "3.8%",
                "$12.0K",
                "3.1x",
                CampaignStatus::Complete,
            ),
        ],
        chart: vec![
            chart_point("Jan", 850.0, 3.2, 15.0),
            chart_point("Feb", 920.0, 3.8, 18.0),
            chart_point("Mar", 1100.0, 4.1, 22.0),
            chart_point("Apr", 1350.0, 4.5, 28.0),
            chart_point("May", 1200.0, 4.2, 25.0),
            chart_point("Jun", 1450.0, 4.8, 32.0),
        ],
        top_content: vec![TopContent {
            title: "Summer Fashion Lookbook".to_owned(),
            creator_username: "@sarahjohnson".to_owned(),
            views: "125K".to_owned(),
            likes: "8.2K".to_owned(),
            shares: "1.2K".to_owned(),
        }],
    }
}

fn menu_item(title: &str, subtitle: Option<&str>, action: MenuAction) -> MenuItem {
    MenuItem {
        title: title.to_owned(),
        subtitle: subtitle.map(str::to_owned),
        action,
        show_chevron: action != MenuAction::SignOut,
    }
}

fn mock_profile() -> ProfileSnapshot {
    ProfileSnapshot {
        user: UserProfile {
            name: "Alex Thompson".to_owned(),
            email: "alex@brandstudio.com".to_owned(),
            company: "Brand Studio".to_owned(),
            phone: "+1 (555) 123-4567".to_owned(),
            avatar_url: avatar("1472099645785-5658abf4ff4e"),
        },
        stats: ProfileStats {
            active_campaigns: "12".to_owned(),
            total_creators: "48".to_owned(),
            total_spend: "$125K".to_owned(),
        },
        menu: vec![
            MenuSection {
                title: "Account".to_owned(),
                items: vec![
                    menu_item(
                        "Edit Profile",
                        Some("Update your personal information"),
                        MenuAction::EditProfile,
                    ),
                    menu_item(
                        "Company Settings",
                        Some("Manage your brand information"),
                        MenuAction::CompanySettings,
                    ),
                    menu_item(
                        "Notifications",
                        Some("Configure your alerts"),
                        MenuAction::Notifications,
                    ),
                ],
            },
            MenuSection {
                title: "Billing".to_owned(),
                items: vec![menu_item(
                    "Payment Methods",
                    Some("Manage cards and billing"),
                    MenuAction::PaymentMethods,
                )],
            },
            MenuSection {
                title: "Support".to_owned(),
                items: vec![menu_item(
                    "Help Center",
                    Some("Get help and support"),
                    MenuAction::HelpCenter,
                )],
            },
            MenuSection {
                title: "Account".to_owned(),
                items: vec![menu_item("Sign Out", None, MenuAction::SignOut)],
            },
        ],
    }
}
