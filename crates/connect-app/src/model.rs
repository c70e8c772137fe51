// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use time::Date;

use crate::format::parse_display_number;
use crate::ids::*;
use crate::listview::{Category, Record, SortKey, SortValue};

// Campaign dates are stored as `2024-06-01` so catalog files stay hand-editable.
time::serde::format_description!(calendar_date, Date, "[year]-[month]-[day]");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Niche {
    Fashion,
    Tech,
    Lifestyle,
    Fitness,
    Food,
    Travel,
}

impl Niche {
    pub const ALL: [Self; 6] = [
        Self::Fashion,
        Self::Tech,
        Self::Lifestyle,
        Self::Fitness,
        Self::Food,
        Self::Travel,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fashion => "Fashion",
            Self::Tech => "Tech",
            Self::Lifestyle => "Lifestyle",
            Self::Fitness => "Fitness",
            Self::Food => "Food",
            Self::Travel => "Travel",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Fashion" => Some(Self::Fashion),
            "Tech" => Some(Self::Tech),
            "Lifestyle" => Some(Self::Lifestyle),
            "Fitness" => Some(Self::Fitness),
            "Food" => Some(Self::Food),
            "Travel" => Some(Self::Travel),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CampaignStatus {
    Draft,
    Active,
    Review,
    Complete,
}

impl CampaignStatus {
    pub const ALL: [Self; 4] = [Self::Draft, Self::Active, Self::Review, Self::Complete];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Active => "Active",
            Self::Review => "Review",
            Self::Complete => "Complete",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Draft" => Some(Self::Draft),
            "Active" => Some(Self::Active),
            "Review" => Some(Self::Review),
            "Complete" => Some(Self::Complete),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutreachStatus {
    Sent,
    Opened,
    Replied,
    Accepted,
    Declined,
}

impl OutreachStatus {
    pub const ALL: [Self; 5] = [
        Self::Sent,
        Self::Opened,
        Self::Replied,
        Self::Accepted,
        Self::Declined,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sent => "Sent",
            Self::Opened => "Opened",
            Self::Replied => "Replied",
            Self::Accepted => "Accepted",
            Self::Declined => "Declined",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Sent" => Some(Self::Sent),
            "Opened" => Some(Self::Opened),
            "Replied" => Some(Self::Replied),
            "Accepted" => Some(Self::Accepted),
            "Declined" => Some(Self::Declined),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartMetric {
    #[default]
    Reach,
    Engagement,
    Spend,
}

impl ChartMetric {
    pub const ALL: [Self; 3] = [Self::Reach, Self::Engagement, Self::Spend];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Reach => "Reach",
            Self::Engagement => "Engagement",
            Self::Spend => "Spend",
        }
    }

    pub fn next(self) -> Self {
        rotate(&Self::ALL, self, 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Period {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl Period {
    pub const ALL: [Self; 4] = [Self::Week, Self::Month, Self::Quarter, Self::Year];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Week => "7d",
            Self::Month => "30d",
            Self::Quarter => "90d",
            Self::Year => "1y",
        }
    }

    pub fn next(self) -> Self {
        rotate(&Self::ALL, self, 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabKind {
    Discover,
    Campaigns,
    Analytics,
    Outreach,
    Profile,
}

impl TabKind {
    pub const ALL: [Self; 5] = [
        Self::Discover,
        Self::Campaigns,
        Self::Analytics,
        Self::Outreach,
        Self::Profile,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Discover => "discover",
            Self::Campaigns => "campaigns",
            Self::Analytics => "analytics",
            Self::Outreach => "outreach",
            Self::Profile => "profile",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Discover => "Discover Creators",
            Self::Campaigns => "My Campaigns",
            Self::Analytics => "Analytics",
            Self::Outreach => "Outreach",
            Self::Profile => "Profile",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "discover" => Some(Self::Discover),
            "campaigns" => Some(Self::Campaigns),
            "analytics" => Some(Self::Analytics),
            "outreach" => Some(Self::Outreach),
            "profile" => Some(Self::Profile),
            _ => None,
        }
    }

    pub const fn is_list(self) -> bool {
        matches!(self, Self::Discover | Self::Campaigns | Self::Outreach)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppMode {
    Nav,
    Search,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    pub id: CreatorId,
    pub name: String,
    pub username: String,
    pub avatar_url: String,
    pub followers: String,
    pub engagement: String,
    pub niche: Niche,
    pub verified: bool,
    pub avg_views: String,
    pub rate: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: CampaignId,
    pub name: String,
    pub status: CampaignStatus,
    pub budget: String,
    pub creators: u32,
    #[serde(with = "calendar_date")]
    pub start_date: Date,
    #[serde(with = "calendar_date")]
    pub end_date: Date,
    pub reach: String,
    pub engagement: String,
    pub progress: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutreachThread {
    pub id: OutreachId,
    pub creator_name: String,
    pub creator_username: String,
    pub creator_avatar_url: String,
    pub campaign: String,
    pub status: OutreachStatus,
    pub last_message: String,
    pub timestamp: String,
    pub unread_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignPerformance {
    pub name: String,
    pub reach: String,
    pub engagement: String,
    pub spend: String,
    pub roi: String,
    pub status: CampaignStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub month: String,
    pub reach: f64,
    pub engagement: f64,
    pub spend: f64,
}

impl ChartPoint {
    pub fn value(&self, metric: ChartMetric) -> f64 {
        match metric {
            ChartMetric::Reach => self.reach,
            ChartMetric::Engagement => self.engagement,
            ChartMetric::Spend => self.spend,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopContent {
    pub title: String,
    pub creator_username: String,
    pub views: String,
    pub likes: String,
    pub shares: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub active_campaigns: String,
    pub total_creators: String,
    pub total_spend: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuAction {
    EditProfile,
    CompanySettings,
    Notifications,
    PaymentMethods,
    HelpCenter,
    SignOut,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub title: String,
    pub subtitle: Option<String>,
    pub action: MenuAction,
    pub show_chevron: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSection {
    pub title: String,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreatorSortKey {
    Name,
    Followers,
    Engagement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignSortKey {
    Name,
    Budget,
    Progress,
    StartDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutreachSortKey {
    CreatorName,
    Unread,
}

impl Category for Niche {
    const CHIPS: &'static [Self] = &Self::ALL;

    fn label(self) -> &'static str {
        self.as_str()
    }
}

impl Category for CampaignStatus {
    const CHIPS: &'static [Self] = &[Self::Active, Self::Draft, Self::Review, Self::Complete];

    fn label(self) -> &'static str {
        self.as_str()
    }
}

// Opened threads are reachable through "All" only; there is no chip for them.
impl Category for OutreachStatus {
    const CHIPS: &'static [Self] = &[Self::Sent, Self::Replied, Self::Accepted, Self::Declined];

    fn label(self) -> &'static str {
        self.as_str()
    }
}

impl SortKey for CreatorSortKey {
    const ALL: &'static [Self] = &[Self::Name, Self::Followers, Self::Engagement];

    fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Followers => "followers",
            Self::Engagement => "engagement",
        }
    }
}

impl SortKey for CampaignSortKey {
    const ALL: &'static [Self] = &[Self::Name, Self::Budget, Self::Progress, Self::StartDate];

    fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Budget => "budget",
            Self::Progress => "progress",
            Self::StartDate => "start",
        }
    }
}

impl SortKey for OutreachSortKey {
    const ALL: &'static [Self] = &[Self::CreatorName, Self::Unread];

    fn label(self) -> &'static str {
        match self {
            Self::CreatorName => "creator",
            Self::Unread => "unread",
        }
    }
}

impl Record for Creator {
    type Category = Niche;
    type SortKey = CreatorSortKey;

    fn category(&self) -> Niche {
        self.niche
    }

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [self.name.as_str(), self.username.as_str()].into_iter()
    }

    fn sort_value(&self, key: CreatorSortKey) -> SortValue<'_> {
        match key {
            CreatorSortKey::Name => SortValue::Text(&self.name),
            CreatorSortKey::Followers => SortValue::Number(parse_display_number(&self.followers)),
            CreatorSortKey::Engagement => {
                SortValue::Number(parse_display_number(&self.engagement))
            }
        }
    }
}

impl Record for Campaign {
    type Category = CampaignStatus;
    type SortKey = CampaignSortKey;

    fn category(&self) -> CampaignStatus {
        self.status
    }

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
    }

    fn sort_value(&self, key: CampaignSortKey) -> SortValue<'_> {
        match key {
            CampaignSortKey::Name => SortValue::Text(&self.name),
            CampaignSortKey::Budget => SortValue::Number(parse_display_number(&self.budget)),
            CampaignSortKey::Progress => SortValue::Number(Some(f64::from(self.progress))),
            CampaignSortKey::StartDate => SortValue::Date(self.start_date),
        }
    }
}

impl Record for OutreachThread {
    type Category = OutreachStatus;
    type SortKey = OutreachSortKey;

    fn category(&self) -> OutreachStatus {
        self.status
    }

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.creator_name.as_str(),
            self.creator_username.as_str(),
            self.campaign.as_str(),
        ]
        .into_iter()
    }

    fn sort_value(&self, key: OutreachSortKey) -> SortValue<'_> {
        match key {
            OutreachSortKey::CreatorName => SortValue::Text(&self.creator_name),
            OutreachSortKey::Unread => SortValue::Number(Some(f64::from(self.unread_count))),
        }
    }
}

pub(crate) fn rotate<T: Copy + PartialEq>(items: &[T], current: T, delta: isize) -> T {
    let index = items
        .iter()
        .position(|item| *item == current)
        .unwrap_or(0) as isize;
    let len = items.len() as isize;
    items[(index + delta).rem_euclid(len) as usize]
}
