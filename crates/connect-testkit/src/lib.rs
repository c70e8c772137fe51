// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use connect_app::format::format_compact;
use connect_app::{
    Campaign, CampaignId, CampaignStatus, Creator, CreatorId, Niche, OutreachId, OutreachStatus,
    OutreachThread,
};
use std::path::PathBuf;
use time::macros::date;
use time::{Date, Duration};

const FIRST_NAMES: [&str; 16] = [
    "Sarah", "Mike", "Emma", "Alex", "Lisa", "Jordan", "Priya", "Diego", "Hana", "Omar", "Chloe",
    "Mateo", "Zoe", "Kenji", "Amara", "Luca",
];
const LAST_NAMES: [&str; 16] = [
    "Johnson", "Chen", "Davis", "Rodriguez", "Park", "Nguyen", "Okafor", "Silva", "Kowalski",
    "Haddad", "Moreau", "Tanaka", "Rossi", "Ibrahim", "Walsh", "Kim",
];

const CAMPAIGN_ADJECTIVES: [&str; 10] = [
    "Summer", "Holiday", "Spring", "Winter", "Launch", "Flash", "Evergreen", "Weekend", "Annual",
    "Creator",
];
const CAMPAIGN_SUBJECTS: [&str; 10] = [
    "Fashion Collection",
    "Product Launch",
    "Fitness Challenge",
    "Promotion",
    "Giveaway",
    "Lookbook",
    "Recipe Series",
    "Travel Diaries",
    "Unboxing",
    "Ambassador Program",
];

const MESSAGES: [&str; 8] = [
    "I'd love to collaborate! When do you need the content?",
    "Perfect! I'll start working on the content draft.",
    "Thanks for reaching out, but this doesn't align with my brand.",
    "Could you share the brief and timeline?",
    "What deliverables are you looking for?",
    "Happy to chat, what's the budget range?",
    "Hi! We think you'd be perfect for our campaign...",
    "Following up on our last message.",
];

const TIMESTAMPS: [&str; 8] = [
    "5m ago", "2h ago", "6h ago", "1d ago", "3d ago", "5d ago", "1w ago", "2w ago",
];

const AVATAR_BASE: &str = "https://images.unsplash.com/photo-";
const AVATAR_QUERY: &str = "?w=150&h=150&fit=crop&crop=face";

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }

    fn bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

/// Seeded generator of creators, campaigns and outreach threads shaped
/// like the catalog's records, display strings included.
#[derive(Debug, Clone)]
pub struct InfluencerFaker {
    rng: DeterministicRng,
    next_id: i64,
}

impl InfluencerFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            next_id: 1,
        }
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    pub fn creator(&mut self) -> Creator {
        let (name, username) = self.person();
        let followers = self.int_range(1_000, 2_500_000) as f64;
        let low_rate = self.int_range(1, 40) * 50;
        let high_rate = low_rate + self.int_range(1, 20) * 50;
        Creator {
            id: CreatorId::new(self.bump_id()),
            name,
            username,
            avatar_url: self.avatar_url(),
            followers: format_compact(followers),
            engagement: self.percent(10, 90),
            niche: Niche::ALL[self.rng.int_n(Niche::ALL.len())],
            verified: self.rng.bool(),
            avg_views: format_compact(followers * self.int_range(10, 60) as f64 / 100.0),
            rate: format!("${low_rate}-{high_rate}"),
        }
    }

    pub fn campaign(&mut self) -> Campaign {
        let status = CampaignStatus::ALL[self.rng.int_n(CampaignStatus::ALL.len())];
        let start_date = self.date_in_2024();
        let end_date = start_date + Duration::days(self.int_range(14, 60));
        let (reach, engagement, progress) = match status {
            CampaignStatus::Draft => ("0".to_owned(), "0%".to_owned(), self.int_range(0, 40)),
            CampaignStatus::Complete => (self.reach(), self.percent(20, 70), 100),
            CampaignStatus::Active | CampaignStatus::Review => {
                (self.reach(), self.percent(20, 70), self.int_range(10, 95))
            }
        };
        Campaign {
            id: CampaignId::new(self.bump_id()),
            name: format!(
                "{} {}",
                self.pick(&CAMPAIGN_ADJECTIVES),
                self.pick(&CAMPAIGN_SUBJECTS)
            ),
            status,
            budget: with_thousands(self.int_range(5, 250) * 100),
            creators: self.int_range(1, 30) as u32,
            start_date,
            end_date,
            reach,
            engagement,
            progress: progress.clamp(0, 100) as u8,
        }
    }

    pub fn outreach_thread(&mut self) -> OutreachThread {
        let (creator_name, creator_username) = self.person();
        let status = OutreachStatus::ALL[self.rng.int_n(OutreachStatus::ALL.len())];
        let unread_count = if status == OutreachStatus::Replied {
            self.int_range(0, 5) as u32
        } else {
            0
        };
        OutreachThread {
            id: OutreachId::new(self.bump_id()),
            creator_name,
            creator_username,
            creator_avatar_url: self.avatar_url(),
            campaign: format!(
                "{} {}",
                self.pick(&CAMPAIGN_ADJECTIVES),
                self.pick(&CAMPAIGN_SUBJECTS)
            ),
            status,
            last_message: self.pick(&MESSAGES).to_owned(),
            timestamp: self.pick(&TIMESTAMPS).to_owned(),
            unread_count,
        }
    }

    pub fn creators(&mut self, count: usize) -> Vec<Creator> {
        (0..count).map(|_| self.creator()).collect()
    }

    pub fn campaigns(&mut self, count: usize) -> Vec<Campaign> {
        (0..count).map(|_| self.campaign()).collect()
    }

    pub fn outreach_threads(&mut self, count: usize) -> Vec<OutreachThread> {
        (0..count).map(|_| self.outreach_thread()).collect()
    }

    /// A search needle drawn from the name pools, with random casing, so
    /// searches hit some records and miss others.
    pub fn search_needle(&mut self) -> String {
        let source = if self.rng.bool() {
            self.pick(&FIRST_NAMES)
        } else {
            self.pick(&LAST_NAMES)
        };
        let len = 2 + self.rng.int_n(source.len().saturating_sub(1));
        let fragment: String = source.chars().take(len).collect();
        if self.rng.bool() {
            fragment.to_uppercase()
        } else {
            fragment.to_lowercase()
        }
    }

    fn person(&mut self) -> (String, String) {
        let first = self.pick(&FIRST_NAMES);
        let last = self.pick(&LAST_NAMES);
        let username = format!(
            "@{}{}",
            first.to_ascii_lowercase(),
            last.to_ascii_lowercase()
        );
        (format!("{first} {last}"), username)
    }

    fn avatar_url(&mut self) -> String {
        format!(
            "{AVATAR_BASE}{}-{:012x}{AVATAR_QUERY}",
            self.int_range(1_400_000_000_000, 1_599_999_999_999),
            self.rng.next_u64() & 0xFFFF_FFFF_FFFF,
        )
    }

    fn reach(&mut self) -> String {
        format_compact(self.int_range(5, 900) as f64 * 1_000.0)
    }

    fn percent(&mut self, min_tenths: i64, max_tenths: i64) -> String {
        let tenths = self.int_range(min_tenths, max_tenths);
        format!("{}.{}%", tenths / 10, tenths % 10)
    }

    fn date_in_2024(&mut self) -> Date {
        REFERENCE_START + Duration::days(self.int_range(0, 364))
    }

    fn bump_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[self.rng.int_n(items.len())]
    }

    fn int_range(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        let span = max - min + 1;
        min + (self.rng.next_u64() % (span as u64)) as i64
    }
}

/// A config path inside a fresh temp dir; the file itself is not created.
pub fn temp_config_path() -> Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let path = dir.path().join("connect").join("config.toml");
    Ok((dir, path))
}

fn with_thousands(dollars: i64) -> String {
    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}

const REFERENCE_START: Date = date!(2024 - 01 - 01);
