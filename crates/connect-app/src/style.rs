// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::fmt;

use crate::model::{CampaignStatus, ChartMetric, OutreachStatus, Trend};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn from_hex(value: u32) -> Self {
        Self(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

pub mod palette {
    use super::Rgb;

    pub const INDIGO: Rgb = Rgb::from_hex(0x6366F1);
    pub const INDIGO_SOFT: Rgb = Rgb::from_hex(0xE0E7FF);
    pub const GREEN: Rgb = Rgb::from_hex(0x10B981);
    pub const GREEN_SOFT: Rgb = Rgb::from_hex(0xD1FAE5);
    pub const AMBER: Rgb = Rgb::from_hex(0xF59E0B);
    pub const AMBER_SOFT: Rgb = Rgb::from_hex(0xFEF3C7);
    pub const RED: Rgb = Rgb::from_hex(0xEF4444);
    pub const RED_SOFT: Rgb = Rgb::from_hex(0xFEE2E2);
    pub const GRAY: Rgb = Rgb::from_hex(0x6B7280);
    pub const GRAY_SOFT: Rgb = Rgb::from_hex(0xF3F4F6);
    pub const MUTED: Rgb = Rgb::from_hex(0x9CA3AF);
    pub const INK: Rgb = Rgb::from_hex(0x111827);
}

/// How a tagged status renders: badge text colour, badge fill and an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub foreground: Rgb,
    pub background: Rgb,
    pub glyph: &'static str,
}

pub trait Styled {
    fn style(self) -> StatusStyle;
}

impl Styled for CampaignStatus {
    fn style(self) -> StatusStyle {
        use palette::*;
        match self {
            Self::Draft => StatusStyle {
                foreground: GRAY,
                background: GRAY_SOFT,
                glyph: "○",
            },
            Self::Active => StatusStyle {
                foreground: GREEN,
                background: GREEN_SOFT,
                glyph: "●",
            },
            Self::Review => StatusStyle {
                foreground: AMBER,
                background: AMBER_SOFT,
                glyph: "◐",
            },
            Self::Complete => StatusStyle {
                foreground: INDIGO,
                background: INDIGO_SOFT,
                glyph: "✔",
            },
        }
    }
}

impl Styled for OutreachStatus {
    fn style(self) -> StatusStyle {
        use palette::*;
        match self {
            Self::Sent => StatusStyle {
                foreground: GRAY,
                background: GRAY_SOFT,
                glyph: "➤",
            },
            Self::Opened => StatusStyle {
                foreground: AMBER,
                background: AMBER_SOFT,
                glyph: "◷",
            },
            Self::Replied => StatusStyle {
                foreground: INDIGO,
                background: INDIGO_SOFT,
                glyph: "✉",
            },
            Self::Accepted => StatusStyle {
                foreground: GREEN,
                background: GREEN_SOFT,
                glyph: "✔",
            },
            Self::Declined => StatusStyle {
                foreground: RED,
                background: RED_SOFT,
                glyph: "✖",
            },
        }
    }
}

impl Styled for Trend {
    fn style(self) -> StatusStyle {
        use palette::*;
        match self {
            Self::Up => StatusStyle {
                foreground: GREEN,
                background: GREEN_SOFT,
                glyph: self.arrow(),
            },
            Self::Down => StatusStyle {
                foreground: RED,
                background: RED_SOFT,
                glyph: self.arrow(),
            },
        }
    }
}

impl Styled for ChartMetric {
    fn style(self) -> StatusStyle {
        use palette::*;
        let foreground = match self {
            Self::Reach => INDIGO,
            Self::Engagement => GREEN,
            Self::Spend => AMBER,
        };
        StatusStyle {
            foreground,
            background: GRAY_SOFT,
            glyph: "█",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Rgb, Styled, palette};
    use crate::model::{CampaignStatus, ChartMetric, OutreachStatus, Trend};

    #[test]
    fn rgb_round_trips_through_hex() {
        let color = Rgb::from_hex(0x6366F1);
        assert_eq!(color, Rgb(0x63, 0x66, 0xF1));
        assert_eq!(color.to_string(), "#6366F1");
    }

    #[test]
    fn campaign_and_outreach_tables_share_status_colors() {
        assert_eq!(CampaignStatus::Active.style().foreground, palette::GREEN);
        assert_eq!(OutreachStatus::Accepted.style().foreground, palette::GREEN);
        assert_eq!(CampaignStatus::Review.style().background, palette::AMBER_SOFT);
        assert_eq!(OutreachStatus::Declined.style().background, palette::RED_SOFT);
        assert_eq!(OutreachStatus::Replied.style().glyph, "✉");
    }

    #[test]
    fn every_outreach_status_has_a_distinct_glyph() {
        let mut glyphs: Vec<&str> = OutreachStatus::ALL
            .iter()
            .map(|status| status.style().glyph)
            .collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), OutreachStatus::ALL.len());
    }

    #[test]
    fn trend_and_chart_metric_colors() {
        assert_eq!(Trend::Down.style().foreground, palette::RED);
        assert_eq!(Trend::Up.style().glyph, "▲");
        assert_eq!(ChartMetric::Spend.style().foreground, palette::AMBER);
    }
}
