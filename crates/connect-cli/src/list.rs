// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Headless `--list`: one list screen's filtered view printed as text or
//! JSON, followed by the screen's summary.

use anyhow::{Context, Result, anyhow, bail};
use connect_app::format::{format_compact, format_date_range, format_percent};
use connect_app::summary::{
    ACCEPTED, ACTIVE_CAMPAIGNS, REPLIES, SUCCESS_RATE, TOTAL_CREATORS, TOTAL_REACH,
};
use connect_app::{
    Campaign, CampaignStatus, Category, CategoryFilter, Creator, FilterState, ListQuery, Niche,
    OutreachStatus, OutreachThread, Record, SortKey, TabKind, campaign_summary, category_counts,
    counted_label, outreach_summary, parse_sort_spec,
};
use connect_catalog::Catalog;
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub tab: TabKind,
    pub category: Option<String>,
    pub search: String,
    pub sort: Option<String>,
    pub json: bool,
}

impl ListRequest {
    pub fn new(tab: TabKind) -> Self {
        Self {
            tab,
            category: None,
            search: String::new(),
            sort: None,
            json: false,
        }
    }
}

struct Listing<'a, R> {
    noun: &'static str,
    total: usize,
    visible: Vec<&'a R>,
    headers: &'static [&'static str],
    row: fn(&R) -> Vec<String>,
    summary: Vec<(String, String)>,
    summary_json: serde_json::Value,
}

pub fn render(catalog: &Catalog, request: &ListRequest) -> Result<String> {
    match request.tab {
        TabKind::Discover => {
            let records = catalog.creators();
            let query = build_query::<Creator>(request, &Niche::ALL)?;
            let listing = Listing {
                noun: "creators",
                total: records.len(),
                visible: query.apply(records),
                headers: &["name", "username", "niche", "followers", "engagement", "rate"],
                row: creator_row,
                summary: Vec::new(),
                summary_json: serde_json::Value::Null,
            };
            finish(request, &listing)
        }
        TabKind::Campaigns => {
            let records = catalog.campaigns();
            let query = build_query::<Campaign>(request, &CampaignStatus::ALL)?;
            let summary = campaign_summary(records);
            let listing = Listing {
                noun: "campaigns",
                total: records.len(),
                visible: query.apply(records),
                headers: &[
                    "name", "status", "progress", "budget", "creators", "reach", "dates",
                ],
                row: campaign_row,
                summary: vec![
                    (ACTIVE_CAMPAIGNS.to_owned(), summary.active.to_string()),
                    (
                        TOTAL_CREATORS.to_owned(),
                        format_compact(summary.total_creators),
                    ),
                    (TOTAL_REACH.to_owned(), format_compact(summary.total_reach)),
                ],
                summary_json: serde_json::to_value(&summary).context("encode summary")?,
            };
            finish(request, &listing)
        }
        TabKind::Outreach => {
            let records = catalog.outreach();
            let query = build_query::<OutreachThread>(request, &OutreachStatus::ALL)?;
            let summary = outreach_summary(records);
            let mut lines = vec![
                (REPLIES.to_owned(), summary.replies.to_string()),
                (ACCEPTED.to_owned(), summary.accepted.to_string()),
                (SUCCESS_RATE.to_owned(), format_percent(summary.success_rate)),
            ];
            let chips: Vec<String> = category_counts(records)
                .into_iter()
                .map(|(chip, count)| counted_label(chip, count))
                .collect();
            lines.push(("Chips".to_owned(), chips.join(", ")));
            let listing = Listing {
                noun: "conversations",
                total: records.len(),
                visible: query.apply(records),
                headers: &["creator", "status", "campaign", "unread", "when"],
                row: outreach_row,
                summary: lines,
                summary_json: json!({
                    "replies": summary.replies,
                    "accepted": summary.accepted,
                    "success_rate": summary.success_rate,
                    "chips": chips,
                }),
            };
            finish(request, &listing)
        }
        other => bail!(
            "--list supports discover, campaigns, and outreach; {} has no list",
            other.label()
        ),
    }
}

fn finish<R: Serialize>(request: &ListRequest, listing: &Listing<'_, R>) -> Result<String> {
    tracing::debug!(
        tab = request.tab.label(),
        visible = listing.visible.len(),
        total = listing.total,
        "list rendered"
    );
    if request.json {
        let value = json!({
            "tab": request.tab.label(),
            "total": listing.total,
            "visible": listing.visible.len(),
            "rows": listing.visible,
            "summary": listing.summary_json,
        });
        let mut text = serde_json::to_string_pretty(&value).context("encode list as JSON")?;
        text.push('\n');
        return Ok(text);
    }
    Ok(listing_text(listing))
}

fn listing_text<R>(listing: &Listing<'_, R>) -> String {
    let rows: Vec<Vec<String>> = listing
        .visible
        .iter()
        .map(|record| (listing.row)(record))
        .collect();
    let mut out = aligned_table(listing.headers, &rows);
    out.push_str(&format!(
        "\n{} of {} {}\n",
        listing.visible.len(),
        listing.total,
        listing.noun
    ));
    for (name, value) in &listing.summary {
        out.push_str(&format!("{name}: {value}\n"));
    }
    out
}

fn aligned_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|header| header.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let pad = width.saturating_sub(cell.chars().count());
                format!("{cell}{}", " ".repeat(pad))
            })
            .collect();
        format!("{}\n", padded.join("  ").trim_end())
    };

    let mut out = line(headers.to_vec());
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
    }
    out
}

fn build_query<R: Record>(
    request: &ListRequest,
    every: &[R::Category],
) -> Result<ListQuery<R::Category, R::SortKey>> {
    let active_category = match &request.category {
        None => CategoryFilter::All,
        Some(label) => CategoryFilter::parse(label, every).ok_or_else(|| {
            let choices: Vec<&str> = std::iter::once(CategoryFilter::<R::Category>::All.label())
                .chain(every.iter().map(|category| category.label()))
                .collect();
            anyhow!(
                "unknown category {label:?} for {}; use one of: {}",
                request.tab.label(),
                choices.join(", ")
            )
        })?,
    };

    let sort = match &request.sort {
        None => None,
        Some(raw) => Some(parse_sort_spec::<R::SortKey>(raw).ok_or_else(|| {
            let keys: Vec<&str> = <R::SortKey as SortKey>::ALL
                .iter()
                .map(|key| key.label())
                .collect();
            anyhow!(
                "unknown sort {raw:?} for {}; use <key> or <key>:desc with key one of: {}",
                request.tab.label(),
                keys.join(", ")
            )
        })?),
    };

    Ok(ListQuery {
        filter: FilterState::new(active_category, request.search.clone()),
        sort,
    })
}

fn creator_row(creator: &Creator) -> Vec<String> {
    vec![
        creator.name.clone(),
        creator.username.clone(),
        creator.niche.as_str().to_owned(),
        creator.followers.clone(),
        creator.engagement.clone(),
        creator.rate.clone(),
    ]
}

fn campaign_row(campaign: &Campaign) -> Vec<String> {
    vec![
        campaign.name.clone(),
        campaign.status.as_str().to_owned(),
        format!("{}%", campaign.progress),
        campaign.budget.clone(),
        campaign.creators.to_string(),
        campaign.reach.clone(),
        format_date_range(campaign.start_date, campaign.end_date),
    ]
}

fn outreach_row(thread: &OutreachThread) -> Vec<String> {
    vec![
        thread.creator_name.clone(),
        thread.status.as_str().to_owned(),
        thread.campaign.clone(),
        thread.unread_count.to_string(),
        thread.timestamp.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::{ListRequest, aligned_table, render};
    use anyhow::Result;
    use connect_app::TabKind;
    use connect_catalog::Catalog;

    #[test]
    fn discover_text_filters_by_niche() -> Result<()> {
        let request = ListRequest {
            category: Some("Tech".to_owned()),
            ..ListRequest::new(TabKind::Discover)
        };
        let text = render(&Catalog::mock(), &request)?;
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("name"));
        assert!(lines[1].starts_with("Mike Chen"));
        assert!(text.contains("1 of 4 creators"));
        assert!(!text.contains("Sarah Johnson"));
        Ok(())
    }

    #[test]
    fn campaigns_sorted_descending_with_summary() -> Result<()> {
        let request = ListRequest {
            sort: Some("progress:desc".to_owned()),
            ..ListRequest::new(TabKind::Campaigns)
        };
        let text = render(&Catalog::mock(), &request)?;
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].starts_with("Holiday Promotion"));
        assert!(lines[4].starts_with("Fitness Challenge"));
        assert!(text.contains("Active Campaigns: 1"));
        assert!(text.contains("Total Creators: 40"));
        assert!(text.contains("Total Reach: 1.1M"));
        Ok(())
    }

    #[test]
    fn outreach_json_carries_rows_and_summary() -> Result<()> {
        let request = ListRequest {
            search: "tech product".to_owned(),
            json: true,
            ..ListRequest::new(TabKind::Outreach)
        };
        let text = render(&Catalog::mock(), &request)?;
        let value: serde_json::Value = serde_json::from_str(&text)?;
        assert_eq!(value["tab"], "outreach");
        assert_eq!(value["visible"], 2);
        assert_eq!(value["rows"][0]["creator_name"], "Mike Chen");
        assert_eq!(value["summary"]["success_rate"], 20);
        assert_eq!(value["summary"]["chips"][0], "All (5)");
        Ok(())
    }

    #[test]
    fn chipless_category_still_filters() -> Result<()> {
        let request = ListRequest {
            category: Some("Opened".to_owned()),
            ..ListRequest::new(TabKind::Outreach)
        };
        let text = render(&Catalog::mock(), &request)?;
        assert!(text.contains("Emma Davis"));
        assert!(text.contains("1 of 5 conversations"));
        Ok(())
    }

    #[test]
    fn unknown_category_lists_choices() {
        let request = ListRequest {
            category: Some("Gaming".to_owned()),
            ..ListRequest::new(TabKind::Discover)
        };
        let error = render(&Catalog::mock(), &request).expect_err("unknown niche");
        let message = error.to_string();
        assert!(message.contains("\"Gaming\""));
        assert!(message.contains("All, Fashion, Tech"));
    }

    #[test]
    fn unknown_sort_lists_keys() {
        let request = ListRequest {
            sort: Some("reach".to_owned()),
            ..ListRequest::new(TabKind::Campaigns)
        };
        let error = render(&Catalog::mock(), &request).expect_err("unknown sort key");
        assert!(error.to_string().contains("name, budget, progress, start"));
    }

    #[test]
    fn non_list_tabs_are_rejected() {
        let error = render(&Catalog::mock(), &ListRequest::new(TabKind::Analytics))
            .expect_err("analytics has no list");
        assert!(error.to_string().contains("analytics has no list"));
    }

    #[test]
    fn empty_view_still_prints_header_and_count() -> Result<()> {
        let request = ListRequest {
            search: "nobody".to_owned(),
            ..ListRequest::new(TabKind::Discover)
        };
        let text = render(&Catalog::mock(), &request)?;
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("0 of 4 creators"));
        Ok(())
    }

    #[test]
    fn table_columns_align() {
        let rows = vec![
            vec!["a".to_owned(), "long cell".to_owned()],
            vec!["wider".to_owned(), "x".to_owned()],
        ];
        let text = aligned_table(&["h1", "h2"], &rows);
        assert_eq!(text, "h1     h2\na      long cell\nwider  x\n");
    }
}
