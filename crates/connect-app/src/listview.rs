// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Client-side list filtering shared by every list screen.
//!
//! A screen hands its full record collection and its [`ListQuery`] to
//! [`ListQuery::apply`] and renders whatever comes back. The collection is
//! only ever borrowed, so filtering and sorting can run on every keystroke
//! without touching the source data.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::model::SortDirection;

/// Label of the chip that disables the category predicate.
pub const ALL_CATEGORY: &str = "All";

/// A closed set of record categories (niche, campaign status, ...).
pub trait Category: Copy + Eq + 'static {
    /// Categories offered as chips, in display order after "All".
    const CHIPS: &'static [Self];

    fn label(self) -> &'static str;
}

pub trait SortKey: Copy + Eq + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
}

/// A displayable business entity the engine can filter and sort.
pub trait Record {
    type Category: Category;
    type SortKey: SortKey;

    fn category(&self) -> Self::Category;

    /// Label fields matched by free-text search.
    fn search_fields(&self) -> impl Iterator<Item = &str>;

    fn sort_value(&self, key: Self::SortKey) -> SortValue<'_>;
}

impl<R: Record + ?Sized> Record for &R {
    type Category = R::Category;
    type SortKey = R::SortKey;

    fn category(&self) -> Self::Category {
        (**self).category()
    }

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        (**self).search_fields()
    }

    fn sort_value(&self, key: Self::SortKey) -> SortValue<'_> {
        (**self).sort_value(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        Self::All
    }
}

impl<C: Category> CategoryFilter<C> {
    /// Parses a chip label. `"All"` disables the predicate; any other label
    /// must name a category exactly. Categories without a chip still parse.
    pub fn parse(label: &str, every: &[C]) -> Option<Self> {
        if label == ALL_CATEGORY {
            return Some(Self::All);
        }
        every
            .iter()
            .copied()
            .find(|category| category.label() == label)
            .map(Self::Only)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => ALL_CATEGORY,
            Self::Only(category) => category.label(),
        }
    }

    pub fn matches(self, category: C) -> bool {
        match self {
            Self::All => true,
            Self::Only(active) => active == category,
        }
    }

    pub fn chips() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(C::CHIPS.iter().copied().map(Self::Only))
            .collect()
    }

    /// Steps through the chip row, wrapping at both ends. A filter whose
    /// category has no chip restarts from "All".
    pub fn rotate(self, delta: isize) -> Self {
        let chips = Self::chips();
        let current = chips.iter().position(|chip| *chip == self).unwrap_or(0) as isize;
        let len = chips.len() as isize;
        chips[(current + delta).rem_euclid(len) as usize]
    }
}

/// Screen-local filter selection: active category chip plus search text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState<C> {
    pub active_category: CategoryFilter<C>,
    pub search_text: String,
}

impl<C> Default for FilterState<C> {
    fn default() -> Self {
        Self {
            active_category: CategoryFilter::All,
            search_text: String::new(),
        }
    }
}

impl<C: Category> FilterState<C> {
    pub fn new(active_category: CategoryFilter<C>, search_text: impl Into<String>) -> Self {
        Self {
            active_category,
            search_text: search_text.into(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.active_category == CategoryFilter::All && self.search_text.is_empty()
    }

    pub fn apply<'a, R>(&self, records: &'a [R]) -> Vec<&'a R>
    where
        R: Record<Category = C>,
    {
        filter(records, self.active_category, &self.search_text)
    }
}

/// Returns the records matching both the category and the search predicate,
/// in their original order.
pub fn filter<'a, R: Record>(
    records: &'a [R],
    active_category: CategoryFilter<R::Category>,
    search_text: &str,
) -> Vec<&'a R> {
    let needle = search_text.to_lowercase();
    records
        .iter()
        .filter(|record| active_category.matches(record.category()))
        .filter(|record| matches_search(*record, &needle))
        .collect()
}

fn matches_search<R: Record>(record: &R, lowered_needle: &str) -> bool {
    if lowered_needle.is_empty() {
        return true;
    }
    record
        .search_fields()
        .any(|field| field.to_lowercase().contains(lowered_needle))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    Text(&'a str),
    /// Parsed display numbers; `None` for values like "N/A".
    Number(Option<f64>),
    Date(Date),
}

impl SortValue<'_> {
    /// Text compares case-insensitively. Missing numbers sort before present
    /// ones. Values of different kinds compare equal.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(left), Self::Text(right)) => left
                .to_lowercase()
                .cmp(&right.to_lowercase())
                .then_with(|| left.cmp(right)),
            (Self::Number(left), Self::Number(right)) => match (left, right) {
                (Some(left), Some(right)) => left.total_cmp(right),
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            (Self::Date(left), Self::Date(right)) => left.cmp(right),
            _ => Ordering::Equal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K: SortKey> SortSpec<K> {
    pub const fn asc(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
        }
    }

    pub const fn desc(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Desc,
        }
    }

    /// Cycles `off -> k0 asc -> k0 desc -> k1 asc -> ... -> off`.
    pub fn cycle(current: Option<Self>) -> Option<Self> {
        let Some(current) = current else {
            return K::ALL.first().copied().map(Self::asc);
        };
        match current.direction {
            SortDirection::Asc => Some(Self::desc(current.key)),
            SortDirection::Desc => {
                let index = K::ALL.iter().position(|key| *key == current.key)?;
                K::ALL.get(index + 1).copied().map(Self::asc)
            }
        }
    }

    pub fn label(self) -> String {
        format!("{} {}", self.key.label(), self.direction.label())
    }
}

/// Parses `key` or `key:desc` against the sort key labels.
pub fn parse_sort_spec<K: SortKey>(raw: &str) -> Option<SortSpec<K>> {
    let (key, direction) = match raw.split_once(':') {
        Some((key, "asc")) => (key, SortDirection::Asc),
        Some((key, "desc")) => (key, SortDirection::Desc),
        Some(_) => return None,
        None => (raw, SortDirection::Asc),
    };
    K::ALL
        .iter()
        .copied()
        .find(|candidate| candidate.label() == key)
        .map(|key| SortSpec { key, direction })
}

/// Stable sort of an already filtered view.
pub fn sort_visible<R: Record>(visible: &mut [&R], sort: SortSpec<R::SortKey>) {
    visible.sort_by(|left, right| {
        let ordering = left
            .sort_value(sort.key)
            .compare(&right.sort_value(sort.key));
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery<C, K> {
    pub filter: FilterState<C>,
    pub sort: Option<SortSpec<K>>,
}

impl<C, K> Default for ListQuery<C, K> {
    fn default() -> Self {
        Self {
            filter: FilterState::default(),
            sort: None,
        }
    }
}

impl<C: Category, K: SortKey> ListQuery<C, K> {
    pub fn apply<'a, R>(&self, records: &'a [R]) -> Vec<&'a R>
    where
        R: Record<Category = C, SortKey = K>,
    {
        let mut visible = self.filter.apply(records);
        if let Some(sort) = self.sort {
            sort_visible(&mut visible, sort);
        }
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Category, CategoryFilter, FilterState, ListQuery, Record, SortKey, SortSpec, SortValue,
        filter, parse_sort_spec,
    };
    use crate::model::SortDirection;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Kind {
        Fashion,
        Tech,
        Hidden,
    }

    impl Category for Kind {
        const CHIPS: &'static [Self] = &[Self::Fashion, Self::Tech];

        fn label(self) -> &'static str {
            match self {
                Self::Fashion => "Fashion",
                Self::Tech => "Tech",
                Self::Hidden => "Hidden",
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Key {
        Name,
        Score,
    }

    impl SortKey for Key {
        const ALL: &'static [Self] = &[Self::Name, Self::Score];

        fn label(self) -> &'static str {
            match self {
                Self::Name => "name",
                Self::Score => "score",
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        handle: &'static str,
        kind: Kind,
        score: Option<f64>,
    }

    impl Record for Row {
        type Category = Kind;
        type SortKey = Key;

        fn category(&self) -> Kind {
            self.kind
        }

        fn search_fields(&self) -> impl Iterator<Item = &str> {
            [self.name, self.handle].into_iter()
        }

        fn sort_value(&self, key: Key) -> SortValue<'_> {
            match key {
                Key::Name => SortValue::Text(self.name),
                Key::Score => SortValue::Number(self.score),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "Sarah",
                handle: "@sarahj",
                kind: Kind::Fashion,
                score: Some(4.2),
            },
            Row {
                name: "Mike",
                handle: "@mikechen",
                kind: Kind::Tech,
                score: Some(5.1),
            },
            Row {
                name: "emma",
                handle: "@emmadavis",
                kind: Kind::Fashion,
                score: None,
            },
        ]
    }

    fn names(rows: &[&Row]) -> Vec<&'static str> {
        rows.iter().map(|row| row.name).collect()
    }

    #[test]
    fn all_and_empty_search_is_identity() {
        let rows = rows();
        let visible = filter(&rows, CategoryFilter::All, "");
        assert_eq!(names(&visible), vec!["Sarah", "Mike", "emma"]);
    }

    #[test]
    fn category_predicate_keeps_exact_matches() {
        let rows = rows();
        let visible = filter(&rows, CategoryFilter::Only(Kind::Tech), "");
        assert_eq!(names(&visible), vec!["Mike"]);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let rows = rows();
        assert_eq!(
            names(&filter(&rows, CategoryFilter::All, "SAR")),
            vec!["Sarah"]
        );
        assert_eq!(
            names(&filter(&rows, CategoryFilter::All, "chen")),
            vec!["Mike"]
        );
        assert!(filter(&rows, CategoryFilter::All, "zzz").is_empty());
    }

    #[test]
    fn category_and_search_are_anded() {
        let rows = rows();
        let visible = filter(&rows, CategoryFilter::Only(Kind::Fashion), "m");
        assert_eq!(names(&visible), vec!["emma"]);
        assert!(filter(&rows, CategoryFilter::Only(Kind::Tech), "sarah").is_empty());
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        let rows = rows();
        let state = FilterState::new(CategoryFilter::Only(Kind::Fashion), "a");
        let once = state.apply(&rows);
        let twice = state.apply(&once);
        assert_eq!(once.len(), twice.len());
        assert!(once.iter().zip(&twice).all(|(a, b)| a == *b));
    }

    #[test]
    fn empty_records_yield_empty_subset() {
        let rows: Vec<Row> = Vec::new();
        assert!(filter(&rows, CategoryFilter::Only(Kind::Tech), "x").is_empty());
    }

    #[test]
    fn parse_handles_all_sentinel_and_chipless_categories() {
        let every = [Kind::Fashion, Kind::Tech, Kind::Hidden];
        assert_eq!(CategoryFilter::parse("All", &every), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::parse("Hidden", &every),
            Some(CategoryFilter::Only(Kind::Hidden))
        );
        assert_eq!(CategoryFilter::<Kind>::parse("all", &every), None);
    }

    #[test]
    fn chip_rotation_wraps_both_ways() {
        let all = CategoryFilter::<Kind>::All;
        assert_eq!(all.rotate(1), CategoryFilter::Only(Kind::Fashion));
        assert_eq!(all.rotate(-1), CategoryFilter::Only(Kind::Tech));
        assert_eq!(CategoryFilter::Only(Kind::Tech).rotate(1), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::Only(Kind::Hidden).rotate(1),
            CategoryFilter::Only(Kind::Fashion)
        );
    }

    #[test]
    fn sort_orders_after_filtering_and_is_stable() {
        let rows = rows();
        let query = ListQuery {
            filter: FilterState::default(),
            sort: Some(SortSpec::asc(Key::Name)),
        };
        assert_eq!(names(&query.apply(&rows)), vec!["emma", "Mike", "Sarah"]);

        let query = ListQuery {
            filter: FilterState::default(),
            sort: Some(SortSpec::desc(Key::Score)),
        };
        assert_eq!(names(&query.apply(&rows)), vec!["Mike", "Sarah", "emma"]);
    }

    #[test]
    fn sort_cycle_walks_keys_then_turns_off() {
        let first = SortSpec::<Key>::cycle(None);
        assert_eq!(first, Some(SortSpec::asc(Key::Name)));
        let second = SortSpec::cycle(first);
        assert_eq!(second, Some(SortSpec::desc(Key::Name)));
        let third = SortSpec::cycle(second);
        assert_eq!(third, Some(SortSpec::asc(Key::Score)));
        let fourth = SortSpec::cycle(third);
        assert_eq!(fourth.map(|sort| sort.direction), Some(SortDirection::Desc));
        assert_eq!(SortSpec::cycle(fourth), None);
    }

    #[test]
    fn parse_sort_spec_accepts_direction_suffix() {
        assert_eq!(parse_sort_spec::<Key>("score"), Some(SortSpec::asc(Key::Score)));
        assert_eq!(
            parse_sort_spec::<Key>("name:desc"),
            Some(SortSpec::desc(Key::Name))
        );
        assert_eq!(parse_sort_spec::<Key>("name:sideways"), None);
        assert_eq!(parse_sort_spec::<Key>("rank"), None);
    }
}
