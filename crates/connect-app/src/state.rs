// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::listview::{Category, ListQuery, SortKey, SortSpec};
use crate::model::{
    AppMode, CampaignSortKey, CampaignStatus, ChartMetric, CreatorSortKey, Niche, OutreachSortKey,
    OutreachStatus, Period, TabKind, rotate,
};

/// Query and cursor of one list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState<C, K> {
    pub query: ListQuery<C, K>,
    pub selected: usize,
}

impl<C, K> Default for ListState<C, K> {
    fn default() -> Self {
        Self {
            query: ListQuery::default(),
            selected: 0,
        }
    }
}

pub type CreatorListState = ListState<Niche, CreatorSortKey>;
pub type CampaignListState = ListState<CampaignStatus, CampaignSortKey>;
pub type OutreachListState = ListState<OutreachStatus, OutreachSortKey>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalyticsState {
    pub period: Period,
    pub chart_metric: ChartMetric,
}

/// Screen-local state of the mounted tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenState {
    Discover(CreatorListState),
    Campaigns(CampaignListState),
    Analytics(AnalyticsState),
    Outreach(OutreachListState),
    Profile,
}

impl ScreenState {
    /// Fresh state for `tab`. Called on every tab change, so filters,
    /// search text and cursors never survive leaving a screen.
    pub fn mount(tab: TabKind) -> Self {
        match tab {
            TabKind::Discover => Self::Discover(ListState::default()),
            TabKind::Campaigns => Self::Campaigns(ListState::default()),
            TabKind::Analytics => Self::Analytics(AnalyticsState::default()),
            TabKind::Outreach => Self::Outreach(ListState::default()),
            TabKind::Profile => Self::Profile,
        }
    }

    pub const fn tab(&self) -> TabKind {
        match self {
            Self::Discover(_) => TabKind::Discover,
            Self::Campaigns(_) => TabKind::Campaigns,
            Self::Analytics(_) => TabKind::Analytics,
            Self::Outreach(_) => TabKind::Outreach,
            Self::Profile => TabKind::Profile,
        }
    }

    pub fn search_text(&self) -> Option<&str> {
        match self {
            Self::Discover(list) => Some(&list.query.filter.search_text),
            Self::Campaigns(list) => Some(&list.query.filter.search_text),
            Self::Outreach(list) => Some(&list.query.filter.search_text),
            Self::Analytics(_) | Self::Profile => None,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        match self {
            Self::Discover(list) => Some(list.selected),
            Self::Campaigns(list) => Some(list.selected),
            Self::Outreach(list) => Some(list.selected),
            Self::Analytics(_) | Self::Profile => None,
        }
    }

    fn list_mut(&mut self) -> Option<&mut dyn ListControls> {
        match self {
            Self::Discover(list) => Some(list),
            Self::Campaigns(list) => Some(list),
            Self::Outreach(list) => Some(list),
            Self::Analytics(_) | Self::Profile => None,
        }
    }
}

/// Type-erased edits shared by the three list screens.
trait ListControls {
    fn rotate_category(&mut self, delta: isize) -> &'static str;
    fn search_text_mut(&mut self) -> &mut String;
    fn cycle_sort(&mut self) -> Option<String>;
    fn selected_mut(&mut self) -> &mut usize;
}

impl<C: Category, K: SortKey> ListControls for ListState<C, K> {
    fn rotate_category(&mut self, delta: isize) -> &'static str {
        let next = self.query.filter.active_category.rotate(delta);
        self.query.filter.active_category = next;
        self.selected = 0;
        next.label()
    }

    fn search_text_mut(&mut self) -> &mut String {
        &mut self.query.filter.search_text
    }

    fn cycle_sort(&mut self) -> Option<String> {
        self.query.sort = SortSpec::cycle(self.query.sort);
        self.query.sort.map(SortSpec::label)
    }

    fn selected_mut(&mut self) -> &mut usize {
        &mut self.selected
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub mode: AppMode,
    pub active_tab: TabKind,
    pub screen: ScreenState,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TabKind::Discover)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    NextTab,
    PrevTab,
    SelectTab(TabKind),
    NextCategory,
    PrevCategory,
    EnterSearch,
    ExitSearch,
    SearchInput(char),
    SearchBackspace,
    ClearSearch,
    CycleSort,
    NextPeriod,
    NextChartMetric,
    MoveSelection { delta: isize, visible_len: usize },
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ModeChanged(AppMode),
    TabChanged(TabKind),
    CategoryChanged(&'static str),
    SearchChanged(String),
    SortChanged(Option<String>),
    PeriodChanged(Period),
    ChartMetricChanged(ChartMetric),
    SelectionMoved(usize),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn new(start_tab: TabKind) -> Self {
        Self {
            mode: AppMode::Nav,
            active_tab: start_tab,
            screen: ScreenState::mount(start_tab),
            status_line: None,
        }
    }

    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::NextTab => self.switch_tab(rotate(&TabKind::ALL, self.active_tab, 1)),
            AppCommand::PrevTab => self.switch_tab(rotate(&TabKind::ALL, self.active_tab, -1)),
            AppCommand::SelectTab(tab) => {
                if tab == self.active_tab {
                    return Vec::new();
                }
                self.switch_tab(tab)
            }
            AppCommand::NextCategory => self.rotate_category(1),
            AppCommand::PrevCategory => self.rotate_category(-1),
            AppCommand::EnterSearch => {
                if self.screen.list_mut().is_none() {
                    return vec![self.unavailable("search")];
                }
                self.mode = AppMode::Search;
                vec![AppEvent::ModeChanged(self.mode)]
            }
            AppCommand::ExitSearch => {
                if self.mode == AppMode::Nav {
                    return Vec::new();
                }
                self.mode = AppMode::Nav;
                vec![AppEvent::ModeChanged(self.mode)]
            }
            AppCommand::SearchInput(ch) => self.edit_search(|text| {
                text.push(ch);
                true
            }),
            AppCommand::SearchBackspace => self.edit_search(|text| text.pop().is_some()),
            AppCommand::ClearSearch => self.edit_search(|text| {
                let changed = !text.is_empty();
                text.clear();
                changed
            }),
            AppCommand::CycleSort => {
                let Some(list) = self.screen.list_mut() else {
                    return vec![self.unavailable("sorting")];
                };
                let label = list.cycle_sort();
                let message = match &label {
                    Some(label) => format!("sort {label}"),
                    None => "sort off".to_owned(),
                };
                vec![AppEvent::SortChanged(label), self.set_status(&message)]
            }
            AppCommand::NextPeriod => {
                let ScreenState::Analytics(analytics) = &mut self.screen else {
                    return vec![self.unavailable("periods")];
                };
                analytics.period = analytics.period.next();
                vec![AppEvent::PeriodChanged(analytics.period)]
            }
            AppCommand::NextChartMetric => {
                let ScreenState::Analytics(analytics) = &mut self.screen else {
                    return vec![self.unavailable("chart metrics")];
                };
                analytics.chart_metric = analytics.chart_metric.next();
                vec![AppEvent::ChartMetricChanged(analytics.chart_metric)]
            }
            AppCommand::MoveSelection { delta, visible_len } => {
                let Some(list) = self.screen.list_mut() else {
                    return vec![self.unavailable("selection")];
                };
                let selected = list.selected_mut();
                let next = if visible_len == 0 {
                    0
                } else {
                    let max = visible_len as isize - 1;
                    (*selected as isize + delta).clamp(0, max) as usize
                };
                if next == *selected {
                    return Vec::new();
                }
                *selected = next;
                vec![AppEvent::SelectionMoved(next)]
            }
            AppCommand::SetStatus(message) => vec![self.set_status(&message)],
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    fn switch_tab(&mut self, tab: TabKind) -> Vec<AppEvent> {
        let mut events = Vec::new();
        if self.mode != AppMode::Nav {
            self.mode = AppMode::Nav;
            events.push(AppEvent::ModeChanged(self.mode));
        }
        self.active_tab = tab;
        self.screen = ScreenState::mount(tab);
        events.push(AppEvent::TabChanged(tab));
        events
    }

    fn rotate_category(&mut self, delta: isize) -> Vec<AppEvent> {
        let Some(list) = self.screen.list_mut() else {
            return vec![self.unavailable("categories")];
        };
        vec![AppEvent::CategoryChanged(list.rotate_category(delta))]
    }

    fn edit_search(&mut self, edit: impl FnOnce(&mut String) -> bool) -> Vec<AppEvent> {
        let Some(list) = self.screen.list_mut() else {
            return vec![self.unavailable("search")];
        };
        let text = list.search_text_mut();
        if !edit(&mut *text) {
            return Vec::new();
        }
        let text = text.clone();
        *list.selected_mut() = 0;
        vec![AppEvent::SearchChanged(text)]
    }

    fn unavailable(&mut self, feature: &str) -> AppEvent {
        let message = format!("no {feature} on {}", self.active_tab.label());
        self.set_status(&message)
    }

    fn set_status(&mut self, message: &str) -> AppEvent {
        self.status_line = Some(message.to_owned());
        AppEvent::StatusUpdated(message.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::{AnalyticsState, AppCommand, AppEvent, AppState, ScreenState};
    use crate::listview::{CategoryFilter, SortSpec};
    use crate::model::{
        AppMode, CampaignStatus, ChartMetric, CreatorSortKey, Niche, OutreachStatus, Period,
        TabKind,
    };

    #[test]
    fn tab_rotation_wraps() {
        let mut state = AppState::new(TabKind::Profile);

        let events = state.dispatch(AppCommand::NextTab);
        assert_eq!(state.active_tab, TabKind::Discover);
        assert_eq!(events, vec![AppEvent::TabChanged(TabKind::Discover)]);

        state.dispatch(AppCommand::PrevTab);
        assert_eq!(state.active_tab, TabKind::Profile);
        assert_eq!(state.screen, ScreenState::Profile);
    }

    #[test]
    fn tab_change_remounts_screen_state() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::NextCategory);
        state.dispatch(AppCommand::SearchInput('s'));
        let ScreenState::Discover(list) = &state.screen else {
            panic!("expected discover screen");
        };
        assert_eq!(
            list.query.filter.active_category,
            CategoryFilter::Only(Niche::Fashion)
        );

        state.dispatch(AppCommand::NextTab);
        state.dispatch(AppCommand::PrevTab);
        assert_eq!(state.screen, ScreenState::mount(TabKind::Discover));
    }

    #[test]
    fn selecting_current_tab_is_a_no_op() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::SearchInput('a'));

        assert!(state.dispatch(AppCommand::SelectTab(TabKind::Discover)).is_empty());
        assert_eq!(state.screen.search_text(), Some("a"));

        let events = state.dispatch(AppCommand::SelectTab(TabKind::Analytics));
        assert_eq!(events, vec![AppEvent::TabChanged(TabKind::Analytics)]);
        assert_eq!(
            state.screen,
            ScreenState::Analytics(AnalyticsState {
                period: Period::Month,
                chart_metric: ChartMetric::Reach,
            })
        );
    }

    #[test]
    fn category_chips_rotate_per_screen() {
        let mut state = AppState::new(TabKind::Campaigns);
        let events = state.dispatch(AppCommand::NextCategory);
        assert_eq!(events, vec![AppEvent::CategoryChanged("Active")]);

        let mut state = AppState::new(TabKind::Outreach);
        let events = state.dispatch(AppCommand::PrevCategory);
        assert_eq!(events, vec![AppEvent::CategoryChanged("Declined")]);
        let ScreenState::Outreach(list) = &state.screen else {
            panic!("expected outreach screen");
        };
        assert_eq!(
            list.query.filter.active_category,
            CategoryFilter::Only(OutreachStatus::Declined)
        );
        assert_ne!(
            list.query.filter.active_category,
            CategoryFilter::Only(OutreachStatus::Opened)
        );

        let mut state = AppState::new(TabKind::Campaigns);
        state.dispatch(AppCommand::PrevCategory);
        let ScreenState::Campaigns(list) = &state.screen else {
            panic!("expected campaigns screen");
        };
        assert_eq!(
            list.query.filter.active_category,
            CategoryFilter::Only(CampaignStatus::Complete)
        );
    }

    #[test]
    fn search_editing_emits_changes() {
        let mut state = AppState::default();
        assert_eq!(
            state.dispatch(AppCommand::EnterSearch),
            vec![AppEvent::ModeChanged(AppMode::Search)]
        );
        state.dispatch(AppCommand::SearchInput('e'));
        let events = state.dispatch(AppCommand::SearchInput('m'));
        assert_eq!(events, vec![AppEvent::SearchChanged("em".to_owned())]);

        let events = state.dispatch(AppCommand::SearchBackspace);
        assert_eq!(events, vec![AppEvent::SearchChanged("e".to_owned())]);

        state.dispatch(AppCommand::ClearSearch);
        assert_eq!(state.screen.search_text(), Some(""));
        assert!(state.dispatch(AppCommand::SearchBackspace).is_empty());
        assert!(state.dispatch(AppCommand::ClearSearch).is_empty());

        state.dispatch(AppCommand::ExitSearch);
        assert_eq!(state.mode, AppMode::Nav);
    }

    #[test]
    fn leaving_tab_exits_search_mode() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::EnterSearch);

        let events = state.dispatch(AppCommand::NextTab);
        assert_eq!(
            events,
            vec![
                AppEvent::ModeChanged(AppMode::Nav),
                AppEvent::TabChanged(TabKind::Campaigns),
            ]
        );
    }

    #[test]
    fn inapplicable_commands_set_status() {
        let mut state = AppState::new(TabKind::Profile);

        let events = state.dispatch(AppCommand::EnterSearch);
        assert_eq!(
            events,
            vec![AppEvent::StatusUpdated("no search on profile".to_owned())]
        );
        assert_eq!(state.mode, AppMode::Nav);

        state.dispatch(AppCommand::NextPeriod);
        assert_eq!(state.status_line.as_deref(), Some("no periods on profile"));

        let mut state = AppState::new(TabKind::Analytics);
        state.dispatch(AppCommand::NextCategory);
        assert_eq!(
            state.status_line.as_deref(),
            Some("no categories on analytics")
        );
        state.dispatch(AppCommand::MoveSelection {
            delta: 1,
            visible_len: 3,
        });
        assert_eq!(state.status_line.as_deref(), Some("no selection on analytics"));
    }

    #[test]
    fn sort_cycles_through_keys_then_off() {
        let mut state = AppState::default();
        let events = state.dispatch(AppCommand::CycleSort);
        assert_eq!(
            events,
            vec![
                AppEvent::SortChanged(Some("name asc".to_owned())),
                AppEvent::StatusUpdated("sort name asc".to_owned()),
            ]
        );

        for _ in 0..5 {
            state.dispatch(AppCommand::CycleSort);
        }
        let ScreenState::Discover(list) = &state.screen else {
            panic!("expected discover screen");
        };
        assert_eq!(
            list.query.sort,
            Some(SortSpec::desc(CreatorSortKey::Engagement))
        );

        let events = state.dispatch(AppCommand::CycleSort);
        assert_eq!(events[0], AppEvent::SortChanged(None));
        assert_eq!(state.status_line.as_deref(), Some("sort off"));
    }

    #[test]
    fn analytics_period_and_metric_rotate() {
        let mut state = AppState::new(TabKind::Analytics);
        assert_eq!(
            state.dispatch(AppCommand::NextPeriod),
            vec![AppEvent::PeriodChanged(Period::Quarter)]
        );
        assert_eq!(
            state.dispatch(AppCommand::NextChartMetric),
            vec![AppEvent::ChartMetricChanged(ChartMetric::Engagement)]
        );
    }

    #[test]
    fn selection_clamps_to_visible_rows() {
        let mut state = AppState::default();
        let events = state.dispatch(AppCommand::MoveSelection {
            delta: 10,
            visible_len: 4,
        });
        assert_eq!(events, vec![AppEvent::SelectionMoved(3)]);

        assert!(
            state
                .dispatch(AppCommand::MoveSelection {
                    delta: 1,
                    visible_len: 4
                })
                .is_empty()
        );

        state.dispatch(AppCommand::MoveSelection {
            delta: -1,
            visible_len: 0,
        });
        assert_eq!(state.screen.selected(), Some(0));
    }

    #[test]
    fn filter_change_resets_selection() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::MoveSelection {
            delta: 2,
            visible_len: 4,
        });
        state.dispatch(AppCommand::NextCategory);
        assert_eq!(state.screen.selected(), Some(0));
    }

    #[test]
    fn search_edits_that_change_nothing_keep_selection() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::MoveSelection {
            delta: 2,
            visible_len: 4,
        });
        state.dispatch(AppCommand::EnterSearch);

        assert!(state.dispatch(AppCommand::SearchBackspace).is_empty());
        assert!(state.dispatch(AppCommand::ClearSearch).is_empty());
        assert_eq!(state.screen.selected(), Some(2));

        state.dispatch(AppCommand::SearchInput('a'));
        assert_eq!(state.screen.selected(), Some(0));
    }

    #[test]
    fn status_set_and_clear() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::SetStatus("loaded".to_owned()));
        assert_eq!(state.status_line.as_deref(), Some("loaded"));
        assert_eq!(
            state.dispatch(AppCommand::ClearStatus),
            vec![AppEvent::StatusCleared]
        );
        assert_eq!(state.status_line, None);
    }
}
