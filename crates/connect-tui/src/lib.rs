// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use connect_app::format::{format_compact, format_date_range, format_percent};
use connect_app::summary::{
    ACCEPTED, ACTIVE_CAMPAIGNS, REPLIES, SUCCESS_RATE, TOTAL_CREATORS, TOTAL_REACH,
};
use connect_app::{
    AnalyticsState, AppCommand, AppEvent, AppMode, AppState, Campaign, CampaignListState,
    CampaignStatus, CampaignSummary, Category, CategoryFilter, ChartMetric, ChartPoint, Creator,
    CreatorListState, ListState, Niche, OutreachListState, OutreachSummary, OutreachThread, Period,
    Record, Rgb, ScreenState, SortKey, SortSpec, Styled, TabKind, campaign_summary,
    category_counts, counted_label, outreach_summary, palette, scale_to_chart,
};
use connect_catalog::{
    APP_TITLE, AnalyticsSnapshot, COPYRIGHT_LINE, ProfileSnapshot, TabSnapshot, version_line,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Tabs};
use ratatui::{Frame, Terminal};
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

pub const DEFAULT_STATUS_TIMEOUT: Duration = Duration::from_secs(4);

const FILTER_MARK: &str = "▼";
const CHEVRON: &str = "›";
const PROGRESS_WIDTH: usize = 10;
const MESSAGE_PREVIEW_CHARS: usize = 40;
const MIN_CHART_HEIGHT: usize = 3;
const MAX_CHART_HEIGHT: usize = 12;

pub trait AppRuntime {
    fn load_tab_snapshot(&mut self, tab: TabKind) -> Result<TabSnapshot>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    /// How long a transient status message stays in the status bar.
    pub status_timeout: Duration,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            status_timeout: DEFAULT_STATUS_TIMEOUT,
        }
    }
}

pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, PartialEq)]
struct ViewData {
    snapshot: Option<TabSnapshot>,
    help_visible: bool,
    status_token: u64,
    status_timeout: Duration,
}

impl ViewData {
    fn new(options: UiOptions) -> Self {
        Self {
            snapshot: None,
            help_visible: false,
            status_token: 0,
            status_timeout: options.status_timeout,
        }
    }
}

impl Default for ViewData {
    fn default() -> Self {
        Self::new(UiOptions::default())
    }
}

pub fn run_app<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    options: UiOptions,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut terminal = setup_or_restore(enter_terminal, restore_terminal)?;

    let mut view_data = ViewData::new(options);
    let (internal_tx, internal_rx) = mpsc::channel();

    tracing::info!(tab = state.active_tab.label(), "ui started");
    if let Err(error) = refresh_view_data(state, runtime, &mut view_data) {
        tracing::warn!(tab = state.active_tab.label(), error = %error, "initial load failed");
        emit_status(
            state,
            &mut view_data,
            &internal_tx,
            format!("load failed: {error}"),
        );
    }

    let mut result = Ok(());
    loop {
        process_internal_events(state, &mut view_data, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = match event::poll(Duration::from_millis(120)).context("poll event") {
            Ok(has_event) => has_event,
            Err(error) => {
                result = Err(error);
                break;
            }
        };
        if has_event {
            match event::read().context("read event") {
                Ok(Event::Key(key)) => {
                    if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Ok(_) => {}
                Err(error) => {
                    result = Err(error);
                    break;
                }
            }
        }
    }

    restore_terminal()?;
    tracing::info!("ui stopped");
    result
}

fn enter_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("create terminal")
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    Ok(())
}

/// Runs terminal setup; if it fails, the terminal is restored before the
/// setup error is returned.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    match setup() {
        Ok(value) => Ok(value),
        Err(error) => {
            if let Err(restore_error) = restore() {
                tracing::warn!(error = %restore_error, "terminal restore failed");
            }
            Err(error)
        }
    }
}

fn process_internal_events(
    state: &mut AppState,
    view_data: &mut ViewData,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64, timeout: Duration) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(timeout);
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn bump_status_token(view_data: &mut ViewData, internal_tx: &Sender<InternalEvent>) {
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token, view_data.status_timeout);
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    bump_status_token(view_data, internal_tx);
}

fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            view_data.help_visible = false;
            emit_status(state, view_data, internal_tx, "help hidden");
        }
        return false;
    }

    let command = match state.mode {
        AppMode::Search => search_command_for_key(key),
        AppMode::Nav => {
            match key.code {
                KeyCode::Char('q') => return true,
                KeyCode::Char('?') => {
                    view_data.help_visible = true;
                    return false;
                }
                _ => {}
            }
            nav_command_for_key(key, visible_row_count(state, view_data))
        }
    };

    if let Some(command) = command {
        dispatch_and_refresh(state, runtime, view_data, command, internal_tx);
    }
    false
}

fn search_command_for_key(key: KeyEvent) -> Option<AppCommand> {
    match (key.code, key.modifiers) {
        (KeyCode::Esc | KeyCode::Enter, _) => Some(AppCommand::ExitSearch),
        (KeyCode::Tab, _) => Some(AppCommand::NextTab),
        (KeyCode::BackTab, _) => Some(AppCommand::PrevTab),
        (KeyCode::Backspace, _) => Some(AppCommand::SearchBackspace),
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Some(AppCommand::ClearSearch),
        (KeyCode::Char(ch), modifiers)
            if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(AppCommand::SearchInput(ch))
        }
        _ => None,
    }
}

fn nav_command_for_key(key: KeyEvent, visible_len: usize) -> Option<AppCommand> {
    let command = match key.code {
        KeyCode::Tab | KeyCode::Char('f') => AppCommand::NextTab,
        KeyCode::BackTab | KeyCode::Char('b') => AppCommand::PrevTab,
        KeyCode::Char(digit @ '1'..='5') => {
            let index = digit.to_digit(10)? as usize - 1;
            AppCommand::SelectTab(*TabKind::ALL.get(index)?)
        }
        KeyCode::Char('l') | KeyCode::Right => AppCommand::NextCategory,
        KeyCode::Char('h') | KeyCode::Left => AppCommand::PrevCategory,
        KeyCode::Char('/') => AppCommand::EnterSearch,
        KeyCode::Char('s') => AppCommand::CycleSort,
        KeyCode::Char('p') => AppCommand::NextPeriod,
        KeyCode::Char('m') => AppCommand::NextChartMetric,
        KeyCode::Char('j') | KeyCode::Down => AppCommand::MoveSelection {
            delta: 1,
            visible_len,
        },
        KeyCode::Char('k') | KeyCode::Up => AppCommand::MoveSelection {
            delta: -1,
            visible_len,
        },
        _ => return None,
    };
    Some(command)
}

fn dispatch_and_refresh<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    command: AppCommand,
    internal_tx: &Sender<InternalEvent>,
) {
    let events = state.dispatch(command);
    for event in &events {
        trace_event(state.active_tab, event);
    }

    if events
        .iter()
        .any(|event| matches!(event, AppEvent::TabChanged(_)))
        && let Err(error) = refresh_view_data(state, runtime, view_data)
    {
        tracing::warn!(tab = state.active_tab.label(), error = %error, "tab load failed");
        emit_status(
            state,
            view_data,
            internal_tx,
            format!("load failed: {error}"),
        );
        return;
    }

    if events
        .iter()
        .any(|event| matches!(event, AppEvent::StatusUpdated(_)))
    {
        bump_status_token(view_data, internal_tx);
    }
}

fn trace_event(tab: TabKind, event: &AppEvent) {
    match event {
        AppEvent::TabChanged(tab) => tracing::info!(tab = tab.label(), "tab changed"),
        AppEvent::CategoryChanged(chip) => {
            tracing::debug!(tab = tab.label(), chip = *chip, "category changed");
        }
        AppEvent::SearchChanged(text) => {
            tracing::debug!(tab = tab.label(), search = %text, "search changed");
        }
        AppEvent::SortChanged(sort) => {
            tracing::debug!(
                tab = tab.label(),
                sort = sort.as_deref().unwrap_or("off"),
                "sort changed"
            );
        }
        AppEvent::PeriodChanged(period) => {
            tracing::debug!(period = period.label(), "period changed");
        }
        AppEvent::ChartMetricChanged(metric) => {
            tracing::debug!(metric = metric.label(), "chart metric changed");
        }
        _ => {}
    }
}

fn refresh_view_data<R: AppRuntime>(
    state: &AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
) -> Result<()> {
    view_data.snapshot = None;
    let snapshot = runtime.load_tab_snapshot(state.active_tab)?;
    view_data.snapshot = Some(snapshot);
    Ok(())
}

/// Rows currently visible on the mounted list screen.
fn visible_row_count(state: &AppState, view_data: &ViewData) -> usize {
    match (&state.screen, &view_data.snapshot) {
        (ScreenState::Discover(list), Some(TabSnapshot::Discover(rows))) => {
            list.query.apply(rows).len()
        }
        (ScreenState::Campaigns(list), Some(TabSnapshot::Campaigns(rows))) => {
            list.query.apply(rows).len()
        }
        (ScreenState::Outreach(list), Some(TabSnapshot::Outreach(rows))) => {
            list.query.apply(rows).len()
        }
        _ => 0,
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

fn active_filter_marker(state: &AppState) -> Option<&'static str> {
    let identity = match &state.screen {
        ScreenState::Discover(list) => list.query.filter.is_identity(),
        ScreenState::Campaigns(list) => list.query.filter.is_identity(),
        ScreenState::Outreach(list) => list.query.filter.is_identity(),
        ScreenState::Analytics(_) | ScreenState::Profile => true,
    };
    (!identity).then_some(FILTER_MARK)
}

fn tab_title(tab: TabKind, state: &AppState) -> String {
    let number = TabKind::ALL
        .iter()
        .position(|candidate| *candidate == tab)
        .map_or(0, |index| index + 1);
    if state.active_tab == tab
        && let Some(marker) = active_filter_marker(state)
    {
        return format!(" {number} {} {marker} ", tab.label());
    }
    format!(" {number} {} ", tab.label())
}

fn render(frame: &mut Frame<'_>, state: &AppState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(frame.area());

    let selected = TabKind::ALL
        .iter()
        .position(|tab| *tab == state.active_tab)
        .unwrap_or(0);
    let tab_titles = TabKind::ALL
        .iter()
        .map(|tab| tab_title(*tab, state))
        .collect::<Vec<String>>();
    let tabs = Tabs::new(tab_titles)
        .block(Block::default().title(APP_TITLE).borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(color(palette::INDIGO))
                .add_modifier(Modifier::BOLD),
        )
        .select(selected);
    frame.render_widget(tabs, layout[0]);

    render_body(frame, layout[1], state, view_data);

    let status_widget = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(status_widget, layout[2]);

    if view_data.help_visible {
        let area = centered_rect(70, 50, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn render_body(frame: &mut Frame<'_>, area: Rect, state: &AppState, view_data: &ViewData) {
    let searching = state.mode == AppMode::Search;
    match (&state.screen, &view_data.snapshot) {
        (ScreenState::Discover(list), Some(TabSnapshot::Discover(creators))) => {
            let header = discover_header_text(list, creators, searching);
            render_list(frame, area, &creator_columns(), header, list, creators);
        }
        (ScreenState::Campaigns(list), Some(TabSnapshot::Campaigns(campaigns))) => {
            let header = campaigns_header_text(list, campaigns, searching);
            render_list(frame, area, &campaign_columns(), header, list, campaigns);
        }
        (ScreenState::Outreach(list), Some(TabSnapshot::Outreach(threads))) => {
            let header = outreach_header_text(list, threads, searching);
            render_list(frame, area, &outreach_columns(), header, list, threads);
        }
        (ScreenState::Analytics(analytics), Some(TabSnapshot::Analytics(snapshot))) => {
            let fixed_lines = 9
                + snapshot.metric_cards.len()
                + snapshot.performance.len()
                + snapshot.top_content.len();
            let chart_height = usize::from(area.height.saturating_sub(2))
                .saturating_sub(fixed_lines)
                .clamp(MIN_CHART_HEIGHT, MAX_CHART_HEIGHT);
            let body = Paragraph::new(render_analytics_text(snapshot, *analytics, chart_height))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(TabKind::Analytics.title()),
                );
            frame.render_widget(body, area);
        }
        (ScreenState::Profile, Some(TabSnapshot::Profile(profile))) => {
            let body = Paragraph::new(render_profile_text(profile)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(TabKind::Profile.title()),
            );
            frame.render_widget(body, area);
        }
        _ => {
            let empty = Paragraph::new("nothing loaded").block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(state.active_tab.title()),
            );
            frame.render_widget(empty, area);
        }
    }
}

/// Column layout of one list screen.
struct ListColumns<R> {
    title: &'static str,
    headers: &'static [&'static str],
    widths: &'static [Constraint],
    cells: fn(&R) -> Vec<String>,
    /// Column index and colour of the status badge, if the row has one.
    accent: fn(&R) -> Option<(usize, Rgb)>,
}

const CREATOR_HEADERS: [&str; 7] = [
    "creator",
    "username",
    "niche",
    "followers",
    "engagement",
    "avg views",
    "rate",
];
const CREATOR_WIDTHS: [Constraint; 7] = [
    Constraint::Min(18),
    Constraint::Length(16),
    Constraint::Length(10),
    Constraint::Length(10),
    Constraint::Length(11),
    Constraint::Length(10),
    Constraint::Length(12),
];

const CAMPAIGN_HEADERS: [&str; 8] = [
    "campaign",
    "status",
    "progress",
    "budget",
    "creators",
    "reach",
    "engagement",
    "dates",
];
const CAMPAIGN_WIDTHS: [Constraint; 8] = [
    Constraint::Min(20),
    Constraint::Length(11),
    Constraint::Length(15),
    Constraint::Length(9),
    Constraint::Length(9),
    Constraint::Length(7),
    Constraint::Length(11),
    Constraint::Length(27),
];

const OUTREACH_HEADERS: [&str; 6] = [
    "creator", "status", "campaign", "message", "when", "unread",
];
const OUTREACH_WIDTHS: [Constraint; 6] = [
    Constraint::Length(16),
    Constraint::Length(11),
    Constraint::Length(22),
    Constraint::Min(20),
    Constraint::Length(12),
    Constraint::Length(7),
];

fn creator_columns() -> ListColumns<Creator> {
    ListColumns {
        title: "Discover Creators",
        headers: &CREATOR_HEADERS,
        widths: &CREATOR_WIDTHS,
        cells: creator_cells,
        accent: |creator| creator.verified.then_some((0, palette::INDIGO)),
    }
}

fn campaign_columns() -> ListColumns<Campaign> {
    ListColumns {
        title: "My Campaigns",
        headers: &CAMPAIGN_HEADERS,
        widths: &CAMPAIGN_WIDTHS,
        cells: campaign_cells,
        accent: |campaign| Some((1, campaign.status.style().foreground)),
    }
}

fn outreach_columns() -> ListColumns<OutreachThread> {
    ListColumns {
        title: "Outreach",
        headers: &OUTREACH_HEADERS,
        widths: &OUTREACH_WIDTHS,
        cells: outreach_cells,
        accent: |thread| Some((1, thread.status.style().foreground)),
    }
}

fn render_list<R: Record>(
    frame: &mut Frame<'_>,
    area: Rect,
    columns: &ListColumns<R>,
    header: String,
    list: &ListState<R::Category, R::SortKey>,
    records: &[R],
) {
    let header_height = u16::try_from(header.lines().count())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(header_height), Constraint::Min(1)])
        .split(area);

    let header_widget = Paragraph::new(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(columns.title),
    );
    frame.render_widget(header_widget, sections[0]);

    let visible = list.query.apply(records);
    let header_row = Row::new(columns.headers.iter().map(|label| {
        Cell::from(*label).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    }));
    let rows = visible.iter().map(|record| {
        let accent = (columns.accent)(record);
        let cells = (columns.cells)(record)
            .into_iter()
            .enumerate()
            .map(|(index, text)| match accent {
                Some((column, rgb)) if column == index => {
                    Cell::from(text).style(Style::default().fg(color(rgb)))
                }
                _ => Cell::from(text),
            });
        Row::new(cells)
    });

    let table = Table::new(rows, columns.widths.iter().copied())
        .header(header_row)
        .column_spacing(1)
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    let selected = (!visible.is_empty()).then(|| list.selected.min(visible.len() - 1));
    let mut table_state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, sections[1], &mut table_state);
}

fn search_line_text(search_text: &str, placeholder: &str, searching: bool) -> String {
    match (search_text.is_empty(), searching) {
        (true, false) => format!("/ {placeholder}"),
        (_, true) => format!("/ {search_text}_"),
        (false, false) => format!("/ {search_text}"),
    }
}

/// Chip row with the active chip bracketed: `[All]  Fashion  Tech`.
fn chip_row_text<S: AsRef<str>>(labels: &[S], active: usize) -> String {
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            if index == active {
                format!("[{}]", label.as_ref())
            } else {
                format!(" {} ", label.as_ref())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn active_chip_index<C: Category>(active: CategoryFilter<C>) -> usize {
    CategoryFilter::<C>::chips()
        .iter()
        .position(|chip| *chip == active)
        .unwrap_or(0)
}

fn plain_chip_labels<C: Category>() -> Vec<&'static str> {
    CategoryFilter::<C>::chips()
        .into_iter()
        .map(CategoryFilter::label)
        .collect()
}

fn sort_line_text<K: SortKey>(
    sort: Option<SortSpec<K>>,
    visible: usize,
    total: usize,
    noun: &str,
) -> String {
    let sort_label = sort.map_or_else(|| "off".to_owned(), SortSpec::label);
    format!("sort: {sort_label} | {visible} of {total} {noun}")
}

fn discover_header_text(
    list: &CreatorListState,
    creators: &[Creator],
    searching: bool,
) -> String {
    let filter = &list.query.filter;
    [
        search_line_text(&filter.search_text, "Search creators...", searching),
        chip_row_text(
            &plain_chip_labels::<Niche>(),
            active_chip_index(filter.active_category),
        ),
        sort_line_text(
            list.query.sort,
            list.query.apply(creators).len(),
            creators.len(),
            "creators",
        ),
    ]
    .join("\n")
}

fn campaigns_header_text(
    list: &CampaignListState,
    campaigns: &[Campaign],
    searching: bool,
) -> String {
    let filter = &list.query.filter;
    [
        search_line_text(&filter.search_text, "Search campaigns...", searching),
        chip_row_text(
            &plain_chip_labels::<CampaignStatus>(),
            active_chip_index(filter.active_category),
        ),
        campaign_summary_text(&campaign_summary(campaigns)),
        sort_line_text(
            list.query.sort,
            list.query.apply(campaigns).len(),
            campaigns.len(),
            "campaigns",
        ),
    ]
    .join("\n")
}

fn outreach_header_text(
    list: &OutreachListState,
    threads: &[OutreachThread],
    searching: bool,
) -> String {
    let filter = &list.query.filter;
    let labels: Vec<String> = category_counts(threads)
        .into_iter()
        .map(|(chip, count)| counted_label(chip, count))
        .collect();
    [
        search_line_text(&filter.search_text, "Search conversations...", searching),
        chip_row_text(&labels, active_chip_index(filter.active_category)),
        outreach_summary_text(outreach_summary(threads)),
        sort_line_text(
            list.query.sort,
            list.query.apply(threads).len(),
            threads.len(),
            "conversations",
        ),
    ]
    .join("\n")
}

fn campaign_summary_text(summary: &CampaignSummary) -> String {
    format!(
        "{ACTIVE_CAMPAIGNS} {} | {TOTAL_CREATORS} {} | {TOTAL_REACH} {}",
        summary.active,
        format_compact(summary.total_creators),
        format_compact(summary.total_reach)
    )
}

fn outreach_summary_text(summary: OutreachSummary) -> String {
    format!(
        "{REPLIES} {} | {ACCEPTED} {} | {SUCCESS_RATE} {}",
        summary.replies,
        summary.accepted,
        format_percent(summary.success_rate)
    )
}

fn progress_bar_text(progress: u8, width: usize) -> String {
    let progress = usize::from(progress.min(100));
    let filled = progress * width / 100;
    format!(
        "{}{} {progress}%",
        "█".repeat(filled),
        "░".repeat(width - filled)
    )
}

fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}

fn creator_cells(creator: &Creator) -> Vec<String> {
    let name = if creator.verified {
        format!("{} ✓", creator.name)
    } else {
        creator.name.clone()
    };
    vec![
        name,
        creator.username.clone(),
        creator.niche.as_str().to_owned(),
        creator.followers.clone(),
        creator.engagement.clone(),
        creator.avg_views.clone(),
        creator.rate.clone(),
    ]
}

fn campaign_cells(campaign: &Campaign) -> Vec<String> {
    vec![
        campaign.name.clone(),
        format!("{} {}", campaign.status.style().glyph, campaign.status.as_str()),
        progress_bar_text(campaign.progress, PROGRESS_WIDTH),
        campaign.budget.clone(),
        campaign.creators.to_string(),
        campaign.reach.clone(),
        campaign.engagement.clone(),
        format_date_range(campaign.start_date, campaign.end_date),
    ]
}

fn outreach_cells(thread: &OutreachThread) -> Vec<String> {
    let unread = if thread.unread_count > 0 {
        format!("● {}", thread.unread_count)
    } else {
        String::new()
    };
    vec![
        thread.creator_name.clone(),
        format!("{} {}", thread.status.style().glyph, thread.status.as_str()),
        thread.campaign.clone(),
        truncate_text(&thread.last_message, MESSAGE_PREVIEW_CHARS),
        thread.timestamp.clone(),
        unread,
    ]
}

/// Vertical bars, one five-column slot per point, tallest bar at `height`.
fn render_chart_text(points: &[ChartPoint], metric: ChartMetric, height: usize) -> String {
    let values: Vec<f64> = points.iter().map(|point| point.value(metric)).collect();
    let bars: Vec<usize> = scale_to_chart(&values, height as f64)
        .into_iter()
        .map(|bar| bar.round() as usize)
        .collect();
    let glyph = metric.style().glyph;
    let mut lines: Vec<String> = (1..=height)
        .rev()
        .map(|level| {
            bars.iter()
                .map(|bar| {
                    if *bar >= level {
                        format!(" {} ", glyph.repeat(3))
                    } else {
                        " ".repeat(5)
                    }
                })
                .collect::<String>()
                .trim_end()
                .to_owned()
        })
        .collect();
    lines.push(
        points
            .iter()
            .map(|point| format!("{:^5}", point.month))
            .collect::<String>()
            .trim_end()
            .to_owned(),
    );
    lines.join("\n")
}

fn render_analytics_text(
    snapshot: &AnalyticsSnapshot,
    analytics: AnalyticsState,
    chart_height: usize,
) -> String {
    let periods: Vec<&str> = Period::ALL.iter().map(|period| period.label()).collect();
    let period_index = Period::ALL
        .iter()
        .position(|period| *period == analytics.period)
        .unwrap_or(0);
    let metrics: Vec<&str> = ChartMetric::ALL.iter().map(|metric| metric.label()).collect();
    let metric_index = ChartMetric::ALL
        .iter()
        .position(|metric| *metric == analytics.chart_metric)
        .unwrap_or(0);

    let mut lines = vec![format!(
        "period: {} | chart: {}",
        chip_row_text(&periods, period_index),
        chip_row_text(&metrics, metric_index)
    )];
    lines.extend(snapshot.metric_cards.iter().map(|card| {
        format!(
            "{:<18}{:>8}  {} {}",
            card.title,
            card.value,
            card.trend.style().glyph,
            card.change
        )
    }));

    lines.push(String::new());
    lines.push(format!(
        "Performance Trend ({})",
        analytics.chart_metric.label()
    ));
    lines.push(render_chart_text(
        &snapshot.chart,
        analytics.chart_metric,
        chart_height,
    ));

    lines.push(String::new());
    lines.push("Campaign Performance".to_owned());
    lines.extend(snapshot.performance.iter().map(|row| {
        format!(
            "  {:<28} {} {:<9} reach {:<6} engagement {:<6} spend {:<7} roi {}",
            row.name,
            row.status.style().glyph,
            row.status.as_str(),
            row.reach,
            row.engagement,
            row.spend,
            row.roi
        )
    }));

    lines.push(String::new());
    lines.push("Top Performing Content".to_owned());
    lines.extend(snapshot.top_content.iter().map(|content| {
        format!(
            "  {} by {} | {} views | {} likes | {} shares",
            content.title, content.creator_username, content.views, content.likes, content.shares
        )
    }));
    lines.join("\n")
}

fn render_profile_text(profile: &ProfileSnapshot) -> String {
    let user = &profile.user;
    let stats = &profile.stats;
    let mut lines = vec![
        user.name.clone(),
        user.company.clone(),
        format!("{} | {}", user.email, user.phone),
        String::new(),
        format!(
            "{} Active Campaigns | {} Total Creators | {} Total Spend",
            stats.active_campaigns, stats.total_creators, stats.total_spend
        ),
    ];
    for section in &profile.menu {
        lines.push(String::new());
        lines.push(section.title.clone());
        for item in &section.items {
            if item.show_chevron {
                lines.push(format!("  {} {CHEVRON}", item.title));
            } else {
                lines.push(format!("  {}", item.title));
            }
            if let Some(subtitle) = &item.subtitle {
                lines.push(format!("    {subtitle}"));
            }
        }
    }
    lines.push(String::new());
    lines.push(version_line());
    lines.push(COPYRIGHT_LINE.to_owned());
    lines.join("\n")
}

fn help_overlay_text() -> &'static str {
    "global: ctrl+q quit | q quit (nav) | ? help\n\
tabs: tab/f next | shift+tab/b prev | 1-5 jump\n\
lists: h/l or left/right chips | / search | s sort | j/k or up/down move\n\
search: type to filter | backspace | ctrl+u clear | enter/esc done\n\
analytics: p period | m chart metric"
}

fn status_text(state: &AppState, view_data: &ViewData) -> String {
    if view_data.help_visible {
        return String::new();
    }

    let (mode, keys) = match state.mode {
        AppMode::Search => ("SEARCH", "type | backspace | ctrl+u clear | enter/esc done"),
        AppMode::Nav if state.active_tab.is_list() => (
            "NAV",
            "j/k move | h/l chips | / search | s sort | b/f tabs | ? help | q",
        ),
        AppMode::Nav if state.active_tab == TabKind::Analytics => {
            ("NAV", "p period | m metric | b/f tabs | ? help | q")
        }
        AppMode::Nav => ("NAV", "b/f tabs | ? help | q"),
    };
    match &state.status_line {
        Some(status) => format!("{mode} | {status} | {keys}"),
        None => format!("{mode} | {keys}"),
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
