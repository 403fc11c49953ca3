//! Interactive terminal browser for history records
//!
//! Provides a full-screen interface over a [`HistoryBrowser`]:
//! - Switch between list, timeline and grouped views
//! - Type a search, cycle the quick time filter, clear filters
//! - Select records and send tag/delete/open requests

use crate::actions::HistoryActions;
use crate::browser::{ComposedView, HistoryBrowser};
use crate::config::DisplayConfig;
use crate::error::Result;
use crate::record::VisitRecord;
use crate::types::{RecordId, ViewMode};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::collections::HashSet;
use std::io;

/// What the keyboard is currently editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    Tag,
}

/// One line of the rendered view
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    /// Timeline day header
    Day { label: String },
    /// Grouped-view domain header
    Domain {
        domain: String,
        pages: usize,
        visits: u64,
        expanded: bool,
    },
    Record(VisitRecord),
}

/// Outcome of a browsing session
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowseSummary {
    /// Number of tag/delete/open requests sent
    pub requests: usize,
}

/// Browser UI state
pub struct BrowserUI<'a, A: HistoryActions> {
    browser: &'a mut HistoryBrowser<A>,
    time_format: String,
    rows: Vec<Row>,
    selected: usize,
    list_state: ListState,
    expanded: HashSet<String>,
    mode: InputMode,
    input: String,
    status: String,
    requests: usize,
    running: bool,
    show_help: bool,
}

impl<'a, A: HistoryActions> BrowserUI<'a, A> {
    pub fn new(browser: &'a mut HistoryBrowser<A>, display: &DisplayConfig) -> Self {
        let mut ui = Self {
            browser,
            time_format: display.time_format.clone(),
            rows: Vec::new(),
            selected: 0,
            list_state: ListState::default(),
            expanded: HashSet::new(),
            mode: InputMode::Normal,
            input: String::new(),
            status: String::new(),
            requests: 0,
            running: true,
            show_help: false,
        };
        ui.refresh();
        ui
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn summary(&self) -> BrowseSummary {
        BrowseSummary {
            requests: self.requests,
        }
    }

    /// Recompute rows from the browser's current state
    fn refresh(&mut self) {
        self.rows = match self.browser.compose() {
            ComposedView::List(records) => records.into_iter().map(Row::Record).collect(),
            ComposedView::Timeline(groups) => {
                let mut rows = Vec::new();
                for group in groups {
                    rows.push(Row::Day {
                        label: format!(
                            "{} ({} items)",
                            group.date.format("%Y-%m-%d %A"),
                            group.len()
                        ),
                    });
                    rows.extend(group.records.into_iter().map(Row::Record));
                }
                rows
            }
            ComposedView::Grouped(summaries) => {
                let mut rows = Vec::new();
                for summary in summaries {
                    let expanded = self.expanded.contains(&summary.domain);
                    rows.push(Row::Domain {
                        domain: summary.domain.clone(),
                        pages: summary.page_count(),
                        visits: summary.total_visits,
                        expanded,
                    });
                    if expanded {
                        rows.extend(summary.records.into_iter().map(Row::Record));
                    }
                }
                rows
            }
        };

        if self.rows.is_empty() {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(self.rows.len() - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    fn current_record(&self) -> Option<&VisitRecord> {
        match self.rows.get(self.selected) {
            Some(Row::Record(record)) => Some(record),
            _ => None,
        }
    }

    /// Selected ids, or the record under the cursor when nothing is selected
    fn target_ids(&self) -> Vec<RecordId> {
        if !self.browser.selection().is_empty() {
            return self.browser.selection().selected_ids();
        }
        self.current_record()
            .map(|r| vec![r.id().clone()])
            .unwrap_or_default()
    }

    fn select_previous(&mut self) {
        if !self.rows.is_empty() {
            self.selected = self.selected.saturating_sub(1);
            self.list_state.select(Some(self.selected));
        }
    }

    fn select_next(&mut self) {
        if !self.rows.is_empty() {
            self.selected = (self.selected + 1).min(self.rows.len() - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    /// Toggle the record under the cursor, or expand/collapse a domain
    fn toggle_current(&mut self) {
        match self.rows.get(self.selected).cloned() {
            Some(Row::Record(record)) => self.browser.selection_mut().toggle(record.id()),
            Some(Row::Domain { domain, .. }) => {
                if !self.expanded.remove(&domain) {
                    self.expanded.insert(domain);
                }
                self.refresh();
            }
            _ => {}
        }
    }

    fn open_current(&mut self) {
        let Some(id) = self.current_record().map(|r| r.id().clone()) else {
            self.toggle_current();
            return;
        };
        match self.browser.open(&id) {
            Ok(()) => {
                self.requests += 1;
                self.status = format!("Opened {}", id);
            }
            Err(e) => self.status = e.to_string(),
        }
    }

    fn delete_targets(&mut self) {
        let ids = self.target_ids();
        if ids.is_empty() {
            return;
        }
        self.browser.delete(&ids);
        self.requests += 1;
        self.status = format!("Requested deletion of {} records", ids.len());
    }

    fn submit_tag(&mut self) {
        let ids = self.target_ids();
        let tag = std::mem::take(&mut self.input);
        self.mode = InputMode::Normal;
        if ids.is_empty() {
            return;
        }
        match self.browser.add_tag(&ids, &tag) {
            Ok(()) => {
                self.requests += 1;
                self.status = format!("Requested tag '{}' on {} records", tag.trim(), ids.len());
            }
            Err(e) => self.status = e.to_string(),
        }
    }

    fn set_search(&mut self, query: String) {
        self.browser.update_criteria(|c| c.search_query = query);
        self.selected = 0;
        self.refresh();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        match self.mode {
            InputMode::Search => self.handle_search_key(key),
            InputMode::Tag => self.handle_tag_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.mode = InputMode::Normal,
            KeyCode::Backspace => {
                let mut query = self.browser.criteria().search_query.clone();
                query.pop();
                self.set_search(query);
            }
            KeyCode::Char(c) => {
                let mut query = self.browser.criteria().search_query.clone();
                query.push(c);
                self.set_search(query);
            }
            _ => {}
        }
    }

    fn handle_tag_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_tag(),
            KeyCode::Esc => {
                self.input.clear();
                self.mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('?') | KeyCode::F(1) => self.show_help = !self.show_help,
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char(' ') => self.toggle_current(),
            KeyCode::Enter | KeyCode::Char('o') => self.open_current(),
            KeyCode::Char('a') => self.browser.toggle_all_visible(),
            KeyCode::Char('c') => self.browser.selection_mut().clear(),
            KeyCode::Char('v') => {
                let next = self.browser.view_mode().next();
                self.browser.set_view_mode(next);
                self.selected = 0;
                self.refresh();
            }
            KeyCode::Char('t') => {
                self.browser
                    .update_criteria(|c| c.quick_time_filter = c.quick_time_filter.next());
                self.selected = 0;
                self.refresh();
            }
            KeyCode::Char('x') => {
                self.browser.update_criteria(|c| c.clear());
                self.selected = 0;
                self.refresh();
            }
            KeyCode::Char('/') => self.mode = InputMode::Search,
            KeyCode::Char('+') => {
                self.input.clear();
                self.mode = InputMode::Tag;
            }
            KeyCode::Char('d') | KeyCode::Delete => self.delete_targets(),
            _ => {}
        }
    }

    fn record_line(&self, record: &VisitRecord, indent: &str) -> Line<'static> {
        let checked = if self.browser.selection().is_selected(record.id()) {
            "[x] "
        } else {
            "[ ] "
        };
        let time = self.browser.calendar().localize(record.visit_time());
        let time = match self.browser.view_mode() {
            ViewMode::Timeline => time.format("%H:%M").to_string(),
            _ => time.format(&self.time_format).to_string(),
        };
        let tags: String = record.tags().iter().map(|t| format!(" #{}", t)).collect();

        Line::from(vec![
            Span::raw(indent.to_string()),
            Span::styled(checked, Style::default().fg(Color::Yellow)),
            Span::styled(format!("{} ", time), Style::default().fg(Color::DarkGray)),
            Span::styled(record.title().to_string(), Style::default().fg(Color::White)),
            Span::styled(
                format!("  {}", record.domain()),
                Style::default().fg(Color::Blue),
            ),
            Span::styled(tags, Style::default().fg(Color::Magenta)),
        ])
    }

    fn render(&mut self, frame: &mut Frame) {
        let chunks = if self.show_help {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),      // Header
                    Constraint::Percentage(50), // Records
                    Constraint::Percentage(50), // Help
                ])
                .split(frame.area())
        } else {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3), // Header
                    Constraint::Min(10),   // Records
                    Constraint::Length(6), // Details
                ])
                .split(frame.area())
        };

        let criteria = self.browser.criteria();
        let input_hint = match self.mode {
            InputMode::Search => format!(" | search: {}_", criteria.search_query),
            InputMode::Tag => format!(" | tag: {}_", self.input),
            InputMode::Normal if !criteria.search_query.is_empty() => {
                format!(" | search: {}", criteria.search_query)
            }
            InputMode::Normal => String::new(),
        };
        let record_count = self
            .rows
            .iter()
            .filter(|r| matches!(r, Row::Record(_)))
            .count();
        let title = format!(
            "History [{}] time: {} | {} shown, {} selected{}",
            self.browser.view_mode(),
            criteria.quick_time_filter,
            record_count,
            self.browser.selection().len(),
            input_hint
        );
        let header = Paragraph::new(title)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Cyan));
        frame.render_widget(header, chunks[0]);

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|row| match row {
                Row::Day { label } => ListItem::new(Line::from(Span::styled(
                    label.clone(),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ))),
                Row::Domain {
                    domain,
                    pages,
                    visits,
                    expanded,
                } => ListItem::new(Line::from(vec![
                    Span::raw(if *expanded { "v " } else { "> " }),
                    Span::styled(
                        domain.clone(),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {} pages, {} visits", pages, visits),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])),
                Row::Record(record) => {
                    let indent = if self.browser.view_mode() == ViewMode::List {
                        ""
                    } else {
                        "  "
                    };
                    ListItem::new(self.record_line(record, indent))
                }
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Records"))
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");
        frame.render_stateful_widget(list, chunks[1], &mut self.list_state);

        if self.show_help {
            let help_text = [
                "Keybindings:",
                "",
                "  ↑/k ↓/j    - Move",
                "  Space      - Select record / expand domain",
                "  Enter/o    - Open record",
                "  a          - Select all shown / clear",
                "  c          - Clear selection",
                "  v          - Cycle view (list, timeline, grouped)",
                "  t          - Cycle time filter",
                "  /          - Search (Enter to finish)",
                "  x          - Clear all filters",
                "  +          - Tag selected records",
                "  d/Delete   - Delete selected records",
                "  ?/F1       - Toggle help",
                "  q/Esc      - Quit",
            ];
            let help = Paragraph::new(help_text.join("\n"))
                .block(Block::default().borders(Borders::ALL).title("Help"))
                .style(Style::default().fg(Color::Yellow))
                .wrap(Wrap { trim: false });
            frame.render_widget(help, chunks[2]);
        } else {
            let details = match self.current_record() {
                Some(record) => format!(
                    "{}\n{}\nVisited {} ({} visits)  Tags: {}\n{}",
                    record.title(),
                    record.url(),
                    self.browser
                        .calendar()
                        .localize(record.visit_time())
                        .format("%Y-%m-%d %H:%M:%S"),
                    record.visit_count(),
                    if record.tags().is_empty() {
                        "-".to_string()
                    } else {
                        record.tags().join(", ")
                    },
                    self.status
                ),
                None => self.status.clone(),
            };
            let details_widget = Paragraph::new(details)
                .block(Block::default().borders(Borders::ALL).title("Details"))
                .style(Style::default().fg(Color::Green))
                .wrap(Wrap { trim: false });
            frame.render_widget(details_widget, chunks[2]);
        }
    }
}

/// Run the interactive browser until the user quits
pub fn run_browser_ui<A: HistoryActions>(
    browser: &mut HistoryBrowser<A>,
    display: &DisplayConfig,
) -> Result<BrowseSummary> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut ui = BrowserUI::new(browser, display);

    let result = (|| -> Result<()> {
        while ui.is_running() {
            terminal.draw(|f| ui.render(f))?;

            if event::poll(std::time::Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    ui.handle_key(key);
                }
            }
        }
        Ok(())
    })();

    // Always restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    Ok(ui.summary())
}
