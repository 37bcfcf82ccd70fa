use std::mem;

use anyhow::{Context, Result};
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    BarChart, Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap,
};
use ratatui::Frame;
use tracing::debug;

use crate::stats::HISTOGRAM_BINS;
use crate::store::SongStore;

use super::forms::{DeleteForm, SearchField, SearchForm, SongField, SongForm};
use super::helpers::{centered_rect, cursor_offset, key_hints};
use super::screens::{ActiveSearch, SongListScreen};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Eight summary rows plus the surrounding border.
const SUMMARY_HEIGHT: u16 = 10;
/// Rows skipped by PageUp/PageDown.
const PAGE_STEP: isize = 5;
const BAR_GAP: u16 = 1;

/// What the keyboard is currently driving.
enum Mode {
    Normal,
    AddingSong(SongForm),
    Searching(SearchForm),
    Deleting(DeleteForm),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum StatusKind {
    Info,
    Warning,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Warning => Style::default().fg(Color::Yellow),
        }
    }
}

/// Central application state: the one song store plus view state.
pub struct App {
    store: SongStore,
    list: SongListScreen,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(store: SongStore) -> Self {
        Self {
            store,
            list: SongListScreen::default(),
            mode: Mode::Normal,
            status: None,
        }
    }

    pub fn store(&self) -> &SongStore {
        &self.store
    }

    /// Route one key press. Returns `true` when the user asked to quit.
    /// Input mistakes become footer warnings; only I/O failures escape.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit),
            Mode::AddingSong(form) => self.handle_add_song(code, form)?,
            Mode::Searching(form) => self.handle_search(code, form)?,
            Mode::Deleting(form) => self.handle_delete(code, form)?,
        };

        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Mode {
        let len = self.visible_len();
        match code {
            KeyCode::Char('q') => *exit = true,
            KeyCode::Esc => {
                if self.list.clear_search() {
                    self.set_status("Showing all songs.", StatusKind::Info);
                } else {
                    *exit = true;
                }
            }
            KeyCode::Up => self.list.move_selection(-1, len),
            KeyCode::Down => self.list.move_selection(1, len),
            KeyCode::PageUp => self.list.move_selection(-PAGE_STEP, len),
            KeyCode::PageDown => self.list.move_selection(PAGE_STEP, len),
            KeyCode::Home => self.list.select_first(),
            KeyCode::End => self.list.select_last(len),
            KeyCode::Char('+') | KeyCode::Char('a') | KeyCode::Char('A') => {
                self.clear_status();
                return Mode::AddingSong(SongForm::default());
            }
            KeyCode::Char('f') | KeyCode::Char('/') => {
                self.clear_status();
                return Mode::Searching(SearchForm::default());
            }
            KeyCode::Char('-') | KeyCode::Char('d') | KeyCode::Char('D') => {
                self.clear_status();
                let title = self
                    .list
                    .current_song(self.store.songs())
                    .map(|song| song.title.clone());
                return Mode::Deleting(DeleteForm::with_title(title.as_deref()));
            }
            _ => {}
        }
        Mode::Normal
    }

    fn handle_add_song(&mut self, code: KeyCode, mut form: SongForm) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("Add song cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match self.save_new_song(&form) {
                Ok(()) => keep_open = false,
                Err(err) if err.is_user_facing() => {
                    let message = err.to_string();
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Warning);
                }
                Err(err) => return Err(err).context("failed to save the song list"),
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::AddingSong(form))
        } else {
            Ok(Mode::Normal)
        }
    }

    fn handle_search(&mut self, code: KeyCode, mut form: SearchForm) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("Search cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Tab | KeyCode::BackTab => form.toggle_field(),
            KeyCode::Left | KeyCode::Right if form.active == SearchField::Column => {
                form.toggle_column()
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match self.store.search(form.column, &form.query) {
                Ok(results) if results.is_empty() => {
                    let message = "No matching songs found.";
                    form.error = Some(message.to_string());
                    self.set_status(message, StatusKind::Warning);
                }
                Ok(results) => {
                    self.set_status(
                        format!(
                            "{} song(s) where {} contains \"{}\". Esc shows all songs.",
                            results.len(),
                            form.column,
                            form.query
                        ),
                        StatusKind::Info,
                    );
                    self.list.set_search(ActiveSearch {
                        column: form.column,
                        query: form.query.clone(),
                        results,
                    });
                    keep_open = false;
                }
                Err(err) if err.is_user_facing() => {
                    let message = err.to_string();
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Warning);
                }
                Err(err) => return Err(err).context("search failed"),
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::Searching(form))
        } else {
            Ok(Mode::Normal)
        }
    }

    fn handle_delete(&mut self, code: KeyCode, mut form: DeleteForm) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("Delete cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match self.store.delete(&form.title) {
                Ok(0) => {
                    let message = format!("\"{}\" was not found.", form.title);
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Warning);
                }
                Ok(removed) => {
                    self.set_status(
                        format!("Deleted \"{}\" ({removed} entries).", form.title),
                        StatusKind::Info,
                    );
                    self.refresh_search();
                    keep_open = false;
                }
                Err(err) if err.is_user_facing() => {
                    let message = err.to_string();
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Warning);
                }
                Err(err) => return Err(err).context("failed to save the song list"),
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::Deleting(form))
        } else {
            Ok(Mode::Normal)
        }
    }

    fn save_new_song(&mut self, form: &SongForm) -> crate::Result<()> {
        let record = form.parse_inputs()?;
        let added = self.store.add(&record.title, &record.artist, record.score)?;
        let message = format!("Added \"{}\" to the list.", added.title);

        self.refresh_search();
        if self.list.search.is_none() {
            let len = self.visible_len();
            self.list.select_last(len);
        }
        self.set_status(message, StatusKind::Info);
        Ok(())
    }

    /// Re-run the active search against the store so the filtered table
    /// reflects the latest mutation.
    fn refresh_search(&mut self) {
        if let Some(search) = self.list.search.as_mut() {
            search.results = self
                .store
                .search(search.column, &search.query)
                .unwrap_or_default();
            debug!(hits = search.results.len(), "refreshed search results");
        }
        let len = self.visible_len();
        self.list.ensure_in_bounds(len);
    }

    fn visible_len(&self) -> usize {
        self.list.rows(self.store.songs()).len()
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(content_area);
        self.draw_song_table(frame, columns[0]);
        self.draw_statistics(frame, columns[1]);

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::AddingSong(form) => self.draw_song_form(frame, area, form),
            Mode::Searching(form) => self.draw_search_form(frame, area, form),
            Mode::Deleting(form) => self.draw_delete_form(frame, area, form),
            Mode::Normal => {}
        }
    }

    fn draw_song_table(&self, frame: &mut Frame, area: Rect) {
        let all = self.store.songs();
        let rows = self.list.rows(all);
        let title = match &self.list.search {
            Some(search) => format!(
                "Search: {} contains \"{}\" ({} of {})",
                search.column,
                search.query,
                rows.len(),
                all.len()
            ),
            None => format!("Song List ({})", all.len()),
        };
        let block = Block::default().borders(Borders::ALL).title(title);

        if rows.is_empty() {
            let message = if all.is_empty() {
                "No songs yet. Press '+' to add one."
            } else {
                "No songs match this search."
            };
            let paragraph = Paragraph::new(message)
                .alignment(Alignment::Center)
                .block(block)
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, area);
            return;
        }

        let header = Row::new(vec!["Title", "Artist", "Score"])
            .style(Style::default().add_modifier(Modifier::BOLD));
        let table_rows = rows.iter().map(|song| {
            Row::new(vec![
                Cell::from(song.title.clone()),
                Cell::from(song.artist.clone()),
                Cell::from(song.score_label()),
            ])
        });
        let table = Table::new(
            table_rows,
            [
                Constraint::Percentage(50),
                Constraint::Percentage(35),
                Constraint::Length(7),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

        let mut state = TableState::default().with_selected(Some(self.list.selected));
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn draw_statistics(&self, frame: &mut Frame, area: Rect) {
        let summary_block = Block::default()
            .borders(Borders::ALL)
            .title("Score Statistics");

        let Some(summary) = self.store.statistics() else {
            let paragraph = Paragraph::new("No score data yet.")
                .alignment(Alignment::Center)
                .block(summary_block)
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, area);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SUMMARY_HEIGHT.min(area.height)),
                Constraint::Min(0),
            ])
            .split(area);

        let rows = summary
            .rows()
            .into_iter()
            .map(|(label, value)| Row::new(vec![Cell::from(label), Cell::from(value)]));
        let table = Table::new(rows, [Constraint::Length(6), Constraint::Min(8)])
            .block(summary_block);
        frame.render_widget(table, chunks[0]);

        let bins = self.store.histogram(HISTOGRAM_BINS);
        let labels: Vec<String> = bins.iter().map(|bin| bin.label()).collect();
        let data: Vec<(&str, u64)> = labels
            .iter()
            .map(String::as_str)
            .zip(bins.iter().map(|bin| bin.count))
            .collect();

        let chart_block = Block::default()
            .borders(Borders::ALL)
            .title("Score Distribution");
        let inner_width = chart_block.inner(chunks[1]).width;
        let bins_len = HISTOGRAM_BINS as u16;
        let bar_width = (inner_width.saturating_sub(BAR_GAP * (bins_len - 1)) / bins_len).max(1);

        let chart = BarChart::default()
            .block(chart_block)
            .data(data.as_slice())
            .bar_width(bar_width)
            .bar_gap(BAR_GAP)
            .bar_style(Style::default().fg(Color::Cyan))
            .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
        frame.render_widget(chart, chunks[1]);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let paragraph = Paragraph::new(vec![status_line, self.footer_instructions()])
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        match &self.mode {
            Mode::Normal if self.list.search.is_some() => key_hints(&[
                ("↑↓", "Navigate"),
                ("+", "Add"),
                ("f", "Search"),
                ("-", "Delete"),
                ("Esc", "Show all"),
                ("q", "Quit"),
            ]),
            Mode::Normal => key_hints(&[
                ("↑↓", "Navigate"),
                ("+", "Add"),
                ("f", "Search"),
                ("-", "Delete"),
                ("q", "Quit"),
            ]),
            Mode::AddingSong(_) => key_hints(&[
                ("Tab", "Next field"),
                ("Enter", "Save"),
                ("Esc", "Cancel"),
            ]),
            Mode::Searching(_) => key_hints(&[
                ("Tab", "Switch field"),
                ("←→", "Column"),
                ("Enter", "Search"),
                ("Esc", "Cancel"),
            ]),
            Mode::Deleting(_) => key_hints(&[
                ("Enter", "Delete all with this title"),
                ("Esc", "Cancel"),
            ]),
        }
    }

    fn draw_song_form(&self, frame: &mut Frame, area: Rect, form: &SongForm) {
        let popup_area = centered_rect(70, 50, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Add Song").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let fields = [
            ("Title", SongField::Title),
            ("Artist", SongField::Artist),
            ("Score", SongField::Score),
        ];
        let mut lines: Vec<Line> = fields
            .iter()
            .map(|(name, field)| form.build_line(name, *field))
            .collect();
        lines.push(Line::from(""));
        lines.push(form_hint(
            form.error.as_deref(),
            "Enter to save • Tab to switch • Esc to cancel",
        ));

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);

        let (row, (name, field)) = fields
            .iter()
            .enumerate()
            .find(|(_, (_, field))| *field == form.active)
            .unwrap_or((0, &fields[0]));
        let prefix = format!("{name}: ");
        frame.set_cursor_position((
            inner.x + cursor_offset(&prefix, form.value(*field)),
            inner.y + row as u16,
        ));
    }

    fn draw_search_form(&self, frame: &mut Frame, area: Rect, form: &SearchForm) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Search Songs").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            form.column_line(),
            form.query_line(),
            Line::from(""),
            form_hint(
                form.error.as_deref(),
                "Enter to search • Tab to switch • Esc to cancel",
            ),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);

        if form.active == SearchField::Query {
            frame.set_cursor_position((
                inner.x + cursor_offset("Keyword: ", &form.query),
                inner.y + 1,
            ));
        }
    }

    fn draw_delete_form(&self, frame: &mut Frame, area: Rect, form: &DeleteForm) {
        let popup_area = centered_rect(60, 25, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Delete Song").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            form.title_line(),
            Line::from(""),
            form_hint(
                form.error.as_deref(),
                "Every entry with exactly this title is removed.",
            ),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
        frame.set_cursor_position((inner.x + cursor_offset("Title: ", &form.title), inner.y));
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

/// Bottom line of a modal: the validation error in red, or a gray hint.
fn form_hint(error: Option<&str>, hint: &'static str) -> Line<'static> {
    match error {
        Some(error) => Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(Span::styled(hint, Style::default().fg(Color::Gray))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tempfile::{tempdir, TempDir};

    use crate::store::read_songs;

    fn app() -> (TempDir, App) {
        let dir = tempdir().unwrap();
        let store = SongStore::open(dir.path().join("song_list.csv")).unwrap();
        (dir, App::new(store))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(code).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    fn add_song(app: &mut App, title: &str, artist: &str, score: &str) {
        press(app, KeyCode::Char('+'));
        type_text(app, title);
        press(app, KeyCode::Tab);
        type_text(app, artist);
        press(app, KeyCode::Tab);
        type_text(app, score);
        press(app, KeyCode::Enter);
    }

    fn status(app: &App) -> (&str, StatusKind) {
        let status = app.status.as_ref().unwrap();
        (status.text.as_str(), status.kind)
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn add_form_saves_song() {
        let (_dir, mut app) = app();
        add_song(&mut app, "Lemon", "米津玄師", "88");

        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(app.store().len(), 1);
        assert_eq!(app.store().songs()[0].score, Some(88.0));
        assert_eq!(
            status(&app),
            ("Added \"Lemon\" to the list.", StatusKind::Info)
        );
    }

    #[test]
    fn add_form_stays_open_on_missing_artist() {
        let (_dir, mut app) = app();
        press(&mut app, KeyCode::Char('+'));
        type_text(&mut app, "Lemon");
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.mode, Mode::AddingSong(_)));
        assert!(app.store().is_empty());
        assert_eq!(
            status(&app),
            ("Title and artist are both required.", StatusKind::Warning)
        );
    }

    #[test]
    fn empty_search_warns_without_searching() {
        let (_dir, mut app) = app();
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.mode, Mode::Searching(_)));
        assert_eq!(
            status(&app),
            ("Enter a search keyword.", StatusKind::Warning)
        );
    }

    #[test]
    fn search_by_artist_filters_the_table() {
        let (_dir, mut app) = app();
        add_song(&mut app, "Lemon", "米津玄師", "88");
        add_song(&mut app, "マツケンサンバ", "松平健", "95.5");

        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "松平");
        press(&mut app, KeyCode::Enter);

        let rows = app.list.rows(app.store.songs());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "マツケンサンバ");

        press(&mut app, KeyCode::Esc);
        assert!(app.list.search.is_none());
    }

    #[test]
    fn search_without_hits_reports_not_found() {
        let (_dir, mut app) = app();
        add_song(&mut app, "Lemon", "米津玄師", "88");
        press(&mut app, KeyCode::Char('f'));
        type_text(&mut app, "lemon");
        press(&mut app, KeyCode::Enter);

        assert!(app.list.search.is_none());
        assert_eq!(
            status(&app),
            ("No matching songs found.", StatusKind::Warning)
        );
    }

    #[test]
    fn delete_prefills_selected_title_and_removes_it() {
        let (dir, mut app) = app();
        add_song(&mut app, "マツケンサンバ", "松平健", "95.5");
        add_song(&mut app, "Lemon", "米津玄師", "88");
        press(&mut app, KeyCode::Home);

        press(&mut app, KeyCode::Char('-'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.store().len(), 1);
        assert_eq!(app.store().songs()[0].title, "Lemon");
        let saved = read_songs(&dir.path().join("song_list.csv")).unwrap();
        assert_eq!(saved.len(), 1);
    }

    #[test]
    fn delete_of_unknown_title_warns() {
        let (_dir, mut app) = app();
        add_song(&mut app, "Lemon", "米津玄師", "88");
        press(&mut app, KeyCode::Char('-'));
        for _ in 0.."Lemon".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "Flamingo");
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.mode, Mode::Deleting(_)));
        assert_eq!(app.store().len(), 1);
        assert_eq!(
            status(&app),
            ("\"Flamingo\" was not found.", StatusKind::Warning)
        );
    }

    #[test]
    fn delete_with_blank_title_warns_and_stays_open() {
        let (_dir, mut app) = app();
        add_song(&mut app, "Lemon", "米津玄師", "88");
        press(&mut app, KeyCode::Char('-'));
        for _ in 0.."Lemon".len() {
            press(&mut app, KeyCode::Backspace);
        }
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.mode, Mode::Deleting(_)));
        assert_eq!(app.store().len(), 1);
        assert_eq!(
            status(&app),
            (
                "Enter the title of the song to delete.",
                StatusKind::Warning
            )
        );
    }

    #[test]
    fn quit_keys() {
        let (_dir, mut app) = app();
        assert!(app.handle_key(KeyCode::Char('q')).unwrap());
        assert!(app.handle_key(KeyCode::Esc).unwrap());
    }

    #[test]
    fn empty_store_renders_placeholders() {
        let (_dir, app) = app();
        let text = screen_text(&app);
        assert!(text.contains("No songs yet"));
        assert!(text.contains("No score data yet."));
    }

    #[test]
    fn statistics_panel_renders_summary() {
        let (_dir, mut app) = app();
        add_song(&mut app, "A", "x", "80");
        add_song(&mut app, "B", "y", "90");
        add_song(&mut app, "C", "z", "100");

        let text = screen_text(&app);
        assert!(text.contains("Score Statistics"));
        assert!(text.contains("90.00"));
        assert!(text.contains("Score Distribution"));
    }
}
