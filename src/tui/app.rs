use std::io;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, KeyEventKind, MouseButton, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::model::{Bucket, Config, TaskId};
use crate::ops::{Decision, Outcome, PendingAction, TaskList};
use crate::util::text;

use super::click_areas::ClickAreas;
use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode, derived from what is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// A row's title is being edited inline
    Edit,
    /// A confirmation dialog is waiting for an answer
    Confirm,
    Menu,
}

/// Main application state
pub struct App {
    pub tasks: TaskList,
    pub theme: Theme,
    /// Cursor index into the visible task list
    pub cursor: usize,
    /// First visible row of the task list
    pub scroll_offset: usize,
    /// Byte offset of the caret inside the draft title
    pub edit_cursor: usize,
    pub confirm: Option<PendingAction>,
    pub menu_open: bool,
    pub mouse_enabled: bool,
    pub status_message: Option<String>,
    pub click_areas: ClickAreas,
    /// Date shown for the "today" bucket
    pub today: NaiveDate,
    pub should_quit: bool,
}

impl App {
    pub fn new(tasks: TaskList, theme: Theme) -> Self {
        App {
            tasks,
            theme,
            cursor: 0,
            scroll_offset: 0,
            edit_cursor: 0,
            confirm: None,
            menu_open: false,
            mouse_enabled: true,
            status_message: None,
            click_areas: ClickAreas::default(),
            today: Local::now().date_naive(),
            should_quit: false,
        }
    }

    /// Build the app from resolved configuration
    pub fn from_config(config: &Config) -> Result<Self, crate::io::config_io::ConfigError> {
        let theme = Theme::from_config(&config.ui)?;
        let mut tasks = TaskList::new()
            .with_default_title(config.tasks.default_title.clone())
            .with_filter(config.tasks.start_filter);
        if config.tasks.demo {
            tasks = tasks.with_demo_tasks();
        }
        let mut app = App::new(tasks, theme);
        app.mouse_enabled = config.ui.mouse;
        Ok(app)
    }

    pub fn mode(&self) -> Mode {
        if self.confirm.is_some() {
            Mode::Confirm
        } else if self.menu_open {
            Mode::Menu
        } else if self.tasks.edit_session().is_some() {
            Mode::Edit
        } else {
            Mode::Navigate
        }
    }

    /// Date the given bucket stands for
    pub fn date_of(&self, bucket: Bucket) -> NaiveDate {
        self.today + chrono::Days::new(bucket.day_offset() as u64)
    }

    // -----------------------------------------------------------------------
    // Cursor
    // -----------------------------------------------------------------------

    pub fn visible_len(&self) -> usize {
        self.tasks.visible_tasks().count()
    }

    pub fn cursor_task_id(&self) -> Option<TaskId> {
        self.tasks.visible_tasks().nth(self.cursor).map(|t| t.id())
    }

    pub fn move_cursor(&mut self, delta: i32) {
        let len = self.visible_len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let next = self.cursor as i64 + delta as i64;
        self.cursor = next.clamp(0, len as i64 - 1) as usize;
    }

    pub fn jump_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.cursor = self.visible_len().saturating_sub(1);
    }

    /// Put the cursor on `id` if it is visible
    pub fn select_task(&mut self, id: TaskId) {
        if let Some(pos) = self.tasks.visible_tasks().position(|t| t.id() == id) {
            self.cursor = pos;
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.visible_len().saturating_sub(1));
    }

    // -----------------------------------------------------------------------
    // Task actions
    // -----------------------------------------------------------------------

    pub fn switch_filter(&mut self, bucket: Bucket) {
        if self.tasks.edit_session().is_some() {
            self.commit_edit();
        }
        if self.tasks.active_filter() != bucket {
            self.tasks.set_filter(bucket);
            self.cursor = 0;
            self.scroll_offset = 0;
        }
    }

    pub fn toggle_task(&mut self, id: TaskId) {
        self.select_task(id);
        self.tasks.toggle_completion(id);
    }

    pub fn create_task(&mut self) {
        let id = self.tasks.create_task();
        self.select_task(id);
        self.edit_cursor = self.draft().len();
    }

    pub fn start_edit(&mut self, id: TaskId) {
        if self.tasks.start_edit(id) {
            self.select_task(id);
            self.edit_cursor = self.draft().len();
        }
    }

    pub fn commit_edit(&mut self) {
        if let Some(id) = self.tasks.commit_edit() {
            self.select_task(id);
        }
        self.edit_cursor = 0;
    }

    pub fn ask_delete(&mut self, id: TaskId) {
        self.select_task(id);
        self.confirm = self.tasks.request_delete(id);
    }

    pub fn ask_clear(&mut self) {
        self.menu_open = false;
        self.confirm = Some(self.tasks.request_clear(self.tasks.active_filter()));
    }

    /// Apply the user's answer to the open confirmation dialog
    pub fn answer(&mut self, decision: Decision) {
        let Some(action) = self.confirm.take() else {
            return;
        };
        let outcome = self.tasks.resolve(action, decision);
        self.status_message = match (action, outcome) {
            (PendingAction::DeleteTask { .. }, Outcome::Removed(_)) => {
                Some("Deleted task".to_string())
            }
            (PendingAction::ClearBucket { bucket }, Outcome::Removed(n)) => Some(format!(
                "Cleared {} {} task{}",
                n,
                bucket,
                if n == 1 { "" } else { "s" }
            )),
            _ => None,
        };
        self.clamp_cursor();
    }

    pub fn open_menu(&mut self) {
        self.menu_open = true;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    // -----------------------------------------------------------------------
    // Draft editing
    // -----------------------------------------------------------------------

    /// Current draft title, or "" when nothing is being edited
    pub fn draft(&self) -> &str {
        self.tasks.edit_session().map_or("", |s| s.draft.as_str())
    }

    fn set_draft(&mut self, draft: String, cursor: usize) {
        self.edit_cursor = cursor.min(draft.len());
        self.tasks.update_draft_title(draft);
    }

    pub fn insert_text(&mut self, s: &str) {
        let mut draft = self.draft().to_string();
        let at = self.edit_cursor.min(draft.len());
        draft.insert_str(at, s);
        self.set_draft(draft, at + s.len());
    }

    pub fn delete_backward(&mut self) {
        let mut draft = self.draft().to_string();
        if let Some(prev) = text::prev_boundary(&draft, self.edit_cursor) {
            draft.replace_range(prev..self.edit_cursor, "");
            self.set_draft(draft, prev);
        }
    }

    pub fn delete_forward(&mut self) {
        let mut draft = self.draft().to_string();
        if let Some(next) = text::next_boundary(&draft, self.edit_cursor) {
            draft.replace_range(self.edit_cursor..next, "");
            let at = self.edit_cursor;
            self.set_draft(draft, at);
        }
    }

    /// Ctrl-U: drop everything left of the caret
    pub fn kill_to_start(&mut self) {
        let draft = self.draft()[self.edit_cursor.min(self.draft().len())..].to_string();
        self.set_draft(draft, 0);
    }

    pub fn caret_left(&mut self) {
        if let Some(prev) = text::prev_boundary(self.draft(), self.edit_cursor) {
            self.edit_cursor = prev;
        }
    }

    pub fn caret_right(&mut self) {
        if let Some(next) = text::next_boundary(self.draft(), self.edit_cursor) {
            self.edit_cursor = next;
        }
    }

    pub fn caret_word_left(&mut self) {
        self.edit_cursor = text::word_start(self.draft(), self.edit_cursor);
    }

    pub fn caret_word_right(&mut self) {
        self.edit_cursor = text::next_word_start(self.draft(), self.edit_cursor);
    }

    pub fn caret_home(&mut self) {
        self.edit_cursor = 0;
    }

    pub fn caret_end(&mut self) {
        self.edit_cursor = self.draft().len();
    }
}

/// Run the TUI application
pub fn run(app: &mut App) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    if app.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            LeaveAlternateScreen
        );
        original_hook(panic_info);
    }));

    info!(filter = %app.tasks.active_filter(), tasks = app.tasks.tasks().len(), "session started");
    let result = run_event_loop(&mut terminal, app);
    info!(tasks = app.tasks.tasks().len(), "session ended");

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Mouse(mouse) if app.mouse_enabled => match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        input::handle_click(app, mouse.column, mouse.row);
                    }
                    MouseEventKind::ScrollDown => input::handle_scroll(app, 1),
                    MouseEventKind::ScrollUp => input::handle_scroll(app, -1),
                    _ => {}
                },
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
