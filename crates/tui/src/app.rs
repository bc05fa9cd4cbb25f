//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! lifecycle: polling events, translating them into UI messages and
//! draft intents, writing the snapshot after every persisting intent,
//! and rendering.

use std::path::PathBuf;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use bunpai_protocol::{Confirmation, DraftState, DraftView, Effect, Message};
use bunpai_store::persistence::save_draft;

use crate::{
    AppState, EditMode, Focus,
    event::{
        UiMessage, key_to_dialog_message, key_to_edit_message, key_to_message,
        key_to_preview_message, poll_event,
    },
    layout::{
        HEADER_HEIGHT, MIN_HEIGHT, MIN_WIDTH, STATUS_BAR_HEIGHT, SUMMARY_HEIGHT, centered_rect,
    },
    terminal::AppTerminal,
    widgets::{
        StatusContext, render_confirm_dialog, render_editor, render_help_overlay, render_preview,
        render_sections, render_status_bar, render_summary,
    },
};

/// The main application struct.
///
/// Owns the draft (inside [`AppState`]) and the snapshot path. Every
/// intent that reports [`Effect::Persist`] triggers a write-through
/// before the next event is accepted.
#[derive(Debug)]
pub struct App {
    state: AppState,
    should_quit: bool,
    /// Where snapshots are written; `None` disables persistence.
    draft_path: Option<PathBuf>,
}

impl App {
    /// Creates an application without a backing store.
    ///
    /// Used by tests and degraded startup (no resolvable data dir);
    /// the draft then lives only for the session.
    ///
    /// # Examples
    ///
    /// ```
    /// use bunpai_protocol::DraftState;
    /// use bunpai_tui::App;
    ///
    /// let app = App::new(DraftState::default());
    /// ```
    #[must_use]
    pub fn new(draft: DraftState) -> Self {
        Self {
            state: AppState::new(draft),
            should_quit: false,
            draft_path: None,
        }
    }

    /// Creates an application writing snapshots to `path`.
    #[must_use]
    pub fn with_store(draft: DraftState, path: PathBuf) -> Self {
        Self {
            state: AppState::new(draft),
            should_quit: false,
            draft_path: Some(path),
        }
    }

    /// Returns a reference to the UI state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies an intent to the draft, writing through on demand.
    ///
    /// The snapshot write is best-effort: a failing write must not take
    /// the editor down mid-session, and the draft state itself is
    /// always updated first.
    fn dispatch(&mut self, message: Message) {
        if self.state.draft.apply(message) == Effect::Persist
            && let Some(path) = &self.draft_path
        {
            let _ = save_draft(path, &self.state.draft);
        }
    }

    /// Updates the application state based on a UI message.
    ///
    /// When the help overlay is visible, most messages dismiss it
    /// instead of performing their normal action.
    pub fn update(&mut self, msg: UiMessage) {
        if self.state.help_visible {
            match msg {
                UiMessage::Quit => self.should_quit = true,
                _ => {
                    let _ = self.state.dismiss_help();
                }
            }
            return;
        }

        if self.state.draft.confirmation.is_active() {
            self.update_dialog(msg);
            return;
        }

        if self.state.edit.is_editing() {
            self.update_edit(msg);
            return;
        }

        match msg {
            UiMessage::Quit => self.should_quit = true,
            UiMessage::Navigate { delta } => self.state.navigate(delta),
            UiMessage::EditTarget => self.state.begin_target_edit(),
            UiMessage::EditTitle => self.state.begin_title_edit(),
            UiMessage::EditRatio => self.state.begin_ratio_edit(),
            UiMessage::EditContent => self.state.begin_content_edit(),
            UiMessage::OpenPreview => self.state.focus = Focus::Preview,
            UiMessage::ClosePreview => self.state.focus = Focus::Sections,
            UiMessage::RequestDelete => {
                if let Some(title) = self.state.selected_title() {
                    self.dispatch(Message::RequestDelete { title });
                }
            }
            UiMessage::RequestReset => self.dispatch(Message::RequestReset),
            UiMessage::ToggleHelp => self.state.toggle_help(),
            // Edit and dialog messages are handled in their modes
            _ => {}
        }
    }

    /// Handles messages while a confirmation dialog is open.
    fn update_dialog(&mut self, msg: UiMessage) {
        match msg {
            UiMessage::Quit => self.should_quit = true,
            UiMessage::DialogConfirm => {
                match self.state.draft.confirmation.clone() {
                    Confirmation::None => {}
                    Confirmation::Reset => self.dispatch(Message::ConfirmReset),
                    Confirmation::Delete(title) => {
                        self.dispatch(Message::ConfirmDelete { title });
                    }
                }
                self.state.clamp_selection();
            }
            UiMessage::DialogCancel => self.dispatch(Message::CancelConfirmation),
            _ => {}
        }
    }

    /// Handles messages while a text edit is in progress.
    ///
    /// The pending title is mirrored into the draft on every keystroke
    /// so that the `AddSection` intent always reads the current value.
    fn update_edit(&mut self, msg: UiMessage) {
        match msg {
            UiMessage::Quit => self.should_quit = true,
            UiMessage::Input { ch } => {
                self.state.edit.insert_char(ch);
                self.sync_pending_title();
            }
            UiMessage::Backspace => {
                self.state.edit.backspace();
                self.sync_pending_title();
            }
            UiMessage::EditConfirm => {
                if let Some(message) = self.state.finish_edit() {
                    self.dispatch(message);
                }
            }
            UiMessage::EditCancel => {
                if matches!(self.state.edit, EditMode::PendingTitle { .. }) {
                    self.dispatch(Message::SetPendingTitle {
                        text: String::new(),
                    });
                }
                self.state.cancel_edit();
            }
            _ => {}
        }
    }

    fn sync_pending_title(&mut self) {
        if let EditMode::PendingTitle { value, .. } = &self.state.edit {
            let text = value.clone();
            self.dispatch(Message::SetPendingTitle { text });
        }
    }

    /// Renders the application UI to the given frame.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.render_terminal_too_small(frame, area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(SUMMARY_HEIGHT),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(area);

        let view = DraftView::of(&self.state.draft);
        let buf = frame.buffer_mut();

        render_header(chunks[0], buf);

        match self.state.focus {
            Focus::Sections => render_sections(&view, self.state.selected, chunks[1], buf),
            Focus::Editor => {
                if let EditMode::Content { title, value, .. } = &self.state.edit {
                    let limit = view
                        .sections
                        .iter()
                        .find(|row| &row.title == title)
                        .map_or(0, |row| row.limit);
                    render_editor(title, value, limit, chunks[1], buf);
                }
            }
            Focus::Preview => render_preview(&view, chunks[1], buf),
        }

        render_summary(&view, chunks[2], buf);
        render_status_bar(self.status_context(), chunks[3], buf);

        // Single-line edits are drawn as a small input popup
        match &self.state.edit {
            EditMode::Target { value, .. } => render_input_popup("Target count", value, area, buf),
            EditMode::PendingTitle { value, .. } => {
                render_input_popup("New section title", value, area, buf);
            }
            EditMode::Ratio { title, value, .. } => {
                render_input_popup(&format!("Ratio: {title}"), value, area, buf);
            }
            _ => {}
        }

        render_confirm_dialog(&view.confirmation, area, buf);

        if self.state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    /// Picks the status bar context matching the input mode precedence
    /// used by the run loop.
    fn status_context(&self) -> StatusContext {
        if self.state.draft.confirmation.is_active() {
            StatusContext::Dialog
        } else if self.state.edit.is_multiline() {
            StatusContext::ContentEditor
        } else if self.state.edit.is_editing() {
            StatusContext::Editing
        } else if self.state.focus == Focus::Preview {
            StatusContext::Preview
        } else {
            StatusContext::Sections
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: false });

        frame.render_widget(paragraph, area);
    }

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits the application. It
    /// polls for events, updates state, and renders the UI. One event
    /// is fully processed (state transition plus snapshot write) before
    /// the next is polled.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        use crossterm::event::Event;

        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(Event::Key(key)) = poll_event()? {
                // Input mode precedence: dialog, then edit, then preview
                let msg = if self.state.draft.confirmation.is_active() {
                    key_to_dialog_message(key)
                } else if self.state.edit.is_editing() {
                    key_to_edit_message(key, self.state.edit.is_multiline())
                } else if self.state.focus == Focus::Preview {
                    key_to_preview_message(key)
                } else {
                    key_to_message(key)
                };

                if let Some(msg) = msg {
                    self.update(msg);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}

/// Renders the header bar with the application title.
fn render_header(area: Rect, buf: &mut ratatui::buffer::Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let inner = block.inner(area);
    block.render(area, buf);

    let [title_area, help_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(17)]).areas(inner);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "bunpai",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - "),
        Span::styled("字数配分", Style::default().fg(Color::White)),
    ]));
    title.render(title_area, buf);

    let help_cue = Paragraph::new(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" for help", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Right);
    help_cue.render(help_area, buf);
}

/// Renders a small centered input popup for single-line edits.
fn render_input_popup(label: &str, value: &str, area: Rect, buf: &mut ratatui::buffer::Buffer) {
    let popup_area = centered_rect(40, 3, area);
    Clear.render(popup_area, buf);

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let input = Paragraph::new(Line::from(vec![
        Span::raw(value.to_string()),
        Span::styled("\u{2581}", Style::default().fg(Color::Cyan)),
    ]))
    .block(block);

    input.render(popup_area, buf);
}
