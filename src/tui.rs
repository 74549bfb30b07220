//! TUI (Terminal User Interface) module for the puzzle assistant
//!
//! This module provides an interactive terminal form using Ratatui.
//!
//! # Architecture
//! - `FeedbackForm`: Pure form state (focus, typed letters) turned into a `ConstraintBatch`
//! - `TuiInterface`: Terminal rendering and input, implements `SolverInterface`
//!
//! # Layout
//! The left frame holds the ignored-letters field, the five green exact-letter cells and the
//! 6x5 orange misplaced-letter grid. The right frame lists the ranked suggestions.

use crate::constraint::{ConstraintBatch, LetterRow, MAX_ATTEMPT_ROWS};
use crate::corpus::WORD_LENGTH;
use crate::game_state::{SolverInterface, Suggestions, UserAction};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;
const FIELD_COUNT: usize = 1 + WORD_LENGTH + MAX_ATTEMPT_ROWS * WORD_LENGTH;

const ORANGE: Color = Color::Rgb(255, 165, 0);

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const FOCUS_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// A focusable input on the form. Columns and rows are 0-based.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Ignore,
    Exact(usize),
    Misplaced { row: usize, col: usize },
}

impl Field {
    fn index(self) -> usize {
        match self {
            Self::Ignore => 0,
            Self::Exact(col) => 1 + col,
            Self::Misplaced { row, col } => 1 + WORD_LENGTH + row * WORD_LENGTH + col,
        }
    }

    fn from_index(index: usize) -> Self {
        match index % FIELD_COUNT {
            0 => Self::Ignore,
            i if i <= WORD_LENGTH => Self::Exact(i - 1),
            i => {
                let cell = i - 1 - WORD_LENGTH;
                Self::Misplaced {
                    row: cell / WORD_LENGTH,
                    col: cell % WORD_LENGTH,
                }
            }
        }
    }

    /// Tab order: ignore field, exact cells, then the misplaced grid row by row. Wraps around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::from_index(self.index() + FIELD_COUNT - 1)
    }

    #[must_use]
    pub fn down(self) -> Self {
        match self {
            Self::Ignore => Self::Exact(0),
            Self::Exact(col) => Self::Misplaced { row: 0, col },
            Self::Misplaced { row, col } => Self::Misplaced {
                row: (row + 1).min(MAX_ATTEMPT_ROWS - 1),
                col,
            },
        }
    }

    #[must_use]
    pub fn up(self) -> Self {
        match self {
            Self::Ignore | Self::Exact(_) => Self::Ignore,
            Self::Misplaced { row: 0, col } => Self::Exact(col),
            Self::Misplaced { row, col } => Self::Misplaced { row: row - 1, col },
        }
    }
}

/// What a key press did to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Continue,
    Submit(ConstraintBatch),
    Refresh,
    Quit,
    Rejected(String),
}

/// Contents of the feedback form, independent of any terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    ignored: String,
    exact: LetterRow,
    misplaced: [LetterRow; MAX_ATTEMPT_ROWS],
    focus: Field,
}

impl FeedbackForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn focus(&self) -> Field {
        self.focus
    }

    #[must_use]
    pub fn ignored(&self) -> &str {
        &self.ignored
    }

    #[must_use]
    pub fn exact(&self) -> &LetterRow {
        &self.exact
    }

    #[must_use]
    pub fn misplaced(&self) -> &[LetterRow; MAX_ATTEMPT_ROWS] {
        &self.misplaced
    }

    #[must_use]
    pub fn to_batch(&self) -> ConstraintBatch {
        ConstraintBatch::from_rows(&self.ignored, self.exact, self.misplaced)
    }

    /// Empties every field and moves focus back to the ignored-letters field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Applies one key press. The form keeps its contents after a submit.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormOutcome {
        if key.code == KeyCode::Char('r') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.clear();
            return FormOutcome::Refresh;
        }
        // Ignore inputs with Alt or Control modifiers to prevent alt-tab issues
        if has_modifier_keys(&key) {
            debug_log!(
                "FeedbackForm::handle_key() - Ignoring input with modifier: {:?}",
                key.modifiers
            );
            return FormOutcome::Continue;
        }

        match key.code {
            KeyCode::Esc => return FormOutcome::Quit,
            KeyCode::F(5) => {
                self.clear();
                return FormOutcome::Refresh;
            }
            KeyCode::Enter => return FormOutcome::Submit(self.to_batch()),
            KeyCode::Tab | KeyCode::Right => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Left => self.focus = self.focus.prev(),
            KeyCode::Down => self.focus = self.focus.down(),
            KeyCode::Up => self.focus = self.focus.up(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => match self.cell_mut(self.focus) {
                Some(cell) => *cell = None,
                None => self.ignored.clear(),
            },
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.type_letter(c.to_ascii_lowercase()),
            KeyCode::Char(' ') if self.focus == Field::Ignore => {}
            KeyCode::Char(c) => {
                return FormOutcome::Rejected(format!(
                    "Only letters are allowed! ('{c}' is not a letter)"
                ));
            }
            _ => {
                debug_log!("FeedbackForm::handle_key() - Ignoring key: {:?}", key.code);
            }
        }
        FormOutcome::Continue
    }

    fn type_letter(&mut self, letter: char) {
        match self.focus {
            Field::Ignore => {
                if !self.ignored.contains(letter) {
                    self.ignored.push(letter);
                }
            }
            field => {
                if let Some(cell) = self.cell_mut(field) {
                    *cell = Some(letter);
                }
                // Advance within the row, like typing a word
                match field {
                    Field::Exact(col) | Field::Misplaced { col, .. } if col < WORD_LENGTH - 1 => {
                        self.focus = field.next();
                    }
                    _ => {}
                }
            }
        }
    }

    fn backspace(&mut self) {
        match self.focus {
            Field::Ignore => {
                self.ignored.pop();
            }
            field => {
                if let Some(cell) = self.cell_mut(field)
                    && cell.take().is_some()
                {
                    return;
                }
                if let Field::Exact(col) | Field::Misplaced { col, .. } = field
                    && col > 0
                {
                    self.focus = field.prev();
                    if let Some(cell) = self.cell_mut(self.focus) {
                        *cell = None;
                    }
                }
            }
        }
    }

    fn cell_mut(&mut self, field: Field) -> Option<&mut Option<char>> {
        match field {
            Field::Ignore => None,
            Field::Exact(col) => self.exact.get_mut(col),
            Field::Misplaced { row, col } => self.misplaced.get_mut(row)?.get_mut(col),
        }
    }
}

fn has_modifier_keys(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    form: &'a FeedbackForm,
    suggestions: &'a [String],
    candidate_count: Option<usize>,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and suggestion display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    form: FeedbackForm,
    suggestions: Vec<String>,
    candidate_count: Option<usize>,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            form: FeedbackForm::new(),
            suggestions: Vec::new(),
            candidate_count: None,
            message: String::new(),
            error_message: String::new(),
            status: "Loading word list".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            form: &self.form,
            suggestions: &self.suggestions,
            candidate_count: self.candidate_count,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(20),   // Form and suggestions
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(chunks[1]);

        Self::render_title(f, chunks[0]);
        Self::render_form(f, body[0], ctx);
        Self::render_suggestions(f, body[1], ctx.suggestions, ctx.candidate_count);
        Self::render_status(f, chunks[2], ctx.status);
        Self::render_instructions(f, chunks[3]);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("WORDLE ASSIST")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn cell_span(letter: Option<char>, fill: Color, focused: bool) -> Span<'static> {
        let style = match letter {
            Some(_) => Style::default().fg(Color::Black).bg(fill),
            None => Style::default().fg(Color::White).bg(Color::DarkGray),
        };
        let style = if focused { style.patch(FOCUS_STYLE) } else { style };
        let shown = letter.map_or(' ', |c| c.to_ascii_uppercase());
        Span::styled(format!(" {shown} "), style)
    }

    fn render_row(
        label: String,
        row: &LetterRow,
        fill: Color,
        focused_col: Option<usize>,
    ) -> Line<'static> {
        let mut spans = vec![Span::raw(label)];
        for (col, &letter) in row.iter().enumerate() {
            spans.push(Self::cell_span(letter, fill, focused_col == Some(col)));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn render_form(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let form = ctx.form;
        let focus = form.focus();
        let mut lines = Vec::new();

        lines.push(Line::from(vec![Span::styled("Ignored letters:", HEADER_STYLE)]));
        let ignored = if form.ignored().is_empty() {
            " ".to_string()
        } else {
            form.ignored().to_ascii_uppercase()
        };
        let ignored_style = if focus == Field::Ignore {
            FOCUS_STYLE
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(format!(" {ignored} "), ignored_style),
        ]));
        lines.push(Line::from(""));

        lines.push(Line::from(vec![Span::styled("Exact (green):", HEADER_STYLE)]));
        let exact_focus = match focus {
            Field::Exact(col) => Some(col),
            _ => None,
        };
        lines.push(Self::render_row(
            "    ".to_string(),
            form.exact(),
            Color::Green,
            exact_focus,
        ));
        lines.push(Line::from(""));

        lines.push(Line::from(vec![Span::styled(
            "Misplaced (orange), one row per guess:",
            HEADER_STYLE,
        )]));
        for (row_index, row) in form.misplaced().iter().enumerate() {
            let focused_col = match focus {
                Field::Misplaced { row: focus_row, col } if focus_row == row_index => Some(col),
                _ => None,
            };
            lines.push(Self::render_row(
                format!("  {} ", row_index + 1),
                row,
                ORANGE,
                focused_col,
            ));
        }
        lines.push(Line::from(""));

        if !ctx.message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.message, MESSAGE_STYLE)]));
        }
        if !ctx.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Feedback").borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    fn render_suggestions(
        f: &mut Frame,
        area: Rect,
        suggestions: &[String],
        candidate_count: Option<usize>,
    ) {
        let mut lines = Vec::new();
        if let Some(count) = candidate_count {
            lines.push(Line::from(vec![Span::styled(
                format!("Candidates remaining: {count}"),
                INFO_STYLE,
            )]));
            lines.push(Line::from(""));
        }
        for (i, line) in suggestions.iter().enumerate() {
            let style = if i == 0 { SUCCESS_STYLE } else { Style::default() };
            lines.push(Line::from(vec![Span::styled(format!("  {line}"), style)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Suggestions").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect) {
        let text = "Letters: fill | TAB/Arrows: move | BACKSPACE: clear | ENTER: apply | F5/Ctrl-R: refresh | ESC: quit";
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let event = event::read()?;
        debug_log!("handle_input() - Event received: {:?}", event);

        let Event::Key(key) = event else {
            // Mouse, focus, paste and resize events carry no input
            return Ok(None);
        };

        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != event::KeyEventKind::Press {
            return Ok(None);
        }

        // Filter out replacement and control characters that come from escape sequences
        // when alt-tabbing
        if let KeyCode::Char(c) = key.code
            && (c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD)
        {
            debug_log!(
                "handle_input() - Ignoring invalid character from escape sequence: {:?}",
                c
            );
            return Ok(None);
        }

        self.error_message.clear();
        let action = match self.form.handle_key(key) {
            FormOutcome::Continue => None,
            FormOutcome::Submit(batch) => {
                info_log!("handle_input() - Form submitted: {:?}", batch);
                self.status = "Applying feedback...".to_string();
                Some(UserAction::Apply(batch))
            }
            FormOutcome::Refresh => {
                info_log!("handle_input() - Refresh requested, form cleared");
                Some(UserAction::Refresh)
            }
            FormOutcome::Quit => Some(UserAction::Exit),
            FormOutcome::Rejected(message) => {
                debug_log!("handle_input() - {}", message);
                self.error_message = message;
                None
            }
        };
        Ok(action)
    }
}

impl SolverInterface for TuiInterface {
    fn display_loaded(&mut self, word_count: usize) {
        self.message = format!("Loaded {word_count} words.");
        self.status = "Ready - Fill in the feedback and press ENTER".to_string();
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => return Some(action),
                Ok(None) => {}
                Err(e) => {
                    log::warn!("Terminal input failed: {e}");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_suggestions(&mut self, suggestions: &Suggestions) {
        self.suggestions = suggestions.lines();
        self.candidate_count = Some(suggestions.candidate_count);
        self.status = format!(
            "{} candidates remaining, showing {}",
            suggestions.candidate_count,
            suggestions.entries.len()
        );
        self.draw_or_log();
    }

    fn display_no_candidates_message(&mut self) {
        self.suggestions.clear();
        self.candidate_count = Some(0);
        self.message = "No candidates remain. Check your inputs.".to_string();
        self.status = "No valid candidates - press F5 to start over".to_string();
        self.draw_or_log();
    }

    fn display_reset_message(&mut self, word_count: usize) {
        self.message = format!("Word list reloaded. {word_count} words.");
        self.status = "Refreshed - all feedback cleared".to_string();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.message = "Exiting...".to_string();
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::Constraint;
    use crate::corpus::Position;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(form: &mut FeedbackForm, text: &str) {
        for c in text.chars() {
            form.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn pos(n: usize) -> Position {
        Position::new(n).unwrap()
    }

    #[test]
    fn test_tab_visits_every_field_and_wraps() {
        let mut field = Field::Ignore;
        let mut seen = Vec::new();
        for _ in 0..FIELD_COUNT {
            seen.push(field);
            field = field.next();
        }
        assert_eq!(field, Field::Ignore);
        assert_eq!(seen[1], Field::Exact(0));
        assert_eq!(seen[6], Field::Misplaced { row: 0, col: 0 });
        assert_eq!(
            seen[FIELD_COUNT - 1],
            Field::Misplaced {
                row: MAX_ATTEMPT_ROWS - 1,
                col: WORD_LENGTH - 1
            }
        );
        assert_eq!(Field::Ignore.prev(), seen[FIELD_COUNT - 1]);
    }

    #[test]
    fn test_vertical_navigation() {
        assert_eq!(Field::Ignore.down(), Field::Exact(0));
        assert_eq!(Field::Exact(3).down(), Field::Misplaced { row: 0, col: 3 });
        assert_eq!(
            Field::Misplaced { row: 5, col: 2 }.down(),
            Field::Misplaced { row: 5, col: 2 }
        );
        assert_eq!(Field::Misplaced { row: 0, col: 4 }.up(), Field::Exact(4));
        assert_eq!(Field::Exact(2).up(), Field::Ignore);
    }

    #[test]
    fn test_ignore_field_dedups_and_lowercases() {
        let mut form = FeedbackForm::new();
        type_str(&mut form, "QxQ z");
        assert_eq!(form.ignored(), "qxz");
    }

    #[test]
    fn test_typing_in_cells_advances_within_row() {
        let mut form = FeedbackForm::new();
        form.handle_key(key(KeyCode::Tab));
        type_str(&mut form, "crane");
        assert_eq!(
            form.exact(),
            &[Some('c'), Some('r'), Some('a'), Some('n'), Some('e')]
        );
        // Stays on the last cell of the row
        assert_eq!(form.focus(), Field::Exact(4));
    }

    #[test]
    fn test_backspace_clears_then_moves_left() {
        let mut form = FeedbackForm::new();
        form.handle_key(key(KeyCode::Tab));
        type_str(&mut form, "ab");
        assert_eq!(form.focus(), Field::Exact(2));

        form.handle_key(key(KeyCode::Backspace));
        assert_eq!(form.focus(), Field::Exact(1));
        assert_eq!(form.exact()[1], None);
        assert_eq!(form.exact()[0], Some('a'));

        form.handle_key(key(KeyCode::Backspace));
        assert_eq!(form.focus(), Field::Exact(0));
        assert_eq!(form.exact()[0], None);
    }

    #[test]
    fn test_enter_submits_and_keeps_form() {
        let mut form = FeedbackForm::new();
        type_str(&mut form, "q");
        form.handle_key(key(KeyCode::Tab));
        form.handle_key(key(KeyCode::Down));
        type_str(&mut form, "r");

        let outcome = form.handle_key(key(KeyCode::Enter));
        let FormOutcome::Submit(batch) = outcome else {
            panic!("Expected Submit, got {outcome:?}");
        };
        assert_eq!(
            batch.constraints(),
            vec![
                Constraint::ExcludeLetter('q'),
                Constraint::PositionExclude(pos(1), 'r'),
            ]
        );
        assert_eq!(form.ignored(), "q");
        assert_eq!(form.misplaced()[0][0], Some('r'));
    }

    #[test]
    fn test_refresh_keys_clear_form() {
        let mut form = FeedbackForm::new();
        type_str(&mut form, "q");
        assert_eq!(form.handle_key(key(KeyCode::F(5))), FormOutcome::Refresh);
        assert_eq!(form, FeedbackForm::new());

        type_str(&mut form, "z");
        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(form.handle_key(ctrl_r), FormOutcome::Refresh);
        assert!(form.ignored().is_empty());
    }

    #[test]
    fn test_modifier_letters_are_ignored() {
        let mut form = FeedbackForm::new();
        let alt_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT);
        assert_eq!(form.handle_key(alt_a), FormOutcome::Continue);
        assert!(form.ignored().is_empty());
    }

    #[test]
    fn test_non_letter_is_rejected() {
        let mut form = FeedbackForm::new();
        form.handle_key(key(KeyCode::Tab));
        let outcome = form.handle_key(key(KeyCode::Char('7')));
        assert_eq!(
            outcome,
            FormOutcome::Rejected("Only letters are allowed! ('7' is not a letter)".to_string())
        );
        assert_eq!(form.exact()[0], None);
    }

    #[test]
    fn test_escape_quits() {
        let mut form = FeedbackForm::new();
        assert_eq!(form.handle_key(key(KeyCode::Esc)), FormOutcome::Quit);
    }

    #[test]
    fn test_delete_clears_focused_field() {
        let mut form = FeedbackForm::new();
        type_str(&mut form, "qz");
        form.handle_key(key(KeyCode::Delete));
        assert!(form.ignored().is_empty());
    }

    #[test]
    fn test_empty_form_submits_empty_batch() {
        let mut form = FeedbackForm::new();
        assert_eq!(
            form.handle_key(key(KeyCode::Enter)),
            FormOutcome::Submit(ConstraintBatch::new())
        );
    }
}
