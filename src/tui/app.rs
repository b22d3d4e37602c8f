//! Application state and update logic following The Elm Architecture.

use chrono::{Datelike, NaiveDateTime};
use tracing::{info, warn};

use crate::form::{Field, FormState};

/// Feedback message to display in status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Messages that drive state updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Navigation
    FocusNext,
    FocusPrev,

    // Input handling
    InputChar(char),
    InputBackspace,
    Submit,

    // System
    Quit,
}

/// Main application state.
pub struct App {
    /// Values, flags and latest result.
    pub form: FormState,

    /// Raw text of each input, in form order.
    pub inputs: [String; 3],

    /// Input receiving keystrokes.
    pub focus: Field,

    /// Reject submissions with unparseable or out-of-range fields.
    pub strict: bool,

    /// Status bar message.
    pub status: Option<StatusMessage>,

    /// Should quit.
    pub should_quit: bool,
}

impl App {
    pub fn new(strict: bool) -> Self {
        App {
            form: FormState::new(),
            inputs: Default::default(),
            focus: Field::Day,
            strict,
            status: None,
            should_quit: false,
        }
    }

    /// Raw text of one input.
    pub fn input(&self, field: Field) -> &str {
        &self.inputs[index(field)]
    }

    /// Process a message and update state.
    ///
    /// `now` is read per message: it bounds the year field and is the
    /// reference instant for submissions.
    pub fn update(&mut self, msg: Message, now: NaiveDateTime) {
        match msg {
            Message::FocusNext => {
                self.focus = self.focus.next();
            }
            Message::FocusPrev => {
                self.focus = self.focus.prev();
            }
            Message::InputChar(c) => {
                self.inputs[index(self.focus)].push(c);
                self.field_changed(now);
            }
            Message::InputBackspace => {
                if self.inputs[index(self.focus)].pop().is_some() {
                    self.field_changed(now);
                }
            }
            Message::Submit => {
                self.submit(now);
            }
            Message::Quit => {
                self.should_quit = true;
            }
        }
    }

    fn field_changed(&mut self, now: NaiveDateTime) {
        let field = self.focus;
        self.form = self.form.with_field(field, &self.inputs[index(field)], now.year());
    }

    fn submit(&mut self, now: NaiveDateTime) {
        if !self.strict {
            self.form = self.form.submitted(now);
            self.status = None;
            return;
        }

        match self.form.submitted_strict(now) {
            Ok(form) => {
                info!("strict submission accepted");
                self.form = form;
                self.status = None;
            }
            Err(e) => {
                warn!("strict submission rejected: {e}");
                self.status = Some(StatusMessage {
                    text: e.to_string(),
                    is_error: true,
                });
            }
        }
    }
}

fn index(field: Field) -> usize {
    match field {
        Field::Day => 0,
        Field::Month => 1,
        Field::Year => 2,
    }
}
