use chrono::NaiveDate;

use unsegen::base::style::*;
use unsegen::widget::builtin::PromptLine;

use crate::agenda::Agenda;
use crate::calendar::DisplayMonth;
use crate::config::Config;

use super::insert::EventDraft;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Insert,
}

#[derive(Clone, Debug)]
pub struct Theme {
    pub month_header_style: StyleModifier,
    pub month_header_text_style: TextFormatModifier,
    pub weekday_header_style: StyleModifier,
    pub day_style: StyleModifier,
    pub today_day_style: StyleModifier,
    pub today_day_text_style: TextFormatModifier,
    pub today_day_char: Option<char>,
    pub event_day_char: Option<char>,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            month_header_style: StyleModifier::new().fg_color(Color::Yellow),
            month_header_text_style: TextFormatModifier::default(),
            weekday_header_style: StyleModifier::new().fg_color(Color::Cyan),
            day_style: StyleModifier::default(),
            today_day_style: StyleModifier::new().invert(true),
            today_day_text_style: TextFormatModifier::default().italic(true),
            today_day_char: Some('*'),
            event_day_char: Some('.'),
        }
    }
}

impl Theme {
    pub fn from_config(config: &Config) -> Self {
        Theme {
            today_day_char: Some(config.today_char),
            event_day_char: Some(config.event_char),
            ..Theme::default()
        }
    }
}

/// UI state owned exclusively by the run loop: the displayed month, the
/// event store, and the reference "today" date. `today` is read from the
/// system clock once at startup and not re-read afterwards.
pub struct Context {
    pub mode: Mode,
    pub theme: Theme,
    pub last_error_message: Option<String>,
    input_line: PromptLine,
    display: DisplayMonth,
    agenda: Agenda,
    today: NaiveDate,
}

impl Context {
    pub fn new(config: &Config, today: NaiveDate) -> Self {
        Context {
            mode: Mode::Normal,
            theme: Theme::from_config(config),
            last_error_message: None,
            input_line: PromptLine::with_prompt("add> ".to_owned()),
            display: DisplayMonth::from_date(&today),
            agenda: Agenda::new(),
            today,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn display(&self) -> DisplayMonth {
        self.display
    }

    pub fn agenda(&self) -> &Agenda {
        &self.agenda
    }

    pub fn next_month(&mut self) {
        self.display = self.display.succ();
    }

    pub fn prev_month(&mut self) {
        self.display = self.display.pred();
    }

    pub fn select_today(&mut self) {
        self.display = DisplayMonth::from_date(&self.today);
    }

    /// Replaces the store with the one returned by the insertion, keeping
    /// the previous value untouched until the swap.
    pub fn submit_event(&mut self, draft: EventDraft) {
        self.agenda = self.agenda.add_event(draft.title, draft.date);
    }

    /// Discards any pending prompt input without touching the store.
    pub fn cancel_insert(&mut self) {
        let _ = self.input_line.finish_line();
        self.last_error_message = None;
        self.mode = Mode::Normal;
    }

    pub fn input_sink(&self) -> &PromptLine {
        &self.input_line
    }

    pub fn input_sink_mut(&mut self) -> &mut PromptLine {
        &mut self.input_line
    }
}
