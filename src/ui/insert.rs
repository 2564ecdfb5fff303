use std::str::FromStr;

use chrono::NaiveDate;
use unsegen::input::*;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_till1, take_until1},
    character::complete::{char, space1},
    combinator::all_consuming,
    error::{Error, ErrorKind, ParseError},
    multi::separated_list1,
    sequence::{delimited, separated_pair},
    IResult,
};

use super::context::{Context, Mode};

/// A validated add-event submission, ready for insertion into the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub date: NaiveDate,
}

fn field_value(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('"'), take_until1("\""), char('"')),
        take_till1(|c: char| c.is_whitespace()),
    ))(input)
}

fn field(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(alt((tag("title"), tag("date"))), char(':'), field_value)(input)
}

/// Parses a prompt line of the form `title:"Team standup" date:2024-03-05`
/// (field order is free, titles without spaces may omit the quotes). Both
/// fields are required and the title must be non-empty; rejecting bad input
/// here keeps invalid events out of the store entirely.
pub fn parse_event_line(line: &str) -> Result<EventDraft, Error<String>> {
    let (_, fields) = all_consuming(separated_list1(space1, field))(line.trim())
        .map_err(|_| ParseError::from_error_kind(line.to_owned(), ErrorKind::SeparatedList))?;

    let mut title = None;
    let mut date = None;

    for (key, value) in fields {
        match key {
            "title" => title = Some(value.to_owned()),
            "date" => {
                date = Some(NaiveDate::from_str(value).map_err(|_| {
                    ParseError::from_error_kind(value.to_owned(), ErrorKind::MapRes)
                })?)
            }
            _ => unreachable!(),
        }
    }

    match (title, date) {
        (Some(title), Some(date)) if !title.trim().is_empty() => Ok(EventDraft { title, date }),
        _ => Err(ParseError::from_error_kind(
            line.to_owned(),
            ErrorKind::Verify,
        )),
    }
}

pub struct InsertParser<'a> {
    context: &'a mut Context,
}

impl<'a> InsertParser<'a> {
    pub fn new(context: &'a mut Context) -> Self {
        InsertParser { context }
    }
}

impl Behavior for InsertParser<'_> {
    fn input(self, input: Input) -> Option<Input> {
        if let Event::Key(Key::Char('\n')) = input.event {
            let line = self.context.input_sink_mut().finish_line().to_owned();

            match parse_event_line(&line) {
                Ok(draft) => {
                    log::debug!("Adding event '{}' on {}", draft.title, draft.date);
                    self.context.submit_event(draft);
                    self.context.last_error_message = None;
                    self.context.mode = Mode::Normal;
                }
                Err(e) => {
                    log::debug!("Rejected event line '{}': {}", line, e);
                    self.context.last_error_message = Some(format!("{}", e));
                }
            }
            None
        } else {
            Some(input)
        }
    }
}
