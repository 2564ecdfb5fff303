use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// A single captured event. Immutable once created; there are no edit or
/// delete operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    title: String,
    date: NaiveDate,
}

impl Event {
    pub fn new(title: String, date: NaiveDate) -> Self {
        Event { title, date }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// In-memory event store, keyed by day-of-month.
///
/// The key is `date.day()` alone, so entries from different months or years
/// that share a day number land in the same bucket and show up in every
/// displayed month on that day. This mirrors the keying of the rendering
/// layer, which addresses cells by day number only.
#[derive(Debug, Clone, Default)]
pub struct Agenda {
    events: HashMap<u32, Vec<Event>>,
}

impl Agenda {
    pub fn new() -> Self {
        Agenda::default()
    }

    /// Returns a new store with `{title, date}` appended under the day key
    /// of `date`. The receiver is left untouched, so the rendering layer can
    /// detect changes by swapping whole store values.
    ///
    /// Callers are responsible for rejecting empty titles before insertion.
    pub fn add_event(&self, title: String, date: NaiveDate) -> Agenda {
        let mut next = self.clone();
        next.events
            .entry(date.day())
            .or_insert_with(Vec::new)
            .push(Event::new(title, date));
        next
    }

    /// All events bucketed under `day`, in insertion order. Empty for days
    /// without events.
    pub fn events_on(&self, day: u32) -> &[Event] {
        self.events.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_store_has_no_events() {
        let agenda = Agenda::new();
        assert!(agenda.is_empty());
        assert_eq!(agenda.len(), 0);
        assert!(agenda.events_on(15).is_empty());
    }

    #[test]
    fn add_event_leaves_receiver_untouched() {
        let before = Agenda::new();
        let after = before.add_event("Standup".to_owned(), date(2024, 3, 5));

        assert!(before.is_empty());
        assert_eq!(after.len(), 1);
        assert_eq!(after.events_on(5)[0].title(), "Standup");
    }

    #[test]
    fn insertion_order_is_preserved() {
        let agenda = Agenda::new()
            .add_event("Standup".to_owned(), date(2024, 3, 5))
            .add_event("Review".to_owned(), date(2024, 3, 5))
            .add_event("Retro".to_owned(), date(2024, 3, 5));

        let titles: Vec<_> = agenda.events_on(5).iter().map(Event::title).collect();
        assert_eq!(titles, ["Standup", "Review", "Retro"]);
        assert_eq!(
            agenda.events_on(5).last().map(Event::title),
            Some("Retro")
        );
    }

    #[test]
    fn other_days_are_untouched() {
        let agenda = Agenda::new()
            .add_event("Standup".to_owned(), date(2024, 3, 5))
            .add_event("Dentist".to_owned(), date(2024, 3, 12));

        assert_eq!(agenda.events_on(5).len(), 1);
        assert_eq!(agenda.events_on(12).len(), 1);
        assert!(agenda.events_on(6).is_empty());
    }

    #[test]
    fn events_share_a_bucket_by_day_of_month() {
        // Different months, same day number: both land under key 5.
        let agenda = Agenda::new()
            .add_event("Standup".to_owned(), date(2024, 3, 5))
            .add_event("Review".to_owned(), date(2024, 4, 5));

        let bucket = agenda.events_on(5);
        assert_eq!(bucket.len(), 2);
        assert_eq!(bucket[0], Event::new("Standup".to_owned(), date(2024, 3, 5)));
        assert_eq!(bucket[1], Event::new("Review".to_owned(), date(2024, 4, 5)));
    }
}
