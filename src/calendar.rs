use chrono::{Datelike, Month, NaiveDate};
use num_traits::FromPrimitive;

/// Number of cells in a rendered month: 6 rows of 7 weekdays. Large enough
/// for every month/weekday combination (31 days starting on a Sunday).
pub const GRID_CELLS: usize = 42;
pub const GRID_COLUMNS: usize = 7;
pub const GRID_ROWS: usize = 6;

pub fn days_of_month(month: &Month, year: i32) -> u32 {
    if month.number_from_month() == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month.number_from_month() + 1, 1)
    }
    .unwrap()
    .signed_duration_since(NaiveDate::from_ymd_opt(year, month.number_from_month(), 1).unwrap())
    .num_days() as u32
}

/// One slot of the 42-cell month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    Empty,
    Day { day: u32, is_today: bool },
}

impl GridCell {
    pub fn day_num(&self) -> Option<u32> {
        match self {
            GridCell::Empty => None,
            GridCell::Day { day, .. } => Some(*day),
        }
    }

    pub fn is_today(&self) -> bool {
        matches!(self, GridCell::Day { is_today: true, .. })
    }
}

/// The (year, month) pair currently shown in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMonth {
    month: Month,
    year: i32,
}

impl DisplayMonth {
    pub fn new(month: Month, year: i32) -> Self {
        DisplayMonth { month, year }
    }

    pub fn from_date<T: Datelike>(date: &T) -> Self {
        DisplayMonth {
            month: Month::from_u32(date.month()).unwrap(),
            year: date.year(),
        }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn name(&self) -> &'static str {
        self.month.name()
    }

    pub fn succ(&self) -> Self {
        let month = self.month.succ();
        DisplayMonth {
            month,
            year: if let Month::January = month {
                self.year + 1
            } else {
                self.year
            },
        }
    }

    pub fn pred(&self) -> Self {
        let month = self.month.pred();
        DisplayMonth {
            month,
            year: if let Month::December = month {
                self.year - 1
            } else {
                self.year
            },
        }
    }

    pub fn days(&self) -> u32 {
        days_of_month(&self.month, self.year)
    }

    /// Weekday of the first of the month, Monday-first (0 = Monday).
    pub fn first_weekday_offset(&self) -> u32 {
        NaiveDate::from_ymd_opt(self.year, self.month.number_from_month(), 1)
            .unwrap()
            .weekday()
            .num_days_from_monday()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month.number_from_month()
    }

    /// Lays out the month as 42 ordered cells: leading and trailing slots
    /// outside the month are `Empty`, in-month slots carry their day number.
    /// Recomputed wholesale whenever the displayed month changes.
    pub fn grid(&self, today: NaiveDate) -> Vec<GridCell> {
        let days = self.days();
        let offset = self.first_weekday_offset();
        let today_day = if self.contains(today) {
            Some(today.day())
        } else {
            None
        };

        (0..GRID_CELLS as u32)
            .map(|i| {
                if i < offset || i >= offset + days {
                    GridCell::Empty
                } else {
                    let day = i - offset + 1;
                    GridCell::Day {
                        day,
                        is_today: today_day == Some(day),
                    }
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn grid_always_has_42_cells() {
        for &(month, year) in &[
            (Month::February, 2023),
            (Month::February, 2024),
            (Month::April, 2024),
            (Month::December, 1999),
            (Month::September, 2024),
        ] {
            let grid = DisplayMonth::new(month, year).grid(date(2024, 1, 1));
            assert_eq!(grid.len(), GRID_CELLS);
        }
    }

    #[test]
    fn filled_cells_match_month_length() {
        let cases = [
            (Month::January, 2024, 31),
            (Month::February, 2024, 29),
            (Month::February, 2023, 28),
            (Month::April, 2024, 30),
            (Month::February, 2000, 29),
            (Month::February, 1900, 28),
        ];

        for &(month, year, expected) in &cases {
            let display = DisplayMonth::new(month, year);
            assert_eq!(display.days(), expected);

            let filled = display
                .grid(date(2024, 1, 1))
                .iter()
                .filter(|c| c.day_num().is_some())
                .count() as u32;
            assert_eq!(filled, expected, "{} {}", display.name(), year);
        }
    }

    #[test]
    fn first_filled_index_is_monday_offset() {
        // January 2024 starts on a Monday, February 2024 on a Thursday.
        let jan = DisplayMonth::new(Month::January, 2024);
        assert_eq!(jan.first_weekday_offset(), 0);
        assert_eq!(jan.grid(date(2023, 6, 1))[0].day_num(), Some(1));

        let feb = DisplayMonth::new(Month::February, 2024);
        assert_eq!(feb.first_weekday_offset(), 3);

        let grid = feb.grid(date(2023, 6, 1));
        let first_filled = grid.iter().position(|c| c.day_num().is_some()).unwrap();
        assert_eq!(first_filled, 3);
        assert_eq!(grid[3].day_num(), Some(1));
    }

    #[test]
    fn leap_february_marks_today() {
        let grid = DisplayMonth::new(Month::February, 2024).grid(date(2024, 2, 15));

        assert_eq!(grid.iter().filter(|c| c.day_num().is_some()).count(), 29);

        let today_cells: Vec<_> = grid.iter().filter(|c| c.is_today()).collect();
        assert_eq!(today_cells.len(), 1);
        assert_eq!(today_cells[0].day_num(), Some(15));
    }

    #[test]
    fn other_months_have_no_today() {
        let grid = DisplayMonth::new(Month::March, 2024).grid(date(2024, 2, 15));
        assert!(grid.iter().all(|c| !c.is_today()));

        // Same month number, different year.
        let grid = DisplayMonth::new(Month::February, 2023).grid(date(2024, 2, 15));
        assert!(grid.iter().all(|c| !c.is_today()));
    }

    #[test]
    fn trailing_cells_are_empty() {
        let display = DisplayMonth::new(Month::February, 2023);
        let grid = display.grid(date(2024, 1, 1));
        let offset = display.first_weekday_offset() as usize;

        assert!(grid[..offset].iter().all(|c| *c == GridCell::Empty));
        assert!(grid[offset + 28..].iter().all(|c| *c == GridCell::Empty));
    }

    #[test]
    fn twelve_months_forward_is_next_year() {
        let start = DisplayMonth::new(Month::May, 2021);
        let mut current = start;
        for _ in 0..12 {
            current = current.succ();
        }
        assert_eq!(current, DisplayMonth::new(Month::May, 2022));
    }

    #[test]
    fn year_rollover() {
        let dec = DisplayMonth::new(Month::December, 2023);
        assert_eq!(dec.succ(), DisplayMonth::new(Month::January, 2024));

        let jan = DisplayMonth::new(Month::January, 2024);
        assert_eq!(jan.pred(), DisplayMonth::new(Month::December, 2023));

        assert_eq!(jan.succ().pred(), jan);
        assert_eq!(jan.pred().succ(), jan);
    }
}
