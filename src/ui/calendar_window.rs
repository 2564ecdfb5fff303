use std::fmt::{Display, Write};

use unsegen::base::*;
use unsegen::widget::*;

use crate::calendar::{GridCell, GRID_COLUMNS, GRID_ROWS};

use super::{Context, Theme};

struct DayCell<'a> {
    day_num: u8,
    is_today: bool,
    has_events: bool,
    theme: &'a Theme,
}

impl<'a> DayCell<'a> {
    const CELL_HEIGHT: usize = 1;
    const CELL_WIDTH: usize = 4;

    fn new(day_num: u8, theme: &'a Theme) -> Self {
        DayCell {
            day_num,
            is_today: false,
            has_events: false,
            theme,
        }
    }

    fn today(mut self, is_today: bool) -> Self {
        self.is_today = is_today;
        self
    }

    fn with_events(mut self, has_events: bool) -> Self {
        self.has_events = has_events;
        self
    }
}

impl Display for DayCell<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arg_today = if self.is_today {
            self.theme.today_day_char.unwrap_or(' ')
        } else {
            ' '
        };

        let arg_events = if self.has_events {
            self.theme.event_day_char.unwrap_or(' ')
        } else {
            ' '
        };

        write!(f, "{}{}{:>2}", arg_today, arg_events, self.day_num)
    }
}

/// Renders the displayed month as a label row, a weekday header and the
/// 42-cell grid in 6 rows of 7 fixed-width cells.
pub struct MonthPane<'a> {
    context: &'a Context,
}

impl<'a> MonthPane<'a> {
    const HEADER_ROWS: usize = 2;

    const HEADER: &'static [&'static str] = &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

    pub fn new(context: &'a Context) -> Self {
        MonthPane { context }
    }
}

impl Widget for MonthPane<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::exact(GRID_COLUMNS * DayCell::CELL_WIDTH),
            height: RowDemand::exact(Self::HEADER_ROWS + GRID_ROWS * DayCell::CELL_HEIGHT),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = &self.context.theme;
        let display = self.context.display();
        let grid = display.grid(self.context.today());

        let mut cursor = Cursor::new(&mut window)
            .wrapping_mode(WrappingMode::Wrap)
            .style_modifier(
                theme
                    .month_header_style
                    .format(theme.month_header_text_style),
            );

        writeln!(&mut cursor, "{} {}", display.name(), display.year()).unwrap();

        cursor.set_style_modifier(theme.weekday_header_style);
        for &head in Self::HEADER {
            write!(
                &mut cursor,
                "{:>width$}",
                &head,
                width = DayCell::CELL_WIDTH
            )
            .unwrap();
        }

        // The cursor wraps every 7 cells, so the full 42-cell sequence lays
        // itself out as the 6 grid rows without explicit positioning.
        cursor.set_style_modifier(theme.day_style);
        for cell in grid {
            match cell {
                GridCell::Empty => {
                    write!(&mut cursor, "{:width$}", "", width = DayCell::CELL_WIDTH).unwrap()
                }
                GridCell::Day { day, is_today } => {
                    let day_cell = DayCell::new(day as u8, theme)
                        .today(is_today)
                        .with_events(!self.context.agenda().events_on(day).is_empty());

                    if is_today {
                        let saved_style = cursor.get_style_modifier();
                        cursor.apply_style_modifier(
                            theme.today_day_style.format(theme.today_day_text_style),
                        );
                        write!(&mut cursor, "{}", day_cell).unwrap();
                        cursor.set_style_modifier(saved_style);
                    } else {
                        write!(&mut cursor, "{}", day_cell).unwrap();
                    }
                }
            }
        }
    }
}
