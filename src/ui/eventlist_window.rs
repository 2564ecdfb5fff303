use std::fmt::Write;

use unsegen::base::*;
use unsegen::widget::*;

use super::Context;

/// Lists the events visible in the displayed month, one line per event.
///
/// Events are looked up per day number, so entries captured under the same
/// day of another month appear here as well; they recur on that day in
/// every displayed month.
pub struct EventWindow<'a> {
    context: &'a Context,
}

impl<'a> EventWindow<'a> {
    pub fn new(context: &'a Context) -> Self {
        EventWindow { context }
    }
}

impl Widget for EventWindow<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(12),
            height: RowDemand::at_least(10),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = &self.context.theme;
        let display = self.context.display();
        let agenda = self.context.agenda();

        let mut cursor = Cursor::new(&mut window);

        cursor.set_style_modifier(
            theme
                .month_header_style
                .format(theme.month_header_text_style),
        );
        if let Err(err) = writeln!(&mut cursor, "Events") {
            log::warn!("Error while writing event list header: {}", err);
        }
        cursor.set_style_modifier(StyleModifier::default());

        for day in 1..=display.days() {
            for event in agenda.events_on(day) {
                if let Err(err) = write!(&mut cursor, "{:>2}  {}", day, event.title()) {
                    log::warn!("Error while writing event: {}", err);
                }
                cursor.fill_and_wrap_line();
            }
        }
    }
}
