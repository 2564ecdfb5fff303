use crate::cmds::{Cmd, CmdResult};
use crate::config::Config;
use crate::events::{Dispatcher, Event};

use super::insert::InsertParser;
use super::{Context, EventWindow, Mode, MonthPane};

use unsegen::base::{GraphemeCluster, Terminal};
use unsegen::input::{EditBehavior, Key, ScrollBehavior};
use unsegen::widget::*;

const NORMAL_MODE_HINTS: &str = "q:quit  h/l:month  t:today  a:add event";

pub struct App<'a> {
    config: &'a Config,
    context: Context,
}

impl<'a> App<'a> {
    pub fn new(config: &'a Config, context: Context) -> App<'a> {
        App { config, context }
    }

    fn bottom_bar<'w>(&'w self) -> impl Widget + 'w {
        let mut layout = HLayout::new().separator(GraphemeCluster::try_from(' ').unwrap());

        layout = if let Mode::Insert = self.context.mode {
            layout.widget(self.context.input_sink().as_widget())
        } else {
            layout.widget(NORMAL_MODE_HINTS)
        };

        if let Some(msg) = self.context.last_error_message.as_deref() {
            layout = layout.widget(msg);
        }

        layout
    }

    fn as_widget<'w>(&'w self) -> impl Widget + 'w
    where
        'a: 'w,
    {
        VLayout::new()
            .widget(
                HLayout::new()
                    .separator(GraphemeCluster::try_from(' ').unwrap())
                    .widget(MonthPane::new(&self.context))
                    .widget(EventWindow::new(&self.context)),
            )
            .widget(self.bottom_bar())
    }

    fn execute(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::PrevMonth => self.context.prev_month(),
            Cmd::NextMonth => self.context.next_month(),
            Cmd::SelectToday => self.context.select_today(),
            Cmd::OpenInsert => self.context.mode = Mode::Insert,
            Cmd::Exit | Cmd::Noop => {}
        }

        Ok(cmd)
    }

    fn draw(&self, term: &mut Terminal) {
        let root = term.create_root_window();
        self.as_widget().draw(root, RenderingHints::new());
        term.present();
    }

    /// Renders the current month once, non-interactively.
    pub fn show(&mut self, mut term: Terminal) -> Result<(), Box<dyn std::error::Error>> {
        self.draw(&mut term);
        Ok(())
    }

    pub fn run(
        &mut self,
        dispatcher: Dispatcher,
        mut term: Terminal,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut run = true;

        while run {
            match dispatcher.next() {
                Err(_) => run = false,
                Ok(Event::Update) => {}
                Ok(Event::Input(input)) => {
                    if input.matches(Key::Esc) {
                        self.context.cancel_insert();
                    } else {
                        match self.context.mode {
                            Mode::Normal => {
                                if let unsegen::input::Event::Key(key) = input.event {
                                    let cmd = self
                                        .config
                                        .key_map
                                        .get(&key)
                                        .copied()
                                        .unwrap_or(Cmd::Noop);
                                    if let Cmd::Exit = self.execute(cmd)? {
                                        run = false;
                                    }
                                }
                            }
                            Mode::Insert => {
                                input
                                    .chain(
                                        EditBehavior::new(self.context.input_sink_mut())
                                            .delete_forwards_on(Key::Delete)
                                            .delete_backwards_on(Key::Backspace)
                                            .left_on(Key::Left)
                                            .right_on(Key::Right),
                                    )
                                    .chain(
                                        ScrollBehavior::new(self.context.input_sink_mut())
                                            .backwards_on(Key::Up)
                                            .forwards_on(Key::Down),
                                    )
                                    .chain(InsertParser::new(&mut self.context))
                                    .finish();
                            }
                        }
                    }
                }
            }

            self.draw(&mut term);
        }

        Ok(())
    }
}
