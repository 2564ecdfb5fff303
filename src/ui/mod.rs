pub mod app;
pub mod calendar_window;
pub mod context;
pub mod eventlist_window;
pub mod insert;

pub use calendar_window::MonthPane;
pub use context::{Context, Mode, Theme};
pub use eventlist_window::EventWindow;
