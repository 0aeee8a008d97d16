//! # Dutchpay GUI Application
//!
//! Graphical front end for the bill-splitting calculator.
//! Built with Iced framework for cross-platform support (Windows, macOS, Linux, WASM).
//!
//! State is two raw text fields; everything else derives from them through
//! `split_core` on every keystroke. No async work, no stored results.

mod ui;

use iced::widget::{column, row};
use iced::{Element, Length, Theme};

use split_core::split::{calculate, SplitInput, SplitOutcome, DEFAULT_PEOPLE_COUNT};

fn main() -> iced::Result {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    iced::application(App::default, App::update, App::view)
        .title("Dutchpay")
        .theme(App::theme)
        .window_size(iced::Size::new(520.0, 340.0))
        .run()
}

/// Application state
pub struct App {
    /// Raw text in the amount field (empty renders the placeholder, as does
    /// a fresh or reset state)
    pub amount_text: String,

    /// Raw text in the people field
    pub people_text: String,

    /// Normalized input derived from the raw field text
    pub input: SplitInput,

    /// Outcome of the latest calculation
    pub outcome: Option<SplitOutcome>,

    /// Error message shown in the results panel
    pub error_message: Option<String>,

    /// Dark mode toggle
    pub dark_mode: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    AmountChanged(String),
    PeopleChanged(String),
    ResetPressed,
    ToggleDarkMode,
}

impl Default for App {
    fn default() -> Self {
        let mut app = App {
            amount_text: String::new(),
            people_text: DEFAULT_PEOPLE_COUNT.to_string(),
            input: SplitInput::default(),
            outcome: None,
            error_message: None,
            dark_mode: false,
        };
        app.recompute();
        app
    }
}

impl App {
    fn update(&mut self, message: Message) {
        match message {
            Message::AmountChanged(text) => {
                self.amount_text = text;
                self.recompute();
            }
            Message::PeopleChanged(text) => {
                self.people_text = text;
                self.recompute();
            }
            Message::ResetPressed => {
                self.amount_text.clear();
                self.people_text = DEFAULT_PEOPLE_COUNT.to_string();
                self.recompute();
            }
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        column![
            ui::toolbar::view_header(self.dark_mode),
            row![
                ui::input_panel::view_input_panel(self),
                ui::results_panel::view_results_panel(self),
            ]
            .spacing(10)
            .height(Length::Fill),
        ]
        .spacing(10)
        .padding(10)
        .into()
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Renormalize the raw field text and rerun the split.
    ///
    /// Runs synchronously on every field edit; normalized input cannot fail,
    /// so the error branch only fires for programmatic state.
    fn recompute(&mut self) {
        self.input = SplitInput::from_raw(&self.amount_text, &self.people_text);
        match calculate(&self.input) {
            Ok(outcome) => {
                self.outcome = Some(outcome);
                self.error_message = None;
            }
            Err(e) => {
                self.outcome = None;
                self.error_message = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use split_core::currency::Won;

    #[test]
    fn test_typing_recomputes_synchronously() {
        let mut app = App::default();
        app.update(Message::AmountChanged("10000".to_string()));
        app.update(Message::PeopleChanged("3".to_string()));

        let outcome = app.outcome.expect("outcome after edits");
        assert_eq!(outcome.per_person, Won(3_334));
        assert_eq!(outcome.remainder, Won(2));
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut app = App::default();
        app.update(Message::AmountChanged("10000".to_string()));
        app.update(Message::PeopleChanged("5".to_string()));
        app.update(Message::ResetPressed);

        assert_eq!(app.amount_text, "");
        assert_eq!(app.people_text, "2");
        assert_eq!(app.input, SplitInput::default());
    }

    #[test]
    fn test_invalid_text_normalizes_without_error() {
        let mut app = App::default();
        app.update(Message::AmountChanged("pizza".to_string()));
        app.update(Message::PeopleChanged("-4".to_string()));

        assert!(app.error_message.is_none());
        assert_eq!(app.input, SplitInput::new(Won(0), 1));
    }
}
