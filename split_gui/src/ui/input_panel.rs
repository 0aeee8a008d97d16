//! Input Panel (Left)
//!
//! Total amount and people count fields, with the Reset action at the bottom.
//! Fields hold raw text; normalization happens in split_core on every edit.

use iced::widget::{button, column, container, row, scrollable, text, text_input, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::{App, Message};

/// Render the input panel
pub fn view_input_panel(app: &App) -> Element<'_, Message> {
    let panel = column![
        text("Bill").size(14),
        Space::new().height(8),
        labeled_input(
            "Total amount:",
            "Enter total amount",
            &app.amount_text,
            Message::AmountChanged,
        ),
        labeled_input(
            "People:",
            "Enter number of people",
            &app.people_text,
            Message::PeopleChanged,
        ),
        Space::new().height(4),
        text("Shares update as you type.").size(11).color([0.5, 0.5, 0.5]),
        Space::new().height(15),
        row![
            button(text("Reset").size(11))
                .on_press(Message::ResetPressed)
                .padding(Padding::from([6, 12]))
                .style(button::secondary),
        ]
        .spacing(6),
    ]
    .spacing(6);

    container(scrollable(panel.padding(8)))
        .width(Length::FillPortion(1))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// Helper to create a labeled text input
fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(90.0)),
        text_input(placeholder, value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
