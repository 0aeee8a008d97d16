//! Results Panel (Right)
//!
//! Shows the split outcome:
//! - People count echo
//! - Per-person share (large)
//! - Rounding difference, only when one exists
//! - Error display when the core rejects the input

use iced::widget::{column, container, row, rule, scrollable, text, Column, Space};
use iced::{Alignment, Element, Length};

use split_core::split::SplitOutcome;

use crate::{App, Message};

/// Render the results panel based on the current calculation state
pub fn view_results_panel(app: &App) -> Element<'_, Message> {
    let content: Column<'_, Message> = if let Some(ref error) = app.error_message {
        // Show error message
        column![
            text("Error").size(14),
            Space::new().height(8),
            text(error).size(12).color([0.8, 0.2, 0.2]),
        ]
    } else if let Some(ref outcome) = app.outcome {
        view_outcome(outcome)
    } else {
        column![text("Enter an amount to split").size(14).color([0.5, 0.5, 0.5])]
    };

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(1))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// Render the outcome rows
fn view_outcome(outcome: &SplitOutcome) -> Column<'_, Message> {
    let people_row = row![
        text("People").size(11).color([0.5, 0.5, 0.5]),
        Space::new().width(Length::Fill),
        text(format!("{}", outcome.people_count)).size(11),
    ]
    .align_y(Alignment::Center);

    let per_person_row = row![
        text("Per person").size(11).color([0.5, 0.5, 0.5]),
        Space::new().width(Length::Fill),
        text(outcome.per_person.to_string()).size(22),
    ]
    .align_y(Alignment::Center);

    let mut content = column![
        text("Split").size(14),
        Space::new().height(8),
        people_row,
        rule::horizontal(1),
        per_person_row,
    ]
    .spacing(6);

    if outcome.has_remainder() {
        content = content.push(
            row![
                text("Rounded up by").size(10).color([0.5, 0.5, 0.5]),
                Space::new().width(Length::Fill),
                text(format!("+{}", outcome.remainder)).size(10).color([0.5, 0.5, 0.5]),
            ]
            .align_y(Alignment::Center),
        );
    }

    content
}
