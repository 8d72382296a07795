use iced::{Alignment, Element, Length};
use iced_widget::{button, column, row, text, text_input};
use pokerview_protocol::{AdminKind, AdminRequest};
use thiserror::Error;

use crate::messages::Msg;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdminInputError {
    #[error("enter a whole number of chips, not {0:?}")]
    NotAnAmount(String),
    #[error("the new password is empty")]
    EmptyPassword,
}

fn amount(input: &str) -> Result<u32, AdminInputError> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| AdminInputError::NotAnAmount(input.to_string()))
}

/// Builds the request for an admin button, reading its value from the shared
/// input box where the command needs one.
pub fn admin_request(kind: AdminKind, input: &str) -> Result<AdminRequest, AdminInputError> {
    Ok(match kind {
        AdminKind::SmallBlind => AdminRequest::SmallBlind(amount(input)?),
        AdminKind::BigBlind => AdminRequest::BigBlind(amount(input)?),
        AdminKind::StartingStack => AdminRequest::StartingStack(amount(input)?),
        AdminKind::SetPassword => {
            let password = input.trim();
            if password.is_empty() {
                return Err(AdminInputError::EmptyPassword);
            }
            AdminRequest::SetPassword(password.to_string())
        }
        AdminKind::ShowPassword => AdminRequest::ShowPassword,
        AdminKind::AddBot => AdminRequest::AddBot,
        AdminKind::RemoveBot => AdminRequest::RemoveBot,
        AdminKind::Restart => AdminRequest::Restart,
    })
}

fn admin_button(label: &'static str, kind: AdminKind) -> iced::widget::Button<'static, Msg> {
    button(text(label).size(13))
        .padding([6, 10])
        .on_press(Msg::Admin(kind))
}

/// Controls for the table we created. Changes land between hands.
pub fn admin_panel<'a>(table_name: &'a str, input: &'a str) -> Element<'a, Msg> {
    column![
        text(format!("Admin: {table_name}")).size(14),
        row![
            text_input("value", input)
                .on_input(Msg::AdminInputChanged)
                .padding(6)
                .width(Length::Fixed(120.0)),
            admin_button("Small blind", AdminKind::SmallBlind),
            admin_button("Big blind", AdminKind::BigBlind),
            admin_button("Buy-in", AdminKind::StartingStack),
            admin_button("Password", AdminKind::SetPassword),
        ]
        .spacing(6)
        .align_y(Alignment::Center),
        row![
            admin_button("Show password", AdminKind::ShowPassword),
            admin_button("Add bot", AdminKind::AddBot),
            admin_button("Remove bot", AdminKind::RemoveBot),
            admin_button("Restart", AdminKind::Restart),
        ]
        .spacing(6),
    ]
    .spacing(6)
    .into()
}
