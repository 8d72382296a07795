use iced::{Alignment, Element, Length};
use iced_widget::{container, row, text, Space};

use pokerview_protocol::GameSnapshot;
use crate::messages::Msg;
use crate::view::standing;

/// One line describing the table: name, hand, blinds and where the viewer ranks.
pub fn table_summary(s: &GameSnapshot) -> String {
    let mut parts = vec![
        s.name.clone().unwrap_or_else(|| "Table".to_string()),
        format!("Hand #{}", s.hand_num),
        format!("Blinds {}/{}", s.small_blind, s.big_blind),
    ];
    let rank = standing(s);
    if rank.total > 0 {
        parts.push(format!("#{} of {}", rank.position, rank.total));
    }
    if let Some(street) = s.street {
        parts.push(street.to_string());
    }
    if s.game_suspended {
        parts.push("suspended".to_string());
    }
    parts.join(" | ")
}

pub fn header_view(snapshot: Option<&GameSnapshot>, status: String) -> Element<'static, Msg> {
    let summary = snapshot
        .map(table_summary)
        .unwrap_or_else(|| "No table yet".to_string());

    let table_info = text(summary)
        .size(14)
        .style(|_theme| iced_widget::text::Style {
            color: Some(iced::Color::from_rgb(0.9, 0.9, 0.9)),
            ..Default::default()
        });

    let connection = text(status)
        .size(12)
        .style(|_theme| iced_widget::text::Style {
            color: Some(iced::Color::from_rgb(0.8, 0.8, 0.2)),
            ..Default::default()
        });

    container(
        row![
            table_info,
            Space::with_width(Length::Fill),
            connection,
        ]
        .align_y(Alignment::Center)
        .spacing(10)
    )
    .width(Length::Fill)
    .padding([8, 12])
    .style(|_theme| iced_widget::container::Style {
        background: Some(iced::Background::Color(iced::Color::from_rgba(0.1, 0.1, 0.1, 0.9))),
        border: iced::Border {
            color: iced::Color::from_rgb(0.3, 0.3, 0.3),
            width: 1.0,
            radius: iced::border::Radius::from(6.0),
        },
        ..Default::default()
    })
    .into()
}
