use iced::{Alignment, Element, Length};
use iced_widget::{button, column, progress_bar, row, slider, text, text_input, Space};
use pokerview_protocol::GameSnapshot;

use crate::messages::Msg;
use crate::view::{bet_bounds, is_sitting_out, presets, BetSelection};

/// Create a styled poker action button
fn poker_button(label: String, color: iced::Color, msg: Option<Msg>) -> iced::widget::Button<'static, Msg> {
    let enabled = msg.is_some();
    let mut btn = button(
        text(label)
            .size(16)
            .style(move |_theme| iced_widget::text::Style {
                color: Some(iced::Color::WHITE),
                ..Default::default()
            })
    )
    .padding([10, 16])
    .width(Length::Fixed(110.0))
    .style(move |_theme, status| {
        let (bg_color, border_color) = match status {
            _ if !enabled => (iced::Color::from_rgb(0.35, 0.35, 0.35), iced::Color::from_rgb(0.45, 0.45, 0.45)),
            iced_widget::button::Status::Hovered => {
                let mut hover_color = color;
                hover_color.r = (hover_color.r * 1.2).min(1.0);
                hover_color.g = (hover_color.g * 1.2).min(1.0);
                hover_color.b = (hover_color.b * 1.2).min(1.0);
                (hover_color, iced::Color::WHITE)
            }
            iced_widget::button::Status::Pressed => {
                let mut pressed_color = color;
                pressed_color.r *= 0.8;
                pressed_color.g *= 0.8;
                pressed_color.b *= 0.8;
                (pressed_color, iced::Color::from_rgb(0.8, 0.8, 0.8))
            }
            _ => (color, iced::Color::from_rgb(0.6, 0.6, 0.6))
        };

        iced_widget::button::Style {
            background: Some(iced::Background::Color(bg_color)),
            text_color: iced::Color::WHITE,
            border: iced::Border {
                color: border_color,
                width: 2.0,
                radius: iced::border::Radius::from(8.0),
            },
            shadow: iced::Shadow {
                color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                offset: iced::Vector::new(0.0, 2.0),
                blur_radius: 4.0,
            },
            ..Default::default()
        }
    });

    if let Some(message) = msg {
        btn = btn.on_press(message);
    }

    btn
}

/// Whether the viewer may act on this snapshot at all.
pub fn can_act(snapshot: Option<&GameSnapshot>) -> bool {
    snapshot.map(GameSnapshot::is_viewer_to_act).unwrap_or(false) && !is_sitting_out(snapshot)
}

/// Betting controls (buttons, slider, amount box, presets) are live only while
/// connected and on our turn.
pub fn controls_live(snapshot: Option<&GameSnapshot>, connected: bool) -> bool {
    connected && can_act(snapshot)
}

pub fn render_action_bar<'a>(
    snapshot: Option<&'a GameSnapshot>,
    bet: &'a BetSelection,
    connected: bool,
) -> Element<'a, Msg> {
    let mut bar = column![text("Actions").size(18)].spacing(8);

    let Some(s) = snapshot else {
        return bar.push(text("Waiting for the table…").size(14)).into();
    };

    let active = controls_live(snapshot, connected);
    let when = |msg: Msg| active.then_some(msg);
    let bounds = bet_bounds(s);

    if !active {
        let waiting_on = s
            .index_to_act
            .and_then(|i| s.seat(i))
            .map(|p| format!("Waiting for {}…", p.player_name))
            .unwrap_or_else(|| "Waiting for other players…".to_string());
        bar = bar.push(text(waiting_on).size(14));
    }

    bar = bar.push(
        row![
            poker_button("Fold".to_string(), iced::Color::from_rgb(0.8, 0.2, 0.2), when(Msg::Fold)), // Red for fold
            poker_button("Check".to_string(), iced::Color::from_rgb(0.2, 0.6, 0.8), when(Msg::Check)), // Blue for check
            poker_button("Call".to_string(), iced::Color::from_rgb(0.2, 0.7, 0.3), when(Msg::Call)), // Green for call
            poker_button(
                format!("Bet {}", bet.amount()),
                iced::Color::from_rgb(0.8, 0.4, 0.2), // Orange for bet
                when(Msg::Bet)
            ),
        ]
        .spacing(12),
    );

    let slider_max = u32::try_from(bounds.max.max(0)).unwrap_or(u32::MAX);
    let slider_min = u32::try_from(bounds.min.max(0)).unwrap_or(0).min(slider_max);
    let slider_value = u32::try_from(bet.amount().max(0)).unwrap_or(u32::MAX).clamp(slider_min, slider_max);

    let mut amount_box = text_input("amount", bet.text()).width(Length::Fixed(110.0)).padding(8);
    if active {
        amount_box = amount_box.on_input(Msg::BetInputChanged).on_submit(Msg::Bet);
    }

    // A slider cannot be disabled, so off-turn it becomes a read-only bar.
    let sizing: Element<'a, Msg> = if active {
        slider(slider_min..=slider_max, slider_value, Msg::BetSliderChanged)
            .width(Length::Fill)
            .into()
    } else {
        progress_bar(slider_min as f32..=slider_max as f32, slider_value as f32)
            .height(Length::Fixed(6.0))
            .into()
    };
    bar = bar.push(
        row![sizing, Space::with_width(Length::Fixed(12.0)), amount_box].align_y(Alignment::Center),
    );

    let mut preset_row = row![].spacing(8);
    for p in presets(s, bounds) {
        preset_row = preset_row.push(poker_button(
            format!("{} ({})", p.label, p.amount),
            iced::Color::from_rgb(0.3, 0.3, 0.45),
            when(Msg::PresetChosen(p.amount)),
        ));
    }
    bar = bar.push(preset_row);

    let seat_toggle = if is_sitting_out(snapshot) {
        poker_button("I'm back".to_string(), iced::Color::from_rgb(0.2, 0.7, 0.3), Some(Msg::ImBack))
    } else {
        poker_button("Sit out".to_string(), iced::Color::from_rgb(0.6, 0.4, 0.8), Some(Msg::SitOut))
    };
    bar = bar.push(
        row![
            seat_toggle,
            poker_button("Leave".to_string(), iced::Color::from_rgb(0.4, 0.4, 0.4), Some(Msg::Leave)),
        ]
        .spacing(12),
    );

    bar.into()
}
