use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::{self, Frame, Path as CanvasPath, Stroke};
use iced::{Color, Pixels, Point};

use super::layout::PlacedCard;
use super::theme::{CARD_BACK, RED_SUIT};
use crate::view::CardFace;

pub fn draw_card(frame: &mut Frame, card: &PlacedCard) {
    let b = card.bounds;
    let outline = CanvasPath::rectangle(b.position(), b.size());

    match card.face {
        CardFace::Up(c) => {
            frame.fill(&outline, Color::WHITE);
            frame.stroke(&outline, Stroke::default().with_width(1.0));

            let color = if c.is_red() { RED_SUIT } else { Color::BLACK };
            frame.fill_text(canvas::Text {
                content: c.rank_label(),
                position: Point::new(b.x + b.width / 2.0, b.y + b.height * 0.32),
                size: Pixels(b.width * 0.42),
                horizontal_alignment: Horizontal::Center,
                vertical_alignment: Vertical::Center,
                color,
                ..Default::default()
            });
            frame.fill_text(canvas::Text {
                content: c.suit_symbol().to_string(),
                position: Point::new(b.x + b.width / 2.0, b.y + b.height * 0.70),
                size: Pixels(b.width * 0.46),
                horizontal_alignment: Horizontal::Center,
                vertical_alignment: Vertical::Center,
                color,
                ..Default::default()
            });
        }
        CardFace::Down => {
            frame.fill(&outline, CARD_BACK);
            let inset = b.width * 0.12;
            let inner = CanvasPath::rectangle(
                Point::new(b.x + inset, b.y + inset),
                iced::Size::new(b.width - 2.0 * inset, b.height - 2.0 * inset),
            );
            frame.stroke(&inner, Stroke::default().with_color(Color::WHITE).with_width(1.0));
            frame.stroke(&outline, Stroke::default().with_color(Color::from_rgb(0.1, 0.1, 0.3)).with_width(1.0));
        }
    }
}
