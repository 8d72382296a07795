use iced::alignment::{Horizontal, Vertical};
use iced::mouse;
use iced::widget::canvas::{self, Canvas, Frame, Path as CanvasPath, Stroke};
use iced::{Color, Element, Length, Pixels, Point};
use pokerview_protocol::GameSnapshot;

use super::cards::draw_card;
use super::layout::{Felt, Label, SeatLayout, TableLayout};
use super::theme::{FELT, FELT_DARK, GOLD, INK_SOFT, LIP, TEXT, TEXT_DIM};
use crate::messages::Msg;

/// Paints the table. The layout is recomputed from `bounds` on every draw, so a
/// resize is just another draw.
#[derive(Debug, Clone)]
pub struct PokerTableCanvas {
    pub snapshot: Option<GameSnapshot>,
}

impl<Message> canvas::Program<Message> for PokerTableCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        match &self.snapshot {
            Some(snapshot) => paint(&mut frame, &TableLayout::compute(snapshot, bounds.size())),
            None => {
                let layout = TableLayout::compute(&GameSnapshot::default(), bounds.size());
                paint_felt(&mut frame, &layout.felt);
                text(
                    &mut frame,
                    &Label {
                        content: "Waiting for the table…".to_string(),
                        position: layout.felt.center,
                        size: (layout.card_width * 0.4).max(12.0),
                    },
                    TEXT_DIM,
                );
            }
        }

        vec![frame.into_geometry()]
    }
}

pub fn paint(frame: &mut Frame, layout: &TableLayout) {
    paint_felt(frame, &layout.felt);

    for card in &layout.board {
        draw_card(frame, card);
    }
    if let Some(pot) = &layout.pot {
        text(frame, pot, TEXT);
    }
    if let Some(bet) = &layout.current_bet {
        text(frame, bet, GOLD);
    }

    for seat in &layout.seats {
        paint_seat(frame, seat, layout.card_width);
    }

    if let Some(button) = &layout.button {
        let disc = CanvasPath::circle(button.center, button.radius);
        frame.fill(&disc, Color::WHITE);
        frame.stroke(&disc, Stroke::default().with_width(1.0));
        text(
            frame,
            &Label { content: "D".to_string(), position: button.center, size: button.radius * 1.2 },
            Color::BLACK,
        );
    }
}

fn polygon(points: &[Point]) -> CanvasPath {
    CanvasPath::new(|b| {
        if let Some((first, rest)) = points.split_first() {
            b.move_to(*first);
            for p in rest {
                b.line_to(*p);
            }
            b.close();
        }
    })
}

fn paint_felt(frame: &mut Frame, felt: &Felt) {
    let lip = polygon(&felt.outline(felt.rail, 96));
    frame.fill(&lip, LIP);

    let cloth = polygon(&felt.outline(0.0, 96));
    frame.fill(&cloth, FELT);

    let inner = polygon(&felt.outline(-felt.rail * 0.6, 96));
    frame.stroke(&inner, Stroke::default().with_color(FELT_DARK).with_width(2.0));
}

fn paint_seat(frame: &mut Frame, seat: &SeatLayout, card_width: f32) {
    for card in &seat.cards {
        draw_card(frame, card);
    }

    let plate = CanvasPath::rectangle(seat.plate.position(), seat.plate.size());
    let fill = if seat.sitting_out {
        Color { a: 0.5, ..INK_SOFT }
    } else {
        INK_SOFT
    };
    frame.fill(&plate, fill);
    if seat.to_act {
        frame.stroke(&plate, Stroke::default().with_color(GOLD).with_width((card_width * 0.06).max(2.0)));
    } else {
        frame.stroke(&plate, Stroke::default().with_color(Color::from_rgb(0.3, 0.3, 0.3)).with_width(1.0));
    }

    let name_color = if seat.to_act { GOLD } else { TEXT };
    text(frame, &seat.name, name_color);
    text(frame, &seat.stack, if seat.sitting_out { TEXT_DIM } else { TEXT });
    if let Some(action) = &seat.last_action {
        text(frame, action, TEXT_DIM);
    }

    if let Some(wager) = &seat.wager {
        let chip = CanvasPath::circle(wager.center, wager.radius);
        frame.fill(&chip, GOLD);
        frame.stroke(&chip, Stroke::default().with_width(1.0));
        text(frame, &wager.label, TEXT);
    }
}

fn text(frame: &mut Frame, label: &Label, color: Color) {
    frame.fill_text(canvas::Text {
        content: label.content.clone(),
        position: label.position,
        size: Pixels(label.size),
        horizontal_alignment: Horizontal::Center,
        vertical_alignment: Vertical::Center,
        color,
        ..Default::default()
    });
}

pub fn felt(snapshot: Option<GameSnapshot>) -> Element<'static, Msg> {
    Canvas::new(PokerTableCanvas { snapshot })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
