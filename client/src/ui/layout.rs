// client/src/ui/layout.rs
//! Geometry for one table frame. Everything is derived from the snapshot and the
//! surface size on each call; the canvas repaints whatever this returns.

use iced::{Point, Rectangle, Size, Vector};
use pokerview_protocol::{GameSnapshot, PlayerSeat};

use crate::view::{display_slot, seat_cards, street_contribution, CardFace};

/// Board card width as a fraction of the shorter surface side.
pub const CARD_FRACTION: f32 = 0.075;
pub const CARD_ASPECT: f32 = 1.4;
pub const BOARD_SLOTS: usize = 5;

// (x, y) as fractions of the surface. Slot 0 is the viewer, bottom centre,
// and slots run clockwise from there.
const HEADS_UP: [(f32, f32); 2] = [(0.50, 0.86), (0.50, 0.12)];

const THREE_MAX: [(f32, f32); 3] = [(0.50, 0.86), (0.14, 0.30), (0.86, 0.30)];

const FOUR_MAX: [(f32, f32); 4] = [(0.50, 0.86), (0.10, 0.48), (0.50, 0.12), (0.90, 0.48)];

const FIVE_MAX: [(f32, f32); 5] = [
    (0.50, 0.86),
    (0.12, 0.62),
    (0.30, 0.13),
    (0.70, 0.13),
    (0.88, 0.62),
];

const SIX_MAX: [(f32, f32); 6] = [
    (0.50, 0.86),
    (0.12, 0.68),
    (0.12, 0.30),
    (0.50, 0.12),
    (0.88, 0.30),
    (0.88, 0.68),
];

const SEVEN_MAX: [(f32, f32); 7] = [
    (0.50, 0.86),
    (0.16, 0.76),
    (0.08, 0.40),
    (0.32, 0.12),
    (0.68, 0.12),
    (0.92, 0.40),
    (0.84, 0.76),
];

const EIGHT_MAX: [(f32, f32); 8] = [
    (0.50, 0.86),
    (0.18, 0.79),
    (0.08, 0.46),
    (0.24, 0.15),
    (0.50, 0.12),
    (0.76, 0.15),
    (0.92, 0.46),
    (0.82, 0.79),
];

const NINE_MAX: [(f32, f32); 9] = [
    (0.50, 0.86),
    (0.20, 0.80),
    (0.07, 0.55),
    (0.15, 0.25),
    (0.37, 0.12),
    (0.63, 0.12),
    (0.85, 0.25),
    (0.93, 0.55),
    (0.80, 0.80),
];

/// The fixed anchor set used for a table of `max_players` seats.
pub fn anchor_table(max_players: usize) -> &'static [(f32, f32)] {
    match max_players {
        0..=2 => &HEADS_UP,
        3 => &THREE_MAX,
        4 => &FOUR_MAX,
        5 => &FIVE_MAX,
        6 => &SIX_MAX,
        7 => &SEVEN_MAX,
        8 => &EIGHT_MAX,
        _ => &NINE_MAX,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub content: String,
    pub position: Point,
    pub size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Felt {
    pub center: Point,
    pub radii: Vector,
    pub rail: f32,
}

impl Felt {
    /// Polygon approximating the felt ellipse, grown by `grow` on both axes.
    pub fn outline(&self, grow: f32, segments: usize) -> Vec<Point> {
        let segments = segments.max(3);
        (0..segments)
            .map(|i| {
                let t = i as f32 / segments as f32 * std::f32::consts::TAU;
                Point::new(
                    self.center.x + (self.radii.x + grow) * t.cos(),
                    self.center.y + (self.radii.y + grow) * t.sin(),
                )
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedCard {
    pub bounds: Rectangle,
    pub face: CardFace,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wager {
    pub center: Point,
    pub radius: f32,
    pub label: Label,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DealerButton {
    pub center: Point,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeatLayout {
    pub index: usize,
    pub slot: usize,
    pub anchor: Point,
    pub plate: Rectangle,
    pub name: Label,
    pub stack: Label,
    pub last_action: Option<Label>,
    pub cards: Vec<PlacedCard>,
    pub wager: Option<Wager>,
    pub is_viewer: bool,
    pub to_act: bool,
    pub sitting_out: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    pub size: Size,
    pub card_width: f32,
    pub felt: Felt,
    pub seats: Vec<SeatLayout>,
    pub button: Option<DealerButton>,
    pub board: Vec<PlacedCard>,
    pub pot: Option<Label>,
    pub current_bet: Option<Label>,
}

impl TableLayout {
    pub fn compute(snapshot: &GameSnapshot, size: Size) -> Self {
        let width = size.width.max(0.0);
        let height = size.height.max(0.0);
        let card_width = CARD_FRACTION * width.min(height);
        let center = Point::new(width * 0.5, height * 0.5);

        let felt = Felt {
            center,
            radii: Vector::new(width * 0.40, height * 0.34),
            rail: width.min(height) * 0.02,
        };

        let seats: Vec<SeatLayout> = snapshot
            .seats()
            .filter_map(|seat| place_seat(seat, snapshot, width, height, card_width, center))
            .collect();

        let button = snapshot.button_index.and_then(|b| {
            seats
                .iter()
                .find(|s| s.index == b)
                .map(|s| place_button(s.anchor, center, card_width))
        });

        let (board, board_bottom) = place_board(snapshot, center, card_width);
        let line = card_width * 0.45;
        let text_size = card_width * 0.32;

        let pot_y = board_bottom + line;
        let pot = snapshot.pots.as_ref().map(|pots| Label {
            content: pot_text(pots),
            position: Point::new(center.x, pot_y),
            size: text_size,
        });
        let current_bet = snapshot.current_bet.map(|bet| Label {
            content: format!("Bet: {bet}"),
            position: Point::new(center.x, pot_y + line),
            size: text_size,
        });

        TableLayout {
            size: Size::new(width, height),
            card_width,
            felt,
            seats,
            button,
            board,
            pot,
            current_bet,
        }
    }

    pub fn seat(&self, index: usize) -> Option<&SeatLayout> {
        self.seats.iter().find(|s| s.index == index)
    }
}

fn place_seat(
    seat: &PlayerSeat,
    snapshot: &GameSnapshot,
    width: f32,
    height: f32,
    card_width: f32,
    center: Point,
) -> Option<SeatLayout> {
    let slot = display_slot(seat.index, snapshot.your_index.unwrap_or(0), snapshot.max_players);
    let Some(&(fx, fy)) = anchor_table(snapshot.max_players).get(slot) else {
        tracing::warn!(seat = seat.index, slot, "no anchor for display slot, seat not drawn");
        return None;
    };
    let anchor = Point::new(fx * width, fy * height);
    let is_viewer = snapshot.your_index == Some(seat.index);

    let plate_size = Size::new(card_width * 2.8, card_width * 1.1);
    let plate = Rectangle::new(
        Point::new(anchor.x - plate_size.width / 2.0, anchor.y - plate_size.height / 2.0),
        plate_size,
    );

    let name = Label {
        content: seat.player_name.clone(),
        position: Point::new(anchor.x, anchor.y - plate_size.height * 0.22),
        size: card_width * 0.3,
    };
    let stack = Label {
        content: if seat.is_all_in { "All in".to_string() } else { seat.money.to_string() },
        position: Point::new(anchor.x, anchor.y + plate_size.height * 0.22),
        size: card_width * 0.28,
    };

    let action_text = if seat.is_sitting_out {
        Some("Sitting out".to_string())
    } else {
        seat.last_action.clone()
    };
    // Top-row seats would push their cards off the surface, so they flip:
    // cards under the plate, last action over it.
    let upper = anchor.y < center.y;
    let action_y = if upper {
        plate.y - card_width * 0.25
    } else {
        plate.y + plate.height + card_width * 0.25
    };
    let last_action = action_text.map(|content| Label {
        content,
        position: Point::new(anchor.x, action_y),
        size: card_width * 0.24,
    });

    let hole_width = if is_viewer { card_width } else { card_width * 0.8 };
    let surface = Size::new(width, height);
    let cards = seat_cards(seat, snapshot)
        .map(|faces| place_hole_cards(faces, &plate, upper, hole_width, card_width, surface))
        .unwrap_or_default();

    let contribution = street_contribution(seat, snapshot.street);
    let wager = (contribution > 0).then(|| {
        let chip = anchor + (center - anchor) * 0.45;
        let radius = card_width * 0.22;
        Wager {
            center: chip,
            radius,
            label: Label {
                content: contribution.to_string(),
                position: Point::new(chip.x, chip.y + radius + card_width * 0.2),
                size: card_width * 0.26,
            },
        }
    });

    Some(SeatLayout {
        index: seat.index,
        slot,
        anchor,
        plate,
        name,
        stack,
        last_action,
        cards,
        wager,
        is_viewer,
        to_act: snapshot.index_to_act == Some(seat.index),
        sitting_out: seat.is_sitting_out,
    })
}

/// Two cards side by side, centred on the plate, kept inside the surface.
fn place_hole_cards(
    faces: [CardFace; 2],
    plate: &Rectangle,
    below: bool,
    width: f32,
    card_width: f32,
    surface: Size,
) -> Vec<PlacedCard> {
    let height = width * CARD_ASPECT;
    let gap = width / 8.0;
    let row = 2.0 * width + gap;
    let centre_x = plate.x + plate.width / 2.0;

    let left = (centre_x - row / 2.0).min(surface.width - row).max(0.0);
    let top = if below {
        plate.y + plate.height + card_width * 0.1
    } else {
        plate.y - height - card_width * 0.1
    };
    let top = top.min(surface.height - height).max(0.0);

    faces
        .into_iter()
        .enumerate()
        .map(|(i, face)| PlacedCard {
            bounds: Rectangle::new(
                Point::new(left + i as f32 * (width + gap), top),
                Size::new(width, height),
            ),
            face,
        })
        .collect()
}

/// Returns the placed cards and the y of the row's bottom edge.
///
/// The row starts where a full five-card row would start, so revealing the turn
/// and river extends it to the right without shifting the flop.
fn place_board(snapshot: &GameSnapshot, center: Point, card_width: f32) -> (Vec<PlacedCard>, f32) {
    let card_height = card_width * CARD_ASPECT;
    let margin = card_width / 4.0;
    let full_row = BOARD_SLOTS as f32 * card_width + (BOARD_SLOTS - 1) as f32 * margin;
    let start_x = center.x - full_row / 2.0;
    let top = center.y - card_height * 0.75;

    let board = snapshot
        .board()
        .into_iter()
        .take(BOARD_SLOTS)
        .enumerate()
        .map(|(i, card)| PlacedCard {
            bounds: Rectangle::new(
                Point::new(start_x + i as f32 * (card_width + margin), top),
                Size::new(card_width, card_height),
            ),
            face: CardFace::Up(card),
        })
        .collect();

    (board, top + card_height)
}

fn place_button(anchor: Point, center: Point, card_width: f32) -> DealerButton {
    let toward = center - anchor;
    let len = (toward.x * toward.x + toward.y * toward.y).sqrt();
    let side = if len > f32::EPSILON {
        Vector::new(-toward.y / len, toward.x / len) * (card_width * 1.2)
    } else {
        Vector::new(0.0, 0.0)
    };
    DealerButton {
        center: anchor + toward * 0.22 + side,
        radius: card_width * 0.25,
    }
}

fn pot_text(pots: &[u32]) -> String {
    let total: u64 = pots.iter().map(|p| u64::from(*p)).sum();
    if pots.len() > 1 {
        let parts: Vec<String> = pots.iter().map(|p| p.to_string()).collect();
        format!("Pot: {total} ({})", parts.join(" + "))
    } else {
        format!("Pot: {total}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokerview_protocol::Street;

    fn seat(index: usize, money: u32) -> Option<PlayerSeat> {
        Some(PlayerSeat {
            index,
            player_name: format!("p{index}"),
            money,
            last_action: None,
            is_active: true,
            is_sitting_out: false,
            is_all_in: false,
            preflop_cont: 0,
            flop_cont: 0,
            turn_cont: 0,
            river_cont: 0,
        })
    }

    fn snapshot() -> GameSnapshot {
        let mut players = vec![None; 9];
        players[2] = seat(2, 1000);
        players[5] = seat(5, 800);
        players[7] = seat(7, 600);
        GameSnapshot {
            max_players: 9,
            small_blind: 5,
            big_blind: 10,
            players,
            street: Some(Street::Flop),
            flop: Some("AhKsTd".into()),
            pots: Some(vec![150]),
            current_bet: Some(20),
            your_index: Some(5),
            index_to_act: Some(7),
            button_index: Some(2),
            hole_cards: Some("QcQd".into()),
            ..Default::default()
        }
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn anchor_tables_cover_their_sizes() {
        for n in 2..=9 {
            assert_eq!(anchor_table(n).len(), n);
        }
        assert_eq!(anchor_table(0).len(), 2);
        assert_eq!(anchor_table(12).len(), 9);
    }

    #[test]
    fn anchor_tables_are_balanced() {
        for n in 3..=9 {
            let anchors = anchor_table(n);
            assert_eq!(anchors[0], (0.50, 0.86));
            let left = anchors.iter().filter(|(x, _)| *x < 0.5).count();
            let right = anchors.iter().filter(|(x, _)| *x > 0.5).count();
            assert_eq!(left, right, "{n}-max is lopsided");
        }
    }

    fn full_table(max_players: usize) -> GameSnapshot {
        GameSnapshot {
            max_players,
            players: (0..max_players).map(|i| seat(i, 500)).collect(),
            your_index: Some(0),
            hole_cards: Some("AhAd".into()),
            ..Default::default()
        }
    }

    #[test]
    fn hole_cards_stay_on_the_surface() {
        let sizes = [
            Size::new(1000.0, 800.0),
            Size::new(800.0, 1000.0),
            Size::new(1600.0, 500.0),
            Size::new(320.0, 240.0),
        ];
        for n in 2..=9 {
            let s = full_table(n);
            for size in sizes {
                let surface = Rectangle::new(Point::ORIGIN, size);
                let layout = TableLayout::compute(&s, size);
                assert_eq!(layout.seats.len(), n);
                for seat in &layout.seats {
                    assert_eq!(seat.cards.len(), 2);
                    for card in &seat.cards {
                        let b = card.bounds;
                        assert!(
                            b.x >= 0.0
                                && b.y >= 0.0
                                && b.x + b.width <= surface.width + 1e-3
                                && b.y + b.height <= surface.height + 1e-3,
                            "{n}-max at {size:?}: seat {} slot {} card {b:?} leaves the surface",
                            seat.index,
                            seat.slot
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn top_seats_hold_cards_under_the_plate() {
        let layout = TableLayout::compute(&full_table(9), Size::new(1000.0, 800.0));
        for index in [4, 5] {
            let top = layout.seat(index).unwrap();
            assert!(top.anchor.y < 400.0);
            assert!(top.cards.iter().all(|c| c.bounds.y >= top.plate.y + top.plate.height));
        }
        let viewer = layout.seat(0).unwrap();
        assert!(viewer.cards.iter().all(|c| c.bounds.y + c.bounds.height <= viewer.plate.y));
    }

    #[test]
    fn same_input_same_layout() {
        let s = snapshot();
        let size = Size::new(1200.0, 800.0);
        assert_eq!(TableLayout::compute(&s, size), TableLayout::compute(&s, size));
    }

    #[test]
    fn viewer_sits_bottom_centre() {
        let layout = TableLayout::compute(&snapshot(), Size::new(1000.0, 800.0));
        let viewer = layout.seat(5).unwrap();
        assert_eq!(viewer.slot, 0);
        assert!(viewer.is_viewer);
        assert!(close(viewer.anchor.x, 500.0));
        assert!(close(viewer.anchor.y, 0.86 * 800.0));
        assert_eq!(layout.seat(7).unwrap().slot, 2);
        assert_eq!(layout.seat(2).unwrap().slot, 6);
    }

    #[test]
    fn board_cards_scale_with_short_side() {
        let layout = TableLayout::compute(&snapshot(), Size::new(1000.0, 800.0));
        let w = 0.075 * 800.0;
        assert!(close(layout.card_width, w));
        assert_eq!(layout.board.len(), 3);
        for card in &layout.board {
            assert!(close(card.bounds.width, w));
            assert!(close(card.bounds.height, w * CARD_ASPECT));
        }
        let step = layout.board[1].bounds.x - layout.board[0].bounds.x;
        assert!(close(step, w + w / 4.0));
    }

    #[test]
    fn board_row_is_centred_for_five_cards() {
        let mut s = snapshot();
        let size = Size::new(1000.0, 800.0);
        let flop_only = TableLayout::compute(&s, size);

        s.turn = Some("2c".into());
        s.river = Some("9s".into());
        let full = TableLayout::compute(&s, size);
        assert_eq!(full.board.len(), 5);
        assert!(close(full.board[0].bounds.x, flop_only.board[0].bounds.x));

        let left = full.board[0].bounds.x;
        let right = full.board[4].bounds.x + full.board[4].bounds.width;
        assert!(close((left + right) / 2.0, 500.0));
    }

    #[test]
    fn pot_and_bet_sit_below_the_board() {
        let layout = TableLayout::compute(&snapshot(), Size::new(1000.0, 800.0));
        let board_bottom = layout.board[0].bounds.y + layout.board[0].bounds.height;
        let pot = layout.pot.as_ref().unwrap();
        let bet = layout.current_bet.as_ref().unwrap();
        assert_eq!(pot.content, "Pot: 150");
        assert_eq!(bet.content, "Bet: 20");
        assert!(close(pot.position.x, 500.0));
        assert!(pot.position.y > board_bottom);
        assert!(bet.position.y > pot.position.y);

        let mut s = snapshot();
        s.pots = None;
        s.current_bet = None;
        let bare = TableLayout::compute(&s, Size::new(1000.0, 800.0));
        assert!(bare.pot.is_none());
        assert!(bare.current_bet.is_none());
    }

    #[test]
    fn side_pots_are_listed() {
        assert_eq!(pot_text(&[150, 40]), "Pot: 190 (150 + 40)");
        assert_eq!(pot_text(&[]), "Pot: 0");
    }

    #[test]
    fn turn_and_button_markers() {
        let layout = TableLayout::compute(&snapshot(), Size::new(1000.0, 800.0));
        assert!(layout.seat(7).unwrap().to_act);
        assert!(!layout.seat(5).unwrap().to_act);

        let button = layout.button.unwrap();
        let anchor = layout.seat(2).unwrap().anchor;
        let dist = ((button.center.x - anchor.x).powi(2) + (button.center.y - anchor.y).powi(2)).sqrt();
        assert!(dist > 0.0);
        assert!(dist < 1000.0 * 0.5);

        let mut s = snapshot();
        s.button_index = Some(4);
        assert!(TableLayout::compute(&s, Size::new(1000.0, 800.0)).button.is_none());
    }

    #[test]
    fn hole_cards_follow_visibility() {
        let mut s = snapshot();
        s.players[7].as_mut().unwrap().last_action = Some("fold".into());
        let layout = TableLayout::compute(&s, Size::new(1000.0, 800.0));

        let viewer = layout.seat(5).unwrap();
        assert_eq!(viewer.cards.len(), 2);
        assert!(viewer.cards.iter().all(|c| c.face.is_face_up()));
        assert!(viewer.cards[0].bounds.y + viewer.cards[0].bounds.height < viewer.plate.y);

        let other = layout.seat(2).unwrap();
        assert!(other.cards.iter().all(|c| c.face == CardFace::Down));
        assert!(layout.seat(7).unwrap().cards.is_empty());
    }

    #[test]
    fn wagers_only_for_seats_with_chips_in() {
        let mut s = snapshot();
        s.players[2].as_mut().unwrap().flop_cont = 20;
        s.players[2].as_mut().unwrap().preflop_cont = 10;
        let layout = TableLayout::compute(&s, Size::new(1000.0, 800.0));
        let wager = layout.seat(2).unwrap().wager.as_ref().unwrap();
        assert_eq!(wager.label.content, "20");
        assert!(layout.seat(5).unwrap().wager.is_none());
    }

    #[test]
    fn resize_moves_everything() {
        let s = snapshot();
        let small = TableLayout::compute(&s, Size::new(600.0, 400.0));
        let large = TableLayout::compute(&s, Size::new(1200.0, 800.0));
        assert!(close(large.card_width, small.card_width * 2.0));
        let a = small.seat(7).unwrap().anchor;
        let b = large.seat(7).unwrap().anchor;
        assert!(close(b.x, a.x * 2.0));
        assert!(close(b.y, a.y * 2.0));
    }

    #[test]
    fn degenerate_surfaces_do_not_panic() {
        let s = snapshot();
        let zero = TableLayout::compute(&s, Size::new(0.0, 0.0));
        assert_eq!(zero.card_width, 0.0);
        assert_eq!(zero.seats.len(), 3);
        let negative = TableLayout::compute(&s, Size::new(-10.0, 300.0));
        assert_eq!(negative.size.width, 0.0);

        let empty = TableLayout::compute(&GameSnapshot::default(), Size::new(800.0, 600.0));
        assert!(empty.seats.is_empty());
        assert!(empty.board.is_empty());
        assert!(empty.button.is_none());
    }

    #[test]
    fn oversized_tables_skip_extra_slots() {
        let mut s = snapshot();
        s.max_players = 11;
        s.players.resize(11, None);
        s.players[10] = seat(10, 50);
        s.your_index = Some(0);
        s.players[0] = seat(0, 50);
        let layout = TableLayout::compute(&s, Size::new(1000.0, 800.0));
        assert!(layout.seat(10).is_none());
        assert!(layout.seat(0).is_some());
    }
}
