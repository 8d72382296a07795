use pokerview_protocol::{Card, GameSnapshot, PlayerSeat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    Up(Card),
    Down,
}

impl CardFace {
    pub fn is_face_up(&self) -> bool {
        matches!(self, CardFace::Up(_))
    }
}

/// Decides which hole cards a seat shows, if any.
///
/// 1. The viewer's own seat with hole cards present: both face up.
/// 2. A seat still in the hand that has not folded: two backs.
/// 3. Anyone else: nothing.
///
/// Hole cards that do not hold two whole cards count as absent.
pub fn seat_cards(seat: &PlayerSeat, snapshot: &GameSnapshot) -> Option<[CardFace; 2]> {
    if snapshot.your_index == Some(seat.index) {
        if let Some(raw) = snapshot.hole_cards.as_deref() {
            match Card::parse_run(raw).as_slice() {
                [first, second, ..] => {
                    return Some([CardFace::Up(*first), CardFace::Up(*second)]);
                }
                _ => tracing::warn!(hole_cards = raw, "hole cards are malformed, showing backs"),
            }
        }
    }

    if seat.is_active && !seat.has_folded() {
        Some([CardFace::Down, CardFace::Down])
    } else {
        None
    }
}
