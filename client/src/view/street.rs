use pokerview_protocol::{PlayerSeat, Street};

fn preflop(p: &PlayerSeat) -> u32 {
    p.preflop_cont
}

fn flop(p: &PlayerSeat) -> u32 {
    p.flop_cont
}

fn turn(p: &PlayerSeat) -> u32 {
    p.turn_cont
}

fn river(p: &PlayerSeat) -> u32 {
    p.river_cont
}

/// Street -> contribution field. Streets missing from the table contribute 0.
const CONTRIBUTIONS: [(Street, fn(&PlayerSeat) -> u32); 4] = [
    (Street::Preflop, preflop),
    (Street::Flop, flop),
    (Street::Turn, turn),
    (Street::River, river),
];

/// Chips this seat has put in during `street` only.
pub fn street_contribution(seat: &PlayerSeat, street: Option<Street>) -> u32 {
    street
        .and_then(|s| CONTRIBUTIONS.iter().find(|(k, _)| *k == s))
        .map(|(_, field)| field(seat))
        .unwrap_or(0)
}
