// client/src/view/mod.rs
//! Pure derivations from one `GameSnapshot`. Nothing here keeps state between
//! snapshots except `BetSelection`, which the app owns.
pub mod bet;
pub mod leaderboard;
pub mod seats;
pub mod street;
pub mod visibility;

pub use bet::{bet_bounds, clamp, is_sitting_out, presets, BetBounds, BetSelection, Preset};
pub use leaderboard::{standing, Standing};
pub use seats::display_slot;
pub use street::street_contribution;
pub use visibility::{seat_cards, CardFace};
