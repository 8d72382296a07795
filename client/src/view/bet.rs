use pokerview_protocol::GameSnapshot;

use super::street::street_contribution;

/// Legal range for the viewer's bet this render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetBounds {
    pub min: i64,
    pub max: i64,
}

impl BetBounds {
    pub fn clamp(&self, selected: i64) -> i64 {
        clamp(selected, self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub label: &'static str,
    pub amount: i64,
}

/// `min` is always 0. `max` is the viewer's stack plus what they already put in
/// this street, so a call-then-reraise fits in one number.
pub fn bet_bounds(snapshot: &GameSnapshot) -> BetBounds {
    let max = snapshot
        .viewer()
        .map(|v| i64::from(v.money) + i64::from(street_contribution(v, snapshot.street)))
        .unwrap_or(0);
    BetBounds { min: 0, max }
}

/// Pulls `selected` back inside `[min, max]`. `min` wins if the range is empty.
pub fn clamp<T: Ord>(selected: T, min: T, max: T) -> T {
    if selected > max {
        return if max < min { min } else { max };
    }
    if selected < min {
        return min;
    }
    selected
}

/// Min, two sizing shortcuts, Max.
///
/// Until the pot grows past the blinds the shortcuts are 2x and 3x the big
/// blind; after that they are half pot and pot.
pub fn presets(snapshot: &GameSnapshot, bounds: BetBounds) -> [Preset; 4] {
    let pot = i64::try_from(snapshot.pot_total()).unwrap_or(i64::MAX);
    let blinds = i64::from(snapshot.small_blind) + i64::from(snapshot.big_blind);
    let big_blind = i64::from(snapshot.big_blind);

    let (second, third) = if pot <= blinds {
        (
            Preset { label: "2x", amount: 2 * big_blind },
            Preset { label: "3x", amount: 3 * big_blind },
        )
    } else {
        (
            Preset { label: "0.5", amount: pot / 2 },
            Preset { label: "Pot", amount: pot },
        )
    };

    [
        Preset { label: "Min", amount: bounds.min },
        second,
        third,
        Preset { label: "Max", amount: bounds.max },
    ]
}

/// No snapshot yet means we cannot act, so treat it as sitting out.
pub fn is_sitting_out(snapshot: Option<&GameSnapshot>) -> bool {
    match snapshot {
        None => true,
        Some(s) => s.viewer().map(|v| v.is_sitting_out).unwrap_or(false),
    }
}

/// The caller-held bet amount shared by the slider, the number box and the
/// preset buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BetSelection {
    amount: i64,
    text: String,
}

impl Default for BetSelection {
    fn default() -> Self {
        Self { amount: 0, text: "0".to_string() }
    }
}

impl BetSelection {
    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_and_clamp(&mut self, value: i64, bounds: BetBounds) {
        self.amount = bounds.clamp(value);
        self.text = self.amount.to_string();
    }

    /// Keeps what was typed. The amount only follows when the text is a number.
    pub fn input_text(&mut self, text: String, bounds: BetBounds) {
        if let Ok(value) = text.trim().parse::<i64>() {
            self.amount = bounds.clamp(value);
        }
        self.text = text;
    }

    /// Re-clamps against freshly derived bounds.
    pub fn rebound(&mut self, bounds: BetBounds) {
        let amount = self.amount;
        self.set_and_clamp(amount, bounds);
    }
}
