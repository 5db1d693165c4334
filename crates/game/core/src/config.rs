use crate::action::PickupPolicy;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Ranking used when a knight steps onto a cell holding several items.
    pub pickup_priority: PickupPolicy,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Side length of the square board. Fixed; the board is always 8×8.
    pub const BOARD_SIZE: usize = 8;
    pub const MAX_KNIGHTS: usize = 8;
    /// Upper bound on items in play, and therefore on items lying on one cell.
    pub const MAX_ITEMS: usize = 8;

    // ===== rule constants =====
    pub const BASE_ATTACK: u32 = 1;
    pub const BASE_DEFENSE: u32 = 1;
    /// Added to the attacker's total attack before comparing against defense.
    pub const TIE_BREAK: f64 = 0.5;

    pub fn new() -> Self {
        Self {
            pickup_priority: PickupPolicy::canonical(),
        }
    }

    pub fn with_pickup_priority(pickup_priority: PickupPolicy) -> Self {
        Self { pickup_priority }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
