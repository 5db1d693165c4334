//! Starting layouts.

use crate::state::Position;
use crate::stats::StatBonus;

/// Blueprint for a knight present when the game starts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnightSpec {
    pub color: String,
    pub position: Position,
}

impl KnightSpec {
    pub fn new(color: impl Into<String>, position: Position) -> Self {
        Self {
            color: color.into(),
            position,
        }
    }
}

/// Blueprint for an item lying on the board when the game starts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSpec {
    pub name: String,
    pub bonus: StatBonus,
    pub position: Position,
}

impl ItemSpec {
    pub fn new(name: impl Into<String>, attack: u32, defense: u32, position: Position) -> Self {
        Self {
            name: name.into(),
            bonus: StatBonus::new(attack, defense),
            position,
        }
    }
}

/// Complete starting layout: knights first, then items, each in setup order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub knights: Vec<KnightSpec>,
    pub items: Vec<ItemSpec>,
}

impl Scenario {
    pub fn new(knights: Vec<KnightSpec>, items: Vec<ItemSpec>) -> Self {
        Self { knights, items }
    }

    /// The standard layout: one knight per corner, four items in the inner ring.
    pub fn canonical() -> Self {
        Self {
            knights: vec![
                KnightSpec::new("Red", Position::new(0, 0)),
                KnightSpec::new("Blue", Position::new(7, 0)),
                KnightSpec::new("Green", Position::new(7, 7)),
                KnightSpec::new("Yellow", Position::new(0, 7)),
            ],
            items: vec![
                ItemSpec::new("Axe", 2, 0, Position::new(2, 2)),
                ItemSpec::new("Dagger", 1, 0, Position::new(2, 5)),
                ItemSpec::new("MagicStaff", 1, 1, Position::new(5, 2)),
                ItemSpec::new("Helmet", 0, 1, Position::new(5, 5)),
            ],
        }
    }
}
