/// Semantic click action IDs and player intents for the power plant.

use super::catalog::GeneratorKind;

// Action ID ranges:
//   0-99:    generator purchases (index into GeneratorKind::all())
//   100-199: prestige prompt

pub const BUY_GENERATOR_BASE: u16 = 0;
pub const REQUEST_PRESTIGE: u16 = 100;
pub const CONFIRM_PRESTIGE: u16 = 101;
pub const CANCEL_PRESTIGE: u16 = 102;

/// Something the player asked for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intent {
    BuyGenerator(GeneratorKind),
    RequestPrestige,
    ConfirmPrestige,
    CancelPrestige,
}

impl Intent {
    /// Map a keyboard key to an intent.
    pub fn from_key(key: char) -> Option<Intent> {
        match key {
            'p' | 'P' => Some(Intent::RequestPrestige),
            'y' | 'Y' => Some(Intent::ConfirmPrestige),
            'n' | 'N' => Some(Intent::CancelPrestige),
            _ => GeneratorKind::from_key(key).map(Intent::BuyGenerator),
        }
    }

    /// Map a click action ID to an intent.
    pub fn from_action(id: u16) -> Option<Intent> {
        match id {
            REQUEST_PRESTIGE => Some(Intent::RequestPrestige),
            CONFIRM_PRESTIGE => Some(Intent::ConfirmPrestige),
            CANCEL_PRESTIGE => Some(Intent::CancelPrestige),
            id if id < REQUEST_PRESTIGE => GeneratorKind::all()
                .get((id - BUY_GENERATOR_BASE) as usize)
                .copied()
                .map(Intent::BuyGenerator),
            _ => None,
        }
    }
}

/// Click action that buys `kind`.
pub fn buy_action(kind: GeneratorKind) -> u16 {
    BUY_GENERATOR_BASE + kind.index() as u16
}
