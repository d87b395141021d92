//! Elemental advantage relation.
//!
//! Fire beats Air, Water beats Fire, Earth beats Water, Air beats Earth.

use crate::game_state::checkers_types::Element;

/// `+1` when the attacker beats the defender, `-1` when the defender beats
/// the attacker, `0` otherwise.
#[inline]
pub fn advantage(attacker: Element, defender: Element) -> i8 {
    if attacker == defender {
        0
    } else if attacker.beats() == defender {
        1
    } else if defender.beats() == attacker {
        -1
    } else {
        0
    }
}

/// Whether an attacker of `attacker` may try to jump a `defender`.
#[inline]
pub fn may_capture(attacker: Element, defender: Element) -> bool {
    advantage(attacker, defender) >= 0
}
