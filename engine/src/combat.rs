// ═══════════════════════════════════════════════════════════════════════
// Combat — one die each for attacker and defender.
//
//   attack > defense  → defender switches color, receives half the
//                       attacker's troops (at least 1)
//   attack <= defense → attacker loses one troop, defender untouched
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AttackError;
use crate::rng::RandomSource;
use crate::types::{Territory, TerritoryId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    Conquered { moved: i32 },
    Repelled { attacker_troops: i32 },
}

/// What happened in one attack, for narration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    pub attacker: TerritoryId,
    pub defender: TerritoryId,
    pub attacker_name: String,
    pub defender_name: String,
    pub attack_roll: u8,
    pub defense_roll: u8,
    pub outcome: BattleOutcome,
}

impl BattleReport {
    pub fn attacker_won(&self) -> bool {
        matches!(self.outcome, BattleOutcome::Conquered { .. })
    }
}

/// Check an attack given as 1-based territory numbers. Rules are checked in
/// order: range, self-attack, same color, troop count.
pub fn validate_attack(
    territories: &[Territory],
    from: i64,
    to: i64,
) -> Result<(TerritoryId, TerritoryId), AttackError> {
    let count = territories.len();
    let lookup = |number: i64| {
        TerritoryId::from_display(number)
            .filter(|id| id.0 < count)
            .ok_or(AttackError::OutOfRange { number, count })
    };
    let attacker = lookup(from)?;
    let defender = lookup(to)?;

    if attacker == defender {
        return Err(AttackError::SelfAttack);
    }
    let a = &territories[attacker.0];
    let d = &territories[defender.0];
    if a.owner == d.owner {
        return Err(AttackError::SameColor);
    }
    if a.troops <= 1 {
        return Err(AttackError::InsufficientTroops { troops: a.troops });
    }
    Ok((attacker, defender))
}

/// Roll and apply one attack. Both ids must be valid and already checked
/// by `validate_attack`.
pub fn resolve_attack(
    territories: &mut [Territory],
    attacker: TerritoryId,
    defender: TerritoryId,
    rng: &mut dyn RandomSource,
) -> BattleReport {
    let attack_roll = rng.roll_die();
    let defense_roll = rng.roll_die();
    debug!(attack_roll, defense_roll, "dice rolled");

    let attacker_name = territories[attacker.0].name.clone();
    let defender_name = territories[defender.0].name.clone();

    let outcome = if attack_roll > defense_roll {
        let owner = territories[attacker.0].owner.clone();
        let moved = (territories[attacker.0].troops / 2).max(1);

        let d = &mut territories[defender.0];
        d.owner = owner;
        d.troops = moved;
        territories[attacker.0].troops -= moved;
        BattleOutcome::Conquered { moved }
    } else {
        let a = &mut territories[attacker.0];
        // Attacks need more than one troop, so a loss never goes below 1.
        debug_assert!(a.troops >= 1, "attacker had {} troops", a.troops);
        a.troops = (a.troops - 1).max(0);
        BattleOutcome::Repelled { attacker_troops: a.troops }
    };

    BattleReport {
        attacker,
        defender,
        attacker_name,
        defender_name,
        attack_roll,
        defense_roll,
        outcome,
    }
}
