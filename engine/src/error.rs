// ═══════════════════════════════════════════════════════════════════════
// Error types for setup, attacks and mission text
// ═══════════════════════════════════════════════════════════════════════

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("the map needs at least {min} territories, got {count}")]
    TooFewTerritories { count: usize, min: usize },
    #[error("territory {number} has a negative troop count")]
    NegativeTroops { number: usize },
    #[error("territory {number} has an empty name")]
    EmptyName { number: usize },
    #[error("territory {number} has an empty color")]
    EmptyColor { number: usize },
    #[error("failed to allocate memory for {what}")]
    Allocation { what: &'static str },
}

/// Reasons an attack is rejected before any dice are rolled.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttackError {
    #[error("territory number {number} is out of range (1 to {count})")]
    OutOfRange { number: i64, count: usize },
    #[error("a territory cannot attack itself")]
    SelfAttack,
    #[error("cannot attack a territory of your own color")]
    SameColor,
    #[error("need more than 1 troop to attack, territory has {troops}")]
    InsufficientTroops { troops: i32 },
    #[error("the game is already over")]
    GameOver,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown mission: {0:?}")]
pub struct MissionParseError(pub String);
