pub mod types;
pub mod error;
pub mod rng;
pub mod missions;
pub mod players;
pub mod combat;
pub mod setup;
pub mod engine;

pub use types::*;
pub use error::{AttackError, MissionParseError, SetupError};
pub use missions::{Mission, TargetColor, CATALOG};
pub use rng::{GameRng, RandomSource, ScriptedRolls};
