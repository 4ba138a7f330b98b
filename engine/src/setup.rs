// ═══════════════════════════════════════════════════════════════════════
// Game setup — builds the territory registry from player input, derives
// the player directory, and hands out secret missions.
// ═══════════════════════════════════════════════════════════════════════

use tracing::info;

use crate::error::SetupError;
use crate::missions::{self, Mission};
use crate::players::{self, DEFAULT_MAX_PLAYERS};
use crate::rng::RandomSource;
use crate::types::*;

/// Smallest map a session can be played on.
pub const MIN_TERRITORIES: usize = 5;

/// One territory as typed at the console, before trimming and bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerritoryInput {
    pub name: String,
    pub color: String,
    pub troops: i32,
}

impl TerritoryInput {
    pub fn new(name: &str, color: &str, troops: i32) -> Self {
        TerritoryInput {
            name: name.to_string(),
            color: color.to_string(),
            troops,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Limit on distinct colors that become players; `None` for no limit.
    pub max_players: Option<usize>,
    /// Give every player this mission instead of drawing one.
    pub fixed_mission: Option<Mission>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            max_players: Some(DEFAULT_MAX_PLAYERS),
            fixed_mission: None,
        }
    }
}

pub fn validate_territory_count(count: i64) -> Result<usize, SetupError> {
    match usize::try_from(count) {
        Ok(n) if n >= MIN_TERRITORIES => Ok(n),
        _ => Err(SetupError::TooFewTerritories {
            count: count.max(0) as usize,
            min: MIN_TERRITORIES,
        }),
    }
}

/// Reserve room for `count` territory slots before any are read. Fails
/// instead of aborting when the memory is not available.
pub fn reserve_registry(count: usize) -> Result<Vec<TerritoryInput>, SetupError> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(count)
        .map_err(|_| SetupError::Allocation { what: "territory map" })?;
    Ok(slots)
}

/// Build the fixed-size registry. Names and colors are trimmed and cut to
/// their maximum lengths; duplicates are allowed.
pub fn build_registry(inputs: &[TerritoryInput]) -> Result<Vec<Territory>, SetupError> {
    validate_territory_count(inputs.len() as i64)?;

    let mut territories = Vec::new();
    territories
        .try_reserve_exact(inputs.len())
        .map_err(|_| SetupError::Allocation { what: "territory map" })?;

    for (i, input) in inputs.iter().enumerate() {
        let number = i + 1;
        if input.name.trim().is_empty() {
            return Err(SetupError::EmptyName { number });
        }
        if input.color.trim().is_empty() {
            return Err(SetupError::EmptyColor { number });
        }
        if input.troops < 0 {
            return Err(SetupError::NegativeTroops { number });
        }
        territories.push(Territory::new(&input.name, &input.color, input.troops));
    }
    Ok(territories)
}

/// Create a session ready for its first turn.
pub fn create_game(
    inputs: &[TerritoryInput],
    config: GameConfig,
    rng: &mut dyn RandomSource,
) -> Result<GameState, SetupError> {
    let mut state = GameState {
        phase: Phase::Setup,
        turn: 0,
        territories: build_registry(inputs)?,
        players: Vec::new(),
        winner: None,
    };

    state.phase = Phase::MissionAssignment;
    let colors = players::derive_colors(&state.territories, config.max_players);
    state.players = missions::assign_missions(colors, config.fixed_mission, rng)?;

    state.phase = Phase::Turn;
    info!(
        territories = state.territory_count(),
        players = state.players.len(),
        "game created"
    );
    Ok(state)
}
