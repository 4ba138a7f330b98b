// ═══════════════════════════════════════════════════════════════════════
// Secret missions — the fixed catalog, random assignment, and the
// win-condition checks run after every attack.
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MissionParseError, SetupError};
use crate::rng::RandomSource;
use crate::types::{Color, Player, Territory};

/// Troops a player must hold in total for `Mission::AccumulateTroops`.
pub const TROOP_GOAL: i64 = 30;
/// Territories a player must hold for `Mission::ConquerTerritories`.
pub const TERRITORY_GOAL: usize = 6;

/// Colors that elimination missions can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetColor {
    Vermelho,
    Azul,
}

impl TargetColor {
    pub fn as_str(self) -> &'static str {
        match self {
            TargetColor::Vermelho => "vermelho",
            TargetColor::Azul => "azul",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mission {
    /// Own every territory on the map.
    ConquerAll,
    /// No territory of the target color may remain.
    Eliminate(TargetColor),
    /// Hold at least TROOP_GOAL troops across own territories.
    AccumulateTroops,
    /// Hold at least TERRITORY_GOAL territories.
    ConquerTerritories,
}

/// The five missions, in catalog order.
pub const CATALOG: [Mission; 5] = [
    Mission::ConquerAll,
    Mission::Eliminate(TargetColor::Vermelho),
    Mission::Eliminate(TargetColor::Azul),
    Mission::AccumulateTroops,
    Mission::ConquerTerritories,
];

impl Mission {
    /// Text shown to the player.
    pub fn text(self) -> &'static str {
        match self {
            Mission::ConquerAll => "CONQUISTAR TODOS OS TERRITORIOS.",
            Mission::Eliminate(TargetColor::Vermelho) => "ELIMINAR TODAS AS TROPAS DA COR VERMELHO.",
            Mission::Eliminate(TargetColor::Azul) => "ELIMINAR TODAS AS TROPAS DA COR AZUL.",
            Mission::AccumulateTroops => "ACUMULAR 30 TROPAS NO TOTAL.",
            Mission::ConquerTerritories => "CONQUISTAR 6 TERRITORIOS.",
        }
    }

    /// Recognize a mission from its text. Patterns are tried in priority
    /// order: all territories, eliminate color, accumulate troops, conquer
    /// territories. Matching ignores case.
    pub fn parse(text: &str) -> Result<Mission, MissionParseError> {
        let upper = text.to_ascii_uppercase();
        if upper.contains("TODOS OS TERRITORIOS") {
            return Ok(Mission::ConquerAll);
        }
        if upper.contains("ELIMINAR TODAS AS TROPAS") {
            if upper.contains("VERMELHO") {
                return Ok(Mission::Eliminate(TargetColor::Vermelho));
            }
            if upper.contains("AZUL") {
                return Ok(Mission::Eliminate(TargetColor::Azul));
            }
            return Err(MissionParseError(text.to_string()));
        }
        if upper.contains("ACUMULAR 30 TROPAS") {
            return Ok(Mission::AccumulateTroops);
        }
        if upper.contains("CONQUISTAR 6 TERRITORIOS") {
            return Ok(Mission::ConquerTerritories);
        }
        Err(MissionParseError(text.to_string()))
    }
}

impl std::fmt::Display for Mission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

impl std::str::FromStr for Mission {
    type Err = MissionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mission::parse(s)
    }
}

/// Draw one mission per color, uniformly and with replacement. With
/// `fixed` set, every player gets that mission and no draws are made.
pub fn assign_missions(
    colors: Vec<Color>,
    fixed: Option<Mission>,
    rng: &mut dyn RandomSource,
) -> Result<Vec<Player>, SetupError> {
    let mut players = Vec::new();
    players
        .try_reserve_exact(colors.len())
        .map_err(|_| SetupError::Allocation { what: "player missions" })?;

    for color in colors {
        let mission = match fixed {
            Some(m) => m,
            None => CATALOG[rng.pick(CATALOG.len())],
        };
        debug!(color = %color, ?mission, "mission assigned");
        players.push(Player { color, mission });
    }
    Ok(players)
}

/// Whether `color` currently satisfies `mission` on this map.
pub fn is_accomplished(mission: Mission, color: &Color, territories: &[Territory]) -> bool {
    match mission {
        Mission::ConquerAll => territories.iter().all(|t| t.is_owned_by(color)),
        Mission::Eliminate(target) => {
            // Eliminating yourself is never a win.
            if color.matches(target.as_str()) {
                return false;
            }
            !territories.iter().any(|t| t.owner.matches(target.as_str()))
        }
        Mission::AccumulateTroops => troops_held(color, territories) >= TROOP_GOAL,
        Mission::ConquerTerritories => territories_held(color, territories) >= TERRITORY_GOAL,
    }
}

fn troops_held(color: &Color, territories: &[Territory]) -> i64 {
    territories
        .iter()
        .filter(|t| t.is_owned_by(color))
        .map(|t| i64::from(t.troops))
        .sum()
}

fn territories_held(color: &Color, territories: &[Territory]) -> usize {
    territories.iter().filter(|t| t.is_owned_by(color)).count()
}

/// How far a player is from completing a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionProgress {
    /// Owned territories, held troops, or remaining enemy territories,
    /// depending on the mission.
    pub current: i64,
    pub goal: i64,
    pub accomplished: bool,
}

pub fn progress(mission: Mission, color: &Color, territories: &[Territory]) -> MissionProgress {
    let (current, goal) = match mission {
        Mission::ConquerAll => (territories_held(color, territories) as i64, territories.len() as i64),
        Mission::Eliminate(target) => {
            let remaining = territories.iter().filter(|t| t.owner.matches(target.as_str())).count();
            (remaining as i64, 0)
        }
        Mission::AccumulateTroops => (troops_held(color, territories), TROOP_GOAL),
        Mission::ConquerTerritories => (territories_held(color, territories) as i64, TERRITORY_GOAL as i64),
    };
    MissionProgress {
        current,
        goal,
        accomplished: is_accomplished(mission, color, territories),
    }
}
