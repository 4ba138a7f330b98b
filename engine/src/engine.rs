// ═══════════════════════════════════════════════════════════════════════
// Game Engine — turn loop and victory checks
//
// The engine never does I/O. The runner reads a command from the console,
// passes it to `apply_command()`, and renders the returned outcome.
//
//   Setup → MissionAssignment → Turn (repeat) → Victory | Quit
//
// After every resolved attack all players are checked in directory order;
// the first one whose mission holds wins.
// ═══════════════════════════════════════════════════════════════════════

use tracing::{debug, info, warn};

use crate::combat::{self, BattleReport};
use crate::error::AttackError;
use crate::missions::{self, Mission};
use crate::rng::RandomSource;
use crate::types::*;

/// Commands a player can issue during the turn phase. Territory numbers
/// are 1-based, as shown on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Attack { from: i64, to: i64 },
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// Attack resolved, nobody has won yet.
    Continue { battle: BattleReport },
    Victory {
        battle: BattleReport,
        winner: Color,
        mission: Mission,
    },
    Quit,
}

/// First player, in directory order, whose mission currently holds.
pub fn check_victory(state: &GameState) -> Option<&Player> {
    state.players.iter().find(|p| {
        let progress = missions::progress(p.mission, &p.color, &state.territories);
        debug!(
            color = %p.color,
            mission = ?p.mission,
            current = progress.current,
            goal = progress.goal,
            "mission progress"
        );
        progress.accomplished
    })
}

/// Apply one command. Rejected attacks leave the state untouched.
pub fn apply_command(
    state: &mut GameState,
    command: Command,
    rng: &mut dyn RandomSource,
) -> Result<TurnOutcome, AttackError> {
    if state.phase != Phase::Turn {
        return Err(AttackError::GameOver);
    }

    match command {
        Command::Quit => {
            info!(turn = state.turn, "player quit");
            state.phase = Phase::Quit;
            Ok(TurnOutcome::Quit)
        }
        Command::Attack { from, to } => {
            let (attacker, defender) = combat::validate_attack(&state.territories, from, to)
                .map_err(|e| {
                    warn!(from, to, error = %e, "attack rejected");
                    e
                })?;

            let battle = combat::resolve_attack(&mut state.territories, attacker, defender, rng);
            state.turn += 1;
            if battle.attacker_won() {
                info!(
                    turn = state.turn,
                    attacker = %battle.attacker_name,
                    defender = %battle.defender_name,
                    "territory conquered"
                );
            }

            let winner = check_victory(state).map(|p| (p.color.clone(), p.mission));
            match winner {
                Some((winner, mission)) => {
                    info!(turn = state.turn, winner = %winner, %mission, "mission accomplished");
                    debug!(state = %state.snapshot_json(), "final state");
                    state.phase = Phase::Victory;
                    state.winner = Some(winner.clone());
                    Ok(TurnOutcome::Victory { battle, winner, mission })
                }
                None => Ok(TurnOutcome::Continue { battle }),
            }
        }
    }
}
