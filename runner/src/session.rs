// ═══════════════════════════════════════════════════════════════════════
// Session — drives one game from setup to victory or quit
// ═══════════════════════════════════════════════════════════════════════

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::info;

use warcad_engine::engine::{apply_command, Command, TurnOutcome};
use warcad_engine::error::SetupError;
use warcad_engine::rng::RandomSource;
use warcad_engine::setup::{create_game, reserve_registry, GameConfig};
use warcad_engine::types::Phase;

use crate::console::{Console, MenuChoice};
use crate::display;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error("console error: {0}")]
    Io(#[from] io::Error),
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    Victory { winner: String },
    Quit,
}

pub fn play<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: GameConfig,
    reveal_missions: bool,
    rng: &mut dyn RandomSource,
) -> Result<SessionEnd, SessionError> {
    console.say(&display::banner("INITIAL SETUP - WARCAD"))?;
    console.say("\n")?;
    let Some(count) = console.read_territory_count()? else {
        return Ok(SessionEnd::Quit);
    };

    let slots = reserve_registry(count)?;

    console.say("\n")?;
    console.say(&display::banner("TERRITORY REGISTRATION - WARCAD"))?;
    console.say("\n")?;
    let Some(inputs) = console.read_territories(count, slots)? else {
        return Ok(SessionEnd::Quit);
    };

    let mut state = create_game(&inputs, config, rng)?;
    console.say(&display::render_assignment(&state.players, reveal_missions))?;

    while state.phase == Phase::Turn {
        console.say(&display::render_map(&state.territories))?;

        let command = match console.read_menu_choice()? {
            Some(MenuChoice::Attack) => match console.read_attack(state.territory_count())? {
                Some((from, to)) => Command::Attack { from, to },
                None => Command::Quit,
            },
            Some(MenuChoice::Quit) | None => Command::Quit,
        };

        match apply_command(&mut state, command, rng) {
            Ok(TurnOutcome::Continue { battle }) => {
                console.say(&display::render_battle(&battle))?;
            }
            Ok(TurnOutcome::Victory { battle, winner, .. }) => {
                console.say(&display::render_battle(&battle))?;
                console.say(&display::render_map(&state.territories))?;
                if let Some(player) = state.player(&winner) {
                    console.say(&display::render_victory(player))?;
                }
                info!(winner = %winner, turns = state.turn, "session finished");
                console.say("\nGame over. See you next time!\n")?;
                return Ok(SessionEnd::Victory { winner: winner.to_string() });
            }
            Ok(TurnOutcome::Quit) => break,
            Err(e) => console.say(&format!("\nERROR: {e}.\n"))?,
        }
    }

    console.say("\nGame over. See you next time!\n")?;
    Ok(SessionEnd::Quit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use warcad_engine::missions::{Mission, TargetColor};
    use warcad_engine::rng::ScriptedRolls;

    const MAP: &str = "5\n\
        Brasil\nvermelho\n8\n\
        Argentina\nvermelho\n4\n\
        Chile\nvermelho\n3\n\
        Peru\nazul\n2\n\
        Bolivia\nazul\n6\n";

    fn run(input: &str, mission: Mission, dice: &[u8]) -> (SessionEnd, String) {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let config = GameConfig { fixed_mission: Some(mission), ..GameConfig::default() };
        let mut rng = ScriptedRolls::new(dice.iter().copied());
        let end = play(&mut console, config, false, &mut rng).unwrap();
        (end, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn test_session_to_victory() {
        let input = format!("{MAP}1\n1\n4\n1\n2\n5\n");
        let (end, out) = run(&input, Mission::Eliminate(TargetColor::Azul), &[6, 1, 5, 2]);
        assert_eq!(end, SessionEnd::Victory { winner: "vermelho".into() });
        assert!(out.contains("Brasil conquered Peru"));
        assert!(out.contains("VICTORY! PLAYER 'vermelho'"));
        assert!(out.contains("ELIMINAR TODAS AS TROPAS DA COR AZUL."));
    }

    #[test]
    fn test_rejected_attack_then_quit() {
        let input = format!("{MAP}1\n1\n2\n0\n");
        let (end, out) = run(&input, Mission::ConquerAll, &[]);
        assert_eq!(end, SessionEnd::Quit);
        assert!(out.contains("ERROR: cannot attack a territory of your own color."));
        assert!(out.contains("Game over"));
    }

    #[test]
    fn test_unallocatable_map_is_setup_error() {
        let mut console = Console::new(Cursor::new(b"1000000000000000000\n".to_vec()), Vec::new());
        let mut rng = ScriptedRolls::default();
        let result = play(&mut console, GameConfig::default(), false, &mut rng);
        assert!(matches!(
            result,
            Err(SessionError::Setup(SetupError::Allocation { .. }))
        ));
    }

    #[test]
    fn test_end_of_input_quits() {
        let (end, _) = run("5\nBrasil\n", Mission::ConquerAll, &[]);
        assert_eq!(end, SessionEnd::Quit);

        let input = format!("{MAP}1\n3\n");
        let (end, out) = run(&input, Mission::ConquerAll, &[]);
        assert_eq!(end, SessionEnd::Quit);
        assert!(!out.contains("BATTLE"));
    }
}
