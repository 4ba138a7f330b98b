// ═══════════════════════════════════════════════════════════════════════
// Runner — CLI entry point for playing a WarCad session at the console
// ═══════════════════════════════════════════════════════════════════════

mod console;
mod display;
mod session;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};

use warcad_engine::missions::Mission;
use warcad_engine::players::DEFAULT_MAX_PLAYERS;
use warcad_engine::rng::GameRng;
use warcad_engine::setup::GameConfig;

use console::Console;
use session::{SessionEnd, SessionError};

#[derive(Parser)]
#[command(name = "warcad", about = "Territory conquest with secret missions")]
struct Cli {
    /// RNG seed for dice and mission draws (default: wall clock)
    #[arg(short, long)]
    seed: Option<u64>,
    /// Distinct colors that become players; later colors are ignored
    #[arg(long, default_value_t = DEFAULT_MAX_PLAYERS)]
    max_players: usize,
    /// Let every distinct color play, however many there are
    #[arg(long, conflicts_with = "max_players")]
    no_player_cap: bool,
    /// Give every player this mission, e.g. "CONQUISTAR 6 TERRITORIOS."
    #[arg(short, long)]
    mission: Option<Mission>,
    /// Print each player's mission after assignment
    #[arg(long)]
    reveal_missions: bool,
    /// Log verbosity on stderr
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let mut rng = match cli.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_clock(),
    };
    info!(seed = rng.seed(), "rng seeded");

    let config = GameConfig {
        max_players: if cli.no_player_cap { None } else { Some(cli.max_players) },
        fixed_mission: cli.mission,
    };

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    match session::play(&mut console, config, cli.reveal_missions, &mut rng) {
        Ok(SessionEnd::Victory { winner }) => {
            info!(%winner, "victory");
            ExitCode::SUCCESS
        }
        Ok(SessionEnd::Quit) => ExitCode::SUCCESS,
        Err(SessionError::Setup(e)) => {
            error!(error = %e, "setup failed");
            let _ = console.say(&format!("Error: {e}.\n"));
            ExitCode::from(1)
        }
        Err(SessionError::Io(e)) => {
            error!(error = %e, "console failure");
            ExitCode::from(1)
        }
    }
}
