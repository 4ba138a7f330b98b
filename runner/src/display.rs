// ═══════════════════════════════════════════════════════════════════════
// Text rendering for the console — map, battles, missions, victory
// ═══════════════════════════════════════════════════════════════════════

use std::fmt::Write;

use warcad_engine::combat::{BattleOutcome, BattleReport};
use warcad_engine::types::{Player, Territory, TerritoryId};

const RULE: &str = "==============================================================";
const THIN_RULE: &str = "--------------------------------------------------------------";

pub fn banner(title: &str) -> String {
    format!("{RULE}\n{title:^62}\n{RULE}\n")
}

pub fn render_map(territories: &[Territory]) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&banner("CURRENT TERRITORY MAP"));
    for (i, t) in territories.iter().enumerate() {
        let _ = writeln!(out, "\n{}. Territory: {}", TerritoryId(i).display_number(), t.name);
        let _ = writeln!(out, "   Army color: {}", t.owner);
        let _ = writeln!(out, "   Troops: {}", t.troops);
        out.push_str(THIN_RULE);
        out.push('\n');
    }
    out
}

pub fn render_battle(report: &BattleReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\n--- BATTLE: {} attacks {} ---",
        report.attacker_name, report.defender_name
    );
    let _ = writeln!(out, "Attack die: {}", report.attack_roll);
    let _ = writeln!(out, "Defense die: {}", report.defense_roll);
    match report.outcome {
        BattleOutcome::Conquered { moved } => {
            let _ = writeln!(
                out,
                "\nATTACKER WINS! {} conquered {} and moved {} troop(s) in.",
                report.attacker_name, report.defender_name, moved
            );
        }
        BattleOutcome::Repelled { attacker_troops } => {
            let _ = writeln!(out, "\nDEFENSE HOLDS! {} repelled the attack.", report.defender_name);
            let _ = writeln!(
                out,
                "{} lost one troop and now has {}.",
                report.attacker_name, attacker_troops
            );
        }
    }
    out.push_str(THIN_RULE);
    out.push('\n');
    out
}

/// Announce assigned missions. Missions stay secret unless `reveal` is set.
pub fn render_assignment(players: &[Player], reveal: bool) -> String {
    let mut out = String::from("\n--- STRATEGIC MISSIONS ASSIGNED ---\n");
    for p in players {
        if reveal {
            let _ = writeln!(out, "Player '{}': {}", p.color, p.mission);
        } else {
            let _ = writeln!(out, "Player '{}' received a secret mission.", p.color);
        }
    }
    out.push_str("-----------------------------------\n");
    out
}

pub fn render_victory(player: &Player) -> String {
    format!(
        "\n{RULE}\n VICTORY! PLAYER '{}' ACCOMPLISHED THEIR MISSION!\n Mission: {}\n{RULE}\n",
        player.color, player.mission
    )
}
