// ═══════════════════════════════════════════════════════════════════════
// Core types — territories, colors, players and session state
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::missions::Mission;

/// Longest territory name kept.
pub const MAX_NAME_LEN: usize = 29;
/// Longest army color kept.
pub const MAX_COLOR_LEN: usize = 9;

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

// ── Color ──────────────────────────────────────────────────────────────

/// Army color. Keeps the spelling the player typed, but equality and
/// hashing ignore ASCII case: "Vermelho" == "VERMELHO".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(raw: &str) -> Self {
        Color(truncate_chars(raw.trim(), MAX_COLOR_LEN))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.0.bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Territory ID ───────────────────────────────────────────────────────
// 0-based index into the registry. Players see 1-based numbers.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct TerritoryId(pub usize);

impl TerritoryId {
    /// Convert a 1-based number as typed at the console. Zero and negative
    /// numbers have no territory.
    pub fn from_display(number: i64) -> Option<TerritoryId> {
        if number < 1 {
            return None;
        }
        usize::try_from(number - 1).ok().map(TerritoryId)
    }

    pub fn display_number(self) -> usize {
        self.0 + 1
    }
}

// ── Territory ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Territory {
    pub name: String,
    pub owner: Color,
    /// Never below zero.
    pub troops: i32,
}

impl Territory {
    pub fn new(name: &str, owner: &str, troops: i32) -> Self {
        Territory {
            name: truncate_chars(name.trim(), MAX_NAME_LEN),
            owner: Color::new(owner),
            troops,
        }
    }

    pub fn is_owned_by(&self, color: &Color) -> bool {
        self.owner == *color
    }
}

// ── Player ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub color: Color,
    pub mission: Mission,
}

// ── Phase ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Setup,
    MissionAssignment,
    Turn,
    Victory,
    Quit,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Victory | Phase::Quit)
    }
}

// ── Game State ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: Phase,
    /// Attacks resolved so far.
    pub turn: u32,
    /// Territory registry, fixed size for the whole session.
    pub territories: Vec<Territory>,
    /// Player directory in first-occurrence order of colors. Never
    /// recomputed after setup, even when a color is wiped off the map.
    pub players: Vec<Player>,
    pub winner: Option<Color>,
}

impl GameState {
    pub fn territory_count(&self) -> usize {
        self.territories.len()
    }

    /// Territories currently held by `color`.
    pub fn owned_by<'a>(&'a self, color: &'a Color) -> impl Iterator<Item = &'a Territory> + 'a {
        self.territories.iter().filter(move |t| t.is_owned_by(color))
    }

    pub fn player(&self, color: &Color) -> Option<&Player> {
        self.players.iter().find(|p| p.color == *color)
    }

    /// Compact JSON dump for debug logging.
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("<unserializable: {e}>"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_color_case_insensitive() {
        assert_eq!(Color::new("Vermelho"), Color::new("VERMELHO"));
        assert_ne!(Color::new("azul"), Color::new("verde"));
        let set: HashSet<Color> = ["azul", "AZUL", "Azul"].into_iter().map(Color::new).collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_color_keeps_spelling_and_bound() {
        let c = Color::new("  Amarelo\n");
        assert_eq!(c.as_str(), "Amarelo");
        assert_eq!(Color::new("verde-escuro-claro").as_str().len(), MAX_COLOR_LEN);
    }

    #[test]
    fn test_territory_name_bound() {
        let long = "x".repeat(40);
        let t = Territory::new(&long, "azul", 3);
        assert_eq!(t.name.chars().count(), MAX_NAME_LEN);
    }

    #[test]
    fn test_territory_id_display_conversion() {
        assert_eq!(TerritoryId::from_display(1), Some(TerritoryId(0)));
        assert_eq!(TerritoryId::from_display(0), None);
        assert_eq!(TerritoryId::from_display(-3), None);
        assert_eq!(TerritoryId(4).display_number(), 5);
    }
}
