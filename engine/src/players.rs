// ═══════════════════════════════════════════════════════════════════════
// Player directory — one player per distinct color on the starting map
// ═══════════════════════════════════════════════════════════════════════

use std::collections::HashSet;
use tracing::warn;

use crate::types::{Color, Territory};

/// Default limit on distinct colors that become players.
pub const DEFAULT_MAX_PLAYERS: usize = 10;

/// Distinct owner colors in first-occurrence order. Colors past `cap` are
/// dropped; `None` keeps them all.
pub fn derive_colors(territories: &[Territory], cap: Option<usize>) -> Vec<Color> {
    let mut seen: HashSet<&Color> = HashSet::new();
    let mut colors = Vec::new();

    for t in territories {
        if seen.contains(&t.owner) {
            continue;
        }
        seen.insert(&t.owner);
        if cap.map_or(true, |max| colors.len() < max) {
            colors.push(t.owner.clone());
        } else {
            warn!(color = %t.owner, cap = ?cap, "color ignored, player limit reached");
        }
    }
    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn territories(colors: &[&str]) -> Vec<Territory> {
        colors.iter().map(|c| Territory::new("T", c, 1)).collect()
    }

    #[test]
    fn test_first_occurrence_order() {
        let map = territories(&["azul", "vermelho", "azul", "verde", "vermelho"]);
        let colors = derive_colors(&map, Some(DEFAULT_MAX_PLAYERS));
        let names: Vec<&str> = colors.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, vec!["azul", "vermelho", "verde"]);
    }

    #[test]
    fn test_case_insensitive_dedup_keeps_first_spelling() {
        let map = territories(&["Vermelho", "VERMELHO", "vermelho", "azul", "Azul"]);
        let colors = derive_colors(&map, None);
        let names: Vec<&str> = colors.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, vec!["Vermelho", "azul"]);
    }

    #[test]
    fn test_cap_drops_extra_colors() {
        let names: Vec<String> = (0..12).map(|i| format!("c{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let map = territories(&refs);

        let capped = derive_colors(&map, Some(DEFAULT_MAX_PLAYERS));
        assert_eq!(capped.len(), 10);
        assert_eq!(capped[9].as_str(), "c9");

        let uncapped = derive_colors(&map, None);
        assert_eq!(uncapped.len(), 12);
    }
}
