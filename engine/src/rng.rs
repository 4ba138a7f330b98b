// ═══════════════════════════════════════════════════════════════════════
// Randomness — dice rolls and mission draws go through RandomSource so a
// session can be replayed from a seed and tests can script the dice.
// ═══════════════════════════════════════════════════════════════════════

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

pub trait RandomSource {
    /// Uniform integer in 1..=6.
    fn roll_die(&mut self) -> u8;

    /// Uniform index in 0..len. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Seeded ChaCha8 generator, one per session.
#[derive(Debug, Clone)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        GameRng {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the wall clock, so every unseeded session plays differently.
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        GameRng::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Replays a fixed list of die values and picks. Once a queue runs dry it
/// answers 1 for dice and 0 for picks.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    dice: VecDeque<u8>,
    picks: VecDeque<usize>,
}

impl ScriptedRolls {
    pub fn new(dice: impl IntoIterator<Item = u8>) -> Self {
        ScriptedRolls {
            dice: dice.into_iter().collect(),
            picks: VecDeque::new(),
        }
    }

    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }

    pub fn remaining_dice(&self) -> usize {
        self.dice.len()
    }
}

impl RandomSource for ScriptedRolls {
    fn roll_die(&mut self) -> u8 {
        self.dice.pop_front().unwrap_or(1)
    }

    fn pick(&mut self, len: usize) -> usize {
        let idx = self.picks.pop_front().unwrap_or(0);
        if len == 0 { 0 } else { idx % len }
    }
}
