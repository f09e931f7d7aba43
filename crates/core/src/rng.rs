use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::VecDeque;

pub const DIE_FACES: u8 = 6;

/// Source of die rolls. Every call must return a value in `1..=6`.
pub trait DiceRoller {
    fn roll_die(&mut self) -> u8;
}

#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }

    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }
}

impl DiceRoller for RngState {
    fn roll_die(&mut self) -> u8 {
        self.rng.gen_range(1..=DIE_FACES)
    }
}

/// Replays a fixed sequence of faces, cycling once it runs out.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    script: Vec<u8>,
    queue: VecDeque<u8>,
}

impl ScriptedDice {
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        let script: Vec<u8> = faces
            .into_iter()
            .map(|face| face.clamp(1, DIE_FACES))
            .collect();
        Self {
            queue: script.iter().copied().collect(),
            script,
        }
    }

    pub fn push(&mut self, face: u8) {
        self.queue.push_back(face.clamp(1, DIE_FACES));
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl DiceRoller for ScriptedDice {
    fn roll_die(&mut self) -> u8 {
        if self.queue.is_empty() {
            if self.script.is_empty() {
                return 1;
            }
            self.queue.extend(self.script.iter().copied());
        }
        self.queue.pop_front().unwrap_or(1)
    }
}
