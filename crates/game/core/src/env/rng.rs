//! RNG oracle for deterministic random number generation.
//!
//! The rules engine never owns a random source. Every roll derives a seed from
//! the session seed, the session nonce, the roller and a per-roll context, then
//! asks the injected [`RngOracle`] for a uniform integer. Replaying the same
//! session with the same oracle reproduces every roll.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::ability::DiceExpr;

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a die with N sides (1-N inclusive).
    fn roll_die(&self, seed: u64, sides: u32) -> u32 {
        self.range(seed, 1, sides)
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// Stateless: the seed is the state, so the same seed always yields the same
/// value.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }

    /// Unbiased: draws outside the largest multiple of the span are rejected
    /// and the generator steps again from the same seed.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        let zone = (1u64 << 32) - (1u64 << 32) % span;
        let mut state = Self::pcg_step(seed);
        loop {
            let draw = u64::from(Self::pcg_output(state));
            if draw < zone {
                return min + (draw % span) as u32;
            }
            state = Self::pcg_step(state);
        }
    }
}

/// Oracle replaying a fixed script of roll results, ignoring seeds.
///
/// Each call to [`range`](RngOracle::range) pops the next scripted value and
/// clamps it into `[min, max]`. An exhausted script yields `min`.
#[derive(Debug, Default)]
pub struct ScriptedRng {
    script: Mutex<VecDeque<u32>>,
}

impl ScriptedRng {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: Mutex::new(values.into_iter().collect()),
        }
    }

    /// Appends further results to the script.
    pub fn push(&self, values: impl IntoIterator<Item = u32>) {
        self.queue().extend(values);
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.queue().len()
    }

    fn queue(&self) -> std::sync::MutexGuard<'_, VecDeque<u32>> {
        self.script
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn pop(&self) -> Option<u32> {
        self.queue().pop_front()
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.pop().unwrap_or(0)
    }

    fn range(&self, _seed: u64, min: u32, max: u32) -> u32 {
        match self.pop() {
            Some(value) => value.clamp(min, max.max(min)),
            None => min,
        }
    }
}

/// Compute deterministic seed from session state components.
///
/// * `session_seed` - Base seed set when the session opened
/// * `nonce` - Resolution sequence number (increments each resolution)
/// * `actor_id` - Participant performing the roll
/// * `context` - Distinguishes multiple rolls within one resolution
pub fn compute_seed(session_seed: u64, nonce: u64, actor_id: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash style mixing.
    let mut hash = session_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor_id as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Independent rolls made during one resolution.
///
/// Every roll advances the context counter, so two rolls by the same roller in
/// the same resolution get different seeds.
#[derive(Debug)]
pub struct RollSequence<'a, R: RngOracle + ?Sized> {
    rng: &'a R,
    session_seed: u64,
    nonce: u64,
    roller: u32,
    context: u32,
}

impl<'a, R: RngOracle + ?Sized> RollSequence<'a, R> {
    pub fn new(rng: &'a R, session_seed: u64, nonce: u64, roller: u32) -> Self {
        Self {
            rng,
            session_seed,
            nonce,
            roller,
            context: 0,
        }
    }

    /// Switches to another roller, restarting the context counter.
    pub fn for_roller(&mut self, roller: u32) -> &mut Self {
        self.roller = roller;
        self.context = 0;
        self
    }

    fn next_seed(&mut self) -> u64 {
        let seed = compute_seed(self.session_seed, self.nonce, self.roller, self.context);
        self.context = self.context.wrapping_add(1);
        seed
    }

    /// Uniform integer in `[min, max]`.
    pub fn uniform(&mut self, min: u32, max: u32) -> u32 {
        let seed = self.next_seed();
        self.rng.range(seed, min, max)
    }

    /// One die with `sides` faces.
    pub fn die(&mut self, sides: u32) -> u32 {
        let seed = self.next_seed();
        self.rng.roll_die(seed, sides)
    }

    /// Sum of every die in the expression, rolled one at a time.
    pub fn dice(&mut self, expr: DiceExpr) -> u32 {
        (0..expr.count).map(|_| self.die(expr.sides)).sum()
    }
}
