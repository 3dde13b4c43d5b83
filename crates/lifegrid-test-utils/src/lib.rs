//! Test utilities and fixtures for lifegrid development.
//!
//! Provides ASCII-art matrix fixtures ([`matrix_from_ascii`],
//! [`matrix_to_ascii`]) and mock random sources ([`FixedDrawRng`],
//! [`UnusedRng`]) for driving stochastic rules down a chosen branch.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;

pub use fixtures::{matrix_from_ascii, matrix_to_ascii};

use rand::RngCore;

/// Random source whose every `f64` draw is the same value.
///
/// `rand` maps a `u64` to `[0, 1)` by keeping its top 53 bits, so
/// [`from_draw`](FixedDrawRng::from_draw) stores the draw in those bits.
/// Counts `next_u64` calls so tests can check how many draws a rule made.
#[derive(Clone, Debug)]
pub struct FixedDrawRng {
    word: u64,
    draws: usize,
}

impl FixedDrawRng {
    /// Every draw is `0.0`: below any non-zero probability.
    pub fn lowest() -> Self {
        Self { word: 0, draws: 0 }
    }

    /// Every draw is the largest `f64` below `1.0`: above any probability
    /// short of `1.0`.
    pub fn highest() -> Self {
        Self {
            word: u64::MAX,
            draws: 0,
        }
    }

    /// Every draw is `draw` (rounded down to 53 bits). `draw` must be in `[0, 1)`.
    pub fn from_draw(draw: f64) -> Self {
        assert!((0.0..1.0).contains(&draw), "draw must be in [0, 1), got {draw}");
        let mantissa = (draw * (1u64 << 53) as f64) as u64;
        Self {
            word: mantissa << 11,
            draws: 0,
        }
    }

    /// Number of 64-bit words handed out so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RngCore for FixedDrawRng {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        (self.word >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.word
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Random source that panics if used.
///
/// Hand it to deterministic code to prove no randomness is consumed.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnusedRng;

impl RngCore for UnusedRng {
    fn next_u32(&mut self) -> u32 {
        panic!("deterministic code drew a u32");
    }

    fn next_u64(&mut self) -> u64 {
        panic!("deterministic code drew a u64");
    }

    fn fill_bytes(&mut self, _dst: &mut [u8]) {
        panic!("deterministic code requested random bytes");
    }
}
