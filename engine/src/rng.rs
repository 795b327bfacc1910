//! Non-cryptographically secure fast rng based on xxhash
//!
//! The whole stream is a function of the 8-byte seed, so re-creating
//! the rng from the same seed replays the same samples.
use log::warn;
use rand::{RngCore, SeedableRng};
use xxhash_rust::{
    const_xxh3::{self, const_custom_default_secret},
    xxh3::xxh3_64_with_secret,
};

const FIXTURE_SECRET_SEED: u64 = u64::from_le_bytes(*b"xFIXTURx");
const FIXTURE_SECRET: [u8; 192] =
    const_custom_default_secret(FIXTURE_SECRET_SEED);

#[derive(Clone, Debug)]
pub struct FastxxHashRng {
    state: u64,
}

impl FastxxHashRng {
    pub const fn new(seed: u64) -> FastxxHashRng {
        FastxxHashRng {
            state: const_xxh3::xxh3_64_with_secret(
                &seed.to_le_bytes(),
                &FIXTURE_SECRET,
            ),
        }
    }

    #[inline(always)]
    fn advance(&mut self) -> u64 {
        let old_state = self.state;
        self.state =
            xxh3_64_with_secret(&old_state.to_le_bytes(), &FIXTURE_SECRET);

        // Very rare edge case here
        if old_state == self.state {
            warn!("extremely rare edge cyclic case hit");
            self.state = self.state.rotate_right(32);
        }

        self.state
    }
}

impl RngCore for FastxxHashRng {
    fn next_u32(&mut self) -> u32 {
        // Take upper bits
        (self.advance() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.advance()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        // Since we are sourcing from rand u64s, we need to write at most
        // 8 bytes at a time
        for chunk in dest.chunks_mut(8) {
            let new_bytes = self.advance().to_le_bytes();
            chunk.copy_from_slice(&new_bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(
        &mut self,
        dest: &mut [u8],
    ) -> Result<(), rand::Error> {
        self.fill_bytes(dest);

        Ok(())
    }
}

impl SeedableRng for FastxxHashRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> FastxxHashRng {
        FastxxHashRng::new(u64::from_le_bytes(seed))
    }

    /// Unlike the default, the u64 is used as the seed directly.
    fn seed_from_u64(seed: u64) -> FastxxHashRng {
        FastxxHashRng::new(seed)
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = FastxxHashRng::seed_from_u64(0);
        let mut b = FastxxHashRng::from_seed(0_u64.to_le_bytes());
        for _ in 0..1_000 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = FastxxHashRng::new(0);
        let mut b = FastxxHashRng::new(1);
        let a: Vec<u64> = (0..16).map(|_| a.next_u64()).collect();
        let b: Vec<u64> = (0..16).map(|_| b.next_u64()).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn fill_bytes_partial_chunk() {
        let mut a = FastxxHashRng::new(7);
        let mut b = FastxxHashRng::new(7);

        let mut dest = [0_u8; 13];
        a.fill_bytes(&mut dest);

        let first = b.next_u64().to_le_bytes();
        let second = b.next_u64().to_le_bytes();
        assert_eq!(dest[..8], first);
        assert_eq!(dest[8..], second[..5]);
    }

    #[test]
    fn uniform_floats_look_uniform() {
        let mut rng = FastxxHashRng::new(0x123);
        let n = 100_000;
        let mean = (0..n).map(|_| rng.gen::<f64>()).sum::<f64>()
            / n as f64;
        assert!((mean - 0.5).abs() < 0.01, "mean = {mean}");
    }
}
