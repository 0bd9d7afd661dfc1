//! Deterministic entropy ratchet
//!
//! Every co-signer of a multisig proof has to draw the same "random" challenges,
//! so proofs are generated from a ratchet reseeded with a shared 32-byte seed
//! rather than from the operating system.
//!
//! The 64-byte state is split into a seed half and a ratchet half. Each round
//! hashes the whole state, hands out the digest, then replaces the ratchet half
//! with that digest. The seed half is only ever hash input, so the emitted
//! stream never reveals it.

use rand_core::{CryptoRng, RngCore};
use sha3::{Digest, Keccak256};
use std::sync::{Mutex, MutexGuard};
use zeroize::Zeroize;

/// Domain separation label for the initial ratchet half
pub const RATCHET_DOMAIN: &[u8] = b"ct-bridge/entropy-ratchet/v1";

/// Size of the caller-supplied seed
pub const SEED_LEN: usize = 32;

const HASH_LEN: usize = 32;

/// A deterministic, reseedable random-byte generator
pub struct EntropyRatchet {
    state: [u8; 2 * HASH_LEN],
}

impl EntropyRatchet {
    /// Create a ratchet seeded with 32 zero bytes
    pub fn new() -> Self {
        Self::from_seed(&[0u8; SEED_LEN])
    }

    /// Create a ratchet seeded with `seed`
    pub fn from_seed(seed: &[u8; SEED_LEN]) -> Self {
        let mut ratchet = Self {
            state: [0u8; 2 * HASH_LEN],
        };
        ratchet.reseed(seed);
        ratchet
    }

    /// Replace the seed half and reset the ratchet half, discarding all prior state
    pub fn reseed(&mut self, seed: &[u8; SEED_LEN]) {
        self.state[..HASH_LEN].copy_from_slice(seed);
        let initial: [u8; HASH_LEN] = Keccak256::digest(RATCHET_DOMAIN).into();
        self.state[HASH_LEN..].copy_from_slice(&initial);
    }

    /// Produce `n` pseudorandom bytes
    pub fn generate(&mut self, n: usize) -> Vec<u8> {
        let mut out = vec![0u8; n];
        self.fill(&mut out);
        out
    }

    /// Fill `dest` with pseudorandom bytes
    pub fn fill(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(HASH_LEN) {
            let mut digest: [u8; HASH_LEN] = Keccak256::digest(self.state).into();
            self.state[HASH_LEN..].copy_from_slice(&digest);
            chunk.copy_from_slice(&digest[..chunk.len()]);
            digest.zeroize();
        }
    }
}

impl Default for EntropyRatchet {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EntropyRatchet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntropyRatchet").finish_non_exhaustive()
    }
}

impl Drop for EntropyRatchet {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

impl RngCore for EntropyRatchet {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill(dest);
        Ok(())
    }
}

impl CryptoRng for EntropyRatchet {}

/// Process-level owner of a ratchet
///
/// A reseed and every draw that depends on it form one logical operation, so the
/// lock is held by a [`RatchetSession`] for the whole proving or verifying call
/// rather than around individual draws.
#[derive(Debug, Default)]
pub struct SharedRatchet {
    inner: Mutex<EntropyRatchet>,
}

impl SharedRatchet {
    /// Create a shared ratchet seeded with 32 zero bytes
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the ratchet and reseed it with `seed`
    ///
    /// The returned session keeps exclusive access until dropped.
    pub fn session(&self, seed: &[u8; SEED_LEN]) -> RatchetSession<'_> {
        let mut session = self.lock();
        session.reseed(seed);
        session
    }

    /// Lock the ratchet without reseeding it
    ///
    /// For callers that reseed as the first step of their own operation.
    pub fn lock(&self) -> RatchetSession<'_> {
        // A poisoned ratchet is safe to reuse: every operation starts with a full reseed.
        let guard = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        RatchetSession { guard }
    }
}

/// Exclusive, already-reseeded access to a [`SharedRatchet`]
pub struct RatchetSession<'a> {
    guard: MutexGuard<'a, EntropyRatchet>,
}

impl std::ops::Deref for RatchetSession<'_> {
    type Target = EntropyRatchet;

    fn deref(&self) -> &EntropyRatchet {
        &self.guard
    }
}

impl std::ops::DerefMut for RatchetSession<'_> {
    fn deref_mut(&mut self) -> &mut EntropyRatchet {
        &mut self.guard
    }
}
