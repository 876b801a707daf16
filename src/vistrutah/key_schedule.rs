//! Fixed-key derivation and round-key evolution.
//!
//! Rotation-based, ARM-backend schedule, per the spec's normative choice
//! (`vistrutah_arm.c`/`vistrutah_512_arm.c`): Vistrutah-256 steps its round
//! key by permuting each 16-byte slice through [`P4`]/[`P5`]; Vistrutah-512
//! steps it by rotating each slice by a fixed byte count. Both are
//! deterministic, so rather than re-deriving a "previous" round key for
//! decryption with an inverse permutation/rotation at each step, this
//! module builds the full forward sequence once (spec's own design note
//! sanctions caching the sequence in a small table) and the cipher core
//! indexes it forwards for encryption and backwards for decryption.

use super::constants::{KEXP_SHUFFLE, P4, P5};
use super::mixing::{apply_permutation, rotate_bytes};

/// The fixed keys and the full forward round-key sequence for one call,
/// `round_keys[i]` being the round key after `i` step-advances
/// (`round_keys[0]` is the initial, pre-advance value).
pub struct KeySchedule<const N: usize> {
    pub fixed: [[u8; 16]; N],
    pub round_keys: Vec<[[u8; 16]; N]>,
}

impl<const N: usize> KeySchedule<N> {
    pub fn last(&self) -> &[[u8; 16]; N] {
        self.round_keys.last().expect("round_keys is never empty")
    }
}

fn duplicate16(key: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[0..16].copy_from_slice(&key[0..16]);
    out[16..32].copy_from_slice(&key[0..16]);
    out
}

/// Builds the Vistrutah-256 fixed key and the `steps + 1`-entry round-key
/// sequence. `key` is 16 or 32 bytes.
pub fn schedule_256(key: &[u8], steps: usize) -> KeySchedule<2> {
    let full = if key.len() == 16 {
        duplicate16(key)
    } else {
        let mut out = [0u8; 32];
        out.copy_from_slice(&key[0..32]);
        out
    };

    let mut fixed0 = [0u8; 16];
    let mut fixed1 = [0u8; 16];
    fixed0.copy_from_slice(&full[0..16]);
    fixed1.copy_from_slice(&full[16..32]);

    // Initial round key is the fixed key with its two halves swapped.
    let mut rk0 = fixed1;
    let mut rk1 = fixed0;

    let mut round_keys = Vec::with_capacity(steps + 1);
    round_keys.push([rk0, rk1]);
    for _ in 0..steps {
        apply_permutation(&P4, &mut rk0);
        apply_permutation(&P5, &mut rk1);
        round_keys.push([rk0, rk1]);
    }

    KeySchedule {
        fixed: [fixed0, fixed1],
        round_keys,
    }
}

/// Builds the Vistrutah-512 fixed key and the `steps + 1`-entry round-key
/// sequence. `key` is 32 or 64 bytes.
pub fn schedule_512(key: &[u8], steps: usize) -> KeySchedule<4> {
    let mut full = [0u8; 64];
    if key.len() == 32 {
        full[0..32].copy_from_slice(key);
        full[32..64].copy_from_slice(key);
    } else {
        full.copy_from_slice(&key[0..64]);
        // The upper half is shuffled only when the caller actually supplied
        // a full 64-byte master key, not when it was formed by duplicating
        // a 32-byte key above.
        let upper: [u8; 32] = full[32..64].try_into().unwrap();
        for i in 0..32 {
            full[32 + i] = upper[KEXP_SHUFFLE[i] as usize];
        }
    }

    let mut fixed = [[0u8; 16]; 4];
    for i in 0..4 {
        fixed[i].copy_from_slice(&full[i * 16..(i + 1) * 16]);
    }

    // Initial round key swaps within each pair: (0,1) -> (1,0), (2,3) -> (3,2).
    let mut rk = [fixed[1], fixed[0], fixed[3], fixed[2]];

    let mut round_keys = Vec::with_capacity(steps + 1);
    round_keys.push(rk);
    for _ in 0..steps {
        rotate_bytes(&mut rk[0], 5);
        rotate_bytes(&mut rk[1], 10);
        rotate_bytes(&mut rk[2], 5);
        rotate_bytes(&mut rk[3], 10);
        round_keys.push(rk);
    }

    KeySchedule {
        fixed,
        round_keys,
    }
}
