//! AVX-512 + VAES wide-vector fast path for Vistrutah-512.
//!
//! VAES widens `AESENC`/`AESENCLAST`/`AESDEC`/`AESDECLAST` to operate on
//! four independent 128-bit lanes packed into one `zmm` register — exactly
//! the four lanes Vistrutah-512 already keeps separate, so one instruction
//! here replaces four calls into [`super::x86::Aesni`]. VAES does not widen
//! `AESIMC`; the one-time fixed-key pre-transform decryption needs is done
//! per-lane by borrowing [`super::x86::Aesni`]'s `inv_mix_columns_unchecked`.
//!
//! This module is a self-contained alternative to running
//! [`crate::vistrutah::core512`] generically over four scalar
//! [`super::x86::Aesni`] values; it implements the same step sequence but
//! batches each AES round across all four lanes in a single instruction.

use core::arch::x86_64::*;

use super::x86::Aesni;
use super::AesPrimitive;
use crate::error::Error;
use crate::vistrutah::core512::{ROUNDS_LONG_256KEY, ROUNDS_LONG_512KEY, ROUNDS_SHORT_256KEY, ROUNDS_SHORT_512KEY};

pub(crate) const BLOCK_SIZE: usize = 64;

fn validate(key: &[u8], rounds: u32) -> Result<(), Error> {
    let accepted = match key.len() {
        32 => [ROUNDS_SHORT_256KEY, ROUNDS_LONG_256KEY],
        64 => [ROUNDS_SHORT_512KEY, ROUNDS_LONG_512KEY],
        _ => return Err(Error::InvalidKeySize { got: key.len() }),
    };
    if !accepted.contains(&rounds) {
        return Err(Error::InvalidRoundCount { got: rounds });
    }
    Ok(())
}

#[target_feature(enable = "avx512f")]
unsafe fn load(block: &[u8; BLOCK_SIZE]) -> __m512i {
    _mm512_loadu_si512(block.as_ptr() as *const i32)
}

#[target_feature(enable = "avx512f")]
unsafe fn store(v: __m512i, block: &mut [u8; BLOCK_SIZE]) {
    _mm512_storeu_si512(block.as_mut_ptr() as *mut i32, v);
}

fn lanes_to_block(lanes: [[u8; 16]; 4]) -> [u8; BLOCK_SIZE] {
    let mut out = [0u8; BLOCK_SIZE];
    for i in 0..4 {
        out[i * 16..(i + 1) * 16].copy_from_slice(&lanes[i]);
    }
    out
}

#[target_feature(enable = "avx512f,vaes")]
unsafe fn round(state: __m512i, key: __m512i) -> __m512i {
    _mm512_aesenc_epi128(state, key)
}

#[target_feature(enable = "avx512f,vaes")]
unsafe fn round_last(state: __m512i, key: __m512i) -> __m512i {
    _mm512_aesenclast_epi128(state, key)
}

#[target_feature(enable = "avx512f,vaes")]
unsafe fn round_inv(state: __m512i, key: __m512i) -> __m512i {
    _mm512_aesdec_epi128(state, key)
}

#[target_feature(enable = "avx512f,vaes")]
unsafe fn round_inv_last(state: __m512i, key: __m512i) -> __m512i {
    _mm512_aesdeclast_epi128(state, key)
}

/// Applies [`Aesni::inv_mix_columns`] independently to each of the four
/// 128-bit lanes of `v`, since VAES has no widened `AESIMC`.
#[target_feature(enable = "avx512f,vaes,aes")]
unsafe fn inv_mix_columns_per_lane(v: __m512i) -> __m512i {
    let mut block = [0u8; BLOCK_SIZE];
    store(v, &mut block);
    for i in 0..4 {
        let lane: [u8; 16] = block[i * 16..(i + 1) * 16].try_into().unwrap();
        let transformed = Aesni::from_block(lane).inv_mix_columns().to_block();
        block[i * 16..(i + 1) * 16].copy_from_slice(&transformed);
    }
    load(&block)
}

/// Encrypts one 64-byte block using the AVX-512 + VAES fast path. Callers
/// must have already confirmed `is_x86_feature_detected!("avx512f")` and
/// `"vaes"` are unnecessary here only because this module is compiled
/// exclusively under a `target_feature` build (see `aes::mod`'s `cfg`),
/// not behind runtime dispatch.
pub fn encrypt(
    key: &[u8],
    plaintext: &[u8; BLOCK_SIZE],
    rounds: u32,
    ciphertext: &mut [u8; BLOCK_SIZE],
) -> Result<(), Error> {
    validate(key, rounds)?;
    let steps = (rounds / 2) as usize;
    let schedule = crate::vistrutah::key_schedule::schedule_512(key, steps);

    unsafe {
        let fk = load(&lanes_to_block(schedule.fixed));
        let mut s = load(plaintext);

        let rk0 = load(&lanes_to_block(schedule.round_keys[0]));
        s = _mm512_xor_si512(s, rk0);
        s = round(s, fk);

        for step in 1..steps {
            s = round(s, _mm512_setzero_si512());

            let mut block = [0u8; BLOCK_SIZE];
            store(s, &mut block);
            let lanes: [[u8; 16]; 4] = core::array::from_fn(|i| {
                block[i * 16..(i + 1) * 16].try_into().unwrap()
            });
            let (m0, m1, m2, m3) = crate::vistrutah::mixing::mix_512(lanes[0], lanes[1], lanes[2], lanes[3]);
            s = load(&lanes_to_block([m0, m1, m2, m3]));

            let rk = load(&lanes_to_block(schedule.round_keys[step]));
            s = _mm512_xor_si512(s, rk);

            let mut rc_block = [0u8; BLOCK_SIZE];
            rc_block[0..16].copy_from_slice(&crate::vistrutah::constants::ROUND_CONSTANTS[step - 1]);
            s = _mm512_xor_si512(s, load(&rc_block));

            s = round(s, fk);
        }

        let rk_last = load(&lanes_to_block(schedule.round_keys[steps]));
        s = round_last(s, rk_last);
        store(s, ciphertext);
    }
    Ok(())
}

/// Decrypts one 64-byte block using the AVX-512 + VAES fast path.
pub fn decrypt(
    key: &[u8],
    ciphertext: &[u8; BLOCK_SIZE],
    rounds: u32,
    plaintext: &mut [u8; BLOCK_SIZE],
) -> Result<(), Error> {
    validate(key, rounds)?;
    let steps = (rounds / 2) as usize;
    let schedule = crate::vistrutah::key_schedule::schedule_512(key, steps);

    unsafe {
        let fk = inv_mix_columns_per_lane(load(&lanes_to_block(schedule.fixed)));
        let mut s = load(ciphertext);

        let rk_top = load(&lanes_to_block(schedule.round_keys[steps]));
        s = _mm512_xor_si512(s, rk_top);
        s = round_inv(s, fk);

        for i in (1..steps).rev() {
            let rk = load(&lanes_to_block(schedule.round_keys[i]));
            s = round_inv_last(s, rk);

            let mut rc_block = [0u8; BLOCK_SIZE];
            rc_block[0..16].copy_from_slice(&crate::vistrutah::constants::ROUND_CONSTANTS[i - 1]);
            s = _mm512_xor_si512(s, load(&rc_block));

            let mut block = [0u8; BLOCK_SIZE];
            store(s, &mut block);
            let lanes: [[u8; 16]; 4] = core::array::from_fn(|i| {
                block[i * 16..(i + 1) * 16].try_into().unwrap()
            });
            let (u0, u1, u2, u3) = crate::vistrutah::mixing::unmix_512(lanes[0], lanes[1], lanes[2], lanes[3]);
            s = load(&lanes_to_block([u0, u1, u2, u3]));

            s = inv_mix_columns_per_lane(s);
            s = round_inv(s, fk);
        }

        let rk0 = load(&lanes_to_block(schedule.round_keys[0]));
        s = round_inv_last(s, rk0);
        store(s, plaintext);
    }
    Ok(())
}
