//! Vistrutah-256: two parallel AES-128 lanes, step-and-mix.
//!
//! Transliterated from `vistrutah_arm.c`'s `vistrutah_256_encrypt`/
//! `vistrutah_256_decrypt`, generalized over the AES backend `P` instead of
//! being hardwired to NEON intrinsics. Decryption consumes the cached
//! forward round-key sequence (see [`super::key_schedule`]) backwards
//! rather than rotating a mutable round key live, matching the same
//! `round_keys[48][32]` cache the reference implementation itself builds
//! for this variant.

use crate::aes::AesPrimitive;
use crate::error::Error;
use crate::vistrutah::constants::ROUND_CONSTANTS;
use crate::vistrutah::key_schedule::schedule_256;
use crate::vistrutah::mixing::{mix_256, unmix_256};

pub const BLOCK_SIZE: usize = 32;
pub const ROUNDS_SHORT: u32 = 10;
pub const ROUNDS_LONG: u32 = 14;

fn validate(key: &[u8], rounds: u32) -> Result<(), Error> {
    if key.len() != 16 && key.len() != 32 {
        return Err(Error::InvalidKeySize { got: key.len() });
    }
    if rounds != ROUNDS_SHORT && rounds != ROUNDS_LONG {
        return Err(Error::InvalidRoundCount { got: rounds });
    }
    Ok(())
}

pub fn encrypt<P: AesPrimitive>(
    key: &[u8],
    plaintext: &[u8; BLOCK_SIZE],
    rounds: u32,
    ciphertext: &mut [u8; BLOCK_SIZE],
) -> Result<(), Error> {
    validate(key, rounds)?;
    let steps = (rounds / 2) as usize;

    let schedule = schedule_256(key, steps);
    let fk0 = P::from_block(schedule.fixed[0]);
    let fk1 = P::from_block(schedule.fixed[1]);

    let mut s0 = P::from_block(plaintext[0..16].try_into().unwrap());
    let mut s1 = P::from_block(plaintext[16..32].try_into().unwrap());

    let rk0 = P::from_block(schedule.round_keys[0][0]);
    let rk1 = P::from_block(schedule.round_keys[0][1]);
    s0 = s0.xor(rk0);
    s1 = s1.xor(rk1);
    s0 = s0.round(fk0);
    s1 = s1.round(fk1);

    for i in 1..steps {
        s0 = s0.round(P::zero());
        s1 = s1.round(P::zero());

        let (m0, m1) = mix_256(s0.to_block(), s1.to_block());
        s0 = P::from_block(m0);
        s1 = P::from_block(m1);

        let rk0 = P::from_block(schedule.round_keys[i][0]);
        let rk1 = P::from_block(schedule.round_keys[i][1]);
        s0 = s0.xor(rk0);
        s1 = s1.xor(rk1);

        let rc = P::from_block(ROUND_CONSTANTS[i - 1]);
        s0 = s0.xor(rc);

        s0 = s0.round(fk0);
        s1 = s1.round(fk1);
    }

    let rk0 = P::from_block(schedule.round_keys[steps][0]);
    let rk1 = P::from_block(schedule.round_keys[steps][1]);
    s0 = s0.round_last(rk0);
    s1 = s1.round_last(rk1);

    ciphertext[0..16].copy_from_slice(&s0.to_block());
    ciphertext[16..32].copy_from_slice(&s1.to_block());
    Ok(())
}

pub fn decrypt<P: AesPrimitive>(
    key: &[u8],
    ciphertext: &[u8; BLOCK_SIZE],
    rounds: u32,
    plaintext: &mut [u8; BLOCK_SIZE],
) -> Result<(), Error> {
    validate(key, rounds)?;
    let steps = (rounds / 2) as usize;

    let schedule = schedule_256(key, steps);
    let fk0 = P::from_block(schedule.fixed[0]).inv_mix_columns();
    let fk1 = P::from_block(schedule.fixed[1]).inv_mix_columns();

    let mut s0 = P::from_block(ciphertext[0..16].try_into().unwrap());
    let mut s1 = P::from_block(ciphertext[16..32].try_into().unwrap());

    let rk_top0 = P::from_block(schedule.round_keys[steps][0]);
    let rk_top1 = P::from_block(schedule.round_keys[steps][1]);
    s0 = s0.xor(rk_top0);
    s1 = s1.xor(rk_top1);
    s0 = s0.round_inv(fk0);
    s1 = s1.round_inv(fk1);

    for i in (1..steps).rev() {
        let rk0 = P::from_block(schedule.round_keys[i][0]);
        let rk1 = P::from_block(schedule.round_keys[i][1]);
        s0 = s0.round_inv_last(rk0);
        s1 = s1.round_inv_last(rk1);

        let rc = P::from_block(ROUND_CONSTANTS[i - 1]);
        s0 = s0.xor(rc);

        let (u0, u1) = unmix_256(s0.to_block(), s1.to_block());
        s0 = P::from_block(u0);
        s1 = P::from_block(u1);

        s0 = s0.inv_mix_columns();
        s1 = s1.inv_mix_columns();

        s0 = s0.round_inv(fk0);
        s1 = s1.round_inv(fk1);
    }

    let rk0 = P::from_block(schedule.round_keys[0][0]);
    let rk1 = P::from_block(schedule.round_keys[0][1]);
    s0 = s0.round_inv_last(rk0);
    s1 = s1.round_inv_last(rk1);

    plaintext[0..16].copy_from_slice(&s0.to_block());
    plaintext[16..32].copy_from_slice(&s1.to_block());
    Ok(())
}
