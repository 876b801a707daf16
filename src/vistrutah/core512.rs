//! Vistrutah-512: four parallel AES-128 lanes, step-and-mix.
//!
//! Transliterated from `vistrutah_512_arm.c`'s `vistrutah_512_encrypt`/
//! `vistrutah_512_decrypt`. Decryption pre-transforms the fixed key once via
//! [`AesPrimitive::inv_mix_columns`] so the main loop can reuse `round_inv`
//! directly, exactly as the reference does before its decrypt loop; the
//! live `rotate_bytes` stepping the reference performs backwards each
//! iteration is replaced here by indexing the same cached forward round-key
//! sequence [`schedule_512`] already builds for encryption (the two are
//! equivalent: rotating left by 5 and right by 11 are inverse operations
//! mod 16).

use crate::aes::AesPrimitive;
use crate::error::Error;
use crate::vistrutah::constants::ROUND_CONSTANTS;
use crate::vistrutah::key_schedule::schedule_512;
use crate::vistrutah::mixing::{mix_512, unmix_512};

pub const BLOCK_SIZE: usize = 64;
pub const ROUNDS_SHORT_256KEY: u32 = 10;
pub const ROUNDS_LONG_256KEY: u32 = 14;
pub const ROUNDS_SHORT_512KEY: u32 = 12;
pub const ROUNDS_LONG_512KEY: u32 = 18;

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

fn load4(block: &[u8; BLOCK_SIZE]) -> [[u8; 16]; 4] {
    let mut lanes = [[0u8; 16]; 4];
    for i in 0..4 {
        lanes[i].copy_from_slice(&block[i * 16..(i + 1) * 16]);
    }
    lanes
}

fn store4(lanes: [[u8; 16]; 4], block: &mut [u8; BLOCK_SIZE]) {
    for i in 0..4 {
        block[i * 16..(i + 1) * 16].copy_from_slice(&lanes[i]);
    }
}

pub fn encrypt<P: AesPrimitive>(
    key: &[u8],
    plaintext: &[u8; BLOCK_SIZE],
    rounds: u32,
    ciphertext: &mut [u8; BLOCK_SIZE],
) -> Result<(), Error> {
    validate(key, rounds)?;
    let steps = (rounds / 2) as usize;

    let schedule = schedule_512(key, steps);
    let fk: [P; 4] = schedule.fixed.map(P::from_block);

    let lanes = load4(plaintext);
    let mut s: [P; 4] = lanes.map(P::from_block);

    let rk0 = schedule.round_keys[0].map(P::from_block);
    for i in 0..4 {
        s[i] = s[i].xor(rk0[i]);
        s[i] = s[i].round(fk[i]);
    }

    for step in 1..steps {
        for i in 0..4 {
            s[i] = s[i].round(P::zero());
        }

        let mixed = mix_512(
            s[0].to_block(),
            s[1].to_block(),
            s[2].to_block(),
            s[3].to_block(),
        );
        s = [
            P::from_block(mixed.0),
            P::from_block(mixed.1),
            P::from_block(mixed.2),
            P::from_block(mixed.3),
        ];

        let rk = schedule.round_keys[step].map(P::from_block);
        for i in 0..4 {
            s[i] = s[i].xor(rk[i]);
        }

        let rc = P::from_block(ROUND_CONSTANTS[step - 1]);
        s[0] = s[0].xor(rc);

        for i in 0..4 {
            s[i] = s[i].round(fk[i]);
        }
    }

    let rk_last = schedule.round_keys[steps].map(P::from_block);
    for i in 0..4 {
        s[i] = s[i].round_last(rk_last[i]);
    }

    store4(s.map(P::to_block), ciphertext);
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

    let schedule = schedule_512(key, steps);
    let fk: [P; 4] = schedule.fixed.map(|b| P::from_block(b).inv_mix_columns());

    let lanes = load4(ciphertext);
    let mut s: [P; 4] = lanes.map(P::from_block);

    let rk_top = schedule.round_keys[steps].map(P::from_block);
    for i in 0..4 {
        s[i] = s[i].xor(rk_top[i]);
        s[i] = s[i].round_inv(fk[i]);
    }

    for i in (1..steps).rev() {
        let rk = schedule.round_keys[i].map(P::from_block);
        for lane in 0..4 {
            s[lane] = s[lane].round_inv_last(rk[lane]);
        }

        let rc = P::from_block(ROUND_CONSTANTS[i - 1]);
        s[0] = s[0].xor(rc);

        let unmixed = unmix_512(
            s[0].to_block(),
            s[1].to_block(),
            s[2].to_block(),
            s[3].to_block(),
        );
        s = [
            P::from_block(unmixed.0),
            P::from_block(unmixed.1),
            P::from_block(unmixed.2),
            P::from_block(unmixed.3),
        ];

        for lane in 0..4 {
            s[lane] = s[lane].inv_mix_columns();
            s[lane] = s[lane].round_inv(fk[lane]);
        }
    }

    let rk0 = schedule.round_keys[0].map(P::from_block);
    for i in 0..4 {
        s[i] = s[i].round_inv_last(rk0[i]);
    }

    store4(s.map(P::to_block), plaintext);
    Ok(())
}
