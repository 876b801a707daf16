//! NEON crypto-extension backed round primitive for aarch64.
//!
//! NEON exposes AES as three separate instructions rather than one fused
//! round: `AESE` (SubBytes after XOR with a key), `AESMC` (MixColumns),
//! `AESD`/`AESIMC` for the inverse pair. `AESE`/`AESD` XOR the key *before*
//! substitution, the opposite order from this crate's round contract (key
//! added last). Feeding them a zero key and XORing the round key in
//! afterwards recovers the same contract every other backend implements:
//! `vaeseq_u8(s, zero)` is exactly `ShiftRows(SubBytes(s))`.

use core::arch::aarch64::*;

use super::{AesPrimitive, Block128};

/// A single 128-bit AES lane held in a NEON `uint8x16_t`.
#[derive(Clone, Copy)]
pub struct NeonAes(uint8x16_t);

impl NeonAes {
    #[target_feature(enable = "aes")]
    unsafe fn round_unchecked(self, key: Self) -> Self {
        let zero = vdupq_n_u8(0);
        let shifted_subbed = vaeseq_u8(self.0, zero);
        let mixed = vaesmcq_u8(shifted_subbed);
        NeonAes(veorq_u8(mixed, key.0))
    }

    #[target_feature(enable = "aes")]
    unsafe fn round_last_unchecked(self, key: Self) -> Self {
        let zero = vdupq_n_u8(0);
        let shifted_subbed = vaeseq_u8(self.0, zero);
        NeonAes(veorq_u8(shifted_subbed, key.0))
    }

    #[target_feature(enable = "aes")]
    unsafe fn round_inv_unchecked(self, key: Self) -> Self {
        let zero = vdupq_n_u8(0);
        let shifted_subbed = vaesdq_u8(self.0, zero);
        let mixed = vaesimcq_u8(shifted_subbed);
        NeonAes(veorq_u8(mixed, key.0))
    }

    #[target_feature(enable = "aes")]
    unsafe fn round_inv_last_unchecked(self, key: Self) -> Self {
        let zero = vdupq_n_u8(0);
        let shifted_subbed = vaesdq_u8(self.0, zero);
        NeonAes(veorq_u8(shifted_subbed, key.0))
    }

    #[target_feature(enable = "aes")]
    unsafe fn inv_mix_columns_unchecked(self) -> Self {
        NeonAes(vaesimcq_u8(self.0))
    }
}

impl AesPrimitive for NeonAes {
    #[inline]
    fn from_block(b: Block128) -> Self {
        unsafe { NeonAes(vld1q_u8(b.as_ptr())) }
    }

    #[inline]
    fn to_block(self) -> Block128 {
        let mut out = [0u8; 16];
        unsafe { vst1q_u8(out.as_mut_ptr(), self.0) };
        out
    }

    #[inline]
    fn zero() -> Self {
        unsafe { NeonAes(vdupq_n_u8(0)) }
    }

    #[inline]
    fn xor(self, rhs: Self) -> Self {
        unsafe { NeonAes(veorq_u8(self.0, rhs.0)) }
    }

    #[inline]
    fn round(self, key: Self) -> Self {
        unsafe { self.round_unchecked(key) }
    }

    #[inline]
    fn round_last(self, key: Self) -> Self {
        unsafe { self.round_last_unchecked(key) }
    }

    #[inline]
    fn round_inv(self, key: Self) -> Self {
        unsafe { self.round_inv_unchecked(key) }
    }

    #[inline]
    fn round_inv_last(self, key: Self) -> Self {
        unsafe { self.round_inv_last_unchecked(key) }
    }

    #[inline]
    fn inv_mix_columns(self) -> Self {
        unsafe { self.inv_mix_columns_unchecked() }
    }
}
