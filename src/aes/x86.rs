//! AES-NI backed round primitive for x86/x86_64.
//!
//! Each method below maps to a single AES-NI instruction: `AESENC`,
//! `AESENCLAST`, `AESDEC`, `AESDECLAST`, `AESIMC`. Their hardware semantics
//! already match this crate's round contract exactly — `AESENC(state, key)`
//! is defined by Intel as `AddRoundKey(MixColumns(ShiftRows(SubBytes(state))), key)`,
//! and likewise for the decrypt instructions — so no reordering is needed
//! here, unlike the ARM NEON backend.

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use super::{AesPrimitive, Block128};

/// A single 128-bit AES lane held in an `__m128i`.
#[derive(Clone, Copy)]
pub struct Aesni(__m128i);

impl Aesni {
    #[target_feature(enable = "aes")]
    unsafe fn round_unchecked(self, key: Self) -> Self {
        Aesni(_mm_aesenc_si128(self.0, key.0))
    }

    #[target_feature(enable = "aes")]
    unsafe fn round_last_unchecked(self, key: Self) -> Self {
        Aesni(_mm_aesenclast_si128(self.0, key.0))
    }

    #[target_feature(enable = "aes")]
    unsafe fn round_inv_unchecked(self, key: Self) -> Self {
        Aesni(_mm_aesdec_si128(self.0, key.0))
    }

    #[target_feature(enable = "aes")]
    unsafe fn round_inv_last_unchecked(self, key: Self) -> Self {
        Aesni(_mm_aesdeclast_si128(self.0, key.0))
    }

    #[target_feature(enable = "aes")]
    unsafe fn inv_mix_columns_unchecked(self) -> Self {
        Aesni(_mm_aesimc_si128(self.0))
    }
}

impl AesPrimitive for Aesni {
    #[inline]
    fn from_block(b: Block128) -> Self {
        // Safety: loading 16 bytes into a SIMD register is always sound;
        // the `aes` target feature only gates the AES instructions below.
        unsafe { Aesni(_mm_loadu_si128(b.as_ptr() as *const __m128i)) }
    }

    #[inline]
    fn to_block(self) -> Block128 {
        let mut out = [0u8; 16];
        unsafe { _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, self.0) };
        out
    }

    #[inline]
    fn zero() -> Self {
        unsafe { Aesni(_mm_setzero_si128()) }
    }

    #[inline]
    fn xor(self, rhs: Self) -> Self {
        unsafe { Aesni(_mm_xor_si128(self.0, rhs.0)) }
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
