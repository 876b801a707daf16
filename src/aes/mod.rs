//! AES round primitives and backend dispatch.
//!
//! This module provides the single-round AES building blocks the Vistrutah
//! step function is built from, plus the selection of which concrete
//! implementation (software, 128-bit hardware, wide-vector) backs them for
//! a given build.
//!
//! Every implementation of [`AesPrimitive`] agrees on the same contract for
//! its four round operations, regardless of which hardware instruction (if
//! any) computes it:
//!
//! - `round(S, K)      = AddRoundKey(MixColumns(ShiftRows(SubBytes(S))), K)`
//! - `round_last(S, K)  = AddRoundKey(ShiftRows(SubBytes(S)), K)`
//! - `round_inv(S, K)   = AddRoundKey(InvMixColumns(InvShiftRows(InvSubBytes(S))), K)`
//! - `round_inv_last(S, K) = AddRoundKey(InvShiftRows(InvSubBytes(S)), K)`
//! - `inv_mix_columns(S) = InvMixColumns(S)`, used to pre-transform fixed
//!   keys for decryption so the main loop can use `round_inv` directly.

pub mod soft;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod x86;

#[cfg(target_arch = "aarch64")]
pub mod arm;

#[cfg(all(
    target_arch = "x86_64",
    target_feature = "avx512f",
    target_feature = "vaes"
))]
pub mod widevec;

/// One AES state: 16 bytes, one lane.
pub type Block128 = [u8; 16];

/// A backend able to perform one AES round on a single 128-bit lane.
///
/// `Copy` because every concrete backend (a plain byte array, or a thin
/// newtype over a hardware vector register) is small and cheap to pass by
/// value; this keeps the cipher core free of references and lifetimes.
pub trait AesPrimitive: Copy {
    fn from_block(b: Block128) -> Self;
    fn to_block(self) -> Block128;
    fn zero() -> Self;
    fn xor(self, rhs: Self) -> Self;
    fn round(self, key: Self) -> Self;
    fn round_last(self, key: Self) -> Self;
    fn round_inv(self, key: Self) -> Self;
    fn round_inv_last(self, key: Self) -> Self;
    fn inv_mix_columns(self) -> Self;
}

#[cfg(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "aes"
))]
pub type ActivePrimitive = x86::Aesni;

#[cfg(all(target_arch = "aarch64", target_feature = "aes"))]
pub type ActivePrimitive = arm::NeonAes;

#[cfg(not(any(
    all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "aes"),
    all(target_arch = "aarch64", target_feature = "aes"),
)))]
pub type ActivePrimitive = soft::Soft;

#[cfg(test)]
mod tests;
