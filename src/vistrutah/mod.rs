//! The Vistrutah wide-block cipher family: `vistrutah256` and `vistrutah512`.
//!
//! Both variants are step-and-mix constructions over parallel AES-128
//! lanes: each step runs one AES round per lane with a derived key, mixes
//! bytes across lanes, then runs a second AES round per lane with a fixed
//! key shared by every step. See [`core256`]/[`core512`] for the exact
//! sequencing and `DESIGN.md` for how the open points in the key schedule
//! and mixing layer were resolved.

pub(crate) mod constants;
mod core256;
pub(crate) mod core512;
pub(crate) mod key_schedule;
pub(crate) mod mixing;

use crate::aes::ActivePrimitive;
use crate::error::Error;

pub mod vistrutah256 {
    use super::*;

    pub const BLOCK_SIZE: usize = core256::BLOCK_SIZE;
    pub const ROUNDS_SHORT: u32 = core256::ROUNDS_SHORT;
    pub const ROUNDS_LONG: u32 = core256::ROUNDS_LONG;

    /// Encrypts one 32-byte block with `key` (16 or 32 bytes) and `rounds`
    /// (10 or 14).
    pub fn encrypt(
        key: &[u8],
        plaintext: &[u8; BLOCK_SIZE],
        rounds: u32,
    ) -> Result<[u8; BLOCK_SIZE], Error> {
        let mut out = [0u8; BLOCK_SIZE];
        core256::encrypt::<ActivePrimitive>(key, plaintext, rounds, &mut out)?;
        Ok(out)
    }

    /// Decrypts one 32-byte block.
    pub fn decrypt(
        key: &[u8],
        ciphertext: &[u8; BLOCK_SIZE],
        rounds: u32,
    ) -> Result<[u8; BLOCK_SIZE], Error> {
        let mut out = [0u8; BLOCK_SIZE];
        core256::decrypt::<ActivePrimitive>(key, ciphertext, rounds, &mut out)?;
        Ok(out)
    }

    /// Slice-based convenience wrapper over [`encrypt`]; `plaintext` and the
    /// returned buffer must be exactly [`BLOCK_SIZE`] bytes.
    pub fn encrypt_slice(key: &[u8], plaintext: &[u8], rounds: u32) -> Result<Vec<u8>, Error> {
        if plaintext.len() != BLOCK_SIZE {
            return Err(Error::BufferSizeMismatch {
                expected: BLOCK_SIZE,
                got: plaintext.len(),
            });
        }
        let block: [u8; BLOCK_SIZE] = plaintext.try_into().unwrap();
        Ok(encrypt(key, &block, rounds)?.to_vec())
    }

    /// Slice-based convenience wrapper over [`decrypt`].
    pub fn decrypt_slice(key: &[u8], ciphertext: &[u8], rounds: u32) -> Result<Vec<u8>, Error> {
        if ciphertext.len() != BLOCK_SIZE {
            return Err(Error::BufferSizeMismatch {
                expected: BLOCK_SIZE,
                got: ciphertext.len(),
            });
        }
        let block: [u8; BLOCK_SIZE] = ciphertext.try_into().unwrap();
        Ok(decrypt(key, &block, rounds)?.to_vec())
    }
}

pub mod vistrutah512 {
    use super::*;

    pub const BLOCK_SIZE: usize = core512::BLOCK_SIZE;
    pub const ROUNDS_SHORT_256KEY: u32 = core512::ROUNDS_SHORT_256KEY;
    pub const ROUNDS_LONG_256KEY: u32 = core512::ROUNDS_LONG_256KEY;
    pub const ROUNDS_SHORT_512KEY: u32 = core512::ROUNDS_SHORT_512KEY;
    pub const ROUNDS_LONG_512KEY: u32 = core512::ROUNDS_LONG_512KEY;

    /// Encrypts one 64-byte block with `key` (32 or 64 bytes) and `rounds`
    /// (10/14 for a 32-byte key, 12/18 for a 64-byte key).
    ///
    /// On a build with AVX-512 + VAES enabled, this uses
    /// [`crate::aes::widevec`] to process all four lanes of each AES round
    /// with a single instruction instead of four.
    pub fn encrypt(
        key: &[u8],
        plaintext: &[u8; BLOCK_SIZE],
        rounds: u32,
    ) -> Result<[u8; BLOCK_SIZE], Error> {
        let mut out = [0u8; BLOCK_SIZE];
        #[cfg(all(target_arch = "x86_64", target_feature = "avx512f", target_feature = "vaes"))]
        crate::aes::widevec::encrypt(key, plaintext, rounds, &mut out)?;
        #[cfg(not(all(target_arch = "x86_64", target_feature = "avx512f", target_feature = "vaes")))]
        core512::encrypt::<ActivePrimitive>(key, plaintext, rounds, &mut out)?;
        Ok(out)
    }

    /// Decrypts one 64-byte block.
    pub fn decrypt(
        key: &[u8],
        ciphertext: &[u8; BLOCK_SIZE],
        rounds: u32,
    ) -> Result<[u8; BLOCK_SIZE], Error> {
        let mut out = [0u8; BLOCK_SIZE];
        #[cfg(all(target_arch = "x86_64", target_feature = "avx512f", target_feature = "vaes"))]
        crate::aes::widevec::decrypt(key, ciphertext, rounds, &mut out)?;
        #[cfg(not(all(target_arch = "x86_64", target_feature = "avx512f", target_feature = "vaes")))]
        core512::decrypt::<ActivePrimitive>(key, ciphertext, rounds, &mut out)?;
        Ok(out)
    }

    /// Slice-based convenience wrapper over [`encrypt`].
    pub fn encrypt_slice(key: &[u8], plaintext: &[u8], rounds: u32) -> Result<Vec<u8>, Error> {
        if plaintext.len() != BLOCK_SIZE {
            return Err(Error::BufferSizeMismatch {
                expected: BLOCK_SIZE,
                got: plaintext.len(),
            });
        }
        let block: [u8; BLOCK_SIZE] = plaintext.try_into().unwrap();
        Ok(encrypt(key, &block, rounds)?.to_vec())
    }

    /// Slice-based convenience wrapper over [`decrypt`].
    pub fn decrypt_slice(key: &[u8], ciphertext: &[u8], rounds: u32) -> Result<Vec<u8>, Error> {
        if ciphertext.len() != BLOCK_SIZE {
            return Err(Error::BufferSizeMismatch {
                expected: BLOCK_SIZE,
                got: ciphertext.len(),
            });
        }
        let block: [u8; BLOCK_SIZE] = ciphertext.try_into().unwrap();
        Ok(decrypt(key, &block, rounds)?.to_vec())
    }
}

#[cfg(test)]
mod tests;
