//! Vistrutah: a wide-block, tweakable-by-key-size, AES-based cipher family.
//!
//! `vistrutah256` operates on 32-byte blocks over two parallel AES-128
//! lanes; `vistrutah512` operates on 64-byte blocks over four. Both are
//! step-and-mix constructions — every step runs one AES round per lane
//! under a key that evolves deterministically, mixes bytes across lanes,
//! then runs a second AES round per lane under a key fixed for the whole
//! cipher call. See [`vistrutah`] for the variant APIs and [`aes`] for the
//! underlying per-lane AES primitive and its backends.
//!
//! ```
//! use vistrutah::vistrutah256;
//!
//! let key = [0x2b; 16];
//! let plaintext = [0x11u8; vistrutah256::BLOCK_SIZE];
//! let ciphertext = vistrutah256::encrypt(&key, &plaintext, vistrutah256::ROUNDS_SHORT).unwrap();
//! let decrypted = vistrutah256::decrypt(&key, &ciphertext, vistrutah256::ROUNDS_SHORT).unwrap();
//! assert_eq!(decrypted, plaintext);
//! ```

pub mod aes;
pub mod error;
pub mod vistrutah;

pub use error::Error;
pub use vistrutah::{vistrutah256, vistrutah512};
