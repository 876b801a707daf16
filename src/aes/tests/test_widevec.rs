use super::super::widevec::{decrypt, encrypt, BLOCK_SIZE};
use crate::vistrutah::core512::{ROUNDS_LONG_512KEY, ROUNDS_SHORT_256KEY};

#[test]
fn matches_scalar_backend_for_a_256_bit_key() {
    let key = [0x2b; 32];
    let plaintext = [0x11u8; BLOCK_SIZE];
    let mut wide_ct = [0u8; BLOCK_SIZE];
    let mut scalar_ct = [0u8; BLOCK_SIZE];

    encrypt(&key, &plaintext, ROUNDS_SHORT_256KEY, &mut wide_ct).unwrap();
    crate::vistrutah::core512::encrypt::<crate::aes::soft::Soft>(
        &key,
        &plaintext,
        ROUNDS_SHORT_256KEY,
        &mut scalar_ct,
    )
    .unwrap();
    assert_eq!(wide_ct, scalar_ct);
}

#[test]
fn round_trips_for_a_512_bit_key() {
    let key = [0x5a; 64];
    let plaintext = [0x77u8; BLOCK_SIZE];
    let mut ciphertext = [0u8; BLOCK_SIZE];
    let mut decrypted = [0u8; BLOCK_SIZE];

    encrypt(&key, &plaintext, ROUNDS_LONG_512KEY, &mut ciphertext).unwrap();
    decrypt(&key, &ciphertext, ROUNDS_LONG_512KEY, &mut decrypted).unwrap();
    assert_eq!(decrypted, plaintext);
}
