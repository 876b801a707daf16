//! Cross-cutting properties: round-trip, avalanche, bijectivity, and input
//! rejection, exercised over the active backend for both variants.

use super::super::{vistrutah256, vistrutah512};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn random_bytes(rng: &mut StdRng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen()).collect()
}

fn hamming_distance(a: &[u8], b: &[u8]) -> u32 {
    a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}

#[test]
fn v256_round_trips_for_every_accepted_combination() {
    let mut r = rng(1);
    for key_len in [16, 32] {
        for rounds in [vistrutah256::ROUNDS_SHORT, vistrutah256::ROUNDS_LONG] {
            let key = random_bytes(&mut r, key_len);
            let mut plaintext = [0u8; vistrutah256::BLOCK_SIZE];
            r.fill(&mut plaintext);

            let ciphertext = vistrutah256::encrypt(&key, &plaintext, rounds).unwrap();
            assert_ne!(ciphertext, plaintext);
            let decrypted = vistrutah256::decrypt(&key, &ciphertext, rounds).unwrap();
            assert_eq!(decrypted, plaintext);
        }
    }
}

#[test]
fn v512_round_trips_for_every_accepted_combination() {
    let mut r = rng(2);
    let combos = [
        (32, vistrutah512::ROUNDS_SHORT_256KEY),
        (32, vistrutah512::ROUNDS_LONG_256KEY),
        (64, vistrutah512::ROUNDS_SHORT_512KEY),
        (64, vistrutah512::ROUNDS_LONG_512KEY),
    ];
    for (key_len, rounds) in combos {
        let key = random_bytes(&mut r, key_len);
        let mut plaintext = [0u8; vistrutah512::BLOCK_SIZE];
        r.fill(&mut plaintext);

        let ciphertext = vistrutah512::encrypt(&key, &plaintext, rounds).unwrap();
        assert_ne!(ciphertext, plaintext);
        let decrypted = vistrutah512::decrypt(&key, &ciphertext, rounds).unwrap();
        assert_eq!(decrypted, plaintext);
    }
}

#[test]
fn v256_single_bit_plaintext_change_causes_avalanche() {
    let mut r = rng(3);
    let key = random_bytes(&mut r, 32);
    let mut plaintext = [0u8; vistrutah256::BLOCK_SIZE];
    r.fill(&mut plaintext);

    let c1 = vistrutah256::encrypt(&key, &plaintext, vistrutah256::ROUNDS_LONG).unwrap();
    plaintext[0] ^= 0x01;
    let c2 = vistrutah256::encrypt(&key, &plaintext, vistrutah256::ROUNDS_LONG).unwrap();

    let bits = vistrutah256::BLOCK_SIZE as u32 * 8;
    let distance = hamming_distance(&c1, &c2);
    // Not a strict statistical test, just a sanity bound: a single flipped
    // input bit should visibly perturb a large fraction of output bits.
    assert!(distance > bits / 4, "distance={distance}, bits={bits}");
}

#[test]
fn v512_single_bit_key_change_causes_avalanche() {
    let mut r = rng(4);
    let mut key = random_bytes(&mut r, 64);
    let mut plaintext = [0u8; vistrutah512::BLOCK_SIZE];
    r.fill(&mut plaintext);

    let c1 = vistrutah512::encrypt(&key, &plaintext, vistrutah512::ROUNDS_LONG_512KEY).unwrap();
    key[0] ^= 0x01;
    let c2 = vistrutah512::encrypt(&key, &plaintext, vistrutah512::ROUNDS_LONG_512KEY).unwrap();

    let bits = vistrutah512::BLOCK_SIZE as u32 * 8;
    let distance = hamming_distance(&c1, &c2);
    assert!(distance > bits / 4, "distance={distance}, bits={bits}");
}

#[test]
fn v256_distinct_plaintexts_under_one_key_are_injective_on_a_sample() {
    let mut r = rng(5);
    let key = random_bytes(&mut r, 16);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..64 {
        let mut plaintext = [0u8; vistrutah256::BLOCK_SIZE];
        r.fill(&mut plaintext);
        let ciphertext =
            vistrutah256::encrypt(&key, &plaintext, vistrutah256::ROUNDS_SHORT).unwrap();
        assert!(seen.insert(ciphertext), "collision among sampled ciphertexts");
    }
}

#[test]
fn v256_rejects_unsupported_key_size() {
    let plaintext = [0u8; vistrutah256::BLOCK_SIZE];
    let err =
        vistrutah256::encrypt(&[0u8; 24], &plaintext, vistrutah256::ROUNDS_SHORT).unwrap_err();
    assert_eq!(err, crate::error::Error::InvalidKeySize { got: 24 });
}

#[test]
fn v256_rejects_unsupported_round_count() {
    let plaintext = [0u8; vistrutah256::BLOCK_SIZE];
    let err = vistrutah256::encrypt(&[0u8; 16], &plaintext, 12).unwrap_err();
    assert_eq!(err, crate::error::Error::InvalidRoundCount { got: 12 });
}

#[test]
fn v512_rejects_round_count_valid_only_for_the_other_key_size() {
    let plaintext = [0u8; vistrutah512::BLOCK_SIZE];
    let err = vistrutah512::encrypt(&[0u8; 32], &plaintext, vistrutah512::ROUNDS_LONG_512KEY)
        .unwrap_err();
    assert_eq!(
        err,
        crate::error::Error::InvalidRoundCount {
            got: vistrutah512::ROUNDS_LONG_512KEY
        }
    );
}

#[test]
fn slice_wrappers_reject_wrong_length_buffers() {
    let key = [0u8; 16];
    let short = vec![0u8; vistrutah256::BLOCK_SIZE - 1];
    let err = vistrutah256::encrypt_slice(&key, &short, vistrutah256::ROUNDS_SHORT).unwrap_err();
    assert_eq!(
        err,
        crate::error::Error::BufferSizeMismatch {
            expected: vistrutah256::BLOCK_SIZE,
            got: vistrutah256::BLOCK_SIZE - 1
        }
    );
}

#[test]
fn slice_wrappers_round_trip() {
    let mut r = rng(6);
    let key = random_bytes(&mut r, 32);
    let plaintext = random_bytes(&mut r, vistrutah256::BLOCK_SIZE);

    let ciphertext =
        vistrutah256::encrypt_slice(&key, &plaintext, vistrutah256::ROUNDS_LONG).unwrap();
    let decrypted =
        vistrutah256::decrypt_slice(&key, &ciphertext, vistrutah256::ROUNDS_LONG).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn hex_encoded_key_round_trips() {
    let key = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let plaintext = hex::decode("00112233445566778899aabbccddeeff00112233445566778899aabbccddee")
        .unwrap();
    let plaintext: [u8; vistrutah256::BLOCK_SIZE] = plaintext.try_into().unwrap();

    let ciphertext = vistrutah256::encrypt(&key, &plaintext, vistrutah256::ROUNDS_LONG).unwrap();
    let decrypted = vistrutah256::decrypt(&key, &ciphertext, vistrutah256::ROUNDS_LONG).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn all_zero_key_and_plaintext_is_not_a_fixed_point() {
    let plaintext = [0u8; vistrutah256::BLOCK_SIZE];
    let key = [0u8; 16];
    let ciphertext = vistrutah256::encrypt(&key, &plaintext, vistrutah256::ROUNDS_LONG).unwrap();
    assert_ne!(ciphertext, plaintext);

    let plaintext512 = [0u8; vistrutah512::BLOCK_SIZE];
    let key512 = [0u8; 32];
    let ciphertext512 =
        vistrutah512::encrypt(&key512, &plaintext512, vistrutah512::ROUNDS_LONG_256KEY).unwrap();
    assert_ne!(ciphertext512, plaintext512);
}
