use super::super::key_schedule::*;

#[test]
fn schedule_256_has_steps_plus_one_entries() {
    let s = schedule_256(&[0x42; 16], 5);
    assert_eq!(s.round_keys.len(), 6);
}

#[test]
fn schedule_512_has_steps_plus_one_entries() {
    let s = schedule_512(&[0x42; 32], 7);
    assert_eq!(s.round_keys.len(), 8);
}

#[test]
fn schedule_256_128_and_256_bit_keys_differ() {
    let a = schedule_256(&[0x01; 16], 5);
    let b = schedule_256(&[0x01; 32], 5);
    assert_ne!(a.fixed, b.fixed);
}

#[test]
fn schedule_512_duplicated_key_skips_shuffle() {
    let key32 = [0x7a; 32];
    let mut key64 = [0u8; 64];
    key64[0..32].copy_from_slice(&key32);
    key64[32..64].copy_from_slice(&key32);

    let from32 = schedule_512(&key32, 3);
    let from64_duplicate = schedule_512(&key64, 3);
    // A 32-byte key duplicated by the caller into 64 bytes must produce
    // a different fixed key than passing the 32-byte key directly,
    // because the 64-byte path always shuffles its upper half.
    assert_ne!(from32.fixed, from64_duplicate.fixed);
}
