use super::super::constants::P4;
use super::super::mixing::*;

fn sample16(seed: u8) -> [u8; 16] {
    let mut a = [0u8; 16];
    for i in 0..16 {
        a[i] = seed.wrapping_mul(16).wrapping_add(i as u8);
    }
    a
}

#[test]
fn mix_256_round_trips() {
    let (a, b) = (sample16(1), sample16(2));
    let (m0, m1) = mix_256(a, b);
    assert_ne!((m0, m1), (a, b));
    let (u0, u1) = unmix_256(m0, m1);
    assert_eq!((u0, u1), (a, b));
}

#[test]
fn mix_512_round_trips() {
    let (a, b, c, d) = (sample16(1), sample16(2), sample16(3), sample16(4));
    let (m0, m1, m2, m3) = mix_512(a, b, c, d);
    assert_ne!((m0, m1, m2, m3), (a, b, c, d));
    let (u0, u1, u2, u3) = unmix_512(m0, m1, m2, m3);
    assert_eq!((u0, u1, u2, u3), (a, b, c, d));
}

#[test]
fn apply_permutation_matches_p4() {
    let mut data = sample16(5);
    let original = data;
    apply_permutation(&P4, &mut data);
    for i in 0..16 {
        assert_eq!(data[i], original[P4[i] as usize]);
    }
}

#[test]
fn rotate_bytes_is_cyclic() {
    let mut data: [u8; 16] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];
    rotate_bytes(&mut data, 5);
    assert_eq!(data, [5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0, 1, 2, 3, 4]);
    rotate_bytes(&mut data, 11);
    assert_eq!(data, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]);
}
