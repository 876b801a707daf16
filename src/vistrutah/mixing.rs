//! Cross-slice byte mixing between the two AES steps of a round.
//!
//! Resolves the spec's open question between a 4x4 word transpose and a
//! byte-interleave for Vistrutah-512: `vistrutah_512_arm.c` — the same ARM
//! backend the key schedule (rotation-based) is normative on — implements
//! byte-interleave, so this crate follows that convention for both widths.

/// In-place permutation of a 16-byte round-key slice by a fixed table,
/// `data[i] = data[perm[i]]` for each `i`. Matches the reference
/// `apply_permutation` helper used by the Vistrutah-256 key schedule.
pub fn apply_permutation(perm: &[u8; 16], data: &mut [u8; 16]) {
    let src = *data;
    for i in 0..16 {
        data[i] = src[perm[i] as usize];
    }
}

/// Cyclic left-rotation of a 16-byte round-key slice by `shift` positions,
/// matching the Vistrutah-512 key schedule's `rotate_bytes` helper.
pub fn rotate_bytes(data: &mut [u8; 16], shift: usize) {
    let src = *data;
    for i in 0..16 {
        data[i] = src[(i + shift) % 16];
    }
}

/// Byte-interleave mixing for the 256-bit state: `new[i] = old[2i]`,
/// `new[16+i] = old[2i+1]`, where `old` is the two 16-byte lanes
/// concatenated.
pub fn mix_256(s0: [u8; 16], s1: [u8; 16]) -> ([u8; 16], [u8; 16]) {
    let mut temp = [0u8; 32];
    temp[0..16].copy_from_slice(&s0);
    temp[16..32].copy_from_slice(&s1);

    let mut r0 = [0u8; 16];
    let mut r1 = [0u8; 16];
    for i in 0..16 {
        r0[i] = temp[2 * i];
        r1[i] = temp[2 * i + 1];
    }
    (r0, r1)
}

/// Inverse of [`mix_256`].
pub fn unmix_256(s0: [u8; 16], s1: [u8; 16]) -> ([u8; 16], [u8; 16]) {
    let mut result = [0u8; 32];
    for i in 0..16 {
        result[2 * i] = s0[i];
        result[2 * i + 1] = s1[i];
    }
    let mut r0 = [0u8; 16];
    let mut r1 = [0u8; 16];
    r0.copy_from_slice(&result[0..16]);
    r1.copy_from_slice(&result[16..32]);
    (r0, r1)
}

/// Byte-interleave mixing for the 512-bit state: `new[i] = old[4i]`,
/// `new[16+i] = old[4i+1]`, `new[32+i] = old[4i+2]`, `new[48+i] = old[4i+3]`,
/// where `old` is the four 16-byte lanes concatenated.
pub fn mix_512(s0: [u8; 16], s1: [u8; 16], s2: [u8; 16], s3: [u8; 16]) -> ([u8; 16], [u8; 16], [u8; 16], [u8; 16]) {
    let mut temp = [0u8; 64];
    temp[0..16].copy_from_slice(&s0);
    temp[16..32].copy_from_slice(&s1);
    temp[32..48].copy_from_slice(&s2);
    temp[48..64].copy_from_slice(&s3);

    let mut r0 = [0u8; 16];
    let mut r1 = [0u8; 16];
    let mut r2 = [0u8; 16];
    let mut r3 = [0u8; 16];
    for i in 0..16 {
        r0[i] = temp[4 * i];
        r1[i] = temp[4 * i + 1];
        r2[i] = temp[4 * i + 2];
        r3[i] = temp[4 * i + 3];
    }
    (r0, r1, r2, r3)
}

/// Inverse of [`mix_512`].
pub fn unmix_512(s0: [u8; 16], s1: [u8; 16], s2: [u8; 16], s3: [u8; 16]) -> ([u8; 16], [u8; 16], [u8; 16], [u8; 16]) {
    let mut result = [0u8; 64];
    for i in 0..16 {
        result[4 * i] = s0[i];
        result[4 * i + 1] = s1[i];
        result[4 * i + 2] = s2[i];
        result[4 * i + 3] = s3[i];
    }
    let mut r0 = [0u8; 16];
    let mut r1 = [0u8; 16];
    let mut r2 = [0u8; 16];
    let mut r3 = [0u8; 16];
    r0.copy_from_slice(&result[0..16]);
    r1.copy_from_slice(&result[16..32]);
    r2.copy_from_slice(&result[32..48]);
    r3.copy_from_slice(&result[48..64]);
    (r0, r1, r2, r3)
}
