use super::super::soft;
use super::super::AesPrimitive;

#[test]
fn soft_round_is_deterministic_and_nontrivial() {
    let state = soft::Soft::from_block([0x11; 16]);
    let key = soft::Soft::from_block([0x22; 16]);
    let a = state.round(key);
    let b = state.round(key);
    assert_eq!(a.to_block(), b.to_block());
    assert_ne!(a.to_block(), state.to_block());
    assert_ne!(a.to_block(), key.to_block());
}

#[test]
fn xor_is_its_own_inverse() {
    let a = soft::Soft::from_block([0xAA; 16]);
    let b = soft::Soft::from_block([0x55; 16]);
    assert_eq!(a.xor(b).xor(b).to_block(), a.to_block());
}
