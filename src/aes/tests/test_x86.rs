use super::super::soft::Soft;
use super::super::x86::Aesni;
use super::super::AesPrimitive;

#[test]
fn round_matches_soft_backend() {
    let block = [0x00u8; 16];
    let key = [0x01u8; 16];
    let hw = Aesni::from_block(block).round(Aesni::from_block(key));
    let sw = Soft::from_block(block).round(Soft::from_block(key));
    assert_eq!(hw.to_block(), sw.to_block());
}

#[test]
fn round_last_matches_soft_backend() {
    let block = [0x42u8; 16];
    let key = [0x99u8; 16];
    let hw = Aesni::from_block(block).round_last(Aesni::from_block(key));
    let sw = Soft::from_block(block).round_last(Soft::from_block(key));
    assert_eq!(hw.to_block(), sw.to_block());
}

#[test]
fn round_inv_matches_soft_backend() {
    let block = [0x77u8; 16];
    let key = [0x13u8; 16];
    let hw = Aesni::from_block(block).round_inv(Aesni::from_block(key));
    let sw = Soft::from_block(block).round_inv(Soft::from_block(key));
    assert_eq!(hw.to_block(), sw.to_block());
}

#[test]
fn inv_mix_columns_matches_soft_backend() {
    let block = [0x5au8; 16];
    let hw = Aesni::from_block(block).inv_mix_columns();
    let sw = Soft::from_block(block).inv_mix_columns();
    assert_eq!(hw.to_block(), sw.to_block());
}
