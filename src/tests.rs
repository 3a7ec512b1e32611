//======================================================================
// Blowfish II Test Suite
//======================================================================
#![cfg(test)]

use crate::consts::{MAX_KEY_BYTES, P, S, SBOX_COUNT, SBOX_ENTRIES, SUBKEYS};
use crate::{Block, Blowfish2, Direction, Error, Key};
use cipher::{AlgorithmName, BlockDecrypt, BlockEncrypt, InvalidLength, KeyInit};
use proptest::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};

const PLAIN_A: (u64, u64) = (0x0102030405060708, 0x0910111213141516);

fn same_state(a: &Blowfish2, b: &Blowfish2) -> bool {
    a.p == b.p && a.s == b.s
}

fn differing_entries(a: &Blowfish2, b: &Blowfish2) -> (usize, usize) {
    let p = a.p.iter().zip(&b.p).filter(|(x, y)| x != y).count();
    let s = a
        .s
        .iter()
        .flatten()
        .zip(b.s.iter().flatten())
        .filter(|(x, y)| x != y)
        .count();
    (p, s)
}

//======================================================================
// Known-Answer Tests
//======================================================================

/// Published Blowfish II conformance vectors.
///
/// These only hold with the published seed tables; see DESIGN.md for the
/// status of `consts::P` and `consts::S`.
#[test]
#[ignore = "requires the published Blowfish II seed tables"]
fn published_vectors() {
    let cases: [(&[u8], (u64, u64), (u64, u64)); 3] = [
        (b"TESTKEY", (1, 2), (0x7B2B9DE71D1B1C62, 0x91C230351177BEE8)),
        (b"A", PLAIN_A, (0xCA38165603F9915C, 0x61F0776A0F55E807)),
        (b"B", PLAIN_A, (0xD07690A78B109983, 0x8DDF85826F2366C2)),
    ];
    for (key, plain, expected) in cases {
        let cipher = Blowfish2::with_key(key).unwrap();
        let ct = cipher.encrypt(plain.0, plain.1);
        assert_eq!(ct, expected, "ciphertext for key {:?}", key);
        assert_eq!(cipher.decrypt(ct.0, ct.1), plain);
    }
}

#[test]
fn known_answers() {
    let cases: [(&[u8], (u64, u64), (u64, u64)); 2] = [
        (b"ab", (0, 0), (0xD053004F92E7EBB4, 0x006819F87A0B9452)),
        (b"abab", (0, 0), (0xD053004F92E7EBB4, 0x006819F87A0B9452)),
    ];
    for (key, plain, expected) in cases {
        let cipher = Blowfish2::with_key(key).unwrap();
        let ct = cipher.encrypt(plain.0, plain.1);
        assert_eq!(ct, expected, "ciphertext for key {:?}", key);
        assert_eq!(cipher.decrypt(ct.0, ct.1), plain, "plaintext for key {:?}", key);
    }
}

#[test]
fn known_answer_full_length_key() {
    let key: Vec<u8> = (0..MAX_KEY_BYTES).map(|i| i as u8).collect();
    let cipher = Blowfish2::with_key(&key).unwrap();
    assert_eq!(cipher.encrypt(0, 0), (0x6F3ECE4DB410CF88, 0xAD2EF66A397C689B));
}

#[test]
fn key_schedule_known_state() {
    let cipher = Blowfish2::with_key(b"TESTKEY").unwrap();
    assert_eq!(cipher.p[0], 0xD4DCF33E6016DB57);
    assert_eq!(cipher.p[SUBKEYS - 1], 0x93209073D446CB96);
    assert_eq!(cipher.s[0][0], 0x20246FF2B0E68D62);
    assert_eq!(cipher.s[SBOX_COUNT - 1][SBOX_ENTRIES - 1], 0x4FEE51170CE0ABCB);
}

#[test]
fn seed_tables_start_with_pi() {
    assert_eq!(P[0], 0x243f6a8885a308d3);
    assert_eq!(P[1], 0x13198a2e03707344);
    // Classic Blowfish S-boxes start nine 64-bit groups into π.
    assert_eq!(P[9], 0xd1310ba698dfb5ac);
}

//======================================================================
// Key Schedule Properties
//======================================================================

#[test]
fn key_repeats_cyclically() {
    let base = Blowfish2::with_key(b"TESTKEY").unwrap();
    for n in 2..=5 {
        let repeated = b"TESTKEY".repeat(n);
        let cipher = Blowfish2::with_key(&repeated).unwrap();
        assert!(same_state(&base, &cipher), "TESTKEY x{} diverged", n);
    }

    let one = Blowfish2::with_key(b"A").unwrap();
    let eight = Blowfish2::with_key(b"AAAAAAAA").unwrap();
    assert!(same_state(&one, &eight));
}

#[test]
fn rekey_matches_fresh_context() {
    let mut cipher = Blowfish2::with_key(b"first key").unwrap();
    cipher.set_key(b"second key").unwrap();
    let fresh = Blowfish2::with_key(b"second key").unwrap();
    assert!(same_state(&cipher, &fresh));

    cipher.set_key(b"first key").unwrap();
    let original = Blowfish2::with_key(b"first key").unwrap();
    assert!(same_state(&cipher, &original));
}

#[test]
fn rejected_rekey_leaves_context_untouched() {
    let mut cipher = Blowfish2::with_key(b"kept").unwrap();
    let before = cipher.clone();
    assert_eq!(cipher.set_key(&[]), Err(Error::InvalidKeyLength { len: 0 }));
    assert!(same_state(&cipher, &before));
}

#[test]
fn one_bit_key_change_rewrites_schedule() {
    let mut key = *b"avalanche-key";
    let a = Blowfish2::with_key(&key).unwrap();
    key[4] ^= 0x01;
    let b = Blowfish2::with_key(&key).unwrap();

    let (p_diff, s_diff) = differing_entries(&a, &b);
    assert!(p_diff >= SUBKEYS - 2, "only {} subkeys changed", p_diff);
    assert!(
        s_diff >= SBOX_COUNT * SBOX_ENTRIES - 16,
        "only {} table entries changed",
        s_diff
    );

    let (l1, r1) = a.encrypt(PLAIN_A.0, PLAIN_A.1);
    let (l2, r2) = b.encrypt(PLAIN_A.0, PLAIN_A.1);
    let flipped = (l1 ^ l2).count_ones() + (r1 ^ r2).count_ones();
    assert!((32..=96).contains(&flipped), "{} ciphertext bits flipped", flipped);
}

#[test]
fn schedule_replaces_every_seed_entry() {
    let cipher = Blowfish2::with_key(b"seed").unwrap();
    let seeds = Blowfish2::init_state();
    let (p_diff, s_diff) = differing_entries(&cipher, &seeds);
    assert_eq!(p_diff, SUBKEYS);
    assert_eq!(s_diff, SBOX_COUNT * SBOX_ENTRIES);
    assert_eq!(seeds.s, S);
}

//======================================================================
// Key Length Boundary
//======================================================================

#[test]
fn key_length_bounds() {
    assert_eq!(
        Blowfish2::with_key(&[]).err(),
        Some(Error::InvalidKeyLength { len: 0 })
    );
    let too_long = [0x5a; MAX_KEY_BYTES + 1];
    assert_eq!(
        Blowfish2::with_key(&too_long).err(),
        Some(Error::InvalidKeyLength { len: MAX_KEY_BYTES + 1 })
    );
    assert!(Blowfish2::with_key(&[0x5a]).is_ok());
    assert!(Blowfish2::with_key(&too_long[..MAX_KEY_BYTES]).is_ok());
}

#[test]
fn key_init_trait_bounds() {
    assert_eq!(Blowfish2::new_from_slice(&[]).err(), Some(InvalidLength));
    assert_eq!(
        Blowfish2::new_from_slice(&[1u8; MAX_KEY_BYTES + 1]).err(),
        Some(InvalidLength)
    );

    let full = [7u8; MAX_KEY_BYTES];
    let via_trait = <Blowfish2 as KeyInit>::new(&Key::clone_from_slice(&full));
    let via_slice = Blowfish2::with_key(&full).unwrap();
    assert!(same_state(&via_trait, &via_slice));
}

#[test]
fn error_message_names_the_range() {
    let err = Error::InvalidKeyLength { len: 600 };
    assert_eq!(err.to_string(), "key length 600 is outside 1..=528 bytes");
}

//======================================================================
// Block Transform
//======================================================================

#[test]
fn transform_matches_encrypt_and_decrypt() {
    let cipher = Blowfish2::with_key(b"direction").unwrap();
    let (mut l, mut r) = PLAIN_A;

    cipher.transform(Direction::Encrypt, &mut l, &mut r);
    assert_eq!((l, r), cipher.encrypt(PLAIN_A.0, PLAIN_A.1));

    cipher.transform(Direction::Decrypt, &mut l, &mut r);
    assert_eq!((l, r), PLAIN_A);

    let mut words = [PLAIN_A.0, PLAIN_A.1];
    cipher.encrypt_words(&mut words);
    assert_eq!((words[0], words[1]), cipher.encrypt(PLAIN_A.0, PLAIN_A.1));
    cipher.decrypt_words(&mut words);
    assert_eq!(words, [PLAIN_A.0, PLAIN_A.1]);
}

#[test]
fn encryption_is_deterministic() {
    let a = Blowfish2::with_key(b"determinism").unwrap();
    let b = Blowfish2::with_key(b"determinism").unwrap();
    for i in 0..16u64 {
        let block = (i, !i);
        assert_eq!(a.encrypt(block.0, block.1), b.encrypt(block.0, block.1));
        assert_eq!(a.encrypt(block.0, block.1), a.encrypt(block.0, block.1));
    }
}

#[test]
fn byte_api_uses_big_endian_halves() {
    let cipher = Blowfish2::with_key(b"TESTKEY").unwrap();
    let mut bytes = [0u8; 16];
    bytes[..8].copy_from_slice(&PLAIN_A.0.to_be_bytes());
    bytes[8..].copy_from_slice(&PLAIN_A.1.to_be_bytes());

    let mut block = Block::clone_from_slice(&bytes);
    cipher.encrypt_block(&mut block);

    let (l, r) = cipher.encrypt(PLAIN_A.0, PLAIN_A.1);
    assert_eq!(&block[..8], &l.to_be_bytes());
    assert_eq!(&block[8..], &r.to_be_bytes());

    cipher.decrypt_block(&mut block);
    assert_eq!(block.as_slice(), &bytes);
}

#[test]
fn byte_api_multi_block_roundtrip() {
    let cipher = Blowfish2::new_from_slice(b"several blocks").unwrap();
    let original: Vec<Block> = (0u8..8).map(|i| Block::clone_from_slice(&[i; 16])).collect();
    let mut blocks = original.clone();

    cipher.encrypt_blocks(&mut blocks);
    assert_ne!(blocks, original);
    // Identical plaintext blocks give identical ciphertext blocks.
    let mut twin = original[3].clone();
    cipher.encrypt_block(&mut twin);
    assert_eq!(twin, blocks[3]);

    cipher.decrypt_blocks(&mut blocks);
    assert_eq!(blocks, original);
}

#[test]
fn random_keys_roundtrip() {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);
    for len in [1usize, 7, 8, 9, 56, 64, 255, MAX_KEY_BYTES] {
        let mut key = vec![0u8; len];
        rng.fill_bytes(&mut key);
        let cipher = Blowfish2::with_key(&key).unwrap();
        for _ in 0..32 {
            let (l, r) = (rng.next_u64(), rng.next_u64());
            let (cl, cr) = cipher.encrypt(l, r);
            assert_eq!(cipher.decrypt(cl, cr), (l, r), "key length {}", len);
        }
    }
}

#[test]
fn shared_context_across_threads() {
    let cipher = Blowfish2::with_key(b"shared").unwrap();
    let expected: Vec<(u64, u64)> = (0..4u64).map(|i| cipher.encrypt(i, i << 1)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4u64)
            .map(|i| {
                let cipher = &cipher;
                scope.spawn(move || cipher.encrypt(i, i << 1))
            })
            .collect();
        for (handle, want) in handles.into_iter().zip(&expected) {
            assert_eq!(handle.join().unwrap(), *want);
        }
    });
}

#[test]
fn debug_and_name_hide_key_material() {
    let cipher = Blowfish2::with_key(b"secret").unwrap();
    assert_eq!(format!("{:?}", cipher), "Blowfish2 { ... }");

    struct Name;
    impl ::core::fmt::Display for Name {
        fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            Blowfish2::write_alg_name(f)
        }
    }
    assert_eq!(Name.to_string(), "Blowfish2");
}

//======================================================================
// Property Tests
//======================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn decrypt_inverts_encrypt(
        key in prop::collection::vec(any::<u8>(), 1..=64),
        l in any::<u64>(),
        r in any::<u64>(),
    ) {
        let cipher = Blowfish2::with_key(&key).unwrap();
        let (cl, cr) = cipher.encrypt(l, r);
        prop_assert_eq!(cipher.decrypt(cl, cr), (l, r));
    }

    #[test]
    fn repeated_key_is_equivalent(
        key in prop::collection::vec(any::<u8>(), 1..=32),
        times in 2usize..=4,
        l in any::<u64>(),
        r in any::<u64>(),
    ) {
        let base = Blowfish2::with_key(&key).unwrap();
        let repeated = Blowfish2::with_key(&key.repeat(times)).unwrap();
        prop_assert_eq!(base.encrypt(l, r), repeated.encrypt(l, r));
    }
}
