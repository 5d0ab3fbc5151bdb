use blindstore_she::traits::SerDes;
use blindstore_she::{dot, encrypt_with_rng, sumprod, xor_many};
use blindstore_she::{Ciphertext, PlaintextShard, PrivateKey, PublicKey};
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn keypair(rng: &mut ChaCha8Rng, s: u32, l: u32) -> (PrivateKey, PublicKey) {
    let sk = PrivateKey::generate_with_rng(s, l, rng).unwrap();
    let pk = PublicKey::generate_with_rng(&sk, rng).unwrap();
    (sk, pk)
}

// Highlights the validation this crate performs ahead of any randomness draw or allocation.
#[test]
fn keygen_rejects_zero_parameters() {
    let mut rng = ChaCha8Rng::seed_from_u64(200);
    assert!(PrivateKey::generate_with_rng(0, 8, &mut rng).is_err());
    assert!(PrivateKey::generate_with_rng(60, 0, &mut rng).is_err());
    assert!(PrivateKey::generate_with_rng(0, 0, &mut rng).is_err());
}

#[test]
fn encrypt_rejects_keys_generated_under_different_parameters() {
    let mut rng = ChaCha8Rng::seed_from_u64(201);
    let sk1 = PrivateKey::generate_with_rng(60, 8, &mut rng).unwrap();
    let sk2 = PrivateKey::generate_with_rng(60, 4, &mut rng).unwrap();
    let pk2 = PublicKey::generate_with_rng(&sk2, &mut rng).unwrap();
    assert!(encrypt_with_rng(&pk2, &sk1, &[true; 8], &mut rng).is_err());
}

#[test]
fn xor_many_rejects_empty_and_ragged_input() {
    let mut rng = ChaCha8Rng::seed_from_u64(202);
    let (sk, pk) = keypair(&mut rng, 60, 8);
    let c1 = encrypt_with_rng(&pk, &sk, &[true; 8], &mut rng).unwrap();
    let c2 = encrypt_with_rng(&pk, &sk, &[true; 4], &mut rng).unwrap();
    assert!(xor_many(&pk, &[]).is_err());
    assert!(xor_many(&pk, &[c1, c2]).is_err());
}

#[test]
fn sumprod_rejects_shard_wider_than_ciphertext() {
    let mut rng = ChaCha8Rng::seed_from_u64(203);
    let (sk, pk) = keypair(&mut rng, 60, 8);
    let a = encrypt_with_rng(&pk, &sk, &[true; 4], &mut rng).unwrap();
    let mut shard = PlaintextShard::new(8);
    shard.append_row(&[true; 8]).unwrap();
    assert!(sumprod(&pk, &a, &shard).is_err());
}

#[test]
fn dot_rejects_ciphertext_shorter_than_entry_count() {
    let mut rng = ChaCha8Rng::seed_from_u64(204);
    let (sk, pk) = keypair(&mut rng, 60, 8);
    let g = encrypt_with_rng(&pk, &sk, &[true], &mut rng).unwrap();
    let mut shard = PlaintextShard::new(4);
    shard.append_row(&[true, false, true, false]).unwrap();
    shard.append_row(&[false, true, false, true]).unwrap();
    assert!(dot(&pk, &g, &shard).is_err());
}

#[test]
fn shard_rejects_mismatched_row_width_and_out_of_range_index() {
    let mut shard = PlaintextShard::new(8);
    assert!(shard.append_row(&[true, false]).is_err());
    shard.append_row(&[true; 8]).unwrap();
    assert!(shard.update_row(5, &[true; 8]).is_err());
}

#[test]
fn deserialization_rejects_malformed_text() {
    assert!(PrivateKey::from_text("not-enough-fields").is_err());
    assert!(PublicKey::from_text("too/many/fields/here/indeed").is_err());
    assert!(Ciphertext::from_text("missing-trailing-slash").is_err());
    assert!(PrivateKey::from_text("5/999/60/8").is_err());
}
