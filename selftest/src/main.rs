//======================================================================
// selftest/src/main.rs
// Runs the Blowfish II conformance vectors and reports pass/fail.
//======================================================================

use anyhow::{bail, Context, Result};
use blowfish2::cipher::{BlockDecrypt, BlockEncrypt};
use blowfish2::{Block, Blowfish2};
use clap::Parser;
use env_logger::Env;
use log::{debug, error, info};

#[derive(Parser)]
#[command(
    name = "blowfish2-selftest",
    version,
    about = "Blowfish II self-test: 128-bit block, 64 rounds, keys up to 4224 bits"
)]
struct Cli {
    /// Log key-schedule and byte-level details.
    #[arg(long)]
    debug: bool,
}

struct Vector {
    key: &'static [u8],
    plain: (u64, u64),
    cipher: (u64, u64),
}

const VECTORS: [Vector; 3] = [
    Vector {
        key: b"TESTKEY",
        plain: (0x0000000000000001, 0x0000000000000002),
        cipher: (0x7B2B9DE71D1B1C62, 0x91C230351177BEE8),
    },
    Vector {
        key: b"A",
        plain: (0x0102030405060708, 0x0910111213141516),
        cipher: (0xCA38165603F9915C, 0x61F0776A0F55E807),
    },
    Vector {
        key: b"B",
        plain: (0x0102030405060708, 0x0910111213141516),
        cipher: (0xD07690A78B109983, 0x8DDF85826F2366C2),
    },
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let mut failures = 0;
    for (index, vector) in VECTORS.iter().enumerate() {
        match check(vector) {
            Ok(()) => info!("vector {}: ok", index + 1),
            Err(err) => {
                error!("vector {}: {:#}", index + 1, err);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} vectors failed", failures, VECTORS.len());
    }
    info!("all {} vectors passed", VECTORS.len());
    Ok(())
}

fn check(vector: &Vector) -> Result<()> {
    let cipher = Blowfish2::with_key(vector.key)
        .with_context(|| format!("keying with {:?}", String::from_utf8_lossy(vector.key)))?;
    let (pl, pr) = vector.plain;

    info!(
        "key {:?}, plaintext {:016X} {:016X}",
        String::from_utf8_lossy(vector.key),
        pl,
        pr
    );

    let (cl, cr) = cipher.encrypt(pl, pr);
    info!("ciphertext {:016X} {:016X}", cl, cr);

    if cipher.decrypt(cl, cr) != vector.plain {
        bail!("decryption did not restore the plaintext");
    }
    check_byte_api(&cipher, vector.plain, (cl, cr))?;

    if (cl, cr) != vector.cipher {
        bail!(
            "encryption mismatch: expected {:016X} {:016X}",
            vector.cipher.0,
            vector.cipher.1
        );
    }
    Ok(())
}

/// The `cipher` trait path must agree with the word API.
fn check_byte_api(cipher: &Blowfish2, plain: (u64, u64), expected: (u64, u64)) -> Result<()> {
    let mut block = Block::default();
    block[..8].copy_from_slice(&plain.0.to_be_bytes());
    block[8..].copy_from_slice(&plain.1.to_be_bytes());

    cipher.encrypt_block(&mut block);
    debug!("byte api ciphertext {}", hex::encode(block));
    if block[..8] != expected.0.to_be_bytes() || block[8..] != expected.1.to_be_bytes() {
        bail!("byte api disagrees with word api");
    }

    cipher.decrypt_block(&mut block);
    if block[..8] != plain.0.to_be_bytes() || block[8..] != plain.1.to_be_bytes() {
        bail!("byte api decryption did not restore the plaintext");
    }
    Ok(())
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default));
    builder.format_timestamp(None);
    builder.init();
}
