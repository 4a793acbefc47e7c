//! Known-answer tests from the published standards, and the harness that
//! checks an engine against them.
//!
//! Sources: RFC 1319 (MD2), RFC 1320 (MD4), RFC 1321 (MD5), FIPS 180-2 and
//! its change notice (SHA family), the RIPEMD-160 reference page, and the
//! OpenOffice.org digest tests for SHA-0.
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{Algorithm, DigestError, Engine, Result};

const A_TO_Z: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const NUMBERS: &[u8] =
    b"12345678901234567890123456789012345678901234567890123456789012345678901234567890";
const A_TO_Q: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
const A_TO_U: &[u8] = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";
const FILLER: &[u8] = &[b'a'; 1000];

/// The message side of a known answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Bytes(&'static [u8]),
    /// `chunk` fed through `count` separate updates.
    Repeated { chunk: &'static [u8], count: usize },
}

impl Message {
    pub fn feed(&self, engine: &mut Engine) {
        match *self {
            Message::Bytes(bytes) => engine.update(bytes),
            Message::Repeated { chunk, count } => {
                for _ in 0..count {
                    engine.update(chunk);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        match *self {
            Message::Bytes(bytes) => bytes.len(),
            Message::Repeated { chunk, count } => chunk.len() * count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownAnswer {
    pub algorithm: Algorithm,
    pub message: Message,
    pub expected: &'static str,
}

impl KnownAnswer {
    pub fn check(&self) -> Result<()> {
        let mut engine = Engine::new(self.algorithm);
        self.message.feed(&mut engine);
        compare(self.algorithm, &engine.finalize().to_hex(), self.expected)
    }
}

const fn kat(algorithm: Algorithm, message: &'static [u8], expected: &'static str) -> KnownAnswer {
    KnownAnswer {
        algorithm,
        message: Message::Bytes(message),
        expected,
    }
}

const fn million_a(algorithm: Algorithm, expected: &'static str) -> KnownAnswer {
    KnownAnswer {
        algorithm,
        message: Message::Repeated {
            chunk: FILLER,
            count: 1000,
        },
        expected,
    }
}

pub const KNOWN_ANSWERS: &[KnownAnswer] = &[
    kat(Algorithm::Md2, b"", "8350e5a3e24c153df2275c9f80692773"),
    kat(Algorithm::Md2, b"a", "32ec01ec4a6dac72c0ab96fb34c0b5d1"),
    kat(Algorithm::Md2, b"abc", "da853b0d3f88d99b30283a69e6ded6bb"),
    kat(Algorithm::Md2, b"message digest", "ab4f496bfb2a530b219ff33031fe06b0"),
    kat(Algorithm::Md2, A_TO_Z, "4e8ddff3650292ab5a4108c3aa47940b"),
    kat(Algorithm::Md2, ALPHANUMERIC, "da33def2a42df13975352846c30338cd"),
    kat(Algorithm::Md2, NUMBERS, "d5976f79d83d3a0dc9806c3c66f3efd8"),
    kat(Algorithm::Md4, b"", "31d6cfe0d16ae931b73c59d7e0c089c0"),
    kat(Algorithm::Md4, b"a", "bde52cb31de33e46245e05fbdbd6fb24"),
    kat(Algorithm::Md4, b"abc", "a448017aaf21d8525fc10ae87aa6729d"),
    kat(Algorithm::Md4, b"message digest", "d9130a8164549fe818874806e1c7014b"),
    kat(Algorithm::Md4, A_TO_Z, "d79e1c308aa5bbcdeea8ed63df412da9"),
    kat(Algorithm::Md4, ALPHANUMERIC, "043f8582f241db351ce627e153e7f0e4"),
    kat(Algorithm::Md4, NUMBERS, "e33b4ddc9c38f2199c3e7b164fcc0536"),
    kat(Algorithm::Md5, b"", "d41d8cd98f00b204e9800998ecf8427e"),
    kat(Algorithm::Md5, b"a", "0cc175b9c0f1b6a831c399e269772661"),
    kat(Algorithm::Md5, b"abc", "900150983cd24fb0d6963f7d28e17f72"),
    kat(Algorithm::Md5, b"message digest", "f96b697d7cb7938d525a2f31aaf161d0"),
    kat(Algorithm::Md5, A_TO_Z, "c3fcd3d76192e4007dfb496cca67e13b"),
    kat(Algorithm::Md5, ALPHANUMERIC, "d174ab98d277d9f5a5611c2c9f419d9f"),
    kat(Algorithm::Md5, NUMBERS, "57edf4a22be3c955ac49da2e2107b67a"),
    kat(Algorithm::Sha0, b"", "f96cea198ad1dd5617ac084a3d92c6107708c0ef"),
    kat(Algorithm::Sha0, b"abc", "0164b8a914cd2a5e74c4f7ff082c4d97f1edf880"),
    kat(Algorithm::Sha0, A_TO_Q, "d2516ee1acfa5baf33dfc1c471e438449ef134c8"),
    million_a(Algorithm::Sha0, "3232affa48628a26653b5aaa44541fd90d690603"),
    kat(Algorithm::Sha1, b"", "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
    kat(Algorithm::Sha1, b"a", "86f7e437faa5a7fce15d1ddcb9eaeaea377667b8"),
    kat(Algorithm::Sha1, b"abc", "a9993e364706816aba3e25717850c26c9cd0d89d"),
    kat(Algorithm::Sha1, A_TO_Z, "32d10c7b8cf96570ca04ce37f2a19d84240d3a89"),
    kat(Algorithm::Sha1, A_TO_Q, "84983e441c3bd26ebaae4aa1f95129e5e54670f1"),
    million_a(Algorithm::Sha1, "34aa973cd4c4daa4f61eeb2bdbad27316534016f"),
    kat(Algorithm::Sha224, b"", "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"),
    kat(Algorithm::Sha224, b"abc", "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"),
    kat(Algorithm::Sha224, A_TO_Q, "75388b16512776cc5dba5da1fd890150b0c6455cb4f58b1952522525"),
    million_a(Algorithm::Sha224, "20794655980c91d8bbb4c1ea97618a4bf03f42581948b2ee4ee7ad67"),
    kat(
        Algorithm::Sha256,
        b"",
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    ),
    kat(
        Algorithm::Sha256,
        b"abc",
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    ),
    kat(
        Algorithm::Sha256,
        A_TO_Q,
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    ),
    million_a(
        Algorithm::Sha256,
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
    ),
    kat(
        Algorithm::Sha384,
        b"",
        "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b",
    ),
    kat(
        Algorithm::Sha384,
        b"abc",
        "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7",
    ),
    kat(
        Algorithm::Sha384,
        A_TO_U,
        "09330c33f71147e83d192fc782cd1b4753111b173b3b05d22fa08086e3b0f712fcc7c71a557e2db966c3e9fa91746039",
    ),
    kat(
        Algorithm::Sha384,
        A_TO_Q,
        "3391fdddfc8dc7393707a65b1b4709397cf8b1d162af05abfe8f450de5f36bc6b0455a8520bc4e6f5fe95b1fe3c8452b",
    ),
    million_a(
        Algorithm::Sha384,
        "9d0e1809716474cb086e834e310a4a1ced149e9c00f248527972cec5704c2a5b07b8b3dc38ecc4ebae97ddd87f3d8985",
    ),
    kat(
        Algorithm::Sha512,
        b"",
        "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
    ),
    kat(
        Algorithm::Sha512,
        b"abc",
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
    ),
    kat(
        Algorithm::Sha512,
        A_TO_U,
        "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909",
    ),
    kat(
        Algorithm::Sha512,
        A_TO_Q,
        "204a8fc6dda82f0a0ced7beb8e08a41657c16ef468b228a8279be331a703c33596fd15c13b1b07f9aa1d3bea57789ca031ad85c7a71dd70354ec631238ca3445",
    ),
    million_a(
        Algorithm::Sha512,
        "e718483d0ce769644e2e42c7bc15b4638e1f98b13b2044285632a803afa973ebde0ff244877ea60a4cb0432ce577c31beb009c5c2c49aa2e4eadb217ad8cc09b",
    ),
    kat(Algorithm::Ripemd160, b"", "9c1185a5c5e9fc54612808977ee8f548b2258d31"),
    kat(Algorithm::Ripemd160, b"a", "0bdc9d2d256b3ee9daae347be6f4dc835a467ffe"),
    kat(Algorithm::Ripemd160, b"abc", "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc"),
    kat(Algorithm::Ripemd160, b"message digest", "5d0689ef49d2fae572b881b123a85ffa21595f36"),
    kat(Algorithm::Ripemd160, A_TO_Z, "f71c27109c692c1b56bbdceb5b9d2865b3708dbc"),
    kat(Algorithm::Ripemd160, A_TO_Q, "12a053384a9c0c88e405a06c27dcf49ada62eb2b"),
    kat(Algorithm::Ripemd160, ALPHANUMERIC, "b0e20b6e3116640286ed3a87a5713079b21f5189"),
    kat(Algorithm::Ripemd160, NUMBERS, "9b752e45573d4b39f4dbd3323cab82bf63326bfb"),
    million_a(Algorithm::Ripemd160, "52783243c1697bdbe16d37f97f68f08325dc1528"),
    KnownAnswer {
        algorithm: Algorithm::Ripemd160,
        message: Message::Repeated {
            chunk: b"1234567890",
            count: 8,
        },
        expected: "9b752e45573d4b39f4dbd3323cab82bf63326bfb",
    },
];

/// Result of a check that may not be runnable in this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Skipped,
}

pub fn known_answers(algorithm: Algorithm) -> impl Iterator<Item = &'static KnownAnswer> {
    KNOWN_ANSWERS
        .iter()
        .filter(move |answer| answer.algorithm == algorithm)
}

/// Hash `message` and compare against a hex digest. Case-insensitive.
pub fn verify(algorithm: Algorithm, message: &[u8], expected_hex: &str) -> Result<()> {
    let actual = crate::hash(algorithm, message).to_hex();
    compare(algorithm, &actual, expected_hex)
}

/// Like [`verify`], but selecting the algorithm by name. Names this build
/// cannot hash are reported as skipped rather than failed.
pub fn verify_named(name: &str, message: &[u8], expected_hex: &str) -> Result<Outcome> {
    let algorithm = match Algorithm::from_name(name) {
        Ok(algorithm) => algorithm,
        Err(_) => {
            warn!(name, "digest algorithm not supported, skipping");
            return Ok(Outcome::Skipped);
        }
    };
    verify(algorithm, message, expected_hex)?;
    Ok(Outcome::Passed)
}

/// Run every known answer, in parallel. Stops at the first mismatch.
pub fn self_test() -> Result<()> {
    KNOWN_ANSWERS.par_iter().try_for_each(KnownAnswer::check)
}

fn compare(algorithm: Algorithm, actual: &str, expected: &str) -> Result<()> {
    if actual.eq_ignore_ascii_case(expected.trim()) {
        debug!(%algorithm, digest = actual, "known answer matched");
        Ok(())
    } else {
        Err(DigestError::Mismatch {
            algorithm,
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}
