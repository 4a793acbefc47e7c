use tracing::{debug, trace};

use crate::algorithm::{AlgorithmSpec, ByteOrder, Padding, MAX_BLOCK_SIZE};
use crate::block::BlockBuffer;
use crate::chaining::ChainingValue;
use crate::{Algorithm, Digest, Result};

/// Incremental digest state for a single algorithm.
///
/// Feed any number of [`update`](Engine::update) calls, read the digest with
/// [`finalize`](Engine::finalize) and [`clear`](Engine::clear) before hashing
/// the next message. An engine is a sequential accumulator; independent
/// engines share nothing and can be driven from separate threads.
#[derive(Debug, Clone)]
pub struct Engine {
    spec: &'static AlgorithmSpec,
    state: ChainingValue,
    buffer: BlockBuffer,
    message_len: u128,
}

impl Engine {
    pub fn new(algorithm: Algorithm) -> Self {
        let spec = algorithm.spec();
        Self {
            spec,
            state: spec.initial,
            buffer: BlockBuffer::new(spec.block_size),
            message_len: 0,
        }
    }

    /// Construct from an algorithm name such as `"sha256"`.
    pub fn by_name(name: &str) -> Result<Self> {
        let algorithm = Algorithm::from_name(name).map_err(|e| {
            tracing::warn!(name, "requested digest algorithm is not supported");
            e
        })?;
        debug!(%algorithm, "created digest engine");
        Ok(Self::new(algorithm))
    }

    pub fn algorithm(&self) -> Algorithm {
        self.spec.algorithm
    }

    pub fn spec(&self) -> &'static AlgorithmSpec {
        self.spec
    }

    /// Number of bytes passed to `update` since construction or the last
    /// `clear`.
    pub fn message_len(&self) -> u128 {
        self.message_len
    }

    pub fn update(&mut self, message: &[u8]) {
        if message.is_empty() {
            return;
        }
        // Lengths past 2^128 bytes wrap; no realistic stream gets there.
        self.message_len = self.message_len.wrapping_add(message.len() as u128);
        let state = &mut self.state;
        self.buffer.update(message, |block| state.compress(block));
    }

    /// Pad and compress a scratch copy of the state, returning the digest.
    /// The engine itself is left untouched.
    pub fn finalize(&self) -> Digest {
        let mut state = self.state;
        let mut buffer = self.buffer.clone();
        let block_size = self.spec.block_size;

        let mut padding = [0u8; 2 * MAX_BLOCK_SIZE];
        let padding_len = match self.spec.padding {
            Padding::Checksum => {
                let pad = block_size - buffer.len();
                padding[..pad].fill(pad as u8);
                pad
            }
            Padding::BitLength { width, order } => {
                let zeros = (2 * block_size - buffer.len() - 1 - width) % block_size;
                padding[0] = 0x80;
                let length = encode_bit_length(self.message_len, width, order);
                padding[1 + zeros..1 + zeros + width].copy_from_slice(&length[..width]);
                1 + zeros + width
            }
        };
        buffer.update(&padding[..padding_len], |block| state.compress(block));
        debug_assert!(buffer.is_empty());

        if self.spec.padding == Padding::Checksum {
            state.absorb_checksum();
        }

        trace!(algorithm = %self.spec.algorithm, message_len = %self.message_len, "finalized digest");
        Digest::new(state.to_bytes(self.spec.word_order), self.spec.digest_size)
    }

    /// Restore the freshly constructed state.
    pub fn clear(&mut self) {
        self.state = self.spec.initial;
        self.buffer.clear();
        self.message_len = 0;
        debug!(algorithm = %self.spec.algorithm, "cleared digest engine");
    }
}

/// The message length in bits, as the `width`-byte field appended by the
/// padding. Bits beyond the field width are dropped.
fn encode_bit_length(message_len: u128, width: usize, order: ByteOrder) -> [u8; 16] {
    let bit_len = message_len.wrapping_mul(8);
    let mut field = [0u8; 16];
    match order {
        ByteOrder::Big => field[..width].copy_from_slice(&bit_len.to_be_bytes()[16 - width..]),
        ByteOrder::Little => field[..width].copy_from_slice(&bit_len.to_le_bytes()[..width]),
    }
    field
}

/// Hash `message` in one call.
pub fn hash(algorithm: Algorithm, message: &[u8]) -> Digest {
    let mut engine = Engine::new(algorithm);
    engine.update(message);
    engine.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use strum::IntoEnumIterator;

    #[rstest]
    #[case(Algorithm::Md2, "8350e5a3e24c153df2275c9f80692773")]
    #[case(Algorithm::Md4, "31d6cfe0d16ae931b73c59d7e0c089c0")]
    #[case(Algorithm::Md5, "d41d8cd98f00b204e9800998ecf8427e")]
    #[case(Algorithm::Sha0, "f96cea198ad1dd5617ac084a3d92c6107708c0ef")]
    #[case(Algorithm::Sha1, "da39a3ee5e6b4b0d3255bfef95601890afd80709")]
    #[case(
        Algorithm::Sha224,
        "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"
    )]
    #[case(
        Algorithm::Sha256,
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    )]
    #[case(
        Algorithm::Sha384,
        "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b"
    )]
    #[case(
        Algorithm::Sha512,
        "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
    )]
    #[case(Algorithm::Ripemd160, "9c1185a5c5e9fc54612808977ee8f548b2258d31")]
    fn empty_message_hashes_to_published_digest(
        #[case] algorithm: Algorithm,
        #[case] expected: &str,
    ) {
        assert_eq!(hash(algorithm, b"").to_hex(), expected);
        assert_eq!(Engine::new(algorithm).finalize().to_hex(), expected);
    }

    #[test]
    fn split_updates_match_single_update() {
        let mut engine = Engine::new(Algorithm::Md5);
        engine.update(b"a");
        engine.update(b"b");
        engine.update(b"c");

        let expected = "900150983cd24fb0d6963f7d28e17f72";
        assert_eq!(engine.finalize().to_hex(), expected);
        assert_eq!(hash(Algorithm::Md5, b"abc").to_hex(), expected);
    }

    #[rstest]
    #[case(Algorithm::Sha0, "3232affa48628a26653b5aaa44541fd90d690603")]
    #[case(Algorithm::Sha1, "34aa973cd4c4daa4f61eeb2bdbad27316534016f")]
    #[case(
        Algorithm::Sha224,
        "20794655980c91d8bbb4c1ea97618a4bf03f42581948b2ee4ee7ad67"
    )]
    #[case(
        Algorithm::Sha256,
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    )]
    #[case(
        Algorithm::Sha384,
        "9d0e1809716474cb086e834e310a4a1ced149e9c00f248527972cec5704c2a5b07b8b3dc38ecc4ebae97ddd87f3d8985"
    )]
    #[case(
        Algorithm::Sha512,
        "e718483d0ce769644e2e42c7bc15b4638e1f98b13b2044285632a803afa973ebde0ff244877ea60a4cb0432ce577c31beb009c5c2c49aa2e4eadb217ad8cc09b"
    )]
    #[case(Algorithm::Ripemd160, "52783243c1697bdbe16d37f97f68f08325dc1528")]
    fn million_a_survives_clear_and_reuse(#[case] algorithm: Algorithm, #[case] expected: &str) {
        let filler = [b'a'; 1000];
        let mut engine = Engine::new(algorithm);

        for _ in 0..1000 {
            engine.update(&filler);
        }
        assert_eq!(engine.message_len(), 1_000_000);
        assert_eq!(engine.finalize().to_hex(), expected);

        engine.clear();
        for _ in 0..1000 {
            engine.update(&filler);
        }
        assert_eq!(engine.finalize().to_hex(), expected);
    }

    #[test]
    fn clear_resets_to_a_fresh_engine() {
        for algorithm in Algorithm::iter() {
            let mut engine = Engine::new(algorithm);
            engine.update(&[0x5A; 300]);

            engine.clear();

            assert_eq!(engine.message_len(), 0);
            assert_eq!(engine.finalize(), hash(algorithm, b""), "{algorithm}");
            engine.update(b"abc");
            assert_eq!(engine.finalize(), hash(algorithm, b"abc"), "{algorithm}");
        }
    }

    #[test]
    fn ripemd160_reuse_with_ten_byte_chunks() {
        let mut engine = Engine::new(Algorithm::Ripemd160);
        engine.update(b"stale input");
        engine.clear();

        for _ in 0..8 {
            engine.update(b"1234567890");
        }

        assert_eq!(
            engine.finalize().to_hex(),
            "9b752e45573d4b39f4dbd3323cab82bf63326bfb"
        );
    }

    #[test]
    fn finalize_does_not_mutate_the_engine() {
        for algorithm in Algorithm::iter() {
            let mut engine = Engine::new(algorithm);
            engine.update(b"message ");

            let first = engine.finalize();
            let second = engine.finalize();
            assert_eq!(first, second);
            assert_eq!(engine.message_len(), 8);

            engine.update(b"digest");
            assert_eq!(engine.finalize(), hash(algorithm, b"message digest"));
        }
    }

    #[test]
    fn digest_length_is_fixed_around_block_boundaries() {
        for algorithm in Algorithm::iter() {
            let block_size = algorithm.block_size();
            let lengths = [
                block_size - 1,
                block_size,
                block_size + 1,
                2 * block_size - 9,
                2 * block_size - 8,
                2 * block_size - 17,
                2 * block_size - 16,
            ];
            for len in lengths {
                let message: Vec<u8> = (0..len).map(|i| i as u8).collect();

                let one_shot = hash(algorithm, &message);
                let mut bytewise = Engine::new(algorithm);
                for byte in &message {
                    bytewise.update(std::slice::from_ref(byte));
                }

                assert_eq!(one_shot.len(), algorithm.digest_size(), "{algorithm} len {len}");
                assert_eq!(bytewise.finalize(), one_shot, "{algorithm} len {len}");
            }
        }
    }

    #[test]
    fn zero_length_updates_are_no_ops() {
        let mut engine = Engine::new(Algorithm::Sha256);
        engine.update(b"");
        engine.update(b"abc");
        engine.update(&[]);

        assert_eq!(engine.message_len(), 3);
        assert_eq!(
            engine.finalize().to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn by_name_selects_the_algorithm() {
        let engine = Engine::by_name("SHA512").unwrap();

        assert_eq!(engine.algorithm(), Algorithm::Sha512);
        assert_eq!(engine.spec().digest_size(), 64);
        assert!(Engine::by_name("whirlpool").is_err());
    }

    #[rstest]
    #[case(3, 8, ByteOrder::Little, &[24, 0, 0, 0, 0, 0, 0, 0])]
    #[case(3, 8, ByteOrder::Big, &[0, 0, 0, 0, 0, 0, 0, 24])]
    #[case(0x20_0000_0000, 8, ByteOrder::Big, &[0, 0, 1, 0, 0, 0, 0, 0])]
    #[case(1 << 61, 8, ByteOrder::Big, &[0; 8])]
    #[case(1 << 61, 16, ByteOrder::Big, &[0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0])]
    fn bit_length_field_encoding(
        #[case] message_len: u128,
        #[case] width: usize,
        #[case] order: ByteOrder,
        #[case] expected: &[u8],
    ) {
        let field = encode_bit_length(message_len, width, order);

        assert_eq!(&field[..width], expected);
    }
}
