use crate::algorithm::{ByteOrder, MAX_DIGEST_SIZE};
use crate::md2::Md2State;
use crate::sha1::Schedule;
use crate::{md4, md5, ripemd160, sha1, sha256, sha512};

/// The running internal state of a hash. The variant selects the transform
/// applied to each block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChainingValue {
    Md2(Md2State),
    Md4([u32; 4]),
    Md5([u32; 4]),
    Sha0([u32; 5]),
    Sha1([u32; 5]),
    Sha256([u32; 8]),
    Sha512([u64; 8]),
    Ripemd160([u32; 5]),
}

impl ChainingValue {
    pub fn compress(&mut self, block: &[u8]) {
        match self {
            Self::Md2(state) => state.compress(block),
            Self::Md4(words) => md4::compress(words, block),
            Self::Md5(words) => md5::compress(words, block),
            Self::Sha0(words) => sha1::compress(words, block, Schedule::Sha0),
            Self::Sha1(words) => sha1::compress(words, block, Schedule::Sha1),
            Self::Sha256(words) => sha256::compress(words, block),
            Self::Sha512(words) => sha512::compress(words, block),
            Self::Ripemd160(words) => ripemd160::compress(words, block),
        }
    }

    /// Runs the MD2 checksum block. Other algorithms carry no checksum.
    pub fn absorb_checksum(&mut self) {
        if let Self::Md2(state) = self {
            state.absorb_checksum();
        }
    }

    /// Serialize every chaining word in `order`. Callers truncate to the
    /// algorithm's digest size.
    pub fn to_bytes(&self, order: ByteOrder) -> [u8; MAX_DIGEST_SIZE] {
        let mut bytes = [0u8; MAX_DIGEST_SIZE];
        match self {
            Self::Md2(state) => bytes[..state.state().len()].copy_from_slice(state.state()),
            Self::Md4(words) | Self::Md5(words) => write_words(words, order, &mut bytes),
            Self::Sha0(words) | Self::Sha1(words) | Self::Ripemd160(words) => {
                write_words(words, order, &mut bytes)
            }
            Self::Sha256(words) => write_words(words, order, &mut bytes),
            Self::Sha512(words) => {
                for (word, out) in words.iter().zip(bytes.chunks_exact_mut(8)) {
                    out.copy_from_slice(&match order {
                        ByteOrder::Big => word.to_be_bytes(),
                        ByteOrder::Little => word.to_le_bytes(),
                    });
                }
            }
        }
        bytes
    }
}

fn write_words(words: &[u32], order: ByteOrder, bytes: &mut [u8]) {
    for (word, out) in words.iter().zip(bytes.chunks_exact_mut(4)) {
        out.copy_from_slice(&match order {
            ByteOrder::Big => word.to_be_bytes(),
            ByteOrder::Little => word.to_le_bytes(),
        });
    }
}
