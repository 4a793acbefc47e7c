use std::str::FromStr;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::chaining::ChainingValue;
use crate::{md2, md4, md5, ripemd160, sha1, sha256, sha512, DigestError};

/// Largest block consumed by any transform (SHA-384/512).
pub const MAX_BLOCK_SIZE: usize = 128;

/// Largest digest produced by any algorithm (SHA-512).
pub const MAX_DIGEST_SIZE: usize = 64;

/// The closed set of supported digest algorithms.
///
/// Names parse case-insensitively from their lowercase tag, e.g. `"sha256"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Algorithm {
    Md2,
    Md4,
    Md5,
    Sha0,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    #[strum(to_string = "ripemd160", serialize = "rmd160")]
    Ripemd160,
}

impl Algorithm {
    pub fn spec(self) -> &'static AlgorithmSpec {
        spec_for(self)
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn block_size(self) -> usize {
        self.spec().block_size
    }

    pub fn digest_size(self) -> usize {
        self.spec().digest_size
    }

    /// Look an algorithm up by name, reporting unknown names as a
    /// configuration error.
    pub fn from_name(name: &str) -> Result<Self, DigestError> {
        Self::from_str(name.trim()).map_err(|_| DigestError::UnknownAlgorithm(name.to_string()))
    }
}

/// Whether `name` selects an algorithm this build can hash with.
pub fn is_supported(name: &str) -> bool {
    Algorithm::from_name(name).is_ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Big,
    Little,
}

/// How the final block(s) of a message are formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// `n` bytes of value `n` up to the block boundary, followed by the
    /// running checksum as one extra block (MD2).
    Checksum,
    /// A single `1` bit, zero bits, then the message length in bits written
    /// into a `width`-byte field.
    BitLength { width: usize, order: ByteOrder },
}

/// Static description of one algorithm: everything the generic engine needs
/// to drive its transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmSpec {
    pub(crate) algorithm: Algorithm,
    pub(crate) block_size: usize,
    pub(crate) digest_size: usize,
    pub(crate) padding: Padding,
    pub(crate) word_order: ByteOrder,
    pub(crate) initial: ChainingValue,
}

impl AlgorithmSpec {
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn digest_size(&self) -> usize {
        self.digest_size
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Byte order used when serializing chaining words into the digest.
    pub fn word_order(&self) -> ByteOrder {
        self.word_order
    }
}

const MD_LENGTH: Padding = Padding::BitLength {
    width: 8,
    order: ByteOrder::Little,
};
const SHA_LENGTH: Padding = Padding::BitLength {
    width: 8,
    order: ByteOrder::Big,
};
const SHA_WIDE_LENGTH: Padding = Padding::BitLength {
    width: 16,
    order: ByteOrder::Big,
};

static MD2: AlgorithmSpec = AlgorithmSpec {
    algorithm: Algorithm::Md2,
    block_size: md2::BLOCK_SIZE,
    digest_size: 16,
    padding: Padding::Checksum,
    word_order: ByteOrder::Big,
    initial: ChainingValue::Md2(md2::Md2State::INITIAL),
};

static MD4: AlgorithmSpec = AlgorithmSpec {
    algorithm: Algorithm::Md4,
    block_size: 64,
    digest_size: 16,
    padding: MD_LENGTH,
    word_order: ByteOrder::Little,
    initial: ChainingValue::Md4(md4::INITIALISATION_CONSTANTS),
};

static MD5: AlgorithmSpec = AlgorithmSpec {
    algorithm: Algorithm::Md5,
    block_size: 64,
    digest_size: 16,
    padding: MD_LENGTH,
    word_order: ByteOrder::Little,
    initial: ChainingValue::Md5(md5::INITIALISATION_CONSTANTS),
};

static SHA0: AlgorithmSpec = AlgorithmSpec {
    algorithm: Algorithm::Sha0,
    block_size: 64,
    digest_size: 20,
    padding: SHA_LENGTH,
    word_order: ByteOrder::Big,
    initial: ChainingValue::Sha0(sha1::INITIALISATION_CONSTANTS),
};

static SHA1: AlgorithmSpec = AlgorithmSpec {
    algorithm: Algorithm::Sha1,
    block_size: 64,
    digest_size: 20,
    padding: SHA_LENGTH,
    word_order: ByteOrder::Big,
    initial: ChainingValue::Sha1(sha1::INITIALISATION_CONSTANTS),
};

static SHA224: AlgorithmSpec = AlgorithmSpec {
    algorithm: Algorithm::Sha224,
    block_size: 64,
    digest_size: 28,
    padding: SHA_LENGTH,
    word_order: ByteOrder::Big,
    initial: ChainingValue::Sha256(sha256::SHA224_INITIALISATION_CONSTANTS),
};

static SHA256: AlgorithmSpec = AlgorithmSpec {
    algorithm: Algorithm::Sha256,
    block_size: 64,
    digest_size: 32,
    padding: SHA_LENGTH,
    word_order: ByteOrder::Big,
    initial: ChainingValue::Sha256(sha256::INITIALISATION_CONSTANTS),
};

static SHA384: AlgorithmSpec = AlgorithmSpec {
    algorithm: Algorithm::Sha384,
    block_size: 128,
    digest_size: 48,
    padding: SHA_WIDE_LENGTH,
    word_order: ByteOrder::Big,
    initial: ChainingValue::Sha512(sha512::SHA384_INITIALISATION_CONSTANTS),
};

static SHA512: AlgorithmSpec = AlgorithmSpec {
    algorithm: Algorithm::Sha512,
    block_size: 128,
    digest_size: 64,
    padding: SHA_WIDE_LENGTH,
    word_order: ByteOrder::Big,
    initial: ChainingValue::Sha512(sha512::INITIALISATION_CONSTANTS),
};

static RIPEMD160: AlgorithmSpec = AlgorithmSpec {
    algorithm: Algorithm::Ripemd160,
    block_size: 64,
    digest_size: 20,
    padding: MD_LENGTH,
    word_order: ByteOrder::Little,
    initial: ChainingValue::Ripemd160(ripemd160::INITIALISATION_CONSTANTS),
};

/// Registry lookup. Total over the closed algorithm set.
pub fn spec_for(algorithm: Algorithm) -> &'static AlgorithmSpec {
    match algorithm {
        Algorithm::Md2 => &MD2,
        Algorithm::Md4 => &MD4,
        Algorithm::Md5 => &MD5,
        Algorithm::Sha0 => &SHA0,
        Algorithm::Sha1 => &SHA1,
        Algorithm::Sha224 => &SHA224,
        Algorithm::Sha256 => &SHA256,
        Algorithm::Sha384 => &SHA384,
        Algorithm::Sha512 => &SHA512,
        Algorithm::Ripemd160 => &RIPEMD160,
    }
}
