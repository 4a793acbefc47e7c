//! Streaming message digests implemented from scratch: MD2, MD4, MD5, SHA-0,
//! SHA-1, SHA-224, SHA-256, SHA-384, SHA-512 and RIPEMD-160.
//!
//! ```
//! use digestive::{hash, Algorithm, Engine};
//!
//! let mut engine = Engine::new(Algorithm::Sha1);
//! engine.update(b"ab");
//! engine.update(b"c");
//! assert_eq!(engine.finalize(), hash(Algorithm::Sha1, b"abc"));
//! assert_eq!(
//!     engine.finalize().to_hex(),
//!     "a9993e364706816aba3e25717850c26c9cd0d89d"
//! );
//! ```
mod algorithm;
mod block;
mod chaining;
mod digest;
mod engine;
mod error;
mod hash;
mod md2;
mod md4;
mod md5;
pub mod parallel;
mod ripemd160;
mod sha1;
mod sha256;
mod sha512;
mod stream;
pub mod vectors;

pub use algorithm::{
    is_supported, spec_for, Algorithm, AlgorithmSpec, ByteOrder, Padding, MAX_BLOCK_SIZE,
    MAX_DIGEST_SIZE,
};
pub use digest::Digest;
pub use engine::{hash, Engine};
pub use error::{DigestError, Result};
pub use hash::Hasher;
pub use md2::Md2;
pub use md4::Md4;
pub use md5::Md5;
pub use ripemd160::Ripemd160;
pub use sha1::{Sha0, Sha1};
pub use sha256::{Sha224, Sha256};
pub use sha512::{Sha384, Sha512};
pub use stream::{hash_chunks, hash_reader};
