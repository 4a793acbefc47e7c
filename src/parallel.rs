//! Hashing across several engines at once. Each task owns its own engine, so
//! nothing is shared between threads.
use rayon::prelude::*;

use crate::{hash, Algorithm, Digest};

/// Hash the same message under every algorithm in `algorithms`, returning
/// the digests in the same order.
pub fn hash_all(algorithms: &[Algorithm], message: &[u8]) -> Vec<Digest> {
    algorithms
        .par_iter()
        .map(|&algorithm| hash(algorithm, message))
        .collect()
}

/// Hash each message independently under one algorithm.
pub fn hash_each<M>(algorithm: Algorithm, messages: &[M]) -> Vec<Digest>
where
    M: AsRef<[u8]> + Sync,
{
    messages
        .par_iter()
        .map(|message| hash(algorithm, message.as_ref()))
        .collect()
}
