use crate::block::load_words_le;
use crate::hash::typed_hasher;
use crate::Algorithm;

pub(crate) const INITIALISATION_CONSTANTS: [u32; 4] =
    [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476];

pub(crate) fn compress(digest: &mut [u32; 4], block: &[u8]) {
    let mut x = [0u32; 16];
    load_words_le(block, &mut x);

    let mut d = *digest;
    // Round 1
    let s = [3, 7, 11, 19];
    for r in 0..16 {
        let i = (16 - r) % 4;
        let k = r;
        d[i] = d[i]
            .wrapping_add(f(d[(i + 1) % 4], d[(i + 2) % 4], d[(i + 3) % 4]))
            .wrapping_add(x[k])
            .rotate_left(s[r % 4]);
    }

    // Round 2
    let s = [3, 5, 9, 13];
    for r in 0..16 {
        let i = (16 - r) % 4;
        let k = 4 * (r % 4) + r / 4;
        d[i] = d[i]
            .wrapping_add(g(d[(i + 1) % 4], d[(i + 2) % 4], d[(i + 3) % 4]))
            .wrapping_add(x[k])
            .wrapping_add(0x5a827999)
            .rotate_left(s[r % 4]);
    }

    // Round 3
    let s = [3, 9, 11, 15];
    let k = [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15];
    for r in 0..16 {
        let i = (16 - r) % 4;
        d[i] = d[i]
            .wrapping_add(h(d[(i + 1) % 4], d[(i + 2) % 4], d[(i + 3) % 4]))
            .wrapping_add(x[k[r]])
            .wrapping_add(0x6ed9eba1)
            .rotate_left(s[r % 4]);
    }

    for (state, increment) in digest.iter_mut().zip(d) {
        *state = increment.wrapping_add(*state);
    }
}

fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

typed_hasher!(Md4, Algorithm::Md4, 16);
