use crate::block::load_words_le;
use crate::hash::typed_hasher;
use crate::Algorithm;

pub(crate) const INITIALISATION_CONSTANTS: [u32; 5] =
    [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

const K_LEFT: [u32; 5] = [0x00000000, 0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xA953FD4E];
const K_RIGHT: [u32; 5] = [0x50A28BE6, 0x5C4DD124, 0x6D703EF3, 0x7A6D76E9, 0x00000000];

// Message word selection per step.
const R_LEFT: [usize; 80] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
    7, 4, 13, 1, 10, 6, 15, 3, 12, 0, 9, 5, 2, 14, 11, 8,
    3, 10, 14, 4, 9, 15, 8, 1, 2, 7, 0, 6, 13, 11, 5, 12,
    1, 9, 11, 10, 0, 8, 12, 4, 13, 3, 7, 15, 14, 5, 6, 2,
    4, 0, 5, 9, 7, 12, 2, 10, 14, 1, 3, 8, 11, 6, 15, 13,
];
const R_RIGHT: [usize; 80] = [
    5, 14, 7, 0, 9, 2, 11, 4, 13, 6, 15, 8, 1, 10, 3, 12,
    6, 11, 3, 7, 0, 13, 5, 10, 14, 15, 8, 12, 4, 9, 1, 2,
    15, 5, 1, 3, 7, 14, 6, 9, 11, 8, 12, 2, 10, 0, 4, 13,
    8, 6, 4, 1, 3, 11, 15, 0, 5, 12, 2, 13, 9, 7, 10, 14,
    12, 15, 10, 4, 1, 5, 8, 7, 6, 2, 13, 14, 0, 3, 9, 11,
];

// Left-rotation amounts per step.
const S_LEFT: [u32; 80] = [
    11, 14, 15, 12, 5, 8, 7, 9, 11, 13, 14, 15, 6, 7, 9, 8,
    7, 6, 8, 13, 11, 9, 7, 15, 7, 12, 15, 9, 11, 7, 13, 12,
    11, 13, 6, 7, 14, 9, 13, 15, 14, 8, 13, 6, 5, 12, 7, 5,
    11, 12, 14, 15, 14, 15, 9, 8, 9, 14, 5, 6, 8, 6, 5, 12,
    9, 15, 5, 11, 6, 8, 13, 12, 5, 12, 13, 14, 11, 8, 5, 6,
];
const S_RIGHT: [u32; 80] = [
    8, 9, 9, 11, 13, 15, 15, 5, 7, 7, 8, 11, 14, 14, 12, 6,
    9, 13, 15, 7, 12, 8, 9, 11, 7, 7, 12, 7, 6, 15, 13, 11,
    9, 7, 15, 11, 8, 6, 6, 14, 12, 13, 5, 14, 13, 13, 7, 5,
    15, 5, 8, 11, 14, 14, 6, 14, 6, 9, 12, 9, 12, 5, 15, 8,
    8, 5, 12, 9, 12, 5, 14, 6, 8, 13, 6, 5, 15, 13, 11, 11,
];

/// Boolean function for one of the five rounds. The right line applies them
/// in reverse order.
fn mix(round: usize, x: u32, y: u32, z: u32) -> u32 {
    match round {
        0 => x ^ y ^ z,
        1 => (x & y) | (!x & z),
        2 => (x | !y) ^ z,
        3 => (x & z) | (y & !z),
        _ => x ^ (y | !z),
    }
}

/// One step of a line: `[a, b, c, d, e]` becomes `[e, t, b, c <<< 10, d]`.
fn step(line: &mut [u32; 5], f: u32, word: u32, k: u32, s: u32) {
    let [a, b, c, d, e] = *line;
    let t = a
        .wrapping_add(f)
        .wrapping_add(word)
        .wrapping_add(k)
        .rotate_left(s)
        .wrapping_add(e);
    *line = [e, t, b, c.rotate_left(10), d];
}

pub(crate) fn compress(digest: &mut [u32; 5], block: &[u8]) {
    let mut x = [0u32; 16];
    load_words_le(block, &mut x);

    let mut left = *digest;
    let mut right = *digest;
    for j in 0..80 {
        let round = j / 16;

        let [_, b, c, d, _] = left;
        step(&mut left, mix(round, b, c, d), x[R_LEFT[j]], K_LEFT[round], S_LEFT[j]);

        let [_, b, c, d, _] = right;
        step(&mut right, mix(4 - round, b, c, d), x[R_RIGHT[j]], K_RIGHT[round], S_RIGHT[j]);
    }

    let t = digest[1].wrapping_add(left[2]).wrapping_add(right[3]);
    digest[1] = digest[2].wrapping_add(left[3]).wrapping_add(right[4]);
    digest[2] = digest[3].wrapping_add(left[4]).wrapping_add(right[0]);
    digest[3] = digest[4].wrapping_add(left[0]).wrapping_add(right[1]);
    digest[4] = digest[0].wrapping_add(left[1]).wrapping_add(right[2]);
    digest[0] = t;
}

typed_hasher!(Ripemd160, Algorithm::Ripemd160, 20);

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Hasher;

    use rstest::rstest;

    #[rstest]
    #[case("", "9c1185a5c5e9fc54612808977ee8f548b2258d31")]
    #[case("a", "0bdc9d2d256b3ee9daae347be6f4dc835a467ffe")]
    #[case("abc", "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc")]
    #[case("message digest", "5d0689ef49d2fae572b881b123a85ffa21595f36")]
    #[case("abcdefghijklmnopqrstuvwxyz", "f71c27109c692c1b56bbdceb5b9d2865b3708dbc")]
    #[case(
        "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "12a053384a9c0c88e405a06c27dcf49ada62eb2b"
    )]
    #[case(
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        "b0e20b6e3116640286ed3a87a5713079b21f5189"
    )]
    #[case(
        "12345678901234567890123456789012345678901234567890123456789012345678901234567890",
        "9b752e45573d4b39f4dbd3323cab82bf63326bfb"
    )]
    fn ripemd160_generates_test_vector_hashes(#[case] input: &str, #[case] expected: &str) {
        let digest = Ripemd160::digest_message(input.as_bytes());

        assert_eq!(hex::encode(digest), expected);
    }

    #[test]
    fn message_word_orders_are_permutations() {
        for order in [R_LEFT, R_RIGHT] {
            for round in order.chunks_exact(16) {
                let mut sorted = round.to_vec();
                sorted.sort_unstable();
                assert_eq!(sorted, (0..16).collect::<Vec<_>>());
            }
        }
    }
}
