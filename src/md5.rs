#![allow(clippy::unreadable_literal)]
#![allow(clippy::zero_prefixed_literal)]

use crate::block::load_words_le;
use crate::hash::typed_hasher;
use crate::Algorithm;

pub(crate) const INITIALISATION_CONSTANTS: [u32; 4] =
    [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476];

/// bits rotated per round
const ROUND_ROTATION_COUNT: [u32; 64] = [
    07, 12, 17, 22, 07, 12, 17, 22, 07, 12, 17, 22, 07, 12, 17, 22,
    05, 09, 14, 20, 05, 09, 14, 20, 05, 09, 14, 20, 05, 09, 14, 20,
    04, 11, 16, 23, 04, 11, 16, 23, 04, 11, 16, 23, 04, 11, 16, 23,
    06, 10, 15, 21, 06, 10, 15, 21, 06, 10, 15, 21, 06, 10, 15, 21,
];

/// binary floored values of sin(i + 1) * 2^32 where i is the array index
const SINE_CONSTANTS: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

pub(crate) fn compress(digest: &mut [u32; 4], block: &[u8]) {
    let mut x = [0u32; 16];
    load_words_le(block, &mut x);

    let [mut a, mut b, mut c, mut d] = *digest;
    for i in 0..64 {
        let (scrambled, k) = match i {
            0..=15 => (d ^ (b & (c ^ d)), i),
            16..=31 => (c ^ (d & (b ^ c)), (5 * i + 1) % 16),
            32..=47 => (b ^ c ^ d, (3 * i + 5) % 16),
            _ => (c ^ (b | !d), (7 * i) % 16),
        };

        let temp = d;
        d = c;
        c = b;
        b = b.wrapping_add(
            a.wrapping_add(scrambled)
                .wrapping_add(SINE_CONSTANTS[i])
                .wrapping_add(x[k])
                .rotate_left(ROUND_ROTATION_COUNT[i]),
        );
        a = temp;
    }

    digest[0] = digest[0].wrapping_add(a);
    digest[1] = digest[1].wrapping_add(b);
    digest[2] = digest[2].wrapping_add(c);
    digest[3] = digest[3].wrapping_add(d);
}

typed_hasher!(Md5, Algorithm::Md5, 16);
