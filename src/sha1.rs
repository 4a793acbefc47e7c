use crate::block::load_words_be;
use crate::hash::typed_hasher;
use crate::Algorithm;

pub(crate) const INITIALISATION_CONSTANTS: [u32; 5] =
    [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// Rotation applied while expanding the message schedule. SHA-1 is SHA-0
/// plus this one-bit rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Schedule {
    Sha0 = 0,
    Sha1 = 1,
}

pub(crate) fn compress(digest: &mut [u32; 5], block: &[u8], schedule: Schedule) {
    let mut w = [0u32; 80];
    load_words_be(block, &mut w[..16]);
    for i in 16..80 {
        w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(schedule as u32);
    }

    let [mut a, mut b, mut c, mut d, mut e] = *digest;
    for (i, &word) in w.iter().enumerate() {
        let (f, k) = match i {
            0..=19 => ((b & c) | ((!b) & d), 0x5A827999),
            20..=39 => (b ^ c ^ d, 0x6ED9EBA1),
            40..=59 => ((b & c) | (b & d) | (c & d), 0x8F1BBCDC),
            _ => (b ^ c ^ d, 0xCA62C1D6),
        };

        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(word);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    digest[0] = digest[0].wrapping_add(a);
    digest[1] = digest[1].wrapping_add(b);
    digest[2] = digest[2].wrapping_add(c);
    digest[3] = digest[3].wrapping_add(d);
    digest[4] = digest[4].wrapping_add(e);
}

typed_hasher!(
    /// SHA-0, the first and since withdrawn Secure Hash Standard.
    Sha0,
    Algorithm::Sha0,
    20
);
typed_hasher!(Sha1, Algorithm::Sha1, 20);

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Hasher;

    use rstest::rstest;

    #[rstest]
    #[case("", "da39a3ee5e6b4b0d3255bfef95601890afd80709")]
    #[case("a", "86f7e437faa5a7fce15d1ddcb9eaeaea377667b8")]
    #[case("abc", "a9993e364706816aba3e25717850c26c9cd0d89d")]
    #[case("abcdefghijklmnopqrstuvwxyz", "32d10c7b8cf96570ca04ce37f2a19d84240d3a89")]
    #[case(
        "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "84983e441c3bd26ebaae4aa1f95129e5e54670f1"
    )]
    fn sha1_generates_test_vector_hashes(#[case] input: &str, #[case] expected: &str) {
        let digest = Sha1::digest_message(input.as_bytes());

        assert_eq!(hex::encode(digest), expected);
    }

    #[rstest]
    #[case("", "f96cea198ad1dd5617ac084a3d92c6107708c0ef")]
    #[case("abc", "0164b8a914cd2a5e74c4f7ff082c4d97f1edf880")]
    #[case(
        "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "d2516ee1acfa5baf33dfc1c471e438449ef134c8"
    )]
    fn sha0_generates_test_vector_hashes(#[case] input: &str, #[case] expected: &str) {
        let digest = Sha0::digest_message(input.as_bytes());

        assert_eq!(hex::encode(digest), expected);
    }

    #[test]
    fn schedules_differ_only_after_expansion() {
        let block = [0u8; 64];
        let mut sha0 = INITIALISATION_CONSTANTS;
        let mut sha1 = INITIALISATION_CONSTANTS;

        compress(&mut sha0, &block, Schedule::Sha0);
        compress(&mut sha1, &block, Schedule::Sha1);

        // An all-zero block expands to all-zero words either way.
        assert_eq!(sha0, sha1);

        let mut block = [0u8; 64];
        block[0] = 0x80;
        compress(&mut sha0, &block, Schedule::Sha0);
        compress(&mut sha1, &block, Schedule::Sha1);

        assert_ne!(sha0, sha1);
    }

    #[test]
    fn update_and_digest_matches_digest_message() {
        let mut hasher = Sha1::default();
        hasher.update(b"We all live ");

        let digest = hasher.update_and_digest(b"in a yellow submarine.");

        assert_eq!(digest, Sha1::digest_message(b"We all live in a yellow submarine."));
    }
}
