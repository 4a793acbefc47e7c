/// A hasher with a digest size known at compile time.
pub trait Hasher<const N: usize>: Default {
    fn update(&mut self, data: &[u8]);

    fn digest(self) -> [u8; N];

    fn digest_message(message: &[u8]) -> [u8; N] {
        let mut hasher = Self::default();
        hasher.update(message);
        hasher.digest()
    }

    fn update_and_digest(mut self, message: &[u8]) -> [u8; N] {
        self.update(message);
        self.digest()
    }
}

/// Declares a fixed-size hasher wrapping an [`Engine`](crate::Engine)
/// configured for one algorithm.
macro_rules! typed_hasher {
    ($(#[$meta:meta])* $name:ident, $algorithm:expr, $len:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name($crate::Engine);

        impl Default for $name {
            fn default() -> Self {
                Self($crate::Engine::new($algorithm))
            }
        }

        impl $crate::Hasher<$len> for $name {
            fn update(&mut self, data: &[u8]) {
                self.0.update(data);
            }

            fn digest(self) -> [u8; $len] {
                let mut digest = [0u8; $len];
                digest.copy_from_slice(self.0.finalize().as_bytes());
                digest
            }
        }
    };
}

pub(crate) use typed_hasher;
