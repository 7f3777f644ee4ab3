// Copyright (c) Silence Laboratories Pte. Ltd. All Rights Reserved.
// This software is licensed under the Silence Laboratories License Agreement.

//! (t, n) threshold secret sharing of byte strings.
//!
//! A secret of 1 to 255 bytes is split into up to 255 shares so that any
//! `needed` of them reconstruct it exactly and fewer reveal nothing about
//! it. Each byte is shared with its own random polynomial over GF(256),
//! so shares are as long as the secret.
//!
//! ```
//! let shares = shamir255::share(b"Hello, world!", 2, 3).unwrap();
//! let secret = shamir255::recover(&shares.select(&[1, 3])).unwrap();
//! assert_eq!(secret, b"Hello, world!");
//! ```
//!
//! Shares carry no integrity protection. Recovery from fewer than
//! `needed` shares returns an unrelated value rather than an error.
//!
//! [`prime`] holds an alternate scheme over a 2048-bit prime field with
//! fixed-width shares.

/// Error type
pub mod error;

/// GF(256) arithmetic
pub mod gf256;

/// Threshold parameters and limits
pub mod params;

/// Prime field scheme
pub mod prime;

/// Share types
pub mod share;

/// Source of random coefficients
pub mod source;

/// Scheme interface
pub mod traits;

mod recover;
mod split;

use rand::rngs::OsRng;

pub use error::ShamirError;
pub use params::Threshold;
pub use recover::recover;
pub use share::{Share, ShareSet};
pub use source::CoefficientSource;
pub use split::split as share_with_rng;
pub use traits::SecretSharing;

/// Split `secret` into `total` shares using the operating system RNG.
///
/// Fails with [`ShamirError::RandomUnavailable`] if the RNG cannot
/// deliver.
pub fn share(
    secret: &[u8],
    needed: usize,
    total: usize,
) -> Result<ShareSet, ShamirError> {
    split::split(secret, needed, total, &mut OsRng)
}

/// Byte-wise sharing over GF(256), length preserving.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gf256Scheme;

impl SecretSharing for Gf256Scheme {
    fn share<S: CoefficientSource + ?Sized>(
        &self,
        secret: &[u8],
        needed: usize,
        total: usize,
        source: &mut S,
    ) -> Result<ShareSet, ShamirError> {
        split::split(secret, needed, total, source)
    }

    fn recover(&self, shares: &[Share]) -> Result<Vec<u8>, ShamirError> {
        recover::recover(shares)
    }
}

/// Sharing over the 2048-bit MODP prime, fixed 256 byte shares.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimeFieldScheme;

impl SecretSharing for PrimeFieldScheme {
    fn share<S: CoefficientSource + ?Sized>(
        &self,
        secret: &[u8],
        needed: usize,
        total: usize,
        source: &mut S,
    ) -> Result<ShareSet, ShamirError> {
        prime::split(secret, needed, total, source)
    }

    fn recover(&self, shares: &[Share]) -> Result<Vec<u8>, ShamirError> {
        prime::recover(shares)
    }
}

#[cfg(test)]
mod tests {
    use rand::{thread_rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    use super::*;

    fn roundtrip<T: SecretSharing>(scheme: &T, secret: &[u8]) -> Vec<u8> {
        let mut rng = ChaCha20Rng::from_seed([0x55; 32]);
        let shares = scheme.share(secret, 3, 5, &mut rng).unwrap();
        scheme.recover(&shares.select(&[2, 5, 4])).unwrap()
    }

    #[test]
    fn os_rng_roundtrip() {
        let shares = share(b"Hello, world!", 2, 3).unwrap();

        assert_eq!(shares.len(), 3);
        assert_eq!(recover(&shares.select(&[1, 2])).unwrap(), b"Hello, world!");
        assert_eq!(recover(&shares.select(&[3, 1])).unwrap(), b"Hello, world!");
    }

    #[test]
    fn schemes_roundtrip() {
        let secret = b"correct horse battery staple";

        assert_eq!(roundtrip(&Gf256Scheme, secret), secret);
        assert_eq!(roundtrip(&PrimeFieldScheme, secret), secret);
    }

    #[test]
    fn share_lengths_differ() {
        let mut rng = thread_rng();
        let secret = b"short";

        let gf = Gf256Scheme.share(secret, 2, 3, &mut rng).unwrap();
        let prime = PrimeFieldScheme.share(secret, 2, 3, &mut rng).unwrap();

        assert!(gf.iter().all(|s| s.y.len() == secret.len()));
        assert!(prime.iter().all(|s| s.y.len() == prime::SHARE_BYTES));
    }

    #[test]
    fn seeded_shares_are_reproducible() {
        let a = share_with_rng(b"abc", 2, 4, &mut ChaCha20Rng::seed_from_u64(7)).unwrap();
        let b = share_with_rng(b"abc", 2, 4, &mut ChaCha20Rng::seed_from_u64(7)).unwrap();

        assert_eq!(a, b);
        assert_eq!(recover(&a.select(&[4, 2])).unwrap(), b"abc");
    }

    #[test]
    fn invalid_parameters() {
        assert_eq!(share(b"", 2, 3), Err(ShamirError::InvalidSecret(0)));
        assert_eq!(
            share(b"abc", 4, 3),
            Err(ShamirError::InvalidThreshold { needed: 4, total: 3 })
        );
        assert_eq!(
            PrimeFieldScheme.share(b"abc", 2, 256, &mut thread_rng()),
            Err(ShamirError::InvalidShareCount(256))
        );
    }
}
