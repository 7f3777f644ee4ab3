// Copyright (c) Silence Laboratories Pte. Ltd. All Rights Reserved.
// This software is licensed under the Silence Laboratories License Agreement.

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    error::ShamirError,
    gf256::Gf256,
    params::{check_secret, Threshold},
    share::{Share, ShareSet},
    source::CoefficientSource,
};

/// Sharing polynomial for one secret byte.
#[cfg_attr(feature = "zeroize", derive(Zeroize, ZeroizeOnDrop))]
struct Polynomial {
    // coeffs[k] multiplies x^k, coeffs[0] is the secret byte
    coeffs: Vec<Gf256>,
}

impl Polynomial {
    /// `random[k - 1]` becomes the coefficient of x^k.
    fn new(constant: u8, random: &[u8]) -> Self {
        let mut coeffs = Vec::with_capacity(random.len() + 1);
        coeffs.push(Gf256(constant));
        coeffs.extend(random.iter().map(|&b| Gf256(b)));

        Self { coeffs }
    }

    /// Horner's method, seeded with the highest coefficient:
    /// ((a_n * x + a_{n-1}) * x + ... + a_1) * x + a_0
    fn eval(&self, x: Gf256) -> Gf256 {
        let mut coeffs = self.coeffs.iter().rev();
        let mut res = coeffs.next().copied().unwrap_or_default();

        for &a in coeffs {
            res = res * x + a;
        }

        res
    }
}

/// Split `secret` into `total` shares, any `needed` of which recover it.
///
/// Parameters are validated before `source` is asked for anything. The
/// source is then asked once for `secret.len() * (needed - 1)` bytes; if
/// it fails, no shares are produced.
pub fn split<S: CoefficientSource + ?Sized>(
    secret: &[u8],
    needed: usize,
    total: usize,
    source: &mut S,
) -> Result<ShareSet, ShamirError> {
    let threshold = check_secret(secret)
        .and_then(|_| Threshold::new(needed, total))
        .map_err(|err| {
            tracing::debug!(%err, "rejected split parameters");
            err
        })?;

    split_with_threshold(secret, threshold, source)
}

pub(crate) fn split_with_threshold<S: CoefficientSource + ?Sized>(
    secret: &[u8],
    threshold: Threshold,
    source: &mut S,
) -> Result<ShareSet, ShamirError> {
    let degree = threshold.degree();

    tracing::debug!(
        needed = threshold.needed(),
        total = threshold.total(),
        len = secret.len(),
        "splitting secret over GF(256)"
    );

    let mut random = vec![0u8; secret.len() * degree];
    let filled = source.fill(&mut random);

    let polys = filled.map(|_| {
        secret
            .iter()
            .zip(random.chunks_exact(degree))
            .map(|(&s, coeffs)| Polynomial::new(s, coeffs))
            .collect::<Vec<_>>()
    });

    // wiped on failure too, the source may have written part of it
    #[cfg(feature = "zeroize")]
    random.zeroize();

    let polys = polys?;

    let shares = (1..=threshold.total() as u8)
        .map(|x| Share {
            x,
            y: polys.iter().map(|p| p.eval(Gf256(x)).0).collect(),
        })
        .collect();

    Ok(ShareSet::from_sorted(shares))
}

#[cfg(test)]
mod tests {
    use rand::thread_rng;

    use super::*;
    use crate::source::testing::{FailingSource, FixedSource};

    const SECRET: &[u8] = b"Hello, world!";

    #[test]
    fn polynomial_evaluation() {
        // 5 + 3x + 2x^2
        let poly = Polynomial::new(5, &[3, 2]);

        assert_eq!(poly.eval(Gf256(0)), Gf256(5));
        assert_eq!(poly.eval(Gf256(1)), Gf256(5 ^ 3 ^ 2));

        // 5 + 3*2 + 2*4 in GF(256)
        let x = Gf256(2);
        assert_eq!(poly.eval(x), Gf256(5) + Gf256(3) * x + Gf256(2) * x * x);
    }

    #[test]
    fn share_shape() {
        let mut rng = thread_rng();
        let shares = split(SECRET, 3, 5, &mut rng).unwrap();

        assert_eq!(shares.len(), 5);
        for (i, share) in shares.iter().enumerate() {
            assert_eq!(share.x as usize, i + 1);
            assert_eq!(share.y.len(), SECRET.len());
        }
    }

    #[test]
    fn share_max_count() {
        let mut rng = thread_rng();
        let shares = split(SECRET, 2, 255, &mut rng).unwrap();

        assert_eq!(shares.len(), 255);
        assert_eq!(shares.first().map(|s| s.x), Some(1));
        assert_eq!(shares.last().map(|s| s.x), Some(255));
    }

    #[test]
    fn linear_coefficient_layout() {
        // needed = 2: f_j(x) = secret[j] + random[j] * x
        let mut source = FixedSource::new(37, 11);
        let shares = split(SECRET, 2, 3, &mut source).unwrap();

        for share in &shares {
            for (j, (&y, &s)) in share.y.iter().zip(SECRET).enumerate() {
                let a1 = (j as u8).wrapping_mul(37).wrapping_add(11);
                assert_eq!(Gf256(y), Gf256(s) + Gf256(a1) * Gf256(share.x));
            }
        }
    }

    #[test]
    fn pinned_vector() {
        let mut source = FixedSource::new(37, 11);
        let shares = split(SECRET, 3, 9, &mut source).unwrap();

        let expected = [
            (3, "a515237c1fbb0faa384504148b"),
            (7, "aeafb91f3aa052a9a1d7c279ef"),
            (9, "b733ec3702d3f8d9d1acd5c833"),
        ];

        for (x, y) in expected {
            assert_eq!(shares.share(x).unwrap().y, hex::decode(y).unwrap());
        }
    }

    #[test]
    fn invalid_parameters() {
        let mut rng = thread_rng();

        assert_eq!(
            split(b"", 2, 3, &mut rng),
            Err(ShamirError::InvalidSecret(0))
        );
        assert_eq!(
            split(SECRET, 1, 3, &mut rng),
            Err(ShamirError::InvalidThreshold { needed: 1, total: 3 })
        );
        assert_eq!(
            split(SECRET, 5, 3, &mut rng),
            Err(ShamirError::InvalidThreshold { needed: 5, total: 3 })
        );
        assert_eq!(
            split(SECRET, 2, 256, &mut rng),
            Err(ShamirError::InvalidShareCount(256))
        );
        assert_eq!(
            split(&[0xff; 256], 2, 3, &mut rng),
            Err(ShamirError::InvalidSecret(256))
        );
        assert!(split(&[0xff; 255], 2, 3, &mut rng).is_ok());
    }

    #[test]
    fn validation_precedes_randomness() {
        let mut source = FailingSource::default();

        assert!(split(b"", 2, 3, &mut source).is_err());
        assert!(split(SECRET, 5, 3, &mut source).is_err());
        assert!(split(SECRET, 2, 300, &mut source).is_err());
        assert_eq!(source.calls, 0);

        assert_eq!(
            split(SECRET, 2, 3, &mut source),
            Err(ShamirError::RandomUnavailable)
        );
        assert_eq!(source.calls, 1);
    }

    #[test]
    fn failed_fill_yields_no_shares() {
        let mut source = FailingSource::default();

        for (needed, total) in [(2, 2), (4, 6), (255, 255)] {
            assert_eq!(
                split(&[0x42; 255], needed, total, &mut source),
                Err(ShamirError::RandomUnavailable)
            );
        }
        assert_eq!(source.calls, 3);
    }
}
