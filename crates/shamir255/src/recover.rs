// Copyright (c) Silence Laboratories Pte. Ltd. All Rights Reserved.
// This software is licensed under the Silence Laboratories License Agreement.

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::{
    error::ShamirError,
    gf256::Gf256,
    share::{validate, Share},
};

/// Lagrange basis polynomials evaluated at zero:
///
/// ```text
/// l_i(0) = prod_{j != i} x_j / prod_{j != i} (x_j - x_i)
/// ```
///
/// Computed once per recovery, independent of the secret length.
pub(crate) fn lagrange_weights(xs: &[Gf256]) -> Result<Vec<Gf256>, ShamirError> {
    xs.iter()
        .enumerate()
        .map(|(i, &xi)| {
            let (num, den) = xs
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold((Gf256::ONE, Gf256::ONE), |(num, den), (_, &xj)| {
                    (num * xj, den * (xj - xi))
                });

            num.try_div(den)
        })
        .collect()
}

/// Recover the secret from at least two shares of one split.
///
/// The result equals the secret only if at least `needed` correct shares
/// are supplied. Fewer shares yield an unrelated byte string, not an
/// error; the scheme has no way to tell the two apart.
pub fn recover(shares: &[Share]) -> Result<Vec<u8>, ShamirError> {
    let len = validate(shares).map_err(|err| {
        tracing::debug!(%err, "rejected shares");
        err
    })?;

    tracing::debug!(
        count = shares.len(),
        len,
        "recovering secret over GF(256)"
    );

    let xs: Vec<Gf256> = shares.iter().map(|s| Gf256(s.x)).collect();

    #[cfg_attr(not(feature = "zeroize"), allow(unused_mut))]
    let mut weights = lagrange_weights(&xs)?;

    let secret = (0..len)
        .map(|j| {
            shares
                .iter()
                .zip(&weights)
                .fold(Gf256::ZERO, |acc, (share, &w)| acc + Gf256(share.y[j]) * w)
                .0
        })
        .collect();

    #[cfg(feature = "zeroize")]
    weights.zeroize();

    Ok(secret)
}
