// Copyright (c) Silence Laboratories Pte. Ltd. All Rights Reserved.
// This software is licensed under the Silence Laboratories License Agreement.

//! Secret sharing over the integers modulo a 2048-bit prime.
//!
//! The secret, prefixed with [`MARKER`], is read as one big-endian
//! integer and shared with a single polynomial. Every share is exactly
//! [`SHARE_BYTES`] long, whatever the secret length. The marker lets
//! recovery reject most share sets that do not reconstruct a secret.
//!
//! Shares produced here are not interchangeable with GF(256) shares.

use crypto_bigint::modular::runtime_mod::{DynResidue, DynResidueParams};
use crypto_bigint::{Encoding, U2048};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::{
    error::ShamirError,
    params::{check_secret, Threshold},
    share::{validate, Share, ShareSet},
    source::CoefficientSource,
};

const LIMBS: usize = U2048::LIMBS;

/// RFC 3526, 2048-bit MODP group
pub const MODULUS: U2048 = U2048::from_be_hex(concat!(
    "ffffffffffffffffc90fdaa22168c234c4c6628b80dc1cd129024e088a67cc74",
    "020bbea63b139b22514a08798e3404ddef9519b3cd3a431b302b0a6df25f1437",
    "4fe1356d6d51c245e485b576625e7ec6f44c42e9a637ed6b0bff5cb6f406b7ed",
    "ee386bfb5a899fa5ae9f24117c4b1fe649286651ece45b3dc2007cb8a163bf05",
    "98da48361c55d39a69163fa8fd24cf5f83655d23dca3ad961c62f356208552bb",
    "9ed529077096966d670c354e4abc9804f1746c08ca18217c32905e462e36ce3b",
    "e39e772c180e86039b2783a2ec07a28fb5c55df06f4c52c9de2bcbf695581718",
    "3995497cea956ae515d2261898fa051015728e5a8aacaa68ffffffffffffffff",
));

/// Length of every share value.
pub const SHARE_BYTES: usize = U2048::BYTES;

/// Prefix byte of the encoded secret.
pub const MARKER: u8 = 0x53;

// 2^2048 - p < 2^1984, so a draw is almost never rejected
const MAX_DRAWS: usize = 16;

fn encode_secret(secret: &[u8]) -> U2048 {
    let mut buf = [0u8; SHARE_BYTES];
    let start = SHARE_BYTES - secret.len();

    buf[start - 1] = MARKER;
    buf[start..].copy_from_slice(secret);

    let value = U2048::from_be_slice(&buf);

    #[cfg(feature = "zeroize")]
    buf.zeroize();

    value
}

#[cfg_attr(not(feature = "zeroize"), allow(unused_mut))]
fn decode_secret(value: &U2048) -> Result<Vec<u8>, ShamirError> {
    let mut bytes = value.to_be_bytes();

    let secret = match bytes.iter().position(|&b| b != 0) {
        Some(start) if bytes[start] == MARKER => Ok(bytes[start + 1..].to_vec()),
        _ => Err(ShamirError::MissingMarker),
    };

    #[cfg(feature = "zeroize")]
    bytes.zeroize();

    secret
}

/// Uniform field element, by rejection sampling.
fn random_element<S: CoefficientSource + ?Sized>(
    source: &mut S,
) -> Result<U2048, ShamirError> {
    let mut buf = [0u8; SHARE_BYTES];
    let mut drawn = Err(ShamirError::RandomUnavailable);

    for _ in 0..MAX_DRAWS {
        if let Err(err) = source.fill(&mut buf) {
            drawn = Err(err);
            break;
        }

        let value = U2048::from_be_slice(&buf);
        if value < MODULUS {
            drawn = Ok(value);
            break;
        }
    }

    // also wipes a rejected or partial draw
    #[cfg(feature = "zeroize")]
    buf.zeroize();

    drawn
}

fn field_params() -> DynResidueParams<LIMBS> {
    DynResidueParams::new(&MODULUS)
}

/// Horner's method, seeded with the highest coefficient.
fn eval(
    coeffs: &[DynResidue<LIMBS>],
    point: &DynResidue<LIMBS>,
    params: DynResidueParams<LIMBS>,
) -> DynResidue<LIMBS> {
    let mut rev = coeffs.iter().rev();
    let mut acc = rev.next().copied().unwrap_or(DynResidue::zero(params));

    for a in rev {
        acc = acc.mul(point).add(a);
    }

    acc
}

/// l_i(0) = prod x_j / prod (x_j - x_i)
fn lagrange_weights(
    xs: &[DynResidue<LIMBS>],
    params: DynResidueParams<LIMBS>,
) -> Result<Vec<DynResidue<LIMBS>>, ShamirError> {
    xs.iter()
        .enumerate()
        .map(|(i, xi)| {
            let (num, den) = xs
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold(
                    (DynResidue::one(params), DynResidue::one(params)),
                    |(num, den), (_, xj)| (num.mul(xj), den.mul(&xj.sub(xi))),
                );

            if den.retrieve() == U2048::ZERO {
                return Err(ShamirError::DivideByZero);
            }

            Ok(num.mul(&den.invert().0))
        })
        .collect()
}

/// Split `secret` into `total` fixed-width shares, any `needed` of which
/// recover it.
#[cfg_attr(not(feature = "zeroize"), allow(unused_mut))]
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

    tracing::debug!(
        needed,
        total,
        len = secret.len(),
        "splitting secret over the prime field"
    );

    let params = field_params();

    let mut coeffs = Vec::with_capacity(threshold.needed());
    coeffs.push(DynResidue::new(&encode_secret(secret), params));

    let drawn = (0..threshold.degree()).try_for_each(|_| {
        coeffs.push(DynResidue::new(&random_element(&mut *source)?, params));
        Ok::<_, ShamirError>(())
    });

    let shares = drawn.map(|_| {
        (1..=threshold.total() as u8)
            .map(|x| {
                let point = DynResidue::new(&U2048::from_u8(x), params);
                let y = eval(&coeffs, &point, params).retrieve();

                Share {
                    x,
                    y: y.to_be_bytes().to_vec(),
                }
            })
            .collect::<Vec<_>>()
    });

    // coeffs[0] holds the encoded secret
    #[cfg(feature = "zeroize")]
    coeffs.zeroize();

    shares.map(ShareSet::from_sorted)
}

/// Recover a secret from shares produced by [`split`].
///
/// Besides the checks of the GF(256) recovery, every value must be
/// [`SHARE_BYTES`] long and below [`MODULUS`], and the interpolated value
/// must carry the marker.
#[cfg_attr(not(feature = "zeroize"), allow(unused_mut))]
pub fn recover(shares: &[Share]) -> Result<Vec<u8>, ShamirError> {
    let len = validate(shares).map_err(|err| {
        tracing::debug!(%err, "rejected shares");
        err
    })?;

    if len != SHARE_BYTES {
        return Err(ShamirError::InconsistentShareLength {
            expected: SHARE_BYTES,
            found: len,
        });
    }

    tracing::debug!(
        count = shares.len(),
        "recovering secret over the prime field"
    );

    let params = field_params();

    let xs: Vec<DynResidue<LIMBS>> = shares
        .iter()
        .map(|s| DynResidue::new(&U2048::from_u8(s.x), params))
        .collect();

    let mut ys = shares
        .iter()
        .map(|s| {
            let value = U2048::from_be_slice(&s.y);
            if value < MODULUS {
                Ok(DynResidue::new(&value, params))
            } else {
                Err(ShamirError::InvalidShareValue(s.x))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    let secret = lagrange_weights(&xs, params).and_then(|mut weights| {
        let mut value = ys
            .iter()
            .zip(&weights)
            .fold(DynResidue::zero(params), |acc, (y, w)| acc.add(&y.mul(w)));
        let mut encoded = value.retrieve();

        let secret = decode_secret(&encoded);

        #[cfg(feature = "zeroize")]
        {
            weights.zeroize();
            value.zeroize();
            encoded.zeroize();
        }

        secret
    });

    #[cfg(feature = "zeroize")]
    ys.zeroize();

    secret
}
