// Copyright (c) Silence Laboratories Pte. Ltd. All Rights Reserved.
// This software is licensed under the Silence Laboratories License Agreement.

use std::ops::Deref;

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{error::ShamirError, params::consts::MAX_SHARES};

/// One share: the evaluation point `x` and one evaluation per secret
/// byte.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "zeroize", derive(Zeroize, ZeroizeOnDrop))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Share {
    pub x: u8,
    pub y: Vec<u8>,
}

impl Share {
    /// Create a share from an x-coordinate given as a plain integer.
    pub fn new(x: usize, y: impl Into<Vec<u8>>) -> Result<Self, ShamirError> {
        if x == 0 || x > MAX_SHARES {
            return Err(ShamirError::OutOfRangeX(x));
        }

        Ok(Self {
            x: x as u8,
            y: y.into(),
        })
    }
}

/// Output of share generation: shares ordered by x, keyed `1..=total`.
///
/// Deserializes from a plain list of shares through the [`TryFrom`]
/// conversion, so a set read back is sorted and free of repeated or zero
/// x-coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Share>", into = "Vec<Share>")
)]
pub struct ShareSet {
    shares: Vec<Share>,
}

impl ShareSet {
    /// `shares` must be sorted by x with no repeats.
    pub(crate) fn from_sorted(shares: Vec<Share>) -> Self {
        debug_assert!(shares.windows(2).all(|w| w[0].x < w[1].x));
        Self { shares }
    }

    /// Share with x-coordinate `x`, if present.
    pub fn share(&self, x: u8) -> Option<&Share> {
        self.shares
            .binary_search_by_key(&x, |s| s.x)
            .ok()
            .map(|idx| &self.shares[idx])
    }

    /// Clone the shares with the given x-coordinates, in the given order.
    /// Unknown coordinates are skipped.
    pub fn select(&self, xs: &[u8]) -> Vec<Share> {
        xs.iter()
            .filter_map(|&x| self.share(x))
            .cloned()
            .collect()
    }

    pub fn into_vec(self) -> Vec<Share> {
        self.shares
    }
}

impl TryFrom<Vec<Share>> for ShareSet {
    type Error = ShamirError;

    /// Sort `shares` by x, rejecting x = 0 and repeated coordinates.
    fn try_from(mut shares: Vec<Share>) -> Result<Self, Self::Error> {
        shares.sort_unstable_by_key(|s| s.x);

        if let Some(first) = shares.first() {
            if first.x == 0 {
                return Err(ShamirError::OutOfRangeX(0));
            }
        }

        if let Some(w) = shares.windows(2).find(|w| w[0].x == w[1].x) {
            return Err(ShamirError::DuplicateX(w[0].x));
        }

        Ok(Self { shares })
    }
}

impl From<ShareSet> for Vec<Share> {
    fn from(set: ShareSet) -> Self {
        set.into_vec()
    }
}

impl Deref for ShareSet {
    type Target = [Share];

    fn deref(&self) -> &Self::Target {
        &self.shares
    }
}

impl<'a> IntoIterator for &'a ShareSet {
    type Item = &'a Share;
    type IntoIter = std::slice::Iter<'a, Share>;

    fn into_iter(self) -> Self::IntoIter {
        self.shares.iter()
    }
}

/// Check the input of share recovery and return the common length of
/// the share values.
pub(crate) fn validate(shares: &[Share]) -> Result<usize, ShamirError> {
    if shares.len() < 2 {
        return Err(ShamirError::InsufficientShares(shares.len()));
    }

    let expected = shares[0].y.len();
    let mut seen = [false; 256];

    for share in shares {
        if share.x == 0 {
            return Err(ShamirError::OutOfRangeX(0));
        }

        if seen[share.x as usize] {
            return Err(ShamirError::DuplicateX(share.x));
        }
        seen[share.x as usize] = true;

        if share.y.is_empty() || share.y.len() != expected {
            return Err(ShamirError::InconsistentShareLength {
                expected,
                found: share.y.len(),
            });
        }
    }

    Ok(expected)
}
