// Copyright (c) Silence Laboratories Pte. Ltd. All Rights Reserved.
// This software is licensed under the Silence Laboratories License Agreement.

use crate::{
    error::ShamirError,
    share::{Share, ShareSet},
    source::CoefficientSource,
};

/// A threshold secret sharing scheme.
///
/// Implementations encode shares differently; a share set must be
/// recovered by the same scheme that produced it.
pub trait SecretSharing {
    /// Split `secret` into `total` shares, any `needed` of which recover it.
    fn share<S: CoefficientSource + ?Sized>(
        &self,
        secret: &[u8],
        needed: usize,
        total: usize,
        source: &mut S,
    ) -> Result<ShareSet, ShamirError>;

    /// Recover the secret from a subset of the shares.
    fn recover(&self, shares: &[Share]) -> Result<Vec<u8>, ShamirError>;
}
