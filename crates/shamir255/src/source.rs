// Copyright (c) Silence Laboratories Pte. Ltd. All Rights Reserved.
// This software is licensed under the Silence Laboratories License Agreement.

use rand::{CryptoRng, RngCore};

use crate::error::ShamirError;

/// Source of polynomial coefficients.
///
/// Implemented for every cryptographically secure RNG. A source that
/// cannot fill the buffer must fail with
/// [`ShamirError::RandomUnavailable`]; there is no fallback to a weaker
/// generator.
pub trait CoefficientSource {
    /// Fill `buf` with secure random bytes.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), ShamirError>;
}

impl<R: CryptoRng + RngCore + ?Sized> CoefficientSource for R {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), ShamirError> {
        self.try_fill_bytes(buf).map_err(|err| {
            tracing::debug!(%err, "coefficient source failed");
            ShamirError::RandomUnavailable
        })
    }
}
