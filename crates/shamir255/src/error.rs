// Copyright (c) Silence Laboratories Pte. Ltd. All Rights Reserved.
// This software is licensed under the Silence Laboratories License Agreement.

use thiserror::Error;

/// Errors returned by share generation and recovery.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShamirError {
    /// Secret is empty or longer than 255 bytes
    #[error("Invalid secret length {0}, must be between 1 and 255 bytes")]
    InvalidSecret(usize),

    /// `needed < 2` or `needed > total`
    #[error("Invalid threshold: {needed} of {total}")]
    InvalidThreshold { needed: usize, total: usize },

    /// More than 255 shares requested
    #[error("Invalid share count {0}, at most 255 shares are supported")]
    InvalidShareCount(usize),

    /// The coefficient source could not produce random bytes
    #[error("Secure random source unavailable")]
    RandomUnavailable,

    /// Fewer than 2 shares supplied to recovery
    #[error("Insufficient shares: {0} provided, at least 2 required")]
    InsufficientShares(usize),

    /// Share x-coordinate outside of 1..=255
    #[error("Share x-coordinate {0} out of range")]
    OutOfRangeX(usize),

    /// Two shares with the same x-coordinate
    #[error("Duplicate share x-coordinate {0}")]
    DuplicateX(u8),

    /// Share values of different or zero length
    #[error("Inconsistent share length: expected {expected}, found {found}")]
    InconsistentShareLength { expected: usize, found: usize },

    /// Share value is not an element of the field
    #[error("Invalid share value for x-coordinate {0}")]
    InvalidShareValue(u8),

    /// Recovered value does not start with the secret marker
    #[error("Recovered value carries no secret marker")]
    MissingMarker,

    /// Division by zero during interpolation. Unique x-coordinates make
    /// this unreachable; seeing it means an internal invariant broke.
    #[error("Division by zero")]
    DivideByZero,
}
