// Copyright (c) Silence Laboratories Pte. Ltd. All Rights Reserved.
// This software is licensed under the Silence Laboratories License Agreement.

use crate::error::ShamirError;

pub mod consts {
    /// Largest number of shares; x-coordinates are the nonzero field elements.
    pub const MAX_SHARES: usize = 255;

    /// Longest secret accepted by share generation.
    pub const MAX_SECRET_LEN: usize = 255;

    /// Smallest meaningful threshold.
    pub const MIN_NEEDED: usize = 2;
}

use consts::*;

/// A validated `needed`-of-`total` threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold {
    needed: u8,
    total: u8,
}

impl Threshold {
    /// `2 <= needed <= total <= 255`
    pub fn new(needed: usize, total: usize) -> Result<Self, ShamirError> {
        if needed < MIN_NEEDED || needed > total {
            return Err(ShamirError::InvalidThreshold { needed, total });
        }

        if total > MAX_SHARES {
            return Err(ShamirError::InvalidShareCount(total));
        }

        Ok(Self {
            needed: needed as u8,
            total: total as u8,
        })
    }

    /// Number of shares required for recovery.
    pub fn needed(&self) -> usize {
        self.needed as usize
    }

    /// Number of shares produced.
    pub fn total(&self) -> usize {
        self.total as usize
    }

    /// Degree of the sharing polynomials.
    pub fn degree(&self) -> usize {
        self.needed() - 1
    }
}

/// Check the secret length for share generation.
pub(crate) fn check_secret(secret: &[u8]) -> Result<(), ShamirError> {
    if secret.is_empty() || secret.len() > MAX_SECRET_LEN {
        return Err(ShamirError::InvalidSecret(secret.len()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_thresholds() {
        let t = Threshold::new(2, 3).unwrap();
        assert_eq!((t.needed(), t.total(), t.degree()), (2, 3, 1));

        let t = Threshold::new(255, 255).unwrap();
        assert_eq!((t.needed(), t.total(), t.degree()), (255, 255, 254));

        assert!(Threshold::new(2, 255).is_ok());
    }

    #[test]
    fn invalid_thresholds() {
        assert_eq!(
            Threshold::new(1, 3),
            Err(ShamirError::InvalidThreshold { needed: 1, total: 3 })
        );
        assert_eq!(
            Threshold::new(0, 0),
            Err(ShamirError::InvalidThreshold { needed: 0, total: 0 })
        );
        assert_eq!(
            Threshold::new(5, 3),
            Err(ShamirError::InvalidThreshold { needed: 5, total: 3 })
        );
        assert_eq!(
            Threshold::new(2, 256),
            Err(ShamirError::InvalidShareCount(256))
        );
        assert_eq!(
            Threshold::new(256, 256),
            Err(ShamirError::InvalidShareCount(256))
        );
    }

    #[test]
    fn secret_bounds() {
        assert_eq!(check_secret(&[]), Err(ShamirError::InvalidSecret(0)));
        assert!(check_secret(&[0]).is_ok());
        assert!(check_secret(&[0xff; 255]).is_ok());
        assert_eq!(
            check_secret(&[0xff; 256]),
            Err(ShamirError::InvalidSecret(256))
        );
    }
}
