// Copyright (c) Silence Laboratories Pte. Ltd. All Rights Reserved.
// This software is licensed under the Silence Laboratories License Agreement.

//! Arithmetic in GF(256) with the primitive polynomial 0x11d and
//! generator 2 (the field of RFC 6330, section 5.7).
//!
//! Multiplication and division go through exp/log tables built at
//! compile time. The exp table is double length so that the sum of two
//! logarithms indexes it directly, without a reduction modulo 255.

use std::ops::{Add, AddAssign, Mul, MulAssign, Sub};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::error::ShamirError;

/// x^8 + x^4 + x^3 + x^2 + 1
pub const POLY: u16 = 0x11d;

const fn build_tables() -> ([u8; 510], [u8; 256]) {
    let mut exp = [0u8; 510];
    let mut log = [0u8; 256];

    let mut x: u16 = 1;
    let mut i = 0;
    while i < 255 {
        exp[i] = x as u8;
        exp[i + 255] = x as u8;
        log[x as usize] = i as u8;

        // multiply by the generator
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= POLY;
        }
        i += 1;
    }

    (exp, log)
}

const TABLES: ([u8; 510], [u8; 256]) = build_tables();

/// `EXP[i] = 2^i`, indices 255..510 repeat 0..255.
pub(crate) static EXP: [u8; 510] = TABLES.0;

/// `LOG[x]` is the discrete logarithm of `x`; `LOG[0]` is never read.
pub(crate) static LOG: [u8; 256] = TABLES.1;

/// An element of GF(256).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "zeroize", derive(Zeroize))]
pub struct Gf256(pub u8);

impl Gf256 {
    pub const ZERO: Gf256 = Gf256(0);
    pub const ONE: Gf256 = Gf256(1);

    /// Divide `self` by `rhs`.
    pub fn try_div(self, rhs: Gf256) -> Result<Gf256, ShamirError> {
        if rhs.0 == 0 {
            return Err(ShamirError::DivideByZero);
        }
        if self.0 == 0 {
            return Ok(Gf256::ZERO);
        }

        let idx = LOG[self.0 as usize] as usize + 255
            - LOG[rhs.0 as usize] as usize;

        Ok(Gf256(EXP[idx]))
    }
}

impl From<u8> for Gf256 {
    fn from(b: u8) -> Self {
        Gf256(b)
    }
}

impl From<Gf256> for u8 {
    fn from(e: Gf256) -> Self {
        e.0
    }
}

// Addition and subtraction are both XOR in characteristic 2.

impl Add for Gf256 {
    type Output = Gf256;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn add(self, rhs: Gf256) -> Gf256 {
        Gf256(self.0 ^ rhs.0)
    }
}

impl AddAssign for Gf256 {
    #[allow(clippy::suspicious_op_assign_impl)]
    fn add_assign(&mut self, rhs: Gf256) {
        self.0 ^= rhs.0;
    }
}

impl Sub for Gf256 {
    type Output = Gf256;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn sub(self, rhs: Gf256) -> Gf256 {
        Gf256(self.0 ^ rhs.0)
    }
}

impl Mul for Gf256 {
    type Output = Gf256;

    fn mul(self, rhs: Gf256) -> Gf256 {
        if self.0 == 0 || rhs.0 == 0 {
            return Gf256::ZERO;
        }

        let idx = LOG[self.0 as usize] as usize + LOG[rhs.0 as usize] as usize;

        Gf256(EXP[idx])
    }
}

impl MulAssign for Gf256 {
    fn mul_assign(&mut self, rhs: Gf256) {
        *self = *self * rhs;
    }
}
