//! Wide integer literal storage.
//!
//! Integer literals that overflow `u64` are kept as little-endian base-2^64
//! limbs, up to 1024 bits. No arithmetic beyond what the lexer needs to
//! accumulate digits is provided.

use std::fmt;

/// Maximum number of 64-bit limbs (1024 bits).
pub const MAX_LIMBS: usize = 16;

/// Largest power of ten that fits in a `u64` (10^19).
const DECIMAL_CHUNK: u64 = 10_000_000_000_000_000_000;
const DECIMAL_CHUNK_DIGITS: usize = 19;

#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum BigIntError {
    #[error("Integer literal too large (max 1024 bits)")]
    TooLarge,
    #[error("digit {digit} out of range for radix {radix}")]
    InvalidDigit { digit: u8, radix: u32 },
}

/// Unsigned integer of up to 1024 bits.
///
/// `len` counts significant limbs; limbs at or past `len` are always zero,
/// so derived equality is value equality.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct BigInt {
    limbs: [u64; MAX_LIMBS],
    len: u8,
}

impl BigInt {
    pub const ZERO: BigInt = BigInt {
        limbs: [0; MAX_LIMBS],
        len: 0,
    };

    pub fn from_u64(value: u64) -> Self {
        let mut out = Self::ZERO;
        if value != 0 {
            out.limbs[0] = value;
            out.len = 1;
        }
        out
    }

    /// Accumulate digit values (not ASCII) most-significant first.
    pub fn from_digits(
        radix: u32,
        digits: impl IntoIterator<Item = u8>,
    ) -> Result<Self, BigIntError> {
        let mut value = Self::ZERO;
        for digit in digits {
            if u32::from(digit) >= radix {
                return Err(BigIntError::InvalidDigit { digit, radix });
            }
            value.mul_add(u64::from(radix), u64::from(digit))?;
        }
        Ok(value)
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "splitting a u128 product into low limb and carry"
    )]
    fn mul_add(&mut self, mul: u64, add: u64) -> Result<(), BigIntError> {
        let mut carry = u128::from(add);
        for limb in &mut self.limbs[..usize::from(self.len)] {
            let wide = u128::from(*limb) * u128::from(mul) + carry;
            *limb = wide as u64;
            carry = wide >> 64;
        }
        if carry != 0 {
            let len = usize::from(self.len);
            if len == MAX_LIMBS {
                return Err(BigIntError::TooLarge);
            }
            self.limbs[len] = carry as u64;
            self.len += 1;
        }
        Ok(())
    }

    /// Divide in place by `divisor`, returning the remainder.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "quotient and remainder of a u128 by a u64 fit in u64"
    )]
    fn div_rem_small(&mut self, divisor: u64) -> u64 {
        let mut rem: u128 = 0;
        for limb in self.limbs[..usize::from(self.len)].iter_mut().rev() {
            let cur = (rem << 64) | u128::from(*limb);
            *limb = (cur / u128::from(divisor)) as u64;
            rem = cur % u128::from(divisor);
        }
        while self.len > 0 && self.limbs[usize::from(self.len) - 1] == 0 {
            self.len -= 1;
        }
        rem as u64
    }

    /// Significant limbs, least significant first.
    pub fn limbs(&self) -> &[u64] {
        &self.limbs[..usize::from(self.len)]
    }

    /// Number of significant bits.
    pub fn bit_len(&self) -> u32 {
        match self.limbs().last() {
            None => 0,
            Some(top) => (u32::from(self.len) - 1) * 64 + (64 - top.leading_zeros()),
        }
    }

    /// The value as a `u64`, if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        match self.len {
            0 => Some(0),
            1 => Some(self.limbs[0]),
            _ => None,
        }
    }

    pub fn to_decimal_string(&self) -> String {
        if self.len == 0 {
            return "0".to_string();
        }
        let mut value = self.clone();
        let mut chunks = Vec::new();
        while value.len > 0 {
            chunks.push(value.div_rem_small(DECIMAL_CHUNK));
        }
        let mut out = String::new();
        for (i, chunk) in chunks.iter().rev().enumerate() {
            if i == 0 {
                out.push_str(&chunk.to_string());
            } else {
                out.push_str(&format!("{chunk:0width$}", width = DECIMAL_CHUNK_DIGITS));
            }
        }
        out
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({})", self.to_decimal_string())
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}
