//! Field arithmetic modulo p = 2^255 - 19
//!
//! Elements are held as five unsigned 51-bit limbs (radix 2^51) so that a
//! limb product fits comfortably in a `u128`. Limbs are kept loosely
//! reduced (below 2^52) between operations; only `to_bytes` produces the
//! canonical representative in [0, p).
//!
//! Every operation runs in time independent of the limb values.

use core::fmt;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

const LOW_51_BIT_MASK: u64 = (1u64 << 51) - 1;

/// 16 * p, limb by limb, added before subtraction so limbs never underflow
const SIXTEEN_P: [u64; 5] = [
    36028797018963664, // 16 * (2^51 - 19)
    36028797018963952, // 16 * (2^51 - 1)
    36028797018963952,
    36028797018963952,
    36028797018963952,
];

/// Field element representing a value modulo p = 2^255 - 19
#[derive(Clone, Copy, Zeroize)]
pub struct FieldElement(pub(crate) [u64; 5]);

impl FieldElement {
    /// The additive identity
    pub const ZERO: FieldElement = FieldElement([0, 0, 0, 0, 0]);

    /// The multiplicative identity
    pub const ONE: FieldElement = FieldElement([1, 0, 0, 0, 0]);

    /// Decode a little-endian u-coordinate
    ///
    /// The most significant bit is masked off as RFC 7748 requires.
    /// Non-canonical encodings (values in [p, 2^255)) are accepted; they
    /// are reduced by the arithmetic that follows.
    pub fn from_bytes(bytes: &[u8; 32]) -> FieldElement {
        FieldElement([
            load8(&bytes[0..]) & LOW_51_BIT_MASK,
            (load8(&bytes[6..]) >> 3) & LOW_51_BIT_MASK,
            (load8(&bytes[12..]) >> 6) & LOW_51_BIT_MASK,
            (load8(&bytes[19..]) >> 1) & LOW_51_BIT_MASK,
            (load8(&bytes[24..]) >> 12) & LOW_51_BIT_MASK,
        ])
    }

    /// Encode the canonical representative in [0, p) as 32 little-endian bytes
    pub fn to_bytes(self) -> [u8; 32] {
        let mut limbs = weak_reduce(self.0);

        // The value is now below 2p, so it is >= p exactly when value + 19
        // overflows 2^255. Compute that carry without branching.
        let mut q = (limbs[0] + 19) >> 51;
        q = (limbs[1] + q) >> 51;
        q = (limbs[2] + q) >> 51;
        q = (limbs[3] + q) >> 51;
        q = (limbs[4] + q) >> 51;

        // value - q*p == value + 19q - q*2^255; the 2^255 term is the bit
        // dropped from the top limb below.
        limbs[0] += 19 * q;

        limbs[1] += limbs[0] >> 51;
        limbs[0] &= LOW_51_BIT_MASK;
        limbs[2] += limbs[1] >> 51;
        limbs[1] &= LOW_51_BIT_MASK;
        limbs[3] += limbs[2] >> 51;
        limbs[2] &= LOW_51_BIT_MASK;
        limbs[4] += limbs[3] >> 51;
        limbs[3] &= LOW_51_BIT_MASK;
        limbs[4] &= LOW_51_BIT_MASK;

        // Pack 5 x 51 = 255 bits into 32 bytes.
        let mut out = [0u8; 32];
        let mut acc: u128 = 0;
        let mut acc_bits = 0u32;
        let mut idx = 0usize;
        for &limb in limbs.iter() {
            acc |= (limb as u128) << acc_bits;
            acc_bits += 51;
            while acc_bits >= 8 {
                out[idx] = acc as u8;
                acc >>= 8;
                acc_bits -= 8;
                idx += 1;
            }
        }
        out[idx] = acc as u8;

        limbs.zeroize();
        out
    }

    /// Add two field elements
    pub fn add(&self, other: &FieldElement) -> FieldElement {
        let mut limbs = [0u64; 5];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = self.0[i] + other.0[i];
        }
        FieldElement(weak_reduce(limbs))
    }

    /// Subtract two field elements
    pub fn sub(&self, other: &FieldElement) -> FieldElement {
        let mut limbs = [0u64; 5];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = (self.0[i] + SIXTEEN_P[i]) - other.0[i];
        }
        FieldElement(weak_reduce(limbs))
    }

    /// Multiply two field elements
    pub fn mul(&self, other: &FieldElement) -> FieldElement {
        #[inline(always)]
        fn m(x: u64, y: u64) -> u128 {
            (x as u128) * (y as u128)
        }

        let a = &self.0;
        let b = &other.0;

        // 2^255 = 19 (mod p), so limb products that land at or above
        // position 5 wrap around multiplied by 19.
        let b1_19 = b[1] * 19;
        let b2_19 = b[2] * 19;
        let b3_19 = b[3] * 19;
        let b4_19 = b[4] * 19;

        let c0: u128 = m(a[0], b[0]) + m(a[4], b1_19) + m(a[3], b2_19) + m(a[2], b3_19) + m(a[1], b4_19);
        let mut c1: u128 = m(a[1], b[0]) + m(a[0], b[1]) + m(a[4], b2_19) + m(a[3], b3_19) + m(a[2], b4_19);
        let mut c2: u128 = m(a[2], b[0]) + m(a[1], b[1]) + m(a[0], b[2]) + m(a[4], b3_19) + m(a[3], b4_19);
        let mut c3: u128 = m(a[3], b[0]) + m(a[2], b[1]) + m(a[1], b[2]) + m(a[0], b[3]) + m(a[4], b4_19);
        let mut c4: u128 = m(a[4], b[0]) + m(a[3], b[1]) + m(a[2], b[2]) + m(a[1], b[3]) + m(a[0], b[4]);

        let mut out = [0u64; 5];

        c1 += ((c0 >> 51) as u64) as u128;
        out[0] = (c0 as u64) & LOW_51_BIT_MASK;

        c2 += ((c1 >> 51) as u64) as u128;
        out[1] = (c1 as u64) & LOW_51_BIT_MASK;

        c3 += ((c2 >> 51) as u64) as u128;
        out[2] = (c2 as u64) & LOW_51_BIT_MASK;

        c4 += ((c3 >> 51) as u64) as u128;
        out[3] = (c3 as u64) & LOW_51_BIT_MASK;

        let carry = (c4 >> 51) as u64;
        out[4] = (c4 as u64) & LOW_51_BIT_MASK;

        out[0] += carry * 19;
        out[1] += out[0] >> 51;
        out[0] &= LOW_51_BIT_MASK;

        FieldElement(out)
    }

    /// Square a field element
    pub fn square(&self) -> FieldElement {
        self.mul(self)
    }

    /// Compute self^(2^k) by k successive squarings
    pub fn pow2k(&self, k: u32) -> FieldElement {
        debug_assert!(k > 0);
        let mut result = self.square();
        for _ in 1..k {
            result = result.square();
        }
        result
    }

    /// Multiply by a small constant (used for the ladder constant a24)
    pub fn mul_small(&self, k: u32) -> FieldElement {
        let mut out = [0u64; 5];
        let mut carry: u128 = 0;
        for (i, limb) in out.iter_mut().enumerate() {
            let t = (self.0[i] as u128) * (k as u128) + carry;
            *limb = (t as u64) & LOW_51_BIT_MASK;
            carry = t >> 51;
        }
        out[0] += (carry as u64) * 19;
        FieldElement(weak_reduce(out))
    }

    /// Multiplicative inverse using Fermat's little theorem: a^(p-2)
    ///
    /// Uses a fixed addition chain of 254 squarings and 11 multiplications,
    /// so the running time does not depend on the value. The inverse of
    /// zero is zero.
    pub fn invert(&self) -> FieldElement {
        let z2 = self.square(); // 2
        let z9 = z2.pow2k(2).mul(self); // 9
        let z11 = z9.mul(&z2); // 11
        let z_5_0 = z11.square().mul(&z9); // 2^5 - 1
        let z_10_0 = z_5_0.pow2k(5).mul(&z_5_0); // 2^10 - 1
        let z_20_0 = z_10_0.pow2k(10).mul(&z_10_0); // 2^20 - 1
        let z_40_0 = z_20_0.pow2k(20).mul(&z_20_0); // 2^40 - 1
        let z_50_0 = z_40_0.pow2k(10).mul(&z_10_0); // 2^50 - 1
        let z_100_0 = z_50_0.pow2k(50).mul(&z_50_0); // 2^100 - 1
        let z_200_0 = z_100_0.pow2k(100).mul(&z_100_0); // 2^200 - 1
        let z_250_0 = z_200_0.pow2k(50).mul(&z_50_0); // 2^250 - 1

        z_250_0.pow2k(5).mul(&z11) // 2^255 - 21 = p - 2
    }

    /// Constant-time zero check on the canonical encoding
    pub fn is_zero(&self) -> Choice {
        curvelock_internal::constant_time::ct_is_zero(&self.to_bytes())
    }
}

/// Fold limb overflow back into range; output limbs are below 2^52
#[inline(always)]
fn weak_reduce(mut limbs: [u64; 5]) -> [u64; 5] {
    let c0 = limbs[0] >> 51;
    let c1 = limbs[1] >> 51;
    let c2 = limbs[2] >> 51;
    let c3 = limbs[3] >> 51;
    let c4 = limbs[4] >> 51;

    limbs[0] &= LOW_51_BIT_MASK;
    limbs[1] &= LOW_51_BIT_MASK;
    limbs[2] &= LOW_51_BIT_MASK;
    limbs[3] &= LOW_51_BIT_MASK;
    limbs[4] &= LOW_51_BIT_MASK;

    limbs[0] += c4 * 19;
    limbs[1] += c0;
    limbs[2] += c1;
    limbs[3] += c2;
    limbs[4] += c3;

    limbs
}

#[inline(always)]
fn load8(input: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&input[..8]);
    u64::from_le_bytes(buf)
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        FieldElement([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
            u64::conditional_select(&a.0[4], &b.0[4], choice),
        ])
    }

    fn conditional_swap(a: &mut Self, b: &mut Self, choice: Choice) {
        for (x, y) in a.0.iter_mut().zip(b.0.iter_mut()) {
            u64::conditional_swap(x, y, choice);
        }
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_bytes().ct_eq(&other.to_bytes())
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(")?;
        for byte in self.to_bytes().iter().rev() {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}
