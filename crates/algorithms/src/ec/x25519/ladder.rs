//! Montgomery ladder on the u-line of Curve25519 (RFC 7748, section 5)
//!
//! The ladder processes every scalar bit from 254 down to 0 with the same
//! sequence of field operations. The working pair is exchanged with a
//! masked swap keyed on the XOR of consecutive bits, never with a branch.

use super::constants::{A24, BASE_POINT_U, X25519_POINT_SIZE};
use super::field::FieldElement;
use super::scalar::Scalar;
use curvelock_params::traditional::ecdh::X25519_LADDER_BITS;
use subtle::{Choice, ConditionallySelectable};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Projective working state; wiped when the ladder returns
#[derive(Zeroize, ZeroizeOnDrop)]
struct LadderState {
    x1: FieldElement,
    x2: FieldElement,
    z2: FieldElement,
    x3: FieldElement,
    z3: FieldElement,
}

impl LadderState {
    fn new(u: &[u8; X25519_POINT_SIZE]) -> Self {
        let x1 = FieldElement::from_bytes(u);
        LadderState {
            x1,
            x2: FieldElement::ONE,
            z2: FieldElement::ZERO,
            x3: x1,
            z3: FieldElement::ONE,
        }
    }

    fn conditional_swap(&mut self, choice: Choice) {
        FieldElement::conditional_swap(&mut self.x2, &mut self.x3, choice);
        FieldElement::conditional_swap(&mut self.z2, &mut self.z3, choice);
    }

    /// One combined differential addition and doubling
    fn step(&mut self) {
        let a = self.x2.add(&self.z2);
        let aa = a.square();
        let b = self.x2.sub(&self.z2);
        let bb = b.square();
        let e = aa.sub(&bb);
        let c = self.x3.add(&self.z3);
        let d = self.x3.sub(&self.z3);
        let da = d.mul(&a);
        let cb = c.mul(&b);

        self.x3 = da.add(&cb).square();
        self.z3 = self.x1.mul(&da.sub(&cb).square());
        self.x2 = aa.mul(&bb);
        self.z2 = e.mul(&aa.add(&e.mul_small(A24)));
    }
}

/// Multiply the point with u-coordinate `u` by `scalar`
///
/// Returns the encoded u-coordinate of the result. Low-order inputs give
/// the all-zero output; callers that need contributory behaviour must
/// check for it.
pub fn scalar_mult(scalar: &Scalar, u: &[u8; X25519_POINT_SIZE]) -> [u8; X25519_POINT_SIZE] {
    let mut state = LadderState::new(u);
    let mut swap = Choice::from(0);

    for i in (0..X25519_LADDER_BITS).rev() {
        let bit = scalar.bit(i);
        swap ^= bit;
        state.conditional_swap(swap);
        swap = bit;
        state.step();
    }
    state.conditional_swap(swap);

    // z2 = 0 only for low-order inputs; invert(0) = 0 maps those to zero.
    state.x2.mul(&state.z2.invert()).to_bytes()
}

/// Multiply the standard base point (u = 9) by `scalar`
pub fn scalar_mult_base(scalar: &Scalar) -> [u8; X25519_POINT_SIZE] {
    scalar_mult(scalar, &BASE_POINT_U)
}
