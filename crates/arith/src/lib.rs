//! arith: the coefficient-ring contract shared by the monomial, poly and
//! grobner crates, plus the concrete rings they're exercised over.

#![deny(warnings)]

mod ring;

pub use ring::{CoeffRing, GaussianInt, PrimeField, Rational};
