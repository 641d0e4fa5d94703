//! Multivariate polynomials and free-module elements over a generic
//! coefficient ring, ordered by a generic monomial order.
//!
//! The [`Graded`] trait is the capability both [`Polynomial`] and
//! [`ModuleElement`] implement, so that the reducer and Buchberger engine
//! in the `grobner` crate can be written once and used for both plain
//! ideal membership and submodule (vector-of-polynomials) computations.

#![deny(warnings)]

mod graded;
mod module_element;
mod polynomial;
mod signature;
mod term;

pub use graded::Graded;
pub use module_element::ModuleElement;
pub use polynomial::Polynomial;
pub use signature::Signature;
pub use term::Term;
