use thiserror::Error;

/// Errors the core can report. Anything else (exponent overflow, coefficient
/// arithmetic divergence) is a programmer error — wrong ring, wrong
/// order — and is expected to propagate as a panic rather than be folded
/// into this enum.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrobnerError {
    /// No nonzero generators were supplied. Not an error for
    /// `groebner_basis` (an empty basis is a perfectly good answer); only
    /// `groebner_transformation` can be configured to reject it.
    #[error("empty input: no nonzero generators")]
    EmptyInput,

    /// The supplied generators could not be base-extended to a common
    /// coefficient ring (e.g. mixing two different finite-field moduli).
    #[error("incompatible coefficient rings across inputs")]
    IncompatibleRings,

    /// `syzygies` was called on a set that is not actually a Gröbner basis:
    /// one of its own S-polynomials failed to reduce to zero.
    #[error("input is not a Gröbner basis: S-polynomial of elements {0} and {1} did not reduce to zero")]
    NotAGroebnerBasis(usize, usize),

    /// Cooperative cancellation fired before the computation finished.
    #[error("computation was cancelled")]
    Cancelled,
}

pub type GrobnerResult<T> = Result<T, GrobnerError>;
