//! Gröbner basis computation over multivariate polynomial rings and their
//! free modules: monomial orderings, multivariate reduction, the
//! Buchberger engine with pair scheduling and the product criterion,
//! transformation-matrix provenance, syzygy computation, and a
//! thread-parallel engine variant.
//!
//! The coefficient ring is abstracted behind [`arith::CoeffRing`] — the
//! engine works over fields like [`arith::Rational`] and [`arith::PrimeField`]
//! and over non-field rings like [`arith::GaussianInt`] alike, since
//! S-polynomial construction only ever cross-multiplies leading
//! coefficients rather than inverting one into the other.
//!
//! Polynomials and free-module elements share one reduction and engine
//! implementation via the [`poly::Graded`] trait: a plain polynomial is the
//! `k = 1` case, a [`poly::ModuleElement`] generalises it to `k > 1`.

#![deny(warnings)]

mod basis;
mod concurrent;
mod engine;
mod error;
mod options;
mod pair_queue;
mod reducer;
mod syzygy;

pub use error::{GrobnerError, GrobnerResult};
pub use options::{Backend, GrobnerOptions, ProgressCallback};
pub use reducer::{divrem as divrem_raw, leaddivrem, rem as rem_raw, tail_divrem, ReduceStep};
pub use syzygy::syzygies;

pub use monomial::{GRevLex, GrLex, Lex, Monomial, MonomialOrder};
pub use poly::{Graded, ModuleElement, Polynomial, Signature, Term};

use arith::CoeffRing;

/// Computes a Gröbner basis of the ideal (or submodule, for `k > 1`)
/// generated by `inputs` under `order`.
///
/// An empty `inputs` is not an error — it is the basis of the zero ideal,
/// and the result is the empty vector. Zero inputs are dropped silently;
/// duplicate generators are absorbed by inter-reduction. The result is
/// generally *not* reduced (surviving elements may still share redundant
/// leading terms with each other across separate insertion events is
/// avoided by inter-reduction, but no final minimalization pass runs);
/// callers wanting a canonical normal form should also call
/// [`sort_reduced`].
pub fn groebner_basis<C, O, T>(inputs: Vec<T>, num_vars: usize, order: O, options: &GrobnerOptions) -> GrobnerResult<Vec<T>>
where
    C: CoeffRing + Send + Sync + 'static,
    O: MonomialOrder + Send + Sync + 'static,
    T: Graded<C> + Send + Sync + 'static,
{
    let (basis, _) = run(inputs, num_vars, order, options)?;
    Ok(basis)
}

/// Like [`groebner_basis`], but also returns the transformation matrix:
/// row `i` of the result expresses `basis[i]` as a combination of the
/// original `inputs`, so `basis[i] == Σ_j transformation[i][j] * inputs[j]`.
///
/// Forces `options.with_transformation = true` regardless of the value
/// the caller passed in.
pub fn groebner_transformation<C, O, T>(
    inputs: Vec<T>,
    num_vars: usize,
    order: O,
    options: &GrobnerOptions,
) -> GrobnerResult<(Vec<T>, Vec<Vec<Polynomial<C, O>>>)>
where
    C: CoeffRing + Send + Sync + 'static,
    O: MonomialOrder + Send + Sync + 'static,
    T: Graded<C> + Send + Sync + 'static,
{
    let mut with_transform = options.clone();
    with_transform.with_transformation = true;
    let (basis, transformation) = run(inputs, num_vars, order, &with_transform)?;
    Ok((basis, transformation.expect("with_transformation was forced on")))
}

fn run<C, O, T>(
    inputs: Vec<T>,
    num_vars: usize,
    order: O,
    options: &GrobnerOptions,
) -> GrobnerResult<(Vec<T>, Option<Vec<Vec<Polynomial<C, O>>>>)>
where
    C: CoeffRing + Send + Sync + 'static,
    O: MonomialOrder + Send + Sync + 'static,
    T: Graded<C> + Send + Sync + 'static,
{
    match options.backend {
        Backend::Sequential => engine::buchberger_sequential(inputs, num_vars, order, options),
        Backend::Parallel => concurrent::buchberger_parallel(inputs, num_vars, order, options),
    }
}

/// Reduces `f` against `basis`, returning only the remainder.
pub fn rem<C, O, T>(f: &T, basis: &[T], num_vars: usize, order: &O) -> T
where
    C: CoeffRing,
    O: MonomialOrder,
    T: Graded<C>,
{
    reducer::rem(f, basis, num_vars, order)
}

/// Reduces `f` against `basis`, returning the quotients and the
/// remainder: `f == r + Σ_i q[i] * basis[i]`.
pub fn divrem<C, O, T>(f: &T, basis: &[T], num_vars: usize, order: &O) -> (Vec<Polynomial<C, O>>, T)
where
    C: CoeffRing,
    O: MonomialOrder,
    T: Graded<C>,
{
    reducer::divrem(f, basis, num_vars, order)
}

/// Sorts a basis descending by leading term under `order` — a convenience
/// for callers who want a deterministic, order-comparable presentation.
/// Not applied automatically by [`groebner_basis`]: two distinct runs over
/// the same input can return elements in different insertion order even
/// though the underlying set is the same, and imposing a canonical order
/// unconditionally would hide that from callers relying on raw insertion
/// order for their own bookkeeping.
pub fn sort_reduced<C, O, T>(mut basis: Vec<T>, order: &O) -> Vec<T>
where
    C: CoeffRing,
    O: MonomialOrder,
    T: Graded<C>,
{
    basis.sort_by(|a, b| {
        if a.is_zero() || b.is_zero() {
            return a.is_zero().cmp(&b.is_zero());
        }
        order
            .compare(&b.leading_monomial().unwrap(), &a.leading_monomial().unwrap())
            .then_with(|| a.leading_row().cmp(&b.leading_row()))
    });
    basis
}

#[cfg(test)]
mod tests {
    use super::*;
    use arith::Rational;
    use poly::Polynomial as P;

    fn poly(terms: Vec<(Vec<u32>, i64)>, num_vars: usize, order: GRevLex) -> P<Rational, GRevLex> {
        P::from_terms(
            terms
                .into_iter()
                .map(|(e, c)| Term::new(Monomial::new(e), Rational::new(c, 1)))
                .collect(),
            num_vars,
            order,
        )
    }

    #[test]
    fn empty_input_yields_empty_basis() {
        let inputs: Vec<P<Rational, GRevLex>> = Vec::new();
        let basis = groebner_basis(inputs, 2, GRevLex, &GrobnerOptions::default()).unwrap();
        assert!(basis.is_empty());
    }

    #[test]
    fn classic_two_variable_example_reduces_to_the_textbook_basis() {
        // G = [x^2 - y, x^3 - x] under grevlex should produce a basis
        // generating the same ideal as {y*x - x, y^2 - y} (up to scaling
        // and ordering); check via ideal-membership instead of exact shape.
        let f1 = poly(vec![(vec![2, 0], 1), (vec![0, 1], -1)], 2, GRevLex);
        let f2 = poly(vec![(vec![3, 0], 1), (vec![1, 0], -1)], 2, GRevLex);
        let basis = groebner_basis(vec![f1.clone(), f2.clone()], 2, GRevLex, &GrobnerOptions::default()).unwrap();
        assert!(!basis.is_empty());
        let r1 = rem(&f1, &basis, 2, &GRevLex);
        let r2 = rem(&f2, &basis, 2, &GRevLex);
        assert!(r1.is_zero());
        assert!(r2.is_zero());
    }

    #[test]
    fn transformation_reconstructs_every_basis_element() {
        let f1 = poly(vec![(vec![1, 0], 1), (vec![0, 0], -1)], 2, GRevLex); // x - 1
        let f2 = poly(vec![(vec![0, 1], 1)], 2, GRevLex); // y
        let (basis, transformation) =
            groebner_transformation(vec![f1.clone(), f2.clone()], 2, GRevLex, &GrobnerOptions::default()).unwrap();
        let inputs = [f1, f2];
        for (elem, row) in basis.iter().zip(transformation.iter()) {
            let mut acc = P::zero(2, GRevLex);
            for (coeff_poly, input) in row.iter().zip(inputs.iter()) {
                acc = acc.add(&coeff_poly.mul(input));
            }
            assert_eq!(&acc, elem);
        }
    }

    #[test]
    fn divrem_invariant_round_trips_through_the_public_api() {
        let f = poly(vec![(vec![2, 0], 1)], 2, GRevLex);
        let g = poly(vec![(vec![1, 0], 1)], 2, GRevLex);
        let (q, r) = divrem(&f, &[g.clone()], 2, &GRevLex);
        assert!(r.is_zero());
        assert_eq!(q[0].mul(&g), f);
    }

    #[test]
    fn sequential_and_parallel_backends_agree() {
        // Product-criterion trigger: xy, xz, yz.
        let f1 = poly(vec![(vec![1, 1, 0], 1)], 3, GRevLex);
        let f2 = poly(vec![(vec![1, 0, 1], 1)], 3, GRevLex);
        let f3 = poly(vec![(vec![0, 1, 1], 1)], 3, GRevLex);
        let inputs = vec![f1, f2, f3];
        let seq_opts = GrobnerOptions { backend: Backend::Sequential, ..GrobnerOptions::default() };
        let par_opts = GrobnerOptions { backend: Backend::Parallel, threads: 4, ..GrobnerOptions::default() };
        let seq = groebner_basis(inputs.clone(), 3, GRevLex, &seq_opts).unwrap();
        let par = groebner_basis(inputs, 3, GRevLex, &par_opts).unwrap();
        assert_eq!(sort_reduced(seq, &GRevLex), sort_reduced(par, &GRevLex));
    }
}
