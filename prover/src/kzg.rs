use ark_bn254::Fr;
use lagrange_kzg_primitives::{
    domain::Domain,
    errors::KzgError,
    helpers,
    keys::CommitKey,
    polynomial::{divide_poly_by_x_minus_a, evaluate_lagrange_polynomial, PolynomialEvalForm},
    proof::{Commitment, OpeningProof},
};
use tracing::trace;

fn check_polynomial_size(
    polynomial: &PolynomialEvalForm,
    commit_key: &CommitKey,
) -> Result<(), KzgError> {
    if polynomial.is_empty() || polynomial.len() > commit_key.len() {
        return Err(KzgError::InvalidPolynomialSize {
            polynomial_len: polynomial.len(),
            srs_len: commit_key.len(),
        });
    }
    Ok(())
}

/// Commits to a polynomial in evaluation form: the MSM of the first
/// `polynomial.len()` commit key points with the evaluations.
///
/// The map is linear, `commit(p1 + p2) = commit(p1) + commit(p2)` and
/// `commit(c * p) = c * commit(p)`, which is all the opening and
/// verification protocols rely on.
///
/// # Returns
/// * `Err(KzgError::InvalidPolynomialSize)` - if the polynomial is empty or
///   longer than the commit key.
pub fn commit(
    polynomial: &PolynomialEvalForm,
    commit_key: &CommitKey,
) -> Result<Commitment, KzgError> {
    check_polynomial_size(polynomial, commit_key)?;

    helpers::g1_lincomb(
        &commit_key.g1()[..polynomial.len()],
        polynomial.evaluations(),
    )
}

/// Creates a proof that `polynomial` evaluates to `f(point)` at `point`.
///
/// 1. Evaluate `y = f(point)` with the barycentric formula
/// 2. Compute the quotient `q(x) = (f(x) - y) / (x - point)` over the domain
/// 3. Commit to `q`
///
/// Deterministic, no randomness is involved.
///
/// # Returns
/// * `Err(KzgError::InvalidPolynomialSize)` - empty polynomial or longer than the commit key.
/// * `Err(KzgError::DomainSizeMismatch)` - polynomial length differs from the domain size.
/// * `Err(KzgError::PointInDomain)` - `point` is one of the domain roots.
pub fn open(
    domain: &Domain,
    polynomial: &PolynomialEvalForm,
    point: Fr,
    commit_key: &CommitKey,
) -> Result<OpeningProof, KzgError> {
    check_polynomial_size(polynomial, commit_key)?;

    trace!(size = polynomial.len(), %point, "opening polynomial");

    let claimed_value = evaluate_lagrange_polynomial(domain, polynomial, &point)?;

    let quotient = divide_poly_by_x_minus_a(domain, polynomial, &claimed_value, &point)?;

    let quotient_comm = commit(&quotient, commit_key)?;

    Ok(OpeningProof {
        quotient_comm,
        input_point: point,
        claimed_value,
    })
}
