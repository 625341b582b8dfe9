use ark_bn254::Fr;
use ark_ff::{Field, One, Zero};

use crate::{domain::Domain, errors::KzgError, helpers};

/// A polynomial given by its evaluations over a [Domain]: `evaluations[i]`
/// is the value at `domain.roots()[i]`.
///
/// This is mostly a <https://en.wikipedia.org/wiki/Passive_data_structure>;
/// the length is only checked against a domain when the polynomial is used
/// with one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolynomialEvalForm {
    evaluations: Vec<Fr>,
}

impl PolynomialEvalForm {
    pub fn new(evaluations: Vec<Fr>) -> Self {
        Self { evaluations }
    }

    pub fn evaluations(&self) -> &[Fr] {
        &self.evaluations
    }

    pub fn len(&self) -> usize {
        self.evaluations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evaluations.is_empty()
    }

    /// Retrieves a reference to the evaluation at the specified index, or
    /// `None` if the index is out of bounds.
    pub fn get_evaluation(&self, i: usize) -> Option<&Fr> {
        self.evaluations.get(i)
    }
}

impl From<Vec<Fr>> for PolynomialEvalForm {
    fn from(evaluations: Vec<Fr>) -> Self {
        Self::new(evaluations)
    }
}

fn check_domain_size(domain: &Domain, polynomial: &PolynomialEvalForm) -> Result<(), KzgError> {
    if domain.cardinality() != polynomial.len() as u64 {
        return Err(KzgError::DomainSizeMismatch {
            polynomial_len: polynomial.len(),
            domain_size: domain.cardinality(),
        });
    }
    Ok(())
}

/// Evaluates a polynomial given in Lagrange form over `domain` at an
/// arbitrary `point` using the barycentric formula
///
/// ```text
/// f(z) = (z^n - 1) / n * Σ f_i * ω_i / (z - ω_i)
/// ```
///
/// The formula is singular when `z` is one of the roots; the value is then
/// read directly from the evaluations.
///
/// # Returns
/// * `Err(KzgError::DomainSizeMismatch)` - if the polynomial length differs
///   from the domain cardinality.
pub fn evaluate_lagrange_polynomial(
    domain: &Domain,
    polynomial: &PolynomialEvalForm,
    point: &Fr,
) -> Result<Fr, KzgError> {
    check_domain_size(domain, polynomial)?;

    if let Some(index) = domain.find_root_index(point) {
        return Ok(polynomial.evaluations()[index]);
    }

    // 1 / (z - ω_i)
    let mut inv_denominators: Vec<Fr> = domain.roots().iter().map(|root| *point - root).collect();
    helpers::batch_invert(&mut inv_denominators)?;

    let sum = polynomial
        .evaluations()
        .iter()
        .zip(domain.roots())
        .zip(&inv_denominators)
        .fold(Fr::zero(), |acc, ((f_i, root), inv)| acc + *f_i * root * inv);

    let vanishing = point.pow([domain.cardinality()]) - Fr::one();

    Ok(vanishing * domain.cardinality_inv() * sum)
}

/// Computes `(f - fa) / (x - a)` in Lagrange form over `domain`, where `fa`
/// is expected to be `f(a)`.
///
/// The quotient's value at `ω_i` is `(f_i - fa) / (ω_i - a)`. All the
/// denominators are inverted in a single batch inversion.
///
/// # Returns
/// * `Err(KzgError::DomainSizeMismatch)` - if `f` does not have one value per root.
/// * `Err(KzgError::PointInDomain)` - if `a` is a root, the quotient is not
///   defined by this formula there.
pub fn divide_poly_by_x_minus_a(
    domain: &Domain,
    f: &PolynomialEvalForm,
    fa: &Fr,
    a: &Fr,
) -> Result<PolynomialEvalForm, KzgError> {
    check_domain_size(domain, f)?;

    if domain.is_in_domain(a) {
        return Err(KzgError::PointInDomain);
    }

    let mut quotient: Vec<Fr> = domain.roots().iter().map(|root| *root - a).collect();
    helpers::batch_invert(&mut quotient)?;

    for (q_i, f_i) in quotient.iter_mut().zip(f.evaluations()) {
        *q_i *= *f_i - fa;
    }

    Ok(PolynomialEvalForm::new(quotient))
}
