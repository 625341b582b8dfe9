use ark_bn254::Fr;
use ark_ff::{Field, One};
use ark_poly::{EvaluationDomain, GeneralEvaluationDomain};

use crate::{consts::MAX_DOMAIN_SIZE, errors::KzgError, helpers};

/// A multiplicative subgroup of the bn254 scalar field of power-of-two size.
///
/// Polynomials in this workspace are given by their values at [Domain::roots],
/// in the same order. The roots start out in natural order
/// (`roots[i] = generator^i`) and may be permuted once with
/// [Domain::bit_reverse_roots]; every algorithm here only relies on the
/// pairing between `roots[i]` and the i-th evaluation, not on the order.
#[derive(Clone, Debug, PartialEq)]
pub struct Domain {
    cardinality: u64,
    cardinality_inv: Fr,
    generator: Fr,
    roots: Vec<Fr>,
    bit_reversed: bool,
}

impl Domain {
    /// Builds the domain of the `size`-th roots of unity.
    ///
    /// # Arguments
    /// * `size` - number of roots, must be a non-zero power of two no larger
    ///   than [MAX_DOMAIN_SIZE].
    ///
    /// # Returns
    /// * `Err(KzgError::DomainError)` - if `size` is not supported.
    pub fn new(size: usize) -> Result<Self, KzgError> {
        if size == 0 || !size.is_power_of_two() {
            return Err(KzgError::DomainError(format!(
                "domain size {} is not a power of two",
                size
            )));
        }
        if size > MAX_DOMAIN_SIZE {
            return Err(KzgError::DomainError(format!(
                "domain size {} exceeds maximum {}",
                size, MAX_DOMAIN_SIZE
            )));
        }

        let evaluation_domain = GeneralEvaluationDomain::<Fr>::new(size).ok_or(
            KzgError::DomainError("Could not construct evaluation domain".to_string()),
        )?;
        if evaluation_domain.size() != size {
            return Err(KzgError::DomainError(format!(
                "requested domain size {} but got {}",
                size,
                evaluation_domain.size()
            )));
        }

        let roots: Vec<Fr> = evaluation_domain.elements().collect();
        let generator = roots.get(1).copied().unwrap_or_else(Fr::one);
        let cardinality = size as u64;
        let cardinality_inv = Fr::from(cardinality)
            .inverse()
            .ok_or(KzgError::DomainError("domain size is not invertible".to_string()))?;

        Ok(Self {
            cardinality,
            cardinality_inv,
            generator,
            roots,
            bit_reversed: false,
        })
    }

    pub fn cardinality(&self) -> u64 {
        self.cardinality
    }

    /// `1 / cardinality` in the scalar field.
    pub fn cardinality_inv(&self) -> Fr {
        self.cardinality_inv
    }

    /// Generator of the subgroup, a primitive `cardinality`-th root of unity.
    pub fn generator(&self) -> Fr {
        self.generator
    }

    pub fn roots(&self) -> &[Fr] {
        &self.roots
    }

    pub fn is_bit_reversed(&self) -> bool {
        self.bit_reversed
    }

    /// Returns whether `x` is one of the roots.
    ///
    /// The roots are exactly the solutions of `x^cardinality = 1`, which is
    /// cheaper to test than scanning them.
    pub fn is_in_domain(&self, x: &Fr) -> bool {
        x.pow([self.cardinality]).is_one()
    }

    /// Index `i` such that `roots[i] == x`, if any.
    pub fn find_root_index(&self, x: &Fr) -> Option<usize> {
        if !self.is_in_domain(x) {
            return None;
        }
        self.roots.iter().position(|root| root == x)
    }

    /// Permutes the roots into bit-reversed order. Calling it a second time
    /// is a no-op.
    pub fn bit_reverse_roots(&mut self) {
        if self.bit_reversed {
            return;
        }
        helpers::bit_reverse_permutation(&mut self.roots);
        self.bit_reversed = true;
    }
}
