#[cfg(test)]
mod tests {
    use ark_bn254::Fr;
    use ark_ff::{Field, One, UniformRand};
    use lagrange_kzg_primitives::{consts::MAX_DOMAIN_SIZE, domain::Domain, errors::KzgError};

    #[test]
    fn test_domain_rejects_unsupported_sizes() {
        for size in [0usize, 3, 6, 100] {
            assert!(
                matches!(Domain::new(size), Err(KzgError::DomainError(_))),
                "size {} should be rejected",
                size
            );
        }
        assert!(matches!(
            Domain::new(MAX_DOMAIN_SIZE * 2),
            Err(KzgError::DomainError(_))
        ));
    }

    #[test]
    fn test_domain_roots() {
        for log_size in 0..8 {
            let size = 1usize << log_size;
            let domain = Domain::new(size).unwrap();

            assert_eq!(domain.cardinality(), size as u64);
            assert_eq!(domain.roots().len(), size);
            assert_eq!(domain.roots()[0], Fr::one());
            assert_eq!(domain.cardinality_inv() * Fr::from(size as u64), Fr::one());

            // the generator is a primitive root
            assert!(domain.generator().pow([size as u64]).is_one());
            if size > 1 {
                assert!(!domain.generator().pow([(size / 2) as u64]).is_one());
            }

            let mut expected = Fr::one();
            for root in domain.roots() {
                assert_eq!(*root, expected);
                expected *= domain.generator();
            }
        }
    }

    #[test]
    fn test_is_in_domain() {
        let domain = Domain::new(16).unwrap();
        for (i, root) in domain.roots().iter().enumerate() {
            assert!(domain.is_in_domain(root));
            assert_eq!(domain.find_root_index(root), Some(i));
        }

        assert!(!domain.is_in_domain(&Fr::from(5u64)));
        assert_eq!(domain.find_root_index(&Fr::from(5u64)), None);

        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let x = Fr::rand(&mut rng);
            assert!(!domain.is_in_domain(&x));
        }

        // roots of a larger domain that are not in the smaller one
        let bigger = Domain::new(32).unwrap();
        assert!(!domain.is_in_domain(&bigger.generator()));
        assert!(domain.is_in_domain(&(bigger.generator() * bigger.generator())));
    }

    #[test]
    fn test_bit_reverse_roots() {
        let natural = Domain::new(8).unwrap();
        let mut reversed = natural.clone();
        reversed.bit_reverse_roots();

        assert!(reversed.is_bit_reversed());
        assert!(!natural.is_bit_reversed());

        let expected_order = [0usize, 4, 2, 6, 1, 5, 3, 7];
        for (i, j) in expected_order.iter().enumerate() {
            assert_eq!(reversed.roots()[i], natural.roots()[*j]);
        }

        // membership does not depend on the order
        for root in natural.roots() {
            assert!(reversed.is_in_domain(root));
        }

        let again = {
            let mut d = reversed.clone();
            d.bit_reverse_roots();
            d
        };
        assert_eq!(again, reversed, "bit reversing twice is a no-op");
    }
}
