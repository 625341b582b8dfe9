#[cfg(test)]
mod tests {
    use lagrange_kzg_primitives::errors::KzgError;

    #[test]
    fn test_kzg_error_invalid_polynomial_size() {
        let error = KzgError::InvalidPolynomialSize {
            polynomial_len: 0,
            srs_len: 16,
        };
        assert_eq!(
            format!("{}", error),
            "invalid polynomial size 0 (must be non-zero and at most 16)"
        );
    }

    #[test]
    fn test_kzg_error_domain_size_mismatch() {
        let error = KzgError::DomainSizeMismatch {
            polynomial_len: 3,
            domain_size: 4,
        };
        assert_eq!(
            format!("{}", error),
            "polynomial size 3 does not match domain size 4"
        );
    }

    #[test]
    fn test_kzg_error_count_mismatch() {
        let error = KzgError::CountMismatch {
            commitments: 2,
            proofs: 1,
        };
        assert_eq!(
            format!("{}", error),
            "number of commitments (2) is not the same as the number of proofs (1)"
        );
    }

    #[test]
    fn test_kzg_error_messages() {
        assert_eq!(
            format!("{}", KzgError::PointInDomain),
            "cannot divide by point in the domain"
        );
        assert_eq!(
            format!("{}", KzgError::VerifyOpeningProof),
            "can't verify opening proof"
        );

        let msg = String::from("test msm error");
        assert_eq!(
            format!("{}", KzgError::MsmError(msg.clone())),
            format!("MSM error: {}", msg)
        );
        let msg = String::from("test randomness error");
        assert_eq!(
            format!("{}", KzgError::RandomnessError(msg.clone())),
            format!("randomness error: {}", msg)
        );
    }

    #[test]
    fn test_kzg_error_equality() {
        let error1 = KzgError::PairingError(String::from("error"));
        let error2 = KzgError::PairingError(String::from("error"));
        let error3 = KzgError::SerializationError(String::from("different error"));
        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
        assert_ne!(KzgError::VerifyOpeningProof, error1);
    }
}
