pub mod dashboard;
pub mod demo;
pub mod domain;
pub mod error;
pub mod form;
pub mod normalize;
pub mod store;
pub mod view;

#[cfg(test)]
mod tests {
    use super::error::{AppError, CODE_REQUIRED_FIELDS, CODE_SORT_ORDER_UNKNOWN};

    #[test]
    fn required_fields_error_is_validation() {
        let err = AppError::required_fields();
        assert_eq!(err.code, CODE_REQUIRED_FIELDS);
        assert_eq!(err.message, "All fields are required.");
        assert_eq!(err.details, None);
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "[VALIDATION_REQUIRED_FIELDS] All fields are required."
        );
    }

    #[test]
    fn parse_errors_carry_the_rejected_label() {
        let err = AppError::unknown_sort_order("newest");
        assert_eq!(err.code, CODE_SORT_ORDER_UNKNOWN);
        assert_eq!(err.details.as_deref(), Some("value=newest"));
        assert!(!err.is_validation());
        assert!(!AppError::form_not_open().is_validation());
        assert_eq!(
            AppError::seed_timestamp_invalid(4, "bogus").details.as_deref(),
            Some("id=4; value=bogus")
        );
    }
}
