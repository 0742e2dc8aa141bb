pub mod board;
pub mod demo;
pub mod domain;
pub mod error;
pub mod snapshot;
pub mod timestamps;
pub mod validate;

#[cfg(test)]
mod tests {
    use super::error::AppError;

    #[test]
    fn app_error_is_structured() {
        let err = AppError::new("STATE_LOCK_FAILED", "board state is poisoned")
            .with_details("mutex poisoned");
        assert_eq!(err.code, "STATE_LOCK_FAILED");
        assert_eq!(err.message, "board state is poisoned");
        assert_eq!(err.to_string(), "[STATE_LOCK_FAILED] board state is poisoned");
    }
}
