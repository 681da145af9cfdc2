// src/application/recovery.rs
use crate::domain::DomainError;

/// Outcome of an operation whose failure was absorbed into a fallback value.
///
/// The query layer never surfaces fetch errors to its callers. Instead of silently
/// swallowing them, it hands back the fallback together with the error that caused it,
/// so callers that care can still inspect what went wrong.
#[derive(Debug)]
pub struct Recovered<T> {
    value: T,
    error: Option<DomainError>,
}

impl<T> Recovered<T> {
    pub fn from_result(result: Result<T, DomainError>, fallback: impl FnOnce() -> T) -> Self {
        match result {
            Ok(value) => Self { value, error: None },
            Err(error) => Self {
                value: fallback(),
                error: Some(error),
            },
        }
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn error(&self) -> Option<&DomainError> {
        self.error.as_ref()
    }

    pub fn is_recovered(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Resource;

    #[test]
    fn given_ok_result_when_recovering_then_keeps_value_without_error() {
        let recovered = Recovered::from_result(Ok(vec![1, 2]), Vec::new);

        assert!(!recovered.is_recovered());
        assert_eq!(recovered.into_value(), vec![1, 2]);
    }

    #[test]
    fn given_err_result_when_recovering_then_uses_fallback_and_keeps_error() {
        let result: Result<Vec<i32>, _> = Err(DomainError::Fetch {
            resource: Resource::Notes,
            status: 500,
            status_text: "Internal Server Error".to_string(),
        });

        let recovered = Recovered::from_result(result, Vec::new);

        assert!(recovered.is_recovered());
        assert!(matches!(
            recovered.error(),
            Some(DomainError::Fetch { status: 500, .. })
        ));
        assert!(recovered.into_value().is_empty());
    }
}
