use tracing::error;

use super::errors::AppError;

/// Outcome of a call to an external service.
///
/// Pages only ever see the inner value (an empty one when the call failed);
/// the distinction between "nothing matched" and "the upstream broke" is kept
/// so that it can be logged and asserted on.
#[derive(Debug, Clone, PartialEq)]
pub enum Upstream<T> {
    Available(T),
    Failed,
}

impl<T> Upstream<T> {
    pub fn from_result(operation: &str, result: Result<T, AppError>) -> Self {
        match result {
            Ok(value) => Upstream::Available(value),
            Err(e) => {
                error!("Error {}: {}", operation, e);
                Upstream::Failed
            }
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Upstream::Failed)
    }

    pub fn map<U, F>(self, f: F) -> Upstream<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Upstream::Available(value) => Upstream::Available(f(value)),
            Upstream::Failed => Upstream::Failed,
        }
    }
}

impl<T: Default> Upstream<T> {
    pub fn into_inner(self) -> T {
        match self {
            Upstream::Available(value) => value,
            Upstream::Failed => T::default(),
        }
    }
}
