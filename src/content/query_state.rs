//! Result of a content fetch as seen by a component.

use std::fmt::Display;

/// Four observable states of a content query.
///
/// `Empty` is a settled fetch that carried no usable data; `Failed` keeps the
/// error message so pages can decide whether to surface it.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryState<T> {
    Pending,
    Empty,
    Failed(String),
    Ready(T),
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        QueryState::Pending
    }
}

impl<T> QueryState<T> {
    /// Maps a settled fetch onto a query state.
    pub fn from_result<E: Display>(result: Result<Option<T>, E>) -> Self {
        match result {
            Ok(Some(value)) => QueryState::Ready(value),
            Ok(None) => QueryState::Empty,
            Err(e) => QueryState::Failed(e.to_string()),
        }
    }

    /// Maps a resource snapshot (`None` while the future is running).
    pub fn from_resource<E: Display>(snapshot: Option<Result<Option<T>, E>>) -> Self {
        match snapshot {
            None => QueryState::Pending,
            Some(result) => Self::from_result(result),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            QueryState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, QueryState::Pending)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            QueryState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> QueryState<U> {
        match self {
            QueryState::Pending => QueryState::Pending,
            QueryState::Empty => QueryState::Empty,
            QueryState::Failed(reason) => QueryState::Failed(reason),
            QueryState::Ready(value) => QueryState::Ready(f(value)),
        }
    }
}
