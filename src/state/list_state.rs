use crate::error::ErrorInfo;
use crate::models::{ListResult, QueryParams};

/// Transient fetch status
#[derive(Clone, PartialEq, Debug, Default)]
pub struct LoadState {
    pub is_loading: bool,
    pub error: Option<ErrorInfo>,
}

impl LoadState {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            error: None,
        }
    }

    pub fn settled() -> Self {
        Self {
            is_loading: false,
            error: None,
        }
    }

    pub fn failed(error: ErrorInfo) -> Self {
        Self {
            is_loading: false,
            error: Some(error),
        }
    }
}

/// Everything a list screen renders from.
#[derive(Clone, PartialEq, Debug)]
pub struct ListState<T> {
    pub params: QueryParams,
    pub result: ListResult<T>,
    pub load: LoadState,
    /// Last failed create/update/delete, cleared by the next success
    pub mutation_error: Option<ErrorInfo>,
}

impl<T> ListState<T> {
    pub fn new(params: QueryParams) -> Self {
        Self {
            params,
            result: ListResult::default(),
            load: LoadState::default(),
            mutation_error: None,
        }
    }
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::new(QueryParams::default())
    }
}
