//! Shared handler state

use mentorship::{AssignmentEngine, QueryFacade, Repository};
use std::sync::Arc;

/// Engine and query facade over one repository
pub struct AppState<R: Repository> {
    pub engine: AssignmentEngine<R>,
    pub query: QueryFacade<R>,
}

// derive(Clone) would demand R: Clone
impl<R: Repository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
            query: self.query.clone(),
        }
    }
}

impl<R: Repository> AppState<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            engine: AssignmentEngine::new(Arc::clone(&repository)),
            query: QueryFacade::new(repository),
        }
    }
}
