use std::sync::Arc;

use crate::database::{ActivityRepo, InMemoryActivityRepo};

pub mod router;
pub mod routes;

pub use router::app_router;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn ActivityRepo>,
}

impl AppState {
    pub fn new(repo: Arc<dyn ActivityRepo>) -> Self {
        Self { repo }
    }

    // Fresh directory with the hardcoded catalog.
    pub fn seeded() -> Self {
        Self::new(Arc::new(InMemoryActivityRepo::seeded()))
    }
}
