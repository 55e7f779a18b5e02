pub mod activity_repo;
pub mod seed;

pub use activity_repo::{ActivityRepo, InMemoryActivityRepo};
