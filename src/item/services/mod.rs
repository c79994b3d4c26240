//! Application services for item orchestration.

mod crud;

pub use crud::{ItemService, ItemServiceError, ItemServiceResult};
