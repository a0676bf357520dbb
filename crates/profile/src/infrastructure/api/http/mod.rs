// crates/profile/src/infrastructure/api/http/mod.rs

mod app_state;
mod dto;
mod error_mapper;
mod handlers;
mod router;

pub use app_state::AppState;
pub use error_mapper::ApiError;
pub use router::build_router;
