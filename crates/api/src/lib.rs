pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod session;
pub mod state;

pub use error::ApiError;
pub use routes::create_api_routes;
pub use session::{SessionStore, SESSION_COOKIE};
pub use state::AppState;
