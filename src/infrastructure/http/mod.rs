//! HTTP Layer - RESTful API
//!
//! 所有响应（包括错误）均为统一信封格式 `{code, success, message, result}`

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use dto::{ApiResponse, EnvelopeError, Payload};
pub use error::ApiError;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
