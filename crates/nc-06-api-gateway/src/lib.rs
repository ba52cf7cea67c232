//! # API Gateway (NC-06)
//!
//! The HTTP face of Notary-Chain. Handlers are thin: they parse, call one
//! subsystem API and shape the response. All decisions live in the
//! subsystems behind `StampingApi`, `ConfirmationApi` and `VerificationApi`.
//!
//! ## Middleware Stack
//!
//! ```text
//! Request → TraceLayer → TimeoutLayer → CORS → Router
//! ```
//!
//! Error bodies are always `{"detail": "<message>"}`.

pub mod domain;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod service;

pub use domain::config::{ConfigError, CorsConfig, GatewayConfig};
pub use domain::contract::{ContractFunction, ContractInterface, ContractInterfaceError};
pub use domain::error::{ApiError, GatewayError};
pub use router::{build_router, routes, AppState};
pub use service::ApiGatewayService;
