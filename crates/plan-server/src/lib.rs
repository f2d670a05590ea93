//! HTTP server for the plan store.
//!
//! Exposes create, fetch, delete, and list endpoints over JSON plans.
//! Creates are validated against the compiled plan schema; fetches support
//! `If-None-Match` conditional reads against each plan's version tag.
//!
//! | Method | Path | Success | Failure |
//! |---|---|---|---|
//! | POST | `{prefix}/plan` | 201 + `{data, etag}` + `ETag` | 400, 409 |
//! | GET | `{prefix}/plan/:id` | 200 + data + `ETag`, or 304 | 404 |
//! | DELETE | `{prefix}/plan/:id` | 204 | 404 |
//! | GET | `{prefix}/plans` | 200 + array of data | |
//! | GET | `/health` | 200 | |

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::{ServerConfig, DEFAULT_API_PREFIX, DEFAULT_PORT};
pub use error::{ApiError, ServerError, ServerResult};
pub use handler::HealthResponse;
pub use router::build_router;
pub use server::PlanServer;
pub use state::AppState;
