//! Types and access-control logic shared by the ClicCash dashboard.

pub mod api;
pub mod auth;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod guard;
pub mod models;
pub mod observer;
pub mod session;

pub use error::ApiError;
pub use guard::{evaluate, Decision, RouteRequest};
pub use session::{Session, SessionProvider};
