//! Backend API Bindings
//!
//! HTTP bindings to the procurement backend, organized by domain.

mod auth;
mod client;
mod email;
mod error;
mod purchase;
mod search;
mod supplier;
mod transport;

pub use client::*;
pub use email::*;
pub use error::ApiError;
pub use purchase::*;
pub use search::*;
pub use supplier::*;
pub use transport::*;
