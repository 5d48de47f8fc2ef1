//! API service modules for RMU endpoints.
//!
//! Each service groups the remote operations for one area of the API.

mod account;
mod udids;

pub use account::AccountService;
pub use udids::{Registration, StatusQuery, UdidService, DEFAULT_STATUS_LIMIT};
