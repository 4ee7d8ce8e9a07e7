//! REST client for the feedback and complaint service
//!
//! Wraps the service's JSON endpoints behind typed models: a bearer-token
//! HTTP client with one-shot token refresh, the paginated list envelope, and
//! a `Paginator` holding one page of a list at a time.

pub mod auth;
pub mod client;
pub mod constants;
pub mod models;
pub mod operations;
pub mod page;
pub mod pagination;

pub use auth::{AccessClaims, AuthClient, decode_claims, session_from_tokens};
pub use client::ApiClient;
pub use models::{
    Category, ClientHistory, ClientLogin, ClientProfile, Complaint, ComplaintStatus, Feedback,
    NewClientAccount, NewComplaint, NewFeedback, NewUser, ProfileUpdate, ProfileUpdateResponse,
    ReferencePayload, ServiceRef, StaffUser, TokenPair,
};
pub use page::Page;
pub use pagination::{PageRequest, PageSource, Paginator, collect_all};
