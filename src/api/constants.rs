//! API endpoints and headers for the feedback service

/// Login endpoint returning an access/refresh pair
pub const LOGIN_ENDPOINT: &str = "/accounts/api/login/";

/// Access token refresh endpoint
pub const REFRESH_ENDPOINT: &str = "/accounts/api/refresh/";

/// Profile of the client behind the current token
pub const CLIENT_ME_ENDPOINT: &str = "/api/client/me/";

/// Client profile update
pub const PROFILE_UPDATE_ENDPOINT: &str = "/client/update-profile/";

/// Client profile with their complaints and feedback
pub const CLIENT_HISTORY_ENDPOINT: &str = "/client/full-profile/";

/// Client self-registration
pub const CLIENTS_ENDPOINT: &str = "/api/clients/";

/// Paginated feedback listing with nested service details
pub const FEEDBACK_FULL_ENDPOINT: &str = "/api/avis/full/";

/// Feedback submission
pub const FEEDBACK_ENDPOINT: &str = "/api/avis/";

/// Paginated complaint listing with nested category details
pub const COMPLAINTS_FULL_ENDPOINT: &str = "/api/reclamations/full/";

/// Complaint submission and per-client listing
pub const COMPLAINTS_ENDPOINT: &str = "/api/reclamations/";

pub const SERVICES_ENDPOINT: &str = "/api/services/";

pub const CATEGORIES_ENDPOINT: &str = "/api/categories/";

pub const USERS_ENDPOINT: &str = "/accounts/api/users/";

pub const REGISTER_ENDPOINT: &str = "/accounts/api/register/";

pub mod headers {
    /// Content type for JSON requests
    pub const CONTENT_TYPE_JSON: &str = "application/json";

    /// User agent sent with every request
    pub const USER_AGENT: &str = concat!("avis-cli/", env!("CARGO_PKG_VERSION"));
}

pub fn feedback_endpoint(id: u64) -> String {
    format!("{}{}/", FEEDBACK_ENDPOINT, id)
}

pub fn complaint_endpoint(id: u64) -> String {
    format!("{}{}/", COMPLAINTS_ENDPOINT, id)
}

/// Status update endpoint for one complaint
pub fn complaint_status_endpoint(id: u64) -> String {
    format!("{}{}/statut/", COMPLAINTS_ENDPOINT, id)
}

/// Complaints filed by one client
pub fn client_complaints_endpoint(client_id: u64) -> String {
    format!("{}?client_id={}", COMPLAINTS_ENDPOINT, client_id)
}

pub fn service_endpoint(id: u64) -> String {
    format!("{}{}/", SERVICES_ENDPOINT, id)
}

pub fn category_endpoint(id: u64) -> String {
    format!("{}{}/", CATEGORIES_ENDPOINT, id)
}

pub fn user_delete_endpoint(id: u64) -> String {
    format!("{}{}/delete/", USERS_ENDPOINT, id)
}

pub fn change_password_endpoint(id: u64) -> String {
    format!("/accounts/api/change-password/{}/", id)
}
