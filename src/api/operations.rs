//! Typed calls for every endpoint the CLI uses

use super::client::ApiClient;
use super::constants;
use super::models::{
    Category, ClientHistory, ClientProfile, Complaint, ComplaintStatus, Feedback, NewClientAccount,
    NewComplaint, NewFeedback, NewUser, ProfileUpdate, ProfileUpdateResponse, ReferencePayload,
    ServiceRef, StaffUser,
};
use super::page::Page;
use super::pagination::collect_all;
use anyhow::{Context, Result};
use log::info;
use serde_json::{Value, json};

impl ApiClient {
    // Feedback

    pub async fn feedback_page(&self, url: &str) -> Result<Page<Feedback>> {
        self.get_page(url).await
    }

    /// Every feedback record, following `next` links
    pub async fn all_feedback(&self) -> Result<Vec<Feedback>> {
        collect_all(self, constants::FEEDBACK_FULL_ENDPOINT).await
    }

    pub async fn submit_feedback(&self, feedback: &NewFeedback) -> Result<Value> {
        info!("Submitting feedback for service {}", feedback.service_concerne);
        self.post_json(constants::FEEDBACK_ENDPOINT, feedback).await
    }

    pub async fn delete_feedback(&self, id: u64) -> Result<()> {
        info!("Deleting feedback {}", id);
        self.delete(&constants::feedback_endpoint(id)).await
    }

    // Complaints

    pub async fn complaints_page(&self, url: &str) -> Result<Page<Complaint>> {
        self.get_page(url).await
    }

    /// Every complaint, following `next` links
    pub async fn all_complaints(&self) -> Result<Vec<Complaint>> {
        collect_all(self, constants::COMPLAINTS_FULL_ENDPOINT).await
    }

    /// Complaints filed by one client
    pub async fn client_complaints(&self, client_id: u64) -> Result<Vec<Complaint>> {
        collect_all(self, &constants::client_complaints_endpoint(client_id)).await
    }

    pub async fn submit_complaint(&self, complaint: &NewComplaint) -> Result<Value> {
        info!("Submitting complaint '{}'", complaint.sujet);
        self.post_json(constants::COMPLAINTS_ENDPOINT, complaint).await
    }

    /// Set a complaint's status. Any status may replace any other.
    pub async fn update_complaint_status(&self, id: u64, status: ComplaintStatus) -> Result<Value> {
        info!("Setting complaint {} status to {}", id, status);
        self.patch_json(&constants::complaint_status_endpoint(id), &json!({ "statut": status }))
            .await
    }

    pub async fn delete_complaint(&self, id: u64) -> Result<()> {
        info!("Deleting complaint {}", id);
        self.delete(&constants::complaint_endpoint(id)).await
    }

    // Services

    pub async fn list_services(&self) -> Result<Vec<ServiceRef>> {
        collect_all(self, constants::SERVICES_ENDPOINT).await
    }

    pub async fn create_service(&self, service: &ReferencePayload) -> Result<ServiceRef> {
        info!("Creating service '{}'", service.nom);
        self.post_json(constants::SERVICES_ENDPOINT, service).await
    }

    pub async fn update_service(&self, id: u64, service: &ReferencePayload) -> Result<ServiceRef> {
        info!("Updating service {}", id);
        self.put_json(&constants::service_endpoint(id), service).await
    }

    pub async fn delete_service(&self, id: u64) -> Result<()> {
        info!("Deleting service {}", id);
        self.delete(&constants::service_endpoint(id)).await
    }

    // Categories

    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        collect_all(self, constants::CATEGORIES_ENDPOINT).await
    }

    pub async fn create_category(&self, category: &ReferencePayload) -> Result<Category> {
        info!("Creating category '{}'", category.nom);
        self.post_json(constants::CATEGORIES_ENDPOINT, category).await
    }

    pub async fn update_category(&self, id: u64, category: &ReferencePayload) -> Result<Category> {
        info!("Updating category {}", id);
        self.put_json(&constants::category_endpoint(id), category).await
    }

    pub async fn delete_category(&self, id: u64) -> Result<()> {
        info!("Deleting category {}", id);
        self.delete(&constants::category_endpoint(id)).await
    }

    // Staff accounts

    pub async fn list_users(&self) -> Result<Vec<StaffUser>> {
        collect_all(self, constants::USERS_ENDPOINT).await
    }

    pub async fn register_user(&self, user: &NewUser) -> Result<()> {
        info!("Registering user '{}' (superuser: {})", user.username, user.is_superuser);
        self.post_unit(constants::REGISTER_ENDPOINT, user).await
    }

    pub async fn delete_user(&self, id: u64) -> Result<()> {
        info!("Deleting user {}", id);
        self.delete(&constants::user_delete_endpoint(id)).await
    }

    pub async fn change_password(&self, id: u64, new_password: &str) -> Result<()> {
        info!("Changing password for user {}", id);
        self.post_unit(
            &constants::change_password_endpoint(id),
            &json!({ "new_password": new_password }),
        )
        .await
    }

    // Client profile

    pub async fn client_profile(&self) -> Result<ClientProfile> {
        self.get_json(constants::CLIENT_ME_ENDPOINT).await
    }

    /// Apply a profile update and return the resulting profile.
    ///
    /// The endpoint answers with the stored fields but no id, so they are
    /// merged onto the profile held in the session (fetched first if the
    /// session has none).
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<ClientProfile> {
        info!("Updating client profile");
        let response: ProfileUpdateResponse =
            self.put_json(constants::PROFILE_UPDATE_ENDPOINT, update).await?;
        if !response.is_success() {
            anyhow::bail!("Profile update rejected by the server (status '{}')", response.status);
        }

        let mut profile = match self.session().await.client {
            Some(profile) => profile,
            None => self
                .client_profile()
                .await
                .context("Failed to fetch the client profile after updating it")?,
        };
        response.apply_to(&mut profile);
        Ok(profile)
    }

    /// The client's profile with every complaint and feedback they filed
    pub async fn client_history(&self) -> Result<ClientHistory> {
        self.get_json(constants::CLIENT_HISTORY_ENDPOINT).await
    }

    /// Create a client account. No session is needed.
    pub async fn register_client(&self, account: &NewClientAccount) -> Result<()> {
        info!("Registering client account '{}'", account.user.username);
        self.post_unit(constants::CLIENTS_ENDPOINT, account).await
    }
}
