//! Dashboard statistics over already-fetched records
//!
//! Every aggregator here is a pure function over in-memory slices. They never
//! fail: empty input, missing references and unparseable dates degrade to
//! zero counts and averages.

pub mod complaints;
pub mod feedback;
pub mod monthly;

pub use complaints::{CategoryCount, ComplaintStats, complaint_stats};
pub use feedback::{DepartmentRating, FeedbackStats, feedback_stats};
pub use monthly::{MonthlyStats, monthly_stats};

use crate::api::models::{Complaint, Feedback};
use serde::{Deserialize, Serialize};

/// Label used when a record has no service or category attached
pub const UNKNOWN_LABEL: &str = "Inconnu";

/// Everything the dashboard shows, computed in one pass over both collections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub feedback_stats: FeedbackStats,
    pub complaint_stats: ComplaintStats,
    pub monthly_stats: Vec<MonthlyStats>,
}

impl DashboardStats {
    pub fn compute(feedback: &[Feedback], complaints: &[Complaint]) -> Self {
        Self {
            feedback_stats: feedback_stats(feedback),
            complaint_stats: complaint_stats(complaints),
            monthly_stats: monthly_stats(feedback, complaints),
        }
    }
}

pub(crate) fn mean(total: f64, count: u64) -> f64 {
    if count == 0 { 0.0 } else { total / count as f64 }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::api::models::{Category, Complaint, ComplaintStatus, Feedback, ServiceRef};

    pub fn feedback(id: u64, note: u8, service: Option<&str>, date: &str) -> Feedback {
        Feedback {
            id,
            client: Some(1),
            note,
            commentaire: None,
            service_concerne_detail: service.map(|nom| ServiceRef {
                id: nom.len() as u64,
                nom: nom.to_string(),
                description: String::new(),
            }),
            nom_structure: "ACME".to_string(),
            nom: "Diallo".to_string(),
            prenom: "Awa".to_string(),
            email: "awa@example.com".to_string(),
            telephone: "+221700000000".to_string(),
            booking_number: None,
            date_submitted: date.to_string(),
        }
    }

    pub fn complaint(
        id: u64,
        statut: ComplaintStatus,
        category: Option<&str>,
        submitted: &str,
        resolved: Option<&str>,
    ) -> Complaint {
        Complaint {
            id,
            client: Some(1),
            sujet: format!("Réclamation {}", id),
            description: String::new(),
            categorie_detail: category.map(|nom| Category {
                id: nom.len() as u64,
                nom: nom.to_string(),
                description: String::new(),
            }),
            nom_structure: "ACME".to_string(),
            nom: "Diallo".to_string(),
            prenom: "Awa".to_string(),
            email: "awa@example.com".to_string(),
            telephone: "+221700000000".to_string(),
            booking_number: Some("BK-1".to_string()),
            numero_suivi: format!("REC-{:04}", id),
            statut,
            date_submitted: submitted.to_string(),
            date_resolue: resolved.map(String::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{complaint, feedback};
    use super::*;
    use crate::api::models::ComplaintStatus;

    #[test]
    fn test_mean_of_nothing_is_zero() {
        assert_eq!(mean(0.0, 0), 0.0);
        assert_eq!(mean(9.0, 3), 3.0);
    }

    #[test]
    fn test_dashboard_serializes_camel_case() {
        let stats = DashboardStats::compute(
            &[feedback(1, 5, Some("Booking"), "2024-01-10")],
            &[complaint(1, ComplaintStatus::Pending, None, "2024-01-11", None)],
        );

        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["feedbackStats"]["totalPositive"], 1);
        assert_eq!(value["complaintStats"]["totalPending"], 1);
        assert_eq!(value["monthlyStats"][0]["month"], "2024-01");
    }
}
