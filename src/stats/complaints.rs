use super::{UNKNOWN_LABEL, mean};
use crate::api::models::{Complaint, ComplaintStatus};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Complaint counts and resolution performance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintStats {
    pub total_pending: u64,
    pub total_in_progress: u64,
    pub total_resolved: u64,
    /// Mean whole days from submission to resolution, over resolved
    /// complaints that carry a resolution date
    pub average_resolution_time: f64,
    /// Complaint count per category, in order of first appearance
    pub resolutions_by_category: Vec<CategoryCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

impl ComplaintStats {
    pub fn total(&self) -> u64 {
        self.total_pending + self.total_in_progress + self.total_resolved
    }
}

pub fn complaint_stats(complaints: &[Complaint]) -> ComplaintStats {
    let mut total_pending = 0;
    let mut total_in_progress = 0;
    let mut total_resolved = 0;
    let mut resolution_days = 0i64;
    let mut resolved_with_date = 0u64;
    let mut by_category: IndexMap<String, u64> = IndexMap::new();

    for complaint in complaints {
        match complaint.statut {
            ComplaintStatus::Pending => total_pending += 1,
            ComplaintStatus::InProgress => total_in_progress += 1,
            ComplaintStatus::Resolved => total_resolved += 1,
        }

        if let Some(days) = complaint.resolution_days() {
            resolution_days += days;
            resolved_with_date += 1;
        }

        let category = complaint.category_name().unwrap_or(UNKNOWN_LABEL);
        *by_category.entry(category.to_string()).or_insert(0) += 1;
    }

    ComplaintStats {
        total_pending,
        total_in_progress,
        total_resolved,
        average_resolution_time: mean(resolution_days as f64, resolved_with_date),
        resolutions_by_category: by_category
            .into_iter()
            .map(|(category, count)| CategoryCount { category, count })
            .collect(),
    }
}
