use super::{UNKNOWN_LABEL, mean};
use crate::api::models::Feedback;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ratings at or above this are positive
pub const POSITIVE_THRESHOLD: u8 = 4;

/// Ratings at or below this are negative
pub const NEGATIVE_THRESHOLD: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn of(note: u8) -> Self {
        if note >= POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if note <= NEGATIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackStats {
    pub total_positive: u64,
    pub total_negative: u64,
    pub total_neutral: u64,
    pub average_rating: f64,
    /// Per-service rating, in order of first appearance
    pub ratings_by_department: Vec<DepartmentRating>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRating {
    pub department: String,
    pub average_rating: f64,
    pub count: u64,
}

pub fn feedback_stats(feedback: &[Feedback]) -> FeedbackStats {
    let mut total_positive = 0;
    let mut total_negative = 0;
    let mut total_neutral = 0;
    let mut rating_sum = 0u64;
    // department -> (rating sum, count)
    let mut by_department: IndexMap<String, (u64, u64)> = IndexMap::new();

    for f in feedback {
        match Sentiment::of(f.note) {
            Sentiment::Positive => total_positive += 1,
            Sentiment::Negative => total_negative += 1,
            Sentiment::Neutral => total_neutral += 1,
        }
        rating_sum += u64::from(f.note);

        let department = f.service_name().unwrap_or(UNKNOWN_LABEL);
        let entry = by_department.entry(department.to_string()).or_insert((0, 0));
        entry.0 += u64::from(f.note);
        entry.1 += 1;
    }

    FeedbackStats {
        total_positive,
        total_negative,
        total_neutral,
        average_rating: mean(rating_sum as f64, feedback.len() as u64),
        ratings_by_department: by_department
            .into_iter()
            .map(|(department, (sum, count))| DepartmentRating {
                department,
                average_rating: mean(sum as f64, count),
                count,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::fixtures::feedback;

    #[test]
    fn test_sentiment_thresholds() {
        assert_eq!(Sentiment::of(5), Sentiment::Positive);
        assert_eq!(Sentiment::of(4), Sentiment::Positive);
        assert_eq!(Sentiment::of(3), Sentiment::Neutral);
        assert_eq!(Sentiment::of(2), Sentiment::Negative);
        assert_eq!(Sentiment::of(1), Sentiment::Negative);
    }

    #[test]
    fn test_one_of_each_sentiment() {
        let records = vec![
            feedback(1, 5, Some("Booking"), "2024-01-01"),
            feedback(2, 1, Some("Booking"), "2024-01-02"),
            feedback(3, 3, Some("Booking"), "2024-01-03"),
        ];

        let stats = feedback_stats(&records);

        assert_eq!(stats.total_positive, 1);
        assert_eq!(stats.total_negative, 1);
        assert_eq!(stats.total_neutral, 1);
        assert_eq!(stats.average_rating, 3.0);
    }

    #[test]
    fn test_empty_feedback_averages_zero() {
        let stats = feedback_stats(&[]);

        assert_eq!(stats.average_rating, 0.0);
        assert!(stats.ratings_by_department.is_empty());
    }

    #[test]
    fn test_ratings_grouped_by_service() {
        let records = vec![
            feedback(1, 4, Some("Service Client"), "2024-01-01"),
            feedback(2, 2, None, "2024-01-01"),
            feedback(3, 5, Some("Service Client"), "2024-01-01"),
            feedback(4, 1, Some("Facturation"), "2024-01-01"),
        ];

        let stats = feedback_stats(&records);

        assert_eq!(
            stats.ratings_by_department,
            vec![
                DepartmentRating {
                    department: "Service Client".to_string(),
                    average_rating: 4.5,
                    count: 2
                },
                DepartmentRating {
                    department: UNKNOWN_LABEL.to_string(),
                    average_rating: 2.0,
                    count: 1
                },
                DepartmentRating {
                    department: "Facturation".to_string(),
                    average_rating: 1.0,
                    count: 1
                },
            ]
        );
    }
}
