//! Month-by-month trend of feedback and complaints
//!
//! Averages are computed from running sums and counts, so the result does
//! not depend on the order records arrive in.

use super::feedback::Sentiment;
use super::mean;
use crate::api::models::{Complaint, Feedback};
use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const MONTHS_FR: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
    "octobre", "novembre", "décembre",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStats {
    /// `YYYY-MM`
    pub month: String,
    /// Display label, e.g. `janvier 2024`
    pub label: String,
    pub positive_count: u64,
    pub negative_count: u64,
    pub feedback_count: u64,
    /// Mean rating of every feedback submitted that month, neutral included
    pub average_rating: f64,
    pub complaint_count: u64,
    pub resolved_count: u64,
    /// Mean resolution days of complaints submitted that month and resolved
    pub resolution_time: f64,
}

#[derive(Default)]
struct MonthAccumulator {
    year: i32,
    month: u32,
    positive: u64,
    negative: u64,
    feedback: u64,
    rating_sum: u64,
    complaints: u64,
    resolved: u64,
    resolution_days: i64,
}

impl MonthAccumulator {
    fn finish(self) -> MonthlyStats {
        MonthlyStats {
            month: format!("{:04}-{:02}", self.year, self.month),
            label: month_label(self.year, self.month),
            positive_count: self.positive,
            negative_count: self.negative,
            feedback_count: self.feedback,
            average_rating: mean(self.rating_sum as f64, self.feedback),
            complaint_count: self.complaints,
            resolved_count: self.resolved,
            resolution_time: mean(self.resolution_days as f64, self.resolved),
        }
    }
}

pub fn month_label(year: i32, month: u32) -> String {
    let name = MONTHS_FR
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("?");
    format!("{} {}", name, year)
}

fn bucket<'a>(
    months: &'a mut BTreeMap<(i32, u32), MonthAccumulator>,
    at: NaiveDateTime,
) -> &'a mut MonthAccumulator {
    let key = (at.year(), at.month());
    months.entry(key).or_insert_with(|| MonthAccumulator {
        year: key.0,
        month: key.1,
        ..Default::default()
    })
}

/// One entry per calendar month that has feedback or complaints, oldest first.
/// Records without a parseable submission date are skipped.
pub fn monthly_stats(feedback: &[Feedback], complaints: &[Complaint]) -> Vec<MonthlyStats> {
    let mut months: BTreeMap<(i32, u32), MonthAccumulator> = BTreeMap::new();

    for f in feedback {
        let Some(submitted) = f.submitted_at() else {
            continue;
        };
        let entry = bucket(&mut months, submitted);

        match Sentiment::of(f.note) {
            Sentiment::Positive => entry.positive += 1,
            Sentiment::Negative => entry.negative += 1,
            Sentiment::Neutral => {}
        }
        entry.feedback += 1;
        entry.rating_sum += u64::from(f.note);
    }

    for c in complaints {
        let Some(submitted) = c.submitted_at() else {
            continue;
        };
        let entry = bucket(&mut months, submitted);

        entry.complaints += 1;
        if let Some(days) = c.resolution_days() {
            entry.resolved += 1;
            entry.resolution_days += days;
        }
    }

    months.into_values().map(MonthAccumulator::finish).collect()
}
