//! Plain-text tables and charts for terminal output

use crate::api::models::{Complaint, Feedback, StaffUser};
use crate::stats::{DashboardStats, UNKNOWN_LABEL};
use std::fmt::Write;

const BAR_WIDTH: usize = 30;

/// Cut `value` to `width` characters, marking the cut with `…`
fn fit(value: &str, width: usize) -> String {
    let count = value.chars().count();
    if count <= width {
        format!("{:<width$}", value, width = width)
    } else {
        let cut: String = value.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

fn date_only(raw: &str) -> &str {
    raw.get(..10).unwrap_or(raw)
}

pub fn render_feedback_table(records: &[Feedback]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} {} {} {}",
        fit("ID", 6),
        fit("Date", 10),
        fit("Note", 5),
        fit("Service", 20),
        "Client / Commentaire"
    );

    for f in records {
        let client = format!("{} {} ({})", f.prenom, f.nom, f.nom_structure);
        let comment = f.commentaire.as_deref().unwrap_or("");
        let _ = writeln!(
            out,
            "{} {} {} {} {}",
            fit(&f.id.to_string(), 6),
            fit(date_only(&f.date_submitted), 10),
            fit(&format!("{}/5", f.note), 5),
            fit(f.service_name().unwrap_or(UNKNOWN_LABEL), 20),
            fit(&format!("{} {}", client, comment).trim_end(), 50)
        );
    }
    out
}

pub fn render_complaints_table(records: &[Complaint]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} {} {} {} {}",
        fit("ID", 6),
        fit("Suivi", 16),
        fit("Date", 10),
        fit("Statut", 11),
        fit("Catégorie", 18),
        "Sujet"
    );

    for c in records {
        let _ = writeln!(
            out,
            "{} {} {} {} {} {}",
            fit(&c.id.to_string(), 6),
            fit(&c.numero_suivi, 16),
            fit(date_only(&c.date_submitted), 10),
            fit(c.statut.label(), 11),
            fit(c.category_name().unwrap_or(UNKNOWN_LABEL), 18),
            fit(&c.sujet, 40).trim_end()
        );
    }
    out
}

/// Services and categories share the `{id, nom, description}` shape
pub fn render_reference_table<'a>(rows: impl IntoIterator<Item = (u64, &'a str, &'a str)>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {} {}", fit("ID", 6), fit("Nom", 24), "Description");
    for (id, nom, description) in rows {
        let _ = writeln!(
            out,
            "{} {} {}",
            fit(&id.to_string(), 6),
            fit(nom, 24),
            fit(description, 50).trim_end()
        );
    }
    out
}

pub fn render_users_table(users: &[StaffUser]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {} {} {}", fit("ID", 6), fit("Username", 20), fit("Email", 30), "Role");
    for user in users {
        let role = if user.is_superuser { "superuser" } else { "staff" };
        let _ = writeln!(
            out,
            "{} {} {} {}",
            fit(&user.id.to_string(), 6),
            fit(&user.username, 20),
            fit(&user.email, 30),
            role
        );
    }
    out
}

/// Navigation hint under a page of results
pub fn render_page_footer(shown: usize, count: u64, next: Option<&str>, previous: Option<&str>) -> String {
    let mut out = format!("{} of {} record(s)", shown, count);
    if let Some(previous) = previous {
        let _ = write!(out, "\n  previous: --page '{}'", previous);
    }
    if let Some(next) = next {
        let _ = write!(out, "\n  next:     --page '{}'", next);
    }
    out
}

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled.clamp(1, BAR_WIDTH))
}

pub fn render_dashboard(stats: &DashboardStats) -> String {
    let mut out = String::new();
    let fs = &stats.feedback_stats;
    let cs = &stats.complaint_stats;

    let _ = writeln!(out, "Avis");
    let _ = writeln!(out, "  Positifs : {}", fs.total_positive);
    let _ = writeln!(out, "  Neutres  : {}", fs.total_neutral);
    let _ = writeln!(out, "  Négatifs : {}", fs.total_negative);
    let _ = writeln!(out, "  Note moyenne : {:.2}/5", fs.average_rating);

    if !fs.ratings_by_department.is_empty() {
        let _ = writeln!(out, "\n  Note moyenne par service");
        for d in &fs.ratings_by_department {
            let _ = writeln!(
                out,
                "    {} {:>4.2} ({:>3}) {}",
                fit(&d.department, 20),
                d.average_rating,
                d.count,
                bar(d.average_rating, 5.0)
            );
        }
    }

    let _ = writeln!(out, "\nRéclamations");
    let _ = writeln!(out, "  En attente : {}", cs.total_pending);
    let _ = writeln!(out, "  En cours   : {}", cs.total_in_progress);
    let _ = writeln!(out, "  Résolues   : {}", cs.total_resolved);
    let _ = writeln!(out, "  Délai moyen de résolution : {:.1} jour(s)", cs.average_resolution_time);

    if !cs.resolutions_by_category.is_empty() {
        let max = cs.resolutions_by_category.iter().map(|c| c.count).max().unwrap_or(0) as f64;
        let _ = writeln!(out, "\n  Réclamations par catégorie");
        for c in &cs.resolutions_by_category {
            let _ = writeln!(out, "    {} {:>4} {}", fit(&c.category, 20), c.count, bar(c.count as f64, max));
        }
    }

    if !stats.monthly_stats.is_empty() {
        let _ = writeln!(out, "\nTendance mensuelle");
        let _ = writeln!(
            out,
            "    {} {:>5} {:>5} {:>6} {:>6} {:>7}",
            fit("Mois", 16),
            "Pos.",
            "Nég.",
            "Note",
            "Récl.",
            "Délai"
        );
        for m in &stats.monthly_stats {
            let _ = writeln!(
                out,
                "    {} {:>5} {:>5} {:>6.2} {:>6} {:>7.1}",
                fit(&m.label, 16),
                m.positive_count,
                m.negative_count,
                m.average_rating,
                m.complaint_count,
                m.resolution_time
            );
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::ComplaintStatus;
    use crate::stats::fixtures::{complaint, feedback};

    #[test]
    fn test_fit_pads_and_truncates() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 4), "abc…");
        assert_eq!(fit("réclamation", 4).chars().count(), 4);
    }

    #[test]
    fn test_feedback_table_rows() {
        let table = render_feedback_table(&[feedback(12, 4, None, "2024-01-10T08:00:00Z")]);
        let row = table.lines().nth(1).unwrap();

        assert!(row.starts_with("12     2024-01-10 4/5"));
        assert!(row.contains(UNKNOWN_LABEL));
    }

    #[test]
    fn test_complaints_table_shows_status_label() {
        let table = render_complaints_table(&[complaint(
            1,
            ComplaintStatus::Resolved,
            Some("Booking"),
            "2024-01-10",
            Some("2024-01-12"),
        )]);

        assert!(table.contains("Résolue"));
        assert!(table.contains("REC-0001"));
    }

    #[test]
    fn test_page_footer() {
        let footer = render_page_footer(10, 25, Some("/api/x/?page=2"), None);
        assert!(footer.starts_with("10 of 25 record(s)"));
        assert!(footer.contains("next:     --page '/api/x/?page=2'"));
        assert!(!footer.contains("previous"));
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(0.0, 5.0), "");
        assert_eq!(bar(5.0, 5.0).chars().count(), BAR_WIDTH);
        assert_eq!(bar(0.01, 5.0).chars().count(), 1);
    }

    #[test]
    fn test_dashboard_mentions_every_section() {
        let stats = DashboardStats::compute(
            &[feedback(1, 5, Some("Booking"), "2024-01-10")],
            &[complaint(1, ComplaintStatus::Resolved, None, "2024-01-01", Some("2024-01-04"))],
        );

        let text = render_dashboard(&stats);
        assert!(text.contains("Note moyenne : 5.00/5"));
        assert!(text.contains("Délai moyen de résolution : 3.0 jour(s)"));
        assert!(text.contains("janvier 2024"));
    }
}
