//! CSV export of feedback and complaints

use crate::api::models::{Complaint, Feedback};
use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const FEEDBACK_EXPORT_NAME: &str = "feedback-export.csv";
pub const COMPLAINTS_EXPORT_NAME: &str = "complaints-export.csv";

const FEEDBACK_COLUMNS: [&str; 11] = [
    "id",
    "date_submitted",
    "note",
    "service",
    "commentaire",
    "nom_structure",
    "nom",
    "prenom",
    "email",
    "telephone",
    "booking_number",
];

const COMPLAINT_COLUMNS: [&str; 14] = [
    "id",
    "numero_suivi",
    "date_submitted",
    "statut",
    "date_resolue",
    "categorie",
    "sujet",
    "description",
    "nom_structure",
    "nom",
    "prenom",
    "email",
    "telephone",
    "booking_number",
];

#[derive(Debug, Serialize)]
struct FeedbackRow<'a> {
    id: u64,
    date_submitted: &'a str,
    note: u8,
    service: &'a str,
    commentaire: &'a str,
    nom_structure: &'a str,
    nom: &'a str,
    prenom: &'a str,
    email: &'a str,
    telephone: &'a str,
    booking_number: &'a str,
}

impl<'a> From<&'a Feedback> for FeedbackRow<'a> {
    fn from(f: &'a Feedback) -> Self {
        Self {
            id: f.id,
            date_submitted: &f.date_submitted,
            note: f.note,
            service: f.service_name().unwrap_or_default(),
            commentaire: f.commentaire.as_deref().unwrap_or_default(),
            nom_structure: &f.nom_structure,
            nom: &f.nom,
            prenom: &f.prenom,
            email: &f.email,
            telephone: &f.telephone,
            booking_number: f.booking_number.as_deref().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ComplaintRow<'a> {
    id: u64,
    numero_suivi: &'a str,
    date_submitted: &'a str,
    statut: &'static str,
    date_resolue: &'a str,
    categorie: &'a str,
    sujet: &'a str,
    description: &'a str,
    nom_structure: &'a str,
    nom: &'a str,
    prenom: &'a str,
    email: &'a str,
    telephone: &'a str,
    booking_number: &'a str,
}

impl<'a> From<&'a Complaint> for ComplaintRow<'a> {
    fn from(c: &'a Complaint) -> Self {
        Self {
            id: c.id,
            numero_suivi: &c.numero_suivi,
            date_submitted: &c.date_submitted,
            statut: c.statut.as_wire(),
            date_resolue: c.date_resolue.as_deref().unwrap_or_default(),
            categorie: c.category_name().unwrap_or_default(),
            sujet: &c.sujet,
            description: &c.description,
            nom_structure: &c.nom_structure,
            nom: &c.nom,
            prenom: &c.prenom,
            email: &c.email,
            telephone: &c.telephone,
            booking_number: c.booking_number.as_deref().unwrap_or_default(),
        }
    }
}

/// Write the header row up front so an empty export still names its columns
fn write_rows<W, R>(writer: W, columns: &[&str], rows: impl IntoIterator<Item = R>) -> Result<()>
where
    W: Write,
    R: Serialize,
{
    let mut csv_writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    csv_writer
        .write_record(columns)
        .context("Failed to write CSV header")?;
    for row in rows {
        csv_writer.serialize(row).context("Failed to write CSV row")?;
    }
    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

pub fn write_feedback_csv<W: Write>(writer: W, feedback: &[Feedback]) -> Result<()> {
    write_rows(writer, &FEEDBACK_COLUMNS, feedback.iter().map(FeedbackRow::from))
}

pub fn write_complaints_csv<W: Write>(writer: W, complaints: &[Complaint]) -> Result<()> {
    write_rows(writer, &COMPLAINT_COLUMNS, complaints.iter().map(ComplaintRow::from))
}

/// Where an export lands: the explicit path, else the export dir, else the
/// working directory
pub fn export_path(output: Option<&Path>, export_dir: Option<&Path>, default_name: &str) -> PathBuf {
    match (output, export_dir) {
        (Some(path), _) => path.to_path_buf(),
        (None, Some(dir)) => dir.join(default_name),
        (None, None) => PathBuf::from(default_name),
    }
}

pub fn export_feedback(path: &Path, feedback: &[Feedback]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
    write_feedback_csv(file, feedback)?;
    info!("Exported {} feedback records to {:?}", feedback.len(), path);
    Ok(())
}

pub fn export_complaints(path: &Path, complaints: &[Complaint]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
    write_complaints_csv(file, complaints)?;
    info!("Exported {} complaints to {:?}", complaints.len(), path);
    Ok(())
}
