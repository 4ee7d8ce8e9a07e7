use crate::api::ApiClient;
use crate::cli::commands::export::{ExportCommands, ExportSubcommands};
use crate::config::Config;
use crate::export::{
    COMPLAINTS_EXPORT_NAME, FEEDBACK_EXPORT_NAME, export_complaints, export_feedback, export_path,
};
use crate::ui::with_spinner;
use anyhow::Result;
use colored::*;
use log::info;
use std::path::PathBuf;

pub async fn handle_export_command(cmd: ExportCommands, config: &Config, client: &ApiClient) -> Result<()> {
    client.session().await.role.require_staff()?;
    let export_dir = config.settings.export_dir.as_deref();

    match cmd.command {
        ExportSubcommands::Feedback { output } => {
            let path = export_path(output.as_deref(), export_dir, FEEDBACK_EXPORT_NAME);
            info!("Exporting feedback to {:?}", path);

            let records = with_spinner("Fetching all feedback", client.all_feedback()).await?;
            export_feedback(&path, &records)?;
            report(records.len(), "feedback record(s)", path);
        }
        ExportSubcommands::Complaints { output } => {
            let path = export_path(output.as_deref(), export_dir, COMPLAINTS_EXPORT_NAME);
            info!("Exporting complaints to {:?}", path);

            let records = with_spinner("Fetching all complaints", client.all_complaints()).await?;
            export_complaints(&path, &records)?;
            report(records.len(), "complaint(s)", path);
        }
    }
    Ok(())
}

fn report(count: usize, what: &str, path: PathBuf) {
    println!(
        "{} Exported {} {} to {}",
        "✓".bright_green().bold(),
        count,
        what,
        path.display().to_string().bright_green().bold()
    );
}
