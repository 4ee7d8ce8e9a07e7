use crate::api::ApiClient;
use crate::cli::commands::stats::StatsArgs;
use crate::stats::DashboardStats;
use crate::ui::{render_dashboard, with_spinner};
use anyhow::{Context, Result};
use log::info;

/// Fetch every feedback record and complaint, then aggregate locally
pub async fn stats_command(args: StatsArgs, client: &ApiClient) -> Result<()> {
    info!("Computing dashboard statistics");
    client.session().await.role.require_staff()?;

    let (feedback, complaints) = with_spinner("Fetching feedback and complaints", async {
        tokio::try_join!(client.all_feedback(), client.all_complaints())
    })
    .await?;
    info!(
        "Aggregating {} feedback records and {} complaints",
        feedback.len(),
        complaints.len()
    );

    let stats = DashboardStats::compute(&feedback, &complaints);

    if args.json {
        let json = serde_json::to_string_pretty(&stats).context("Failed to serialize statistics")?;
        println!("{}", json);
        return Ok(());
    }

    println!(
        "Based on {} feedback record(s) and {} complaint(s)\n",
        feedback.len(),
        complaints.len()
    );
    print!("{}", render_dashboard(&stats));
    Ok(())
}
