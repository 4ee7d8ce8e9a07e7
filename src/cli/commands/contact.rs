use clap::Args;

/// Contact details attached to a feedback or complaint submission.
/// Missing values are taken from the client profile, then prompted for.
#[derive(Args, Debug, Clone, Default)]
pub struct ContactArgs {
    /// Company or organisation name
    #[arg(long)]
    pub organisation: Option<String>,
    /// Last name
    #[arg(long)]
    pub last_name: Option<String>,
    /// First name
    #[arg(long)]
    pub first_name: Option<String>,
    /// Email address
    #[arg(long)]
    pub email: Option<String>,
    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,
    /// Booking number the submission relates to
    #[arg(long)]
    pub booking: Option<String>,
}
