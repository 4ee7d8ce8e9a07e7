use clap::{Args, Subcommand};

#[derive(Args)]
pub struct AuthCommands {
    #[command(subcommand)]
    pub command: AuthSubcommands,
}

#[derive(Subcommand)]
pub enum AuthSubcommands {
    /// Log in and store the session
    Login {
        /// Account username (prompted if omitted)
        #[arg(short, long)]
        username: Option<String>,
        /// Account password (prompted if omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Create a client account
    Register(RegisterArgs),
    /// Forget the stored session
    Logout,
    /// Show who is logged in
    Status,
}

/// Client registration details. Anything omitted is prompted for.
#[derive(Args, Debug, Clone, Default)]
pub struct RegisterArgs {
    /// Login username
    #[arg(short, long)]
    pub username: Option<String>,
    /// Login email, defaults to the contact email
    #[arg(long)]
    pub login_email: Option<String>,
    /// Company or organisation name
    #[arg(long)]
    pub organisation: Option<String>,
    /// Last name
    #[arg(long)]
    pub last_name: Option<String>,
    /// First name
    #[arg(long)]
    pub first_name: Option<String>,
    /// Contact email address
    #[arg(long)]
    pub email: Option<String>,
    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,
}
