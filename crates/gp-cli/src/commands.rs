use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Sign in with one of the built-in demo accounts
    DemoLogin {
        /// Account to use: admin, officer, or citizen
        #[arg(value_parser = ["admin", "officer", "citizen"])]
        role: String,
    },

    /// Create an account and sign in with it
    Register {
        /// Full name
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// At least 8 characters
        #[arg(long)]
        password: String,

        /// Must match --password
        #[arg(long)]
        confirm_password: String,

        /// Account type: citizen or officer
        #[arg(long, default_value = "citizen", value_parser = ["citizen", "officer"])]
        role: String,
    },

    /// Sign out and forget the saved session
    Logout,

    /// Show the signed-in identity and dashboard greeting
    Whoami,

    /// List services matching the given filters
    Services {
        /// Case-insensitive text matched against name and description
        #[arg(long, default_value = "")]
        query: String,

        /// Category label (e.g. "Tax Services") or "all"
        #[arg(long, default_value = "all")]
        category: String,

        /// available, pending, processing, completed, rejected, or "all"
        #[arg(long, default_value = "all")]
        status: String,

        /// Selected dashboard tab index
        #[arg(long, default_value_t = 0)]
        tab: usize,
    },

    /// Show quick-stat counts over the whole catalog
    Stats,

    /// Show the dashboard tabs available to the current identity
    Tabs,
}
