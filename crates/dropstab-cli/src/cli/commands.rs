use clap::Subcommand;
use dropstab_sdk::PortfolioColor;

/// Main CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that the credentials are accepted
    Login,

    /// Manage portfolio groups
    Portfolios {
        #[command(subcommand)]
        action: PortfolioAction,
    },
}

/// Portfolio group operations
#[derive(Subcommand, Debug)]
pub enum PortfolioAction {
    /// List portfolio groups (short form)
    List,

    /// Show a single portfolio group
    Show {
        /// Portfolio group id
        id: i64,
    },

    /// Create a portfolio group
    Create {
        /// Portfolio name
        #[arg(long)]
        name: String,

        /// Portfolio description
        #[arg(long, default_value = "")]
        description: String,

        /// One of INDIGO, CYAN, PURPLE, ORANGE, BLUE, GREEN
        #[arg(long, default_value = "BLUE")]
        color: PortfolioColor,

        /// Count this portfolio in the account total
        #[arg(long)]
        include_in_total: bool,
    },
}
