#[derive(clap::Parser, Debug)]
#[clap(name = "alcove", about = "Client for the Alcove digital reading library")]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Browse the catalog grouped by category
    Browse,
    /// Search the catalog by title, author, or category
    Search {
        /// Search query
        query: String,
    },
    /// Save a catalog book into your library
    Save {
        /// Book title as shown in the catalog
        title: String,
    },
    /// Read a catalog book chapter by chapter
    Read {
        /// Book title as shown in the catalog
        title: String,
    },
    /// Manage your saved library
    Library {
        #[clap(subcommand)]
        command: LibraryCommands,
    },
    /// Manage your account and sign-in state
    Account {
        #[clap(subcommand)]
        command: AccountCommands,
    },
    /// Subscribe to the newsletter
    Subscribe {
        /// Email address to subscribe
        email: String,
    },
    /// Show, set, or toggle the theme preference
    Theme {
        /// "dark", "light", or "toggle"; omit to show the current theme
        value: Option<String>,
    },
    /// Manage configuration
    Config {
        #[clap(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand, Debug)]
pub enum LibraryCommands {
    /// List saved books
    List,
    /// Remove a saved book
    Remove {
        /// Title of the saved book
        title: String,
    },
    /// Update reading progress for a saved book
    Progress {
        /// Title of the saved book
        title: String,
        /// unread, reading, or finished
        #[clap(long)]
        status: Option<String>,
        /// Pages read so far
        #[clap(long)]
        pages_read: Option<u32>,
        /// Total pages in the book
        #[clap(long)]
        total_pages: Option<u32>,
    },
    /// Show library statistics
    Stats,
}

#[derive(clap::Subcommand, Debug)]
pub enum AccountCommands {
    /// Create an account with email and password
    Register {
        /// Email address
        email: String,
    },
    /// Sign in with email and password
    Login {
        /// Email address
        email: String,
    },
    /// Sign in through a federated provider (e.g. google, facebook)
    LoginWith {
        /// Provider name
        provider: String,
    },
    /// Sign out
    Logout,
    /// Show the current sign-in state
    Whoami,
}

#[derive(clap::Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the full configuration
    Show,
    /// Get a configuration value
    Get {
        /// Key such as catalog.endpoint
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Key such as catalog.endpoint
        key: String,
        /// New value
        value: String,
    },
    /// Reset the configuration to defaults
    Reset,
}
