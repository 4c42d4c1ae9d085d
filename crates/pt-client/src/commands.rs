use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// List projects, optionally filtered locally
    List {
        /// Case-insensitive substring filter over name and description
        #[arg(long)]
        filter: Option<String>,
    },
    /// Get a project by ID
    Get {
        /// Project ID (UUID)
        id: String,
    },
    /// Create a new project
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        /// Repeat for each skill
        #[arg(long = "skill")]
        skills: Vec<String>,
        /// Team size: 1, 2, 3, 4 or 5+
        #[arg(long)]
        members: String,
        #[arg(long)]
        active: bool,
    },
    /// Replace a project's fields
    Update {
        /// Project ID (UUID)
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        /// Repeat for each skill
        #[arg(long = "skill")]
        skills: Vec<String>,
        /// Team size: 1, 2, 3, 4 or 5+
        #[arg(long)]
        members: String,
        #[arg(long)]
        active: bool,
    },
    /// Delete a project
    Delete {
        /// Project ID (UUID)
        id: String,
    },
    /// Check server health
    Health,
}
