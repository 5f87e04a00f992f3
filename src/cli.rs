use clap::{Parser, Subcommand};

/// CLI arguments parser using `clap`
#[derive(Parser, Debug)]
#[command(about = "Manage named Git identity profiles and switch between them")]
pub struct Cli {
    /// Subcommand chosen to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Creates the profiles file with a placeholder profile
    Generate,
    /// Interactively picks a profile and applies it as the global Git identity
    Switch,
    /// Adds a new profile, overwriting any profile with the same key
    Add {
        /// Unique profile key
        key: String,
        /// Git display name
        name: String,
        /// Git email
        email: String,
    },
    /// Updates an existing profile
    Update {
        /// Key of the profile to update
        key: String,
        /// New Git display name
        name: String,
        /// New Git email
        email: String,
    },
    /// Deletes a profile
    Delete {
        /// Key of the profile to delete
        key: String,
    },
    /// Prints the profiles file as stored on disk
    View,
}
