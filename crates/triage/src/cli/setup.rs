use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "triage", bin_name = "triage", version)]
#[command(
    about = "Review a folder of photos and videos one file at a time",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Task file to work on (.yaml or .yml)
    #[arg(short, long, global = true, env = "TRIAGE_TASK", help_heading = "Options")]
    pub task: Option<PathBuf>,

    /// Read configuration from this file as well
    #[arg(short, long, global = true, help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a task from the media files in a directory
    New {
        /// Directory to crawl
        root: PathBuf,

        /// Only include these extensions (e.g. jpg mp4)
        #[arg(short, long, num_args = 1..)]
        ext: Vec<String>,

        /// Do not descend into sub-directories
        #[arg(long)]
        local: bool,

        /// Shuffle the files
        #[arg(long)]
        shuffle: bool,

        /// Overwrite an existing task file
        #[arg(long)]
        force: bool,
    },

    /// Show details of the current file
    #[command(alias = "cur")]
    Show {
        #[arg(long)]
        json: bool,
    },

    /// Show task progress
    #[command(alias = "st")]
    Status {
        #[arg(long)]
        json: bool,
    },

    /// Mark the current file reviewed and move on
    #[command(alias = "n")]
    Next,

    /// Go back to the previously reviewed file
    #[command(alias = "b")]
    Back,

    /// Move the current file into a category and move on
    #[command(alias = "mv")]
    Move {
        /// Category name (exact)
        category: String,
    },

    /// Move the current file to the trash and drop it from the task
    #[command(alias = "rm")]
    Trash,

    /// Rename the current file, keeping its extension
    Rename(RenameArgs),

    /// Toggle the favorite mark on the current file
    Fav,

    /// Shuffle the remaining files
    Shuffle,

    /// Manage categories
    #[command(alias = "cat")]
    Category {
        #[command(subcommand)]
        action: CategoryCommands,
    },

    /// Copy every file carrying the favorite mark into a directory
    Favorites {
        /// Directory to search recursively
        root: PathBuf,

        /// Directory to copy into (must exist)
        dest: PathBuf,

        /// Copy into a sub-directory named after each file's parent
        #[arg(long)]
        subdirs: bool,
    },

    /// Print the resolved configuration
    Config,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct RenameArgs {
    /// New name, without extension
    pub name: Option<String>,

    /// Use a random name instead
    #[arg(long)]
    pub random: bool,
}

#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// Add a directory as a category
    Add {
        /// Destination directory (must exist)
        path: PathBuf,

        /// Category name (defaults to the directory name)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Remove the category with this name and path
    #[command(alias = "rm")]
    Remove { name: String, path: PathBuf },

    /// Remove all categories
    Clear,

    /// List categories
    #[command(alias = "ls")]
    List {
        /// Only names with a word starting with this
        #[arg(short, long, default_value = "")]
        filter: String,

        #[arg(long)]
        json: bool,
    },

    /// Replace the categories with the sub-directories of a directory
    FromDir { dir: PathBuf },
}
