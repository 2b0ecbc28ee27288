use clap::{Parser, Subcommand};

pub mod commands;

#[derive(Parser)]
#[command(name = "workshop-console")]
#[command(about = "Administrative console for workshop listings and student enrollments")]
#[command(long_about = "Workshop Console manages the workshop catalog of an educational center: \
                       create, edit, cancel and delete workshop entries, and enroll students \
                       with capacity and status validation. State lives in memory for the \
                       lifetime of the session. Start with 'workshop-console console'.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive admin console (primary command)
    Console,
    /// List the catalog, optionally filtered by category
    List {
        /// Category to show; the sentinel "all" shows everything
        #[arg(long, default_value = "all", help = "Exact category name, or \"all\"")]
        category: String,
    },
    /// Display catalog statistics: active, canceled, available seats, total
    Stats,
}
