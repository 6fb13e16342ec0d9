use clap::{Parser, Subcommand};
use shoplist::model::Unit;

/// One line of the interactive session, parsed as a command.
///
/// `multicall` makes clap treat the first token as the command name, so a
/// tokenized input line can be fed to `try_parse_from` directly.
#[derive(Parser, Debug)]
#[command(name = "shoplist", multicall = true)]
pub struct ReplLine {
    #[command(subcommand)]
    pub command: ReplCommand,
}

#[derive(Subcommand, Debug)]
pub enum ReplCommand {
    /// Add an item to the list
    #[command(alias = "a")]
    Add {
        /// Description of the item (quote it to include spaces)
        description: String,

        /// Amount of the item
        #[arg(default_value_t = 1.0, allow_negative_numbers = true)]
        amount: f64,

        /// Measurement unit (see `units`)
        #[arg(default_value = "piece")]
        unit: Unit,
    },

    /// List the items
    #[command(alias = "ls")]
    List {
        /// Print the items as JSON instead of the fixed-width table
        #[arg(long)]
        json: bool,
    },

    /// Show a single item
    Show {
        /// Position of the item as shown by `list`
        position: usize,
    },

    /// Change fields of an item
    #[command(alias = "e")]
    Edit {
        /// Position of the item as shown by `list`
        position: usize,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New amount
        #[arg(short, long, allow_negative_numbers = true)]
        amount: Option<f64>,

        /// New measurement unit
        #[arg(short, long)]
        unit: Option<Unit>,
    },

    /// Remove an item from the list
    #[command(alias = "rm")]
    Remove {
        /// Position of the item as shown by `list`
        position: usize,
    },

    /// List the available measurement units
    Units,

    /// Leave the session
    #[command(aliases = ["q", "exit"])]
    Quit,
}
