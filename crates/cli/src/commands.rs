use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Compile a query to its SQL filter clause
    Compile {
        /// The search query
        query: String,
        /// Reference date (YYYYMMDD) for partial date literals
        #[arg(long)]
        date: Option<String>,
    },
    /// Print the token sequence as JSON
    Tokens {
        /// The search query
        query: String,
    },
    /// Print the reduced expression tree as JSON
    Ast {
        /// The search query
        query: String,
        /// Reference date (YYYYMMDD) for partial date literals
        #[arg(long)]
        date: Option<String>,
    },
}
