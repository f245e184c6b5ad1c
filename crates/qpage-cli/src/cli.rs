use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    author,
    version,
    about,
    help_template = "{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}",
    arg_required_else_help = true
)]
pub struct Args {
    /// Set output verbosity
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress outputs
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output as json
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Provide custom config file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a paginated AQL query
    #[command(arg_required_else_help = true)]
    #[clap(name = "render", visible_alias = "r")]
    Render {
        /// Collection to iterate
        #[arg(required = true, long = "in")]
        collection: String,

        /// Loop variable (defaults to the configured variable)
        #[arg(required = false, long = "for")]
        variable: Option<String>,

        /// Raw request query string, e.g. `sort=date,name%20desc&page=2`
        #[arg(required = false, long)]
        query: Option<String>,

        /// Comma separated sort fields, each optionally followed by a direction
        #[arg(required = false, short, long)]
        sort: Option<String>,

        /// Page to display
        #[arg(required = false, short, long)]
        page: Option<u64>,

        /// Records per page
        #[arg(required = false, short, long)]
        limit: Option<u64>,

        /// Records per page (used when --limit is absent)
        #[arg(required = false, long)]
        per_page: Option<u64>,

        /// RETURN expression (defaults to the loop variable)
        #[arg(required = false, long = "return")]
        return_value: Option<String>,
    },

    /// Print the configuration
    Config {
        /// Print the annotated default configuration instead of the active one
        #[arg(required = false, long)]
        default: bool,

        /// Write the annotated default configuration to the config path
        #[arg(required = false, long, conflicts_with = "default")]
        generate: bool,
    },
}
