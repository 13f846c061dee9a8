use clap::{Args, Parser, Subcommand};

const LONG_ABOUT: &str = r#"
AI-assisted article search for the newsroom site.

Queries are rewritten by a chat-completions service before they reach the
data API. Without a credential, or when the service fails, the raw query is
searched unchanged.

ENVIRONMENT:
    OPENAI_API_KEY            Credential for query enhancement (optional)
    NEWSROOM_DATA_API_URL     Base URL of the REST data API
    NEWSROOM_HOME             Directory holding config.toml
    NEWSROOM_LOG              Log filter, e.g. "newsroom_search=debug"

EXAMPLES:
    newsroom-search enhance "why are ports backed up"
    newsroom-search search "container shortage" -n 5
    newsroom-search search -d "rail strike" --json
"#;

/// AI-assisted article search
#[derive(Parser, Debug)]
#[command(name = "newsroom-search")]
#[command(author, version)]
#[command(about = "AI-assisted article search with graceful fallback")]
#[command(long_about = LONG_ABOUT)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show how a query would be enhanced
    #[command(visible_alias = "e")]
    Enhance(EnhanceArgs),

    /// Search articles (enhanced by default, -d for the raw query only)
    #[command(visible_alias = "s")]
    Search(SearchArgs),
}

#[derive(Args, Debug)]
pub struct EnhanceArgs {
    /// Raw search query
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Raw search query
    pub query: String,

    /// Maximum number of articles
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Direct search: skip AI enhancement
    #[arg(short, long)]
    pub direct: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
