use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use pw_arxiv::arxiv::DEFAULT_CATEGORY;
use pw_arxiv::ArxivSource;
use pw_core::{Config, Result};
use pw_notion::NotionClient;
use pw_web::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// arXiv category to watch
    #[arg(long, default_value = DEFAULT_CATEGORY)]
    category: String,

    /// Relevance model to use. Available models: keyword (default)
    #[arg(long, default_value = "keyword")]
    model: String,

    /// Comma-separated interest keywords overriding the model's built-in
    /// list
    #[arg(long)]
    keywords: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    // All three Notion settings are required; refuse to start without them.
    let config = Config::from_env()?;

    let source = Arc::new(ArxivSource::new(&cli.category));
    info!("📚 Paper source initialized (watching {})", cli.category);

    let keywords = cli.keywords.map(|list| {
        list.split(',')
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect()
    });
    let relevance = pw_inference::create_model(&cli.model, keywords)?;
    info!("🧠 Relevance model initialized (using {})", relevance.name());

    let notion = NotionClient::new(&config);
    info!(
        "🗃️ Notion client initialized (database {})",
        config.notion_database_id
    );

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
        .parse()
        .map_err(|e| pw_core::Error::Config(format!("Invalid host/port: {}", e)))?;

    pw_web::serve(
        AppState {
            source,
            relevance,
            notion,
        },
        addr,
    )
    .await
}
