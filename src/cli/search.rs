//! Search command implementation

use crate::cli::SearchArgs;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::enhance::QueryEnhancer;
use crate::output::{format_results, OutputFormat};
use crate::search::{DataApiClient, SearchQuery};
use tracing::info;

/// Run the search command
pub async fn run(args: SearchArgs) -> Result<()> {
    let config = Config::load()?;
    config.data_api.validate()?;

    let enhancer = if args.direct {
        QueryEnhancer::disabled()
    } else {
        config.enhancer.validate()?;
        QueryEnhancer::new(&config.enhancer)
    };
    let data_api = DataApiClient::new(&config.data_api);
    info!(data_api = %config.data_api.base_url, "Searching articles");

    let query = SearchQuery::new(&args.query)
        .with_limit(args.limit.unwrap_or(config.data_api.default_limit))
        .with_max_related(config.data_api.max_related_terms)
        .with_direct(args.direct);

    let results = query.execute(&enhancer, &data_api).await?;

    let output = format_results(&results, OutputFormat::from_json_flag(args.json));
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}
