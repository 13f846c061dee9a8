//! Enhance command implementation

use crate::cli::EnhanceArgs;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::enhance::QueryEnhancer;
use crate::output::{format_enhancement, OutputFormat};

/// Run the enhance command
pub async fn run(args: EnhanceArgs) -> Result<()> {
    let config = Config::load()?;
    config.enhancer.validate()?;
    let enhancer = QueryEnhancer::new(&config.enhancer);

    let result = enhancer.enhance(&args.query).await;

    let output = format_enhancement(&result, OutputFormat::from_json_flag(args.json));
    println!("{}", output.trim_end());

    Ok(())
}
