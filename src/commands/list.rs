//! `paperwiki list` command - list paper references
//!
//! Prints the reference of each matching paper, one per line, in library
//! order. The output feeds straight into `paperwiki open` through a pipe.

use crate::cli::{Cli, ListArgs, OutputFormat};
use paperwiki_core::config::Config;
use paperwiki_core::error::Result;
use paperwiki_core::filter::PaperFilter;
use paperwiki_core::paper::Library;

/// Execute the list command
pub fn execute(cli: &Cli, config: &Config, args: &ListArgs) -> Result<()> {
    let filter = PaperFilter::from_args(&args.filter)?;
    let library = Library::load(&config.library_path()?)?;
    let papers = library.select(&filter);

    match cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = papers
                .iter()
                .map(|paper| {
                    serde_json::json!({
                        "reference": paper.reference(),
                        "title": paper.title,
                        "nickname": paper.nickname,
                        "venue": paper.venue,
                        "year": paper.year,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for paper in &papers {
                println!("{}", paper.reference());
            }
        }
    }

    Ok(())
}
