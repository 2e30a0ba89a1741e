//! `paperwiki open` command - open wiki notes in the editor
//!
//! Papers are selected either by filter words ("alone" mode) or by a
//! newline-delimited reference list on stdin ("pipe" mode); the two are
//! mutually exclusive. References resolve to note paths under the
//! configured wiki directory, deduplicated in first-seen order, and the
//! editor is invoked on the result.
//!
//! Example usage:
//! - `paperwiki open by Vaswani in 2017`
//! - `paperwiki list at NeurIPS | paperwiki open`

use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OpenArgs, OutputFormat};
use crate::commands::helpers::{confirm, resolve_editor};
use paperwiki_core::config::Config;
use paperwiki_core::error::{PaperwikiError, Result};
use paperwiki_core::filter::PaperFilter;
use paperwiki_core::paper::Library;
use paperwiki_core::resolver::{self, ReferenceSource};

/// Execute the open command
pub fn execute(cli: &Cli, config: &Config, args: &OpenArgs, start: Instant) -> Result<()> {
    // The wiki directory gates everything else.
    let wiki_dir = config.wiki_dir()?;

    let source = gather_source(args)?;
    let library = match &source {
        ReferenceSource::Filter(_) => Some(Library::load(&config.library_path()?)?),
        ReferenceSource::Piped(_) => None,
    };
    let references = source.references(library.as_ref())?;

    if cli.verbose {
        debug!(count = references.len(), elapsed = ?start.elapsed(), "gather_references");
    }

    let paths = resolver::resolve(&references, &wiki_dir, &config.storage.extension)?;

    if cli.verbose {
        debug!(count = paths.len(), elapsed = ?start.elapsed(), "resolve_paths");
    }

    // Only prompt when someone is there to answer.
    if paths.len() > 1 && !args.yes && io::stdin().is_terminal() {
        let proceed = confirm(&format!("Open {} wiki notes?", paths.len()), true)?;
        if !proceed {
            if !cli.quiet {
                println!("aborted");
            }
            return Ok(());
        }
    }

    let editor = resolve_editor(args.editor.as_deref(), &config.editor).ok_or_else(|| {
        PaperwikiError::UsageError(
            "no editor configured. Set EDITOR or VISUAL, [editor] command in the config file, or use --editor"
                .to_string(),
        )
    })?;

    let register_dir = config.editor.register_wiki.then_some(wiki_dir.as_path());
    let batch = config.editor.batch && !args.no_batch;

    if batch {
        open_in_editor(&editor, &paths, register_dir)?;
    } else {
        for path in &paths {
            open_in_editor(&editor, std::slice::from_ref(path), register_dir)?;
        }
    }

    if cli.verbose {
        debug!(elapsed = ?start.elapsed(), "open_editor");
    }

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "status": "ok",
                "count": paths.len(),
                "paths": paths
                    .iter()
                    .map(|p| p.to_string_lossy().into_owned())
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "Opened {} wiki note{}",
                    paths.len(),
                    if paths.len() != 1 { "s" } else { "" }
                );
            }
        }
    }

    Ok(())
}

/// Build the reference source from the two usage modes
fn gather_source(args: &OpenArgs) -> Result<ReferenceSource> {
    if !args.filter.is_empty() {
        let filter = PaperFilter::from_args(&args.filter)?;
        return Ok(ReferenceSource::Filter(filter));
    }

    if io::stdin().is_terminal() {
        return Err(PaperwikiError::UsageError(
            "no filter given and nothing piped on stdin".to_string(),
        ));
    }

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(ReferenceSource::Piped(
        input.lines().map(str::to_owned).collect(),
    ))
}

/// Run one editor invocation on the given paths
fn open_in_editor(editor: &[String], paths: &[PathBuf], register_dir: Option<&Path>) -> Result<()> {
    let mut command = Command::new(&editor[0]);
    command.args(&editor[1..]);

    if let Some(wiki_dir) = register_dir {
        command.arg("-c").arg(format!(
            "call add(g:vimwiki_list, {{'path': '{}'}})",
            wiki_dir.display()
        ));
    }

    command.args(paths);

    debug!(editor = %editor[0], paths = paths.len(), "spawn_editor");

    let status = command.status().map_err(|e| {
        PaperwikiError::Other(format!("failed to open editor '{}': {}", editor[0], e))
    })?;

    if !status.success() {
        return Err(PaperwikiError::Other(format!(
            "editor '{}' exited with non-zero status: {:?}",
            editor[0], status
        )));
    }

    Ok(())
}
