//! Helper functions shared across commands

use std::env;
use std::io::{self, Write};

use paperwiki_core::config::EditorConfig;
use paperwiki_core::error::Result;

/// Resolve the editor command from override, config, EDITOR, or VISUAL
///
/// Returns None if no editor is configured
pub fn resolve_editor(editor_override: Option<&str>, config: &EditorConfig) -> Option<Vec<String>> {
    if let Some(cmd) = editor_override {
        return Some(vec![cmd.to_string()]);
    }
    if !config.command.is_empty() {
        return Some(config.command.clone());
    }
    env::var("EDITOR")
        .ok()
        .or_else(|| env::var("VISUAL").ok())
        .filter(|s| !s.is_empty())
        .map(|s| vec![s])
}

/// Ask for confirmation, reading one line from stdin.
///
/// An empty answer takes the default.
pub fn confirm(prompt: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "[Y/n]" } else { "[y/N]" };
    print!("{} {} ", prompt, hint);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    Ok(match answer.trim().to_lowercase().as_str() {
        "" => default_yes,
        "y" | "yes" => true,
        _ => false,
    })
}
