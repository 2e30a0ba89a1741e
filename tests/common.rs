use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn paperwiki() -> Command {
    cargo_bin_cmd!("paperwiki")
}

#[allow(dead_code)]
pub const SAMPLE_LIBRARY: &str = "\
- title: Efficient Estimation of Word Representations in Vector Space
  nickname: word2vec
  authors: [Tomas Mikolov, Kai Chen]
  venue: ICLR
  year: \"2013\"
- title: Attention Is All You Need
  authors: [Ashish Vaswani, Noam Shazeer]
  venue: NeurIPS
  year: \"2017\"
";

/// Write a sample library plus a config pointing at it and at `<dir>/wiki`.
/// Returns the config path to pass via `--config`.
#[allow(dead_code)]
pub fn setup(dir: &Path) -> PathBuf {
    let library = dir.join("library.yaml");
    fs::write(&library, SAMPLE_LIBRARY).unwrap();

    let config = dir.join("config.toml");
    fs::write(
        &config,
        format!(
            "[storage]\nwiki_dir = \"{}\"\nlibrary = \"{}\"\n",
            dir.join("wiki").display(),
            library.display(),
        ),
    )
    .unwrap();
    config
}

/// Write a config file with the given body. Returns its path.
#[allow(dead_code)]
pub fn write_config(dir: &Path, body: &str) -> PathBuf {
    let config = dir.join("config.toml");
    fs::write(&config, body).unwrap();
    config
}
