//! Command implementations.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use wordwatch_core::Config;
use wordwatch_core::word_lists::ListPaths;

pub mod analyze;
pub mod info;
pub mod watch;

/// Word-list path overrides shared by `watch` and `analyze`.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// General vocabulary list (plain format, one word per line)
    #[arg(long, value_name = "FILE")]
    pub vocabulary_list: Option<Utf8PathBuf>,

    /// Advanced word list (plain format)
    #[arg(long, value_name = "FILE")]
    pub fancy_list: Option<Utf8PathBuf>,

    /// Academic word list (categorized, tab-indented format)
    #[arg(long, value_name = "FILE")]
    pub academic_list: Option<Utf8PathBuf>,
}

impl ListArgs {
    /// Resolve the three word-list paths, CLI flags over config.
    ///
    /// All three must come from somewhere; analysis cannot run with a
    /// partial set.
    pub fn resolve(&self, config: &Config) -> anyhow::Result<ListPaths> {
        let vocabulary = self
            .vocabulary_list
            .clone()
            .or_else(|| config.vocabulary_list.clone());
        let fancy = self.fancy_list.clone().or_else(|| config.fancy_list.clone());
        let academic = self
            .academic_list
            .clone()
            .or_else(|| config.academic_list.clone());

        match (vocabulary, fancy, academic) {
            (Some(vocabulary), Some(fancy), Some(academic)) => Ok(ListPaths {
                vocabulary,
                fancy,
                academic,
            }),
            _ => bail!(
                "word lists not configured: set vocabulary_list, fancy_list, and \
                 academic_list in the config file or pass --vocabulary-list, \
                 --fancy-list, and --academic-list"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_override_config() {
        let config = Config {
            vocabulary_list: Some(Utf8PathBuf::from("config-vocab.txt")),
            fancy_list: Some(Utf8PathBuf::from("config-fancy.txt")),
            academic_list: Some(Utf8PathBuf::from("config-awl.txt")),
            ..Config::default()
        };
        let args = ListArgs {
            vocabulary_list: Some(Utf8PathBuf::from("cli-vocab.txt")),
            ..ListArgs::default()
        };
        let paths = args.resolve(&config).unwrap();
        assert_eq!(paths.vocabulary.as_str(), "cli-vocab.txt");
        assert_eq!(paths.fancy.as_str(), "config-fancy.txt");
    }

    #[test]
    fn missing_list_is_an_error() {
        let args = ListArgs::default();
        assert!(args.resolve(&Config::default()).is_err());
    }
}
