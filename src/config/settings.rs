// Settings resolution.
// Layers built-in defaults, the TOML config file and command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;
use tracing::debug;

use crate::api::DEFAULT_QUOTE_URL;
use crate::error::{CollectiveError, Result};
use crate::state::{Member, MemberRecord, View, default_members};

use super::paths;

/// The Quote Collective: team portfolio and random quote generator.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "quote-collective", version, about)]
pub struct Args {
    /// Config file (defaults to the platform config directory)
    #[arg(short, long, env = "QUOTE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Random-quote endpoint
    #[arg(long, env = "QUOTE_API_URL")]
    pub api_url: Option<String>,

    /// Start in the quote generator instead of the portfolio
    #[arg(long)]
    pub app: bool,

    /// Log file (defaults to the platform cache directory)
    #[arg(long, env = "QUOTE_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

/// On-disk config file layout.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    api_url: Option<String>,
    start_view: Option<View>,
    members: Vec<MemberRecord>,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub start_view: View,
    pub members: Vec<Member>,
    pub log_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_QUOTE_URL.to_string(),
            start_view: View::default(),
            members: default_members(),
            log_path: None,
        }
    }
}

impl Settings {
    /// Resolve settings for the given command line.
    ///
    /// An explicit `--config` file must exist; the default config file is
    /// optional.
    pub fn load(args: &Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => read_file(path)?,
            None => match paths::config_path() {
                Some(path) if path.exists() => read_file(&path)?,
                _ => FileConfig::default(),
            },
        };
        resolve(file, args)
    }
}

fn read_file(path: &Path) -> Result<FileConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        CollectiveError::Other(format!("Cannot read config {}: {}", path.display(), e))
    })?;
    debug!(path = %path.display(), "loaded config file");
    toml::from_str(&contents).map_err(|source| CollectiveError::Config {
        path: path.to_path_buf(),
        source,
    })
}

fn resolve(file: FileConfig, args: &Args) -> Result<Settings> {
    let api_url = args
        .api_url
        .clone()
        .or(file.api_url)
        .unwrap_or_else(|| DEFAULT_QUOTE_URL.to_string());

    let start_view = if args.app {
        View::App
    } else {
        file.start_view.unwrap_or_default()
    };

    let members = if file.members.is_empty() {
        default_members()
    } else {
        file.members
            .into_iter()
            .map(Member::try_from)
            .collect::<Result<Vec<_>>>()?
    };

    let log_path = args.log_file.clone().or_else(paths::log_path);

    Ok(Settings {
        api_url,
        start_view,
        members,
        log_path,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn args_with(config: &NamedTempFile) -> Args {
        Args {
            config: Some(config.path().to_path_buf()),
            ..Args::default()
        }
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = write_config("");
        let settings = Settings::load(&args_with(&file)).unwrap();

        assert_eq!(settings.api_url, DEFAULT_QUOTE_URL);
        assert_eq!(settings.start_view, View::Portfolio);
        assert_eq!(settings.members, default_members());
    }

    #[test]
    fn test_file_values() {
        let file = write_config(
            r#"
api_url = "http://localhost:9000/quotes/random"
start_view = "app"

[[members]]
name = "Mae"
role = "Engineer"
bio = "..."
image = "mae.png"
"#,
        );
        let settings = Settings::load(&args_with(&file)).unwrap();

        assert_eq!(settings.api_url, "http://localhost:9000/quotes/random");
        assert_eq!(settings.start_view, View::App);
        assert_eq!(
            settings.members,
            vec![Member::new("Mae", "Engineer", "...", "mae.png")]
        );
    }

    #[test]
    fn test_cli_beats_file() {
        let file = write_config(
            r#"
api_url = "http://from-file/quotes"
start_view = "portfolio"
"#,
        );
        let args = Args {
            api_url: Some("http://from-cli/quotes".to_string()),
            app: true,
            log_file: Some(PathBuf::from("/tmp/collective-test.log")),
            ..args_with(&file)
        };
        let settings = Settings::load(&args).unwrap();

        assert_eq!(settings.api_url, "http://from-cli/quotes");
        assert_eq!(settings.start_view, View::App);
        assert_eq!(
            settings.log_path,
            Some(PathBuf::from("/tmp/collective-test.log"))
        );
    }

    #[test]
    fn test_incomplete_member_fails() {
        let file = write_config(
            r#"
[[members]]
name = "Mae"
role = "Engineer"
image = "mae.png"
"#,
        );
        let err = Settings::load(&args_with(&file)).unwrap_err();
        assert!(matches!(err, CollectiveError::MissingMemberField("bio")));
    }

    #[test]
    fn test_unknown_key_is_config_error() {
        let file = write_config("colour = \"teal\"\n");
        let err = Settings::load(&args_with(&file)).unwrap_err();
        assert!(matches!(err, CollectiveError::Config { .. }));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let args = Args {
            config: Some(PathBuf::from("/definitely/not/here/config.toml")),
            ..Args::default()
        };
        assert!(Settings::load(&args).is_err());
    }
}
