use std::{
    io::IsTerminal,
    path::{Path, PathBuf},
};

use clap::{Parser, ValueEnum};

pub const DEFAULT_FILE: &str = "file.txt";
pub const DEFAULT_DIR: &str = ".";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Color each stream that is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn resolve(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => is_terminal,
        }
    }
}

/// A line-oriented text editor
#[derive(Parser, Debug)]
#[command(name = "line-editor", version)]
pub struct Cli {
    /// Session label (unused)
    #[arg(value_name = "LABEL")]
    pub label: String,

    /// File to edit, created empty if missing
    #[arg(value_name = "FILE", default_value = DEFAULT_FILE)]
    pub file: String,

    /// Directory containing FILE
    #[arg(value_name = "DIR", default_value = DEFAULT_DIR)]
    pub dir: PathBuf,

    /// When to color the prompt and error messages
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Write diagnostics to this file instead of standard error
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Startup settings resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
    /// Color on standard output
    pub color: bool,
    /// Color on standard error, including log lines written there
    pub err_color: bool,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn target_path(dir: &Path, file: &str) -> PathBuf {
        dir.join(file)
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            path: Config::target_path(&cli.dir, &cli.file),
            color: cli.color.resolve(std::io::stdout().is_terminal()),
            err_color: cli.color.resolve(std::io::stderr().is_terminal()),
            log_file: cli.log_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["line-editor", "session"]).unwrap();

        assert_eq!(cli.label, "session");
        assert_eq!(cli.file, "file.txt");
        assert_eq!(cli.dir, PathBuf::from("."));
        assert_eq!(cli.color, ColorChoice::Auto);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_file_and_directory() {
        let cli = Cli::try_parse_from([
            "line-editor",
            "s",
            "notes.txt",
            "/tmp/work",
            "--color",
            "never",
        ])
        .unwrap();
        let config = Config::from(cli);

        assert_eq!(config.path, PathBuf::from("/tmp/work").join("notes.txt"));
        assert!(!config.color);
        assert!(!config.err_color);
    }

    #[test]
    fn test_file_only_uses_current_directory() {
        let cli = Cli::try_parse_from(["line-editor", "s", "notes.txt"]).unwrap();

        assert_eq!(Config::from(cli).path, Path::new(".").join("notes.txt"));
    }

    #[test]
    fn test_color_always_and_log_file() {
        let cli = Cli::try_parse_from([
            "line-editor",
            "s",
            "--color",
            "always",
            "--log-file",
            "editor.log",
        ])
        .unwrap();
        let config = Config::from(cli);

        assert!(config.color);
        assert!(config.err_color);
        assert_eq!(config.log_file, Some(PathBuf::from("editor.log")));
    }

    #[test]
    fn test_argument_count() {
        assert!(Cli::try_parse_from(["line-editor"]).is_err());
        assert!(Cli::try_parse_from(["line-editor", "a", "b", "c", "d"]).is_err());
    }

    #[test]
    fn test_auto_follows_each_stream() {
        assert!(ColorChoice::Auto.resolve(true));
        assert!(!ColorChoice::Auto.resolve(false));
        assert!(ColorChoice::Always.resolve(false));
        assert!(!ColorChoice::Never.resolve(true));
    }
}
