//! Command-line flags (each one can also come from the environment).

use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Parser, Debug, Clone)]
#[command(name = "youmatter", version, about = "YouMatter chatbot in the terminal")]
pub struct Cli {
    /// Base URL of the chat server; messages go to <base-url>/chat.
    #[arg(long, env = "YOUMATTER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Give up on a reply after this many seconds (default: wait forever).
    #[arg(long, env = "YOUMATTER_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Start with the light palette.
    #[arg(long)]
    pub light: bool,

    /// Write logs here. The terminal belongs to the UI, so without this logs are dropped.
    #[arg(long, env = "YOUMATTER_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn defaults(arg: &clap::Arg) -> Vec<&str> {
        arg.get_default_values().iter().filter_map(|v| v.to_str()).collect()
    }

    fn arg<'a>(cmd: &'a clap::Command, id: &str) -> &'a clap::Arg {
        cmd.get_arguments()
            .find(|a| a.get_id() == id)
            .unwrap_or_else(|| panic!("no argument {id}"))
    }

    // Read from the command definition so YOUMATTER_* variables in the test environment don't matter.
    #[test]
    fn defaults_and_env_fallbacks() {
        let cmd = Cli::command();

        let base_url = arg(&cmd, "base_url");
        assert_eq!(defaults(base_url), vec![DEFAULT_BASE_URL]);
        assert_eq!(base_url.get_env(), Some(std::ffi::OsStr::new("YOUMATTER_BASE_URL")));

        let timeout = arg(&cmd, "timeout_secs");
        assert!(defaults(timeout).is_empty());
        assert_eq!(timeout.get_env(), Some(std::ffi::OsStr::new("YOUMATTER_TIMEOUT_SECS")));

        assert_eq!(arg(&cmd, "light").get_env(), None);
        assert_eq!(
            arg(&cmd, "log_file").get_env(),
            Some(std::ffi::OsStr::new("YOUMATTER_LOG_FILE"))
        );
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "youmatter",
            "--base-url",
            "https://chat.example.org",
            "--timeout-secs",
            "30",
            "--light",
        ])
        .unwrap();
        assert_eq!(cli.base_url, "https://chat.example.org");
        assert_eq!(cli.timeout_secs, Some(30));
        assert!(cli.light);
    }
}
