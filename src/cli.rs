use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    name = "itt",
    about = "Install packages and apply tweaks from the ITT script repositories",
    disable_help_flag = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Path to config (defaults to <itt home>/itt.toml)
    #[arg(long, env = "ITT_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(long)]
    pub verbose: bool,

    /// Command followed by its arguments; matched by `Command::from_args`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `install <name>... [-y]`, alias `i`
    Install { names: Vec<String>, auto_confirm: bool },
    /// `tweak <name>... [-y]`, alias `t`
    Tweak { names: Vec<String>, auto_confirm: bool },
    /// `quick <file.itt>`, alias `q`
    Quick { file: Option<String> },
    Help,
    /// No arguments at all.
    Empty,
    Unknown(String),
}

impl Command {
    /// Route on the lowercased first token; the rest belongs to the command.
    pub fn from_args(args: &[String]) -> Self {
        let Some((first, rest)) = args.split_first() else {
            return Command::Empty;
        };
        match first.to_lowercase().as_str() {
            "install" | "i" => {
                let (names, auto_confirm) = split_confirm_flag(rest);
                Command::Install { names, auto_confirm }
            }
            "tweak" | "t" => {
                let (names, auto_confirm) = split_confirm_flag(rest);
                Command::Tweak { names, auto_confirm }
            }
            "quick" | "q" => Command::Quick { file: rest.first().cloned() },
            "-h" | "-help" | "--help" | "help" => Command::Help,
            _ => Command::Unknown(first.clone()),
        }
    }
}

/// Pull `-y`/`--yes` out from anywhere in the list.
fn split_confirm_flag(rest: &[String]) -> (Vec<String>, bool) {
    let is_flag = |a: &String| a == "-y" || a == "--yes";
    let auto_confirm = rest.iter().any(is_flag);
    let names = rest.iter().filter(|a| !is_flag(*a)).cloned().collect();
    (names, auto_confirm)
}

pub const HELP: &str = "\
Commands

install, i <name>... [-y]
   Install one or more packages
tweak, t <name>... [-y]
   Apply one or more tweaks
quick, q <file.itt>
   Quick install from a .itt file
-h, -help
   Show this help message

-y skips the confirmation prompt. Without arguments ITT itself is started.

Options (before the command)
--config <PATH>   config file (default: <itt home>/itt.toml)
--verbose         debug logging
";

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(args: &[&str]) -> Command {
        let owned: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        Command::from_args(&owned)
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("itt").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn install_and_alias() {
        let expected = Command::Install { names: vec!["foo".into()], auto_confirm: true };
        assert_eq!(cmd(&["install", "foo", "-y"]), expected);
        assert_eq!(cmd(&["i", "-y", "foo"]), expected);
        assert_eq!(cmd(&["INSTALL", "foo", "--yes"]), expected);
    }

    #[test]
    fn flag_is_removed_from_names() {
        assert_eq!(
            cmd(&["t", "a", "-y", "b"]),
            Command::Tweak { names: vec!["a".into(), "b".into()], auto_confirm: true }
        );
        assert_eq!(
            cmd(&["tweak", "-y"]),
            Command::Tweak { names: vec![], auto_confirm: true }
        );
        assert_eq!(
            cmd(&["install", "a"]),
            Command::Install { names: vec!["a".into()], auto_confirm: false }
        );
    }

    #[test]
    fn help_unknown_and_empty() {
        assert_eq!(cmd(&["-h"]), Command::Help);
        assert_eq!(cmd(&["-HELP"]), Command::Help);
        assert_eq!(cmd(&["frobnicate", "x"]), Command::Unknown("frobnicate".into()));
        assert_eq!(cmd(&[]), Command::Empty);
    }

    #[test]
    fn quick_takes_first_argument() {
        assert_eq!(cmd(&["q", "apps.itt", "extra"]), Command::Quick { file: Some("apps.itt".into()) });
        assert_eq!(cmd(&["quick"]), Command::Quick { file: None });
    }

    #[test]
    fn clap_leaves_single_dash_tokens_to_the_dispatcher() {
        assert_eq!(parse(&["-h"]).args, vec!["-h"]);
        assert_eq!(parse(&["-help"]).args, vec!["-help"]);
        assert_eq!(parse(&["install", "foo", "-y"]).args, vec!["install", "foo", "-y"]);
        assert!(parse(&[]).args.is_empty());
    }

    #[test]
    fn global_options_come_first() {
        let cli = parse(&["--verbose", "--config", "x.toml", "t", "dark", "--yes"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert_eq!(cli.args, vec!["t", "dark", "--yes"]);
    }
}
