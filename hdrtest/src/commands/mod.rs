mod check;
mod completions;
mod generate;
mod pages;

use std::ffi::OsString;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use pages::PagesCommand;

use crate::exit::ExitStatus;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for hdrtest_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(ExitStatus::Config.code());
            }
        }
    }
}

const ABOUT: &str = "Generate a source file that includes one page of a module's headers";

const LONG_ABOUT: &str = "\
Generate a source file that includes one page of a module's headers.

The generated test is written to <module_binary_path>/test/<module_name>HeaderTest<page_number>.cxx.
It includes every header of the page and defines an empty main(). Compiling it
checks that each header is self-contained and that the module declares all of
its dependencies. Run it once for each page from 1 to `hdrtest pages --count`.";

#[derive(Parser)]
#[command(name = "hdrtest")]
#[command(version)]
#[command(about = ABOUT, long_about = LONG_ABOUT)]
#[command(subcommand_negates_reqs = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateCommand,

    /// Increase logging verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

/// The generate invocation alone, without subcommands.
///
/// Used when the command line carries exactly the five generate positionals,
/// so a module named like a subcommand is still a module name.
#[derive(Parser)]
#[command(name = "hdrtest")]
#[command(version)]
#[command(about = ABOUT, long_about = LONG_ABOUT)]
struct GenerateCli {
    #[command(flatten)]
    generate: GenerateCommand,

    /// Increase logging verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Number of positional generate arguments.
const GENERATE_POSITIONALS: usize = 5;

/// Options of the generate invocation that take a separate value.
const VALUE_OPTIONS: &[&str] = &["-c", "--config"];

/// Count the positional tokens after the program name.
fn positional_count(args: &[OsString]) -> usize {
    let mut count = 0;
    let mut tokens = args.iter().skip(1);
    while let Some(token) = tokens.next() {
        let Some(token) = token.to_str() else {
            count += 1;
            continue;
        };
        if token == "--" {
            count += tokens.len();
            break;
        }
        if VALUE_OPTIONS.contains(&token) {
            tokens.next();
        } else if token.len() < 2 || !token.starts_with('-') {
            count += 1;
        }
    }
    count
}

impl Cli {
    /// Parse the command line, printing usage to stdout on bad arguments.
    pub fn parse_or_usage() -> Self {
        match Self::try_parse_args(std::env::args_os()) {
            Ok(cli) => cli,
            Err(err) if err.use_stderr() => {
                print!("{}", err.render());
                std::process::exit(ExitStatus::Usage.code());
            }
            Err(err) => err.exit(),
        }
    }

    /// Parse `args`, treating exactly five positionals as a generate
    /// invocation whatever the first one is called.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        if positional_count(&args) == GENERATE_POSITIONALS {
            let cli = GenerateCli::try_parse_from(&args)?;
            return Ok(Self {
                command: None,
                generate: cli.generate,
                verbose: cli.verbose,
            });
        }

        Self::try_parse_from(&args)
    }

    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Some(Commands::Pages(cmd)) => cmd.run(),
            Some(Commands::Check(cmd)) => cmd.run(),
            Some(Commands::Completions(cmd)) => cmd.run(),
            None => self.generate.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show how a module's headers split into pages
    Pages(PagesCommand),

    /// Validate hdrtest.toml without generating anything
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
        GenerateCli::command().debug_assert();
    }

    #[test]
    fn test_positional_generate() {
        let cli = Cli::try_parse_args(["hdrtest", "ITKCommon", "src", "bin", "50", "2"]).unwrap();
        assert!(cli.command.is_none());
        let request = cli.generate.request().unwrap();
        assert_eq!(request.module_name, "ITKCommon");
        assert_eq!(request.page_size.get(), 50);
        assert_eq!(request.page_number.get(), 2);
    }

    #[test]
    fn test_missing_arguments() {
        let err = Cli::try_parse_args(["hdrtest", "ITKCommon", "src", "bin", "50"])
            .err()
            .unwrap();
        assert!(err.use_stderr());
    }

    #[test]
    fn test_non_numeric_page_size() {
        assert!(Cli::try_parse_args(["hdrtest", "M", "src", "bin", "many", "1"]).is_err());
    }

    #[test]
    fn test_zero_page_number() {
        assert!(Cli::try_parse_args(["hdrtest", "M", "src", "bin", "5", "0"]).is_err());
    }

    #[test]
    fn test_subcommand_without_positionals() {
        let cli = Cli::try_parse_args(["hdrtest", "pages", "src", "10", "-v"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Pages(_))));
        assert_eq!(cli.verbosity(), 1);
    }

    #[test]
    fn test_module_named_like_a_subcommand() {
        for module in ["check", "pages", "completions", "help"] {
            let cli = Cli::try_parse_args(["hdrtest", module, "src", "bin", "5", "1"]).unwrap();
            assert!(cli.command.is_none());
            assert_eq!(cli.generate.request().unwrap().module_name, module);
        }
    }

    #[test]
    fn test_generate_options_around_positionals() {
        let cli = Cli::try_parse_args([
            "hdrtest", "-vv", "check", "--config", "hdrtest.toml", "src", "bin", "5", "1",
            "--dry-run",
        ])
        .unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.verbosity(), 2);
        assert!(cli.generate.dry_run);
        assert_eq!(
            cli.generate.config.as_deref(),
            Some(std::path::Path::new("hdrtest.toml"))
        );
        assert_eq!(cli.generate.request().unwrap().module_name, "check");
    }

    #[test]
    fn test_subcommands_still_dispatch() {
        let cli = Cli::try_parse_args(["hdrtest", "check", "--config", "x.toml"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Check(_))));

        let cli = Cli::try_parse_args(["hdrtest", "completions", "bash"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Completions(_))));
    }

    fn count(args: &[&str]) -> usize {
        let args: Vec<OsString> = args.iter().map(OsString::from).collect();
        positional_count(&args)
    }

    #[test]
    fn test_positional_count() {
        assert_eq!(count(&["hdrtest", "M", "src", "bin", "5", "1"]), 5);
        assert_eq!(count(&["hdrtest", "-c", "cfg.toml", "M", "src", "bin", "5", "1"]), 5);
        assert_eq!(count(&["hdrtest", "--config=cfg.toml", "M", "src", "bin", "5", "1"]), 5);
        assert_eq!(count(&["hdrtest", "pages", "src", "10", "--count"]), 3);
        assert_eq!(count(&["hdrtest", "--", "-M", "src", "bin", "5", "1"]), 5);
        assert_eq!(count(&["hdrtest"]), 0);
    }
}
