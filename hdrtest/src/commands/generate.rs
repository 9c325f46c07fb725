use std::{num::NonZeroUsize, path::PathBuf};

use clap::Args;
use eyre::{Result, eyre};
use hdrtest_codegen::HeaderTestRequest;
use hdrtest_manifest::Manifest;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Module name, used as the generated file name prefix
    #[arg(required = true)]
    pub module_name: Option<String>,

    /// Module source directory containing include/
    #[arg(required = true)]
    pub module_source_path: Option<PathBuf>,

    /// Module binary directory receiving test/
    #[arg(required = true)]
    pub module_binary_path: Option<PathBuf>,

    /// Maximum number of headers per generated file
    #[arg(required = true)]
    pub maximum_number_of_headers: Option<NonZeroUsize>,

    /// Page to generate, starting at 1
    #[arg(required = true)]
    pub page_number: Option<NonZeroUsize>,

    /// Path to hdrtest.toml (built-in defaults when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the generated file instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let request = self
            .request()
            .ok_or_else(|| eyre!("missing arguments, see `hdrtest --help`"))?;
        let manifest = Manifest::load(self.config.as_deref()).unwrap_or_exit();

        let report = ops::generate(
            &manifest,
            &request,
            ops::generate::GenerateOptions {
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// The positional arguments, if all of them were given.
    pub fn request(&self) -> Option<HeaderTestRequest> {
        Some(HeaderTestRequest {
            module_name: self.module_name.clone()?,
            module_source: self.module_source_path.clone()?,
            module_binary: self.module_binary_path.clone()?,
            page_size: self.maximum_number_of_headers?,
            page_number: self.page_number?,
        })
    }
}
