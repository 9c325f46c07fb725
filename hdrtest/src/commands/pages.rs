use std::{num::NonZeroUsize, path::PathBuf};

use clap::Args;
use eyre::Result;
use hdrtest_manifest::Manifest;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct PagesCommand {
    /// Module source directory containing include/
    pub module_source_path: PathBuf,

    /// Maximum number of headers per generated file
    pub maximum_number_of_headers: NonZeroUsize,

    /// Path to hdrtest.toml (built-in defaults when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print only the number of pages
    #[arg(long)]
    pub count: bool,
}

impl PagesCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::load(self.config.as_deref()).unwrap_or_exit();

        let report = ops::pages(
            &manifest,
            &self.module_source_path,
            self.maximum_number_of_headers,
        )?;

        if self.count {
            println!("{}", report.page_count());
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
