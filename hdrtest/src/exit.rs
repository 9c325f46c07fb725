//! Process exit codes.

use eyre::Report;

/// Exit status reported to the build system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Bad or missing arguments
    Usage,
    /// Invalid hdrtest.toml or a missing include directory in strict mode
    Config,
    /// The test directory or file could not be written
    Write,
    /// The include directory could not be listed
    Read,
    /// Any failure without a typed cause
    Failure,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Usage => 1,
            ExitStatus::Config => 2,
            ExitStatus::Write => 3,
            ExitStatus::Read => 4,
            ExitStatus::Failure => 5,
        }
    }

    /// Classify a failure by the first typed cause in its chain.
    pub fn from_report(report: &Report) -> Self {
        for cause in report.chain() {
            if let Some(err) = cause.downcast_ref::<hdrtest_codegen::Error>() {
                return match err {
                    hdrtest_codegen::Error::ReadDir { .. } => ExitStatus::Read,
                    hdrtest_codegen::Error::MissingIncludeDir { .. } => ExitStatus::Config,
                    hdrtest_codegen::Error::Write(_) => ExitStatus::Write,
                };
            }
            if cause.downcast_ref::<hdrtest_core::Error>().is_some() {
                return ExitStatus::Write;
            }
            if cause.downcast_ref::<hdrtest_manifest::Error>().is_some()
                || cause
                    .downcast_ref::<Box<hdrtest_manifest::Error>>()
                    .is_some()
            {
                return ExitStatus::Config;
            }
        }
        ExitStatus::Failure
    }
}
