//! Generate operation - write one page's header test.

use eyre::{Context, Result};
use hdrtest_codegen::{Generator, HeaderTestPlan, HeaderTestRequest, headers::Include};
use hdrtest_manifest::Manifest;

use crate::reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(
    manifest: &Manifest,
    request: &HeaderTestRequest,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let generator = Generator::new(manifest, request);

    let (plan, result) = if opts.dry_run {
        let (file, plan) = generator
            .preview()
            .wrap_err("Failed to render header test")?;
        let result = GenerationResult::Preview(PreviewResult {
            path: file.path,
            content: file.content,
        });
        (plan, result)
    } else {
        let generated = generator.generate().wrap_err_with(|| {
            format!(
                "Failed to generate header test {} of {}",
                request.page_number, request.module_name
            )
        })?;
        let result = GenerationResult::Written(WrittenResult {
            path: generated.path,
            replaced: matches!(generated.write, hdrtest_core::WriteResult::Overwritten),
        });
        (generated.plan, result)
    };

    Ok(summarize(&request.module_name, &plan, result))
}

fn summarize(module_name: &str, plan: &HeaderTestPlan, result: GenerationResult) -> GenerateReport {
    let includes = plan.file.includes();
    let banned = includes.iter().filter(|i| i.is_banned()).count();
    let variants = includes
        .iter()
        .filter(|i| matches!(i, Include::Variant { .. }))
        .count();

    GenerateReport {
        module_name: module_name.to_string(),
        page_number: plan.page.number(),
        page_count: plan.page_count,
        total_headers: plan.total_headers,
        page_headers: includes.len(),
        banned,
        variants,
        result,
    }
}
