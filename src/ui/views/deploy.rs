use std::path::Path;

use octoship::DeployReport;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

pub struct DeployHeader<'a> {
    pub bucket: &'a str,
    pub revision: &'a str,
    pub repo_root: &'a Path,
    pub source_root: &'a Path,
    pub fast_forward_from: Option<&'a str>,
    pub dry_run: bool,
}

pub fn render_deploy_header(
    header: &DeployHeader<'_>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut block = CommandHeader::new(Icon::Deploy, "Octoship Deploy");
    block.add("Revision", header.revision);
    block.add("Bucket", format!("s3://{}/", header.bucket));
    block.add("Repository", header.repo_root.display().to_string());
    if header.source_root != header.repo_root {
        block.add("Dependencies", header.source_root.display().to_string());
    }
    if let Some(marker) = header.fast_forward_from {
        block.add("Requires", format!("fast-forward from {marker}"));
    }
    if header.dry_run {
        block.add("Mode", "dry run");
    }

    block.render(supports_color, supports_unicode)
}

pub fn render_deploy_summary(
    report: &DeployReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = if report.dry_run {
        ResultSummary::partial("Dry Run Complete")
    } else {
        ResultSummary::success("Deploy Complete")
    };

    summary.add_stat(
        format!("entries synced to {}", report.destination),
        report.uploaded_count(),
    );
    summary.add_stat("elapsed", format!("{:.1}s", report.elapsed.as_secs_f64()));

    if report.dry_run {
        summary.add_warning("nothing was uploaded");
        summary.with_next_step("Run again without --dry-run to publish");
    }

    summary.render(supports_color, supports_unicode)
}
