//! Terminal text: report summaries and `explain` pages.

use fipsgate_types::explain::Explanation;
use fipsgate_types::{FipsgateReport, HostAction, Verdict};
use std::fmt::Write as _;

pub fn render_text(report: &FipsgateReport) -> String {
    let mut out = String::new();
    let data = &report.data;

    let verdict = match report.verdict {
        Verdict::Pass => "pass: FIPS mode restrictions are satisfied",
        Verdict::Fail => "fail: FIPS mode must be disabled",
    };
    let _ = writeln!(out, "fipsgate {verdict}");
    let _ = writeln!(
        out,
        "profile {} | gate {} | {} algorithm(s), {} attribute(s)",
        data.profile, data.gate, data.algorithms_scanned, data.attributes_scanned
    );
    if !data.attributes_matched.is_empty() {
        let _ = writeln!(out, "policy attributes: {}", data.attributes_matched.join(", "));
    }

    for finding in &report.findings {
        let _ = writeln!(
            out,
            "  {}[{}] {}",
            finding.severity.as_str(),
            finding.code,
            finding.message
        );
        if let Some(help) = &finding.help {
            let _ = writeln!(out, "      help: {help}");
        }
    }

    if let Some(action) = data.host_action {
        let line = match action {
            HostAction::NotEnforced => "host: FIPS mode not enforced",
            HostAction::RestrictionsSatisfied => "host: FIPS mode left enabled",
            HostAction::WouldDisable => "host: FIPS mode would be disabled (dry run)",
            HostAction::Disabled => "host: FIPS mode disabled",
            HostAction::DisableFailed => "host: disabling FIPS mode failed; still enforced",
        };
        let _ = writeln!(out, "{line}");
    }

    out
}

/// Markdown-ish page for one check id or code.
pub fn format_explanation(exp: &Explanation) -> String {
    let Explanation {
        title,
        description,
        remediation,
        examples,
    } = exp;
    let rule = "=".repeat(title.len());
    format!(
        "{title}\n{rule}\n\n{description}\n\n\
         Remediation\n-----------\n{remediation}\n\n\
         Examples\n--------\n\n\
         Before (fails):\n```toml\n{before}\n```\n\n\
         After (passes):\n```toml\n{after}\n```\n",
        before = examples.before,
        after = examples.after,
    )
}

/// Error text for an identifier the registry does not know.
pub fn format_not_found(identifier: &str, check_ids: &[&str], codes: &[&str]) -> String {
    let bullets = |items: &[&str]| -> String {
        items.iter().map(|item| format!("  - {item}\n")).collect()
    };
    format!(
        "Unknown check_id or code: {identifier}\n\n\
         Available check_ids:\n{}\n\
         Available codes:\n{}",
        bullets(check_ids),
        bullets(codes),
    )
}
