//! Rendering helpers (markdown) for human-readable plan artifacts.

use qinvest_types::artefact::Artefact;
use qinvest_types::artifact::PlanArtifact;

/// Renders `plan.md`. `source_extension` is used to show the file behind each artefact.
pub fn render_plan_md(artifact: &PlanArtifact, source_extension: &str) -> String {
    let plan = &artifact.plan;
    let mut out = String::new();

    out.push_str("# qinvest plan\n\n");
    if let Some(project) = &artifact.input.project {
        out.push_str(&format!("- Project: {}\n", project));
    }
    out.push_str(&format!("- Scope: {}\n", scope_label(&artifact.request.base_package)));
    out.push_str(&format!(
        "- Budget: {} min\n",
        artifact.request.budget_minutes
    ));
    out.push_str(&format!(
        "- Investment: {} min\n",
        plan.total_investment_minutes()
    ));
    out.push_str(&format!("- Profit: {} min\n", plan.total_profit_minutes()));
    out.push_str(&format!("- ROI: {}%\n", plan.roi()));
    out.push_str(&format!(
        "- Violations analysed: {}\n\n",
        artifact.input.violations_total
    ));

    out.push_str("## Entries\n\n");
    if plan.entries().is_empty() {
        out.push_str("_No entries planned._\n");
        return out;
    }

    out.push_str("| # | Artefact | File | Cost (min) | Profit (min) | ROI |\n");
    out.push_str("|---|----------|------|-----------:|-------------:|----:|\n");
    for (i, entry) in plan.entries().iter().enumerate() {
        let name = entry.artefact_long_name();
        let file = Artefact::new(name, "").filename(source_extension);
        let marker = if entry.is_partial() { " (partial)" } else { "" };
        out.push_str(&format!(
            "| {} | `{}`{} | `{}` | {} | {:.1} | {:.2} |\n",
            i + 1,
            name,
            marker,
            file,
            entry.remediation_cost_minutes(),
            entry.profit_minutes(),
            entry.roi()
        ));
    }

    if plan.entries().last().is_some_and(|e| e.is_partial()) {
        out.push_str(
            "\nThe last entry is partial: the budget ran out before it could be fixed completely.\n",
        );
    }

    out
}

fn scope_label(base_package: &str) -> String {
    if base_package.is_empty() {
        "whole project".to_string()
    } else {
        format!("`{}`", base_package)
    }
}
