//! Plain-text summary of a ranking pass

use crate::model::{CombinationEvaluation, SkipReason};

pub fn generate_ranking_report(evaluation: &CombinationEvaluation) -> String {
    let kept = evaluation.results.len();
    let skipped = evaluation.skipped.len();

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("          Anode Cost Combination Ranking           \n");
    report.push_str("==================================================\n\n");
    report.push_str("[Summary]\n");
    report.push_str(&format!("  Combinations evaluated:   {}\n", evaluation.evaluated()));
    report.push_str(&format!("  Ranked:                   {}\n", kept));
    report.push_str(&format!("  Skipped:                  {}\n", skipped));
    if skipped > 0 {
        for reason in [
            SkipReason::MetricsNotFound,
            SkipReason::MissingNac,
            SkipReason::InvalidPrice(String::new()),
            SkipReason::ZeroCost,
        ] {
            let count = evaluation.skipped_with(reason.label());
            if count > 0 {
                report.push_str(&format!("    {:<22} {}\n", reason.label(), count));
            }
        }
    }
    report.push('\n');

    if kept > 0 {
        report.push_str("[Ranking]\n");
        report.push_str("-".repeat(86).as_str());
        report.push('\n');
        report.push_str(&format!(
            "{:>4} {:<5} {:<18} {:<18} {:<18} {:>8} {:>10}\n",
            "#", "Lot", "CPC HS", "CPC LS", "CTP", "Cost", "NAC/Cost"
        ));
        report.push_str("-".repeat(86).as_str());
        report.push('\n');
        for (idx, result) in evaluation.results.iter().enumerate() {
            report.push_str(&format!(
                "{:>4} {:<5} {:<18} {:<18} {:<18} {:>8.2} {:>10.4}\n",
                idx + 1,
                truncate_str(&result.key.lot(), 5),
                truncate_str(&result.hs_source, 18),
                truncate_str(&result.ls_source, 18),
                truncate_str(&result.ctp_source, 18),
                result.cost,
                result.ratio
            ));
        }
        report.push('\n');
    } else {
        report.push_str("[No ranked combinations]\n");
        report.push_str("  No combination had reference metrics and a usable cost.\n\n");
    }

    report.push_str("==================================================\n");
    report
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
