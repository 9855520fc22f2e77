use crate::cli::TransitionsArgs;
use crate::config::PartialAppConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use hexfold::engine::progress::ProgressReporter;
use hexfold::engine::transitions::Transition;
use hexfold::{core::models::chain::Chain, workflows::survey};
use std::fmt::Write;
use std::path::Path;
use tracing::info;

pub fn run(args: &TransitionsArgs, config_path: Option<&Path>) -> Result<()> {
    let chain = Chain::parse(&args.chain.sequence, args.chain.folds.as_deref())?;
    let config = PartialAppConfig::load(config_path)?.merge_with_cli(args)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Surveying {} at {} K...", chain, config.temperature);
    let report = survey::run(&chain, &config, &reporter)?;

    info!(
        "Survey finished with {} transition(s); {} overlapping candidate(s) skipped.",
        report.matrix.len(),
        progress_handler.skipped_candidates()
    );

    print!("{}", render_report(&report, args.top));
    Ok(())
}

pub fn render_report(report: &survey::SurveyReport, top: Option<usize>) -> String {
    let mut out = String::new();
    match &report.energy {
        Ok(breakdown) => {
            let _ = writeln!(out, "Energy: {:.4} kcal/mol", breakdown.total());
        }
        Err(e) => {
            let _ = writeln!(out, "Energy: {} ({e})", f64::INFINITY);
        }
    }

    let matrix = &report.matrix;
    if matrix.is_empty() {
        let _ = writeln!(out, "No transitions: the chain has no movable pivot.");
    } else {
        let (probabilities, _) = matrix.probabilities();
        let mut rows: Vec<(&Transition, f64)> =
            matrix.transitions.iter().zip(probabilities).collect();
        if let Some(n) = top {
            rows.sort_by(|a, b| b.0.rate.total_cmp(&a.0.rate));
            rows.truncate(n);
        }

        let _ = writeln!(
            out,
            "{:>5}  {:<5} {:>4} {:>4} {:>6}  {:>12}  {:>11}",
            "pivot", "code", "from", "to", "angle", "rate", "probability"
        );
        for (t, p) in rows {
            let code = report
                .chain
                .monomer(t.position)
                .map_or("?", |m| m.code());
            let _ = writeln!(
                out,
                "{:>5}  {:<5} {:>4} {:>4} {:>6}  {:>12.4e}  {:>11.6}",
                t.position,
                code,
                t.from_steps,
                t.to_steps,
                t.angle_degrees(),
                t.rate,
                p
            );
        }
    }

    let (_, stay) = matrix.probabilities();
    let _ = writeln!(
        out,
        "Total rate: {:.6}  Stay rate: {:.6}  Stay probability: {:.6}",
        matrix.total_rate, matrix.stay_rate, stay
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ChainArgs;
    use hexfold::engine::config::KineticsConfig;

    fn report(sequence: &str, folds: &str) -> survey::SurveyReport {
        let chain = Chain::parse(sequence, Some(folds)).unwrap();
        survey::run(&chain, &KineticsConfig::default(), &ProgressReporter::new()).unwrap()
    }

    #[test]
    fn render_report_lists_every_transition_in_matrix_order() {
        let report = report("FLX-FLX-FLX", "0,0,0");
        let text = render_report(&report, None);
        let rows: Vec<&str> = text
            .lines()
            .filter(|l| l.trim_start().starts_with('1'))
            .collect();
        assert_eq!(rows.len(), 4);
        let targets: Vec<&str> = rows
            .iter()
            .map(|l| l.split_whitespace().nth(3).unwrap())
            .collect();
        assert_eq!(targets, ["-2", "-1", "1", "2"]);
        assert!(text.contains("Stay rate"));
    }

    #[test]
    fn render_report_top_keeps_the_fastest_rows() {
        let report = report("FLX-FLX-FLX-FLX-FLX", "0,0,0,0,0");
        let text = render_report(&report, Some(2));
        let header = text.lines().position(|l| l.contains("pivot")).unwrap();
        let rows: Vec<&str> = text
            .lines()
            .skip(header + 1)
            .take_while(|l| !l.starts_with("Total"))
            .collect();
        assert_eq!(rows.len(), 2);

        let fastest = report.matrix.fastest().unwrap();
        let first: Vec<&str> = rows[0].split_whitespace().collect();
        assert_eq!(first[5], format!("{:.4e}", fastest.rate));
    }

    #[test]
    fn render_report_explains_an_empty_matrix() {
        let report = report("FLX-FLX", "0,0");
        let text = render_report(&report, None);
        assert!(text.contains("No transitions"));
        assert!(text.contains("Stay probability: 1.000000"));
    }

    #[test]
    fn run_accepts_a_constant_stay_weight() {
        let args = TransitionsArgs {
            chain: ChainArgs {
                sequence: "FLX-L60-FLX-FLX".to_string(),
                folds: Some("0,0,1,0".to_string()),
            },
            temperature: Some(310.0),
            barrier_coefficient: None,
            stay_weight: Some(0.5),
            top: Some(3),
            set_values: Vec::new(),
        };
        assert!(run(&args, None).is_ok());
    }
}
