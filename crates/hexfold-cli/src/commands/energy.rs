use crate::cli::EnergyArgs;
use crate::config::PartialAppConfig;
use crate::error::Result;
use hexfold::core::forcefield::scoring::Scorer;
use hexfold::core::forcefield::term::EnergyBreakdown;
use hexfold::core::models::chain::Chain;
use hexfold::core::models::layout::LayoutError;
use std::fmt::Write;
use std::path::Path;
use tracing::info;

pub fn run(args: &EnergyArgs, config_path: Option<&Path>) -> Result<()> {
    let chain = Chain::parse(&args.chain.sequence, args.chain.folds.as_deref())?;

    let mut partial = PartialAppConfig::load(config_path)?;
    partial.apply_set_values(&args.set_values)?;
    let params = partial.energy_params()?;

    info!("Scoring {}", chain);
    let energy = Scorer::new(&params).score(&chain);
    print!("{}", render_energy(&chain, &energy));
    Ok(())
}

pub fn render_energy(
    chain: &Chain,
    energy: &std::result::Result<EnergyBreakdown, LayoutError>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Chain: {}", chain);
    match energy {
        Ok(breakdown) => {
            for (name, value) in [
                ("electrostatic", breakdown.electrostatic),
                ("hydrophobic", breakdown.hydrophobic),
                ("folding", breakdown.folding),
                ("steric", breakdown.steric),
            ] {
                let _ = writeln!(out, "  {:<14} {:>12.4}", name, value);
            }
            let _ = writeln!(out, "  {:<14} {:>12.4} kcal/mol", "total", breakdown.total());
        }
        Err(e) => {
            let _ = writeln!(out, "  {:<14} {:>12}", "total", f64::INFINITY);
            let _ = writeln!(out, "  ({e})");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ChainArgs;
    use crate::error::CliError;
    use hexfold::core::forcefield::params::EnergyParams;
    use std::fs;

    #[test]
    fn render_energy_lists_every_term_and_the_total() {
        let chain = Chain::parse("FLX-L60-FLX", Some("0,0,0")).unwrap();
        let params = EnergyParams::default();
        let text = render_energy(&chain, &Scorer::new(&params).score(&chain));

        assert!(text.starts_with("Chain: FLX-L60-FLX [0,0,0]"));
        for term in ["electrostatic", "hydrophobic", "folding", "steric", "total"] {
            assert!(text.contains(term), "missing {term}");
        }
        assert!(text.contains("0.1000"));
        assert!(!text.contains("-0.0000"));
    }

    #[test]
    fn render_energy_reports_overlap_as_infinite() {
        let chain = Chain::parse("FLX-FLX-FLX-FLX-FLX-FLX-FLX", Some("0,1,1,1,1,1,0")).unwrap();
        let params = EnergyParams::default();
        let text = render_energy(&chain, &Scorer::new(&params).score(&chain));
        assert!(text.contains("inf"));
        assert!(text.contains("overlaps monomer 0"));
    }

    #[test]
    fn run_reads_energy_table_from_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hexfold.toml");
        fs::write(&path, "[energy]\nangular-penalty = 0.5\n").unwrap();

        let args = EnergyArgs {
            chain: ChainArgs {
                sequence: "FLX-L60-FLX".to_string(),
                folds: None,
            },
            set_values: vec!["energy.clash-threshold=0".to_string()],
        };
        assert!(run(&args, Some(path.as_path())).is_ok());

        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            run(&args, Some(missing.as_path())),
            Err(CliError::Io(_))
        ));
    }
}
