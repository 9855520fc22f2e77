use crate::cli::LayoutArgs;
use crate::error::Result;
use hexfold::core::lattice::HexCoord;
use hexfold::core::models::chain::Chain;
use hexfold::core::models::layout::{Layout, LayoutError};
use hexfold::engine::error::EngineError;
use std::fmt::Write;
use tracing::{info, warn};

pub fn run(args: &LayoutArgs) -> Result<()> {
    let chain = Chain::parse(&args.chain.sequence, args.chain.folds.as_deref())?;
    info!("Laying out {}", chain);

    let positions = match Layout::build(&chain) {
        Ok(layout) => layout.positions().to_vec(),
        Err(e @ LayoutError::Overlap { .. }) if args.allow_overlap => {
            warn!("{e}");
            println!("Warning: {e}");
            Layout::trace(&chain).map_err(EngineError::from)?
        }
        Err(e) => return Err(EngineError::from(e).into()),
    };

    print!("{}", render_layout(&chain, &positions));
    Ok(())
}

pub fn render_layout(chain: &Chain, positions: &[HexCoord]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5}  {:<5} {:>4}  {:>5} {:>5}",
        "index", "code", "fold", "q", "r"
    );
    for (i, (monomer, coord)) in chain.monomers().iter().zip(positions).enumerate() {
        let _ = writeln!(
            out,
            "{:>5}  {:<5} {:>4}  {:>5} {:>5}",
            i,
            monomer.code(),
            chain.fold_states()[i],
            coord.q,
            coord.r
        );
    }
    out
}
