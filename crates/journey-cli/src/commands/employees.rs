use super::utils;
use anyhow::Result;
use journey_application::{ExportScope, render_employees};
use std::path::Path;

pub fn run(
    config: Option<&Path>,
    input: &Path,
    delimiter: char,
    out_dir: Option<&Path>,
) -> Result<()> {
    let usecase = utils::usecase(utils::load_config(config)?)?;
    let report = usecase.analyze_path(input, utils::delimiter_byte(delimiter)?)?;

    print!("{}", render_employees(&report.stats));

    if let Some(dir) = out_dir {
        let manifest = usecase.export(&report, dir, utils::today(), ExportScope::PerEmployee)?;
        println!("\nWrote {} file(s) to {}", manifest.len(), dir.display());
    }
    Ok(())
}
