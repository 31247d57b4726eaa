use super::utils;
use anyhow::Result;
use journey_application::{ExportScope, render_overview};
use std::path::Path;

pub fn run(
    config: Option<&Path>,
    input: &Path,
    delimiter: char,
    out_dir: Option<&Path>,
    json: bool,
) -> Result<()> {
    let usecase = utils::usecase(utils::load_config(config)?)?;
    let report = usecase.analyze_path(input, utils::delimiter_byte(delimiter)?)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_overview(&report));
    }

    if let Some(dir) = out_dir {
        let manifest = usecase.export(&report, dir, utils::today(), ExportScope::Full)?;
        for file in &manifest.files {
            tracing::info!(path = %file.display(), "written");
        }
    }

    Ok(())
}
