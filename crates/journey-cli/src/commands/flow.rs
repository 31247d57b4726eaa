use super::utils;
use anyhow::Result;
use journey_application::render_flow;
use std::path::Path;

pub fn run(config: Option<&Path>, input: &Path, delimiter: char, top: Option<usize>) -> Result<()> {
    let mut analysis_config = utils::load_config(config)?;
    if let Some(top) = top {
        analysis_config.top_edges = top;
    }

    let usecase = utils::usecase(analysis_config)?;
    let report = usecase.analyze_path(input, utils::delimiter_byte(delimiter)?)?;

    print!("{}", render_flow(&report.flow));
    Ok(())
}
