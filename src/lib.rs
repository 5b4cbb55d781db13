mod emit;
mod pdf_render;
mod template;
mod utils;

pub mod config;
pub mod context;
pub mod schedule;
pub mod vocabulary;

use log::info;

pub use crate::config::Config;
use crate::template::Template;

/// Runs the whole pipeline for one configured invocation: load the schedule,
/// select the row for the target date, project it into a rendering context,
/// then print it and/or render it through the template into the output file.
pub fn generate_bulletin(config: &Config) -> anyhow::Result<()> {
    let table = schedule::load(config.schedule())?;
    info!(
        "loaded {} rows from `{}`",
        table.len(),
        config.schedule().display()
    );

    let row = schedule::select_row(&table, config.date())?;
    let context = context::build_context(row, config.date(), &vocabulary::LITURGY);

    if config.print() {
        println!("{}", context.to_json()?);
    }

    let Some(template_path) = config.template() else {
        return Ok(());
    };

    info!("rendering template `{}`", template_path.display());
    let template = Template::from_file(template_path)?;
    let rendered = template.render(&context)?;

    emit::emit(&rendered, config)?;

    println!("{} generated successfully", config.output().display());

    Ok(())
}
