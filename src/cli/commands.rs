use std::{fs, path::Path};

use schemars::schema_for;
use tracing::info;

use super::{
    Commands,
    formatting::{format_header, format_success},
};
use crate::{
    DocgenError, Result,
    config::DocgenConfig,
    docs::{DocsGenerator, TypeSystem},
};

/// Runs one subcommand and returns the text to print.
///
/// # Errors
///
/// Returns the first error raised by the pipeline, or `OutOfDate` when
/// `check` finds a stale document.
pub fn execute(command: &Commands, config: DocgenConfig) -> Result<String> {
    let generator = DocsGenerator::new(config);

    match command {
        Commands::Generate => {
            let types = generator.load_types()?;
            generator.generate(&types)?;
            Ok(format_success(&format!(
                "Updated {}",
                generator.config().document.path.display()
            )))
        }
        Commands::Check => {
            let types = generator.load_types()?;
            let path = &generator.config().document.path;
            if !generator.check(&types)? {
                return Err(DocgenError::OutOfDate { path: path.clone() });
            }
            Ok(format_success(&format!("{} is up to date", path.display())))
        }
        Commands::Print { json } => {
            let types = generator.load_types()?;
            if *json {
                let sections = generator.extract(&types)?;
                serde_json::to_string_pretty(&sections)
                    .map_err(|e| DocgenError::serialization(e, "extracted sections"))
            } else {
                generator.render_reference(&types)
            }
        }
        Commands::List => {
            let types = generator.load_types()?;
            let names = types.declaration_names();
            let mut output = format_header("Declarations:");
            for name in names {
                output.push_str(&format!("\n  - {name}"));
            }
            Ok(output)
        }
        Commands::Schema { output } => write_own_schema(output.as_deref()),
    }
}

fn write_own_schema(output: Option<&Path>) -> Result<String> {
    let schema = serde_json::to_string_pretty(&schema_for!(DocgenConfig))
        .map_err(|e| DocgenError::serialization(e, "DocgenConfig schema"))?;

    let Some(path) = output else {
        return Ok(schema);
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| DocgenError::io(e, parent))?;
    }
    fs::write(path, format!("{schema}\n")).map_err(|e| DocgenError::io(e, path))?;
    info!("Wrote schema to {}", path.display());

    Ok(format_success(&format!("Wrote {}", path.display())))
}
