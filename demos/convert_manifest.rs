//! Convert a manifest workbook into a T2 declaration file next to it.
//!
//! ```text
//! cargo run --example convert_manifest -- manifest.xlsx 24RO0001 [template.xml] [--force]
//! ```

use std::fs::File;
use std::path::Path;
use std::process::ExitCode;

use chrono::Local;
use tranzit::declaration::BUNDLED_TEMPLATE;
use tranzit::*;

fn main() -> ExitCode {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let force = args.iter().any(|a| a == "--force");
    args.retain(|a| a != "--force");

    let (manifest_path, identifier, template_path) = match args.as_slice() {
        [m, id] => (m.as_str(), id.as_str(), None),
        [m, id, t] => (m.as_str(), id.as_str(), Some(t.as_str())),
        _ => {
            eprintln!("usage: convert_manifest <manifest.xlsx> <LRN> [template.xml] [--force]");
            return ExitCode::from(2);
        }
    };

    match run(Path::new(manifest_path), identifier, template_path, force) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    manifest_path: &Path,
    identifier: &str,
    template_path: Option<&str>,
    force: bool,
) -> Result<(), TranzitError> {
    let manifest = File::open(manifest_path)?;
    let outcome = match template_path {
        Some(path) => convert(manifest, File::open(path)?, identifier, &ManifestConfig::default())?,
        None => convert(
            manifest,
            BUNDLED_TEMPLATE.as_bytes(),
            identifier,
            &ManifestConfig::default(),
        )?,
    };

    let conversion = match outcome {
        Outcome::Converted(conversion) => conversion,
        Outcome::NoData => {
            println!("No data rows found in {}", manifest_path.display());
            return Ok(());
        }
    };

    let dir = manifest_path.parent().unwrap_or(Path::new("."));
    let target = output_path(dir, Local::now().naive_local(), &OutputNaming::default());
    if target.exists() && !force {
        eprintln!("{} already exists, pass --force to overwrite", target.display());
        return Ok(());
    }
    conversion.write_to(File::create(&target)?)?;

    println!(
        "Wrote {} ({} items, gross mass {})",
        target.display(),
        conversion.manifest.len(),
        format_decimal(conversion.manifest.total_weight())
    );
    Ok(())
}
