//! Writes generated source files to disk

use std::fs;
use std::path::{Path, PathBuf};

use crate::cs::emitter::SOURCE_EXTENSION;
use crate::error::{GeneratorResult, IoContext};

/// Path a class ends up at: `<output_directory>/<class_name>.cs`
pub fn generated_file_path(output_directory: &Path, class_name: &str) -> PathBuf {
    output_directory.join(format!("{}.{}", class_name, SOURCE_EXTENSION))
}

/// Write `content` for `class_name` into `output_directory`.
///
/// Creates the directory if it does not exist and replaces any existing file
/// of the same name. Returns the path written.
pub fn write_generated_file(
    output_directory: &Path,
    class_name: &str,
    content: &str,
) -> GeneratorResult<PathBuf> {
    if !output_directory.as_os_str().is_empty() && !output_directory.exists() {
        fs::create_dir_all(output_directory).with_io_context(&format!(
            "Failed to create output directory {}",
            output_directory.display()
        ))?;
    }

    let file_path = generated_file_path(output_directory, class_name);
    fs::write(&file_path, content)
        .with_io_context(&format!("Failed to write {}", file_path.display()))?;

    log::info!("Wrote {} ({} bytes)", file_path.display(), content.len());
    Ok(file_path)
}
