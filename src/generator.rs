//! Generation pipeline
//!
//! For every selected asset: work out the class name, pull raw names out of the
//! asset, turn them into unique identifiers, render the class, check it and
//! write it. Targets are independent, one failing never stops the other.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::asset_source::{AssetSource, asset_name};
use crate::config::GeneratorSettings;
use crate::cs::emitter::render_class;
use crate::cs::syntax_check::check_csharp_source;
use crate::dedup::{ConstantTable, assign_unique, distinct_names};
use crate::error::{GeneratorError, GeneratorResult};
use crate::naming::{abbreviate, is_reserved_keyword, normalize_to_const_name, sanitize_free_text};
use crate::unity_project::UnityProject;
use crate::uss::extract_style_class_names;
use crate::uxml::extract_element_names;
use crate::writer::{generated_file_path, write_generated_file};

/// Kind of asset a class is generated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// USS stylesheet, produces `<Name>Classes`
    StyleSheet,
    /// UXML document, produces `<Name>Strings`
    Markup,
}

impl TargetKind {
    pub fn class_suffix(self) -> &'static str {
        match self {
            TargetKind::StyleSheet => "Classes",
            TargetKind::Markup => "Strings",
        }
    }

    /// Class name for an asset of this kind.
    ///
    /// The asset name is sanitized first. Stylesheets conventionally end in
    /// `SS` (`MainMenuSS`), that suffix is dropped before `Classes` is added.
    pub fn class_name_for(self, asset_name: &str) -> GeneratorResult<String> {
        let base = sanitize_free_text(asset_name, false);
        if base.is_empty() {
            return Err(GeneratorError::invalid_configuration(format!(
                "Asset name '{}' does not contain any characters usable in a class name",
                asset_name
            )));
        }

        let base = match self {
            TargetKind::StyleSheet => base.strip_suffix("SS").unwrap_or(base.as_str()),
            TargetKind::Markup => base.as_str(),
        };
        Ok(format!("{}{}", base, self.class_suffix()))
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::StyleSheet => write!(f, "StyleSheet"),
            TargetKind::Markup => write!(f, "UXML"),
        }
    }
}

/// One asset to generate a class for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTarget {
    pub kind: TargetKind,
    pub asset_path: PathBuf,
}

impl GenerationTarget {
    pub fn style_sheet(asset_path: impl Into<PathBuf>) -> Self {
        Self {
            kind: TargetKind::StyleSheet,
            asset_path: asset_path.into(),
        }
    }

    pub fn markup(asset_path: impl Into<PathBuf>) -> Self {
        Self {
            kind: TargetKind::Markup,
            asset_path: asset_path.into(),
        }
    }

    pub fn class_name(&self) -> GeneratorResult<String> {
        self.kind.class_name_for(&asset_name(&self.asset_path)?)
    }
}

/// Everything a generation run needs, validated once up front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    namespace: String,
    targets: Vec<GenerationTarget>,
    max_identifier_length: usize,
    output_directory: PathBuf,
    verify_syntax: bool,
}

impl GenerationRequest {
    /// Fails with [`GeneratorError::InvalidConfiguration`] when the namespace
    /// is blank, not a plain identifier or a C# keyword, or when there is
    /// nothing to generate.
    pub fn new(settings: GeneratorSettings, targets: Vec<GenerationTarget>) -> GeneratorResult<Self> {
        if settings.namespace.trim().is_empty() {
            return Err(GeneratorError::invalid_configuration("Namespace must be provided."));
        }
        if sanitize_free_text(&settings.namespace, false) != settings.namespace {
            return Err(GeneratorError::invalid_configuration(format!(
                "Namespace '{}' may only contain letters, digits and underscores",
                settings.namespace
            )));
        }
        if is_reserved_keyword(&settings.namespace) {
            return Err(GeneratorError::invalid_configuration(format!(
                "Namespace '{}' is a C# keyword",
                settings.namespace
            )));
        }
        if targets.is_empty() {
            return Err(GeneratorError::invalid_configuration(
                "No StyleSheet or UXML file selected!",
            ));
        }

        Ok(Self {
            namespace: settings.namespace,
            targets,
            max_identifier_length: settings.max_identifier_length,
            output_directory: settings.output_directory,
            verify_syntax: settings.verify_syntax,
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn targets(&self) -> &[GenerationTarget] {
        &self.targets
    }

    pub fn max_identifier_length(&self) -> usize {
        self.max_identifier_length
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    pub fn verify_syntax(&self) -> bool {
        self.verify_syntax
    }
}

/// A rendered class that has not been written yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedClass {
    pub class_name: String,
    /// Distinct raw names in the order they were found
    pub raw_names: Vec<String>,
    pub constants: ConstantTable,
    pub source: String,
}

/// A class written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub class_name: String,
    pub path: PathBuf,
    pub constant_count: usize,
}

/// Outcome of one target in a run
#[derive(Debug)]
pub struct TargetReport {
    pub target: GenerationTarget,
    pub outcome: GeneratorResult<GeneratedFile>,
}

impl TargetReport {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Raw names of an asset, duplicates and all
pub fn extract_raw_names(kind: TargetKind, text: &str, source: &dyn AssetSource) -> Vec<String> {
    match kind {
        TargetKind::StyleSheet => extract_style_class_names(text),
        TargetKind::Markup => extract_element_names(&source.parse_markup(text)),
    }
}

/// Turn distinct raw names into unique identifiers.
///
/// Each name is normalized and abbreviated to `max_identifier_length`, then
/// collisions get numeric suffixes. Names without letters or digits are dropped.
pub fn build_constant_table(raw_names: &[String], max_identifier_length: usize) -> ConstantTable {
    assign_unique(raw_names.iter().map(|raw| {
        let identifier = abbreviate(&normalize_to_const_name(raw), max_identifier_length);
        (identifier, raw.as_str())
    }))
}

/// Render the class for `target` without writing anything
pub fn render_target(
    request: &GenerationRequest,
    target: &GenerationTarget,
    source: &dyn AssetSource,
) -> GeneratorResult<GeneratedClass> {
    let class_name = target.class_name()?;
    let text = source.read_asset_text(&target.asset_path)?;

    let raw_names = distinct_names(extract_raw_names(target.kind, &text, source));
    let constants = build_constant_table(&raw_names, request.max_identifier_length);
    log::debug!(
        "{} {}: {} distinct names, {} constants",
        target.kind,
        target.asset_path.display(),
        raw_names.len(),
        constants.len()
    );

    let source_text = render_class(&request.namespace, &class_name, constants.entries());
    if request.verify_syntax {
        check_csharp_source(&class_name, &source_text)?;
    }

    Ok(GeneratedClass {
        class_name,
        raw_names,
        constants,
        source: source_text,
    })
}

/// Where the class for `target` is written.
///
/// Inside a Unity project the output directory is resolved against the
/// project root and must stay within `Assets`.
pub fn output_path_for(request: &GenerationRequest, target: &GenerationTarget) -> GeneratorResult<PathBuf> {
    let class_name = target.class_name()?;
    let directory = resolve_output_directory(&request.output_directory, &target.asset_path)?;
    Ok(generated_file_path(&directory, &class_name))
}

fn resolve_output_directory(output_directory: &Path, asset_path: &Path) -> GeneratorResult<PathBuf> {
    match UnityProject::find_for(asset_path) {
        Some(project) => project.resolve_output_directory(output_directory),
        None => Ok(output_directory.to_path_buf()),
    }
}

/// Render and write the class for one target
pub fn generate_target(
    request: &GenerationRequest,
    target: &GenerationTarget,
    source: &dyn AssetSource,
) -> GeneratorResult<GeneratedFile> {
    // Configuration problems surface before the asset is even read
    let directory = resolve_output_directory(&request.output_directory, &target.asset_path)?;
    let generated = render_target(request, target, source)?;
    let path = write_generated_file(&directory, &generated.class_name, &generated.source)?;

    Ok(GeneratedFile {
        class_name: generated.class_name,
        path,
        constant_count: generated.constants.len(),
    })
}

/// Run every target of `request`, collecting one report per target
pub fn generate(request: &GenerationRequest, source: &dyn AssetSource) -> Vec<TargetReport> {
    log::info!(
        "Generating {} target(s) into namespace {}",
        request.targets.len(),
        request.namespace
    );

    request
        .targets
        .iter()
        .map(|target| {
            let outcome = generate_target(request, target, source);
            match &outcome {
                Ok(file) => log::info!(
                    "{} {} -> {} ({} constants)",
                    target.kind,
                    target.asset_path.display(),
                    file.path.display(),
                    file.constant_count
                ),
                Err(e) => log::warn!("{} {} failed: {}", target.kind, target.asset_path.display(), e),
            }
            TargetReport {
                target: target.clone(),
                outcome,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
