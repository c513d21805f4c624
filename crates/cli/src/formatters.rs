//! Output formatters for CLI commands.
//!
//! Provides table and JSON output. Secret values arrive already redacted
//! from `lakehouse-config`; formatters never see raw secrets.

use anyhow::Result;
use lakehouse_config::{
    DerivedPaths, EntryView, FieldSpec, Profile, Resolution, Settings, fields_for,
};
use serde::Serialize;
use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, table", s),
        }
    }
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format resolved settings, with derived paths for the Azure ML profile.
    fn format_resolution(
        &self,
        resolution: &Resolution,
        paths: Option<&DerivedPaths>,
    ) -> Result<String>;

    /// Format derived paths.
    fn format_paths(&self, location: &Path, paths: &DerivedPaths) -> Result<String>;

    /// Format the variable table of a profile.
    fn format_vars(&self, profile: Profile, fields: &[FieldSpec]) -> Result<String>;

    /// Format a successful check.
    fn format_check_ok(&self, settings: &Settings) -> Result<String>;
}

/// Get a formatter for the given format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}

const MISSING: &str = "<missing>";
const SECRET: &str = "(secret)";

/// JSON shape of `show`.
#[derive(Serialize)]
struct ResolutionOutput<'a> {
    profile: Profile,
    fields: Vec<EntryView<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    paths: Option<&'a DerivedPaths>,
    missing: Vec<String>,
}

/// JSON shape of one `vars` row.
#[derive(Serialize)]
struct VarOutput {
    env: &'static str,
    field: &'static str,
    required: bool,
    secret: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<&'static str>,
}

impl From<&FieldSpec> for VarOutput {
    fn from(spec: &FieldSpec) -> Self {
        Self {
            env: spec.env,
            field: spec.field,
            required: spec.is_required(),
            secret: spec.secret,
            default: spec.default,
        }
    }
}

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_resolution(
        &self,
        resolution: &Resolution,
        paths: Option<&DerivedPaths>,
    ) -> Result<String> {
        let output = ResolutionOutput {
            profile: resolution.profile(),
            fields: resolution.views(),
            paths,
            missing: resolution.missing(),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_paths(&self, location: &Path, paths: &DerivedPaths) -> Result<String> {
        let mut value = serde_json::to_value(paths)?;
        if let serde_json::Value::Object(map) = &mut value {
            map.insert(
                "loader_location".to_string(),
                serde_json::Value::String(location.display().to_string()),
            );
        }
        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_vars(&self, _profile: Profile, fields: &[FieldSpec]) -> Result<String> {
        let rows: Vec<VarOutput> = fields.iter().map(VarOutput::from).collect();
        Ok(serde_json::to_string_pretty(&rows)?)
    }

    fn format_check_ok(&self, settings: &Settings) -> Result<String> {
        Ok(serde_json::to_string_pretty(&serde_json::json!({
            "profile": settings.profile(),
            "ok": true,
            "resolved": fields_for(settings.profile()).len(),
        }))?)
    }
}

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_resolution(
        &self,
        resolution: &Resolution,
        paths: Option<&DerivedPaths>,
    ) -> Result<String> {
        let mut rows: Vec<[String; 3]> = resolution
            .views()
            .into_iter()
            .map(|view| {
                [
                    view.field.to_string(),
                    view.value.unwrap_or(MISSING).to_string(),
                    view.source.map_or_else(|| "-".to_string(), |s| s.to_string()),
                ]
            })
            .collect();
        if let Some(paths) = paths {
            rows.extend(paths.entries().into_iter().map(|(name, path)| {
                [
                    name.to_string(),
                    path.display().to_string(),
                    "derived".to_string(),
                ]
            }));
        }

        let mut output = format!("Profile: {}\n\n", resolution.profile());
        output.push_str(&render_table(["FIELD", "VALUE", "SOURCE"], &rows));

        let missing = resolution.missing();
        if !missing.is_empty() {
            output.push_str(&format!("\nMissing: {}\n", missing.join(", ")));
        }
        Ok(output)
    }

    fn format_paths(&self, location: &Path, paths: &DerivedPaths) -> Result<String> {
        let mut rows = vec![[
            "loader_location".to_string(),
            location.display().to_string(),
        ]];
        rows.extend(
            paths
                .entries()
                .into_iter()
                .map(|(name, path)| [name.to_string(), path.display().to_string()]),
        );
        Ok(render_table(["NAME", "PATH"], &rows))
    }

    fn format_vars(&self, profile: Profile, fields: &[FieldSpec]) -> Result<String> {
        let rows: Vec<[String; 3]> = fields
            .iter()
            .map(|spec| {
                let required = if spec.is_required() { "yes" } else { "no" };
                let default = match spec.default {
                    Some(default) => default,
                    None if spec.secret => SECRET,
                    None => "-",
                };
                [spec.env.to_string(), required.to_string(), default.to_string()]
            })
            .collect();

        let mut output = format!("Profile: {}\n\n", profile);
        output.push_str(&render_table(["VARIABLE", "REQUIRED", "DEFAULT"], &rows));
        Ok(output)
    }

    fn format_check_ok(&self, settings: &Settings) -> Result<String> {
        Ok(format!(
            "ok: all {} variables for profile '{}' resolved\n",
            fields_for(settings.profile()).len(),
            settings.profile()
        ))
    }
}

/// Render left-aligned columns separated by two spaces.
fn render_table<const N: usize>(headers: [&str; N], rows: &[[String; N]]) -> String {
    let mut widths = headers.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut output = String::new();
    let mut push_row = |cells: [&str; N]| {
        let line: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect();
        output.push_str(line.join("  ").trim_end());
        output.push('\n');
    };

    push_row(headers);
    for row in rows {
        push_row(row.each_ref().map(String::as_str));
    }
    output
}
