use anyhow::{Context, Result, anyhow, bail};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::args::{CliArgs, parse_target};
use reclass_common::ConvertOptions;
use reclass_emitter::DEFAULT_FACTORY;

/// Config file picked up next to the input when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "reclass.json";

/// Reads a config switch written either as a JSON boolean or as one of the
/// words `true`/`false`, `yes`/`no`, `on`/`off`, `1`/`0`.
fn deserialize_switch<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(SwitchVisitor)
}

struct SwitchVisitor;

impl<'de> Visitor<'de> for SwitchVisitor {
    type Value = Option<bool>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(
            "a boolean or one of \"true\", \"false\", \"yes\", \"no\", \"on\", \"off\"",
        )
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(Some(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        let word = value.trim();
        let truthy = ["true", "yes", "on", "1"];
        let falsy = ["false", "no", "off", "0"];
        if truthy.iter().any(|w| word.eq_ignore_ascii_case(w)) {
            Ok(Some(true))
        } else if falsy.iter().any(|w| word.eq_ignore_ascii_case(w)) {
            Ok(Some(false))
        } else {
            Err(E::invalid_value(de::Unexpected::Str(value), &self))
        }
    }
}

/// Contents of a `reclass.json` file. Every key is optional.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReclassConfig {
    #[serde(default)]
    pub extends: Option<String>,
    #[serde(default)]
    pub constructor_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_switch")]
    pub extended: Option<bool>,
    #[serde(default)]
    pub extended_namespace: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub global_object: Option<String>,
    #[serde(default)]
    pub factory: Option<String>,
}

/// Options after merging the config file with command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub convert: ConvertOptions,
    pub factory: String,
}

/// Merge `config` with `args`. Flags given on the command line win.
pub fn resolve_options(config: &ReclassConfig, args: &CliArgs) -> Result<ResolvedOptions> {
    let mut convert = ConvertOptions::default();

    if let Some(name) = args
        .constructor_name
        .as_ref()
        .or(config.constructor_name.as_ref())
    {
        convert.constructor_key = name.clone();
    }

    if let Some(target) = args.target {
        convert.target = target;
    } else if let Some(name) = config.target.as_deref() {
        convert.target = parse_target(name).map_err(|err| anyhow!("config: {err}"))?;
    }

    convert.extended =
        args.extended || args.extended_namespace.is_some() || config.extended.unwrap_or(false);
    convert.extended_namespace = args
        .extended_namespace
        .clone()
        .or_else(|| config.extended_namespace.clone());

    if let Some(global) = args.global_object.as_ref().or(config.global_object.as_ref()) {
        if global.is_empty() {
            bail!("globalObject must not be empty");
        }
        convert.global_object = global.clone();
    }

    let factory = args
        .factory
        .clone()
        .or_else(|| config.factory.clone())
        .unwrap_or_else(|| DEFAULT_FACTORY.to_string());

    Ok(ResolvedOptions { convert, factory })
}

/// The config named by `--config`, else `reclass.json` beside the input,
/// else an empty config.
pub fn discover_config(args: &CliArgs) -> Result<ReclassConfig> {
    if let Some(path) = args.config.as_deref() {
        return load_config(path);
    }

    let beside_input = args
        .input
        .parent()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file());
    match beside_input {
        Some(path) => {
            debug!(path = %path.display(), "using config beside input");
            load_config(&path)
        }
        None => Ok(ReclassConfig::default()),
    }
}

pub fn parse_config(source: &str) -> Result<ReclassConfig> {
    let normalized = strip_jsonc(source);
    let config = serde_json::from_str(&normalized).context("failed to parse reclass config JSON")?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<ReclassConfig> {
    let mut visited = HashSet::new();
    load_config_inner(path, &mut visited)
}

fn load_config_inner(path: &Path, visited: &mut HashSet<PathBuf>) -> Result<ReclassConfig> {
    let canonical = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    if !visited.insert(canonical.clone()) {
        bail!("config extends cycle detected at {}", canonical.display());
    }

    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let mut config = parse_config(&source)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;

    if let Some(extends) = config.extends.take() {
        let base_path = resolve_extends_path(path, &extends)?;
        let base = load_config_inner(&base_path, visited)?;
        config = merge_configs(base, config);
    }

    visited.remove(&canonical);
    Ok(config)
}

fn resolve_extends_path(current_path: &Path, extends: &str) -> Result<PathBuf> {
    let base_dir = current_path
        .parent()
        .ok_or_else(|| anyhow!("config has no parent directory"))?;
    let mut candidate = PathBuf::from(extends);
    if candidate.extension().is_none() {
        candidate.set_extension("json");
    }

    if candidate.is_absolute() {
        Ok(candidate)
    } else {
        Ok(base_dir.join(candidate))
    }
}

fn merge_configs(base: ReclassConfig, child: ReclassConfig) -> ReclassConfig {
    ReclassConfig {
        extends: None,
        constructor_name: child.constructor_name.or(base.constructor_name),
        extended: child.extended.or(base.extended),
        extended_namespace: child.extended_namespace.or(base.extended_namespace),
        target: child.target.or(base.target),
        global_object: child.global_object.or(base.global_object),
        factory: child.factory.or(base.factory),
    }
}

/// Drop `//` and `/* */` comments and trailing commas outside strings.
///
/// A comma is held back until the next significant character; it is dropped
/// when that character closes an object or array.
fn strip_jsonc(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escape = false;
    let mut pending_comma = false;

    while let Some(ch) = chars.next() {
        if in_string {
            out.push(ch);
            if escape {
                escape = false;
            } else if ch == '\\' {
                escape = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match (ch, chars.peek().copied()) {
            ('/', Some('/')) => {
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                        break;
                    }
                }
                continue;
            }
            ('/', Some('*')) => {
                chars.next();
                let mut previous = '\0';
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                    }
                    if previous == '*' && next == '/' {
                        break;
                    }
                    previous = next;
                }
                continue;
            }
            _ => {}
        }

        if ch.is_whitespace() {
            out.push(ch);
            continue;
        }

        if pending_comma {
            pending_comma = false;
            if ch != '}' && ch != ']' {
                out.push(',');
            }
        }

        match ch {
            ',' => pending_comma = true,
            '"' => {
                in_string = true;
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }

    if pending_comma {
        out.push(',');
    }
    out
}
