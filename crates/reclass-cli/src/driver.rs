//! Reads an ESTree input, runs the conversion and serializes the result.

use anyhow::{Context, Result, anyhow, bail};
use reclass_common::ConvertWarning;
use reclass_emitter::{
    ConvertOutput, convert_call_expression, convert_class_call, locate_class_calls,
};
use serde_json::Value;
use tracing::{debug, info_span};

use crate::args::CliArgs;
use crate::config::{ResolvedOptions, discover_config, resolve_options};

/// Serialized output of one CLI invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub json: String,
    /// Number of calls converted.
    pub converted: usize,
    pub warnings: Vec<ConvertWarning>,
}

/// Load config, convert the input file and write `--out` when given.
pub fn run(args: &CliArgs) -> Result<Conversion> {
    let config = discover_config(args)?;
    let options = resolve_options(&config, args)?;
    debug!(
        target = options.convert.target.as_str(),
        factory = %options.factory,
        "resolved options"
    );

    let source = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read input: {}", args.input.display()))?;
    let conversion = convert_source(&source, args, &options)
        .with_context(|| format!("failed to convert {}", args.input.display()))?;

    if let Some(out) = args.out.as_deref() {
        std::fs::write(out, &conversion.json)
            .with_context(|| format!("failed to write output: {}", out.display()))?;
    }
    Ok(conversion)
}

/// Convert ESTree JSON text according to the output flags in `args`.
pub fn convert_source(
    source: &str,
    args: &CliArgs,
    options: &ResolvedOptions,
) -> Result<Conversion> {
    let tree: Value = serde_json::from_str(source).context("input is not valid JSON")?;

    let outputs = if args.arguments {
        let arguments = tree
            .as_array()
            .ok_or_else(|| anyhow!("--arguments expects a JSON array of argument nodes"))?;
        vec![convert_class_call(arguments, &options.convert)?]
    } else {
        convert_located(&tree, args.all, options)?
    };

    let warnings: Vec<ConvertWarning> = outputs
        .iter()
        .flat_map(|output| output.warnings.iter().cloned())
        .collect();
    let mut programs: Vec<Value> = outputs.iter().map(ConvertOutput::to_estree).collect();
    let converted = programs.len();

    let value = if args.all {
        Value::Array(programs)
    } else {
        programs.pop().unwrap_or(Value::Null)
    };
    let mut json = if args.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    json.push('\n');

    Ok(Conversion {
        json,
        converted,
        warnings,
    })
}

fn convert_located(
    tree: &Value,
    all: bool,
    options: &ResolvedOptions,
) -> Result<Vec<ConvertOutput>> {
    let calls = locate_class_calls(tree, &options.factory);
    debug!(factory = %options.factory, calls = calls.len(), "located class calls");
    if calls.is_empty() {
        bail!("no `{}` call found", options.factory);
    }

    let selected = if all { &calls[..] } else { &calls[..1] };
    selected
        .iter()
        .enumerate()
        .map(|(index, call)| {
            let _span = info_span!("call", index).entered();
            convert_call_expression(call, &options.convert)
                .with_context(|| format!("call #{} could not be converted", index + 1))
        })
        .collect()
}
