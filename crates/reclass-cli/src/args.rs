use clap::Parser;
use reclass_common::TargetDialect;
use std::path::PathBuf;

/// CLI arguments for the reclass binary.
#[derive(Parser, Debug)]
#[command(
    name = "reclass",
    version,
    about = "Rewrite legacy $.Class definitions as native class declarations"
)]
pub struct CliArgs {
    /// ESTree JSON file holding a parsed program (or an argument list with --arguments).
    pub input: PathBuf,

    /// Write the converted ESTree JSON here instead of stdout.
    #[arg(short = 'o', long)]
    pub out: Option<PathBuf>,

    /// Treat the input as the bare argument list of a single call.
    #[arg(long, conflicts_with = "all")]
    pub arguments: bool,

    /// Convert every located call, emitting an array of programs.
    #[arg(long)]
    pub all: bool,

    /// Pretty-print the output JSON.
    #[arg(long)]
    pub pretty: bool,

    /// Path to a reclass.json config file.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    // ==================== Conversion Options ====================
    /// Script target or field dialect: es2015, es2022, esnext, inline, declared.
    #[arg(short = 't', long, value_parser = parse_target)]
    pub target: Option<TargetDialect>,

    /// Instance-table key whose function becomes the constructor.
    #[arg(long = "constructorName", alias = "constructor-name")]
    pub constructor_name: Option<String>,

    /// Emit the class as extending a superclass.
    #[arg(long)]
    pub extended: bool,

    /// Dotted namespace of the superclass (implies --extended).
    #[arg(long = "extendedNamespace", alias = "extended-namespace")]
    pub extended_namespace: Option<String>,

    /// Global object that namespaces hang off.
    #[arg(long = "globalObject", alias = "global-object")]
    pub global_object: Option<String>,

    /// Callee of class-definition calls, as a dotted member chain.
    #[arg(long)]
    pub factory: Option<String>,
}

pub fn parse_target(value: &str) -> Result<TargetDialect, String> {
    TargetDialect::from_target_name(value).ok_or_else(|| {
        format!("unknown target '{value}'; expected es2015, es2016, es2017..es2022, esnext, inline or declared")
    })
}
