use crate::args::CliArgs;
use clap::Parser;
use reclass_common::TargetDialect;
use std::path::PathBuf;

#[test]
fn parses_input_and_output_flags() {
    let args = CliArgs::try_parse_from([
        "reclass",
        "program.json",
        "--out",
        "out.json",
        "--all",
        "--pretty",
    ])
    .expect("valid arguments");

    assert_eq!(args.input, PathBuf::from("program.json"));
    assert_eq!(args.out, Some(PathBuf::from("out.json")));
    assert!(args.all);
    assert!(args.pretty);
    assert!(!args.arguments);
}

#[test]
fn target_accepts_script_targets_and_dialects() {
    for (value, expected) in [
        ("es2015", TargetDialect::InlineFields),
        ("ES6", TargetDialect::InlineFields),
        ("es2022", TargetDialect::DeclaredFields),
        ("esnext", TargetDialect::DeclaredFields),
        ("declared", TargetDialect::DeclaredFields),
    ] {
        let args = CliArgs::try_parse_from(["reclass", "in.json", "--target", value])
            .expect("valid target");
        assert_eq!(args.target, Some(expected), "target {value}");
    }
}

#[test]
fn unknown_target_is_rejected() {
    let err = CliArgs::try_parse_from(["reclass", "in.json", "-t", "es3"]).expect_err("es3");
    assert!(err.to_string().contains("unknown target 'es3'"));
}

#[test]
fn camel_case_and_kebab_case_option_names() {
    let camel = CliArgs::try_parse_from([
        "reclass",
        "in.json",
        "--constructorName",
        "setup",
        "--extendedNamespace",
        "app.Base",
        "--globalObject",
        "self",
    ])
    .expect("camelCase flags");
    let kebab = CliArgs::try_parse_from([
        "reclass",
        "in.json",
        "--constructor-name",
        "setup",
        "--extended-namespace",
        "app.Base",
        "--global-object",
        "self",
    ])
    .expect("kebab-case flags");

    for args in [camel, kebab] {
        assert_eq!(args.constructor_name.as_deref(), Some("setup"));
        assert_eq!(args.extended_namespace.as_deref(), Some("app.Base"));
        assert_eq!(args.global_object.as_deref(), Some("self"));
    }
}

#[test]
fn arguments_conflicts_with_all() {
    assert!(CliArgs::try_parse_from(["reclass", "in.json", "--arguments", "--all"]).is_err());
}
