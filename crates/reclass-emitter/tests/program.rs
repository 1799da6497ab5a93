use super::*;
use crate::test_fixtures::*;
use crate::transforms::ir::{IRClass, IRClassMember, IRMethodKind, IRNode};
use reclass_common::TargetDialect;
use serde_json::json;

fn build(arguments: Vec<Value>, options: &ConvertOptions) -> ConvertOutput {
    ProgramGenerator::new(options)
        .build(&arguments)
        .expect("conversion should succeed")
}

fn class_of(output: &ConvertOutput) -> &IRClass {
    output.program.class().expect("program should declare a class")
}

fn class_position(output: &ConvertOutput) -> usize {
    output
        .program
        .body
        .iter()
        .position(|statement| {
            matches!(statement, IRNode::ExpressionStatement(expr)
                if matches!(expr.as_ref(), IRNode::Assign { value, .. }
                    if matches!(value.as_ref(), IRNode::ClassExpr(_))))
        })
        .expect("class statement")
}

#[test]
fn test_no_parameters_is_missing_parameters() {
    let err = ProgramGenerator::new(&ConvertOptions::default())
        .build(&[])
        .expect_err("empty argument list");
    assert_eq!(err, ConvertError::MissingParameters);
}

#[test]
fn test_call_without_arguments_is_missing_parameters() {
    let call = json!({ "type": "CallExpression", "callee": ident("f") });
    let err = convert_call_expression(&call, &ConvertOptions::default())
        .expect_err("call without arguments");
    assert_eq!(err, ConvertError::MissingParameters);
}

#[test]
fn test_arity_must_be_two_or_three() {
    let options = ConvertOptions::default();
    for arguments in [
        vec![string("a.B")],
        vec![string("a.B"), object(vec![]), object(vec![]), object(vec![])],
    ] {
        let found = arguments.len();
        let err = ProgramGenerator::new(&options)
            .build(&arguments)
            .expect_err("bad arity");
        assert_eq!(err, ConvertError::InvalidArity { found });
    }
}

#[test]
fn test_invalid_namespace_fails_fast() {
    let err = ProgramGenerator::new(&ConvertOptions::default())
        .build(&[string("app..Button"), object(vec![])])
        .expect_err("empty segment");
    assert!(matches!(err, ConvertError::InvalidNamespace { .. }));
}

#[test]
fn test_non_object_tables_are_rejected_with_position() {
    let options = ConvertOptions::default();

    let err = ProgramGenerator::new(&options)
        .build(&[string("Button"), number(1)])
        .expect_err("instance table is a number");
    assert_eq!(err, ConvertError::InvalidMemberTable { position: 1 });

    let err = ProgramGenerator::new(&options)
        .build(&[string("Button"), number(1), object(vec![])])
        .expect_err("static table is a number");
    assert_eq!(err, ConvertError::InvalidMemberTable { position: 1 });

    let err = ProgramGenerator::new(&options)
        .build(&[string("Button"), object(vec![]), number(1)])
        .expect_err("instance table is a number");
    assert_eq!(err, ConvertError::InvalidMemberTable { position: 2 });
}

#[test]
fn test_two_argument_layout() {
    let output = build(
        vec![
            string("app.ui.Button"),
            object(vec![prop("init", func(&[], vec![stmt("setup")])), prop("label", string("Ok"))]),
        ],
        &ConvertOptions::default(),
    );

    let body = &output.program.body;
    assert_eq!(body.len(), 4, "{body:#?}");
    assert!(matches!(body[1], IRNode::ConstDecl { ref name, .. } if name == "app"));
    assert_eq!(class_position(&output), 3);

    let class = class_of(&output);
    assert_eq!(class.name, "Button");
    assert_eq!(class.members.len(), 1);
    assert!(class.members[0].is_constructor());
    assert!(output.warnings.is_empty());
}

#[test]
fn test_static_data_trails_class_declaration() {
    let output = build(
        vec![
            string("app.ui.Button"),
            object(vec![prop("VERSION", string("1.0")), prop("create", empty_fn())]),
            object(vec![]),
        ],
        &ConvertOptions::default(),
    );

    let position = class_position(&output);
    assert_eq!(position, output.program.body.len() - 2);
    assert_eq!(
        output.program.body[position + 1],
        IRNode::expr_stmt(IRNode::assign(
            IRNode::prop(
                IRNode::prop(IRNode::prop(IRNode::id("app"), "ui"), "Button"),
                "VERSION"
            ),
            IRNode::Raw(string("1.0")),
        ))
    );

    let class = class_of(&output);
    assert_eq!(class.members.len(), 1);
    assert!(class.members[0].as_method().expect("static method").is_static);
}

#[test]
fn test_single_constructor_with_static_and_instance_init() {
    let output = build(
        vec![
            string("Button"),
            object(vec![prop("init", func(&[], vec![stmt("static_init")]))]),
            object(vec![prop("init", func(&[], vec![stmt("instance_init")]))]),
        ],
        &ConvertOptions::default(),
    );

    let class = class_of(&output);
    let constructors: Vec<_> = class
        .members
        .iter()
        .filter(|member| member.is_constructor())
        .collect();
    assert_eq!(constructors.len(), 1);
    assert_eq!(
        constructors[0].as_method().expect("constructor").function.body,
        vec![IRNode::Raw(stmt("instance_init"))]
    );

    let static_init = class.members[0].as_method().expect("static init");
    assert!(static_init.is_static);
    assert_eq!(static_init.function.body, vec![IRNode::Raw(stmt("static_init"))]);
}

#[test]
fn test_missing_extended_namespace_matches_unextended_output() {
    let arguments = vec![
        string("app.ui.Button"),
        object(vec![prop("init", empty_fn()), prop("label", string("Ok"))]),
    ];

    let plain = build(arguments.clone(), &ConvertOptions::default());
    let extended = build(arguments, &ConvertOptions::default().with_unnamed_extends());

    assert_eq!(plain.program, extended.program);
    assert!(plain.warnings.is_empty());
    assert_eq!(extended.warnings, vec![ConvertWarning::MissingExtendedNamespace]);
    assert!(class_of(&extended).super_class.is_none());
}

#[test]
fn test_extended_alias_is_deduplicated() {
    let output = build(
        vec![string("app.ui.Button"), object(vec![])],
        &ConvertOptions::default().with_extends("app.base.Component"),
    );

    let aliases: Vec<_> = output
        .program
        .body
        .iter()
        .filter(|statement| matches!(statement, IRNode::ConstDecl { name, .. } if name == "app"))
        .collect();
    assert_eq!(aliases.len(), 1);
    assert!(class_of(&output).super_class.is_some());
}

#[test]
fn test_extended_alias_precedes_class() {
    let output = build(
        vec![string("app.Button"), object(vec![])],
        &ConvertOptions::default().with_extends("lib.Base"),
    );

    let body = &output.program.body;
    assert!(matches!(body[1], IRNode::ConstDecl { ref name, .. } if name == "app"));
    assert!(matches!(body[2], IRNode::ConstDecl { ref name, .. } if name == "lib"));
    assert_eq!(class_position(&output), 3);
}

#[test]
fn test_spread_warning_is_reported() {
    let output = build(
        vec![string("Button"), object(vec![spread(ident("mixin"))])],
        &ConvertOptions::default(),
    );

    assert_eq!(
        output.warnings,
        vec![ConvertWarning::SkippedSpreadElement {
            position: 1,
            index: 0
        }]
    );
}

#[test]
fn test_runs_do_not_share_state() {
    let options = ConvertOptions::default().with_target(TargetDialect::DeclaredFields);
    let arguments = vec![
        string("app.Button"),
        object(vec![prop("init", empty_fn()), prop("label", string("Ok"))]),
    ];

    let first = build(arguments.clone(), &options);
    let second = build(arguments, &options);

    assert_eq!(first, second);
    assert!(class_of(&second).members.iter().any(|m| m.is_constructor()));
}

#[test]
fn test_entry_named_constructor_is_keyed_as_string() {
    let output = build(
        vec![
            string("app.Button"),
            object(vec![
                prop("init", func(&[], vec![stmt("a")])),
                prop("constructor", func(&[], vec![stmt("b")])),
                accessor("get", "constructor", empty_fn()),
            ]),
        ],
        &ConvertOptions::default(),
    );

    let class = class_of(&output);
    let constructors = class
        .members
        .iter()
        .filter(|member| member.is_constructor())
        .count();
    assert_eq!(constructors, 1);

    let plain_constructor_keys = class
        .members
        .iter()
        .filter_map(IRClassMember::as_method)
        .filter(|method| !method.computed && method.key == IRNode::id("constructor"))
        .count();
    assert_eq!(plain_constructor_keys, 1, "{:#?}", class.members);

    for method in class.members.iter().skip(1).filter_map(IRClassMember::as_method) {
        assert!(method.computed);
        assert_eq!(
            method.key,
            IRNode::Raw(json!({
                "type": "Literal",
                "value": "constructor",
                "raw": "\"constructor\"",
            }))
        );
    }
}

#[test]
fn test_synthesized_constructor_with_constructor_named_entry() {
    let output = build(
        vec![
            string("Button"),
            object(vec![
                prop("constructor", empty_fn()),
                prop("constructor_data", string("x")),
            ]),
        ],
        &ConvertOptions::default(),
    );

    let class = class_of(&output);
    assert_eq!(class.members.len(), 2);
    assert!(class.members[0].is_constructor());
    let method = class.members[1].as_method().expect("method");
    assert_eq!(method.kind, IRMethodKind::Method);
    assert!(method.computed);
}

#[test]
fn test_declared_field_named_constructor_is_keyed_as_string() {
    let output = build(
        vec![
            string("Button"),
            object(vec![prop("constructor", string("Button"))]),
        ],
        &ConvertOptions::default().with_target(TargetDialect::DeclaredFields),
    );

    let class = class_of(&output);
    let field = class.members[0].as_field().expect("field");
    assert!(field.computed);
    assert!(class.members[1].is_constructor());
}
