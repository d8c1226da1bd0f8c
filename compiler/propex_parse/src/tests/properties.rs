use pretty_assertions::assert_eq;
use propex_ir::{AccessorKind, NodeId, NodeKind, SyntaxTree};

use super::{at, labels, parse_ok};

/// Accessors of a property as `(modifiers, kind, body)` descriptions.
fn accessors(tree: &SyntaxTree, property: NodeId) -> Vec<(String, AccessorKind, &'static str)> {
    let NodeKind::Property { accessors, .. } = *tree.kind(property) else {
        panic!("not a property");
    };
    let NodeKind::AccessorList { accessors, .. } = *tree.kind(accessors) else {
        panic!("no accessor list");
    };
    tree.arena()
        .node_list(accessors)
        .iter()
        .map(|&id| {
            let NodeKind::Accessor {
                modifiers,
                kind,
                body,
                ..
            } = *tree.kind(id)
            else {
                panic!("not an accessor");
            };
            let body = match body.valid().map(|b| tree.kind(b)) {
                None => "none",
                Some(NodeKind::Block { .. }) => "block",
                Some(NodeKind::ArrowClause { .. }) => "arrow",
                Some(_) => "other",
            };
            (tree.tokens_text(modifiers), kind, body)
        })
        .collect()
}

#[test]
fn test_auto_property() {
    let tree = parse_ok("class C { public int Age { get; private set; } }");
    let prop = at(&tree, &[0, 0]);
    assert_eq!(
        accessors(&tree, prop),
        vec![
            (String::new(), AccessorKind::Get, "none"),
            ("private".to_owned(), AccessorKind::Set, "none"),
        ]
    );
}

#[test]
fn test_full_property() {
    let tree = parse_ok(
        "class C {\n    private int _age;\n    public int Age\n    {\n        get { return _age; }\n        set { _age = value; }\n    }\n}\n",
    );
    assert_eq!(
        labels(&tree, at(&tree, &[0])),
        vec!["field _age", "property Age"]
    );
    let prop = at(&tree, &[0, 1]);
    assert_eq!(
        accessors(&tree, prop),
        vec![
            (String::new(), AccessorKind::Get, "block"),
            (String::new(), AccessorKind::Set, "block"),
        ]
    );
}

#[test]
fn test_expression_bodied_property() {
    let tree = parse_ok("class C { public int Count => _count; }");
    let prop = at(&tree, &[0, 0]);
    let NodeKind::Property {
        accessors,
        expr_body,
        semi,
        ..
    } = *tree.kind(prop)
    else {
        panic!("not a property");
    };
    assert!(!accessors.is_valid());
    assert!(semi.is_some());
    let NodeKind::ArrowClause { expr, .. } = *tree.kind(expr_body) else {
        panic!("no arrow clause");
    };
    assert!(matches!(tree.kind(expr), NodeKind::Name(_)));
}

#[test]
fn test_property_initializer_and_init_accessor() {
    let tree = parse_ok("class C { public string Name { get; init; } = \"x\"; }");
    let prop = at(&tree, &[0, 0]);
    let NodeKind::Property { initializer, .. } = *tree.kind(prop) else {
        panic!("not a property");
    };
    assert!(matches!(tree.kind(initializer), NodeKind::EqualsValue { .. }));
    assert_eq!(accessors(&tree, prop)[1].1, AccessorKind::Init);
}

#[test]
fn test_arrow_accessors() {
    let tree = parse_ok("class C { int X { get => _x; set => _x = value; } }");
    let prop = at(&tree, &[0, 0]);
    assert_eq!(
        accessors(&tree, prop),
        vec![
            (String::new(), AccessorKind::Get, "arrow"),
            (String::new(), AccessorKind::Set, "arrow"),
        ]
    );
}

#[test]
fn test_unsupported_accessor_lists_are_opaque() {
    let tree = parse_ok(
        "class C {\n\
         event EventHandler E { add { } remove { } }\n\
         int Twice { get; get; }\n\
         int Both { set; init; }\n\
         int IFoo.Bar { get; }\n\
         int Ok { get; }\n\
         }",
    );
    assert_eq!(
        labels(&tree, at(&tree, &[0])),
        vec![
            "opaque event",
            "opaque int",
            "opaque int",
            "opaque int",
            "property Ok",
        ]
    );
}

#[test]
fn test_properties_listed_with_paths() {
    let tree = parse_ok("namespace N { class A { int X { get; set; } class B { int Y => 1; } } }");
    let found: Vec<String> = tree
        .properties()
        .into_iter()
        .map(|(path, id)| format!("{path} {}", super::label(&tree, id)))
        .collect();
    assert_eq!(found, vec!["/0/0/0 property X", "/0/0/1/0 property Y"]);
}
