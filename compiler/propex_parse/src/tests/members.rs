use pretty_assertions::assert_eq;
use propex_ir::{NodeKind, Span, TypeKeyword};

use super::{at, labels, parse_err, parse_ok};
use crate::ParseError;

#[test]
fn test_namespaces_and_types() {
    let tree = parse_ok(
        "using System;\n\
         namespace Shop.Orders\n{\n    public partial class Order : Base<int>, IOrder\n    {\n    }\n    struct P { }\n}\n",
    );
    assert_eq!(
        labels(&tree, tree.root()),
        vec!["opaque using", "namespace Shop.Orders"]
    );
    assert_eq!(
        labels(&tree, at(&tree, &[1])),
        vec!["type Order", "type P"]
    );

    let order = at(&tree, &[1, 0]);
    let NodeKind::TypeDecl {
        modifiers,
        type_keyword,
        header,
        ..
    } = *tree.kind(order)
    else {
        panic!("not a type");
    };
    assert_eq!(type_keyword, TypeKeyword::Class);
    assert_eq!(tree.tokens_text(modifiers), "publicpartial");
    assert_eq!(tree.tokens_text(header), ":Base<int>,IOrder");
}

#[test]
fn test_file_scoped_namespace() {
    let tree = parse_ok("namespace A.B;\n\nclass C { int _x; }\n");
    let ns = at(&tree, &[0]);
    assert!(matches!(tree.kind(ns), NodeKind::Namespace { close: None, .. }));
    assert_eq!(labels(&tree, ns), vec!["type C"]);
    assert_eq!(labels(&tree, at(&tree, &[0, 0])), vec!["field _x"]);
}

#[test]
fn test_unmodelled_members_are_opaque() {
    let tree = parse_ok(
        "class C\n{\n\
         public C() { }\n\
         public void M(int a) { if (a > 0) { return; } }\n\
         public int Twice(int a) => a * 2;\n\
         public event EventHandler Changed;\n\
         public int this[int i] { get { return i; } }\n\
         enum Kind { A, B }\n\
         int[] _values = { 1, 2 };\n\
         ;\n\
         }\n",
    );
    assert_eq!(
        labels(&tree, at(&tree, &[0])),
        vec![
            "opaque public",
            "opaque public",
            "opaque public",
            "opaque public",
            "opaque public",
            "opaque enum",
            "field _values",
            "empty",
        ]
    );
}

#[test]
fn test_field_declarators() {
    let tree = parse_ok(
        "class C {\n    private int _a = 1, _b, _c = Compute(2);\n    Dictionary<int, string> _map = new Dictionary<int, string>();\n}\n",
    );
    assert_eq!(
        labels(&tree, at(&tree, &[0])),
        vec!["field _a,_b,_c", "field _map"]
    );
}

#[test]
fn test_attributes_and_assembly_attributes() {
    let tree = parse_ok("[assembly: Foo]\n[Serializable]\nclass C { [NonSerialized] int _x; }\n");
    assert_eq!(labels(&tree, tree.root()), vec!["opaque [", "type C"]);
    let NodeKind::TypeDecl { attributes, .. } = *tree.kind(at(&tree, &[1])) else {
        panic!("not a type");
    };
    assert_eq!(tree.tokens_text(attributes), "[Serializable]");
}

#[test]
fn test_nested_types() {
    let tree = parse_ok("class Outer { class Inner { int _x; } int _y; }");
    assert_eq!(labels(&tree, at(&tree, &[0])), vec!["type Inner", "field _y"]);
    assert_eq!(labels(&tree, at(&tree, &[0, 0])), vec!["field _x"]);
}

#[test]
fn test_node_spans_cover_source() {
    let source = "class C { int _x; }";
    let tree = parse_ok(source);
    let field = at(&tree, &[0, 0]);
    assert_eq!(tree.arena().span(field), Span::new(10, 17));
    assert_eq!(tree.arena().span(tree.root()), Span::new(0, 19));
}

#[test]
fn test_unbalanced_braces() {
    assert!(matches!(
        parse_err("class C { int _x; "),
        ParseError::UnexpectedEof { .. }
    ));
    assert!(matches!(
        parse_err("class C { } }"),
        ParseError::UnbalancedDelimiter { .. }
    ));
}

#[test]
fn test_lex_errors_surface() {
    let err = parse_err("class C { int `x; }");
    assert!(matches!(err, ParseError::Lex(_)));
    assert_eq!(err.span(), Span::new(14, 15));
}

#[test]
fn test_block_comments_are_trivia() {
    let tree = parse_ok("class C { /**/ int A { get; set; } /* a * b */ int B { get; set; } }");
    assert_eq!(tree.properties().len(), 2);
    assert!(matches!(
        parse_err("class C { /* open int A { get; set; } }"),
        ParseError::Lex(_)
    ));
}
