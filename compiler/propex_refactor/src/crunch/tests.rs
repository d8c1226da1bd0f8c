use pretty_assertions::assert_eq;
use propex_fmt::render;
use propex_ir::{SharedInterner, TypeKey};

use super::*;
use crate::{classify, resolve_backing_field, Candidate, DeclarationResolver};

fn parse(source: &str) -> SyntaxTree {
    propex_parse::parse(source, &SharedInterner::new()).unwrap()
}

/// Resolve and crunch the property named `name`, render the result.
fn crunch_named(source: &str, name: &str) -> String {
    let tree = parse(source);
    let path = tree.find_property(name).unwrap();
    let resolver = DeclarationResolver::new(&tree);
    let field = resolve_backing_field(&tree, &path, &resolver);
    let rewrite = crunch(&tree, field.as_ref(), &path).unwrap();
    render(&rewrite.unwrap_or(tree))
}

#[test]
fn test_getter_only_gains_private_setter() {
    let source = "class Person\n{\n    private int _age;\n    public int Age { get { return _age; } }\n}\n";
    assert_eq!(
        crunch_named(source, "Age"),
        "class Person\n{\n    public int Age { get; private set; }\n}\n"
    );
}

#[test]
fn test_getter_and_setter() {
    let source = "class C\n{\n    private string _name;\n    public string Name { get { return _name; } protected set { _name = value; } }\n}\n";
    assert_eq!(
        crunch_named(source, "Name"),
        "class C\n{\n    public string Name { get; protected set; }\n}\n"
    );
}

#[test]
fn test_multi_line_accessors() {
    let source = "class C\n{\n    public int Age\n    {\n        get { return _age; }\n    }\n\n    private int _age;\n}\n";
    assert_eq!(
        crunch_named(source, "Age"),
        "class C\n{\n    public int Age\n    {\n        get;\n        private set;\n    }\n}\n"
    );
}

#[test]
fn test_unresolved_getter_is_not_applicable() {
    let source = "class C\n{\n    public int Value { get { return ComputeValue(); } }\n}\n";
    let tree = parse(source);
    let path = tree.find_property("Value").unwrap();
    let resolver = DeclarationResolver::new(&tree);
    let field = resolve_backing_field(&tree, &path, &resolver);
    assert_eq!(field, None);

    let rewrite = crunch(&tree, field.as_ref(), &path).unwrap();
    assert!(!rewrite.is_applied());
    assert!(rewrite.tree().is_none());
    assert_eq!(render(&tree), source);
}

#[test]
fn test_not_applicable_skips_validation() {
    let tree = parse("class C { }");
    let rewrite = crunch(&tree, None, &MemberPath::from_steps(&[7])).unwrap();
    assert!(matches!(rewrite, Rewrite::NotApplicable));
}

#[test]
fn test_multi_declarator_field_is_kept() {
    let source = "class Point\n{\n    private int _x, _y;\n    public int X { get { return _x; } set { _x = value; } }\n}\n";
    assert_eq!(
        crunch_named(source, "X"),
        "class Point\n{\n    private int _x, _y;\n    public int X { get; set; }\n}\n"
    );
}

#[test]
fn test_region_and_trailing_comment_survive() {
    let source = "class C\n{\n    #region Fields\n    private int _age; // backing\n    #endregion\n\n    public int Age { get { return _age; } set { _age = value; } }\n}\n";
    assert_eq!(
        crunch_named(source, "Age"),
        "class C\n{\n    #region Fields\n    // backing\n    #endregion\n\n    public int Age { get; set; }\n}\n"
    );
}

#[test]
fn test_leading_comment_survives() {
    let source = "class C\n{\n    // The age.\n    private int _age;\n    public int Age { get { return _age; } }\n}\n";
    let tree = parse(source);
    let path = tree.find_property("Age").unwrap();
    let resolver = DeclarationResolver::new(&tree);
    let field = resolve_backing_field(&tree, &path, &resolver);
    let out = crunch(&tree, field.as_ref(), &path).unwrap().unwrap_or(tree);

    assert_eq!(
        render(&out),
        "class C\n{\n    // The age.\n    public int Age { get; private set; }\n}\n"
    );
    // The comment is carried by a placeholder member in the field's slot.
    let slot = out.resolve(&MemberPath::from_steps(&[0, 0])).unwrap();
    let NodeKind::EmptyMember { semi } = *out.kind(slot) else {
        panic!("expected a placeholder, found {:?}", out.kind(slot));
    };
    assert!(semi.missing);
}

#[test]
fn test_partial_declarations() {
    let source = "partial class C\n{\n    private int _age;\n}\npartial class C\n{\n    public int Age { get { return _age; } }\n}\n";
    assert_eq!(
        crunch_named(source, "Age"),
        "partial class C\n{\n}\npartial class C\n{\n    public int Age { get; private set; }\n}\n"
    );
}

#[test]
fn test_same_name_in_other_type_is_kept() {
    let source = "class A { int _v; int V { get { return _v; } } }\nclass B { int _v; }\n";
    assert_eq!(
        crunch_named(source, "V"),
        "class A { int V { get; private set; } }\nclass B { int _v; }\n"
    );
}

#[test]
fn test_field_initializer_moves_to_property() {
    let source = "class C\n{\n    private int _count = 5;\n    public int Count { get { return _count; } set { _count = value; } }\n}\n";
    assert_eq!(
        crunch_named(source, "Count"),
        "class C\n{\n    public int Count { get; set; } = 5;\n}\n"
    );
}

#[test]
fn test_expression_body_is_not_crunchable() {
    let tree = parse("class C { int _a; int A => _a; }");
    let path = MemberPath::from_steps(&[0, 1]);
    let symbol = FieldSymbol {
        declaring_type: tree.type_key(&MemberPath::from_steps(&[0])).unwrap(),
        name: tree.interner().intern("_a"),
    };
    assert_eq!(
        crunch(&tree, Some(&symbol), &path).unwrap_err(),
        RefactorError::NotCrunchable { path }
    );
}

#[test]
fn test_shape_errors() {
    let tree = parse("class C { int _a; }");
    let symbol = FieldSymbol {
        declaring_type: TypeKey(tree.interner().intern("C")),
        name: tree.interner().intern("_a"),
    };
    assert!(matches!(
        crunch(&tree, Some(&symbol), &MemberPath::from_steps(&[0, 0])),
        Err(RefactorError::NotAProperty { .. })
    ));
    assert!(matches!(
        crunch(&tree, Some(&symbol), &MemberPath::from_steps(&[0, 3])),
        Err(RefactorError::PathNotFound { .. })
    ));
}

#[test]
fn test_untouched_members_are_shared() {
    let source = "class C\n{\n    void Run() { }\n    private int _a;\n    public int A { get { return _a; } }\n}\nclass D { }\n";
    let tree = parse(source);
    let path = MemberPath::from_steps(&[0, 2]);
    let resolver = DeclarationResolver::new(&tree);
    let field = resolve_backing_field(&tree, &path, &resolver);
    let Rewrite::Applied(out) = crunch(&tree, field.as_ref(), &path).unwrap() else {
        panic!("expected a rewrite");
    };

    let member = |t: &SyntaxTree, steps: &[u32]| t.resolve(&MemberPath::from_steps(steps));
    assert_eq!(member(&tree, &[0, 0]), member(&out, &[0, 0]));
    assert_eq!(member(&tree, &[1]), member(&out, &[1]));
    assert_eq!(out.members(member(&out, &[0]).unwrap()).len(), 2);
    assert_eq!(render(&tree), source);
}

#[test]
fn test_crunched_property_explodes_again() {
    let source = "class C { int _a; int A { get { return _a; } } }";
    let tree = parse(source);
    let path = MemberPath::from_steps(&[0, 1]);
    let resolver = DeclarationResolver::new(&tree);
    let field = resolve_backing_field(&tree, &path, &resolver);
    let out = crunch(&tree, field.as_ref(), &path).unwrap().unwrap_or(tree);

    let crunched = MemberPath::from_steps(&[0, 0]);
    assert_eq!(classify(&out, &crunched), Candidate::Explode);
    let resolver = DeclarationResolver::new(&out);
    assert_eq!(resolve_backing_field(&out, &crunched, &resolver), None);
}
