//! Declaration-based field resolution.
//!
//! A syntactic stand-in for a semantic model: [`DeclarationResolver`]
//! indexes the type declarations of one compilation unit and binds a name to
//! the nearest field declaration that could be meant by it.
//!
//! Lookup order for `name` inside type `T`:
//!
//! 1. fields declared by `T` (all partial declarations)
//! 2. fields of `T`'s base types declared in the same unit, transitively
//! 3. for a simple name only: the enclosing types of `T`, with their bases
//!
//! `this.name` stops after step 2.

use propex_ir::visitor::{walk_members, Visitor};
use propex_ir::{MemberPath, Name, NodeId, NodeKind, SyntaxTree, TypeKey};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::shape;
use crate::{FieldResolver, FieldSymbol};

#[derive(Debug, Default)]
struct TypeInfo {
    fields: FxHashSet<Name>,
    bases: Vec<Name>,
    outer: Option<TypeKey>,
}

/// Field resolver over the declarations of a tree.
#[derive(Debug, Default)]
pub struct DeclarationResolver {
    types: FxHashMap<TypeKey, TypeInfo>,
    by_simple_name: FxHashMap<Name, Vec<TypeKey>>,
}

impl DeclarationResolver {
    /// Index every type declaration of `tree`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn new(tree: &SyntaxTree) -> Self {
        let mut index = Indexer {
            resolver: DeclarationResolver::default(),
        };
        index.visit_tree(tree);
        tracing::debug!(types = index.resolver.types.len(), "indexed declarations");
        index.resolver
    }

    /// Number of distinct types indexed.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Does `ty` itself declare a field `name`?
    pub fn declares(&self, ty: TypeKey, name: Name) -> bool {
        self.types
            .get(&ty)
            .is_some_and(|info| info.fields.contains(&name))
    }

    /// Look `name` up in `ty` and its bases; returns the declaring type.
    fn lookup_with_bases(&self, ty: TypeKey, name: Name) -> Option<TypeKey> {
        let mut visited = FxHashSet::default();
        let mut pending = vec![ty];
        while let Some(current) = pending.pop() {
            if !visited.insert(current) {
                continue;
            }
            let Some(info) = self.types.get(&current) else {
                continue;
            };
            if info.fields.contains(&name) {
                return Some(current);
            }
            // Reverse so the first listed base is searched first.
            for base in info.bases.iter().rev() {
                if let Some(keys) = self.by_simple_name.get(base) {
                    pending.extend(keys.iter().rev().copied());
                }
            }
        }
        None
    }

    fn lookup(&self, ty: TypeKey, name: Name, include_outer: bool) -> Option<TypeKey> {
        let mut current = Some(ty);
        while let Some(ty) = current {
            if let Some(found) = self.lookup_with_bases(ty, name) {
                return Some(found);
            }
            if !include_outer {
                return None;
            }
            current = self.types.get(&ty).and_then(|info| info.outer);
        }
        None
    }
}

impl FieldResolver for DeclarationResolver {
    fn resolve_referenced_field(
        &self,
        tree: &SyntaxTree,
        scope: &MemberPath,
        expr: NodeId,
    ) -> Option<FieldSymbol> {
        let name = shape::bare_field_reference(tree.arena(), expr)?;
        let qualified = matches!(tree.kind(expr), NodeKind::MemberAccess { .. });
        let ty = tree.declaring_type(scope)?;
        let declaring_type = self.lookup(ty, name.text, !qualified)?;
        tracing::trace!(
            name = tree.text(name),
            owner = tree.name_str(declaring_type.0),
            "resolved field"
        );
        Some(FieldSymbol {
            declaring_type,
            name: name.text,
        })
    }
}

struct Indexer {
    resolver: DeclarationResolver,
}

impl Visitor for Indexer {
    fn visit_type_decl(&mut self, tree: &SyntaxTree, path: &MemberPath, id: NodeId) {
        let NodeKind::TypeDecl { name, .. } = *tree.kind(id) else {
            return;
        };
        if let Some(key) = tree.type_key(path) {
            let outer = path.parent().and_then(|parent| tree.type_key(&parent));
            let bases = tree.base_type_names(id);
            let fields = tree.members(id).iter().flat_map(|&member| {
                let NodeKind::Field { declarators, .. } = *tree.kind(member) else {
                    return Vec::new();
                };
                tree.arena()
                    .node_list(declarators)
                    .iter()
                    .filter_map(|&declarator| match *tree.kind(declarator) {
                        NodeKind::Declarator { name, .. } => Some(name.text),
                        _ => None,
                    })
                    .collect::<Vec<Name>>()
            });

            if self.resolver.types.contains_key(&key) {
                tracing::trace!(ty = tree.name_str(key.0), "merging partial declaration");
            }
            let info = self.resolver.types.entry(key).or_default();
            info.fields.extend(fields);
            for base in bases {
                if !info.bases.contains(&base) {
                    info.bases.push(base);
                }
            }
            info.outer = info.outer.or(outer);
            let keys = self.resolver.by_simple_name.entry(name.text).or_default();
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        walk_members(self, tree, path, id);
    }
}

#[cfg(test)]
mod tests {
    use propex_ir::SharedInterner;

    use super::*;

    fn parse(source: &str) -> SyntaxTree {
        propex_parse::parse(source, &SharedInterner::new()).unwrap()
    }

    /// Resolve the getter of the property `query` and name the declaring type.
    fn owner_of(tree: &SyntaxTree, query: &str) -> Option<String> {
        let resolver = DeclarationResolver::new(tree);
        let path = tree.find_property(query)?;
        let view = shape::locate(tree, &path).ok()?;
        let getter = view.accessors()?.getter?;
        let shape::AccessorBody::Block(body) = getter.body else {
            return None;
        };
        let NodeKind::Block { stmts, .. } = *tree.kind(body) else {
            return None;
        };
        let stmt = *tree.arena().node_list(stmts).first()?;
        let NodeKind::Return { expr, .. } = *tree.kind(stmt) else {
            return None;
        };
        let symbol = resolver.resolve_referenced_field(tree, &path, expr)?;
        Some(tree.name_str(symbol.declaring_type.0).to_owned())
    }

    #[test]
    fn test_own_field() {
        let tree = parse("namespace N { class C { int _a; int A { get { return _a; } } } }");
        assert_eq!(owner_of(&tree, "A").as_deref(), Some("N.C"));
    }

    #[test]
    fn test_multi_declarator_fields_are_indexed() {
        let tree = parse("class C { private int _x, _y; int Y { get { return _y; } } }");
        assert_eq!(owner_of(&tree, "Y").as_deref(), Some("C"));
    }

    #[test]
    fn test_partial_declarations_merge() {
        let tree = parse(
            "partial class C { int A { get { return _a; } } }\npartial class C { int _a; }",
        );
        let resolver = DeclarationResolver::new(&tree);
        assert_eq!(resolver.type_count(), 1);
        assert_eq!(owner_of(&tree, "A").as_deref(), Some("C"));
    }

    #[test]
    fn test_base_type_field() {
        let tree = parse(
            "class Base { protected int _a; }\nclass Mid : Base { }\nclass C : Mid, IThing { int A { get { return this._a; } } }",
        );
        assert_eq!(owner_of(&tree, "A").as_deref(), Some("Base"));
    }

    #[test]
    fn test_outer_type_field_only_for_simple_names() {
        let tree = parse(
            "class Outer { static int _a; class Inner { int A { get { return _a; } } int B { get { return this._a; } } } }",
        );
        assert_eq!(owner_of(&tree, "A").as_deref(), Some("Outer"));
        assert_eq!(owner_of(&tree, "B"), None);
    }

    #[test]
    fn test_base_cycles_terminate() {
        let tree = parse("class A : B { int P { get { return _p; } } }\nclass B : A { }");
        assert_eq!(owner_of(&tree, "P"), None);
    }

    #[test]
    fn test_declares() {
        let tree = parse("class C { int _a, _b; }");
        let resolver = DeclarationResolver::new(&tree);
        let key = tree.type_key(&MemberPath::from_steps(&[0])).unwrap();
        for name in ["_a", "_b"] {
            assert!(resolver.declares(key, tree.interner().intern(name)));
        }
        assert!(!resolver.declares(key, tree.interner().intern("_c")));
    }
}
