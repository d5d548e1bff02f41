//! End-to-end reflection scenarios through the public API.
//!
//! Each test builds a small declaration table the way a host front end
//! would, then reflects over it.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use mirror_diagnostic::{DiagnosticQueue, ErrorCode};
use mirror_ir::{DeclId, SharedInterner, SourceLoc, TypeId};
use mirror_reflect::{
    satisfies, Concept, DisplayStyle, MetaKind, Metaobject, ReflectError, ReflectOptions,
    Reflector,
};
use mirror_sema::{Access, DeclTable, RecordTag, TemplateArg};
use pretty_assertions::assert_eq;

fn table() -> DeclTable {
    DeclTable::new(SharedInterner::new())
}

/// `class P { public: int x; private: int y; };`
fn class_p() -> (DeclTable, DeclId, DeclId, DeclId) {
    let mut t = table();
    let file = t.interner().intern("p.h");
    let p = t
        .add_record(DeclId::GLOBAL, "P", RecordTag::Class, Some(SourceLoc::new(file, 1, 7)))
        .unwrap();
    let x = t
        .add_data_member(p, "x", TypeId::INT, false, Some(SourceLoc::new(file, 1, 23)))
        .unwrap();
    t.set_access(x, Access::Public).unwrap();
    let y = t
        .add_data_member(p, "y", TypeId::INT, false, Some(SourceLoc::new(file, 1, 40)))
        .unwrap();
    (t, p, x, y)
}

fn names(r: &Reflector<'_>, members: impl IntoIterator<Item = Metaobject>) -> Vec<String> {
    members
        .into_iter()
        .map(|m| r.get_base_name(m).unwrap())
        .collect()
}

#[test]
fn class_p_from_outside() {
    let (t, _, _, _) = class_p();
    let r = Reflector::new(&t);
    let meta = r.reflect("P").unwrap();
    assert_eq!(meta.kind(), MetaKind::Class);

    let public = r.get_public_data_members(meta).unwrap();
    assert_eq!(names(&r, &public), vec!["x"]);
    assert_eq!(r.get_accessible_data_members(meta).unwrap(), public);

    let err = r.get_data_members(meta).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E7006);
}

#[test]
fn class_p_from_inside() {
    let (t, p, x, y) = class_p();
    let r = Reflector::new(&t).in_context(p);
    let meta = r.reflect(p).unwrap();

    let all = r.get_data_members(meta).unwrap();
    assert_eq!(names(&r, &all), vec!["x", "y"]);
    assert_eq!(all.element(0).unwrap().decl(), Some(x));
    assert_eq!(all.element(1).unwrap().decl(), Some(y));
    assert_eq!(names(&r, &r.get_accessible_data_members(meta).unwrap()), vec!["x", "y"]);
    assert_eq!(names(&r, &r.get_public_data_members(meta).unwrap()), vec!["x"]);

    let y_meta = all.element(1).unwrap();
    assert!(r.is_private(y_meta).unwrap());
    assert_eq!(r.get_source_line(y_meta).unwrap(), 1);
    assert_eq!(r.get_source_column(y_meta).unwrap(), 40);
    assert_eq!(r.get_source_file_name(y_meta).unwrap(), "p.h");
}

#[test]
fn mixed_visibility_keeps_declaration_order() {
    let mut t = table();
    let rec = t.add_record(DeclId::GLOBAL, "Mixed", RecordTag::Struct, None).unwrap();
    let layout = [
        ("a", Access::Public),
        ("b", Access::Private),
        ("c", Access::Public),
        ("d", Access::Protected),
        ("e", Access::Public),
    ];
    for (name, access) in layout {
        let m = t.add_data_member(rec, name, TypeId::INT, false, None).unwrap();
        t.set_access(m, access).unwrap();
    }

    let inside = Reflector::new(&t).in_context(rec);
    let meta = inside.reflect(rec).unwrap();
    assert_eq!(
        names(&inside, &inside.get_data_members(meta).unwrap()),
        vec!["a", "b", "c", "d", "e"]
    );
    assert_eq!(
        names(&inside, &inside.get_public_data_members(meta).unwrap()),
        vec!["a", "c", "e"]
    );
}

#[test]
fn single_hop_alias() {
    let mut t = table();
    let b = t.add_type_alias(DeclId::GLOBAL, "B", TypeId::INT, None).unwrap();
    let b_ty = t.alias_type(b).unwrap();
    t.add_type_alias(DeclId::GLOBAL, "A", b_ty, None).unwrap();

    let r = Reflector::new(&t);
    let a = r.reflect("A").unwrap();
    let target = r.get_aliased(a).unwrap();
    assert!(satisfies(&target, Concept::Alias));
    assert!(r.reflects_same(target, r.reflect("B").unwrap()));
    assert_eq!(r.get_base_name(target).unwrap(), "B");
    assert!(!r.reflects_same(target, r.reflect("int").unwrap()));
}

#[test]
fn base_name_canonicalization() {
    let mut t = table();
    t.add_type_alias(DeclId::GLOBAL, "foo", TypeId::INT, None).unwrap();
    let tpl = t
        .add_class_template(DeclId::GLOBAL, "Container", RecordTag::Class, None)
        .unwrap();
    let (inst, _) = t.instantiate(tpl, vec![TemplateArg::Type(TypeId::INT)]).unwrap();

    let r = Reflector::new(&t);
    assert_eq!(r.get_base_name(r.reflect("unsigned").unwrap()).unwrap(), "unsigned int");
    assert_eq!(r.get_base_name(r.reflect("foo").unwrap()).unwrap(), "foo");

    let container = r.reflect(inst).unwrap();
    assert_eq!(r.get_base_name(container).unwrap(), "Container");
    assert_eq!(r.get_display_name(container).unwrap(), "Container<int>");
}

#[test]
fn template_instantiations_are_distinct() {
    let mut t = table();
    let tpl = t
        .add_class_template(DeclId::GLOBAL, "Array", RecordTag::Struct, None)
        .unwrap();
    let (four, _) = t
        .instantiate(tpl, vec![TemplateArg::Type(TypeId::DOUBLE), TemplateArg::Value(4)])
        .unwrap();
    let (eight, _) = t
        .instantiate(tpl, vec![TemplateArg::Type(TypeId::DOUBLE), TemplateArg::Value(8)])
        .unwrap();
    let (again, fresh) = t
        .instantiate(tpl, vec![TemplateArg::Type(TypeId::DOUBLE), TemplateArg::Value(4)])
        .unwrap();
    assert_eq!(again, four);
    assert!(!fresh);

    let r = Reflector::new(&t);
    let (a, b) = (r.reflect(four).unwrap(), r.reflect(eight).unwrap());
    assert!(!r.reflects_same(a, b));
    assert_eq!(r.get_base_name(a).unwrap(), r.get_base_name(b).unwrap());
    assert_eq!(r.get_display_name(a).unwrap(), "Array<double, 4>");
    assert_eq!(r.get_display_name(b).unwrap(), "Array<double, 8>");
    assert_eq!(a.kind(), MetaKind::Record);
}

#[test]
fn identity_is_stable_across_reflections() {
    let (t, p, x, _) = class_p();
    let first = Reflector::new(&t);
    let second = Reflector::with_options(
        &t,
        ReflectOptions::new().with_display_style(DisplayStyle::Unqualified),
    );
    assert_eq!(first.reflect(p).unwrap(), second.reflect(p).unwrap());
    assert_eq!(first.reflect("P").unwrap(), first.reflect(p).unwrap());

    let listed = first.get_public_data_members(first.reflect(p).unwrap()).unwrap();
    assert!(first.reflects_same(listed.element(0).unwrap(), first.reflect(x).unwrap()));
}

#[test]
fn nested_scopes_walk_outwards() {
    let mut t = table();
    let outer = t.add_namespace(DeclId::GLOBAL, "outer", None).unwrap();
    let inner = t.add_namespace(outer, "inner", None).unwrap();
    let rec = t.add_record(inner, "Leaf", RecordTag::Struct, None).unwrap();

    let r = Reflector::new(&t);
    let mut current = r.reflect(rec).unwrap();
    let mut chain = Vec::new();
    while satisfies(&current, Concept::ScopeMember) {
        current = r.get_scope(current).unwrap();
        chain.push(current.kind());
    }
    assert_eq!(
        chain,
        vec![MetaKind::Namespace, MetaKind::Namespace, MetaKind::GlobalScope]
    );
    assert_eq!(r.get_display_name(r.reflect(rec).unwrap()).unwrap(), "outer::inner::Leaf");
}

#[test]
fn errors_become_diagnostics() {
    let (t, _, _, _) = class_p();
    let r = Reflector::new(&t);
    let call_site = SourceLoc::new(t.interner().intern("main.cpp"), 10, 5);
    let mut queue = DiagnosticQueue::new();

    let failures = [
        r.get_aliased(r.reflect("P").unwrap()).unwrap_err(),
        r.reflect("Q").unwrap_err(),
        r.get_source_line(r.reflect("int").unwrap()).unwrap_err(),
    ];
    for err in &failures {
        queue.emit_error(err.to_diagnostic(Some(call_site)));
    }
    let diags = queue.flush();
    let codes: Vec<_> = diags.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E7001, ErrorCode::E7003, ErrorCode::E7005]);
    assert!(diags.iter().all(|d| d.primary_loc() == Some(call_site)));
    let rendered = diags[0].render(t.interner());
    assert!(rendered.starts_with("error[E7001]: `get_aliased` requires Alias, found Class"));
    assert!(rendered.contains("main.cpp:10:5"));
}

#[test]
fn unpack_round_trip() {
    let (t, p, x, y) = class_p();
    let r = Reflector::new(&t).in_context(p);
    let members = r.get_data_members(r.reflect(p).unwrap()).unwrap();

    let (first, second) = members.unpack::<(Metaobject, Metaobject)>().unwrap();
    assert_eq!((first.decl(), second.decl()), (Some(x), Some(y)));
    let rebuilt: mirror_reflect::ObjectSequence = [first, second].into_iter().collect();
    assert_eq!(rebuilt, members);
    assert!(matches!(
        members.unpack::<[Metaobject; 3]>(),
        Err(ReflectError::ArityMismatch {
            expected: 3,
            found: 2
        })
    ));
}
