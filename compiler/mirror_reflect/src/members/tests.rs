use crate::test_helpers::{program, Program};
use crate::{Identity, MetaKind, Metaobject, ObjectSequence, ReflectError, Reflector};
use mirror_ir::DeclId;
use pretty_assertions::assert_eq;

fn decls(seq: &ObjectSequence) -> Vec<DeclId> {
    seq.iter().filter_map(|m| m.decl()).collect()
}

fn shape(r: &Reflector<'_>, p: &Program) -> Metaobject {
    r.reflect(p.shape).unwrap()
}

#[test]
fn full_listing_from_inside() {
    let p = program();
    let r = Reflector::new(&p.table).in_context(p.shape);
    let members = r.get_data_members(shape(&r, &p)).unwrap();
    assert_eq!(decls(&members), vec![p.id, p.origin, p.count, p.hidden]);
    assert!(members.iter().all(|m| m.kind() == MetaKind::DataMember));

    let types = r.get_member_types(shape(&r, &p)).unwrap();
    assert_eq!(decls(&types), vec![p.kind, p.coord, p.cache]);
    assert!(types.iter().all(|m| m.kind() == MetaKind::MemberType));
}

#[test]
fn full_listing_from_nested_and_friend() {
    let mut p = program();
    let inner = p
        .table
        .add_record(p.cache, "Line", mirror_sema::RecordTag::Struct, None)
        .unwrap();
    for ctx in [p.cache, inner, p.inspector] {
        let r = Reflector::new(&p.table).in_context(ctx);
        let members = r.get_data_members(shape(&r, &p)).unwrap();
        assert_eq!(members.size(), 4, "from {}", p.table.name_str(ctx));
    }
}

#[test]
fn full_listing_from_outside_is_rejected() {
    let p = program();
    for ctx in [DeclId::GLOBAL, p.geo, p.disk] {
        let r = Reflector::new(&p.table).in_context(ctx);
        assert_eq!(
            r.get_data_members(shape(&r, &p)),
            Err(ReflectError::InaccessibleMembers {
                operation: "get_data_members",
                record: "geo::Shape".to_owned(),
            })
        );
        assert!(r.get_member_types(shape(&r, &p)).is_err());
    }
}

#[test]
fn full_listing_needs_access_even_for_structs() {
    let p = program();
    let r = Reflector::new(&p.table);
    let point = r.reflect(p.point).unwrap();
    assert!(r.get_data_members(point).is_err());
    assert_eq!(
        decls(&r.get_public_data_members(point).unwrap()),
        vec![p.point_x, p.point_y]
    );
}

#[test]
fn public_listing_is_context_free() {
    let p = program();
    let contexts = [DeclId::GLOBAL, p.geo, p.shape, p.cache, p.inspector, p.disk];
    for ctx in contexts {
        let r = Reflector::new(&p.table).in_context(ctx);
        assert_eq!(decls(&r.get_public_data_members(shape(&r, &p)).unwrap()), vec![p.id]);
        assert_eq!(
            decls(&r.get_public_member_types(shape(&r, &p)).unwrap()),
            vec![p.kind, p.coord]
        );
    }
}

#[test]
fn accessible_listing_follows_access_rules() {
    let p = program();
    let accessible = |ctx| {
        let r = Reflector::new(&p.table).in_context(ctx);
        decls(&r.get_accessible_data_members(shape(&r, &p)).unwrap())
    };

    assert_eq!(accessible(DeclId::GLOBAL), vec![p.id]);
    assert_eq!(accessible(p.geo), vec![p.id]);
    assert_eq!(accessible(p.disk), vec![p.id, p.origin], "derived sees protected");
    assert_eq!(accessible(p.radius), vec![p.id, p.origin]);
    assert_eq!(accessible(p.inspector), vec![p.id, p.origin, p.count, p.hidden]);
    assert_eq!(accessible(p.shape), vec![p.id, p.origin, p.count, p.hidden]);
}

#[test]
fn accessible_member_types() {
    let p = program();
    let outside = Reflector::new(&p.table);
    assert_eq!(
        decls(&outside.get_accessible_member_types(shape(&outside, &p)).unwrap()),
        vec![p.kind, p.coord]
    );
    let friend = outside.in_context(p.inspector);
    assert_eq!(
        decls(&friend.get_accessible_member_types(shape(&friend, &p)).unwrap()),
        vec![p.kind, p.coord, p.cache]
    );
}

#[test]
fn functions_are_never_listed() {
    let p = program();
    let r = Reflector::new(&p.table).in_context(p.shape);
    let all: Vec<_> = decls(&r.get_data_members(shape(&r, &p)).unwrap())
        .into_iter()
        .chain(decls(&r.get_member_types(shape(&r, &p)).unwrap()))
        .collect();
    assert!(!all.contains(&p.draw));
}

#[test]
fn listings_inherit_the_context() {
    let p = program();
    let r = Reflector::new(&p.table).in_context(p.inspector);
    let members = r.get_public_data_members(shape(&r, &p)).unwrap();
    assert!(members.iter().all(|m| m.context() == p.inspector));
}

#[test]
fn unions_and_instantiations() {
    let p = program();
    let r = Reflector::new(&p.table).in_context(p.bits);
    let bits = r.reflect(p.bits).unwrap();
    let names: Vec<_> = r
        .get_data_members(bits)
        .unwrap()
        .iter()
        .map(|m| r.get_base_name(m).unwrap())
        .collect();
    assert_eq!(names, vec!["i", "f"]);

    let container = r.reflect(p.container_int).unwrap();
    assert_eq!(r.get_public_data_members(container).unwrap().size(), 1);
}

#[test]
fn listing_requires_a_record() {
    let p = program();
    let r = Reflector::new(&p.table);
    assert!(matches!(
        r.get_public_data_members(r.reflect(p.geo).unwrap()),
        Err(ReflectError::ConceptViolation {
            operation: "get_public_data_members",
            found: MetaKind::Namespace,
            ..
        })
    ));
    // A member type must be turned into its record first.
    let cache = r.reflect(p.cache).unwrap();
    assert!(r.get_public_data_members(cache).is_err());
    let record = r.get_member_entity(cache).unwrap();
    assert!(r.get_public_data_members(record).unwrap().is_empty());
}

// Bases

#[test]
fn base_listings() {
    let p = program();
    let inside = Reflector::new(&p.table).in_context(p.disk);
    let disk = inside.reflect(p.disk).unwrap();
    let all = inside.get_base_classes(disk).unwrap();
    assert_eq!(all.size(), 2);
    assert_eq!(
        all.element(1).unwrap().identity(),
        Identity::Base {
            derived: p.disk,
            index: 1
        }
    );

    let outside = Reflector::new(&p.table);
    let disk = outside.reflect(p.disk).unwrap();
    assert!(matches!(
        outside.get_base_classes(disk),
        Err(ReflectError::InaccessibleMembers { .. })
    ));
    let public = outside.get_public_base_classes(disk).unwrap();
    assert_eq!(public.size(), 1);
    assert_eq!(public, outside.get_accessible_base_classes(disk).unwrap());
    assert_eq!(public.element(0).unwrap().identity(), all.element(0).unwrap().identity());
}

#[test]
fn unions_have_no_bases() {
    let p = program();
    let r = Reflector::new(&p.table).in_context(p.bits);
    let bits = r.reflect(p.bits).unwrap();
    assert!(matches!(
        r.get_base_classes(bits),
        Err(ReflectError::ConceptViolation {
            found: MetaKind::Union,
            ..
        })
    ));
}

#[test]
fn records_without_bases() {
    let p = program();
    let r = Reflector::new(&p.table);
    let shape = r.reflect(p.shape).unwrap();
    assert!(r.get_public_base_classes(shape).unwrap().is_empty());
}

#[test]
fn listings_use_the_metaobject_context() {
    let p = program();
    let outside = Reflector::new(&p.table);
    let inside = outside.in_context(p.shape);
    let from_outside = shape(&outside, &p);
    let from_inside = shape(&inside, &p);

    assert!(matches!(
        inside.get_data_members(from_outside),
        Err(ReflectError::InaccessibleMembers { .. })
    ));
    assert_eq!(
        decls(&inside.get_accessible_data_members(from_outside).unwrap()),
        vec![p.id]
    );

    assert_eq!(outside.get_data_members(from_inside).unwrap().size(), 4);
    assert_eq!(
        decls(&outside.get_accessible_data_members(from_inside).unwrap()),
        vec![p.id, p.origin, p.count, p.hidden]
    );
}
