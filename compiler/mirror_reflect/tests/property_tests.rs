//! Property-based tests for member enumeration.
//!
//! Random records (members of random category and access) are reflected
//! from several contexts to check:
//! 1. Order: every listing is the declaration order, filtered
//! 2. Encapsulation: public listings never depend on the context, and
//!    unrelated contexts see exactly the public members
//! 3. Identity: listed members are the entities reflected directly
//! 4. Unpack round-trips preserve elements and order

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use mirror_ir::{DeclId, SharedInterner, TypeId};
use mirror_reflect::{Metaobject, ObjectSequence, Reflector};
use mirror_sema::{Access, DeclTable, RecordTag};
use proptest::prelude::*;

#[derive(Copy, Clone, Debug)]
enum Category {
    Data,
    Static,
    Type,
    Function,
}

fn category_strategy() -> impl Strategy<Value = Category> {
    prop_oneof![
        4 => Just(Category::Data),
        1 => Just(Category::Static),
        2 => Just(Category::Type),
        1 => Just(Category::Function),
    ]
}

fn access_strategy() -> impl Strategy<Value = Access> {
    prop_oneof![
        Just(Access::Public),
        Just(Access::Protected),
        Just(Access::Private),
    ]
}

fn tag_strategy() -> impl Strategy<Value = RecordTag> {
    prop_oneof![Just(RecordTag::Class), Just(RecordTag::Struct)]
}

/// A record, its members in declaration order, and the contexts to
/// reflect from.
struct Generated {
    table: DeclTable,
    record: DeclId,
    /// (member, access, is data member)
    members: Vec<(DeclId, Access, bool)>,
    friend: DeclId,
    outsider: DeclId,
}

fn build(tag: RecordTag, layout: &[(Category, Access)]) -> Generated {
    let mut t = DeclTable::new(SharedInterner::new());
    let ns = t.add_namespace(DeclId::GLOBAL, "gen", None).unwrap();
    let record = t.add_record(ns, "Subject", tag, None).unwrap();
    let friend = t.add_record(ns, "Friend", RecordTag::Struct, None).unwrap();
    let outsider = t.add_record(ns, "Outsider", RecordTag::Struct, None).unwrap();
    t.add_friend(record, friend).unwrap();

    let mut members = Vec::new();
    for (i, &(category, access)) in layout.iter().enumerate() {
        let (id, listed) = match category {
            Category::Data => (
                t.add_data_member(record, &format!("m{i}"), TypeId::INT, false, None).unwrap(),
                Some(true),
            ),
            Category::Static => (
                t.add_data_member(record, &format!("s{i}"), TypeId::LONG, true, None).unwrap(),
                Some(true),
            ),
            Category::Type => (
                t.add_record(record, &format!("T{i}"), RecordTag::Struct, None).unwrap(),
                Some(false),
            ),
            Category::Function => (
                t.add_function(record, &format!("f{i}"), false, None).unwrap(),
                None,
            ),
        };
        t.set_access(id, access).unwrap();
        if let Some(is_data) = listed {
            members.push((id, access, is_data));
        }
    }

    Generated {
        table: t,
        record,
        members,
        friend,
        outsider,
    }
}

fn decls(seq: &ObjectSequence) -> Vec<DeclId> {
    seq.iter().filter_map(|m| m.decl()).collect()
}

fn expected(g: &Generated, data: bool, keep: impl Fn(Access) -> bool) -> Vec<DeclId> {
    g.members
        .iter()
        .filter(|&&(_, access, is_data)| is_data == data && keep(access))
        .map(|&(id, _, _)| id)
        .collect()
}

fn layout_strategy() -> impl Strategy<Value = (RecordTag, Vec<(Category, Access)>)> {
    (
        tag_strategy(),
        prop::collection::vec((category_strategy(), access_strategy()), 0..16),
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_listings_preserve_declaration_order((tag, layout) in layout_strategy()) {
        let g = build(tag, &layout);
        let r = Reflector::new(&g.table).in_context(g.record);
        let subject = r.reflect(g.record).unwrap();

        prop_assert_eq!(decls(&r.get_data_members(subject).unwrap()), expected(&g, true, |_| true));
        prop_assert_eq!(decls(&r.get_member_types(subject).unwrap()), expected(&g, false, |_| true));
        prop_assert_eq!(
            decls(&r.get_public_data_members(subject).unwrap()),
            expected(&g, true, |a| a == Access::Public)
        );
    }

    #[test]
    fn prop_public_listing_is_context_free((tag, layout) in layout_strategy()) {
        let g = build(tag, &layout);
        let contexts = [DeclId::GLOBAL, g.record, g.friend, g.outsider];
        let listings: Vec<_> = contexts
            .iter()
            .map(|&ctx| {
                let r = Reflector::new(&g.table).in_context(ctx);
                let subject = r.reflect(g.record).unwrap();
                (
                    decls(&r.get_public_data_members(subject).unwrap()),
                    decls(&r.get_public_member_types(subject).unwrap()),
                )
            })
            .collect();
        for listing in &listings[1..] {
            prop_assert_eq!(listing, &listings[0]);
        }
    }

    #[test]
    fn prop_outsiders_see_only_public((tag, layout) in layout_strategy()) {
        let g = build(tag, &layout);
        for ctx in [DeclId::GLOBAL, g.outsider] {
            let r = Reflector::new(&g.table).in_context(ctx);
            let subject = r.reflect(g.record).unwrap();
            prop_assert_eq!(
                r.get_accessible_data_members(subject).unwrap(),
                r.get_public_data_members(subject).unwrap()
            );
            prop_assert_eq!(
                r.get_accessible_member_types(subject).unwrap(),
                r.get_public_member_types(subject).unwrap()
            );
            prop_assert!(r.get_data_members(subject).is_err());
        }
    }

    #[test]
    fn prop_friends_see_everything((tag, layout) in layout_strategy()) {
        let g = build(tag, &layout);
        let r = Reflector::new(&g.table).in_context(g.friend);
        let subject = r.reflect(g.record).unwrap();
        prop_assert_eq!(
            r.get_accessible_data_members(subject).unwrap(),
            r.get_data_members(subject).unwrap()
        );
    }

    #[test]
    fn prop_listed_members_are_the_reflected_entities((tag, layout) in layout_strategy()) {
        let g = build(tag, &layout);
        let r = Reflector::new(&g.table).in_context(g.record);
        let subject = r.reflect(g.record).unwrap();
        for member in &r.get_data_members(subject).unwrap() {
            let direct = r.reflect(member.decl().unwrap()).unwrap();
            prop_assert!(r.reflects_same(member, direct));
            prop_assert_eq!(member, direct);
            prop_assert_eq!(r.reflect(member.decl().unwrap()).unwrap(), direct);
        }
    }

    #[test]
    fn prop_unpack_round_trip((tag, layout) in layout_strategy()) {
        let g = build(tag, &layout);
        let r = Reflector::new(&g.table).in_context(g.record);
        let members = r.get_data_members(r.reflect(g.record).unwrap()).unwrap();

        let unpacked = members.unpack::<Vec<Metaobject>>().unwrap();
        prop_assert_eq!(unpacked.len(), members.size());
        let rebuilt: ObjectSequence = unpacked.into_iter().collect();
        prop_assert_eq!(&rebuilt, &members);

        if members.size() == 3 {
            let [a, b, c] = members.unpack::<[Metaobject; 3]>().unwrap();
            prop_assert_eq!(vec![a, b, c], members.iter().collect::<Vec<_>>());
        } else {
            prop_assert!(members.unpack::<[Metaobject; 3]>().is_err());
        }
    }
}
