//! A small program to reflect over in unit tests.

#![allow(clippy::unwrap_used)]

use mirror_ir::{DeclId, SharedInterner, SourceLoc, TypeId};
use mirror_sema::{Access, Cv, DeclTable, RecordTag, TemplateArg};

/// Declarations of the test program, by name.
pub struct Program {
    pub table: DeclTable,
    pub geo: DeclId,
    pub point: DeclId,
    pub point_x: DeclId,
    pub point_y: DeclId,
    pub shape: DeclId,
    pub kind: DeclId,
    pub kind_circle: DeclId,
    pub kind_square: DeclId,
    pub coord: DeclId,
    pub id: DeclId,
    pub origin: DeclId,
    pub cache: DeclId,
    pub count: DeclId,
    pub hidden: DeclId,
    pub draw: DeclId,
    pub inspector: DeclId,
    pub disk: DeclId,
    pub radius: DeclId,
    pub color: DeclId,
    pub red: DeclId,
    pub green: DeclId,
    pub foo: DeclId,
    pub pi: DeclId,
    pub counter: DeclId,
    pub bits: DeclId,
    pub container: DeclId,
    pub container_int: DeclId,
    pub b: DeclId,
    pub a: DeclId,
    pub g: DeclId,
    /// `const foo*`
    pub const_foo_ptr: TypeId,
    /// `const int*`
    pub const_int_ptr: TypeId,
}

/// Line `line`, column 1 of `shapes.h`.
pub fn loc(table: &DeclTable, line: u32) -> Option<SourceLoc> {
    let file = table.interner().intern("shapes.h");
    Some(SourceLoc::new(file, line, 1))
}

/// ```text
///  1 namespace geo {
///  2   struct Point { double x; double y; };
///  5   class Shape {
///  6   public:
///  7     enum Kind { Circle, Square };
///  8     using Coord = double;
///  9     int id;
/// 10   protected:
/// 11     Point origin;
/// 12   private:
/// 13     struct Cache {};
/// 14     static int count;
/// 15     int hidden;
/// 16     void draw();
/// 17     friend struct Inspector;
/// 18   };
/// 19   struct Inspector {};
/// 20   class Disk : public virtual Shape, Point { double radius; };
/// 22   enum class Color : unsigned char { Red = 1, Green = 2 };
/// 23   using foo = int;
/// 24   const double pi;
/// 25   int counter;
/// 26   union Bits { int i; float f; };
/// 27   template<class T> class Container { public: T value; };
/// 28   Container<int>;
/// 29 }
/// 30 using B = int;
/// 31 using A = B;
/// 32 namespace g = geo;
/// ```
pub fn program() -> Program {
    let mut t = DeclTable::new(SharedInterner::new());

    let geo = t.add_namespace(DeclId::GLOBAL, "geo", loc(&t, 1)).unwrap();
    let point = t.add_record(geo, "Point", RecordTag::Struct, loc(&t, 2)).unwrap();
    let point_x = t.add_data_member(point, "x", TypeId::DOUBLE, false, loc(&t, 2)).unwrap();
    let point_y = t.add_data_member(point, "y", TypeId::DOUBLE, false, loc(&t, 2)).unwrap();
    let point_ty = t.decl_type(point).unwrap();

    let shape = t.add_record(geo, "Shape", RecordTag::Class, loc(&t, 5)).unwrap();
    let kind = t.add_enum(shape, "Kind", false, TypeId::INT, loc(&t, 7)).unwrap();
    t.set_access(kind, Access::Public).unwrap();
    let kind_circle = t.add_enumerator(kind, "Circle", 0, loc(&t, 7)).unwrap();
    let kind_square = t.add_enumerator(kind, "Square", 1, loc(&t, 7)).unwrap();
    let coord = t.add_type_alias(shape, "Coord", TypeId::DOUBLE, loc(&t, 8)).unwrap();
    t.set_access(coord, Access::Public).unwrap();
    let id = t.add_data_member(shape, "id", TypeId::INT, false, loc(&t, 9)).unwrap();
    t.set_access(id, Access::Public).unwrap();
    let origin = t.add_data_member(shape, "origin", point_ty, false, loc(&t, 11)).unwrap();
    t.set_access(origin, Access::Protected).unwrap();
    let cache = t.add_record(shape, "Cache", RecordTag::Struct, loc(&t, 13)).unwrap();
    let count = t.add_data_member(shape, "count", TypeId::INT, true, loc(&t, 14)).unwrap();
    let hidden = t.add_data_member(shape, "hidden", TypeId::INT, false, loc(&t, 15)).unwrap();
    let draw = t.add_function(shape, "draw", false, loc(&t, 16)).unwrap();

    let inspector = t.add_record(geo, "Inspector", RecordTag::Struct, loc(&t, 19)).unwrap();
    t.add_friend(shape, inspector).unwrap();

    let shape_ty = t.decl_type(shape).unwrap();
    let disk = t.add_record(geo, "Disk", RecordTag::Class, loc(&t, 20)).unwrap();
    t.add_base(disk, shape_ty, Some(Access::Public), true, loc(&t, 20)).unwrap();
    t.add_base(disk, point_ty, None, false, loc(&t, 20)).unwrap();
    let radius = t.add_data_member(disk, "radius", TypeId::DOUBLE, false, loc(&t, 20)).unwrap();

    let color = t.add_enum(geo, "Color", true, TypeId::UNSIGNED_CHAR, loc(&t, 22)).unwrap();
    let red = t.add_enumerator(color, "Red", 1, loc(&t, 22)).unwrap();
    let green = t.add_enumerator(color, "Green", 2, loc(&t, 22)).unwrap();

    let foo = t.add_type_alias(geo, "foo", TypeId::INT, loc(&t, 23)).unwrap();
    let const_double = t.qualified(TypeId::DOUBLE, Cv::CONST);
    let pi = t.add_variable(geo, "pi", const_double, true, loc(&t, 24)).unwrap();
    let counter = t.add_variable(geo, "counter", TypeId::INT, false, loc(&t, 25)).unwrap();

    let bits = t.add_record(geo, "Bits", RecordTag::Union, loc(&t, 26)).unwrap();
    t.add_data_member(bits, "i", TypeId::INT, false, loc(&t, 26)).unwrap();
    t.add_data_member(bits, "f", TypeId::FLOAT, false, loc(&t, 26)).unwrap();

    let container = t.add_class_template(geo, "Container", RecordTag::Class, loc(&t, 27)).unwrap();
    let (container_int, fresh) = t.instantiate(container, vec![TemplateArg::Type(TypeId::INT)]).unwrap();
    assert!(fresh);
    let value = t.add_data_member(container_int, "value", TypeId::INT, false, loc(&t, 27)).unwrap();
    t.set_access(value, Access::Public).unwrap();

    let b = t.add_type_alias(DeclId::GLOBAL, "B", TypeId::INT, loc(&t, 30)).unwrap();
    let b_ty = t.alias_type(b).unwrap();
    let a = t.add_type_alias(DeclId::GLOBAL, "A", b_ty, loc(&t, 31)).unwrap();
    let g = t.add_namespace_alias(DeclId::GLOBAL, "g", geo, loc(&t, 32)).unwrap();

    let foo_ty = t.alias_type(foo).unwrap();
    let const_foo = t.qualified(foo_ty, Cv::CONST);
    let const_foo_ptr = t.pointer_to(const_foo);
    let const_int = t.qualified(TypeId::INT, Cv::CONST);
    let const_int_ptr = t.pointer_to(const_int);

    Program {
        table: t,
        geo,
        point,
        point_x,
        point_y,
        shape,
        kind,
        kind_circle,
        kind_square,
        coord,
        id,
        origin,
        cache,
        count,
        hidden,
        draw,
        inspector,
        disk,
        radius,
        color,
        red,
        green,
        foo,
        pi,
        counter,
        bits,
        container,
        container_int,
        b,
        a,
        g,
        const_foo_ptr,
        const_int_ptr,
    }
}
