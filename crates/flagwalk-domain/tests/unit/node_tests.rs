//! Field descriptor tests

use crate::fixtures::*;
use flagwalk_domain::{Field, Node, Shared, TypeInfo, shared};
use std::rc::Rc;

#[derive(Default)]
struct Manual {
    count: u32,
    conn: Option<Shared<Conn>>,
    inner: Option<Shared<Plain>>,
}

impl Node for Manual {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::value("count", &mut self.count),
            Field::shared("conn", &mut self.conn),
            Field::embedded("inner", &mut self.inner),
        ]
    }
}

#[test]
fn test_fields_are_reported_in_declaration_order() {
    let mut node = Manual::default();

    let names: Vec<&str> = node.fields().iter().map(Field::name).collect();

    assert_eq!(names, vec!["count", "conn", "inner"]);
}

#[test]
fn test_field_descriptors_carry_kind_and_type() {
    let mut node = Manual::default();
    let fields = node.fields();

    assert!(!fields[0].is_shared());
    assert_eq!(fields[0].type_info(), TypeInfo::of::<u32>());

    assert!(fields[1].is_shared());
    assert!(!fields[1].is_embedded());
    assert_eq!(fields[1].type_info(), TypeInfo::of::<Conn>());

    assert!(fields[2].is_shared());
    assert!(fields[2].is_embedded());
    assert_eq!(fields[2].type_info(), TypeInfo::of::<Plain>());
}

#[test]
fn test_macro_generated_fields_match_manual_listing() {
    let mut session = Session::default();

    let fields = session.fields();

    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].name(), "conn");
    assert!(fields[0].is_shared());
    assert_eq!(fields[1].name(), "user");
    assert!(!fields[1].is_shared());
}

#[test]
fn test_type_info_is_reported_through_trait_objects() {
    let mut conn = Conn::default();
    let node: &mut dyn Node = &mut conn;

    assert_eq!(node.type_info(), TypeInfo::of::<Conn>());
    assert_eq!(node.type_info().to_string(), std::any::type_name::<Conn>());
    assert!(node.downcast_mut::<Conn>().is_some());
    assert!(node.downcast_mut::<Plain>().is_none());
}

#[test]
fn test_shared_wraps_a_single_instance() {
    let conn = shared(Conn::default());
    let alias = Rc::clone(&conn);

    alias.borrow_mut().retries = 5;

    assert_eq!(conn.borrow().retries, 5);
}
