//! Datacenter flag tests

use clap::Command;
use flagwalk::domain::Error;
use flagwalk::infrastructure::AppConfig;
use flagwalk::{ClientFlag, DatacenterFlag, Flag, flag_capability};
use std::rc::Rc;

#[test]
fn test_path_defaults_to_root() {
    let flag = DatacenterFlag::default();

    assert_eq!(flag.path(), "/");
    assert!(flag.name().is_none());
}

#[test]
fn test_walk_wires_client_before_datacenter() {
    let capability = flag_capability();
    let mut flag = DatacenterFlag::default();
    let mut order = Vec::new();

    flagwalk::domain::walk(&mut flag, &capability, |node| {
        order.push(node.type_info().type_name);
        Ok::<(), Error>(())
    })
    .expect("walk");

    assert_eq!(
        order,
        vec![
            std::any::type_name::<ClientFlag>(),
            std::any::type_name::<DatacenterFlag>()
        ]
    );
    assert!(flag.client().is_some());
}

#[test]
fn test_process_records_name() {
    let capability = flag_capability();
    let mut flag = DatacenterFlag::default();
    let mut args = Vec::new();
    flagwalk::domain::walk(&mut flag, &capability, |node| {
        if let Some(flag) = capability.view(node) {
            args.extend(flag.register());
        }
        Ok::<(), Error>(())
    })
    .expect("bind");
    let matches = Command::new("test")
        .args(args)
        .try_get_matches_from(["test", "-u", "https://vc.example/sdk", "--dc", "east"])
        .expect("parse");

    let config = AppConfig::default();
    flagwalk::domain::walk(&mut flag, &capability, |node| {
        if let Some(flag) = capability.view(node) {
            flag.process(&matches, &config)?;
        }
        Ok::<(), Error>(())
    })
    .expect("process");

    assert_eq!(flag.name(), Some("east"));
    assert_eq!(flag.path(), "/east");
}

#[test]
fn test_process_requires_bound_client() {
    let mut flag = DatacenterFlag::default();
    let matches = Command::new("test")
        .args(flag.register())
        .try_get_matches_from(["test"])
        .expect("parse");

    let result = flag.process(&matches, &AppConfig::default());

    assert!(matches!(result, Err(Error::Infrastructure { .. })));
}

#[test]
fn test_rewalk_keeps_wired_client() {
    let capability = flag_capability();
    let mut flag = DatacenterFlag::default();
    flagwalk::domain::walk(&mut flag, &capability, |_| Ok::<(), Error>(())).expect("first walk");
    let wired = flag.client().cloned().expect("client wired");

    flagwalk::domain::walk(&mut flag, &capability, |_| Ok::<(), Error>(())).expect("second walk");

    assert!(Rc::ptr_eq(&wired, flag.client().expect("still wired")));
}

#[test]
fn test_flag_capability_lists_both_flags() {
    let capability = flag_capability();

    assert_eq!(capability.len(), 2);
    assert!(capability.implements(std::any::TypeId::of::<ClientFlag>()));
    assert!(capability.implements(std::any::TypeId::of::<DatacenterFlag>()));
}
