//! Option-group graph walker
//!
//! [`walk`] descends depth-first from a root node. Every reference slot
//! whose type is part of the [`Capability`] is pointed at one canonical
//! instance per type. That is the first instance of the type the caller
//! already placed anywhere in the graph (declaration order, depth first),
//! or a fresh `T::default()` when there is none. A canonical instance is
//! walked as soon as it is registered, before the remaining fields of the
//! node that introduced it, and the visitor runs on each node after its own
//! fields are wired.
//!
//! ```text
//! Root { a: Conn, dc: Datacenter { client: Conn } }
//!
//! visit order:  Conn, Datacenter, Root
//! afterwards:   Root.a and Datacenter.client point at the same Conn
//! ```

use crate::capability::Capability;
use crate::error::SchemaError;
use crate::node::{Field, FieldKind, Instance, Node, TypeInfo};
use std::any::TypeId;
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace, warn};

/// Walk the graph rooted at `root`, sharing every capability instance and
/// calling `visit` once per distinct node.
///
/// The first error returned by `visit` stops the walk and is returned
/// unchanged; slots wired before that point stay wired.
///
/// # Panics
///
/// Panics with the [`SchemaError`] message when the schema holds a
/// capability type by value or embeds it. Such a schema can never be wired
/// correctly, so the defect is reported before any visitor runs. Use
/// [`validate`] to check a schema without panicking.
pub fn walk<C, E, F>(root: &mut dyn Node, capability: &Capability<C>, visit: F) -> Result<(), E>
where
    C: ?Sized + 'static,
    F: FnMut(&mut dyn Node) -> Result<(), E>,
{
    if let Err(defect) = validate(root, capability) {
        panic!("{defect}");
    }

    let mut seeds = Seeds::default();
    seeds.collect(root, capability);

    let mut walker = Walker {
        capability,
        seeds: seeds.first,
        visited: HashMap::new(),
        visit,
    };
    walker.step(root)
}

/// Check the schema reachable from `root` for structural defects.
///
/// Fields of the root are checked on the live instance; every capability
/// type reachable through a reference slot is checked once, on a
/// `Default` prototype. The first defect in declaration order is returned.
pub fn validate<C>(root: &mut dyn Node, capability: &Capability<C>) -> Result<(), SchemaError>
where
    C: ?Sized + 'static,
{
    let mut checked = HashSet::new();
    validate_node(root, capability, &mut checked)
}

fn validate_node<C>(
    node: &mut dyn Node,
    capability: &Capability<C>,
    checked: &mut HashSet<TypeId>,
) -> Result<(), SchemaError>
where
    C: ?Sized + 'static,
{
    let owner = node.type_info();
    for field in node.fields() {
        if !classify(owner, &field, capability)? {
            continue;
        }
        if !checked.insert(field.type_info.type_id) {
            continue;
        }
        if let FieldKind::Shared(slot) = &field.kind {
            let mut prototype = slot.prototype();
            validate_node(prototype.as_mut(), capability, checked)?;
        }
    }
    Ok(())
}

/// Decide whether `field` is a capability reference slot.
///
/// `Ok(false)` means ordinary data the walker leaves alone.
fn classify<C>(owner: TypeInfo, field: &Field<'_>, capability: &Capability<C>) -> Result<bool, SchemaError>
where
    C: ?Sized + 'static,
{
    let type_id = field.type_info.type_id;
    if !capability.implements(type_id) {
        // A reference slot listed as a plain value would escape sharing
        if !field.is_shared() && capability.is_reference(type_id) {
            return Err(SchemaError::NotShared {
                field: field.name,
                owner: owner.type_name,
            });
        }
        return Ok(false);
    }
    if !field.is_shared() {
        return Err(SchemaError::NotShared {
            field: field.name,
            owner: owner.type_name,
        });
    }
    if field.embedded {
        return Err(SchemaError::Embedded {
            field: field.name,
            owner: owner.type_name,
        });
    }
    Ok(true)
}

/// Instances the caller placed in the graph before the walk.
///
/// The first instance per type in declaration order, depth first, is the
/// canonical one even when the walker reaches an unset slot of that type
/// earlier.
#[derive(Default)]
struct Seeds {
    first: HashMap<TypeId, Instance>,
    expanded: HashSet<*const ()>,
}

impl Seeds {
    fn collect<C>(&mut self, node: &mut dyn Node, capability: &Capability<C>)
    where
        C: ?Sized + 'static,
    {
        let owner = node.type_info();
        for field in node.fields() {
            if !matches!(classify(owner, &field, capability), Ok(true)) {
                continue;
            }
            let type_id = field.type_info.type_id;
            let FieldKind::Shared(slot) = field.kind else {
                continue;
            };
            let Some(instance) = slot.instance() else {
                continue;
            };

            self.first.entry(type_id).or_insert_with(|| instance.clone());
            if !self.expanded.insert(instance.addr()) {
                continue;
            }
            // Only fails for an instance that encloses the root itself
            if let Ok(mut inner) = instance.node.try_borrow_mut() {
                self.collect(&mut *inner, capability);
            }
        }
    }
}

struct Walker<'c, C: ?Sized + 'static, F> {
    capability: &'c Capability<C>,
    seeds: HashMap<TypeId, Instance>,
    visited: HashMap<TypeId, Instance>,
    visit: F,
}

impl<C, F, E> Walker<'_, C, F>
where
    C: ?Sized + 'static,
    F: FnMut(&mut dyn Node) -> Result<(), E>,
{
    fn step(&mut self, node: &mut dyn Node) -> Result<(), E> {
        let owner = node.type_info();

        for field in node.fields() {
            let is_capability = match classify(owner, &field, self.capability) {
                Ok(is_capability) => is_capability,
                Err(defect) => panic!("{defect}"),
            };
            if !is_capability {
                continue;
            }

            let name = field.name;
            let info = field.type_info;
            let FieldKind::Shared(slot) = field.kind else {
                continue;
            };

            let canonical = match self.visited.get(&info.type_id) {
                Some(canonical) => canonical.clone(),
                None => {
                    let existing = self
                        .seeds
                        .get(&info.type_id)
                        .cloned()
                        .or_else(|| slot.instance());
                    let canonical = match existing {
                        Some(existing) => {
                            debug!(ty = info.type_name, field = name, "adopting existing instance");
                            existing
                        }
                        None => {
                            debug!(ty = info.type_name, field = name, "allocating instance");
                            slot.allocate()
                        }
                    };
                    self.visited.insert(info.type_id, canonical.clone());
                    self.step(&mut *canonical.node.borrow_mut())?;
                    canonical
                }
            };

            if let Some(existing) = slot.instance() {
                if !existing.is_same(&canonical) {
                    warn!(
                        ty = info.type_name,
                        field = name,
                        owner = owner.type_name,
                        "replacing pre-populated instance with the first one seen"
                    );
                }
            }
            slot.assign(&canonical);
        }

        trace!(node = owner.type_name, "visiting node");
        (self.visit)(node)
    }
}
