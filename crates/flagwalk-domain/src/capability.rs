//! Capability descriptors
//!
//! A capability is a trait (used as a trait object type `C`, e.g.
//! `dyn Flag`) whose implementors are shared across the option-group graph.
//! Rust cannot ask at runtime whether a type implements a trait, so the
//! descriptor is an interface table: one [`Implementor`] per concrete type,
//! keyed by `TypeId`, carrying a [`View`] that turns a node of that type
//! into `&mut C`.
//!
//! Tables are built either explicitly with [`Capability::with`] or from a
//! `linkme` distributed slice with [`Capability::from_entries`]:
//!
//! ```ignore
//! #[linkme::distributed_slice]
//! pub static FLAGS: [Implementor<dyn Flag>] = [..];
//!
//! #[linkme::distributed_slice(FLAGS)]
//! static CLIENT_FLAG: Implementor<dyn Flag> =
//!     Implementor::new::<ClientFlag>(|node| node.downcast_mut::<ClientFlag>().map(|f| f as _));
//!
//! let capability = Capability::from_entries("flag", &FLAGS);
//! ```

use crate::node::{Node, Shared};
use std::any::TypeId;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Accessor viewing a node as the capability trait object
pub type View<C> = fn(&mut dyn Node) -> Option<&mut C>;

/// Registry entry for one type implementing a capability
pub struct Implementor<C: ?Sized + 'static> {
    type_id: fn() -> TypeId,
    type_name: fn() -> &'static str,
    reference_type_ids: fn() -> [TypeId; 2],
    view: View<C>,
}

fn reference_type_ids<T: Node>() -> [TypeId; 2] {
    [TypeId::of::<Shared<T>>(), TypeId::of::<Option<Shared<T>>>()]
}

impl<C: ?Sized + 'static> Implementor<C> {
    /// Entry for `T`; usable in `static` items
    pub const fn new<T: Node>(view: View<C>) -> Self {
        Self {
            type_id: TypeId::of::<T>,
            type_name: std::any::type_name::<T>,
            reference_type_ids: reference_type_ids::<T>,
            view,
        }
    }

    /// Identity of the implementing type
    pub fn type_id(&self) -> TypeId {
        (self.type_id)()
    }

    /// Name of the implementing type
    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Identities of `Shared<T>` and `Option<Shared<T>>`
    pub fn reference_type_ids(&self) -> [TypeId; 2] {
        (self.reference_type_ids)()
    }

    /// View `node` as the capability
    pub fn view<'a>(&self, node: &'a mut dyn Node) -> Option<&'a mut C> {
        (self.view)(node)
    }
}

impl<C: ?Sized + 'static> Clone for Implementor<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized + 'static> Copy for Implementor<C> {}

impl<C: ?Sized + 'static> fmt::Debug for Implementor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Implementor")
            .field("type_name", &self.type_name())
            .finish()
    }
}

/// Interface table of the types that are shared across a walk
pub struct Capability<C: ?Sized + 'static> {
    name: &'static str,
    implementors: Vec<Implementor<C>>,
    index: HashMap<TypeId, usize>,
    references: HashSet<TypeId>,
}

impl<C: ?Sized + 'static> Capability<C> {
    /// Empty capability
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            implementors: Vec::new(),
            index: HashMap::new(),
            references: HashSet::new(),
        }
    }

    /// Capability built from static entries, e.g. a `linkme` slice
    pub fn from_entries(name: &'static str, entries: &[Implementor<C>]) -> Self {
        let mut capability = Self::new(name);
        for entry in entries {
            capability.register(*entry);
        }
        capability
    }

    /// Register `T` with the given view
    pub fn with<T: Node>(mut self, view: View<C>) -> Self {
        self.register(Implementor::new::<T>(view));
        self
    }

    /// Register an entry; returns `false` if the type was already present
    ///
    /// The first registration of a type wins.
    pub fn register(&mut self, entry: Implementor<C>) -> bool {
        let type_id = entry.type_id();
        if self.index.contains_key(&type_id) {
            return false;
        }
        self.index.insert(type_id, self.implementors.len());
        self.references.extend(entry.reference_type_ids());
        self.implementors.push(entry);
        true
    }

    /// Capability name, used in diagnostics
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether values of the given type are shared
    pub fn implements(&self, type_id: TypeId) -> bool {
        self.index.contains_key(&type_id)
    }

    /// Whether the type is a reference slot of a shared type
    ///
    /// True for `Shared<T>` and `Option<Shared<T>>` of every registered `T`.
    pub fn is_reference(&self, type_id: TypeId) -> bool {
        self.references.contains(&type_id)
    }

    /// Entry for the given type
    pub fn implementor(&self, type_id: TypeId) -> Option<&Implementor<C>> {
        self.index.get(&type_id).map(|&at| &self.implementors[at])
    }

    /// View a node as the capability if its concrete type is registered
    pub fn view<'a>(&self, node: &'a mut dyn Node) -> Option<&'a mut C> {
        let type_id = node.type_info().type_id;
        self.implementor(type_id)?.view(node)
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.implementors.len()
    }

    /// Whether no type is registered
    pub fn is_empty(&self) -> bool {
        self.implementors.is_empty()
    }

    /// Registered type names in registration order
    pub fn type_names(&self) -> Vec<&'static str> {
        self.implementors.iter().map(Implementor::type_name).collect()
    }
}

impl<C: ?Sized + 'static> fmt::Debug for Capability<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capability")
            .field("name", &self.name)
            .field("implementors", &self.type_names())
            .finish()
    }
}
