//! Configuration nodes and their field descriptors
//!
//! A [`Node`] is a struct the walker can inspect. Rust has no runtime field
//! reflection, so every node lists its own fields, in declaration order,
//! through [`Node::fields`]. The [`impl_node!`](crate::impl_node) macro writes
//! that list for plain structs.
//!
//! Fields come in two kinds:
//!
//! | Constructor | Declared as | Meaning |
//! |-------------|-------------|---------|
//! | [`Field::value`] | `T` | held inline, never shared |
//! | [`Field::shared`] | `Option<Shared<T>>` | reference slot, `None` is unset |
//! | [`Field::embedded`] | `Option<Shared<T>>` | reference slot the owner delegates to |

use downcast_rs::{Downcast, impl_downcast};
use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Reference slot through which one instance is shared by many owners
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap a value into a [`Shared`] reference
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Name and identity of a concrete type
#[derive(Clone, Copy, Debug)]
pub struct TypeInfo {
    /// Human-readable type name, used in diagnostics only
    pub type_name: &'static str,
    /// Identity used for lookups
    pub type_id: TypeId,
}

impl TypeInfo {
    /// Describe `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for TypeInfo {}

impl Hash for TypeInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name)
    }
}

/// A struct that takes part in the option-group graph
pub trait Node: Downcast {
    /// Fields of this node in declaration order.
    ///
    /// The list is a property of the type: every instance must report the
    /// same names, kinds and order, because schema validation inspects a
    /// `Default` prototype of each shared type instead of the live instance.
    fn fields(&mut self) -> Vec<Field<'_>>;

    /// Concrete type of this node
    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<Self>()
    }
}

impl_downcast!(Node);

/// Descriptor of one field of a [`Node`]
pub struct Field<'a> {
    pub(crate) name: &'static str,
    pub(crate) type_info: TypeInfo,
    pub(crate) embedded: bool,
    pub(crate) kind: FieldKind<'a>,
}

pub(crate) enum FieldKind<'a> {
    Value,
    Shared(&'a mut dyn SharedSlot),
}

impl<'a> Field<'a> {
    /// A field held inline
    pub fn value<T: 'static>(name: &'static str, _value: &'a mut T) -> Self {
        Self {
            name,
            type_info: TypeInfo::of::<T>(),
            embedded: false,
            kind: FieldKind::Value,
        }
    }

    /// A reference slot
    pub fn shared<T: Node + Default>(name: &'static str, slot: &'a mut Option<Shared<T>>) -> Self {
        Self {
            name,
            type_info: TypeInfo::of::<T>(),
            embedded: false,
            kind: FieldKind::Shared(slot),
        }
    }

    /// A reference slot the owner delegates to (the owner derefs to it)
    pub fn embedded<T: Node + Default>(
        name: &'static str,
        slot: &'a mut Option<Shared<T>>,
    ) -> Self {
        Self {
            embedded: true,
            ..Self::shared(name, slot)
        }
    }

    /// Field name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared type (the pointee for reference slots)
    pub fn type_info(&self) -> TypeInfo {
        self.type_info
    }

    /// Whether the owner embeds this field
    pub fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// Whether this field is a reference slot
    pub fn is_shared(&self) -> bool {
        matches!(self.kind, FieldKind::Shared(_))
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("type", &self.type_info.type_name)
            .field("embedded", &self.embedded)
            .field("shared", &self.is_shared())
            .finish()
    }
}

/// Type-erased handle on one shared instance.
///
/// `handle` and `node` point at the same allocation; `handle` recovers the
/// concrete `Shared<T>`, `node` lets the walker recurse into it.
#[derive(Clone)]
pub(crate) struct Instance {
    handle: Rc<dyn Any>,
    pub(crate) node: Rc<RefCell<dyn Node>>,
}

impl Instance {
    fn new<T: Node>(instance: Shared<T>) -> Self {
        let node: Rc<RefCell<dyn Node>> = instance.clone();
        Self {
            handle: instance,
            node,
        }
    }

    fn downcast<T: Node>(&self) -> Option<Shared<T>> {
        Rc::downcast::<RefCell<T>>(self.handle.clone()).ok()
    }

    pub(crate) fn is_same(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }

    /// Address of the shared allocation
    pub(crate) fn addr(&self) -> *const () {
        Rc::as_ptr(&self.handle).cast::<()>()
    }
}

/// Operations the walker needs on a `Option<Shared<T>>` slot
pub(crate) trait SharedSlot {
    /// Instance currently held, if any
    fn instance(&self) -> Option<Instance>;

    /// Fresh `T::default()` instance
    fn allocate(&self) -> Instance;

    /// Detached `T::default()` used for schema validation
    fn prototype(&self) -> Box<dyn Node>;

    /// Point the slot at `instance`
    fn assign(&mut self, instance: &Instance);
}

impl<T: Node + Default> SharedSlot for Option<Shared<T>> {
    fn instance(&self) -> Option<Instance> {
        self.as_ref().map(|current| Instance::new(Rc::clone(current)))
    }

    fn allocate(&self) -> Instance {
        Instance::new(shared(T::default()))
    }

    fn prototype(&self) -> Box<dyn Node> {
        Box::new(T::default())
    }

    fn assign(&mut self, instance: &Instance) {
        // Registry entries are keyed by `TypeId`, so the downcast only fails
        // if the slot and the entry disagree on `T`.
        if let Some(canonical) = instance.downcast::<T>() {
            *self = Some(canonical);
        }
    }
}

/// Implement [`Node`] for a struct by listing its fields.
///
/// Each entry is `field: kind` where kind is `value`, `shared` or
/// `embedded` (see [`Field`]).
///
/// ```ignore
/// impl_node!(SearchCommand {
///     client: shared,
///     datacenter: shared,
///     limit: value,
/// });
/// ```
#[macro_export]
macro_rules! impl_node {
    ($ty:ty { $($field:ident : $kind:ident),* $(,)? }) => {
        impl $crate::Node for $ty {
            fn fields(&mut self) -> ::std::vec::Vec<$crate::Field<'_>> {
                ::std::vec![
                    $($crate::Field::$kind(::std::stringify!($field), &mut self.$field)),*
                ]
            }
        }
    };
}
