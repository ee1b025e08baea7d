//! # flagwalk domain
//!
//! Core types for wiring command-line option groups.
//!
//! Option groups are plain structs. Several of them may need the same
//! collaborator (a connection, a client, a session). Instead of wiring those
//! by hand, every struct declares a [`Shared`] slot for the collaborator and
//! [`walk`] makes sure that each collaborator type is instantiated exactly
//! once per walk, with every slot of that type pointing at the same instance.
//!
//! ## Modules
//!
//! - [`node`] - the [`Node`] trait and the [`Field`] descriptors a node reports
//! - [`capability`] - the [`Capability`] table that says which types are shared
//! - [`walk`] - the graph walker and the schema validation pass
//! - [`error`] - schema defects and recoverable errors
//!
//! ## Example
//!
//! ```ignore
//! use flagwalk_domain::{Capability, Shared, impl_node, walk};
//!
//! #[derive(Default)]
//! struct Conn { url: String }
//! impl_node!(Conn { url: value });
//!
//! #[derive(Default)]
//! struct Command { a: Option<Shared<Conn>>, b: Option<Shared<Conn>> }
//! impl_node!(Command { a: shared, b: shared });
//!
//! let capability = Capability::<dyn Node>::new("conn").with::<Conn>(|node| Some(node));
//! let mut command = Command::default();
//! walk(&mut command, &capability, |_| Ok::<_, ()>(())).unwrap();
//! ```

pub mod capability;
pub mod error;
pub mod node;
pub mod walk;

pub use capability::{Capability, Implementor, View};
pub use error::{Error, Result, SchemaError};
pub use node::{Field, Node, Shared, TypeInfo, shared};
pub use walk::{validate, walk};
