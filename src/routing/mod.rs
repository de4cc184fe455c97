//! Typed routing subsystem.
//!
//! # Data Flow
//! ```text
//! Resource descriptor (PATH, Mount, decoders)
//!     → capability markers (Listable, Showable, ...)
//!     → capability.rs (list(), show(id), ... per opted-in capability)
//!     → Route<R, K, V> for root resources
//!       ChildRoute<R, K, V, Parent> for child resources
//!     → route.rs (parent_instance / child → Route<Child, K, V>)
//!     → handed to the service for dispatch
//! ```
//!
//! # Design Decisions
//! - Verb and cardinality are type tags; illegal routes do not typecheck
//! - Routes are immutable and carry only their path string
//! - Child routes nest only under a single-instance `GET` of a showable parent
//! - Paths are joined with a single `/`; no other URL validation happens here

pub mod capability;
pub mod resource;
pub mod route;
pub mod tags;

// Shared with doctests, which only see public items
#[doc(hidden)]
pub mod fixtures;

pub use capability::{
    CreateRoute, DeleteRoute, ListRoute, ReplaceRoute, ShowRoute, SingletonRoute, UpdateRoute,
};
pub use resource::{
    decode_json, Creatable, Deletable, FullyRestful, Identifiable, Listable, Mount, Mounted, Patchable,
    Replaceable, Resource, Root, Showable, Singleton, Under,
};
pub use route::{compose, ChildRoute, Route};
pub use tags::{
    Cardinality, CardinalityKind, Collection, Delete, Endpoint, Get, Patch, Post, Put, Single, Verb,
};
