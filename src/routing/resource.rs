//! Resource descriptors and capability markers.
//!
//! # Responsibilities
//! - Describe a remote entity kind: collection path, payload decoders
//! - Declare placement: under the host (`Root`) or under a parent (`Under<P>`)
//! - Declare identification: plural (`Identifiable`) or singular (`Singleton`)
//! - Opt into capabilities one by one (`Listable`, `Showable`, ...)
//!
//! # Design Decisions
//! - Descriptors are static; nothing here holds state
//! - `PATH` is a partial path: no host, no parent segments, no identifier
//! - Placement picks the route type constructors return, so a child route
//!   cannot be dispatched until it is composed under its parent

use std::fmt::Display;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::error::DecodeError;
use crate::routing::route::{ChildRoute, Route};
use crate::routing::tags::{Cardinality, Verb};

mod sealed {
    pub trait FromSegment {
        fn from_segment(path: String) -> Self;
    }
}

pub(crate) use sealed::FromSegment;

/// A remote entity kind.
pub trait Resource: Sized + 'static {
    /// Collection path segment, e.g. `"posts"`.
    const PATH: &'static str;

    /// `Root` or `Under<Parent>`.
    type Mount: Mount;

    /// What a single-instance response decodes into.
    type Singular;

    /// Decode a single-instance payload.
    fn decode_singular(bytes: &[u8]) -> Result<Self::Singular, DecodeError>;
}

/// A resource with a collection that can be listed.
pub trait Listable: Resource {
    /// What a collection response decodes into.
    type Collection;

    /// Decode a collection payload.
    fn decode_collection(bytes: &[u8]) -> Result<Self::Collection, DecodeError>;
}

/// A plural resource whose instances are addressed by identifier.
pub trait Identifiable: Resource {
    type Id: Display;

    fn id(&self) -> &Self::Id;
}

/// A resource with exactly one instance, addressed without an identifier.
pub trait Singleton: Resource {}

/// A single instance can be fetched.
pub trait Showable: Resource {}

/// New instances can be created.
pub trait Creatable: Resource {}

/// Instances can be replaced (`PUT`).
pub trait Replaceable: Resource {}

/// Instances can be partially updated (`PATCH`).
pub trait Patchable: Resource {}

/// Instances can be deleted.
pub trait Deletable: Resource {}

/// Every capability. Implemented automatically once all six are.
pub trait FullyRestful: Listable + Showable + Creatable + Replaceable + Patchable + Deletable {}

impl<T> FullyRestful for T where T: Listable + Showable + Creatable + Replaceable + Patchable + Deletable {}

/// Where a resource is addressable.
pub trait Mount: 'static {
    /// The route type constructors produce for a resource with this placement.
    type Route<R: Resource, K: Cardinality, V: Verb>: FromSegment;
}

/// Addressable directly under the host.
pub enum Root {}

/// Addressable only beneath a single instance of `P`.
pub struct Under<P>(PhantomData<fn() -> P>);

impl Mount for Root {
    type Route<R: Resource, K: Cardinality, V: Verb> = Route<R, K, V>;
}

impl<P: Resource> Mount for Under<P> {
    type Route<R: Resource, K: Cardinality, V: Verb> = ChildRoute<R, K, V, P>;
}

/// The route type `R`'s constructors return for tags `K`, `V`.
pub type Mounted<R, K, V> = <<R as Resource>::Mount as Mount>::Route<R, K, V>;

pub(crate) fn mounted<R: Resource, K: Cardinality, V: Verb>(path: String) -> Mounted<R, K, V> {
    FromSegment::from_segment(path)
}

/// Decode a JSON payload with serde.
///
/// Suitable as the body of `decode_singular` / `decode_collection` for types
/// that derive `Deserialize`.
pub fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, DecodeError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Implement capability markers for a resource.
///
/// ```
/// use pathwise::routing::{decode_json, Resource, Root, Showable, Deletable};
/// use pathwise::error::DecodeError;
///
/// #[derive(serde::Deserialize)]
/// struct Tag { name: String }
///
/// impl Resource for Tag {
///     const PATH: &'static str = "tags";
///     type Mount = Root;
///     type Singular = Tag;
///     fn decode_singular(bytes: &[u8]) -> Result<Tag, DecodeError> {
///         decode_json(bytes)
///     }
/// }
///
/// pathwise::capabilities!(Tag: Showable, Deletable);
/// ```
#[macro_export]
macro_rules! capabilities {
    ($ty:ty: $($cap:ident),+ $(,)?) => {
        $( impl $crate::routing::$cap for $ty {} )+
    };
}

/// Opt a listable resource into every remaining capability.
///
/// The type must already implement `Listable`, since that capability carries
/// the collection decoder; compilation fails otherwise.
#[macro_export]
macro_rules! restful {
    ($($ty:ty),+ $(,)?) => {
        $(
            $crate::capabilities!($ty: Showable, Creatable, Replaceable, Patchable, Deletable);
            const _: fn() = || {
                fn assert_fully_restful<T: $crate::routing::FullyRestful>() {}
                assert_fully_restful::<$ty>();
            };
        )+
    };
}
