//! Compile-time verb and cardinality tags.
//!
//! The tags are uninhabited enums: they exist only as type parameters of
//! `Route`. Each one carries a constant so the runtime view (`Endpoint`) can be
//! recovered for logging and matching.

use std::fmt;

use crate::http::Method;

mod sealed {
    pub trait Sealed {}
}

/// A verb tag.
pub trait Verb: sealed::Sealed + 'static {
    const METHOD: Method;
}

/// A cardinality tag.
pub trait Cardinality: sealed::Sealed + 'static {
    const KIND: CardinalityKind;
}

macro_rules! verb {
    ($name:ident, $method:expr, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug)]
        pub enum $name {}

        impl sealed::Sealed for $name {}

        impl Verb for $name {
            const METHOD: Method = $method;
        }
    };
}

verb!(Get, Method::Get, "A `GET` route.");
verb!(Post, Method::Post, "A `POST` route.");
verb!(Put, Method::Put, "A `PUT` route.");
verb!(Patch, Method::Patch, "A `PATCH` route.");
verb!(Delete, Method::Delete, "A `DELETE` route.");

/// A route addressing one instance.
#[derive(Debug)]
pub enum Single {}

/// A route addressing a whole collection.
#[derive(Debug)]
pub enum Collection {}

impl sealed::Sealed for Single {}
impl sealed::Sealed for Collection {}

impl Cardinality for Single {
    const KIND: CardinalityKind = CardinalityKind::Single;
}

impl Cardinality for Collection {
    const KIND: CardinalityKind = CardinalityKind::Collection;
}

/// Runtime counterpart of the cardinality tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardinalityKind {
    Single,
    Collection,
}

/// Runtime view of a route's `(cardinality, verb)` pair.
///
/// Only the pairs a route can actually be built with exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    List,
    Show,
    Create,
    Replace,
    Update,
    Delete,
}

impl Endpoint {
    /// The endpoint for a tag pair. `None` for pairs no constructor produces.
    pub fn of<K: Cardinality, V: Verb>() -> Option<Endpoint> {
        Endpoint::from_parts(K::KIND, V::METHOD)
    }

    /// The single-instance endpoint for a method.
    pub const fn single(method: Method) -> Endpoint {
        match method {
            Method::Get => Endpoint::Show,
            Method::Post => Endpoint::Create,
            Method::Put => Endpoint::Replace,
            Method::Patch => Endpoint::Update,
            Method::Delete => Endpoint::Delete,
        }
    }

    pub fn from_parts(kind: CardinalityKind, method: Method) -> Option<Endpoint> {
        match (kind, method) {
            (CardinalityKind::Collection, Method::Get) => Some(Endpoint::List),
            (CardinalityKind::Single, Method::Get) => Some(Endpoint::Show),
            (CardinalityKind::Single, Method::Post) => Some(Endpoint::Create),
            (CardinalityKind::Single, Method::Put) => Some(Endpoint::Replace),
            (CardinalityKind::Single, Method::Patch) => Some(Endpoint::Update),
            (CardinalityKind::Single, Method::Delete) => Some(Endpoint::Delete),
            (CardinalityKind::Collection, _) => None,
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::List | Endpoint::Show => Method::Get,
            Endpoint::Create => Method::Post,
            Endpoint::Replace => Method::Put,
            Endpoint::Update => Method::Patch,
            Endpoint::Delete => Method::Delete,
        }
    }

    pub fn cardinality(&self) -> CardinalityKind {
        match self {
            Endpoint::List => CardinalityKind::Collection,
            _ => CardinalityKind::Single,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::List => "list",
            Endpoint::Show => "show",
            Endpoint::Create => "create",
            Endpoint::Replace => "replace",
            Endpoint::Update => "update",
            Endpoint::Delete => "delete",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
