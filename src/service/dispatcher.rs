//! The dispatcher: turns a typed route into an adapter request and the
//! adapter's outcome into a typed response.
//!
//! # Responsibilities
//! - Resolve the route path against the optional host
//! - Merge service defaults beneath call options
//! - Hand the request to the adapter and return immediately
//! - Decode success payloads with the route resource's decoder
//! - Deliver exactly one `Response` per call
//!
//! # Design Decisions
//! - `Dispatch` is sealed and implemented only for routes with a legal
//!   (cardinality, verb) pair; child routes must be composed first
//! - Collection routes decode with `decode_collection`, every single-instance
//!   route with `decode_singular`
//! - Transport failures are never decoded; their headers pass through

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::oneshot;
use url::Url;
use uuid::Uuid;

use crate::adapter::Adapter;
use crate::config::ServiceConfig;
use crate::error::{BuildError, DecodeError, Error, TransportError};
use crate::http::{AdapterRequest, AdapterResponse, Headers, Options, Response, Target};
use crate::observability::metrics;
use crate::routing::{Cardinality, Collection, Endpoint, Get, Listable, Resource, Route, Single, Verb};
use crate::service::builder::{normalize_host, ServiceBuilder};
use crate::service::Completion;

mod sealed {
    pub trait Sealed {}
}

/// A route the service can dispatch.
///
/// Implemented for `Route<R, Collection, Get>` where `R: Listable` and for
/// `Route<R, Single, V>` for every verb. Child routes are not dispatchable
/// until composed under their parent:
///
/// ```compile_fail
/// use pathwise::adapter::MockAdapter;
/// use pathwise::routing::ListRoute;
/// use pathwise::routing::fixtures::Comment;
/// use pathwise::service::Service;
///
/// let service = Service::new(MockAdapter::new());
/// service.call_default(Comment::list(), |_| {});
/// ```
pub trait Dispatch: sealed::Sealed + Send + 'static {
    type Resource: Resource;
    type Cardinality: Cardinality;
    type Verb: Verb;
    /// What a success payload decodes into.
    type Payload: 'static;

    const ENDPOINT: Endpoint;

    fn decode(bytes: &[u8]) -> Result<Self::Payload, DecodeError>;

    fn route(&self) -> &Route<Self::Resource, Self::Cardinality, Self::Verb>;

    fn into_route(self) -> Route<Self::Resource, Self::Cardinality, Self::Verb>;
}

/// The response a dispatch of `D` delivers.
pub type Reply<D> = Response<
    <D as Dispatch>::Resource,
    <D as Dispatch>::Cardinality,
    <D as Dispatch>::Verb,
    <D as Dispatch>::Payload,
>;

impl<R: Listable> sealed::Sealed for Route<R, Collection, Get> {}

impl<R: Listable> Dispatch for Route<R, Collection, Get> {
    type Resource = R;
    type Cardinality = Collection;
    type Verb = Get;
    type Payload = R::Collection;

    const ENDPOINT: Endpoint = Endpoint::List;

    fn decode(bytes: &[u8]) -> Result<R::Collection, DecodeError> {
        R::decode_collection(bytes)
    }

    fn route(&self) -> &Self {
        self
    }

    fn into_route(self) -> Self {
        self
    }
}

impl<R: Resource, V: Verb> sealed::Sealed for Route<R, Single, V> {}

impl<R: Resource, V: Verb> Dispatch for Route<R, Single, V> {
    type Resource = R;
    type Cardinality = Single;
    type Verb = V;
    type Payload = R::Singular;

    const ENDPOINT: Endpoint = Endpoint::single(V::METHOD);

    fn decode(bytes: &[u8]) -> Result<R::Singular, DecodeError> {
        R::decode_singular(bytes)
    }

    fn route(&self) -> &Self {
        self
    }

    fn into_route(self) -> Self {
        self
    }
}

/// Dispatches typed routes through an adapter.
///
/// Immutable after construction; clones share the adapter.
pub struct Service<A: ?Sized> {
    adapter: Arc<A>,
    host: Option<Url>,
    defaults: Options,
}

impl<A: ?Sized> Clone for Service<A> {
    fn clone(&self) -> Self {
        Self {
            adapter: Arc::clone(&self.adapter),
            host: self.host.clone(),
            defaults: self.defaults.clone(),
        }
    }
}

impl<A: ?Sized> std::fmt::Debug for Service<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Service")
            .field("host", &self.host.as_ref().map(Url::as_str))
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

impl<A: Adapter> Service<A> {
    /// A service with no host and no defaults.
    pub fn new(adapter: A) -> Self {
        Self::from_parts(adapter, None, Options::default())
    }

    pub fn builder(adapter: A) -> ServiceBuilder<A> {
        ServiceBuilder::new(adapter)
    }

    /// Build from the `[service]` and `[defaults]` sections of a config.
    pub fn from_config(adapter: A, config: &ServiceConfig) -> Result<Self, BuildError> {
        Ok(Self::builder(adapter).config(config)?.build())
    }

    pub(crate) fn from_parts(adapter: A, host: Option<Url>, defaults: Options) -> Self {
        Self {
            adapter: Arc::new(adapter),
            host,
            defaults,
        }
    }
}

impl<A: Adapter + ?Sized> Service<A> {
    /// Wrap a shared (possibly unsized) adapter.
    pub fn from_arc(adapter: Arc<A>, host: Option<Url>, defaults: Options) -> Self {
        Self {
            adapter,
            host: host.map(normalize_host),
            defaults,
        }
    }

    pub fn adapter(&self) -> &Arc<A> {
        &self.adapter
    }

    pub fn host(&self) -> Option<&Url> {
        self.host.as_ref()
    }

    pub fn defaults(&self) -> &Options {
        &self.defaults
    }

    /// Where a route path goes: joined onto the host, or left relative.
    pub fn resolve(&self, path: &str) -> Result<Target, Error> {
        match &self.host {
            Some(host) => host
                .join(path)
                .map(Target::Absolute)
                .map_err(|source| Error::Construction {
                    path: path.to_string(),
                    host: host.to_string(),
                    source,
                }),
            None => Ok(Target::Relative(path.to_string())),
        }
    }

    /// Dispatch `route` with `options` merged over the service defaults.
    ///
    /// Returns immediately. `callback` runs exactly once, on whichever thread
    /// the adapter completes on; construction failures run it before `call`
    /// returns.
    pub fn call<D, F>(&self, route: D, options: Options, callback: F)
    where
        D: Dispatch,
        F: FnOnce(Reply<D>) + Send + 'static,
    {
        let start = Instant::now();
        let request_id = Uuid::new_v4();
        let method = <D::Verb as Verb>::METHOD;
        let route = route.into_route();

        let target = match self.resolve(route.path()) {
            Ok(target) => target,
            Err(error) => {
                tracing::warn!(
                    request_id = %request_id,
                    method = %method,
                    path = %route.path(),
                    error = %error,
                    "Cannot build request target"
                );
                metrics::record_dispatch(method, D::ENDPOINT, "error", start);
                callback(Response::Error {
                    route,
                    error,
                    headers: Headers::new(),
                });
                return;
            }
        };

        let request = AdapterRequest::new(target, self.defaults.merge(&options));
        tracing::debug!(
            request_id = %request_id,
            method = %method,
            endpoint = %D::ENDPOINT,
            target = %request.target,
            "Dispatching request"
        );

        let completion = Completion::new(move |raw: AdapterResponse| {
            let response = into_response::<D>(route, raw);
            match response.error() {
                Some(error) => tracing::warn!(
                    request_id = %request_id,
                    method = %method,
                    path = %response.route().path(),
                    error = %error,
                    "Request failed"
                ),
                None => tracing::debug!(
                    request_id = %request_id,
                    outcome = response.outcome(),
                    "Request completed"
                ),
            }
            metrics::record_dispatch(method, D::ENDPOINT, response.outcome(), start);
            callback(response);
        });

        self.adapter.perform(method, request, completion);
    }

    /// `call` with no per-call options.
    pub fn call_default<D, F>(&self, route: D, callback: F)
    where
        D: Dispatch,
        F: FnOnce(Reply<D>) + Send + 'static,
    {
        self.call(route, Options::default(), callback)
    }

    /// Dispatch and await the response.
    pub async fn send<D>(&self, route: D, options: Options) -> Reply<D>
    where
        D: Dispatch,
        D::Payload: Send,
    {
        let fallback = route.route().clone();
        let (tx, rx) = oneshot::channel();
        self.call(route, options, move |response| {
            // The receiver only disappears if the caller dropped the future.
            let _ = tx.send(response);
        });

        match rx.await {
            Ok(response) => response,
            Err(_) => Response::Error {
                route: fallback,
                error: Error::Transport(TransportError::Abandoned),
                headers: Headers::new(),
            },
        }
    }
}

fn into_response<D: Dispatch>(
    route: Route<D::Resource, D::Cardinality, D::Verb>,
    raw: AdapterResponse,
) -> Reply<D> {
    match raw {
        AdapterResponse::Empty { headers } => Response::Empty { route, headers },
        AdapterResponse::Success { body, headers } => match D::decode(&body) {
            Ok(payload) => Response::Success {
                route,
                payload,
                headers,
            },
            Err(error) => Response::Error {
                route,
                error: Error::Decode(error),
                headers,
            },
        },
        AdapterResponse::Error { error, headers } => Response::Error {
            route,
            error: Error::Transport(error),
            headers,
        },
    }
}
