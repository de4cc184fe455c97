//! Typed route values and nesting.
//!
//! A `Route<R, K, V>` is an addressable path for resource `R`, tagged with its
//! cardinality `K` and verb `V`. A `ChildRoute<R, K, V, P>` is the same thing
//! for a child resource that still has to be anchored beneath an instance of
//! its parent `P`.
//!
//! Nesting is only defined beneath a single-instance `GET` route of a
//! showable parent. Anything else fails to compile:
//!
//! ```compile_fail
//! # use pathwise::routing::*;
//! # use pathwise::routing::fixtures::{Post, Comment};
//! // cannot nest under "all posts"
//! let _ = Post::list() / Comment::list();
//! ```
//!
//! ```compile_fail
//! # use pathwise::routing::*;
//! # use pathwise::routing::fixtures::{Post, Comment};
//! // cannot nest under a mutation route
//! let _ = Post::delete(2) / Comment::list();
//! ```
//!
//! ```compile_fail
//! # use pathwise::routing::*;
//! # use pathwise::routing::fixtures::{Post, Commenter};
//! // commenters live under comments, not posts
//! let _ = Post::show(2) / Commenter::list();
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Div;

use crate::http::Method;
use crate::routing::resource::{FromSegment, Showable};
use crate::routing::tags::{Cardinality, CardinalityKind, Get, Single, Verb};

/// A dispatchable route.
pub struct Route<R, K, V> {
    path: String,
    _tags: PhantomData<fn() -> (R, K, V)>,
}

/// A child route awaiting a parent anchor of type `P`.
pub struct ChildRoute<R, K, V, P> {
    path: String,
    _tags: PhantomData<fn() -> (R, K, V, P)>,
}

impl<R, K, V> Route<R, K, V> {
    pub(crate) fn new(path: String) -> Self {
        Self {
            path,
            _tags: PhantomData,
        }
    }

    /// Partial path, relative to the service host.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn into_path(self) -> String {
        self.path
    }
}

impl<R, K: Cardinality, V: Verb> Route<R, K, V> {
    pub fn method(&self) -> Method {
        V::METHOD
    }

    pub fn cardinality(&self) -> CardinalityKind {
        K::KIND
    }
}

impl<P: Showable> Route<P, Single, Get> {
    /// Anchor `child` beneath this instance.
    pub fn nest<C, K, V>(&self, child: ChildRoute<C, K, V, P>) -> Route<C, K, V> {
        Route::new(join(&self.path, &child.path))
    }
}

impl<R, K, V, P> ChildRoute<R, K, V, P> {
    pub(crate) fn new(path: String) -> Self {
        Self {
            path,
            _tags: PhantomData,
        }
    }

    /// Path segment relative to the parent instance.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl<R, K: Cardinality, V: Verb, P> ChildRoute<R, K, V, P> {
    pub fn method(&self) -> Method {
        V::METHOD
    }
}

impl<B: Showable, A> ChildRoute<B, Single, Get, A> {
    /// Group two child levels before anchoring them under `A`.
    pub fn nest<C, K, V>(&self, child: ChildRoute<C, K, V, B>) -> ChildRoute<C, K, V, A> {
        ChildRoute::new(join(&self.path, &child.path))
    }
}

/// Compose a parent instance route with a child route.
///
/// The resulting path is `parent.path + "/" + child.path`.
pub fn compose<P: Showable, C, K, V>(
    parent: &Route<P, Single, Get>,
    child: ChildRoute<C, K, V, P>,
) -> Route<C, K, V> {
    parent.nest(child)
}

fn join(parent: &str, child: &str) -> String {
    format!("{parent}/{child}")
}

impl<P: Showable, C, K, V> Div<ChildRoute<C, K, V, P>> for Route<P, Single, Get> {
    type Output = Route<C, K, V>;

    fn div(self, child: ChildRoute<C, K, V, P>) -> Route<C, K, V> {
        self.nest(child)
    }
}

impl<P: Showable, C, K, V> Div<ChildRoute<C, K, V, P>> for &Route<P, Single, Get> {
    type Output = Route<C, K, V>;

    fn div(self, child: ChildRoute<C, K, V, P>) -> Route<C, K, V> {
        self.nest(child)
    }
}

impl<B: Showable, A, C, K, V> Div<ChildRoute<C, K, V, B>> for ChildRoute<B, Single, Get, A> {
    type Output = ChildRoute<C, K, V, A>;

    fn div(self, child: ChildRoute<C, K, V, B>) -> ChildRoute<C, K, V, A> {
        self.nest(child)
    }
}

impl<R, K, V> FromSegment for Route<R, K, V> {
    fn from_segment(path: String) -> Self {
        Route::new(path)
    }
}

impl<R, K, V, P> FromSegment for ChildRoute<R, K, V, P> {
    fn from_segment(path: String) -> Self {
        ChildRoute::new(path)
    }
}

// Manual impls: the tag parameters carry no data and need no bounds.

impl<R, K, V> Clone for Route<R, K, V> {
    fn clone(&self) -> Self {
        Route::new(self.path.clone())
    }
}

impl<R, K, V> PartialEq for Route<R, K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl<R, K, V> Eq for Route<R, K, V> {}

impl<R, K, V> Hash for Route<R, K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl<R, K, V> fmt::Debug for Route<R, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route").field("path", &self.path).finish()
    }
}

impl<R, K, V> fmt::Display for Route<R, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl<R, K, V, P> Clone for ChildRoute<R, K, V, P> {
    fn clone(&self) -> Self {
        ChildRoute::new(self.path.clone())
    }
}

impl<R, K, V, P> PartialEq for ChildRoute<R, K, V, P> {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl<R, K, V, P> Eq for ChildRoute<R, K, V, P> {}

impl<R, K, V, P> fmt::Debug for ChildRoute<R, K, V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChildRoute").field("path", &self.path).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::fixtures::{Author, Blog, Comment, Commenter, Post};
    use crate::routing::tags::{Collection, Delete, Patch, Post as PostVerb, Put};
    use crate::routing::*;

    #[test]
    fn test_nested_list_route() {
        let route: Route<Comment, Collection, Get> = Post::show(2) / Comment::list();
        assert_eq!(route.path(), "posts/2/comments");
        assert_eq!(route.method(), Method::Get);
        assert_eq!(route.cardinality(), CardinalityKind::Collection);
    }

    #[test]
    fn test_nested_member_routes() {
        let show: Route<Comment, Single, Get> = Post::show(2) / Comment::show(12);
        assert_eq!(show.path(), "posts/2/comments/12");

        let create: Route<Comment, Single, PostVerb> = Post::show(2) / Comment::create();
        assert_eq!(create.path(), "posts/2/comments");

        let update: Route<Comment, Single, Patch> = Post::show(2) / Comment::update(19);
        let replace: Route<Comment, Single, Put> = Post::show(2) / Comment::replace(19);
        let delete: Route<Comment, Single, Delete> = Post::show(2) / Comment::delete(19);
        for path in [update.path(), replace.path(), delete.path()] {
            assert_eq!(path, "posts/2/comments/19");
        }
    }

    #[test]
    fn test_compose_matches_operator() {
        let parent = Post::show(5);
        assert_eq!(compose(&parent, Comment::list()), &parent / Comment::list());
        assert_eq!(parent.nest(Comment::list()).path(), "posts/5/comments");
    }

    #[test]
    fn test_three_levels_group_either_way() {
        let left = (Post::show(2) / Comment::show(12)) / Commenter::list();
        let right = Post::show(2) / (Comment::show(12) / Commenter::list());
        assert_eq!(left, right);
        assert_eq!(left.path(), "posts/2/comments/12/commenter");
    }

    #[test]
    fn test_singular_child_routes() {
        assert_eq!((Blog::show() / Author::show()).path(), "blog/author");
        assert_eq!((Blog::show() / Author::create()).path(), "blog/author");
        assert_eq!((Blog::show() / Author::replace()).path(), "blog/author");
        assert_eq!((Blog::show() / Author::update()).path(), "blog/author");
        assert_eq!((Blog::show() / Author::delete()).path(), "blog/author");
    }

    #[test]
    fn test_child_route_segment() {
        let child = Comment::show(3);
        assert_eq!(child.path(), "comments/3");
        assert_eq!(child.method(), Method::Get);
    }

    #[test]
    fn test_route_display_and_clone() {
        let route = Post::show(9);
        assert_eq!(route.to_string(), "posts/9");
        assert_eq!(route.clone(), route);
        assert_eq!(format!("{route:?}"), "Route { path: \"posts/9\" }");
    }
}
