//! Route constructors unlocked by capabilities.
//!
//! Each extension trait is implemented for every resource that opts into the
//! matching capability. A resource without the capability simply has no such
//! constructor.
//!
//! | Capability | Plural | Singular | Route |
//! |---|---|---|---|
//! | `Listable` | `list()` | `list()` | `Collection`, `GET` |
//! | `Showable` | `show(id)` | `show()` | `Single`, `GET` |
//! | `Creatable` | `create()` | `create()` | `Single`, `POST` |
//! | `Replaceable` | `replace(id)` | `replace()` | `Single`, `PUT` |
//! | `Patchable` | `update(id)` | `update()` | `Single`, `PATCH` |
//! | `Deletable` | `delete(id)` | `delete()` | `Single`, `DELETE` |

use std::fmt::Display;

use crate::routing::resource::{
    mounted, Creatable, Deletable, Identifiable, Listable, Mounted, Patchable, Replaceable, Resource,
    Showable, Singleton,
};
use crate::routing::tags::{Collection, Delete, Get, Patch, Post, Put, Single};

fn member_path<R: Resource>(id: &impl Display) -> String {
    format!("{}/{}", R::PATH, id)
}

fn collection_path<R: Resource>() -> String {
    R::PATH.to_string()
}

/// `list()` for listable resources.
pub trait ListRoute: Listable {
    fn list() -> Mounted<Self, Collection, Get> {
        mounted::<Self, Collection, Get>(collection_path::<Self>())
    }
}

impl<R: Listable> ListRoute for R {}

/// `create()` for creatable resources.
pub trait CreateRoute: Creatable {
    fn create() -> Mounted<Self, Single, Post> {
        mounted::<Self, Single, Post>(collection_path::<Self>())
    }
}

impl<R: Creatable> CreateRoute for R {}

/// `show(id)` for showable plural resources.
pub trait ShowRoute: Showable + Identifiable {
    fn show(id: Self::Id) -> Mounted<Self, Single, Get> {
        mounted::<Self, Single, Get>(member_path::<Self>(&id))
    }

    /// The show route for this instance.
    fn show_route(&self) -> Mounted<Self, Single, Get> {
        mounted::<Self, Single, Get>(member_path::<Self>(self.id()))
    }
}

impl<R: Showable + Identifiable> ShowRoute for R {}

/// `replace(id)` for replaceable plural resources.
pub trait ReplaceRoute: Replaceable + Identifiable {
    fn replace(id: Self::Id) -> Mounted<Self, Single, Put> {
        mounted::<Self, Single, Put>(member_path::<Self>(&id))
    }

    fn replace_route(&self) -> Mounted<Self, Single, Put> {
        mounted::<Self, Single, Put>(member_path::<Self>(self.id()))
    }
}

impl<R: Replaceable + Identifiable> ReplaceRoute for R {}

/// `update(id)` for patchable plural resources.
pub trait UpdateRoute: Patchable + Identifiable {
    fn update(id: Self::Id) -> Mounted<Self, Single, Patch> {
        mounted::<Self, Single, Patch>(member_path::<Self>(&id))
    }

    fn update_route(&self) -> Mounted<Self, Single, Patch> {
        mounted::<Self, Single, Patch>(member_path::<Self>(self.id()))
    }
}

impl<R: Patchable + Identifiable> UpdateRoute for R {}

/// `delete(id)` for deletable plural resources.
pub trait DeleteRoute: Deletable + Identifiable {
    fn delete(id: Self::Id) -> Mounted<Self, Single, Delete> {
        mounted::<Self, Single, Delete>(member_path::<Self>(&id))
    }

    fn delete_route(&self) -> Mounted<Self, Single, Delete> {
        mounted::<Self, Single, Delete>(member_path::<Self>(self.id()))
    }
}

impl<R: Deletable + Identifiable> DeleteRoute for R {}

/// Constructors for singular resources. Every route uses the bare `PATH`.
pub trait SingletonRoute: Singleton {
    fn show() -> Mounted<Self, Single, Get>
    where
        Self: Showable,
    {
        mounted::<Self, Single, Get>(collection_path::<Self>())
    }

    fn replace() -> Mounted<Self, Single, Put>
    where
        Self: Replaceable,
    {
        mounted::<Self, Single, Put>(collection_path::<Self>())
    }

    fn update() -> Mounted<Self, Single, Patch>
    where
        Self: Patchable,
    {
        mounted::<Self, Single, Patch>(collection_path::<Self>())
    }

    fn delete() -> Mounted<Self, Single, Delete>
    where
        Self: Deletable,
    {
        mounted::<Self, Single, Delete>(collection_path::<Self>())
    }
}

impl<R: Singleton> SingletonRoute for R {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::fixtures::{Blog, Post as PostResource};
    use crate::routing::route::Route;

    #[test]
    fn test_root_routes() {
        let list: Route<PostResource, Collection, Get> = PostResource::list();
        assert_eq!(list.path(), "posts");

        let show: Route<PostResource, Single, Get> = PostResource::show(1);
        assert_eq!(show.path(), "posts/1");

        let create: Route<PostResource, Single, Post> = PostResource::create();
        assert_eq!(create.path(), "posts");

        let update: Route<PostResource, Single, Patch> = PostResource::update(2);
        let replace: Route<PostResource, Single, Put> = PostResource::replace(2);
        let delete: Route<PostResource, Single, Delete> = PostResource::delete(2);
        assert_eq!(update.path(), "posts/2");
        assert_eq!(replace.path(), "posts/2");
        assert_eq!(delete.path(), "posts/2");
    }

    #[test]
    fn test_instance_routes() {
        let post = PostResource { id: 42, title: "hello".into() };
        assert_eq!(post.show_route().path(), "posts/42");
        assert_eq!(post.replace_route().path(), "posts/42");
        assert_eq!(post.update_route().path(), "posts/42");
        assert_eq!(post.delete_route().path(), "posts/42");
    }

    #[test]
    fn test_singleton_routes() {
        let show: Route<Blog, Single, Get> = Blog::show();
        let create: Route<Blog, Single, Post> = Blog::create();
        let replace: Route<Blog, Single, Put> = Blog::replace();
        let update: Route<Blog, Single, Patch> = Blog::update();
        let delete: Route<Blog, Single, Delete> = Blog::delete();
        for path in [show.path(), create.path(), replace.path(), update.path(), delete.path()] {
            assert_eq!(path, "blog");
        }
    }
}
