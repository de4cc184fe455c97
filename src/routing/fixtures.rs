//! Small blog-shaped resource set used by unit tests and doctests.
//!
//! Public only because doctests, including the `compile_fail` examples in
//! [`route`](crate::routing::route), build against the crate as an outside
//! user and cannot see `#[cfg(test)]` items. Hidden from the docs and not part
//! of the supported API; it may change without notice.
//!
//! - `Post`: root, plural, every capability
//! - `Comment`: child of `Post`, plural, every capability
//! - `Commenter`: child of `Comment`, plural, list/show/delete
//! - `Blog`: root, singular, every capability except list
//! - `Author`: child of `Blog`, singular, every capability except list

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::routing::resource::{decode_json, Identifiable, Listable, Resource, Root, Singleton, Under};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Post {
    pub id: i64,
    #[serde(default)]
    pub title: String,
}

impl Post {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: String::new(),
        }
    }
}

impl Resource for Post {
    const PATH: &'static str = "posts";
    type Mount = Root;
    type Singular = Post;

    fn decode_singular(bytes: &[u8]) -> Result<Post, DecodeError> {
        decode_json(bytes)
    }
}

impl Listable for Post {
    type Collection = Vec<Post>;

    fn decode_collection(bytes: &[u8]) -> Result<Vec<Post>, DecodeError> {
        decode_json(bytes)
    }
}

impl Identifiable for Post {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}

crate::restful!(Post);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Comment {
    pub id: i64,
    #[serde(default)]
    pub body: String,
}

impl Resource for Comment {
    const PATH: &'static str = "comments";
    type Mount = Under<Post>;
    type Singular = Comment;

    fn decode_singular(bytes: &[u8]) -> Result<Comment, DecodeError> {
        decode_json(bytes)
    }
}

impl Listable for Comment {
    type Collection = Vec<Comment>;

    fn decode_collection(bytes: &[u8]) -> Result<Vec<Comment>, DecodeError> {
        decode_json(bytes)
    }
}

impl Identifiable for Comment {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}

crate::restful!(Comment);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Commenter {
    pub id: i64,
}

impl Resource for Commenter {
    const PATH: &'static str = "commenter";
    type Mount = Under<Comment>;
    type Singular = Commenter;

    fn decode_singular(bytes: &[u8]) -> Result<Commenter, DecodeError> {
        decode_json(bytes)
    }
}

impl Listable for Commenter {
    type Collection = Vec<Commenter>;

    fn decode_collection(bytes: &[u8]) -> Result<Vec<Commenter>, DecodeError> {
        decode_json(bytes)
    }
}

impl Identifiable for Commenter {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}

crate::capabilities!(Commenter: Showable, Deletable);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Blog {
    pub name: String,
}

impl Resource for Blog {
    const PATH: &'static str = "blog";
    type Mount = Root;
    type Singular = Blog;

    fn decode_singular(bytes: &[u8]) -> Result<Blog, DecodeError> {
        decode_json(bytes)
    }
}

impl Singleton for Blog {}

crate::capabilities!(Blog: Showable, Creatable, Replaceable, Patchable, Deletable);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Author {
    pub name: String,
}

impl Resource for Author {
    const PATH: &'static str = "author";
    type Mount = Under<Blog>;
    type Singular = Author;

    fn decode_singular(bytes: &[u8]) -> Result<Author, DecodeError> {
        decode_json(bytes)
    }
}

impl Singleton for Author {}

crate::capabilities!(Author: Showable, Creatable, Replaceable, Patchable, Deletable);
