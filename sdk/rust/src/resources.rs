//! Resource descriptors for the blog API.
//!
//! - `posts` (root, every capability)
//! - `posts/{id}/comments` (child of `Post`, every capability)
//! - `users` (root, list/show)
//! - `profile` (root singleton, show/update)

use pathwise::error::DecodeError;
use pathwise::routing::{decode_json, Identifiable, Listable, Resource, Root, Singleton, Under};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Post {
    pub id: u64,
    #[serde(rename = "userId", default)]
    pub user_id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// Payload for creating a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPost {
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
    pub body: String,
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
    type Id = u64;

    fn id(&self) -> &u64 {
        &self.id
    }
}

pathwise::restful!(Post);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Comment {
    pub id: u64,
    #[serde(rename = "postId", default)]
    pub post_id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
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
    type Id = u64;

    fn id(&self) -> &u64 {
        &self.id
    }
}

pathwise::restful!(Comment);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

impl Resource for User {
    const PATH: &'static str = "users";
    type Mount = Root;
    type Singular = User;

    fn decode_singular(bytes: &[u8]) -> Result<User, DecodeError> {
        decode_json(bytes)
    }
}

impl Listable for User {
    type Collection = Vec<User>;

    fn decode_collection(bytes: &[u8]) -> Result<Vec<User>, DecodeError> {
        decode_json(bytes)
    }
}

impl Identifiable for User {
    type Id = u64;

    fn id(&self) -> &u64 {
        &self.id
    }
}

pathwise::capabilities!(User: Showable);

/// The signed-in user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub bio: String,
}

/// Fields of a profile to change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl Resource for Profile {
    const PATH: &'static str = "profile";
    type Mount = Root;
    type Singular = Profile;

    fn decode_singular(bytes: &[u8]) -> Result<Profile, DecodeError> {
        decode_json(bytes)
    }
}

impl Singleton for Profile {}

pathwise::capabilities!(Profile: Showable, Patchable);
