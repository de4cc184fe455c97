//! Client for a JSONPlaceholder-shaped blog API.
//!
//! Resources live in `resources`; `BlogClient` wraps a `Service` with one
//! async method per operation.

pub mod client;
pub mod resources;

pub use client::{BlogClient, BlogError};
pub use resources::{Comment, NewPost, Post, Profile, ProfilePatch, User};
