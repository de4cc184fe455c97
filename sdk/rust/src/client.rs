//! Async client over the blog resources.

use pathwise::adapter::{Adapter, ReqwestAdapter};
use pathwise::error::BuildError;
use pathwise::prelude::*;
use pathwise::ServiceConfig;
use serde::Serialize;
use thiserror::Error;

use crate::resources::{Comment, NewPost, Post, Profile, ProfilePatch, User};

#[derive(Debug, Error)]
pub enum BlogError {
    #[error(transparent)]
    Request(#[from] pathwise::Error),

    #[error("cannot encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("server returned no payload where one was expected")]
    MissingPayload,
}

/// Blog API client.
#[derive(Debug)]
pub struct BlogClient<A: ?Sized = ReqwestAdapter> {
    service: Service<A>,
}

impl<A: ?Sized> Clone for BlogClient<A> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

impl BlogClient<ReqwestAdapter> {
    /// HTTP client configured from a `ServiceConfig`. Needs a tokio runtime.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, BuildError> {
        let adapter = ReqwestAdapter::from_config(config)?;
        Ok(Self::new(Service::from_config(adapter, config)?))
    }
}

impl<A: Adapter + ?Sized> BlogClient<A> {
    pub fn new(service: Service<A>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &Service<A> {
        &self.service
    }

    pub async fn posts(&self) -> Result<Vec<Post>, BlogError> {
        let posts = self.service.send(Post::list(), Options::default()).await.into_result()?;
        Ok(posts.unwrap_or_default())
    }

    pub async fn post(&self, id: u64) -> Result<Post, BlogError> {
        let post = self.service.send(Post::show(id), Options::default()).await.into_result()?;
        post.ok_or(BlogError::MissingPayload)
    }

    pub async fn comments(&self, post_id: u64) -> Result<Vec<Comment>, BlogError> {
        let route = Post::show(post_id) / Comment::list();
        let comments = self.service.send(route, Options::default()).await.into_result()?;
        Ok(comments.unwrap_or_default())
    }

    pub async fn create_post(&self, post: &NewPost) -> Result<Post, BlogError> {
        let created = self
            .service
            .send(Post::create(), json_body(post)?)
            .await
            .into_result()?;
        created.ok_or(BlogError::MissingPayload)
    }

    pub async fn delete_post(&self, id: u64) -> Result<(), BlogError> {
        // Some servers echo the deleted record; the payload is not needed.
        self.service.send(Post::delete(id), Options::default()).await.into_result()?;
        Ok(())
    }

    pub async fn users(&self) -> Result<Vec<User>, BlogError> {
        let users = self.service.send(User::list(), Options::default()).await.into_result()?;
        Ok(users.unwrap_or_default())
    }

    pub async fn user(&self, id: u64) -> Result<User, BlogError> {
        let user = self.service.send(User::show(id), Options::default()).await.into_result()?;
        user.ok_or(BlogError::MissingPayload)
    }

    pub async fn profile(&self) -> Result<Profile, BlogError> {
        let profile = self.service.send(Profile::show(), Options::default()).await.into_result()?;
        profile.ok_or(BlogError::MissingPayload)
    }

    pub async fn update_profile(&self, patch: &ProfilePatch) -> Result<Profile, BlogError> {
        let profile = self
            .service
            .send(Profile::update(), json_body(patch)?)
            .await
            .into_result()?;
        profile.ok_or(BlogError::MissingPayload)
    }
}

fn json_body<T: Serialize>(value: &T) -> Result<Options, BlogError> {
    Ok(Options::new()
        .raw_header("Content-Type", "application/json")
        .body(serde_json::to_string(value)?))
}
