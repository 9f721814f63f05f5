//! Typed per-endpoint facade over the HTTP transport wrapper.
//!
//! Purely a routing table against the `resource` / `resource/{id}` path
//! convention; all normalization and error classification semantics live in
//! [`http_client`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use http_client::{HttpClient, HttpError};

/// A post resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Server-assigned identifier.
    pub id: u64,
    /// Post title.
    pub title: String,
    /// Post body text.
    pub body: String,
    /// Authoring user id.
    #[serde(rename = "userId")]
    pub user_id: u64,
}

/// Payload for creating a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    /// Post title.
    pub title: String,
    /// Post body text.
    pub body: String,
    /// Authoring user id.
    #[serde(rename = "userId")]
    pub user_id: u64,
}

/// Partial update payload for a post. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPatch {
    /// Replacement title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement body text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Replacement authoring user id.
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

/// A user resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
}

fn post_path(id: u64) -> String {
    format!("posts/{id}")
}

fn user_path(id: u64) -> String {
    format!("users/{id}")
}

/// Post endpoints.
#[derive(Clone)]
pub struct PostsApi {
    http: Rc<HttpClient>,
}

impl PostsApi {
    /// Creates the facade over a shared client.
    pub fn new(http: Rc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists all posts.
    ///
    /// # Errors
    ///
    /// Propagates the transport wrapper's classified [`HttpError`].
    pub async fn list(&self) -> Result<Vec<Post>, HttpError> {
        self.http.get("posts").await
    }

    /// Fetches a post by id.
    ///
    /// # Errors
    ///
    /// Propagates the transport wrapper's classified [`HttpError`].
    pub async fn get(&self, id: u64) -> Result<Post, HttpError> {
        self.http.get(&post_path(id)).await
    }

    /// Creates a post.
    ///
    /// # Errors
    ///
    /// Propagates the transport wrapper's classified [`HttpError`].
    pub async fn create(&self, post: &NewPost) -> Result<Post, HttpError> {
        self.http.post("posts", post).await
    }

    /// Replaces a post by id.
    ///
    /// # Errors
    ///
    /// Propagates the transport wrapper's classified [`HttpError`].
    pub async fn update(&self, id: u64, patch: &PostPatch) -> Result<Post, HttpError> {
        self.http.put(&post_path(id), patch).await
    }

    /// Deletes a post by id.
    ///
    /// # Errors
    ///
    /// Propagates the transport wrapper's classified [`HttpError`].
    pub async fn delete(&self, id: u64) -> Result<(), HttpError> {
        self.http
            .delete::<serde_json::Value>(&post_path(id))
            .await
            .map(|_| ())
    }
}

/// User endpoints.
#[derive(Clone)]
pub struct UsersApi {
    http: Rc<HttpClient>,
}

impl UsersApi {
    /// Creates the facade over a shared client.
    pub fn new(http: Rc<HttpClient>) -> Self {
        Self { http }
    }

    /// Fetches a user by id.
    ///
    /// # Errors
    ///
    /// Propagates the transport wrapper's classified [`HttpError`].
    pub async fn get(&self, id: u64) -> Result<User, HttpError> {
        self.http.get(&user_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_paths_follow_the_convention() {
        assert_eq!(post_path(17), "posts/17");
        assert_eq!(user_path(1), "users/1");
    }

    #[test]
    fn post_wire_shape_uses_camel_case_user_id() {
        let post = Post {
            id: 1,
            title: "t".to_string(),
            body: "b".to_string(),
            user_id: 9,
        };
        let value = serde_json::to_value(&post).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({"id": 1, "title": "t", "body": "b", "userId": 9})
        );
    }

    #[test]
    fn post_patch_skips_absent_fields() {
        let patch = PostPatch {
            title: Some("new".to_string()),
            ..PostPatch::default()
        };
        let value = serde_json::to_value(&patch).expect("serialize");
        assert_eq!(value, serde_json::json!({"title": "new"}));
    }
}
