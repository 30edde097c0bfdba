//! In-memory post store.
//!
//! The store is a plain value with no locking of its own. [`App`](crate::App)
//! owns exactly one behind a mutex, so every handler sees it exclusively for
//! its whole run.

use std::collections::VecDeque;

use serde::Serialize;
use tracing::debug;

/// A post record, serialized as
/// `{"id":1,"content":"…","created":1700000000000,"removed":false}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: u64,
    pub content: String,
    /// Milliseconds since the Unix epoch.
    pub created: i64,
    pub removed: bool,
}

impl Post {
    pub fn is_active(&self) -> bool {
        !self.removed
    }
}

/// Result of [`PostStore::restore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    Restored(Post),
    AlreadyActive,
    NotFound,
}

/// Posts, newest first, plus the id counter.
///
/// Posts are never erased: deletion only flips [`Post::removed`].
#[derive(Debug)]
pub struct PostStore {
    posts: VecDeque<Post>,
    next_id: u64,
}

impl PostStore {
    pub fn new() -> Self {
        Self { posts: VecDeque::new(), next_id: 1 }
    }

    /// Number of stored posts, removed ones included.
    pub fn len(&self) -> usize { self.posts.len() }
    pub fn is_empty(&self) -> bool { self.posts.is_empty() }

    /// Creates a post and puts it at the front of the list.
    pub fn create(&mut self, content: impl Into<String>) -> Post {
        let post = Post {
            id: self.next_id,
            content: content.into(),
            created: chrono::Utc::now().timestamp_millis(),
            removed: false,
        };
        self.next_id += 1;
        self.posts.push_front(post.clone());
        debug!(id = post.id, "post created");
        post
    }

    /// First post with `id`. Removed posts count as absent unless
    /// `include_removed` is set.
    pub fn find_by_id(&self, id: u64, include_removed: bool) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id && (include_removed || p.is_active()))
    }

    /// All active posts in store order (newest first).
    pub fn list_active(&self) -> Vec<Post> {
        self.posts.iter().filter(|p| p.is_active()).cloned().collect()
    }

    /// Replaces the content of an active post.
    pub fn edit(&mut self, id: u64, content: impl Into<String>) -> Option<Post> {
        let post = self.active_mut(id)?;
        post.content = content.into();
        debug!(id, "post edited");
        Some(post.clone())
    }

    /// Marks an active post as removed.
    pub fn soft_delete(&mut self, id: u64) -> Option<Post> {
        let post = self.active_mut(id)?;
        post.removed = true;
        debug!(id, "post removed");
        Some(post.clone())
    }

    /// Brings a removed post back.
    pub fn restore(&mut self, id: u64) -> RestoreOutcome {
        match self.posts.iter_mut().find(|p| p.id == id) {
            Some(post) if post.removed => {
                post.removed = false;
                debug!(id, "post restored");
                RestoreOutcome::Restored(post.clone())
            }
            Some(_) => RestoreOutcome::AlreadyActive,
            None => RestoreOutcome::NotFound,
        }
    }

    fn active_mut(&mut self, id: u64) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == id && p.is_active())
    }
}

impl Default for PostStore {
    fn default() -> Self { Self::new() }
}
