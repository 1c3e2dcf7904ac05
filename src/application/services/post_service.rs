//! Post orchestration service.
//!
//! The only place in the codebase with multi-resource consistency concerns:
//! every post write must keep the post-tag link set in sync, and every read
//! assembles the denormalized view (post + resolved tags) across three
//! repositories.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewPost, NewPostTagLink, PostUpdate, PostView, Tag};
use crate::domain::repositories::{PostRepository, PostTagRepository, TagRepository};
use crate::error::AppError;

/// Service orchestrating posts together with their tag links.
///
/// All operations issue strictly sequential repository calls and fail fast:
/// the first error aborts the remaining steps and is propagated unchanged.
/// Each repository call autocommits, so a failure mid-operation can leave
/// already-committed steps persisted (a created post without its links, or
/// deleted links with a still-present post). Callers requiring strict
/// consistency must wrap these operations in a storage-layer transaction.
pub struct PostService<P: PostRepository, T: TagRepository, L: PostTagRepository> {
    post_repository: Arc<P>,
    tag_repository: Arc<T>,
    link_repository: Arc<L>,
}

impl<P: PostRepository, T: TagRepository, L: PostTagRepository> PostService<P, T, L> {
    /// Creates a new post service.
    pub fn new(post_repository: Arc<P>, tag_repository: Arc<T>, link_repository: Arc<L>) -> Self {
        Self {
            post_repository,
            tag_repository,
            link_repository,
        }
    }

    /// Creates a post and links it to the given tags.
    ///
    /// One link is created per id in `tag_ids`, in input order; duplicates
    /// are not collapsed. When `tag_ids` is empty no tag or link repository
    /// call is made and the returned view has an empty tag list.
    ///
    /// # Errors
    ///
    /// Propagates the first repository error unchanged. A failed link
    /// creation leaves the post and any earlier links persisted.
    pub async fn create_post(
        &self,
        new_post: NewPost,
        tag_ids: Vec<i64>,
    ) -> Result<PostView, AppError> {
        let post = self.post_repository.create(new_post).await?;

        let tags = self.replace_links(post.id, &tag_ids).await?;

        Ok(PostView::from_parts(post, tags))
    }

    /// Returns every post as an aggregate view, in post-store order
    /// (most recently created first).
    ///
    /// # Errors
    ///
    /// All-or-nothing: a failed tag lookup for any post aborts the whole
    /// call and no partial list is returned.
    pub async fn get_posts(&self) -> Result<Vec<PostView>, AppError> {
        let posts = self.post_repository.list().await?;

        let mut views = Vec::with_capacity(posts.len());
        for post in posts {
            let tags = self.tag_repository.find_by_post_id(post.id).await?;
            views.push(PostView::from_parts(post, tags));
        }

        Ok(views)
    }

    /// Updates a post's title/description and replaces its entire link set.
    ///
    /// The post must exist; otherwise [`AppError::NotFound`] is returned and
    /// no mutation is performed. Link replacement is
    /// delete-all-then-recreate, not a diff: after a successful update the
    /// link set equals exactly `tag_ids`.
    ///
    /// # Errors
    ///
    /// Propagates the first repository error unchanged; steps already
    /// completed are not rolled back.
    pub async fn update_post(
        &self,
        id: i64,
        update: PostUpdate,
        tag_ids: Vec<i64>,
    ) -> Result<PostView, AppError> {
        self.get_existing_post(id).await?;

        let updated = self.post_repository.update(id, update).await?;

        self.link_repository.delete_by_post_id(id).await?;
        let tags = self.replace_links(id, &tag_ids).await?;

        Ok(PostView::from_parts(updated, tags))
    }

    /// Deletes a post and all of its tag links.
    ///
    /// The post must exist; otherwise [`AppError::NotFound`] is returned and
    /// no mutation is performed. Links are deleted first; if that fails the
    /// post itself is left untouched.
    pub async fn delete_post(&self, id: i64) -> Result<(), AppError> {
        self.get_existing_post(id).await?;

        self.link_repository.delete_by_post_id(id).await?;
        self.post_repository.delete(id).await?;

        Ok(())
    }

    /// Fetch-first existence gate shared by update and delete.
    async fn get_existing_post(&self, id: i64) -> Result<(), AppError> {
        self.post_repository
            .find_by_id(id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("Post not found", json!({ "id": id })))
    }

    /// Creates one link per tag id, in order, then resolves the view's tags.
    ///
    /// The lookup is skipped entirely when `tag_ids` is empty. Because
    /// [`TagRepository::find_by_post_id`] orders by link insertion, the
    /// returned tags preserve the order and multiplicity of `tag_ids`.
    async fn replace_links(&self, post_id: i64, tag_ids: &[i64]) -> Result<Vec<Tag>, AppError> {
        if tag_ids.is_empty() {
            return Ok(Vec::new());
        }

        for &tag_id in tag_ids {
            self.link_repository
                .create(NewPostTagLink { post_id, tag_id })
                .await?;
        }

        self.tag_repository.find_by_post_id(post_id).await
    }
}
