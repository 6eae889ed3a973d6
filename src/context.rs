use crate::{
    api::PostsApi,
    board::{Busy, PostBoard},
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Shared application state: the board and the service it talks to.
#[derive(Clone)]
pub struct BoardContext {
    board: Arc<RwLock<PostBoard>>,
    api: Arc<dyn PostsApi>,
}

impl BoardContext {
    pub fn new(api: impl PostsApi, author_id: i64) -> Self {
        Self {
            board: Arc::new(RwLock::new(PostBoard::new(author_id))),
            api: Arc::new(api),
        }
    }

    pub fn board(&self) -> &RwLock<PostBoard> {
        &self.board
    }

    /// Fetches the initial collection and hands the outcome to the board.
    pub async fn load_posts(&self) {
        let result = self.api.list_posts().await;
        self.board.write().await.finish_load(result);
    }

    /// Submits the current form. The board lock is released while the create
    /// request is in flight so readers see the submitting state.
    ///
    /// The request runs on its own task, so the board leaves the submitting
    /// phase even if the caller is dropped before it completes.
    pub async fn submit(&self) -> Result<(), Busy> {
        let payload = self.board.write().await.begin_submit()?;
        debug!(title = %payload.title, "submitting post");

        let board = self.board.clone();
        let api = self.api.clone();
        let task = tokio::task::spawn(async move {
            let result = api.create_post(&payload).await;
            board.write().await.finish_submit(result);
        });

        if let Err(e) = task.await {
            // The task died before finishing; release the phase here.
            self.board.write().await.finish_submit(Err(e.into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api,
        model::{Field, NewPost, Post},
    };
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use tokio::sync::Notify;

    /// Holds create requests until released.
    struct GatedApi {
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl PostsApi for GatedApi {
        async fn list_posts(&self) -> Result<Vec<Post>, api::Error> {
            Err(api::Error::Status(StatusCode::SERVICE_UNAVAILABLE))
        }

        async fn create_post(&self, post: &NewPost) -> Result<Post, api::Error> {
            self.gate.notified().await;
            Ok(Post {
                id: 101,
                title: post.title.clone(),
                body: post.body.clone(),
                user_id: post.user_id,
            })
        }
    }

    #[tokio::test]
    async fn submitting_state_is_visible_while_request_is_pending() {
        let gate = Arc::new(Notify::new());
        let context = BoardContext::new(GatedApi { gate: gate.clone() }, 1);
        {
            let mut board = context.board().write().await;
            board.set_field(Field::Title, "t");
            board.set_field(Field::Body, "b");
        }

        let pending = tokio::spawn({
            let context = context.clone();
            async move { context.submit().await }
        });

        while !context.board().read().await.is_submitting() {
            tokio::task::yield_now().await;
        }
        assert!(context.submit().await.is_err());

        gate.notify_one();
        pending.await.unwrap().unwrap();

        let board = context.board().read().await;
        assert!(!board.is_submitting());
        assert_eq!(board.posts()[0].id, 101);
        assert_eq!(board.form().title, "");
    }

    #[tokio::test]
    async fn dropped_submit_still_leaves_submitting_phase() {
        let gate = Arc::new(Notify::new());
        let context = BoardContext::new(GatedApi { gate: gate.clone() }, 1);
        {
            let mut board = context.board().write().await;
            board.set_field(Field::Title, "t");
            board.set_field(Field::Body, "b");
        }

        let pending = tokio::spawn({
            let context = context.clone();
            async move { context.submit().await }
        });
        while !context.board().read().await.is_submitting() {
            tokio::task::yield_now().await;
        }

        pending.abort();
        assert!(pending.await.unwrap_err().is_cancelled());

        gate.notify_one();
        while context.board().read().await.is_submitting() {
            tokio::task::yield_now().await;
        }

        {
            let board = context.board().read().await;
            assert_eq!(board.posts()[0].id, 101);
            assert_eq!(board.error(), None);
        }

        let retry = tokio::spawn({
            let context = context.clone();
            async move { context.submit().await }
        });
        while !context.board().read().await.is_submitting() {
            tokio::task::yield_now().await;
        }
        gate.notify_one();
        assert!(retry.await.unwrap().is_ok());
        assert!(!context.board().read().await.is_submitting());
    }

    #[tokio::test]
    async fn failed_load_sets_error() {
        let context = BoardContext::new(
            GatedApi {
                gate: Arc::new(Notify::new()),
            },
            1,
        );

        context.load_posts().await;

        let board = context.board().read().await;
        assert_eq!(board.error(), Some(crate::board::LOAD_FAILED));
        assert!(board.posts().is_empty());
    }
}
