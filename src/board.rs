//! The post board: the collection of posts, the create form and the flags
//! describing what the board is currently doing.
//!
//! All changes go through the transition methods on [`PostBoard`]. Network
//! calls happen outside; callers hand the outcome back in with
//! [`PostBoard::finish_load`] and [`PostBoard::finish_submit`].

use crate::{
    api,
    model::{Field, FormState, NewPost, Post},
};
use tracing::{debug, error, info};

pub const LOAD_FAILED: &str = "Failed to load posts.";
pub const CREATE_FAILED: &str = "Failed to create post.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Pending,
    Loaded,
    Failed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

/// A submission was requested while another one is still in flight.
#[derive(Debug, thiserror::Error)]
#[error("a post is already being submitted")]
pub struct Busy;

#[derive(Clone, Debug)]
pub struct PostBoard {
    posts: Vec<Post>,
    form: FormState,
    load: LoadState,
    phase: Phase,
    error: Option<&'static str>,
    author_id: i64,
}

impl PostBoard {
    pub fn new(author_id: i64) -> Self {
        Self {
            posts: Vec::new(),
            form: FormState::default(),
            load: LoadState::default(),
            phase: Phase::default(),
            error: None,
            author_id,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Pending
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Applies the outcome of the initial fetch.
    ///
    /// Posts created while the fetch was in flight stay on top; the fetched
    /// sequence follows them in the order the service returned. Only the
    /// first outcome is applied.
    pub fn finish_load(&mut self, result: Result<Vec<Post>, api::Error>) {
        if self.load != LoadState::Pending {
            debug!("ignoring posts fetch that completed after the board loaded");
            return;
        }

        match result {
            Ok(fetched) => {
                info!("loaded {} posts", fetched.len());
                self.posts.extend(fetched);
                self.load = LoadState::Loaded;
            }
            Err(e) => {
                error!("Error fetching posts: {e}");
                self.error = Some(LOAD_FAILED);
                self.load = LoadState::Failed;
            }
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Enters the submitting phase and returns the payload to send.
    pub fn begin_submit(&mut self) -> Result<NewPost, Busy> {
        if self.phase == Phase::Submitting {
            return Err(Busy);
        }

        self.phase = Phase::Submitting;
        self.error = None;

        Ok(NewPost {
            title: self.form.title.clone(),
            body: self.form.body.clone(),
            user_id: self.author_id,
        })
    }

    /// Applies the outcome of a create request and leaves the submitting
    /// phase.
    pub fn finish_submit(&mut self, result: Result<Post, api::Error>) {
        match result {
            Ok(post) => {
                info!("created post {}", post.id);
                self.posts.insert(0, post);
                self.form.clear();
            }
            Err(e) => {
                error!("Error creating post: {e}");
                self.error = Some(CREATE_FAILED);
            }
        }

        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn post(id: i64, title: &str) -> Post {
        Post {
            id,
            title: title.into(),
            body: format!("{title} body"),
            user_id: 1,
        }
    }

    fn filled(board: &mut PostBoard) {
        board.set_field(Field::Title, "A title");
        board.set_field(Field::Body, "A body");
    }

    fn ids(board: &PostBoard) -> Vec<i64> {
        board.posts().iter().map(|p| p.id).collect()
    }

    #[test]
    fn starts_empty_and_loading() {
        let board = PostBoard::new(1);

        assert!(board.posts().is_empty());
        assert!(board.is_loading());
        assert!(!board.is_submitting());
        assert_eq!(board.error(), None);
        assert_eq!(board.form(), &FormState::default());
    }

    #[test]
    fn successful_load_keeps_service_order() {
        let mut board = PostBoard::new(1);
        let fetched: Vec<Post> = (0..5).map(|_| Post::fake()).collect();

        board.finish_load(Ok(fetched.clone()));

        assert_eq!(board.posts(), fetched.as_slice());
        assert_eq!(board.load_state(), LoadState::Loaded);
        assert_eq!(board.error(), None);
    }

    #[test]
    fn failed_load_leaves_collection_empty() {
        let mut board = PostBoard::new(1);

        board.finish_load(Err(api::Error::Status(StatusCode::NOT_FOUND)));

        assert!(board.posts().is_empty());
        assert_eq!(board.error(), Some(LOAD_FAILED));
        assert_eq!(board.load_state(), LoadState::Failed);
        assert!(!board.is_loading());
    }

    #[test]
    fn submit_builds_payload_with_author() {
        let mut board = PostBoard::new(7);
        filled(&mut board);

        let payload = board.begin_submit().unwrap();

        assert_eq!(
            payload,
            NewPost {
                title: "A title".into(),
                body: "A body".into(),
                user_id: 7,
            }
        );
        assert!(board.is_submitting());
    }

    #[test]
    fn second_submit_is_refused_while_pending() {
        let mut board = PostBoard::new(1);
        filled(&mut board);

        board.begin_submit().unwrap();

        assert!(board.begin_submit().is_err());
        assert!(board.is_submitting());
    }

    #[test]
    fn successful_submit_prepends_and_clears_form() {
        let mut board = PostBoard::new(1);
        board.finish_load(Ok(vec![post(1, "one"), post(2, "two")]));
        filled(&mut board);

        board.begin_submit().unwrap();
        board.finish_submit(Ok(post(101, "A title")));

        assert_eq!(ids(&board), vec![101, 1, 2]);
        assert_eq!(board.form(), &FormState::default());
        assert!(!board.is_submitting());
        assert_eq!(board.error(), None);
    }

    #[test]
    fn failed_submit_keeps_form_and_reenables() {
        let mut board = PostBoard::new(1);
        board.finish_load(Ok(vec![post(1, "one")]));
        filled(&mut board);

        board.begin_submit().unwrap();
        board.finish_submit(Err(api::Error::Status(StatusCode::INTERNAL_SERVER_ERROR)));

        assert_eq!(board.error(), Some(CREATE_FAILED));
        assert!(!board.is_submitting());
        assert_eq!(board.form().title, "A title");
        assert_eq!(board.form().body, "A body");
        assert_eq!(ids(&board), vec![1]);
    }

    #[test]
    fn submit_clears_previous_error() {
        let mut board = PostBoard::new(1);
        board.finish_load(Err(api::Error::Status(StatusCode::BAD_GATEWAY)));
        filled(&mut board);

        board.begin_submit().unwrap();

        assert_eq!(board.error(), None);
    }

    #[test]
    fn created_post_survives_a_late_load() {
        let mut board = PostBoard::new(1);
        filled(&mut board);

        board.begin_submit().unwrap();
        board.finish_submit(Ok(post(101, "A title")));
        board.finish_load(Ok(vec![post(1, "one"), post(2, "two")]));

        assert_eq!(ids(&board), vec![101, 1, 2]);
    }

    #[test]
    fn only_first_load_outcome_applies() {
        let mut board = PostBoard::new(1);

        board.finish_load(Ok(vec![post(1, "one")]));
        board.finish_load(Ok(vec![post(2, "two")]));
        board.finish_load(Err(api::Error::Status(StatusCode::NOT_FOUND)));

        assert_eq!(ids(&board), vec![1]);
        assert_eq!(board.error(), None);
    }
}
