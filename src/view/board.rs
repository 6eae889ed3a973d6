use crate::{board::PostBoard, model};
use rinja::Template;

#[derive(Clone, Template)]
#[template(path = "components/post.html")]
pub struct Post {
    pub post: model::Post,
}

#[derive(Clone, Template)]
#[template(path = "components/post_form.html")]
pub struct PostForm {
    pub form: model::FormState,
    pub is_submitting: bool,
    pub error: Option<&'static str>,
}

/// The rendered collection. `oob` also emits the error paragraph as an htmx
/// out-of-band swap, for when the list is fetched on its own.
#[derive(Clone, Template)]
#[template(path = "components/post_list.html")]
pub struct PostList {
    pub posts: Vec<Post>,
    pub is_loading: bool,
    pub error: Option<&'static str>,
    pub oob: bool,
}

#[derive(Clone, Template)]
#[template(path = "components/board.html")]
pub struct Board {
    pub form: PostForm,
    pub list: PostList,
}

#[derive(Clone, Template)]
#[template(path = "pages/home.html")]
pub struct Home {
    pub board: Board,
}

impl From<&PostBoard> for PostForm {
    fn from(board: &PostBoard) -> Self {
        Self {
            form: board.form().clone(),
            is_submitting: board.is_submitting(),
            error: board.error(),
        }
    }
}

impl From<&PostBoard> for PostList {
    fn from(board: &PostBoard) -> Self {
        Self {
            posts: board
                .posts()
                .iter()
                .map(|post| Post { post: post.clone() })
                .collect(),
            is_loading: board.is_loading(),
            error: board.error(),
            oob: false,
        }
    }
}

impl From<&PostBoard> for Board {
    fn from(board: &PostBoard) -> Self {
        Self {
            form: board.into(),
            list: board.into(),
        }
    }
}

impl From<&PostBoard> for Home {
    fn from(board: &PostBoard) -> Self {
        Self {
            board: board.into(),
        }
    }
}
