use crate::{context::BoardContext, postboard_view, view};
use axum::{extract::State, response::IntoResponse};

pub async fn home(State(context): State<BoardContext>) -> impl IntoResponse {
    let board = context.board().read().await;

    postboard_view!(view::Home::from(&*board), {
        "title" => "Posts",
    })
}

pub async fn board(State(context): State<BoardContext>) -> view::View<view::Board> {
    let board = context.board().read().await;

    view::View(view::Board::from(&*board))
}
