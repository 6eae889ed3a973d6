use crate::{
    context::BoardContext,
    error::PostBoardError,
    extract::HxRequest,
    model::{Field, FormState},
    view,
};
use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect, Response},
};
use tracing::{debug, warn};
use validator::Validate;

pub async fn list(State(context): State<BoardContext>) -> view::View<view::PostList> {
    let board = context.board().read().await;

    let mut list = view::PostList::from(&*board);
    list.oob = true;

    view::View(list)
}

pub async fn create(
    State(context): State<BoardContext>,
    HxRequest(is_htmx): HxRequest,
    Form(input): Form<FormState>,
) -> Result<Response, PostBoardError> {
    if let Err(errors) = input.validate() {
        warn!("Rejected post form: {errors}");
        return Err(PostBoardError::BadRequest);
    }

    {
        let mut board = context.board().write().await;
        // Leave the form alone while another submission owns it.
        if !board.is_submitting() {
            board.set_field(Field::Title, input.title);
            board.set_field(Field::Body, input.body);
        }
    }

    // htmx does not swap a 409; the refused form keeps its input.
    if let Err(busy) = context.submit().await {
        debug!("{busy}");
        return Err(PostBoardError::Conflict);
    }

    if !is_htmx {
        return Ok(Redirect::to("/").into_response());
    }

    let board = context.board().read().await;
    Ok(view::View(view::Board::from(&*board)).into_response())
}
