use crate::{context::BoardContext, error::PostBoardError, model::Field};
use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::debug;

/// htmx sends every value of the enclosing form; only the named field is
/// applied.
#[derive(Debug, Deserialize)]
pub struct FieldInput {
    title: Option<String>,
    body: Option<String>,
}

impl FieldInput {
    fn take(self, field: Field) -> Option<String> {
        match field {
            Field::Title => self.title,
            Field::Body => self.body,
        }
    }
}

pub async fn update(
    State(context): State<BoardContext>,
    Path(field): Path<Field>,
    Form(input): Form<FieldInput>,
) -> Result<StatusCode, PostBoardError> {
    let value = input.take(field).ok_or(PostBoardError::BadRequest)?;

    debug!(%field, "form field changed");
    context.board().write().await.set_field(field, value);

    Ok(StatusCode::NO_CONTENT)
}
