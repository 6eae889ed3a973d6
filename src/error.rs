use axum::{http::StatusCode, response::IntoResponse};

#[derive(Debug, thiserror::Error)]
pub enum PostBoardError {
    #[error("400 Bad Request")]
    BadRequest,

    #[error("404 Not Found")]
    NotFound,

    #[error("409 Conflict")]
    Conflict,

    #[error("500 Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl From<rinja::Error> for PostBoardError {
    fn from(value: rinja::Error) -> Self {
        Self::Internal(value.into())
    }
}

impl IntoResponse for PostBoardError {
    fn into_response(self) -> axum::response::Response {
        use PostBoardError::*;

        let code = match self {
            BadRequest => StatusCode::BAD_REQUEST,
            NotFound => StatusCode::NOT_FOUND,
            Conflict => StatusCode::CONFLICT,
            Internal(ref inner) => {
                tracing::error!("Internal server error: {inner}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (code, self.to_string()).into_response()
    }
}
