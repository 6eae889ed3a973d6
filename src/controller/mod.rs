pub mod form;
mod home;
pub mod post;

pub(crate) use home::*;

use crate::error::PostBoardError;

pub async fn not_found() -> PostBoardError {
    PostBoardError::NotFound
}
