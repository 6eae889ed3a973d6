mod form;
mod post;

pub use form::*;
pub use post::*;
