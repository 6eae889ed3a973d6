mod board;
mod layout;

pub use board::*;
pub use layout::*;

use crate::{error::PostBoardError, extract::HxRequest};
use axum::response::{Html, IntoResponse, Response};
use rinja::Template;
use std::collections::BTreeMap;

/// Wraps full page renders in the layout. htmx requests get the bare
/// fragment.
pub async fn render_view(HxRequest(is_htmx): HxRequest, response: Response) -> Response {
    if is_htmx {
        return response;
    }

    let Some(RenderedTemplate(content)) = response.extensions().get::<RenderedTemplate>().cloned()
    else {
        return response;
    };

    let title = response
        .extensions()
        .get::<ViewData>()
        .and_then(|data| data.get("title").cloned())
        .unwrap_or_else(|| "Posts".to_string());

    let layout = Layout {
        title,
        content,
        version_string: env!("CARGO_PKG_VERSION").to_string(),
    };

    match layout.render() {
        Ok(html) => (response.status(), Html(html)).into_response(),
        Err(e) => PostBoardError::from(e).into_response(),
    }
}

#[derive(Clone, Default)]
pub struct ViewData(pub BTreeMap<String, String>);

impl ViewData {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }
}

impl std::ops::DerefMut for ViewData {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl std::ops::Deref for ViewData {
    type Target = BTreeMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[macro_export]
macro_rules! view_data {
    ($($key:expr => $value:expr, )*) => {
        {
            let mut _data = $crate::view::ViewData::new();
        $(
            let _ = _data.insert($key.to_string(), $value.to_string());
        )*
            _data
        }
    }
}

#[macro_export(local_inner_macros)]
macro_rules! postboard_view {
    ($template:expr , { $($data:tt)* }) => {
        $crate::view::ViewWithData($template, view_data! { $($data)* })
    };
    ($template:expr, $data:expr) => {
        $crate::view::ViewWithData($template, $data)
    };
    ($template:expr) => {
        $crate::view::View($template)
    };
}

#[derive(Clone)]
pub struct View<T: Template>(pub T);

#[derive(Clone)]
pub struct ViewWithData<T: Template>(pub T, pub ViewData);

#[derive(Clone)]
struct RenderedTemplate(String);

fn rendered(template: &impl Template) -> Response {
    match template.render() {
        Ok(html) => {
            let mut response = Html(html.clone()).into_response();
            response.extensions_mut().insert(RenderedTemplate(html));
            response
        }
        Err(e) => PostBoardError::from(e).into_response(),
    }
}

impl<T: Template> IntoResponse for View<T> {
    fn into_response(self) -> Response {
        rendered(&self.0)
    }
}

impl<T: Template> IntoResponse for ViewWithData<T> {
    fn into_response(self) -> Response {
        let mut response = rendered(&self.0);
        response.extensions_mut().insert(self.1);
        response
    }
}
