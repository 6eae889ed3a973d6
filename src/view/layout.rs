use rinja::Template;

#[derive(Template)]
#[template(path = "layout.html")]
pub struct Layout {
    pub title: String,
    pub content: String,
    pub version_string: String,
}
