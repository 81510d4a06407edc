use askama::Template;

/// The landing page. Both headings start empty; the intro event stream
/// fills them in.
#[derive(Template)]
#[template(path = "pages/index.html")]
pub struct IndexTemplate;
