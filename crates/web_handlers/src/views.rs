use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use campgrounds::Campground;

use crate::fault::Fault;

/// A view name together with its data context
#[derive(Debug)]
pub enum View<'a> {
    /// Landing page
    Home,
    /// Every campground
    Index {
        /// Campgrounds to list
        campgrounds: &'a [Campground],
    },
    /// Creation form
    New,
    /// Detail page
    Show {
        /// Campground to show
        campground: &'a Campground,
    },
    /// Edit form prefilled with the current values
    Edit {
        /// Campground being edited
        campground: &'a Campground,
    },
    /// Failure page rendered by the fault normalizer
    Error {
        /// The fault being reported
        fault: &'a Fault,
    },
}

impl View<'_> {
    /// Template-style name of the view
    pub fn name(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Index { .. } => "campgrounds/index",
            View::New => "campgrounds/new",
            View::Show { .. } => "campgrounds/show",
            View::Edit { .. } => "campgrounds/edit",
            View::Error { .. } => "error",
        }
    }

    fn title(&self) -> String {
        match self {
            View::Home => "YelpCamp".to_string(),
            View::Index { .. } => "All Campgrounds".to_string(),
            View::New => "New Campground".to_string(),
            View::Show { campground } => campground.title.clone(),
            View::Edit { campground } => format!("Edit {}", campground.title),
            View::Error { fault } => format!("Error {}", fault.http_status.as_u16()),
        }
    }
}

/// Renders a view into a complete HTML document
pub fn render(view: &View<'_>) -> String {
    let body = match view {
        View::Home => HOME_HTML.to_string(),
        View::Index { campgrounds } => index_body(campgrounds),
        View::New => new_body(),
        View::Show { campground } => show_body(campground),
        View::Edit { campground } => edit_body(campground),
        View::Error { fault } => error_body(fault),
    };

    format!(
        "{}<title>{}</title>\n</head>\n<body>\n{}\n<main class=\"container\">\n{}\n</main>\n</body>\n</html>\n",
        LAYOUT_HEAD_HTML,
        escape_html(&view.title()),
        NAVBAR_HTML,
        body
    )
}

/// Renders a view as a `200 OK` HTML response
pub fn page(view: &View<'_>) -> HttpResponse {
    render_with_status(StatusCode::OK, view)
}

/// Renders a view as an HTML response with the given status
pub fn render_with_status(status: StatusCode, view: &View<'_>) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(render(view))
}

/// Escapes text for use in HTML content and attribute values
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn index_body(campgrounds: &[Campground]) -> String {
    let mut html = String::from("<h1>All Campgrounds</h1>\n<a href=\"/campgrounds/new\">Add Campground</a>\n");

    if campgrounds.is_empty() {
        html.push_str("<p>No campgrounds yet.</p>\n");
        return html;
    }

    html.push_str("<ul class=\"campgrounds\">\n");
    for campground in campgrounds {
        html.push_str(&format!(
            r#"<li class="card">
    <img src="{image}" alt="">
    <h5><a href="/campgrounds/{id}">{title}</a></h5>
    <p>{description}</p>
    <small>{location}</small>
</li>
"#,
            id = campground.id,
            image = escape_html(&campground.image),
            title = escape_html(&campground.title),
            description = escape_html(&campground.description),
            location = escape_html(&campground.location),
        ));
    }
    html.push_str("</ul>\n");
    html
}

fn show_body(campground: &Campground) -> String {
    format!(
        r#"<div class="card">
    <img src="{image}" alt="">
    <h1>{title}</h1>
    <p>{description}</p>
    <ul>
        <li class="location">{location}</li>
        <li class="price">${price}/night</li>
    </ul>
    <a href="/campgrounds/{id}/edit">Edit</a>
    <form action="/campgrounds/{id}?_method=DELETE" method="POST">
        <button>Delete</button>
    </form>
    <a href="/campgrounds">All Campgrounds</a>
</div>"#,
        id = campground.id,
        image = escape_html(&campground.image),
        title = escape_html(&campground.title),
        description = escape_html(&campground.description),
        location = escape_html(&campground.location),
        price = campground.price,
    )
}

fn new_body() -> String {
    format!(
        "<h1>New Campground</h1>\n<form action=\"/campgrounds\" method=\"POST\">\n{}\n    <button>Add Campground</button>\n</form>\n<a href=\"/campgrounds\">All Campgrounds</a>",
        campground_inputs(None)
    )
}

fn edit_body(campground: &Campground) -> String {
    format!(
        "<h1>Edit Campground</h1>\n<form action=\"/campgrounds/{id}?_method=PUT\" method=\"POST\">\n{inputs}\n    <button>Update Campground</button>\n</form>\n<a href=\"/campgrounds/{id}\">Back To Campground</a>",
        id = campground.id,
        inputs = campground_inputs(Some(campground)),
    )
}

fn campground_inputs(current: Option<&Campground>) -> String {
    let value = |pick: fn(&Campground) -> String| {
        current.map(|c| escape_html(&pick(c))).unwrap_or_default()
    };

    format!(
        r#"    <label for="title">Title</label>
    <input type="text" id="title" name="campground[title]" value="{title}" required>
    <label for="location">Location</label>
    <input type="text" id="location" name="campground[location]" value="{location}" required>
    <label for="image">Image Url</label>
    <input type="text" id="image" name="campground[image]" value="{image}" required>
    <label for="price">Campground Price</label>
    <input type="number" id="price" name="campground[price]" value="{price}" min="0" step="0.01" required>
    <label for="description">Description</label>
    <textarea id="description" name="campground[description]" required>{description}</textarea>"#,
        title = value(|c| c.title.clone()),
        location = value(|c| c.location.clone()),
        image = value(|c| c.image.clone()),
        price = value(|c| c.price.to_string()),
        description = value(|c| c.description.clone()),
    )
}

fn error_body(fault: &Fault) -> String {
    format!(
        r#"<div class="alert" role="alert">
    <h4>{status}</h4>
    <p>{message}</p>
    <p><small>{kind}</small></p>
</div>"#,
        status = fault.http_status.as_u16(),
        message = escape_html(fault.display_message()),
        kind = fault.kind.as_str(),
    )
}

const LAYOUT_HEAD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<style>
    body { font-family: Arial, sans-serif; margin: 0; background: #f8f9fa; }
    nav { background: #212529; padding: 12px 24px; }
    nav a { color: #fff; margin-right: 16px; text-decoration: none; }
    .container { max-width: 960px; margin: 24px auto; padding: 0 16px; }
    .card { background: #fff; border-radius: 8px; padding: 16px; margin-bottom: 16px; }
    .card img { max-width: 100%; }
    .alert { background: #f8d7da; color: #842029; border-radius: 8px; padding: 16px; }
    label, input, textarea { display: block; margin-bottom: 8px; }
</style>
"#;

const NAVBAR_HTML: &str = r#"<nav>
    <a href="/">YelpCamp</a>
    <a href="/campgrounds">Campgrounds</a>
    <a href="/campgrounds/new">New Campground</a>
</nav>"#;

const HOME_HTML: &str = r#"<h1>YelpCamp</h1>
<p>Welcome! Jump right in and explore our many campgrounds.</p>
<a href="/campgrounds">View Campgrounds</a>"#;
