//! HTML pages. Every user-supplied value goes through [`escape`].

use crate::api::models::CreatePostForm;
use crate::storage::Post;

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
<nav>
<a href="/">TechTrends</a>
<a href="/about">About</a>
<a href="/create">New Post</a>
</nav>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

pub fn index(posts: &[Post]) -> String {
    let mut body = String::from("<h1>Welcome to TechTrends</h1>\n");
    for post in posts {
        body.push_str(&format!(
            "<article>\n<a href=\"/{id}\"><h2>{title}</h2></a>\n{created}</article>\n<hr>\n",
            id = post.id,
            title = escape(&post.title),
            created = created_badge(post),
        ));
    }
    layout("TechTrends", &body)
}

pub fn post(post: &Post) -> String {
    let body = format!(
        "<h2>{title}</h2>\n{created}<p>{content}</p>\n",
        title = escape(&post.title),
        created = created_badge(post),
        content = escape(&post.content),
    );
    layout(&post.title, &body)
}

fn created_badge(post: &Post) -> String {
    post.created
        .as_deref()
        .map(|c| format!("<span class=\"created\">{}</span>\n", escape(c)))
        .unwrap_or_default()
}

pub fn about() -> String {
    layout(
        "About TechTrends",
        "<h1>About TechTrends</h1>\n<p>TechTrends is an online news sharing platform \
         for the latest trends in the technology world.</p>\n",
    )
}

/// The create form, optionally with a one-shot warning above it. Submitted
/// values are written back into the fields.
pub fn create(flash: Option<&str>, form: &CreatePostForm) -> String {
    let flash = flash
        .map(|msg| format!("<div class=\"alert alert-danger\">{}</div>\n", escape(msg)))
        .unwrap_or_default();
    let body = format!(
        r#"<h1>Create a New Post</h1>
{flash}<form method="post" action="/create">
<label for="title">Title</label>
<input type="text" name="title" id="title" value="{title}">
<label for="content">Content</label>
<textarea name="content" id="content">{content}</textarea>
<button type="submit">Submit</button>
</form>
"#,
        title = escape(&form.title),
        content = escape(&form.content),
    );
    layout("Create a New Post", &body)
}

pub fn not_found() -> String {
    layout(
        "404 Not Found",
        "<h1>404 Not Found</h1>\n<p>The article you are looking for does not exist.</p>\n",
    )
}

pub fn server_error() -> String {
    layout(
        "500 Internal Server Error",
        "<h1>Internal Server Error</h1>\n<p>The server could not complete your request.</p>\n",
    )
}
