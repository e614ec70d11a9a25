//! Static HTML scaffolding around rendered previews.

/// Wrap rendered markup in a standalone preview page with the Tailwind
/// CDN runtime, so utility classes in generated fragments take effect.
pub(crate) fn preview_page(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{title}</title>
    <script src="https://cdn.tailwindcss.com"></script>
  </head>
  <body class="bg-gray-50 p-8">
{body}
  </body>
</html>
"#,
        title = title,
        body = body,
    )
}

/// Inline error box shown in place of a preview that failed to render.
/// Sibling previews are unaffected.
pub(crate) fn error_box(message: &str) -> String {
    format!(
        r#"<div class="border border-red-300 bg-red-50 text-red-700 rounded p-4">
  <p class="font-semibold">Failed to render preview</p>
  <p>{}</p>
</div>"#,
        escape(message),
    )
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
