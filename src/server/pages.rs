//! Server-rendered HTML: the goto search form and the not-found page.

use crate::data::Category;

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn not_found_html(name: &str, category: Option<&str>) -> String {
    let scope = match category {
        Some(category) => format!(" in <code>{}</code>", escape_html(category)),
        None => String::new(),
    };
    format!(
        r#"<!doctype html>
<html lang="zh-CN">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>未找到 - tjwiki</title>
  <style>
    body {{ font-family: Arial, sans-serif; max-width: 720px; margin: 48px auto; padding: 0 12px; }}
    code {{ background: #f2f2f2; padding: 1px 4px; border-radius: 4px; }}
  </style>
</head>
<body>
  <h1>404</h1>
  <p>No page named <strong>{name}</strong>{scope}.</p>
  <p><a href="/">Search again</a></p>
</body>
</html>
"#,
        name = escape_html(name),
        scope = scope,
    )
}

pub fn index_html() -> String {
    let options: String = Category::PRIORITY
        .iter()
        .map(|c| format!("      <option value=\"{0}\">{0}</option>\n", c.as_str()))
        .collect();
    format!(
        r#"<!doctype html>
<html lang="zh-CN">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>tjwiki goto</title>
  <style>
    body {{ font-family: Arial, sans-serif; max-width: 720px; margin: 24px auto; padding: 0 12px; }}
    label {{ display:block; margin: 8px 0 4px; font-weight: 600; }}
    input, select {{ width: 100%; padding: 8px; box-sizing: border-box; }}
    button {{ margin-top: 12px; padding: 8px 14px; }}
  </style>
</head>
<body>
  <h1>tjwiki goto</h1>
  <form id="goto-form">
    <label for="name">Name</label>
    <input id="name" value="汤姆" />
    <label for="category">Category</label>
    <select id="category">
      <option value="">(any)</option>
{options}    </select>
    <label for="mode">Description mode</label>
    <select id="mode">
      <option value="">(default)</option>
      <option value="description">description</option>
      <option value="detailed">detailed</option>
    </select>
    <button type="submit">Go</button>
  </form>
  <script>
    document.getElementById('goto-form').addEventListener('submit', (event) => {{
      event.preventDefault();
      const name = document.getElementById('name').value.trim();
      if (!name) return;
      const params = new URLSearchParams();
      const category = document.getElementById('category').value;
      const mode = document.getElementById('mode').value;
      if (category) params.set('category', category);
      if (mode) params.set('descMode', mode);
      const query = params.toString();
      window.location.href = '/goto/' + encodeURIComponent(name) + (query ? '?' + query : '');
    }});
  </script>
</body>
</html>
"#,
        options = options,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_page_escapes_query() {
        let html = not_found_html("<script>", Some("items"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<strong><script>"));
        assert!(html.contains("<code>items</code>"));
    }
}
