use crate::languages::LanguageTable;

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// Render the home page with both language selectors filled in
pub fn render_home(languages: &LanguageTable, default_source: &str, default_target: &str) -> String {
    INDEX_TEMPLATE
        .replace("{{SOURCE_OPTIONS}}", &render_options(languages, default_source))
        .replace("{{TARGET_OPTIONS}}", &render_options(languages, default_target))
}

/// The default entry comes first and is not repeated in the rest of the list
fn render_options(languages: &LanguageTable, selected: &str) -> String {
    let mut out = String::new();
    let selected_name = languages.name(selected).unwrap_or(selected);
    push_option(&mut out, selected, selected_name, true);

    for lang in languages.iter().filter(|l| l.code != selected) {
        push_option(&mut out, lang.code, lang.name, false);
    }
    out
}

fn push_option(out: &mut String, code: &str, name: &str, selected: bool) {
    out.push_str("                        <option value=\"");
    out.push_str(&escape_html(code));
    out.push('"');
    if selected {
        out.push_str(" selected");
    }
    out.push('>');
    out.push_str(&escape_html(name));
    out.push_str("</option>\n");
}

fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
pub(crate) fn select_block<'a>(html: &'a str, id: &str) -> &'a str {
    let open = format!("<select id=\"{}\"", id);
    let start = html.find(&open).expect("select present");
    let end = start + html[start..].find("</select>").expect("select closed");
    &html[start..end]
}
