/// Escape third-party text for interpolation into markup.
///
/// Every character outside `[A-Za-z0-9_. ]` becomes a numeric character
/// reference carrying its Unicode code point, so `<b>` turns into
/// `&#60;b&#62;`. The output is valid both as element text and inside a
/// quoted attribute value.
///
/// Not idempotent: a second pass escapes the `&`, `#` and `;` of the
/// references produced by the first.
pub fn remove_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if is_safe(c) {
            escaped.push(c);
        } else {
            escaped.push_str(&format!("&#{};", c as u32));
        }
    }
    escaped
}

fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | ' ')
}
