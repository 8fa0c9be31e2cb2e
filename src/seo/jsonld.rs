use serde::Serialize;

use crate::error::SeoError;

/// Serialize a schema.org value into a JSON string that can be placed
/// verbatim inside `<script type="application/ld+json">`.
///
/// Every `<` becomes `\u003c`, which closes off both `</script` and `<!--`.
/// U+2028 and U+2029 are escaped as well since they terminate lines in
/// JavaScript source. JSON only ever contains these characters inside string
/// literals, so the output still parses back to the input.
pub fn secure_json_ld<T>(value: &T) -> Result<String, SeoError>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string(value)?;
    Ok(escape_script_text(&json))
}

/// Full `<script type="application/ld+json">` element for a schema object.
pub fn script_tag<T>(value: &T) -> Result<String, SeoError>
where
    T: Serialize + ?Sized,
{
    Ok(format!(
        r#"<script type="application/ld+json">{}</script>"#,
        secure_json_ld(value)?
    ))
}

fn escape_script_text(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for ch in json.chars() {
        match ch {
            '<' => out.push_str("\\u003c"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out
}
