use wasm_bindgen::{JsCast, JsValue};
use web_sys::{FormData, HtmlFormElement};

pub const URL_ENCODED: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Request body built from a form.
pub enum FormBody {
    UrlEncoded(String),
    /// Sent untouched so file inputs survive.
    Multipart(FormData),
}

impl FormBody {
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            FormBody::UrlEncoded(_) => Some(URL_ENCODED),
            // The browser writes the boundary itself.
            FormBody::Multipart(_) => None,
        }
    }

    pub fn into_js(self) -> JsValue {
        match self {
            FormBody::UrlEncoded(body) => JsValue::from_str(&body),
            FormBody::Multipart(data) => data.into(),
        }
    }
}

pub fn form_body(form: &HtmlFormElement) -> Result<FormBody, JsValue> {
    let data = FormData::new_with_form(form)?;
    if form.enctype().eq_ignore_ascii_case("multipart/form-data") {
        return Ok(FormBody::Multipart(data));
    }

    let mut pairs = Vec::new();
    if let Some(entries) = js_sys::try_iter(&data)? {
        for entry in entries {
            let entry: js_sys::Array = entry?.dyn_into()?;
            // File entries have no string value and are dropped.
            if let (Some(name), Some(value)) = (entry.get(0).as_string(), entry.get(1).as_string()) {
                pairs.push((name, value));
            }
        }
    }
    Ok(FormBody::UrlEncoded(encode_pairs(&pairs)))
}

pub fn encode_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| {
            format!(
                "{}={}",
                urlencoding::encode(name),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    #[test]
    fn encodes_fields_in_order() {
        let body = encode_pairs(&[pair("name", "Pâte à l'eau"), pair("quantity", "2")]);
        assert_eq!(body, "name=P%C3%A2te%20%C3%A0%20l%27eau&quantity=2");
    }

    #[test]
    fn keeps_repeated_names() {
        let body = encode_pairs(&[pair("allowance", "1"), pair("allowance", "3")]);
        assert_eq!(body, "allowance=1&allowance=3");
    }

    #[test]
    fn empty_form() {
        assert_eq!(encode_pairs(&[]), "");
    }
}
