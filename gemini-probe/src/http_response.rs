use std::collections::HashMap;

use reqwest::header::HeaderMap;

use gemini_probe_types::GenerationResponse;

pub(crate) fn headers_to_map(headers: &HeaderMap) -> HashMap<String, String> {
    let mut map: HashMap<String, String> = HashMap::new();
    for (name, value) in headers {
        let Ok(value_str) = value.to_str() else {
            continue;
        };
        let key = name.as_str().to_string();
        map.entry(key)
            .and_modify(|existing| {
                if !existing.is_empty() {
                    existing.push_str(", ");
                }
                existing.push_str(value_str);
            })
            .or_insert_with(|| value_str.to_string());
    }
    map
}

pub(crate) fn generation_response(
    status: u16,
    headers: &HeaderMap,
    body: String,
) -> GenerationResponse {
    GenerationResponse {
        status,
        headers: headers_to_map(headers),
        body,
    }
}
