use crate::client::ClientInner;
use crate::error::Result;
use gemini_probe_types::ListModelsConfig;
use reqwest::Url;

pub(super) fn transform_model_name(model: &str) -> String {
    let model = model.trim();
    if model.starts_with("models/") {
        model.to_string()
    } else {
        format!("models/{model}")
    }
}

pub(super) fn build_model_method_url(inner: &ClientInner, model: &str, method: &str) -> Result<Url> {
    let model = transform_model_name(model);
    inner.endpoint(&format!("{model}:{method}"))
}

pub(super) fn build_models_list_url(inner: &ClientInner, config: &ListModelsConfig) -> Result<Url> {
    let mut url = inner.endpoint("models")?;
    add_list_query_params(&mut url, config);
    Ok(url)
}

pub(super) fn add_list_query_params(url: &mut Url, config: &ListModelsConfig) {
    if config.page_size.is_none() && config.page_token.is_none() {
        return;
    }
    let mut pairs = url.query_pairs_mut();
    if let Some(page_size) = config.page_size {
        pairs.append_pair("pageSize", &page_size.to_string());
    }
    if let Some(page_token) = &config.page_token {
        pairs.append_pair("pageToken", page_token);
    }
}
