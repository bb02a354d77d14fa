//! Capability filter applied to the model listing.

use gemini_probe_types::ModelDescriptor;

/// 默认名称子串（大小写不敏感）。
pub const DEFAULT_NAME_CONTAINS: &str = "gemini";
/// 默认要求的生成方法。
pub const DEFAULT_REQUIRED_METHOD: &str = "generateContent";

/// 模型筛选条件：名称包含子串，且支持指定生成方法。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelFilter {
    name_contains: String,
    required_method: String,
}

impl Default for ModelFilter {
    fn default() -> Self {
        Self::new(DEFAULT_NAME_CONTAINS, DEFAULT_REQUIRED_METHOD)
    }
}

impl ModelFilter {
    pub fn new(name_contains: impl Into<String>, required_method: impl Into<String>) -> Self {
        Self {
            name_contains: name_contains.into().to_lowercase(),
            required_method: required_method.into(),
        }
    }

    #[must_use]
    pub fn name_contains(&self) -> &str {
        &self.name_contains
    }

    #[must_use]
    pub fn required_method(&self) -> &str {
        &self.required_method
    }

    #[must_use]
    pub fn matches(&self, model: &ModelDescriptor) -> bool {
        model.name.to_lowercase().contains(&self.name_contains)
            && model.supports(&self.required_method)
    }

    /// 保持原始顺序返回命中的模型名。
    #[must_use]
    pub fn select(&self, models: &[ModelDescriptor]) -> Vec<String> {
        models
            .iter()
            .filter(|model| self.matches(model))
            .map(|model| model.name.clone())
            .collect()
    }
}
