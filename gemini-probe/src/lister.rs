//! Model lister: fetch the listing, keep capable Gemini models, write their names.

use std::path::{Path, PathBuf};

use gemini_probe_types::ListModelsConfig;
use tracing::info;

use crate::client::Client;
use crate::error::Result;
use crate::filter::ModelFilter;

/// 默认输出文件名。
pub const DEFAULT_OUTPUT_PATH: &str = "models.txt";

/// Lister 配置。
#[derive(Debug, Clone)]
pub struct ListerConfig {
    /// 输出文件；已存在时整体覆盖。
    pub output_path: PathBuf,
    /// 筛选条件。
    pub filter: ModelFilter,
    /// 每页条数；`None` 使用服务端默认值。
    pub page_size: Option<i32>,
    /// 是否跟随 `nextPageToken` 读取全部页面；默认只发一次请求。
    pub all_pages: bool,
}

impl Default for ListerConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            filter: ModelFilter::default(),
            page_size: None,
            all_pages: false,
        }
    }
}

/// 一次运行的结果摘要。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListerReport {
    pub output_path: PathBuf,
    /// 接口返回的模型总数。
    pub total: usize,
    /// 写入文件的模型名（保持接口顺序）。
    pub matched: Vec<String>,
}

/// 列出、筛选并写入文件。
///
/// # Errors
/// 请求失败、响应结构不符或写文件失败时返回错误；写入中途失败时文件可能不完整。
pub async fn run(client: &Client, config: &ListerConfig) -> Result<ListerReport> {
    let list_config = ListModelsConfig {
        page_size: config.page_size,
        page_token: None,
    };
    let models = if config.all_pages {
        client.models().all_with_config(list_config).await?
    } else {
        client.models().list_with_config(list_config).await?.models
    };

    let matched = config.filter.select(&models);
    write_model_names(&config.output_path, &matched).await?;
    info!(
        total = models.len(),
        matched = matched.len(),
        path = %config.output_path.display(),
        "model names written"
    );

    Ok(ListerReport {
        output_path: config.output_path.clone(),
        total: models.len(),
        matched,
    })
}

/// 每行一个名称写入文件，覆盖旧内容；空列表得到空文件。
///
/// # Errors
/// 文件无法创建或写入时返回错误。
pub async fn write_model_names(path: &Path, names: &[String]) -> Result<()> {
    let mut contents = String::with_capacity(names.iter().map(|name| name.len() + 1).sum());
    for name in names {
        contents.push_str(name);
        contents.push('\n');
    }
    tokio::fs::write(path, contents).await?;
    Ok(())
}
