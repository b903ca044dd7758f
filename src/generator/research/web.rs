use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde_json::Value;

use crate::config::SearchConfig;

/// 搜索协作方抽象 — 对给定查询返回一段不透明的摘要文本
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<String>;
}

/// SerpAPI客户端
pub struct SerpApiClient {
    config: SearchConfig,
    http: reqwest::Client,
}

impl SerpApiClient {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SearchProvider for SerpApiClient {
    async fn search(&self, query: &str) -> Result<String> {
        let response = self
            .http
            .get(&self.config.api_base_url)
            .query(&[
                ("q", query),
                ("api_key", self.config.api_key.as_str()),
                ("engine", "google"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "search API returned status {}",
                response.status().as_u16()
            ));
        }

        let body: Value = response.json().await?;
        extract_summary(&body)
            .ok_or_else(|| anyhow!("search API response contained no usable summary"))
    }
}

/// 从SerpAPI响应中提取摘要文本：
/// 优先answer box，其次知识图谱描述，最后拼接前几条自然结果的摘要
pub fn extract_summary(body: &Value) -> Option<String> {
    if let Some(answer) = body.pointer("/answer_box/answer").and_then(Value::as_str) {
        return Some(answer.to_string());
    }
    if let Some(snippet) = body.pointer("/answer_box/snippet").and_then(Value::as_str) {
        return Some(snippet.to_string());
    }
    if let Some(description) = body
        .pointer("/knowledge_graph/description")
        .and_then(Value::as_str)
    {
        return Some(description.to_string());
    }

    let snippets: Vec<&str> = body
        .get("organic_results")?
        .as_array()?
        .iter()
        .filter_map(|result| result.get("snippet").and_then(Value::as_str))
        .take(5)
        .collect();

    if snippets.is_empty() {
        None
    } else {
        Some(snippets.join("\n"))
    }
}
