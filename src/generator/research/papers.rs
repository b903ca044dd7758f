use serde_json::Value;
use std::time::Duration;

use crate::config::PapersConfig;
use crate::types::research::{PAPERS_FETCH_FAILED_SENTINEL, PaperEntry, PaperLookup};

/// 论文检索子调用 — 从不向上抛错：
/// 网络失败与非2xx状态都降级为哨兵文本，空结果返回Empty
pub async fn fetch_papers(config: &PapersConfig, topic: &str) -> PaperLookup {
    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            eprintln!("⚠️ 论文检索客户端初始化失败: {}", e);
            return PaperLookup::Failed(PAPERS_FETCH_FAILED_SENTINEL.to_string());
        }
    };

    let response = match client
        .get(&config.api_base_url)
        .query(&[("q", topic)])
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            eprintln!("⚠️ 论文检索请求失败: {}", e);
            return PaperLookup::Failed(PAPERS_FETCH_FAILED_SENTINEL.to_string());
        }
    };

    if !response.status().is_success() {
        return PaperLookup::Failed(format!(
            "API error with status code {}",
            response.status().as_u16()
        ));
    }

    match response.json::<Value>().await {
        Ok(body) => parse_papers_response(&body, config.max_results),
        Err(e) => {
            eprintln!("⚠️ 论文检索响应解析失败: {}", e);
            PaperLookup::Failed(PAPERS_FETCH_FAILED_SENTINEL.to_string())
        }
    }
}

/// 解析PapersWithCode检索响应。
/// 只取前max_results条并保持协作方返回的原始顺序，不做任何重排；
/// 字段形状不符时回退到固定的默认文案
pub fn parse_papers_response(body: &Value, max_results: usize) -> PaperLookup {
    let results = match body.get("results").and_then(Value::as_array) {
        Some(results) if !results.is_empty() => results,
        _ => return PaperLookup::Empty,
    };

    let papers = results
        .iter()
        .take(max_results)
        .map(|entry| PaperEntry {
            title: entry
                .pointer("/paper/title")
                .and_then(Value::as_str)
                .unwrap_or("No Title")
                .to_string(),
            url: entry
                .pointer("/paper/url_abs")
                .and_then(Value::as_str)
                .unwrap_or("No URL")
                .to_string(),
        })
        .collect();

    PaperLookup::Found(papers)
}
