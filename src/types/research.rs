use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 论文检索为空时注入提示词的哨兵文本
pub const NO_PAPERS_SENTINEL: &str = "No papers found for the given topic.";

/// 论文检索网络失败时的哨兵文本（非2xx状态另带状态码）
pub const PAPERS_FETCH_FAILED_SENTINEL: &str = "Failed to fetch papers for the given topic.";

/// 单篇论文条目，顺序保持协作方返回的原始顺序
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaperEntry {
    pub title: String,
    pub url: String,
}

/// 论文检索结果 — 显式的带标签结果类型，失败降级为哨兵文本而不是向上抛错
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum PaperLookup {
    /// 检索到的论文，最多保留前15条
    Found(Vec<PaperEntry>),
    /// 2xx响应但结果为空
    Empty,
    /// 请求失败，携带哨兵文本
    Failed(String),
}

impl PaperLookup {
    /// 注入提示词的文本形式
    pub fn to_prompt_text(&self) -> String {
        match self {
            PaperLookup::Found(papers) => papers
                .iter()
                .map(|paper| format!("{}: {}", paper.title, paper.url))
                .collect::<Vec<_>>()
                .join("\n"),
            PaperLookup::Empty => NO_PAPERS_SENTINEL.to_string(),
            PaperLookup::Failed(sentinel) => sentinel.clone(),
        }
    }
}

/// 一次主题调研的完整上下文。按主题构建一次，在缓存窗口内整体复用，
/// 过期后由新实例整体替换，绝不原地修改
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResearchContext {
    /// 网络搜索摘要，抓取失败时为空字符串
    pub web_summary: String,
    /// 论文检索结果
    pub papers: PaperLookup,
    /// 抓取时间
    pub fetched_at: DateTime<Utc>,
}

impl ResearchContext {
    pub fn new(web_summary: String, papers: PaperLookup) -> Self {
        Self {
            web_summary,
            papers,
            fetched_at: Utc::now(),
        }
    }
}
