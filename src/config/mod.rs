use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use crate::theme::Theme;

/// LLM Provider类型
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum LLMProvider {
    #[serde(rename = "groq")]
    #[default]
    Groq,
    #[serde(rename = "openai")]
    OpenAI,
    #[serde(rename = "openrouter")]
    OpenRouter,
    #[serde(rename = "ollama")]
    Ollama,
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::Groq => write!(f, "groq"),
            LLMProvider::OpenAI => write!(f, "openai"),
            LLMProvider::OpenRouter => write!(f, "openrouter"),
            LLMProvider::Ollama => write!(f, "ollama"),
        }
    }
}

impl std::str::FromStr for LLMProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "groq" => Ok(LLMProvider::Groq),
            "openai" => Ok(LLMProvider::OpenAI),
            "openrouter" => Ok(LLMProvider::OpenRouter),
            "ollama" => Ok(LLMProvider::Ollama),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// 配置错误 — 启动期即报告的致命错误，任何一项命中都不会进入流水线
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required secret {0}: set it in the environment, a .env file, or ideaforge.toml")]
    MissingSecret(&'static str),
}

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct Config {
    /// 输出路径
    pub output_path: PathBuf,

    /// 内部工作目录路径 (.ideaforge)
    pub internal_path: PathBuf,

    /// 界面主题
    pub theme: Theme,

    /// LLM模型配置
    pub llm: LLMConfig,

    /// 网络搜索配置
    pub search: SearchConfig,

    /// 论文检索配置
    pub papers: PapersConfig,

    /// 缓存配置
    pub cache: CacheConfig,

    /// 只抓取上下文并组装提示词，不调用模型
    pub dry_run: bool,

    /// 强制重新抓取调研上下文（使既有缓存过期）
    pub force_refresh: bool,

    /// 是否启用详细日志
    pub verbose: bool,
}

/// LLM模型配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LLMConfig {
    /// LLM Provider类型
    pub provider: LLMProvider,

    /// LLM API KEY
    pub api_key: String,

    /// LLM API基地址（仅openai provider使用）
    pub api_base_url: String,

    /// 指令微调模型标识
    pub model: String,

    /// 最大tokens
    pub max_tokens: u32,

    /// 温度
    pub temperature: f64,

    /// 重试次数（重试完全由客户端层承担）
    pub retry_attempts: u32,

    /// 重试间隔（毫秒）
    pub retry_delay_ms: u64,
}

/// 网络搜索配置 — 搜索协作方自带超时与重试，这里不额外设置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    /// SerpAPI KEY
    pub api_key: String,

    /// 搜索API基地址
    pub api_base_url: String,
}

/// 论文检索配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct PapersConfig {
    /// PapersWithCode检索API基地址
    pub api_base_url: String,

    /// 请求超时（秒）
    pub timeout_seconds: u64,

    /// 注入提示词的论文条数上限
    pub max_results: usize,
}

/// 缓存配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct CacheConfig {
    /// 是否启用缓存
    pub enabled: bool,

    /// 缓存目录
    pub cache_dir: PathBuf,

    /// 缓存过期时间（小时）
    pub expire_hours: u64,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// 校验必需的密钥。缺失即为致命配置错误，在任何网络调用之前报告
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.api_key.trim().is_empty() {
            return Err(ConfigError::MissingSecret("SERPAPI_API_KEY"));
        }
        // Ollama走本地推理，无需密钥
        if self.llm.provider != LLMProvider::Ollama && self.llm.api_key.trim().is_empty() {
            return Err(ConfigError::MissingSecret("GROQ_API_KEY"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("./ideaforge.out"),
            internal_path: PathBuf::from("./.ideaforge"),
            theme: Theme::default(),
            llm: LLMConfig::default(),
            search: SearchConfig::default(),
            papers: PapersConfig::default(),
            cache: CacheConfig::default(),
            dry_run: false,
            force_refresh: false,
            verbose: false,
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: LLMProvider::default(),
            api_key: std::env::var("GROQ_API_KEY").unwrap_or_default(),
            api_base_url: String::from("https://api.openai.com/v1"),
            model: String::from("llama-3.1-8b-instant"),
            max_tokens: 4096,
            temperature: 0.7,
            retry_attempts: 2,
            retry_delay_ms: 1000,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("SERPAPI_API_KEY").unwrap_or_default(),
            api_base_url: String::from("https://serpapi.com/search.json"),
        }
    }
}

impl Default for PapersConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::from("https://paperswithcode.com/api/v1/search/"),
            timeout_seconds: 10,
            max_results: 15,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cache_dir: PathBuf::from(".ideaforge/cache"),
            expire_hours: 1,
        }
    }
}

// Include tests
#[cfg(test)]
mod tests;
