use crate::config::{Config, LLMProvider};
use crate::theme::Theme;
use crate::types::request::{Complexity, GenerationRequest};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// IdeaForge - 由Rust与AI驱动的项目创意生成引擎
#[derive(Parser, Debug)]
#[command(name = "IdeaForge (ideaforge-rs)")]
#[command(
    about = "AI-powered generation engine for project ideas. It gathers research context from web search and the PapersWithCode index, then generates practical, well-scoped project ideas as markdown."
)]
#[command(version)]
pub struct Args {
    /// 感兴趣的主题
    #[arg(short, long)]
    pub topic: String,

    /// 生成的创意数量 (1-10)
    #[arg(short = 'n', long, default_value_t = 5)]
    pub count: u8,

    /// 项目复杂度 (beginner, intermediate, advanced)
    #[arg(long, default_value = "intermediate")]
    pub complexity: String,

    /// 输出路径
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 界面主题 (classic, ocean, scholar, midnight)
    #[arg(long)]
    pub theme: Option<String>,

    /// LLM Provider (groq, openai, openrouter, ollama)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// LLM API基地址（仅openai provider使用）
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// 模型标识
    #[arg(long)]
    pub model: Option<String>,

    /// 温度参数
    #[arg(long)]
    pub temperature: Option<f64>,

    /// 搜索API KEY
    #[arg(long)]
    pub search_api_key: Option<String>,

    /// 只抓取上下文并组装提示词，不调用模型
    #[arg(long)]
    pub dry_run: bool,

    /// 是否禁用缓存
    #[arg(long)]
    pub no_cache: bool,

    /// 强制重新抓取调研上下文（使既有缓存过期）
    #[arg(long)]
    pub force_refresh: bool,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 将CLI参数转换为配置与请求。配置文件提供基线，CLI参数优先级最高
    pub fn into_parts(self) -> Result<(Config, GenerationRequest)> {
        let mut config = if let Some(config_path) = &self.config {
            // 显式指定了配置文件路径，从该路径加载
            Config::from_file(config_path)?
        } else {
            // 尝试从默认位置加载
            let default_config_path = std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join("ideaforge.toml");

            if default_config_path.exists() {
                Config::from_file(&default_config_path)?
            } else {
                Config::default()
            }
        };

        // 覆盖输出路径
        if let Some(output_path) = self.output_path {
            config.output_path = output_path;
        }

        // 覆盖主题
        if let Some(theme_str) = self.theme {
            if let Ok(theme) = theme_str.parse::<Theme>() {
                config.theme = theme;
            } else {
                eprintln!("⚠️ 警告: 未知的主题: {}，使用默认主题", theme_str);
            }
        }

        // 覆盖LLM配置
        if let Some(provider_str) = self.llm_provider {
            if let Ok(provider) = provider_str.parse::<LLMProvider>() {
                config.llm.provider = provider;
            } else {
                eprintln!("⚠️ 警告: 未知的provider: {}，使用默认provider", provider_str);
            }
        }
        if let Some(llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url;
        }
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key;
        }
        if let Some(model) = self.model {
            config.llm.model = model;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }

        // 覆盖搜索配置
        if let Some(search_api_key) = self.search_api_key {
            config.search.api_key = search_api_key;
        }

        // 缓存配置
        if self.no_cache {
            config.cache.enabled = false;
        }

        // 其他配置
        config.dry_run = self.dry_run;
        config.force_refresh = self.force_refresh;
        config.verbose = self.verbose;

        // 请求字段在构造时校验：主题非空、数量在[1,10]、复杂度属于固定集合
        let complexity = self
            .complexity
            .parse::<Complexity>()
            .map_err(anyhow::Error::msg)?;
        let request = GenerationRequest::new(self.topic, complexity, self.count)?;

        Ok((config, request))
    }
}
