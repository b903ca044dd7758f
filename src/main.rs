use anyhow::Result;
use clap::Parser;

mod cache;
mod cli;
mod config;
mod generator;
mod llm;
mod memory;
mod theme;
mod types;
mod utils;

use crate::generator::workflow::launch;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载.env中的密钥（SERPAPI_API_KEY / GROQ_API_KEY）
    dotenvy::dotenv().ok();

    let args = cli::Args::parse();
    let (config, request) = args.into_parts()?;

    // 密钥缺失属于致命配置错误，必须在任何网络调用之前报告
    config.validate()?;

    launch(&config, &request).await
}
