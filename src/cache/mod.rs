use anyhow::Result;
use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::fs;

use crate::config::CacheConfig;

pub mod stats;
pub use stats::{CacheStats, CacheStatsReport};

/// 缓存管理器 — 以主题为键的限时记忆化存储。
/// 键是精确的主题字符串（不做任何归一化），条目在过期窗口后被整体替换
pub struct CacheManager {
    config: CacheConfig,
    stats: CacheStats,
}

/// 缓存条目
#[derive(Debug, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub data: T,
    pub timestamp: u64,
    /// 主题的MD5哈希值，用于缓存键的生成和验证
    pub topic_hash: String,
}

impl CacheManager {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            stats: CacheStats::default(),
        }
    }

    /// 生成主题键的MD5哈希
    pub fn hash_topic(&self, topic: &str) -> String {
        let mut hasher = Md5::new();
        hasher.update(topic.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// 获取缓存文件路径
    fn entry_path(&self, category: &str, hash: &str) -> PathBuf {
        self.config
            .cache_dir
            .join(category)
            .join(format!("{}.json", hash))
    }

    fn now_secs() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }

    /// 检查缓存是否过期
    fn is_expired(&self, timestamp: u64) -> bool {
        let expire_seconds = self.config.expire_hours * 3600;
        Self::now_secs().saturating_sub(timestamp) > expire_seconds
    }

    /// 读取缓存。未命中、过期或任何读取错误都返回None，绝不让缓存故障中断流水线
    pub async fn get<T>(&self, category: &str, topic: &str) -> Result<Option<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        if !self.config.enabled {
            return Ok(None);
        }

        let hash = self.hash_topic(topic);
        let entry_path = self.entry_path(category, &hash);

        if !entry_path.exists() {
            self.stats.record_miss();
            return Ok(None);
        }

        match fs::read_to_string(&entry_path).await {
            Ok(content) => match serde_json::from_str::<CacheEntry<T>>(&content) {
                Ok(entry) => {
                    if self.is_expired(entry.timestamp) {
                        // 删除过期缓存，后续读取触发重新抓取
                        let _ = fs::remove_file(&entry_path).await;
                        self.stats.record_miss();
                        return Ok(None);
                    }
                    self.stats.record_hit();
                    Ok(Some(entry.data))
                }
                Err(e) => {
                    self.stats.record_error();
                    eprintln!("⚠️ 缓存条目反序列化失败，按未命中处理: {}", e);
                    Ok(None)
                }
            },
            Err(e) => {
                self.stats.record_error();
                eprintln!("⚠️ 缓存条目读取失败，按未命中处理: {}", e);
                Ok(None)
            }
        }
    }

    /// 写入缓存。先写临时文件再重命名，并发的过期重抓最多造成一次冗余写入，
    /// 读取方永远不会看到半成品条目
    pub async fn put<T>(&self, category: &str, topic: &str, data: T) -> Result<()>
    where
        T: Serialize,
    {
        if !self.config.enabled {
            return Ok(());
        }

        let hash = self.hash_topic(topic);
        let entry_path = self.entry_path(category, &hash);

        if let Some(parent) = entry_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let entry = CacheEntry {
            data,
            timestamp: Self::now_secs(),
            topic_hash: hash.clone(),
        };

        let content = serde_json::to_string_pretty(&entry)?;
        let tmp_path = entry_path.with_extension("json.tmp");
        fs::write(&tmp_path, content).await?;
        fs::rename(&tmp_path, &entry_path).await?;

        self.stats.record_write();
        Ok(())
    }

    /// 显式使指定主题的缓存过期
    pub async fn expire(&self, category: &str, topic: &str) -> Result<()> {
        let hash = self.hash_topic(topic);
        let entry_path = self.entry_path(category, &hash);
        if entry_path.exists() {
            fs::remove_file(&entry_path).await?;
        }
        Ok(())
    }

    /// 生成运行统计报告
    pub fn report(&self) -> CacheStatsReport {
        self.stats.report()
    }
}
