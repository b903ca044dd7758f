pub mod compose;
pub mod context;
pub mod ideate;
pub mod outlet;
pub mod research;
pub mod workflow;

/// Memory作用域 — 各流水线阶段通过作用域化的键交换数据
pub struct MemoryScope;

impl MemoryScope {
    pub const RESEARCH: &'static str = "research";
    pub const COMPOSE: &'static str = "compose";
    pub const GENERATION: &'static str = "generation";
}

/// 各作用域下的数据键
pub struct ScopedKeys;

impl ScopedKeys {
    /// 调研上下文（网络摘要 + 论文列表）
    pub const CONTEXT: &'static str = "context";
    /// 组装完成的提示词
    pub const PROMPT: &'static str = "prompt";
    /// 模型返回的创意markdown
    pub const IDEAS: &'static str = "ideas";
}
