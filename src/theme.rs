use serde::{Deserialize, Serialize};

/// 界面主题 — 原本散落在十余个近似重复界面变体里的视觉差异（配色、文案、提示词措辞），
/// 收敛为一个由单一流水线消费的配置结构
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum Theme {
    #[serde(rename = "classic")]
    #[default]
    Classic,
    #[serde(rename = "ocean")]
    Ocean,
    #[serde(rename = "scholar")]
    Scholar,
    #[serde(rename = "midnight")]
    Midnight,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Classic => write!(f, "classic"),
            Theme::Ocean => write!(f, "ocean"),
            Theme::Scholar => write!(f, "scholar"),
            Theme::Midnight => write!(f, "midnight"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classic" => Ok(Theme::Classic),
            "ocean" => Ok(Theme::Ocean),
            "scholar" => Ok(Theme::Scholar),
            "midnight" => Ok(Theme::Midnight),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

impl Theme {
    /// 控制台强调色令牌
    pub fn accent(&self) -> &'static str {
        match self {
            Theme::Classic => "cyan",
            Theme::Ocean => "blue",
            Theme::Scholar => "yellow",
            Theme::Midnight => "magenta",
        }
    }

    /// 运行横幅
    pub fn banner(&self) -> &'static str {
        match self {
            Theme::Classic => "🚀 AI Project Idea Generator",
            Theme::Ocean => "🌊 Project Idea Navigator",
            Theme::Scholar => "🎓 Research Project Ideator",
            Theme::Midnight => "🌙 Late-Night Project Forge",
        }
    }

    /// 创意视图标题
    pub fn ideas_heading(&self) -> &'static str {
        match self {
            Theme::Classic => "🎯 Generated Project Ideas",
            Theme::Ocean => "🧭 Charted Project Ideas",
            Theme::Scholar => "📜 Proposed Research Projects",
            Theme::Midnight => "✨ Forged Project Ideas",
        }
    }

    /// 资源视图标题
    pub fn resources_heading(&self) -> &'static str {
        match self {
            Theme::Classic => "📚 Research Resources",
            Theme::Ocean => "🐚 Gathered Resources",
            Theme::Scholar => "🏛️ Source Material",
            Theme::Midnight => "🔮 Collected Context",
        }
    }

    /// 页脚
    pub fn footer(&self) -> &'static str {
        match self {
            Theme::Classic => "Built with ❤️ using Rust and Groq LLM",
            Theme::Ocean => "Charted with 🌊 by ideaforge",
            Theme::Scholar => "Compiled with 🎓 rigor by ideaforge",
            Theme::Midnight => "Forged after dark 🌙 by ideaforge",
        }
    }

    /// 提示词风味句 — 变体之间仅有的提示词措辞差异，作为插值注入模板，不引入任何分支
    pub fn prompt_flavor(&self) -> &'static str {
        match self {
            Theme::Classic => "Favor practical, buildable projects with clear real-world value.",
            Theme::Ocean => "Favor exploratory projects that reward experimentation and iteration.",
            Theme::Scholar => "Favor research-oriented projects grounded in the cited literature.",
            Theme::Midnight => "Favor ambitious, technically deep projects for focused builders.",
        }
    }
}
