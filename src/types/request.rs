use serde::{Deserialize, Serialize};

/// 请求参数错误 — 在构造时校验，非法请求不会进入流水线
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RequestError {
    #[error("topic must not be empty")]
    EmptyTopic,
    #[error("idea count must be between 1 and 10, got {0}")]
    CountOutOfRange(u8),
}

/// 项目复杂度档位 — 只影响提示词措辞，不对模型输出做校验
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum Complexity {
    #[serde(rename = "beginner")]
    Beginner,
    #[serde(rename = "intermediate")]
    #[default]
    Intermediate,
    #[serde(rename = "advanced")]
    Advanced,
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Complexity::Beginner => write!(f, "Beginner"),
            Complexity::Intermediate => write!(f, "Intermediate"),
            Complexity::Advanced => write!(f, "Advanced"),
        }
    }
}

impl std::str::FromStr for Complexity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Complexity::Beginner),
            "intermediate" => Ok(Complexity::Intermediate),
            "advanced" => Ok(Complexity::Advanced),
            _ => Err(format!("Unknown complexity level: {}", s)),
        }
    }
}

/// 一次创意生成请求。每次用户提交新建一份，构造完成后不可变
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationRequest {
    topic: String,
    complexity: Complexity,
    count: u8,
}

impl GenerationRequest {
    pub fn new(
        topic: impl Into<String>,
        complexity: Complexity,
        count: u8,
    ) -> Result<Self, RequestError> {
        let topic = topic.into().trim().to_string();
        if topic.is_empty() {
            return Err(RequestError::EmptyTopic);
        }
        if !(1..=10).contains(&count) {
            return Err(RequestError::CountOutOfRange(count));
        }
        Ok(Self {
            topic,
            complexity,
            count,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn complexity(&self) -> &Complexity {
        &self.complexity
    }

    pub fn count(&self) -> u8 {
        self.count
    }
}
