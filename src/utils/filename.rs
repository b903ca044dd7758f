/// 由主题派生下载文件名用的slug：转小写，连续的非字母数字字符折叠为单个连字符。
/// 主题不含任何ASCII字母数字时回退到固定名称
pub fn topic_slug(topic: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;

    for ch in topic.trim().to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch);
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        String::from("project-ideas")
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::topic_slug;

    #[test]
    fn test_topic_slug_basic() {
        assert_eq!(
            topic_slug("AI for sustainable agriculture"),
            "ai-for-sustainable-agriculture"
        );
    }

    #[test]
    fn test_topic_slug_collapses_separators() {
        assert_eq!(topic_slug("  healthcare,  innovation!  "), "healthcare-innovation");
        assert_eq!(topic_slug("edge/IoT: devices"), "edge-iot-devices");
    }

    #[test]
    fn test_topic_slug_fallback() {
        assert_eq!(topic_slug("!!!"), "project-ideas");
        assert_eq!(topic_slug(""), "project-ideas");
    }

    #[test]
    fn test_topic_slug_keeps_digits() {
        assert_eq!(topic_slug("Web3 wallets"), "web3-wallets");
    }
}
