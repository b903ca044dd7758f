#[cfg(test)]
mod tests {
    use crate::config::{CacheConfig, Config, ConfigError, LLMConfig, LLMProvider, PapersConfig};
    use crate::theme::Theme;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.output_path, PathBuf::from("./ideaforge.out"));
        assert_eq!(config.internal_path, PathBuf::from("./.ideaforge"));
        assert_eq!(config.theme, Theme::Classic);
        assert!(!config.dry_run);
        assert!(!config.force_refresh);
        assert!(!config.verbose);
    }

    #[test]
    fn test_llm_provider_default() {
        let provider = LLMProvider::default();
        assert_eq!(provider, LLMProvider::Groq);
    }

    #[test]
    fn test_llm_provider_from_str() {
        assert_eq!("groq".parse::<LLMProvider>().unwrap(), LLMProvider::Groq);
        assert_eq!("openai".parse::<LLMProvider>().unwrap(), LLMProvider::OpenAI);
        assert_eq!(
            "openrouter".parse::<LLMProvider>().unwrap(),
            LLMProvider::OpenRouter
        );
        assert_eq!("ollama".parse::<LLMProvider>().unwrap(), LLMProvider::Ollama);
        assert_eq!("GROQ".parse::<LLMProvider>().unwrap(), LLMProvider::Groq);

        assert!("invalid".parse::<LLMProvider>().is_err());
    }

    #[test]
    fn test_llm_provider_display() {
        assert_eq!(LLMProvider::Groq.to_string(), "groq");
        assert_eq!(LLMProvider::OpenAI.to_string(), "openai");
        assert_eq!(LLMProvider::OpenRouter.to_string(), "openrouter");
        assert_eq!(LLMProvider::Ollama.to_string(), "ollama");
    }

    #[test]
    fn test_llm_config_default() {
        let config = LLMConfig::default();

        assert_eq!(config.provider, LLMProvider::Groq);
        // api_key may be empty if env var is not set
        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.retry_attempts, 2);
        assert_eq!(config.retry_delay_ms, 1000);
        assert_eq!(config.max_tokens, 4096);
    }

    #[test]
    fn test_papers_config_default() {
        let config = PapersConfig::default();

        assert_eq!(
            config.api_base_url,
            "https://paperswithcode.com/api/v1/search/"
        );
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.max_results, 15);
    }

    #[test]
    fn test_cache_config_default() {
        let config = CacheConfig::default();

        assert!(config.enabled);
        assert_eq!(config.cache_dir, PathBuf::from(".ideaforge/cache"));
        assert_eq!(config.expire_hours, 1); // 一小时窗口
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("classic".parse::<Theme>().unwrap(), Theme::Classic);
        assert_eq!("ocean".parse::<Theme>().unwrap(), Theme::Ocean);
        assert_eq!("scholar".parse::<Theme>().unwrap(), Theme::Scholar);
        assert_eq!("midnight".parse::<Theme>().unwrap(), Theme::Midnight);
        assert!("neon".parse::<Theme>().is_err());
    }

    #[test]
    fn test_theme_display_roundtrip() {
        for theme in [Theme::Classic, Theme::Ocean, Theme::Scholar, Theme::Midnight] {
            assert_eq!(theme.to_string().parse::<Theme>().unwrap(), theme);
        }
    }

    #[test]
    fn test_validate_missing_search_key() {
        let mut config = Config::default();
        config.search.api_key = String::new();
        config.llm.api_key = "test-llm-key".to_string();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingSecret("SERPAPI_API_KEY"))
        ));
    }

    #[test]
    fn test_validate_missing_llm_key() {
        let mut config = Config::default();
        config.search.api_key = "test-serp-key".to_string();
        config.llm.api_key = String::new();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingSecret("GROQ_API_KEY"))
        ));
    }

    #[test]
    fn test_validate_ollama_needs_no_llm_key() {
        let mut config = Config::default();
        config.search.api_key = "test-serp-key".to_string();
        config.llm.provider = LLMProvider::Ollama;
        config.llm.api_key = String::new();

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_ok_with_both_secrets() {
        let mut config = Config::default();
        config.search.api_key = "test-serp-key".to_string();
        config.llm.api_key = "test-llm-key".to_string();

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_file_partial() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("ideaforge.toml");

        let content = r#"
verbose = true
dry_run = true

[llm]
provider = "openai"
model = "gpt-4o-mini"
temperature = 0.2

[search]
api_key = "test-serp-key"

[cache]
enabled = false
expire_hours = 2
"#;
        std::fs::write(&config_path, content).unwrap();

        let config = Config::from_file(&config_path).unwrap();

        assert!(config.verbose);
        assert!(config.dry_run);
        assert_eq!(config.llm.provider, LLMProvider::OpenAI);
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.temperature, 0.2);
        assert_eq!(config.search.api_key, "test-serp-key");
        assert!(!config.cache.enabled);
        assert_eq!(config.cache.expire_hours, 2);
        // 未覆盖的字段保持默认值
        assert_eq!(config.papers.timeout_seconds, 10);
        assert_eq!(config.papers.max_results, 15);
        assert_eq!(config.llm.retry_attempts, 2);
    }

    #[test]
    fn test_config_from_file_missing() {
        let path = PathBuf::from("/nonexistent/ideaforge.toml");
        assert!(Config::from_file(&path).is_err());
    }
}
