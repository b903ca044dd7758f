#[cfg(test)]
mod tests {
    use crate::generator::research::fetch_web_summary;
    use crate::generator::research::papers::parse_papers_response;
    use crate::generator::research::web::{SearchProvider, extract_summary};
    use crate::types::research::{
        NO_PAPERS_SENTINEL, PAPERS_FETCH_FAILED_SENTINEL, PaperEntry, PaperLookup, ResearchContext,
    };
    use anyhow::{Result, anyhow};
    use async_trait::async_trait;
    use serde_json::json;

    struct StubSearch {
        outcome: Result<String, String>,
    }

    #[async_trait]
    impl SearchProvider for StubSearch {
        async fn search(&self, _query: &str) -> Result<String> {
            match &self.outcome {
                Ok(summary) => Ok(summary.clone()),
                Err(message) => Err(anyhow!(message.clone())),
            }
        }
    }

    #[test]
    fn test_parse_papers_empty_results() {
        let body = json!({ "results": [] });
        assert_eq!(parse_papers_response(&body, 15), PaperLookup::Empty);
    }

    #[test]
    fn test_parse_papers_missing_results_field() {
        let body = json!({ "count": 0 });
        assert_eq!(parse_papers_response(&body, 15), PaperLookup::Empty);
    }

    #[test]
    fn test_parse_papers_caps_at_fifteen_and_keeps_order() {
        let results: Vec<_> = (0..20)
            .map(|i| {
                json!({
                    "paper": {
                        "title": format!("Paper {}", i),
                        "url_abs": format!("https://example.org/{}", i),
                    }
                })
            })
            .collect();
        let body = json!({ "results": results });

        match parse_papers_response(&body, 15) {
            PaperLookup::Found(papers) => {
                assert_eq!(papers.len(), 15);
                // 顺序保持协作方返回的原始顺序，不做重排
                for (i, paper) in papers.iter().enumerate() {
                    assert_eq!(paper.title, format!("Paper {}", i));
                    assert_eq!(paper.url, format!("https://example.org/{}", i));
                }
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_papers_defaults_on_shape_mismatch() {
        let body = json!({
            "results": [
                { "paper": { "url_abs": "https://example.org/a" } },
                { "paper": { "title": "Only Title" } },
                { "unexpected": true },
            ]
        });

        match parse_papers_response(&body, 15) {
            PaperLookup::Found(papers) => {
                assert_eq!(papers[0].title, "No Title");
                assert_eq!(papers[0].url, "https://example.org/a");
                assert_eq!(papers[1].title, "Only Title");
                assert_eq!(papers[1].url, "No URL");
                assert_eq!(papers[2].title, "No Title");
                assert_eq!(papers[2].url, "No URL");
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_paper_lookup_prompt_text() {
        let found = PaperLookup::Found(vec![
            PaperEntry {
                title: "Paper A".to_string(),
                url: "https://example.org/a".to_string(),
            },
            PaperEntry {
                title: "Paper B".to_string(),
                url: "https://example.org/b".to_string(),
            },
        ]);
        assert_eq!(
            found.to_prompt_text(),
            "Paper A: https://example.org/a\nPaper B: https://example.org/b"
        );

        assert_eq!(PaperLookup::Empty.to_prompt_text(), NO_PAPERS_SENTINEL);
        assert_eq!(
            PaperLookup::Failed("API error with status code 500".to_string()).to_prompt_text(),
            "API error with status code 500"
        );
        assert_eq!(
            PaperLookup::Failed(PAPERS_FETCH_FAILED_SENTINEL.to_string()).to_prompt_text(),
            PAPERS_FETCH_FAILED_SENTINEL
        );
    }

    #[test]
    fn test_extract_summary_prefers_answer_box() {
        let body = json!({
            "answer_box": { "answer": "42 ideas", "snippet": "ignored" },
            "organic_results": [ { "snippet": "also ignored" } ]
        });
        assert_eq!(extract_summary(&body), Some("42 ideas".to_string()));
    }

    #[test]
    fn test_extract_summary_falls_back_to_snippet_then_knowledge_graph() {
        let body = json!({ "answer_box": { "snippet": "box snippet" } });
        assert_eq!(extract_summary(&body), Some("box snippet".to_string()));

        let body = json!({ "knowledge_graph": { "description": "a field of study" } });
        assert_eq!(extract_summary(&body), Some("a field of study".to_string()));
    }

    #[test]
    fn test_extract_summary_joins_organic_snippets() {
        let body = json!({
            "organic_results": [
                { "snippet": "first" },
                { "title": "no snippet here" },
                { "snippet": "second" },
            ]
        });
        assert_eq!(extract_summary(&body), Some("first\nsecond".to_string()));
    }

    #[test]
    fn test_extract_summary_none_when_unusable() {
        assert_eq!(extract_summary(&json!({})), None);
        assert_eq!(extract_summary(&json!({ "organic_results": [] })), None);
    }

    #[tokio::test]
    async fn test_fetch_web_summary_passes_through() {
        let provider = StubSearch {
            outcome: Ok("useful summary".to_string()),
        };
        assert_eq!(fetch_web_summary(&provider, "AI").await, "useful summary");
    }

    #[tokio::test]
    async fn test_fetch_web_summary_degrades_to_empty() {
        let provider = StubSearch {
            outcome: Err("quota exceeded".to_string()),
        };
        // 搜索失败降级为空文本，不向调用方抛错
        assert_eq!(fetch_web_summary(&provider, "AI").await, "");
    }

    #[test]
    fn test_research_context_serde_roundtrip() {
        let original = ResearchContext::new(
            "summary".to_string(),
            PaperLookup::Found(vec![PaperEntry {
                title: "Paper A".to_string(),
                url: "https://example.org/a".to_string(),
            }]),
        );

        let serialized = serde_json::to_string(&original).unwrap();
        let restored: ResearchContext = serde_json::from_str(&serialized).unwrap();
        assert_eq!(restored, original);
    }
}
