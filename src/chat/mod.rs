//! Conversational front end over the catalog and the place gateway
//!
//! Messages are routed by a handful of intents: greetings, US state
//! names (listing catalog destinations), and place questions that may
//! focus on the best time to visit or on things to do.

pub mod intent;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::catalog::Catalog;
use crate::gateway::PlaceGateway;
use intent::{Focus, is_greeting, match_state, parse_focus, title_case};

const MAX_LISTED: usize = 10;

/// Reply returned to the chat client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatReply {
    pub message: String,
    pub suggestions: Vec<String>,
}

/// Intent router answering free-text travel questions
#[derive(Clone)]
pub struct ChatAssistant {
    catalog: Arc<Catalog>,
    gateway: PlaceGateway,
}

impl ChatAssistant {
    pub fn new(catalog: Arc<Catalog>, gateway: PlaceGateway) -> Self {
        Self { catalog, gateway }
    }

    #[instrument(skip(self))]
    pub async fn reply(&self, message: &str) -> ChatReply {
        let text = message.trim();
        if text.is_empty() {
            return ChatReply {
                message: "Tell me a US state, city, or landmark and I'll help plan.".to_string(),
                suggestions: strings(&["Arizona", "Sedona", "Yosemite"]),
            };
        }

        if is_greeting(text) {
            return ChatReply {
                message: "Hey! Tell me a US state, city, or famous place and I'll suggest highlights and tips."
                    .to_string(),
                suggestions: strings(&["Arizona", "Sedona", "Best time to visit Grand Canyon"]),
            };
        }

        let (focus, place) = parse_focus(text);
        if focus.is_none() {
            if let Some(state) = match_state(&place) {
                debug!("Routing message to state {}", state);
                return self.state_reply(state);
            }
        }

        self.place_reply(&place, focus).await
    }

    fn state_reply(&self, state: &str) -> ChatReply {
        let title = title_case(state);
        let names: Vec<&str> = self
            .catalog
            .lookup(state)
            .iter()
            .take(MAX_LISTED)
            .map(|d| d.name.as_str())
            .collect();

        match names.first() {
            Some(first) => ChatReply {
                message: format!(
                    "Here are a few great spots in {title}:\n- {}",
                    names.join("\n- ")
                ),
                suggestions: vec![
                    format!("Things to do in {first}"),
                    format!("Best time to visit {title}"),
                ],
            },
            None => ChatReply {
                message: format!("I couldn't fetch attractions for {title} right now."),
                suggestions: strings(&["Try a city or a famous place name"]),
            },
        }
    }

    async fn place_reply(&self, place: &str, focus: Option<Focus>) -> ChatReply {
        let name = title_case(place);
        let detail = self.gateway.describe(&name).await;

        let lead = match focus {
            Some(Focus::BestTime) => {
                format!("Best time to visit {name}: {}.", detail.best_time)
            }
            Some(Focus::Activities) => {
                format!("Things to do in {name}: {}.", detail.activities.join(", "))
            }
            None => detail.summary,
        };

        let mut suggestions = Vec::with_capacity(2);
        if focus != Some(Focus::BestTime) {
            suggestions.push(format!("Best time to visit {name}"));
        }
        if focus != Some(Focus::Activities) {
            suggestions.push(format!("Things to do in {name}"));
        }

        ChatReply {
            message: format!("{lead}\n\nMap: {}", detail.maps_url),
            suggestions,
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::FALLBACK_SUMMARY;
    use crate::summary::{PageSummary, SummaryError, SummaryProvider};
    use async_trait::async_trait;

    struct EchoProvider;

    #[async_trait]
    impl SummaryProvider for EchoProvider {
        async fn fetch_summary(&self, title: &str) -> Result<PageSummary, SummaryError> {
            if title == "Atlantis" {
                return Err(SummaryError::NotFound(title.to_string()));
            }
            Ok(PageSummary {
                text: format!("{title} summary."),
                image_url: None,
            })
        }
    }

    fn assistant() -> ChatAssistant {
        ChatAssistant::new(
            Arc::new(Catalog::seeded()),
            PlaceGateway::new(Arc::new(EchoProvider)),
        )
    }

    #[tokio::test]
    async fn test_blank_message_prompts() {
        let reply = assistant().reply("   ").await;
        assert!(reply.message.starts_with("Tell me a US state"));
        assert_eq!(reply.suggestions, vec!["Arizona", "Sedona", "Yosemite"]);
    }

    #[tokio::test]
    async fn test_greeting() {
        let reply = assistant().reply("Hello").await;
        assert!(reply.message.starts_with("Hey!"));
    }

    #[tokio::test]
    async fn test_state_lists_destinations() {
        let reply = assistant().reply("arizona").await;
        assert!(reply.message.starts_with("Here are a few great spots in Arizona"));
        assert!(reply.message.contains("- Sedona"));
        assert_eq!(reply.suggestions[0], "Things to do in Grand Canyon");
        assert_eq!(reply.suggestions[1], "Best time to visit Arizona");
    }

    #[tokio::test]
    async fn test_state_without_catalog_entries() {
        let reply = assistant().reply("Ohio").await;
        assert_eq!(reply.message, "I couldn't fetch attractions for Ohio right now.");
    }

    #[tokio::test]
    async fn test_place_summary_with_map_link() {
        let reply = assistant().reply("sedona").await;
        assert!(reply.message.starts_with("Sedona summary."));
        assert!(reply.message.contains("Map: https://www.google.com/maps/search/"));
        assert_eq!(
            reply.suggestions,
            vec!["Best time to visit Sedona", "Things to do in Sedona"]
        );
    }

    #[tokio::test]
    async fn test_best_time_focus() {
        let reply = assistant().reply("best time to visit sedona").await;
        assert!(
            reply
                .message
                .starts_with("Best time to visit Sedona: March to May")
        );
        assert_eq!(reply.suggestions, vec!["Things to do in Sedona"]);
    }

    #[tokio::test]
    async fn test_activities_focus_on_a_state_name_stays_a_place() {
        let reply = assistant().reply("things to do in Arizona").await;
        assert!(reply.message.starts_with("Things to do in Arizona:"));
        assert_eq!(reply.suggestions, vec!["Best time to visit Arizona"]);
    }

    #[tokio::test]
    async fn test_unknown_place_uses_fallback() {
        let reply = assistant().reply("Atlantis").await;
        assert!(reply.message.starts_with(FALLBACK_SUMMARY));
    }
}
