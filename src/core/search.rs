use serde::{Deserialize, Serialize};

/// 搜尋表單送出的事件 (`handleSearch`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEvent {
    pub search: String,
}

/// 搜尋框狀態。只有送出表單或清空輸入時才會產生事件。
#[derive(Debug, Default)]
pub struct SearchInput {
    value: String,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_value(&mut self, value: &str) -> Option<SearchEvent> {
        let was_empty = self.value.is_empty();
        self.value = value.to_string();

        if value.is_empty() && !was_empty {
            tracing::debug!("Search input cleared");
            return Some(SearchEvent {
                search: String::new(),
            });
        }
        None
    }

    pub fn submit(&self) -> SearchEvent {
        SearchEvent {
            search: self.value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_emits_current_value() {
        let mut input = SearchInput::new();
        assert_eq!(input.set_value("search input"), None);

        assert_eq!(
            input.submit(),
            SearchEvent {
                search: "search input".to_string()
            }
        );
    }

    #[test]
    fn test_clearing_emits_once() {
        let mut input = SearchInput::new();
        let mut events = Vec::new();

        events.extend(input.set_value("search input"));
        events.extend(input.set_value(""));
        events.extend(input.set_value(""));

        assert_eq!(
            events,
            vec![SearchEvent {
                search: String::new()
            }]
        );
    }
}
