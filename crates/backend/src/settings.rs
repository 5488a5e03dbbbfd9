use serde::{Deserialize, Serialize};

/// Settings payload applied to the staging slot before publish, sent
/// verbatim to the backend. Field names follow the backend's wire format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexSettings {
    pub attributes_to_index: Vec<String>,
    pub attributes_to_highlight: Vec<String>,
    pub attributes_to_retrieve: Vec<String>,
    pub custom_ranking: Vec<String>,
    pub ranking: Vec<String>,
    #[serde(rename = "minWordSizefor1Typo")]
    pub min_word_size_for_1_typo: u32,
    #[serde(rename = "minWordSizefor2Typos")]
    pub min_word_size_for_2_typos: u32,
    pub allow_typos_on_numeric_tokens: bool,
    pub min_proximity: u32,
    pub ignore_plurals: bool,
    pub advanced_syntax: bool,
    pub remove_words_if_no_results: String,
}

impl IndexSettings {
    /// The fixed configuration for documentation indices: heading fields
    /// and content searchable without positional bias, results ranked by
    /// ascending importance after the textual criteria.
    #[must_use]
    pub fn document_defaults() -> Self {
        Self {
            attributes_to_index: vec![
                "unordered(h1)".to_string(),
                "unordered(h2)".to_string(),
                "unordered(h3)".to_string(),
                "unordered(h4)".to_string(),
                "unordered(content)".to_string(),
            ],
            attributes_to_highlight: vec![
                "h1".to_string(),
                "h2".to_string(),
                "h3".to_string(),
                "h4".to_string(),
                "content".to_string(),
            ],
            attributes_to_retrieve: vec![
                "h1".to_string(),
                "h2".to_string(),
                "h3".to_string(),
                "h4".to_string(),
                "tags".to_string(),
                "link".to_string(),
            ],
            custom_ranking: vec!["asc(importance)".to_string()],
            ranking: vec![
                "words".to_string(),
                "typo".to_string(),
                "attribute".to_string(),
                "proximity".to_string(),
                "exact".to_string(),
                "custom".to_string(),
            ],
            min_word_size_for_1_typo: 3,
            min_word_size_for_2_typos: 7,
            allow_typos_on_numeric_tokens: false,
            min_proximity: 2,
            ignore_plurals: true,
            advanced_syntax: true,
            remove_words_if_no_results: "allOptional".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(IndexSettings::document_defaults()).unwrap();
        let object = json.as_object().unwrap();

        for key in [
            "attributesToIndex",
            "attributesToHighlight",
            "attributesToRetrieve",
            "customRanking",
            "ranking",
            "minWordSizefor1Typo",
            "minWordSizefor2Typos",
            "allowTyposOnNumericTokens",
            "minProximity",
            "ignorePlurals",
            "advancedSyntax",
            "removeWordsIfNoResults",
        ] {
            assert!(object.contains_key(key), "missing wire field {key}");
        }
    }

    #[test]
    fn test_document_defaults_payload() {
        let settings = IndexSettings::document_defaults();
        assert_eq!(settings.custom_ranking, vec!["asc(importance)"]);
        assert_eq!(settings.min_word_size_for_1_typo, 3);
        assert_eq!(settings.min_word_size_for_2_typos, 7);
        assert!(!settings.allow_typos_on_numeric_tokens);
        assert_eq!(settings.min_proximity, 2);
        assert_eq!(settings.remove_words_if_no_results, "allOptional");
        assert_eq!(
            settings.ranking,
            vec!["words", "typo", "attribute", "proximity", "exact", "custom"]
        );
    }

    #[test]
    fn test_settings_roundtrip() {
        let settings = IndexSettings::document_defaults();
        let json = serde_json::to_string(&settings).unwrap();
        let back: IndexSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
