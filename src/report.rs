use serde::Serialize;

/// What happened to one token of a merge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenFate {
    /// The token is part of the output
    Kept,

    /// A later token targets the same property under the same modifiers
    Overridden,

    /// Byte-identical repeat of an earlier unrecognized token
    Duplicate,
}

/// Per-token entry of a [`MergeReport`]
#[derive(Debug, Clone, Serialize)]
pub struct TokenReport {
    /// The token as written
    pub class: String,

    /// Modifiers in canonical order
    pub modifiers: Vec<String>,

    pub important: bool,

    pub base_class_name: String,

    /// Whether the postfix (`/7` in `text-lg/7`) took part in conflict resolution
    pub postfix: bool,

    /// Tokens left alone by the parser, e.g. because of a missing prefix
    pub external: bool,

    /// `None` for tokens that are not recognized utilities
    pub class_group: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict_key: Option<String>,

    pub fate: TokenFate,

    /// The token responsible for an `overridden` or `duplicate` fate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superseded_by: Option<String>,
}

/// Counters over all tokens of a merge
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportStatistics {
    pub tokens: usize,
    pub kept: usize,
    pub overridden: usize,
    pub duplicates: usize,
    pub unrecognized: usize,
}

/// Explanation of a single merge, token by token
#[derive(Debug, Clone, Serialize)]
pub struct MergeReport {
    pub input: String,
    pub output: String,
    pub tokens: Vec<TokenReport>,
    pub statistics: ReportStatistics,
}

impl MergeReport {
    pub fn new(input: &str, tokens: Vec<TokenReport>) -> Self {
        let mut statistics = ReportStatistics {
            tokens: tokens.len(),
            ..ReportStatistics::default()
        };
        for token in &tokens {
            match token.fate {
                TokenFate::Kept => statistics.kept += 1,
                TokenFate::Overridden => statistics.overridden += 1,
                TokenFate::Duplicate => statistics.duplicates += 1,
            }
            if token.class_group.is_none() {
                statistics.unrecognized += 1;
            }
        }

        let output = tokens
            .iter()
            .filter(|token| token.fate == TokenFate::Kept)
            .map(|token| token.class.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            input: input.to_string(),
            output,
            tokens,
            statistics,
        }
    }

    /// Tokens removed from the output, in input order
    pub fn removed(&self) -> impl Iterator<Item = &TokenReport> {
        self.tokens.iter().filter(|token| token.fate != TokenFate::Kept)
    }

    /// Serialize report to pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(class: &str, class_group: Option<&str>, fate: TokenFate) -> TokenReport {
        TokenReport {
            class: class.to_string(),
            modifiers: Vec::new(),
            important: false,
            base_class_name: class.to_string(),
            postfix: false,
            external: false,
            class_group: class_group.map(str::to_string),
            conflict_key: class_group.map(str::to_string),
            fate,
            superseded_by: None,
        }
    }

    #[test]
    fn test_statistics_and_output() {
        let report = MergeReport::new(
            "p-2 foo p-4 foo",
            vec![
                token("p-2", Some("p"), TokenFate::Overridden),
                token("foo", None, TokenFate::Kept),
                token("p-4", Some("p"), TokenFate::Kept),
                token("foo", None, TokenFate::Duplicate),
            ],
        );

        assert_eq!(report.output, "foo p-4");
        assert_eq!(
            report.statistics,
            ReportStatistics {
                tokens: 4,
                kept: 2,
                overridden: 1,
                duplicates: 1,
                unrecognized: 2,
            }
        );
        assert_eq!(report.removed().count(), 2);
    }

    #[test]
    fn test_json_skips_missing_fields() {
        let report = MergeReport::new("foo", vec![token("foo", None, TokenFate::Kept)]);
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        let entry = &json["tokens"][0];
        assert_eq!(entry["fate"], "kept");
        assert!(entry["class_group"].is_null());
        assert!(entry.get("conflict_key").is_none());
        assert!(entry.get("superseded_by").is_none());
    }
}
