/// One live-search load against the search endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub endpoint: String,
    pub query: String,
    pub player: String,
    /// Position among overlapping requests; only the latest one is applied
    pub sequence: u64,
}

impl SearchRequest {
    /// `application/x-www-form-urlencoded` body carrying `query` and `player`
    pub fn form_body(&self) -> String {
        format!(
            "query={}&player={}",
            urlencoding::encode(&self.query),
            urlencoding::encode(&self.player)
        )
    }
}

/// Result of running the live-search validator on the field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchValidation {
    /// Always true: the field never displays a validation error
    pub valid: bool,
    /// Load to issue, if the query was long enough
    pub request: Option<SearchRequest>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_body_encodes_params() {
        let request = SearchRequest {
            endpoint: "search.xml".to_string(),
            query: "rock & roll".to_string(),
            player: "00:04:20:aa:bb:cc".to_string(),
            sequence: 1,
        };

        assert_eq!(
            request.form_body(),
            "query=rock%20%26%20roll&player=00%3A04%3A20%3Aaa%3Abb%3Acc"
        );
    }
}
