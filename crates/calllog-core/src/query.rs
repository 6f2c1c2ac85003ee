use crate::port::QueryStore;
use std::convert::Infallible;
use url::form_urlencoded;

/// Ordered query-string parameters with `URLSearchParams` semantics:
/// `set` replaces the first occurrence and drops the rest, `delete`
/// removes every occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        Self { pairs }
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    fn get_value(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    fn set_value(&mut self, key: &str, value: &str) {
        match self.pairs.iter().position(|(existing, _)| existing == key) {
            Some(first) => {
                self.pairs[first].1 = value.to_string();
                let mut index = 0;
                self.pairs.retain(|(existing, _)| {
                    let keep = index <= first || existing != key;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value.to_string())),
        }
    }

    fn delete_value(&mut self, key: &str) {
        self.pairs.retain(|(existing, _)| existing != key);
    }
}

impl FromIterator<(String, String)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl QueryStore for QueryParams {
    type Error = Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.get_value(key).map(str::to_string))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.set_value(key, value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), Self::Error> {
        self.delete_value(key);
        Ok(())
    }

    fn query_string(&self) -> Result<String, Self::Error> {
        Ok(self.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::QueryParams;
    use crate::port::QueryStore;

    #[test]
    fn parse_and_serialize_preserve_order() {
        let params = QueryParams::parse("?direction=inbound&page=2&type=missed");
        assert_eq!(
            params.to_query_string(),
            "direction=inbound&page=2&type=missed"
        );
        assert_eq!(params.get("page").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn set_replaces_first_and_drops_duplicates() {
        let mut params = QueryParams::parse("page=1&direction=inbound&page=9");
        params.set("page", "3").unwrap();
        assert_eq!(params.to_query_string(), "page=3&direction=inbound");
        params.set("type", "voicemail").unwrap();
        assert_eq!(
            params.to_query_string(),
            "page=3&direction=inbound&type=voicemail"
        );
    }

    #[test]
    fn values_are_percent_encoded() {
        let mut params = QueryParams::new();
        params.set("note", "a b&c").unwrap();
        let encoded = params.to_query_string();
        assert_eq!(encoded, "note=a+b%26c");
        assert_eq!(
            QueryParams::parse(&encoded).get("note").unwrap().as_deref(),
            Some("a b&c")
        );
    }

    #[test]
    fn delete_removes_every_occurrence() {
        let mut params = QueryParams::parse("type=missed&page=2&type=answered");
        params.delete("type").unwrap();
        assert_eq!(params.to_query_string(), "page=2");
        params.delete("missing").unwrap();
        assert_eq!(params.to_query_string(), "page=2");
    }
}
