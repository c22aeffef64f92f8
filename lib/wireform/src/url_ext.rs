//! URL query component helpers.
//!
//! [`UrlQueryExt`] extends [`url::Url`] with the query operations the
//! request layer needs: reading the query as pairs, appending or
//! replacing pairs, filtering, and feeding a [`QueryEncoder`]'s output
//! straight into the URL. Reserved-character escaping happens here, in
//! the URL layer — never in the encoder.

use url::Url;

use crate::{QueryEncoder, Result};

/// Query-component operations on a URL.
pub trait UrlQueryExt {
    /// The current query component as decoded `(name, value)` pairs.
    fn query_parameters(&self) -> Vec<(String, String)>;

    /// Append pairs to the existing query component.
    fn append_query_pairs<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>;

    /// Replace the whole query component with the given pairs.
    ///
    /// An empty iterator removes the query entirely.
    fn replace_query_pairs<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>;

    /// Remove the query component entirely.
    fn clear_query(&mut self);

    /// Keep only the query pairs for which `keep` returns `true`.
    fn retain_query_pairs<F>(&mut self, keep: F)
    where
        F: FnMut(&str, &str) -> bool;

    /// Encode `params` with `encoder` and append the pairs to the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the encoder rejects `params`.
    fn append_encoded_query<T: serde::Serialize>(
        &mut self,
        params: &T,
        encoder: &QueryEncoder,
    ) -> Result<()>;

    /// Encode `params` with `encoder` and replace the query with the pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the encoder rejects `params`.
    fn replace_encoded_query<T: serde::Serialize>(
        &mut self,
        params: &T,
        encoder: &QueryEncoder,
    ) -> Result<()>;
}

impl UrlQueryExt for Url {
    fn query_parameters(&self) -> Vec<(String, String)> {
        self.query_pairs()
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect()
    }

    fn append_query_pairs<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = self.query_pairs_mut();
        for (name, value) in pairs {
            query.append_pair(name.as_ref(), value.as_ref());
        }
    }

    fn replace_query_pairs<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.set_query(None);
        let mut pairs = pairs.into_iter().peekable();
        if pairs.peek().is_some() {
            self.append_query_pairs(pairs);
        }
    }

    fn clear_query(&mut self) {
        self.set_query(None);
    }

    fn retain_query_pairs<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str, &str) -> bool,
    {
        let kept: Vec<(String, String)> = self
            .query_pairs()
            .filter(|(name, value)| keep(name, value))
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();
        self.replace_query_pairs(kept);
    }

    fn append_encoded_query<T: serde::Serialize>(
        &mut self,
        params: &T,
        encoder: &QueryEncoder,
    ) -> Result<()> {
        let pairs = encoder.encode(params)?;
        self.append_query_pairs(pairs);
        Ok(())
    }

    fn replace_encoded_query<T: serde::Serialize>(
        &mut self,
        params: &T,
        encoder: &QueryEncoder,
    ) -> Result<()> {
        let pairs = encoder.encode(params)?;
        self.replace_query_pairs(pairs);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_url(input: &str) -> Url {
        Url::parse(input).expect("valid URL")
    }

    #[test]
    fn read_query_parameters() {
        let url = make_url("https://example.com?foo=1&bar=baz");
        assert_eq!(
            url.query_parameters(),
            vec![
                ("foo".to_string(), "1".to_string()),
                ("bar".to_string(), "baz".to_string()),
            ]
        );

        let url = make_url("https://example.com/path");
        assert!(url.query_parameters().is_empty());
    }

    #[test]
    fn append_keeps_existing_pairs() {
        let mut url = make_url("https://example.com?a=1");
        url.append_query_pairs([("b", "2"), ("c", "3")]);
        assert_eq!(url.as_str(), "https://example.com/?a=1&b=2&c=3");
    }

    #[test]
    fn replace_drops_existing_pairs() {
        let mut url = make_url("https://example.com?a=1&b=2");
        url.replace_query_pairs([("c", "3")]);
        assert_eq!(url.as_str(), "https://example.com/?c=3");
    }

    #[test]
    fn replace_with_nothing_removes_query() {
        let mut url = make_url("https://example.com?a=1");
        url.replace_query_pairs(std::iter::empty::<(&str, &str)>());
        assert_eq!(url.as_str(), "https://example.com/");
        assert!(url.query().is_none());
    }

    #[test]
    fn clear_query_removes_component() {
        let mut url = make_url("https://example.com?a=1&b=2");
        url.clear_query();
        assert!(url.query().is_none());
    }

    #[test]
    fn retain_filters_pairs() {
        let mut url = make_url("https://example.com?keep=1&drop=2&keep=3");
        url.retain_query_pairs(|name, _| name == "keep");
        assert_eq!(url.as_str(), "https://example.com/?keep=1&keep=3");
    }

    #[test]
    fn append_encoded_query_pairs() {
        let mut url = make_url("https://example.com?existing=1");
        url.append_encoded_query(&serde_json::json!({"tags": ["x", "y"]}), &QueryEncoder::default())
            .expect("encode");
        assert_eq!(url.as_str(), "https://example.com/?existing=1&tags=x&tags=y");
    }

    #[test]
    fn replace_encoded_query_pairs() {
        let mut url = make_url("https://example.com?existing=1");
        url.replace_encoded_query(&serde_json::json!({"q": "rust"}), &QueryEncoder::default())
            .expect("encode");
        assert_eq!(url.as_str(), "https://example.com/?q=rust");
    }

    #[test]
    fn reserved_characters_escape_in_the_url_layer() {
        let mut url = make_url("https://example.com");
        url.append_encoded_query(
            &serde_json::json!({"q": "a&b c"}),
            &QueryEncoder::default(),
        )
        .expect("encode");
        assert_eq!(url.as_str(), "https://example.com/?q=a%26b+c");
    }
}
