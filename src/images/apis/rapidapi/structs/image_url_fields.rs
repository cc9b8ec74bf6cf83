use serde_json::Value;

/// Ordered list of top-level keys that may hold the generated image reference.
/// The provider does not document its success payload, so the list is
/// configurable and the first key holding a non-empty string wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlFields(Vec<String>);

impl Default for ImageUrlFields {
    fn default() -> Self {
        Self(vec![
            "image_url".to_string(),
            "result".to_string(),
            "generated_image".to_string(),
        ])
    }
}

impl ImageUrlFields {
    /// Parses a comma separated list. Returns `None` if no usable key remains.
    pub fn parse(list: &str) -> Option<Self> {
        let fields: Vec<String> = list
            .split(',')
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect();

        if fields.is_empty() {
            return None;
        }

        Some(Self(fields))
    }

    pub fn fields(&self) -> &[String] {
        &self.0
    }

    pub fn extract(&self, value: &Value) -> Option<String> {
        self.0.iter().find_map(|field| {
            value
                .get(field)
                .and_then(Value::as_str)
                .filter(|url| !url.is_empty())
                .map(str::to_string)
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn image_url_takes_priority() {
        let value = json!({
            "generated_image": "http://x/c.png",
            "result": "http://x/b.png",
            "image_url": "http://x/a.png",
        });

        assert_eq!(
            ImageUrlFields::default().extract(&value),
            Some("http://x/a.png".to_string())
        );
    }

    #[test]
    fn falls_back_in_order() {
        let fields = ImageUrlFields::default();

        let value = json!({ "result": "http://x/b.png", "generated_image": "http://x/c.png" });
        assert_eq!(fields.extract(&value), Some("http://x/b.png".to_string()));

        let value = json!({ "generated_image": "http://x/c.png" });
        assert_eq!(fields.extract(&value), Some("http://x/c.png".to_string()));
    }

    #[test]
    fn skips_empty_and_non_string_values() {
        let value = json!({ "image_url": "", "result": 42, "generated_image": "http://x/c.png" });

        assert_eq!(
            ImageUrlFields::default().extract(&value),
            Some("http://x/c.png".to_string())
        );
    }

    #[test]
    fn nothing_recognizable() {
        let fields = ImageUrlFields::default();

        assert_eq!(fields.extract(&json!({})), None);
        assert_eq!(fields.extract(&json!({ "url": "http://x/a.png" })), None);
        assert_eq!(fields.extract(&json!(["http://x/a.png"])), None);
    }

    #[test]
    fn parses_custom_list() {
        let fields = ImageUrlFields::parse(" url, ,output ").unwrap();

        assert_eq!(fields.fields(), ["url".to_string(), "output".to_string()]);
        assert_eq!(
            fields.extract(&json!({ "image_url": "http://x/a.png", "output": "http://x/o.png" })),
            Some("http://x/o.png".to_string())
        );
        assert_eq!(ImageUrlFields::parse(" , "), None);
    }
}
