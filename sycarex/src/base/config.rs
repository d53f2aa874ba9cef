use url::Url;

use crate::SycarexError;

pub const PLACEHOLDER_URL: &str = "https://placeholder.supabase.co";

/// Sentinel left behind by deployments that never set a real key.
pub const PLACEHOLDER_KEY_SENTINEL: &str = "placeholder-key";

/// Fixed anon key substituted when no usable key is configured. Shaped
/// like a real key so the client library accepts it; any write with it
/// is rejected by the service.
pub const PLACEHOLDER_ANON_KEY: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
eyJpc3MiOiJzdXBhYmFzZSIsInJlZiI6InBsYWNlaG9sZGVyIiwicm9sZSI6ImFub24iLCJpYXQiO\
jE2NDk3NzEyMDAuZXhwIjoxOTY1MzQ3MjAwfQ.placeholder";

/// Connection settings for the managed table store: a project URL and an
/// anonymous access key.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    project_url: Url,
    anon_key: String,
}

impl StoreConfig {
    /// Fail-fast constructor. Rejects structurally invalid URLs and
    /// missing or sentinel keys instead of deferring the failure to the
    /// first write.
    pub fn new(project_url: &str, anon_key: &str) -> Result<Self, SycarexError> {
        let project_url = Url::parse(project_url)?;
        if anon_key.is_empty()
            || anon_key == PLACEHOLDER_KEY_SENTINEL
            || anon_key == PLACEHOLDER_ANON_KEY
        {
            return Err(SycarexError::Config(
                "anon key is missing or set to a placeholder".to_string(),
            ));
        }
        Ok(Self {
            project_url,
            anon_key: anon_key.to_string(),
        })
    }

    /// Permissive constructor: an absent or unparseable URL falls back
    /// to a fixed placeholder, an absent or sentinel key falls back to
    /// the placeholder anon key.
    pub fn with_fallback(project_url: Option<&str>, anon_key: Option<&str>) -> Self {
        let project_url = project_url
            .and_then(|url| Url::parse(url).ok())
            .unwrap_or_else(placeholder_url);
        let anon_key = match anon_key {
            Some(key) if !key.is_empty() && key != PLACEHOLDER_KEY_SENTINEL => {
                key.to_string()
            }
            _ => PLACEHOLDER_ANON_KEY.to_string(),
        };
        Self {
            project_url,
            anon_key,
        }
    }

    /// True when any fallback value was substituted; the startup path
    /// logs a warning in that case.
    pub fn is_placeholder(&self) -> bool {
        self.project_url.as_str().trim_end_matches('/') == PLACEHOLDER_URL
            || self.anon_key == PLACEHOLDER_ANON_KEY
    }

    pub fn project_url(&self) -> &Url {
        &self.project_url
    }

    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    pub fn rest_endpoint(&self, table: &str) -> String {
        format!(
            "{}/rest/v1/{}",
            self.project_url.as_str().trim_end_matches('/'),
            table
        )
    }
}

fn placeholder_url() -> Url {
    Url::parse(PLACEHOLDER_URL).expect("placeholder url is well-formed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_valid_values() {
        let config =
            StoreConfig::new("https://abc.supabase.co", "anon-key-123").unwrap();
        assert_eq!(config.anon_key(), "anon-key-123");
        assert!(!config.is_placeholder());
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let result = StoreConfig::new("not a url", "anon-key-123");
        assert!(matches!(result, Err(SycarexError::Parse(_))));
    }

    #[test]
    fn test_new_rejects_sentinel_key() {
        let result =
            StoreConfig::new("https://abc.supabase.co", PLACEHOLDER_KEY_SENTINEL);
        assert!(matches!(result, Err(SycarexError::Config(_))));
    }

    #[test]
    fn test_new_rejects_empty_key() {
        let result = StoreConfig::new("https://abc.supabase.co", "");
        assert!(matches!(result, Err(SycarexError::Config(_))));
    }

    #[test]
    fn test_fallback_substitutes_missing_values() {
        let config = StoreConfig::with_fallback(None, None);
        assert_eq!(
            config.project_url().as_str().trim_end_matches('/'),
            PLACEHOLDER_URL
        );
        assert_eq!(config.anon_key(), PLACEHOLDER_ANON_KEY);
        assert!(config.is_placeholder());
    }

    #[test]
    fn test_fallback_substitutes_invalid_url_only() {
        let config = StoreConfig::with_fallback(Some("not a url"), Some("real-key"));
        assert_eq!(
            config.project_url().as_str().trim_end_matches('/'),
            PLACEHOLDER_URL
        );
        assert_eq!(config.anon_key(), "real-key");
    }

    #[test]
    fn test_fallback_substitutes_sentinel_key_only() {
        let config = StoreConfig::with_fallback(
            Some("https://abc.supabase.co"),
            Some(PLACEHOLDER_KEY_SENTINEL),
        );
        assert_eq!(config.project_url().as_str(), "https://abc.supabase.co/");
        assert_eq!(config.anon_key(), PLACEHOLDER_ANON_KEY);
        assert!(config.is_placeholder());
    }

    #[test]
    fn test_rest_endpoint() {
        let config =
            StoreConfig::new("https://abc.supabase.co", "anon-key-123").unwrap();
        assert_eq!(
            config.rest_endpoint("consultations"),
            "https://abc.supabase.co/rest/v1/consultations"
        );
    }
}
