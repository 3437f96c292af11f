use quill_core::SiteConfig;
use serde::Deserialize;

#[derive(Deserialize, Default)]
pub struct QuillConfig {
    #[serde(default)]
    pub site: SiteSection,
    pub api: Option<ApiConfig>,
}

#[derive(Deserialize)]
pub struct SiteSection {
    #[serde(default = "default_site_domain")]
    pub domain: String,
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_port")]
    pub port: u16,
    #[serde(default = "default_api_bind")]
    pub bind: String,
}

fn default_site_domain() -> String {
    "localhost".to_string()
}
fn default_site_name() -> String {
    "Quill".to_string()
}
fn default_base_url() -> String {
    "http://localhost".to_string()
}
fn default_api_port() -> u16 {
    3001
}
fn default_api_bind() -> String {
    "127.0.0.1".to_string()
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            domain: default_site_domain(),
            name: default_site_name(),
            base_url: default_base_url(),
        }
    }
}

impl QuillConfig {
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn site(&self) -> SiteConfig {
        SiteConfig {
            domain: self.site.domain.clone(),
            name: self.site.name.clone(),
            base_url: self.site.base_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_sections() {
        let config: QuillConfig = toml::from_str("").unwrap();
        assert_eq!(config.site.domain, "localhost");
        assert!(config.api.is_none());
    }

    #[test]
    fn partial_site_section_keeps_other_defaults() {
        let config: QuillConfig = toml::from_str(
            "[site]\ndomain = \"example.com\"\n\n[api]\nport = 8080\n",
        )
        .unwrap();
        assert_eq!(config.site.domain, "example.com");
        assert_eq!(config.site.name, "Quill");
        assert_eq!(config.api.as_ref().unwrap().port, 8080);
        assert_eq!(config.api.as_ref().unwrap().bind, "127.0.0.1");
    }
}
