use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::system::auth::LoginPortal;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub shell: ShellConfig,
    pub list: ListConfig,
    pub lazy: LazyConfig,
    #[serde(default)]
    pub credentials: Vec<CredentialEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShellConfig {
    pub vics_title: String,
    pub law_mis_title: String,
    /// Viewports narrower than this close the drawer after a leaf click
    pub narrow_breakpoint_px: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ListConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LazyConfig {
    pub spinner_delay_ms: u32,
}

/// One hard-coded credential pair accepted by a login form.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CredentialEntry {
    pub portal: LoginPortal,
    pub username: String,
    pub password: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[shell]
vics_title = "VICS Admin"
law_mis_title = "LAW-MIS"
narrow_breakpoint_px = 900.0

[list]
default_page_size = 5
page_size_options = [5, 10, 25, 50]

[lazy]
spinner_delay_ms = 150

[[credentials]]
portal = "vics"
username = "admin"
password = "admin"

[[credentials]]
portal = "law_mis_user"
username = "user"
password = "user123"

[[credentials]]
portal = "law_mis_admin"
username = "admin"
password = "admin123"

[[credentials]]
portal = "law_mis_vendor"
username = "vendor"
password = "vendor123"
"#;

/// Parse a configuration document.
pub fn parse_config(contents: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents)?;
    if config.list.default_page_size == 0 {
        anyhow::bail!("list.default_page_size must be greater than zero");
    }
    Ok(config)
}

/// Load the embedded configuration.
///
/// There is no file system in the browser, so the embedded document is the
/// only source. A broken document is a build defect and is reported once.
pub fn load_config() -> anyhow::Result<AppConfig> {
    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        log::error!("Embedded configuration is invalid: {}", e);
        AppConfig::fallback()
    }
});

/// Process-wide configuration, parsed on first access.
pub fn app_config() -> &'static AppConfig {
    &CONFIG
}

impl AppConfig {
    fn fallback() -> Self {
        Self {
            shell: ShellConfig {
                vics_title: "VICS Admin".to_string(),
                law_mis_title: "LAW-MIS".to_string(),
                narrow_breakpoint_px: 900.0,
            },
            list: ListConfig {
                default_page_size: 5,
                page_size_options: vec![5, 10, 25, 50],
            },
            lazy: LazyConfig {
                spinner_delay_ms: 150,
            },
            credentials: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config().unwrap();
        assert_eq!(config.list.default_page_size, 5);
        assert_eq!(config.shell.vics_title, "VICS Admin");
        assert_eq!(config.credentials.len(), 4);
    }

    #[test]
    fn test_vics_credentials_present() {
        let config = load_config().unwrap();
        let vics = config
            .credentials
            .iter()
            .find(|c| c.portal == LoginPortal::Vics)
            .unwrap();
        assert_eq!(vics.username, "admin");
        assert_eq!(vics.password, "admin");
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let doc = r#"
[shell]
vics_title = "A"
law_mis_title = "B"
narrow_breakpoint_px = 100.0

[list]
default_page_size = 0
page_size_options = [0]

[lazy]
spinner_delay_ms = 0
"#;
        assert!(parse_config(doc).is_err());
    }

    #[test]
    fn test_credentials_default_to_empty() {
        let doc = r#"
[shell]
vics_title = "A"
law_mis_title = "B"
narrow_breakpoint_px = 100.0

[list]
default_page_size = 10
page_size_options = [10]

[lazy]
spinner_delay_ms = 0
"#;
        let config = parse_config(doc).unwrap();
        assert!(config.credentials.is_empty());
    }
}
