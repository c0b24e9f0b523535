//! Compiled-in configuration.

/// The only page this shell ever shows.
pub const REMOTE_URL: &str = "https://influenza-prediction-backend-21.streamlit.app/";

/// Window title used on desktop hosts.
pub const WINDOW_TITLE: &str = "Influenza Prediction";

/// Shell settings assembled at startup.
///
/// The content source is always [`REMOTE_URL`]; nothing here can replace it.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    /// Window title
    pub title: String,
    /// Initial logical window width
    pub width: f64,
    /// Initial logical window height
    pub height: f64,
    /// Insets to use instead of the host's safe area
    pub inset_override: Option<crate::safe_area::Insets>,
    /// Open the engine's developer tools
    pub devtools: bool,
}

impl ShellConfig {
    /// The remote page mounted in the viewer.
    pub fn source(&self) -> &'static str {
        REMOTE_URL
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            width: 390.0,
            height: 844.0,
            inset_override: None,
            devtools: cfg!(debug_assertions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_is_the_fixed_url() {
        let config = ShellConfig::default();
        assert_eq!(
            config.source(),
            "https://influenza-prediction-backend-21.streamlit.app/"
        );
    }

    #[test]
    fn test_overrides_do_not_touch_source() {
        let config = ShellConfig {
            width: 1280.0,
            height: 720.0,
            devtools: true,
            ..ShellConfig::default()
        };
        assert_eq!(config.source(), REMOTE_URL);
    }
}
