use serde::{Deserialize, Serialize};

/// jquery.mobile release the default asset paths point at.
///
/// The builder was written against 1.0b2. Newer releases mostly keep the
/// same `data-*` conventions, but use them at your own risk and adjust the
/// paths through [`Config`] if your assets live elsewhere.
pub const JQUERY_MOBILE_VERSION: &str = "jquery.mobile-1.0b2";

/// jQuery release the default script path points at. jquery.mobile does not
/// appear to rely on an exact jQuery version.
pub const JQUERY_VERSION: &str = "jquery-1.6.2";

/// Builder configuration, set once at application startup and shared
/// read-only by every in-flight render.
///
/// ```ignore
/// use mobml::Config;
///
/// let config = Config { ajax: false, ..Config::default() };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether the toolkit's AJAX navigation is enabled. When disabled,
    /// `button` and `form` emit `data-ajax="false"` unless a call opts back
    /// in explicitly.
    pub ajax: bool,
    /// URI path to the toolkit stylesheet.
    pub mobile_css_path: String,
    /// URI path to the toolkit javascript file.
    pub mobile_js_path: String,
    /// URI path to the jQuery library.
    pub jquery_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ajax: true,
            mobile_css_path: format!(
                "/{}/{}.min.css",
                JQUERY_MOBILE_VERSION, JQUERY_MOBILE_VERSION
            ),
            mobile_js_path: format!(
                "/{}/{}.min.js",
                JQUERY_MOBILE_VERSION, JQUERY_MOBILE_VERSION
            ),
            jquery_path: format!("/{}.min.js", JQUERY_VERSION),
        }
    }
}

impl Config {
    /// Create a configuration with the default asset paths and AJAX enabled.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_follow_version_constants() {
        let config = Config::new();
        assert!(config.ajax);
        assert_eq!(
            config.mobile_css_path,
            "/jquery.mobile-1.0b2/jquery.mobile-1.0b2.min.css"
        );
        assert_eq!(
            config.mobile_js_path,
            "/jquery.mobile-1.0b2/jquery.mobile-1.0b2.min.js"
        );
        assert_eq!(config.jquery_path, "/jquery-1.6.2.min.js");
    }
}
