//! Command-line interface configuration.

use argh::FromArgs;

use crate::config::ShellConfig;
use crate::safe_area::Insets;

/// Full-screen viewer for the influenza prediction dashboard
#[derive(Debug, FromArgs)]
pub struct Cli {
    /// logical window width (default: 390)
    #[argh(option, default = "390.0", from_str_fn(parse_length))]
    pub width: f64,

    /// logical window height (default: 844)
    #[argh(option, default = "844.0", from_str_fn(parse_length))]
    pub height: f64,

    /// safe-area insets as 'top,right,bottom,left' or a single value for all sides
    #[argh(option, from_str_fn(parse_insets))]
    pub inset: Option<Insets>,

    /// print the computed layout and exit without opening a window
    #[argh(switch, long = "dry-run")]
    pub dry_run: bool,

    /// check that the dashboard is reachable before mounting
    #[argh(switch)]
    pub check: bool,

    /// open the web engine's developer tools
    #[argh(switch)]
    pub devtools: bool,

    /// log at debug level
    #[argh(switch, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Folds the parsed flags into a [`ShellConfig`].
    pub fn to_config(&self) -> ShellConfig {
        let defaults = ShellConfig::default();
        ShellConfig {
            width: self.width,
            height: self.height,
            inset_override: self.inset,
            devtools: self.devtools || defaults.devtools,
            ..defaults
        }
    }
}

/// Parses `--width` and `--height`.
fn parse_length(value: &str) -> Result<f64, String> {
    let length = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid length '{}': {}", value.trim(), e))?;
    if !length.is_finite() || length <= 0.0 {
        return Err(format!("length must be finite and positive: {}", value));
    }
    Ok(length)
}

/// Parses `--inset` values.
fn parse_insets(value: &str) -> Result<Insets, String> {
    let sides = value
        .split(',')
        .map(|side| {
            side.trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid inset '{}': {}", side.trim(), e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if sides.iter().any(|side| !side.is_finite() || *side < 0.0) {
        return Err(format!("insets must be finite and non-negative: {}", value));
    }

    match sides.as_slice() {
        [all] => Ok(Insets::uniform(*all)),
        [top, right, bottom, left] => Ok(Insets::new(*top, *right, *bottom, *left)),
        _ => Err(format!(
            "expected 1 or 4 comma-separated values, got {}",
            sides.len()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::REMOTE_URL;

    fn parse(args: &[&str]) -> Result<Cli, argh::EarlyExit> {
        Cli::from_args(&["fluview"], args)
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.width, 390.0);
        assert_eq!(cli.height, 844.0);
        assert!(cli.inset.is_none());
        assert!(!cli.dry_run);
        assert!(!cli.check);
    }

    #[test]
    fn test_four_sided_inset() {
        let cli = parse(&["--inset", "47,0,34,0"]).unwrap();
        assert_eq!(cli.inset, Some(Insets::new(47.0, 0.0, 34.0, 0.0)));
    }

    #[test]
    fn test_uniform_inset() {
        let cli = parse(&["--inset", "12"]).unwrap();
        assert_eq!(cli.inset, Some(Insets::uniform(12.0)));
    }

    #[test]
    fn test_rejects_bad_insets() {
        assert!(parse_insets("1,2").is_err());
        assert!(parse_insets("-4").is_err());
        assert!(parse_insets("top").is_err());
        assert!(parse(&["--inset", "1,2,3"]).is_err());
    }

    #[test]
    fn test_rejects_bad_window_size() {
        assert!(parse(&["--width", "-100"]).is_err());
        assert!(parse(&["--width", "0"]).is_err());
        assert!(parse(&["--height", "inf"]).is_err());
        assert!(parse(&["--height", "NaN"]).is_err());
        assert!(parse(&["--width", "wide"]).is_err());
        assert_eq!(parse_length("1280.5"), Ok(1280.5));
    }

    #[test]
    fn test_config_keeps_fixed_source() {
        let cli = parse(&["--width", "1024", "--height", "768", "--devtools"]).unwrap();
        let config = cli.to_config();
        assert_eq!(config.width, 1024.0);
        assert_eq!(config.height, 768.0);
        assert!(config.devtools);
        assert_eq!(config.source(), REMOTE_URL);
    }
}
