use anyhow::{Context as _, Result};
use clap::{Args, ValueEnum};
use crossterm::style::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::algorithm::DiffOptions;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: Option<bool>,
    pub underlined: Option<bool>,
    pub dim: Option<bool>,
    pub italic: Option<bool>,
    pub crossed_out: Option<bool>,
}

impl Style {
    pub fn patch(self, other: Style) -> Style {
        Style {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            bold: other.bold.or(self.bold),
            underlined: other.underlined.or(self.underlined),
            dim: other.dim.or(self.dim),
            italic: other.italic.or(self.italic),
            crossed_out: other.crossed_out.or(self.crossed_out),
        }
    }
}

/// Styles read from the config file. Missing entries keep the built-in style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub equal: Style,
    pub insert: Style,
    pub delete: Style,
    pub additions: Style,
    pub deletions: Style,
    pub similarity_high: Style,
    pub similarity_medium: Style,
    pub similarity_low: Style,
    pub label: Style,
}

impl Theme {
    pub fn patch(self, other: Theme) -> Theme {
        Theme {
            equal: self.equal.patch(other.equal),
            insert: self.insert.patch(other.insert),
            delete: self.delete.patch(other.delete),
            additions: self.additions.patch(other.additions),
            deletions: self.deletions.patch(other.deletions),
            similarity_high: self.similarity_high.patch(other.similarity_high),
            similarity_medium: self.similarity_medium.patch(other.similarity_medium),
            similarity_low: self.similarity_low.patch(other.similarity_low),
            label: self.label.patch(other.label),
        }
    }
}

macro_rules! style {
    ( $( $field:ident = $value:expr ),* ) => { Style { $( $field: Some($value), )* ..Style::default() } }
}

pub fn default_theme() -> Theme {
    Theme {
        equal: style!(),
        insert: style!(fg = Color::DarkGreen, bg = Color::Rgb { r: 209, g: 250, b: 229 }, underlined = true),
        delete: style!(fg = Color::DarkRed, bg = Color::Rgb { r: 255, g: 228, b: 230 }, crossed_out = true),
        additions: style!(fg = Color::DarkGreen, bold = true),
        deletions: style!(fg = Color::DarkRed, bold = true),
        similarity_high: style!(fg = Color::Green, bold = true),
        similarity_medium: style!(fg = Color::Yellow, bold = true),
        similarity_low: style!(fg = Color::Red, bold = true),
        label: style!(dim = true),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    /// Dump the computed diff with `{:#?}`.
    Debug,
    /// Print the modified text with deletions and insertions marked in place.
    Inline,
    /// Print the diff, summary, similarity and statistics as JSON.
    Json,
    /// Print only the similarity score and text statistics.
    Stats,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMode {
    /// Use colors when stdout is a terminal.
    Auto,
    Always,
    Never,
}

macro_rules! config_structs {
    {
        $(
            $( #[config_opt($attr:meta)] )*
            pub $name:ident: $typ:ty,
        )*
        $(
            #[config_alias($atarget:ident = $avalue:expr)]
            $( #[config_opt($aattr:meta)] )*
            pub $aname:ident: bool,
        )*
    } => {
        #[derive(Debug)]
        pub struct Config {
            $( pub $name: $typ, )*
        }

        #[derive(Args, Deserialize, Debug, Default)]
        pub struct ConfigOpt {
            $( $( #[$aattr] )* #[serde(skip)] pub $aname: bool, )*
            $( $( #[$attr] )* pub $name: Option<$typ>, )*
        }

        impl Config {
            pub fn update(self, mut opt: ConfigOpt) -> Config {
                $(
                    if opt.$aname {
                        opt.$atarget = Some($avalue);
                    }
                )*
                Config {
                    $( $name: opt.$name.unwrap_or(self.$name), )*
                }
            }
        }
    }
}

config_structs! {
    #[config_opt(arg(short, long))]
    pub mode: OutputMode,

    #[config_opt(arg(short = 'c', long, require_equals = true, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL", group = "ignore_case_group"))]
    pub ignore_case: bool,

    #[config_opt(arg(short = 'w', long, require_equals = true, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL", group = "ignore_whitespace_group"))]
    pub ignore_whitespace: bool,

    #[config_opt(arg(short = 'p', long, require_equals = true, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL", group = "ignore_punctuation_group"))]
    pub ignore_punctuation: bool,

    #[config_opt(arg(short = 'n', long, require_equals = true, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL", group = "ignore_newlines_group"))]
    pub ignore_newlines: bool,

    #[config_opt(arg(long, group = "color_group"))]
    pub color: ColorMode,

    #[config_opt(arg(long, require_equals = true, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL", group = "summary_group"))]
    pub summary: bool,

    #[config_opt(arg(long, require_equals = true, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL", group = "validate_group"))]
    pub validate: bool,

    #[config_opt(arg(skip))]
    pub theme: Theme,

    #[config_alias(ignore_case = false)]
    #[config_opt(arg(long, group = "ignore_case_group"))]
    pub no_ignore_case: bool,

    #[config_alias(ignore_whitespace = false)]
    #[config_opt(arg(long, group = "ignore_whitespace_group"))]
    pub no_ignore_whitespace: bool,

    #[config_alias(ignore_punctuation = false)]
    #[config_opt(arg(long, group = "ignore_punctuation_group"))]
    pub no_ignore_punctuation: bool,

    #[config_alias(ignore_newlines = false)]
    #[config_opt(arg(long, group = "ignore_newlines_group"))]
    pub no_ignore_newlines: bool,

    #[config_alias(summary = false)]
    #[config_opt(arg(long, group = "summary_group"))]
    pub no_summary: bool,

    #[config_alias(validate = false)]
    #[config_opt(arg(long, group = "validate_group"))]
    pub no_validate: bool,

    #[config_alias(color = ColorMode::Never)]
    #[config_opt(arg(long, group = "color_group"))]
    pub no_color: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            mode: OutputMode::Inline,
            ignore_case: false,
            ignore_whitespace: false,
            ignore_punctuation: false,
            ignore_newlines: false,
            color: ColorMode::Auto,
            summary: true,
            validate: true,
            theme: default_theme(),
        }
    }
}

impl Config {
    pub fn diff_options(&self) -> DiffOptions {
        DiffOptions {
            ignore_case: self.ignore_case,
            ignore_whitespace: self.ignore_whitespace,
            ignore_punctuation: self.ignore_punctuation,
            ignore_newlines: self.ignore_newlines,
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("smiletxt").join("config.toml"))
}

pub fn parse_config_file(text: &str) -> Result<ConfigOpt> {
    let mut opt: ConfigOpt = toml::from_str(text)?;
    // A theme in the file only overrides the styles it mentions.
    if let Some(theme) = opt.theme.take() {
        opt.theme = Some(default_theme().patch(theme));
    }
    Ok(opt)
}

pub fn read_config_file(path: &Path) -> Result<ConfigOpt> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_config_file(&text).with_context(|| format!("failed to parse config file {}", path.display()))
}

/// Built-in defaults, then the config file, then the command line.
///
/// An explicitly requested config file must exist; the default one is optional.
pub fn load(explicit_path: Option<&Path>, command_line: ConfigOpt) -> Result<Config> {
    let mut config = Config::default();
    let path = match explicit_path {
        Some(path) => Some(path.to_owned()),
        None => default_config_path().filter(|path| path.exists()),
    };
    if let Some(path) = path {
        log::debug!("loading config file {}", path.display());
        config = config.update(read_config_file(&path)?);
    } else {
        log::debug!("no config file, using defaults");
    }
    Ok(config.update(command_line))
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestArgs {
        #[command(flatten)]
        config: ConfigOpt,
    }

    fn parse_args(args: &[&str]) -> ConfigOpt {
        TestArgs::parse_from(std::iter::once("smiletxt").chain(args.iter().copied())).config
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.mode, OutputMode::Inline);
        assert_eq!(config.diff_options(), DiffOptions::default());
        assert!(config.summary);
    }

    #[test]
    fn file_overrides_defaults() {
        let opt = parse_config_file(
            r#"
            mode = "json"
            ignore_case = true
            ignore_newlines = true
            color = "never"
            "#,
        )
        .unwrap();
        let config = Config::default().update(opt);
        assert_eq!(config.mode, OutputMode::Json);
        assert_eq!(config.color, ColorMode::Never);
        assert_eq!(
            config.diff_options(),
            DiffOptions {
                ignore_case: true,
                ignore_newlines: true,
                ..DiffOptions::default()
            }
        );
    }

    #[test]
    fn theme_in_file_is_patched_onto_defaults() {
        let opt = parse_config_file(
            r#"
            [theme.insert]
            bold = true
            "#,
        )
        .unwrap();
        let config = Config::default().update(opt);
        assert_eq!(config.theme.insert.bold, Some(true));
        assert_eq!(config.theme.insert.underlined, Some(true));
        assert_eq!(config.theme.delete, default_theme().delete);
    }

    #[test]
    fn invalid_file_is_an_error() {
        assert!(parse_config_file("mode = \"sideways\"").is_err());
        assert!(parse_config_file("ignore_case = ").is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = load(Some(Path::new("/nonexistent/smiletxt.toml")), ConfigOpt::default());
        assert!(result.is_err());
    }

    #[test]
    fn command_line_overrides_file() {
        let file = parse_config_file("ignore_whitespace = true\nsummary = false").unwrap();
        let config = Config::default()
            .update(file)
            .update(parse_args(&["--no-ignore-whitespace", "--summary", "-c", "-m", "stats"]));
        assert!(!config.ignore_whitespace);
        assert!(config.ignore_case);
        assert!(config.summary);
        assert_eq!(config.mode, OutputMode::Stats);
    }

    #[test]
    fn boolean_flags_accept_values() {
        let config = Config::default().update(parse_args(&["--ignore-punctuation=false", "--validate=false"]));
        assert!(!config.ignore_punctuation);
        assert!(!config.validate);
        let config = Config::default().update(parse_args(&["--ignore-punctuation"]));
        assert!(config.ignore_punctuation);
    }

    #[test]
    fn no_color_alias() {
        let config = Config::default().update(parse_args(&["--no-color"]));
        assert_eq!(config.color, ColorMode::Never);
    }
}
