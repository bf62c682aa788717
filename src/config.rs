//! Configuration constants and utilities for flagline
//!
//! Defaults live here as constants. Environment variables override them and
//! command line flags override both; [`Settings::resolve`] applies that
//! precedence once at startup.

use crate::cmd_args::CommandLineArgs;
use crate::gallery::views::NumberLocale;
use std::time::Duration;

/// Default data source: every country, trimmed to the fields the gallery shows
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all?fields=name,flags,population";

/// Default locale for population figures
pub const DEFAULT_LOCALE: &str = "en-US";

/// Default tracing filter
pub const DEFAULT_LOG_LEVEL: &str = "error";

/// Environment variable name for overriding the data source endpoint
pub const ENDPOINT_ENV_VAR: &str = "FLAGLINE_ENDPOINT";

/// Environment variable name for overriding the number locale
pub const LOCALE_ENV_VAR: &str = "FLAGLINE_LOCALE";

/// Environment variable name for the tracing filter
pub const LOG_LEVEL_ENV_VAR: &str = "FLAGLINE_LOG_LEVEL";

/// Environment variable name for the log file path
pub const LOG_FILE_ENV_VAR: &str = "FLAGLINE_LOG_FILE";

/// POSIX locale variables consulted, in order, when no locale is configured
const SYSTEM_LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

fn env_string(name: &str) -> Option<String> {
    std::env::var_os(name)
        .and_then(|val| val.into_string().ok())
        .filter(|val| !val.trim().is_empty())
}

/// Get the endpoint, checking environment variable first, then falling back to default
pub fn get_endpoint() -> String {
    env_string(ENDPOINT_ENV_VAR).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}

/// Get the locale tag from `FLAGLINE_LOCALE`, then the system locale
/// variables, then the default. `C` and `POSIX` count as unset.
pub fn get_locale_tag() -> String {
    if let Some(tag) = env_string(LOCALE_ENV_VAR) {
        return tag;
    }

    SYSTEM_LOCALE_ENV_VARS
        .iter()
        .filter_map(|name| env_string(name))
        .find(|tag| tag != "C" && tag != "POSIX")
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

pub fn get_log_level() -> String {
    env_string(LOG_LEVEL_ENV_VAR).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

pub fn get_log_file() -> Option<String> {
    env_string(LOG_FILE_ENV_VAR)
}

/// How `--print` mode writes the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/// Resolved runtime settings
#[derive(Debug, Clone)]
pub struct Settings {
    endpoint: String,
    locale: NumberLocale,
    timeout: Option<Duration>,
    initial_search: String,
    print: bool,
    output_format: OutputFormat,
    log_level: String,
    log_file: Option<String>,
}

impl Settings {
    pub fn new(endpoint: impl Into<String>, locale: NumberLocale) -> Self {
        Self {
            endpoint: endpoint.into(),
            locale,
            timeout: None,
            initial_search: String::new(),
            print: false,
            output_format: OutputFormat::Plain,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_file: None,
        }
    }

    /// Merge command line flags over environment variables over defaults
    pub fn resolve(args: &CommandLineArgs) -> Self {
        let endpoint = args.endpoint().map(str::to_string).unwrap_or_else(get_endpoint);
        let locale_tag = args.locale().map(str::to_string).unwrap_or_else(get_locale_tag);
        let log_file = args
            .log_file()
            .map(str::to_string)
            .or_else(get_log_file)
            .map(|path| shellexpand::tilde(&path).into_owned());

        let output_format = if args.json() {
            OutputFormat::Json
        } else {
            OutputFormat::Plain
        };

        Self {
            endpoint,
            locale: NumberLocale::from_tag(&locale_tag),
            timeout: args.timeout().map(Duration::from_secs),
            initial_search: args.search().unwrap_or_default().to_string(),
            // JSON output only makes sense without the UI
            print: args.print() || args.json(),
            output_format,
            log_level: get_log_level(),
            log_file,
        }
    }

    pub fn with_initial_search(mut self, search: impl Into<String>) -> Self {
        self.initial_search = search.into();
        self
    }

    pub fn with_print(mut self, print: bool) -> Self {
        self.print = print;
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<String>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn locale(&self) -> NumberLocale {
        self.locale
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn initial_search(&self) -> &str {
        &self.initial_search
    }

    pub fn print(&self) -> bool {
        self.print
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, NumberLocale::EN_US)
    }
}
