use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Country data endpoint. Defaults to FLAGLINE_ENDPOINT, then the public REST Countries API.
    #[clap(short = 'e', long, help = "country data endpoint URL")]
    endpoint: Option<String>,

    /// Locale for population figures, e.g. en-US, de-DE, fr-FR.
    #[clap(short = 'l', long, help = "number formatting locale")]
    locale: Option<String>,

    /// Give up on the fetch after this many seconds. No timeout by default.
    #[clap(short = 't', long, value_name = "SECS", help = "fetch timeout in seconds")]
    timeout: Option<u64>,

    #[clap(short = 's', long, value_name = "TERM", help = "initial search text")]
    search: Option<String>,

    /// Load, filter and print the listing to stdout instead of starting the UI.
    #[clap(long, help = "print the listing and exit")]
    print: bool,

    #[clap(long, help = "print the listing as JSON and exit")]
    json: bool,

    #[clap(long, value_name = "PATH", help = "write logs to this file")]
    log_file: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CommandLineArgs {
    endpoint: Option<String>,
    locale: Option<String>,
    timeout: Option<u64>,
    search: Option<String>,
    print: bool,
    json: bool,
    log_file: Option<String>,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            endpoint: args.endpoint,
            locale: args.locale,
            timeout: args.timeout,
            search: args.search,
            print: args.print,
            json: args.json,
            log_file: args.log_file,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn timeout(&self) -> Option<u64> {
        self.timeout
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn print(&self) -> bool {
        self.print
    }

    pub fn json(&self) -> bool {
        self.json
    }

    pub fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }
}
