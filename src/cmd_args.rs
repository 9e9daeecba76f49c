use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Section of the profile file to read settings from. Default is 'default'.
    /// A missing profile falls back to built-in defaults.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    #[clap(short = 'e', long, help = "character endpoint (overrides the profile)")]
    endpoint: Option<String>,

    #[clap(long, help = "print the list and exit instead of opening the UI")]
    plain: bool,

    #[clap(long, help = "plain mode: print only male and alive characters")]
    filter: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    endpoint: Option<String>,
    plain: bool,
    filter: bool,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            endpoint: args.endpoint,
            plain: args.plain,
            filter: args.filter,
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

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn plain(&self) -> bool {
        self.plain
    }

    pub fn filter(&self) -> bool {
        self.filter
    }
}
