use std::ffi::OsString;
use std::path::PathBuf;

pub use clap::Parser;
use clap::Subcommand;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Section of the profile file to read settings from. Default is 'default'.
    /// A missing profile falls back to built-in defaults.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List items, optionally filtered
    List {
        /// Category to show ('all' shows every category)
        #[clap(short = 'c', long, default_value = "all")]
        category: String,
        /// Substring to look for in item names
        #[clap(short = 's', long, default_value = "")]
        search: String,
        /// Display language for item names (en or ja)
        #[clap(short = 'l', long, default_value = "en")]
        lang: String,
        /// Match the search text case-sensitively
        #[clap(long)]
        case_sensitive: bool,
        /// Ask the backend to search instead of fetching every item
        #[clap(short = 'k', long)]
        keyword: Option<String>,
    },
    /// List the categories present in the catalog
    Categories,
    /// Show a single item
    Show {
        id: u64,
    },
    /// List a new item for sale
    Sell {
        #[clap(short = 'n', long)]
        name: String,
        #[clap(short = 'c', long, default_value = "")]
        category: String,
        #[clap(short = 'i', long)]
        image: PathBuf,
    },
    /// Register a user
    Register {
        #[clap(short = 'n', long)]
        name: String,
        #[clap(long)]
        password: String,
    },
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    command: Command,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        let args = ClapArgs::parse();
        Self {
            profile: args.profile,
            command: args.command,
        }
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = ClapArgs::parse_from(itr);
        Self {
            profile: args.profile,
            command: args.command,
        }
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_args_profile_and_list() {
        let args = CommandLineArgs::parse_from(["program", "--profile", "test", "list"]);
        assert_eq!(args.profile(), "test");
        assert_eq!(
            args.command(),
            &Command::List {
                category: "all".to_string(),
                search: String::new(),
                lang: "en".to_string(),
                case_sensitive: false,
                keyword: None,
            }
        );
    }

    #[test]
    fn test_parse_args_short_flags() {
        let args = CommandLineArgs::parse_from([
            "program", "-p", "dev", "list", "-c", "Home", "-s", "mug", "-l", "ja",
        ]);
        assert_eq!(args.profile(), "dev");
        match args.command() {
            Command::List {
                category,
                search,
                lang,
                ..
            } => {
                assert_eq!(category, "Home");
                assert_eq!(search, "mug");
                assert_eq!(lang, "ja");
            }
            other => panic!("Expected list command, got {other:?}"),
        }
    }

    #[test]
    fn test_default_profile() {
        let args = CommandLineArgs::parse_from(["program", "categories"]);
        assert_eq!(args.profile(), "default");
        assert_eq!(args.command(), &Command::Categories);
    }

    #[test]
    fn test_parse_sell() {
        let args = CommandLineArgs::parse_from([
            "program", "sell", "--name", "Hat", "--image", "hat.jpg",
        ]);
        assert_eq!(
            args.command(),
            &Command::Sell {
                name: "Hat".to_string(),
                category: String::new(),
                image: PathBuf::from("hat.jpg"),
            }
        );
    }

    #[test]
    fn test_parse_show() {
        let args = CommandLineArgs::parse_from(["program", "show", "42"]);
        assert_eq!(args.command(), &Command::Show { id: 42 });
    }
}
