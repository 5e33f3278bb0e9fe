use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, builder::styling};

const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::Green.on_default().bold())
    .usage(styling::AnsiColor::Green.on_default().bold())
    .literal(styling::AnsiColor::Cyan.on_default().bold())
    .placeholder(styling::AnsiColor::Cyan.on_default());

#[derive(Parser)]
#[command(name = "repocoder-rs")]
#[command(author, version, about, long_about = None)]
#[command(styles = STYLES)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Bundle the directory and send it to an LLM
    Send {
        /// Built-in action keyword or a custom instruction (> 5 characters)
        #[arg(default_value = "code-review")]
        action: String,

        /// LLM provider: claude | gemini
        #[arg(short, long)]
        llm: Option<String>,

        /// Override the provider's default model
        #[arg(long)]
        model: Option<String>,

        /// API key (otherwise config file or environment variable)
        #[arg(long)]
        api_key: Option<String>,

        #[command(flatten)]
        crawl: CrawlArgs,
    },

    /// Write the bundle artifact without calling any API
    Bundle {
        #[command(flatten)]
        crawl: CrawlArgs,
    },

    /// List the built-in action keywords
    Actions,
}

#[derive(Args)]
pub struct CrawlArgs {
    /// Directory to crawl
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Bundle output path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Additional directory name or pattern to exclude (repeatable)
    #[arg(long = "exclude-dir", value_name = "NAME")]
    pub exclude_dirs: Vec<String>,

    /// Additional file name or pattern to exclude (repeatable)
    #[arg(long = "exclude-file", value_name = "NAME")]
    pub exclude_files: Vec<String>,

    /// Additional file extension to exclude (repeatable)
    #[arg(long = "exclude-ext", value_name = "EXT")]
    pub exclude_extensions: Vec<String>,

    /// Disable the built-in default exclusions
    #[arg(long)]
    pub no_default_excludes: bool,

    /// Do not read .gitignore files
    #[arg(long)]
    pub no_gitignore: bool,
}

impl From<CrawlArgs> for crate::commands::CrawlOptions {
    fn from(args: CrawlArgs) -> Self {
        Self {
            dir: args.dir,
            output: args.output,
            exclude_dirs: args.exclude_dirs,
            exclude_files: args.exclude_files,
            exclude_extensions: args.exclude_extensions,
            no_default_excludes: args.no_default_excludes,
            no_gitignore: args.no_gitignore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_defaults() {
        let cli = Cli::parse_from(["repocoder-rs", "send"]);
        match cli.command {
            Commands::Send {
                action,
                llm,
                crawl,
                ..
            } => {
                assert_eq!(action, "code-review");
                assert!(llm.is_none());
                assert_eq!(crawl.dir, PathBuf::from("."));
                assert!(!crawl.no_gitignore);
            }
            _ => panic!("expected send"),
        }
    }

    #[test]
    fn test_send_with_overrides() {
        let cli = Cli::parse_from([
            "repocoder-rs",
            "send",
            "code-improve",
            "--llm",
            "gemini",
            "--model",
            "gemini-1.5-flash",
            "--dir",
            "/tmp/project",
            "--exclude-dir",
            "dist",
            "--exclude-dir",
            "build",
            "--exclude-ext",
            ".lock",
            "--no-gitignore",
        ]);
        match cli.command {
            Commands::Send {
                action,
                llm,
                model,
                crawl,
                ..
            } => {
                assert_eq!(action, "code-improve");
                assert_eq!(llm.as_deref(), Some("gemini"));
                assert_eq!(model.as_deref(), Some("gemini-1.5-flash"));
                assert_eq!(crawl.exclude_dirs, vec!["dist", "build"]);
                assert_eq!(crawl.exclude_extensions, vec![".lock"]);
                assert!(crawl.no_gitignore);
            }
            _ => panic!("expected send"),
        }
    }

    #[test]
    fn test_bundle_and_actions_parse() {
        let cli = Cli::parse_from(["repocoder-rs", "bundle", "--output", "ctx.txt"]);
        match cli.command {
            Commands::Bundle { crawl } => {
                assert_eq!(crawl.output, Some(PathBuf::from("ctx.txt")));
            }
            _ => panic!("expected bundle"),
        }

        let cli = Cli::parse_from(["repocoder-rs", "actions", "--verbose"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Actions));
    }
}
