use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdf-tools")]
#[command(about = "A CLI tool for splitting and merging PDFs, with MCP server support")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract pages from a PDF into a new file
    #[command(alias = "extract")]
    Split {
        /// PDF file to extract from
        input: PathBuf,

        /// Page numbers or ranges (e.g., "6-8" or "1,3,5-8")
        #[arg(short, long)]
        pages: String,

        /// Output file (defaults to <input>_split.pdf next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Merge multiple PDFs into one
    Merge {
        /// PDF files to merge, in order
        #[arg(required = true, num_args = 1..)]
        inputs: Vec<PathBuf>,

        /// Output file (defaults to merged.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show page count and PDF version
    Info {
        /// PDF file to inspect
        path: PathBuf,
    },

    /// List PDF files in a directory with their page counts
    #[command(alias = "ls")]
    List {
        /// Directory to search (defaults to the current directory)
        dir: Option<PathBuf>,

        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,
    },

    /// Run as MCP server over stdio
    Mcp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_args() {
        let cli = Cli::parse_from(["pdf-tools", "split", "doc.pdf", "-p", "1,3,5-8"]);
        match cli.command {
            Commands::Split {
                input,
                pages,
                output,
            } => {
                assert_eq!(input, PathBuf::from("doc.pdf"));
                assert_eq!(pages, "1,3,5-8");
                assert_eq!(output, None);
            }
            _ => panic!("expected split"),
        }
    }

    #[test]
    fn test_split_requires_pages() {
        assert!(Cli::try_parse_from(["pdf-tools", "split", "doc.pdf"]).is_err());
    }

    #[test]
    fn test_merge_args() {
        let cli = Cli::try_parse_from([
            "pdf-tools", "-vv", "merge", "a.pdf", "b.pdf", "--output", "all.pdf",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Merge { inputs, output } => {
                assert_eq!(inputs, vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")]);
                assert_eq!(output, Some(PathBuf::from("all.pdf")));
            }
            _ => panic!("expected merge"),
        }
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
