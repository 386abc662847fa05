use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List every project and version:\n    mx list\n\n\
                  List projects matching all words:\n    mx list -p customer portal\n\n\
                  List installed Studio Pro 10 versions:\n    mx list -v 10")]
pub struct ListArgs {
    /// Show projects only
    #[arg(long, short = 'p')]
    pub project: bool,

    /// Show Studio Pro versions only
    #[arg(long, short = 'v')]
    pub version: bool,

    /// Words that must all appear in the directory name (case and punctuation are ignored)
    #[arg(value_name = "QUERY")]
    pub query: Vec<String>,
}
