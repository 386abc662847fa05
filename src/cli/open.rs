use clap::Parser;

/// Arguments for the open command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Open the only project matching a query:\n    mx open portal\n\n\
                  Open Studio Pro 10.6.3:\n    mx open -v 10.6.3\n\n\
                  Open up to three matching projects:\n    mx open -p customer --all")]
pub struct OpenArgs {
    /// Limit search to projects only
    #[arg(long, short = 'p')]
    pub project: bool,

    /// Limit search to Studio Pro versions only
    #[arg(long, short = 'v')]
    pub version: bool,

    /// Open all matching results (at most 3)
    #[arg(long, short = 'a')]
    pub all: bool,

    /// Words that must all appear in the directory name (case and punctuation are ignored)
    #[arg(value_name = "QUERY")]
    pub query: Vec<String>,
}
