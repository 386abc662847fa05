use clap::Parser;

/// Arguments for the convert command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Convert one project to Studio Pro 10.6.3:\n    mx convert -v 10.6.3 -p portal\n\n\
                  Convert up to three matching projects:\n    mx convert -v 10.6.3 -p customer --all")]
pub struct ConvertArgs {
    /// Studio Pro version to convert to; must match exactly one installed version
    #[arg(long, short = 'v', value_name = "QUERY")]
    pub version: String,

    /// Project filter (name or part of it) selecting the projects to convert
    #[arg(long, short = 'p', value_name = "QUERY")]
    pub project: String,

    /// Convert all matching projects (at most 3) and keep going after a failure
    #[arg(long, short = 'a')]
    pub all: bool,
}
