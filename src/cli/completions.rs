use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    mx completions bash > ~/.bash_completion.d/mx\n\n\
                  Generate zsh completions:\n    mx completions zsh > ~/.zfunc/_mx\n\n\
                  Generate fish completions:\n    mx completions fish > ~/.config/fish/completions/mx.fish\n\n\
                  Generate PowerShell completions:\n    mx completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
