use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "pets-list")]
#[command(about = "Walks a list of pets through a scripted series of mutations")]
pub struct CliConfig {
    #[arg(long, short, help = "Enable verbose output (logs go to stderr)")]
    pub verbose: bool,
}
