use super::toml_config::TomlConfig;
use super::RunConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "valid-words")]
#[command(about = "Generate a list of valid words")]
pub struct CliConfig {
    /// The path to the output file
    #[arg(long)]
    pub output: String,

    /// The number of words to validate concurrently [default: 100]
    #[arg(long)]
    pub chunk: Option<usize>,

    /// Optional TOML file overriding sources, validator endpoint or chunk size
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the optional config file and merges it with the flags.
    pub fn to_run_config(&self) -> Result<RunConfig> {
        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let config = RunConfig::resolve(self.output.clone(), self.chunk, file.as_ref());
        config.validate()?;
        Ok(config)
    }
}
