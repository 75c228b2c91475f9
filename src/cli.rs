//! Command line front end.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::codec;
use crate::generator::Generator;

/// generate swagger documents plus per-locale translated variants
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    /// JSON description produced by the API translator
    #[arg(long, short)]
    design: PathBuf,

    /// output directory; the generated `swagger/` directory is created inside
    #[arg(long, short, default_value = ".")]
    out: PathBuf,

    /// directory holding per-locale override files (`<locale>.yaml`)
    #[arg(long, default_value = "locales")]
    locales: PathBuf,
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    /// Run one generation and print each produced path on stdout.
    pub fn run(&self) -> anyhow::Result<()> {
        let bytes = std::fs::read(&self.design)
            .with_context(|| format!("failed to read {}", self.design.display()))?;
        let design = codec::decode_json(&self.design.display().to_string(), &bytes)?;

        let mut generator = Generator::new(&self.out, &self.locales);
        let files = generator.generate(&design)?;
        for file in &files {
            println!("{}", file.display());
        }
        Ok(())
    }
}
