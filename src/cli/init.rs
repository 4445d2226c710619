use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use roster::{domain::CONFIG_FILE_NAME, Config, Directory};
use tracing::instrument;

#[derive(Debug, Parser)]
#[command(about = "Initialise an employee directory")]
pub struct Init {
    /// The runtime data file, relative to the root
    #[arg(long, value_name = "PATH")]
    data_file: Option<PathBuf>,

    /// A seed file the runtime data is initialised from, relative to the root
    #[arg(long, value_name = "PATH")]
    seed: Option<PathBuf>,

    /// Copy every successful write back onto the seed file
    #[arg(long, requires = "seed")]
    mirror: bool,
}

impl Init {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let config_path = root.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            anyhow::bail!(
                "Directory already initialised (found existing {})",
                config_path.display()
            );
        }

        std::fs::create_dir_all(root)
            .with_context(|| format!("Failed to create {}", root.display()))?;

        let mut config = Config::default();
        if let Some(data_file) = self.data_file {
            config.set_data_file(data_file);
        }
        config.set_seed_file(self.seed);
        config.mirror_to_seed = self.mirror;

        config
            .save(&config_path)
            .with_context(|| format!("Failed to create {CONFIG_FILE_NAME}"))?;

        // Opening the directory creates the data file (from the seed, if any).
        let directory = Directory::open(root)?;

        println!("Initialised employee directory in {}", root.display());
        println!("  Created: {CONFIG_FILE_NAME}");
        println!("  Data:    {}", directory.store().path().display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn init(args: &[&str]) -> Init {
        Init::try_parse_from(std::iter::once("init").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn writes_config_and_empty_roster() {
        let tmp = TempDir::new().unwrap();

        init(&[]).run(tmp.path()).unwrap();

        let config = Config::load(&tmp.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, Config::default());
        assert!(tmp.path().join("runtime-data.json").exists());
    }

    #[test]
    fn refuses_to_overwrite_existing_config() {
        let tmp = TempDir::new().unwrap();
        init(&[]).run(tmp.path()).unwrap();

        assert!(init(&[]).run(tmp.path()).is_err());
    }

    #[test]
    fn mirror_requires_seed() {
        assert!(Init::try_parse_from(["init", "--mirror"]).is_err());
    }

    #[test]
    fn seeded_init_copies_seed() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("seed.json"),
            r#"[{"id": 1, "name": "John Smith", "hireDate": "08/30/2021"}]"#,
        )
        .unwrap();

        init(&["--seed", "seed.json", "--mirror"])
            .run(tmp.path())
            .unwrap();

        let directory = Directory::open(tmp.path()).unwrap();
        assert!(directory.contains(1).unwrap());
        assert_eq!(directory.store().mirror(), Some(tmp.path().join("seed.json").as_path()));
    }
}
