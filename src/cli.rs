use std::path::{Path, PathBuf};

mod generate;
mod list;
mod play;
mod render;
mod show;
mod terminal;
mod validate;

use clap::ArgAction;
use extinction::{Catalog, Config, CrystalSystem, ProblemGenerator, SpaceGroup};
use generate::Generate;
use list::List;
use play::Play;
use rand::{rngs::StdRng, SeedableRng};
use show::Show;
use tracing::{debug, instrument};
use validate::Validate;

/// Parse a crystal system name, ignoring case.
///
/// This is a CLI boundary function used as a clap value parser.
fn parse_system(s: &str) -> Result<CrystalSystem, String> {
    s.parse().map_err(|e| format!("{e}"))
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to a catalog file to use instead of the built-in space-group
    /// table
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Seed for the random number generator, for reproducible problems
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let context = Context::load(self.config.as_deref(), self.catalog, self.seed)?;

        self.command
            .unwrap_or_else(|| Command::Play(Play::default()))
            .run(&context)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Play the quiz interactively (default)
    Play(Play),

    /// Generate a single problem
    ///
    /// Useful for scripting or for checking what a problem looks like for a
    /// given space group.
    Generate(Generate),

    /// List the space groups in the catalog
    List(List),

    /// Show the reflection conditions of a space group
    Show(Show),

    /// Check that every space group yields a valid problem
    Validate(Validate),
}

impl Command {
    fn run(self, context: &Context) -> anyhow::Result<()> {
        match self {
            Self::Play(command) => command.run(context)?,
            Self::Generate(command) => command.run(context)?,
            Self::List(command) => command.run(context)?,
            Self::Show(command) => command.run(context)?,
            Self::Validate(command) => command.run(context)?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Settings and data shared by every command.
#[derive(Debug)]
pub struct Context {
    config: Config,
    catalog: Catalog,
    seed: Option<u64>,
}

impl Context {
    /// Loads the configuration and the catalog.
    ///
    /// A catalog given on the command line takes precedence over one named in
    /// the configuration; without either, the built-in catalog is used.
    #[instrument]
    fn load(
        config_path: Option<&Path>,
        catalog_path: Option<PathBuf>,
        seed: Option<u64>,
    ) -> anyhow::Result<Self> {
        let config = match config_path {
            Some(path) => Config::load(path).map_err(anyhow::Error::msg)?,
            None => Config::default(),
        };

        let catalog = match catalog_path.or_else(|| config.catalog.clone()) {
            Some(path) => Catalog::load(&path)?,
            None => Catalog::builtin(),
        };
        debug!(groups = catalog.len(), ?seed, "context ready");

        Ok(Self {
            config,
            catalog,
            seed,
        })
    }

    fn generator(&self) -> ProblemGenerator<'_, StdRng> {
        let rng = self
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        ProblemGenerator::new(&self.catalog, &self.config, rng)
    }

    fn find_group(&self, key: &str) -> anyhow::Result<&SpaceGroup> {
        self.catalog
            .find(key)
            .ok_or_else(|| anyhow::anyhow!("Space group '{key}' not found"))
    }

    #[cfg(test)]
    fn for_tests(seed: Option<u64>) -> Self {
        Self {
            config: Config::default(),
            catalog: Catalog::builtin(),
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;

    use super::*;

    #[test]
    fn defaults_to_play() {
        let cli = Cli::try_parse_from(["exq"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from(["exq", "generate", "--seed", "42", "-vv"]).unwrap();
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Command::Generate(_))));
    }

    #[test]
    fn list_rejects_unknown_system() {
        assert!(Cli::try_parse_from(["exq", "list", "--system", "rhombic"]).is_err());
        assert!(Cli::try_parse_from(["exq", "list", "--system", "Cubic"]).is_ok());
    }

    #[test]
    fn context_uses_builtin_catalog_by_default() {
        let context = Context::load(None, None, Some(1)).unwrap();
        assert_eq!(context.catalog.len(), 230);
        assert_eq!(context.config, Config::default());
    }

    #[test]
    fn context_reads_config_and_catalog_files() {
        let tmp = tempfile::tempdir().unwrap();

        let catalog_path = tmp.path().join("groups.toml");
        std::fs::write(
            &catalog_path,
            "_version = \"1\"\n\n[[groups]]\nnumber = 1\nname = \"P1\"\nsystem = \"triclinic\"\n",
        )
        .unwrap();

        let config_path = tmp.path().join("config.toml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        write!(
            file,
            "_version = \"1\"\nchoice_count = 3\ncatalog = {:?}\n",
            catalog_path.display().to_string()
        )
        .unwrap();

        let context = Context::load(Some(config_path.as_path()), None, None).unwrap();
        assert_eq!(context.config.choice_count(), 3);
        assert_eq!(context.catalog.len(), 1);

        let problem = context.generator().generate();
        assert_eq!(problem.space_group().name(), "P1");
        assert_eq!(problem.choices().len(), 3);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let error = Context::load(Some(tmp.path().join("missing.toml").as_path()), None, None).unwrap_err();
        assert!(error.to_string().starts_with("Failed to read config file:"));
    }

    #[test]
    fn seeded_contexts_generate_identical_problems() {
        let context = Context::for_tests(Some(5));
        let first = context.generator().generate();
        let second = context.generator().generate();
        assert_eq!(first, second);
    }
}
