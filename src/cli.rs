use crate::{
    download::{Fetcher, FetcherKind, fetcher_for},
    error::{InstallError, Result},
    maven::{MAVEN_CENTRAL, MavenCoordinate},
    util::make_path_and_create,
};
use clap::Parser;
use std::{
    io::{self, Write},
    path::PathBuf,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The Maven coordinate to install, as `group:artifact:version`.
    pub coordinate: String,

    /// The directory to place the downloaded JAR in.
    pub jar_dir: PathBuf,

    /// The Maven repository to download from.
    #[clap(short = 'r', long = "repo", default_value = MAVEN_CENTRAL)]
    pub repository: String,

    /// How to download the JAR.
    #[clap(short = 'f', long = "fetcher", value_enum, default_value = "wget")]
    pub fetcher: FetcherKind,

    /// The path to the wget executable.
    #[clap(short = 'w', long = "wget", default_value = "wget")]
    pub wget: String,
}

/// Validated invocation settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub coordinate: MavenCoordinate,
    pub jar_dir: PathBuf,
    pub repository: String,
    pub fetcher: FetcherKind,
    pub wget: String,
}

impl Config {
    pub fn new(coordinate: impl AsRef<str>, jar_dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            coordinate: MavenCoordinate::parse(coordinate)?,
            jar_dir: jar_dir.into(),
            repository: MAVEN_CENTRAL.into(),
            fetcher: FetcherKind::default(),
            wget: "wget".into(),
        })
    }

    pub fn url(&self) -> String {
        self.coordinate.url_in(&self.repository)
    }
}

impl TryFrom<Cli> for Config {
    type Error = InstallError;

    fn try_from(cli: Cli) -> Result<Self> {
        Ok(Self {
            coordinate: MavenCoordinate::parse(&cli.coordinate)?,
            jar_dir: cli.jar_dir,
            repository: cli.repository,
            fetcher: cli.fetcher,
            wget: cli.wget,
        })
    }
}

pub fn report(out: &mut impl Write, coordinate: &MavenCoordinate) -> io::Result<()> {
    writeln!(out, "Installed: {coordinate}")
}

/// Fetches the configured artifact and reports it to `out` once it has landed.
pub fn install(config: &Config, fetcher: &dyn Fetcher, out: &mut impl Write) -> Result<()> {
    let url = config.url();

    tracing::debug!("Resolved {} to {url}", config.coordinate);

    let dir = make_path_and_create(&config.jar_dir)?;

    fetcher.fetch(&url, &dir)?;
    report(out, &config.coordinate)?;

    Ok(())
}

impl Cli {
    pub fn exec() -> anyhow::Result<()> {
        Self::parse().run()
    }

    pub fn run(self) -> anyhow::Result<()> {
        let config = Config::try_from(self)?;
        let fetcher = fetcher_for(config.fetcher, &config.wget)?;

        tracing::debug!("Using the {} fetcher", config.fetcher.get());

        install(&config, fetcher.as_ref(), &mut io::stdout().lock())?;
        Ok(())
    }
}

pub fn run() -> anyhow::Result<()> {
    Cli::exec()
}
