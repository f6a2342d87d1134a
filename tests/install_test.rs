use jar_install::{
    cli::{Config, install},
    download::Fetcher,
    error::{InstallError, Result},
    maven::resolve,
};
use std::{cell::Cell, fs, path::Path};
use tempfile::tempdir;

/// Writes a placeholder JAR named after the URL, the way `wget -P` would.
struct DiskFetcher {
    called: Cell<bool>,
}

impl Fetcher for DiskFetcher {
    fn fetch(&self, url: &str, dir: &Path) -> Result<()> {
        self.called.set(true);

        let name = url.rsplit('/').next().unwrap();

        fs::write(dir.join(name), b"PK")?;
        Ok(())
    }
}

#[test]
fn installs_into_a_fresh_directory() {
    let tmp = tempdir().unwrap();
    let jars = tmp.path().join("opt/spark/jars");
    let config = Config::new("org.apache.spark:spark-core_2.12:3.5.0", &jars).unwrap();
    let fetcher = DiskFetcher {
        called: Cell::new(false),
    };
    let mut out = Vec::new();

    install(&config, &fetcher, &mut out).unwrap();

    assert!(fetcher.called.get());
    assert!(jars.join("spark-core_2.12-3.5.0.jar").is_file());
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Installed: org.apache.spark:spark-core_2.12:3.5.0\n"
    );
}

#[test]
fn malformed_coordinates_never_reach_the_fetcher() {
    let tmp = tempdir().unwrap();
    let fetcher = DiskFetcher {
        called: Cell::new(false),
    };

    for bad in ["onlytwo:parts", "a:b:c:d", "a::1.0"] {
        let mut out = Vec::new();
        let res = Config::new(bad, tmp.path()).and_then(|c| install(&c, &fetcher, &mut out));

        assert!(matches!(res, Err(InstallError::MalformedCoordinate(ref c)) if c == bad));
        assert!(out.is_empty());
        assert!(resolve(bad).is_err());
    }

    assert!(!fetcher.called.get());
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
}
