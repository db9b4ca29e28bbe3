use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::{Path, PathBuf};

pub fn metro() -> Command {
    cargo_bin_cmd!("metro")
}

/// Path to the shared city network fixture
pub fn city_fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("city.toml")
}

/// `metro --network <city fixture>` ready for a subcommand
pub fn metro_city() -> Command {
    let mut cmd = metro();
    cmd.arg("--network").arg(city_fixture());
    cmd.env_remove("METRO_NETWORK").env_remove("METRO_CONFIG");
    cmd
}
