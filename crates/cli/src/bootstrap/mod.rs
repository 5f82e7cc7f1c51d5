mod logging;

pub use logging::init_logging;

use ferrous_mdns_domain::{CliOverrides, Config};

/// Load and validate the configuration, filling in the machine hostname as
/// the responder name when neither file nor flags set one.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let mut config = Config::load(path, overrides)?;

    if config.responder.name.is_empty() {
        config.responder.name = default_responder_name();
    }

    Ok(config)
}

fn default_responder_name() -> String {
    hostname::get()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "ferrous-mdns".to_string())
}
