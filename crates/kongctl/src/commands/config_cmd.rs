//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init { name, url, force } => {
            let path = config::config_path();
            if path.exists() && !force {
                return Err(CliError::ConfigExists {
                    path: path.display().to_string(),
                });
            }

            let profile = Profile {
                admin_url: url.unwrap_or_else(|| config::DEFAULT_ADMIN_URL.into()),
                ..Profile::default()
            };
            let mut cfg = Config {
                default_profile: Some(name.clone()),
                ..Config::default()
            };
            // Reject a URL the client would refuse before writing it out.
            kong_config::profile_to_client_config(&profile, &cfg.defaults)?;
            cfg.profiles.insert(name.clone(), profile);
            config::save_config(&cfg)?;

            output::notice(
                &format!("Configuration written to {}", path.display()),
                global.quiet,
            );
            output::notice(&format!("Active profile: {name}"), global.quiet);
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            let out = match global.format() {
                OutputFormat::Table | OutputFormat::Plain => config::to_toml(&cfg)?,
                format => output::render_single(&format, &cfg, |_| String::new())?,
            };
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }
    }
}
