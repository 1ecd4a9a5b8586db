//! Common functionality shared between commands
use color_eyre::eyre::WrapErr;
use log::*;
use std::{env, path::Path};

use crate::{
    cli::Args,
    config::{self, Settings},
    convention::AzureDevopsConventional,
    result::Result,
};

/// Resolve project settings for the current working directory.
pub fn load_settings(args: &Args) -> Result<Settings> {
    let cwd = env::current_dir()?;
    resolve_settings(args.config.as_deref(), &cwd)
}

/// Resolve project settings from an explicit file or by searching `start`.
pub fn resolve_settings(path: Option<&Path>, start: &Path) -> Result<Settings> {
    let settings = config::resolve(path, start)
        .wrap_err("failed to load commitizen configuration")?;
    debug!("resolved settings: {settings:?}");
    Ok(settings)
}

/// Build the commit convention from project settings.
pub fn build_convention(settings: &Settings) -> Result<AzureDevopsConventional> {
    let convention = AzureDevopsConventional::new(settings)
        .wrap_err("failed to initialize the azure devops convention")?;
    Ok(convention)
}

/// Settings and convention in one go.
pub fn load_convention(args: &Args) -> Result<AzureDevopsConventional> {
    let settings = load_settings(args)?;
    build_convention(&settings)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::CzError;

    #[test]
    fn build_convention_keeps_typed_error() {
        let settings = Settings {
            change_type_map: Some(json!({})),
            ..Settings::default()
        };

        let err = build_convention(&settings).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CzError>(),
            Some(CzError::UnsupportedConfiguration(_))
        ));
    }
}
