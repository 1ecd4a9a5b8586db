//! Bump command implementation.
use color_eyre::eyre::WrapErr;
use log::*;
use semver::Version;
use std::io::{self, Read};

use crate::{
    cli::{Args, BumpArgs},
    command::common,
    config::Settings,
    convention::{BumpLevel, BumpRules},
    result::Result,
};

/// Print the bump level implied by commit messages, or `none`.
pub fn execute(args: &Args, bump_args: &BumpArgs) -> Result<()> {
    let settings = common::load_settings(args)?;
    // fail on unsupported settings just like the other commands
    common::build_convention(&settings)?;

    let messages = if bump_args.messages.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .wrap_err("failed to read commit messages from stdin")?;
        split_messages(&input)
    } else {
        bump_args.messages.clone()
    };

    let rules = select_rules(&settings, bump_args.current_version.as_deref())?;

    match rules.increment(messages.as_slice()) {
        Some(level) => println!("{level}"),
        None => println!("none"),
    }

    Ok(())
}

/// Split NUL separated commit messages, dropping empty ones.
pub fn split_messages(input: &str) -> Vec<String> {
    input
        .split('\0')
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
        .collect()
}

/// Pick the bump table from the current version, falling back to the
/// `major_version_zero` setting when no version is known.
pub fn select_rules(
    settings: &Settings,
    current_version: Option<&str>,
) -> Result<BumpRules> {
    let version = match current_version {
        Some(version) => Some(Version::parse(version).wrap_err_with(|| {
            format!("invalid current version '{version}'")
        })?),
        None => settings.current_version()?,
    };

    let rules = match version {
        Some(version) => {
            debug!("selecting bump table for version {version}");
            BumpRules::for_version(&version)
        }
        None => BumpRules::new(settings.major_version_zero),
    };

    Ok(rules)
}

/// Bump level for a set of messages under the given settings.
pub fn bump_level(
    settings: &Settings,
    current_version: Option<&str>,
    messages: &[String],
) -> Result<Option<BumpLevel>> {
    Ok(select_rules(settings, current_version)?.increment(messages))
}
