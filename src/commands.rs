//! Command execution. Each command renders its answer as text or JSON.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use control_dojos::config::DEFAULT_CONFIG_FILE;
use control_dojos::famous_people;
use control_dojos::rollercoasters::photos_for_riders;
use control_dojos::{
    beard_colour, describe_beard_colour, Beard, Country, King, MessageStyle, Person, RideConfig,
    RidePhoto, RideValidator,
};
use dojo_control::ResultExt;

use crate::cli::{Cli, Commands, Group};

#[derive(Debug, Serialize)]
struct BeardReport {
    country: Country,
    answer: String,
}

#[derive(Debug, Serialize)]
struct RideReport {
    rider: Person,
    admitted: bool,
    reasons: Vec<String>,
}

#[derive(Debug, Serialize)]
struct PhotoReport {
    photos: Vec<RidePhoto>,
    rejections: Vec<Vec<String>>,
}

/// Run the parsed command and return what should be printed.
///
/// # Errors
///
/// Returns error if the ride configuration cannot be loaded or the report
/// cannot be serialized.
pub fn run(cli: &Cli) -> Result<String> {
    run_with(cli, |name| std::env::var(name).ok())
}

/// [`run`] with environment overrides read through `lookup`.
///
/// # Errors
///
/// Same as [`run`].
pub fn run_with<L>(cli: &Cli, lookup: L) -> Result<String>
where
    L: Fn(&str) -> Option<String>,
{
    match &cli.command {
        Commands::Beard {
            country,
            king,
            beard,
            explain,
        } => {
            let king = king
                .as_ref()
                .map(|name| King::new(name.as_str(), beard.as_deref().map(Beard::new)));
            let country = Country::new(country.as_str(), king);
            let answer = if *explain {
                describe_beard_colour(&country)
            } else {
                beard_colour(&country)
            };

            render(cli.json, &BeardReport { country, answer }, |report| {
                report.answer.clone()
            })
        }

        Commands::Ride {
            name,
            height,
            named,
        } => {
            let validator = load_validator(cli, *named, lookup)?;
            let rider = Person::new(name.as_str(), *height);
            let report = validator.apply(rider.clone()).resolve(
                |rider| RideReport {
                    rider,
                    admitted: true,
                    reasons: Vec::new(),
                },
                |reasons| RideReport {
                    rider,
                    admitted: false,
                    reasons,
                },
            );

            render(cli.json, &report, |report| {
                if report.admitted {
                    format!("{} may ride", report.rider.name())
                } else {
                    report.reasons.join("\n")
                }
            })
        }

        Commands::Photos { group } => {
            let validator = load_validator(cli, true, lookup)?;
            let riders = match group {
                Group::Dwarfs => famous_people::dwarfs(),
                Group::Monsters => famous_people::monsters(),
            };

            let mut rejections = Vec::new();
            let photos = photos_for_riders(riders, &validator, |reasons| {
                rejections.push(reasons.clone());
            });

            tracing::info!(
                photos = photos.len(),
                rejected = rejections.len(),
                "photo booth closed"
            );

            render(cli.json, &PhotoReport { photos, rejections }, |report| {
                report
                    .photos
                    .iter()
                    .map(|photo| format!("photo: {}", photo.person().name()))
                    .chain(
                        report
                            .rejections
                            .iter()
                            .map(|reasons| format!("rejected: {}", reasons.join("; "))),
                    )
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
    }
}

fn load_validator<L>(cli: &Cli, named: bool, lookup: L) -> Result<RideValidator>
where
    L: Fn(&str) -> Option<String>,
{
    let config = RideConfig::load_with(cli.config.as_deref(), Path::new(DEFAULT_CONFIG_FILE), lookup)
        .context("Failed to load ride configuration")?;

    let validator = RideValidator::from_config(config);
    Ok(if named {
        validator.with_style(MessageStyle::Named)
    } else {
        validator
    })
}

fn render<T, F>(json: bool, report: &T, as_text: F) -> Result<String>
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    if json {
        serde_json::to_string_pretty(report).context("Failed to serialize report")
    } else {
        Ok(as_text(report))
    }
}
