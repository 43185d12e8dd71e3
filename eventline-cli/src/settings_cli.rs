//! `eventline settings` - display preferences stored in the config file

use anyhow::Result;
use clap::Subcommand;
use std::path::Path;

use eventline_core::{EventlineConfig, Settings};

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Print the current settings
    Show,

    /// Change settings; numeric values are clamped to their allowed ranges
    Set {
        /// Dark mode on or off
        #[clap(long)]
        dark_mode: Option<bool>,

        /// Text scale (0.8 - 1.8)
        #[clap(long)]
        text_scale: Option<f64>,

        /// Volume (0.0 - 1.0)
        #[clap(long)]
        volume: Option<f64>,
    },
}

fn print_settings(settings: &Settings) {
    println!("dark_mode:  {}", settings.dark_mode);
    println!("text_scale: {:.2}", settings.text_scale);
    println!("volume:     {:.2}", settings.volume);
}

impl SettingsCommand {
    pub fn execute(self, mut config: EventlineConfig, path: &Path) -> Result<()> {
        match self {
            SettingsCommand::Show => print_settings(&config.settings),
            SettingsCommand::Set {
                dark_mode,
                text_scale,
                volume,
            } => {
                if let Some(enabled) = dark_mode {
                    config.settings.set_dark_mode(enabled);
                }
                if let Some(scale) = text_scale {
                    config.settings.set_text_scale(scale);
                }
                if let Some(volume) = volume {
                    config.settings.set_volume(volume);
                }

                config.save_to_path(path)?;
                println!("Saved settings to {}\n", path.display());
                print_settings(&config.settings);
            }
        }
        Ok(())
    }
}
