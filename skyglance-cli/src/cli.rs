use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use skyglance_core::{
    Config, OpenWeatherProvider, Widget, WidgetState, provider_from_config, render,
};

use crate::render::{Palette, draw};

const THEME_COMMAND: &str = ":theme";
const QUIT_COMMANDS: &[&str] = &[":q", ":quit", ":exit"];

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skyglance", version, about = "Current weather, forecast and a word of advice")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the config file.
    Configure,

    /// Fetch and show the weather for a city once.
    Show {
        /// City name; defaults to the configured city.
        city: Option<String>,

        /// Draw with the light palette.
        #[arg(long)]
        light: bool,
    },

    /// Keep the widget open and search repeatedly.
    Interactive {
        /// City to show first; defaults to the configured city.
        city: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, light } => {
                let config = Config::load_with_env()?;
                let mut widget = build_widget(&config, city.as_deref())?;
                if light {
                    widget.toggle_display_mode();
                }
                widget.mount().await;
                print_state(widget.state());
                Ok(())
            }
            Command::Interactive { city } => {
                let config = Config::load_with_env()?;
                let widget = build_widget(&config, city.as_deref())?;
                interactive(widget).await
            }
        }
    }
}

fn build_widget(
    config: &Config,
    city: Option<&str>,
) -> anyhow::Result<Widget<OpenWeatherProvider>> {
    let provider = provider_from_config(config)?;
    let initial = city.unwrap_or_else(|| config.default_city());
    Ok(Widget::new(provider, initial))
}

fn print_state(state: &WidgetState) {
    let view = render(state);
    print!("{}", draw(&view, Palette::detect(view.display_mode)));
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    if api_key.trim().is_empty() {
        anyhow::bail!("API key must not be empty");
    }

    let default_city = Text::new("Default city:")
        .with_default(config.default_city())
        .prompt()
        .context("Failed to read default city")?;

    config.set_api_key(api_key);
    config.default_city = Some(default_city.trim().to_string());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn interactive(mut widget: Widget<OpenWeatherProvider>) -> anyhow::Result<()> {
    widget.mount().await;

    loop {
        print_state(widget.state());
        println!();

        let input = Text::new("City name:")
            .with_placeholder(skyglance_core::view::SEARCH_PLACEHOLDER)
            .with_initial_value(&widget.state().query)
            .with_help_message(":theme switches light/dark, :quit exits")
            .prompt();

        let input = match input {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read search"),
        };

        match input.trim() {
            THEME_COMMAND => widget.toggle_display_mode(),
            cmd if QUIT_COMMANDS.contains(&cmd) => break,
            _ => {
                widget.search(&input).await;
            }
        }
    }

    Ok(())
}
