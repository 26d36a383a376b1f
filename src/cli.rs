use clap::{Parser, Subcommand};
use pharma_search::application::dto::{OutputFormat, UserAction};
use pharma_search::config::SettingsOverrides;
use std::path::PathBuf;

/// Search pharmaceutical products and drill down by form, strength and packing
#[derive(Parser, Debug)]
#[command(name = "pharma-search")]
#[command(version)]
#[command(
    about = "Search pharmaceutical products and drill down by form, strength and packing",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Search endpoint URL (overrides the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Output format: text or json
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet period before a typed query is searched, in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Path to a config file (defaults to ./pharma-search.config.yml if present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search once, apply the given selections, and print the view
    Search {
        /// Product or salt name
        query: String,

        #[arg(long)]
        form: Option<String>,

        #[arg(long)]
        strength: Option<String>,

        #[arg(long)]
        packing: Option<String>,
    },
    /// Read queries and `:form`/`:strength`/`:packing`/`:quit` commands from stdin
    Interactive,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            config_path: self.config.clone(),
            base_url: self.base_url.clone(),
            format: self.format,
            debounce_ms: self.debounce_ms,
        }
    }
}

impl Command {
    /// Selections given on the command line, outermost level first
    pub fn selections(&self) -> Vec<UserAction> {
        let Command::Search {
            form,
            strength,
            packing,
            ..
        } = self
        else {
            return Vec::new();
        };

        let mut actions = Vec::new();
        if let Some(form) = form {
            actions.push(UserAction::SelectForm(form.clone()));
        }
        if let Some(strength) = strength {
            actions.push(UserAction::SelectStrength(strength.clone()));
        }
        if let Some(packing) = packing {
            actions.push(UserAction::SelectPacking(packing.clone()));
        }
        actions
    }
}
