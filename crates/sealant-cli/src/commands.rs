//! Command handlers

use crate::cli::{Cli, Commands, JointArgs, OutputFormat};
use crate::output::{
    output_cartridges, output_comparison, output_estimate, output_profiles, output_share_link,
};
use sealant_app::app::{
    create_share_link, load_catalogue, run_comparison, run_estimate, EstimateRequest,
};
use sealant_app::config::Config;
use sealant_app::constants::PROFILE_PRESETS;
use sealant_app::export::export_estimate_to_excel;
use sealant_domain::LinkShortener;
use sealant_infra::TinyUrlShortener;
use sealant_types::Result;
use std::path::{Path, PathBuf};

/// `--config` wins over the default location
fn load_config(config_override: Option<&Path>) -> Result<Config> {
    match config_override {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn save_config(config: &Config, config_override: Option<&Path>) -> Result<PathBuf> {
    match config_override {
        Some(path) => {
            config.save_to(path)?;
            Ok(path.to_path_buf())
        }
        None => {
            config.save()?;
            Config::config_path()
        }
    }
}

/// Convert joint flags into an estimate request
pub fn build_request(joint: &JointArgs, cartridge: Option<String>) -> EstimateRequest {
    EstimateRequest {
        profile: Some(joint.profile.clone()),
        width_mm: joint.width,
        depth_mm: joint.depth,
        length_m: Some(joint.length),
        cartridge,
        wastage_percent: joint.wastage,
        no_wastage: joint.no_wastage,
        u_profile_factor: joint.u_factor,
    }
}

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config_override = cli.config.as_deref();
    let config = load_config(config_override)?;

    // Override from CLI args
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Calc {
            joint,
            cartridge,
            export,
        } => cmd_calc(&config, output_format, &joint, cartridge, export.as_deref()),

        Commands::Compare { joint } => {
            let report = run_comparison(&config, &build_request(&joint, None))?;
            output_comparison(output_format, &report)
        }

        Commands::Profiles => output_profiles(output_format, &PROFILE_PRESETS),

        Commands::Cartridges => {
            let catalogue = load_catalogue(&config)?;
            output_cartridges(output_format, catalogue.options())
        }

        Commands::Share {
            joint,
            cartridge,
            base_url,
            shorten,
        } => cmd_share(
            &config,
            output_format,
            &joint,
            cartridge,
            base_url.as_deref(),
            shorten,
        ),

        Commands::Config {
            show,
            set_output,
            set_cartridge,
            set_wastage,
            set_wastage_percent,
            set_u_factor,
            set_catalogue,
            set_share_base_url,
            set_shortener,
            reset,
        } => {
            let updates = ConfigUpdates {
                output_format: set_output,
                cartridge: set_cartridge,
                allow_wastage: set_wastage,
                wastage_percent: set_wastage_percent,
                u_profile_factor: set_u_factor,
                catalogue_path: set_catalogue,
                share_base_url: set_share_base_url,
                shortener_endpoint: set_shortener,
            };
            cmd_config(config, config_override, show, reset, updates)
        }
    }
}

fn cmd_calc(
    config: &Config,
    output_format: OutputFormat,
    joint: &JointArgs,
    cartridge: Option<String>,
    export: Option<&Path>,
) -> Result<()> {
    let report = run_estimate(config, &build_request(joint, cartridge))?;
    output_estimate(output_format, &report)?;

    if let Some(path) = export {
        export_estimate_to_excel(&report, path)?;
        eprintln!("Summary written to {}", path.display());
    }
    Ok(())
}

fn cmd_share(
    config: &Config,
    output_format: OutputFormat,
    joint: &JointArgs,
    cartridge: Option<String>,
    base_url: Option<&str>,
    shorten: bool,
) -> Result<()> {
    let request = build_request(joint, cartridge);

    let shortener = if shorten {
        Some(match config.shortener_endpoint {
            Some(ref endpoint) => TinyUrlShortener::with_endpoint(endpoint)?,
            None => TinyUrlShortener::new()?,
        })
    } else {
        None
    };

    let link = create_share_link(
        config,
        &request,
        base_url,
        shortener.as_ref().map(|s| s as &dyn LinkShortener),
    )?;
    output_share_link(output_format, &link)
}

/// Requested config changes from `config --set-*` flags
#[derive(Debug, Default)]
pub struct ConfigUpdates {
    pub output_format: Option<OutputFormat>,
    pub cartridge: Option<String>,
    pub allow_wastage: Option<bool>,
    pub wastage_percent: Option<f64>,
    pub u_profile_factor: Option<f64>,
    pub catalogue_path: Option<PathBuf>,
    pub share_base_url: Option<String>,
    pub shortener_endpoint: Option<String>,
}

impl ConfigUpdates {
    fn is_empty(&self) -> bool {
        self.output_format.is_none()
            && self.cartridge.is_none()
            && self.allow_wastage.is_none()
            && self.wastage_percent.is_none()
            && self.u_profile_factor.is_none()
            && self.catalogue_path.is_none()
            && self.share_base_url.is_none()
            && self.shortener_endpoint.is_none()
    }
}

/// Validate and apply updates; the config is left untouched on error
pub fn apply_config_updates(config: &mut Config, updates: ConfigUpdates) -> Result<()> {
    let mut next = config.clone();

    if let Some(format) = updates.output_format {
        next.output_format = format;
    }
    if let Some(allow) = updates.allow_wastage {
        next.allow_wastage = allow;
    }
    if let Some(percent) = updates.wastage_percent {
        sealant_domain::validation::ensure_range("wastage_percent", percent, 0.0, 100.0)?;
        next.wastage_percent = percent;
    }
    if let Some(factor) = updates.u_profile_factor {
        sealant_domain::service::VolumeOptions::with_u_profile_factor(factor)?;
        next.u_profile_factor = factor;
    }
    if let Some(path) = updates.catalogue_path {
        next.catalogue_path = Some(path);
    }
    if let Some(url) = updates.share_base_url {
        sealant_infra::validate_share_url(&url)?;
        next.share_base_url = Some(url);
    }
    if let Some(endpoint) = updates.shortener_endpoint {
        sealant_infra::validate_share_url(&endpoint)?;
        next.shortener_endpoint = Some(endpoint);
    }
    // Checked last so a new catalogue path can supply the cartridge
    if let Some(cartridge) = updates.cartridge {
        let catalogue = load_catalogue(&next)?;
        let option = catalogue
            .find(&cartridge)
            .ok_or_else(|| sealant_types::Error::UnknownCartridge(cartridge.clone()))?;
        next.default_cartridge = option.key.clone();
    }

    *config = next;
    Ok(())
}

fn cmd_config(
    mut config: Config,
    config_override: Option<&Path>,
    show: bool,
    reset: bool,
    updates: ConfigUpdates,
) -> Result<()> {
    if reset {
        config = Config::default();
        let path = save_config(&config, config_override)?;
        println!("Configuration reset to defaults ({}).", path.display());
        return Ok(());
    }

    let modified = !updates.is_empty();
    apply_config_updates(&mut config, updates)?;

    if modified {
        let path = save_config(&config, config_override)?;
        println!("Configuration saved to {}.", path.display());
    }

    if show || !modified {
        let path = match config_override {
            Some(path) => path.to_path_buf(),
            None => Config::config_path()?,
        };
        println!("{}", config);
        println!("Config file:       {}", path.display());
    }

    Ok(())
}
