//! CLI Commands
//!
//! One module per subcommand, plus the shared application context and
//! argument structs.

pub mod config;
pub mod extract;
pub mod generate;
pub mod poster;
pub mod refine;
pub mod saved;
pub mod stock;
pub mod transliterate;

use std::path::PathBuf;
use std::sync::Arc;

use crate::ai::{CredentialPool, Dispatcher};
use crate::assets;
use crate::cli::output::ConsoleProgress;
use crate::config::{Config, ConfigLoader};
use crate::pipeline::Pipeline;
use crate::storage::Database;
use crate::types::{AdFormData, AdType, AssetStore, AttireType, DurationPackage, Result};

// =============================================================================
// Shared Context
// =============================================================================

/// Everything a model-facing command needs: resolved config, the pipeline
/// wired to the env-loaded credential pool, and the generation store.
pub struct AppContext {
    pub config: Config,
    pub pipeline: Pipeline,
    pub db: Database,
    pub owner: String,
}

impl AppContext {
    pub fn init(owner: String) -> Result<Self> {
        let config = ConfigLoader::load()?;
        let pool = Arc::new(CredentialPool::from_env()?);
        let dispatcher = Arc::new(Dispatcher::new(pool, &config.model)?);
        let pipeline = Pipeline::new(dispatcher, Arc::new(ConsoleProgress::new()));
        let db = Database::open(&config.storage.path)?;

        Ok(Self {
            config,
            pipeline,
            db,
            owner,
        })
    }
}

/// Context for commands that only touch storage. No credential pool is
/// built, so `saved list`/`delete` work without any configured keys.
pub struct StorageContext {
    pub config: Config,
    pub db: Database,
    pub owner: String,
}

impl StorageContext {
    pub fn init(owner: String) -> Result<Self> {
        let config = ConfigLoader::load()?;
        let db = Database::open(&config.storage.path)?;
        Ok(Self { config, db, owner })
    }
}

// =============================================================================
// Shared Arguments
// =============================================================================

/// Parse the ad type from a CLI string
pub fn parse_ad_type(s: &str) -> std::result::Result<AdType, String> {
    match s.to_lowercase().as_str() {
        "commercial" => Ok(AdType::Commercial),
        "festival" => Ok(AdType::Festival),
        _ => Err(format!("Invalid ad type '{s}'. Valid values: commercial, festival")),
    }
}

/// Parse the attire type from a CLI string
pub fn parse_attire(s: &str) -> std::result::Result<AttireType, String> {
    match s.to_lowercase().as_str() {
        "professional" => Ok(AttireType::Professional),
        "traditional" => Ok(AttireType::Traditional),
        _ => Err(format!(
            "Invalid attire '{s}'. Valid values: professional, traditional"
        )),
    }
}

/// Parse the duration package from a CLI seconds value
pub fn parse_duration(s: &str) -> std::result::Result<DurationPackage, String> {
    let seconds: u32 = s
        .parse()
        .map_err(|_| format!("Invalid duration '{s}'. Valid values: 16, 32, 64"))?;
    DurationPackage::try_from(seconds).map_err(|e| e.to_string())
}

/// Intake-form options shared by `generate` and `extract`.
#[derive(Debug, clap::Args)]
pub struct FormArgs {
    /// Campaign flavor: commercial or festival
    #[arg(long = "ad-type", default_value = "commercial", value_parser = parse_ad_type)]
    pub ad_type: AdType,

    /// Festival name (used with --ad-type festival)
    #[arg(long, default_value = "")]
    pub festival: String,

    /// Model wardrobe: professional or traditional
    #[arg(long, default_value = "traditional", value_parser = parse_attire)]
    pub attire: AttireType,

    /// Video length in seconds: 16, 32, or 64
    #[arg(long, default_value = "32", value_parser = parse_duration)]
    pub duration: DurationPackage,

    /// Free-text client instructions
    #[arg(long, default_value = "")]
    pub instructions: String,
}

impl FormArgs {
    pub fn into_form(self) -> AdFormData {
        AdFormData {
            ad_type: self.ad_type,
            festival_name: self.festival,
            attire: self.attire,
            duration: self.duration,
            text_instructions: self.instructions,
        }
    }
}

/// Asset-file options shared by `generate` and `extract`.
#[derive(Debug, clap::Args)]
pub struct AssetArgs {
    /// Business logo image
    #[arg(long)]
    pub logo: Option<PathBuf>,

    /// Visiting card image
    #[arg(long = "visiting-card")]
    pub visiting_card: Option<PathBuf>,

    /// Store/office photo
    #[arg(long = "store-image")]
    pub store_image: Option<PathBuf>,

    /// Product image (repeatable)
    #[arg(long = "product-image")]
    pub product_images: Vec<PathBuf>,

    /// Flyer, offer poster, or brochure (repeatable)
    #[arg(long = "flyer")]
    pub flyers: Vec<PathBuf>,

    /// Client voice-instruction recording
    #[arg(long = "voice-recording")]
    pub voice_recording: Option<PathBuf>,

    /// Text file with client instructions
    #[arg(long = "instructions-file")]
    pub instructions_file: Option<PathBuf>,
}

/// Load every referenced file into the asset store.
pub fn load_assets(args: &AssetArgs) -> Result<AssetStore> {
    fn load_opt(path: &Option<PathBuf>) -> Result<Option<crate::types::Attachment>> {
        path.as_deref().map(assets::load_attachment).transpose()
    }

    Ok(AssetStore {
        logo: load_opt(&args.logo)?,
        visiting_card: load_opt(&args.visiting_card)?,
        store_image: load_opt(&args.store_image)?,
        product_images: args
            .product_images
            .iter()
            .map(|p| assets::load_attachment(p))
            .collect::<Result<Vec<_>>>()?,
        flyers: args
            .flyers
            .iter()
            .map(|p| assets::load_attachment(p))
            .collect::<Result<Vec<_>>>()?,
        voice_recording: load_opt(&args.voice_recording)?,
        text_instructions_file: args
            .instructions_file
            .as_deref()
            .map(assets::load_text)
            .transpose()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsers() {
        assert_eq!(parse_ad_type("Festival").unwrap(), AdType::Festival);
        assert!(parse_ad_type("birthday").is_err());

        assert_eq!(parse_attire("PROFESSIONAL").unwrap(), AttireType::Professional);
        assert!(parse_attire("casual").is_err());

        assert_eq!(parse_duration("64").unwrap(), DurationPackage::Long);
        assert!(parse_duration("30").is_err());
        assert!(parse_duration("abc").is_err());
    }

    #[test]
    fn test_load_assets_with_empty_args() {
        let args = AssetArgs {
            logo: None,
            visiting_card: None,
            store_image: None,
            product_images: vec![],
            flyers: vec![],
            voice_recording: None,
            instructions_file: None,
        };
        let store = load_assets(&args).unwrap();
        assert!(store.logo.is_none());
        assert!(!store.has_product_images());
    }
}
