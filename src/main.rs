use clap::{Parser, Subcommand};
use photo_gallery::{
    Camera, Capabilities, FlashState, HttpFetcher, JsonFilePreferences, LocalFileStore,
    Photo, PhotoGalleryService, PlatformInfo, SystemClock, UnavailableFlash,
};
use std::path::PathBuf;
use std::sync::Arc;

mod camera;
mod config;
mod error;
mod filesystem;

use camera::FileImportCamera;
use config::AppConfig;
use error::AppError;

#[derive(Parser, Debug)]
#[command(name = "gallery-app", version, about = "Take photos and keep them in a gallery")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the saved photos, newest first
    List,
    /// Import an image as a new camera capture
    Capture {
        /// Image file to import
        #[arg(long)]
        from: PathBuf,
    },
    /// Switch the flashlight on or off
    Flash,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        log::error!("{}", e);
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config_path = cli
        .config
        .unwrap_or_else(filesystem::default_config_path);
    let config = AppConfig::load(&config_path)?;
    std::fs::create_dir_all(&config.data_dir)?;

    match cli.command {
        Command::List => {
            let mut service = build_service(&config, None);
            let photos = service.load_saved().await?;
            if photos.is_empty() {
                println!("No photos saved yet.");
            }
            for photo in photos {
                println!(
                    "{}\t{}",
                    photo.filepath,
                    photo.webview_path.as_deref().map(shorten).unwrap_or("-")
                );
            }
        }
        Command::Capture { from } => {
            let (photo, count) = capture_photo(&config, from).await?;
            println!("Saved {} ({} photos)", photo.filepath, count);
        }
        Command::Flash => {
            let service = build_service(&config, None);
            match service.toggle_flashlight().await? {
                FlashState::On => println!("Flashlight on"),
                FlashState::Off => println!("Flashlight off"),
                FlashState::Unavailable => println!("Flashlight not available on this device."),
            }
        }
    }

    Ok(())
}

fn build_service(config: &AppConfig, camera: Option<Arc<dyn Camera>>) -> PhotoGalleryService {
    let data_dir = &config.data_dir;
    // listing and flash never capture, an empty source just fails if asked to
    let camera: Arc<dyn Camera> = match camera {
        Some(camera) => camera,
        None => Arc::new(FileImportCamera::new(
            PathBuf::new(),
            filesystem::capture_dir(data_dir),
        )),
    };

    let capabilities = Capabilities {
        camera,
        files: Arc::new(LocalFileStore::new(filesystem::files_root(data_dir))),
        preferences: Arc::new(JsonFilePreferences::new(filesystem::preferences_path(
            data_dir,
        ))),
        flash: Arc::new(UnavailableFlash),
        fetcher: Arc::new(HttpFetcher::new()),
        clock: Arc::new(SystemClock),
    };

    log::debug!(
        "Using data directory {} (hybrid: {})",
        data_dir.display(),
        config.platform.is_hybrid()
    );
    PhotoGalleryService::new(config.gallery.clone(), &config.platform, capabilities)
}

/// Import `from` as a capture, returns the saved photo and the gallery size
///
/// The staged copy is removed whether or not saving succeeded.
async fn capture_photo(config: &AppConfig, from: PathBuf) -> Result<(Photo, usize), AppError> {
    let camera = Arc::new(FileImportCamera::new(
        from,
        filesystem::capture_dir(&config.data_dir),
    ));
    let port: Arc<dyn Camera> = camera.clone();
    let mut service = build_service(config, Some(port));
    service.load_saved().await?;

    let saved = service.capture_and_save().await;
    if let Err(e) = camera.clear_staged().await {
        log::warn!("Could not remove staged capture: {}", e);
    }
    Ok((saved?, service.len()))
}

/// Data URLs are far too long for a terminal line
fn shorten(path: &str) -> &str {
    const MAX: usize = 60;
    match path.char_indices().nth(MAX) {
        Some((idx, _)) if path.starts_with("data:") => &path[..idx],
        _ => path,
    }
}
