pub mod catalog;
pub mod config;
pub mod downloader;
pub mod error;
pub mod messages;
pub mod sample;
pub mod screen;
pub mod server;
pub mod upload;

pub use catalog::{filter_samples, language_options, LanguageFilter, ALL_LANGUAGES};
pub use config::{ClientConfig, ServerConfig, UiConfig, DEFAULT_HOST};
pub use downloader::{
    download_sample, register_messages, DownloadOutcome, DownloaderView, Notifier,
    SampleDownloader, SampleEntryView,
};
pub use error::{Result, VcClientError};
pub use messages::MessageBuilder;
pub use sample::{SampleKind, SampleModel, DIFFUSION_SVC, RVC};
pub use screen::DialogScreen;
pub use server::{ModelSlot, ServerSetting};
pub use upload::{UploadFailure, UploadGateway, UploadParams, UploadRequest};
