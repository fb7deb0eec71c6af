pub mod header;
pub mod sample_downloader;
pub mod slot_manager;
