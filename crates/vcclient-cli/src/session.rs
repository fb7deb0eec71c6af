use anyhow::{bail, Result};
use std::cell::Cell;
use std::sync::Arc;
use vcclient_core::downloader::{keys, COMPONENT_ID};
use vcclient_core::{
    download_sample, ClientConfig, DialogScreen, DownloadOutcome, DownloaderView, MessageBuilder,
    Notifier, SampleDownloader, SampleEntryView, ServerSetting,
};

use crate::client::ServerClient;

/// Prints alerts to stderr.
pub struct TerminalAlert;

impl Notifier for TerminalAlert {
    fn alert(&self, message: &str) {
        eprintln!("  Error: {}", message);
    }
}

/// Resolves a list number (1-based) or a sample id. Ids made only of digits
/// still resolve when the number is outside the list.
fn pick_entry<'a>(entries: &'a [SampleEntryView], input: &str) -> Result<&'a SampleEntryView> {
    if let Ok(n) = input.parse::<usize>() {
        if n >= 1 && n <= entries.len() {
            return Ok(&entries[n - 1]);
        }
    }

    match entries.iter().find(|e| e.key == input) {
        Some(entry) => Ok(entry),
        None if input.parse::<usize>().is_ok() => {
            bail!("Invalid sample number: {}. Use 1-{} or a sample id", input, entries.len())
        }
        None => bail!("Sample not listed: {}", input),
    }
}

/// Terminal counterpart of the model slot manager dialog.
pub struct Session {
    client: ServerClient,
    messages: MessageBuilder,
    downloader: SampleDownloader,
    setting: Arc<ServerSetting>,
    screen: DialogScreen,
    target_index: u32,
}

impl Session {
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        let client = ServerClient::new(config.server);
        let mut messages = MessageBuilder::new(config.ui.lang);
        let downloader = SampleDownloader::mount(&mut messages);

        let mut session = Self {
            client,
            messages,
            downloader,
            setting: Arc::new(ServerSetting::default()),
            screen: DialogScreen::Main,
            target_index: 0,
        };
        session.refresh().await?;
        Ok(session)
    }

    pub fn host(&self) -> &str {
        self.client.host()
    }

    pub fn setting(&self) -> &ServerSetting {
        &self.setting
    }

    pub fn screen(&self) -> DialogScreen {
        self.screen
    }

    pub async fn refresh(&mut self) -> Result<()> {
        self.setting = Arc::new(self.client.fetch_info().await?);
        tracing::debug!(
            "Server reports {} slots, {} samples",
            self.setting.slots().len(),
            self.setting.sample_models.len()
        );
        Ok(())
    }

    fn label(&self, key: &str) -> String {
        self.messages.get_message(COMPONENT_ID, key)
    }

    pub fn open_sample_downloader(&mut self, slot: u32) {
        self.target_index = slot;
        self.screen = DialogScreen::SampleDownloader;
    }

    pub fn back_to_slot_manager(&mut self) {
        self.screen = DialogScreen::Main;
    }

    pub fn select_language(&mut self, lang: &str) {
        self.downloader.select_language(lang);
    }

    fn current_view(&mut self) -> Option<Arc<DownloaderView>> {
        self.downloader
            .render(self.screen, self.target_index, &self.setting)
    }

    pub fn print_languages(&mut self) {
        let Some(view) = self.current_view() else {
            println!("  Server has not reported model slots yet.");
            return;
        };
        println!();
        println!("{}:", self.label(keys::LANG));
        for lang in &view.language_options {
            let marker = if *lang == view.selected.as_str() { "*" } else { " " };
            println!("  {} {}", marker, lang);
        }
        println!();
    }

    pub fn print_slots(&self) {
        println!();
        println!("Model Slots:");
        println!("{:-<65}", "");
        println!("  {:<6} {:<16} {}", "Slot", "VC Type", "Name");
        println!("{:-<65}", "");
        for (position, slot) in self.setting.slots().iter().enumerate() {
            if slot.is_empty() {
                println!("  {:<6} {:<16} {}", position, "-", "blank");
            } else {
                println!(
                    "  {:<6} {:<16} {}",
                    position,
                    slot.voice_changer_type.as_deref().unwrap_or("-"),
                    slot.name
                );
            }
        }
        println!();
    }

    pub fn print_samples(&mut self) {
        let Some(view) = self.current_view() else {
            println!("  Open a slot first (e.g., `sample 0`).");
            return;
        };

        println!();
        println!(
            "{} Slot[{}]   <<{}",
            self.label(keys::HEADER_MESSAGE),
            view.target_index,
            self.label(keys::BACK)
        );
        println!("{}: {}", self.label(keys::LANG), view.selected);
        println!("{:-<90}", "");
        println!("  {:<4} {:<28} {:<14} {}", "#", "Name", "VC Type", "Info");
        println!("{:-<90}", "");
        for (i, entry) in view.entries.iter().enumerate() {
            println!(
                "  {:<4} {:<28} {:<14} {}",
                i + 1,
                entry.name,
                entry.voice_changer_type,
                entry.info
            );
            if let Some(url) = &entry.terms_of_use_url {
                println!("       [{}] {}", self.label(keys::TERMS_OF_USE), url);
            }
        }
        println!();
        println!("  Use: {} <#|id> (e.g., `d 1`)", self.label(keys::DOWNLOAD));
        println!();
    }

    /// Downloads the entry picked by list number or sample id, then returns to the slot list.
    pub async fn download(&mut self, input: &str) -> Result<DownloadOutcome> {
        let Some(view) = self.current_view() else {
            bail!("Open a slot first (e.g., `sample 0`)");
        };

        let entry = pick_entry(&view.entries, input)?;

        let Some(request) = &entry.download else {
            bail!(
                "{} samples cannot be installed by this client",
                entry.voice_changer_type
            );
        };

        println!("  Installing {} into slot {}...", entry.name, request.slot);
        let navigated = Cell::new(false);
        let outcome =
            download_sample(request, &self.client, &TerminalAlert, || navigated.set(true)).await;

        if navigated.get() {
            self.back_to_slot_manager();
            if let Err(e) = self.refresh().await {
                tracing::warn!("Failed to refresh server info: {}", e);
            }
            self.print_slots();
        }

        Ok(outcome)
    }
}
