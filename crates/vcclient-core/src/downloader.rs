//! Sample downloader screen model.
//!
//! Front ends render a [`DownloaderView`] and hand the request attached to an
//! entry to [`download_sample`]. The view is only produced while the dialog
//! shows the sample downloader and the server has reported its model slots.

use crate::catalog::{filter_samples, language_options, LanguageFilter};
use crate::{
    DialogScreen, MessageBuilder, SampleModel, ServerSetting, UploadFailure, UploadGateway,
    UploadRequest,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const COMPONENT_ID: &str = "sample_downloader";

pub mod keys {
    pub const HEADER_MESSAGE: &str = "header_message";
    pub const LANG: &str = "lang";
    pub const BACK: &str = "back";
    pub const TERMS_OF_USE: &str = "terms_of_use";
    pub const DOWNLOAD: &str = "download";
}

/// Registers the screen's labels unless they are already present.
pub fn register_messages(messages: &mut MessageBuilder) {
    if messages.is_registered(COMPONENT_ID) {
        return;
    }
    messages.set_message(
        COMPONENT_ID,
        keys::HEADER_MESSAGE,
        &[("ja", "サンプルをダウンロードしてください. 対象："), ("en", "Download Sample for")],
    );
    messages.set_message(COMPONENT_ID, keys::LANG, &[("ja", "言語"), ("en", "Lang")]);
    messages.set_message(COMPONENT_ID, keys::BACK, &[("ja", "戻る"), ("en", "back")]);
    messages.set_message(
        COMPONENT_ID,
        keys::TERMS_OF_USE,
        &[("ja", "利用規約"), ("en", "terms of use")],
    );
    messages.set_message(
        COMPONENT_ID,
        keys::DOWNLOAD,
        &[("ja", "ダウンロード"), ("en", "download")],
    );
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleEntryView {
    pub key: String,
    pub icon: String,
    pub name: String,
    pub terms_of_use_url: Option<String>,
    pub voice_changer_type: String,
    pub info: String,
    /// `None` when this client cannot install the sample's voice changer.
    pub download: Option<UploadRequest>,
}

impl SampleEntryView {
    pub fn new(sample: &SampleModel, target_index: u32) -> Self {
        Self {
            key: sample.id.clone(),
            icon: sample.icon.clone(),
            name: sample.name.clone(),
            terms_of_use_url: sample.terms_of_use().map(str::to_string),
            voice_changer_type: sample.voice_changer_type().to_string(),
            info: sample.info(),
            download: UploadRequest::for_sample(sample, target_index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloaderView {
    pub target_index: u32,
    pub language_options: Vec<String>,
    pub selected: LanguageFilter,
    pub entries: Vec<SampleEntryView>,
}

impl DownloaderView {
    pub fn build(
        screen: DialogScreen,
        target_index: u32,
        selected: &LanguageFilter,
        setting: &ServerSetting,
    ) -> Option<Self> {
        if screen != DialogScreen::SampleDownloader || !setting.has_model_slots() {
            return None;
        }

        let entries = filter_samples(&setting.sample_models, selected)
            .map(|sample| SampleEntryView::new(sample, target_index))
            .collect();

        Some(Self {
            target_index,
            language_options: language_options(&setting.sample_models),
            selected: selected.clone(),
            entries,
        })
    }
}

/// Blocking user notification.
pub trait Notifier {
    fn alert(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Installed,
    Failed(UploadFailure),
}

/// Uploads one sample, reports a failure, then always returns to the slot manager.
pub async fn download_sample<G, N, F>(
    request: &UploadRequest,
    gateway: &G,
    notifier: &N,
    back_to_slot_manager: F,
) -> DownloadOutcome
where
    G: UploadGateway + ?Sized,
    N: Notifier + ?Sized,
    F: FnOnce(),
{
    info!(
        "Installing sample {} ({}) into slot {}",
        request.sample_id, request.voice_changer_type, request.slot
    );

    let outcome = match gateway.upload_model(request).await {
        Ok(()) => {
            info!("Sample {} installed", request.sample_id);
            DownloadOutcome::Installed
        }
        Err(e) => {
            warn!("Sample {} upload failed: {}", request.sample_id, e);
            notifier.alert(&e.to_string());
            DownloadOutcome::Failed(e)
        }
    };

    back_to_slot_manager();
    outcome
}

struct ViewKey {
    screen: DialogScreen,
    target_index: u32,
    selected: LanguageFilter,
    setting: Arc<ServerSetting>,
}

impl ViewKey {
    fn matches(
        &self,
        screen: DialogScreen,
        target_index: u32,
        selected: &LanguageFilter,
        setting: &Arc<ServerSetting>,
    ) -> bool {
        self.screen == screen
            && self.target_index == target_index
            && self.selected == *selected
            && Arc::ptr_eq(&self.setting, setting)
    }
}

/// Screen state for front ends without a reactive runtime.
///
/// Holds the selected language and reuses the last view until the screen,
/// target slot, language or server setting object changes.
pub struct SampleDownloader {
    selected: LanguageFilter,
    cache: Option<(ViewKey, Option<Arc<DownloaderView>>)>,
}

impl SampleDownloader {
    pub fn mount(messages: &mut MessageBuilder) -> Self {
        register_messages(messages);
        Self {
            selected: LanguageFilter::All,
            cache: None,
        }
    }

    pub fn selected_language(&self) -> &LanguageFilter {
        &self.selected
    }

    pub fn select_language(&mut self, lang: &str) {
        self.selected = LanguageFilter::parse(lang);
    }

    pub fn render(
        &mut self,
        screen: DialogScreen,
        target_index: u32,
        setting: &Arc<ServerSetting>,
    ) -> Option<Arc<DownloaderView>> {
        if let Some((key, view)) = &self.cache {
            if key.matches(screen, target_index, &self.selected, setting) {
                return view.clone();
            }
        }

        debug!(
            "Rebuilding sample view: screen={} slot={} lang={}",
            screen.label(),
            target_index,
            self.selected
        );
        let view = DownloaderView::build(screen, target_index, &self.selected, setting).map(Arc::new);
        let key = ViewKey {
            screen,
            target_index,
            selected: self.selected.clone(),
            setting: Arc::clone(setting),
        };
        self.cache = Some((key, view.clone()));
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::fixtures::*;
    use crate::{ModelSlot, UploadParams};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};

    fn setting() -> ServerSetting {
        let mut with_terms = rvc("rvc-ja", "ja", "X", true, 40000);
        with_terms.terms_of_use_url = Some("https://example.com/terms".to_string());
        ServerSetting {
            model_slots: Some(vec![ModelSlot::default()]),
            sample_models: vec![
                with_terms,
                diffusion("diff-en", "en", 3, 5, 10),
                other("mmvc-ja", "ja", "MMVCv15"),
            ],
        }
    }

    struct RecordingGateway {
        requests: RefCell<Vec<UploadRequest>>,
        fail_with: Option<String>,
    }

    impl RecordingGateway {
        fn ok() -> Self {
            Self {
                requests: RefCell::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                requests: RefCell::new(Vec::new()),
                fail_with: Some(message.to_string()),
            }
        }
    }

    #[async_trait(?Send)]
    impl UploadGateway for RecordingGateway {
        async fn upload_model(&self, request: &UploadRequest) -> Result<(), UploadFailure> {
            self.requests.borrow_mut().push(request.clone());
            match &self.fail_with {
                Some(message) => Err(UploadFailure::new(message)),
                None => Ok(()),
            }
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        alerts: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn test_hidden_on_other_screens() {
        let setting = setting();
        for screen in [DialogScreen::Main, DialogScreen::FileUploader, DialogScreen::Editor] {
            assert_eq!(DownloaderView::build(screen, 0, &LanguageFilter::All, &setting), None);
        }
    }

    #[test]
    fn test_hidden_without_model_slots() {
        let setting = ServerSetting {
            model_slots: None,
            ..setting()
        };
        let view = DownloaderView::build(DialogScreen::SampleDownloader, 0, &LanguageFilter::All, &setting);
        assert_eq!(view, None);
    }

    #[test]
    fn test_entries_follow_filter() {
        let view = DownloaderView::build(
            DialogScreen::SampleDownloader,
            4,
            &LanguageFilter::parse("ja"),
            &setting(),
        )
        .unwrap();

        assert_eq!(view.language_options, vec!["All", "ja", "en"]);
        let keys: Vec<_> = view.entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["rvc-ja", "mmvc-ja"]);
    }

    #[test]
    fn test_entry_contents() {
        let view =
            DownloaderView::build(DialogScreen::SampleDownloader, 4, &LanguageFilter::All, &setting())
                .unwrap();

        let rvc = &view.entries[0];
        assert_eq!(rvc.info, "type:X, f0:f0, sr:40000");
        assert_eq!(rvc.terms_of_use_url.as_deref(), Some("https://example.com/terms"));
        let request = rvc.download.as_ref().unwrap();
        assert_eq!(request.slot, 4);
        assert_eq!(request.sample_id, "rvc-ja");
        assert_eq!(request.params, UploadParams::Rvc { use_index: true });

        let diff = &view.entries[1];
        assert_eq!(diff.info, "native_l:3, diff_l:5, max_kstep:10");
        assert_eq!(diff.terms_of_use_url, None);
        assert_eq!(diff.download.as_ref().unwrap().params, UploadParams::DiffusionSvc {});

        let unknown = &view.entries[2];
        assert_eq!(unknown.voice_changer_type, "MMVCv15");
        assert_eq!(unknown.info, "");
        assert_eq!(unknown.download, None);
    }

    #[tokio::test]
    async fn test_download_success_returns_to_slot_manager() {
        let gateway = RecordingGateway::ok();
        let notifier = RecordingNotifier::default();
        let back_calls = Cell::new(0);
        let request = UploadRequest::for_sample(&rvc("a", "ja", "X", true, 40000), 2).unwrap();

        let outcome =
            download_sample(&request, &gateway, &notifier, || back_calls.set(back_calls.get() + 1))
                .await;

        assert_eq!(outcome, DownloadOutcome::Installed);
        assert_eq!(back_calls.get(), 1);
        assert!(notifier.alerts.borrow().is_empty());
        assert_eq!(gateway.requests.borrow().as_slice(), &[request]);
    }

    #[tokio::test]
    async fn test_download_failure_alerts_and_still_navigates_once() {
        let gateway = RecordingGateway::failing("connection refused");
        let notifier = RecordingNotifier::default();
        let back_calls = Cell::new(0);
        let request = UploadRequest::for_sample(&diffusion("d", "en", 1, 2, 3), 0).unwrap();

        let outcome =
            download_sample(&request, &gateway, &notifier, || back_calls.set(back_calls.get() + 1))
                .await;

        assert_eq!(
            outcome,
            DownloadOutcome::Failed(UploadFailure::new("connection refused"))
        );
        assert_eq!(back_calls.get(), 1);
        assert_eq!(notifier.alerts.borrow().as_slice(), &["connection refused".to_string()]);
        assert_eq!(gateway.requests.borrow().len(), 1);
    }

    #[test]
    fn test_mount_registers_labels_once() {
        let mut messages = MessageBuilder::new("ja");
        SampleDownloader::mount(&mut messages);
        messages.set_message(COMPONENT_ID, keys::BACK, &[("ja", "もどる")]);

        SampleDownloader::mount(&mut messages);
        assert_eq!(messages.get_message(COMPONENT_ID, keys::BACK), "もどる");
        assert_eq!(messages.get_message(COMPONENT_ID, keys::DOWNLOAD), "ダウンロード");
    }

    #[test]
    fn test_render_reuses_view_until_dependency_changes() {
        let mut messages = MessageBuilder::new("en");
        let mut screen = SampleDownloader::mount(&mut messages);
        let setting = Arc::new(setting());

        let first = screen.render(DialogScreen::SampleDownloader, 1, &setting).unwrap();
        let again = screen.render(DialogScreen::SampleDownloader, 1, &setting).unwrap();
        assert!(Arc::ptr_eq(&first, &again));

        let other_slot = screen.render(DialogScreen::SampleDownloader, 2, &setting).unwrap();
        assert!(!Arc::ptr_eq(&first, &other_slot));
        assert_eq!(other_slot.entries[0].download.as_ref().unwrap().slot, 2);

        screen.select_language("en");
        let english = screen.render(DialogScreen::SampleDownloader, 2, &setting).unwrap();
        assert_eq!(english.entries.len(), 1);
        assert_eq!(english.selected, LanguageFilter::Only("en".to_string()));

        let equal_but_new = Arc::new(setting.as_ref().clone());
        let refreshed = screen.render(DialogScreen::SampleDownloader, 2, &equal_but_new).unwrap();
        assert!(!Arc::ptr_eq(&english, &refreshed));

        assert!(screen.render(DialogScreen::Main, 2, &equal_but_new).is_none());
    }

    #[test]
    fn test_mount_starts_with_all_languages() {
        let mut messages = MessageBuilder::new("en");
        let screen = SampleDownloader::mount(&mut messages);
        assert_eq!(screen.selected_language(), &LanguageFilter::All);
    }
}
