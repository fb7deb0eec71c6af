use serde::{Deserialize, Serialize};

/// Which screen of the model slot manager dialog is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialogScreen {
    #[default]
    Main,
    SampleDownloader,
    FileUploader,
    Editor,
}

impl DialogScreen {
    pub fn label(&self) -> &'static str {
        match self {
            DialogScreen::Main => "Main",
            DialogScreen::SampleDownloader => "SampleDownloader",
            DialogScreen::FileUploader => "FileUploader",
            DialogScreen::Editor => "Editor",
        }
    }
}
