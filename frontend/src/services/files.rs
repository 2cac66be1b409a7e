//! Browser file handles.

use newmeclass::api::UploadSource;
use web_sys::{Event, File, HtmlInputElement};

/// A file picked through an `<input type="file">`.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserFile(File);

impl BrowserFile {
    pub fn as_file(&self) -> &File {
        &self.0
    }

    pub fn name(&self) -> String {
        self.0.name()
    }

    /// First file of the input that fired `ev`, if any.
    pub fn from_input_event(ev: &Event) -> Option<Self> {
        let input: HtmlInputElement = leptos::event_target(ev);
        input.files().and_then(|files| files.get(0)).map(BrowserFile)
    }
}

impl UploadSource for BrowserFile {
    fn file_name(&self) -> String {
        self.0.name()
    }

    fn media_type(&self) -> String {
        self.0.type_()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }
}
