use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["xlsx", "xls", "csv"];
pub const REJECTED_FILE_MESSAGE: &str = "Please upload an Excel or CSV file.";

#[derive(Debug, Clone)]
pub enum FileSource {
    Browser(web_sys::File),
    Bytes(Vec<u8>),
}

/// A spreadsheet picked through the file input or dropped on the upload zone.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    source: FileSource,
}

impl SelectedFile {
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            size: bytes.len() as u64,
            source: FileSource::Bytes(bytes),
        }
    }

    pub fn from_browser(file: web_sys::File) -> Self {
        Self {
            name: file.name(),
            size: file.size().max(0.0) as u64,
            source: FileSource::Browser(file),
        }
    }

    pub fn size_label(&self) -> String {
        const KB: u64 = 1024;
        const MB: u64 = 1024 * 1024;
        if self.size >= MB {
            format!("{:.1} MB", self.size as f64 / MB as f64)
        } else if self.size >= KB {
            format!("{:.1} KB", self.size as f64 / KB as f64)
        } else {
            format!("{} B", self.size)
        }
    }

    pub async fn read_bytes(&self) -> Result<Vec<u8>, String> {
        match &self.source {
            FileSource::Bytes(bytes) => Ok(bytes.clone()),
            FileSource::Browser(file) => {
                let buffer = JsFuture::from(file.array_buffer())
                    .await
                    .map_err(|_| format!("Could not read {}", self.name))?;
                Ok(js_sys::Uint8Array::new(&buffer).to_vec())
            }
        }
    }
}

pub fn is_spreadsheet(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
        .unwrap_or(false)
}

/// Single gate shared by the file picker and the drop zone.
pub fn accept_file(file: SelectedFile) -> Result<SelectedFile, String> {
    if is_spreadsheet(&file.name) {
        Ok(file)
    } else {
        log::warn!("rejected upload {}", file.name);
        Err(REJECTED_FILE_MESSAGE.to_string())
    }
}

pub fn file_from_input(ev: &web_sys::Event) -> Option<SelectedFile> {
    let input = ev
        .target()?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    let file = input.files()?.item(0)?;
    Some(SelectedFile::from_browser(file))
}

pub fn file_from_drop(ev: &web_sys::DragEvent) -> Option<SelectedFile> {
    let file = ev.data_transfer()?.files()?.item(0)?;
    Some(SelectedFile::from_browser(file))
}
