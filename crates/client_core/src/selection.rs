use std::{fmt, fs, io, path::Path};

pub const PDF_MIME_TYPE: &str = "application/pdf";
/// Extensions offered by file pickers; the backend is not asked to enforce them.
pub const PDF_EXTENSIONS: &[&str] = &["pdf", "PDF"];

/// A file chosen by the user, held in memory until it is replaced by the next
/// selection.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub file_name: String,
    pub mime_type: String,
    pub contents: Vec<u8>,
}

impl SelectedFile {
    pub fn new(file_name: impl Into<String>, contents: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_guess::from_path(&file_name)
            .first_raw()
            .unwrap_or(PDF_MIME_TYPE)
            .to_string();
        Self {
            file_name,
            mime_type,
            contents,
        }
    }

    pub fn read_from_path(path: &Path) -> io::Result<Self> {
        let contents = fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document.pdf".to_string());
        Ok(Self::new(file_name, contents))
    }

    pub fn size_bytes(&self) -> usize {
        self.contents.len()
    }
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("size_bytes", &self.size_bytes())
            .finish()
    }
}
