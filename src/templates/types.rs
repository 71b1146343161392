use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Document,
    Spreadsheet,
    Presentation,
    Textfile,
}

impl DocumentKind {
    /// Menu order.
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Document,
        DocumentKind::Spreadsheet,
        DocumentKind::Presentation,
        DocumentKind::Textfile,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            DocumentKind::Document => "odt",
            DocumentKind::Spreadsheet => "ods",
            DocumentKind::Presentation => "odp",
            DocumentKind::Textfile => "txt",
        }
    }

    /// Label shown in the menu. Doubles as the base of the default filename.
    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Document => "New Document",
            DocumentKind::Spreadsheet => "New Spreadsheet",
            DocumentKind::Presentation => "New Presentation",
            DocumentKind::Textfile => "New Textfile",
        }
    }

    pub fn item_id(self) -> &'static str {
        match self {
            DocumentKind::Document => "Templates::ODT",
            DocumentKind::Spreadsheet => "Templates::ODS",
            DocumentKind::Presentation => "Templates::ODP",
            DocumentKind::Textfile => "Templates::TXT",
        }
    }

    /// ODF media type, `None` for plain text.
    pub fn mimetype(self) -> Option<&'static str> {
        match self {
            DocumentKind::Document => Some("application/vnd.oasis.opendocument.text"),
            DocumentKind::Spreadsheet => Some("application/vnd.oasis.opendocument.spreadsheet"),
            DocumentKind::Presentation => Some("application/vnd.oasis.opendocument.presentation"),
            DocumentKind::Textfile => None,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Document => write!(f, "Document"),
            DocumentKind::Spreadsheet => write!(f, "Spreadsheet"),
            DocumentKind::Presentation => write!(f, "Presentation"),
            DocumentKind::Textfile => write!(f, "Textfile"),
        }
    }
}

/// Language and country written into the default paragraph style of new documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleTags {
    pub language: String,
    pub country: Option<String>,
}

impl Default for LocaleTags {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            country: Some("US".to_string()),
        }
    }
}

impl fmt::Display for LocaleTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.country {
            Some(ref country) => write!(f, "{}_{}", self.language, country),
            None => write!(f, "{}", self.language),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuAction {
    pub kind: DocumentKind,
    pub folder: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    pub tip: String,
    pub action: Option<MenuAction>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub submenu: Vec<MenuItem>,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            tip: String::new(),
            action: None,
            submenu: Vec::new(),
        }
    }

    pub fn with_action(mut self, action: MenuAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn with_submenu(mut self, submenu: Vec<MenuItem>) -> Self {
        self.submenu = submenu;
        self
    }
}

/// Writes a new file at the given full path.
pub type CreateFn = Box<dyn Fn(&Path) -> TemplateResult<()>>;

/// Everything a name dialog needs to create one file.
pub struct CreationRequest {
    pub title: String,
    pub default_name: String,
    pub base_path: PathBuf,
    pub extension: String,
    pub create: CreateFn,
}

impl fmt::Debug for CreationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreationRequest")
            .field("title", &self.title)
            .field("default_name", &self.default_name)
            .field("base_path", &self.base_path)
            .field("extension", &self.extension)
            .finish_non_exhaustive()
    }
}

/// Why a candidate filename cannot be confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameProblem {
    Empty,
    Exists,
    Separator,
}

impl fmt::Display for NameProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameProblem::Empty => write!(f, "Filename must not be empty"),
            NameProblem::Exists => write!(f, "A file with this name already exists"),
            NameProblem::Separator => write!(f, "Filename must not contain a path separator"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write ODF package {}: {source}", .path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Invalid locale identifier: {0:?}")]
    InvalidLocale(String),
}

impl TemplateError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TemplateError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn archive(path: impl Into<PathBuf>, source: zip::result::ZipError) -> Self {
        TemplateError::Archive {
            path: path.into(),
            source,
        }
    }
}

pub type TemplateResult<T> = Result<T, TemplateError>;
