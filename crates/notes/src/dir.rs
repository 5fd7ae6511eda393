use crate::error::{NoteError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory under the user's home that holds notes when nothing else is configured.
pub const DEFAULT_SUB_DIR: &str = ".noman";

/// Where the notes directory path came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DirOrigin {
    Default,
    Flag,
}

impl DirOrigin {
    pub const fn as_str(self) -> &'static str {
        match self {
            DirOrigin::Default => "default",
            DirOrigin::Flag => "flag",
        }
    }
}

/// The single directory both searched and read from for one invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotesDir {
    path: PathBuf,
    origin: DirOrigin,
}

pub fn default_notes_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(NoteError::HomeUnavailable)?;
    Ok(home.join(DEFAULT_SUB_DIR))
}

impl NotesDir {
    pub fn new(path: impl Into<PathBuf>, origin: DirOrigin) -> Result<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(NoteError::EmptyPath);
        }
        Ok(Self { path, origin })
    }

    /// Uses the `--path` value when given, otherwise `<home>/.noman`.
    ///
    /// The home directory is only consulted when no override is present.
    pub fn resolve(flag: Option<PathBuf>) -> Result<Self> {
        match flag {
            Some(path) => Self::new(path, DirOrigin::Flag),
            None => Self::new(default_notes_dir()?, DirOrigin::Default),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn origin(&self) -> DirOrigin {
        self.origin
    }

    /// Fails unless the path exists and is a directory. Never creates it.
    pub fn ensure_exists(&self) -> Result<()> {
        match fs::metadata(&self.path) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(NoteError::NotADirectory(self.path.clone())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(match self.origin {
                DirOrigin::Default => NoteError::DefaultDirMissing(self.path.clone()),
                DirOrigin::Flag => NoteError::CustomDirMissing(self.path.clone()),
            }),
            Err(source) => Err(NoteError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
