use crate::error::{NoteError, Result};
use std::fs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// How far below the notes directory a lookup descends.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchDepth {
    #[default]
    TopLevel,
    Recursive,
}

/// File name pattern for a note. The name is used verbatim, so glob syntax in it stays live.
pub fn note_pattern(name: &str) -> String {
    format!("{name}.md")
}

fn dir_pattern(dir: &Path, name: &str, depth: SearchDepth) -> Result<String> {
    let dir_str = dir
        .to_str()
        .ok_or_else(|| NoteError::NonUtf8Path(dir.to_path_buf()))?;
    let mut root = glob::Pattern::escape(dir_str);
    if !root.ends_with(MAIN_SEPARATOR) {
        root.push(MAIN_SEPARATOR);
    }
    Ok(match depth {
        SearchDepth::TopLevel => format!("{root}{}", note_pattern(name)),
        SearchDepth::Recursive => format!("{root}**{MAIN_SEPARATOR}{}", note_pattern(name)),
    })
}

// The matcher swallows an unreadable root as "no matches"; surface it instead.
fn ensure_listable(dir: &Path) -> Result<()> {
    fs::read_dir(dir).map(drop).map_err(|source| NoteError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

/// Every regular file under `dir` whose name matches `<name>.md`, in matcher order.
pub fn find_notes(dir: &Path, name: &str, depth: SearchDepth) -> Result<Vec<PathBuf>> {
    let pattern = dir_pattern(dir, name, depth)?;
    ensure_listable(dir)?;
    log::debug!("matching notes against {pattern}");

    let entries = glob::glob(&pattern).map_err(|source| NoteError::InvalidPattern {
        pattern: note_pattern(name),
        source,
    })?;

    let mut matches = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => matches.push(path),
            Ok(path) => log::debug!("skipping non-file match {}", path.display()),
            Err(err) if err.path() == dir => {
                return Err(NoteError::Io {
                    path: dir.to_path_buf(),
                    source: err.into_error(),
                })
            }
            Err(err) => log::debug!(
                "skipping unreadable entry {}: {}",
                err.path().display(),
                err.error()
            ),
        }
    }
    Ok(matches)
}

/// The first matching note, or [`NoteError::NotFound`].
pub fn find_note(dir: &Path, name: &str, depth: SearchDepth) -> Result<PathBuf> {
    let mut matches = find_notes(dir, name, depth)?.into_iter();
    let first = matches
        .next()
        .ok_or_else(|| NoteError::NotFound(name.to_string()))?;
    let rest = matches.len();
    if rest > 0 {
        log::debug!("{rest} more note(s) matched '{name}'; using {}", first.display());
    }
    Ok(first)
}

pub fn read_note(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| NoteError::Read {
        path: path.to_path_buf(),
        source,
    })
}
