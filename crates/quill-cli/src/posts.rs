use std::path::{Path, PathBuf};

use quill_core::{Document, QuillError, QuillResult};

/// Load post documents from JSON files. Directories are expanded to their
/// `.json` entries, sorted by name so runs are deterministic.
pub fn load_documents(paths: &[PathBuf]) -> QuillResult<Vec<Document>> {
    let mut files: Vec<PathBuf> = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut entries: Vec<PathBuf> = std::fs::read_dir(path)?
                .filter_map(|e| e.ok().map(|e| e.path()))
                .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
                .collect();
            entries.sort();
            files.extend(entries);
        } else {
            files.push(path.clone());
        }
    }

    if files.is_empty() {
        return Err(QuillError::Document(
            "no post files found in the given paths".to_string(),
        ));
    }

    files.iter().map(|f| load_document(f)).collect()
}

fn load_document(path: &Path) -> QuillResult<Document> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        QuillError::Document(format!("failed to parse {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_list_is_an_error() {
        let err = load_documents(&[]).unwrap_err();
        assert!(matches!(err, QuillError::Document(_)));
    }
}
