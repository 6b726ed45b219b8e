//! JSON file storage for a conversation's memory sequence.

use std::path::Path;
use tracing::debug;

use skillgate_core::Result;
use skillgate_memory::{MemoryEntry, memory_to_json, parse_memory};

/// Read the memory sequence at `path`. A missing file is an empty conversation.
pub fn load(path: Option<&Path>) -> Result<Vec<MemoryEntry>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    if !path.exists() {
        debug!(?path, "memory file not found, starting empty");
        return Ok(Vec::new());
    }
    let raw = std::fs::read_to_string(path)?;
    parse_memory(&raw)
}

/// Replace the file contents with `memory`, creating parent directories.
pub fn save(path: &Path, memory: &[MemoryEntry]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, memory_to_json(memory)?)?;
    debug!(?path, entries = memory.len(), "memory file written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillgate_core::Skill;
    use skillgate_memory::append_entry;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(Some(&dir.path().join("none.json"))).unwrap().is_empty());
        assert!(load(None).unwrap().is_empty());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("memory.json");
        let memory = append_entry(&[], &Skill::Dsa, true, "q", Some("a"), None);
        save(&path, &memory).unwrap();
        assert_eq!(load(Some(&path)).unwrap(), memory);
    }
}
