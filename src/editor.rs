use anyhow::Result;
use log::warn;
use std::env;
use std::fs;
use std::io::Write;
use std::process::Command;
use tempfile::Builder;

/// Result of a completed external editor session.
///
/// `failed` covers spawn failure, non-zero exit, and read-back failure; the
/// caller skips the note update in that case. `content` is empty when the
/// read failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorOutcome {
    pub note_id: i64,
    pub content: String,
    pub failed: bool,
}

/// Resolve the editor program from $EDITOR with a fixed fallback
fn resolve_editor() -> String {
    env::var("EDITOR").unwrap_or_else(|_| {
        if cfg!(windows) {
            "notepad".to_string()
        } else {
            "vi".to_string()
        }
    })
}

/// Run the user's editor against a temp file seeded with `seed` and capture
/// the final content.
///
/// Blocks until the editor exits; the caller must have suspended raw mode and
/// the alternate screen first. The temp file is removed on every exit path by
/// the `TempPath` guard.
pub fn edit_note(note_id: i64, seed: &str) -> EditorOutcome {
    edit_note_with(&resolve_editor(), note_id, seed)
}

fn edit_note_with(editor: &str, note_id: i64, seed: &str) -> EditorOutcome {
    match run_editor_session(editor, seed) {
        Ok(content) => EditorOutcome {
            note_id,
            content,
            failed: false,
        },
        Err(err) => {
            warn!("editor session for note {} failed: {}", note_id, err);
            EditorOutcome {
                note_id,
                content: String::new(),
                failed: true,
            }
        }
    }
}

fn run_editor_session(editor: &str, seed: &str) -> Result<String> {
    let mut temp_file = Builder::new().prefix("mynote-").suffix(".md").tempfile()?;
    temp_file.write_all(seed.as_bytes())?;
    let temp_path = temp_file.into_temp_path();

    let status = Command::new(editor).arg(&temp_path).status()?;
    if !status.success() {
        anyhow::bail!("editor exited with status {}", status);
    }

    Ok(fs::read_to_string(&temp_path)?)
}
