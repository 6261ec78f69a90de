//! Cross-platform clipboard access.
//!
//! On Linux the external tools `wl-copy`, `xclip` and `xsel` are tried in
//! that order before falling back to `arboard`, because content copied by
//! an external tool survives the application exiting. macOS and Windows go
//! straight to `arboard`.
//!
//! An in-memory backend records the last copied text instead of touching
//! the system clipboard; tests and `--ephemeral` sessions use it.

use std::sync::{Arc, Mutex};
use thiserror::Error;

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    /// No clipboard backend could be reached.
    #[error("Clipboard not available")]
    NotAvailable,
    /// The backend was reached but refused the text.
    #[error("Failed to copy: {0}")]
    CopyFailed(String),
}

pub type ClipboardResult<T> = Result<T, ClipboardError>;

// ============================================================================
// Clipboard Manager
// ============================================================================

#[derive(Debug, Clone)]
enum Backend {
    System { prefer_external_tools: bool },
    Memory(Arc<Mutex<Option<String>>>),
}

/// Clipboard handle owned by the app.
#[derive(Debug, Clone)]
pub struct ClipboardManager {
    backend: Backend,
}

impl Default for ClipboardManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardManager {
    /// System clipboard, preferring external tools on Linux.
    #[must_use]
    pub fn new() -> Self {
        Self {
            backend: Backend::System {
                prefer_external_tools: true,
            },
        }
    }

    /// System clipboard through `arboard` only.
    #[must_use]
    pub fn arboard_only() -> Self {
        Self {
            backend: Backend::System {
                prefer_external_tools: false,
            },
        }
    }

    /// Clipboard that only remembers the last copied text.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(Arc::new(Mutex::new(None))),
        }
    }

    /// Text most recently copied through an in-memory clipboard.
    ///
    /// Always `None` for the system clipboard.
    #[must_use]
    pub fn last_copied(&self) -> Option<String> {
        match &self.backend {
            Backend::Memory(slot) => slot.lock().ok().and_then(|s| s.clone()),
            Backend::System { .. } => None,
        }
    }

    /// Copies text to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard is not available or the copy fails.
    pub fn copy_text(&self, text: &str) -> ClipboardResult<()> {
        match &self.backend {
            Backend::Memory(slot) => {
                let mut slot = slot
                    .lock()
                    .map_err(|e| ClipboardError::CopyFailed(e.to_string()))?;
                *slot = Some(text.to_string());
                Ok(())
            }
            Backend::System {
                prefer_external_tools,
            } => {
                #[cfg(target_os = "linux")]
                if *prefer_external_tools && Self::copy_with_external_tool(text).is_ok() {
                    return Ok(());
                }
                #[cfg(not(target_os = "linux"))]
                let _ = prefer_external_tools;

                Self::copy_with_arboard(text)
            }
        }
    }

    fn copy_with_arboard(text: &str) -> ClipboardResult<()> {
        let mut clipboard = arboard::Clipboard::new().map_err(|_| ClipboardError::NotAvailable)?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    }

    #[cfg(target_os = "linux")]
    fn copy_with_external_tool(text: &str) -> ClipboardResult<()> {
        const TOOLS: [(&str, &[&str]); 3] = [
            ("wl-copy", &[]),
            ("xclip", &["-selection", "clipboard"]),
            ("xsel", &["--clipboard", "--input"]),
        ];

        if TOOLS
            .iter()
            .any(|(tool, args)| Self::try_tool(tool, args, text))
        {
            Ok(())
        } else {
            Err(ClipboardError::NotAvailable)
        }
    }

    #[cfg(target_os = "linux")]
    fn try_tool(tool: &str, args: &[&str], text: &str) -> bool {
        use std::io::Write;
        use std::process::{Command, Stdio};

        let Ok(mut child) = Command::new(tool)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        else {
            return false;
        };

        let Some(mut stdin) = child.stdin.take() else {
            return false;
        };
        if stdin.write_all(text.as_bytes()).is_err() {
            return false;
        }
        drop(stdin);

        child.wait().map(|s| s.success()).unwrap_or(false)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_clipboard_records_last_copy() {
        let clipboard = ClipboardManager::in_memory();
        assert_eq!(clipboard.last_copied(), None);

        clipboard.copy_text("LOUPE-ABCDEFGH").unwrap();
        clipboard.copy_text("+79991234567").unwrap();
        assert_eq!(clipboard.last_copied().as_deref(), Some("+79991234567"));

        let shared = clipboard.clone();
        shared.copy_text("x").unwrap();
        assert_eq!(clipboard.last_copied().as_deref(), Some("x"));
    }

    #[test]
    fn test_system_clipboard_has_no_memory() {
        assert_eq!(ClipboardManager::arboard_only().last_copied(), None);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ClipboardError::NotAvailable.to_string(),
            "Clipboard not available"
        );
        assert_eq!(
            ClipboardError::CopyFailed("busy".to_string()).to_string(),
            "Failed to copy: busy"
        );
    }
}
