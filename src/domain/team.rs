//! Team roster, chat and shared notes.
//!
//! [`TeamState`] owns the mutable collections and enforces the editing
//! rules: text is trimmed and must not be empty, only our own messages and
//! notes are editable, and the owner can never be removed.

use data_encoding::BASE32_NOPAD;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::LoupeError;

/// Prefix of every invite code.
pub const INVITE_PREFIX: &str = "LOUPE-";

/// Number of base32 characters after the prefix.
const INVITE_CODE_LEN: usize = 8;

// ============================================================================
// Roster
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Owner,
    Member,
}

impl MemberRole {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Member => "Member",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Online,
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub username: String,
    pub role: MemberRole,
    pub presence: Presence,
    pub deals_count: u32,
}

impl TeamMember {
    #[must_use]
    pub fn is_owner(&self) -> bool {
        self.role == MemberRole::Owner
    }
}

// ============================================================================
// Chat and Notes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: String,
    pub text: String,
    /// `HH:MM`.
    pub timestamp: String,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub from_me: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamNote {
    pub id: u64,
    pub author: String,
    pub text: String,
    /// `DD.MM.YYYY`.
    pub date: String,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub from_me: bool,
}

/// Trims `text` and rejects it when nothing is left.
fn require_text(text: &str, what: &str) -> Result<String, LoupeError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(LoupeError::invalid_input(format!("{what} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

// ============================================================================
// Team State
// ============================================================================

/// Mutable team data shown on the Team page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamState {
    pub name: String,
    pub members: Vec<TeamMember>,
    pub messages: Vec<ChatMessage>,
    pub notes: Vec<TeamNote>,
}

impl TeamState {
    fn next_message_id(&self) -> u64 {
        self.messages.iter().map(|m| m.id).max().unwrap_or(0) + 1
    }

    fn next_note_id(&self) -> u64 {
        self.notes.iter().map(|n| n.id).max().unwrap_or(0) + 1
    }

    fn own_message_mut(&mut self, id: u64) -> Result<&mut ChatMessage, LoupeError> {
        let message = self
            .messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| LoupeError::not_found("message", id.to_string()))?;
        if !message.from_me {
            return Err(LoupeError::forbidden("only your own messages can be changed"));
        }
        Ok(message)
    }

    fn own_note_mut(&mut self, id: u64) -> Result<&mut TeamNote, LoupeError> {
        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| LoupeError::not_found("note", id.to_string()))?;
        if !note.from_me {
            return Err(LoupeError::forbidden("only your own notes can be changed"));
        }
        Ok(note)
    }

    /// Appends a chat message from `sender`.
    ///
    /// # Errors
    ///
    /// Returns `LoupeError::InvalidInput` when `text` is blank.
    pub fn send_message(
        &mut self,
        sender: &str,
        text: &str,
        timestamp: impl Into<String>,
    ) -> Result<u64, LoupeError> {
        let text = require_text(text, "Message")?;
        let id = self.next_message_id();
        self.messages.push(ChatMessage {
            id,
            sender: sender.to_string(),
            text,
            timestamp: timestamp.into(),
            pinned: false,
            from_me: true,
        });
        Ok(id)
    }

    /// Replaces the text of one of our own messages.
    ///
    /// # Errors
    ///
    /// Fails when the message is missing, not ours, or `text` is blank.
    pub fn edit_message(&mut self, id: u64, text: &str) -> Result<(), LoupeError> {
        let text = require_text(text, "Message")?;
        self.own_message_mut(id)?.text = text;
        Ok(())
    }

    /// Unpins one of our own messages.
    ///
    /// # Errors
    ///
    /// Fails when the message is missing or not ours.
    pub fn unpin_message(&mut self, id: u64) -> Result<(), LoupeError> {
        self.own_message_mut(id)?.pinned = false;
        Ok(())
    }

    /// Deletes one of our own messages.
    ///
    /// # Errors
    ///
    /// Fails when the message is missing or not ours.
    pub fn delete_message(&mut self, id: u64) -> Result<(), LoupeError> {
        self.own_message_mut(id)?;
        self.messages.retain(|m| m.id != id);
        Ok(())
    }

    /// Adds a note at the top of the list.
    ///
    /// # Errors
    ///
    /// Returns `LoupeError::InvalidInput` when `text` is blank.
    pub fn add_note(
        &mut self,
        author: &str,
        text: &str,
        date: impl Into<String>,
    ) -> Result<u64, LoupeError> {
        let text = require_text(text, "Note")?;
        let id = self.next_note_id();
        self.notes.insert(
            0,
            TeamNote {
                id,
                author: author.to_string(),
                text,
                date: date.into(),
                pinned: false,
                from_me: true,
            },
        );
        Ok(id)
    }

    /// Replaces the text of one of our own notes.
    ///
    /// # Errors
    ///
    /// Fails when the note is missing, not ours, or `text` is blank.
    pub fn edit_note(&mut self, id: u64, text: &str) -> Result<(), LoupeError> {
        let text = require_text(text, "Note")?;
        self.own_note_mut(id)?.text = text;
        Ok(())
    }

    /// Deletes one of our own notes.
    ///
    /// # Errors
    ///
    /// Fails when the note is missing or not ours.
    pub fn delete_note(&mut self, id: u64) -> Result<(), LoupeError> {
        self.own_note_mut(id)?;
        self.notes.retain(|n| n.id != id);
        Ok(())
    }

    /// Removes a member from the roster.
    ///
    /// # Errors
    ///
    /// Fails when the member is missing or is the team owner.
    pub fn remove_member(&mut self, id: &str) -> Result<TeamMember, LoupeError> {
        let index = self
            .members
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| LoupeError::not_found("member", id))?;
        if self.members[index].is_owner() {
            return Err(LoupeError::forbidden("the team owner cannot be removed"));
        }
        Ok(self.members.remove(index))
    }

    /// Checks that another member fits under the plan's limit.
    ///
    /// # Arguments
    ///
    /// * `max_members` - Member limit of the active plan, `None` for unlimited
    ///
    /// # Errors
    ///
    /// Returns `LoupeError::TeamFull` when the roster is already at the limit.
    pub fn ensure_can_invite(&self, max_members: Option<usize>) -> Result<(), LoupeError> {
        match max_members {
            Some(limit) if self.members.len() >= limit => Err(LoupeError::TeamFull { limit }),
            _ => Ok(()),
        }
    }
}

// ============================================================================
// Invite Codes
// ============================================================================

/// Derives an invite code from the team name and a creation timestamp.
///
/// The code is `LOUPE-` followed by the first eight base32 characters of
/// the SHA-256 digest of `"{team_name}:{timestamp}"`.
#[must_use]
pub fn invite_code(team_name: &str, timestamp: i64) -> String {
    let digest = Sha256::digest(format!("{team_name}:{timestamp}").as_bytes());
    let encoded = BASE32_NOPAD.encode(&digest);
    format!("{INVITE_PREFIX}{}", &encoded[..INVITE_CODE_LEN])
}

// ============================================================================
// Tests
// ============================================================================
