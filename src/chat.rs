//! Chat membership helpers.

use teloxide::types::{ChatMemberKind, ChatMemberUpdated};

/// Simplified member status, named after the Bot API `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberStatus {
    Creator,
    Administrator,
    Member,
    Restricted,
    Left,
    Kicked,
}

impl From<&ChatMemberKind> for MemberStatus {
    fn from(kind: &ChatMemberKind) -> Self {
        if kind.is_owner() {
            Self::Creator
        } else if kind.is_administrator() {
            Self::Administrator
        } else if kind.is_member() {
            Self::Member
        } else if kind.is_restricted() {
            Self::Restricted
        } else if kind.is_left() {
            Self::Left
        } else {
            Self::Kicked
        }
    }
}

impl MemberStatus {
    fn is_gone(self) -> bool {
        matches!(self, Self::Left | Self::Kicked)
    }
}

/// Whether a private chat user blocked or unblocked the bot.
///
/// Built from a `my_chat_member` update: blocking (or stopping) the bot moves
/// it from `member` to `kicked`/`left`, unblocking moves it back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockStatus {
    pub is_blocked: bool,
    pub has_unblocked: bool,
}

impl BlockStatus {
    /// Status for a transition between two member states.
    pub fn from_transition(old: MemberStatus, new: MemberStatus) -> Self {
        Self {
            is_blocked: old == MemberStatus::Member && new.is_gone(),
            has_unblocked: old.is_gone() && new == MemberStatus::Member,
        }
    }

    /// Status for a `my_chat_member` update; both false without one.
    pub fn from_update(update: Option<&ChatMemberUpdated>) -> Self {
        match update {
            Some(update) => Self::from_transition(
                MemberStatus::from(&update.old_chat_member.kind),
                MemberStatus::from(&update.new_chat_member.kind),
            ),
            None => Self::default(),
        }
    }
}
