use crate::utils::time::now_millis;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

pub const DEFAULT_TTL_MS: u64 = 3000;

/// How long before removal a notice starts fading.
const FADE_LEAD_MS: u64 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Default,
    Success,
    Error,
}

/// One transient notice with its display deadlines, epoch milliseconds.
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub kind: ToastKind,
    pub fade_at: i64,
    pub expires_at: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    Fading,
}

/// Sink for transient user-facing notices.
///
/// Deadlines are computed when a notice is raised and evaluated lazily:
/// the host polls `active` to render and calls `sweep` to prune, which
/// reaches the same endpoint as two one-shot removal timers. Notices are
/// never deduplicated and the queue is unbounded.
pub struct Notifier {
    notices: DashMap<u64, Notice>,
    next_id: AtomicU64,
    attached: bool,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            notices: DashMap::new(),
            next_id: AtomicU64::new(0),
            attached: true,
        }
    }

    /// A notifier with no host surface; every call is a no-op.
    pub fn detached() -> Self {
        Self {
            notices: DashMap::new(),
            next_id: AtomicU64::new(0),
            attached: false,
        }
    }

    pub fn toast(&self, message: &str, kind: ToastKind, ttl_ms: u64) {
        if !self.attached {
            return;
        }
        let now = now_millis();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.notices.insert(
            id,
            Notice {
                message: message.to_string(),
                kind,
                fade_at: now + ttl_ms.saturating_sub(FADE_LEAD_MS) as i64,
                expires_at: now + ttl_ms as i64,
            },
        );
    }

    pub fn success(&self, message: &str) {
        self.toast(message, ToastKind::Success, DEFAULT_TTL_MS);
    }

    pub fn error(&self, message: &str) {
        self.toast(message, ToastKind::Error, DEFAULT_TTL_MS);
    }

    /// Notices still on screen at `now`, oldest first, each with its
    /// display phase.
    pub fn active(&self, now: i64) -> Vec<(Notice, ToastPhase)> {
        let mut entries: Vec<(u64, Notice)> = self
            .notices
            .iter()
            .filter(|entry| entry.value().expires_at > now)
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();
        entries.sort_by_key(|(id, _)| *id);

        entries
            .into_iter()
            .map(|(_, notice)| {
                let phase = if now >= notice.fade_at {
                    ToastPhase::Fading
                } else {
                    ToastPhase::Visible
                };
                (notice, phase)
            })
            .collect()
    }

    /// Drop notices whose removal deadline has passed.
    pub fn sweep(&self, now: i64) {
        self.notices.retain(|_, notice| notice.expires_at > now);
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
