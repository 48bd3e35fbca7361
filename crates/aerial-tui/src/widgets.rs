//! Small, reusable UI helpers used by multiple screens.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Warning,
    Success,
    Info,
}

impl ToastKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Error => "❌",
            ToastKind::Warning => "⚠️",
            ToastKind::Success => "✅",
            ToastKind::Info => "ℹ️",
        }
    }
}

/// A transient message that disappears on its own.
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub lines: Vec<String>,
    pub expires_at: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ToastKind, lines: Vec<String>, now: Instant, ttl: Duration) {
        // A new error list replaces the previous one.
        if kind == ToastKind::Error {
            self.toasts.retain(|t| t.kind != ToastKind::Error);
        }
        self.toasts.push(Toast {
            kind,
            lines,
            expires_at: now + ttl,
        });
    }

    /// Drop everything that has expired by `now`.
    pub fn expire(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn has(&self, kind: ToastKind) -> bool {
        self.toasts.iter().any(|t| t.kind == kind)
    }

    /// All lines, each prefixed with its toast's icon.
    pub fn render_lines(&self) -> Vec<String> {
        self.toasts
            .iter()
            .flat_map(|t| t.lines.iter().map(move |l| format!("{} {}", t.kind.icon(), l)))
            .collect()
    }
}

/// Clamp a percentage into a gauge value.
pub fn gauge_percent(percent: f64) -> u16 {
    percent.round().clamp(0.0, 100.0) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire() {
        let now = Instant::now();
        let mut queue = ToastQueue::new();
        queue.push(
            ToastKind::Success,
            vec!["saved".to_string()],
            now,
            Duration::from_secs(3),
        );
        queue.expire(now + Duration::from_secs(2));
        assert!(queue.has(ToastKind::Success));
        queue.expire(now + Duration::from_secs(3));
        assert!(queue.is_empty());
    }

    #[test]
    fn new_errors_replace_old_errors() {
        let now = Instant::now();
        let mut queue = ToastQueue::new();
        let ttl = Duration::from_secs(5);
        queue.push(ToastKind::Error, vec!["first".to_string()], now, ttl);
        queue.push(ToastKind::Info, vec!["note".to_string()], now, ttl);
        queue.push(ToastKind::Error, vec!["second".to_string()], now, ttl);
        assert_eq!(
            queue.render_lines(),
            vec!["ℹ️ note".to_string(), "❌ second".to_string()]
        );
    }

    #[test]
    fn gauge_is_clamped() {
        assert_eq!(gauge_percent(20.0), 20);
        assert_eq!(gauge_percent(140.0), 100);
        assert_eq!(gauge_percent(-3.0), 0);
    }
}
