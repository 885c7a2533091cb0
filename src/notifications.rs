//! Toast notifications - the operator-visible channel for save/load results.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

/// Fraction of a toast's lifetime spent fading out
const FADE_FRACTION: f32 = 0.2;

/// Maximum toasts kept at once; the oldest is dropped first
const MAX_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastVariant {
    pub fn default_duration(self) -> Duration {
        match self {
            Self::Success | Self::Info => Duration::from_secs(3),
            Self::Warning => Duration::from_secs(4),
            Self::Error => Duration::from_secs(5),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Info => "ℹ",
            Self::Warning => "⚠",
            Self::Error => "✗",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub variant: ToastVariant,
    pub duration: Duration,
    pub created_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            id: NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed),
            message: message.into(),
            variant,
            duration: variant.default_duration(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Error)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Remaining lifetime in `0.0..=1.0`.
    pub fn remaining_percent(&self) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let elapsed = self.created_at.elapsed().as_secs_f32();
        (1.0 - elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Full opacity until the final fade.
    pub fn opacity(&self) -> f32 {
        (self.remaining_percent() / FADE_FRACTION).min(1.0)
    }

    /// Text shown by the overlay.
    pub fn display_text(&self) -> String {
        format!("{} {}", self.variant.icon(), self.message)
    }
}

#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        if self.toasts.len() >= MAX_TOASTS {
            self.toasts.remove(0);
        }
        self.toasts.push(toast);
    }

    /// Drop expired toasts. Returns true if any were removed.
    pub fn prune_expired(&mut self) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired());
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Toasts still on screen, oldest first.
    pub fn active(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().filter(|t| !t.is_expired())
    }

    pub fn count(&self) -> usize {
        self.toasts.len()
    }
}
