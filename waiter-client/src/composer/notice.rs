//! Transient success notice

use std::time::Duration;

use tokio::time::Instant;

/// How long the notice stays visible
pub const SUCCESS_NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Notice text
pub const SUCCESS_NOTICE_TEXT: &str = "Order submitted successfully!";

/// Notice that clears itself [`SUCCESS_NOTICE_DURATION`] after being shown
#[derive(Debug, Clone, Copy, Default)]
pub struct SuccessNotice {
    shown_at: Option<Instant>,
}

impl SuccessNotice {
    pub fn show(&mut self) {
        self.shown_at = Some(Instant::now());
    }

    pub fn is_visible(&self) -> bool {
        self.shown_at
            .is_some_and(|at| at.elapsed() < SUCCESS_NOTICE_DURATION)
    }

    /// Notice text while visible
    pub fn text(&self) -> Option<&'static str> {
        self.is_visible().then_some(SUCCESS_NOTICE_TEXT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_notice_expires() {
        let mut notice = SuccessNotice::default();
        assert!(!notice.is_visible());

        notice.show();
        assert_eq!(notice.text(), Some(SUCCESS_NOTICE_TEXT));

        tokio::time::advance(Duration::from_millis(2999)).await;
        assert!(notice.is_visible());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(!notice.is_visible());
        assert!(notice.text().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_notice_show_again_restarts_timer() {
        let mut notice = SuccessNotice::default();
        notice.show();
        tokio::time::advance(Duration::from_secs(2)).await;
        notice.show();
        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(notice.is_visible());
    }
}
