use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::error::ChartResult;

use super::{Locale, MessageKey};

/// Localized stand-in shown after a render failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackView {
    pub message: &'static str,
    pub retry_label: &'static str,
    pub details_label: &'static str,
    /// Technical detail, revealed only when the reader expands it.
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryView<T> {
    Content(T),
    Fallback(FallbackView),
}

impl<T> BoundaryView<T> {
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    #[must_use]
    pub fn content(self) -> Option<T> {
        match self {
            Self::Content(content) => Some(content),
            Self::Fallback(_) => None,
        }
    }
}

/// Isolates one section of a page: an error or panic inside it turns into a
/// fallback instead of taking the rest of the page down.
///
/// Failure is sticky until [`ErrorBoundary::retry`] is called.
#[derive(Debug, Clone, Default)]
pub struct ErrorBoundary {
    locale: Locale,
    failure: Option<String>,
}

impl ErrorBoundary {
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            failure: None,
        }
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub fn has_failed(&self) -> bool {
        self.failure.is_some()
    }

    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Runs `children` unless the boundary already holds a failure.
    pub fn render<T, F>(&mut self, children: F) -> BoundaryView<T>
    where
        F: FnOnce() -> ChartResult<T>,
    {
        if self.failure.is_none() {
            match panic::catch_unwind(AssertUnwindSafe(children)) {
                Ok(Ok(content)) => return BoundaryView::Content(content),
                Ok(Err(err)) => {
                    warn!(error = %err, "section render failed");
                    self.failure = Some(err.to_string());
                }
                Err(payload) => {
                    let detail = panic_detail(payload.as_ref());
                    warn!(detail = %detail, "section render panicked");
                    self.failure = Some(detail);
                }
            }
        }
        BoundaryView::Fallback(self.fallback())
    }

    /// Clears the failure; the next `render` tries the children again.
    pub fn retry(&mut self) {
        if self.failure.take().is_some() {
            debug!("error boundary reset");
        }
    }

    fn fallback(&self) -> FallbackView {
        FallbackView {
            message: self.locale.text(MessageKey::RenderFailed),
            retry_label: self.locale.text(MessageKey::TryAgain),
            details_label: self.locale.text(MessageKey::ShowDetails),
            detail: self.failure.clone().unwrap_or_default(),
        }
    }
}

fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic with non-string payload".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::{BoundaryView, ErrorBoundary};
    use crate::api::Locale;
    use crate::error::ChartError;

    #[test]
    fn sticky_failure_skips_children_until_retry() {
        let mut boundary = ErrorBoundary::new(Locale::En);
        let view: BoundaryView<()> =
            boundary.render(|| Err(ChartError::Render("boom".to_owned())));
        assert!(view.is_fallback());

        let mut called = false;
        let view = boundary.render(|| {
            called = true;
            Ok(1)
        });
        assert!(view.is_fallback());
        assert!(!called);

        boundary.retry();
        assert_eq!(boundary.render(|| Ok(1)).content(), Some(1));
    }

    #[test]
    fn panic_payload_becomes_detail() {
        let mut boundary = ErrorBoundary::new(Locale::Pt);
        let view: BoundaryView<()> = boundary.render(|| panic!("layout exploded"));
        match view {
            BoundaryView::Fallback(fallback) => {
                assert_eq!(fallback.retry_label, "Tentar novamente");
                assert_eq!(fallback.detail, "layout exploded");
            }
            BoundaryView::Content(()) => panic!("expected fallback"),
        }
    }
}
