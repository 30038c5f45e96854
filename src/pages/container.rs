//! Page container - shared card chrome and route-keyed transitions

/// Maximum content width preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxWidth {
    Sm,
    Md,
    Lg,
}

impl MaxWidth {
    fn class(self) -> &'static str {
        match self {
            MaxWidth::Sm => "max-sm",
            MaxWidth::Md => "max-md",
            MaxWidth::Lg => "max-lg",
        }
    }
}

/// Frames page content and tags it with its transition key
pub struct PageContainer<'a> {
    key: &'a str,
    max_width: MaxWidth,
}

impl<'a> PageContainer<'a> {
    /// `key` is the current path, so two pages of the same kind still differ
    pub fn new(key: &'a str, max_width: MaxWidth) -> Self {
        Self { key, max_width }
    }

    /// Wrap `body` in the container chrome
    pub fn render(&self, body: &str) -> String {
        format!(
            r#"<main class="page-container {}"><div class="page" data-transition-key="{}"><div class="card"><div class="scroll"><div class="stagger">{}</div></div></div></div></main>"#,
            self.max_width.class(),
            crate::helpers::html_escape(self.key),
            body
        )
    }
}

/// What the container does when the active route changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Same key: nothing re-triggers
    Stay,
    /// First page shown
    Enter { key: String },
    /// The old page exits completely, then the new one enters
    Replace { exit: String, enter: String },
}

impl Transition {
    /// Transition from the previously shown key to `next`
    pub fn between(previous: Option<&str>, next: &str) -> Self {
        match previous {
            None => Transition::Enter {
                key: next.to_string(),
            },
            Some(prev) if prev == next => Transition::Stay,
            Some(prev) => Transition::Replace {
                exit: prev.to_string(),
                enter: next.to_string(),
            },
        }
    }
}

/// Browser side of the transition: play the exit animation before leaving
///
/// The enter animation runs from CSS on load. Internal link clicks add the
/// `exiting` class and only navigate once the exit duration has elapsed.
pub const TRANSITION_SCRIPT: &str = r#"<script>
(function() {
    var page = document.querySelector('.page');
    if (!page) return;
    var exitMs = parseFloat(getComputedStyle(document.documentElement).getPropertyValue('--exit-ms')) || 0;
    document.addEventListener('click', function(e) {
        var link = e.target.closest('a');
        if (!link || link.target || e.defaultPrevented || e.button !== 0 || e.metaKey || e.ctrlKey || e.shiftKey) return;
        var url = new URL(link.href, location.href);
        if (url.origin !== location.origin || url.pathname === location.pathname) return;
        e.preventDefault();
        page.classList.add('exiting');
        setTimeout(function() { location.href = url.href; }, exitMs);
    });
    window.addEventListener('pageshow', function(e) {
        if (e.persisted) page.classList.remove('exiting');
    });
})();
</script>"#;
