//! Centralized icon API.
//!
//! Icons are inline stroke SVGs drawn on a 24x24 grid so they inherit `currentColor` from the
//! surrounding control.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Semantic icon names available to primitives and apps.
pub enum IconName {
    /// Completed-step check mark.
    Check,
    /// Right-pointing chevron.
    ChevronRight,
    /// Down-pointing chevron.
    ChevronDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Minus sign.
    Minus,
    /// Plus sign.
    Plus,
    /// Close/dismiss cross.
    Dismiss,
    /// Warning triangle.
    Warning,
}

impl IconName {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Check => "check",
            Self::ChevronRight => "chevron-right",
            Self::ChevronDown => "chevron-down",
            Self::ArrowLeft => "arrow-left",
            Self::ArrowRight => "arrow-right",
            Self::Minus => "minus",
            Self::Plus => "plus",
            Self::Dismiss => "dismiss",
            Self::Warning => "warning",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Self::Check => "M5 12l5 5L20 7",
            Self::ChevronRight => "M9 6l6 6-6 6",
            Self::ChevronDown => "M6 9l6 6 6-6",
            Self::ArrowLeft => "M19 12H5M11 6l-6 6 6 6",
            Self::ArrowRight => "M5 12h14M13 6l6 6-6 6",
            Self::Minus => "M5 12h14",
            Self::Plus => "M12 5v14M5 12h14",
            Self::Dismiss => "M6 6l12 12M18 6L6 18",
            Self::Warning => "M12 9v4M12 17h.01M10.3 3.9L1.8 18a2 2 0 0 0 1.7 3h17a2 2 0 0 0 1.7-3L13.7 3.9a2 2 0 0 0-3.4 0z",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon sizing tokens.
pub enum IconSize {
    /// 16px.
    Sm,
    /// 20px.
    Md,
    /// 24px.
    Lg,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn pixels(self) -> u16 {
        match self {
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }
}

#[component]
/// Decorative inline SVG icon.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Md)] size: IconSize) -> impl IntoView {
    let pixels = size.pixels();
    view! {
        <svg
            class="ui-icon"
            width=pixels
            height=pixels
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            focusable="false"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            <path d=icon.path()></path>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_sizes_scale_up() {
        assert!(IconSize::Sm.pixels() < IconSize::Md.pixels());
        assert!(IconSize::Md.pixels() < IconSize::Lg.pixels());
        assert_eq!(IconSize::default().token(), "md");
    }

    #[test]
    fn every_icon_has_a_path() {
        for icon in [
            IconName::Check,
            IconName::ChevronRight,
            IconName::ChevronDown,
            IconName::ArrowLeft,
            IconName::ArrowRight,
            IconName::Minus,
            IconName::Plus,
            IconName::Dismiss,
            IconName::Warning,
        ] {
            assert!(icon.path().starts_with('M'), "{}", icon.token());
        }
    }
}
