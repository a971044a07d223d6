//! HTML rendering of toasts.

use askama::Template;

use super::controller::Toast;
use super::style::{Corner, Phase, container_classes, kind_style};

/// A single toast as it should be drawn right now.
///
/// Renders `templates/toast.html`. The message is HTML-escaped.
#[derive(Debug, Clone, PartialEq, Eq, Template)]
#[template(path = "toast.html")]
pub struct ToastView {
    pub message: String,
    pub classes: String,
    pub kind: &'static str,
    pub phase: &'static str,
    pub icon_name: &'static str,
    pub icon_path: &'static str,
}

fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::Entering => "entering",
        Phase::Visible => "visible",
        Phase::Exiting => "exiting",
        Phase::Removed => "removed",
    }
}

impl ToastView {
    pub fn new(toast: &Toast, phase: Phase, corner: Corner) -> Self {
        let style = kind_style(toast.kind);

        Self {
            message: toast.message.clone(),
            classes: container_classes(toast.kind, phase, corner),
            kind: toast.kind.as_str(),
            phase: phase_name(phase),
            icon_name: style.icon.name(),
            icon_path: style.icon.svg_path(),
        }
    }

    /// Renders the toast markup.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn html(&self) -> askama::Result<String> {
        self.render()
    }
}

/// All toasts anchored to one corner, in display order.
///
/// Renders `templates/toast_stack.html`.
#[derive(Debug, Template)]
#[template(path = "toast_stack.html")]
pub struct ToastStackView {
    pub corner: &'static str,
    pub position: &'static str,
    pub items: Vec<String>,
}

impl ToastStackView {
    /// Renders each toast and wraps them in a corner-anchored container.
    ///
    /// # Errors
    ///
    /// Returns an error if any template fails to render.
    pub fn new(corner: Corner, toasts: &[ToastView]) -> askama::Result<Self> {
        let items = toasts
            .iter()
            .map(ToastView::html)
            .collect::<askama::Result<Vec<_>>>()?;

        Ok(Self {
            corner: corner.as_str(),
            position: corner.position_classes(),
            items,
        })
    }

    pub fn html(&self) -> askama::Result<String> {
        self.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::toast::style::ToastKind;

    #[test]
    fn test_view_reflects_phase_and_kind() {
        let toast = Toast::new("Saved", ToastKind::Success);

        let view = ToastView::new(&toast, Phase::Visible, Corner::TopLeft);

        assert_eq!(view.kind, "success");
        assert_eq!(view.phase, "visible");
        assert_eq!(view.icon_name, "check-circle");
        assert!(view.classes.contains("translate-x-0 opacity-100"));
        assert!(view.classes.contains("bg-green-100"));
    }

    #[test]
    fn test_html_has_alert_role_and_message() {
        let toast = Toast::new("Profile updated", ToastKind::Info);

        let html = ToastView::new(&toast, Phase::Entering, Corner::TopRight)
            .html()
            .unwrap();

        assert!(html.contains(r#"role="alert""#));
        assert!(html.contains("Profile updated"));
        assert!(html.contains(r#"aria-label="Close""#));
        assert!(html.contains("translate-x-full opacity-0"));
    }

    #[test]
    fn test_html_escapes_message() {
        let toast = Toast::new("<script>alert(1)</script>", ToastKind::Error);

        let html = ToastView::new(&toast, Phase::Visible, Corner::TopRight)
            .html()
            .unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_stack_renders_all_items_in_order() {
        let views = vec![
            ToastView::new(&Toast::new("first", ToastKind::Info), Phase::Visible, Corner::BottomLeft),
            ToastView::new(&Toast::new("second", ToastKind::Warning), Phase::Entering, Corner::BottomLeft),
        ];

        let html = ToastStackView::new(Corner::BottomLeft, &views)
            .unwrap()
            .html()
            .unwrap();

        assert!(html.contains("fixed bottom-4 left-4"));
        let first = html.find("first").unwrap();
        let second = html.find("second").unwrap();
        assert!(first < second);
    }
}
