//! Pure mappings from toast state to presentation.
//!
//! Two independent total functions decide how a toast looks:
//!
//! - [`kind_style`]: category → colour scheme and icon
//! - [`transform`]: (phase, corner) → resting or off-screen past an edge
//!
//! Neither depends on the other, and every input has an explicit arm.

use std::fmt;

/// Classes shared by every toast container.
pub const BASE_CLASSES: &str = "rounded-md p-4 mb-3 flex justify-between items-center shadow-md transform transition-all duration-300";

/// Notification category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    /// Parses a category name. Unrecognized names fall back to `Info`.
    pub fn parse(s: &str) -> Self {
        match s {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            "warning" => ToastKind::Warning,
            _ => ToastKind::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal screen edge a toast slides from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
}

/// Screen corner a toast stack is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Corner {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Parses a corner name such as `top-left`. Unrecognized names fall back
    /// to `TopRight`.
    pub fn parse(s: &str) -> Self {
        match s {
            "top-left" => Corner::TopLeft,
            "top-right" => Corner::TopRight,
            "bottom-left" => Corner::BottomLeft,
            "bottom-right" => Corner::BottomRight,
            _ => Corner::TopRight,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomLeft => "bottom-left",
            Corner::BottomRight => "bottom-right",
        }
    }

    /// The horizontal edge this corner sits on.
    pub fn edge(&self) -> Edge {
        match self {
            Corner::TopLeft | Corner::BottomLeft => Edge::Left,
            Corner::TopRight | Corner::BottomRight => Edge::Right,
        }
    }

    /// Fixed-position classes anchoring a stack container to this corner.
    pub fn position_classes(&self) -> &'static str {
        match self {
            Corner::TopLeft => "fixed top-4 left-4 z-50",
            Corner::TopRight => "fixed top-4 right-4 z-50",
            Corner::BottomLeft => "fixed bottom-4 left-4 z-50",
            Corner::BottomRight => "fixed bottom-4 right-4 z-50",
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle phase of a single toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Visible,
    Exiting,
    Removed,
}

/// Icon glyph shown next to the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    CheckCircle,
    XCircle,
    ExclamationTriangle,
    InformationCircle,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::CheckCircle => "check-circle",
            Icon::XCircle => "x-circle",
            Icon::ExclamationTriangle => "exclamation-triangle",
            Icon::InformationCircle => "information-circle",
        }
    }

    /// SVG path data on a 20x20 view box.
    pub fn svg_path(&self) -> &'static str {
        match self {
            Icon::CheckCircle => {
                "M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z"
            }
            Icon::XCircle => {
                "M10 18a8 8 0 100-16 8 8 0 000 16zM8.707 7.293a1 1 0 00-1.414 1.414L8.586 10l-1.293 1.293a1 1 0 101.414 1.414L10 11.414l1.293 1.293a1 1 0 001.414-1.414L11.414 10l1.293-1.293a1 1 0 00-1.414-1.414L10 8.586 8.707 7.293z"
            }
            Icon::ExclamationTriangle => {
                "M8.257 3.099c.765-1.36 2.722-1.36 3.486 0l5.58 9.92c.75 1.334-.213 2.98-1.742 2.98H4.42c-1.53 0-2.493-1.646-1.743-2.98l5.58-9.92zM11 13a1 1 0 11-2 0 1 1 0 012 0zm-1-8a1 1 0 00-1 1v3a1 1 0 002 0V6a1 1 0 00-1-1z"
            }
            Icon::InformationCircle => {
                "M18 10a8 8 0 11-16 0 8 8 0 0116 0zm-7-4a1 1 0 11-2 0 1 1 0 012 0zM9 9a1 1 0 000 2v3a1 1 0 001 1h1a1 1 0 100-2h-1v-3a1 1 0 00-1-1H9z"
            }
        }
    }
}

/// Colour scheme and icon for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindStyle {
    pub classes: &'static str,
    pub icon: Icon,
}

/// Maps a category to its colour scheme and icon.
pub fn kind_style(kind: ToastKind) -> KindStyle {
    match kind {
        ToastKind::Success => KindStyle {
            classes: "bg-green-100 border-l-4 border-green-500 text-green-700",
            icon: Icon::CheckCircle,
        },
        ToastKind::Error => KindStyle {
            classes: "bg-red-100 border-l-4 border-red-500 text-red-700",
            icon: Icon::XCircle,
        },
        ToastKind::Warning => KindStyle {
            classes: "bg-yellow-100 border-l-4 border-yellow-500 text-yellow-700",
            icon: Icon::ExclamationTriangle,
        },
        ToastKind::Info => KindStyle {
            classes: "bg-blue-100 border-l-4 border-blue-500 text-blue-700",
            icon: Icon::InformationCircle,
        },
    }
}

/// Animation state applied to the toast container.
///
/// A toast is either at rest and fully opaque, or pushed past one horizontal
/// edge and fully transparent. No other combination exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    AtRest,
    OffScreen(Edge),
}

impl Transform {
    pub fn is_visible(&self) -> bool {
        matches!(self, Transform::AtRest)
    }

    pub fn classes(&self) -> &'static str {
        match self {
            Transform::AtRest => "translate-x-0 opacity-100",
            Transform::OffScreen(Edge::Left) => "-translate-x-full opacity-0",
            Transform::OffScreen(Edge::Right) => "translate-x-full opacity-0",
        }
    }
}

/// Maps a phase and corner to the container's offset and opacity.
///
/// Off-screen phases slide toward the corner's own edge; only `Visible` is at
/// rest. The category never affects motion.
pub fn transform(phase: Phase, corner: Corner) -> Transform {
    match phase {
        Phase::Visible => Transform::AtRest,
        Phase::Entering | Phase::Exiting | Phase::Removed => Transform::OffScreen(corner.edge()),
    }
}

/// Full class list for a toast container.
pub fn container_classes(kind: ToastKind, phase: Phase, corner: Corner) -> String {
    format!(
        "{BASE_CLASSES} {} {}",
        transform(phase, corner).classes(),
        kind_style(kind).classes
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CORNERS: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    #[test]
    fn test_kind_parse_defaults_to_info() {
        assert_eq!(ToastKind::parse("success"), ToastKind::Success);
        assert_eq!(ToastKind::parse("error"), ToastKind::Error);
        assert_eq!(ToastKind::parse("warning"), ToastKind::Warning);
        assert_eq!(ToastKind::parse("info"), ToastKind::Info);
        assert_eq!(ToastKind::parse("fatal"), ToastKind::Info);
        assert_eq!(ToastKind::parse(""), ToastKind::Info);
    }

    #[test]
    fn test_corner_parse_defaults_to_top_right() {
        assert_eq!(Corner::parse("bottom-left"), Corner::BottomLeft);
        assert_eq!(Corner::parse("middle"), Corner::TopRight);
    }

    #[test]
    fn test_each_kind_has_distinct_icon_and_scheme() {
        let kinds = [
            ToastKind::Success,
            ToastKind::Error,
            ToastKind::Warning,
            ToastKind::Info,
        ];

        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(kind_style(*a).icon, kind_style(*b).icon);
                assert_ne!(kind_style(*a).classes, kind_style(*b).classes);
            }
        }
    }

    #[test]
    fn test_unknown_kind_styles_as_info() {
        assert_eq!(
            kind_style(ToastKind::parse("mystery")),
            kind_style(ToastKind::Info)
        );
    }

    #[test]
    fn test_top_left_entering_slides_from_left() {
        let t = transform(Phase::Entering, Corner::TopLeft);
        assert_eq!(t, Transform::OffScreen(Edge::Left));
        assert!(!t.is_visible());
        assert_eq!(t.classes(), "-translate-x-full opacity-0");
    }

    #[test]
    fn test_exiting_matches_entering() {
        for corner in ALL_CORNERS {
            assert_eq!(
                transform(Phase::Exiting, corner),
                transform(Phase::Entering, corner)
            );
            assert_eq!(
                transform(Phase::Removed, corner),
                transform(Phase::Exiting, corner)
            );
        }
    }

    #[test]
    fn test_right_corners_slide_right() {
        assert_eq!(
            transform(Phase::Entering, Corner::TopRight),
            Transform::OffScreen(Edge::Right)
        );
        assert_eq!(
            transform(Phase::Exiting, Corner::BottomRight),
            Transform::OffScreen(Edge::Right)
        );
        assert_eq!(
            transform(Phase::Exiting, Corner::BottomLeft),
            Transform::OffScreen(Edge::Left)
        );
        assert_eq!(
            transform(Phase::Exiting, Corner::BottomRight).classes(),
            "translate-x-full opacity-0"
        );
    }

    #[test]
    fn test_visible_is_at_rest_for_every_corner() {
        for corner in ALL_CORNERS {
            let t = transform(Phase::Visible, corner);
            assert_eq!(t, Transform::AtRest);
            assert!(t.is_visible());
            assert_eq!(t.classes(), "translate-x-0 opacity-100");
        }
    }

    #[test]
    fn test_container_classes_compose_both_mappings() {
        let classes = container_classes(ToastKind::Error, Phase::Visible, Corner::TopLeft);

        assert!(classes.starts_with(BASE_CLASSES));
        assert!(classes.contains("translate-x-0 opacity-100"));
        assert!(classes.contains("bg-red-100"));
    }
}
