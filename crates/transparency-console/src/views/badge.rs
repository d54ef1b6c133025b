//! Status badge colors

use colored::{ColoredString, Colorize};
use transparency_core::types::{
    AlertSeverity, AuditSeverity, BackupState, CompanyStatus, ComplianceStatus, HealthStatus,
    NotificationPriority, NotificationStatus, NotificationType, ProductStatus, SubscriptionTier,
    TicketPriority, TicketStatus, UserRole, UserStatus,
};

/// Palette used for badges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    /// Good or done
    Green,
    /// Needs attention
    Yellow,
    /// Bad or urgent
    Red,
    /// In progress or informational
    Blue,
    /// Elevated privilege
    Purple,
    /// Neutral
    Gray,
}

impl BadgeColor {
    /// Paint `text` in this color
    #[must_use]
    pub fn paint(self, text: &str) -> ColoredString {
        match self {
            Self::Green => text.green(),
            Self::Yellow => text.yellow(),
            Self::Red => text.red().bold(),
            Self::Blue => text.blue(),
            Self::Purple => text.magenta(),
            Self::Gray => text.bright_black(),
        }
    }
}

/// Values shown as a colored label
pub trait Badge {
    /// Label text
    fn label(&self) -> &'static str;

    /// Badge color
    fn color(&self) -> BadgeColor;
}

macro_rules! badge {
    ($ty:ty { $( $variant:ident => $color:ident ),+ $(,)? }) => {
        impl Badge for $ty {
            fn label(&self) -> &'static str {
                self.as_str()
            }

            fn color(&self) -> BadgeColor {
                match self {
                    $( Self::$variant => BadgeColor::$color, )+
                    _ => BadgeColor::Gray,
                }
            }
        }
    };
}

badge!(UserRole {
    SuperAdmin => Red,
    Admin => Purple,
    CompanyAdmin => Blue,
    Manager => Green,
    Analyst => Yellow,
});

badge!(UserStatus {
    Active => Green,
    Inactive => Gray,
    Suspended => Red,
    Pending => Yellow,
});

badge!(CompanyStatus {
    Active => Green,
    Inactive => Gray,
    Suspended => Red,
    PendingVerification => Yellow,
});

badge!(ComplianceStatus {
    Compliant => Green,
    NonCompliant => Red,
    PendingReview => Yellow,
    AtRisk => Yellow,
});

badge!(SubscriptionTier {
    Basic => Blue,
    Professional => Purple,
    Enterprise => Green,
});

badge!(ProductStatus {
    Active => Green,
    Draft => Gray,
    UnderReview => Yellow,
    Discontinued => Red,
});

badge!(TicketStatus {
    Open => Blue,
    InProgress => Yellow,
    WaitingOnCustomer => Purple,
    Resolved => Green,
});

badge!(TicketPriority {
    Low => Gray,
    Medium => Blue,
    High => Yellow,
    Urgent => Red,
});

badge!(AuditSeverity {
    Info => Blue,
    Warning => Yellow,
    Error => Red,
    Critical => Red,
});

badge!(NotificationStatus {
    Unread => Blue,
    Read => Gray,
    Archived => Gray,
    Deleted => Red,
});

badge!(NotificationType {
    Info => Blue,
    Success => Green,
    Warning => Yellow,
    Error => Red,
    Compliance => Purple,
});

badge!(NotificationPriority {
    Normal => Blue,
    High => Yellow,
    Urgent => Red,
});

badge!(HealthStatus {
    Healthy => Green,
    Degraded => Yellow,
    Unhealthy => Red,
});

badge!(AlertSeverity {
    Info => Blue,
    Warning => Yellow,
    Critical => Red,
});

badge!(BackupState {
    Running => Blue,
    Succeeded => Green,
    Failed => Red,
});

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TicketPriority::Urgent, BadgeColor::Red)]
    #[case(TicketPriority::High, BadgeColor::Yellow)]
    #[case(TicketPriority::Low, BadgeColor::Gray)]
    #[case(TicketPriority::Unknown, BadgeColor::Gray)]
    fn test_ticket_priority_colors(#[case] priority: TicketPriority, #[case] expected: BadgeColor) {
        assert_eq!(priority.color(), expected);
    }

    #[test]
    fn test_unlisted_variants_fall_back_to_gray() {
        assert_eq!(UserRole::Viewer.color(), BadgeColor::Gray);
        assert_eq!(TicketStatus::Closed.color(), BadgeColor::Gray);
        assert_eq!(BackupState::Idle.color(), BadgeColor::Gray);
    }

    #[test]
    fn test_label_is_wire_value() {
        assert_eq!(TicketStatus::InProgress.label(), "in_progress");
        assert_eq!(ComplianceStatus::NonCompliant.label(), "non_compliant");
    }
}
