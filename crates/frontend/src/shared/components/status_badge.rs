use contracts::enums::order_status::OrderStatus;
use contracts::enums::station_status::StationStatus;
use contracts::enums::workshop_status::WorkshopStatus;
use leptos::prelude::*;
use thaw::*;

/// Badge colour for a status value.
pub trait BadgeTone {
    fn label(&self) -> &'static str;
    fn color(&self) -> BadgeColor;
}

impl BadgeTone for StationStatus {
    fn label(&self) -> &'static str {
        self.display_name()
    }

    fn color(&self) -> BadgeColor {
        match self {
            StationStatus::Online => BadgeColor::Success,
            StationStatus::Offline => BadgeColor::Danger,
            StationStatus::Maintenance => BadgeColor::Warning,
        }
    }
}

impl BadgeTone for OrderStatus {
    fn label(&self) -> &'static str {
        self.display_name()
    }

    fn color(&self) -> BadgeColor {
        match self {
            OrderStatus::Pending => BadgeColor::Warning,
            OrderStatus::Shipped => BadgeColor::Brand,
            OrderStatus::Delivered => BadgeColor::Success,
            OrderStatus::Cancelled => BadgeColor::Danger,
        }
    }
}

impl BadgeTone for WorkshopStatus {
    fn label(&self) -> &'static str {
        self.display_name()
    }

    fn color(&self) -> BadgeColor {
        match self {
            WorkshopStatus::Pending => BadgeColor::Warning,
            WorkshopStatus::Approved => BadgeColor::Success,
            WorkshopStatus::Rejected => BadgeColor::Danger,
        }
    }
}

#[component]
pub fn StatusBadge<S>(status: S) -> impl IntoView
where
    S: BadgeTone + Send + Sync + 'static,
{
    let label = status.label();
    view! {
        <Badge appearance=BadgeAppearance::Tint color=status.color()>
            {label}
        </Badge>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn badge_status<S: BadgeTone + Send + Sync + 'static>(status: S) -> &'static str {
        status.label()
    }

    #[test]
    fn test_every_status_enum_can_be_badged() {
        assert_eq!(badge_status(StationStatus::Online), StationStatus::Online.display_name());
        assert_eq!(badge_status(OrderStatus::Shipped), OrderStatus::Shipped.display_name());
        assert_eq!(badge_status(WorkshopStatus::Pending), WorkshopStatus::Pending.display_name());
    }
}
