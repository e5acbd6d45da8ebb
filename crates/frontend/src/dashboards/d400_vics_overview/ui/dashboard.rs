use contracts::domain::a001_user::aggregate::UserAccount;
use contracts::domain::a001_user::seed::sample_users;
use contracts::domain::a002_station::aggregate::{count_by_status, Station};
use contracts::domain::a002_station::seed::sample_stations;
use contracts::enums::station_status::StationStatus;
use contracts::system::views::{ManagementView, PortalView, VicsView};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::format::format_count;
use crate::shared::i18n::tr;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::session::context::use_session;

/// Figures shown on the VICS overview.
#[derive(Debug, Clone, PartialEq)]
pub struct VicsSummary {
    pub stations: usize,
    pub online: usize,
    pub offline: usize,
    pub maintenance: usize,
    pub capacity_kw: f64,
    pub users: usize,
    pub active_users: usize,
}

impl VicsSummary {
    pub fn compute(stations: &[Station], users: &[UserAccount]) -> Self {
        Self {
            stations: stations.len(),
            online: count_by_status(stations, StationStatus::Online),
            offline: count_by_status(stations, StationStatus::Offline),
            maintenance: count_by_status(stations, StationStatus::Maintenance),
            capacity_kw: stations
                .iter()
                .filter(|s| s.status == StationStatus::Online)
                .map(|s| s.power_kw)
                .sum(),
            users: users.len(),
            active_users: users.iter().filter(|u| u.is_active).count(),
        }
    }

    /// Share of stations online, whole percent.
    pub fn availability_pct(&self) -> u32 {
        if self.stations == 0 {
            0
        } else {
            (self.online * 100 / self.stations) as u32
        }
    }
}

#[component]
pub fn VicsOverview() -> impl IntoView {
    let session = use_session();
    let summary = VicsSummary::compute(&sample_stations(), &sample_users());

    let availability_tone = match summary.availability_pct() {
        80.. => StatTone::Good,
        50..=79 => StatTone::Warning,
        _ => StatTone::Bad,
    };

    let go = move |view: VicsView| {
        let _ = session.navigate(PortalView::Vics(view));
    };

    view! {
        <PageFrame page_id="d400_vics_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title=Signal::derive(tr("dashboard")) subtitle={"Charging network at a glance".to_string()}>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| go(VicsView::Management(ManagementView::Station))
                >
                    {tr("stations")}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| go(VicsView::Management(ManagementView::User))
                >
                    {tr("users")}
                </Button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label={"Stations".to_string()}
                    icon_name="zap"
                    value={format_count(summary.stations)}
                    subtitle={format!("{} in maintenance", summary.maintenance)}
                />
                <StatCard
                    label={"Online".to_string()}
                    icon_name="check"
                    value={format!("{}%", summary.availability_pct())}
                    tone=availability_tone
                    subtitle={format!("{} online, {} offline", summary.online, summary.offline)}
                />
                <StatCard
                    label={"Live capacity".to_string()}
                    icon_name="power"
                    value={format!("{:.0} kW", summary.capacity_kw)}
                />
                <StatCard
                    label={"Operators".to_string()}
                    icon_name="users"
                    value={format_count(summary.users)}
                    subtitle={format!("{} active", summary.active_users)}
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_partitions_stations_by_status() {
        let s = VicsSummary::compute(&sample_stations(), &sample_users());
        assert_eq!(s.online + s.offline + s.maintenance, s.stations);
        assert!(s.active_users <= s.users);
        assert!(s.availability_pct() <= 100);
    }

    #[test]
    fn test_empty_network_has_zero_availability() {
        let s = VicsSummary::compute(&[], &[]);
        assert_eq!(s.availability_pct(), 0);
        assert_eq!(s.capacity_kw, 0.0);
    }
}
