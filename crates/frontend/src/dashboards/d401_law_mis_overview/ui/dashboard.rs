use contracts::domain::a001_user::seed::sample_users;
use contracts::domain::a005_workshop::aggregate::{count_by_status, Workshop};
use contracts::domain::a005_workshop::seed::sample_workshops;
use contracts::enums::workshop_status::WorkshopStatus;
use contracts::system::session::SubRole;
use contracts::system::views::{LawMisView, PortalView};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::format::format_count;
use crate::shared::i18n::tr;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::session::context::use_session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkshopSummary {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl WorkshopSummary {
    pub fn compute(workshops: &[Workshop]) -> Self {
        Self {
            total: workshops.len(),
            pending: count_by_status(workshops, WorkshopStatus::Pending),
            approved: count_by_status(workshops, WorkshopStatus::Approved),
            rejected: count_by_status(workshops, WorkshopStatus::Rejected),
        }
    }

    pub fn pending_tone(&self) -> StatTone {
        if self.pending == 0 {
            StatTone::Good
        } else {
            StatTone::Warning
        }
    }
}

/// Landing view of LAW-MIS USER and ADMIN. The quick action differs: users
/// register a workshop, admins review applications.
#[component]
pub fn LawMisOverview(sub_role: SubRole) -> impl IntoView {
    let session = use_session();
    let summary = WorkshopSummary::compute(&sample_workshops());
    let is_admin = sub_role == SubRole::Admin;

    let (action_key, action_view) = if is_admin {
        ("workshops", LawMisView::Workshops)
    } else {
        ("add_workshop", LawMisView::AddWorkshop)
    };

    view! {
        <PageFrame page_id="d401_law_mis_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader
                title=Signal::derive(tr("dashboard"))
                subtitle={format!("Signed in as {}", sub_role.as_str())}
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| {
                        let _ = session.navigate(PortalView::LawMis(action_view));
                    }
                >
                    {tr(action_key)}
                </Button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label={"Workshops".to_string()}
                    icon_name="building"
                    value={format_count(summary.total)}
                />
                <StatCard
                    label={"Pending review".to_string()}
                    icon_name="file-text"
                    value={format_count(summary.pending)}
                    tone={summary.pending_tone()}
                />
                <StatCard
                    label={"Approved".to_string()}
                    icon_name="check"
                    value={format_count(summary.approved)}
                    tone=StatTone::Good
                />
                <StatCard
                    label={"Rejected".to_string()}
                    icon_name="x"
                    value={format_count(summary.rejected)}
                    tone=StatTone::Bad
                />
                {is_admin.then(|| {
                    let users = sample_users();
                    let active = users.iter().filter(|u| u.is_active).count();
                    view! {
                        <StatCard
                            label={"Users".to_string()}
                            icon_name="users"
                            value={format_count(users.len())}
                            subtitle={format!("{} active", active)}
                        />
                    }
                })}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_every_workshop_once() {
        let s = WorkshopSummary::compute(&sample_workshops());
        assert_eq!(s.pending + s.approved + s.rejected, s.total);
    }

    #[test]
    fn test_pending_tone() {
        let none = WorkshopSummary { total: 2, pending: 0, approved: 2, rejected: 0 };
        let some = WorkshopSummary { pending: 1, ..none };
        assert_eq!(none.pending_tone(), StatTone::Good);
        assert_eq!(some.pending_tone(), StatTone::Warning);
    }
}
