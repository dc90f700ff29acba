//! Leadership pages, ministry forms and account pages.

use serde::Serialize;

use sanctuary_core::types::{
    AttendanceRecord, Hymn, Member, MemberStatus, MinisterMessage, PrayerRequest, SickReport,
    SundayService, User,
};
use sanctuary_core::{Result, Role};

use crate::authorization::{gate, gate_class, Access, Capability};
use crate::core::AppCore;
use crate::services::AudienceSizes;
use crate::settings::{Preferences, ThemePreference};

/// `/portal/class-manager`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassManagerView {
    /// Classes the user may manage
    pub classes: Vec<String>,
    /// Class being shown
    pub class_id: Option<String>,
    /// Register, by class number
    pub members: Vec<Member>,
    /// Active members on the register
    pub active_count: usize,
    /// Meetings, most recent first
    pub attendance: Vec<AttendanceRecord>,
}

pub(super) async fn class_manager(
    core: &AppCore,
    requested: Option<&str>,
) -> Result<Access<ClassManagerView>> {
    let user = core.user().await;
    gate_class(&user, requested, || async {
        let classes = core.classes().manageable_classes(&user).await?;
        let class_id = requested
            .map(str::to_string)
            .or_else(|| user.class_id.clone())
            .or_else(|| classes.first().cloned());

        let (members, attendance) = match &class_id {
            Some(id) => futures::try_join!(
                core.classes().members(&user, id),
                core.classes().attendance(&user, id),
            )?,
            None => (Vec::new(), Vec::new()),
        };
        Ok(ClassManagerView {
            active_count: members
                .iter()
                .filter(|m| m.status == MemberStatus::Active)
                .count(),
            classes,
            class_id,
            members,
            attendance,
        })
    })
    .await
}

/// `/portal/messaging`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkMessagingView {
    /// Recipient counts for the audience picker
    pub audience: AudienceSizes,
    /// Messages queued this session
    pub sent_this_session: usize,
}

pub(super) async fn bulk_messaging(core: &AppCore) -> Result<Access<BulkMessagingView>> {
    let user = core.user().await;
    gate(&user, Capability::BulkMessaging, || async {
        Ok(BulkMessagingView {
            audience: core.messaging().audience_sizes().await?,
            sent_this_session: core.outbox().dispatches().len(),
        })
    })
    .await
}

/// `/portal/prayer-requests`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PastoralInboxView {
    /// Newest first
    pub prayer_requests: Vec<PrayerRequest>,
    /// Newest first
    pub sick_reports: Vec<SickReport>,
    /// Newest first
    pub minister_messages: Vec<MinisterMessage>,
}

pub(super) async fn pastoral_inbox(core: &AppCore) -> Result<Access<PastoralInboxView>> {
    let user = core.user().await;
    gate(&user, Capability::PastoralCare, || async {
        let admin = core.admin();
        let (prayer_requests, sick_reports, minister_messages) = futures::try_join!(
            admin.prayer_requests(&user),
            admin.sick_reports(&user),
            admin.minister_messages(&user),
        )?;
        Ok(PastoralInboxView {
            prayer_requests,
            sick_reports,
            minister_messages,
        })
    })
    .await
}

/// `/portal/service-planner`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePlannerView {
    /// Services on or after today, soonest first
    pub upcoming: Vec<SundayService>,
    /// Hymns available to pick from
    pub hymns: Vec<Hymn>,
}

pub(super) async fn service_planner(core: &AppCore) -> Result<Access<ServicePlannerView>> {
    let user = core.user().await;
    let today = core.today().await;
    gate(&user, Capability::PlanServices, || async {
        let content = core.content();
        let (services, hymns) = futures::try_join!(content.services(), content.hymns())?;
        let mut upcoming: Vec<SundayService> =
            services.into_iter().filter(|s| s.date >= today).collect();
        upcoming.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(ServicePlannerView { upcoming, hymns })
    })
    .await
}

/// A form on the ministry page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MinistryForm {
    /// Ask the church to pray
    PrayerRequest,
    /// Report a sick member
    SickReport,
    /// Write to the minister
    MinisterMessage,
}

impl MinistryForm {
    /// Every form, in page order.
    pub const ALL: [MinistryForm; 3] = [Self::PrayerRequest, Self::SickReport, Self::MinisterMessage];

    /// Form heading.
    pub fn title(&self) -> &'static str {
        match self {
            Self::PrayerRequest => "Prayer Request",
            Self::SickReport => "Report a Sick Member",
            Self::MinisterMessage => "Message the Minister",
        }
    }
}

/// `/ministry`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MinistryView {
    /// Forms the user may submit
    pub forms: Vec<MinistryForm>,
    /// Name prefilled into the forms
    pub submitter: String,
    /// Class prefilled into the sick report
    pub class_name: Option<String>,
    /// Whether the user may read what others submitted
    pub can_view_submissions: bool,
}

pub(super) async fn ministry(core: &AppCore) -> Result<MinistryView> {
    let user = core.user().await;
    let forms = if Capability::SubmitMinistryForms.allows(user.role) {
        MinistryForm::ALL.to_vec()
    } else {
        Vec::new()
    };
    Ok(MinistryView {
        forms,
        can_view_submissions: Capability::PastoralCare.allows(user.role),
        submitter: user.name,
        class_name: user.class_name,
    })
}

/// An entry in the role switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleOption {
    /// Role
    pub role: Role,
    /// Display label
    pub label: &'static str,
    /// Whether this is the signed-in role
    pub current: bool,
}

/// `/profile`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    /// Signed-in user
    pub user: User,
    /// Role switcher entries
    pub roles: Vec<RoleOption>,
}

pub(super) async fn profile(core: &AppCore) -> ProfileView {
    let user = core.user().await;
    let roles = Role::ALL
        .into_iter()
        .map(|role| RoleOption {
            role,
            label: role.label(),
            current: role == user.role,
        })
        .collect();
    ProfileView { user, roles }
}

/// `/settings`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsView {
    /// Church name from configuration
    pub church_name: String,
    /// Current branding
    pub preferences: Preferences,
    /// Theme choices
    pub themes: Vec<ThemePreference>,
}

pub(super) fn settings(core: &AppCore) -> SettingsView {
    SettingsView {
        church_name: core.config().church_name.clone(),
        preferences: core.settings().preferences(),
        themes: ThemePreference::ALL.to_vec(),
    }
}
