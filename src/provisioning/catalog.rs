use serde::{Deserialize, Serialize};

use crate::twenty::fieldmetadata::{FieldDefinition, FieldType, RelationSettings, RelationType};
use crate::twenty::selectoption::SelectOption;

pub const PERSON_OBJECT_ID: &str = "95782d2d-8813-4e3a-8c64-9f1c48f51126";
pub const WORKSPACE_MEMBER_OBJECT_ID: &str = "0d5a14b5-eecd-436d-bfe6-946f210de180";
pub const CONTENT_ITEM_OBJECT_ID: &str = "59076336-a524-410f-ac85-9c7ba5858c84";
pub const WEEKLY_PLAN_OBJECT_ID: &str = "a95fc0e3-6685-45cf-ba4d-2ccf4a72dfd4";
pub const PROGRESSION_OBJECT_ID: &str = "c55ddb2b-d734-4a1e-bcdd-bce928314c41";
pub const ASSIGNED_REP_FIELD_ID: &str = "d207c01e-714c-4cf2-a6b1-b2b01c6ddaf4";

/// Standard objects can be addressed by singular name when the id lookup fails.
pub const PERSON_FALLBACK_ID: &str = "person";

pub const ASSIGNED_REP_FIELD_NAME: &str = "assignedRep";
pub const LEAD_ASSIGNMENT_FIELD_NAME: &str = "assignedToWorkspaceMemberId";

/// Deployment-specific metadata ids, overridable from configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectIds {
    pub person: String,
    pub workspace_member: String,
    pub content_item: String,
    pub weekly_plan: String,
    pub progression: String,
    pub assigned_rep_field: String,
}

impl Default for ObjectIds {
    fn default() -> Self {
        ObjectIds {
            person: PERSON_OBJECT_ID.to_string(),
            workspace_member: WORKSPACE_MEMBER_OBJECT_ID.to_string(),
            content_item: CONTENT_ITEM_OBJECT_ID.to_string(),
            weekly_plan: WEEKLY_PLAN_OBJECT_ID.to_string(),
            progression: PROGRESSION_OBJECT_ID.to_string(),
            assigned_rep_field: ASSIGNED_REP_FIELD_ID.to_string(),
        }
    }
}

/// name, label, type, description, icon
type FieldRow = (&'static str, &'static str, FieldType, &'static str, &'static str);

const CONTENT_ITEM_FIELDS: &[FieldRow] = &[
    ("contentType", "Content Type", FieldType::Text, "video, image, text, carousel", "IconPhoto"),
    (
        "status",
        "Status",
        FieldType::Text,
        "idea, planned, scripted, assets, editing, review, scheduled, posted",
        "IconProgress",
    ),
    (
        "scheduledDate",
        "Scheduled Date",
        FieldType::DateTime,
        "When this content is scheduled to post",
        "IconCalendarEvent",
    ),
    (
        "postedDate",
        "Posted Date",
        FieldType::DateTime,
        "When this content was posted",
        "IconCalendarCheck",
    ),
    ("script", "Script", FieldType::Text, "Content script or body text", "IconFileText"),
    ("caption", "Caption", FieldType::Text, "Social media caption", "IconMessage"),
    ("hashtags", "Hashtags", FieldType::Text, "Comma-separated hashtags", "IconHash"),
    (
        "museNotes",
        "MUSE Notes",
        FieldType::Text,
        "Why this content fits the strategy",
        "IconSparkles",
    ),
    (
        "workflowStep",
        "Workflow Step",
        FieldType::Number,
        "Current step in TikTok workflow (1-8)",
        "IconListNumbers",
    ),
    ("assignedTo", "Assigned To", FieldType::Text, "leigh, sarai, or muse", "IconUser"),
    ("postizPostId", "Postiz Post ID", FieldType::Text, "Postiz API post ID", "IconLink"),
];

const WEEKLY_PLAN_FIELDS: &[FieldRow] = &[
    ("weekStart", "Week Start", FieldType::DateTime, "Monday of the week", "IconCalendarEvent"),
    ("weekEnd", "Week End", FieldType::DateTime, "Sunday of the week", "IconCalendarEvent"),
    (
        "suggestions",
        "Suggestions",
        FieldType::Text,
        "JSON array of content suggestions",
        "IconSparkles",
    ),
    (
        "plannedCount",
        "Planned Count",
        FieldType::Number,
        "Number of planned items",
        "IconListNumbers",
    ),
    (
        "completedCount",
        "Completed Count",
        FieldType::Number,
        "Number of completed items",
        "IconCheck",
    ),
];

const PROGRESSION_FIELDS: &[FieldRow] = &[
    ("email", "Email", FieldType::Text, "User email", "IconMail"),
    ("totalXp", "Total XP", FieldType::Number, "Cumulative experience points", "IconStar"),
    ("currentLevel", "Current Level", FieldType::Number, "Calculated from XP", "IconTrendingUp"),
    ("rank", "Rank", FieldType::Text, "content-creator-1 through marketing-lead", "IconMedal"),
    ("badges", "Badges", FieldType::Text, "JSON array of badge IDs", "IconAward"),
    ("streakDays", "Streak Days", FieldType::Number, "Consecutive activity days", "IconFlame"),
    (
        "lastActivityDate",
        "Last Activity Date",
        FieldType::DateTime,
        "Last activity timestamp",
        "IconCalendarEvent",
    ),
    ("longestStreak", "Longest Streak", FieldType::Number, "Best streak achieved", "IconTrophy"),
    ("postsPublished", "Posts Published", FieldType::Number, "Total posts published", "IconShare"),
    ("videosCreated", "Videos Created", FieldType::Number, "Total videos created", "IconVideo"),
    (
        "totalEngagement",
        "Total Engagement",
        FieldType::Number,
        "likes + comments + shares",
        "IconHeart",
    ),
    (
        "coursesCompleted",
        "Courses Completed",
        FieldType::Text,
        "JSON array of course IDs",
        "IconCertificate",
    ),
    ("titles", "Titles", FieldType::Text, "JSON array of earned titles", "IconCrown"),
    ("activeTitle", "Active Title", FieldType::Text, "Currently displayed title", "IconBadge"),
];

fn definitions(rows: &[FieldRow]) -> Vec<FieldDefinition> {
    rows.iter()
        .map(|(name, label, field_type, description, icon)| {
            FieldDefinition::new(name, label, field_type.clone())
                .with_description(description)
                .with_icon(icon)
        })
        .collect()
}

/// A named group of fields destined for one object.
pub struct FieldGroup {
    pub title: &'static str,
    pub object_id: String,
    pub fields: Vec<FieldDefinition>,
}

/// Fields backing the studio dashboard's custom objects.
pub fn studio_field_groups(ids: &ObjectIds) -> Vec<FieldGroup> {
    vec![
        FieldGroup {
            title: "studioContentItem",
            object_id: ids.content_item.clone(),
            fields: definitions(CONTENT_ITEM_FIELDS),
        },
        FieldGroup {
            title: "studioWeeklyPlan",
            object_id: ids.weekly_plan.clone(),
            fields: definitions(WEEKLY_PLAN_FIELDS),
        },
        FieldGroup {
            title: "marketingProgression",
            object_id: ids.progression.clone(),
            fields: definitions(PROGRESSION_FIELDS),
        },
    ]
}

/// Text field holding the workspace member id of a lead's sales rep.
pub fn lead_assignment_field() -> FieldDefinition {
    FieldDefinition::new(LEAD_ASSIGNMENT_FIELD_NAME, "Assigned Rep ID", FieldType::Text)
        .with_description("WorkspaceMember ID of assigned sales rep - enables per-rep lead lists")
        .with_icon("IconUserCheck")
}

/// Many-to-one relation from Person to WorkspaceMember.
pub fn assigned_rep_relation(
    workspace_member_object_id: &str,
    with_inverse: bool,
) -> FieldDefinition {
    let (target_field_name, target_field_label) = if with_inverse {
        (Some("assignedLeads".to_string()), Some("Assigned Leads".to_string()))
    } else {
        (None, None)
    };

    FieldDefinition::relation(
        ASSIGNED_REP_FIELD_NAME,
        "Assigned Rep",
        RelationSettings {
            relation_type: RelationType::ManyToOne,
            related_object_metadata_id: workspace_member_object_id.to_string(),
            target_field_name,
            target_field_label,
        },
    )
    .with_description("System User assigned to this lead")
    .with_icon("IconUserCheck")
}

/// Select field listing the sales reps.
pub fn assigned_rep_select(options: Vec<SelectOption>) -> FieldDefinition {
    FieldDefinition::select(ASSIGNED_REP_FIELD_NAME, "Assigned Rep", options)
        .with_description("Sales Rep assigned to this lead")
        .with_icon("IconUserCheck")
}
