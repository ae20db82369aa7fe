//! Client accounts - the anchor collection the other entities soft-reference.

use serde::{Deserialize, Serialize};

/// Client engagement lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientStatus {
    Active,
    Onboarding,
    Paused,
    Churned,
}

impl ClientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Active => "Active",
            ClientStatus::Onboarding => "Onboarding",
            ClientStatus::Paused => "Paused",
            ClientStatus::Churned => "Churned",
        }
    }
}

/// How the client relationship is trending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationshipHealth {
    Good,
    Neutral,
    #[serde(rename = "At Risk")]
    AtRisk,
}

impl RelationshipHealth {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipHealth::Good => "Good",
            RelationshipHealth::Neutral => "Neutral",
            RelationshipHealth::AtRisk => "At Risk",
        }
    }
}

/// A client account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub status: ClientStatus,
    /// Monthly revenue gate the engagement is priced against
    pub revenue_gate: f64,
    pub tier: String,
    pub ltv: f64,
    pub contract_value: f64,
    pub phone: String,
    pub email: String,
    pub contact_name: String,
    pub niche: String,
    /// Set by the store at creation time (ISO-8601)
    pub start_date: String,
    /// Audience avatar the client's content speaks to
    pub shadow_avatar: String,
    /// The single most acute problem that content attacks
    pub bleeding_neck: String,
    /// Insertion order is meaningful for display
    pub content_pillars: Vec<String>,
    pub relationship_health: RelationshipHealth,
    /// 0-100 by convention; the store trusts the producer
    pub onboarding_status: u8,
    pub notes: String,
}

/// Fields supplied to create a client - everything but the id and the
/// store-derived `start_date`.
#[derive(Debug, Clone)]
pub struct ClientDraft {
    pub name: String,
    pub status: ClientStatus,
    pub revenue_gate: f64,
    pub tier: String,
    pub ltv: f64,
    pub contract_value: f64,
    pub phone: String,
    pub email: String,
    pub contact_name: String,
    pub niche: String,
    pub shadow_avatar: String,
    pub bleeding_neck: String,
    pub content_pillars: Vec<String>,
    pub relationship_health: RelationshipHealth,
    pub onboarding_status: u8,
    pub notes: String,
}

impl ClientDraft {
    pub(crate) fn into_client(self, id: String, start_date: String) -> Client {
        Client {
            id,
            name: self.name,
            status: self.status,
            revenue_gate: self.revenue_gate,
            tier: self.tier,
            ltv: self.ltv,
            contract_value: self.contract_value,
            phone: self.phone,
            email: self.email,
            contact_name: self.contact_name,
            niche: self.niche,
            start_date,
            shadow_avatar: self.shadow_avatar,
            bleeding_neck: self.bleeding_neck,
            content_pillars: self.content_pillars,
            relationship_health: self.relationship_health,
            onboarding_status: self.onboarding_status,
            notes: self.notes,
        }
    }
}

/// Partial update for a client: set fields overwrite, unset fields are left
/// untouched. The id is deliberately not patchable.
#[derive(Debug, Clone, Default)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub status: Option<ClientStatus>,
    pub revenue_gate: Option<f64>,
    pub tier: Option<String>,
    pub ltv: Option<f64>,
    pub contract_value: Option<f64>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub contact_name: Option<String>,
    pub niche: Option<String>,
    pub start_date: Option<String>,
    pub shadow_avatar: Option<String>,
    pub bleeding_neck: Option<String>,
    pub content_pillars: Option<Vec<String>>,
    pub relationship_health: Option<RelationshipHealth>,
    pub onboarding_status: Option<u8>,
    pub notes: Option<String>,
}

impl ClientPatch {
    /// Shallow-merge this patch over `client`
    pub fn apply(self, client: &mut Client) {
        if let Some(v) = self.name {
            client.name = v;
        }
        if let Some(v) = self.status {
            client.status = v;
        }
        if let Some(v) = self.revenue_gate {
            client.revenue_gate = v;
        }
        if let Some(v) = self.tier {
            client.tier = v;
        }
        if let Some(v) = self.ltv {
            client.ltv = v;
        }
        if let Some(v) = self.contract_value {
            client.contract_value = v;
        }
        if let Some(v) = self.phone {
            client.phone = v;
        }
        if let Some(v) = self.email {
            client.email = v;
        }
        if let Some(v) = self.contact_name {
            client.contact_name = v;
        }
        if let Some(v) = self.niche {
            client.niche = v;
        }
        if let Some(v) = self.start_date {
            client.start_date = v;
        }
        if let Some(v) = self.shadow_avatar {
            client.shadow_avatar = v;
        }
        if let Some(v) = self.bleeding_neck {
            client.bleeding_neck = v;
        }
        if let Some(v) = self.content_pillars {
            client.content_pillars = v;
        }
        if let Some(v) = self.relationship_health {
            client.relationship_health = v;
        }
        if let Some(v) = self.onboarding_status {
            client.onboarding_status = v;
        }
        if let Some(v) = self.notes {
            client.notes = v;
        }
    }
}
