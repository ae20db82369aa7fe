//! Knowledge-vault protocols: SOPs, prompts, and other reference documents.
//!
//! Protocols are append-and-amend only - the vault never exposes a delete.

use serde::{Deserialize, Serialize};

/// Vault shelf a protocol lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProtocolCategory {
    #[serde(rename = "SOPs")]
    Sops,
    #[serde(rename = "AI Prompts")]
    AiPrompts,
    #[serde(rename = "Client Assets")]
    ClientAssets,
    Legal,
    Strategy,
}

impl ProtocolCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtocolCategory::Sops => "SOPs",
            ProtocolCategory::AiPrompts => "AI Prompts",
            ProtocolCategory::ClientAssets => "Client Assets",
            ProtocolCategory::Legal => "Legal",
            ProtocolCategory::Strategy => "Strategy",
        }
    }
}

/// A knowledge-base protocol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Protocol {
    pub id: String,
    pub title: String,
    pub category: ProtocolCategory,
    pub pillar: String,
    /// Set by the store at creation time (date only, `YYYY-MM-DD`)
    pub updated_at: String,
    pub content: String,
}

/// Fields supplied to create a protocol - everything but the id and the
/// store-derived `updated_at`.
#[derive(Debug, Clone)]
pub struct ProtocolDraft {
    pub title: String,
    pub category: ProtocolCategory,
    pub pillar: String,
    pub content: String,
}

impl ProtocolDraft {
    pub(crate) fn into_protocol(self, id: String, updated_at: String) -> Protocol {
        Protocol {
            id,
            title: self.title,
            category: self.category,
            pillar: self.pillar,
            updated_at,
            content: self.content,
        }
    }
}

/// Partial update for a protocol. `updated_at` is caller-controlled here; the
/// store does not refresh it implicitly on update.
#[derive(Debug, Clone, Default)]
pub struct ProtocolPatch {
    pub title: Option<String>,
    pub category: Option<ProtocolCategory>,
    pub pillar: Option<String>,
    pub updated_at: Option<String>,
    pub content: Option<String>,
}

impl ProtocolPatch {
    /// Shallow-merge this patch over `protocol`
    pub fn apply(self, protocol: &mut Protocol) {
        if let Some(v) = self.title {
            protocol.title = v;
        }
        if let Some(v) = self.category {
            protocol.category = v;
        }
        if let Some(v) = self.pillar {
            protocol.pillar = v;
        }
        if let Some(v) = self.updated_at {
            protocol.updated_at = v;
        }
        if let Some(v) = self.content {
            protocol.content = v;
        }
    }
}
