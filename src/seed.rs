//! First-launch example data, installed when no persisted state exists.

use crate::model::{
    Client, ClientStatus, Platform, Post, PostStatus, Protocol, ProtocolCategory,
    RelationshipHealth,
};
use crate::persistence::PersistedState;
use crate::platform;

/// Build the seed state: one active client, two protocols, one scheduled
/// post, no tasks. Timestamps are taken at call time.
pub fn seed_state() -> PersistedState {
    let clients = vec![Client {
        id: "1".into(),
        name: "Quantum Growth".into(),
        status: ClientStatus::Active,
        revenue_gate: 5000.0,
        tier: "Platinum".into(),
        ltv: 25000.0,
        contract_value: 5000.0,
        phone: "+123456789".into(),
        email: "ceo@quantum.com".into(),
        contact_name: "John Doe".into(),
        niche: "SaaS".into(),
        start_date: platform::now_iso(),
        shadow_avatar: "Tech Founder".into(),
        bleeding_neck: "High churn".into(),
        content_pillars: vec!["Efficiency".into(), "Scaling".into()],
        relationship_health: RelationshipHealth::Good,
        onboarding_status: 100,
        notes: "Key client.".into(),
    }];

    let protocols = vec![
        Protocol {
            id: "1".into(),
            title: "Client Onboarding Flow".into(),
            category: ProtocolCategory::Sops,
            pillar: "Ops".into(),
            updated_at: platform::today(),
            content: "Step 1: Welcome email\nStep 2: Slack channel setup".into(),
        },
        Protocol {
            id: "2".into(),
            title: "Viral Reel Script Structure".into(),
            category: ProtocolCategory::AiPrompts,
            pillar: "Content".into(),
            updated_at: platform::today(),
            content: "Act as an expert copywriter. Write a reel script exploring the bleeding neck of [Audience]."
                .into(),
        },
    ];

    let posts = vec![Post {
        id: "1".into(),
        client_id: "1".into(),
        platform: Platform::Instagram,
        post_type: "Reel".into(),
        hook: "How we scaled to $10k/mo".into(),
        scheduled_date: platform::now_iso(),
        status: PostStatus::Scheduled,
        pillar: "Scaling".into(),
    }];

    PersistedState {
        clients,
        tasks: Vec::new(),
        posts,
        protocols,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_counts() {
        let state = seed_state();
        assert_eq!(state.clients.len(), 1);
        assert_eq!(state.tasks.len(), 0);
        assert_eq!(state.posts.len(), 1);
        assert_eq!(state.protocols.len(), 2);
    }

    #[test]
    fn test_seed_post_links_seed_client() {
        let state = seed_state();
        assert_eq!(state.clients[0].name, "Quantum Growth");
        assert_eq!(state.posts[0].client_id, state.clients[0].id);
    }
}
