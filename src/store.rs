//! The entity store: four insertion-ordered collections kept in sync with
//! one storage slot.
//!
//! Lifecycle is `Uninitialized -> Loading -> Ready`. Write-back only happens
//! in `Ready`, so a not-yet-hydrated store can never clobber a previously
//! saved blob. Every mutation serializes all four collections and saves them
//! as one unit - O(total state) per mutation, fine at dashboard scale.

use std::rc::Rc;

use crate::model::{
    self, Client, ClientDraft, ClientPatch, Post, PostDraft, PostPatch, Protocol, ProtocolDraft,
    ProtocolPatch, Task, TaskDraft, TaskPatch,
};
use crate::persistence::{self, PersistedState, STATE_KEY, StorageArea};
use crate::platform;
use crate::seed;

/// Store lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorePhase {
    Uninitialized,
    Loading,
    Ready,
}

/// Owns the four entity collections and the storage area they persist to.
///
/// All mutations run synchronously to completion; callers only ever see
/// shared snapshots or owned clones, never a mutable entity reference.
pub struct DataStore {
    area: Rc<dyn StorageArea>,
    phase: StorePhase,
    clients: Vec<Client>,
    tasks: Vec<Task>,
    posts: Vec<Post>,
    protocols: Vec<Protocol>,
}

impl DataStore {
    /// Create an empty, uninitialized store. Call [`DataStore::initialize`]
    /// before reading or mutating.
    pub fn new(area: Rc<dyn StorageArea>) -> Self {
        Self {
            area,
            phase: StorePhase::Uninitialized,
            clients: Vec::new(),
            tasks: Vec::new(),
            posts: Vec::new(),
            protocols: Vec::new(),
        }
    }

    /// Hydrate from storage, or install the first-launch seed when nothing is
    /// saved (or the saved blob is corrupt). Idempotent once `Ready`.
    pub fn initialize(&mut self) {
        if self.phase == StorePhase::Ready {
            return;
        }
        self.phase = StorePhase::Loading;

        match persistence::load_state(self.area.as_ref(), STATE_KEY) {
            Some(state) => {
                log::info!(
                    "Hydrated store: {} clients, {} tasks, {} posts, {} protocols",
                    state.clients.len(),
                    state.tasks.len(),
                    state.posts.len(),
                    state.protocols.len()
                );
                self.clients = state.clients;
                self.tasks = state.tasks;
                self.posts = state.posts;
                self.protocols = state.protocols;
                self.phase = StorePhase::Ready;
            }
            None => {
                log::info!("No saved state; installing first-launch seed");
                let seeded = seed::seed_state();
                self.clients = seeded.clients;
                self.tasks = seeded.tasks;
                self.posts = seeded.posts;
                self.protocols = seeded.protocols;
                self.phase = StorePhase::Ready;
                self.persist();
            }
        }
    }

    /// True once the initial load (or seed) has completed. The shell gates
    /// first render on this.
    pub fn is_loaded(&self) -> bool {
        self.phase == StorePhase::Ready
    }

    pub fn phase(&self) -> StorePhase {
        self.phase
    }

    // === Read surface (insertion-ordered snapshots) ===

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn protocols(&self) -> &[Protocol] {
        &self.protocols
    }

    // === Clients ===

    /// Create a client: assigns a fresh id, stamps `start_date`, appends,
    /// persists. Returns a clone of the stored entity.
    pub fn add_client(&mut self, draft: ClientDraft) -> Client {
        let client = draft.into_client(model::new_entity_id(), platform::now_iso());
        self.clients.push(client.clone());
        self.persist();
        client
    }

    /// Shallow-merge `patch` over the client with this id. Unknown id is a
    /// silent no-op.
    pub fn update_client(&mut self, id: &str, patch: ClientPatch) {
        if let Some(client) = self.clients.iter_mut().find(|c| c.id == id) {
            patch.apply(client);
            self.persist();
        }
    }

    /// Remove the client with this id, if present. Tasks and posts that
    /// reference it are left alone; dangling references are tolerated.
    pub fn delete_client(&mut self, id: &str) {
        let before = self.clients.len();
        self.clients.retain(|c| c.id != id);
        if self.clients.len() != before {
            self.persist();
        }
    }

    // === Tasks ===

    /// Create a task: fresh id, stamps `created_at`, appends, persists.
    /// `client_id` is a soft reference and is not checked against the client
    /// collection.
    pub fn add_task(&mut self, draft: TaskDraft) -> Task {
        let task = draft.into_task(model::new_entity_id(), platform::now_iso());
        self.tasks.push(task.clone());
        self.persist();
        task
    }

    pub fn update_task(&mut self, id: &str, patch: TaskPatch) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            patch.apply(task);
            self.persist();
        }
    }

    pub fn delete_task(&mut self, id: &str) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            self.persist();
        }
    }

    // === Posts ===

    /// Create a post: fresh id, appends, persists. No derived timestamp -
    /// `scheduled_date` comes from the caller.
    pub fn add_post(&mut self, draft: PostDraft) -> Post {
        let post = draft.into_post(model::new_entity_id());
        self.posts.push(post.clone());
        self.persist();
        post
    }

    pub fn update_post(&mut self, id: &str, patch: PostPatch) {
        if let Some(post) = self.posts.iter_mut().find(|p| p.id == id) {
            patch.apply(post);
            self.persist();
        }
    }

    pub fn delete_post(&mut self, id: &str) {
        let before = self.posts.len();
        self.posts.retain(|p| p.id != id);
        if self.posts.len() != before {
            self.persist();
        }
    }

    // === Protocols (create and amend only - no delete) ===

    /// Create a protocol: fresh id, stamps `updated_at` with today's date,
    /// appends, persists.
    pub fn add_protocol(&mut self, draft: ProtocolDraft) -> Protocol {
        let protocol = draft.into_protocol(model::new_entity_id(), platform::today());
        self.protocols.push(protocol.clone());
        self.persist();
        protocol
    }

    pub fn update_protocol(&mut self, id: &str, patch: ProtocolPatch) {
        if let Some(protocol) = self.protocols.iter_mut().find(|p| p.id == id) {
            patch.apply(protocol);
            self.persist();
        }
    }

    /// Serialize all four collections as one unit and save. Gated on `Ready`
    /// so the load race can't wipe a saved blob with empty state.
    fn persist(&self) {
        if self.phase != StorePhase::Ready {
            return;
        }
        let state = PersistedState {
            clients: self.clients.clone(),
            tasks: self.tasks.clone(),
            posts: self.posts.clone(),
            protocols: self.protocols.clone(),
        };
        persistence::save_state(self.area.as_ref(), STATE_KEY, &state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClientStatus, Priority, RelationshipHealth, TaskStatus};
    use crate::persistence::MemoryArea;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn ready_store() -> (Rc<MemoryArea>, DataStore) {
        let area = Rc::new(MemoryArea::new());
        let mut store = DataStore::new(area.clone());
        store.initialize();
        (area, store)
    }

    fn client_draft(name: &str) -> ClientDraft {
        ClientDraft {
            name: name.into(),
            status: ClientStatus::Onboarding,
            revenue_gate: 2000.0,
            tier: "Silver".into(),
            ltv: 0.0,
            contract_value: 2000.0,
            phone: String::new(),
            email: String::new(),
            contact_name: String::new(),
            niche: "Local biz".into(),
            shadow_avatar: String::new(),
            bleeding_neck: String::new(),
            content_pillars: Vec::new(),
            relationship_health: RelationshipHealth::Neutral,
            onboarding_status: 0,
            notes: String::new(),
        }
    }

    fn task_draft(name: &str, client_id: &str) -> TaskDraft {
        TaskDraft {
            client_id: client_id.into(),
            name: name.into(),
            phase: "Discovery".into(),
            current_stage: "Kickoff".into(),
            assigned_role: "Strategist".into(),
            status: TaskStatus::Todo,
            deadline: "2026-09-15".into(),
            priority: Priority::Medium,
            asset_links: Vec::new(),
            sop_reference: None,
            notes: String::new(),
            completed_at: None,
        }
    }

    #[test]
    fn test_first_launch_installs_seed() {
        let (area, store) = ready_store();

        assert!(store.is_loaded());
        assert_eq!(store.clients().len(), 1);
        assert_eq!(store.clients()[0].name, "Quantum Growth");
        assert_eq!(store.tasks().len(), 0);
        assert_eq!(store.posts().len(), 1);
        assert_eq!(store.protocols().len(), 2);

        // Seed was persisted immediately
        let saved = persistence::load_state(area.as_ref(), STATE_KEY).unwrap();
        assert_eq!(saved.clients.len(), 1);
        assert_eq!(saved.clients[0].name, "Quantum Growth");
        assert_eq!(saved.protocols.len(), 2);
    }

    #[test]
    fn test_corrupt_blob_triggers_seed_path() {
        let area = Rc::new(MemoryArea::new());
        area.write(STATE_KEY, "][ definitely not json");
        let mut store = DataStore::new(area.clone());
        store.initialize();

        assert_eq!(store.clients().len(), 1);
        assert_eq!(store.clients()[0].name, "Quantum Growth");
        // The corrupt blob was replaced by the seed
        assert!(persistence::load_state(area.as_ref(), STATE_KEY).is_some());
    }

    #[test]
    fn test_reload_preserves_collections_in_order() {
        let (area, mut store) = ready_store();
        let a = store.add_client(client_draft("Alpha"));
        let b = store.add_client(client_draft("Beta"));
        store.add_task(task_draft("Audit funnel", &a.id));

        let mut reloaded = DataStore::new(area.clone());
        reloaded.initialize();
        assert_eq!(reloaded.clients().len(), 3);
        assert_eq!(reloaded.clients()[1].id, a.id);
        assert_eq!(reloaded.clients()[2].id, b.id);
        assert_eq!(reloaded.tasks().len(), 1);
        assert_eq!(reloaded.tasks()[0].name, "Audit funnel");
    }

    #[test]
    fn test_mutation_before_initialize_does_not_clobber_saved_blob() {
        let (area, mut store) = ready_store();
        store.add_client(client_draft("Alpha"));
        let saved_before = area.read(STATE_KEY).unwrap();

        // A second store that skips initialize never reaches Ready, so its
        // mutations must not write back
        let mut uninit = DataStore::new(area.clone());
        uninit.add_client(client_draft("Ghost"));
        assert_eq!(uninit.clients().len(), 1);
        assert_eq!(area.read(STATE_KEY).unwrap(), saved_before);
    }

    #[test]
    fn test_create_fills_id_and_timestamp() {
        let (_, mut store) = ready_store();
        let client = store.add_client(client_draft("Alpha"));
        assert_eq!(client.id.len(), 9);
        assert!(client.start_date.contains('T'));

        let task = store.add_task(task_draft("Write hooks", &client.id));
        assert!(!task.created_at.is_empty());
        assert_ne!(task.id, client.id);
    }

    #[test]
    fn test_update_changes_only_patched_fields() {
        let (_, mut store) = ready_store();
        let created = store.add_client(client_draft("Alpha"));

        store.update_client(
            &created.id,
            ClientPatch {
                status: Some(ClientStatus::Active),
                ..Default::default()
            },
        );

        let updated = store
            .clients()
            .iter()
            .find(|c| c.id == created.id)
            .unwrap();
        assert_eq!(updated.status, ClientStatus::Active);
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.tier, created.tier);
        assert_eq!(updated.start_date, created.start_date);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let (area, mut store) = ready_store();
        let saved = area.read(STATE_KEY).unwrap();
        store.update_client(
            "no-such-id",
            ClientPatch {
                name: Some("Nobody".into()),
                ..Default::default()
            },
        );
        assert_eq!(store.clients().len(), 1);
        assert_eq!(area.read(STATE_KEY).unwrap(), saved);
    }

    #[test]
    fn test_delete_then_update_and_double_delete_are_noops() {
        let (_, mut store) = ready_store();
        let task = store.add_task(task_draft("Doomed", "1"));
        assert_eq!(store.tasks().len(), 1);

        store.delete_task(&task.id);
        assert_eq!(store.tasks().len(), 0);

        store.update_task(
            &task.id,
            TaskPatch {
                status: Some(TaskStatus::Done),
                ..Default::default()
            },
        );
        store.delete_task(&task.id);
        assert_eq!(store.tasks().len(), 0);
    }

    #[test]
    fn test_task_with_dangling_client_id_is_accepted() {
        let (_, mut store) = ready_store();
        let task = store.add_task(task_draft("Orphan work", "does-not-exist"));
        assert_eq!(task.client_id, "does-not-exist");
        assert_eq!(store.tasks().len(), 1);

        // Deleting the seed client leaves its post dangling too
        store.delete_client("1");
        assert_eq!(store.clients().len(), 0);
        assert_eq!(store.posts().len(), 1);
        assert_eq!(store.posts()[0].client_id, "1");
    }

    #[test]
    fn test_protocols_amend_but_never_delete() {
        let (_, mut store) = ready_store();
        let id = store.protocols()[0].id.clone();
        store.update_protocol(
            &id,
            ProtocolPatch {
                content: Some("Step 1: Welcome call".into()),
                ..Default::default()
            },
        );
        assert_eq!(store.protocols()[0].content, "Step 1: Welcome call");
        assert_eq!(store.protocols().len(), 2);
    }

    #[test]
    fn test_ids_stay_distinct_across_deletes() {
        let (_, mut store) = ready_store();
        let first = store.add_post(crate::model::PostDraft {
            client_id: "1".into(),
            platform: crate::model::Platform::Twitter,
            post_type: "Thread".into(),
            hook: "hook".into(),
            scheduled_date: String::new(),
            status: crate::model::PostStatus::Draft,
            pillar: String::new(),
        });
        store.delete_post(&first.id);

        let mut seen = HashSet::from([first.id]);
        for _ in 0..50 {
            let post = store.add_post(crate::model::PostDraft {
                client_id: "1".into(),
                platform: crate::model::Platform::Twitter,
                post_type: "Thread".into(),
                hook: "hook".into(),
                scheduled_date: String::new(),
                status: crate::model::PostStatus::Draft,
                pillar: String::new(),
            });
            assert!(seen.insert(post.id));
        }
    }

    proptest! {
        #[test]
        fn prop_create_count_matches_and_ids_distinct(count in 1usize..40) {
            let (_, mut store) = ready_store();
            let mut ids = HashSet::new();
            for i in 0..count {
                let task = store.add_task(task_draft(&format!("task {i}"), "1"));
                prop_assert!(ids.insert(task.id));
            }
            prop_assert_eq!(store.tasks().len(), count);
            // Insertion order preserved
            for (i, task) in store.tasks().iter().enumerate() {
                prop_assert_eq!(task.name.clone(), format!("task {i}"));
            }
        }
    }
}
