// ============================================================================
// KIOSK STORE - fetch / filter / paginate / mutate cycle for the kiosk list
// ============================================================================
// Owns the list state; components read snapshots and go through the named
// transitions below. Every fetch stamps a ticket and only the latest ticket
// may write its response, so results follow issue order, not arrival order.
// Filter changes are debounced the same way: a filter fetch whose ticket was
// superseded while its timer ran is dropped.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::config::CONFIG;
use crate::error::{ApiError, ErrorInfo};
use crate::models::{FilterPatch, Kiosk, KioskDraft, QueryParams, SortOrder};
use crate::services::KioskService;
use crate::state::{ListState, LoadState, ReactiveState, SubscriptionId};
use crate::utils::Sleeper;

struct Inner {
    state: ReactiveState<ListState<Kiosk>>,
    service: KioskService,
    sleeper: Rc<dyn Sleeper>,
    debounce: Duration,
    fetch_ticket: Cell<u64>,
    filter_ticket: Cell<u64>,
}

/// Shared handle; clones point at the same store.
#[derive(Clone)]
pub struct KioskStore {
    inner: Rc<Inner>,
}

impl PartialEq for KioskStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl KioskStore {
    pub fn new(
        service: KioskService,
        sleeper: Rc<dyn Sleeper>,
        params: QueryParams,
        debounce: Duration,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: ReactiveState::new(ListState::new(params)),
                service,
                sleeper,
                debounce,
                fetch_ticket: Cell::new(0),
                filter_ticket: Cell::new(0),
            }),
        }
    }

    /// Store with default params and the configured debounce window
    pub fn from_config(service: KioskService, sleeper: Rc<dyn Sleeper>) -> Self {
        Self::new(
            service,
            sleeper,
            QueryParams::default(),
            CONFIG.filter_debounce(),
        )
    }

    pub fn snapshot(&self) -> ListState<Kiosk> {
        self.inner.state.snapshot()
    }

    pub fn params(&self) -> QueryParams {
        self.inner.state.get().params.clone()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.inner.state.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.state.unsubscribe(id);
    }

    /// Loads the page described by the current params. Failures are kept
    /// in `load.error` and the previous result stays visible.
    pub async fn fetch(&self) {
        let ticket = self.inner.fetch_ticket.get() + 1;
        self.inner.fetch_ticket.set(ticket);

        let params = self.inner.state.update(|s| {
            s.load = LoadState::loading();
            s.params.clone()
        });
        log::debug!("🔄 Fetch #{} (page {}, {})", ticket, params.page, params.query_string());

        let outcome = self.inner.service.list(&params).await;

        let latest = self.inner.fetch_ticket.get();
        if ticket != latest {
            log::debug!("⏭️ Dropping response #{}, #{} is newer", ticket, latest);
            return;
        }

        match outcome {
            Ok(result) => self.inner.state.update(|s| {
                s.result = result;
                s.load = LoadState::settled();
            }),
            Err(e) => {
                log::error!("❌ Loading kiosks failed: {}", e);
                self.inner
                    .state
                    .update(|s| s.load = LoadState::failed(ErrorInfo::from(&e)));
            }
        }
    }

    /// Manual reload with unchanged params
    pub async fn refetch(&self) {
        self.fetch().await;
    }

    pub async fn change_page(&self, page: u32) {
        log::debug!("📄 Page -> {}", page);
        self.inner.state.update(|s| s.params.set_page(page));
        self.fetch().await;
    }

    pub async fn change_sort(&self, sort_by: &str, order: SortOrder) {
        log::debug!("↕️ Sort -> {} {}", sort_by, order);
        self.inner.state.update(|s| s.params.set_sort(sort_by, order));
        self.fetch().await;
    }

    /// Merges `patch` (back to page 1) and fetches once the debounce window
    /// passes without another filter change. Returns `true` when this call
    /// was the one that fetched.
    pub async fn change_filter(&self, patch: FilterPatch) -> bool {
        let ticket = self.inner.filter_ticket.get() + 1;
        self.inner.filter_ticket.set(ticket);
        self.inner.state.update(|s| s.params.apply_filter(patch));

        self.inner.sleeper.sleep(self.inner.debounce).await;

        if ticket != self.inner.filter_ticket.get() {
            log::debug!("⏭️ Filter change #{} superseded", ticket);
            return false;
        }
        self.fetch().await;
        true
    }

    /// Clears every filter (filter form reset).
    pub async fn reset_filters(&self) -> bool {
        self.change_filter(FilterPatch::cleared()).await
    }

    /// Creates a kiosk, then reloads from page 1 before returning. On
    /// failure params are left alone and the error is handed back so the
    /// dialog can stay open.
    pub async fn create(&self, draft: &KioskDraft) -> Result<Option<Kiosk>, ApiError> {
        match self.inner.service.create(draft).await {
            Ok(created) => {
                log::info!("✅ Kiosk created: {}", draft.name);
                self.after_mutation(true).await;
                Ok(created)
            }
            Err(e) => Err(self.mutation_failed("create", e)),
        }
    }

    /// Replaces a kiosk record, then reloads from page 1.
    pub async fn update(&self, kiosk: &Kiosk) -> Result<Kiosk, ApiError> {
        match self.inner.service.update(kiosk).await {
            Ok(updated) => {
                log::info!("✅ Kiosk updated: {}", kiosk.id);
                self.after_mutation(true).await;
                Ok(updated)
            }
            Err(e) => Err(self.mutation_failed("update", e)),
        }
    }

    /// Deletes a kiosk and reloads the current page, stepping back one page
    /// if it came back empty.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        match self.inner.service.delete(id).await {
            Ok(()) => {
                log::info!("🗑️ Kiosk deleted: {}", id);
                self.after_mutation(false).await;

                let (emptied, page) = {
                    let state = self.inner.state.get();
                    (
                        state.load.error.is_none() && state.result.items.is_empty(),
                        state.params.page,
                    )
                };
                if emptied && page > 1 {
                    self.change_page(page - 1).await;
                }
                Ok(())
            }
            Err(e) => Err(self.mutation_failed("delete", e)),
        }
    }

    async fn after_mutation(&self, back_to_first_page: bool) {
        self.inner.state.update(|s| {
            s.mutation_error = None;
            if back_to_first_page {
                s.params.reset_page();
            }
        });
        self.fetch().await;
    }

    fn mutation_failed(&self, action: &str, error: ApiError) -> ApiError {
        log::error!("❌ Kiosk {} failed: {}", action, error);
        self.inner
            .state
            .update(|s| s.mutation_error = Some(ErrorInfo::from(&error)));
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::HttpResponse;
    use crate::testing::{kiosk, list_body, test_client, InstantSleeper, ManualSleeper, MockTransport};
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use serde_json::json;
    use std::cell::RefCell;

    const DEBOUNCE: Duration = Duration::from_millis(300);

    fn store_with(transport: &Rc<MockTransport>, sleeper: Rc<dyn Sleeper>) -> KioskStore {
        let service = KioskService::new(test_client(transport.clone()));
        KioskStore::new(service, sleeper, QueryParams::new(10, "kioskId"), DEBOUNCE)
    }

    fn store(transport: &Rc<MockTransport>) -> KioskStore {
        store_with(transport, Rc::new(InstantSleeper))
    }

    fn names(store: &KioskStore) -> Vec<String> {
        store
            .snapshot()
            .result
            .items
            .into_iter()
            .map(|k| k.name)
            .collect()
    }

    fn page_reply(names: &[&str], total: u64) -> Result<HttpResponse, ApiError> {
        Ok(HttpResponse::new(200, list_body(names, json!(total)).to_string()))
    }

    #[test]
    fn fetch_replaces_result_and_settles() {
        let transport = Rc::new(MockTransport::default());
        transport.respond_json(200, list_body(&["A", "B"], json!("12")));
        let store = store(&transport);

        block_on(store.fetch());

        let state = store.snapshot();
        assert_eq!(names(&store), vec!["A", "B"]);
        assert_eq!(state.result.total_count, 12);
        assert_eq!(state.result.page_count, 2);
        assert_eq!(state.load, LoadState::settled());
    }

    #[test]
    fn loading_flag_is_raised_while_in_flight() {
        let transport = Rc::new(MockTransport::default());
        let reply = transport.defer();
        let store = store(&transport);
        let mut pool = LocalPool::new();

        let s = store.clone();
        pool.spawner().spawn_local(async move { s.fetch().await }).unwrap();
        pool.run_until_stalled();
        assert_eq!(store.snapshot().load, LoadState::loading());

        reply.send(page_reply(&["A"], 1)).unwrap();
        pool.run_until_stalled();
        assert!(!store.snapshot().load.is_loading);
    }

    #[test]
    fn later_request_wins_even_when_it_arrives_first() {
        let transport = Rc::new(MockTransport::default());
        let reply_a = transport.defer();
        let reply_b = transport.defer();
        let store = store(&transport);
        let mut pool = LocalPool::new();

        let s = store.clone();
        pool.spawner().spawn_local(async move { s.fetch().await }).unwrap();
        pool.run_until_stalled();
        let s = store.clone();
        pool.spawner().spawn_local(async move { s.fetch().await }).unwrap();
        pool.run_until_stalled();
        assert_eq!(transport.request_count(), 2);

        reply_b.send(page_reply(&["B"], 1)).unwrap();
        pool.run_until_stalled();
        reply_a.send(page_reply(&["A"], 1)).unwrap();
        pool.run_until_stalled();

        assert_eq!(names(&store), vec!["B"]);
        assert_eq!(store.snapshot().load, LoadState::settled());
    }

    #[test]
    fn earlier_response_is_overwritten_by_the_later_one() {
        let transport = Rc::new(MockTransport::default());
        let reply_a = transport.defer();
        let reply_b = transport.defer();
        let store = store(&transport);
        let mut pool = LocalPool::new();

        for _ in 0..2 {
            let s = store.clone();
            pool.spawner().spawn_local(async move { s.fetch().await }).unwrap();
            pool.run_until_stalled();
        }

        reply_a.send(page_reply(&["A"], 1)).unwrap();
        pool.run_until_stalled();
        // A is stale: it must not be shown, and loading continues for B
        assert!(names(&store).is_empty());
        assert!(store.snapshot().load.is_loading);

        reply_b.send(page_reply(&["B"], 1)).unwrap();
        pool.run_until_stalled();
        assert_eq!(names(&store), vec!["B"]);
    }

    #[test]
    fn failed_fetch_keeps_the_previous_result() {
        let transport = Rc::new(MockTransport::default());
        transport.respond_json(200, list_body(&["A"], json!(1)));
        transport.respond_json(503, json!({ "message": "maintenance" }));
        let store = store(&transport);

        block_on(store.fetch());
        let before = store.snapshot().result;
        block_on(store.fetch());

        let after = store.snapshot();
        assert_eq!(after.result, before);
        assert!(!after.load.is_loading);
        let error = after.load.error.unwrap();
        assert_eq!(error.status, Some(503));
        assert_eq!(error.message, "maintenance (HTTP 503)");
    }

    #[test]
    fn expired_session_is_flagged_on_the_list() {
        let transport = Rc::new(MockTransport::default());
        transport.respond_json(401, json!({}));
        let store = store(&transport);

        block_on(store.fetch());
        assert!(store.snapshot().load.error.unwrap().auth_expired);
    }

    #[test]
    fn repeated_fetches_converge() {
        let transport = Rc::new(MockTransport::default());
        for _ in 0..3 {
            transport.respond_json(200, list_body(&["A", "B"], json!(2)));
        }
        let store = store(&transport);

        block_on(store.fetch());
        let first = store.snapshot();
        block_on(store.fetch());
        block_on(store.refetch());

        assert_eq!(store.snapshot(), first);
        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        assert!(urls.iter().all(|u| *u == urls[0]));
    }

    #[test]
    fn page_change_keeps_filters_and_fetches_that_page() {
        let transport = Rc::new(MockTransport::default());
        transport.respond_json(200, list_body(&["K"], json!(30)));
        let store_with_filter = store(&transport);
        block_on(store_with_filter.change_filter(FilterPatch::keyword("lobby")));
        let before = store_with_filter.params();

        transport.respond_json(200, list_body(&["L"], json!(30)));
        block_on(store_with_filter.change_page(3));

        let after = store_with_filter.params();
        assert_eq!(after.page, 3);
        assert!(after.same_filters(&before));
        assert!(transport.last_request().unwrap().url.contains("page=3&"));
        assert!(transport.last_request().unwrap().url.contains("keyword=lobby"));
    }

    #[test]
    fn sort_change_stays_on_the_current_page() {
        let transport = Rc::new(MockTransport::default());
        transport.respond_json(200, list_body(&[], json!(50)));
        transport.respond_json(200, list_body(&[], json!(50)));
        let store = store(&transport);

        block_on(store.change_page(4));
        block_on(store.change_sort("kioskNm", SortOrder::Desc));

        let params = store.params();
        assert_eq!(params.page, 4);
        assert_eq!(params.sort_by, "kioskNm");
        assert!(transport
            .last_request()
            .unwrap()
            .url
            .contains("page=4&pageRowNum=10&sortBy=kioskNm&sortOrder=desc"));
    }

    #[test]
    fn filter_change_always_lands_on_page_one() {
        let patches = vec![
            FilterPatch::keyword("x"),
            FilterPatch::search(""),
            FilterPatch::cleared(),
            FilterPatch::default(),
        ];
        for patch in patches {
            let transport = Rc::new(MockTransport::default());
            transport.respond_json(200, list_body(&[], json!(100)));
            transport.respond_json(200, list_body(&[], json!(100)));
            let store = store(&transport);

            block_on(store.change_page(6));
            assert!(block_on(store.change_filter(patch)));
            assert_eq!(store.params().page, 1);
            assert!(transport.last_request().unwrap().url.contains("page=1&"));
        }
    }

    #[test]
    fn rapid_filter_changes_coalesce_into_one_fetch() {
        let transport = Rc::new(MockTransport::default());
        let sleeper = Rc::new(ManualSleeper::default());
        let store = store_with(&transport, sleeper.clone());
        let outcomes = Rc::new(RefCell::new(Vec::new()));
        let mut pool = LocalPool::new();

        for keyword in ["a", "ab"] {
            let s = store.clone();
            let outcomes = outcomes.clone();
            pool.spawner()
                .spawn_local(async move {
                    let fetched = s.change_filter(FilterPatch::keyword(keyword)).await;
                    outcomes.borrow_mut().push((keyword, fetched));
                })
                .unwrap();
            pool.run_until_stalled();
        }

        assert_eq!(sleeper.pending(), 2);
        assert_eq!(sleeper.durations(), vec![DEBOUNCE, DEBOUNCE]);
        assert_eq!(transport.request_count(), 0);
        assert_eq!(store.params().keyword, "ab");

        transport.respond_json(200, list_body(&["Lobby"], json!(1)));
        sleeper.fire_all();
        pool.run_until_stalled();

        assert_eq!(sleeper.pending(), 0);
        assert_eq!(transport.request_count(), 1);
        let url = transport.last_request().unwrap().url;
        assert!(url.contains("keyword=ab"));
        assert!(!url.contains("keyword=a&"));
        let mut outcomes = outcomes.borrow().clone();
        outcomes.sort();
        assert_eq!(outcomes, vec![("a", false), ("ab", true)]);
    }

    #[test]
    fn filter_fetch_supersedes_an_older_in_flight_request() {
        let transport = Rc::new(MockTransport::default());
        let sleeper = Rc::new(ManualSleeper::default());
        let store = store_with(&transport, sleeper.clone());
        let mut pool = LocalPool::new();

        let old_reply = transport.defer();
        let s = store.clone();
        pool.spawner().spawn_local(async move { s.fetch().await }).unwrap();
        pool.run_until_stalled();

        let s = store.clone();
        pool.spawner()
            .spawn_local(async move {
                s.change_filter(FilterPatch::keyword("gate")).await;
            })
            .unwrap();
        pool.run_until_stalled();
        transport.respond_json(200, list_body(&["Gate"], json!(1)));
        sleeper.fire_all();
        pool.run_until_stalled();

        old_reply.send(page_reply(&["Old"], 1)).unwrap();
        pool.run_until_stalled();
        assert_eq!(names(&store), vec!["Gate"]);
    }

    #[test]
    fn successful_create_refetches_page_one_before_returning() {
        let transport = Rc::new(MockTransport::default());
        transport.respond_json(200, list_body(&[], json!(40)));
        let store = store(&transport);
        block_on(store.change_page(3));

        transport.respond_json(200, json!({ "kioskId": "KS-NEW", "kioskNm": "New", "kioskTp": "TABLE", "status": "active", "position": "2F" }));
        transport.respond_json(200, list_body(&["New"], json!(41)));

        let draft = KioskDraft {
            name: "New".to_string(),
            kiosk_type: crate::models::KioskType::Table,
            status: crate::models::KioskStatus::Active,
            location: "2F".to_string(),
            info: None,
            installed_at: None,
        };
        let created = block_on(store.create(&draft)).unwrap();

        assert_eq!(created.map(|k| k.id).as_deref(), Some("KS-NEW"));
        assert_eq!(store.params().page, 1);
        let requests = transport.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[1].method, crate::services::HttpMethod::Post);
        assert!(requests[2].url.contains("page=1&"));
        assert_eq!(names(&store), vec!["New"]);
    }

    #[test]
    fn failed_create_leaves_params_and_reports() {
        let transport = Rc::new(MockTransport::default());
        transport.respond_json(200, list_body(&["A"], json!(40)));
        let store = store(&transport);
        block_on(store.change_page(2));
        let before = store.snapshot();

        transport.respond_json(422, json!({ "message": "name taken" }));
        let draft = KioskDraft {
            name: "A".to_string(),
            kiosk_type: Default::default(),
            status: Default::default(),
            location: "1F".to_string(),
            info: None,
            installed_at: None,
        };
        let err = block_on(store.create(&draft)).unwrap_err();

        assert_eq!(
            err,
            ApiError::RequestFailed {
                status: 422,
                message: "name taken".to_string()
            }
        );
        let after = store.snapshot();
        assert_eq!(after.params, before.params);
        assert_eq!(after.result, before.result);
        assert_eq!(after.mutation_error.unwrap().status, Some(422));
        assert_eq!(transport.request_count(), 2);
    }

    #[test]
    fn successful_update_refetches_page_one() {
        let transport = Rc::new(MockTransport::default());
        transport.respond_json(200, list_body(&[], json!(40)));
        let store = store(&transport);
        block_on(store.change_page(2));

        transport.respond_text(204, "");
        transport.respond_json(200, list_body(&["Renamed"], json!(40)));

        let record = kiosk("KS-1", "Renamed");
        let updated = block_on(store.update(&record)).unwrap();

        assert_eq!(updated, record);
        assert_eq!(store.params().page, 1);
        assert_eq!(names(&store), vec!["Renamed"]);
        assert_eq!(store.snapshot().mutation_error, None);
    }

    #[test]
    fn deleting_the_last_row_of_a_page_steps_back() {
        let transport = Rc::new(MockTransport::default());
        transport.respond_json(200, list_body(&["Z"], json!(21)));
        let store = store(&transport);
        block_on(store.change_page(3));

        transport.respond_text(204, "");
        transport.respond_json(200, list_body(&[], json!(20)));
        transport.respond_json(200, list_body(&["S", "T"], json!(20)));
        block_on(store.delete("KS-Z")).unwrap();

        assert_eq!(store.params().page, 2);
        assert_eq!(names(&store), vec!["S", "T"]);
        assert_eq!(store.snapshot().result.page_count, 2);
    }

    #[test]
    fn failed_delete_is_returned() {
        let transport = Rc::new(MockTransport::default());
        transport.respond_json(404, json!({ "message": "gone" }));
        let store = store(&transport);

        assert!(block_on(store.delete("KS-1")).is_err());
        assert_eq!(transport.request_count(), 1);
        assert_eq!(store.snapshot().mutation_error.unwrap().message, "gone (HTTP 404)");
    }

    #[test]
    fn subscribers_hear_about_transitions() {
        let transport = Rc::new(MockTransport::default());
        transport.respond_json(200, list_body(&["A"], json!(1)));
        let store = store(&transport);
        let hits = Rc::new(Cell::new(0));

        let counter = hits.clone();
        let id = store.subscribe(move || counter.set(counter.get() + 1));
        block_on(store.fetch());
        // loading + settled
        assert_eq!(hits.get(), 2);

        store.unsubscribe(id);
        transport.respond_json(200, list_body(&["A"], json!(1)));
        block_on(store.fetch());
        assert_eq!(hits.get(), 2);
    }
}
