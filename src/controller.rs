//! Request Orchestration
//!
//! Runs each user operation against the backend, feeds the results through
//! [`AppState::apply`] and drains the effects that come back, in order.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use crate::api::{ApiClient, ApiError, NewContact, NewEmailMessage, NewPurchase, NewSupplier, SearchRequest, Transport};
use crate::models::{Contact, Session, Supplier};
use crate::session::SessionStorage;
use crate::state::{Action, AppState, ContactForm, Effect, PurchaseEditForm, PurchaseForm, SupplierForm};
use crate::text::split_hints;

/// Shared handle to the application state
pub trait StateHandle: Clone + 'static {
    /// Run the reducer and return the effects it asked for
    fn apply(&self, action: Action) -> Vec<Effect>;
    /// Read without subscribing; `None` once the state is gone
    fn snapshot<R>(&self, f: impl FnOnce(&AppState) -> R) -> Option<R>;
}

pub struct Controller<T, S, H> {
    api: ApiClient<T>,
    storage: Arc<S>,
    state: H,
}

impl<T, S, H: Clone> Clone for Controller<T, S, H> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            storage: Arc::clone(&self.storage),
            state: self.state.clone(),
        }
    }
}

impl<T, S, H> Controller<T, S, H>
where
    T: Transport,
    S: SessionStorage,
    H: StateHandle,
{
    pub fn new(api: ApiClient<T>, storage: S, state: H) -> Self {
        Self { api, storage: Arc::new(storage), state }
    }

    #[cfg(test)]
    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    #[cfg(test)]
    pub fn state(&self) -> &H {
        &self.state
    }

    /// Apply a local action and run whatever follows from it
    pub async fn dispatch(&self, action: Action) {
        let effects = self.state.apply(action);
        self.run(effects).await;
    }

    /// Drain effects first-in first-out; effects may enqueue more
    pub async fn run(&self, effects: Vec<Effect>) {
        let mut queue = VecDeque::from(effects);
        while let Some(effect) = queue.pop_front() {
            let next = self.perform(effect).await;
            queue.extend(next);
        }
    }

    async fn perform(&self, effect: Effect) -> Vec<Effect> {
        match effect {
            Effect::PersistSession(session) => {
                self.storage.save(&session);
                vec![]
            }
            Effect::ClearSession => {
                self.storage.clear();
                vec![]
            }
            Effect::LoadPurchases => self.load_purchases().await,
            Effect::LoadSuppliers(purchase_id) => self.load_suppliers(purchase_id).await,
            Effect::PreloadSearch(purchase_id) => self.preload_search(purchase_id).await,
            Effect::LoadEmails(purchase_id) => self.load_emails(purchase_id).await,
        }
    }

    fn token(&self) -> Option<String> {
        self.state.snapshot(|s| s.token().map(String::from)).flatten()
    }

    fn selected_purchase_id(&self) -> Option<i64> {
        self.state.snapshot(|s| s.selected_purchase_id).flatten()
    }

    fn purchase_terms(&self, purchase_id: i64) -> String {
        self.state
            .snapshot(|s| {
                s.purchases
                    .iter()
                    .find(|p| p.id == purchase_id)
                    .map(|p| p.terms().to_string())
            })
            .flatten()
            .unwrap_or_default()
    }

    fn fail(&self, err: ApiError) {
        tracing::info!(error = %err, "request failed");
        self.state.apply(Action::Failed(err.to_string()));
    }

    /// Run a busy-flagged operation; a failure becomes the page error
    async fn busy<F>(&self, clear_message: bool, operation: F)
    where
        F: std::future::Future<Output = Result<Vec<Effect>, ApiError>>,
    {
        self.state.apply(Action::Begin { clear_message });
        match operation.await {
            Ok(effects) => self.run(effects).await,
            Err(err) => self.fail(err),
        }
        self.state.apply(Action::Finish);
    }

    // ========================
    // Session
    // ========================

    /// Log in, persist the session and load purchases
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let token = self.api.login(email, password).await?;
        tracing::info!(email, "logged in");
        let session = Session { token: token.clone(), email: email.to_string() };
        self.dispatch(Action::Authenticated(session)).await;
        Ok(token)
    }

    /// Register, then log in with the same credentials
    pub async fn register(&self, email: &str, password: &str) -> Result<String, ApiError> {
        self.api.register(email, password).await?;
        tracing::info!(email, "registered");
        self.login(email, password).await
    }

    pub async fn logout(&self) {
        tracing::info!("logged out");
        self.dispatch(Action::LoggedOut).await;
    }

    // ========================
    // Purchases
    // ========================

    async fn load_purchases(&self) -> Vec<Effect> {
        let Some(token) = self.token() else { return vec![] };
        self.state.apply(Action::Begin { clear_message: false });
        let effects = match self.api.list_purchases(&token).await {
            Ok(purchases) => {
                tracing::debug!(count = purchases.len(), "purchases loaded");
                self.state.apply(Action::PurchasesLoaded(purchases))
            }
            Err(err) => {
                self.fail(err);
                vec![]
            }
        };
        self.state.apply(Action::Finish);
        effects
    }

    pub async fn refresh_purchases(&self) {
        let effects = self.load_purchases().await;
        self.run(effects).await;
    }

    pub async fn select_purchase(&self, purchase_id: i64) {
        self.dispatch(Action::SelectPurchase(purchase_id)).await;
    }

    pub async fn create_purchase(&self, form: &PurchaseForm) {
        let Some(token) = self.token() else { return };
        self.busy(true, async {
            let purchase = NewPurchase { custom_name: &form.custom_name, terms_text: &form.terms_text };
            let created = self.api.create_purchase(&token, &purchase).await?;
            tracing::info!(purchase_id = created.id, "purchase created");
            Ok(self.state.apply(Action::PurchaseCreated))
        })
        .await;
    }

    pub async fn update_purchase(&self, form: &PurchaseEditForm) {
        let (Some(token), Some(purchase_id)) = (self.token(), self.selected_purchase_id()) else { return };
        let update = match form.to_update() {
            Ok(update) => update,
            Err(message) => {
                self.state.apply(Action::Failed(message));
                return;
            }
        };
        self.busy(true, async {
            self.api.update_purchase(&token, purchase_id, &update).await?;
            tracing::info!(purchase_id, "purchase updated");
            Ok(self.state.apply(Action::PurchaseUpdated))
        })
        .await;
    }

    // ========================
    // Suppliers & Contacts
    // ========================

    async fn load_suppliers(&self, purchase_id: i64) -> Vec<Effect> {
        let Some(token) = self.token() else { return vec![] };
        match self.fetch_suppliers(&token, purchase_id).await {
            Ok((suppliers, contacts)) => {
                self.state.apply(Action::SuppliersLoaded { purchase_id, suppliers, contacts })
            }
            Err(err) if self.selected_purchase_id() == Some(purchase_id) => {
                self.fail(err);
                vec![]
            }
            Err(err) => {
                tracing::debug!(purchase_id, error = %err, "dropping supplier failure for a purchase that is no longer selected");
                vec![]
            }
        }
    }

    /// Suppliers, then one contacts request per supplier, in supplier order
    async fn fetch_suppliers(
        &self,
        token: &str,
        purchase_id: i64,
    ) -> Result<(Vec<Supplier>, HashMap<i64, Vec<Contact>>), ApiError> {
        let suppliers = self.api.list_suppliers(token, purchase_id).await?;
        let mut contacts = HashMap::with_capacity(suppliers.len());
        for supplier in &suppliers {
            contacts.insert(supplier.id, self.api.list_contacts(token, supplier.id).await?);
        }
        tracing::debug!(purchase_id, suppliers = suppliers.len(), "suppliers loaded");
        Ok((suppliers, contacts))
    }

    pub async fn refresh_suppliers(&self) {
        let Some(purchase_id) = self.selected_purchase_id() else { return };
        let effects = self.load_suppliers(purchase_id).await;
        self.run(effects).await;
    }

    /// Create the supplier, then one contact per draft with a non-blank email
    pub async fn create_supplier(&self, form: &SupplierForm) {
        let (Some(token), Some(purchase_id)) = (self.token(), self.selected_purchase_id()) else { return };
        self.busy(true, async {
            let supplier = NewSupplier {
                company_name: &form.company_name,
                website_url: &form.website_url,
                reason: Some(form.reason.as_str()).filter(|r| !r.trim().is_empty()),
            };
            let created = self.api.create_supplier(&token, purchase_id, &supplier).await?;
            for draft in form.contacts.iter().filter(|d| !d.email.trim().is_empty()) {
                let contact = NewContact { email: draft.email.trim(), source_url: None, is_selected_for_request: false };
                self.api.create_contact(&token, purchase_id, created.id, &contact).await?;
            }
            tracing::info!(purchase_id, supplier_id = created.id, "supplier created");
            Ok(self.state.apply(Action::SupplierCreated { purchase_id }))
        })
        .await;
    }

    pub async fn create_contact(&self, supplier_id: i64, form: &ContactForm) {
        let (Some(token), Some(purchase_id)) = (self.token(), self.selected_purchase_id()) else { return };
        let email = form.email.trim();
        if email.is_empty() {
            self.state.apply(Action::Failed("Укажите email контакта".to_string()));
            return;
        }
        self.busy(true, async {
            let contact = NewContact {
                email,
                source_url: Some(form.source_url.trim()).filter(|url| !url.is_empty()),
                is_selected_for_request: form.is_selected_for_request,
            };
            self.api.create_contact(&token, purchase_id, supplier_id, &contact).await?;
            tracing::info!(purchase_id, supplier_id, "contact created");
            Ok(self.state.apply(Action::ContactCreated { purchase_id }))
        })
        .await;
    }

    // ========================
    // Search Task
    // ========================

    /// Post terms plus parsed hints; the response replaces the search state
    pub async fn run_search(&self, hints: &str) {
        let (Some(token), Some(purchase_id)) = (self.token(), self.selected_purchase_id()) else { return };
        let terms = self.purchase_terms(purchase_id);
        self.busy(false, async {
            let request = SearchRequest { terms_text: &terms, hints: split_hints(hints) };
            let state = self.api.search_suppliers(&token, purchase_id, &request).await?;
            tracing::info!(purchase_id, task_id = state.task_id, status = %state.status, "search task updated");
            Ok(self.state.apply(Action::SearchLoaded { purchase_id, state }))
        })
        .await;
    }

    /// Implicit read-back of the search state; failures are only logged
    async fn preload_search(&self, purchase_id: i64) -> Vec<Effect> {
        let Some(token) = self.token() else { return vec![] };
        let terms = self.purchase_terms(purchase_id);
        let request = SearchRequest { terms_text: &terms, hints: Vec::new() };
        match self.api.search_suppliers(&token, purchase_id, &request).await {
            Ok(state) => self.state.apply(Action::SearchLoaded { purchase_id, state }),
            Err(err) => {
                tracing::warn!(purchase_id, error = %err, "failed to preload search state");
                vec![]
            }
        }
    }

    // ========================
    // Email Draft & Log
    // ========================

    pub async fn generate_draft(&self) {
        let (Some(token), Some(purchase_id)) = (self.token(), self.selected_purchase_id()) else { return };
        self.busy(false, async {
            let draft = self.api.generate_email_draft(&token, purchase_id).await?;
            Ok(self.state.apply(Action::DraftLoaded { purchase_id, draft }))
        })
        .await;
    }

    /// Store the current draft as an outgoing message
    pub async fn save_draft(&self) {
        let (Some(token), Some(purchase_id)) = (self.token(), self.selected_purchase_id()) else { return };
        let Some(draft) = self.state.snapshot(|s| s.email_draft.clone()).flatten() else { return };
        self.busy(true, async {
            let message = NewEmailMessage {
                subject: &draft.subject,
                body: &draft.body,
                direction: "outgoing",
            };
            self.api.create_email(&token, purchase_id, &message).await?;
            Ok(self.state.apply(Action::EmailSaved { purchase_id }))
        })
        .await;
    }

    async fn load_emails(&self, purchase_id: i64) -> Vec<Effect> {
        let Some(token) = self.token() else { return vec![] };
        match self.api.list_emails(&token, purchase_id).await {
            Ok(emails) => self.state.apply(Action::EmailsLoaded { purchase_id, emails }),
            Err(err) => {
                tracing::warn!(purchase_id, error = %err, "failed to load email log");
                vec![]
            }
        }
    }
}
