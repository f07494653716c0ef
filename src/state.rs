//! Application State
//!
//! The whole view state lives in [`AppState`]. Every change goes through
//! [`AppState::apply`], which returns the follow-up [`Effect`]s (network loads,
//! session persistence) for the controller to run.

use std::collections::{BTreeSet, HashMap};

use reactive_stores::Store;

use crate::api::PurchaseUpdate;
use crate::models::{Contact, EmailDraft, EmailMessage, Purchase, SearchTaskState, Session, Supplier};
use crate::selection::{self, RowKey};

// ========================
// Form Drafts
// ========================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PurchaseForm {
    pub custom_name: String,
    pub terms_text: String,
}

/// Edit form of the selected purchase; numbers are kept as typed
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PurchaseEditForm {
    pub custom_name: String,
    pub terms_text: String,
    pub status: String,
    pub nmck_value: String,
    pub nmck_currency: String,
}

impl PurchaseEditForm {
    pub fn from_purchase(purchase: &Purchase) -> Self {
        Self {
            custom_name: purchase.custom_name.clone().unwrap_or_default(),
            terms_text: purchase.terms().to_string(),
            status: purchase.status.clone(),
            nmck_value: purchase.nmck_value.map(|v| v.to_string()).unwrap_or_default(),
            nmck_currency: purchase.nmck_currency.clone().unwrap_or_default(),
        }
    }

    /// Build the PATCH body; blank optional fields are left out
    pub fn to_update(&self) -> Result<PurchaseUpdate, String> {
        let nmck_value = match self.nmck_value.trim() {
            "" => None,
            raw => Some(
                raw.replace(',', ".")
                    .replace(' ', "")
                    .parse::<f64>()
                    .map_err(|_| format!("НМЦК должна быть числом: {}", raw))?,
            ),
        };
        Ok(PurchaseUpdate {
            custom_name: Some(self.custom_name.trim().to_string()),
            terms_text: Some(self.terms_text.clone()),
            status: non_blank(&self.status),
            nmck_value,
            nmck_currency: non_blank(&self.nmck_currency),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SupplierForm {
    pub company_name: String,
    pub website_url: String,
    pub reason: String,
    pub contacts: Vec<ContactDraft>,
}

impl Default for SupplierForm {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            website_url: String::new(),
            reason: String::new(),
            contacts: vec![ContactDraft::default()],
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub email: String,
    pub source_url: String,
    pub is_selected_for_request: bool,
}

/// Which dialog is open
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modal {
    NewPurchase,
    EditPurchase,
    NewSupplier,
    /// Add-contact dialog for the given supplier
    NewContact(i64),
}

/// Single-field edits of the form drafts
#[derive(Clone, Debug, PartialEq)]
pub enum FormEdit {
    PurchaseName(String),
    PurchaseTerms(String),
    EditName(String),
    EditTerms(String),
    EditStatus(String),
    EditNmckValue(String),
    EditNmckCurrency(String),
    SupplierCompany(String),
    SupplierWebsite(String),
    SupplierReason(String),
    SupplierContactEmail(usize, String),
    AddSupplierContact,
    RemoveSupplierContact(usize),
    ContactEmail(String),
    ContactSourceUrl(String),
    ContactSelected(bool),
    SearchHints(String),
}

// ========================
// Actions and Effects
// ========================

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Authenticated(Session),
    LoggedOut,
    /// Operation started: busy on, error cleared
    Begin { clear_message: bool },
    Finish,
    Failed(String),
    PurchasesLoaded(Vec<Purchase>),
    SelectPurchase(i64),
    SuppliersLoaded {
        purchase_id: i64,
        suppliers: Vec<Supplier>,
        contacts: HashMap<i64, Vec<Contact>>,
    },
    SearchLoaded { purchase_id: i64, state: SearchTaskState },
    DraftLoaded { purchase_id: i64, draft: EmailDraft },
    EmailsLoaded { purchase_id: i64, emails: Vec<EmailMessage> },
    PurchaseCreated,
    PurchaseUpdated,
    SupplierCreated { purchase_id: i64 },
    ContactCreated { purchase_id: i64 },
    EmailSaved { purchase_id: i64 },
    ToggleRow(RowKey),
    ToggleAllRows,
    ToggleDetails,
    OpenModal(Modal),
    CloseModal,
    Edit(FormEdit),
}

/// Follow-up work requested by a state transition
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    PersistSession(Session),
    ClearSession,
    LoadPurchases,
    LoadSuppliers(i64),
    PreloadSearch(i64),
    LoadEmails(i64),
}

// ========================
// State
// ========================

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Present iff the user is logged in
    pub session: Option<Session>,
    pub busy: bool,
    pub error: Option<String>,
    pub message: Option<String>,
    pub purchases: Vec<Purchase>,
    pub selected_purchase_id: Option<i64>,
    pub suppliers: Vec<Supplier>,
    /// Contacts keyed by supplier id
    pub contacts_by_supplier: HashMap<i64, Vec<Contact>>,
    /// Always a subset of the loaded contact rows
    pub selected_rows: BTreeSet<RowKey>,
    pub search_task: Option<SearchTaskState>,
    pub email_draft: Option<EmailDraft>,
    pub emails: Vec<EmailMessage>,
    pub details_expanded: bool,
    pub modal: Option<Modal>,
    pub purchase_form: PurchaseForm,
    pub edit_form: PurchaseEditForm,
    pub supplier_form: SupplierForm,
    pub contact_form: ContactForm,
    pub search_hints: String,
}

impl AppState {
    /// Initial state seeded from persisted storage
    pub fn restore(session: Option<Session>) -> Self {
        Self { session, ..Default::default() }
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn selected_purchase(&self) -> Option<&Purchase> {
        let id = self.selected_purchase_id?;
        self.purchases.iter().find(|p| p.id == id)
    }

    pub fn contact_rows(&self) -> Vec<RowKey> {
        selection::contact_rows(&self.suppliers, &self.contacts_by_supplier)
    }

    pub fn all_rows_selected(&self) -> bool {
        selection::all_selected(&self.selected_rows, &self.contact_rows())
    }

    /// Apply one action and return the effects it triggers
    pub fn apply(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Authenticated(session) => {
                self.error = None;
                self.session = Some(session.clone());
                vec![Effect::PersistSession(session), Effect::LoadPurchases]
            }
            Action::LoggedOut => {
                *self = AppState::default();
                vec![Effect::ClearSession]
            }
            Action::Begin { clear_message } => {
                self.busy = true;
                self.error = None;
                if clear_message {
                    self.message = None;
                }
                vec![]
            }
            Action::Finish => {
                self.busy = false;
                vec![]
            }
            Action::Failed(message) => {
                self.error = Some(message);
                vec![]
            }
            Action::PurchasesLoaded(purchases) => {
                if self.session.is_none() {
                    tracing::debug!("dropping purchase list received without a session");
                    return vec![];
                }
                let first = purchases.first().map(|p| p.id);
                let kept = self.selected_purchase_id.filter(|id| purchases.iter().any(|p| p.id == *id));
                self.purchases = purchases;
                match (kept, first) {
                    (Some(id), _) => self.preload(id),
                    (None, Some(first)) => self.select(first),
                    (None, None) => {
                        self.clear_selection();
                        vec![]
                    }
                }
            }
            Action::SelectPurchase(id) => self.select(id),
            Action::SuppliersLoaded { purchase_id, suppliers, contacts } => {
                if self.is_current(purchase_id) {
                    self.suppliers = suppliers;
                    self.contacts_by_supplier = contacts;
                    self.selected_rows.clear();
                }
                vec![]
            }
            Action::SearchLoaded { purchase_id, state } => {
                if self.is_current(purchase_id) {
                    self.search_task = Some(state);
                }
                vec![]
            }
            Action::DraftLoaded { purchase_id, draft } => {
                if self.is_current(purchase_id) {
                    self.email_draft = Some(draft);
                }
                vec![]
            }
            Action::EmailsLoaded { purchase_id, emails } => {
                if self.is_current(purchase_id) {
                    self.emails = emails;
                }
                vec![]
            }
            Action::PurchaseCreated => {
                self.purchase_form = PurchaseForm::default();
                self.message = Some("Закупка создана".to_string());
                self.close_modal(Modal::NewPurchase);
                vec![Effect::LoadPurchases]
            }
            Action::PurchaseUpdated => {
                self.message = Some("Закупка обновлена".to_string());
                self.close_modal(Modal::EditPurchase);
                vec![Effect::LoadPurchases]
            }
            Action::SupplierCreated { purchase_id } => {
                self.supplier_form = SupplierForm::default();
                self.message = Some("Поставщик добавлен".to_string());
                self.close_modal(Modal::NewSupplier);
                vec![Effect::LoadSuppliers(purchase_id)]
            }
            Action::ContactCreated { purchase_id } => {
                self.contact_form = ContactForm::default();
                self.message = Some("Контакт добавлен".to_string());
                if matches!(self.modal, Some(Modal::NewContact(_))) {
                    self.modal = None;
                }
                vec![Effect::LoadSuppliers(purchase_id)]
            }
            Action::EmailSaved { purchase_id } => {
                self.message = Some("Письмо сохранено".to_string());
                vec![Effect::LoadEmails(purchase_id)]
            }
            Action::ToggleRow(row) => {
                if self.contact_rows().contains(&row) {
                    selection::toggle_row(&mut self.selected_rows, row);
                }
                vec![]
            }
            Action::ToggleAllRows => {
                let rows = self.contact_rows();
                selection::toggle_all(&mut self.selected_rows, &rows);
                vec![]
            }
            Action::ToggleDetails => {
                self.details_expanded = !self.details_expanded;
                vec![]
            }
            Action::OpenModal(modal) => {
                match modal {
                    Modal::EditPurchase => {
                        let Some(purchase) = self.selected_purchase() else { return vec![] };
                        self.edit_form = PurchaseEditForm::from_purchase(purchase);
                    }
                    Modal::NewContact(_) => self.contact_form = ContactForm::default(),
                    Modal::NewPurchase | Modal::NewSupplier => {}
                }
                self.modal = Some(modal);
                vec![]
            }
            Action::CloseModal => {
                self.modal = None;
                vec![]
            }
            Action::Edit(edit) => {
                self.edit(edit);
                vec![]
            }
        }
    }

    /// Selection cascade: reset everything derived from the old purchase
    fn select(&mut self, id: i64) -> Vec<Effect> {
        if self.selected_purchase_id == Some(id) {
            return vec![];
        }
        self.clear_selection();
        self.selected_purchase_id = Some(id);

        if self.session.is_none() {
            return vec![];
        }
        vec![Effect::LoadSuppliers(id), Effect::PreloadSearch(id), Effect::LoadEmails(id)]
    }

    fn clear_selection(&mut self) {
        self.selected_purchase_id = None;
        self.suppliers.clear();
        self.contacts_by_supplier.clear();
        self.selected_rows.clear();
        self.email_draft = None;
        self.search_task = None;
        self.emails.clear();
        self.details_expanded = false;
    }

    fn preload(&self, id: i64) -> Vec<Effect> {
        match self.session {
            Some(_) => vec![Effect::PreloadSearch(id)],
            None => vec![],
        }
    }

    fn is_current(&self, purchase_id: i64) -> bool {
        let current = self.selected_purchase_id == Some(purchase_id);
        if !current {
            tracing::debug!(purchase_id, "dropping result for a purchase that is no longer selected");
        }
        current
    }

    fn close_modal(&mut self, modal: Modal) {
        if self.modal == Some(modal) {
            self.modal = None;
        }
    }

    fn edit(&mut self, edit: FormEdit) {
        match edit {
            FormEdit::PurchaseName(v) => self.purchase_form.custom_name = v,
            FormEdit::PurchaseTerms(v) => self.purchase_form.terms_text = v,
            FormEdit::EditName(v) => self.edit_form.custom_name = v,
            FormEdit::EditTerms(v) => self.edit_form.terms_text = v,
            FormEdit::EditStatus(v) => self.edit_form.status = v,
            FormEdit::EditNmckValue(v) => self.edit_form.nmck_value = v,
            FormEdit::EditNmckCurrency(v) => self.edit_form.nmck_currency = v,
            FormEdit::SupplierCompany(v) => self.supplier_form.company_name = v,
            FormEdit::SupplierWebsite(v) => self.supplier_form.website_url = v,
            FormEdit::SupplierReason(v) => self.supplier_form.reason = v,
            FormEdit::SupplierContactEmail(index, v) => {
                if let Some(draft) = self.supplier_form.contacts.get_mut(index) {
                    draft.email = v;
                }
            }
            FormEdit::AddSupplierContact => self.supplier_form.contacts.push(ContactDraft::default()),
            FormEdit::RemoveSupplierContact(index) => {
                let contacts = &mut self.supplier_form.contacts;
                if contacts.len() > 1 && index < contacts.len() {
                    contacts.remove(index);
                }
            }
            FormEdit::ContactEmail(v) => self.contact_form.email = v,
            FormEdit::ContactSourceUrl(v) => self.contact_form.source_url = v,
            FormEdit::ContactSelected(v) => self.contact_form.is_selected_for_request = v,
            FormEdit::SearchHints(v) => self.search_hints = v,
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session { token: "tok".into(), email: "buyer@example.com".into() }
    }

    fn purchase(id: i64) -> Purchase {
        Purchase {
            id,
            auto_number: id,
            full_name: format!("Закупка №{}", id),
            custom_name: None,
            terms_text: Some("Серверы".into()),
            status: "draft".into(),
            nmck_value: None,
            nmck_currency: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn supplier(id: i64) -> Supplier {
        Supplier { id, company_name: Some(format!("S{}", id)), website_url: None, reason: None, relevance_score: None, created_at: None }
    }

    fn contact(id: i64) -> Contact {
        Contact { id, email: format!("c{}@example.com", id), source_url: None, is_selected_for_request: false, created_at: None }
    }

    fn logged_in() -> AppState {
        AppState::restore(Some(session()))
    }

    fn with_suppliers(state: &mut AppState, purchase_id: i64) {
        state.apply(Action::SuppliersLoaded {
            purchase_id,
            suppliers: vec![supplier(1), supplier(2)],
            contacts: HashMap::from([(1, vec![contact(10), contact(11)]), (2, vec![contact(20)])]),
        });
    }

    #[test]
    fn test_authenticated_persists_and_loads() {
        let mut state = AppState::default();
        state.error = Some("old".into());
        let effects = state.apply(Action::Authenticated(session()));
        assert_eq!(effects, vec![Effect::PersistSession(session()), Effect::LoadPurchases]);
        assert_eq!(state.token(), Some("tok"));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_first_purchase_selected_when_none_selected() {
        let mut state = logged_in();
        let effects = state.apply(Action::PurchasesLoaded(vec![purchase(5), purchase(3)]));
        assert_eq!(state.selected_purchase_id, Some(5));
        assert_eq!(
            effects,
            vec![Effect::LoadSuppliers(5), Effect::PreloadSearch(5), Effect::LoadEmails(5)]
        );
    }

    #[test]
    fn test_reload_keeps_selection_and_preloads() {
        let mut state = logged_in();
        state.apply(Action::PurchasesLoaded(vec![purchase(5), purchase(3)]));
        state.apply(Action::SelectPurchase(3));
        let effects = state.apply(Action::PurchasesLoaded(vec![purchase(9), purchase(5), purchase(3)]));
        assert_eq!(state.selected_purchase_id, Some(3));
        assert_eq!(effects, vec![Effect::PreloadSearch(3)]);
    }

    #[test]
    fn test_empty_list_selects_nothing() {
        let mut state = logged_in();
        assert!(state.apply(Action::PurchasesLoaded(vec![])).is_empty());
        assert_eq!(state.selected_purchase_id, None);
    }

    #[test]
    fn test_list_after_logout_is_dropped() {
        let mut state = logged_in();
        state.apply(Action::LoggedOut);
        assert!(state.apply(Action::PurchasesLoaded(vec![purchase(1)])).is_empty());
        assert!(state.purchases.is_empty());
        assert_eq!(state.selected_purchase_id, None);
    }

    #[test]
    fn test_removed_selection_falls_back_to_first() {
        let mut state = logged_in();
        state.apply(Action::PurchasesLoaded(vec![purchase(1), purchase(2)]));
        state.apply(Action::SelectPurchase(2));
        with_suppliers(&mut state, 2);

        let effects = state.apply(Action::PurchasesLoaded(vec![purchase(1), purchase(3)]));
        assert_eq!(state.selected_purchase_id, Some(1));
        assert_eq!(effects, vec![Effect::LoadSuppliers(1), Effect::PreloadSearch(1), Effect::LoadEmails(1)]);
        assert!(state.suppliers.is_empty());
        assert_eq!(state.selected_purchase().map(|p| p.id), Some(1));
    }

    #[test]
    fn test_removed_selection_with_empty_list_clears() {
        let mut state = logged_in();
        state.apply(Action::PurchasesLoaded(vec![purchase(1)]));
        with_suppliers(&mut state, 1);
        assert!(state.apply(Action::PurchasesLoaded(vec![])).is_empty());
        assert_eq!(state.selected_purchase_id, None);
        assert!(state.suppliers.is_empty());
        assert!(state.contacts_by_supplier.is_empty());
    }

    #[test]
    fn test_selecting_other_purchase_resets_derived_state() {
        let mut state = logged_in();
        state.apply(Action::PurchasesLoaded(vec![purchase(1), purchase(2)]));
        with_suppliers(&mut state, 1);
        state.apply(Action::ToggleAllRows);
        state.apply(Action::ToggleDetails);
        state.apply(Action::DraftLoaded { purchase_id: 1, draft: EmailDraft { subject: "s".into(), body: "b".into() } });
        state.apply(Action::SearchLoaded {
            purchase_id: 1,
            state: SearchTaskState { task_id: 1, status: "done".into(), tech_task_excerpt: None, queries: None, note: None },
        });

        let effects = state.apply(Action::SelectPurchase(2));
        assert_eq!(effects, vec![Effect::LoadSuppliers(2), Effect::PreloadSearch(2), Effect::LoadEmails(2)]);
        assert_eq!(state.email_draft, None);
        assert_eq!(state.search_task, None);
        assert!(!state.details_expanded);
        assert!(state.selected_rows.is_empty());
        assert!(state.suppliers.is_empty());
    }

    #[test]
    fn test_reselecting_same_purchase_is_noop() {
        let mut state = logged_in();
        state.apply(Action::PurchasesLoaded(vec![purchase(1)]));
        with_suppliers(&mut state, 1);
        state.apply(Action::ToggleRow(RowKey::Contact(10)));
        assert!(state.apply(Action::SelectPurchase(1)).is_empty());
        assert_eq!(state.selected_rows.len(), 1);
    }

    #[test]
    fn test_selection_without_session_loads_nothing() {
        let mut state = AppState::default();
        state.purchases = vec![purchase(1)];
        assert!(state.apply(Action::SelectPurchase(1)).is_empty());
        assert_eq!(state.selected_purchase_id, Some(1));
    }

    #[test]
    fn test_suppliers_loaded_resets_rows() {
        let mut state = logged_in();
        state.apply(Action::PurchasesLoaded(vec![purchase(1)]));
        with_suppliers(&mut state, 1);
        state.apply(Action::ToggleAllRows);
        assert!(state.all_rows_selected());
        with_suppliers(&mut state, 1);
        assert!(state.selected_rows.is_empty());
        assert_eq!(state.contact_rows().len(), 3);
    }

    #[test]
    fn test_stale_results_are_dropped() {
        let mut state = logged_in();
        state.apply(Action::PurchasesLoaded(vec![purchase(1), purchase(2)]));
        state.apply(Action::SelectPurchase(2));
        with_suppliers(&mut state, 1);
        state.apply(Action::DraftLoaded { purchase_id: 1, draft: EmailDraft { subject: "s".into(), body: "b".into() } });
        assert!(state.suppliers.is_empty());
        assert_eq!(state.email_draft, None);
    }

    #[test]
    fn test_toggle_row_ignores_unknown_rows() {
        let mut state = logged_in();
        state.apply(Action::PurchasesLoaded(vec![purchase(1)]));
        with_suppliers(&mut state, 1);
        state.apply(Action::ToggleRow(RowKey::Supplier(1)));
        state.apply(Action::ToggleRow(RowKey::Contact(999)));
        assert!(state.selected_rows.is_empty());
        state.apply(Action::ToggleRow(RowKey::Contact(20)));
        assert_eq!(state.selected_rows, BTreeSet::from([RowKey::Contact(20)]));
    }

    #[test]
    fn test_toggle_all_twice_restores_selection() {
        let mut state = logged_in();
        state.apply(Action::PurchasesLoaded(vec![purchase(1)]));
        with_suppliers(&mut state, 1);
        let before = state.selected_rows.clone();
        state.apply(Action::ToggleAllRows);
        state.apply(Action::ToggleAllRows);
        assert_eq!(state.selected_rows, before);
    }

    #[test]
    fn test_logout_clears_everything() {
        let mut state = logged_in();
        state.apply(Action::PurchasesLoaded(vec![purchase(1)]));
        with_suppliers(&mut state, 1);
        let effects = state.apply(Action::LoggedOut);
        assert_eq!(effects, vec![Effect::ClearSession]);
        assert_eq!(state.session, None);
        assert!(state.purchases.is_empty());
        assert_eq!(state.selected_purchase_id, None);
        assert!(state.contacts_by_supplier.is_empty());
    }

    #[test]
    fn test_begin_and_failure_banners() {
        let mut state = logged_in();
        state.message = Some("Закупка создана".into());
        state.error = Some("old".into());
        state.apply(Action::Begin { clear_message: false });
        assert!(state.busy);
        assert_eq!(state.error, None);
        assert!(state.message.is_some());
        state.apply(Action::Failed("boom".into()));
        state.apply(Action::Finish);
        assert!(!state.busy);
        assert_eq!(state.error.as_deref(), Some("boom"));
        state.apply(Action::Begin { clear_message: true });
        assert_eq!(state.message, None);
    }

    #[test]
    fn test_purchase_created_resets_form_and_reloads() {
        let mut state = logged_in();
        state.apply(Action::OpenModal(Modal::NewPurchase));
        state.apply(Action::Edit(FormEdit::PurchaseName("Серверы".into())));
        let effects = state.apply(Action::PurchaseCreated);
        assert_eq!(effects, vec![Effect::LoadPurchases]);
        assert_eq!(state.purchase_form, PurchaseForm::default());
        assert_eq!(state.modal, None);
        assert_eq!(state.message.as_deref(), Some("Закупка создана"));
    }

    #[test]
    fn test_supplier_contact_drafts_keep_one() {
        let mut state = logged_in();
        state.apply(Action::Edit(FormEdit::RemoveSupplierContact(0)));
        assert_eq!(state.supplier_form.contacts.len(), 1);
        state.apply(Action::Edit(FormEdit::AddSupplierContact));
        state.apply(Action::Edit(FormEdit::SupplierContactEmail(1, "b@x.ru".into())));
        state.apply(Action::Edit(FormEdit::RemoveSupplierContact(0)));
        assert_eq!(state.supplier_form.contacts, vec![ContactDraft { email: "b@x.ru".into() }]);
    }

    #[test]
    fn test_edit_modal_prefills_from_selected_purchase() {
        let mut state = logged_in();
        assert!(state.apply(Action::OpenModal(Modal::EditPurchase)).is_empty());
        assert_eq!(state.modal, None);

        let mut p = purchase(1);
        p.nmck_value = Some(1500.5);
        p.nmck_currency = Some("RUB".into());
        state.apply(Action::PurchasesLoaded(vec![p]));
        state.apply(Action::OpenModal(Modal::EditPurchase));
        assert_eq!(state.modal, Some(Modal::EditPurchase));
        assert_eq!(state.edit_form.nmck_value, "1500.5");
        assert_eq!(state.edit_form.terms_text, "Серверы");
    }

    #[test]
    fn test_edit_form_to_update() {
        let form = PurchaseEditForm {
            custom_name: " Серверы ".into(),
            terms_text: "10 шт".into(),
            status: "".into(),
            nmck_value: "1 200,50".into(),
            nmck_currency: "RUB".into(),
        };
        let update = form.to_update().unwrap();
        assert_eq!(update.custom_name.as_deref(), Some("Серверы"));
        assert_eq!(update.status, None);
        assert_eq!(update.nmck_value, Some(1200.5));

        let bad = PurchaseEditForm { nmck_value: "много".into(), ..form };
        assert!(bad.to_update().is_err());
    }
}
