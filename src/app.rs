//! zakupAI Frontend App
//!
//! Main application component: auth gate, sidebar and the purchase workspace.

use leptos::prelude::*;

use crate::components::{
    AuthPanel, Banners, EmailLog, PreparationPanel, PurchaseDetails, PurchaseEditModal, PurchaseList,
    PurchaseModal, Sidebar, SupplierSection,
};
use crate::context::AppContext;
use crate::state::{AppStateStoreFields, Effect};

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::provide();
    let store = ctx.store;

    // Resume a persisted session
    if store.session().get_untracked().is_some() {
        ctx.run(vec![Effect::LoadPurchases]);
    }

    let logged_in = move || store.session().with(|s| s.is_some());
    let has_selection = move || store.selected_purchase_id().get().is_some();

    view! {
        <Show when=logged_in fallback=|| view! { <AuthPanel /> }>
            <div class="app-shell">
                <Sidebar />
                <main class="main">
                    <div class="card">
                        <h2 class="card-title">"Закупки"</h2>
                        <Banners />
                        <PurchaseList />
                    </div>
                    <Show when=has_selection>
                        <PurchaseDetails />
                        <SupplierSection />
                        <PreparationPanel />
                        <EmailLog />
                    </Show>
                </main>
                <PurchaseModal />
                <PurchaseEditModal />
            </div>
        </Show>
    }
}
