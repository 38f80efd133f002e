use leptos::prelude::*;

/// Tracks which page currently shows its dialog; at most one at a time.
#[derive(Clone, Copy)]
pub struct ModalService {
    owner: RwSignal<Option<&'static str>>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            owner: RwSignal::new(None),
        }
    }

    pub fn show(&self, owner: &'static str) {
        self.owner.set(Some(owner));
    }

    pub fn hide(&self) {
        self.owner.set(None);
    }

    pub fn is_open_for(&self, owner: &'static str) -> bool {
        self.owner.get() == Some(owner)
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

/// Dialog overlay shown while `owner` holds the modal service.
///
/// ```ignore
/// let modal = use_context::<ModalService>().unwrap();
/// modal.show("a001_vendor");
///
/// view! {
///     <Modal owner="a001_vendor">
///         <MyEditor />
///     </Modal>
/// }
/// ```
#[component]
pub fn Modal(owner: &'static str, children: ChildrenFn) -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    view! {
        <Show when=move || modal.is_open_for(owner)>
            <div class="modal-overlay" on:click=move |_| modal.hide()>
                <div class="modal-content" on:click=|e| e.stop_propagation()>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
