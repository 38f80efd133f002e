//! JSON draft editor for creating a record.
//!
//! The draft starts from a template record; Save parses it back into the
//! record type and hands it to a logging save handler.

use crate::layout::{Modal, ModalService};
use contracts::domain::common::AggregateRoot;
use contracts::shared::save::{parse_draft, LoggingSaveHandler, SaveHandler};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use thaw::*;

#[component]
pub fn RecordDraftEditor<T>(
    /// Tab key of the owning page; also the collection name in the save log
    owner: &'static str,
    #[prop(into)] title: String,
    template: T,
) -> impl IntoView
where
    T: AggregateRoot + Serialize + DeserializeOwned + Debug + Send + Sync + 'static,
{
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    let template_json = StoredValue::new(serde_json::to_string_pretty(&template).unwrap_or_default());
    let draft = RwSignal::new(template_json.get_value());
    let error = RwSignal::new(None::<String>);

    let save = move |_| {
        match parse_draft::<T>(&draft.get_untracked()) {
            Ok(record) => {
                log::debug!(
                    "{}: accepted draft '{}' ({})",
                    owner,
                    record.code(),
                    record.description()
                );
                LoggingSaveHandler::new(owner).on_save(record);
                error.set(None);
                draft.set(template_json.get_value());
                modal.hide();
            }
            Err(e) => {
                log::warn!("{}: rejected draft: {}", owner, e);
                error.set(Some(e.to_string()));
            }
        }
    };

    let cancel = move |_| {
        error.set(None);
        modal.hide();
    };

    let title = StoredValue::new(title);

    view! {
        <Modal owner=owner>
            <div class="record-editor">
                <div class="record-editor__header">
                    <h2 class="record-editor__title">{title.get_value()}</h2>
                </div>
                {move || error.get().map(|e| view! {
                    <div class="alert alert--error">{e}</div>
                })}
                <Textarea value=draft attr:rows=16 attr:class="record-editor__draft" />
                <Flex justify=FlexJustify::End gap=FlexGap::Small>
                    <Button appearance=ButtonAppearance::Secondary on_click=cancel>"Cancel"</Button>
                    <Button appearance=ButtonAppearance::Primary on_click=save>"Save"</Button>
                </Flex>
            </div>
        </Modal>
    }
}
