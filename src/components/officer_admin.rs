//! Officer Management Component
//!
//! Officer accounts with rank, status and jurisdiction. The area is chosen
//! through the City -> Zone -> Sub-area cascade.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{AreaSelect, DeleteConfirmButton, ListControls};
use crate::api;
use crate::cascade::AreaSelection;
use crate::context::use_app_context;
use crate::forms::OfficerDraft;
use crate::listing::{self, OfficerSort};
use crate::models::{Officer, OfficerStatus, Rank};
use crate::store::{store_remove_officer, use_app_store, AppStateStoreFields};

#[component]
pub fn OfficerAdmin() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let query = RwSignal::new(String::new());
    let sort = RwSignal::new(String::new());
    // None = form closed, Some(None) = new officer, Some(Some(id)) = editing
    let editing = RwSignal::new(None::<Option<u32>>);
    let draft = RwSignal::new(OfficerDraft::default());
    let (busy, set_busy) = signal(false);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let Some(token) = ctx.token() else { return };
        spawn_local(async move {
            if let Some(officers) = ctx.report(api::list_officers(&token).await) {
                *store.officers().write() = officers;
            }
            if let Some(areas) = ctx.report(api::list_areas(&token).await) {
                *store.areas().write() = areas;
            }
        });
    });

    let visible = move || {
        let query = query.get();
        let order = OfficerSort::parse(&sort.get());
        store.officers().with(|officers| listing::filter_and_sort(officers, &query, order))
    };

    let open_edit = move |officer: &Officer| {
        draft.set(OfficerDraft::from_officer(officer));
        editing.set(Some(Some(officer.id)));
    };

    let delete = move |id: u32| {
        let Some(token) = ctx.token() else { return };
        spawn_local(async move {
            if let Some(ack) = ctx.report(api::delete_officer(&token, id).await) {
                store_remove_officer(&store, id);
                ctx.notices.success(ack.message_or("Officer removed."));
            }
        });
    };

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(target) = editing.get_untracked() else { return };
        let validated = store
            .areas()
            .with_untracked(|areas| draft.with_untracked(|d| d.validate(areas, target.is_none())));
        let payload = match validated {
            Ok(payload) => payload,
            Err(err) => {
                ctx.notices.error(err.to_string());
                return;
            }
        };
        let Some(token) = ctx.token() else { return };
        set_busy.set(true);
        spawn_local(async move {
            let saved = match target {
                None => ctx
                    .report(api::create_officer(&token, &payload).await)
                    .map(|created| api::Ack::from(created).message_or("Officer created.")),
                Some(id) => ctx
                    .report(api::update_officer(&token, id, &payload).await)
                    .map(|ack| ack.message_or("Officer updated.")),
            };
            if let Some(message) = saved {
                ctx.notices.success(message);
                editing.set(None);
                ctx.reload();
            }
            set_busy.set(false);
        });
    };

    let areas = Signal::derive(move || store.areas().get());
    let area_selection = Signal::derive(move || draft.with(|d| d.area.clone()));
    let on_area = Callback::new(move |sel: AreaSelection| draft.update(|d| d.area = sel));

    view! {
        <section class="officer-admin">
            <div class="section-head">
                <h2>"Manage Officers"</h2>
                <button on:click=move |_| {
                    draft.set(OfficerDraft::default());
                    editing.set(Some(None));
                }>"Add Officer"</button>
            </div>
            <ListControls
                query=query
                sort=sort
                options=OfficerSort::OPTIONS
                placeholder="Search by name, rank, city, zone or email"
            />

            {move || editing.get().map(|target| view! {
                <form class="officer-form" on:submit=on_save>
                    <h3>{if target.is_none() { "New Officer" } else { "Edit Officer" }}</h3>
                    <label class="form-field">
                        <span>"Name"</span>
                        <input
                            type="text"
                            prop:value=move || draft.with(|d| d.name.clone())
                            on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            prop:value=move || draft.with(|d| d.email.clone())
                            on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span>{if target.is_none() { "Password" } else { "New password (leave blank to keep)" }}</span>
                        <input
                            type="password"
                            prop:value=move || draft.with(|d| d.password.clone())
                            on:input=move |ev| draft.update(|d| d.password = event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span>"Rank"</span>
                        <select
                            prop:value=move || draft.with(|d| d.rank.map(Rank::label).unwrap_or_default())
                            on:change=move |ev| draft.update(|d| d.rank = Rank::from_label(&event_target_value(&ev)))
                        >
                            <option value="">"Select rank"</option>
                            {Rank::ALL.into_iter().map(|rank| view! {
                                <option value=rank.label()>{rank.label()}</option>
                            }).collect_view()}
                        </select>
                    </label>
                    <label class="form-field">
                        <span>"Status"</span>
                        <select
                            prop:value=move || draft.with(|d| d.status.label())
                            on:change=move |ev| {
                                if let Some(status) = OfficerStatus::from_label(&event_target_value(&ev)) {
                                    draft.update(|d| d.status = status);
                                }
                            }
                        >
                            {OfficerStatus::ALL.into_iter().map(|status| view! {
                                <option value=status.label()>{status.label()}</option>
                            }).collect_view()}
                        </select>
                    </label>
                    <AreaSelect areas=areas selection=area_selection on_change=on_area />
                    <div class="form-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| editing.set(None)>"Cancel"</button>
                        <button type="submit" disabled=move || busy.get()>"Save"</button>
                    </div>
                </form>
            })}

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Rank"</th>
                        <th>"Email"</th>
                        <th>"City"</th>
                        <th>"Zone"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || visible().into_iter().map(|officer| {
                        let id = officer.id;
                        let for_edit = officer.clone();
                        view! {
                            <tr>
                                <td>{officer.name.clone()}</td>
                                <td>{officer.rank.label()}</td>
                                <td>{officer.email.clone()}</td>
                                <td>{officer.city().to_string()}</td>
                                <td>{officer.zone().to_string()}</td>
                                <td>{officer.status.label()}</td>
                                <td class="row-actions">
                                    <button class="edit-btn" on:click=move |_| open_edit(&for_edit)>"Edit"</button>
                                    <DeleteConfirmButton button_class="delete-btn" on_confirm=move |_| delete(id) />
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </section>
    }
}
