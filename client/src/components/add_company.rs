//! "Add Company" drawer on the post-job form.

use leptos::prelude::*;

use crate::components::field_error::FieldError;
use crate::components::loader::BarLoader;
use crate::net::types::Company;
use crate::util::validate::{CompanyForm, FieldErrors};

/// Trigger button plus drawer. `on_added` receives the created company.
#[component]
pub fn AddCompanyDrawer(on_added: Callback<Company>) -> impl IntoView {
    let open = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let logo_name = RwSignal::new(None::<String>);
    let errors = RwSignal::new(FieldErrors::default());
    let submitting = RwSignal::new(false);
    let server_error = RwSignal::new(None::<String>);
    let logo_ref = NodeRef::<leptos::html::Input>::new();

    let on_logo_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let picked = logo_ref
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
                .map(|file| file.name());
            logo_name.set(picked);
        }
    };

    let submit = move |_| {
        if submitting.get_untracked() {
            return;
        }
        let form = CompanyForm { name: name.get_untracked(), logo_name: logo_name.get_untracked() };
        let company_name = match form.validate() {
            Ok(company_name) => company_name,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::default());
        server_error.set(None);
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        {
            let Some(logo) = logo_ref
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                submitting.set(false);
                return;
            };
            leptos::task::spawn_local(async move {
                let result = crate::net::api::create_company(&company_name, &logo).await;
                submitting.set(false);
                match result {
                    Ok(company) => {
                        name.set(String::new());
                        logo_name.set(None);
                        open.set(false);
                        on_added.run(company);
                    }
                    Err(e) => server_error.set(Some(e)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (company_name, on_added);
    };

    let name_error = Signal::derive(move || errors.with(|e| e.get("name").map(str::to_owned)));
    let logo_error = Signal::derive(move || errors.with(|e| e.get("logo").map(str::to_owned)));

    view! {
        <button type="button" class="btn btn--secondary" on:click=move |_| open.set(true)>
            "Add Company"
        </button>
        <Show when=move || open.get()>
            <div class="dialog-backdrop drawer-backdrop" on:click=move |_| open.set(false)>
                <div class="drawer" on:click=move |ev| ev.stop_propagation()>
                    <h2 class="drawer__title">"Add a New Company"</h2>
                    <div class="form form--row">
                        <input
                            class="input"
                            type="text"
                            placeholder="Company name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                        <input
                            class="input input--file"
                            type="file"
                            accept="image/png,image/jpeg,.png,.jpg,.jpeg"
                            node_ref=logo_ref
                            on:change=on_logo_change
                        />
                        <button type="button" class="btn btn--destructive" on:click=submit disabled=move || submitting.get()>
                            "Add"
                        </button>
                    </div>
                    <FieldError message=name_error/>
                    <FieldError message=logo_error/>
                    <Show when=move || server_error.get().is_some()>
                        <p class="form-error">{move || server_error.get().unwrap_or_default()}</p>
                    </Show>
                    <Show when=move || submitting.get()>
                        <BarLoader/>
                    </Show>
                    <button type="button" class="btn btn--outline" on:click=move |_| open.set(false)>
                        "Cancel"
                    </button>
                </div>
            </div>
        </Show>
    }
}
