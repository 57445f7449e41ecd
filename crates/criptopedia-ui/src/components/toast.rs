use crate::core::notify::NOTIFICATION_TTL_MS;
use crate::models::Toast;
use gloo::timers::callback::Timeout;
use std::collections::HashMap;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    // One timer per visible toast; dropping a handle cancels it.
    let timers = use_mut_ref(HashMap::<u64, Timeout>::new);
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |list: &Vec<Toast>| {
                let mut handles = timers.borrow_mut();
                handles.retain(|id, _| list.iter().any(|toast| toast.id == *id));
                for toast in list {
                    let id = toast.id;
                    handles.entry(id).or_insert_with(|| {
                        let on_dismiss = on_dismiss.clone();
                        Timeout::new(NOTIFICATION_TTL_MS, move || on_dismiss.emit(id))
                    });
                }
                || ()
            },
            props.toasts.clone(),
        );
    }

    html! {
        <div class={classes!("toast-host", props.class.clone())} aria-live="polite" aria-atomic="true">
            {for props.toasts.iter().map(|toast| render_toast(toast, props.on_dismiss.clone()))}
        </div>
    }
}

fn render_toast(toast: &Toast, on_dismiss: Callback<u64>) -> Html {
    let id = toast.id;
    let on_close = Callback::from(move |_| on_dismiss.emit(id));

    html! {
        <div class={classes!("toast", toast.kind.css_class())} role="status">
            <span>{toast.message.clone()}</span>
            <button class="ghost" aria-label="Cerrar" onclick={on_close}>{"✕"}</button>
        </div>
    }
}
