use api::listing::{filter_accounts, SortOrder, UserSort};
use api::{sample, Account};
use dioxus::prelude::*;

use super::admin_layout::{AdminLayout, SampleDataNotice};
use crate::api_context::use_api;
use crate::components::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CardTitle, CardVariant,
    ConfirmModal, Input, InputVariant, Loading, LoadingSize, Modal,
};
use crate::icons::{
    FaArrowDownWideShort, FaArrowUpShortWide, FaEnvelope, FaEye, FaFilter, FaLocationDot, FaLock,
    FaLockOpen, FaMagnifyingGlass, FaPhone, FaRotate, FaTrash, FaUserCheck, FaUserXmark, FaUsers,
};
use crate::nav::Page;
use crate::toast::use_toast;
use crate::Icon;

const NOT_UPDATED: &str = "Not updated";

fn or_not_updated(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_UPDATED
    } else {
        value
    }
}

fn replace_account(accounts: &mut Signal<Vec<Account>>, updated: Account) {
    let mut list = accounts.write();
    if let Some(slot) = list.iter_mut().find(|a| a.id == updated.id) {
        *slot = updated;
    }
}

/// Searchable, sortable account table with status, lock and delete actions.
#[component]
pub fn UserManagerView(on_navigate: EventHandler<Page>) -> Element {
    let api = use_api();
    let toasts = use_toast();

    let mut accounts = use_signal(Vec::<Account>::new);
    let mut fetch_failed = use_signal(|| false);
    let mut notice_open = use_signal(|| true);
    let mut query = use_signal(String::new);
    let mut sort = use_signal(UserSort::default);
    let mut order = use_signal(SortOrder::default);
    let mut selected = use_signal(|| Option::<Account>::None);
    let mut confirm_delete = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    let list_client = api.client.clone();
    let mut loader = use_resource(move || {
        let client = list_client.clone();
        async move {
            match client.users().await {
                Ok(list) => {
                    fetch_failed.set(false);
                    accounts.set(list);
                }
                Err(e) => {
                    tracing::error!("Failed to load accounts: {}", e);
                    fetch_failed.set(true);
                }
            }
        }
    });

    if loader.read().is_none() {
        return rsx! { Loading { size: LoadingSize::Lg, text: "Loading users...", full_screen: true } };
    }

    let visible = filter_accounts(&accounts.read(), &query(), sort(), order());
    let searching = !query().trim().is_empty();

    let status_client = api.client.clone();
    let toggle_status = move |account: Account| {
        let client = status_client.clone();
        spawn(async move {
            let status = account.toggled_status();
            match client.set_user_status(&account.id, status).await {
                Ok(updated) => {
                    replace_account(&mut accounts, updated);
                    let verb = if status == 1 { "Activated" } else { "Deactivated" };
                    toasts.success("Done", &format!("{verb} {}", account.display_name()));
                }
                Err(e) => {
                    tracing::error!("Failed to update status of {}: {}", account.id, e);
                    toasts.error("Error", "Could not update the user's status");
                }
            }
        });
    };

    let lock_client = api.client.clone();
    let toggle_lock = move |account: Account| {
        let client = lock_client.clone();
        spawn(async move {
            let lock = account.lock.toggled();
            match client.set_user_lock(&account.id, lock).await {
                Ok(updated) => {
                    let verb = if updated.is_locked() { "Locked" } else { "Unlocked" };
                    toasts.success("Done", &format!("{verb} {}", updated.display_name()));
                    replace_account(&mut accounts, updated);
                }
                Err(e) => {
                    tracing::error!("Failed to update lock of {}: {}", account.id, e);
                    toasts.error("Error", "Could not lock or unlock the user");
                }
            }
        });
    };

    let delete_client = api.client.clone();
    let delete = move |_: ()| {
        let Some(account) = selected() else {
            return;
        };
        let client = delete_client.clone();
        deleting.set(true);
        spawn(async move {
            match client.delete_user(&account.id).await {
                Ok(()) => {
                    accounts.write().retain(|a| a.id != account.id);
                    toasts.success("Done", "User deleted");
                    confirm_delete.set(false);
                    selected.set(None);
                }
                Err(e) => {
                    tracing::error!("Failed to delete {}: {}", account.id, e);
                    toasts.error("Error", "Could not delete the user");
                }
            }
            deleting.set(false);
        });
    };

    let (order_label, order_icon) = match order() {
        SortOrder::Asc => ("Ascending", rsx! { Icon { icon: FaArrowUpShortWide, width: 14, height: 14 } }),
        SortOrder::Desc => ("Descending", rsx! { Icon { icon: FaArrowDownWideShort, width: 14, height: 14 } }),
    };

    rsx! {
        AdminLayout {
            active: Page::AdminUsers,
            title: "User management",
            subtitle: "Total: {visible.len()} users",
            on_navigate,

            Card {
                variant: CardVariant::Glass,
                CardContent {
                    class: "toolbar",
                    Input {
                        class: "toolbar-search",
                        placeholder: "Search by name or email...",
                        variant: InputVariant::Filled,
                        value: query(),
                        icon: rsx! { Icon { icon: FaMagnifyingGlass, width: 14, height: 14 } },
                        oninput: move |evt: FormEvent| query.set(evt.value()),
                    }
                    label {
                        class: "select-field",
                        Icon { icon: FaFilter, width: 14, height: 14 }
                        select {
                            value: "{sort().key()}",
                            onchange: move |evt: FormEvent| sort.set(UserSort::from_key(&evt.value())),
                            for choice in UserSort::ALL {
                                option {
                                    key: "{choice.key()}",
                                    value: choice.key(),
                                    selected: choice == sort(),
                                    "Sort by {choice.label()}"
                                }
                            }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        title: "Toggle sort order",
                        icon: order_icon,
                        onclick: move |_| order.set(order().toggled()),
                        "{order_label}"
                    }
                }
            }

            Card {
                variant: CardVariant::Elevated,
                CardHeader {
                    CardTitle { Icon { icon: FaUsers, width: 16, height: 16 } span { "Users" } }
                }
                CardContent {
                    if visible.is_empty() {
                        div {
                            class: "empty-state",
                            Icon { icon: FaUsers, width: 40, height: 40 }
                            if searching {
                                h3 { "No users found" }
                                p { "Try a different search term or clear the filter." }
                            } else {
                                h3 { "No user data yet" }
                                p { "The server may not be running or there are no users yet. Please check the connection." }
                                div {
                                    class: "empty-state-actions",
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        icon: rsx! { Icon { icon: FaRotate, width: 14, height: 14 } },
                                        onclick: move |_| loader.restart(),
                                        "Reload"
                                    }
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        onclick: move |_| accounts.set(sample::managed_accounts()),
                                        "Add sample data"
                                    }
                                }
                            }
                        }
                    } else {
                        table {
                            class: "table",
                            thead {
                                tr {
                                    th { "ID" }
                                    th { "Details" }
                                    th { "Email" }
                                    th { "Status" }
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                for account in visible.iter().cloned() {
                                    AccountRow {
                                        key: "{account.id}",
                                        account,
                                        on_view: move |a: Account| selected.set(Some(a)),
                                        on_toggle_status: toggle_status.clone(),
                                        on_toggle_lock: toggle_lock.clone(),
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(account) = selected() {
                if confirm_delete() {
                    ConfirmModal {
                        title: "Confirm deletion",
                        message: "Delete user \"{account.display_name()}\"? This cannot be undone.",
                        confirm_label: "Delete",
                        destructive: true,
                        loading: deleting(),
                        on_confirm: delete,
                        on_cancel: move |_| {
                            confirm_delete.set(false);
                            selected.set(None);
                        },
                    }
                } else {
                    AccountDetails {
                        account,
                        on_close: move |_| selected.set(None),
                        on_delete: move |_| confirm_delete.set(true),
                    }
                }
            }

            if fetch_failed() && notice_open() {
                SampleDataNotice {
                    message: "The server is unavailable. Press \"Add sample data\" to try the screen.",
                    on_dismiss: move |_| notice_open.set(false),
                }
            }
        }
    }
}

#[component]
fn AccountRow(
    account: Account,
    on_view: EventHandler<Account>,
    on_toggle_status: EventHandler<Account>,
    on_toggle_lock: EventHandler<Account>,
) -> Element {
    let view = account.clone();
    let status = account.clone();
    let lock = account.clone();
    let status_class = if account.is_active() { "text-danger" } else { "text-success" };
    let lock_title = if account.is_locked() { "Unlock account" } else { "Lock account" };

    rsx! {
        tr {
            td { "#{account.id}" }
            td {
                div {
                    class: "account-cell",
                    img { class: "avatar avatar-sm", src: "{account.avatar()}", alt: "" }
                    div {
                        strong { "{account.display_name()}" }
                        span { class: "view-muted", "{or_not_updated(&account.phone)}" }
                    }
                }
            }
            td {
                span { class: "with-icon", Icon { icon: FaEnvelope, width: 12, height: 12 } "{account.email}" }
            }
            td {
                if account.is_active() {
                    span { class: "badge badge-active", Icon { icon: FaUserCheck, width: 12, height: 12 } " Active" }
                } else {
                    span { class: "badge badge-inactive", Icon { icon: FaUserXmark, width: 12, height: 12 } " Inactive" }
                }
                if account.is_locked() {
                    span { class: "badge badge-locked", Icon { icon: FaLock, width: 12, height: 12 } " Locked" }
                }
            }
            td {
                div {
                    class: "row-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Sm,
                        title: "View details",
                        onclick: move |_| on_view.call(view.clone()),
                        Icon { icon: FaEye, width: 12, height: 12 }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Sm,
                        class: "{status_class}",
                        onclick: move |_| on_toggle_status.call(status.clone()),
                        if account.is_active() { "Deactivate" } else { "Activate" }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Sm,
                        title: "{lock_title}",
                        onclick: move |_| on_toggle_lock.call(lock.clone()),
                        if account.is_locked() {
                            Icon { icon: FaLockOpen, width: 12, height: 12 }
                        } else {
                            Icon { icon: FaLock, width: 12, height: 12 }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AccountDetails(account: Account, on_close: EventHandler<()>, on_delete: EventHandler<()>) -> Element {
    rsx! {
        Modal {
            title: "User details",
            wide: true,
            on_close: move |_| on_close.call(()),
            div {
                class: "account-details",
                img { class: "avatar avatar-lg", src: "{account.avatar()}", alt: "" }
                h3 { "{account.display_name()}" }
                p { class: "view-muted", "ID: {account.id}" }
                dl {
                    class: "profile-fields",
                    div {
                        class: "profile-field",
                        dt { Icon { icon: FaEnvelope, width: 14, height: 14 } "Email" }
                        dd { "{account.email}" }
                    }
                    div {
                        class: "profile-field",
                        dt { Icon { icon: FaPhone, width: 14, height: 14 } "Phone" }
                        dd { "{or_not_updated(&account.phone)}" }
                    }
                    div {
                        class: "profile-field",
                        dt { Icon { icon: FaLocationDot, width: 14, height: 14 } "Address" }
                        dd { "{or_not_updated(&account.address)}" }
                    }
                    div {
                        class: "profile-field",
                        dt {
                            if account.is_active() {
                                Icon { icon: FaUserCheck, width: 14, height: 14 }
                            } else {
                                Icon { icon: FaUserXmark, width: 14, height: 14 }
                            }
                            "Status"
                        }
                        dd { if account.is_active() { "Active" } else { "Inactive" } }
                    }
                }
            }
            div {
                class: "modal-actions",
                Button { variant: ButtonVariant::Outline, onclick: move |_| on_close.call(()), "Close" }
                Button {
                    variant: ButtonVariant::Destructive,
                    icon: rsx! { Icon { icon: FaTrash, width: 14, height: 14 } },
                    onclick: move |_| on_delete.call(()),
                    "Delete user"
                }
            }
        }
    }
}
