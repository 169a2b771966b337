use api::auth::{change_avatar, change_password, update_profile};
use api::validate::{PasswordChangeForm, ProfileForm};
use api::{Account, Field, FormErrors};
use dioxus::prelude::*;

use super::account_nav::AccountNav;
use super::field_error;
use crate::api_context::use_api;
use crate::auth::{update_account, use_auth, AuthState};
use crate::components::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CardTitle, CardVariant, Input,
    Loading, LoadingSize, Modal,
};
use crate::icons::{
    FaCamera, FaCircleExclamation, FaEnvelope, FaFloppyDisk, FaLocationDot, FaLock,
    FaPenToSquare, FaPhone, FaRotate, FaUpload, FaUser,
};
use crate::nav::Page;
use crate::toast::use_toast;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// What the main panel shows while the account record is fetched.
#[derive(Clone, Copy, Debug, PartialEq)]
enum ProfileStatus {
    Loading,
    Ready,
    Failed,
}

impl ProfileStatus {
    fn of(profile: Option<&Account>, load_failed: bool) -> Self {
        match (profile, load_failed) {
            (Some(_), _) => ProfileStatus::Ready,
            (None, true) => ProfileStatus::Failed,
            (None, false) => ProfileStatus::Loading,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum ProfileModal {
    Edit,
    Password,
    Avatar,
}

/// Account details with modals to edit them, change the password and
/// upload a new picture.
#[component]
pub fn ProfileView(on_navigate: EventHandler<Page>) -> Element {
    let api = use_api();
    let auth = use_auth();
    let toasts = use_toast();

    let mut profile = use_signal(|| Option::<Account>::None);
    let modal = use_signal(|| Option::<ProfileModal>::None);

    let mut load_failed = use_signal(|| false);

    let mut loader = use_resource(move || {
        let client = api.client.clone();
        let user_id = auth().account.map(|a| a.id);
        async move {
            let Some(id) = user_id else {
                profile.set(None);
                return;
            };
            load_failed.set(false);
            match client.user(&id).await {
                Ok(account) => profile.set(Some(account)),
                Err(e) => {
                    tracing::error!("Failed to load profile {}: {}", id, e);
                    load_failed.set(true);
                    toasts.error("Error", "Could not load your profile");
                }
            }
        }
    });

    let state = auth();
    if !state.loading && !state.is_logged_in() {
        return rsx! {
            document::Link { rel: "stylesheet", href: VIEWS_CSS }
            div {
                class: "empty-state",
                h3 { "Sign in to manage your profile" }
                Button { onclick: move |_| on_navigate.call(Page::SignIn), "Sign in" }
            }
        };
    }

    let status = ProfileStatus::of(profile.read().as_ref(), load_failed());

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        section {
            class: "page-banner",
            h1 { "My profile" }
            p { class: "view-muted", "Manage your personal information and account settings." }
        }

        section {
            class: "view-section with-sidebar",
            AccountNav { active: Page::Profile, on_navigate }
            match (status, profile()) {
                (ProfileStatus::Ready, Some(account)) => rsx! { ProfileDetails { account, modal } },
                (ProfileStatus::Failed, _) => rsx! {
                    div {
                        class: "empty-state",
                        Icon { icon: FaCircleExclamation, width: 40, height: 40 }
                        h3 { "Could not load your profile" }
                        p { "Check your connection and try again." }
                        Button {
                            variant: ButtonVariant::Outline,
                            icon: rsx! { Icon { icon: FaRotate, width: 14, height: 14 } },
                            onclick: move |_| loader.restart(),
                            "Retry"
                        }
                    }
                },
                _ => rsx! { Loading { size: LoadingSize::Lg, text: "Loading profile..." } },
            }
        }

        if let (Some(kind), Some(account)) = (modal(), profile()) {
            match kind {
                ProfileModal::Edit => rsx! { EditProfileModal { account, profile, modal } },
                ProfileModal::Password => rsx! { PasswordModal { account, profile, modal } },
                ProfileModal::Avatar => rsx! { AvatarModal { account, profile, modal } },
            }
        }
    }
}

#[component]
fn ProfileDetails(account: Account, modal: Signal<Option<ProfileModal>>) -> Element {
    let mut modal = modal;

    rsx! {
        div {
            class: "profile-content",
            Card {
                variant: CardVariant::Elevated,
                class: "profile-card",
                div {
                    class: "profile-avatar",
                    img { class: "avatar avatar-lg", src: "{account.avatar()}", alt: "{account.display_name()}" }
                    button {
                        class: "profile-avatar-button",
                        title: "Change picture",
                        onclick: move |_| modal.set(Some(ProfileModal::Avatar)),
                        Icon { icon: FaCamera, width: 14, height: 14 }
                    }
                }
                h2 { class: "profile-name", "{account.display_name()}" }
                p { class: "view-muted", "{account.email}" }
                div {
                    class: "profile-actions",
                    Button {
                        icon: rsx! { Icon { icon: FaPenToSquare, width: 14, height: 14 } },
                        onclick: move |_| modal.set(Some(ProfileModal::Edit)),
                        "Edit profile"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        icon: rsx! { Icon { icon: FaLock, width: 14, height: 14 } },
                        onclick: move |_| modal.set(Some(ProfileModal::Password)),
                        "Change password"
                    }
                }
            }

            Card {
                variant: CardVariant::Elevated,
                CardHeader { CardTitle { "Personal information" } }
                CardContent {
                    dl {
                        class: "profile-fields",
                        ProfileField { label: "Full name", value: account.name_account.clone(), icon: rsx! { Icon { icon: FaUser, width: 14, height: 14 } } }
                        ProfileField { label: "Email", value: account.email.clone(), icon: rsx! { Icon { icon: FaEnvelope, width: 14, height: 14 } } }
                        ProfileField { label: "Address", value: account.address.clone(), icon: rsx! { Icon { icon: FaLocationDot, width: 14, height: 14 } } }
                        ProfileField { label: "Phone", value: account.phone.clone(), icon: rsx! { Icon { icon: FaPhone, width: 14, height: 14 } } }
                    }
                }
            }
        }
    }
}

#[component]
fn ProfileField(label: String, value: String, icon: Element) -> Element {
    rsx! {
        div {
            class: "profile-field",
            dt { {icon} "{label}" }
            dd { "{value}" }
        }
    }
}

/// Publish a saved account to the page and to the header.
fn saved(
    mut auth: Signal<AuthState>,
    mut profile: Signal<Option<Account>>,
    mut modal: Signal<Option<ProfileModal>>,
    account: Account,
) {
    update_account(&mut auth, account.clone());
    profile.set(Some(account));
    modal.set(None);
}

#[component]
fn EditProfileModal(
    account: Account,
    profile: Signal<Option<Account>>,
    modal: Signal<Option<ProfileModal>>,
) -> Element {
    let mut modal = modal;
    let api = use_api();
    let auth = use_auth();
    let toasts = use_toast();
    let initial = ProfileForm::from_account(&account);
    let mut name = use_signal(|| initial.name.clone());
    let mut address = use_signal(|| initial.address.clone());
    let mut phone = use_signal(|| initial.phone.clone());
    let mut errors = use_signal(FormErrors::new);
    let mut saving = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = api.client.clone();
        let account = account.clone();
        let form = ProfileForm {
            name: name(),
            address: address(),
            phone: phone(),
        };
        saving.set(true);
        spawn(async move {
            match update_profile(&client, &account, &form).await {
                Ok(updated) => {
                    saved(auth, profile, modal, updated);
                    toasts.success("Saved", "Your personal information has been updated.");
                }
                Err(e) => {
                    tracing::warn!("Profile update failed: {}", e);
                    errors.set(e.form_errors().cloned().unwrap_or_default());
                    toasts.error("Error", &e.to_string());
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        Modal {
            title: "Edit profile",
            on_close: move |_| modal.set(None),
            form {
                class: "form",
                onsubmit: submit,
                Input {
                    id: "profile-name",
                    label: "Full name",
                    value: name(),
                    error: field_error(&errors.read(), Field::Name),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                Input {
                    id: "profile-address",
                    label: "Address",
                    value: address(),
                    error: field_error(&errors.read(), Field::Address),
                    oninput: move |evt: FormEvent| address.set(evt.value()),
                }
                Input {
                    id: "profile-phone",
                    label: "Phone",
                    r#type: "tel",
                    value: phone(),
                    error: field_error(&errors.read(), Field::Phone),
                    oninput: move |evt: FormEvent| phone.set(evt.value()),
                }
                div {
                    class: "modal-actions",
                    Button { variant: ButtonVariant::Outline, onclick: move |_| modal.set(None), "Cancel" }
                    Button {
                        r#type: "submit",
                        loading: saving(),
                        icon: rsx! { Icon { icon: FaFloppyDisk, width: 14, height: 14 } },
                        "Save"
                    }
                }
            }
        }
    }
}

#[component]
fn PasswordModal(
    account: Account,
    profile: Signal<Option<Account>>,
    modal: Signal<Option<ProfileModal>>,
) -> Element {
    let mut modal = modal;
    let api = use_api();
    let auth = use_auth();
    let toasts = use_toast();
    let mut old_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut errors = use_signal(FormErrors::new);
    let mut saving = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = api.client.clone();
        let account = account.clone();
        let form = PasswordChangeForm {
            old_password: old_password(),
            new_password: new_password(),
            confirm_password: confirm_password(),
        };
        saving.set(true);
        spawn(async move {
            match change_password(&client, &account, &form).await {
                Ok(updated) => {
                    saved(auth, profile, modal, updated);
                    toasts.success("Saved", "Your password has been changed.");
                }
                Err(e) => {
                    tracing::warn!("Password change failed: {}", e);
                    let mut field_errors = e.form_errors().cloned().unwrap_or_default();
                    if matches!(e, api::AuthError::IncorrectPassword) {
                        field_errors.add(Field::OldPassword, e.to_string());
                    }
                    errors.set(field_errors);
                    toasts.error("Error", &e.to_string());
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        Modal {
            title: "Change password",
            on_close: move |_| modal.set(None),
            form {
                class: "form",
                onsubmit: submit,
                Input {
                    id: "old-password",
                    label: "Current password",
                    r#type: "password",
                    value: old_password(),
                    error: field_error(&errors.read(), Field::OldPassword),
                    oninput: move |evt: FormEvent| old_password.set(evt.value()),
                }
                Input {
                    id: "new-password",
                    label: "New password",
                    r#type: "password",
                    value: new_password(),
                    error: field_error(&errors.read(), Field::Password),
                    oninput: move |evt: FormEvent| new_password.set(evt.value()),
                }
                Input {
                    id: "confirm-password",
                    label: "Confirm new password",
                    r#type: "password",
                    value: confirm_password(),
                    error: field_error(&errors.read(), Field::ConfirmPassword),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }
                div {
                    class: "modal-actions",
                    Button { variant: ButtonVariant::Outline, onclick: move |_| modal.set(None), "Cancel" }
                    Button { r#type: "submit", loading: saving(), "Change password" }
                }
            }
        }
    }
}

#[component]
fn AvatarModal(
    account: Account,
    profile: Signal<Option<Account>>,
    modal: Signal<Option<ProfileModal>>,
) -> Element {
    let mut modal = modal;
    let api = use_api();
    let auth = use_auth();
    let toasts = use_toast();
    let mut uploading = use_signal(|| false);
    let preview = account.avatar().to_string();

    let upload = move |evt: FormEvent| {
        let client = api.client.clone();
        let storage = api.storage.clone();
        let account = account.clone();
        async move {
            let Some(file) = evt.files().into_iter().next() else {
                return;
            };
            uploading.set(true);
            let name = file.name();
            let content_type = file
                .content_type()
                .unwrap_or_else(|| "application/octet-stream".to_string());
            let bytes = match file.read_bytes().await {
                Ok(bytes) => bytes.to_vec(),
                Err(e) => {
                    tracing::error!("Could not read {}: {}", name, e);
                    toasts.error("Error", "Could not read the selected file");
                    uploading.set(false);
                    return;
                }
            };
            match change_avatar(&client, &storage, &account, &name, &content_type, bytes).await {
                Ok(updated) => {
                    saved(auth, profile, modal, updated);
                    toasts.success("Saved", "Your profile picture has been updated.");
                }
                Err(e) => {
                    tracing::error!("Avatar upload failed: {}", e);
                    toasts.error("Error", "Could not upload the picture");
                }
            }
            uploading.set(false);
        }
    };

    rsx! {
        Modal {
            title: "Change profile picture",
            on_close: move |_| modal.set(None),
            div {
                class: "avatar-upload",
                img { class: "avatar avatar-lg", src: "{preview}", alt: "Current picture" }
                label {
                    class: "avatar-upload-drop",
                    Icon { icon: FaUpload, width: 20, height: 20 }
                    span { if uploading() { "Uploading..." } else { "Choose an image" } }
                    input {
                        r#type: "file",
                        accept: "image/*",
                        disabled: uploading(),
                        onchange: upload,
                    }
                }
                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Sm,
                        disabled: uploading(),
                        onclick: move |_| modal.set(None),
                        "Cancel"
                    }
                }
            }
        }
    }
}
