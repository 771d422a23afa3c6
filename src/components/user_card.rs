//! User Card Component

use leptos::prelude::*;

use crate::components::Card;
use crate::models::User;

/// Avatar initial, name, handle and contact lines for one user
#[component]
pub fn UserCard(user: User) -> impl IntoView {
    let initial = user.initial();
    let User { name, username, email, phone, website, .. } = user;

    view! {
        <Card class="user-card">
            <div class="user-header">
                <div class="avatar">{initial}</div>
                <div>
                    <h3 class="user-name">{name}</h3>
                    <p class="user-handle">{format!("@{}", username)}</p>
                </div>
            </div>
            <div class="user-details">
                <p>"📧 " {email}</p>
                <p>"📱 " {phone}</p>
                <p>"🌐 " {website}</p>
            </div>
        </Card>
    }
}
