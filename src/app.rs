use leptos::prelude::*;
use leptos::task::spawn_local;

use gloo_timers::future::TimeoutFuture;

use crate::boot::{self, PostSummary};
use crate::components::back_to_top::BackToTop;
use crate::components::editor::BlogEditor;
use crate::components::flash::{self, FlashMessages};
use crate::components::form_field::{
    ConfirmPasswordInput, PasswordInput, ValidatedInput, SUBMIT_REENABLE_MS,
};
use crate::components::lazy_image::LazyImage;
use crate::components::like_button::LikeButton;
use crate::components::navbar::Navbar;
use crate::components::share_button::ShareButton;
use crate::components::toast::{dismiss_toast, ToastContainer, ToastMessage};
use crate::enhance;
use crate::hotkeys;

/// Which view the nav has selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Page {
    Home,
    Write,
    SignUp,
}

#[component]
pub fn App() -> impl IntoView {
    let boot = boot::load();

    // UI state
    let page = RwSignal::new(Page::Home);
    let nav_open = RwSignal::new(false);
    let toasts = RwSignal::new(Vec::<ToastMessage>::new());
    let flashes = RwSignal::new(flash::banners_from(boot.flashes));
    let posts = RwSignal::new(boot.posts);

    // Document-level wiring, installed once
    hotkeys::install(nav_open);
    enhance::install_smooth_scroll();

    let on_navigate = Callback::new(move |p: Page| page.set(p));

    view! {
        <div class="app-container">
            <Navbar nav_open=nav_open on_navigate=on_navigate toasts=toasts />

            <FlashMessages flashes=flashes />

            <main class="main-content">
                {move || match page.get() {
                    Page::Home => view! { <HomePage posts=posts.into() toasts=toasts /> }.into_any(),
                    Page::Write => view! { <BlogEditor toasts=toasts /> }.into_any(),
                    Page::SignUp => view! { <RegisterPage /> }.into_any(),
                }}
            </main>

            <BackToTop />

            <ToastContainer
                toasts=toasts.into()
                on_dismiss=Callback::new(move |id: usize| dismiss_toast(toasts, id))
            />
        </div>
    }
}

#[component]
fn HomePage(
    posts: Signal<Vec<PostSummary>>,
    toasts: RwSignal<Vec<ToastMessage>>,
) -> impl IntoView {
    view! {
        <section class="blog-list">
            {move || {
                let list = posts.get();
                if list.is_empty() {
                    view! { <p class="blog-list-empty">"No posts yet. Be the first to write one!"</p> }
                        .into_any()
                } else {
                    list.into_iter()
                        .map(|post| view! { <PostCard post=post toasts=toasts /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn PostCard(post: PostSummary, toasts: RwSignal<Vec<ToastMessage>>) -> impl IntoView {
    view! {
        <article class="blog-card">
            {post.image_url.clone().map(|url| view! {
                <LazyImage src=url alt=post.title.clone() />
            })}
            <h2 class="blog-title">{post.title.clone()}</h2>
            <p class="blog-meta">"by " {post.author.clone()}</p>
            <p class="blog-excerpt">{post.excerpt.clone()}</p>
            <div class="blog-actions">
                <LikeButton post_id=post.id initial_likes=post.likes toasts=toasts />
                <ShareButton title=post.title.clone() text=post.excerpt.clone() toasts=toasts />
            </div>
        </article>
    }
}

#[component]
fn RegisterPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    // The form posts natively; the button just flips into its processing
    // state with a failsafe re-enable.
    let on_submit = move |_ev: web_sys::SubmitEvent| {
        if !submitting.get_untracked() {
            submitting.set(true);
            spawn_local(async move {
                TimeoutFuture::new(SUBMIT_REENABLE_MS).await;
                submitting.set(false);
            });
        }
    };

    view! {
        <section class="auth-section">
            <h1>"Create an account"</h1>
            <form class="auth-form" action="/signup" method="post" on:submit=on_submit>
                <ValidatedInput id="name" name="name" label="Name" required=true value=name />
                <ValidatedInput
                    id="email"
                    name="email"
                    label="Email"
                    input_type="email"
                    required=true
                    value=email
                />
                <PasswordInput
                    id="password"
                    name="password"
                    label="Password"
                    value=password
                    with_meter=true
                />
                <ConfirmPasswordInput
                    id="confirm_password"
                    name="confirm_password"
                    label="Confirm password"
                    value=confirm
                    primary=password.into()
                />
                <button type="submit" class="submit-btn" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Processing..." } else { "Sign Up" }}
                </button>
            </form>
        </section>
    }
}
