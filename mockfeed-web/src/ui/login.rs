use std::time::Duration;

use mockfeed_client::api::{check_login, LoginError};
use yew::prelude::*;

use crate::{session, util};

#[derive(Clone, PartialEq, Properties)]
pub struct LoginProps {
    /// Time spent on the loading button before redirecting
    pub delay_ms: u64,
}

pub struct Login {
    user: String,
    pass: String,
    caps_lock: bool,
    loading: bool,
}

pub enum LoginMsg {
    UserChanged(String),
    PassChanged(String),
    KeyUp(bool),
    SubmitClicked,
    DelayElapsed {
        user: String,
        redirect_to: &'static str,
    },
}

impl Component for Login {
    type Message = LoginMsg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            user: String::new(),
            pass: String::new(),
            caps_lock: false,
            loading: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LoginMsg::UserChanged(u) => self.user = u,
            LoginMsg::PassChanged(p) => self.pass = p,
            LoginMsg::KeyUp(caps_lock) => {
                let changed = self.caps_lock != caps_lock;
                self.caps_lock = caps_lock;
                return changed;
            }
            LoginMsg::SubmitClicked => {
                if self.loading {
                    return false;
                }
                if self.caps_lock {
                    util::alert(&LoginError::CapsLock.to_string());
                    return false;
                }
                let credential = match check_login(&self.user, &self.pass) {
                    Ok(c) => c,
                    Err(err) => {
                        tracing::info!(%err, "login refused");
                        util::alert(&err.to_string());
                        return false;
                    }
                };
                self.loading = true;
                let user = self.user.trim().to_string();
                let redirect_to = credential.redirect_to;
                let delay = Duration::from_millis(ctx.props().delay_ms);
                ctx.link().send_future(async move {
                    if let Err(err) = wasm_timer::Delay::new(delay).await {
                        tracing::warn!(?err, "login delay interrupted");
                    }
                    LoginMsg::DelayElapsed { user, redirect_to }
                });
            }
            LoginMsg::DelayElapsed { user, redirect_to } => match session::log_in(&user) {
                Ok(()) => {
                    util::navigate(redirect_to);
                    return false;
                }
                Err(err) => {
                    tracing::error!(?err, "failed to save the session");
                    util::alert("Could not save the session, please try again");
                    self.loading = false;
                }
            },
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        macro_rules! callback_for {
            ($msg:ident) => {
                ctx.link().callback(|e: web_sys::InputEvent| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    LoginMsg::$msg(input.value())
                })
            };
        }
        let caps_lock_warning = self.caps_lock.then(|| {
            html! {
                <p class="caps-lock-warning text-warning">{ "Caps lock is on" }</p>
            }
        });
        html! {<>
            <div class="text-center my-4">
                <h1>{ "Login" }</h1>
            </div>
            <form
                class="login-form"
                onsubmit={ ctx.link().callback(|e: SubmitEvent| {
                    e.prevent_default();
                    LoginMsg::SubmitClicked
                }) }
                onkeyup={ ctx.link().callback(|e: KeyboardEvent| {
                    LoginMsg::KeyUp(e.get_modifier_state("CapsLock"))
                }) }
            >
                <div class="input-group mb-3">
                    <label class="input-group-text" for="username">{ "Username" }</label>
                    <input
                        type="text"
                        class="form-control form-control-lg"
                        id="username"
                        placeholder="username"
                        value={ self.user.clone() }
                        oninput={ callback_for!(UserChanged) }
                    />
                </div>
                <div class="input-group mb-3">
                    <label class="input-group-text" for="password">{ "Password" }</label>
                    <input
                        type="password"
                        class="form-control form-control-lg"
                        id="password"
                        placeholder="password"
                        value={ self.pass.clone() }
                        oninput={ callback_for!(PassChanged) }
                    />
                </div>
                { for caps_lock_warning }
                <input
                    type="submit"
                    class="btn btn-primary btn-lg"
                    disabled={ self.loading }
                    value={ if self.loading { "Loading..." } else { "Login" } }
                />
            </form>
        </>}
    }
}
