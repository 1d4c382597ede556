use std::rc::Rc;

use mockfeed_client::Config;
use yew::prelude::*;

use crate::{session, ui, util};

pub struct App {
    logged_in: bool,
}

pub enum AppMsg {
    Logout,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            logged_in: session::is_logged_in(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::Logout => {
                if !util::confirm("Do you really want to log out?") {
                    return false;
                }
                session::log_out();
                self.logged_in = false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !self.logged_in {
            return html! {
                <div class="container">
                    <ui::Login delay_ms={ Config::default().login_delay_ms } />
                </div>
            };
        }

        let config = match session::current_user() {
            Some(user) => Config::for_user(&user),
            None => Config::default(),
        };
        html! {
            <ui::FeedView
                config={ Rc::new(config) }
                on_logout={ ctx.link().callback(|_| AppMsg::Logout) }
            />
        }
    }
}
