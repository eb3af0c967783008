use crate::dashboard::components::NoticeBanner;
use crate::models::Notice;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AuthPanelProps {
    /// Display name of the logged-in user, if any.
    pub user: Option<String>,
    pub notice: Option<Notice>,
}

#[function_component(AuthPanel)]
pub fn auth_panel(props: &AuthPanelProps) -> Html {
    html! {
        <div class="mb-6">
            <h3 class="text-lg font-semibold text-gray-800 mb-2">{"인증"}</h3>
            <NoticeBanner notice={props.notice.clone()} />
            {
                if let Some(name) = &props.user {
                    html! {
                        <form method="post" action="/logout">
                            <div class="bg-green-100 border border-green-400 text-green-700 px-4 py-3 rounded mb-2">
                                { format!("로그인: {name}") }
                            </div>
                            <button type="submit" class="w-full bg-red-600 text-white p-2 rounded hover:bg-red-700">
                                {"로그아웃"}
                            </button>
                        </form>
                    }
                } else {
                    html! {
                        <form method="post" action="/login">
                            <label class="block text-gray-700 text-sm font-bold mb-1">{"아이디"}</label>
                            <input
                                type="text"
                                name="username"
                                class="w-full p-2 border border-gray-300 rounded mb-2"
                            />
                            <label class="block text-gray-700 text-sm font-bold mb-1">{"비밀번호"}</label>
                            <input
                                type="password"
                                name="password"
                                class="w-full p-2 border border-gray-300 rounded mb-2"
                            />
                            <button type="submit" class="w-full bg-blue-600 text-white p-2 rounded hover:bg-blue-700">
                                {"로그인"}
                            </button>
                        </form>
                    }
                }
            }
        </div>
    }
}
