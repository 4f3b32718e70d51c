use dioxus::prelude::*;

use crate::context::AppContext;
use crate::pages::{Shell, use_nav_provider};
use crate::views::use_auth_forms_provider;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    use_nav_provider(ctx.router().current(), None, None);
    use_auth_forms_provider();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Learnpath" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Shell {}
            }
        }
    }
}
