use yew::{Children, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Page chrome shared by the signed-in pages.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="min-h-screen bg-base-100 flex flex-col">
            {props.children.clone()}
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <p>{"Tripper · Powered by Rust and Yew"}</p>
            </footer>
        </div>
    }
}
