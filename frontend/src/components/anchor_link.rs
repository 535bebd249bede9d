use yew::prelude::*;

use crate::scroll;

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Runs after the scroll decision, whether or not a target was found.
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

/// In-page link that smooth-scrolls to its `#target` instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let after = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            if scroll::scroll_to_anchor(&href) {
                e.prevent_default();
            }
            if let Some(after) = &after {
                after.emit(());
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
