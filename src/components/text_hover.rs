use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextHoverProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Renders `text` letter by letter; the hovered letter grows and lifts.
#[function_component(TextHoverEffect)]
pub fn text_hover_effect(props: &TextHoverProps) -> Html {
    let hovered = use_state(|| None::<usize>);

    let letters = props.text.chars().enumerate().map(|(i, letter)| {
        let lifted = *hovered == Some(i);
        let (scale, lift) = if lifted { (1.4, -8) } else { (1.0, 0) };
        let on_enter = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(Some(i)))
        };
        let on_leave = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(None))
        };
        // Non-breaking space keeps word gaps inside the inline-flex row.
        let glyph = if letter == ' ' { '\u{00A0}' } else { letter };
        html! {
            <span
                class="hover-letter"
                onmouseenter={on_enter}
                onmouseleave={on_leave}
                style={format!("transform: translateY({}px) scale({});", lift, scale)}
            >
                {glyph.to_string()}
            </span>
        }
    });

    html! {
        <span class={classes!("text-hover", props.class.clone())}>
            { for letters }
            <style>
                {r#"
                    .text-hover {
                        display: inline-flex;
                    }
                    .hover-letter {
                        display: inline-block;
                        cursor: default;
                        transition: transform 0.35s cubic-bezier(0.34, 1.56, 0.64, 1);
                    }
                "#}
            </style>
        </span>
    }
}
