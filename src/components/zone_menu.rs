use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ZoneEntry {
    pub id: u32,
    pub unlocked: bool,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ZoneMenuProps {
    pub zones: Vec<ZoneEntry>,
    pub current: usize,
    pub on_select: Callback<usize>,
}

/// Vertical zone list. Locked zones are labelled but still selectable, as in
/// the original game.
#[function_component(ZoneMenu)]
pub fn zone_menu(props: &ZoneMenuProps) -> Html {
    let rows: Vec<Html> = props
        .zones
        .iter()
        .enumerate()
        .map(|(idx, zone)| {
            let label = if zone.unlocked {
                format!("Zone {}", zone.id)
            } else {
                format!("Zone {} (Locked)", zone.id)
            };
            let onclick = {
                let on_select = props.on_select.clone();
                Callback::from(move |_| on_select.emit(idx))
            };
            let background = if idx == props.current {
                "#1f6feb"
            } else {
                "transparent"
            };
            html! {
                <li
                    style={format!("padding:8px 12px; border-radius:6px; cursor:pointer; background:{};", background)}
                    onclick={onclick}
                >
                    { label }
                </li>
            }
        })
        .collect();
    html! {
        <div style="width:180px; flex-shrink:0; background:#161b22; border-right:1px solid #30363d; padding:12px;">
            <div style="font-weight:600; margin-bottom:8px;">{"Zones"}</div>
            <ul style="list-style:none; margin:0; padding:0; display:flex; flex-direction:column; gap:4px;">
                { for rows }
            </ul>
        </div>
    }
}
