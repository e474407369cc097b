use std::collections::HashMap;

use yew::prelude::*;

use crate::geometry::{
    BULL_INNER_RADIUS, BULL_OUTER_RADIUS, DOUBLE_OUTER_RADIUS, NUMBER_RADIUS, RIM_RADIUS,
    SLICE_ANGLE, SLICE_BANDS, annular_sector_path, polar, ring_path,
};
use crate::model::{BULL_NUMBER, Color, OverlayColors, SlicePart};

const BLACK: Color = Color::new(28, 28, 28, 1.0);
const CREAM: Color = Color::new(238, 226, 196, 1.0);
const RED: Color = Color::new(204, 36, 42, 1.0);
const GREEN: Color = Color::new(24, 138, 70, 1.0);
const WIRE: &str = "rgba(190, 190, 190, 0.8)";

#[derive(Properties, PartialEq, Clone)]
pub struct BoardRegionProps {
    pub path: AttrValue,
    pub color: Color,
    #[prop_or_default]
    pub overlay: Option<Color>,
}

/// One region shape: base fill, plus the host's overlay colour drawn on top.
#[function_component(BoardRegion)]
pub fn board_region(props: &BoardRegionProps) -> Html {
    html! {<>
        <path d={props.path.clone()} fill={props.color.to_css()} fill-rule="evenodd"
            stroke={WIRE} stroke-width="0.6" />
        if let Some(overlay) = props.overlay {
            <path d={props.path.clone()} fill={overlay.to_css()} fill-rule="evenodd" />
        }
    </>}
}

fn overlay_for(colors: Option<&HashMap<SlicePart, Color>>, part: SlicePart) -> Option<Color> {
    colors.and_then(|parts| parts.get(&part)).copied()
}

#[derive(Properties, PartialEq, Clone)]
pub struct BoardSliceProps {
    pub number: u8,
    /// Position of the slice clockwise from the top.
    pub index: usize,
    #[prop_or_default]
    pub overlay: Option<HashMap<SlicePart, Color>>,
}

#[function_component(BoardSlice)]
pub fn board_slice(props: &BoardSliceProps) -> Html {
    let centre = props.index as f64 * SLICE_ANGLE;
    let (start, end) = (centre - SLICE_ANGLE / 2.0, centre + SLICE_ANGLE / 2.0);
    // Slices alternate dark and light; the 20 at the top is dark.
    let dark = props.index % 2 == 0;
    let bands = SLICE_BANDS.iter().map(|(part, inner, outer)| {
        let color = match (part, dark) {
            (SlicePart::Triple | SlicePart::Double, true) => RED,
            (SlicePart::Triple | SlicePart::Double, false) => GREEN,
            (_, true) => BLACK,
            (_, false) => CREAM,
        };
        html! {
            <BoardRegion
                path={AttrValue::from(annular_sector_path(*inner, *outer, start, end))}
                color={color}
                overlay={overlay_for(props.overlay.as_ref(), *part)}
            />
        }
    });
    let label = polar(NUMBER_RADIUS, centre);
    html! {<g>
        { for bands }
        <text x={format!("{:.2}", label.x)} y={format!("{:.2}", label.y)}
            fill="#f4f4f4" font-size="22" font-family="sans-serif" font-weight="700"
            text-anchor="middle" dominant-baseline="central" style="pointer-events:none;">
            { props.number.to_string() }
        </text>
    </g>}
}

#[derive(Properties, PartialEq, Clone)]
pub struct BoardBullProps {
    #[prop_or_default]
    pub overlay: Option<HashMap<SlicePart, Color>>,
}

#[function_component(BoardBull)]
pub fn board_bull(props: &BoardBullProps) -> Html {
    html! {<g>
        <BoardRegion
            path={AttrValue::from(ring_path(BULL_INNER_RADIUS, BULL_OUTER_RADIUS))}
            color={GREEN}
            overlay={overlay_for(props.overlay.as_ref(), SlicePart::Outer)}
        />
        <BoardRegion
            path={AttrValue::from(ring_path(0.0, BULL_INNER_RADIUS))}
            color={RED}
            overlay={overlay_for(props.overlay.as_ref(), SlicePart::Inner)}
        />
    </g>}
}

#[derive(Properties, PartialEq, Clone)]
pub struct BoardRimProps {
    #[prop_or_default]
    pub overlay: Option<Color>,
}

/// Black ring outside the doubles; the slice numbers are drawn on it.
#[function_component(BoardRim)]
pub fn board_rim(props: &BoardRimProps) -> Html {
    html! {
        <BoardRegion
            path={AttrValue::from(ring_path(DOUBLE_OUTER_RADIUS, RIM_RADIUS))}
            color={BLACK}
            overlay={props.overlay}
        />
    }
}

/// Overlay colours for one sector number.
pub fn sector_overlay(colors: Option<&OverlayColors>, number: u8) -> Option<HashMap<SlicePart, Color>> {
    colors.and_then(|all| all.get(&number)).cloned()
}

pub fn bull_overlay(colors: Option<&OverlayColors>) -> Option<HashMap<SlicePart, Color>> {
    sector_overlay(colors, BULL_NUMBER)
}
