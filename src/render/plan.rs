use crate::animate::motion::CutterPose;
use crate::crumbs::CrumbStore;
use crate::draw::list::{DrawList, DrawOp, StrokeStyle, dashed_line};
use crate::foundation::core::{Affine, BezPath, Rgba8, Vec2};
use crate::geometry::{DishLayout, Sector, SliceCount, cut_lines, explosion_offset, sectors, wedge_path};
use crate::session::RenderState;

/// How far cut wedges move apart, logical px.
pub const EXPLOSION_OFFSET: f64 = 25.0;
/// Guide lines run this far past the rim.
pub const GUIDE_OVERSHOOT: f64 = 10.0;
/// Shadow blur of the halo behind the dish.
pub const HALO_BLUR: f64 = 40.0;
/// Shadow blur of the glow under the guide lines.
pub const GLOW_BLUR: f64 = 10.0;

const GUIDE_WIDTH: f64 = 2.0;
const GUIDE_DASH: f64 = 10.0;
const GUIDE_GAP: f64 = 10.0;
const EDGE_WIDTH: f64 = 1.0;

pub(crate) fn guide_color() -> Rgba8 {
    Rgba8::rgba_f(255, 255, 255, 0.8)
}

pub(crate) fn glow_color() -> Rgba8 {
    // canvas shadows take the stroke's alpha
    Rgba8::WHITE.with_alpha_f(0.8)
}

/// One wedge as drawn: the texture clipped to `path`, moved by `offset`.
#[derive(Clone, Debug)]
pub struct WedgePlacement {
    pub sector: Sector,
    pub offset: Vec2,
    pub path: BezPath,
    /// Cut-edge highlight, drawn right after the wedge.
    pub edge: Option<DrawOp>,
}

/// Everything one frame draws, in logical canvas pixels and in paint order: halo, crumbs,
/// wedges (with edges), guides over their glow, cutter.
#[derive(Clone, Debug)]
pub struct ScenePlan {
    pub layout: DishLayout,
    pub halo: Rgba8,
    pub crumbs: DrawList,
    pub wedges: Vec<WedgePlacement>,
    /// Empty once cut.
    pub guides: DrawList,
    pub cutter: Option<CutterPose>,
}

pub fn compile_scene(
    state: &RenderState,
    crumbs: &CrumbStore,
    size: f64,
    cutter: Option<CutterPose>,
) -> ScenePlan {
    let layout = DishLayout::for_size(size);
    let spec = state.style.spec();
    let edge_color = Rgba8::rgba_f(255, 255, 255, 0.3);

    let wedges = sectors(state.slices)
        .into_iter()
        .map(|sector| {
            let offset = if state.cut {
                explosion_offset(&sector, EXPLOSION_OFFSET)
            } else {
                Vec2::ZERO
            };
            let path = wedge_path(layout.center, layout.radius, &sector);
            let edge = state.cut.then(|| {
                DrawOp::stroke(path.clone(), edge_color, StrokeStyle::new(EDGE_WIDTH))
                    .with_transform(Affine::translate(offset))
            });
            WedgePlacement {
                sector,
                offset,
                path,
                edge,
            }
        })
        .collect();

    let guides = if state.cut {
        DrawList::new()
    } else {
        guide_list(state.slices, layout)
    };

    ScenePlan {
        layout,
        halo: spec.shadow,
        crumbs: crumbs.draw_list(spec.crumb_shape),
        wedges,
        guides,
        cutter,
    }
}

/// Dashed guides, one op per upcoming cut.
pub fn guide_list(slices: SliceCount, layout: DishLayout) -> DrawList {
    let mut out = DrawList::new();
    for line in cut_lines(slices, layout.center, layout.radius, GUIDE_OVERSHOOT) {
        out.stroke(
            dashed_line(line.from, line.to, GUIDE_DASH, GUIDE_GAP),
            guide_color(),
            StrokeStyle::new(GUIDE_WIDTH),
        );
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/plan.rs"]
mod tests;
