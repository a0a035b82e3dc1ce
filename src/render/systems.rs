use bevy::asset::RenderAssetUsages;
use bevy::mesh::Indices;
use bevy::prelude::*;
use bevy::render::render_resource::PrimitiveTopology;
use bevy::window::PrimaryWindow;
use bevy_egui::{EguiContexts, egui};

use super::RenderConfig;
use super::entities::{HexGlow, HexStyle, HexTile, TileMesh};
use crate::camera::CameraState;
use crate::map::HexMap;
use crate::math::{self, HEX_RADIUS};

/// Depth of tile fills; halos sit behind every fill.
const TILE_Z: f32 = 0.0;
/// Local depth step between successive halos (scaled by the tile's radius).
const GLOW_Z_STEP: f32 = -0.01;

// ── Startup ─────────────────────────────────────────────────────────

/// Creates the shared hex mesh and sets the outline stroke width.
pub fn setup_render(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut gizmo_store: ResMut<GizmoConfigStore>,
    cfg: Res<RenderConfig>,
) {
    commands.insert_resource(TileMesh(meshes.add(unit_hex_mesh())));
    let (gizmo_cfg, _) = gizmo_store.config_mut::<DefaultGizmoConfigGroup>();
    gizmo_cfg.line.width = cfg.outline_width;
}

/// Triangle fan over the six corners of a unit-radius hex, in scene space.
fn unit_hex_mesh() -> Mesh {
    let corners = math::hex_corners(Vec2::ZERO, 1.0);
    let mut positions = vec![[0.0, 0.0, 0.0]];
    positions.extend(corners.iter().map(|&c| math::world_to_scene(c, 0.0).to_array()));
    let normals = vec![[0.0, 0.0, 1.0]; positions.len()];
    let uvs: Vec<[f32; 2]> = positions
        .iter()
        .map(|p| [p[0] * 0.5 + 0.5, 0.5 - p[1] * 0.5])
        .collect();

    // The y flip reverses the corner winding; emit (centre, next, current)
    // so every triangle stays counter-clockwise in scene space.
    let mut indices = Vec::with_capacity(18);
    for i in 0..6u16 {
        indices.extend([0, 1 + (i + 1) % 6, 1 + i]);
    }

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    .with_inserted_indices(Indices::U16(indices))
}

// ── Update ──────────────────────────────────────────────────────────

/// Respawns one tile per hex record whenever the map changes.
pub fn rebuild_tiles(
    mut commands: Commands,
    mut materials: ResMut<Assets<ColorMaterial>>,
    map: Res<HexMap>,
    tiles: Query<Entity, With<HexTile>>,
    mesh: Option<Res<TileMesh>>,
    cfg: Res<RenderConfig>,
) {
    let Some(mesh) = mesh else { return };

    for entity in &tiles {
        commands.entity(entity).despawn();
    }

    for hex in map.iter() {
        let style = HexStyle::for_record(hex, &cfg);
        let layers = math::glow_layers(HEX_RADIUS, style.glow, cfg.glow_steps, cfg.glow_alpha);

        commands
            .spawn((
                HexTile { id: hex.id.clone() },
                Name::new(format!("HexTile({})", hex.id)),
                Mesh2d(mesh.0.clone()),
                MeshMaterial2d(materials.add(style.fill)),
                Transform::from_translation(math::world_to_scene(hex.center(), TILE_Z))
                    .with_scale(Vec3::splat(HEX_RADIUS)),
            ))
            .with_children(|parent| {
                for (k, layer) in layers.iter().enumerate() {
                    parent.spawn((
                        HexGlow,
                        Mesh2d(mesh.0.clone()),
                        MeshMaterial2d(materials.add(style.fill.with_alpha(layer.alpha))),
                        Transform::from_xyz(0.0, 0.0, GLOW_Z_STEP * (k + 1) as f32)
                            .with_scale(Vec3::splat(layer.radius / HEX_RADIUS)),
                    ));
                }
            });
    }

    debug!("Rebuilt {} hex tiles", map.len());
}

/// Strokes the outline of every hex. Runs every frame; an empty map draws nothing.
pub fn draw_outlines(mut gizmos: Gizmos, map: Res<HexMap>, cfg: Res<RenderConfig>) {
    for hex in map.iter() {
        let corners = math::hex_corners(hex.center(), HEX_RADIUS);
        let closed = corners
            .iter()
            .chain(corners.first())
            .map(|&c| math::world_to_scene(c, 0.0).truncate());
        gizmos.linestrip_2d(closed, cfg.outline_color);
    }
}

/// Debug overlay: labels each hex with its id and axial coordinate.
pub fn draw_hex_labels(
    mut contexts: EguiContexts,
    map: Res<HexMap>,
    camera: Res<CameraState>,
    windows: Query<&Window, With<PrimaryWindow>>,
) -> Result {
    let Ok(window) = windows.single() else {
        return Ok(());
    };
    let viewport = window.size();
    let painter = contexts
        .ctx_mut()?
        .layer_painter(egui::LayerId::background());

    for hex in map.iter() {
        let screen = camera.world_to_screen(hex.center(), viewport);
        painter.text(
            egui::pos2(screen.x, screen.y),
            egui::Align2::CENTER_CENTER,
            format!("{} ({},{})", hex.id, hex.coord.x, hex.coord.y),
            egui::FontId::proportional(11.0),
            egui::Color32::WHITE,
        );
    }
    Ok(())
}
