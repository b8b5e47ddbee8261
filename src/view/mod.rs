//! Pure derivation of the complete view state.
//!
//! Everything the frontend renders is computed here as a function of
//! (datasets, config, session state) — scene content, step text, selector
//! highlights, navigation targets, material groups, and column widths.
//! Rendering never mutates anything: a failed derivation simply leaves the
//! previous view on screen.

use serde::Serialize;

use crate::config::{Config, ProductVariant};
use crate::constants::{HAZARD_IMAGE_PATH, HAZARD_STEP_KEY, TOOL_IMAGE_DIR};
use crate::dataset::Datasets;
use crate::geometry::{GeometryError, GeometryResolver, MeshObject};
use crate::session::{column_layout, ColumnLayout, PanelId, SessionState};

/// Icon class shown next to a step with a safety notification.
pub const NOTIFICATION_ICON_CLASS: &str = "icon-warning";

/// Banner class while the current step carries a notification.
pub const BANNER_HAS_NOTIFICATION: &str = "has-notification";

/// Banner class while the current step has no notification.
pub const BANNER_NO_NOTIFICATION: &str = "no-notification";

/// Scene revision token; constant so clients keep the camera across steps.
const SCENE_REVISION: &str = "keep-camera";

/// Errors raised while deriving a view.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The geometry resolver could not supply a mesh; passed through as-is.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// The session points at a step that is not in the steps table.
    #[error("current step '{0}' missing from steps table")]
    MissingStep(String),
}

/// Fixed camera placement of the 3D scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Camera {
    /// Camera eye position.
    pub eye: [f32; 3],
    /// Camera up vector.
    pub up: [f32; 3],
}

/// 3D scene content for the active step.
#[derive(Debug, Clone, Serialize)]
pub struct SceneView {
    /// Revision token; unchanged across steps so the camera is preserved.
    pub revision: String,
    /// Camera placement.
    pub camera: Camera,
    /// Whether axes and their background are drawn.
    pub show_axes: bool,
    /// Scene aspect mode.
    pub aspect_mode: String,
    /// One renderable mesh per object name of the step, in step order.
    pub meshes: Vec<MeshObject>,
}

/// Step name and instruction text for the description panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepPanelView {
    /// Step display name.
    pub name: String,
    /// Instruction text.
    pub description: String,
}

/// Tools panel content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolsView {
    /// Name of the required tool(s).
    pub name: String,
    /// Image reference; empty string when the step has no tool image.
    pub image: String,
}

/// Notification banner content; two-state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationView {
    /// Notification text; empty when the step has none.
    pub text: String,
    /// Icon class; empty when the step has no notification.
    pub icon_class: String,
    /// Banner class selecting the bordered or plain rendition.
    pub banner_class: String,
}

/// One entry of the step selector list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepSelector {
    /// Step key this selector targets.
    pub step_id: String,
    /// Step display name.
    pub name: String,
    /// True for exactly the selector matching the current step.
    pub highlighted: bool,
    /// True if the step carries a safety notification (warning icon).
    pub has_notification: bool,
}

/// Target step ids of the prev/next navigation controls.
///
/// Recomputed after every transition; a side is absent at the respective
/// end of the sequence and the frontend disables that control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavControls {
    /// Target of the backward control.
    pub back: Option<String>,
    /// Target of the forward control.
    pub forward: Option<String>,
}

/// One row of a material group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterialRow {
    /// Part display name.
    pub name: String,
    /// Display swatch value.
    pub color: String,
}

/// Parts of one category, in file row order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterialGroup {
    /// Grouping label.
    pub category: String,
    /// Parts of this category.
    pub parts: Vec<MaterialRow>,
}

/// Product metadata panel content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductView {
    /// Product display name.
    pub name: String,
    /// Available product variants.
    pub variants: Vec<ProductVariant>,
}

/// Visibility of one panel, for rendering content vs. placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelState {
    /// Panel identifier.
    pub panel: PanelId,
    /// True while the panel content is shown.
    pub visible: bool,
}

/// The complete, fully-computed UI state after an interaction.
#[derive(Debug, Clone, Serialize)]
pub struct ViewState {
    /// Key of the active step.
    pub current_step_id: String,
    /// 3D scene content.
    pub scene: SceneView,
    /// Step description panel content.
    pub step: StepPanelView,
    /// Tools panel content.
    pub tools: ToolsView,
    /// Hazard pictogram reference; empty except for the hazard step.
    pub hazard_image: String,
    /// Notification banner content.
    pub notification: NotificationView,
    /// Step selector list in dataset order.
    pub step_selectors: Vec<StepSelector>,
    /// Navigation control targets.
    pub nav: NavControls,
    /// Material list grouped by category.
    pub materials: Vec<MaterialGroup>,
    /// Product metadata.
    pub product: ProductView,
    /// Panel visibility snapshot.
    pub panels: Vec<PanelState>,
    /// Derived three-column widths.
    pub columns: ColumnLayout,
}

/// Derives the complete view state for the session's current step.
pub fn render(
    config: &Config,
    session: &SessionState,
    resolver: &dyn GeometryResolver,
) -> Result<ViewState, RenderError> {
    let datasets = session.datasets();
    let current_id = session.navigation.current_step_id();
    let step = datasets
        .steps
        .get(current_id)
        .ok_or_else(|| RenderError::MissingStep(current_id.to_string()))?;

    let meshes = resolver.resolve(&step.object_names)?;

    Ok(ViewState {
        current_step_id: current_id.to_string(),
        scene: scene_view(meshes),
        step: StepPanelView {
            name: step.name.clone(),
            description: step.description.clone(),
        },
        tools: ToolsView {
            name: step.tools.clone(),
            image: step
                .tools_img_path
                .as_ref()
                .map(|path| format!("{TOOL_IMAGE_DIR}{path}"))
                .unwrap_or_default(),
        },
        hazard_image: hazard_image(current_id),
        notification: notification_view(step.notifications.as_deref()),
        step_selectors: step_selectors(datasets, current_id),
        nav: NavControls {
            back: session
                .navigation
                .back_target(&datasets.steps)
                .map(String::from),
            forward: session
                .navigation
                .forward_target(&datasets.steps)
                .map(String::from),
        },
        materials: material_groups(datasets),
        product: ProductView {
            name: config.product.name.clone(),
            variants: config.product.variants.clone(),
        },
        panels: PanelId::ALL
            .into_iter()
            .map(|panel| PanelState {
                panel,
                visible: session.panels.is_visible(panel),
            })
            .collect(),
        columns: column_layout(&session.panels),
    })
}

/// Assembles the scene configuration around the resolved meshes.
fn scene_view(meshes: Vec<MeshObject>) -> SceneView {
    SceneView {
        revision: SCENE_REVISION.to_string(),
        camera: Camera {
            eye: [2.0, 2.0, 2.0],
            up: [0.0, 1.0, 0.0],
        },
        show_axes: false,
        aspect_mode: "data".to_string(),
        meshes,
    }
}

/// Hazard pictogram reference for the step, empty for all but one step.
fn hazard_image(step_id: &str) -> String {
    if step_id == HAZARD_STEP_KEY {
        HAZARD_IMAGE_PATH.to_string()
    } else {
        String::new()
    }
}

/// Two-state notification banner content.
fn notification_view(notifications: Option<&str>) -> NotificationView {
    match notifications {
        Some(text) if !text.is_empty() => NotificationView {
            text: text.to_string(),
            icon_class: NOTIFICATION_ICON_CLASS.to_string(),
            banner_class: BANNER_HAS_NOTIFICATION.to_string(),
        },
        _ => NotificationView {
            text: String::new(),
            icon_class: String::new(),
            banner_class: BANNER_NO_NOTIFICATION.to_string(),
        },
    }
}

/// Builds the selector list; exactly one entry is highlighted.
fn step_selectors(datasets: &Datasets, current_id: &str) -> Vec<StepSelector> {
    datasets
        .steps
        .iter()
        .map(|step| StepSelector {
            step_id: step.key.clone(),
            name: step.name.clone(),
            highlighted: step.key == current_id,
            has_notification: step.has_notification(),
        })
        .collect()
}

/// Groups parts by category, preserving file row order of both groups and
/// rows within a group.
fn material_groups(datasets: &Datasets) -> Vec<MaterialGroup> {
    let mut groups: Vec<MaterialGroup> = Vec::new();
    for part in &datasets.parts {
        let row = MaterialRow {
            name: part.name.clone(),
            color: part.color.clone(),
        };
        match groups
            .iter()
            .position(|group| group.category == part.category)
        {
            Some(index) => groups[index].parts.push(row),
            None => groups.push(MaterialGroup {
                category: part.category.clone(),
                parts: vec![row],
            }),
        }
    }
    groups
}
