use leptos::prelude::*;
use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};

use crate::scene::{mesh_style, Camera, Mesh, Shape};

fn shape_class(shape: Shape) -> &'static str {
    match shape {
        Shape::Cube => "mesh mesh-cube",
        Shape::Sphere => "mesh mesh-sphere",
        Shape::Torus => "mesh mesh-torus",
    }
}

/// Decorative scene. Meshes are CSS-3D boxes placed by projecting their pose
/// each animation frame.
#[component]
pub fn Scene(
    meshes: Vec<Mesh>,
    camera: Camera,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let (elapsed, set_elapsed) = signal(0.0_f32);
    // stops on its own when the owner is disposed
    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        set_elapsed.update(|t| *t += (args.delta / 1000.0) as f32);
    });

    view! {
        <div
            class=format!("relative w-full h-full overflow-hidden pointer-events-none {class}")
            style="perspective: 800px"
            aria-hidden="true"
        >
            {meshes
                .into_iter()
                .map(|mesh| view! { <MeshView mesh camera elapsed /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn MeshView(mesh: Mesh, camera: Camera, elapsed: ReadSignal<f32>) -> impl IntoView {
    view! {
        <div
            class=shape_class(mesh.shape)
            style=move || {
                mesh_style(&mesh, &camera, elapsed.get()).unwrap_or_else(|| "display: none".to_string())
            }
        ></div>
    }
}
