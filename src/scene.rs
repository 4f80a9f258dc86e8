//! Declarative descriptions of the decorative 3D scenes, plus the per-frame
//! math the renderer needs. Nothing here is read back from the page.

use std::f32::consts::PI;

use crate::profile::Skill;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Cube,
    Sphere,
    Torus,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mesh {
    pub shape: Shape,
    pub position: [f32; 3],
    pub color: &'static str,
    /// Spin and bob rate; 1.0 is one radian of bob phase per second.
    pub speed: f32,
    /// Edge length (cube) or diameter (sphere, torus) in scene units.
    pub size: f32,
}

impl Mesh {
    pub const fn cube(position: [f32; 3], color: &'static str, speed: f32, size: f32) -> Self {
        Self {
            shape: Shape::Cube,
            position,
            color,
            speed,
            size,
        }
    }

    pub const fn sphere(position: [f32; 3], color: &'static str, speed: f32) -> Self {
        Self {
            shape: Shape::Sphere,
            position,
            color,
            speed,
            size: 0.6,
        }
    }

    pub const fn torus(position: [f32; 3], color: &'static str, speed: f32) -> Self {
        Self {
            shape: Shape::Torus,
            position,
            color,
            speed,
            size: 1.0,
        }
    }

    /// Pose after `t` seconds: steady tumble plus a vertical bob.
    pub fn pose_at(&self, t: f32) -> Pose {
        let [x, y, z] = self.position;
        Pose {
            position: [x, y + (t * self.speed).sin() * BOB_AMPLITUDE, z],
            rotation: [t * self.speed * 0.5, t * self.speed * 0.3],
        }
    }
}

const BOB_AMPLITUDE: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: [f32; 3],
    /// Rotation about x and y, radians.
    pub rotation: [f32; 2],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Distance from the origin along +z, looking toward -z.
    pub z: f32,
    /// Vertical field of view, degrees.
    pub fov: f32,
}

/// A point projected onto the viewport. `x` and `y` are fractions of the
/// viewport (0.0..1.0 when on screen, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl Camera {
    pub const fn new(z: f32, fov: f32) -> Self {
        Self { z, fov }
    }

    /// Perspective projection; `None` for points at or behind the camera.
    pub fn project(&self, point: [f32; 3]) -> Option<Projected> {
        let depth = self.z - point[2];
        if depth <= f32::EPSILON {
            return None;
        }
        let focal = 1.0 / (self.fov.to_radians() / 2.0).tan();
        let scale = focal / depth;
        Some(Projected {
            x: 0.5 + point[0] * scale * 0.5,
            y: 0.5 - point[1] * scale * 0.5,
            scale,
        })
    }
}

/// Pixels per scene unit at a projected scale of 1.
const UNIT_PX: f32 = 120.0;

/// Inline CSS placing `mesh` at time `t`, or `None` when it is behind the camera.
/// Colour is passed through `--mesh-color` for the stylesheet to pick up.
pub fn mesh_style(mesh: &Mesh, camera: &Camera, t: f32) -> Option<String> {
    let pose = mesh.pose_at(t);
    let p = camera.project(pose.position)?;
    let px = mesh.size * p.scale * UNIT_PX;
    Some(format!(
        "left: {:.2}%; top: {:.2}%; width: {px:.1}px; height: {px:.1}px; \
         transform: translate(-50%, -50%) rotateX({:.3}rad) rotateY({:.3}rad); \
         --mesh-color: {}",
        p.x * 100.0,
        p.y * 100.0,
        pose.rotation[0],
        pose.rotation[1],
        mesh.color,
    ))
}

pub const HERO_CAMERA: Camera = Camera::new(5.0, 75.0);

pub const HERO_SCENE: [Mesh; 4] = [
    Mesh::cube([-3.0, 2.0, 0.0], "#06b6d4", 0.8, 1.0),
    Mesh::cube([3.0, -1.0, -2.0], "#8b5cf6", 1.2, 1.0),
    Mesh::cube([0.0, 3.0, -3.0], "#ec4899", 1.0, 0.8),
    Mesh::cube([-2.0, -2.0, 1.0], "#10b981", 0.9, 1.2),
];

pub const PROJECTS_CAMERA: Camera = Camera::new(5.0, 75.0);

pub const PROJECTS_SCENE: [Mesh; 4] = [
    Mesh::cube([-2.0, 1.0, -1.0], "#06b6d4", 1.5, 0.5),
    Mesh::cube([2.0, -1.0, 0.0], "#8b5cf6", 1.5, 0.5),
    Mesh::cube([0.0, 2.0, -2.0], "#ec4899", 1.5, 0.5),
    Mesh::cube([-1.0, -2.0, 1.0], "#10b981", 1.5, 0.5),
];

pub const CONTACT_CAMERA: Camera = Camera::new(6.0, 75.0);

pub const CONTACT_SCENE: [Mesh; 5] = [
    Mesh::sphere([-3.0, 2.0, -1.0], "#06b6d4", 1.5),
    Mesh::torus([3.0, -1.0, 0.0], "#8b5cf6", 2.0),
    Mesh::sphere([1.0, 3.0, -2.0], "#ec4899", 1.5),
    Mesh::torus([-2.0, -2.0, 1.0], "#10b981", 2.0),
    Mesh::sphere([2.0, 1.0, -1.0], "#f59e0b", 1.5),
];

pub const SKILLS_CAMERA: Camera = Camera::new(8.0, 75.0);
pub const SKILL_ORBIT_RADIUS: f32 = 3.0;

/// One sphere per skill, evenly spaced on a circle in the z = 0 plane, around
/// a central cube.
pub fn skill_orbit(skills: &[Skill], radius: f32) -> Vec<Mesh> {
    let step = if skills.is_empty() {
        0.0
    } else {
        2.0 * PI / skills.len() as f32
    };
    skills
        .iter()
        .enumerate()
        .map(|(i, skill)| {
            let angle = i as f32 * step;
            Mesh::sphere(
                [angle.cos() * radius, angle.sin() * radius, 0.0],
                skill.color,
                1.0 + i as f32 * 0.2,
            )
        })
        .chain(std::iter::once(Mesh::cube(
            [0.0, 0.0, 0.0],
            "#8b5cf6",
            1.5,
            1.0,
        )))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::SKILLS;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_pose_at_zero_is_base_pose() {
        for mesh in HERO_SCENE {
            let pose = mesh.pose_at(0.0);
            assert_eq!(pose.position, mesh.position);
            assert_eq!(pose.rotation, [0.0, 0.0]);
        }
    }

    #[test]
    fn test_pose_bob_is_bounded() {
        let mesh = HERO_SCENE[1];
        for i in 0..200 {
            let pose = mesh.pose_at(i as f32 * 0.37);
            assert!((pose.position[1] - mesh.position[1]).abs() <= BOB_AMPLITUDE + 1e-6);
            assert_eq!(pose.position[0], mesh.position[0]);
            assert_eq!(pose.position[2], mesh.position[2]);
        }
        let pose = mesh.pose_at(2.0);
        assert!(close(pose.rotation[0], 2.0 * 1.2 * 0.5));
        assert!(close(pose.rotation[1], 2.0 * 1.2 * 0.3));
    }

    #[test]
    fn test_projection_centres_origin() {
        let p = HERO_CAMERA.project([0.0, 0.0, 0.0]).unwrap();
        assert!(close(p.x, 0.5));
        assert!(close(p.y, 0.5));

        // up and right on screen
        let p = HERO_CAMERA.project([1.0, 1.0, 0.0]).unwrap();
        assert!(p.x > 0.5);
        assert!(p.y < 0.5);
    }

    #[test]
    fn test_projection_shrinks_with_depth() {
        let near = HERO_CAMERA.project([0.0, 0.0, 1.0]).unwrap();
        let far = HERO_CAMERA.project([0.0, 0.0, -3.0]).unwrap();
        assert!(near.scale > far.scale);
    }

    #[test]
    fn test_projection_culls_behind_camera() {
        assert!(HERO_CAMERA.project([0.0, 0.0, 5.0]).is_none());
        assert!(HERO_CAMERA.project([0.0, 0.0, 9.0]).is_none());
    }

    #[test]
    fn test_mesh_style() {
        let mesh = Mesh::cube([0.0, 0.0, 0.0], "#8b5cf6", 1.0, 1.0);
        let style = mesh_style(&mesh, &HERO_CAMERA, 0.0).unwrap();
        assert!(style.starts_with("left: 50.00%; top: 50.00%;"));
        assert!(style.contains("rotateX(0.000rad)"));
        assert!(style.ends_with("--mesh-color: #8b5cf6"));

        let behind = Mesh::cube([0.0, 0.0, 6.0], "#8b5cf6", 1.0, 1.0);
        assert!(mesh_style(&behind, &HERO_CAMERA, 0.0).is_none());
    }

    #[test]
    fn test_skill_orbit_on_circle() {
        let meshes = skill_orbit(&SKILLS, SKILL_ORBIT_RADIUS);
        assert_eq!(meshes.len(), SKILLS.len() + 1);
        for (mesh, skill) in meshes.iter().zip(SKILLS.iter()) {
            let [x, y, z] = mesh.position;
            assert!(close((x * x + y * y).sqrt(), SKILL_ORBIT_RADIUS));
            assert_eq!(z, 0.0);
            assert_eq!(mesh.color, skill.color);
            assert_eq!(mesh.shape, Shape::Sphere);
        }
        assert!(close(meshes[0].position[0], SKILL_ORBIT_RADIUS));
        assert!(close(meshes[2].position[1], SKILL_ORBIT_RADIUS));
        assert_eq!(meshes.last().map(|m| m.shape), Some(Shape::Cube));
    }

    #[test]
    fn test_skill_orbit_empty() {
        let meshes = skill_orbit(&[], SKILL_ORBIT_RADIUS);
        assert_eq!(meshes.len(), 1);
    }

    #[test]
    fn test_all_scenes_visible() {
        let scenes: [(&[Mesh], Camera); 3] = [
            (&HERO_SCENE, HERO_CAMERA),
            (&PROJECTS_SCENE, PROJECTS_CAMERA),
            (&CONTACT_SCENE, CONTACT_CAMERA),
        ];
        for (meshes, camera) in scenes {
            assert!(meshes.iter().all(|m| camera.project(m.position).is_some()));
        }
    }
}
