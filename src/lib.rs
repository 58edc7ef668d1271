//! meshflip: flipbook mesh animation.
//!
//! Simulates motion by swapping whole pre-baked meshes on an entity, driven by
//! an explicit per-frame tick. The animator core is plain Rust; the ECS
//! components, resources, systems and events wire it into a `bevy_ecs` world.
//!
//! - [`components`] – the animator, clips, mesh handles and the mesh slot
//! - [`events`] – playback control through observers
//! - [`resources`] – clip store, configuration and simulation time
//! - [`systems`] – time update and flipbook playback
//! - [`error`] – construction and configuration errors

pub mod components;
pub mod error;
pub mod events;
pub mod resources;
pub mod systems;
