pub mod composite;
pub mod layout;
pub mod world;

pub use composite::CompositePipeline;
pub use layout::PipelineLayouts;
pub use world::WorldPipeline;
