pub mod artifact_loader;
pub mod publisher;
pub mod report_generator;
pub mod template_renderer;
pub mod view_model_builder;
