// Services module for business logic
pub mod package_manager;
pub mod project_directory;
pub mod scaffolder;
pub mod template_materializer;
