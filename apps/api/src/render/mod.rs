//! Document-generation pipeline: escape → render sections → assemble the
//! LaTeX template → stage in storage → compile → publish the PDF.

pub mod compiler;
pub mod escape;
pub mod handlers;
pub mod pipeline;
pub mod sections;
pub mod template;
