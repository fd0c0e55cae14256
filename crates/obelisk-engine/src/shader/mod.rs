//! Shader stage compilation.
//!
//! GLSL source is compiled to SPIR-V at startup with `shaderc`; the render
//! layer turns the compiled stages into a pipeline. Compilation happens
//! entirely on the CPU, so bad source is caught (and testable) without a
//! live device.

mod program;

pub use program::{ShaderError, ShaderSet, Stage};
