use thiserror::Error;

/// Shader pipeline stage.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl Stage {
    fn kind(self) -> shaderc::ShaderKind {
        match self {
            Stage::Vertex => shaderc::ShaderKind::Vertex,
            Stage::Fragment => shaderc::ShaderKind::Fragment,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Stage::Vertex => "vertex",
            Stage::Fragment => "fragment",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors from building an executable shader program.
///
/// There is no fallback program; every variant is fatal at startup.
#[derive(Error, Debug)]
pub enum ShaderError {
    #[error("{stage} shader failed to compile:\n{log}")]
    Compile { stage: Stage, log: String },

    #[error("shader stages failed to link into a pipeline: {log}")]
    Link { log: String },

    #[error("shaderc compiler could not be initialized")]
    CompilerUnavailable,
}

/// A matched pair of compiled SPIR-V stages.
///
/// The set is consumed when a pipeline is created from it; once linked, the
/// intermediate stage binaries are no longer needed and drop with the set.
#[derive(Debug)]
pub struct ShaderSet {
    vertex: Vec<u32>,
    fragment: Vec<u32>,
}

impl ShaderSet {
    /// Compiles both stages from GLSL source.
    ///
    /// The first failing stage aborts with [`ShaderError::Compile`] carrying
    /// the compiler's full diagnostic log.
    pub fn compile(vertex_src: &str, fragment_src: &str) -> Result<Self, ShaderError> {
        let compiler = shaderc::Compiler::new().ok_or(ShaderError::CompilerUnavailable)?;

        let vertex = compile_stage(&compiler, vertex_src, Stage::Vertex)?;
        let fragment = compile_stage(&compiler, fragment_src, Stage::Fragment)?;

        Ok(Self { vertex, fragment })
    }

    pub fn vertex_spirv(&self) -> &[u32] {
        &self.vertex
    }

    pub fn fragment_spirv(&self) -> &[u32] {
        &self.fragment
    }
}

fn compile_stage(
    compiler: &shaderc::Compiler,
    source: &str,
    stage: Stage,
) -> Result<Vec<u32>, ShaderError> {
    compiler
        .compile_into_spirv(source, stage.kind(), stage.label(), "main", None)
        .map(|artifact| artifact.as_binary().to_vec())
        .map_err(|e| ShaderError::Compile {
            stage,
            log: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_VERT: &str = r#"
        #version 450
        layout(location = 0) in vec3 position;
        void main() {
            gl_Position = vec4(position, 1.0);
        }
    "#;

    const VALID_FRAG: &str = r#"
        #version 450
        layout(location = 0) out vec4 frag_color;
        void main() {
            frag_color = vec4(1.0);
        }
    "#;

    #[test]
    fn valid_pair_compiles() {
        let set = ShaderSet::compile(VALID_VERT, VALID_FRAG).unwrap();
        assert!(!set.vertex_spirv().is_empty());
        assert!(!set.fragment_spirv().is_empty());
    }

    #[test]
    fn invalid_vertex_source_reports_vertex_stage() {
        let err = ShaderSet::compile("this is not glsl", VALID_FRAG).unwrap_err();
        match err {
            ShaderError::Compile { stage, log } => {
                assert_eq!(stage, Stage::Vertex);
                assert!(!log.is_empty());
            }
            other => panic!("expected compile error, got {other}"),
        }
    }

    #[test]
    fn invalid_fragment_source_reports_fragment_stage() {
        let err = ShaderSet::compile(VALID_VERT, "void main(").unwrap_err();
        match err {
            ShaderError::Compile { stage, .. } => assert_eq!(stage, Stage::Fragment),
            other => panic!("expected compile error, got {other}"),
        }
    }
}
