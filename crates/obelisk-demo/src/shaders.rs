//! Fixed shader source for the pyramid, embedded at compile time.
//!
//! The source is not user-configurable; it is passed explicitly into the
//! shader layer (no process-wide globals) so tests can substitute alternates.

pub const PYRAMID_VERT: &str = include_str!("shaders/pyramid.vert");
pub const PYRAMID_FRAG: &str = include_str!("shaders/pyramid.frag");

#[cfg(test)]
mod tests {
    use super::*;
    use obelisk_engine::shader::ShaderSet;

    #[test]
    fn embedded_source_pair_compiles() {
        let set = ShaderSet::compile(PYRAMID_VERT, PYRAMID_FRAG).unwrap();
        assert!(!set.vertex_spirv().is_empty());
        assert!(!set.fragment_spirv().is_empty());
    }
}
