/// What the frame loop should do after a surface texture could not be acquired.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Lost or outdated surface was configured again.
    Reconfigured,
    /// Timeout or other transient failure.
    SkipFrame,
    /// Out of memory.
    Fatal,
}
