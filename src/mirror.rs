//! Presentation mirroring port.

/// Mirrors state onto the host's presentation surface, e.g. as an attribute
/// on the document root element. The UI shell supplies the implementation.
pub trait PresentationMirror {
    fn set_attribute(&self, name: &str, value: &str);
}

/// Mirror for hosts without a presentation surface; does nothing.
pub struct NoopMirror;

impl PresentationMirror for NoopMirror {
    fn set_attribute(&self, _name: &str, _value: &str) {}
}
