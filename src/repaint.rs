/// Woken when background work finishes, so the next frame can pick it up.
pub trait Repaint: Clone + Send + Sync + 'static {
    fn repaint(&self);
}

impl Repaint for () {
    fn repaint(&self) {}
}

impl Repaint for egui::Context {
    fn repaint(&self) {
        self.request_repaint();
    }
}
