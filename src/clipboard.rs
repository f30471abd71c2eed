use crate::error::ClipboardError;

/// The system clipboard, opened on first use.
#[derive(Default)]
pub struct Clipboard {
    inner: Option<arboard::Clipboard>,
}

impl Clipboard {
    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()?,
        };
        Ok(self.inner.insert(clipboard))
    }

    pub fn read_text(&mut self) -> Result<String, ClipboardError> {
        Ok(self.handle()?.get_text()?)
    }

    pub fn write_text(&mut self, text: impl Into<String>) -> Result<(), ClipboardError> {
        let text = text.into();
        self.handle()?.set_text(text)?;
        Ok(())
    }
}
