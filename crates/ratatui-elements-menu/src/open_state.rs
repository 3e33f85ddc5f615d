/// Ordered set of currently-expanded submenu indices.
///
/// Stale entries (a submenu unregistered while open) are tolerated; they are
/// simply never matched again and disappear on the next `clear` or close.
#[derive(Clone, Debug, Default)]
pub struct OpenState {
    opened: Vec<String>,
}

impl OpenState {
    pub fn from_openeds(openeds: &[String]) -> Self {
        Self {
            opened: openeds.to_vec(),
        }
    }

    pub fn is_open(&self, index: &str) -> bool {
        self.opened.iter().any(|i| i == index)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.opened
    }

    /// Opens `index`. No-op when already open.
    ///
    /// In exclusive mode every open submenu not on `index_path` is pruned
    /// first, then the new index is appended. Ancestors are never opened
    /// implicitly; callers open them explicitly root-to-leaf so the pruning
    /// keeps the chain intact.
    pub fn open(&mut self, index: &str, index_path: &[String], exclusive: bool) {
        if self.is_open(index) {
            return;
        }
        if exclusive {
            self.opened.retain(|i| index_path.iter().any(|p| p == i));
        }
        self.opened.push(index.to_string());
    }

    /// Removes `index`, preserving the order of the rest. No-op when absent.
    pub fn close(&mut self, index: &str) {
        if let Some(pos) = self.opened.iter().position(|i| i == index) {
            self.opened.remove(pos);
        }
    }

    pub fn clear(&mut self) {
        self.opened.clear();
    }
}
