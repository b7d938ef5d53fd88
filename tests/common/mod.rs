//! Helpers shared by the integration tests

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Writer whose clones all append to the same in-memory buffer.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().expect("buffer lock poisoned").clone();
        String::from_utf8(bytes).expect("log output is UTF-8")
    }

    #[allow(dead_code)]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    #[allow(dead_code)]
    pub fn clear(&self) {
        self.0.lock().expect("buffer lock poisoned").clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("buffer lock poisoned")
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
