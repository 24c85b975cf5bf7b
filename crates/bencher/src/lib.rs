//! Fixtures shared by the micro-client benchmarks.

/// A named raw response to feed the decoder.
#[derive(Debug, Copy, Clone)]
pub struct ResponseCase {
    name: &'static str,
    file: ResponseFile,
}

impl ResponseCase {
    pub const fn new(name: &'static str, file: ResponseFile) -> Self {
        Self { name, file }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn file(&self) -> &ResponseFile {
        &self.file
    }

    /// Bytes per iteration, for throughput reporting.
    pub fn len(&self) -> u64 {
        self.file.content.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.file.content.is_empty()
    }
}

/// A captured response kept under `resources/response`.
#[derive(Debug, Copy, Clone)]
pub struct ResponseFile {
    file_name: &'static str,
    content: &'static str,
}

impl ResponseFile {
    pub const fn new(file_name: &'static str, content: &'static str) -> Self {
        Self { file_name, content }
    }

    pub fn content(&self) -> &'static str {
        self.content
    }

    pub fn file_name(&self) -> &'static str {
        self.file_name
    }
}
