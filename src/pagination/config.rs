use crate::config::settings::DEFAULT_PAGE_SIZE;

/// Offset/size window for the member sections endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new() -> Self {
        Self {
            offset: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new()
    }
}
